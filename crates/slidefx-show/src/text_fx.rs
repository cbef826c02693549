//! Staggered text reveal effect.
//!
//! A [`TextRevealEffect`] owns an odd-length stack of text nodes and
//! animates them symmetrically around the middle one. Runs are compiled
//! into a pure [`schedule`](crate::schedule) and driven by
//! [`tick`](TextRevealEffect::tick); control points surface both as
//! returned [`FxEvent`]s (in firing order) and, for the midway point, as
//! an optional caller-supplied hook.
//!
//! # Invariants
//!
//! 1. Within one run, `Midway` fires strictly before `Finished`.
//! 2. After [`hide`](TextRevealEffect::hide) completes, every element is
//!    hidden. After [`show`](TextRevealEffect::show) completes, only the
//!    center element is visible; every other element matches the post-hide
//!    baseline.
//! 3. A run, once started, always plays to completion; starting a new run
//!    replaces an armed one (serialization is the controller's job).

use slidefx_core::direction::Spread;
use slidefx_core::error::Error;
use slidefx_core::scene::NodeHandle;
use std::time::Duration;

use crate::config::ShowConfig;
use crate::schedule::{self, Action, Schedule, Toggle};

/// Caller-supplied hook invoked when a run reaches its fullest extent.
pub type MidwayHook = Box<dyn FnMut()>;

/// Control events drained from [`TextRevealEffect::tick`], in firing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FxEvent {
    /// The sweep reached its fullest extent; the trailing collapse follows.
    Midway,
    /// The run completed (after the idle tail).
    Finished,
}

struct Run {
    schedule: Schedule,
    spread: Spread,
    midway: Option<MidwayHook>,
    elapsed: Duration,
    cursor: usize,
}

/// Staggered show/hide effect over an odd-length stack of text nodes.
pub struct TextRevealEffect {
    texts: Vec<NodeHandle>,
    middle: usize,
    step_show: Duration,
    step_hide: Duration,
    end_idle: Duration,
    run: Option<Run>,
}

impl TextRevealEffect {
    /// Build the effect over `texts` with the cadence from `config`.
    ///
    /// Fails with [`Error::EmptyTextStack`] for an empty stack and
    /// [`Error::EvenTextStack`] for an even one (symmetric stepping would
    /// index past an end of the stack).
    pub fn new(texts: Vec<NodeHandle>, config: &ShowConfig) -> Result<Self, Error> {
        if texts.is_empty() {
            return Err(Error::EmptyTextStack);
        }
        if texts.len() % 2 == 0 {
            return Err(Error::EvenTextStack(texts.len()));
        }
        let middle = texts.len() / 2;
        Ok(Self {
            texts,
            middle,
            step_show: config.step_show,
            step_hide: config.step_hide,
            end_idle: config.end_idle,
            run: None,
        })
    }

    /// Number of text nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Always false: construction rejects empty stacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the center (main) element.
    #[must_use]
    pub fn middle(&self) -> usize {
        self.middle
    }

    /// The text node handles, in stack order.
    #[must_use]
    pub fn texts(&self) -> &[NodeHandle] {
        &self.texts
    }

    /// True while a run is armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Force the center element's opacity (the controller primes the
    /// incoming panel's center to hidden at the midpoint handoff).
    pub fn set_center_opacity(&self, opacity: f64) {
        self.texts[self.middle].borrow_mut().set_opacity(opacity);
    }

    /// Start the reveal run: sweep in from the edges, then collapse back
    /// leaving only the center visible.
    pub fn show(&mut self, spread: Spread) {
        self.show_with(spread, None);
    }

    /// [`show`](Self::show) with a midway hook.
    pub fn show_with(&mut self, spread: Spread, midway: Option<MidwayHook>) {
        let schedule = schedule::reveal(self.middle, self.step_show, self.step_hide, self.end_idle);
        self.arm(schedule, spread, midway, "show");
    }

    /// Start the hide run: flourish outward from the center, then collapse
    /// everything to hidden.
    pub fn hide(&mut self, spread: Spread) {
        self.hide_with(spread, None);
    }

    /// [`hide`](Self::hide) with a midway hook.
    pub fn hide_with(&mut self, spread: Spread, midway: Option<MidwayHook>) {
        let schedule = schedule::conceal(self.middle, self.step_show, self.step_hide, self.end_idle);
        self.arm(schedule, spread, midway, "hide");
    }

    fn arm(&mut self, schedule: Schedule, spread: Spread, midway: Option<MidwayHook>, kind: &str) {
        #[cfg(feature = "tracing")]
        tracing::debug!(kind, ?spread, total_ms = schedule.total().as_millis(), "text run armed");
        let _ = kind;
        self.run = Some(Run {
            schedule,
            spread,
            midway,
            elapsed: Duration::ZERO,
            cursor: 0,
        });
    }

    /// Advance the armed run by `delta`, applying every due step and
    /// returning the control events that fired, in order. Idle effects
    /// return an empty vec.
    pub fn tick(&mut self, delta: Duration) -> Vec<FxEvent> {
        let mut events = Vec::new();
        let texts = &self.texts;
        let middle = self.middle;
        let Some(run) = self.run.as_mut() else {
            return events;
        };
        run.elapsed = run.elapsed.saturating_add(delta);
        let entries = run.schedule.entries();
        while run.cursor < entries.len() && entries[run.cursor].at <= run.elapsed {
            match entries[run.cursor].action {
                Action::Step { offset, toggle } => {
                    apply_step(texts, middle, run.spread, offset, toggle);
                }
                Action::Midway => {
                    if let Some(hook) = run.midway.as_mut() {
                        hook();
                    }
                    events.push(FxEvent::Midway);
                }
                Action::Finish => {
                    events.push(FxEvent::Finished);
                }
            }
            run.cursor += 1;
        }
        if run.cursor == entries.len() {
            self.run = None;
            #[cfg(feature = "tracing")]
            tracing::debug!("text run finished");
        }
        events
    }
}

impl std::fmt::Debug for TextRevealEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRevealEffect")
            .field("len", &self.texts.len())
            .field("middle", &self.middle)
            .field("running", &self.run.is_some())
            .finish()
    }
}

fn apply_step(texts: &[NodeHandle], middle: usize, spread: Spread, offset: usize, toggle: Toggle) {
    let opacity = match toggle {
        Toggle::Show => 1.0,
        Toggle::Hide => 0.0,
    };
    if spread.touches_up() {
        texts[middle - offset].borrow_mut().set_opacity(opacity);
    }
    if spread.touches_down() {
        texts[middle + offset].borrow_mut().set_opacity(opacity);
    }
}
