//! The slideshow controller.
//!
//! Owns the ordered panels, the wrapped current index, the nav label
//! slots, and the transition state machine. One navigation runs through
//! three phases:
//!
//! 1. `navigate` locks the controller and starts the outgoing panel's
//!    text hide.
//! 2. At that run's midway point the images swap: outgoing slides out,
//!    the incoming panel is marked current (both panels are transiently
//!    current here), its center text is primed hidden, and its image
//!    slides in.
//! 3. When the hide run finishes, the outgoing panel loses the current
//!    marker and the incoming reveal starts; its completion unlocks the
//!    controller.
//!
//! # Invariants
//!
//! - At most one panel is current in steady state.
//! - `is_animating()` is true from a successful `navigate` until the
//!   incoming reveal finishes, and is the sole concurrency guard: a
//!   `navigate` in that window returns `false` and mutates nothing
//!   (dropped, not queued).
//! - The current index is mutated only inside `navigate`.
//!
//! # Failure Modes
//!
//! - `navigate` while transitioning: defined no-op, returns `false`.
//! - Malformed direction token: rejected by [`Slideshow::navigate_token`]
//!   with [`Error::InvalidDirection`] before any state is touched.

use slidefx_core::direction::{NavDir, Spread};
use slidefx_core::error::Error;
use std::time::Duration;

use crate::config::ShowConfig;
use crate::slide::SlidePanel;
use crate::text_fx::FxEvent;

/// The three label slots under the navigation controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLabels {
    /// Label on the previous control.
    pub prev: String,
    /// Label on the current control.
    pub curr: String,
    /// Label on the next control.
    pub next: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    HidingOutgoing {
        outgoing: usize,
        incoming: usize,
        dir: NavDir,
    },
    RevealingIncoming {
        incoming: usize,
    },
}

/// Slideshow controller over an ordered panel collection.
pub struct Slideshow {
    panels: Vec<SlidePanel>,
    labels: Vec<String>,
    current: usize,
    nav: NavLabels,
    phase: Phase,
}

impl Slideshow {
    /// Build a slideshow; panel 0 starts current and the label slots
    /// reflect index 0.
    ///
    /// Fails with [`Error::NoPanels`] for an empty collection and
    /// [`Error::LabelCountMismatch`] when the config's label list does
    /// not have one entry per panel.
    pub fn new(mut panels: Vec<SlidePanel>, config: &ShowConfig) -> Result<Self, Error> {
        if panels.is_empty() {
            return Err(Error::NoPanels);
        }
        if config.labels.len() != panels.len() {
            return Err(Error::LabelCountMismatch {
                labels: config.labels.len(),
                panels: panels.len(),
            });
        }
        panels[0].set_current(true);
        let mut show = Self {
            panels,
            labels: config.labels.clone(),
            current: 0,
            nav: NavLabels {
                prev: String::new(),
                curr: String::new(),
                next: String::new(),
            },
            phase: Phase::Idle,
        };
        show.refresh_labels();
        Ok(show)
    }

    /// Number of panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Always false: construction rejects empty collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the current panel.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// True while a navigation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// The navigation label slots.
    #[must_use]
    pub fn nav_labels(&self) -> &NavLabels {
        &self.nav
    }

    /// The panels, in order.
    #[must_use]
    pub fn panels(&self) -> &[SlidePanel] {
        &self.panels
    }

    /// Request a navigation. Returns `false` (and changes nothing) while
    /// a transition is in flight; otherwise locks the controller, moves
    /// the index to the cyclic neighbor, updates the label slots, and
    /// starts the outgoing text hide.
    pub fn navigate(&mut self, dir: NavDir) -> bool {
        if self.is_animating() {
            #[cfg(feature = "tracing")]
            tracing::debug!(%dir, "navigation dropped: transition in flight");
            return false;
        }
        let outgoing = self.current;
        let incoming = match dir {
            NavDir::Next => (self.current + 1) % self.panels.len(),
            NavDir::Prev => (self.current + self.panels.len() - 1) % self.panels.len(),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(%dir, outgoing, incoming, "navigation started");
        self.current = incoming;
        self.refresh_labels();
        self.panels[outgoing].text_fx_mut().hide(Spread::Both);
        self.phase = Phase::HidingOutgoing {
            outgoing,
            incoming,
            dir,
        };
        true
    }

    /// [`navigate`](Self::navigate) from an untrusted token; malformed
    /// tokens fail with a domain error before any state changes.
    pub fn navigate_token(&mut self, token: &str) -> Result<bool, Error> {
        Ok(self.navigate(token.parse()?))
    }

    /// Drive the in-flight transition by `delta`. Idle controllers do
    /// nothing.
    pub fn tick(&mut self, delta: Duration) {
        match self.phase {
            Phase::Idle => {}
            Phase::HidingOutgoing {
                outgoing,
                incoming,
                dir,
            } => {
                let events = self.panels[outgoing].text_fx_mut().tick(delta);
                for event in events {
                    match event {
                        FxEvent::Midway => self.swap_images(outgoing, incoming, dir),
                        FxEvent::Finished => {
                            self.panels[outgoing].set_current(false);
                            self.panels[incoming].text_fx_mut().show(Spread::Both);
                            self.phase = Phase::RevealingIncoming { incoming };
                        }
                    }
                }
            }
            Phase::RevealingIncoming { incoming } => {
                let events = self.panels[incoming].text_fx_mut().tick(delta);
                if events.contains(&FxEvent::Finished) {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(incoming, "navigation finished");
                    self.phase = Phase::Idle;
                }
            }
        }
    }

    /// The midpoint handoff: outgoing image leaves, incoming panel
    /// becomes current with a hidden center text, incoming image enters.
    fn swap_images(&mut self, outgoing: usize, incoming: usize, dir: NavDir) {
        self.panels[outgoing].hide_image(dir);
        self.panels[incoming].text_fx().set_center_opacity(0.0);
        self.panels[incoming].set_current(true);
        self.panels[incoming].show_image(dir);
    }

    fn refresh_labels(&mut self) {
        let m = self.panels.len();
        self.nav.prev = self.labels[(self.current + m - 1) % m].clone();
        self.nav.curr = self.labels[self.current].clone();
        self.nav.next = self.labels[(self.current + 1) % m].clone();
    }
}

impl std::fmt::Debug for Slideshow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slideshow")
            .field("panels", &self.panels.len())
            .field("current", &self.current)
            .field("phase", &self.phase)
            .finish()
    }
}
