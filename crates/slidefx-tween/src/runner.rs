//! The tween runner: a tick-driven interpolator behind the [`Tweener`] seam.
//!
//! # Invariants
//!
//! 1. `start_at` overrides are written to the node inside `play`, before
//!    any sampling, so a later `tick` never sees the pre-override state.
//! 2. Progress is monotone per tween; a tween is retired on the first tick
//!    where its elapsed time reaches its duration, after writing its exact
//!    end values (no overshoot, no drift from eased sampling).
//! 3. When several active tweens target one node, the most recently
//!    started one writes last within a tick.
//!
//! # Failure Modes
//!
//! - Zero-duration tween: snaps to end values on the next tick.
//! - Empty batch: `play` is a no-op.

use slidefx_core::scene::{NodeHandle, NodeProps};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::ease::Ease;
use crate::tween::{Tween, TweenBatch};

/// The seam the slideshow consumes: something that accepts tween batches.
pub trait Tweener {
    /// Start every tween in the batch at the same instant.
    fn play(&mut self, batch: TweenBatch);
}

/// Shared single-threaded handle to a tweener.
pub type SharedTweener = Rc<RefCell<dyn Tweener>>;

/// Wrap a tweener in a shared handle.
#[must_use]
pub fn shared<T: Tweener + 'static>(tweener: T) -> SharedTweener {
    Rc::new(RefCell::new(tweener))
}

struct ActiveTween {
    node: NodeHandle,
    from: NodeProps,
    to: NodeProps,
    elapsed: Duration,
    duration: Duration,
    ease: Ease,
}

/// Tick-driven tween interpolator.
#[derive(Default)]
pub struct TweenRunner {
    active: Vec<ActiveTween>,
}

impl TweenRunner {
    /// Create an idle runner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of in-flight tweens.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// True when no tween is in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Advance every in-flight tween by `delta`, writing interpolated
    /// properties into the target nodes and retiring finished tweens.
    pub fn tick(&mut self, delta: Duration) {
        for tw in &mut self.active {
            tw.elapsed = tw.elapsed.saturating_add(delta);
            let t = if tw.duration.is_zero() {
                1.0
            } else {
                (tw.elapsed.as_secs_f64() / tw.duration.as_secs_f64()).min(1.0)
            };
            let k = tw.ease.apply(t);
            let mut node = tw.node.borrow_mut();
            if t >= 1.0 {
                node.set_x_percent(tw.to.x_percent);
                node.set_opacity(tw.to.opacity);
            } else {
                node.set_x_percent(lerp(tw.from.x_percent, tw.to.x_percent, k));
                node.set_opacity(lerp(tw.from.opacity, tw.to.opacity, k));
            }
        }
        let before = self.active.len();
        self.active.retain(|tw| tw.elapsed < tw.duration);
        let retired = before - self.active.len();
        if retired > 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(retired, remaining = self.active.len(), "tweens finished");
        }
    }
}

impl Tweener for TweenRunner {
    fn play(&mut self, batch: TweenBatch) {
        #[cfg(feature = "tracing")]
        tracing::debug!(tweens = batch.len(), "tween batch started");
        for tween in batch.into_tweens() {
            self.active.push(arm(tween));
        }
    }
}

fn arm(tween: Tween) -> ActiveTween {
    let Tween {
        node,
        duration,
        ease,
        start_at,
        end,
    } = tween;
    // Start overrides land before the first sample.
    node.borrow_mut().apply(start_at);
    let from = node.borrow().props();
    let mut to = from;
    if let Some(x) = end.x_percent {
        to.x_percent = x;
    }
    if let Some(o) = end.opacity {
        to.opacity = o;
    }
    ActiveTween {
        node,
        from,
        to,
        elapsed: Duration::ZERO,
        duration,
        ease,
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Test double that records every batch instead of animating.
#[cfg(feature = "test-helpers")]
#[derive(Default)]
pub struct RecordingTweener {
    batches: Vec<TweenBatch>,
}

#[cfg(feature = "test-helpers")]
impl RecordingTweener {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Batches played so far, in order.
    #[must_use]
    pub fn batches(&self) -> &[TweenBatch] {
        &self.batches
    }
}

#[cfg(feature = "test-helpers")]
impl Tweener for RecordingTweener {
    fn play(&mut self, batch: TweenBatch) {
        self.batches.push(batch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidefx_core::scene::{PropPatch, node};

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn linear_tween_hits_midpoint_and_end() {
        let n = node();
        let mut runner = TweenRunner::new();
        runner.play(TweenBatch::new().with(
            Tween::to(&n, secs(2), PropPatch::x(100.0)).ease(Ease::Linear),
        ));

        runner.tick(secs(1));
        assert!((n.borrow().x_percent() - 50.0).abs() < 1e-9);
        assert!(!runner.is_idle());

        runner.tick(secs(1));
        assert_eq!(n.borrow().x_percent(), 100.0);
        assert!(runner.is_idle());
    }

    #[test]
    fn start_overrides_apply_before_first_sample() {
        let n = node();
        let mut runner = TweenRunner::new();
        runner.play(TweenBatch::new().with(
            Tween::to(&n, secs(4), PropPatch::x(0.0))
                .start_at(PropPatch::x(110.0).with_opacity(1.0)),
        ));
        // No tick yet: the node already sits at the forced start.
        assert_eq!(n.borrow().x_percent(), 110.0);
        assert_eq!(n.borrow().opacity(), 1.0);
    }

    #[test]
    fn unnamed_end_fields_stay_put() {
        let n = node();
        n.borrow_mut().set_opacity(0.25);
        let mut runner = TweenRunner::new();
        runner.play(
            TweenBatch::new().with(Tween::to(&n, secs(1), PropPatch::x(-110.0)).ease(Ease::Linear)),
        );
        runner.tick(Duration::from_millis(500));
        assert_eq!(n.borrow().opacity(), 0.25);
    }

    #[test]
    fn zero_duration_snaps_on_next_tick() {
        let n = node();
        let mut runner = TweenRunner::new();
        runner.play(TweenBatch::new().with(Tween::to(&n, Duration::ZERO, PropPatch::x(7.0))));
        runner.tick(Duration::ZERO);
        assert_eq!(n.borrow().x_percent(), 7.0);
        assert!(runner.is_idle());
    }

    #[test]
    fn batch_members_start_together() {
        let wrap = node();
        let inner = node();
        let mut runner = TweenRunner::new();
        runner.play(
            TweenBatch::new()
                .with(Tween::to(&wrap, secs(2), PropPatch::x(100.0)).ease(Ease::Linear))
                .with(Tween::to(&inner, secs(2), PropPatch::x(100.0)).ease(Ease::Linear)),
        );
        runner.tick(secs(1));
        assert_eq!(wrap.borrow().x_percent(), inner.borrow().x_percent());
    }

    #[test]
    fn later_tween_on_same_node_writes_last() {
        let n = node();
        let mut runner = TweenRunner::new();
        runner.play(
            TweenBatch::new().with(Tween::to(&n, secs(2), PropPatch::x(100.0)).ease(Ease::Linear)),
        );
        runner.play(
            TweenBatch::new().with(Tween::to(&n, secs(2), PropPatch::x(-100.0)).ease(Ease::Linear)),
        );
        runner.tick(secs(2));
        assert_eq!(n.borrow().x_percent(), -100.0);
    }

    #[test]
    fn exact_end_values_despite_eased_sampling() {
        let n = node();
        let mut runner = TweenRunner::new();
        runner.play(TweenBatch::new().with(Tween::to(&n, secs(3), PropPatch::x(-110.0))));
        // Uneven tick sizes should still land exactly on the end value.
        runner.tick(Duration::from_millis(1100));
        runner.tick(Duration::from_millis(1100));
        runner.tick(Duration::from_millis(1100));
        assert_eq!(n.borrow().x_percent(), -110.0);
        assert!(runner.is_idle());
    }
}
