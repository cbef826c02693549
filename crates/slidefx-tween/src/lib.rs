#![forbid(unsafe_code)]

//! Tick-driven tweening service for slidefx.
//!
//! Panels describe what should move ([`Tween`] descriptors grouped into a
//! [`TweenBatch`] that starts together) and hand the batch to a
//! [`Tweener`]. The in-tree implementation, [`TweenRunner`], interpolates
//! node properties on every `tick(delta)`; nothing blocks and nothing
//! schedules timers.
//!
//! The [`Tweener`] trait is the seam: the slideshow treats the tween
//! engine as an external capability, so tests can substitute a recording
//! double (see [`RecordingTweener`], `test-helpers` feature).

pub mod ease;
pub mod runner;
pub mod tween;

pub use ease::Ease;
#[cfg(feature = "test-helpers")]
pub use runner::RecordingTweener;
pub use runner::{SharedTweener, TweenRunner, Tweener, shared};
pub use tween::{Tween, TweenBatch};
