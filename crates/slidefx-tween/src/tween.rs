//! Tween descriptors.
//!
//! A [`Tween`] names a node, a duration, an easing curve, optional
//! starting-property overrides, and ending property values. A
//! [`TweenBatch`] groups tweens under one shared start instant: every
//! member begins together, the way the original timeline pinned its panel
//! tweens to a common label.

use slidefx_core::scene::{NodeHandle, PropPatch};
use std::time::Duration;

use crate::ease::Ease;

/// One property animation against one scene node.
#[derive(Debug, Clone)]
pub struct Tween {
    /// The node being animated.
    pub node: NodeHandle,
    /// Wall-clock length of the animation.
    pub duration: Duration,
    /// Easing curve.
    pub ease: Ease,
    /// Properties forced onto the node at start, before the first sample.
    pub start_at: PropPatch,
    /// Target property values; unnamed fields are left where they are.
    pub end: PropPatch,
}

impl Tween {
    /// Describe a tween toward `end` over `duration`.
    #[must_use]
    pub fn to(node: &NodeHandle, duration: Duration, end: PropPatch) -> Self {
        Self {
            node: NodeHandle::clone(node),
            duration,
            ease: Ease::default(),
            start_at: PropPatch::default(),
            end,
        }
    }

    /// Set the easing curve.
    #[must_use]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Force starting properties before the first sample.
    #[must_use]
    pub fn start_at(mut self, start_at: PropPatch) -> Self {
        self.start_at = start_at;
        self
    }
}

/// Tweens that start together.
#[derive(Debug, Clone, Default)]
pub struct TweenBatch {
    tweens: Vec<Tween>,
}

impl TweenBatch {
    /// An empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tween to the shared start.
    #[must_use]
    pub fn with(mut self, tween: Tween) -> Self {
        self.tweens.push(tween);
        self
    }

    /// Number of tweens in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// True when the batch holds no tweens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Consume the batch into its tweens.
    #[must_use]
    pub fn into_tweens(self) -> Vec<Tween> {
        self.tweens
    }

    /// Borrow the tweens.
    #[must_use]
    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }
}
