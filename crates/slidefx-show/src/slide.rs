//! One slide panel: an image pair plus its text effect.
//!
//! A [`SlidePanel`] wraps the two image nodes of one slide (outer wrap and
//! inner layer, moved together so the inner can counter-parallax in the
//! host styling), the panel's [`TextRevealEffect`], and an explicit
//! `current` flag. The visual "current" treatment is a projection of that
//! flag; the panel never talks to host classes.
//!
//! Image moves delegate to the external [`Tweener`] as one batch of two
//! tweens sharing a start instant. No completion callback comes back:
//! image timing is implicit wall clock against the text cadence.

use slidefx_core::direction::NavDir;
use slidefx_core::error::Error;
use slidefx_core::scene::{NodeHandle, PropPatch};
use slidefx_tween::{Ease, SharedTweener, Tween, TweenBatch, Tweener};
use std::time::Duration;

use crate::config::ShowConfig;
use crate::text_fx::TextRevealEffect;

/// One slide's combined image and text content.
pub struct SlidePanel {
    image_wrap: NodeHandle,
    image_inner: NodeHandle,
    text_fx: TextRevealEffect,
    tweener: SharedTweener,
    image_show: Duration,
    image_hide: Duration,
    travel: f64,
    current: bool,
}

impl SlidePanel {
    /// Build a panel from its image nodes and text stack.
    ///
    /// Fails when the text stack is malformed (empty or even-length);
    /// see [`TextRevealEffect::new`].
    pub fn new(
        image_wrap: NodeHandle,
        image_inner: NodeHandle,
        texts: Vec<NodeHandle>,
        tweener: SharedTweener,
        config: &ShowConfig,
    ) -> Result<Self, Error> {
        let text_fx = TextRevealEffect::new(texts, config)?;
        Ok(Self {
            image_wrap,
            image_inner,
            text_fx,
            tweener,
            image_show: config.image_show,
            image_hide: config.image_hide,
            travel: config.travel_percent,
            current: false,
        })
    }

    /// Whether this panel carries the current marker.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.current
    }

    /// Set the current marker.
    pub fn set_current(&mut self, current: bool) {
        self.current = current;
    }

    /// The panel's text effect.
    #[must_use]
    pub fn text_fx(&self) -> &TextRevealEffect {
        &self.text_fx
    }

    /// Mutable access to the panel's text effect.
    pub fn text_fx_mut(&mut self) -> &mut TextRevealEffect {
        &mut self.text_fx
    }

    /// The outer image node.
    #[must_use]
    pub fn image_wrap(&self) -> &NodeHandle {
        &self.image_wrap
    }

    /// The inner image node.
    #[must_use]
    pub fn image_inner(&self) -> &NodeHandle {
        &self.image_inner
    }

    /// Slide the image in from the off-screen side implied by `dir`
    /// (`Next` enters from the right) to centered.
    pub fn show_image(&self, dir: NavDir) {
        let from = self.travel * dir.enter_sign();
        let batch = TweenBatch::new()
            .with(
                Tween::to(&self.image_wrap, self.image_show, PropPatch::x(0.0))
                    .ease(Ease::QuintOut)
                    .start_at(PropPatch::x(from).with_opacity(1.0)),
            )
            .with(
                Tween::to(&self.image_inner, self.image_show, PropPatch::x(0.0))
                    .ease(Ease::QuintOut)
                    .start_at(PropPatch::x(from)),
            );
        self.tweener.borrow_mut().play(batch);
    }

    /// Slide the image off-screen horizontally, signed by `dir`
    /// (`Next` exits left).
    pub fn hide_image(&self, dir: NavDir) {
        let to = self.travel * dir.exit_sign();
        let batch = TweenBatch::new()
            .with(
                Tween::to(&self.image_wrap, self.image_hide, PropPatch::x(to))
                    .ease(Ease::QuintOut),
            )
            .with(
                Tween::to(&self.image_inner, self.image_hide, PropPatch::x(to))
                    .ease(Ease::QuintOut),
            );
        self.tweener.borrow_mut().play(batch);
    }
}

impl std::fmt::Debug for SlidePanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlidePanel")
            .field("current", &self.current)
            .field("text_fx", &self.text_fx)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidefx_core::scene::node;
    use slidefx_tween::{RecordingTweener, TweenRunner, shared};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn texts(n: usize) -> Vec<NodeHandle> {
        (0..n).map(|_| node()).collect()
    }

    fn panel_with(tweener: SharedTweener) -> SlidePanel {
        SlidePanel::new(node(), node(), texts(5), tweener, &ShowConfig::default()).unwrap()
    }

    #[test]
    fn malformed_text_stack_fails_construction() {
        let tweener = shared(TweenRunner::new());
        let err = SlidePanel::new(
            node(),
            node(),
            vec![],
            Rc::clone(&tweener),
            &ShowConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, Error::EmptyTextStack);

        let err =
            SlidePanel::new(node(), node(), texts(2), tweener, &ShowConfig::default()).unwrap_err();
        assert_eq!(err, Error::EvenTextStack(2));
    }

    #[test]
    fn hide_batches_both_nodes_toward_the_exit_side() {
        let recorder = Rc::new(RefCell::new(RecordingTweener::new()));
        let tweener: SharedTweener = recorder.clone();
        let panel = panel_with(tweener);
        panel.hide_image(NavDir::Next);

        let rec = recorder.borrow();
        let batch = &rec.batches()[0];
        assert_eq!(batch.len(), 2);
        for tw in batch.tweens() {
            assert_eq!(tw.end.x_percent, Some(-110.0));
            assert_eq!(tw.ease, Ease::QuintOut);
            assert_eq!(tw.duration, Duration::from_secs(3));
            assert!(tw.start_at.is_empty());
        }
    }

    #[test]
    fn show_overrides_start_position_and_wrap_opacity() {
        let recorder = Rc::new(RefCell::new(RecordingTweener::new()));
        let tweener: SharedTweener = recorder.clone();
        let panel = panel_with(tweener);
        panel.show_image(NavDir::Prev);

        let rec = recorder.borrow();
        let batch = &rec.batches()[0];
        assert_eq!(batch.len(), 2);
        let wrap = &batch.tweens()[0];
        let inner = &batch.tweens()[1];
        // Prev enters from the left.
        assert_eq!(wrap.start_at.x_percent, Some(-110.0));
        assert_eq!(wrap.start_at.opacity, Some(1.0));
        assert_eq!(inner.start_at.x_percent, Some(-110.0));
        assert_eq!(inner.start_at.opacity, None);
        for tw in batch.tweens() {
            assert_eq!(tw.end.x_percent, Some(0.0));
            assert_eq!(tw.duration, Duration::from_secs(4));
        }
    }

    #[test]
    fn entry_is_slower_than_exit() {
        let cfg = ShowConfig::default();
        assert!(cfg.image_show > cfg.image_hide);
    }

    #[test]
    fn show_image_lands_centered_through_a_real_runner() {
        let runner = Rc::new(RefCell::new(TweenRunner::new()));
        let tweener: SharedTweener = runner.clone();
        let panel = panel_with(tweener);
        panel.image_wrap().borrow_mut().set_x_percent(-42.0);
        panel.show_image(NavDir::Next);
        // Entry start override lands immediately.
        assert_eq!(panel.image_wrap().borrow().x_percent(), 110.0);
        runner.borrow_mut().tick(Duration::from_secs(4));
        assert_eq!(panel.image_wrap().borrow().x_percent(), 0.0);
        assert_eq!(panel.image_inner().borrow().x_percent(), 0.0);
    }
}
