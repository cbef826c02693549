#![forbid(unsafe_code)]

//! Integration tests: full navigation choreography against a real tween
//! runner, stepped on a deterministic clock.

use proptest::prelude::*;
use slidefx_core::scene::{NodeHandle, node};
use slidefx_core::{NavDir, Spread};
use slidefx_show::{FxEvent, ShowConfig, SlidePanel, Slideshow, TextRevealEffect};
use slidefx_tween::{SharedTweener, TweenRunner};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(120);

struct Rig {
    show: Slideshow,
    runner: Rc<RefCell<TweenRunner>>,
}

impl Rig {
    fn new(panel_count: usize, texts_per_panel: usize) -> Self {
        let runner = Rc::new(RefCell::new(TweenRunner::new()));
        let tweener: SharedTweener = runner.clone();
        let config = if panel_count == 3 {
            ShowConfig::default()
        } else {
            ShowConfig::default().labels((0..panel_count).map(|i| format!("slide {i}")))
        };
        let panels = (0..panel_count)
            .map(|_| {
                let texts: Vec<NodeHandle> = (0..texts_per_panel).map(|_| node()).collect();
                SlidePanel::new(
                    node(),
                    node(),
                    texts,
                    SharedTweener::clone(&tweener),
                    &config,
                )
                .unwrap()
            })
            .collect::<Vec<_>>();
        let show = Slideshow::new(panels, &config).unwrap();
        Self { show, runner }
    }

    fn step(&mut self, delta: Duration) {
        self.show.tick(delta);
        self.runner.borrow_mut().tick(delta);
    }

    fn run_to_idle(&mut self) {
        for _ in 0..512 {
            if !self.show.is_animating() {
                return;
            }
            self.step(TICK);
        }
        panic!("transition never settled");
    }

    fn settle_tweens(&mut self) {
        self.runner.borrow_mut().tick(Duration::from_secs(5));
    }

    fn text_opacities(&self, panel: usize) -> Vec<f64> {
        self.show.panels()[panel]
            .text_fx()
            .texts()
            .iter()
            .map(|t| t.borrow().opacity())
            .collect()
    }
}

// ============================================================================
// End-to-end: navigate next
// ============================================================================

#[test]
fn navigate_next_full_choreography() {
    let mut rig = Rig::new(3, 5);
    assert!(rig.show.navigate(NavDir::Next));
    assert!(rig.show.is_animating());
    assert_eq!(rig.show.current_index(), 1);

    // Just before midway (240 ms): no image has moved yet.
    rig.step(TICK);
    assert_eq!(rig.show.panels()[1].image_wrap().borrow().x_percent(), 0.0);

    // Midway: outgoing image departs, incoming snaps to its off-screen
    // start (+110% for next) and becomes current alongside the outgoing.
    rig.show.tick(TICK);
    assert!(rig.show.panels()[0].is_current());
    assert!(rig.show.panels()[1].is_current());
    assert_eq!(
        rig.show.panels()[1].image_wrap().borrow().x_percent(),
        110.0
    );
    assert_eq!(rig.show.panels()[1].image_wrap().borrow().opacity(), 1.0);
    rig.runner.borrow_mut().tick(TICK);
    assert_eq!(rig.text_opacities(1)[2], 0.0, "incoming center primed hidden");
    assert!(
        rig.show.panels()[0].text_fx().is_running(),
        "midway precedes outgoing completion"
    );
    assert!(
        !rig.show.panels()[1].text_fx().is_running(),
        "midway precedes the incoming reveal"
    );

    rig.run_to_idle();
    rig.settle_tweens();

    assert_eq!(rig.show.current_index(), 1);
    assert!(!rig.show.is_animating());
    assert!(!rig.show.panels()[0].is_current());
    assert!(rig.show.panels()[1].is_current());
    // Outgoing text fully hidden; incoming shows only its center line.
    assert_eq!(rig.text_opacities(0), vec![0.0; 5]);
    assert_eq!(rig.text_opacities(1), vec![0.0, 0.0, 1.0, 0.0, 0.0]);
    // Outgoing slid off to the left, incoming settled centered.
    assert_eq!(
        rig.show.panels()[0].image_wrap().borrow().x_percent(),
        -110.0
    );
    assert_eq!(rig.show.panels()[1].image_wrap().borrow().x_percent(), 0.0);
    // Labels rotated to index 1.
    assert_eq!(rig.show.nav_labels().prev, "about me");
    assert_eq!(rig.show.nav_labels().curr, "experience");
    assert_eq!(rig.show.nav_labels().next, "skills");
}

// ============================================================================
// End-to-end: wrap-around and lock
// ============================================================================

#[test]
fn navigate_prev_wraps_to_last_panel() {
    let mut rig = Rig::new(4, 5);
    assert!(rig.show.navigate(NavDir::Prev));
    assert_eq!(rig.show.current_index(), 3);
    rig.run_to_idle();
    assert!(rig.show.panels()[3].is_current());
    assert_eq!(
        rig.show
            .panels()
            .iter()
            .filter(|p| p.is_current())
            .count(),
        1
    );
}

#[test]
fn queued_clicks_are_dropped_not_deferred() {
    let mut rig = Rig::new(3, 5);
    assert!(rig.show.navigate(NavDir::Next));
    for _ in 0..10 {
        rig.step(TICK);
        assert!(!rig.show.navigate(NavDir::Next));
    }
    rig.run_to_idle();
    // Exactly one navigation landed.
    assert_eq!(rig.show.current_index(), 1);
}

#[test]
fn back_and_forth_returns_to_start() {
    let mut rig = Rig::new(3, 5);
    assert!(rig.show.navigate(NavDir::Next));
    rig.run_to_idle();
    assert!(rig.show.navigate(NavDir::Prev));
    rig.run_to_idle();
    rig.settle_tweens();
    assert_eq!(rig.show.current_index(), 0);
    assert!(rig.show.panels()[0].is_current());
    assert_eq!(rig.show.nav_labels().curr, "about me");
    assert_eq!(rig.show.panels()[0].image_wrap().borrow().x_percent(), 0.0);
}

#[test]
fn single_line_panels_still_choreograph() {
    let mut rig = Rig::new(2, 1);
    assert!(rig.show.navigate(NavDir::Next));
    rig.run_to_idle();
    assert_eq!(rig.show.current_index(), 1);
    assert_eq!(rig.text_opacities(0), vec![0.0]);
    assert_eq!(rig.text_opacities(1), vec![1.0]);
}

// ============================================================================
// Standalone effect contract
// ============================================================================

#[test]
fn standalone_midway_hook_sees_the_fullest_extent() {
    // Drive an effect directly and snapshot opacities from inside the
    // hook: at midway, every element the spread touches is lit.
    let texts: Vec<NodeHandle> = (0..5).map(|_| node()).collect();
    let observed = Rc::new(RefCell::new(Vec::new()));
    let snapshot = {
        let texts = texts.clone();
        let observed = Rc::clone(&observed);
        move || {
            let opacities: Vec<f64> = texts.iter().map(|t| t.borrow().opacity()).collect();
            observed.borrow_mut().push(opacities);
        }
    };

    let mut fx = TextRevealEffect::new(texts, &ShowConfig::default()).unwrap();
    fx.hide_with(Spread::Both, Some(Box::new(snapshot)));
    let mut events = Vec::new();
    for _ in 0..16 {
        events.extend(fx.tick(TICK));
        if !fx.is_running() {
            break;
        }
    }

    assert_eq!(events, vec![FxEvent::Midway, FxEvent::Finished]);
    assert_eq!(observed.borrow().as_slice(), &[vec![1.0; 5]]);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn completed_navigations_track_cyclic_neighbors(
        panel_count in 2usize..7,
        moves in proptest::collection::vec(prop::bool::ANY, 0..12),
    ) {
        let mut rig = Rig::new(panel_count, 3);
        let mut expected = 0usize;
        for forward in moves {
            let dir = if forward { NavDir::Next } else { NavDir::Prev };
            prop_assert!(rig.show.navigate(dir));
            expected = if forward {
                (expected + 1) % panel_count
            } else {
                (expected + panel_count - 1) % panel_count
            };
            prop_assert_eq!(rig.show.current_index(), expected);
            rig.run_to_idle();
            // Steady state: exactly one current marker, on the new index.
            let markers: Vec<bool> =
                rig.show.panels().iter().map(|p| p.is_current()).collect();
            prop_assert_eq!(markers.iter().filter(|&&c| c).count(), 1);
            prop_assert!(markers[expected]);
        }
    }
}
