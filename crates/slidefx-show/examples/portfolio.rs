//! Deterministic portfolio walkthrough.
//!
//! Builds the classic three-panel show, navigates forward twice and back
//! once, and prints the choreography as it unfolds on a fixed 60 ms step.
//!
//! ```sh
//! cargo run -p slidefx-show --example portfolio
//! ```

use slidefx_core::NavDir;
use slidefx_core::scene::{NodeHandle, node};
use slidefx_show::{ShowConfig, SlidePanel, Slideshow};
use slidefx_tween::{SharedTweener, TweenRunner};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_time::Instant;

const STEP: Duration = Duration::from_millis(60);

fn main() {
    tracing_subscriber::fmt::init();

    let runner = Rc::new(RefCell::new(TweenRunner::new()));
    let tweener: SharedTweener = runner.clone();
    let config = ShowConfig::default();
    let panels = (0..3)
        .map(|_| {
            let texts: Vec<NodeHandle> = (0..5).map(|_| node()).collect();
            SlidePanel::new(
                node(),
                node(),
                texts,
                SharedTweener::clone(&tweener),
                &config,
            )
            .expect("well-formed panel")
        })
        .collect::<Vec<_>>();
    let mut show = Slideshow::new(panels, &config).expect("well-formed slideshow");

    let started = Instant::now();
    let mut clock = Duration::ZERO;
    for dir in [NavDir::Next, NavDir::Next, NavDir::Prev] {
        assert!(show.navigate(dir));
        println!(
            "[{clock:>7.2?}] navigate {dir}: -> index {}, labels {}/{}/{}",
            show.current_index(),
            show.nav_labels().prev,
            show.nav_labels().curr,
            show.nav_labels().next,
        );
        let mut was_current: Vec<bool> = show.panels().iter().map(SlidePanel::is_current).collect();
        while show.is_animating() {
            show.tick(STEP);
            runner.borrow_mut().tick(STEP);
            clock += STEP;
            let now: Vec<bool> = show.panels().iter().map(SlidePanel::is_current).collect();
            if now != was_current {
                println!("[{clock:>7.2?}]   current markers {was_current:?} -> {now:?}");
                was_current = now;
            }
        }
        println!("[{clock:>7.2?}]   settled on '{}'", show.nav_labels().curr);
    }

    // Let the slower image tweens coast to rest.
    while !runner.borrow().is_idle() {
        runner.borrow_mut().tick(STEP);
        clock += STEP;
    }
    println!(
        "[{clock:>7.2?}] all tweens idle (wall time {:?})",
        started.elapsed()
    );
}
