#![forbid(unsafe_code)]

//! Staggered-reveal slideshow engine.
//!
//! Three cooperating pieces animate a portfolio-style slideshow:
//!
//! - [`text_fx::TextRevealEffect`] staggers show/hide of a symmetric text
//!   stack around its center element.
//! - [`slide::SlidePanel`] wraps one slide's image pair and its text
//!   effect, delegating image moves to the external tweening seam.
//! - [`slideshow::Slideshow`] serializes navigation, owns the current
//!   index, and choreographs the handoff: the outgoing text hide's midway
//!   point swaps the images, its completion starts the incoming reveal.
//!
//! Everything is driven by `tick(delta)` calls from the host loop; the
//! engine schedules no timers and spawns no threads.
//!
//! # Example
//!
//! ```
//! use slidefx_core::{NavDir, scene::node};
//! use slidefx_show::{ShowConfig, SlidePanel, Slideshow};
//! use slidefx_tween::{SharedTweener, TweenRunner, shared};
//! use std::time::Duration;
//!
//! let tweener: SharedTweener = shared(TweenRunner::new());
//! let config = ShowConfig::default();
//! let panels = (0..3)
//!     .map(|_| {
//!         let texts = (0..5).map(|_| node()).collect();
//!         SlidePanel::new(node(), node(), texts, SharedTweener::clone(&tweener), &config)
//!     })
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! let mut show = Slideshow::new(panels, &config).unwrap();
//!
//! assert!(show.navigate(NavDir::Next));
//! while show.is_animating() {
//!     show.tick(Duration::from_millis(16));
//! }
//! assert_eq!(show.current_index(), 1);
//! ```

pub mod config;
pub mod schedule;
pub mod slide;
pub mod slideshow;
pub mod text_fx;

pub use config::ShowConfig;
pub use slide::SlidePanel;
pub use slideshow::{NavLabels, Slideshow};
pub use text_fx::{FxEvent, MidwayHook, TextRevealEffect};
