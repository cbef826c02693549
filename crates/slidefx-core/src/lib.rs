#![forbid(unsafe_code)]

//! Core types for the slidefx slideshow engine.
//!
//! This crate holds the pieces every other slidefx crate builds on:
//!
//! - [`scene`]: retained scene nodes standing in for host-document nodes,
//!   with the animatable property set (horizontal offset + opacity).
//! - [`direction`]: navigation and spread orientations, parsed fail-fast.
//! - [`error`]: the domain error taxonomy. All failures are construction
//!   or boundary errors; nothing here performs fallible I/O.
//!
//! # Ownership model
//!
//! The engine is single-threaded and cooperatively scheduled. Scene nodes
//! are shared between their owning panel and the tween runner via
//! [`scene::NodeHandle`] (`Rc<RefCell<_>>`); mutation happens only from
//! `tick` drivers, never concurrently.

pub mod direction;
pub mod error;
pub mod scene;

pub use direction::{NavDir, Spread};
pub use error::Error;
pub use scene::{NodeHandle, NodeProps, PropPatch, SceneNode};
