//! Retained scene nodes: the engine's stand-in for host-document nodes.
//!
//! The host document is consumed, not owned, so the engine models each
//! node it animates as a [`SceneNode`] carrying the animatable property
//! set ([`NodeProps`]). Visual presentation is a pure projection of these
//! fields; nothing here draws.
//!
//! # Invariants
//!
//! 1. Nodes are shared single-threaded via [`NodeHandle`]
//!    (`Rc<RefCell<_>>`); borrows are confined to single `tick` calls.
//! 2. Opacity is kept in `0.0..=1.0`; writers clamp.
//! 3. A [`PropPatch`] only overwrites the fields it names.

use std::cell::RefCell;
use std::rc::Rc;

/// The animatable property set of one scene node.
///
/// `x_percent` is the horizontal translation in percent of the node's own
/// width (the original design animates panels 110% off-screen), `opacity`
/// is the usual 0-transparent..1-opaque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeProps {
    /// Horizontal translation, in percent of node width.
    pub x_percent: f64,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
}

impl Default for NodeProps {
    fn default() -> Self {
        Self {
            x_percent: 0.0,
            opacity: 1.0,
        }
    }
}

/// A partial property set: only the named fields are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PropPatch {
    /// Horizontal translation override, if any.
    pub x_percent: Option<f64>,
    /// Opacity override, if any.
    pub opacity: Option<f64>,
}

impl PropPatch {
    /// A patch that sets only the horizontal translation.
    #[must_use]
    pub const fn x(x_percent: f64) -> Self {
        Self {
            x_percent: Some(x_percent),
            opacity: None,
        }
    }

    /// A patch that sets only the opacity.
    #[must_use]
    pub const fn opacity(opacity: f64) -> Self {
        Self {
            x_percent: None,
            opacity: Some(opacity),
        }
    }

    /// Add an opacity override to this patch.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// True when the patch names no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x_percent.is_none() && self.opacity.is_none()
    }
}

/// One retained scene node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneNode {
    props: NodeProps,
}

impl SceneNode {
    /// Create a node with the given starting properties.
    #[must_use]
    pub fn new(props: NodeProps) -> Self {
        Self { props }
    }

    /// Current properties.
    #[must_use]
    pub fn props(&self) -> NodeProps {
        self.props
    }

    /// Current opacity.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.props.opacity
    }

    /// Current horizontal translation in percent.
    #[must_use]
    pub fn x_percent(&self) -> f64 {
        self.props.x_percent
    }

    /// Set opacity, clamped to `0.0..=1.0`.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.props.opacity = opacity.clamp(0.0, 1.0);
    }

    /// Set the horizontal translation in percent.
    pub fn set_x_percent(&mut self, x_percent: f64) {
        self.props.x_percent = x_percent;
    }

    /// Apply a partial property patch.
    pub fn apply(&mut self, patch: PropPatch) {
        if let Some(x) = patch.x_percent {
            self.props.x_percent = x;
        }
        if let Some(o) = patch.opacity {
            self.set_opacity(o);
        }
    }
}

/// Shared handle to a scene node.
///
/// Single-threaded shared ownership: panels keep handles to their own
/// nodes, the tween runner keeps handles to the nodes it is animating.
pub type NodeHandle = Rc<RefCell<SceneNode>>;

/// Create a fresh node handle with default properties.
#[must_use]
pub fn node() -> NodeHandle {
    Rc::new(RefCell::new(SceneNode::default()))
}

/// Create a fresh node handle with the given starting properties.
#[must_use]
pub fn node_with(props: NodeProps) -> NodeHandle {
    Rc::new(RefCell::new(SceneNode::new(props)))
}
