//! Domain errors for slideshow construction and navigation input.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | `InvalidDirection` | Malformed direction token | Rejected at the boundary |
//! | `EmptyTextStack` | Panel with zero text nodes | Construction fails |
//! | `EvenTextStack` | Symmetric stepping needs an odd count | Construction fails |
//! | `NoPanels` | Slideshow with zero panels | Construction fails |
//! | `LabelCountMismatch` | Label list length != panel count | Construction fails |
//!
//! There is no retry or recovery path: every failure is local and fatal to
//! initialization, since the engine has no transient or I/O-bound work.

/// Errors from slideshow construction and boundary validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A direction string did not name a known direction.
    InvalidDirection(String),
    /// A panel was constructed with no text elements.
    EmptyTextStack,
    /// A panel was constructed with an even number of text elements.
    /// Symmetric center-out stepping would index past one end of the stack.
    EvenTextStack(usize),
    /// A slideshow was constructed with no panels.
    NoPanels,
    /// The cyclic label list does not have one entry per panel.
    LabelCountMismatch {
        /// Number of labels supplied.
        labels: usize,
        /// Number of panels supplied.
        panels: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDirection(s) => write!(f, "invalid direction: '{s}'"),
            Self::EmptyTextStack => write!(f, "panel has no text elements"),
            Self::EvenTextStack(n) => {
                write!(f, "panel has {n} text elements; an odd count is required")
            }
            Self::NoPanels => write!(f, "slideshow has no panels"),
            Self::LabelCountMismatch { labels, panels } => {
                write!(f, "label count {labels} does not match panel count {panels}")
            }
        }
    }
}

impl std::error::Error for Error {}
