//! Navigation and spread orientations.
//!
//! Two distinct axes are kept as two distinct types: [`NavDir`] orients a
//! slide transition (which way panels travel), [`Spread`] selects which
//! side(s) of the center text element a stagger step touches. Both parse
//! from strings fail-fast: a malformed token is a domain error at the
//! boundary, never a silent default.

use crate::error::Error;
use std::str::FromStr;

/// Navigation orientation for a slide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavDir {
    /// Move to the cyclic predecessor; panels travel rightward.
    Prev,
    /// Move to the cyclic successor; panels travel leftward.
    Next,
}

impl NavDir {
    /// Sign of off-screen travel for an exiting panel: `Next` exits left.
    #[must_use]
    pub const fn exit_sign(self) -> f64 {
        match self {
            Self::Next => -1.0,
            Self::Prev => 1.0,
        }
    }

    /// Sign of the off-screen start for an entering panel: `Next` enters
    /// from the right.
    #[must_use]
    pub const fn enter_sign(self) -> f64 {
        -self.exit_sign()
    }
}

impl FromStr for NavDir {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prev" => Ok(Self::Prev),
            "next" => Ok(Self::Next),
            other => Err(Error::InvalidDirection(other.to_owned())),
        }
    }
}

impl std::fmt::Display for NavDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Prev => "prev",
            Self::Next => "next",
        })
    }
}

/// Which side(s) of the center element a stagger step toggles.
///
/// At step offset `k`, `Up` touches the element at `center - k`, `Down`
/// the element at `center + k`, and `Both` the symmetric pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Spread {
    /// Only elements above the center.
    Up,
    /// Only elements below the center.
    Down,
    /// Both symmetric elements per step.
    #[default]
    Both,
}

impl Spread {
    /// Whether this spread touches the element above the center.
    #[must_use]
    pub const fn touches_up(self) -> bool {
        matches!(self, Self::Up | Self::Both)
    }

    /// Whether this spread touches the element below the center.
    #[must_use]
    pub const fn touches_down(self) -> bool {
        matches!(self, Self::Down | Self::Both)
    }
}

impl FromStr for Spread {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "both" => Ok(Self::Both),
            other => Err(Error::InvalidDirection(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Spread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Both => "both",
        })
    }
}
