//! Pure stagger schedules.
//!
//! A schedule compiles one effect run into absolute-time entries before
//! anything moves: the offset traversal, direction bounds, and the
//! midway/finish control points all live here as plain data. The driver
//! in [`crate::text_fx`] only compares timestamps; it never reasons about
//! offsets.
//!
//! Both runs are two-phase sweeps around the center element of an
//! odd-length stack with middle index `m`:
//!
//! - [`reveal`] (the incoming flourish): phase A shows offsets `m..=0`
//!   inward from the edges, ending on the center; midway fires one
//!   show-interval later; phase B re-hides offsets `m..=1` inward, leaving
//!   only the center lit.
//! - [`conceal`] (the outgoing collapse): phase A shows offsets `1..=m`
//!   outward from the center; midway fires one show-interval after the
//!   last; phase B hides offsets `0..=m` outward, center first, leaving
//!   everything dark.
//!
//! # Invariants
//!
//! 1. Entry timestamps are non-decreasing; co-timed entries fire in vector
//!    order, and `Midway` is pushed before the phase-B step it coincides
//!    with (callback-before-toggle, as the timer-chained original did
//!    synchronously).
//! 2. `Midway` appears exactly once, strictly before `Finish`.
//! 3. Every step offset lies in `0..=m`.
//! 4. `Finish` is the last entry: one hide-interval past the final hide
//!    step, plus the idle tail.

use std::time::Duration;

/// Whether a step raises or drops its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Set the stepped elements fully visible.
    Show,
    /// Set the stepped elements fully hidden.
    Hide,
}

/// One schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Toggle the pair of elements at `center ± offset` (per spread).
    Step {
        /// Distance from the center element.
        offset: usize,
        /// Show or hide.
        toggle: Toggle,
    },
    /// The sweep has reached its fullest extent; the trailing collapse
    /// follows. Caller hooks fire here.
    Midway,
    /// The run is complete.
    Finish,
}

/// A schedule entry pinned to an absolute time from run start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// When the action fires, measured from the start of the run.
    pub at: Duration,
    /// What fires.
    pub action: Action,
}

/// A compiled effect run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<Entry>,
}

impl Schedule {
    /// The entries, in firing order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Total run length (the `Finish` timestamp).
    #[must_use]
    pub fn total(&self) -> Duration {
        self.entries.last().map_or(Duration::ZERO, |e| e.at)
    }
}

/// Compile the incoming reveal for a stack with middle index `middle`.
///
/// `show_iv`/`hide_iv` are the per-step delays of the two phases; `idle`
/// is the tail appended after the final step.
#[must_use]
pub fn reveal(middle: usize, show_iv: Duration, hide_iv: Duration, idle: Duration) -> Schedule {
    let m = middle as u32;
    let mut entries = Vec::with_capacity(2 * middle + 3);
    // Phase A: edges inward, ending on the center.
    for k in 0..=m {
        entries.push(Entry {
            at: show_iv * k,
            action: Action::Step {
                offset: middle - k as usize,
                toggle: Toggle::Show,
            },
        });
    }
    let midway_at = show_iv * (m + 1);
    entries.push(Entry {
        at: midway_at,
        action: Action::Midway,
    });
    // Phase B: edges inward again, stopping short of the center.
    for j in 0..m {
        entries.push(Entry {
            at: midway_at + hide_iv * j,
            action: Action::Step {
                offset: middle - j as usize,
                toggle: Toggle::Hide,
            },
        });
    }
    entries.push(Entry {
        at: midway_at + hide_iv * m + idle,
        action: Action::Finish,
    });
    Schedule { entries }
}

/// Compile the outgoing collapse for a stack with middle index `middle`.
#[must_use]
pub fn conceal(middle: usize, show_iv: Duration, hide_iv: Duration, idle: Duration) -> Schedule {
    let m = middle as u32;
    let mut entries = Vec::with_capacity(2 * middle + 3);
    // Phase A: center outward, skipping the already-lit center.
    for k in 1..=m {
        entries.push(Entry {
            at: show_iv * (k - 1),
            action: Action::Step {
                offset: k as usize,
                toggle: Toggle::Show,
            },
        });
    }
    let midway_at = show_iv * m;
    entries.push(Entry {
        at: midway_at,
        action: Action::Midway,
    });
    // Phase B: center outward, center included.
    for j in 0..=m {
        entries.push(Entry {
            at: midway_at + hide_iv * j,
            action: Action::Step {
                offset: j as usize,
                toggle: Toggle::Hide,
            },
        });
    }
    entries.push(Entry {
        at: midway_at + hide_iv * (m + 1) + idle,
        action: Action::Finish,
    });
    Schedule { entries }
}
