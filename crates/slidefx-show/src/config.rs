//! Slideshow configuration.
//!
//! All the timing knobs and the cyclic label list in one place. The
//! defaults reproduce the original design: 120 ms stagger steps with a
//! one-step idle tail, 3 s panel exit, 4 s panel entry (entry slower than
//! exit on purpose, for a settling feel), 110% off-screen travel.

use std::time::Duration;

/// Timing and label configuration for a slideshow.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShowConfig {
    /// Delay between show-phase stagger steps.
    pub step_show: Duration,
    /// Delay between hide-phase stagger steps.
    pub step_hide: Duration,
    /// Idle tail appended after the final stagger step.
    pub end_idle: Duration,
    /// Panel entry duration.
    pub image_show: Duration,
    /// Panel exit duration.
    pub image_hide: Duration,
    /// Off-screen travel distance, in percent of panel width.
    pub travel_percent: f64,
    /// One label per panel, in panel order.
    pub labels: Vec<String>,
}

impl Default for ShowConfig {
    fn default() -> Self {
        let step = Duration::from_millis(120);
        Self {
            step_show: step,
            step_hide: step,
            end_idle: step,
            image_show: Duration::from_secs(4),
            image_hide: Duration::from_secs(3),
            travel_percent: 110.0,
            labels: vec![
                "about me".to_owned(),
                "experience".to_owned(),
                "skills".to_owned(),
            ],
        }
    }
}

impl ShowConfig {
    /// Set both stagger step delays at once.
    #[must_use]
    pub fn step(mut self, delay: Duration) -> Self {
        self.step_show = delay;
        self.step_hide = delay;
        self
    }

    /// Set the idle tail.
    #[must_use]
    pub fn idle(mut self, idle: Duration) -> Self {
        self.end_idle = idle;
        self
    }

    /// Set the panel entry/exit durations.
    #[must_use]
    pub fn image_durations(mut self, show: Duration, hide: Duration) -> Self {
        self.image_show = show;
        self.image_hide = hide;
        self
    }

    /// Set the off-screen travel distance in percent.
    #[must_use]
    pub fn travel(mut self, percent: f64) -> Self {
        self.travel_percent = percent;
        self
    }

    /// Replace the label list.
    #[must_use]
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }
}
