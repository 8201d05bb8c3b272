//! Gesture interpretation
//!
//! Turns raw wheel deltas and touch positions into a navigation intent.
//! The higher a threshold, the more aggressive a gesture must be before
//! it changes the page.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Minimum wheel delta (exclusive) that changes the page
pub const WHEEL_THRESHOLD: f32 = 40.0;

/// Minimum swipe distance (exclusive) that changes the page
pub const SWIPE_THRESHOLD: f32 = 20.0;

/// Axis along which pages are stacked
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Pages stack top to bottom; Y deltas navigate
    #[default]
    Vertical,
    /// Pages stack left to right; X deltas navigate
    Horizontal,
}

impl Orientation {
    /// Select the navigating component of a 2D delta
    pub fn primary(&self, dx: f32, dy: f32) -> f32 {
        match self {
            Orientation::Vertical => dy,
            Orientation::Horizontal => dx,
        }
    }
}

/// Map a primary-axis delta to a direction
///
/// Comparison is strict: a delta exactly at the threshold does not navigate.
/// NaN never navigates.
pub fn classify(delta: f32, threshold: f32) -> Option<Direction> {
    if delta > threshold {
        Some(Direction::Forward)
    } else if delta < -threshold {
        Some(Direction::Reverse)
    } else {
        None
    }
}

/// Origin point of an in-progress touch gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub x: f32,
    pub y: f32,
}

impl GestureSample {
    /// Distance travelled from this origin to `(x, y)`
    ///
    /// Measured origin minus current, so a finger moving up or left
    /// produces a positive delta (forward).
    pub fn delta_to(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x - x, self.y - y)
    }
}

/// Holds the touch-start sample until the next touch-move consumes it
#[derive(Clone, Debug, Default)]
pub struct TouchTracker {
    origin: Option<GestureSample>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the origin of a new touch, replacing any previous one
    pub fn begin(&mut self, x: f32, y: f32) {
        self.origin = Some(GestureSample { x, y });
    }

    /// Consume the recorded origin
    pub fn take(&mut self) -> Option<GestureSample> {
        self.origin.take()
    }

    /// Drop any recorded origin
    pub fn clear(&mut self) {
        self.origin = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_strict() {
        assert_eq!(classify(40.0, WHEEL_THRESHOLD), None);
        assert_eq!(classify(41.0, WHEEL_THRESHOLD), Some(Direction::Forward));
        assert_eq!(classify(-40.0, WHEEL_THRESHOLD), None);
        assert_eq!(classify(-41.0, WHEEL_THRESHOLD), Some(Direction::Reverse));

        assert_eq!(classify(20.0, SWIPE_THRESHOLD), None);
        assert_eq!(classify(21.0, SWIPE_THRESHOLD), Some(Direction::Forward));
        assert_eq!(classify(-21.0, SWIPE_THRESHOLD), Some(Direction::Reverse));
    }

    #[test]
    fn test_classify_nan() {
        assert_eq!(classify(f32::NAN, WHEEL_THRESHOLD), None);
    }

    #[test]
    fn test_orientation_primary_axis() {
        assert_eq!(Orientation::Vertical.primary(5.0, 9.0), 9.0);
        assert_eq!(Orientation::Horizontal.primary(5.0, 9.0), 5.0);
        assert_eq!(Orientation::default(), Orientation::Vertical);
    }

    #[test]
    fn test_swipe_delta_sign() {
        // Finger moves from y=300 up to y=200: forward swipe
        let origin = GestureSample { x: 50.0, y: 300.0 };
        assert_eq!(origin.delta_to(50.0, 200.0), (0.0, 100.0));
        assert_eq!(origin.delta_to(80.0, 320.0), (-30.0, -20.0));
    }

    #[test]
    fn test_touch_tracker_consumes_sample() {
        let mut tracker = TouchTracker::new();
        assert!(tracker.take().is_none());

        tracker.begin(1.0, 2.0);
        tracker.begin(3.0, 4.0);
        assert_eq!(tracker.take(), Some(GestureSample { x: 3.0, y: 4.0 }));
        assert!(tracker.take().is_none());

        tracker.begin(0.0, 0.0);
        tracker.clear();
        assert!(tracker.take().is_none());
    }
}
