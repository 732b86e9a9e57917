// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Tracking configuration.
//!
//! This module defines the [`TrackerConfig`] struct, which controls the
//! thresholds used by the [`HandEngine`](crate::HandEngine) per-frame pipeline:
//! the finger extension margin, the motion threshold and hold length, how
//! many hands are analyzed, and whether handedness labels are mirrored.

use crate::error::{GestureError, Result};
use crate::geometry::GESTURE_PRECISION;
use crate::motion::{MOTION_HOLD_FRAMES, MOVEMENT_THRESHOLD};

/// Configuration for the hand tracking pipeline.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use hand_gestures::TrackerConfig;
///
/// let config = TrackerConfig::new()
///     .with_movement_threshold(0.03)
///     .with_motion_hold_frames(10)
///     .with_max_hands(1)
///     .with_mirror(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Reference-point displacement (normalized units) that latches a hand as moving.
    pub movement_threshold: f32,
    /// Frames a hand stays moving after a large displacement.
    pub motion_hold_frames: u32,
    /// Relative margin for finger extension comparisons.
    pub gesture_precision: f32,
    /// Maximum number of hands analyzed per frame, in detection order.
    pub max_hands: usize,
    /// Swap detector handedness, for frames captured from a mirrored camera view.
    pub mirror: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            movement_threshold: MOVEMENT_THRESHOLD,
            motion_hold_frames: MOTION_HOLD_FRAMES,
            gesture_precision: GESTURE_PRECISION,
            max_hands: 2,
            mirror: true,
        }
    }
}

impl TrackerConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the movement threshold.
    #[must_use]
    pub const fn with_movement_threshold(mut self, threshold: f32) -> Self {
        self.movement_threshold = threshold;
        self
    }

    /// Set the number of frames the moving state is held.
    #[must_use]
    pub const fn with_motion_hold_frames(mut self, frames: u32) -> Self {
        self.motion_hold_frames = frames;
        self
    }

    /// Set the finger extension margin.
    #[must_use]
    pub const fn with_gesture_precision(mut self, precision: f32) -> Self {
        self.gesture_precision = precision;
        self
    }

    /// Set the maximum number of hands analyzed per frame.
    #[must_use]
    pub const fn with_max_hands(mut self, max_hands: usize) -> Self {
        self.max_hands = max_hands;
        self
    }

    /// Enable or disable handedness mirroring.
    #[must_use]
    pub const fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    /// Check that every threshold is usable.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::ConfigError`] for a negative or non-finite
    /// threshold, a precision outside `[0, 1)`, or `max_hands == 0`.
    pub fn validate(&self) -> Result<()> {
        if !self.movement_threshold.is_finite() || self.movement_threshold < 0.0 {
            return Err(GestureError::ConfigError(format!(
                "movement threshold must be a non-negative number, got {}",
                self.movement_threshold
            )));
        }
        if !(0.0..1.0).contains(&self.gesture_precision) {
            return Err(GestureError::ConfigError(format!(
                "gesture precision must be in [0, 1), got {}",
                self.gesture_precision
            )));
        }
        if self.max_hands == 0 {
            return Err(GestureError::ConfigError(
                "max hands must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
