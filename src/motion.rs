// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Debounced per-hand motion detection.
//!
//! A single large jump of the reference landmark latches the hand as moving
//! for a fixed number of frames; each following frame with only a small
//! displacement counts the latch down by one. This hides single-frame detector
//! jitter in both directions.
//!
//! Hands are keyed by their position in the current frame's detection list,
//! not by a stable identity, so the owner must call [`MotionTracker::reset`]
//! on every frame that contains no hands.

use std::collections::HashMap;

use crate::landmark::Landmark;

/// Displacement (normalized units) above which a hand counts as moving.
pub const MOVEMENT_THRESHOLD: f32 = 0.025;

/// Frames a hand stays "moving" after a large displacement.
pub const MOTION_HOLD_FRAMES: u32 = 8;

/// Tracked state for one hand index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Reference position seen on the previous update.
    pub last_position: Landmark,
    /// Frames remaining in the moving state.
    pub hold_frames: u32,
}

/// Per-session motion tracker.
///
/// # Example
///
/// ```rust
/// use hand_gestures::{Landmark, MotionTracker};
///
/// let mut tracker = MotionTracker::new();
/// assert!(!tracker.update(0, Landmark::new(0.5, 0.5)));
/// assert!(tracker.update(0, Landmark::new(0.5, 0.55)));
/// ```
#[derive(Debug, Clone)]
pub struct MotionTracker {
    threshold: f32,
    hold_frames: u32,
    states: HashMap<usize, MotionState>,
}

impl Default for MotionTracker {
    fn default() -> Self {
        Self {
            threshold: MOVEMENT_THRESHOLD,
            hold_frames: MOTION_HOLD_FRAMES,
            states: HashMap::new(),
        }
    }
}

impl MotionTracker {
    /// Create a tracker with the default threshold and hold length.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the displacement threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set how many frames a large displacement keeps the hand moving.
    #[must_use]
    pub const fn with_hold_frames(mut self, frames: u32) -> Self {
        self.hold_frames = frames;
        self
    }

    /// Feed the current reference position of `hand_index` and return whether
    /// that hand is moving.
    ///
    /// The first sighting of an index always reports `false`.
    pub fn update(&mut self, hand_index: usize, position: Landmark) -> bool {
        let Some(state) = self.states.get_mut(&hand_index) else {
            self.states.insert(
                hand_index,
                MotionState {
                    last_position: position,
                    hold_frames: 0,
                },
            );
            return false;
        };

        let displacement = position.distance(&state.last_position);
        state.last_position = position;

        if displacement > self.threshold {
            state.hold_frames = self.hold_frames;
        } else {
            state.hold_frames = state.hold_frames.saturating_sub(1);
        }

        state.hold_frames > 0
    }

    /// Forget every tracked hand.
    pub fn reset(&mut self) {
        self.states.clear();
    }

    /// Remaining hold frames for `hand_index`, if it has been seen.
    #[must_use]
    pub fn hold_frames(&self, hand_index: usize) -> Option<u32> {
        self.states.get(&hand_index).map(|s| s.hold_frames)
    }

    /// Last reference position for `hand_index`, if it has been seen.
    #[must_use]
    pub fn last_position(&self, hand_index: usize) -> Option<Landmark> {
        self.states.get(&hand_index).map(|s| s.last_position)
    }

    /// Full state for `hand_index`.
    #[must_use]
    pub fn state(&self, hand_index: usize) -> Option<&MotionState> {
        self.states.get(&hand_index)
    }

    /// Number of tracked hand indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no hand index is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub const fn threshold(&self) -> f32 {
        self.threshold
    }
}
