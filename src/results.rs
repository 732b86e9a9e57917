// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Result types produced for every analyzed frame.

use serde::{Deserialize, Serialize};

use crate::gesture::Gesture;
use crate::landmark::{HandLabel, HandLandmarks, Landmark};
use crate::utils::pluralize;

/// Timing information for one frame (in milliseconds).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Speed {
    /// Time spent on geometry, gesture and motion analysis.
    pub analysis: Option<f64>,
    /// Time spent drawing the overlay, when annotation is enabled.
    pub render: Option<f64>,
}

impl Speed {
    /// Create a new Speed instance with both timings.
    #[must_use]
    pub const fn new(analysis: f64, render: f64) -> Self {
        Self {
            analysis: Some(analysis),
            render: Some(render),
        }
    }

    /// Sum of all recorded timings.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.analysis.unwrap_or(0.0) + self.render.unwrap_or(0.0)
    }
}

/// Analysis of one detected hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    /// Landmarks as supplied by the detector.
    pub landmarks: HandLandmarks,
    /// Handedness after mirroring.
    pub label: HandLabel,
    /// First matching gesture.
    pub gesture: Option<Gesture>,
    /// Debounced motion state.
    pub is_moving: bool,
    /// Number of extended fingers, 0 to 5.
    pub extended_finger_count: usize,
}

impl HandResult {
    /// The wrist landmark, used to anchor labels.
    #[must_use]
    pub const fn wrist(&self) -> Landmark {
        self.landmarks.wrist()
    }

    /// Label text, e.g. `"Right: Peace Sign"` or just `"Right"`.
    #[must_use]
    pub fn display_label(&self) -> String {
        match self.gesture {
            Some(gesture) => format!("{}: {gesture}", self.label),
            None => self.label.to_string(),
        }
    }
}

/// All hands analyzed in a single frame plus frame-level aggregates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameResults {
    /// Zero-based position of the frame in its source.
    pub frame_idx: usize,
    /// Capture timestamp reported alongside the frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,
    /// One entry per analyzed hand, in detection order.
    pub hands: Vec<HandResult>,
    /// Instantaneous frames per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,
    /// Timing information.
    #[serde(default)]
    pub speed: Speed,
}

impl FrameResults {
    /// Create results for a frame.
    #[must_use]
    pub const fn new(frame_idx: usize, hands: Vec<HandResult>) -> Self {
        Self {
            frame_idx,
            timestamp_ms: None,
            hands,
            fps: None,
            speed: Speed {
                analysis: None,
                render: None,
            },
        }
    }

    /// Number of analyzed hands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hands.len()
    }

    /// Whether no hands were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// Number of analyzed hands.
    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.len()
    }

    /// Extended fingers summed over all hands.
    #[must_use]
    pub fn total_fingers(&self) -> usize {
        self.hands.iter().map(|h| h.extended_finger_count).sum()
    }

    /// Number of hands currently flagged as moving.
    #[must_use]
    pub fn moving_count(&self) -> usize {
        self.hands.iter().filter(|h| h.is_moving).count()
    }

    /// Recognized gestures as `"<label>: <gesture>"`, in detection order.
    #[must_use]
    pub fn gestures(&self) -> Vec<String> {
        self.hands
            .iter()
            .filter(|h| h.gesture.is_some())
            .map(HandResult::display_label)
            .collect()
    }

    /// One-line summary, e.g. `"2 hands, 3 fingers, Right: Peace Sign"`.
    #[must_use]
    pub fn verbose(&self) -> String {
        if self.is_empty() {
            return "(no hands)".to_string();
        }

        let mut parts = vec![
            pluralize(self.hand_count(), "hand"),
            pluralize(self.total_fingers(), "finger"),
        ];
        let moving = self.moving_count();
        if moving > 0 {
            parts.push(format!("{moving} moving"));
        }
        parts.extend(self.gestures());
        parts.join(", ")
    }
}
