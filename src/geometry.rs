// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Finger extension analysis for a single hand.
//!
//! The four long fingers are judged by comparing how far the tip sits from the
//! wrist against how far the PIP joint sits from the wrist. The thumb folds
//! across the palm rather than towards the wrist, so it is judged by its lateral
//! spread away from the pinky-side base of the palm instead.

use std::fmt;

use crate::landmark::{HandLandmarks, INDEX_TIP, MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_TIP, WRIST};

/// Relative margin applied to every extension comparison.
pub const GESTURE_PRECISION: f32 = 0.05;

/// The five fingers, in counting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All fingers in counting order.
    pub const ALL: [Self; 5] = [Self::Thumb, Self::Index, Self::Middle, Self::Ring, Self::Pinky];

    /// Landmark index of the fingertip.
    #[must_use]
    pub const fn tip(self) -> usize {
        match self {
            Self::Thumb => THUMB_TIP,
            Self::Index => INDEX_TIP,
            Self::Middle => MIDDLE_TIP,
            Self::Ring => RING_TIP,
            Self::Pinky => PINKY_TIP,
        }
    }

    /// Landmark index of the PIP joint (IP-side MCP for the thumb).
    #[must_use]
    pub const fn pip(self) -> usize {
        self.tip() - 2
    }

    /// Landmark index of the MCP joint (CMC for the thumb).
    #[must_use]
    pub const fn mcp(self) -> usize {
        self.tip() - 3
    }

    /// Map a fingertip landmark index back to its finger.
    #[must_use]
    pub const fn from_tip(tip: usize) -> Option<Self> {
        match tip {
            THUMB_TIP => Some(Self::Thumb),
            INDEX_TIP => Some(Self::Index),
            MIDDLE_TIP => Some(Self::Middle),
            RING_TIP => Some(Self::Ring),
            PINKY_TIP => Some(Self::Pinky),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Thumb => "thumb",
            Self::Index => "index",
            Self::Middle => "middle",
            Self::Ring => "ring",
            Self::Pinky => "pinky",
        }
    }
}

impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Extension analysis over one hand's landmarks.
///
/// Borrowing, allocation-free and pure: every query is recomputed from the
/// landmarks.
///
/// # Example
///
/// ```rust
/// use hand_gestures::{Finger, HandGeometry, HandLandmarks, Landmark};
///
/// let hand = HandLandmarks::new([Landmark::new(0.5, 0.5); 21]);
/// let geometry = HandGeometry::new(&hand);
/// assert!(!geometry.is_finger_extended(Finger::Index));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HandGeometry<'a> {
    landmarks: &'a HandLandmarks,
    precision: f32,
}

impl<'a> HandGeometry<'a> {
    /// Analyze a hand with the default [`GESTURE_PRECISION`].
    #[must_use]
    pub const fn new(landmarks: &'a HandLandmarks) -> Self {
        Self {
            landmarks,
            precision: GESTURE_PRECISION,
        }
    }

    /// Override the relative extension margin.
    #[must_use]
    pub const fn with_precision(mut self, precision: f32) -> Self {
        self.precision = precision;
        self
    }

    /// The landmarks under analysis.
    #[must_use]
    pub const fn landmarks(&self) -> &'a HandLandmarks {
        self.landmarks
    }

    /// Whether `finger` is extended.
    #[must_use]
    pub fn is_finger_extended(&self, finger: Finger) -> bool {
        let lm = self.landmarks;

        if finger == Finger::Thumb {
            let pinky_mcp = lm[Finger::Pinky.mcp()];
            let thumb_mcp = lm[Finger::Thumb.mcp()];
            let thumb_tip = lm[Finger::Thumb.tip()];

            let base_dist = thumb_mcp.distance(&pinky_mcp);
            let tip_dist = thumb_tip.distance(&pinky_mcp);

            return tip_dist > base_dist * (1.0 - self.precision);
        }

        let wrist = lm[WRIST];
        let tip_dist = lm[finger.tip()].distance(&wrist);
        let pip_dist = lm[finger.pip()].distance(&wrist);

        tip_dist > pip_dist * (1.0 + self.precision)
    }

    /// Extension state of every finger, in [`Finger::ALL`] order.
    #[must_use]
    pub fn extended_fingers(&self) -> [bool; 5] {
        Finger::ALL.map(|finger| self.is_finger_extended(finger))
    }

    /// Number of extended fingers, 0 to 5.
    #[must_use]
    pub fn extended_count(&self) -> usize {
        Finger::ALL
            .iter()
            .filter(|&&finger| self.is_finger_extended(finger))
            .count()
    }
}
