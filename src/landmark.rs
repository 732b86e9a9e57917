// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Hand landmark types.
//!
//! A detected hand is described by 21 landmarks in a fixed anatomical order,
//! each normalized to `[0, 1]` relative to the frame width and height. The
//! [`HandLandmarks`] container can only be built from exactly 21 points, so
//! every index the classifiers read is always in range.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GestureError, Result};

/// Number of landmarks per hand.
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// A single normalized landmark.
///
/// `z` is carried through from the detector but never read by the
/// classifiers; all distances are planar.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, 0 = left edge, 1 = right edge.
    pub x: f32,
    /// Vertical position, 0 = top edge, 1 = bottom edge.
    pub y: f32,
    /// Relative depth reported by the detector.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub z: f32,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(v: &f32) -> bool {
    *v == 0.0
}

impl Landmark {
    /// Create a landmark at `(x, y)` with zero depth.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Planar Euclidean distance to another landmark.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Return this landmark shifted by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z,
        }
    }
}

impl From<(f32, f32)> for Landmark {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// The 21 landmarks of one detected hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct HandLandmarks([Landmark; LANDMARK_COUNT]);

impl HandLandmarks {
    /// Wrap a full set of landmarks.
    #[must_use]
    pub const fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self(points)
    }

    /// The wrist landmark, used as the hand's reference position.
    #[must_use]
    pub const fn wrist(&self) -> Landmark {
        self.0[WRIST]
    }

    /// All landmarks in anatomical order.
    #[must_use]
    pub const fn as_slice(&self) -> &[Landmark] {
        &self.0
    }

    /// Iterate over landmarks in anatomical order.
    pub fn iter(&self) -> std::slice::Iter<'_, Landmark> {
        self.0.iter()
    }

    /// Mutable access to a single landmark.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 21`.
    pub fn set(&mut self, index: usize, landmark: Landmark) {
        self.0[index] = landmark;
    }

    /// Return a copy with every landmark shifted by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self(self.0.map(|lm| lm.translated(dx, dy)))
    }
}

impl Index<usize> for HandLandmarks {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl TryFrom<&[Landmark]> for HandLandmarks {
    type Error = GestureError;

    fn try_from(points: &[Landmark]) -> Result<Self> {
        let points: [Landmark; LANDMARK_COUNT] = points.try_into().map_err(|_| {
            GestureError::InvalidLandmarks(format!(
                "expected {LANDMARK_COUNT} landmarks, got {}",
                points.len()
            ))
        })?;
        Ok(Self(points))
    }
}

impl TryFrom<Vec<Landmark>> for HandLandmarks {
    type Error = GestureError;

    fn try_from(points: Vec<Landmark>) -> Result<Self> {
        Self::try_from(points.as_slice())
    }
}

impl From<HandLandmarks> for Vec<Landmark> {
    fn from(hand: HandLandmarks) -> Self {
        hand.0.to_vec()
    }
}

/// Handedness reported for a detected hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandLabel {
    Left,
    Right,
}

impl HandLabel {
    /// Display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }

    /// The opposite hand, used to undo the detector's view of a mirrored frame.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for HandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HandLabel {
    type Err = GestureError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            _ => Err(GestureError::ParseError(format!(
                "invalid hand label '{s}', expected one of: left, right"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Landmark::new(0.0, 0.0);
        let b = Landmark::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);

        let a = Landmark::new(1.0, 1.0);
        assert!(a.distance(&a).abs() < f32::EPSILON);

        let a = Landmark::new(-1.0, -1.0);
        let b = Landmark::new(2.0, 3.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_ignores_depth() {
        let a = Landmark { x: 0.0, y: 0.0, z: 0.0 };
        let b = Landmark { x: 0.3, y: 0.4, z: 10.0 };
        assert!((a.distance(&b) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_try_from_wrong_length() {
        let points = vec![Landmark::default(); 20];
        let err = HandLandmarks::try_from(points).unwrap_err();
        assert!(matches!(err, GestureError::InvalidLandmarks(_)));
        assert!(err.to_string().contains("got 20"));

        let points = vec![Landmark::default(); 22];
        assert!(HandLandmarks::try_from(points).is_err());
    }

    #[test]
    fn test_try_from_exact_length() {
        let points: Vec<Landmark> = (0..21u8)
            .map(|i| Landmark::new(f32::from(i) / 20.0, 0.5))
            .collect();
        let hand = HandLandmarks::try_from(points).unwrap();
        assert!((hand[INDEX_TIP].x - 0.4).abs() < 1e-6);
        assert_eq!(hand.wrist(), Landmark::new(0.0, 0.5));
    }

    #[test]
    fn test_deserialize_rejects_short_hand() {
        let json = serde_json::to_string(&vec![Landmark::new(0.5, 0.5); 5]).unwrap();
        let err = serde_json::from_str::<HandLandmarks>(&json).unwrap_err();
        assert!(err.to_string().contains("expected 21 landmarks"));
    }

    #[test]
    fn test_hand_label() {
        assert_eq!(HandLabel::Left.mirrored(), HandLabel::Right);
        assert_eq!(HandLabel::Right.mirrored(), HandLabel::Left);
        assert_eq!("Left".parse::<HandLabel>().unwrap(), HandLabel::Left);
        assert_eq!("right".parse::<HandLabel>().unwrap(), HandLabel::Right);
        assert!("middle".parse::<HandLabel>().is_err());
        assert_eq!(HandLabel::Right.to_string(), "Right");
    }
}
