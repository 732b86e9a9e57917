// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Static gesture recognition.
//!
//! Gestures are a closed catalog evaluated in declaration order: the first rule
//! whose predicate holds wins and later rules are never consulted. New gestures
//! are added as a new variant appended to [`Gesture::ALL`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GestureError, Result};
use crate::geometry::{Finger, GESTURE_PRECISION, HandGeometry};
use crate::landmark::HandLandmarks;

/// Recognized gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Index and middle fingers extended, everything else folded.
    PeaceSign,
    /// Thumb extended and pointing towards the top of the frame, fist closed.
    GoodJob,
    /// Thumb extended and pointing towards the bottom of the frame, fist closed.
    Disapproval,
}

impl Gesture {
    /// Every gesture in evaluation order.
    pub const ALL: [Self; 3] = [Self::PeaceSign, Self::GoodJob, Self::Disapproval];

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PeaceSign => "Peace Sign",
            Self::GoodJob => "Good Job",
            Self::Disapproval => "Disapproval",
        }
    }

    /// Short identifier used on the command line.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::PeaceSign => "peace-sign",
            Self::GoodJob => "good-job",
            Self::Disapproval => "disapproval",
        }
    }

    /// Whether the hand forms this gesture, using the default precision.
    #[must_use]
    pub fn matches(&self, landmarks: &HandLandmarks) -> bool {
        self.matches_with_precision(landmarks, GESTURE_PRECISION)
    }

    /// Whether the hand forms this gesture under a custom extension margin.
    #[must_use]
    pub fn matches_with_precision(&self, landmarks: &HandLandmarks, precision: f32) -> bool {
        let pose = HandGeometry::new(landmarks).with_precision(precision);

        match self {
            Self::PeaceSign => {
                pose.is_finger_extended(Finger::Index)
                    && pose.is_finger_extended(Finger::Middle)
                    && !pose.is_finger_extended(Finger::Thumb)
                    && !pose.is_finger_extended(Finger::Ring)
                    && !pose.is_finger_extended(Finger::Pinky)
            }
            Self::GoodJob => {
                Self::is_lone_thumb(&pose)
                    && landmarks[Finger::Thumb.tip()].y < landmarks[Finger::Thumb.pip()].y
            }
            Self::Disapproval => {
                Self::is_lone_thumb(&pose)
                    && landmarks[Finger::Thumb.tip()].y > landmarks[Finger::Thumb.pip()].y
            }
        }
    }

    /// Thumb out, the four long fingers folded.
    fn is_lone_thumb(pose: &HandGeometry<'_>) -> bool {
        pose.is_finger_extended(Finger::Thumb)
            && [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky]
                .iter()
                .all(|&finger| !pose.is_finger_extended(finger))
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Gesture {
    type Err = GestureError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace(['_', ' '], "-").as_str() {
            "peace-sign" | "peace" => Ok(Self::PeaceSign),
            "good-job" | "thumbs-up" | "thumb-up" => Ok(Self::GoodJob),
            "disapproval" | "thumbs-down" | "thumb-down" => Ok(Self::Disapproval),
            _ => Err(GestureError::ParseError(format!(
                "invalid gesture '{s}', expected one of: peace-sign, good-job, disapproval"
            ))),
        }
    }
}

impl Serialize for Gesture {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Gesture {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Ordered first-match classifier over the gesture catalog.
///
/// # Example
///
/// ```rust
/// use hand_gestures::{GestureClassifier, HandLandmarks, Landmark};
///
/// let classifier = GestureClassifier::new();
/// let hand = HandLandmarks::new([Landmark::new(0.5, 0.5); 21]);
/// assert_eq!(classifier.classify(&hand), None);
/// ```
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    precision: f32,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self {
            precision: GESTURE_PRECISION,
        }
    }
}

impl GestureClassifier {
    /// Classifier over the full catalog with the default precision.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the relative extension margin passed to every rule.
    #[must_use]
    pub const fn with_precision(mut self, precision: f32) -> Self {
        self.precision = precision;
        self
    }

    /// Rules in evaluation order.
    #[must_use]
    pub const fn rules(&self) -> &'static [Gesture] {
        &Gesture::ALL
    }

    /// The first gesture the hand matches, if any.
    #[must_use]
    pub fn classify(&self, landmarks: &HandLandmarks) -> Option<Gesture> {
        self.rules()
            .iter()
            .copied()
            .find(|gesture| gesture.matches_with_precision(landmarks, self.precision))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::{Landmark, WRIST};

    fn neutral_hand() -> HandLandmarks {
        HandLandmarks::new([Landmark::new(0.5, 0.5); 21])
    }

    fn set_finger(hand: &mut HandLandmarks, finger: Finger, tip: (f32, f32), pip: (f32, f32)) {
        hand.set(finger.tip(), tip.into());
        hand.set(finger.pip(), pip.into());
    }

    fn peace_sign() -> HandLandmarks {
        let mut hand = neutral_hand();
        hand.set(WRIST, Landmark::new(0.5, 1.0));
        set_finger(&mut hand, Finger::Index, (0.4, 0.0), (0.4, 0.5));
        set_finger(&mut hand, Finger::Middle, (0.6, 0.0), (0.6, 0.5));
        for finger in [Finger::Thumb, Finger::Ring, Finger::Pinky] {
            set_finger(&mut hand, finger, (0.5, 0.9), (0.5, 0.8));
        }
        hand.set(Finger::Thumb.mcp(), Landmark::new(0.4, 0.8));
        hand.set(Finger::Pinky.mcp(), Landmark::new(0.6, 0.8));
        // Between the thumb and pinky bases: folded
        hand.set(Finger::Thumb.tip(), Landmark::new(0.5, 0.8));
        hand
    }

    fn thumb_up() -> HandLandmarks {
        let mut hand = neutral_hand();
        hand.set(WRIST, Landmark::new(0.5, 1.0));
        set_finger(&mut hand, Finger::Thumb, (0.2, 0.5), (0.3, 0.6));
        hand.set(Finger::Thumb.mcp(), Landmark::new(0.4, 0.7));
        hand.set(Finger::Pinky.mcp(), Landmark::new(0.6, 0.7));
        for finger in [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky] {
            set_finger(&mut hand, finger, (0.5, 0.9), (0.5, 0.8));
        }
        hand
    }

    fn thumb_down() -> HandLandmarks {
        let mut hand = neutral_hand();
        hand.set(WRIST, Landmark::new(0.5, 0.0));
        set_finger(&mut hand, Finger::Thumb, (0.2, 0.5), (0.3, 0.4));
        hand.set(Finger::Thumb.mcp(), Landmark::new(0.4, 0.3));
        hand.set(Finger::Pinky.mcp(), Landmark::new(0.6, 0.3));
        for finger in [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky] {
            set_finger(&mut hand, finger, (0.5, 0.1), (0.5, 0.2));
        }
        hand
    }

    #[test]
    fn test_peace_sign_matches() {
        assert!(Gesture::PeaceSign.matches(&peace_sign()));
    }

    #[test]
    fn test_peace_sign_rejects_extra_finger() {
        let mut hand = peace_sign();
        set_finger(&mut hand, Finger::Pinky, (0.8, 0.0), (0.8, 0.5));
        assert!(!Gesture::PeaceSign.matches(&hand));
    }

    #[test]
    fn test_thumb_up_matches() {
        let hand = thumb_up();
        assert!(Gesture::GoodJob.matches(&hand));
        assert!(!Gesture::Disapproval.matches(&hand));
    }

    #[test]
    fn test_thumb_up_rejects_extended_index() {
        let mut hand = thumb_up();
        set_finger(&mut hand, Finger::Index, (0.5, 0.0), (0.5, 0.5));
        assert!(!Gesture::GoodJob.matches(&hand));
    }

    #[test]
    fn test_thumb_down_matches() {
        let hand = thumb_down();
        assert!(Gesture::Disapproval.matches(&hand));
        assert!(!Gesture::GoodJob.matches(&hand));
    }

    #[test]
    fn test_thumb_down_rejects_extended_index() {
        let mut hand = thumb_down();
        set_finger(&mut hand, Finger::Index, (0.5, 0.9), (0.5, 0.5));
        assert!(!Gesture::Disapproval.matches(&hand));
    }

    #[test]
    fn test_level_thumb_matches_neither() {
        let mut hand = thumb_up();
        // Tip level with its joint
        hand.set(Finger::Thumb.tip(), Landmark::new(0.1, 0.6));
        assert_eq!(GestureClassifier::new().classify(&hand), None);
    }

    #[test]
    fn test_classifier_order() {
        let classifier = GestureClassifier::new();
        assert_eq!(classifier.rules(), &Gesture::ALL);
        assert_eq!(classifier.classify(&peace_sign()), Some(Gesture::PeaceSign));
        assert_eq!(classifier.classify(&thumb_up()), Some(Gesture::GoodJob));
        assert_eq!(classifier.classify(&thumb_down()), Some(Gesture::Disapproval));
    }

    #[test]
    fn test_classifier_no_match() {
        assert_eq!(GestureClassifier::new().classify(&neutral_hand()), None);
    }

    #[test]
    fn test_gesture_names() {
        assert_eq!(Gesture::PeaceSign.to_string(), "Peace Sign");
        assert_eq!(Gesture::GoodJob.name(), "Good Job");
        assert_eq!(Gesture::Disapproval.slug(), "disapproval");
    }

    #[test]
    fn test_gesture_from_str() {
        assert_eq!("Peace Sign".parse::<Gesture>().unwrap(), Gesture::PeaceSign);
        assert_eq!("good-job".parse::<Gesture>().unwrap(), Gesture::GoodJob);
        assert_eq!("thumbs_up".parse::<Gesture>().unwrap(), Gesture::GoodJob);
        assert_eq!("thumbs-down".parse::<Gesture>().unwrap(), Gesture::Disapproval);
        assert!("wave".parse::<Gesture>().is_err());
    }

    #[test]
    fn test_gesture_serde() {
        let json = serde_json::to_string(&Gesture::GoodJob).unwrap();
        assert_eq!(json, "\"Good Job\"");
        let parsed: Gesture = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Gesture::GoodJob);
    }
}
