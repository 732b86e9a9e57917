// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Per-frame hand analysis pipeline.
//!
//! [`HandEngine`] turns the detector output for one frame into
//! [`FrameResults`]. It owns the only mutable state in the pipeline, a
//! [`MotionTracker`] session, so each video stream should use its own engine.

use std::time::Instant;

use crate::config::TrackerConfig;
use crate::error::Result;
use crate::geometry::HandGeometry;
use crate::gesture::GestureClassifier;
use crate::motion::MotionTracker;
use crate::results::{FrameResults, HandResult};
use crate::source::{HandDetection, LandmarkFrame};
use crate::utils::FpsCounter;

/// Stateful per-stream gesture engine.
///
/// # Example
///
/// ```rust
/// use hand_gestures::HandEngine;
///
/// let mut engine = HandEngine::new();
/// let results = engine.process(Vec::new());
/// assert!(results.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct HandEngine {
    config: TrackerConfig,
    classifier: GestureClassifier,
    motion: MotionTracker,
    fps: FpsCounter,
    frames_processed: usize,
}

impl Default for HandEngine {
    fn default() -> Self {
        Self::from_config(TrackerConfig::default())
    }
}

impl HandEngine {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn with_config(config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: TrackerConfig) -> Self {
        let classifier = GestureClassifier::new().with_precision(config.gesture_precision);
        let motion = MotionTracker::new()
            .with_threshold(config.movement_threshold)
            .with_hold_frames(config.motion_hold_frames);

        Self {
            config,
            classifier,
            motion,
            fps: FpsCounter::new(),
            frames_processed: 0,
        }
    }

    /// Analyze the hands detected in one frame.
    ///
    /// A frame without hands clears all motion state. Hands beyond
    /// `max_hands` are dropped, keeping detection order.
    pub fn process(&mut self, detections: Vec<HandDetection>) -> FrameResults {
        let start = Instant::now();
        let frame_idx = self.frames_processed;
        self.frames_processed += 1;

        if detections.is_empty() {
            self.motion.reset();
            let mut results = FrameResults::new(frame_idx, Vec::new());
            results.speed.analysis = Some(start.elapsed().as_secs_f64() * 1000.0);
            return results;
        }

        let hands = detections
            .into_iter()
            .take(self.config.max_hands)
            .enumerate()
            .map(|(idx, detection)| self.analyze_hand(idx, detection))
            .collect();

        let mut results = FrameResults::new(frame_idx, hands);
        results.speed.analysis = Some(start.elapsed().as_secs_f64() * 1000.0);
        results
    }

    /// Analyze a recorded frame, also tracking the frame rate from its timestamp.
    pub fn process_frame(&mut self, frame: LandmarkFrame) -> FrameResults {
        let timestamp_ms = frame.timestamp_ms;
        let fps = timestamp_ms.and_then(|ts| self.fps.tick(ts));

        let mut results = self.process(frame.hands);
        results.timestamp_ms = timestamp_ms;
        results.fps = fps;
        results
    }

    fn analyze_hand(&mut self, idx: usize, detection: HandDetection) -> HandResult {
        let HandDetection {
            handedness,
            landmarks,
        } = detection;

        let label = if self.config.mirror {
            handedness.mirrored()
        } else {
            handedness
        };

        let is_moving = self.motion.update(idx, landmarks.wrist());
        let gesture = self.classifier.classify(&landmarks);
        let extended_finger_count = HandGeometry::new(&landmarks)
            .with_precision(self.config.gesture_precision)
            .extended_count();

        HandResult {
            landmarks,
            label,
            gesture,
            is_moving,
            extended_finger_count,
        }
    }

    /// Clear motion state, the frame counter and the frame rate history.
    pub fn reset(&mut self) {
        self.motion.reset();
        self.fps.reset();
        self.frames_processed = 0;
    }

    /// Get the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Get the motion tracker session.
    #[must_use]
    pub const fn motion(&self) -> &MotionTracker {
        &self.motion
    }

    /// Number of frames processed since creation or the last reset.
    #[must_use]
    pub const fn frames_processed(&self) -> usize {
        self.frames_processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Finger;
    use crate::gesture::Gesture;
    use crate::landmark::{HandLabel, HandLandmarks, Landmark, WRIST};

    fn hand_at(x: f32, y: f32) -> HandLandmarks {
        HandLandmarks::new([Landmark::new(x, y); 21])
    }

    fn peace_sign() -> HandLandmarks {
        let mut hand = hand_at(0.5, 0.5);
        hand.set(WRIST, Landmark::new(0.5, 1.0));
        for (finger, x) in [(Finger::Index, 0.4), (Finger::Middle, 0.6)] {
            hand.set(finger.tip(), Landmark::new(x, 0.0));
            hand.set(finger.pip(), Landmark::new(x, 0.5));
        }
        for finger in [Finger::Ring, Finger::Pinky] {
            hand.set(finger.tip(), Landmark::new(0.5, 0.9));
            hand.set(finger.pip(), Landmark::new(0.5, 0.8));
        }
        hand.set(Finger::Thumb.mcp(), Landmark::new(0.4, 0.8));
        hand.set(Finger::Pinky.mcp(), Landmark::new(0.6, 0.8));
        hand.set(Finger::Thumb.tip(), Landmark::new(0.5, 0.8));
        hand
    }

    #[test]
    fn test_process_peace_sign() {
        let mut engine = HandEngine::new();
        let results = engine.process(vec![HandDetection::new(HandLabel::Left, peace_sign())]);

        assert_eq!(results.len(), 1);
        let hand = &results.hands[0];
        assert_eq!(hand.gesture, Some(Gesture::PeaceSign));
        assert_eq!(hand.extended_finger_count, 2);
        assert!(!hand.is_moving);
        // Mirrored by default
        assert_eq!(hand.label, HandLabel::Right);
        assert!(results.speed.analysis.is_some());
    }

    #[test]
    fn test_mirror_disabled() {
        let config = TrackerConfig::new().with_mirror(false);
        let mut engine = HandEngine::with_config(config).unwrap();
        let results = engine.process(vec![HandDetection::new(HandLabel::Left, hand_at(0.5, 0.5))]);
        assert_eq!(results.hands[0].label, HandLabel::Left);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = TrackerConfig::new().with_max_hands(0);
        assert!(HandEngine::with_config(config).is_err());
    }

    #[test]
    fn test_max_hands_keeps_detection_order() {
        let config = TrackerConfig::new().with_max_hands(1).with_mirror(false);
        let mut engine = HandEngine::with_config(config).unwrap();
        let results = engine.process(vec![
            HandDetection::new(HandLabel::Right, hand_at(0.2, 0.2)),
            HandDetection::new(HandLabel::Left, hand_at(0.8, 0.8)),
        ]);
        assert_eq!(results.len(), 1);
        assert_eq!(results.hands[0].label, HandLabel::Right);
        assert_eq!(engine.motion().len(), 1);
    }

    #[test]
    fn test_motion_across_frames() {
        let mut engine = HandEngine::new();
        let first = engine.process(vec![HandDetection::new(HandLabel::Left, hand_at(0.5, 0.5))]);
        assert!(!first.hands[0].is_moving);

        let second = engine.process(vec![HandDetection::new(HandLabel::Left, hand_at(0.5, 0.6))]);
        assert!(second.hands[0].is_moving);
        assert_eq!(engine.motion().hold_frames(0), Some(8));
    }

    #[test]
    fn test_empty_frame_resets_motion() {
        let mut engine = HandEngine::new();
        engine.process(vec![HandDetection::new(HandLabel::Left, hand_at(0.5, 0.5))]);
        engine.process(vec![HandDetection::new(HandLabel::Left, hand_at(0.5, 0.6))]);

        let empty = engine.process(Vec::new());
        assert!(empty.is_empty());
        assert!(engine.motion().is_empty());

        // Far away, but a first sighting again
        let after = engine.process(vec![HandDetection::new(HandLabel::Left, hand_at(0.9, 0.9))]);
        assert!(!after.hands[0].is_moving);
    }

    #[test]
    fn test_process_frame_fps() {
        let mut engine = HandEngine::new();
        let frame = |ts| LandmarkFrame {
            timestamp_ms: Some(ts),
            ..LandmarkFrame::default()
        };

        let first = engine.process_frame(frame(1000));
        assert_eq!(first.fps, None);
        assert_eq!(first.timestamp_ms, Some(1000));
        assert_eq!(first.frame_idx, 0);

        let second = engine.process_frame(frame(1050));
        let fps = second.fps.unwrap();
        assert!((fps - 20.0).abs() < 1e-9);
        assert_eq!(second.frame_idx, 1);
    }

    #[test]
    fn test_reset() {
        let mut engine = HandEngine::new();
        engine.process(vec![HandDetection::new(HandLabel::Left, hand_at(0.5, 0.5))]);
        assert_eq!(engine.frames_processed(), 1);

        engine.reset();
        assert_eq!(engine.frames_processed(), 0);
        assert!(engine.motion().is_empty());
    }
}
