// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Hand Gestures
//!
//! Static hand gesture classification and motion smoothing over the 21-point
//! hand landmarks produced by common hand-tracking detectors.
//!
//! For every frame the library decides which fingers are extended, which named
//! gesture (if any) the hand shows, and whether the hand is moving. Motion is
//! debounced: one large jump of the wrist keeps a hand "moving" for a few
//! frames, which hides single-frame detector jitter.
//!
//! ## Features
//!
//! - **Finger analysis** - Per-finger extension with a relative margin, extended finger count
//! - **Gestures** - Peace Sign, Good Job and Disapproval, evaluated in a fixed order
//! - **Motion** - Per-hand debounced moving state with a decaying hold counter
//! - **Recorded input** - JSON Lines or JSON array frames from any detector, file or stdin
//! - **Overlay** - Skeleton, labels and counters drawn onto frames (feature `annotate`)
//! - **Live view** - Window display of annotated frames (feature `visualize`)
//!
//! ## Quick Start (Library)
//!
//! ```rust
//! use hand_gestures::{HandDetection, HandEngine, HandLabel, HandLandmarks, Landmark};
//!
//! let mut engine = HandEngine::new();
//! let hand = HandLandmarks::new([Landmark::new(0.5, 0.5); 21]);
//!
//! let results = engine.process(vec![HandDetection::new(HandLabel::Left, hand)]);
//! for hand in &results.hands {
//!     println!("{}: {} fingers, moving={}", hand.display_label(), hand.extended_finger_count, hand.is_moving);
//! }
//! ```
//!
//! The building blocks can also be used on their own:
//!
//! ```rust
//! use hand_gestures::{Finger, GestureClassifier, HandGeometry, HandLandmarks, Landmark};
//!
//! let hand = HandLandmarks::new([Landmark::new(0.5, 0.5); 21]);
//! let geometry = HandGeometry::new(&hand);
//! assert!(!geometry.is_finger_extended(Finger::Index));
//! assert_eq!(GestureClassifier::new().classify(&hand), None);
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Classify a recording
//! hand-gestures track --source recording.jsonl
//!
//! # Pipe frames from a detector and watch the overlay
//! detector | hand-gestures track --source - --show
//!
//! # Save results and annotated frames to runs/track/exp
//! hand-gestures track -s frames.json --save
//!
//! # List gestures in evaluation order
//! hand-gestures gestures
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`landmark`] | [`Landmark`], [`HandLandmarks`] and [`HandLabel`] |
//! | [`geometry`] | Finger extension ([`HandGeometry`], [`Finger`]) |
//! | [`gesture`] | Gesture catalog and [`GestureClassifier`] |
//! | [`motion`] | Debounced [`MotionTracker`] |
//! | [`engine`] | Per-frame [`HandEngine`] pipeline |
//! | [`config`] | [`TrackerConfig`] thresholds |
//! | [`results`] | [`FrameResults`] and [`HandResult`] |
//! | [`source`] | Recorded frame input ([`Source`], [`SourceIterator`]) |
//! | [`io`] | Result and frame saving |
//! | [`error`] | Error types ([`GestureError`], [`Result`]) |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `annotate` | Overlay drawing support (default) |
//! | `visualize` | Real-time window display (default) |

// Modules
#[cfg(feature = "annotate")]
pub mod annotate;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod io;
pub mod landmark;
pub mod motion;
pub mod results;
pub mod source;
pub mod utils;
pub mod visualizer;

// Re-export main types for convenience
pub use config::TrackerConfig;
pub use engine::HandEngine;
pub use error::{GestureError, Result};
pub use geometry::{Finger, GESTURE_PRECISION, HandGeometry};
pub use gesture::{Gesture, GestureClassifier};
pub use landmark::{HandLabel, HandLandmarks, LANDMARK_COUNT, Landmark};
pub use motion::{MOTION_HOLD_FRAMES, MOVEMENT_THRESHOLD, MotionTracker};
pub use results::{FrameResults, HandResult, Speed};
pub use source::{HandDetection, LandmarkFrame, Source, SourceIterator, SourceMeta};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
