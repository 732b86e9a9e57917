// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Example script classifying a recorded landmark stream with the library.
//!
//! Usage: `cargo run --example classify_recording -- recording.jsonl`
//!
//! Without an argument a short synthetic recording is generated in memory: a
//! peace sign that moves once and then holds still, followed by a frame where
//! the hand is lost.

use hand_gestures::landmark::{INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, WRIST};
use hand_gestures::{
    Finger, HandDetection, HandEngine, HandLabel, HandLandmarks, Landmark, LandmarkFrame, Result,
    Source, SourceIterator,
};

fn peace_sign() -> HandLandmarks {
    let mut hand = HandLandmarks::new([Landmark::new(0.5, 1.0); 21]);
    hand.set(WRIST, Landmark::new(0.5, 1.0));
    hand.set(INDEX_TIP, Landmark::new(0.5, 0.0));
    hand.set(INDEX_PIP, Landmark::new(0.5, 0.5));
    hand.set(MIDDLE_TIP, Landmark::new(0.6, 0.0));
    hand.set(MIDDLE_PIP, Landmark::new(0.6, 0.5));
    hand.set(Finger::Thumb.mcp(), Landmark::new(0.4, 0.9));
    hand.set(Finger::Pinky.mcp(), Landmark::new(0.6, 0.9));
    hand.set(Finger::Thumb.tip(), Landmark::new(0.5, 0.9));
    for finger in [Finger::Ring, Finger::Pinky] {
        hand.set(finger.tip(), Landmark::new(0.55, 0.95));
        hand.set(finger.pip(), Landmark::new(0.55, 0.8));
    }
    hand
}

fn synthetic_recording() -> Vec<LandmarkFrame> {
    let hand = peace_sign();
    let mut frames: Vec<LandmarkFrame> = (0..12u64)
        .map(|i| {
            // One jump upwards on the second frame
            let dy = if i == 0 { 0.0 } else { -0.1 };
            LandmarkFrame {
                timestamp_ms: Some(i * 33),
                image: None,
                hands: vec![HandDetection::new(HandLabel::Left, hand.translated(0.0, dy))],
            }
        })
        .collect();
    frames.push(LandmarkFrame {
        timestamp_ms: Some(12 * 33),
        ..LandmarkFrame::default()
    });
    frames
}

fn main() -> Result<()> {
    let source = std::env::args().nth(1).map_or_else(
        || Source::from(synthetic_recording()),
        |path| Source::from(path.as_str()),
    );

    let mut engine = HandEngine::new();
    for item in SourceIterator::new(source)? {
        let (frame, meta) = item?;
        let results = engine.process_frame(frame);
        let fps = results
            .fps
            .map_or_else(|| "-".to_string(), |fps| format!("{fps:.0}"));
        println!("frame {:>3} fps {fps:>3}: {}", meta.frame_idx, results.verbose());
    }

    Ok(())
}
