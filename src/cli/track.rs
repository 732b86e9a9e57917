// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::path::Path;
use std::sync::mpsc::sync_channel;
use std::thread;
#[cfg(feature = "annotate")]
use std::time::Instant;
#[cfg(feature = "visualize")]
use std::time::Duration;

#[cfg(feature = "annotate")]
use image::DynamicImage;

#[cfg(feature = "annotate")]
use crate::annotate::{Annotator, blank_canvas, load_image};
use crate::cli::args::TrackArgs;
use crate::cli::logging::{self, Verbosity};
use crate::error::Result;
use crate::io::{SaveResults, find_next_run_dir};
use crate::results::FrameResults;
use crate::source::{Source, SourceIterator, SourceMeta};
use crate::utils::Tally;
#[cfg(feature = "visualize")]
use crate::visualizer::Viewer;
use crate::{HandEngine, VERSION, debug, section, success, verbose, warn};

/// Frames buffered between the reader thread and the analysis loop.
const CHANNEL_CAPACITY: usize = 16;

/// Totals reported once the source is exhausted.
#[derive(Debug, Default)]
pub struct TrackSummary {
    pub frames: usize,
    pub total_analysis_ms: f64,
    pub gestures: Tally,
}

/// Run gesture tracking over a recorded landmark source.
///
/// # Errors
///
/// Returns an error for an invalid configuration, an unreadable source, the
/// first malformed frame, or a failure while saving results.
#[allow(clippy::too_many_lines, clippy::cast_precision_loss)]
pub fn run_tracking(args: &TrackArgs) -> Result<TrackSummary> {
    if args.debug {
        logging::set_verbosity(Verbosity::Debug);
    } else {
        logging::set_verbose(args.verbose);
    }

    let mut engine = HandEngine::with_config(args.config())?;
    let source = Source::from(args.source.as_str());

    println!("hand-gestures {VERSION} 🖐️ source: {}", source.display_name());
    let config = engine.config();
    verbose!(
        "movement_threshold={}, hold_frames={}, precision={}, max_hands={}, mirror={}",
        config.movement_threshold,
        config.motion_hold_frames,
        config.gesture_precision,
        config.max_hands,
        config.mirror
    );

    let mut saver = if args.save {
        let dir = find_next_run_dir(Path::new("runs/track"), "exp");
        Some(SaveResults::new(dir)?)
    } else {
        None
    };

    #[cfg(not(feature = "annotate"))]
    if args.save {
        warn!("Annotated frames require the 'annotate' feature; saving results only.");
    }
    #[cfg(not(feature = "visualize"))]
    if args.show {
        warn!("--show requires the 'visualize' feature. Compile with --features visualize to enable it.");
    }

    #[cfg(feature = "annotate")]
    let annotator = (args.save || args.show).then(|| Annotator::new(args.font.as_deref()));
    #[cfg(feature = "annotate")]
    if annotator.as_ref().is_some_and(|a| !a.has_font()) {
        warn!("No font found, labels are drawn without text. Pass --font <path.ttf> to enable them.");
    }

    #[cfg(feature = "visualize")]
    let mut viewer: Option<Viewer> = None;

    let (sender, receiver) = sync_channel(CHANNEL_CAPACITY);
    let producer_source = source.clone();
    thread::spawn(move || {
        let iter = match SourceIterator::new(producer_source) {
            Ok(iter) => iter,
            Err(e) => {
                let _ = sender.send(Err(e));
                return;
            }
        };

        for item in iter {
            let failed = item.is_err();
            // Receiver dropped, stop reading
            if sender.send(item).is_err() || failed {
                break;
            }
        }
    });

    let mut summary = TrackSummary::default();

    for item in receiver {
        let (frame, meta) = item?;
        #[cfg(feature = "annotate")]
        let image_path = frame.image.clone();

        let mut results = engine.process_frame(frame);
        summary.frames += 1;
        summary.total_analysis_ms += results.speed.analysis.unwrap_or(0.0);
        for gesture in results.gestures() {
            summary.gestures.add(&gesture);
        }

        #[cfg(feature = "annotate")]
        let annotated = annotator.as_ref().map(|annotator| {
            let start = Instant::now();
            let background = background(image_path.as_deref(), args.width, args.height);
            let image = annotator.annotate(&background, &results);
            results.speed.render = Some(start.elapsed().as_secs_f64() * 1000.0);
            image
        });

        verbose!("{}", format_frame_line(&meta, &results));
        for (i, hand) in results.hands.iter().enumerate() {
            debug!(
                "  hand {i}: {} fingers={} moving={} gesture={}",
                hand.label,
                hand.extended_finger_count,
                hand.is_moving,
                hand.gesture.map_or("-", |g| g.name())
            );
        }

        if let Some(saver) = saver.as_mut() {
            saver.write_results(&results)?;
            #[cfg(feature = "annotate")]
            if let Some(image) = &annotated {
                saver.save_image(meta.frame_idx, image)?;
            }
        }

        #[cfg(feature = "visualize")]
        if args.show
            && let Some(image) = &annotated
        {
            let (w, h) = (image.width() as usize, image.height() as usize);
            if let Some(v) = &viewer
                && (v.width != w || v.height != h)
            {
                viewer = None;
            }
            if viewer.is_none() {
                viewer = Some(Viewer::new("hand-gestures", w, h)?);
            }
            if let Some(v) = viewer.as_mut() {
                v.set_status(&results);
                if !v.update(image)? {
                    break;
                }
                if !source.is_stream() && !v.wait(Duration::from_millis(30))? {
                    break;
                }
            }
        }
    }

    if let Some(saver) = saver {
        let dir = saver.save_dir().to_path_buf();
        saver.finish()?;
        success!("Results saved to {}", dir.display());
    }

    let per_frame = summary.total_analysis_ms / summary.frames.max(1) as f64;
    verbose!(
        "Speed: {per_frame:.3}ms analysis per frame over {} frames",
        summary.frames
    );

    if !summary.gestures.is_empty() {
        section!("Gestures");
        for (label, count) in summary.gestures.sorted() {
            verbose!("  {label}: {count}");
        }
    }

    Ok(summary)
}

/// Image recorded with the frame, or a blank canvas.
#[cfg(feature = "annotate")]
fn background(image_path: Option<&Path>, width: u32, height: u32) -> DynamicImage {
    match image_path.map(load_image) {
        Some(Ok(image)) => image,
        Some(Err(e)) => {
            warn!("{e}, drawing on a blank canvas");
            blank_canvas(width, height)
        }
        None => blank_canvas(width, height),
    }
}

/// Per-frame log line, e.g. `"frame 3/10 rec.jsonl: 1 hand, 2 fingers, Right: Peace Sign, 0.1ms"`.
fn format_frame_line(meta: &SourceMeta, results: &FrameResults) -> String {
    let total = meta
        .total_frames
        .map_or_else(|| "?".to_string(), |n| n.to_string());
    format!(
        "frame {}/{} {}: {}, {:.1}ms",
        meta.frame_idx + 1,
        total,
        meta.path,
        results.verbose(),
        results.speed.analysis.unwrap_or(0.0)
    )
}

/// Print the gesture catalog in evaluation order.
pub fn list_gestures() {
    section!("Gestures (first match wins)");
    for (i, gesture) in crate::Gesture::ALL.iter().enumerate() {
        println!("  {}. {} ({})", i + 1, gesture.name(), gesture.slug());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Gesture;
    use crate::landmark::{HandLabel, HandLandmarks, Landmark};
    use crate::results::{HandResult, Speed};

    fn meta(frame_idx: usize, total_frames: Option<usize>) -> SourceMeta {
        SourceMeta {
            path: "rec.jsonl".to_string(),
            frame_idx,
            total_frames,
            line: Some(frame_idx + 1),
        }
    }

    #[test]
    fn test_format_frame_line_empty() {
        let mut results = FrameResults::new(0, Vec::new());
        results.speed = Speed {
            analysis: Some(0.04),
            render: None,
        };
        assert_eq!(
            format_frame_line(&meta(0, None), &results),
            "frame 1/? rec.jsonl: (no hands), 0.0ms"
        );
    }

    #[test]
    fn test_format_frame_line_with_hand() {
        let hand = HandResult {
            landmarks: HandLandmarks::new([Landmark::new(0.5, 0.5); 21]),
            label: HandLabel::Right,
            gesture: Some(Gesture::PeaceSign),
            is_moving: false,
            extended_finger_count: 2,
        };
        let mut results = FrameResults::new(2, vec![hand]);
        results.speed.analysis = Some(1.31);
        assert_eq!(
            format_frame_line(&meta(2, Some(10)), &results),
            "frame 3/10 rec.jsonl: 1 hand, 2 fingers, Right: Peace Sign, 1.3ms"
        );
    }
}
