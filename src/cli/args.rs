// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::TrackerConfig;
use crate::geometry::GESTURE_PRECISION;
use crate::motion::{MOTION_HOLD_FRAMES, MOVEMENT_THRESHOLD};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Track Options:
    --source, -s <SOURCE>          Recorded landmark frames (.jsonl, .json, or - for stdin)
    --movement-threshold <VALUE>   Wrist displacement that counts as motion [default: 0.025]
    --hold-frames <N>              Frames a hand stays moving after a jump [default: 8]
    --precision <VALUE>            Finger extension margin [default: 0.05]
    --max-hands <N>                Hands analyzed per frame [default: 2]
    --no-mirror                    Keep detector handedness as reported
    --save                         Save results and annotated frames to runs/track/exp
    --show                         Display annotated frames in a window
    --verbose <BOOL>               Print one line per frame [default: true]
    --debug                        Print per-hand details

Examples:
    hand-gestures track --source recording.jsonl
    hand-gestures track -s frames.json --save --max-hands 1
    detector | hand-gestures track -s - --show
    hand-gestures gestures"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify gestures and motion over recorded landmark frames
    Track(TrackArgs),
    /// List the recognized gestures in evaluation order
    Gestures,
}

/// Arguments for the track command.
#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct TrackArgs {
    /// Recorded landmark frames (.jsonl, .json, or - for stdin)
    #[arg(short, long, default_value = "-")]
    pub source: String,

    /// Wrist displacement (normalized units) that counts as motion
    #[arg(long, default_value_t = MOVEMENT_THRESHOLD)]
    pub movement_threshold: f32,

    /// Frames a hand stays moving after a large displacement
    #[arg(long, default_value_t = MOTION_HOLD_FRAMES)]
    pub hold_frames: u32,

    /// Relative margin for finger extension
    #[arg(long, default_value_t = GESTURE_PRECISION)]
    pub precision: f32,

    /// Maximum number of hands analyzed per frame
    #[arg(long, default_value_t = 2)]
    pub max_hands: usize,

    /// Keep detector handedness instead of mirroring it
    #[arg(long, default_value_t = false)]
    pub no_mirror: bool,

    /// Save results and annotated frames to runs/track/exp
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Display annotated frames in a window
    #[arg(long, default_value_t = false)]
    pub show: bool,

    /// Canvas width for frames recorded without an image
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Canvas height for frames recorded without an image
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// TrueType font used for labels
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,

    /// Show per-hand details
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl TrackArgs {
    /// Tracker configuration described by the flags.
    #[must_use]
    pub const fn config(&self) -> TrackerConfig {
        TrackerConfig {
            movement_threshold: self.movement_threshold,
            motion_hold_frames: self.hold_frames,
            gesture_precision: self.precision,
            max_hands: self.max_hands,
            mirror: !self.no_mirror,
        }
    }
}
