// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Recorded landmark input.
//!
//! Capture and landmark detection happen outside this crate. Any detector can
//! feed the pipeline by writing one [`LandmarkFrame`] per line (JSON Lines) or
//! a single JSON array of frames:
//!
//! ```json
//! {"timestamp_ms": 33, "hands": [{"handedness": "Left", "landmarks": [{"x": 0.5, "y": 1.0}, ...]}]}
//! ```
//!
//! A frame with no hands is written as `{"hands": []}` (or `{}`); it is a
//! normal input and resets motion tracking downstream.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GestureError, Result};
use crate::landmark::{HandLabel, HandLandmarks};

/// One hand as reported by the detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandDetection {
    /// Raw handedness classification.
    pub handedness: HandLabel,
    /// Exactly 21 normalized landmarks.
    pub landmarks: HandLandmarks,
}

impl HandDetection {
    #[must_use]
    pub const fn new(handedness: HandLabel, landmarks: HandLandmarks) -> Self {
        Self {
            handedness,
            landmarks,
        }
    }
}

/// Detector output for one video frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkFrame {
    /// Capture timestamp in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,
    /// Image the landmarks were detected on, used as the overlay background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
    /// Detected hands, in detection order.
    #[serde(default)]
    pub hands: Vec<HandDetection>,
}

impl LandmarkFrame {
    /// A frame holding the given hands and nothing else.
    #[must_use]
    pub const fn from_hands(hands: Vec<HandDetection>) -> Self {
        Self {
            timestamp_ms: None,
            image: None,
            hands,
        }
    }
}

/// Represents different input sources of landmark frames.
#[derive(Debug, Clone)]
pub enum Source {
    /// JSON Lines file, one frame per line.
    JsonLines(PathBuf),
    /// JSON file holding an array of frames.
    JsonArray(PathBuf),
    /// JSON Lines read from standard input.
    Stdin,
    /// In-memory frames.
    Frames(Vec<LandmarkFrame>),
}

impl Source {
    /// Check if this source is a stream of unknown length.
    #[must_use]
    pub const fn is_stream(&self) -> bool {
        matches!(self, Self::Stdin)
    }

    /// Get the path if this source has one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::JsonLines(p) | Self::JsonArray(p) => Some(p),
            _ => None,
        }
    }

    /// Name used in log lines.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::JsonLines(p) | Self::JsonArray(p) => p.display().to_string(),
            Self::Stdin => "stdin".to_string(),
            Self::Frames(_) => "memory".to_string(),
        }
    }
}

/// Convert from a string path to Source.
impl From<&str> for Source {
    fn from(s: &str) -> Self {
        if s == "-" {
            return Self::Stdin;
        }

        let path = PathBuf::from(s);
        let is_array = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_array {
            Self::JsonArray(path)
        } else {
            Self::JsonLines(path)
        }
    }
}

impl From<Vec<LandmarkFrame>> for Source {
    fn from(frames: Vec<LandmarkFrame>) -> Self {
        Self::Frames(frames)
    }
}

/// Metadata about a frame from the source.
#[derive(Debug, Clone)]
pub struct SourceMeta {
    /// Source name.
    pub path: String,
    /// Frame index within the source (0 for the first frame).
    pub frame_idx: usize,
    /// Total frames in source (if known).
    pub total_frames: Option<usize>,
    /// Line number the frame was read from, for JSON Lines input.
    pub line: Option<usize>,
}

enum FrameReader {
    Lines(Box<dyn Iterator<Item = io::Result<String>>>),
    Buffered(std::vec::IntoIter<LandmarkFrame>),
}

/// Iterator over the frames of a [`Source`].
///
/// Blank lines in JSON Lines input are skipped. The first line that fails to
/// parse, including any hand without exactly 21 landmarks, is yielded as an
/// error naming its line number.
pub struct SourceIterator {
    reader: FrameReader,
    path: String,
    total_frames: Option<usize>,
    frame_idx: usize,
    line: usize,
}

impl SourceIterator {
    /// Open a source for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, or if a JSON array file
    /// fails to parse.
    pub fn new(source: Source) -> Result<Self> {
        let path = source.display_name();

        let (reader, total_frames) = match source {
            Source::JsonLines(p) => {
                let file = File::open(&p).map_err(|e| {
                    GestureError::SourceError(format!("Failed to open {}: {e}", p.display()))
                })?;
                (FrameReader::Lines(Box::new(BufReader::new(file).lines())), None)
            }
            Source::JsonArray(p) => {
                let file = File::open(&p).map_err(|e| {
                    GestureError::SourceError(format!("Failed to open {}: {e}", p.display()))
                })?;
                let frames: Vec<LandmarkFrame> = serde_json::from_reader(BufReader::new(file))
                    .map_err(|e| GestureError::ParseError(format!("{}: {e}", p.display())))?;
                let total = frames.len();
                (FrameReader::Buffered(frames.into_iter()), Some(total))
            }
            Source::Stdin => (FrameReader::Lines(Box::new(io::stdin().lines())), None),
            Source::Frames(frames) => {
                let total = frames.len();
                (FrameReader::Buffered(frames.into_iter()), Some(total))
            }
        };

        Ok(Self {
            reader,
            path,
            total_frames,
            frame_idx: 0,
            line: 0,
        })
    }

    fn next_frame(&mut self) -> Option<Result<(LandmarkFrame, Option<usize>)>> {
        match &mut self.reader {
            FrameReader::Buffered(frames) => frames.next().map(|f| Ok((f, None))),
            FrameReader::Lines(lines) => loop {
                let line = match lines.next()? {
                    Ok(line) => line,
                    Err(e) => return Some(Err(e.into())),
                };
                self.line += 1;

                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                return Some(
                    serde_json::from_str::<LandmarkFrame>(trimmed)
                        .map(|frame| (frame, Some(self.line)))
                        .map_err(|e| {
                            GestureError::ParseError(format!(
                                "{} line {}: {e}",
                                self.path, self.line
                            ))
                        }),
                );
            },
        }
    }
}

impl Iterator for SourceIterator {
    type Item = Result<(LandmarkFrame, SourceMeta)>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.next_frame()?;
        Some(item.map(|(frame, line)| {
            let meta = SourceMeta {
                path: self.path.clone(),
                frame_idx: self.frame_idx,
                total_frames: self.total_frames,
                line,
            };
            self.frame_idx += 1;
            (frame, meta)
        }))
    }
}
