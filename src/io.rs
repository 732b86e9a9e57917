// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! I/O utilities for saving per-frame results and annotated frames.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{GestureError, Result};
use crate::results::FrameResults;

/// Find the next available run directory (exp, exp2, exp3, etc.)
#[must_use]
pub fn find_next_run_dir(base: &Path, prefix: &str) -> PathBuf {
    let first = base.join(prefix);
    if !first.exists() {
        return first;
    }

    (2..)
        .map(|i| base.join(format!("{prefix}{i}")))
        .find(|dir| !dir.exists())
        .unwrap_or(first)
}

/// File name for the annotated image of a frame.
#[must_use]
pub fn frame_file_name(frame_idx: usize) -> String {
    format!("frame_{frame_idx:06}.png")
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| {
        GestureError::IoError(format!("Failed to create directory {}: {e}", dir.display()))
    })
}

/// Helper struct to handle saving results to disk.
///
/// Every frame is appended to `results.jsonl` in the save directory; annotated
/// frames are written next to it as PNG files.
pub struct SaveResults {
    save_dir: PathBuf,
    writer: BufWriter<File>,
    frames_written: usize,
    images_written: usize,
}

impl SaveResults {
    /// Create the save directory and open its results file.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or results file cannot be created.
    pub fn new(save_dir: PathBuf) -> Result<Self> {
        create_dir(&save_dir)?;
        let path = save_dir.join("results.jsonl");
        let file = File::create(&path).map_err(|e| {
            GestureError::IoError(format!("Failed to create {}: {e}", path.display()))
        })?;

        Ok(Self {
            save_dir,
            writer: BufWriter::new(file),
            frames_written: 0,
            images_written: 0,
        })
    }

    /// Directory results are written to.
    #[must_use]
    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    /// Append one frame's results as a JSON line.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_results(&mut self, results: &FrameResults) -> Result<()> {
        serde_json::to_writer(&mut self.writer, results)?;
        self.writer.write_all(b"\n")?;
        self.frames_written += 1;
        Ok(())
    }

    /// Save an annotated frame as `frame_NNNNNN.png`.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be encoded or written.
    pub fn save_image(&mut self, frame_idx: usize, annotated: &image::DynamicImage) -> Result<PathBuf> {
        let save_path = self.save_dir.join(frame_file_name(frame_idx));
        annotated.save(&save_path).map_err(|e| {
            GestureError::ImageError(format!("Failed to save {}: {e}", save_path.display()))
        })?;
        self.images_written += 1;
        Ok(save_path)
    }

    #[must_use]
    pub const fn frames_written(&self) -> usize {
        self.frames_written
    }

    #[must_use]
    pub const fn images_written(&self) -> usize {
        self.images_written
    }

    /// Flush the results file.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffered results cannot be written.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_next_run_dir() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(find_next_run_dir(tmp.path(), "exp"), tmp.path().join("exp"));

        fs::create_dir(tmp.path().join("exp")).unwrap();
        assert_eq!(find_next_run_dir(tmp.path(), "exp"), tmp.path().join("exp2"));

        fs::create_dir(tmp.path().join("exp2")).unwrap();
        assert_eq!(find_next_run_dir(tmp.path(), "exp"), tmp.path().join("exp3"));
    }

    #[test]
    fn test_frame_file_name() {
        assert_eq!(frame_file_name(0), "frame_000000.png");
        assert_eq!(frame_file_name(1234), "frame_001234.png");
    }

    #[test]
    fn test_write_results_jsonl() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("run");
        let mut saver = SaveResults::new(dir.clone()).unwrap();

        saver.write_results(&FrameResults::new(0, Vec::new())).unwrap();
        saver.write_results(&FrameResults::new(1, Vec::new())).unwrap();
        assert_eq!(saver.frames_written(), 2);
        saver.finish().unwrap();

        let content = fs::read_to_string(dir.join("results.jsonl")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let second: FrameResults = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.frame_idx, 1);
    }

    #[test]
    fn test_save_image() {
        let tmp = tempfile::tempdir().unwrap();
        let mut saver = SaveResults::new(tmp.path().to_path_buf()).unwrap();
        let img = image::DynamicImage::new_rgb8(4, 4);

        let path = saver.save_image(3, &img).unwrap();
        assert!(path.ends_with("frame_000003.png"));
        assert!(path.exists());
        assert_eq!(saver.images_written(), 1);
    }
}
