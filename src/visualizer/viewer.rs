// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Live window for annotated frames.

use std::time::{Duration, Instant};

use image::DynamicImage;
use minifb::{Key, Window, WindowOptions};

use crate::error::{GestureError, Result};
use crate::results::FrameResults;
use crate::visualizer::color::Color;

/// A simple image viewer using minifb.
pub struct Viewer {
    window: Window,
    title: String,
    pub width: usize,
    pub height: usize,
    buffer: Vec<u32>,
}

impl Viewer {
    /// Create a new viewer window.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| GestureError::VisualizerError(format!("Failed to create window: {e}")))?;

        // Limit update rate
        window.set_target_fps(60);

        Ok(Self {
            window,
            title: title.to_string(),
            width,
            height,
            buffer: Vec::new(),
        })
    }

    fn should_close(&self) -> bool {
        !self.window.is_open()
            || self.window.is_key_down(Key::Escape)
            || self.window.is_key_down(Key::Q)
    }

    /// Show the live counters and gestures of the latest frame in the title bar.
    pub fn set_status(&mut self, results: &FrameResults) {
        let status = status_line(&self.title, results);
        self.window.set_title(&status);
    }

    /// Update the window with a new image.
    ///
    /// Returns `false` once the user closed the window or pressed Esc or Q.
    ///
    /// # Errors
    ///
    /// Returns an error if the window buffer cannot be updated.
    pub fn update(&mut self, image: &DynamicImage) -> Result<bool> {
        if self.should_close() {
            return Ok(false);
        }

        let rgb = image.to_rgb8();
        let (img_width, img_height) = (rgb.width() as usize, rgb.height() as usize);

        self.buffer.clear();
        self.buffer.extend(
            rgb.pixels()
                .map(|p| Color::new(p[0], p[1], p[2]).to_u32()),
        );
        self.width = img_width;
        self.height = img_height;

        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|e| GestureError::VisualizerError(format!("Failed to update window: {e}")))?;

        Ok(true)
    }

    /// Keep the last frame on screen for `duration` while staying responsive.
    ///
    /// # Errors
    ///
    /// Returns an error if the window buffer cannot be updated.
    pub fn wait(&mut self, duration: Duration) -> Result<bool> {
        if self.buffer.is_empty() {
            return Ok(true);
        }

        let start = Instant::now();
        while start.elapsed() < duration {
            if self.should_close() {
                return Ok(false);
            }
            self.window
                .update_with_buffer(&self.buffer, self.width, self.height)
                .map_err(|e| {
                    GestureError::VisualizerError(format!("Failed to update window: {e}"))
                })?;
        }
        Ok(true)
    }
}

/// Window title such as `"hands | FPS 30.0 | Hands 1 | Fingers 2 | Right: Peace Sign"`.
#[must_use]
pub fn status_line(title: &str, results: &FrameResults) -> String {
    let mut parts = vec![title.to_string()];
    if let Some(fps) = results.fps {
        parts.push(format!("FPS {fps:.1}"));
    }
    parts.push(format!("Hands {}", results.hand_count()));
    parts.push(format!("Fingers {}", results.total_fingers()));
    parts.extend(results.gestures());
    parts.join(" | ")
}
