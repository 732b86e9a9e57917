// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Overlay drawing for analyzed frames.

use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut, draw_hollow_rect_mut,
    draw_line_segment_mut, draw_text_mut, text_size,
};
use imageproc::rect::Rect;

use crate::error::{GestureError, Result};
use crate::landmark::{HandLandmarks, Landmark};
use crate::results::{FrameResults, HandResult};
use crate::visualizer::color::{Color, Theme};
use crate::visualizer::skeleton::hand_segments;

/// Font looked up in the config directory when none is given.
pub const DEFAULT_FONT: &str = "Arial.ttf";

const LABEL_SCALE: f32 = 20.0;
const MOTION_SCALE: f32 = 16.0;
const HUD_SCALE: f32 = 18.0;
const LABEL_PAD_X: i32 = 10;
const LABEL_PAD_Y: i32 = 8;
const POINT_RADIUS: i32 = 5;

/// Locate a font file.
///
/// An explicit path is used as given. Otherwise [`DEFAULT_FONT`] is looked up
/// under `<config dir>/hand-gestures/`.
pub fn find_font(font: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = font {
        return path.exists().then(|| path.to_path_buf());
    }

    let font_path = dirs::config_dir()?.join("hand-gestures").join(DEFAULT_FONT);
    font_path.exists().then_some(font_path)
}

/// Load image helper.
///
/// # Errors
///
/// Returns an error if the image cannot be opened or decoded.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| {
        GestureError::ImageError(format!("Failed to load image {}: {e}", path.display()))
    })
}

/// A solid background for frames recorded without an image.
#[must_use]
pub fn blank_canvas(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(
        width.max(1),
        height.max(1),
        Theme::PANEL_BG.into(),
    ))
}

/// Map a normalized landmark to pixel coordinates inside the image.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn to_pixel(landmark: Landmark, width: u32, height: u32) -> (i32, i32) {
    let max_x = width.saturating_sub(1) as f32;
    let max_y = height.saturating_sub(1) as f32;
    let x = (landmark.x * width as f32).clamp(0.0, max_x);
    let y = (landmark.y * height as f32).clamp(0.0, max_y);
    (x as i32, y as i32)
}

fn pixel_points(landmarks: &HandLandmarks, width: u32, height: u32) -> Vec<(i32, i32)> {
    landmarks
        .iter()
        .map(|&lm| to_pixel(lm, width, height))
        .collect()
}

/// Clamp that tolerates an empty range by pinning to `min`.
fn clamp(value: i32, min: i32, max: i32) -> i32 {
    value.min(max).max(min)
}

#[allow(clippy::cast_precision_loss)]
fn draw_thick_line(
    img: &mut RgbImage,
    from: (i32, i32),
    to: (i32, i32),
    thickness: i32,
    color: Rgb<u8>,
) {
    let half = thickness / 2;
    for dx in -half..=half {
        for dy in -half..=half {
            draw_line_segment_mut(
                img,
                ((from.0 + dx) as f32, (from.1 + dy) as f32),
                ((to.0 + dx) as f32, (to.1 + dy) as f32),
                color,
            );
        }
    }
}

/// Draws skeletons, labels and the HUD onto frames.
pub struct Annotator {
    font: Option<FontVec>,
}

impl Annotator {
    /// Create an annotator, loading the font if one can be found.
    ///
    /// Without a font only the skeleton and label boxes are drawn.
    #[must_use]
    pub fn new(font: Option<&Path>) -> Self {
        let font = find_font(font).and_then(|path| match fs::read(&path) {
            Ok(data) => FontVec::try_from_vec(data).ok(),
            Err(e) => {
                eprintln!("Failed to read font {}: {e}", path.display());
                None
            }
        });
        Self { font }
    }

    /// Annotator that never draws text.
    #[must_use]
    pub const fn without_font() -> Self {
        Self { font: None }
    }

    /// Whether labels will carry text.
    #[must_use]
    pub const fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Draw every hand of `results` plus the HUD onto a copy of `image`.
    #[must_use]
    pub fn annotate(&self, image: &DynamicImage, results: &FrameResults) -> DynamicImage {
        let mut img = image.to_rgb8();

        for hand in &results.hands {
            self.draw_hand(&mut img, hand);
        }
        self.draw_hud(&mut img, results);

        DynamicImage::ImageRgb8(img)
    }

    fn draw_hand(&self, img: &mut RgbImage, hand: &HandResult) {
        let (width, height) = img.dimensions();
        let points = pixel_points(&hand.landmarks, width, height);

        draw_skeleton(img, &points, Theme::PRIMARY);
        draw_points(img, &points, Theme::SUCCESS);

        let wrist = points[0];
        self.draw_label(img, &hand.display_label(), wrist, Theme::PRIMARY);

        if hand.is_moving
            && let Some(font) = &self.font
        {
            draw_text_mut(
                img,
                Theme::SECONDARY.into(),
                wrist.0 + 10,
                wrist.1 + 20,
                PxScale::from(MOTION_SCALE),
                font,
                "MOVING",
            );
        }
    }

    /// Label box anchored above `anchor`, kept inside the frame.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn draw_label(&self, img: &mut RgbImage, text: &str, anchor: (i32, i32), border: Color) {
        let (width, height) = img.dimensions();
        let scale = PxScale::from(LABEL_SCALE);
        let (tw, th) = self
            .font
            .as_ref()
            .map_or((text.len() as u32 * 9, 14), |font| text_size(scale, font, text));
        let (tw, th) = (tw as i32, th as i32);

        let box_w = tw + LABEL_PAD_X * 2;
        let box_h = th + LABEL_PAD_Y * 2;
        let x = clamp(anchor.0, 0, width as i32 - box_w);
        let y = clamp(anchor.1 - 10, th + LABEL_PAD_Y, height as i32);
        let top = y - th - LABEL_PAD_Y;

        let panel = Rect::at(x, top).of_size(box_w as u32, box_h as u32);
        let shadow = Rect::at(x + 2, top + 2).of_size(box_w as u32, box_h as u32);
        draw_filled_rect_mut(img, shadow, Theme::SHADOW.into());
        draw_filled_rect_mut(img, panel, Theme::PANEL_BG.into());
        draw_hollow_rect_mut(img, panel, border.into());
        if box_w > 2 && box_h > 2 {
            let inner = Rect::at(x + 1, top + 1).of_size(box_w as u32 - 2, box_h as u32 - 2);
            draw_hollow_rect_mut(img, inner, border.into());
        }

        if let Some(font) = &self.font {
            draw_text_mut(
                img,
                Theme::TEXT.into(),
                x + LABEL_PAD_X,
                top + LABEL_PAD_Y,
                scale,
                font,
                text,
            );
        }
    }

    /// Counters panel in the top-left corner.
    fn draw_hud(&self, img: &mut RgbImage, results: &FrameResults) {
        let Some(font) = &self.font else {
            return;
        };

        let fps = results
            .fps
            .map_or_else(|| "-".to_string(), |fps| format!("{fps:.1}"));
        let lines = [
            (format!("FPS: {fps}"), Theme::ACCENT),
            (format!("Hands: {}", results.hand_count()), Theme::TEXT),
            (format!("Fingers: {}", results.total_fingers()), Theme::TEXT),
        ];

        let scale = PxScale::from(HUD_SCALE);
        let line_h = 24;
        let panel = Rect::at(8, 8).of_size(150, 3 * 24 + 12);
        draw_filled_rect_mut(img, panel, Theme::PANEL_BG.into());
        draw_hollow_rect_mut(img, panel, Theme::TEXT_DIM.into());

        for (i, (text, color)) in (0i32..).zip(lines.iter()) {
            draw_text_mut(img, (*color).into(), 16, 14 + i * line_h, scale, font, text);
        }
    }
}

/// Skeleton polylines with a dark outline underneath.
pub fn draw_skeleton(img: &mut RgbImage, points: &[(i32, i32)], color: Color) {
    for (a, b) in hand_segments() {
        draw_thick_line(img, points[a], points[b], 4, Theme::SHADOW.into());
    }
    for (a, b) in hand_segments() {
        draw_thick_line(img, points[a], points[b], 2, color.into());
    }
}

/// Filled landmark points with a white ring.
pub fn draw_points(img: &mut RgbImage, points: &[(i32, i32)], color: Color) {
    for &center in points {
        draw_filled_circle_mut(img, center, POINT_RADIUS, color.into());
        draw_hollow_circle_mut(img, center, POINT_RADIUS + 1, Theme::TEXT.into());
    }
}
