// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Visualization tools for analyzed frames.

/// Color definitions and the overlay theme.
pub mod color;

/// Hand skeleton layout.
pub mod skeleton;

#[cfg(feature = "visualize")]
pub mod viewer;

pub use color::{Color, Theme};
pub use skeleton::HAND_PATHS;

#[cfg(feature = "visualize")]
pub use viewer::Viewer;
