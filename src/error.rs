// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the gesture library.

use std::fmt;

/// Result type alias for gesture operations.
pub type Result<T> = std::result::Result<T, GestureError>;

/// Main error type for the gesture library.
#[derive(Debug)]
pub enum GestureError {
    /// A hand landmark set did not contain exactly 21 points.
    InvalidLandmarks(String),
    /// A recorded landmark frame could not be parsed.
    ParseError(String),
    /// Error opening or reading an input source.
    SourceError(String),
    /// Invalid configuration provided.
    ConfigError(String),
    /// Error processing images.
    ImageError(String),
    /// IO error with context (file not found, permission denied, etc.).
    IoError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
    /// Visualizer error.
    VisualizerError(String),
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLandmarks(msg) => write!(f, "Invalid landmarks: {msg}"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::SourceError(msg) => write!(f, "Source error: {msg}"),
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
            Self::IoError(msg) => write!(f, "IO error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::VisualizerError(msg) => write!(f, "Visualizer error: {msg}"),
        }
    }
}

impl std::error::Error for GestureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GestureError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for GestureError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<image::ImageError> for GestureError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GestureError::InvalidLandmarks("expected 21 landmarks, got 20".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid landmarks: expected 21 landmarks, got 20"
        );

        let err = GestureError::SourceError("test".to_string());
        assert_eq!(err.to_string(), "Source error: test");
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;

        let err = GestureError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(err.source().is_some());
        assert!(GestureError::ConfigError("x".to_string()).source().is_none());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err = GestureError::from(json_err);
        assert!(matches!(err, GestureError::ParseError(_)));
    }
}
