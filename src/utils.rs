// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Utility functions for the gesture library

use std::collections::HashMap;

/// Format a count with a naively pluralized noun
///
/// # Examples
///
/// ```
/// use hand_gestures::utils::pluralize;
///
/// assert_eq!(pluralize(1, "hand"), "1 hand");
/// assert_eq!(pluralize(3, "finger"), "3 fingers");
/// ```
#[must_use]
pub fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Instantaneous frame rate from consecutive frame timestamps
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    prev_ms: Option<u64>,
}

impl FpsCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a frame timestamp and return the rate since the previous one
    ///
    /// Returns `None` for the first frame and whenever time did not advance.
    #[allow(clippy::cast_precision_loss)]
    pub fn tick(&mut self, timestamp_ms: u64) -> Option<f64> {
        let prev = self.prev_ms.replace(timestamp_ms)?;
        if timestamp_ms <= prev {
            return None;
        }
        Some(1000.0 / (timestamp_ms - prev) as f64)
    }

    /// Forget the previous timestamp
    pub fn reset(&mut self) {
        self.prev_ms = None;
    }
}

/// Tally of labels, sorted by descending count and then by name
#[derive(Debug, Clone, Default)]
pub struct Tally {
    counts: HashMap<String, usize>,
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: &str) {
        *self.counts.entry(label.to_string()).or_insert(0) += 1;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries ordered for display
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(label, &count)| (label.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "hand"), "0 hands");
        assert_eq!(pluralize(1, "hand"), "1 hand");
        assert_eq!(pluralize(2, "finger"), "2 fingers");
    }

    #[test]
    fn test_fps_counter() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.tick(0), None);
        let rate = fps.tick(40).unwrap();
        assert!((rate - 25.0).abs() < 1e-9);

        // Time going backwards or standing still yields nothing
        assert_eq!(fps.tick(40), None);
        assert_eq!(fps.tick(10), None);

        fps.reset();
        assert_eq!(fps.tick(100), None);
    }

    #[test]
    fn test_tally_sorted() {
        let mut tally = Tally::new();
        assert!(tally.is_empty());
        tally.add("Right: Good Job");
        tally.add("Left: Peace Sign");
        tally.add("Left: Peace Sign");
        tally.add("Left: Disapproval");

        assert_eq!(
            tally.sorted(),
            vec![
                ("Left: Peace Sign", 2),
                ("Left: Disapproval", 1),
                ("Right: Good Job", 1),
            ]
        );
    }
}
