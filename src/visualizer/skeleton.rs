// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

/// Hand skeleton as polylines of landmark indices, one per finger plus the palm
pub const HAND_PATHS: [&[usize]; 6] = [
    &[0, 1, 2, 3, 4],      // thumb
    &[5, 6, 7, 8],         // index
    &[9, 10, 11, 12],      // middle
    &[13, 14, 15, 16],     // ring
    &[17, 18, 19, 20],     // pinky
    &[0, 5, 9, 13, 17, 0], // palm
];

/// Consecutive index pairs of every path
pub fn hand_segments() -> impl Iterator<Item = (usize, usize)> {
    HAND_PATHS
        .iter()
        .flat_map(|path| path.windows(2).map(|pair| (pair[0], pair[1])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::LANDMARK_COUNT;

    #[test]
    fn test_paths_cover_every_landmark() {
        let mut seen = [false; LANDMARK_COUNT];
        for path in HAND_PATHS {
            for &idx in path {
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_segment_count() {
        // 4 + 3 * 4 finger bones, 5 palm edges
        assert_eq!(hand_segments().count(), 21);
    }
}
