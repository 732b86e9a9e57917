// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Property tests for finger geometry and motion tracking

use hand_gestures::{
    Finger, GestureClassifier, HandGeometry, HandLandmarks, LANDMARK_COUNT, Landmark,
    MotionTracker,
};
use proptest::prelude::*;

fn landmark() -> impl Strategy<Value = Landmark> {
    (0.1f32..0.9, 0.1f32..0.9).prop_map(|(x, y)| Landmark::new(x, y))
}

fn hand() -> impl Strategy<Value = HandLandmarks> {
    prop::collection::vec(landmark(), LANDMARK_COUNT)
        .prop_map(|points| HandLandmarks::try_from(points).unwrap())
}

/// Relative margin between the two sides of a finger comparison.
fn margin(hand: &HandLandmarks, finger: Finger) -> f32 {
    let (lhs, rhs) = match finger {
        Finger::Thumb => (
            hand[finger.tip()].distance(&hand[17]),
            hand[1].distance(&hand[17]) * 0.95,
        ),
        _ => (
            hand[finger.tip()].distance(&hand[0]),
            hand[finger.pip()].distance(&hand[0]) * 1.05,
        ),
    };
    (lhs - rhs).abs()
}

proptest! {
    #[test]
    fn prop_translation_invariance(hand in hand(), dx in -0.05f32..0.05, dy in -0.05f32..0.05) {
        let moved = hand.translated(dx, dy);
        let before = HandGeometry::new(&hand);
        let after = HandGeometry::new(&moved);

        for finger in Finger::ALL {
            // Skip comparisons too close to call after float rounding
            prop_assume!(margin(&hand, finger) > 1e-4);
            prop_assert_eq!(
                before.is_finger_extended(finger),
                after.is_finger_extended(finger)
            );
        }
    }

    #[test]
    fn prop_extended_count_matches_flags(hand in hand()) {
        let geometry = HandGeometry::new(&hand);
        let flags = geometry.extended_fingers();
        let count = geometry.extended_count();
        prop_assert!(count <= 5);
        prop_assert_eq!(count, flags.iter().filter(|&&f| f).count());
    }

    #[test]
    fn prop_gesture_implies_finger_pattern(hand in hand()) {
        if GestureClassifier::new().classify(&hand).is_some() {
            let count = HandGeometry::new(&hand).extended_count();
            prop_assert!(count == 1 || count == 2);
        }
    }

    #[test]
    fn prop_hold_counter_bounded(
        steps in prop::collection::vec((-0.1f32..0.1, -0.1f32..0.1), 1..60),
        hold in 1u32..12,
    ) {
        let mut tracker = MotionTracker::new().with_hold_frames(hold);
        let mut position = Landmark::new(0.5, 0.5);

        prop_assert!(!tracker.update(0, position));
        for (dx, dy) in steps {
            position = position.translated(dx, dy);
            let moving = tracker.update(0, position);
            let remaining = tracker.hold_frames(0).unwrap();
            prop_assert!(remaining <= hold);
            prop_assert_eq!(moving, remaining > 0);
        }
    }
}
