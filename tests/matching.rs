//! Frame-level contract tests: selector semantics, hand-merge behavior,
//! two-handed gating, and determinism.

use nalgebra::Vector3;

use hand_gestures::pose_fixtures::{
    curl_fingers, fist_hand, frame, one_hand, open_hand, pinkyward, timeout_pair, touch_tip,
};
use hand_gestures::{
    FingerKind, GestureType, Hand, MatchConfig, Matcher, OrientationBasis, TrackingFrame,
    WhichHand,
};

fn matcher() -> Matcher {
    Matcher::new(MatchConfig::default(), OrientationBasis::head_mounted())
        .expect("default calibration is valid")
}

#[test]
fn empty_frame_reports_nothing_to_detect() {
    let report = matcher().match_frame(&TrackingFrame::empty(7), WhichHand::Any);
    assert!(!report.tracked);
    assert!(report.confidences.as_slice().iter().all(|&c| c == 0.0));
    assert_eq!(report.confidences.best(), None);
}

#[test]
fn absent_selected_hand_yields_zeroes_not_errors() {
    let frame = one_hand(open_hand(Hand::Left));
    let report = matcher().match_frame(&frame, WhichHand::Right);
    // The frame itself was tracked; the selected hand just was not there.
    assert!(report.tracked);
    assert!(report.confidences.as_slice().iter().all(|&c| c == 0.0));
}

#[test]
fn any_hand_equals_the_specific_selector_when_one_hand_is_tracked() {
    let m = matcher();
    let frame = one_hand(open_hand(Hand::Left));
    let any = m.match_frame(&frame, WhichHand::Any);
    let left = m.match_frame(&frame, WhichHand::Left);
    assert_eq!(any, left);
}

#[test]
fn any_hand_merges_by_maximum_across_hands() {
    let m = matcher();
    let mut pointing = open_hand(Hand::Left);
    curl_fingers(
        &mut pointing,
        &[FingerKind::Middle, FingerKind::Ring, FingerKind::Pinky],
    );
    let both = frame(1, vec![pointing.clone(), fist_hand(Hand::Right)]);

    let any = m.match_frame(&both, WhichHand::Any).confidences;
    let left_only = m.match_frame(&one_hand(pointing), WhichHand::Left).confidences;
    let right_only = m
        .match_frame(&one_hand(fist_hand(Hand::Right)), WhichHand::Right)
        .confidences;

    for gesture in GestureType::ALL.iter().filter(|g| !g.is_two_handed()) {
        let expected = left_only[*gesture].max(right_only[*gesture]);
        assert_eq!(
            any[*gesture], expected,
            "{gesture} should merge across hands by maximum"
        );
    }
    // The left hand points, the right hand grabs; both survive the merge.
    assert!(any[GestureType::VrchatPoint] > 0.99);
    assert!(any[GestureType::TriggerFinger] > 0.99);
}

#[test]
fn two_handed_gestures_need_both_hands() {
    let m = matcher();
    let (post, bar) = timeout_pair();

    let both = frame(1, vec![post.clone(), bar]);
    let report = m.match_frame(&both, WhichHand::Any);
    assert!(report.confidences[GestureType::Timeout] > 0.99);

    // Same posed hand alone: every two-handed slot stays zero, whatever the
    // selector.
    let alone = one_hand(post);
    for which in [WhichHand::Any, WhichHand::Left, WhichHand::Right] {
        let report = m.match_frame(&alone, which);
        for gesture in GestureType::ALL.iter().filter(|g| g.is_two_handed()) {
            assert_eq!(
                report.confidences[*gesture], 0.0,
                "{gesture} requires both hands (selector {which:?})"
            );
        }
    }
}

#[test]
fn touchpad_axes_encode_the_touch_position() {
    let m = matcher();
    let surface = open_hand(Hand::Right);
    let toward_pinky = pinkyward(&surface);

    let mut toucher = open_hand(Hand::Left);
    // Rest the left index fingertip 25 mm toward the pinky side of the
    // right palm: three quarters of the way across the 50 mm half extent.
    touch_tip(
        &mut toucher,
        FingerKind::Index,
        surface.palm_position + toward_pinky * 25.0,
    );

    let both = frame(1, vec![surface, toucher]);
    let scores = m.match_frame(&both, WhichHand::Right).confidences;
    assert!((scores[GestureType::TouchpadAxisX] - 0.75).abs() < 1e-3);
    // Centered along the palm direction: the Y slot reads the midpoint.
    assert!((scores[GestureType::TouchpadAxisY] - 0.5).abs() < 1e-3);
}

#[test]
fn touchpad_axes_are_zero_without_contact() {
    let m = matcher();
    let both = frame(1, vec![open_hand(Hand::Right), open_hand(Hand::Left)]);
    let scores = m.match_frame(&both, WhichHand::Right).confidences;
    // The resting hands are 160 mm apart, far beyond touch range.
    assert_eq!(scores[GestureType::TouchpadAxisX], 0.0);
    assert_eq!(scores[GestureType::TouchpadAxisY], 0.0);
}

#[test]
fn identical_inputs_classify_identically() {
    let m = matcher();
    let (post, bar) = timeout_pair();
    let both = frame(9, vec![post, bar]);
    let first = m.match_frame(&both, WhichHand::Any);
    let second = m.match_frame(&both, WhichHand::Any);
    assert_eq!(first, second);

    // A second matcher built from the same inputs agrees too.
    let other = matcher().match_frame(&both, WhichHand::Any);
    assert_eq!(first, other);
}

#[test]
fn duplicate_sides_merge_like_any_other_hands() {
    let m = matcher();
    let mut trigger = open_hand(Hand::Right);
    curl_fingers(&mut trigger, &[FingerKind::Index]);
    let doubled = frame(1, vec![trigger, open_hand(Hand::Right)]);

    let scores = m.match_frame(&doubled, WhichHand::Right).confidences;
    assert!(scores[GestureType::TriggerFinger] > 0.99);
    assert!(scores[GestureType::FlatHandPalmDown] > 0.99);
}

#[test]
fn every_confidence_stays_in_unit_range() {
    let m = matcher();
    let (post, bar) = timeout_pair();
    let frames = [
        TrackingFrame::empty(1),
        one_hand(open_hand(Hand::Left)),
        one_hand(fist_hand(Hand::Right)),
        frame(2, vec![post, bar]),
        frame(3, vec![open_hand(Hand::Left), open_hand(Hand::Right)]),
    ];
    for f in &frames {
        for which in [WhichHand::Any, WhichHand::Left, WhichHand::Right] {
            let report = m.match_frame(f, which);
            for (gesture, value) in report.confidences.iter() {
                assert!(
                    (0.0..=1.0).contains(&value),
                    "{gesture} confidence {value} out of range"
                );
            }
        }
    }
}

#[test]
fn rotated_basis_tracks_the_mount() {
    // Device rolled 90 degrees: device x is now world up. A palm whose
    // normal points along device x should read as palm-up under the rolled
    // basis and not under the stock one.
    let rolled = OrientationBasis {
        right: Vector3::new(0.0, -1.0, 0.0),
        inward: Vector3::new(0.0, 0.0, -1.0),
        up: Vector3::new(1.0, 0.0, 0.0),
    };
    let m = Matcher::new(MatchConfig::default(), rolled).expect("rolled basis is orthonormal");

    let hand = hand_gestures::pose_fixtures::flat_hand(
        Hand::Right,
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, -1.0),
    );
    let scores = m.match_frame(&one_hand(hand.clone()), WhichHand::Any).confidences;
    assert!(scores[GestureType::FlatHandPalmUp] > 0.99);

    let stock = matcher().match_frame(&one_hand(hand), WhichHand::Any).confidences;
    assert_eq!(stock[GestureType::FlatHandPalmUp], 0.0);
}
