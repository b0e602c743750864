//! Synthetic hand poses for tests and benches.
//!
//! Poses are built in a hand-local frame (palm normal / palm direction /
//! pinky-ward lateral) so the same helpers compose into any gesture: start
//! from [`open_hand`] or [`flat_hand`], then curl, aim, or reposition
//! individual fingers.

use nalgebra::Vector3;

use crate::hand::{
    BONE_COUNT, FINGER_COUNT, FingerKind, FingerPose, Hand, HandPose, TrackingFrame,
};

/// Per-finger lateral tip offset across the palm, thumb to pinky,
/// millimeters toward the pinky side.
const TIP_SPACING_MM: [f32; FINGER_COUNT] = [-45.0, -27.0, -9.0, 9.0, 27.0];

fn straight_finger(direction: Vector3<f32>, tip_position: Vector3<f32>) -> FingerPose {
    FingerPose {
        tip_position,
        directions: [direction; BONE_COUNT],
    }
}

/// Lateral palm axis pointing toward the pinky side.
pub fn pinkyward(pose: &HandPose) -> Vector3<f32> {
    let lateral = pose.palm_normal.cross(&pose.palm_direction);
    match pose.side {
        Hand::Right => lateral,
        Hand::Left => -lateral,
    }
}

/// A unit direction rotated from `direction` toward `toward` by `degrees`.
pub fn rotated(direction: Vector3<f32>, toward: Vector3<f32>, degrees: f32) -> Vector3<f32> {
    let radians = degrees.to_radians();
    (direction * radians.cos() + toward * radians.sin()).normalize()
}

/// Fully extended hand with the given palm orientation. Fingers point along
/// the palm direction; the thumb splays toward its own side of the palm.
pub fn flat_hand(side: Hand, palm_normal: Vector3<f32>, palm_direction: Vector3<f32>) -> HandPose {
    let palm_position = match side {
        Hand::Left => Vector3::new(-80.0, 0.0, -150.0),
        Hand::Right => Vector3::new(80.0, 0.0, -150.0),
    };
    let normal = palm_normal.normalize();
    let direction = palm_direction.normalize();

    let mut pose = HandPose {
        side,
        palm_position,
        palm_normal: normal,
        palm_direction: direction,
        fingers: std::array::from_fn(|_| straight_finger(direction, palm_position)),
    };

    let lateral = pinkyward(&pose);
    let thumbward = -lateral;
    for kind in FingerKind::ALL {
        let finger = match kind {
            FingerKind::Thumb => {
                let thumb_direction = (thumbward * 0.8 + direction * 0.6).normalize();
                straight_finger(thumb_direction, palm_position + thumb_direction * 70.0)
            }
            _ => {
                let tip =
                    palm_position + direction * 85.0 + lateral * TIP_SPACING_MM[kind.index()];
                straight_finger(direction, tip)
            }
        };
        pose.fingers[kind.index()] = finger;
    }
    pose
}

/// Flat hand, palm down, fingers pointing away from the wearer.
pub fn open_hand(side: Hand) -> HandPose {
    flat_hand(side, Vector3::new(0.0, -1.0, 0.0), Vector3::new(0.0, 0.0, -1.0))
}

/// Hand with all five fingers wrapped toward the palm.
pub fn fist_hand(side: Hand) -> HandPose {
    let mut pose = open_hand(side);
    curl_fingers(&mut pose, &FingerKind::ALL);
    pose
}

/// Wrap the listed fingers toward the palm: successive bones rotate deeper
/// into the palm-normal half-space and the tip moves next to the palm.
pub fn curl_fingers(pose: &mut HandPose, kinds: &[FingerKind]) {
    let normal = pose.palm_normal;
    for &kind in kinds {
        let base = pose.fingers[kind.index()].directions[0];
        let mut directions = [Vector3::zeros(); BONE_COUNT];
        for (bone, angle) in [0.0f32, 50.0, 100.0, 150.0].into_iter().enumerate() {
            let radians = angle.to_radians();
            directions[bone] = (base * radians.cos() + normal * radians.sin()).normalize();
        }
        pose.fingers[kind.index()].directions = directions;
        pose.fingers[kind.index()].tip_position =
            pose.palm_position + normal * 15.0 + base * 25.0;
    }
}

/// Straighten one finger along an explicit direction.
pub fn aim_finger(pose: &mut HandPose, kind: FingerKind, direction: Vector3<f32>) {
    let direction = direction.normalize();
    let reach = if kind == FingerKind::Thumb { 70.0 } else { 85.0 };
    pose.fingers[kind.index()] = straight_finger(direction, pose.palm_position + direction * reach);
}

/// Move one fingertip to an exact position, leaving bone directions alone.
pub fn touch_tip(pose: &mut HandPose, kind: FingerKind, position: Vector3<f32>) {
    pose.fingers[kind.index()].tip_position = position;
}

/// Open hand with the thumb tip brought against the index tip.
pub fn pinch_hand(side: Hand) -> HandPose {
    let mut pose = open_hand(side);
    let index_tip = pose.finger(FingerKind::Index).tip_position;
    touch_tip(&mut pose, FingerKind::Thumb, index_tip + Vector3::new(2.0, 0.0, 0.0));
    pose
}

/// Two flat hands forming a T: the right hand's middle fingertip rests on
/// the left palm, palm directions perpendicular.
pub fn timeout_pair() -> (HandPose, HandPose) {
    let mut post = flat_hand(
        Hand::Right,
        Vector3::new(0.0, -1.0, 0.0),
        Vector3::new(-1.0, 0.0, 0.0),
    );
    let bar = flat_hand(
        Hand::Left,
        Vector3::new(0.0, -1.0, 0.0),
        Vector3::new(0.0, 0.0, -1.0),
    );
    touch_tip(&mut post, FingerKind::Middle, bar.palm_position);
    (post, bar)
}

/// Frame holding the given hands.
pub fn frame(frame_id: u64, hands: Vec<HandPose>) -> TrackingFrame {
    TrackingFrame { frame_id, hands }
}

/// Single-hand frame.
pub fn one_hand(hand: HandPose) -> TrackingFrame {
    frame(1, vec![hand])
}
