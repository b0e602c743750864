//! Tracked-hand data model.
//!
//! A [`TrackingFrame`] is one read-only snapshot from an upstream hand
//! tracker: zero to two hands, each with a palm pose and five fingers of
//! four bones. Positions are millimeters in the tracking device's native
//! coordinate system; direction vectors are unit length.
//!
//! The matcher never mutates a frame and keeps no state between frames.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Which physical hand a pose belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// The other hand.
    pub fn opposite(self) -> Hand {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Selector controlling which tracked hand(s) the matcher evaluates.
///
/// Pure configuration: with [`WhichHand::Any`], per-gesture confidences from
/// each tracked hand combine by maximum, so a gesture counts as seen if at
/// least one hand exhibits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhichHand {
    /// Evaluate every tracked hand and merge the results.
    #[default]
    Any,
    /// Evaluate only the left hand.
    Left,
    /// Evaluate only the right hand.
    Right,
}

impl WhichHand {
    /// Whether a hand of the given side falls under this selector.
    pub fn selects(self, side: Hand) -> bool {
        match self {
            Self::Any => true,
            Self::Left => side == Hand::Left,
            Self::Right => side == Hand::Right,
        }
    }
}

/// The five fingers, in radial order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingerKind {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

/// Fingers per hand.
pub const FINGER_COUNT: usize = 5;

impl FingerKind {
    /// All fingers in radial order.
    pub const ALL: [FingerKind; FINGER_COUNT] = [
        FingerKind::Thumb,
        FingerKind::Index,
        FingerKind::Middle,
        FingerKind::Ring,
        FingerKind::Pinky,
    ];

    /// Array index of this finger within [`HandPose::fingers`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The four bones of a finger, base to tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingerBone {
    Metacarpal,
    Proximal,
    Intermediate,
    Distal,
}

/// Bones per finger.
pub const BONE_COUNT: usize = 4;

impl FingerBone {
    /// Array index of this bone within [`FingerPose::directions`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Pose of a single finger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FingerPose {
    /// Fingertip position, millimeters.
    pub tip_position: Vector3<f32>,
    /// Unit pointing direction of each bone, indexed by [`FingerBone`].
    pub directions: [Vector3<f32>; BONE_COUNT],
}

impl FingerPose {
    /// Direction of the distal bone; the finger's pointing direction.
    pub fn pointing(&self) -> Vector3<f32> {
        self.directions[FingerBone::Distal.index()]
    }
}

/// Pose of one tracked hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandPose {
    /// Which hand this is.
    pub side: Hand,
    /// Palm center position, millimeters.
    pub palm_position: Vector3<f32>,
    /// Unit vector out of the palm surface.
    pub palm_normal: Vector3<f32>,
    /// Unit vector from palm center toward the fingers.
    pub palm_direction: Vector3<f32>,
    /// Finger poses indexed by [`FingerKind`].
    pub fingers: [FingerPose; FINGER_COUNT],
}

impl HandPose {
    /// Pose of one finger.
    pub fn finger(&self, kind: FingerKind) -> &FingerPose {
        &self.fingers[kind.index()]
    }
}

/// One snapshot from the tracking source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingFrame {
    /// Monotonic frame counter from the tracker, for logging and capture
    /// alignment.
    pub frame_id: u64,
    /// Zero to two tracked hands. Duplicate sides are tolerated; the
    /// matcher merges them like any other multi-hand input.
    pub hands: Vec<HandPose>,
}

impl TrackingFrame {
    /// Frame with no tracked hands.
    pub fn empty(frame_id: u64) -> Self {
        Self {
            frame_id,
            hands: Vec::new(),
        }
    }

    /// First hand of the given side, if tracked.
    pub fn hand(&self, side: Hand) -> Option<&HandPose> {
        self.hands.iter().find(|h| h.side == side)
    }
}
