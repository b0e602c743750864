//! Gesture catalog and name lookup.
//!
//! The catalog is a closed set with stable ordinals: every entry doubles as
//! an index into the per-frame confidence vector, so the order below is part
//! of the public contract. New gestures are appended at the end; existing
//! entries are never renumbered, because persisted confidence-vector
//! consumers hold raw indices.
//!
//! Canonical names are the strings external configuration persists. Lookup
//! is case-sensitive and exact; callers wanting case-insensitive behavior
//! normalize before calling [`GestureType::from_name`].

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of entries in the gesture catalog, and the length of every
/// confidence vector.
pub const GESTURE_COUNT: usize = 22;

/// A recognizable static pose of one or two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureType {
    /// Index finger bent as if pulling a trigger.
    TriggerFinger,
    /// Middle, ring, and pinky fingers grab toward the palm.
    LowerFist,
    /// Thumb and index fingertips brought together.
    Pinch,
    /// Thumb pointing toward the pinky side of the palm.
    ThumbPress,
    /// Middle finger extended, remaining fingers curled.
    FlippingTheBird,
    /// Index and pinky extended, middle and ring bent.
    Ily,
    /// V shape with index and middle fingers, other fingers curled.
    Victory,
    /// Flat hand, palm facing up.
    FlatHandPalmUp,
    /// Flat hand, palm facing down.
    FlatHandPalmDown,
    /// Flat hand, palm facing away from the wearer.
    FlatHandPalmAway,
    /// Flat hand, palm facing toward the wearer.
    FlatHandPalmTowards,
    /// Thumb points up, remaining fingers form a fist.
    ThumbUp,
    /// Thumb points toward the body midline over a fist.
    ThumbInward,
    /// Index extended, other fingers curled (thumb free).
    VrchatPoint,
    /// Index and pinky extended, middle and ring curled, thumb tucked.
    VrchatRockOut,
    /// All fingers extended and fanned apart.
    VrchatSpreadHand,
    /// Index and thumb extended, other fingers curled.
    VrchatGun,
    /// Thumb extended, other fingers curled, any orientation.
    VrchatThumbsUp,
    /// Index and middle extended, ring and pinky curled, no spread required.
    VrchatVictory,
    /// Both hands form a T shape, as a sports timeout signal.
    Timeout,
    /// Touch-surface emulation: lateral position of the off hand's index
    /// fingertip on the selected hand's palm.
    TouchpadAxisX,
    /// Touch-surface emulation: longitudinal position of the off hand's
    /// index fingertip on the selected hand's palm.
    TouchpadAxisY,
}

/// Semantic grouping of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureGroup {
    /// Defined by finger curl/extension; hand orientation stays free.
    Finger,
    /// Defined by whole-hand orientation.
    Hand,
    /// Application-specific poses (VRChat input set).
    Application,
    /// Requires the relative pose of both hands.
    TwoHanded,
}

/// Catalog order with canonical names. Single source of truth for the
/// name mapping; kept in ordinal order so `NAME_TABLE[g.index()]` is `g`.
const NAME_TABLE: [(GestureType, &str); GESTURE_COUNT] = [
    (GestureType::TriggerFinger, "TriggerFinger"),
    (GestureType::LowerFist, "LowerFist"),
    (GestureType::Pinch, "Pinch"),
    (GestureType::ThumbPress, "Thumbpress"),
    (GestureType::FlippingTheBird, "FlippingTheBird"),
    (GestureType::Ily, "ILY"),
    (GestureType::Victory, "Victory"),
    (GestureType::FlatHandPalmUp, "FlatHandPalmUp"),
    (GestureType::FlatHandPalmDown, "FlatHandPalmDown"),
    (GestureType::FlatHandPalmAway, "FlatHandPalmAway"),
    (GestureType::FlatHandPalmTowards, "FlatHandPalmTowards"),
    (GestureType::ThumbUp, "ThumbUp"),
    (GestureType::ThumbInward, "ThumbInward"),
    (GestureType::VrchatPoint, "VRChat_Point"),
    (GestureType::VrchatRockOut, "VRChat_RockOut"),
    (GestureType::VrchatSpreadHand, "VRChat_SpreadHand"),
    (GestureType::VrchatGun, "VRChat_Gun"),
    (GestureType::VrchatThumbsUp, "VRChat_ThumbsUp"),
    (GestureType::VrchatVictory, "VRChat_Victory"),
    (GestureType::Timeout, "Timeout"),
    (GestureType::TouchpadAxisX, "TouchpadAxisX"),
    (GestureType::TouchpadAxisY, "TouchpadAxisY"),
];

static NAME_LOOKUP: Lazy<HashMap<&'static str, GestureType>> = Lazy::new(|| {
    let map: HashMap<_, _> = NAME_TABLE
        .iter()
        .map(|&(gesture, name)| (name, gesture))
        .collect();
    assert_eq!(map.len(), GESTURE_COUNT, "duplicate gesture name in catalog");
    map
});

impl GestureType {
    /// Every catalog entry in ordinal order.
    pub const ALL: [GestureType; GESTURE_COUNT] = [
        GestureType::TriggerFinger,
        GestureType::LowerFist,
        GestureType::Pinch,
        GestureType::ThumbPress,
        GestureType::FlippingTheBird,
        GestureType::Ily,
        GestureType::Victory,
        GestureType::FlatHandPalmUp,
        GestureType::FlatHandPalmDown,
        GestureType::FlatHandPalmAway,
        GestureType::FlatHandPalmTowards,
        GestureType::ThumbUp,
        GestureType::ThumbInward,
        GestureType::VrchatPoint,
        GestureType::VrchatRockOut,
        GestureType::VrchatSpreadHand,
        GestureType::VrchatGun,
        GestureType::VrchatThumbsUp,
        GestureType::VrchatVictory,
        GestureType::Timeout,
        GestureType::TouchpadAxisX,
        GestureType::TouchpadAxisY,
    ];

    /// Stable ordinal of this gesture; the confidence-vector slot it owns.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Gesture for a raw confidence-vector index, if in range.
    pub fn from_index(index: usize) -> Option<GestureType> {
        Self::ALL.get(index).copied()
    }

    /// Canonical name of this gesture. Total over the catalog.
    pub fn name(self) -> &'static str {
        NAME_TABLE[self.index()].1
    }

    /// Exact, case-sensitive reverse lookup of [`name`](Self::name).
    ///
    /// Returns `None` for anything not in the catalog; callers needing
    /// case-insensitive lookup must normalize first.
    pub fn from_name(name: &str) -> Option<GestureType> {
        NAME_LOOKUP.get(name).copied()
    }

    /// Which catalog section this gesture belongs to.
    pub fn group(self) -> GestureGroup {
        match self {
            GestureType::TriggerFinger
            | GestureType::LowerFist
            | GestureType::Pinch
            | GestureType::ThumbPress => GestureGroup::Finger,
            GestureType::FlippingTheBird
            | GestureType::Ily
            | GestureType::Victory
            | GestureType::FlatHandPalmUp
            | GestureType::FlatHandPalmDown
            | GestureType::FlatHandPalmAway
            | GestureType::FlatHandPalmTowards
            | GestureType::ThumbUp
            | GestureType::ThumbInward => GestureGroup::Hand,
            GestureType::VrchatPoint
            | GestureType::VrchatRockOut
            | GestureType::VrchatSpreadHand
            | GestureType::VrchatGun
            | GestureType::VrchatThumbsUp
            | GestureType::VrchatVictory => GestureGroup::Application,
            GestureType::Timeout | GestureType::TouchpadAxisX | GestureType::TouchpadAxisY => {
                GestureGroup::TwoHanded
            }
        }
    }

    /// True for gestures that need the relative pose of both hands.
    pub fn is_two_handed(self) -> bool {
        self.group() == GestureGroup::TwoHanded
    }
}

impl fmt::Display for GestureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Gestures persist as their canonical name so stored configuration stays
// readable and survives catalog growth.
impl Serialize for GestureType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for GestureType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        GestureType::from_name(&name)
            .ok_or_else(|| D::Error::custom(format!("unknown gesture name: {name:?}")))
    }
}
