//! Confidence vector and the two numeric rules every score passes through.
//!
//! All classification output funnels through [`range_map`] (continuous
//! geometric error → bounded confidence) and [`merge`] (maximum, the sole
//! combination rule across criteria and across hands). Keeping both here,
//! used everywhere, is what guarantees the [0, 1] confidence contract.

use serde::{Deserialize, Serialize};

use crate::gesture::{GESTURE_COUNT, GestureType};

/// Linearly rescale `input` from the calibration interval
/// `[minimum, maximum]` into [0, 1], saturating at both ends.
///
/// Decreasing intervals (`minimum > maximum`) map inversely; call sites use
/// this for closer-is-better measurements such as pinch distance. A
/// degenerate interval (`minimum == maximum`) yields the defined result 0.0
/// — the criterion contributes nothing — rather than dividing by zero.
pub fn range_map(input: f32, minimum: f32, maximum: f32) -> f32 {
    if minimum == maximum {
        return 0.0;
    }
    ((input - minimum) / (maximum - minimum)).clamp(0.0, 1.0)
}

/// Combine an accumulated confidence with a new candidate: the maximum.
///
/// Associative, commutative, idempotent, identity 0.0. Used both to fold
/// multiple criteria into one gesture slot and to fold per-hand results
/// under [`WhichHand::Any`](crate::hand::WhichHand::Any).
pub fn merge(accumulated: f32, candidate: f32) -> f32 {
    accumulated.max(candidate)
}

/// Per-gesture confidence vector for one frame.
///
/// Fixed length [`GESTURE_COUNT`], indexed by gesture ordinal, freshly
/// zeroed for every call; nothing persists across frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confidences([f32; GESTURE_COUNT]);

impl Confidences {
    /// All-zero vector; the identity of [`merge`].
    pub fn zeroed() -> Self {
        Self([0.0; GESTURE_COUNT])
    }

    /// Confidence for one gesture.
    pub fn get(&self, gesture: GestureType) -> f32 {
        self.0[gesture.index()]
    }

    /// Fold `value` into the gesture's slot via [`merge`].
    pub fn merge(&mut self, gesture: GestureType, value: f32) {
        let slot = &mut self.0[gesture.index()];
        *slot = merge(*slot, value);
    }

    /// Raw slots in gesture-ordinal order.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Iterate `(gesture, confidence)` pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (GestureType, f32)> + '_ {
        GestureType::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Highest-confidence gesture, if any slot is above zero.
    pub fn best(&self) -> Option<(GestureType, f32)> {
        self.iter()
            .filter(|(_, value)| *value > 0.0)
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
    }
}

impl Default for Confidences {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl std::ops::Index<GestureType> for Confidences {
    type Output = f32;

    fn index(&self, gesture: GestureType) -> &f32 {
        &self.0[gesture.index()]
    }
}
