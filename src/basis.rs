//! Reference orientation basis.
//!
//! Tracked directions arrive in the device's native coordinate system, which
//! depends on how the device is mounted. The basis names the three semantic
//! axes (wearer's right, away from the wearer, up) in device coordinates so
//! orientation-sensitive gestures classify the same way regardless of
//! mounting. Callers pass the basis explicitly; [`OrientationBasis::head_mounted`]
//! is the stock configuration for a headset-mounted tracker.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Permitted deviation from unit length and from orthogonality.
const AXIS_TOLERANCE: f32 = 1e-3;

/// The expected coordinate frame of the tracking device in its mounting
/// configuration. Axes must be approximately orthogonal unit vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientationBasis {
    /// Device-space direction of the wearer's right.
    pub right: Vector3<f32>,
    /// Device-space direction away from the wearer.
    pub inward: Vector3<f32>,
    /// Device-space up.
    pub up: Vector3<f32>,
}

impl OrientationBasis {
    /// Stock axes for a head-mounted tracker looking along the wearer's
    /// gaze: x right, y up, negative z away from the wearer.
    pub fn head_mounted() -> Self {
        Self {
            right: Vector3::new(1.0, 0.0, 0.0),
            inward: Vector3::new(0.0, 0.0, -1.0),
            up: Vector3::new(0.0, 1.0, 0.0),
        }
    }

    /// Check the axes form an approximately orthonormal triple.
    pub fn validate(&self) -> Result<(), MatchError> {
        for (label, axis) in [("right", self.right), ("inward", self.inward), ("up", self.up)] {
            if !axis.iter().all(|c| c.is_finite()) {
                return Err(MatchError::InvalidBasis(format!(
                    "{label} axis has non-finite components"
                )));
            }
            if (axis.norm() - 1.0).abs() > AXIS_TOLERANCE {
                return Err(MatchError::InvalidBasis(format!(
                    "{label} axis is not unit length (|v| = {})",
                    axis.norm()
                )));
            }
        }
        for (labels, dot) in [
            ("right/inward", self.right.dot(&self.inward)),
            ("right/up", self.right.dot(&self.up)),
            ("inward/up", self.inward.dot(&self.up)),
        ] {
            if dot.abs() > AXIS_TOLERANCE {
                return Err(MatchError::InvalidBasis(format!(
                    "{labels} axes are not orthogonal (dot = {dot})"
                )));
            }
        }
        Ok(())
    }
}

impl Default for OrientationBasis {
    fn default() -> Self {
        Self::head_mounted()
    }
}
