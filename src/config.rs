//! Calibration configuration for the matcher.
//!
//! Every interval here feeds [`range_map`](crate::score::range_map); the
//! config is the complete set of calibration knobs that turn raw geometry
//! (angles, distances, dot products) into bounded confidences. It is cheap
//! to clone and serde-friendly so deployments can persist and ship tuned
//! calibrations.
//!
//! The `version` field tracks calibration provenance: bump it whenever a
//! default changes meaning, so recorded confidences can be traced back to
//! the calibration that produced them.

use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Calibration intervals for gesture classification.
///
/// Angles are radians, distances millimeters, alignment bounds are dot
/// products of unit vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Calibration schema version. Must be >= 1.
    pub version: u32,
    /// Accumulated bone bend at which a finger starts counting as curled.
    pub curl_onset_rad: f32,
    /// Accumulated bone bend of a fully curled finger.
    pub curl_full_rad: f32,
    /// Thumb-to-index fingertip distance of a full pinch.
    pub pinch_near_mm: f32,
    /// Thumb-to-index fingertip distance at which pinch confidence reaches
    /// zero.
    pub pinch_far_mm: f32,
    /// Inter-finger angle at which spread starts counting.
    pub spread_onset_rad: f32,
    /// Inter-finger angle of a fully spread pair.
    pub spread_full_rad: f32,
    /// Axis-alignment dot product where orientation confidence starts
    /// rising.
    pub align_loose: f32,
    /// Axis-alignment dot product of full orientation confidence.
    pub align_tight: f32,
    /// Fingertip-to-palm distance of definite two-hand contact.
    pub touch_near_mm: f32,
    /// Fingertip-to-palm distance at which contact confidence reaches zero.
    pub touch_far_mm: f32,
    /// Half extent of the emulated touch surface across the palm.
    pub touch_half_extent_mm: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: 1,
            curl_onset_rad: 0.8,
            curl_full_rad: 2.4,
            pinch_near_mm: 15.0,
            pinch_far_mm: 45.0,
            spread_onset_rad: 0.10,
            spread_full_rad: 0.35,
            align_loose: 0.55,
            align_tight: 0.95,
            touch_near_mm: 25.0,
            touch_far_mm: 70.0,
            touch_half_extent_mm: 50.0,
        }
    }
}

impl MatchConfig {
    /// Validate the calibration.
    ///
    /// Rejects version 0, non-finite values, inverted orderings, and equal
    /// interval endpoints — a degenerate interval is refused here rather
    /// than silently flattening scores at classification time.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig(
                "version 0 is reserved; calibrations start at 1".into(),
            ));
        }

        let fields = [
            ("curl_onset_rad", self.curl_onset_rad),
            ("curl_full_rad", self.curl_full_rad),
            ("pinch_near_mm", self.pinch_near_mm),
            ("pinch_far_mm", self.pinch_far_mm),
            ("spread_onset_rad", self.spread_onset_rad),
            ("spread_full_rad", self.spread_full_rad),
            ("align_loose", self.align_loose),
            ("align_tight", self.align_tight),
            ("touch_near_mm", self.touch_near_mm),
            ("touch_far_mm", self.touch_far_mm),
            ("touch_half_extent_mm", self.touch_half_extent_mm),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(MatchError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
            if value < 0.0 {
                return Err(MatchError::InvalidConfig(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        let ordered = [
            ("curl_onset_rad", "curl_full_rad", self.curl_onset_rad, self.curl_full_rad),
            ("pinch_near_mm", "pinch_far_mm", self.pinch_near_mm, self.pinch_far_mm),
            ("spread_onset_rad", "spread_full_rad", self.spread_onset_rad, self.spread_full_rad),
            ("align_loose", "align_tight", self.align_loose, self.align_tight),
            ("touch_near_mm", "touch_far_mm", self.touch_near_mm, self.touch_far_mm),
        ];
        for (low_name, high_name, low, high) in ordered {
            if low >= high {
                return Err(MatchError::InvalidConfig(format!(
                    "{low_name} ({low}) must be strictly below {high_name} ({high})"
                )));
            }
        }

        if self.align_tight > 1.0 {
            return Err(MatchError::InvalidConfig(format!(
                "align_tight must be at most 1.0, got {}",
                self.align_tight
            )));
        }
        if self.touch_half_extent_mm == 0.0 {
            return Err(MatchError::InvalidConfig(
                "touch_half_extent_mm must be greater than zero".into(),
            ));
        }

        Ok(())
    }
}
