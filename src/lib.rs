//! # Hand Gestures (`hand_gestures`)
//!
//! ## Purpose
//!
//! `hand_gestures` classifies a tracked hand's finger and palm pose against
//! a fixed catalog of named gestures — single-hand finger poses, whole-hand
//! orientation poses, the VRChat application set, and two-handed signals —
//! and reports a per-gesture confidence vector for every frame. It sits
//! between an upstream hand tracker (which supplies per-frame palm and bone
//! poses) and a downstream action mapper (which applies its own
//! thresholding policy to the confidences).
//!
//! In a typical deployment you will:
//! - Feed each tracker snapshot into [`Matcher::match_frame`] as a
//!   [`TrackingFrame`].
//! - Hand the resulting [`MatchReport`] to your input layer, which decides
//!   which gestures count as active this frame.
//!
//! ## Core Types
//!
//! - [`GestureType`]: the closed gesture catalog with stable ordinals and
//!   canonical names ([`GestureType::name`] / [`GestureType::from_name`]).
//! - [`WhichHand`]: evaluate the left hand, the right hand, or every
//!   tracked hand with results merged by maximum.
//! - [`MatchConfig`]: versioned calibration intervals behind every score.
//! - [`OrientationBasis`]: the device's mounting axes, passed explicitly so
//!   classification never depends on an implicit mounting convention.
//! - [`Confidences`]: the fixed-length [0, 1] confidence vector, one slot
//!   per catalog entry.
//! - [`Matcher`]: validated calibration + basis, classifying frames.
//!
//! ## Example Usage
//!
//! ```
//! use hand_gestures::{
//!     GestureType, MatchConfig, Matcher, OrientationBasis, TrackingFrame, WhichHand,
//! };
//!
//! let matcher = Matcher::new(MatchConfig::default(), OrientationBasis::head_mounted())?;
//!
//! // An empty frame classifies fine, but reports there was nothing to see.
//! let report = matcher.match_frame(&TrackingFrame::empty(1), WhichHand::Any);
//! assert!(!report.tracked);
//! assert!(report.confidences.as_slice().iter().all(|&c| c == 0.0));
//!
//! // Persisted gesture choices round-trip through the catalog's names.
//! let gesture = GestureType::from_name("VRChat_Gun").expect("known gesture");
//! assert_eq!(gesture.name(), "VRChat_Gun");
//! # Ok::<(), hand_gestures::MatchError>(())
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record per-frame latency, hand counts, and the top-scoring gesture. This
//! is typically done once during application startup so all [`Matcher`]
//! instances share the same metrics backend. Classification also emits
//! `tracing` debug events per frame.

pub mod basis;
pub mod config;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod hand;
pub mod metrics;
pub mod score;

#[doc(hidden)]
pub mod pose_fixtures;

pub use crate::basis::OrientationBasis;
pub use crate::config::MatchConfig;
pub use crate::engine::{MatchReport, Matcher, match_gestures};
pub use crate::error::MatchError;
pub use crate::gesture::{GESTURE_COUNT, GestureGroup, GestureType};
pub use crate::hand::{
    BONE_COUNT, FINGER_COUNT, FingerBone, FingerKind, FingerPose, Hand, HandPose, TrackingFrame,
    WhichHand,
};
pub use crate::metrics::{MatchMetrics, set_match_metrics};
pub use crate::score::{Confidences, merge, range_map};
