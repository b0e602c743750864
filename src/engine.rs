//! Frame classification engine.
//!
//! One entry point: [`Matcher::match_frame`] takes a tracking frame, a hand
//! selector, and (held by the matcher) a calibration and orientation basis,
//! and produces a fresh per-gesture confidence vector. Classification is a
//! pure function of its inputs: no state survives between frames, and the
//! same frame, selector, calibration, and basis always produce the same
//! vector.
//!
//! Scores follow one discipline throughout: every geometric measurement is
//! bounded into [0, 1] by [`range_map`], conjunctive criteria multiply
//! (a product of [0, 1] factors stays in [0, 1]), and slots accumulate via
//! [`merge`](crate::score::merge) — across criteria, and across hands when
//! the selector is [`WhichHand::Any`].

use std::time::Instant;

use nalgebra::Vector3;
use tracing::debug;

use crate::basis::OrientationBasis;
use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::gesture::GestureType;
use crate::hand::{FINGER_COUNT, FingerKind, Hand, HandPose, TrackingFrame, WhichHand};
use crate::metrics::metrics_recorder;
use crate::score::{Confidences, range_map};


/// Result of classifying one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    /// False iff the frame held no hands at all — "nothing to detect"
    /// rather than "nothing detected". The vector is all zero in that case.
    pub tracked: bool,
    /// Per-gesture confidences for this frame.
    pub confidences: Confidences,
}

/// Gesture matcher over tracked hand frames.
///
/// Construction validates the calibration and basis once; after that,
/// classification cannot fail and may run concurrently from any number of
/// threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatchConfig,
    basis: OrientationBasis,
}

impl Matcher {
    /// Build a matcher from a validated calibration and orientation basis.
    pub fn new(config: MatchConfig, basis: OrientationBasis) -> Result<Self, MatchError> {
        config.validate()?;
        basis.validate()?;
        Ok(Self { config, basis })
    }

    /// The calibration this matcher classifies with.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The orientation basis this matcher classifies against.
    pub fn basis(&self) -> &OrientationBasis {
        &self.basis
    }

    /// Classify one frame for the selected hand(s).
    ///
    /// Hands outside the selector are ignored. A selected hand that is not
    /// tracked contributes nothing — its gestures simply stay at zero.
    /// Two-handed gestures are evaluated only when both sides are present
    /// in the frame, regardless of selector.
    pub fn match_frame(&self, frame: &TrackingFrame, which: WhichHand) -> MatchReport {
        let start = Instant::now();
        let mut confidences = Confidences::zeroed();
        let tracked = !frame.hands.is_empty();

        for hand in frame.hands.iter().filter(|h| which.selects(h.side)) {
            self.score_single_hand(hand, &mut confidences);
            if let Some(other) = frame.hand(hand.side.opposite()) {
                self.score_two_handed(hand, other, &mut confidences);
            }
        }

        let latency = start.elapsed();
        let best = confidences.best();
        debug!(
            frame_id = frame.frame_id,
            ?which,
            tracked,
            hands = frame.hands.len(),
            best = best.map(|(gesture, _)| gesture.name()),
            "classified frame"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(which, latency, frame.hands.len(), best);
        }

        MatchReport {
            tracked,
            confidences,
        }
    }

    fn score_single_hand(&self, hand: &HandPose, out: &mut Confidences) {
        let shape = HandShape::measure(hand, &self.config);
        self.score_finger_gestures(hand, &shape, out);
        self.score_hand_gestures(hand, &shape, out);
        self.score_application_gestures(&shape, out);
    }

    /// Finger-group gestures: defined by curl and fingertip proximity, hand
    /// orientation stays free.
    fn score_finger_gestures(&self, hand: &HandPose, shape: &HandShape, out: &mut Confidences) {
        let cfg = &self.config;

        out.merge(GestureType::TriggerFinger, shape.curl(FingerKind::Index));

        out.merge(
            GestureType::LowerFist,
            shape.grip(&[FingerKind::Middle, FingerKind::Ring, FingerKind::Pinky]),
        );

        let pinch_gap = (hand.finger(FingerKind::Thumb).tip_position
            - hand.finger(FingerKind::Index).tip_position)
            .norm();
        out.merge(
            GestureType::Pinch,
            range_map(pinch_gap, cfg.pinch_far_mm, cfg.pinch_near_mm),
        );

        let thumb = unit_or_zero(hand.finger(FingerKind::Thumb).pointing());
        out.merge(
            GestureType::ThumbPress,
            range_map(thumb.dot(&shape.pinkyward), cfg.align_loose, cfg.align_tight),
        );
    }

    /// Hand-group gestures: whole-hand orientation against the basis, plus
    /// the classic finger-silhouette poses.
    fn score_hand_gestures(&self, hand: &HandPose, shape: &HandShape, out: &mut Confidences) {
        let cfg = &self.config;
        let ext = |kind| shape.extension(kind);

        out.merge(
            GestureType::FlippingTheBird,
            ext(FingerKind::Middle)
                * shape.grip(&[FingerKind::Index, FingerKind::Ring, FingerKind::Pinky]),
        );

        out.merge(
            GestureType::Ily,
            ext(FingerKind::Index)
                * ext(FingerKind::Pinky)
                * shape.grip(&[FingerKind::Middle, FingerKind::Ring]),
        );

        let spread = angle_between(
            &hand.finger(FingerKind::Index).pointing(),
            &hand.finger(FingerKind::Middle).pointing(),
        );
        out.merge(
            GestureType::Victory,
            ext(FingerKind::Index)
                * ext(FingerKind::Middle)
                * shape.grip(&[FingerKind::Ring, FingerKind::Pinky])
                * range_map(spread, cfg.spread_onset_rad, cfg.spread_full_rad),
        );

        let flat = shape.flatness();
        let oriented = [
            (GestureType::FlatHandPalmUp, self.basis.up),
            (GestureType::FlatHandPalmDown, -self.basis.up),
            (GestureType::FlatHandPalmAway, self.basis.inward),
            (GestureType::FlatHandPalmTowards, -self.basis.inward),
        ];
        for (gesture, axis) in oriented {
            out.merge(
                gesture,
                flat * range_map(shape.normal.dot(&axis), cfg.align_loose, cfg.align_tight),
            );
        }

        let thumb = unit_or_zero(hand.finger(FingerKind::Thumb).pointing());
        let fist = shape.fist();
        out.merge(
            GestureType::ThumbUp,
            ext(FingerKind::Thumb)
                * fist
                * range_map(thumb.dot(&self.basis.up), cfg.align_loose, cfg.align_tight),
        );

        let midline = match hand.side {
            Hand::Right => -self.basis.right,
            Hand::Left => self.basis.right,
        };
        out.merge(
            GestureType::ThumbInward,
            ext(FingerKind::Thumb)
                * fist
                * range_map(thumb.dot(&midline), cfg.align_loose, cfg.align_tight),
        );
    }

    /// Application-specific poses (VRChat input set): silhouettes only, no
    /// orientation requirements.
    fn score_application_gestures(&self, shape: &HandShape, out: &mut Confidences) {
        let cfg = &self.config;
        let ext = |kind| shape.extension(kind);

        out.merge(
            GestureType::VrchatPoint,
            ext(FingerKind::Index)
                * shape.grip(&[FingerKind::Middle, FingerKind::Ring, FingerKind::Pinky]),
        );

        out.merge(
            GestureType::VrchatRockOut,
            ext(FingerKind::Index)
                * ext(FingerKind::Pinky)
                * shape.curl(FingerKind::Thumb)
                * shape.grip(&[FingerKind::Middle, FingerKind::Ring]),
        );

        out.merge(
            GestureType::VrchatSpreadHand,
            shape.flatness() * range_map(shape.fan, cfg.spread_onset_rad, cfg.spread_full_rad),
        );

        out.merge(
            GestureType::VrchatGun,
            ext(FingerKind::Index)
                * ext(FingerKind::Thumb)
                * shape.grip(&[FingerKind::Middle, FingerKind::Ring, FingerKind::Pinky]),
        );

        out.merge(
            GestureType::VrchatThumbsUp,
            ext(FingerKind::Thumb) * shape.fist(),
        );

        out.merge(
            GestureType::VrchatVictory,
            ext(FingerKind::Index)
                * ext(FingerKind::Middle)
                * shape.grip(&[FingerKind::Ring, FingerKind::Pinky]),
        );
    }

    /// Gestures spanning both hands, evaluated with `primary` as the hand
    /// the selector chose and `other` as its counterpart.
    fn score_two_handed(&self, primary: &HandPose, other: &HandPose, out: &mut Confidences) {
        let cfg = &self.config;
        let primary_shape = HandShape::measure(primary, cfg);
        let other_shape = HandShape::measure(other, cfg);

        // Timeout: two flat hands, palm directions perpendicular, one hand's
        // middle fingertip resting on the other's palm.
        let perpendicular = range_map(
            primary_shape.direction.dot(&other_shape.direction).abs(),
            cfg.align_loose,
            0.0,
        );
        let contact = range_map(
            (primary.finger(FingerKind::Middle).tip_position - other.palm_position).norm(),
            cfg.touch_far_mm,
            cfg.touch_near_mm,
        );
        out.merge(
            GestureType::Timeout,
            primary_shape.flatness() * other_shape.flatness() * perpendicular * contact,
        );

        // Touch-surface emulation: the off hand's index fingertip against
        // the selected hand's palm. Slots encode the touch position across
        // the surface, scaled by touch proximity: 0.5 is a centered touch.
        let relative = other.finger(FingerKind::Index).tip_position - primary.palm_position;
        let proximity = range_map(relative.norm(), cfg.touch_far_mm, cfg.touch_near_mm);
        let half_extent = cfg.touch_half_extent_mm;
        out.merge(
            GestureType::TouchpadAxisX,
            proximity
                * range_map(
                    relative.dot(&primary_shape.pinkyward),
                    -half_extent,
                    half_extent,
                ),
        );
        out.merge(
            GestureType::TouchpadAxisY,
            proximity
                * range_map(
                    relative.dot(&primary_shape.direction),
                    -half_extent,
                    half_extent,
                ),
        );
    }
}

/// Classify one frame with an explicit calibration and basis.
///
/// Convenience wrapper over [`Matcher`] for one-shot callers; validates per
/// call.
pub fn match_gestures(
    frame: &TrackingFrame,
    which: WhichHand,
    basis: &OrientationBasis,
    config: &MatchConfig,
) -> Result<MatchReport, MatchError> {
    let matcher = Matcher::new(config.clone(), *basis)?;
    Ok(matcher.match_frame(frame, which))
}

/// Per-hand measurements shared by the gesture criteria.
struct HandShape {
    /// Accumulated bone bend per finger, radians.
    bend: [f32; FINGER_COUNT],
    /// Mean angle between adjacent non-thumb fingers, radians.
    fan: f32,
    /// Unit palm normal.
    normal: Vector3<f32>,
    /// Unit palm direction.
    direction: Vector3<f32>,
    /// Lateral palm axis toward the pinky side.
    pinkyward: Vector3<f32>,
    curl_onset: f32,
    curl_full: f32,
}

impl HandShape {
    fn measure(hand: &HandPose, cfg: &MatchConfig) -> Self {
        let mut bend = [0.0; FINGER_COUNT];
        for (slot, finger) in bend.iter_mut().zip(hand.fingers.iter()) {
            *slot = finger
                .directions
                .windows(2)
                .map(|pair| angle_between(&pair[0], &pair[1]))
                .sum();
        }

        let fingers = &hand.fingers;
        let fan = [
            (FingerKind::Index, FingerKind::Middle),
            (FingerKind::Middle, FingerKind::Ring),
            (FingerKind::Ring, FingerKind::Pinky),
        ]
        .iter()
        .map(|&(a, b)| {
            angle_between(&fingers[a.index()].pointing(), &fingers[b.index()].pointing())
        })
        .sum::<f32>()
            / 3.0;

        let normal = unit_or_zero(hand.palm_normal);
        let direction = unit_or_zero(hand.palm_direction);
        let lateral = normal.cross(&direction);
        let pinkyward = match hand.side {
            Hand::Right => lateral,
            Hand::Left => -lateral,
        };

        Self {
            bend,
            fan,
            normal,
            direction,
            pinkyward,
            curl_onset: cfg.curl_onset_rad,
            curl_full: cfg.curl_full_rad,
        }
    }

    /// How curled one finger is, in [0, 1].
    fn curl(&self, kind: FingerKind) -> f32 {
        range_map(self.bend[kind.index()], self.curl_onset, self.curl_full)
    }

    /// How extended one finger is, in [0, 1].
    fn extension(&self, kind: FingerKind) -> f32 {
        1.0 - self.curl(kind)
    }

    /// Joint curl of a finger group, range-mapped over the mean bend.
    fn grip(&self, kinds: &[FingerKind]) -> f32 {
        let mean = kinds.iter().map(|k| self.bend[k.index()]).sum::<f32>() / kinds.len() as f32;
        range_map(mean, self.curl_onset, self.curl_full)
    }

    /// Fist of the four non-thumb fingers.
    fn fist(&self) -> f32 {
        self.grip(&[
            FingerKind::Index,
            FingerKind::Middle,
            FingerKind::Ring,
            FingerKind::Pinky,
        ])
    }

    /// How flat the whole hand is: inverse of the mean bend of all five
    /// fingers.
    fn flatness(&self) -> f32 {
        1.0 - self.grip(&FingerKind::ALL)
    }
}

fn unit_or_zero(v: Vector3<f32>) -> Vector3<f32> {
    v.try_normalize(1e-6).unwrap_or_else(Vector3::zeros)
}

/// Angle between two directions, radians. Zero-length inputs contribute no
/// angle rather than propagating NaN.
fn angle_between(a: &Vector3<f32>, b: &Vector3<f32>) -> f32 {
    let a = unit_or_zero(*a);
    let b = unit_or_zero(*b);
    if a == Vector3::zeros() || b == Vector3::zeros() {
        return 0.0;
    }
    a.dot(&b).clamp(-1.0, 1.0).acos()
}
