//! Impact model
//!
//! Translates (hit zone, direction, magnitude) into an initial velocity
//! field across the skeleton. Velocities are encoded the Verlet way: each
//! point's previous position is displaced opposite to the desired
//! velocity, so the next integration step launches the body.

use rand::Rng;

use crate::sim::constants::impact::*;
use crate::sim::skeleton::{Point, PointName, Skeleton};
use crate::sim::state::{HitZone, SimState};
use crate::util::vec2::Vec2;

#[inline]
fn set_kick(point: &mut Point, velocity: Vec2) {
    point.old_position = point.position - velocity;
}

#[inline]
fn add_kick(point: &mut Point, velocity: Vec2) {
    point.old_position -= velocity;
}

/// Apply an impact to the active ragdoll's skeleton. Must run before the
/// first integration tick of the ragdoll's life. With no active ragdoll
/// this is a logged no-op: a dropped visual effect, never a crash.
pub fn apply<R: Rng + ?Sized>(
    state: &mut SimState,
    zone: HitZone,
    direction: f32,
    magnitude: f32,
    rng: &mut R,
) {
    let Some(ragdoll) = state.ragdoll.as_mut() else {
        tracing::warn!(?zone, "impact with no active ragdoll, dropping");
        return;
    };
    apply_to_skeleton(&mut ragdoll.skeleton, zone, direction, magnitude, rng);
}

fn apply_to_skeleton<R: Rng + ?Sized>(
    skeleton: &mut Skeleton,
    zone: HitZone,
    direction: f32,
    magnitude: f32,
    rng: &mut R,
) {
    if skeleton.is_empty() {
        return;
    }

    // Base rule: everything but the feet flies backward and up, with
    // independent per-point jitter so the pose is never symmetric.
    for name in PointName::ALL {
        if matches!(name, PointName::FootLeft | PointName::FootRight) {
            continue;
        }
        let jx = rng.gen_range(JITTER_MIN..JITTER_MAX);
        let jy = rng.gen_range(JITTER_MIN..JITTER_MAX);
        set_kick(
            skeleton.point_mut(name),
            Vec2::new(
                direction * magnitude * jx,
                -magnitude * UPWARD_RATIO * jy,
            ),
        );
    }

    match zone {
        HitZone::Head => apply_head(skeleton, direction, magnitude, rng),
        HitZone::Chest => apply_chest(skeleton, direction, magnitude, rng),
        HitZone::Gut => apply_gut(skeleton, direction, magnitude, rng),
        HitZone::Shoulder => apply_shoulder(skeleton, direction, magnitude, rng),
    }

    // Every zone: loose elbows and hands, for visual variety
    for name in [
        PointName::ElbowFront,
        PointName::ElbowBack,
        PointName::HandFront,
        PointName::HandBack,
    ] {
        let jitter = Vec2::new(
            rng.gen_range(-LIMB_JITTER..LIMB_JITTER) * magnitude,
            rng.gen_range(-LIMB_JITTER..LIMB_JITTER) * magnitude,
        );
        add_kick(skeleton.point_mut(name), jitter);
    }
}

/// Whiplash: the head over-weights everything else, the torso follows at
/// decreasing fractions, the hands fly up.
fn apply_head<R: Rng + ?Sized>(
    skeleton: &mut Skeleton,
    direction: f32,
    magnitude: f32,
    rng: &mut R,
) {
    let mut tight = |kick: f32, lift: f32| {
        Vec2::new(
            direction * magnitude * kick * rng.gen_range(TIGHT_JITTER_MIN..TIGHT_JITTER_MAX),
            -magnitude * lift * rng.gen_range(TIGHT_JITTER_MIN..TIGHT_JITTER_MAX),
        )
    };

    let head = tight(HEAD_KICK, HEAD_LIFT);
    let neck = tight(HEAD_NECK_KICK, HEAD_NECK_KICK * UPWARD_RATIO);
    let chest = tight(HEAD_CHEST_KICK, HEAD_CHEST_KICK * UPWARD_RATIO);
    set_kick(skeleton.point_mut(PointName::Head), head);
    set_kick(skeleton.point_mut(PointName::Neck), neck);
    set_kick(skeleton.point_mut(PointName::Chest), chest);

    for hand in [PointName::HandFront, PointName::HandBack] {
        let fling = Vec2::new(
            direction * magnitude * rng.gen_range(HEAD_HAND_FLING_MIN..HEAD_HAND_FLING_MAX),
            -magnitude * rng.gen_range(HEAD_HAND_LIFT_MIN..HEAD_HAND_LIFT_MAX),
        );
        set_kick(skeleton.point_mut(hand), fling);
    }
}

/// Classic knockback: one large uniform kick across the upper body.
fn apply_chest<R: Rng + ?Sized>(
    skeleton: &mut Skeleton,
    direction: f32,
    magnitude: f32,
    rng: &mut R,
) {
    for name in [
        PointName::Chest,
        PointName::Neck,
        PointName::Head,
        PointName::ShoulderFront,
        PointName::ShoulderBack,
    ] {
        let kick = Vec2::new(
            direction * magnitude * CHEST_KICK * rng.gen_range(TIGHT_JITTER_MIN..TIGHT_JITTER_MAX),
            -magnitude * CHEST_LIFT * rng.gen_range(TIGHT_JITTER_MIN..TIGHT_JITTER_MAX),
        );
        set_kick(skeleton.point_mut(name), kick);
    }
}

/// The fold: the only zone where the body drops instead of flying back.
/// Pelvis goes back and *down*, chest doubles over, the head drops, the
/// knees buckle toward the midline and the feet stumble instead of
/// staying planted.
fn apply_gut<R: Rng + ?Sized>(
    skeleton: &mut Skeleton,
    direction: f32,
    magnitude: f32,
    rng: &mut R,
) {
    let mut tight = |kick: f32, drop: f32| {
        Vec2::new(
            direction * magnitude * kick * rng.gen_range(TIGHT_JITTER_MIN..TIGHT_JITTER_MAX),
            magnitude * drop * rng.gen_range(TIGHT_JITTER_MIN..TIGHT_JITTER_MAX),
        )
    };

    let pelvis = tight(GUT_HIP_KICK, GUT_HIP_DROP);
    let chest = tight(GUT_CHEST_KICK, GUT_CHEST_DROP);
    let head = tight(GUT_HEAD_KICK, GUT_HEAD_DROP);
    for hip in [PointName::Hip, PointName::HipLeft, PointName::HipRight] {
        set_kick(skeleton.point_mut(hip), pelvis);
    }
    set_kick(skeleton.point_mut(PointName::Chest), chest);
    set_kick(skeleton.point_mut(PointName::Neck), chest);
    set_kick(skeleton.point_mut(PointName::Head), head);

    // Knees collapse toward each other regardless of shot direction
    add_kick(
        skeleton.point_mut(PointName::KneeLeft),
        Vec2::new(GUT_KNEE_BUCKLE * magnitude, 0.0),
    );
    add_kick(
        skeleton.point_mut(PointName::KneeRight),
        Vec2::new(-GUT_KNEE_BUCKLE * magnitude, 0.0),
    );

    for foot in [PointName::FootLeft, PointName::FootRight] {
        let stumble = Vec2::new(
            direction * magnitude * GUT_FOOT_STUMBLE * rng.gen_range(TIGHT_JITTER_MIN..TIGHT_JITTER_MAX),
            0.0,
        );
        set_kick(skeleton.point_mut(foot), stumble);
    }
}

/// Twist: the struck arm chain flies off, the opposite shoulder rocks
/// forward, the side hips get opposing offsets to sell the rotation.
fn apply_shoulder<R: Rng + ?Sized>(
    skeleton: &mut Skeleton,
    direction: f32,
    magnitude: f32,
    rng: &mut R,
) {
    for name in [
        PointName::ShoulderFront,
        PointName::ElbowFront,
        PointName::HandFront,
    ] {
        let kick = Vec2::new(
            direction
                * magnitude
                * SHOULDER_KICK
                * rng.gen_range(TIGHT_JITTER_MIN..TIGHT_JITTER_MAX),
            -magnitude * SHOULDER_LIFT * rng.gen_range(TIGHT_JITTER_MIN..TIGHT_JITTER_MAX),
        );
        set_kick(skeleton.point_mut(name), kick);
    }

    let counter = Vec2::new(
        -direction * magnitude * SHOULDER_OPPOSITE_KICK,
        -magnitude * SHOULDER_OPPOSITE_LIFT,
    );
    set_kick(skeleton.point_mut(PointName::ShoulderBack), counter);

    add_kick(
        skeleton.point_mut(PointName::HipLeft),
        Vec2::new(direction * magnitude * SHOULDER_HIP_TWIST, 0.0),
    );
    add_kick(
        skeleton.point_mut(PointName::HipRight),
        Vec2::new(-direction * magnitude * SHOULDER_HIP_TWIST, 0.0),
    );
}
