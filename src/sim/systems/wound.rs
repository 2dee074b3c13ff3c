//! Wound feedback
//!
//! While the wound is live, each tick rolls a spurt chance proportional to
//! the remaining intensity and emits a small batch of blood drops. Drop
//! direction follows the original bullet vector with angular spread, and
//! drops inherit a share of the chest point's implicit velocity so the
//! spray travels with the tumbling body.

use rand::Rng;
use smallvec::SmallVec;

use crate::sim::constants::wound::*;
use crate::sim::skeleton::PointName;
use crate::sim::state::{BloodDrop, SimState};
use crate::util::vec2::Vec2;

/// Per-tick emission batch; rarely more than a few drops
type EmissionBatch = SmallVec<[BloodDrop; 4]>;

/// Sample the wound once. No active ragdoll, no wound, or a drained wound
/// all mean nothing happens.
pub fn update<R: Rng + ?Sized>(state: &mut SimState, rng: &mut R) {
    let Some(ragdoll) = state.ragdoll.as_mut() else {
        return;
    };

    let chest = ragdoll.skeleton.point(PointName::Chest);
    let (chest_position, chest_velocity) = (chest.position, chest.velocity());

    let Some(wound) = ragdoll.wound.as_mut() else {
        return;
    };
    if !wound.is_active() {
        return;
    }

    let mut batch = EmissionBatch::new();
    if rng.gen::<f32>() < wound.intensity * SPURT_CHANCE {
        let drops = (1.0 + rng.gen::<f32>() * MAX_EXTRA_DROPS * wound.intensity).floor() as u32;
        let aim = wound.bullet_velocity.angle();

        for _ in 0..drops {
            let angle = aim + (rng.gen::<f32>() - 0.5) * 2.0 * SPREAD;
            let speed = SPEED_BASE + rng.gen::<f32>() * SPEED_SCALE * wound.intensity;
            let velocity = Vec2::from_angle(angle) * speed
                + chest_velocity * BODY_VELOCITY_CARRY
                + Vec2::UP * UPWARD_BIAS;

            batch.push(BloodDrop {
                position: chest_position
                    + Vec2::new(
                        rng.gen_range(-SPAWN_JITTER..SPAWN_JITTER),
                        rng.gen_range(-SPAWN_JITTER..SPAWN_JITTER),
                    ),
                velocity,
                size: rng.gen_range(DROP_SIZE_MIN..DROP_SIZE_MAX),
                life: LIFE_MIN + rng.gen::<f32>() * LIFE_RANGE,
            });
        }
    }

    wound.decay();

    if !batch.is_empty() {
        tracing::trace!(drops = batch.len(), "wound spurt");
        state.blood.extend(batch);
    }
}
