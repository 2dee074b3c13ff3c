//! Gore particle pools
//!
//! The one-off impact burst, the gib spray, and the per-tick update of
//! both pools. Particles are independent ballistic points with a ground
//! splat and a finite life; expired ones are dropped with `retain`.

use rand::Rng;

use crate::sim::constants::{blood, gibs};
use crate::sim::state::{BloodDrop, Gib, GibShape, SimState};
use crate::util::vec2::Vec2;

/// One-off blood spray at the moment the shot lands
pub fn spawn_burst<R: Rng + ?Sized>(
    state: &mut SimState,
    origin: Vec2,
    bullet_velocity: Vec2,
    rng: &mut R,
) {
    let count = blood::BURST_MIN + rng.gen_range(0..blood::BURST_EXTRA);
    let aim = bullet_velocity.angle();

    for _ in 0..count {
        let angle = aim + (rng.gen::<f32>() - 0.5) * 2.0 * blood::BURST_SPREAD;
        let speed = rng.gen_range(blood::BURST_SPEED_MIN..blood::BURST_SPEED_MAX);
        let velocity = Vec2::from_angle(angle) * speed
            + Vec2::new(
                rng.gen_range(-blood::BURST_VELOCITY_JITTER..blood::BURST_VELOCITY_JITTER),
                rng.gen_range(-blood::BURST_VELOCITY_JITTER..blood::BURST_VELOCITY_JITTER)
                    - blood::BURST_UPWARD_BIAS,
            );

        state.add_blood(BloodDrop {
            position: origin
                + Vec2::new(
                    rng.gen_range(-blood::BURST_POSITION_JITTER..blood::BURST_POSITION_JITTER),
                    rng.gen_range(-blood::BURST_POSITION_JITTER..blood::BURST_POSITION_JITTER),
                ),
            velocity,
            size: rng.gen_range(blood::SIZE_MIN..blood::SIZE_MAX),
            life: 1.0,
        });
    }

    tracing::debug!(count, "impact blood burst");
}

/// Flesh chunks thrown from the impact point
pub fn spawn_gibs<R: Rng + ?Sized>(
    state: &mut SimState,
    origin: Vec2,
    bullet_velocity: Vec2,
    rng: &mut R,
) {
    let count = gibs::COUNT_MIN + rng.gen_range(0..gibs::COUNT_EXTRA);
    let aim = bullet_velocity.angle();

    for _ in 0..count {
        let angle = aim + (rng.gen::<f32>() - 0.5) * 2.0 * gibs::SPREAD;
        let speed = rng.gen_range(gibs::SPEED_MIN..gibs::SPEED_MAX);
        let velocity = Vec2::from_angle(angle) * speed
            + Vec2::new(
                rng.gen_range(-gibs::VELOCITY_JITTER..gibs::VELOCITY_JITTER),
                rng.gen_range(-gibs::VELOCITY_JITTER..gibs::VELOCITY_JITTER) - gibs::UPWARD_BIAS,
            );

        let shape = {
            let roll = rng.gen::<f32>();
            if roll < 0.3 {
                GibShape::Strand
            } else if rng.gen::<f32>() < 0.5 {
                GibShape::Bit
            } else {
                GibShape::Chunk
            }
        };
        let size = match shape {
            GibShape::Strand => rng.gen_range(2.0..5.0),
            GibShape::Bit => rng.gen_range(3.0..7.0),
            GibShape::Chunk => rng.gen_range(6.0..16.0),
        };

        state.add_gib(Gib {
            position: origin
                + Vec2::new(
                    rng.gen_range(-gibs::POSITION_JITTER..gibs::POSITION_JITTER),
                    rng.gen_range(-gibs::POSITION_JITTER..gibs::POSITION_JITTER),
                ),
            velocity,
            rotation: rng.gen_range(0.0..std::f32::consts::TAU),
            spin: rng.gen_range(-gibs::SPIN_MAX..gibs::SPIN_MAX),
            size,
            shape,
            palette: rng.gen_range(0..gibs::PALETTE_SIZE),
            life: 1.0,
        });
    }

    tracing::debug!(count, "gib spray");
}

/// Advance both pools one tick and drop expired particles
pub fn update(state: &mut SimState) {
    let ground_y = state.ground_y;

    for drop in &mut state.blood {
        drop.velocity.y += blood::GRAVITY;
        drop.position += drop.velocity;
        drop.life -= blood::LIFE_DECAY;

        if drop.position.y > ground_y {
            drop.position.y = ground_y;
            drop.velocity.y *= -blood::GROUND_BOUNCE;
            drop.velocity.x *= blood::GROUND_FRICTION;
            drop.life -= blood::GROUND_LIFE_COST;
        }
    }
    state.blood.retain(|d| d.life > 0.0);

    for gib in &mut state.gibs {
        gib.velocity.y += gibs::GRAVITY;
        gib.position += gib.velocity;
        gib.rotation += gib.spin;
        gib.life -= gibs::LIFE_DECAY;

        if gib.position.y > ground_y {
            gib.position.y = ground_y;
            gib.velocity.y *= -gibs::GROUND_BOUNCE;
            gib.velocity.x *= gibs::GROUND_FRICTION;
            gib.spin *= gibs::SPIN_DAMP;

            // Grounded and slow: stop entirely instead of micro-jittering
            if gib.velocity.y.abs() < gibs::REST_SPEED {
                gib.velocity.y = 0.0;
                gib.spin = 0.0;
            }
        }
    }
    state.gibs.retain(|g| g.life > 0.0);
}
