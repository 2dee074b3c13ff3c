//! Verlet integration for the skeleton's point masses
//!
//! Velocity is implicit: each point carries its previous position, and the
//! last tick's displacement (scaled by air damping) is re-applied as this
//! tick's velocity. This keeps stiff stick systems unconditionally stable;
//! switching to explicit velocities would force a retune of every damping
//! and bounce constant.

use crate::config::SimConfig;
use crate::sim::skeleton::Skeleton;
use crate::util::vec2::Vec2;

/// Advance every unpinned point one tick: damped implicit velocity, then
/// gravity, then per-point ground response. Runs once per tick before the
/// constraint solver.
pub fn update(skeleton: &mut Skeleton, config: &SimConfig, ground_y: f32) {
    for point in skeleton.points_mut() {
        if point.pinned {
            continue;
        }

        let velocity = point.velocity() * config.air_damping;
        point.old_position = point.position;
        point.position += velocity + Vec2::new(0.0, config.gravity);

        // Per-point inelastic bounce, not a global event: invert and damp
        // the vertical velocity, rub off horizontal speed.
        if point.position.y > ground_y {
            let vx = point.position.x - point.old_position.x;
            let vy = point.position.y - point.old_position.y;
            point.position.y = ground_y;
            point.old_position.x = point.position.x - vx * config.ground_friction;
            point.old_position.y = point.position.y + vy * config.bounce;
        }
    }
}
