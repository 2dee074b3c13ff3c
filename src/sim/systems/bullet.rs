//! Bullet flight
//!
//! The winner's shot travels toward the loser's chest; when it arrives the
//! system hands back an impact event carrying everything the round logic
//! needs to stand up the ragdoll. Flight is straight-line, no drop.

use crate::config::SimConfig;
use crate::sim::constants::bullet::{DEFAULT_RANGE, HIT_RADIUS, MUZZLE_HEIGHT, TARGET_HEIGHT};
use crate::sim::state::{Bullet, HitZone, Side, SimState};
use crate::util::vec2::Vec2;

/// The shot has landed; resolve it into a ragdoll
#[derive(Debug, Clone)]
pub struct ImpactEvent {
    /// Where the bullet stopped
    pub position: Vec2,
    /// Bullet velocity at arrival
    pub velocity: Vec2,
    pub loser: Side,
    pub anchor: Vec2,
    pub zone: Option<HitZone>,
    pub magnitude: f32,
    pub unit_scale: f32,
}

/// Arm a shot at the loser standing at `anchor`. `muzzle` is the shooter's
/// gun position; when absent the shot starts a fixed range out on the
/// shooter's side. Replaces any bullet already in flight.
#[allow(clippy::too_many_arguments)]
pub fn fire(
    state: &mut SimState,
    loser: Side,
    anchor: Vec2,
    muzzle: Option<Vec2>,
    zone: Option<HitZone>,
    magnitude: f32,
    unit_scale: f32,
    config: &SimConfig,
) {
    let target = anchor + Vec2::UP * (TARGET_HEIGHT * unit_scale);
    let direction = loser.impact_direction();
    let muzzle = muzzle.unwrap_or_else(|| {
        Vec2::new(
            anchor.x - direction * DEFAULT_RANGE * unit_scale,
            anchor.y - MUZZLE_HEIGHT * unit_scale,
        )
    });

    if state.bullet.is_some() {
        tracing::warn!("bullet already in flight, replacing");
    }

    state.bullet = Some(Bullet {
        position: muzzle,
        velocity: (target - muzzle).normalize() * config.bullet_speed,
        target,
        loser,
        anchor,
        zone,
        magnitude,
        unit_scale,
    });
}

/// Advance the bullet one tick; returns the impact event on arrival
pub fn update(state: &mut SimState) -> Option<ImpactEvent> {
    let bullet = state.bullet.as_mut()?;

    bullet.position += bullet.velocity;

    if bullet.position.distance_to(bullet.target) >= HIT_RADIUS * bullet.unit_scale {
        return None;
    }

    let bullet = state.bullet.take()?;
    Some(ImpactEvent {
        position: bullet.position,
        velocity: bullet.velocity,
        loser: bullet.loser,
        anchor: bullet.anchor,
        zone: bullet.zone,
        magnitude: bullet.magnitude,
        unit_scale: bullet.unit_scale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUND_Y: f32 = 292.0;

    fn fire_default(state: &mut SimState, loser: Side, anchor: Vec2) {
        fire(
            state,
            loser,
            anchor,
            None,
            Some(HitZone::Chest),
            10.0,
            1.0,
            &SimConfig::default(),
        );
    }

    #[test]
    fn test_bullet_flies_toward_the_loser() {
        let mut state = SimState::new(GROUND_Y);
        let anchor = Vec2::new(100.0, GROUND_Y);
        fire_default(&mut state, Side::Left, anchor);

        let bullet = state.bullet.as_ref().unwrap();
        // Loser on the left: the shot comes from the right, moving left
        assert!(bullet.velocity.x < 0.0);
        assert!(bullet.position.x > anchor.x);
    }

    #[test]
    fn test_bullet_arrives_within_a_second() {
        let mut state = SimState::new(GROUND_Y);
        fire_default(&mut state, Side::Right, Vec2::new(680.0, GROUND_Y));

        let mut event = None;
        for _ in 0..60 {
            event = update(&mut state);
            if event.is_some() {
                break;
            }
        }

        let event = event.expect("bullet never arrived");
        assert!(state.bullet.is_none());
        assert_eq!(event.loser, Side::Right);
        let target = Vec2::new(680.0, GROUND_Y - 75.0);
        assert!(event.position.distance_to(target) < HIT_RADIUS + 1e-3);
    }

    #[test]
    fn test_no_bullet_is_a_noop() {
        let mut state = SimState::new(GROUND_Y);
        assert!(update(&mut state).is_none());
    }

    #[test]
    fn test_explicit_muzzle_is_respected() {
        let mut state = SimState::new(GROUND_Y);
        let muzzle = Vec2::new(500.0, GROUND_Y - 80.0);
        fire(
            &mut state,
            Side::Left,
            Vec2::new(100.0, GROUND_Y),
            Some(muzzle),
            None,
            10.0,
            1.0,
            &SimConfig::default(),
        );
        assert_eq!(state.bullet.as_ref().unwrap().position, muzzle);
    }

    #[test]
    fn test_refire_replaces_the_bullet() {
        let mut state = SimState::new(GROUND_Y);
        fire_default(&mut state, Side::Left, Vec2::new(100.0, GROUND_Y));
        fire_default(&mut state, Side::Right, Vec2::new(680.0, GROUND_Y));
        assert_eq!(state.bullet.as_ref().unwrap().loser, Side::Right);
    }
}
