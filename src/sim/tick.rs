//! Per-tick orchestration
//!
//! Fixed step order, never reordered: bullet flight (resolving the hit on
//! arrival) -> integration -> constraint relaxation -> wound sampling ->
//! particle pools. Everything runs synchronously inside one tick.

use rand::Rng;

use crate::config::SimConfig;
use crate::sim::skeleton::Skeleton;
use crate::sim::state::{HitZone, Ragdoll, Side, SimState, Wound};
use crate::sim::systems::bullet::ImpactEvent;
use crate::sim::systems::{bullet, impact, integrate, particles, solver, wound};
use crate::util::vec2::Vec2;

/// Round-end trigger parameters, handed in by the match logic
#[derive(Debug, Clone)]
pub struct RoundLost {
    pub loser: Side,
    /// Loser's stand position (ground contact point)
    pub anchor: Vec2,
    /// Winner's gun position; a fixed range out when absent
    pub muzzle: Option<Vec2>,
    /// Aimed zone, or None to draw one at random on arrival
    pub zone: Option<HitZone>,
    /// Current design-to-render scale; passed per impact, never cached
    pub unit_scale: f32,
}

/// A round just ended: arm the winner's shot. The ragdoll itself stands up
/// when the bullet arrives, during a later `advance` call.
pub fn round_lost(state: &mut SimState, config: &SimConfig, params: RoundLost) {
    if state.ragdoll.is_some() {
        tracing::warn!("ragdoll still active at round loss, discarding");
        state.ragdoll = None;
    }

    bullet::fire(
        state,
        params.loser,
        params.anchor,
        params.muzzle,
        params.zone,
        config.impact_magnitude,
        params.unit_scale,
        config,
    );
    tracing::info!(loser = ?params.loser, zone = ?params.zone, "round lost, shot fired");
}

/// Stand up the ragdoll for a landed shot: build the skeleton, encode the
/// impact, open the wound, and throw the burst and gibs. Also the direct
/// entry point for callers that skip the bullet flight.
pub fn resolve_hit<R: Rng + ?Sized>(
    state: &mut SimState,
    config: &SimConfig,
    event: &ImpactEvent,
    rng: &mut R,
) {
    let zone = event.zone.unwrap_or_else(|| HitZone::random(rng));
    let direction = if event.velocity.x >= 0.0 { 1.0 } else { -1.0 };

    let mut ragdoll = Ragdoll::new(
        Skeleton::build(event.anchor, event.unit_scale),
        event.anchor,
    );
    ragdoll.wound = Some(Wound::new(event.velocity));
    state.ragdoll = Some(ragdoll);

    impact::apply(state, zone, direction, event.magnitude, rng);

    if config.gore_enabled {
        particles::spawn_burst(state, event.position, event.velocity, rng);
        particles::spawn_gibs(state, event.position, event.velocity, rng);
    }

    tracing::info!(?zone, direction, "shot landed, ragdoll active");
}

/// Advance the whole scene one tick
pub fn advance<R: Rng + ?Sized>(state: &mut SimState, config: &SimConfig, rng: &mut R) {
    state.tick += 1;

    if let Some(event) = bullet::update(state) {
        resolve_hit(state, config, &event, rng);
    }

    let ground_y = state.ground_y;
    if let Some(ragdoll) = state.ragdoll.as_mut() {
        // Rendered positions before the step, for the settle signal
        let before: Vec<Vec2> = ragdoll.skeleton.points().iter().map(|p| p.position).collect();

        integrate::update(&mut ragdoll.skeleton, config, ground_y);
        solver::relax(&mut ragdoll.skeleton, ground_y, config.solver_iterations);

        let max_displacement = ragdoll
            .skeleton
            .points()
            .iter()
            .zip(&before)
            .map(|(p, b)| p.position.distance_to(*b))
            .fold(0.0, f32::max);

        ragdoll.ticks += 1;
        if max_displacement < config.settle_speed {
            ragdoll.slow_ticks += 1;
        } else {
            ragdoll.slow_ticks = 0;
        }
    }

    wound::update(state, rng);
    particles::update(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::skeleton::PointName;
    use crate::sim::state::RagdollPhase;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const GROUND_Y: f32 = 300.0;
    const ANCHOR: Vec2 = Vec2 { x: 100.0, y: GROUND_Y };

    fn chest_hit_event(direction: f32) -> ImpactEvent {
        ImpactEvent {
            position: ANCHOR + Vec2::UP * 75.0,
            velocity: Vec2::new(direction * 35.0, 0.0),
            loser: if direction < 0.0 { Side::Left } else { Side::Right },
            anchor: ANCHOR,
            zone: Some(HitZone::Chest),
            magnitude: 10.0,
            unit_scale: 1.0,
        }
    }

    #[test]
    fn test_advance_on_idle_state_is_a_noop() {
        let mut state = SimState::new(GROUND_Y);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            advance(&mut state, &SimConfig::default(), &mut rng);
        }
        assert!(state.ragdoll.is_none());
        assert_eq!(state.phase(), RagdollPhase::Idle);
    }

    #[test]
    fn test_bullet_arrival_stands_up_exactly_one_ragdoll() {
        let mut state = SimState::new(GROUND_Y);
        let config = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(2);

        round_lost(
            &mut state,
            &config,
            RoundLost {
                loser: Side::Left,
                anchor: ANCHOR,
                muzzle: None,
                zone: Some(HitZone::Head),
                unit_scale: 1.0,
            },
        );
        assert!(state.bullet.is_some());
        assert!(state.ragdoll.is_none());

        for _ in 0..60 {
            advance(&mut state, &config, &mut rng);
        }

        assert!(state.bullet.is_none());
        assert!(state.ragdoll.is_some());
        assert!(state.ragdoll.as_ref().unwrap().wound.is_some());
        assert_eq!(state.phase(), RagdollPhase::Tumbling);
    }

    #[test]
    fn test_random_zone_is_drawn_when_unspecified() {
        let config = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = SimState::new(GROUND_Y);
        let mut event = chest_hit_event(-1.0);
        event.zone = None;
        resolve_hit(&mut state, &config, &event, &mut rng);
        assert!(state.ragdoll.is_some());
    }

    #[test]
    fn test_gore_switch_gates_burst_and_gibs_but_not_wound() {
        let config = SimConfig {
            gore_enabled: false,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(4);
        let mut state = SimState::new(GROUND_Y);
        resolve_hit(&mut state, &config, &chest_hit_event(-1.0), &mut rng);
        assert!(state.blood.is_empty());
        assert!(state.gibs.is_empty());

        for _ in 0..40 {
            advance(&mut state, &config, &mut rng);
        }
        // The wound still bleeds
        assert!(!state.blood.is_empty());
    }

    #[test]
    fn test_ground_invariant_holds_through_the_whole_collapse() {
        let config = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = SimState::new(GROUND_Y);
        resolve_hit(&mut state, &config, &chest_hit_event(1.0), &mut rng);

        for _ in 0..120 {
            advance(&mut state, &config, &mut rng);
            for point in state.ragdoll.as_ref().unwrap().skeleton.points() {
                assert!(point.position.y <= GROUND_Y + 1e-3);
            }
        }
    }

    #[test]
    fn test_chest_shot_scenario() {
        // Shot from the right: the body must travel left and end up in the
        // ground band, roughly settled.
        let config = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(6);
        let mut state = SimState::new(GROUND_Y);
        resolve_hit(&mut state, &config, &chest_hit_event(-1.0), &mut rng);

        let chest_x0 = state.ragdoll.as_ref().unwrap().skeleton.point(PointName::Chest).position.x;

        for _ in 0..60 {
            advance(&mut state, &config, &mut rng);
        }

        let chest = state.ragdoll.as_ref().unwrap().skeleton.point(PointName::Chest).position;
        assert!(chest.x < chest_x0, "chest must move with the shot");
        assert!(chest.y <= GROUND_Y + 1e-3);

        // Let the crumple finish: the chest comes to rest near the ground
        for _ in 0..150 {
            advance(&mut state, &config, &mut rng);
        }
        let chest_y = state.ragdoll.as_ref().unwrap().skeleton.point(PointName::Chest).position.y;
        assert!(
            GROUND_Y - chest_y < 5.0,
            "chest rests {} above ground",
            GROUND_Y - chest_y
        );
    }

    #[test]
    fn test_settling_scenario() {
        let config = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = SimState::new(GROUND_Y);
        resolve_hit(&mut state, &config, &chest_hit_event(-1.0), &mut rng);

        for step in 1..=300 {
            let before: Vec<Vec2> = state
                .ragdoll
                .as_ref()
                .unwrap()
                .skeleton
                .points()
                .iter()
                .map(|p| p.position)
                .collect();

            advance(&mut state, &config, &mut rng);

            let skeleton = &state.ragdoll.as_ref().unwrap().skeleton;
            if step > 50 && step % 10 == 0 {
                assert!(
                    skeleton.max_strain() < 0.05,
                    "step {}: strain {}",
                    step,
                    skeleton.max_strain()
                );
            }
            if step == 300 {
                let max_displacement = skeleton
                    .points()
                    .iter()
                    .zip(&before)
                    .map(|(p, b)| p.position.distance_to(*b))
                    .fold(0.0, f32::max);
                assert!(
                    max_displacement < 0.1,
                    "still moving {} units/step",
                    max_displacement
                );
            }
        }

        assert_eq!(state.phase(), RagdollPhase::Settled);
    }

    #[test]
    fn test_reset_mid_flight_is_safe() {
        let config = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(8);
        let mut state = SimState::new(GROUND_Y);

        round_lost(
            &mut state,
            &config,
            RoundLost {
                loser: Side::Right,
                anchor: Vec2::new(680.0, GROUND_Y),
                muzzle: None,
                zone: None,
                unit_scale: 1.0,
            },
        );
        for _ in 0..3 {
            advance(&mut state, &config, &mut rng);
        }

        state.reset();
        for _ in 0..10 {
            advance(&mut state, &config, &mut rng);
        }
        assert!(state.ragdoll.is_none());
        assert!(state.bullet.is_none());
        assert!(state.blood.is_empty());
    }

    #[test]
    fn test_round_lost_replaces_a_stale_ragdoll() {
        let config = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = SimState::new(GROUND_Y);
        resolve_hit(&mut state, &config, &chest_hit_event(-1.0), &mut rng);
        assert!(state.ragdoll.is_some());

        round_lost(
            &mut state,
            &config,
            RoundLost {
                loser: Side::Right,
                anchor: Vec2::new(680.0, GROUND_Y),
                muzzle: None,
                zone: None,
                unit_scale: 1.0,
            },
        );
        assert!(state.ragdoll.is_none());
        assert!(state.bullet.is_some());
    }

    #[test]
    fn test_unit_scale_reaches_the_skeleton() {
        let config = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(10);
        let mut state = SimState::new(GROUND_Y);
        let mut event = chest_hit_event(-1.0);
        event.unit_scale = 2.0;
        resolve_hit(&mut state, &config, &event, &mut rng);

        let skeleton = &state.ragdoll.as_ref().unwrap().skeleton;
        let head_height = GROUND_Y - skeleton.point(PointName::Head).position.y;
        assert!((head_height - 200.0).abs() < 25.0, "head at {}", head_height);
    }
}
