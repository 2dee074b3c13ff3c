mod config;
mod sim;
mod util;

use tracing::{info, Level};

use crate::config::SimConfig;
use crate::sim::constants::world;
use crate::sim::snapshot::RagdollSnapshot;
use crate::sim::state::{RagdollPhase, Side, SimState};
use crate::sim::tick::{self, RoundLost};
use crate::util::vec2::Vec2;

/// Headless demo: lose one round, let the body drop, dump the final pose.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Quickdraw ragdoll sim v{}", env!("CARGO_PKG_VERSION"));

    let config = SimConfig::load_or_default();
    config.validate()?;
    info!(
        "Tuning: gravity={}, damping={}, iterations={}",
        config.gravity, config.air_damping, config.solver_iterations
    );

    // Design-unit stage: reference height, widescreen duel layout
    let width = world::DESIGN_HEIGHT * 2.5;
    let ground_y = world::DESIGN_HEIGHT * world::GROUND_LEVEL;
    let anchor = Vec2::new(width * world::RIGHT_X, ground_y);

    let mut state = SimState::new(ground_y);
    let mut rng = rand::thread_rng();

    // The right-side duelist loses; the shot picks its own zone
    tick::round_lost(
        &mut state,
        &config,
        RoundLost {
            loser: Side::Right,
            anchor,
            muzzle: Some(Vec2::new(width * world::LEFT_X, ground_y - 80.0)),
            zone: None,
            unit_scale: 1.0,
        },
    );

    let mut ticker =
        tokio::time::interval(std::time::Duration::from_millis(world::TICK_DURATION_MS));
    let mut settled_ticks = 0u32;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                tick::advance(&mut state, &config, &mut rng);

                if state.phase() == RagdollPhase::Settled {
                    settled_ticks += 1;
                }
                // Give the blood a moment to drain after the body stops
                if settled_ticks > world::TICK_RATE || !state.is_animating() {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }

    info!(
        "Scene finished after {} ticks ({} drops, {} gibs still on screen)",
        state.tick,
        state.blood.len(),
        state.gibs.len()
    );

    if let Some(ragdoll) = &state.ragdoll {
        let snapshot = RagdollSnapshot::capture(&ragdoll.skeleton);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}
