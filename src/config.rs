use crate::sim::constants::{bullet, impact, ragdoll};

/// Tuning validation error
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be positive (got {value})")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be within {min}..={max} (got {value})")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("solver_iterations must be within 1..=64 (got {0})")]
    BadIterations(u32),
}

/// Simulation tuning values
///
/// Defaults mirror `sim::constants`; every field can be overridden from a
/// `RAGDOLL_*` environment variable for tuning without a rebuild.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Implicit-velocity retention per tick
    pub air_damping: f32,
    /// Horizontal velocity retention on ground contact
    pub ground_friction: f32,
    /// Vertical velocity inversion factor on ground contact
    pub bounce: f32,
    /// Constraint relaxation passes per tick
    pub solver_iterations: u32,
    /// Implicit speed below which a point counts as still
    pub settle_speed: f32,
    /// Impact magnitude handed to the zone profiles
    pub impact_magnitude: f32,
    /// Bullet flight speed in units per tick
    pub bullet_speed: f32,
    /// Master switch for gibs and the impact blood burst
    pub gore_enabled: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: ragdoll::GRAVITY,
            air_damping: ragdoll::AIR_DAMPING,
            ground_friction: ragdoll::GROUND_FRICTION,
            bounce: ragdoll::BOUNCE,
            solver_iterations: ragdoll::SOLVER_ITERATIONS,
            settle_speed: ragdoll::SETTLE_SPEED,
            impact_magnitude: impact::DEFAULT_MAGNITUDE,
            bullet_speed: bullet::SPEED,
            gore_enabled: true,
        }
    }
}

impl SimConfig {
    /// Load config from environment or use defaults
    pub fn load_or_default() -> Self {
        let mut config = Self::default();

        read_f32("RAGDOLL_GRAVITY", &mut config.gravity);
        read_f32("RAGDOLL_AIR_DAMPING", &mut config.air_damping);
        read_f32("RAGDOLL_GROUND_FRICTION", &mut config.ground_friction);
        read_f32("RAGDOLL_BOUNCE", &mut config.bounce);
        read_f32("RAGDOLL_SETTLE_SPEED", &mut config.settle_speed);
        read_f32("RAGDOLL_IMPACT_MAGNITUDE", &mut config.impact_magnitude);
        read_f32("RAGDOLL_BULLET_SPEED", &mut config.bullet_speed);

        if let Ok(raw) = std::env::var("RAGDOLL_SOLVER_ITERATIONS") {
            if let Ok(parsed) = raw.parse::<u32>() {
                config.solver_iterations = parsed;
            } else {
                tracing::warn!("Invalid RAGDOLL_SOLVER_ITERATIONS '{}', using default", raw);
            }
        }

        if let Ok(raw) = std::env::var("RAGDOLL_GORE_ENABLED") {
            match raw.parse::<bool>() {
                Ok(parsed) => config.gore_enabled = parsed,
                Err(_) => {
                    tracing::warn!("Invalid RAGDOLL_GORE_ENABLED '{}', using default", raw);
                }
            }
        }

        config
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gravity <= 0.0 {
            return Err(ConfigError::NotPositive {
                name: "gravity",
                value: self.gravity,
            });
        }
        if self.air_damping <= 0.0 || self.air_damping > 1.0 {
            return Err(ConfigError::OutOfRange {
                name: "air_damping",
                value: self.air_damping,
                min: 0.0,
                max: 1.0,
            });
        }
        if self.ground_friction < 0.0 || self.ground_friction > 1.0 {
            return Err(ConfigError::OutOfRange {
                name: "ground_friction",
                value: self.ground_friction,
                min: 0.0,
                max: 1.0,
            });
        }
        if self.bounce < 0.0 || self.bounce >= 1.0 {
            return Err(ConfigError::OutOfRange {
                name: "bounce",
                value: self.bounce,
                min: 0.0,
                max: 1.0,
            });
        }
        if self.solver_iterations == 0 || self.solver_iterations > 64 {
            return Err(ConfigError::BadIterations(self.solver_iterations));
        }
        if self.impact_magnitude <= 0.0 {
            return Err(ConfigError::NotPositive {
                name: "impact_magnitude",
                value: self.impact_magnitude,
            });
        }
        if self.bullet_speed <= 0.0 {
            return Err(ConfigError::NotPositive {
                name: "bullet_speed",
                value: self.bullet_speed,
            });
        }
        Ok(())
    }
}

fn read_f32(name: &'static str, slot: &mut f32) {
    if let Ok(raw) = std::env::var(name) {
        if let Ok(parsed) = raw.parse::<f32>() {
            *slot = parsed;
        } else {
            tracing::warn!("Invalid {} '{}', using default", name, raw);
        }
    }
}
