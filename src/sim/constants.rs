/// World/layout constants - all distances are in design units (reference
/// canvas height 400), y grows downward, the ground line is where feet stand.
pub mod world {
    /// Reference design height the unit scale is derived from
    pub const DESIGN_HEIGHT: f32 = 400.0;
    /// Ground line as a fraction of design height
    pub const GROUND_LEVEL: f32 = 0.73;
    /// Left duelist stand position as a fraction of design width
    pub const LEFT_X: f32 = 0.32;
    /// Right duelist stand position as a fraction of design width
    pub const RIGHT_X: f32 = 0.68;
    /// Simulation tick rate in Hz (per-tick constants below assume this)
    pub const TICK_RATE: u32 = 60;
    /// Tick duration in milliseconds
    pub const TICK_DURATION_MS: u64 = 1000 / TICK_RATE as u64;
}

/// Ragdoll integration constants - CRITICAL: these are per-tick values for
/// the Verlet scheme (velocity is implicit in position history), NOT
/// per-second forces. Retuning them requires retuning bounce/friction too.
pub mod ragdoll {
    /// Downward acceleration added to every unpinned point each tick
    pub const GRAVITY: f32 = 0.6;
    /// Implicit-velocity retention per tick (air drag)
    pub const AIR_DAMPING: f32 = 0.99;
    /// Horizontal velocity retention on ground contact
    pub const GROUND_FRICTION: f32 = 0.7;
    /// Vertical velocity inversion factor on ground contact
    pub const BOUNCE: f32 = 0.3;
    /// Constraint relaxation passes per tick
    /// More passes = stiffer joints; fewer = visible stretching
    pub const SOLVER_ITERATIONS: u32 = 5;
    /// Max implicit point speed (units/tick) below which the body counts
    /// as settled
    pub const SETTLE_SPEED: f32 = 0.1;
    /// Consecutive slow ticks required before reporting settled
    pub const SETTLE_TICKS: u32 = 10;
    /// Minimum ticks before the settled check is consulted at all
    pub const MIN_TUMBLE_TICKS: u64 = 30;
    /// Hard cap on ragdoll animation length in ticks (4 seconds)
    pub const MAX_LIFETIME_TICKS: u64 = 240;
    /// Distances closer than this are treated as degenerate by the solver
    pub const DEGENERATE_DISTANCE: f32 = 1e-6;
}

/// Impact model constants - per-zone kick profiles
pub mod impact {
    /// Default impact magnitude when the caller does not supply one
    pub const DEFAULT_MAGNITUDE: f32 = 10.0;
    /// Upward share of the base kick (fraction of magnitude)
    pub const UPWARD_RATIO: f32 = 0.6;
    /// Per-point jitter range applied to the base kick
    pub const JITTER_MIN: f32 = 0.6;
    pub const JITTER_MAX: f32 = 1.4;
    /// Tight jitter range for zone-override kicks
    pub const TIGHT_JITTER_MIN: f32 = 0.9;
    pub const TIGHT_JITTER_MAX: f32 = 1.1;

    /// Head shot: whiplash profile
    pub const HEAD_KICK: f32 = 2.2;
    pub const HEAD_LIFT: f32 = 1.3;
    pub const HEAD_NECK_KICK: f32 = 1.2;
    pub const HEAD_CHEST_KICK: f32 = 0.8;
    /// Hand fling ranges for head shots (horizontal, vertical)
    pub const HEAD_HAND_FLING_MIN: f32 = 0.8;
    pub const HEAD_HAND_FLING_MAX: f32 = 1.4;
    pub const HEAD_HAND_LIFT_MIN: f32 = 1.0;
    pub const HEAD_HAND_LIFT_MAX: f32 = 1.6;

    /// Chest shot: uniform knockback across the upper body
    pub const CHEST_KICK: f32 = 1.6;
    pub const CHEST_LIFT: f32 = 0.8;

    /// Gut shot: the body folds instead of flying back
    pub const GUT_HIP_KICK: f32 = 1.1;
    pub const GUT_HIP_DROP: f32 = 0.5;
    pub const GUT_CHEST_KICK: f32 = 0.9;
    pub const GUT_CHEST_DROP: f32 = 0.3;
    pub const GUT_HEAD_KICK: f32 = 0.3;
    pub const GUT_HEAD_DROP: f32 = 0.6;
    pub const GUT_KNEE_BUCKLE: f32 = 0.35;
    pub const GUT_FOOT_STUMBLE: f32 = 0.3;

    /// Shoulder shot: one arm chain flies, the torso twists
    pub const SHOULDER_KICK: f32 = 2.4;
    pub const SHOULDER_LIFT: f32 = 0.9;
    pub const SHOULDER_OPPOSITE_KICK: f32 = 0.4;
    pub const SHOULDER_OPPOSITE_LIFT: f32 = 0.2;
    pub const SHOULDER_HIP_TWIST: f32 = 0.3;

    /// Limb jitter added to elbows and hands in every zone
    pub const LIMB_JITTER: f32 = 0.3;
}

/// Wound (sustained blood emission) constants
pub mod wound {
    /// Intensity lost per tick; emission stops at exactly 0
    pub const DECAY_PER_TICK: f32 = 0.008;
    /// Spawn probability per tick is intensity * SPURT_CHANCE
    pub const SPURT_CHANCE: f32 = 0.6;
    /// Drops per spurt scale: 1 + rand * MAX_EXTRA_DROPS * intensity
    pub const MAX_EXTRA_DROPS: f32 = 3.0;
    /// Angular spread around the bullet direction (radians, each side)
    pub const SPREAD: f32 = 0.75;
    /// Drop speed: SPEED_BASE + rand * SPEED_SCALE * intensity
    pub const SPEED_BASE: f32 = 2.0;
    pub const SPEED_SCALE: f32 = 5.0;
    /// Fraction of the chest point's implicit velocity inherited by drops
    pub const BODY_VELOCITY_CARRY: f32 = 0.3;
    /// Constant upward bias on drop velocity
    pub const UPWARD_BIAS: f32 = 1.0;
    /// Spawn position jitter around the chest point (each axis, each side)
    pub const SPAWN_JITTER: f32 = 5.0;
    /// Drop size range (wound drops run smaller than burst drops)
    pub const DROP_SIZE_MIN: f32 = 2.0;
    pub const DROP_SIZE_MAX: f32 = 6.0;
    /// Drop life range at spawn
    pub const LIFE_MIN: f32 = 0.8;
    pub const LIFE_RANGE: f32 = 0.2;
}

/// Blood drop pool constants
pub mod blood {
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.4;
    /// Life lost per tick
    pub const LIFE_DECAY: f32 = 0.008;
    /// Vertical velocity inversion on ground splat
    pub const GROUND_BOUNCE: f32 = 0.3;
    /// Horizontal velocity retention on ground splat
    pub const GROUND_FRICTION: f32 = 0.8;
    /// Extra life cost each tick a drop touches the ground
    pub const GROUND_LIFE_COST: f32 = 0.05;
    /// Impact burst: drop count range
    pub const BURST_MIN: u32 = 25;
    pub const BURST_EXTRA: u32 = 15;
    /// Impact burst: angular spread around the bullet direction (radians)
    pub const BURST_SPREAD: f32 = 1.0;
    /// Impact burst: drop speed range
    pub const BURST_SPEED_MIN: f32 = 3.0;
    pub const BURST_SPEED_MAX: f32 = 11.0;
    /// Impact burst: per-axis velocity jitter and upward bias
    pub const BURST_VELOCITY_JITTER: f32 = 1.5;
    pub const BURST_UPWARD_BIAS: f32 = 2.0;
    /// Impact burst: spawn position jitter
    pub const BURST_POSITION_JITTER: f32 = 10.0;
    /// Drop size range
    pub const SIZE_MIN: f32 = 3.0;
    pub const SIZE_MAX: f32 = 9.0;
}

/// Gib (flesh chunk) constants
pub mod gibs {
    /// Spawn count range at impact
    pub const COUNT_MIN: u32 = 8;
    pub const COUNT_EXTRA: u32 = 6;
    /// Angular spread around the bullet direction (radians, each side)
    pub const SPREAD: f32 = 1.25;
    /// Launch speed range
    pub const SPEED_MIN: f32 = 5.0;
    pub const SPEED_MAX: f32 = 17.0;
    /// Per-axis velocity jitter and upward bias
    pub const VELOCITY_JITTER: f32 = 2.0;
    pub const UPWARD_BIAS: f32 = 3.0;
    /// Spawn position jitter
    pub const POSITION_JITTER: f32 = 15.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Life lost per tick (gibs outlive blood drops)
    pub const LIFE_DECAY: f32 = 0.003;
    /// Ground response: duller than blood
    pub const GROUND_BOUNCE: f32 = 0.2;
    pub const GROUND_FRICTION: f32 = 0.7;
    pub const SPIN_DAMP: f32 = 0.5;
    /// Vertical speed below which a grounded gib stops moving entirely
    pub const REST_SPEED: f32 = 0.5;
    /// Spin range at spawn (radians/tick, each side)
    pub const SPIN_MAX: f32 = 0.2;
    /// Number of entries in the renderer's gib palette
    pub const PALETTE_SIZE: u8 = 6;
}

/// Bullet flight constants
pub mod bullet {
    /// Flight speed in design units per tick
    pub const SPEED: f32 = 35.0;
    /// Arrival radius around the target point
    pub const HIT_RADIUS: f32 = 30.0;
    /// Chest height above the ground line where the shot lands
    pub const TARGET_HEIGHT: f32 = 75.0;
    /// Muzzle height above the ground line
    pub const MUZZLE_HEIGHT: f32 = 80.0;
    /// Default muzzle distance from the target when the caller does not
    /// supply a muzzle position
    pub const DEFAULT_RANGE: f32 = 250.0;
}
