//! Simulation state definitions and structures
//!
//! Owns the active ragdoll (at most one), the blood/gib pools, and the
//! bullet in flight. Everything here is plain data; the per-tick logic
//! lives in `sim::systems` and `sim::tick`.

// Allow dead_code for utility methods that are part of the public API
#![allow(dead_code)]

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sim::constants::{gibs, wound};
use crate::sim::skeleton::Skeleton;
use crate::util::vec2::Vec2;

/// Which duelist a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal direction a shot travelling *toward* this side moves in
    #[inline]
    pub fn impact_direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Coarse body region a shot lands in; selects the impact profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitZone {
    Head,
    Chest,
    Gut,
    Shoulder,
}

impl HitZone {
    pub const ALL: [HitZone; 4] = [
        HitZone::Head,
        HitZone::Chest,
        HitZone::Gut,
        HitZone::Shoulder,
    ];

    /// Uniform draw, for callers that leave the zone unspecified
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> HitZone {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Time-decaying blood emitter attached to the active ragdoll
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wound {
    /// Emission intensity in [0, 1]; 0 means inert
    pub intensity: f32,
    /// Velocity of the bullet that caused the wound
    pub bullet_velocity: Vec2,
}

impl Wound {
    pub fn new(bullet_velocity: Vec2) -> Self {
        Self {
            intensity: 1.0,
            bullet_velocity,
        }
    }

    pub fn is_active(&self) -> bool {
        self.intensity > 0.0
    }

    /// Per-tick decay; clamps at exactly 0
    pub fn decay(&mut self) {
        self.intensity = (self.intensity - wound::DECAY_PER_TICK).max(0.0);
    }
}

/// A blood drop in flight or splattered on the ground
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodDrop {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    /// Remaining life in [0, 1]; removed at 0
    pub life: f32,
}

/// Gib render shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GibShape {
    Chunk,
    Strand,
    Bit,
}

/// A flesh chunk thrown from the impact point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gib {
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation: f32,
    pub spin: f32,
    pub size: f32,
    pub shape: GibShape,
    /// Index into the renderer's gore palette
    pub palette: u8,
    pub life: f32,
}

/// The winner's shot, in flight toward the loser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub position: Vec2,
    pub velocity: Vec2,
    pub target: Vec2,
    /// Everything needed to resolve the hit when the bullet arrives
    pub loser: Side,
    pub anchor: Vec2,
    pub zone: Option<HitZone>,
    pub magnitude: f32,
    pub unit_scale: f32,
}

/// Lifecycle of the collapse animation, polled by the round logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RagdollPhase {
    /// No ragdoll exists
    Idle,
    /// The body is still visibly moving
    Tumbling,
    /// Safe to advance to the next round
    Settled,
}

/// The active collapsing body. Owned; dropped wholesale on reset so "at
/// most one ragdoll" is a type-level fact, not a convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ragdoll {
    pub skeleton: Skeleton,
    pub wound: Option<Wound>,
    /// Ground contact point the skeleton was built at
    pub anchor: Vec2,
    /// Ticks since the impact
    pub ticks: u64,
    /// Consecutive ticks below the settle speed threshold
    pub slow_ticks: u32,
}

impl Ragdoll {
    pub fn new(skeleton: Skeleton, anchor: Vec2) -> Self {
        Self {
            skeleton,
            wound: None,
            anchor,
            ticks: 0,
            slow_ticks: 0,
        }
    }
}

/// Complete simulation state for one duel scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// At most one active ragdoll per losing character
    pub ragdoll: Option<Ragdoll>,
    pub blood: Vec<BloodDrop>,
    pub gibs: Vec<Gib>,
    pub bullet: Option<Bullet>,
    /// y coordinate of the ground plane
    pub ground_y: f32,
    /// Ticks advanced since construction or the last reset
    pub tick: u64,
}

impl SimState {
    pub fn new(ground_y: f32) -> Self {
        Self {
            ragdoll: None,
            blood: Vec::new(),
            gibs: Vec::new(),
            bullet: None,
            ground_y,
            tick: 0,
        }
    }

    /// Hard cutover back to the pre-death state. Safe between any two
    /// ticks; stepping afterwards is a no-op until the next round loss.
    pub fn reset(&mut self) {
        self.ragdoll = None;
        self.blood.clear();
        self.gibs.clear();
        self.bullet = None;
        self.tick = 0;
    }

    pub fn add_blood(&mut self, drop: BloodDrop) {
        self.blood.push(drop);
    }

    pub fn add_gib(&mut self, gib: Gib) {
        debug_assert!(gib.palette < gibs::PALETTE_SIZE);
        self.gibs.push(gib);
    }

    /// Lifecycle signal polled by the round-transition logic. Settled is
    /// reported once the body has been slow for a stretch of ticks, or
    /// unconditionally when the lifetime cap runs out.
    pub fn phase(&self) -> RagdollPhase {
        use crate::sim::constants::ragdoll::{MAX_LIFETIME_TICKS, MIN_TUMBLE_TICKS, SETTLE_TICKS};
        match &self.ragdoll {
            None => RagdollPhase::Idle,
            Some(ragdoll) => {
                if ragdoll.ticks >= MAX_LIFETIME_TICKS
                    || (ragdoll.ticks >= MIN_TUMBLE_TICKS && ragdoll.slow_ticks >= SETTLE_TICKS)
                {
                    RagdollPhase::Settled
                } else {
                    RagdollPhase::Tumbling
                }
            }
        }
    }

    /// True while anything on screen still animates
    pub fn is_animating(&self) -> bool {
        self.bullet.is_some()
            || self.ragdoll.is_some()
            || !self.blood.is_empty()
            || !self.gibs.is_empty()
    }
}
