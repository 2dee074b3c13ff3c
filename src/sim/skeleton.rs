//! Skeleton construction
//!
//! The humanoid rig is a declarative table of named point masses plus a
//! table of distance constraints between them. Rest lengths are measured
//! from the built pose, so the same tables work at any unit scale.

use serde::{Deserialize, Serialize};

use crate::util::vec2::Vec2;

/// Named point masses of the rig
///
/// Front/Back refer to the gun arm and off arm; Left/Right are the legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointName {
    Head,
    Neck,
    Chest,
    Hip,
    ShoulderFront,
    ShoulderBack,
    ElbowFront,
    ElbowBack,
    HandFront,
    HandBack,
    HipLeft,
    HipRight,
    KneeLeft,
    KneeRight,
    FootLeft,
    FootRight,
}

impl PointName {
    pub const COUNT: usize = 16;

    pub const ALL: [PointName; Self::COUNT] = [
        PointName::Head,
        PointName::Neck,
        PointName::Chest,
        PointName::Hip,
        PointName::ShoulderFront,
        PointName::ShoulderBack,
        PointName::ElbowFront,
        PointName::ElbowBack,
        PointName::HandFront,
        PointName::HandBack,
        PointName::HipLeft,
        PointName::HipRight,
        PointName::KneeLeft,
        PointName::KneeRight,
        PointName::FootLeft,
        PointName::FootRight,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Standing pose, as offsets from the anchor (the ground contact point
/// between the feet) in design units. y is negative above the ground.
const STANDING_POSE: [(PointName, Vec2); PointName::COUNT] = [
    (PointName::Head, Vec2 { x: 0.0, y: -100.0 }),
    (PointName::Neck, Vec2 { x: 0.0, y: -88.0 }),
    (PointName::Chest, Vec2 { x: 0.0, y: -75.0 }),
    (PointName::Hip, Vec2 { x: 0.0, y: -45.0 }),
    (PointName::ShoulderFront, Vec2 { x: 10.0, y: -80.0 }),
    (PointName::ShoulderBack, Vec2 { x: -10.0, y: -80.0 }),
    (PointName::ElbowFront, Vec2 { x: 14.0, y: -62.0 }),
    (PointName::ElbowBack, Vec2 { x: -14.0, y: -62.0 }),
    (PointName::HandFront, Vec2 { x: 16.0, y: -45.0 }),
    (PointName::HandBack, Vec2 { x: -16.0, y: -45.0 }),
    (PointName::HipLeft, Vec2 { x: -6.0, y: -45.0 }),
    (PointName::HipRight, Vec2 { x: 6.0, y: -45.0 }),
    (PointName::KneeLeft, Vec2 { x: -7.0, y: -22.0 }),
    (PointName::KneeRight, Vec2 { x: 7.0, y: -22.0 }),
    (PointName::FootLeft, Vec2 { x: -8.0, y: 0.0 }),
    (PointName::FootRight, Vec2 { x: 8.0, y: 0.0 }),
];

/// Direct joints: the segments a renderer draws
const JOINTS: [(PointName, PointName); 15] = [
    (PointName::Head, PointName::Neck),
    (PointName::Neck, PointName::Chest),
    (PointName::Chest, PointName::Hip),
    (PointName::Chest, PointName::ShoulderFront),
    (PointName::Chest, PointName::ShoulderBack),
    (PointName::ShoulderFront, PointName::ElbowFront),
    (PointName::ElbowFront, PointName::HandFront),
    (PointName::ShoulderBack, PointName::ElbowBack),
    (PointName::ElbowBack, PointName::HandBack),
    (PointName::Hip, PointName::HipLeft),
    (PointName::Hip, PointName::HipRight),
    (PointName::HipLeft, PointName::KneeLeft),
    (PointName::KneeLeft, PointName::FootLeft),
    (PointName::HipRight, PointName::KneeRight),
    (PointName::KneeRight, PointName::FootRight),
];

/// Structural cross-braces. Without these the solver alone produces
/// unstable wobble: removing any single stick must never let two parts of
/// the body drift apart unbounded.
const BRACES: [(PointName, PointName); 7] = [
    (PointName::Head, PointName::Chest),
    (PointName::Neck, PointName::ShoulderFront),
    (PointName::Neck, PointName::ShoulderBack),
    (PointName::Chest, PointName::HipLeft),
    (PointName::Chest, PointName::HipRight),
    (PointName::ShoulderFront, PointName::Hip),
    (PointName::ShoulderBack, PointName::Hip),
];

/// A point mass. Velocity is implicit: `position - old_position` is the
/// displacement of the last tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    pub position: Vec2,
    pub old_position: Vec2,
    /// Pinned points never move. Unused by the current topology but part
    /// of the contract for future anchoring.
    pub pinned: bool,
}

impl Point {
    fn at_rest(position: Vec2) -> Self {
        Self {
            position,
            old_position: position,
            pinned: false,
        }
    }

    /// Implicit velocity (displacement of the last tick)
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.position - self.old_position
    }
}

/// Distance constraint between two point masses. Points are referenced by
/// name; a point may participate in any number of sticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stick {
    pub a: PointName,
    pub b: PointName,
    pub rest_length: f32,
}

/// The complete jointed body: 16 point masses, 22 sticks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skeleton {
    points: Vec<Point>,
    sticks: Vec<Stick>,
}

impl Skeleton {
    /// Build the rig in its standing pose at `anchor` (ground contact
    /// point, y increasing downward). Rest lengths are measured from the
    /// scaled pose. Pure construction, no failure modes.
    pub fn build(anchor: Vec2, unit_scale: f32) -> Self {
        let points: Vec<Point> = STANDING_POSE
            .iter()
            .map(|(_, offset)| Point::at_rest(anchor + *offset * unit_scale))
            .collect();

        let sticks = JOINTS
            .iter()
            .chain(BRACES.iter())
            .map(|&(a, b)| Stick {
                a,
                b,
                rest_length: points[a.index()]
                    .position
                    .distance_to(points[b.index()].position),
            })
            .collect();

        Self { points, sticks }
    }

    #[inline]
    pub fn point(&self, name: PointName) -> &Point {
        &self.points[name.index()]
    }

    #[inline]
    pub fn point_mut(&mut self, name: PointName) -> &mut Point {
        &mut self.points[name.index()]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    pub fn sticks(&self) -> &[Stick] {
        &self.sticks
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest implicit point speed, the settle signal's input
    pub fn max_speed(&self) -> f32 {
        self.points
            .iter()
            .map(|p| p.velocity().length())
            .fold(0.0, f32::max)
    }

    /// Worst relative rest-length violation across all sticks
    pub fn max_strain(&self) -> f32 {
        self.sticks
            .iter()
            .map(|s| {
                let dist = self.points[s.a.index()]
                    .position
                    .distance_to(self.points[s.b.index()].position);
                (dist - s.rest_length).abs() / s.rest_length
            })
            .fold(0.0, f32::max)
    }
}
