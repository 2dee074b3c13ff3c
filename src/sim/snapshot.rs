//! Per-tick render snapshot
//!
//! The renderer draws capsules between named point pairs and circles at
//! the extremities; all it needs from the simulation is each point's
//! position and each segment's angle. This is an in-process contract, not
//! a wire format, but the types serialize for debug dumps.

use serde::Serialize;

use crate::sim::skeleton::{PointName, Skeleton};
use crate::util::vec2::Vec2;

/// Limb segments the renderer draws, as named point pairs
pub const SEGMENTS: [(&str, PointName, PointName); 11] = [
    ("neck", PointName::Head, PointName::Neck),
    ("upper_spine", PointName::Neck, PointName::Chest),
    ("lower_spine", PointName::Chest, PointName::Hip),
    ("upper_arm_front", PointName::ShoulderFront, PointName::ElbowFront),
    ("forearm_front", PointName::ElbowFront, PointName::HandFront),
    ("upper_arm_back", PointName::ShoulderBack, PointName::ElbowBack),
    ("forearm_back", PointName::ElbowBack, PointName::HandBack),
    ("thigh_left", PointName::HipLeft, PointName::KneeLeft),
    ("shin_left", PointName::KneeLeft, PointName::FootLeft),
    ("thigh_right", PointName::HipRight, PointName::KneeRight),
    ("shin_right", PointName::KneeRight, PointName::FootRight),
];

#[derive(Debug, Clone, Serialize)]
pub struct PointSnapshot {
    pub name: PointName,
    pub position: Vec2,
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentSnapshot {
    pub name: &'static str,
    pub a: PointName,
    pub b: PointName,
    pub start: Vec2,
    pub end: Vec2,
    /// atan2(dy, dx) from start to end
    pub angle: f32,
}

/// Everything a renderer needs for one frame of the ragdoll
#[derive(Debug, Clone, Serialize)]
pub struct RagdollSnapshot {
    pub points: Vec<PointSnapshot>,
    pub segments: Vec<SegmentSnapshot>,
}

impl RagdollSnapshot {
    pub fn capture(skeleton: &Skeleton) -> Self {
        let points = PointName::ALL
            .iter()
            .map(|&name| PointSnapshot {
                name,
                position: skeleton.point(name).position,
            })
            .collect();

        let segments = SEGMENTS
            .iter()
            .map(|&(name, a, b)| {
                let start = skeleton.point(a).position;
                let end = skeleton.point(b).position;
                SegmentSnapshot {
                    name,
                    a,
                    b,
                    start,
                    end,
                    angle: (end - start).angle(),
                }
            })
            .collect();

        Self { points, segments }
    }
}
