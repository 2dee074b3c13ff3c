//! Stick constraint solver
//!
//! Iterative relaxation: every pass nudges each stick's endpoints halfway
//! toward the rest length, then re-clamps the whole body to the ground
//! plane so no pass can push a point back underground between ticks.

use crate::sim::constants::ragdoll::DEGENERATE_DISTANCE;
use crate::sim::skeleton::Skeleton;

/// Run `iterations` full relaxation passes over all sticks.
///
/// Each pass moves both endpoints of every stick half of the fractional
/// error toward rest length, symmetrically. More iterations give stiffer
/// joints at linear cost; too few show up as visible stretching.
pub fn relax(skeleton: &mut Skeleton, ground_y: f32, iterations: u32) {
    if skeleton.is_empty() {
        return;
    }

    for _ in 0..iterations {
        for i in 0..skeleton.sticks().len() {
            let stick = &skeleton.sticks()[i];
            let (a, b, rest) = (stick.a, stick.b, stick.rest_length);

            let delta = skeleton.point(b).position - skeleton.point(a).position;
            let dist = delta.length();
            // Coincident endpoints have no axis to correct along; skip
            // this stick for the pass instead of dividing by zero.
            if dist < DEGENERATE_DISTANCE {
                continue;
            }

            let correction = delta * ((rest - dist) / dist / 2.0);
            if !skeleton.point(a).pinned {
                skeleton.point_mut(a).position -= correction;
            }
            if !skeleton.point(b).pinned {
                skeleton.point_mut(b).position += correction;
            }
        }

        for point in skeleton.points_mut() {
            if point.position.y > ground_y {
                point.position.y = ground_y;
            }
        }
    }
}
