//! Decoration sampling along a fitted cable
//!
//! Walks the curve arithmetically: lights sit at fixed X spacing with their
//! rotation taken from the local tangent, crossings sit midway between
//! consecutive anchors where the twisted pair swaps sides. X is mapped to
//! the Bezier parameter by the same linear approximation the curve uses.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::curve::FittedCurve;
use super::rng::SeededRng;
use crate::consts::BOUNDARY_ROTATION_DEGREES;

/// One decorative light on the cable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightPoint {
    pub position: Vec2,
    /// Tangent angle at the sample (degrees, clockwise with Y down)
    pub rotation_degrees: f32,
}

/// Point where the two cables of the pair swap sides
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossingPoint {
    pub position: Vec2,
    pub index: usize,
}

/// Sample light positions at uniform X spacing across `[0, width]`.
///
/// Samples that fall outside the cable's bleed range (possible when the
/// sampling width exceeds the width the cable was fitted for) fall back to
/// the nearest end's Y with a small seeded rotation instead of a tangent.
pub fn sample_lights(
    curve: &FittedCurve,
    width: f32,
    spacing: f32,
    rng: &mut SeededRng,
) -> Vec<LightPoint> {
    // A non-positive spacing would never advance
    let spacing = spacing.max(1.0);
    let count = (width / spacing).floor() as usize + 1;

    let mut lights = Vec::with_capacity(count);
    for i in 0..count {
        let x = i as f32 * spacing;
        match curve.point_and_tangent_at(x) {
            Some((position, tangent)) => {
                lights.push(LightPoint {
                    position,
                    rotation_degrees: tangent.y.atan2(tangent.x).to_degrees(),
                });
            }
            None => {
                lights.push(LightPoint {
                    position: Vec2::new(x, curve.y_at(x)),
                    rotation_degrees: rng
                        .range32(-BOUNDARY_ROTATION_DEGREES, BOUNDARY_ROTATION_DEGREES),
                });
            }
        }
    }
    lights
}

/// Crossing points of the twisted pair.
///
/// The pair alternates sides at each anchor, so the cables swap over once
/// per inter-anchor gap; the crossing is placed at the gap's midpoint with
/// the mean Y of the two cables. Fewer than two anchors yield no crossings.
pub fn crossing_points(curve1: &FittedCurve, curve2: &FittedCurve) -> Vec<CrossingPoint> {
    let points = curve1.points();
    if points.len() < 4 {
        // Two of the points are the off-screen extensions
        return Vec::new();
    }

    let anchors = &points[1..points.len() - 1];
    let mut crossings = Vec::with_capacity(anchors.len() - 1);
    for (index, pair) in anchors.windows(2).enumerate() {
        let x = (pair[0].x + pair[1].x) * 0.5;
        let y = (curve1.y_at(x) + curve2.y_at(x)) * 0.5;
        crossings.push(CrossingPoint {
            position: Vec2::new(x, y),
            index,
        });
    }
    crossings
}
