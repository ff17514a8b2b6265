//! Curve fitting for the twisted cable
//!
//! Fits two piecewise cubic-Bezier curves through the attachment points:
//! anchor Y positions get seeded jitter scaled by the amplitude range, the
//! asymmetry parameter biases points alternately up and down (which is what
//! makes the pair read as a twisted cable), and control points sit at fixed
//! fractional offsets with horizontal tangents so every join looks smooth
//! without enforcing true curvature continuity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::AttachmentPoint;
use super::rng::SeededRng;
use crate::consts::{CONTROL_FRACTION, EDGE_BLEED};
use crate::pct_to_px;

/// Vertical jitter bounds for anchor sag (px)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmplitudeRange {
    pub min: f32,
    pub max: f32,
}

impl Default for AmplitudeRange {
    fn default() -> Self {
        Self {
            min: 18.0,
            max: 42.0,
        }
    }
}

impl AmplitudeRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Width of the jitter band
    #[inline]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}

/// Tunable shape of the fitted cable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveParams {
    /// Sag magnitude drawn per anchor from this range
    pub amplitude: AmplitudeRange,
    /// Resting Y of the cable before jitter (px, positive is down)
    pub baseline: f32,
    /// Control point reach; 1.0 puts them at 40%/60% of each gap
    pub smoothing: f32,
    /// Strength of the secondary per-anchor ripple (0-1)
    pub complexity: f32,
    /// How strongly anchors alternate above/below the sag line (0-1)
    pub asymmetry: f32,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            amplitude: AmplitudeRange::default(),
            baseline: 40.0,
            smoothing: 1.0,
            complexity: 0.35,
            asymmetry: 0.5,
        }
    }
}

/// One cubic Bezier span of a fitted curve
#[derive(Debug, Clone, Copy)]
pub struct CubicSegment {
    pub p0: Vec2,
    pub c1: Vec2,
    pub c2: Vec2,
    pub p1: Vec2,
}

impl CubicSegment {
    /// Evaluate the curve at parameter `t` in [0, 1]
    pub fn point(&self, t: f32) -> Vec2 {
        let u = 1.0 - t;
        self.p0 * (u * u * u)
            + self.c1 * (3.0 * u * u * t)
            + self.c2 * (3.0 * u * t * t)
            + self.p1 * (t * t * t)
    }

    /// Evaluate the curve derivative at parameter `t` in [0, 1]
    pub fn derivative(&self, t: f32) -> Vec2 {
        let u = 1.0 - t;
        (self.c1 - self.p0) * (3.0 * u * u)
            + (self.c2 - self.c1) * (6.0 * u * t)
            + (self.p1 - self.c2) * (3.0 * t * t)
    }

    /// Approximate the parameter for an X by linear interpolation.
    ///
    /// Not an exact Bezier X-inversion; the control points keep X close to
    /// linear in `t`, and the slight drift is an intentional part of the
    /// garland's look.
    pub fn t_for_x(&self, x: f32) -> f32 {
        let dx = self.p1.x - self.p0.x;
        if dx.abs() <= f32::EPSILON {
            0.0
        } else {
            ((x - self.p0.x) / dx).clamp(0.0, 1.0)
        }
    }
}

/// A fitted cable: resolved on-curve points plus the control point rule.
///
/// Points include the off-screen extensions at both ends, so the cable
/// always bleeds past the container edges. Control points are recomputed
/// from `smoothing` on demand; they never consume the RNG.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedCurve {
    points: Vec<Vec2>,
    smoothing: f32,
}

impl FittedCurve {
    /// Wrap resolved anchor points with the off-screen extensions.
    ///
    /// Zero anchors degenerate to a flat bleed-to-bleed span at `baseline`;
    /// the cable never disappears entirely.
    fn with_extensions(anchor_points: Vec<Vec2>, width: f32, baseline: f32, smoothing: f32) -> Self {
        let mut points = Vec::with_capacity(anchor_points.len() + 2);
        if anchor_points.is_empty() {
            points.push(Vec2::new(-EDGE_BLEED, baseline));
            points.push(Vec2::new(width + EDGE_BLEED, baseline));
        } else {
            let last_y = anchor_points[anchor_points.len() - 1].y;
            points.push(Vec2::new(-EDGE_BLEED, anchor_points[0].y));
            points.extend(anchor_points);
            points.push(Vec2::new(width + EDGE_BLEED, last_y));
        }
        Self { points, smoothing }
    }

    /// Resolved on-curve points, extensions included, ascending in X
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of cubic spans (always at least 1)
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Build the cubic span between points `index` and `index + 1`.
    ///
    /// Control points sit `CONTROL_FRACTION * smoothing` of the gap inside
    /// each end, level with their endpoint, so every on-curve point has a
    /// horizontal tangent.
    pub fn segment(&self, index: usize) -> CubicSegment {
        let p0 = self.points[index];
        let p1 = self.points[index + 1];
        let lead = (p1.x - p0.x) * CONTROL_FRACTION * self.smoothing;
        CubicSegment {
            p0,
            c1: Vec2::new(p0.x + lead, p0.y),
            c2: Vec2::new(p1.x - lead, p1.y),
            p1,
        }
    }

    /// Locate the span containing `x` by linear scan over point intervals
    fn segment_index_at(&self, x: f32) -> Option<usize> {
        (0..self.segment_count()).find(|&i| self.points[i].x <= x && x <= self.points[i + 1].x)
    }

    /// Y of the cable at `x` (px). Outside the bleed range the nearest end's
    /// Y is returned, so lookups never fail.
    pub fn y_at(&self, x: f32) -> f32 {
        match self.segment_index_at(x) {
            Some(index) => {
                let seg = self.segment(index);
                seg.point(seg.t_for_x(x)).y
            }
            None if x < self.points[0].x => self.points[0].y,
            None => self.points[self.points.len() - 1].y,
        }
    }

    /// Point on the cable and its tangent at `x`, or `None` outside the
    /// bleed range (callers decide the fallback).
    pub fn point_and_tangent_at(&self, x: f32) -> Option<(Vec2, Vec2)> {
        let index = self.segment_index_at(x)?;
        let seg = self.segment(index);
        let t = seg.t_for_x(x);
        Some((seg.point(t), seg.derivative(t)))
    }

    /// Emit the SVG path string: `M` at the left bleed point, then one `C`
    /// arriving at each on-curve point. Identical inputs yield identical
    /// bytes.
    pub fn to_path_d(&self) -> String {
        let start = self.points[0];
        let mut d = format!("M {} {}", start.x, start.y);
        for i in 0..self.segment_count() {
            let seg = self.segment(i);
            d.push_str(&format!(
                " C {} {} {} {} {} {}",
                seg.c1.x, seg.c1.y, seg.c2.x, seg.c2.y, seg.p1.x, seg.p1.y
            ));
        }
        d
    }
}

/// Fit the twisted pair through the anchors.
///
/// One pass, fixed draw order (sag magnitude, then one ripple per cable,
/// per anchor), so the result is reproducible for a given RNG state. The
/// two cables share each anchor's sag magnitude but alternate on opposite
/// sides, making them swap over between anchors.
pub fn fit_pair(
    anchors: &[AttachmentPoint],
    width: f32,
    params: &CurveParams,
    rng: &mut SeededRng,
) -> (FittedCurve, FittedCurve) {
    let smoothing = params.smoothing.clamp(0.0, 1.25);
    let asymmetry = params.asymmetry.clamp(0.0, 1.0);
    let ripple_span = params.complexity.clamp(0.0, 1.0) * 0.5 * params.amplitude.span();

    let mut points1 = Vec::with_capacity(anchors.len());
    let mut points2 = Vec::with_capacity(anchors.len());

    for (i, anchor) in anchors.iter().enumerate() {
        let x = pct_to_px(anchor.x, width);
        let magnitude = rng.range32(params.amplitude.min, params.amplitude.max);
        let ripple1 = rng.range32(-ripple_span, ripple_span);
        let ripple2 = rng.range32(-ripple_span, ripple_span);

        let alternation = if i % 2 == 0 { 1.0 } else { -1.0 };
        let dir1 = (1.0 - asymmetry) + asymmetry * alternation;
        let dir2 = (1.0 - asymmetry) - asymmetry * alternation;

        points1.push(Vec2::new(x, params.baseline + magnitude * dir1 + ripple1));
        points2.push(Vec2::new(x, params.baseline + magnitude * dir2 + ripple2));
    }

    (
        FittedCurve::with_extensions(points1, width, params.baseline, smoothing),
        FittedCurve::with_extensions(points2, width, params.baseline, smoothing),
    )
}
