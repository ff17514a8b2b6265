//! Garland Engine - deterministic twisted-cable garland generation
//!
//! Core modules:
//! - `garland`: deterministic generation (seeded RNG, anchor layout, curve
//!   fitting, light sampling, card lookup)
//! - `config`: curve parameters, style presets, JSON persistence
//! - `svg`: standalone SVG document assembly for the demo binary
//!
//! Given a seed string, a viewport width and an item count, the engine
//! produces two parallel cubic-Bezier path strings (the twisted cable),
//! light positions with tangent rotation, crossing points, and the Y offset
//! each card hangs at. Identical inputs always produce identical output,
//! down to the path string bytes.

pub mod config;
pub mod garland;
pub mod svg;

pub use config::{GarlandConfig, StylePreset};
pub use garland::{Garland, GarlandSystem, SeededRng};

/// Engine configuration constants
pub mod consts {
    /// How far the cable runs off-screen past each container edge (px)
    pub const EDGE_BLEED: f32 = 10.0;

    /// Viewport widths below this are the mobile breakpoint (px)
    pub const MOBILE_MAX_WIDTH: f32 = 640.0;
    /// Viewport widths below this (and at least mobile) are the tablet breakpoint (px)
    pub const TABLET_MAX_WIDTH: f32 = 1024.0;

    /// Horizontal position of the decorative edge anchors (percent)
    pub const DECOR_EDGE_PCT: f32 = 2.0;

    /// Fraction of the inter-anchor distance at which control points sit
    /// (40%/60% at `smoothing = 1`)
    pub const CONTROL_FRACTION: f32 = 0.4;

    /// Default distance between sampled lights (px)
    pub const DEFAULT_LIGHT_SPACING: f32 = 48.0;

    /// Rotation span for lights that fall outside the fitted curve (degrees)
    pub const BOUNDARY_ROTATION_DEGREES: f32 = 12.0;

    /// Vertical distance between garland rows in the demo SVG (px)
    pub const DEMO_ROW_HEIGHT: f32 = 140.0;
}

/// Convert a horizontal percentage (0-100) to pixels in a container
#[inline]
pub fn pct_to_px(pct: f32, width: f32) -> f32 {
    pct / 100.0 * width
}
