//! Deterministic garland generation module
//!
//! Everything that decides where the cable hangs lives here. This module
//! must be pure and deterministic:
//! - Seeded RNG only, one instance per generation call, threaded explicitly
//! - Stable ordering (anchors and samples ascend in X)
//! - Wholesale recomputation on any input change, no incremental state
//! - No rendering, I/O, or platform dependencies
//!
//! The same `(seed, width, item count, parameters)` tuple must reproduce
//! byte-identical path strings no matter where or how often it is evaluated.

pub mod curve;
pub mod layout;
pub mod rng;
pub mod sample;
pub mod system;

pub use curve::{AmplitudeRange, CubicSegment, CurveParams, FittedCurve, fit_pair};
pub use layout::{
    AnchorKind, AttachmentPoint, Breakpoint, GarlandLayout, RowLayout, compute_layout,
};
pub use rng::{SeededRng, hash_text};
pub use sample::{CrossingPoint, LightPoint, crossing_points, sample_lights};
pub use system::{CardPosition, Garland, GarlandRow, GarlandSystem};
