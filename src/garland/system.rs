//! Garland assembly
//!
//! Ties the pieces together: one [`GarlandSystem`] per row holds the fitted
//! pair, the rendered path strings, sampled lights and crossings, and
//! answers card Y lookups. [`Garland`] wraps the whole page: layout plus one
//! system per row, each row reseeded from the page seed so rows differ but
//! reproduce.

use serde::{Deserialize, Serialize};

use super::curve::{AmplitudeRange, CurveParams, FittedCurve, fit_pair};
use super::layout::{AttachmentPoint, GarlandLayout, compute_layout};
use super::rng::SeededRng;
use super::sample::{CrossingPoint, LightPoint, crossing_points, sample_lights};
use crate::pct_to_px;

/// A card hanging from the cable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardPosition {
    /// Horizontal position (percent of container width)
    pub x: f32,
    /// Vertical position on the cable (px)
    pub y: f32,
    pub card_index: usize,
}

/// Everything derived for one row of garland.
///
/// Recomputed wholesale whenever seed, width, anchors, or parameters change;
/// nothing in here is updated incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarlandSystem {
    /// SVG path of the primary cable
    pub curve1: String,
    /// SVG path of the secondary cable
    pub curve2: String,
    /// Fitted primary cable, kept for Y lookups after generation
    pub primary: FittedCurve,
    pub secondary: FittedCurve,
    pub light_positions: Vec<LightPoint>,
    pub crossing_points: Vec<CrossingPoint>,
    pub amplitude: AmplitudeRange,
    /// Container width the system was generated for (px)
    pub width: f32,
}

impl GarlandSystem {
    /// Generate a row's garland from scratch.
    ///
    /// The RNG is created here and lives only for this call, so repeated
    /// generation with the same inputs yields byte-identical path strings
    /// and identical decoration sequences.
    pub fn generate(
        anchors: &[AttachmentPoint],
        width: f32,
        params: &CurveParams,
        light_spacing: f32,
        seed_text: &str,
    ) -> Self {
        let mut rng = SeededRng::from_text(seed_text);
        let (primary, secondary) = fit_pair(anchors, width, params, &mut rng);
        let light_positions = sample_lights(&primary, width, light_spacing, &mut rng);
        let crossing_points = crossing_points(&primary, &secondary);

        Self {
            curve1: primary.to_path_d(),
            curve2: secondary.to_path_d(),
            primary,
            secondary,
            light_positions,
            crossing_points,
            amplitude: params.amplitude,
            width,
        }
    }

    /// Y of the primary cable at a horizontal position given in percent.
    ///
    /// Same segment-locate-and-evaluate as the light sampler, minus the
    /// rotation. At an anchor's exact X this returns the exact Y the fitter
    /// placed there.
    pub fn y_at(&self, x_pct: f32) -> f32 {
        self.primary.y_at(pct_to_px(x_pct, self.width))
    }

    /// Resolve hanging positions for the card anchors among `anchors`
    pub fn card_positions(&self, anchors: &[AttachmentPoint]) -> Vec<CardPosition> {
        anchors
            .iter()
            .filter_map(|anchor| {
                anchor.card_index().map(|card_index| CardPosition {
                    x: anchor.x,
                    y: self.y_at(anchor.x),
                    card_index,
                })
            })
            .collect()
    }
}

/// One generated row: its anchors' system and resolved card positions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarlandRow {
    pub index: usize,
    pub system: GarlandSystem,
    pub cards: Vec<CardPosition>,
}

/// A full page of garland: the layout and one cable system per row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Garland {
    pub layout: GarlandLayout,
    pub rows: Vec<GarlandRow>,
}

impl Garland {
    /// Generate the whole page.
    ///
    /// Each row is seeded as `"{seed}-row-{index}"` so rows look different
    /// from each other while the page as a whole reproduces from one seed.
    pub fn generate(
        seed: &str,
        item_count: usize,
        viewport_width: f32,
        params: &CurveParams,
        light_spacing: f32,
    ) -> Self {
        let layout = compute_layout(item_count, viewport_width);
        let rows = layout
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let row_seed = format!("{seed}-row-{index}");
                let system = GarlandSystem::generate(
                    &row.anchors,
                    viewport_width,
                    params,
                    light_spacing,
                    &row_seed,
                );
                let cards = system.card_positions(&row.anchors);
                GarlandRow {
                    index,
                    system,
                    cards,
                }
            })
            .collect();

        Self { layout, rows }
    }

    /// Total cards across all rows
    pub fn card_count(&self) -> usize {
        self.rows.iter().map(|row| row.cards.len()).sum()
    }
}
