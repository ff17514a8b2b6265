//! Anchor and attachment-point layout
//!
//! Decides how many cards share a row at the current viewport width and
//! where along the row (in percent) each card and decorative anchor sits.
//! The curve fitter consumes these anchors verbatim; layout itself never
//! touches the RNG, so resizing only reflows positions, not the jitter.

use serde::{Deserialize, Serialize};

use crate::consts::{DECOR_EDGE_PCT, MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};

/// Viewport width classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    /// Classify a viewport width in pixels
    pub fn from_width(viewport_width: f32) -> Self {
        if viewport_width < MOBILE_MAX_WIDTH {
            Breakpoint::Mobile
        } else if viewport_width < TABLET_MAX_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Maximum cards hanging from one cable row
    pub fn max_cards_per_row(&self) -> usize {
        match self {
            Breakpoint::Mobile => 2,
            Breakpoint::Tablet => 3,
            Breakpoint::Desktop => 4,
        }
    }

    /// Horizontal margin kept free of cards at each row edge (percent)
    pub fn edge_margin_pct(&self) -> f32 {
        match self {
            Breakpoint::Mobile => 8.0,
            Breakpoint::Tablet => 6.0,
            Breakpoint::Desktop => 5.0,
        }
    }
}

/// What hangs at an attachment point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorKind {
    /// A member card; `card_index` addresses the flat item list
    Card { card_index: usize },
    /// A structural point that shapes the cable without a card
    Decorative,
}

/// One horizontal position where a card or structural point attaches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttachmentPoint {
    /// Horizontal position as a percentage of the container (0-100)
    pub x: f32,
    pub kind: AnchorKind,
}

impl AttachmentPoint {
    pub fn card(x: f32, card_index: usize) -> Self {
        Self {
            x,
            kind: AnchorKind::Card { card_index },
        }
    }

    pub fn decorative(x: f32) -> Self {
        Self {
            x,
            kind: AnchorKind::Decorative,
        }
    }

    /// Index into the item list, if a card hangs here
    pub fn card_index(&self) -> Option<usize> {
        match self.kind {
            AnchorKind::Card { card_index } => Some(card_index),
            AnchorKind::Decorative => None,
        }
    }
}

/// Anchors for a single cable row, ordered by ascending X
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowLayout {
    pub anchors: Vec<AttachmentPoint>,
}

impl RowLayout {
    /// Number of cards hanging from this row
    pub fn card_count(&self) -> usize {
        self.anchors
            .iter()
            .filter(|a| a.card_index().is_some())
            .count()
    }
}

/// Complete anchor layout for an item list at one viewport width
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarlandLayout {
    pub breakpoint: Breakpoint,
    pub cards_per_row: usize,
    pub total_rows: usize,
    pub rows: Vec<RowLayout>,
}

/// Compute the anchor layout for `item_count` cards at `viewport_width`.
///
/// Items are chunked row-major into `cards_per_row`-sized rows. Each row
/// gets a decorative anchor near both edges plus one card anchor at the
/// center of each equal-width column between the edge margins; a short last
/// row centers its own columns. An empty item list still yields one row of
/// decorative anchors so the page keeps its cable.
pub fn compute_layout(item_count: usize, viewport_width: f32) -> GarlandLayout {
    let breakpoint = Breakpoint::from_width(viewport_width);
    let cards_per_row = breakpoint.max_cards_per_row().min(item_count.max(1));
    let total_rows = item_count.div_ceil(cards_per_row).max(1);

    let rows = (0..total_rows)
        .map(|row| {
            let first_card = row * cards_per_row;
            let count = cards_per_row.min(item_count - first_card);
            row_anchors(first_card, count, breakpoint)
        })
        .collect();

    GarlandLayout {
        breakpoint,
        cards_per_row,
        total_rows,
        rows,
    }
}

/// Build one row's anchors: edge decoratives bracketing centered card columns
fn row_anchors(first_card: usize, count: usize, breakpoint: Breakpoint) -> RowLayout {
    let margin = breakpoint.edge_margin_pct();
    let usable = 100.0 - 2.0 * margin;

    let mut anchors = Vec::with_capacity(count + 2);
    anchors.push(AttachmentPoint::decorative(DECOR_EDGE_PCT));
    for column in 0..count {
        let x = margin + (column as f32 + 0.5) * usable / count as f32;
        anchors.push(AttachmentPoint::card(x, first_card + column));
    }
    anchors.push(AttachmentPoint::decorative(100.0 - DECOR_EDGE_PCT));

    RowLayout { anchors }
}
