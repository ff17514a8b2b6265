//! Standalone SVG document assembly
//!
//! Turns generated garland data into a complete `<svg>` document for the
//! demo binary and for eyeballing output. The web pages themselves consume
//! the raw path strings and positions; this writer exists for inspection.

use std::fmt::Write;

use crate::consts::DEMO_ROW_HEIGHT;
use crate::garland::{CardPosition, Garland, GarlandRow, LightPoint};

const CARD_WIDTH: f32 = 96.0;
const CARD_HEIGHT: f32 = 64.0;
const LIGHT_STEM: f32 = 6.0;
const LIGHT_RADIUS: f32 = 3.5;
const BOTTOM_PADDING: f32 = 80.0;

/// Render the whole garland as a standalone SVG document.
///
/// Output is deterministic: rows, lights, and cards are written in their
/// generated order and numbers use `f32` `Display` formatting throughout.
pub fn render_document(garland: &Garland) -> String {
    let width = garland
        .rows
        .first()
        .map(|row| row.system.width)
        .unwrap_or(0.0);
    let height = garland.rows.len() as f32 * DEMO_ROW_HEIGHT + BOTTOM_PADDING;

    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
        width, height
    );
    out.push_str(
        r#"<style>
.cable { fill: none; stroke-linecap: round; }
.cable-primary { stroke: #14532d; stroke-width: 2.5; }
.cable-secondary { stroke: #166534; stroke-width: 2; }
.crossing { fill: #14532d; }
.light line { stroke: #713f12; stroke-width: 1; }
.light circle { fill: #fbbf24; stroke: #b45309; stroke-width: 0.5; }
.card { fill: #fffbeb; stroke: #78350f; stroke-width: 1; }
</style>
"#,
    );

    for row in &garland.rows {
        render_row(&mut out, row, row.index as f32 * DEMO_ROW_HEIGHT);
    }

    out.push_str("</svg>\n");
    log::debug!(
        "Rendered SVG document: {} rows, {} lights, {} bytes",
        garland.rows.len(),
        garland
            .rows
            .iter()
            .map(|row| row.system.light_positions.len())
            .sum::<usize>(),
        out.len()
    );
    out
}

fn render_row(out: &mut String, row: &GarlandRow, offset_y: f32) {
    let _ = writeln!(out, r#"<g transform="translate(0 {})">"#, offset_y);

    let _ = writeln!(
        out,
        r#"<path class="cable cable-primary" d="{}" />"#,
        row.system.curve1
    );
    let _ = writeln!(
        out,
        r#"<path class="cable cable-secondary" d="{}" />"#,
        row.system.curve2
    );

    out.push_str(r#"<g class="crossings">"#);
    for crossing in &row.system.crossing_points {
        let _ = write!(
            out,
            r#"<circle class="crossing" cx="{}" cy="{}" r="1.5" />"#,
            crossing.position.x, crossing.position.y
        );
    }
    out.push_str("</g>\n");

    out.push_str(r#"<g class="lights">"#);
    for light in &row.system.light_positions {
        render_light(out, light);
    }
    out.push_str("</g>\n");

    out.push_str(r#"<g class="cards">"#);
    for card in &row.cards {
        render_card(out, card, row.system.width);
    }
    out.push_str("</g>\n");

    out.push_str("</g>\n");
}

/// A bulb hanging under the cable, tilted with the local tangent
fn render_light(out: &mut String, light: &LightPoint) {
    let _ = write!(
        out,
        r#"<g class="light" transform="translate({} {}) rotate({})"><line y2="{}" /><circle cy="{}" r="{}" /></g>"#,
        light.position.x,
        light.position.y,
        light.rotation_degrees,
        LIGHT_STEM,
        LIGHT_STEM + LIGHT_RADIUS,
        LIGHT_RADIUS
    );
}

fn render_card(out: &mut String, card: &CardPosition, width: f32) {
    let x = crate::pct_to_px(card.x, width) - CARD_WIDTH / 2.0;
    let _ = write!(
        out,
        r#"<rect class="card" x="{}" y="{}" width="{}" height="{}" rx="6" />"#,
        x, card.y, CARD_WIDTH, CARD_HEIGHT
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GarlandConfig;

    #[test]
    fn test_document_shape() {
        let config = GarlandConfig::default();
        let garland = config.generate(6);
        let svg = render_document(&garland);

        assert!(svg.starts_with("<svg xmlns="));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains(&garland.rows[0].system.curve1));
        assert!(svg.contains(&garland.rows[0].system.curve2));
        let cards = svg.matches(r#"<rect class="card""#).count();
        assert_eq!(cards, garland.card_count());
        let lights = svg.matches(r#"<g class="light""#).count();
        let expected: usize = garland
            .rows
            .iter()
            .map(|row| row.system.light_positions.len())
            .sum();
        assert_eq!(lights, expected);
    }

    #[test]
    fn test_rows_are_offset_vertically() {
        let config = GarlandConfig {
            viewport_width: 1280.0,
            ..GarlandConfig::default()
        };
        let garland = config.generate(8);
        assert_eq!(garland.rows.len(), 2);

        let svg = render_document(&garland);
        assert!(svg.contains(r#"<g transform="translate(0 0)">"#));
        assert!(svg.contains(r#"<g transform="translate(0 140)">"#));
    }

    #[test]
    fn test_document_is_deterministic() {
        let config = GarlandConfig::default();
        let a = render_document(&config.generate(5));
        let b = render_document(&config.generate(5));
        assert_eq!(a, b);
    }
}
