//! End-to-end properties of the public garland API: reproducibility,
//! boundary behavior, coverage, and the fixed seasonal scenario.

use garland_engine::config::{GarlandConfig, StylePreset};
use garland_engine::garland::{
    AttachmentPoint, CurveParams, Garland, GarlandSystem, SeededRng, compute_layout, fit_pair,
    sample_lights,
};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn even_anchors(count: usize) -> Vec<AttachmentPoint> {
    (0..count)
        .map(|i| AttachmentPoint::card((i as f32 + 0.5) * 100.0 / count as f32, i))
        .collect()
}

#[test]
fn christmas_2024_scenario() {
    let anchors = even_anchors(6);
    let system = GarlandSystem::generate(
        &anchors,
        1024.0,
        &CurveParams::default(),
        48.0,
        "isepbands-christmas-2024",
    );

    assert!(!system.curve1.is_empty());
    assert!(!system.curve2.is_empty());
    assert!(system.curve1.starts_with("M -10"), "was: {}", system.curve1);
    assert!(system.curve2.starts_with("M -10"), "was: {}", system.curve2);
    // One cubic into each of the 6 anchors plus the trailing run-out
    assert_eq!(system.curve1.matches(" C ").count(), 7);
    assert_eq!(system.curve2.matches(" C ").count(), 7);
}

#[test]
fn rng_distribution_sanity() {
    let mut rng = SeededRng::from_text("isepbands-christmas-2024");
    let mut sum = 0.0;
    for _ in 0..10_000 {
        let v = rng.next();
        assert!((0.0..1.0).contains(&v));
        sum += v;
    }
    let mean = sum / 10_000.0;
    assert!((mean - 0.5).abs() < 0.02, "mean was {mean}");
}

#[test]
fn whole_page_reproduces_byte_identically() {
    let config = GarlandConfig::default();
    let a = config.generate(9);
    let b = config.generate(9);

    let a_json = serde_json::to_string(&a).unwrap();
    let b_json = serde_json::to_string(&b).unwrap();
    assert_eq!(a_json, b_json);
}

#[test]
fn presets_shape_the_output() {
    let calm = GarlandConfig::from_preset(StylePreset::Calm).generate(4);
    let festive = GarlandConfig::from_preset(StylePreset::Festive).generate(4);

    assert_ne!(
        calm.rows[0].system.curve1,
        festive.rows[0].system.curve1
    );
    // Festive stringing packs lights tighter
    assert!(
        festive.rows[0].system.light_positions.len()
            > calm.rows[0].system.light_positions.len()
    );
}

proptest! {
    #![proptest_config(Config::with_cases(64))]

    #[test]
    fn curves_reproduce_for_any_input(
        seed in "[a-z0-9-]{1,24}",
        cards in 0_usize..24,
        width in 320.0_f32..2000.0,
    ) {
        let params = CurveParams::default();
        let a = Garland::generate(&seed, cards, width, &params, 48.0);
        let b = Garland::generate(&seed, cards, width, &params, 48.0);

        prop_assert_eq!(a.rows.len(), b.rows.len());
        for (row_a, row_b) in a.rows.iter().zip(&b.rows) {
            prop_assert_eq!(&row_a.system.curve1, &row_b.system.curve1);
            prop_assert_eq!(&row_a.system.curve2, &row_b.system.curve2);
            prop_assert_eq!(&row_a.system.light_positions, &row_b.system.light_positions);
            prop_assert_eq!(&row_a.cards, &row_b.cards);
        }
    }

    #[test]
    fn single_anchor_still_spans_the_container(
        width in 200.0_f32..3000.0,
        x in 0.0_f32..100.0,
    ) {
        let anchors = vec![AttachmentPoint::card(x, 0)];
        let mut rng = SeededRng::new(42);
        let (curve, _) = fit_pair(&anchors, width, &CurveParams::default(), &mut rng);

        let points = curve.points();
        prop_assert!(points[points.len() - 1].x - points[0].x >= width);
        prop_assert!(curve.to_path_d().starts_with("M -10"));
    }

    #[test]
    fn lights_cover_the_container(
        cards in 1_usize..12,
        width in 320.0_f32..2000.0,
        seed in "[a-z]{1,12}",
    ) {
        let layout = compute_layout(cards, width);
        let anchors = &layout.rows[0].anchors;
        let mut rng = SeededRng::from_text(&seed);
        let (curve, _) = fit_pair(anchors, width, &CurveParams::default(), &mut rng);
        let lights = sample_lights(&curve, width, 48.0, &mut rng);

        prop_assert!(!lights.is_empty());
        for pair in lights.windows(2) {
            prop_assert!(pair[0].position.x <= pair[1].position.x);
        }
        prop_assert!(lights[0].position.x.abs() <= 48.0);
        prop_assert!(lights[lights.len() - 1].position.x >= width - 2.0 * 48.0);
    }

    #[test]
    fn card_lookup_round_trips_exactly(
        cards in 1_usize..16,
        width in 320.0_f32..2000.0,
        seed in "[a-z0-9]{1,16}",
    ) {
        let layout = compute_layout(cards, width);
        let anchors = &layout.rows[0].anchors;
        let system = GarlandSystem::generate(anchors, width, &CurveParams::default(), 48.0, &seed);

        // Anchor i is on-curve point i + 1 (after the leading extension)
        let points = system.primary.points();
        for (i, anchor) in anchors.iter().enumerate() {
            prop_assert_eq!(system.y_at(anchor.x), points[i + 1].y);
        }
    }

    #[test]
    fn rng_stays_in_unit_interval(seed in any::<u64>()) {
        let mut rng = SeededRng::new(seed);
        for _ in 0..1_000 {
            let v = rng.next();
            prop_assert!((0.0..1.0).contains(&v));
        }
    }
}
