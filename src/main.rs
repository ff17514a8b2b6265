//! Garland demo entry point
//!
//! Generates a garland from command line arguments and writes a standalone
//! SVG document (or the raw garland data as JSON) to stdout.

use std::path::Path;
use std::process;

use garland_engine::config::{GarlandConfig, StylePreset};
use garland_engine::svg::render_document;

fn print_usage() {
    println!("Usage: garland-engine [CARDS] [WIDTH] [SEED] [OPTIONS]");
    println!();
    println!("Arguments:");
    println!("  CARDS           number of cards to hang (default 6)");
    println!("  WIDTH           container width in px (default 1024)");
    println!("  SEED            seed text (default \"isepbands-christmas-2024\")");
    println!();
    println!("Options:");
    println!("  --preset NAME   apply a style preset (calm, classic, festive)");
    println!("  --config FILE   load a config JSON file before overrides");
    println!("  --json          print garland data as JSON instead of SVG");
    println!("  --help          show this help");
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut cards: usize = 6;
    let mut width: Option<f32> = None;
    let mut seed: Option<String> = None;
    let mut preset: Option<StylePreset> = None;
    let mut config_path: Option<String> = None;
    let mut json = false;

    let mut positional = 0;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return;
            }
            "--json" => json = true,
            "--preset" => match iter.next().and_then(|name| StylePreset::from_str(name)) {
                Some(p) => preset = Some(p),
                None => {
                    eprintln!("--preset expects one of: calm, classic, festive");
                    process::exit(1);
                }
            },
            "--config" => match iter.next() {
                Some(path) => config_path = Some(path.clone()),
                None => {
                    eprintln!("--config expects a file path");
                    process::exit(1);
                }
            },
            _ => {
                match positional {
                    0 => match arg.parse() {
                        Ok(n) => cards = n,
                        Err(_) => {
                            eprintln!("CARDS must be a non-negative integer, got {arg:?}");
                            process::exit(1);
                        }
                    },
                    1 => match arg.parse() {
                        Ok(w) => width = Some(w),
                        Err(_) => {
                            eprintln!("WIDTH must be a number, got {arg:?}");
                            process::exit(1);
                        }
                    },
                    2 => seed = Some(arg.clone()),
                    _ => {
                        eprintln!("Unexpected argument {arg:?}");
                        print_usage();
                        process::exit(1);
                    }
                }
                positional += 1;
            }
        }
    }

    let mut config = match &config_path {
        Some(path) => GarlandConfig::load(Path::new(path)),
        None => GarlandConfig::default(),
    };
    if let Some(preset) = preset {
        config.apply_preset(preset);
    }
    if let Some(width) = width {
        config.viewport_width = width;
    }
    if let Some(seed) = seed {
        config.seed = seed;
    }

    log::info!(
        "Generating garland: {} cards, {}px wide, seed {:?}, preset {}",
        cards,
        config.viewport_width,
        config.seed,
        config.preset.as_str()
    );

    let garland = config.generate(cards);
    log::info!(
        "Generated {} rows, {} cards hanging",
        garland.rows.len(),
        garland.card_count()
    );

    if json {
        match serde_json::to_string_pretty(&garland) {
            Ok(out) => println!("{out}"),
            Err(err) => {
                eprintln!("Could not serialize garland: {err}");
                process::exit(1);
            }
        }
    } else {
        print!("{}", render_document(&garland));
    }
}
