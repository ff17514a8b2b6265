//! Garland configuration
//!
//! Carries everything a page needs to reproduce its garland: the seed text,
//! viewport width, curve parameters, and light spacing. Optionally persisted
//! as JSON next to the caller.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_LIGHT_SPACING;
use crate::garland::{AmplitudeRange, CurveParams, Garland};

/// Style preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StylePreset {
    Calm,
    #[default]
    Classic,
    Festive,
}

impl StylePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            StylePreset::Calm => "Calm",
            StylePreset::Classic => "Classic",
            StylePreset::Festive => "Festive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "calm" => Some(StylePreset::Calm),
            "classic" => Some(StylePreset::Classic),
            "festive" => Some(StylePreset::Festive),
            _ => None,
        }
    }

    /// Sag jitter bounds for this preset (px)
    pub fn amplitude(&self) -> AmplitudeRange {
        match self {
            StylePreset::Calm => AmplitudeRange::new(12.0, 24.0),
            StylePreset::Classic => AmplitudeRange::new(18.0, 42.0),
            StylePreset::Festive => AmplitudeRange::new(24.0, 56.0),
        }
    }

    /// Secondary ripple strength
    pub fn complexity(&self) -> f32 {
        match self {
            StylePreset::Calm => 0.15,
            StylePreset::Classic => 0.35,
            StylePreset::Festive => 0.6,
        }
    }

    /// Up/down alternation strength
    pub fn asymmetry(&self) -> f32 {
        match self {
            StylePreset::Calm => 0.25,
            StylePreset::Classic => 0.5,
            StylePreset::Festive => 0.7,
        }
    }

    /// Control point reach
    pub fn smoothing(&self) -> f32 {
        match self {
            StylePreset::Calm => 1.1,
            StylePreset::Classic => 1.0,
            StylePreset::Festive => 0.85,
        }
    }

    /// Distance between lights (px)
    pub fn light_spacing(&self) -> f32 {
        match self {
            StylePreset::Calm => 64.0,
            StylePreset::Classic => DEFAULT_LIGHT_SPACING,
            StylePreset::Festive => 36.0,
        }
    }
}

/// Garland generation inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarlandConfig {
    /// Style preset the shape parameters were derived from
    pub preset: StylePreset,

    // === Identity ===
    /// Seed text; the page's identity, hashed into the RNG seed
    pub seed: String,

    // === Geometry ===
    /// Container width in px, supplied by the caller (never measured here)
    pub viewport_width: f32,
    /// Curve shape parameters
    pub params: CurveParams,
    /// Distance between sampled lights (px)
    pub light_spacing: f32,
}

impl Default for GarlandConfig {
    fn default() -> Self {
        Self {
            preset: StylePreset::Classic,
            seed: "isepbands-christmas-2024".to_string(),
            viewport_width: 1024.0,
            params: CurveParams::default(),
            light_spacing: DEFAULT_LIGHT_SPACING,
        }
    }
}

impl GarlandConfig {
    /// Create a config from a style preset (applies preset parameters)
    pub fn from_preset(preset: StylePreset) -> Self {
        let mut config = Self::default();
        config.apply_preset(preset);
        config
    }

    /// Apply a style preset (updates the preset-derived parameters)
    pub fn apply_preset(&mut self, preset: StylePreset) {
        self.preset = preset;
        self.params.amplitude = preset.amplitude();
        self.params.complexity = preset.complexity();
        self.params.asymmetry = preset.asymmetry();
        self.params.smoothing = preset.smoothing();
        self.light_spacing = preset.light_spacing();
    }

    /// Generate the garland this config describes
    pub fn generate(&self, item_count: usize) -> Garland {
        Garland::generate(
            &self.seed,
            item_count,
            self.viewport_width,
            &self.params,
            self.light_spacing,
        )
    }

    /// Default config file name
    pub const DEFAULT_PATH: &'static str = "garland.json";

    /// Load a config from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded garland config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("Ignoring malformed config {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save the config as pretty JSON
    pub fn save(&self, path: &Path) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            match fs::write(path, json) {
                Ok(()) => log::info!("Config saved to {}", path.display()),
                Err(err) => log::warn!("Could not save config to {}: {}", path.display(), err),
            }
        }
    }
}
