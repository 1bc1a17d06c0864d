use bevy::prelude::*;
use serde::Deserialize;

use crate::attraction::AttractionOptions;
use crate::attraction::falloff::SMOOTHING;
use crate::attraction::record::{DEFAULT_RADIUS, DEFAULT_STRENGTH};

const MAGNET_JSON: &str = include_str!("../assets/magnet.json");

/// Tunables for the magnetic hover demo, embedded at build time
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MagnetConfig {
    /// Fallback strength/radius for opt-ins that don't set their own
    pub defaults: AttractionOptions,
    /// Blend factor for the custom cursor overlay
    pub cursor_smoothing: f32,
    /// Inset from the viewport edges when laying out targets
    pub padding: f32,
    pub targets: Vec<TargetSpec>,
}

/// One placeholder element in the demo scene
#[derive(Debug, Clone, Deserialize)]
pub struct TargetSpec {
    pub label: String,
    /// Horizontal placement (0.0 = left, 1.0 = right)
    pub h: f32,
    /// Vertical placement (0.0 = bottom, 1.0 = top)
    pub v: f32,
    /// Sphere radius in world units
    #[serde(default = "default_size")]
    pub size: f32,
    #[serde(default = "default_color")]
    pub color: [f32; 3],
    pub strength: Option<f32>,
    pub radius: Option<f32>,
}

fn default_size() -> f32 {
    0.35
}

fn default_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl Default for MagnetConfig {
    fn default() -> Self {
        Self {
            defaults: AttractionOptions::new(DEFAULT_STRENGTH, DEFAULT_RADIUS),
            cursor_smoothing: SMOOTHING,
            padding: 0.1,
            targets: Vec::new(),
        }
    }
}

impl MagnetConfig {
    /// Parse the embedded config, falling back to defaults on error
    pub fn load() -> Self {
        match Self::from_json(MAGNET_JSON) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load magnet config: {}", e);
                Self::default()
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid magnet config: {}", e))
    }

    /// Fill unset strength/radius from the configured defaults
    pub fn resolve(&self, strength: Option<f32>, radius: Option<f32>) -> AttractionOptions {
        AttractionOptions {
            strength: strength.or(self.defaults.strength),
            radius: radius.or(self.defaults.radius),
        }
    }
}
