//! Startup configuration of the ball demo, read from a TOML file.

use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use serde::Deserialize;

use pb::prelude::*;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Width and height of the canvas in pixels.
    pub canvas: u32,
    pub radius: f64,
    /// Ball color as `0xRRGGBB`.
    pub ball_color: u32,
    /// Specular exponent.
    pub smoothness: i32,
    pub light: LightSettings,
    pub eye: EyeSettings,
    pub drift: DriftSettings,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LightSettings {
    /// Start position in grid coordinates.
    pub position: [f64; 3],
    pub color: u32,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EyeSettings {
    pub position: [f64; 3],
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DriftSettings {
    /// Light displacement per tick in grid coordinates.
    pub step: [f64; 3],
    pub interval_us: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: 800,
            radius: 300.0,
            ball_color: 0x660099,
            smoothness: 20,
            light: LightSettings::default(),
            eye: EyeSettings::default(),
            drift: DriftSettings::default(),
        }
    }
}

impl Default for LightSettings {
    fn default() -> Self {
        Self { position: [0.0, 0.0, 1000.0], color: 0xFC92A8 }
    }
}

impl Default for EyeSettings {
    fn default() -> Self {
        Self { position: [400.0, 400.0, 600.0] }
    }
}

impl Default for DriftSettings {
    fn default() -> Self {
        Self { step: [15.0, 15.0, 0.0], interval_us: 5 }
    }
}

impl Config {
    /// Parses a configuration from TOML text. Missing keys get defaults.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("parsing {}", path.display()))
    }

    /// Returns the base color of the ball.
    pub fn ball_color(&self) -> Color3 {
        Color3::from_rgb_u32(self.ball_color)
    }

    /// Creates the scene described by `self`, with a black framebuffer.
    pub fn scene(&self) -> Scene {
        Scene::new(
            self.canvas,
            CoordSys::centered(self.canvas),
            self.light.position.into(),
            Color3::from_rgb_u32(self.light.color),
            self.eye.position.into(),
        )
        .with_smoothness(self.smoothness)
    }

    pub fn drift(&self) -> Drift {
        Drift::new(
            self.drift.step.into(),
            Duration::from_micros(self.drift.interval_us),
        )
    }
}
