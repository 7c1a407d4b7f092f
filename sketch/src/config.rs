use std::str::FromStr;

use serde_derive::Deserialize;

use crate::animation::Projection;
use crate::{Colour, DrawingMode, ParseError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse demo config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DemoKind {
    Letters,
    Sketchpad,
    SpinningCube,
    Chest,
    LitCube,
    TexturedShape,
    TextureSwap,
}

impl DemoKind {
    pub const ALL: [DemoKind; 7] = [
        Self::Letters,
        Self::Sketchpad,
        Self::SpinningCube,
        Self::Chest,
        Self::LitCube,
        Self::TexturedShape,
        Self::TextureSwap,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Letters => "letters",
            Self::Sketchpad => "sketchpad",
            Self::SpinningCube => "spinning_cube",
            Self::Chest => "chest",
            Self::LitCube => "lit_cube",
            Self::TexturedShape => "textured_shape",
            Self::TextureSwap => "texture_swap",
        }
    }

    /// Images loaded when the config doesn't name any.
    pub fn default_textures(&self) -> &'static [&'static str] {
        match self {
            Self::TexturedShape => &["texture.png"],
            Self::TextureSwap => &["texture1r.png", "texture2r.png"],
            _ => &[],
        }
    }
}

impl FromStr for DemoKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s.trim())
            .ok_or_else(|| ParseError::new("demo", s))
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SketchConfig {
    pub mode: DrawingMode,
    pub colour: Colour,
    pub background: Colour,
    pub point_size: f32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        SketchConfig {
            mode: DrawingMode::Point,
            colour: Colour::RED,
            background: Colour::TRANSPARENT,
            point_size: 10.0,
        }
    }
}

fn default_canvas() -> String {
    "myCanvas".to_string()
}

fn default_log_level() -> log::LevelFilter {
    log::LevelFilter::Info
}

/// Settings handed over by the page hosting a demo.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Config {
    pub demo: DemoKind,

    // Id of the canvas element to draw on.
    #[serde(default = "default_canvas")]
    pub canvas: String,

    #[serde(default = "default_log_level")]
    pub log_level: log::LevelFilter,

    #[serde(default)]
    pub textures: Vec<String>,

    // Starting projection of the spinning cube.
    #[serde(default)]
    pub projection: Projection,

    #[serde(default)]
    pub sketch: SketchConfig,
}

impl Config {
    pub fn new(demo: DemoKind) -> Self {
        Config {
            demo,
            canvas: default_canvas(),
            log_level: default_log_level(),
            textures: Vec::new(),
            projection: Projection::default(),
            sketch: SketchConfig::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn texture_urls(&self) -> Vec<String> {
        if self.textures.is_empty() {
            self.demo
                .default_textures()
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.textures.clone()
        }
    }
}
