//! Configuration types for loading effect scenarios from YAML.
//!
//! A scenario picks one effect and describes the stage it runs on:
//!
//! - [`EffectKind`]       – which canvas effect to mount
//! - [`ViewportConfig`]   – initial container size in pixels
//! - [`ScrollConfig`]     – scroll section driving the dot morph
//! - [`CursorConfig`]     – custom cursor and its hover targets
//! - per-effect parameter overrides (see `simulation::params`)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! effect: "black_hole"          # interactive_grid | gravity_well | black_hole | dot_morph
//! viewport:
//!   width: 1280
//!   height: 720
//! seed: 42                      # star/debris randomness
//!
//! cursor:
//!   enabled: true
//!   targets:
//!     - bounds: [40, 40, 240, 135]    # left, top, width, height
//!       preview: "img/work-01.jpg"
//!     - bounds: [320, 40, 240, 135]   # hover without preview
//!
//! black_hole:                   # only the overridden values
//!   idle_timeout_ms: 1500
//! ```
//!
//! The scenario builder maps this into runtime effects, hosts and cursor
//! state (`simulation::scenario`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::simulation::params::{BlackHoleParams, DotMorphParams, GravityWellParams, InteractiveGridParams};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("viewport must be positive, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("cursor target {index} has a non-positive size")]
    InvalidTarget { index: usize },
}

/// Which effect the scenario mounts
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    #[serde(rename = "interactive_grid")] // pointer-repelled lattice
    InteractiveGrid,

    #[serde(rename = "gravity_well")] // 3D funnel lattice
    GravityWell,

    #[serde(rename = "black_hole")] // particle game
    BlackHole,

    #[serde(rename = "dot_morph")] // scroll-driven shape morph
    DotMorph,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
}

/// Pinned scroll section feeding the morph progress
#[derive(Deserialize, Debug, Clone)]
pub struct ScrollConfig {
    pub content_height: Option<f64>, // defaults to seven viewport heights
    #[serde(default = "default_wheel_step")]
    pub wheel_step: f64, // pixels per wheel line
}

fn default_wheel_step() -> f64 {
    60.0
}

#[derive(Deserialize, Debug, Clone)]
pub struct CursorTargetConfig {
    pub bounds: [f64; 4], // left, top, width, height
    #[serde(default = "default_true")]
    pub hover: bool,
    pub preview: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CursorConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub targets: Vec<CursorTargetConfig>,
}

fn default_seed() -> u64 {
    42
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub effect: EffectKind,
    pub viewport: ViewportConfig,
    #[serde(default = "default_seed")]
    pub seed: u64,
    pub scroll: Option<ScrollConfig>,
    #[serde(default)]
    pub cursor: CursorConfig,

    #[serde(default)]
    pub interactive_grid: InteractiveGridParams,
    #[serde(default)]
    pub gravity_well: GravityWellParams,
    #[serde(default)]
    pub black_hole: BlackHoleParams,
    #[serde(default)]
    pub dot_morph: DotMorphParams,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ViewportConfig { width, height } = self.viewport;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        for (index, target) in self.cursor.targets.iter().enumerate() {
            if !(target.bounds[2] > 0.0 && target.bounds[3] > 0.0) {
                return Err(ConfigError::InvalidTarget { index });
            }
        }
        Ok(())
    }

    /// Scrollable content height for the morph section
    pub fn content_height(&self) -> f64 {
        self.scroll
            .as_ref()
            .and_then(|s| s.content_height)
            .unwrap_or(self.viewport.height * 7.0)
    }

    pub fn wheel_step(&self) -> f64 {
        self.scroll.as_ref().map_or_else(default_wheel_step, |s| s.wheel_step)
    }
}
