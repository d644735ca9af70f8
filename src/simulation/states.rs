//! Core state types shared by the canvas effects.
//!
//! Defines the per-effect simulation entities:
//! - `GridPoint` using `NVec2` (flat spring lattices)
//! - `DepthPoint` using `NVec3` (gravity well, z is depth)
//! - `Star` / `Particle` / `Shockwave` / `Attractor` (black-hole game)
//!
//! All of them live inside the effect that owns them and are rebuilt on
//! resize; nothing here is shared between effects.

use nalgebra::{Vector2, Vector3};

use crate::simulation::canvas::Rgba;

pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

/// Anchored lattice point. `base` never changes after the lattice is built.
#[derive(Debug, Clone)]
pub struct GridPoint {
    pub base: NVec2, // anchor
    pub x: NVec2,    // position
    pub v: NVec2,    // velocity (last step's displacement for eased grids)
    pub active: bool, // updated this frame; false once asleep at the anchor
}

impl GridPoint {
    pub fn anchored(base: NVec2) -> Self {
        Self {
            base,
            x: base,
            v: NVec2::zeros(),
            active: false,
        }
    }

    /// Squared distance from the anchor
    pub fn displacement_sq(&self) -> f64 {
        (self.x - self.base).norm_squared()
    }
}

/// Lattice point with a depth axis
#[derive(Debug, Clone)]
pub struct DepthPoint {
    pub base: NVec3, // anchor, z = 0
    pub x: NVec3,    // position, z is depth into the screen
    pub v: NVec3,    // velocity
}

impl DepthPoint {
    pub fn anchored(base: NVec2) -> Self {
        let base = NVec3::new(base.x, base.y, 0.0);
        Self {
            base,
            x: base,
            v: NVec3::zeros(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Star {
    pub x: NVec2,
    pub v: NVec2,
    pub size: f64,
    pub base_size: f64,
    pub alpha: f64,
    pub active: bool,   // false once swallowed, never reset within a round
    pub spawning: bool, // born from an explosion and still inside the grace ring
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec2,
    pub v: NVec2,
    pub life: f64, // 1.0 at birth, removed at <= 0
    pub size: f64,
    pub color: Rgba,
}

#[derive(Debug, Clone)]
pub struct Shockwave {
    pub center: NVec2,
    pub radius: f64,
    pub max_radius: f64,
    pub opacity: f64,
}

/// The pointer-driven "black hole"
#[derive(Debug, Clone)]
pub struct Attractor {
    pub x: NVec2,
    pub radius: f64, // eased toward the progress target every frame
    pub pulse: f64,  // capture kick, decays geometrically
}
