//! Tuning parameters for the canvas effects
//!
//! One struct per effect holds its constants:
//! - lattice spacing and interaction radii,
//! - spring, damping and easing factors,
//! - particle counts and lifetimes,
//! - per-fidelity values (`Tiered`) picked through `Fidelity`
//!
//! Every struct deserializes with `#[serde(default)]`, so a scenario file
//! only lists the values it overrides.

use serde::Deserialize;

/// Viewport width below which effects run at reduced fidelity
pub const REDUCED_FIDELITY_BELOW: f64 = 768.0;

/// Device class derived once from the viewport width and handed to each effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fidelity {
    Reduced, // narrow / touch viewports: fewer points, coarser lattices
    Full,
}

impl Fidelity {
    pub fn from_width(width: f64) -> Self {
        if width < REDUCED_FIDELITY_BELOW {
            Fidelity::Reduced
        } else {
            Fidelity::Full
        }
    }
}

/// A value with one setting per fidelity tier
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Tiered<T> {
    pub full: T,
    pub reduced: T,
}

impl<T: Copy> Tiered<T> {
    pub const fn new(full: T, reduced: T) -> Self {
        Self { full, reduced }
    }

    pub fn pick(&self, fidelity: Fidelity) -> T {
        match fidelity {
            Fidelity::Full => self.full,
            Fidelity::Reduced => self.reduced,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct InteractiveGridParams {
    pub gap: Tiered<f64>,        // lattice spacing in px
    pub radius: f64,             // pointer interaction radius
    pub repulsion: f64,          // displacement at the pointer itself
    pub ease: f64,               // fraction of the remaining distance covered per frame
    pub sleep_threshold_sq: f64, // squared displacement below which an out-of-range point sleeps
    pub marker_size: f64,        // side of the square drawn at each point
    pub resize_debounce_ms: f64,
}

impl Default for InteractiveGridParams {
    fn default() -> Self {
        Self {
            gap: Tiered::new(80.0, 100.0),
            radius: 300.0,
            repulsion: 60.0,
            ease: 0.1,
            sleep_threshold_sq: 0.5,
            marker_size: 1.5,
            resize_debounce_ms: 100.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GravityWellParams {
    pub spacing: f64,
    pub margin_cells: usize, // extra cells laid out past every edge
    pub radius: f64,         // pointer influence radius
    pub max_depth: f64,
    pub pull: f64,           // x/y pinch toward the pointer
    pub elasticity: f64,
    pub damping: f64,
    pub fov: f64,            // perspective distance
    pub cull_margin: f64,
    pub resize_debounce_ms: f64,
}

impl Default for GravityWellParams {
    fn default() -> Self {
        Self {
            spacing: 30.0,
            margin_cells: 4,
            radius: 400.0,
            max_depth: 250.0,
            pull: 0.6,
            elasticity: 0.3,
            damping: 0.85,
            fov: 800.0,
            cull_margin: 100.0,
            resize_debounce_ms: 100.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BlackHoleParams {
    // attractor
    pub initial_radius: f64,
    pub max_radius: f64,
    pub radius_easing: f64,
    pub pulse_decay: f64,
    pub capture_pulse: f64,
    pub explosion_pulse: f64,

    // stars
    pub initial_stars: Tiered<usize>,
    pub max_stars: Tiered<usize>,
    pub growth_factor: f64,
    pub gravity_radius: Tiered<f64>,
    pub acceleration: f64,
    pub star_damping: f64,
    pub bounce: f64,          // velocity factor applied when a star hits the padding
    pub padding_pct: f64,
    pub spawn_grace: f64,     // distance past the attractor rim that ends spawning
    pub respawn_speed: (f64, f64),
    pub idle_timeout_ms: f64,

    // background mesh
    pub grid_spacing: Tiered<f64>,
    pub grid_spring: f64,
    pub grid_friction: f64,
    pub influence_factor: f64, // mesh influence radius = factor * attractor radius
    pub mesh_pull: f64,
    pub wave_width: f64,
    pub wave_push: f64,

    // debris and shockwaves
    pub debris_count: Tiered<usize>,
    pub debris_speed: (f64, f64),
    pub debris_damping: f64,
    pub debris_decay: f64,
    pub shockwave_start_radius: f64,
    pub shockwave_reach: f64,  // max radius = reach * max(width, height)
    pub shockwave_easing: f64,
    pub shockwave_min_growth: f64,
    pub shockwave_decay: f64,

    pub resize_debounce_ms: f64,
}

impl Default for BlackHoleParams {
    fn default() -> Self {
        Self {
            initial_radius: 20.0,
            max_radius: 100.0,
            radius_easing: 0.1,
            pulse_decay: 0.85,
            capture_pulse: 5.0,
            explosion_pulse: 40.0,

            initial_stars: Tiered::new(80, 40),
            max_stars: Tiered::new(120, 50),
            growth_factor: 1.1,
            gravity_radius: Tiered::new(300.0, 120.0),
            acceleration: 0.8,
            star_damping: 0.94,
            bounce: -0.5,
            padding_pct: 0.05,
            spawn_grace: 15.0,
            respawn_speed: (10.0, 40.0),
            idle_timeout_ms: 1000.0,

            grid_spacing: Tiered::new(60.0, 80.0),
            grid_spring: 0.1,
            grid_friction: 0.85,
            influence_factor: 6.0,
            mesh_pull: 2.5,
            wave_width: 60.0,
            wave_push: 10.0,

            debris_count: Tiered::new(60, 30),
            debris_speed: (5.0, 25.0),
            debris_damping: 0.92,
            debris_decay: 0.02,
            shockwave_start_radius: 10.0,
            shockwave_reach: 1.2,
            shockwave_easing: 0.08,
            shockwave_min_growth: 5.0,
            shockwave_decay: 0.02,

            resize_debounce_ms: 200.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DotMorphParams {
    pub phrase_end: f64,     // progress at which the phrase shapes are done
    pub phrase_count: usize,
    pub final_end: f64,      // progress at which the terminal shape has settled
    pub hold: f64,           // local progress kept frozen on the current shape
    pub render_scale: Tiered<f64>,
    pub time_step: f64,
    pub dot_radius: f64,
    pub dot_pulse: f64,
    pub arc_min_distance: f64,
    pub arc_factor: f64,
    pub scatter: f64,
    pub float_amplitude: f64,
    pub resize_debounce_ms: f64,
}

impl Default for DotMorphParams {
    fn default() -> Self {
        Self {
            phrase_end: 0.75,
            phrase_count: 7,
            final_end: 0.9,
            hold: 0.55,
            render_scale: Tiered::new(1.9, 1.3),
            time_step: 0.02,
            dot_radius: 2.2,
            dot_pulse: 0.2,
            arc_min_distance: 10.0,
            arc_factor: 0.2,
            scatter: 3.0,
            float_amplitude: 2.0,
            resize_debounce_ms: 0.0,
        }
    }
}
