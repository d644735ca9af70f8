//! Black-hole particle game
//!
//! The pointer drives an attractor that swallows drifting stars. Every
//! capture grows the hole; swallowing the whole round explodes it into
//! debris and a shockwave, and the next (larger) generation of stars is
//! born from the blast. A spring mesh in the background is pulled toward
//! the hole and kicked by passing shockwaves.
//!
//! Frame order inside `step`:
//! 1. background mesh physics
//! 2. shockwave ageing
//! 3. stars (motion, bounce, attraction, capture)
//! 4. debris
//! 5. progress, then the explosion check
//! 6. attractor radius easing toward that progress, and pulse decay
//!
//! `render` then draws mesh, stars, debris, shockwave rings, the orb and
//! the idle hint arrow, in that order.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::simulation::canvas::{Canvas, Rgba, Stroke};
use crate::simulation::host::{Effect, Listener, PointerEvent, Viewport};
use crate::simulation::lattice::Lattice;
use crate::simulation::params::{BlackHoleParams, Fidelity};
use crate::simulation::states::{Attractor, GridPoint, NVec2, Particle, Shockwave, Star};

const MESH_COLOR: Rgba = Rgba::new(255, 255, 255, 0.08);
const MESH_WAKE_MARGIN_SQ: f64 = 10_000.0; // mesh springs engage this far (squared) past the influence radius
const MESH_REST_SQ: f64 = 0.1;
const SHOCKWAVE_WIDTH: f64 = 4.0;
const RING_WIDTH: f64 = 2.0;
const GLOW_VISIBLE: f64 = 0.05;
const ARROW_GAP: f64 = 25.0;
const ARROW: [(f64, f64); 3] = [(0.0, 0.0), (-15.0, -8.0), (-15.0, 8.0)];
const FLICKER_SEED_OFFSET: u64 = 0x9e37_79b9_7f4a_7c15;

pub struct BlackHoleGame {
    params: BlackHoleParams,
    rng: StdRng,
    flicker_rng: StdRng, // ring flicker only, never touched by step
    viewport: Viewport,
    fidelity: Fidelity,

    lattice: Lattice,
    mesh: Vec<GridPoint>,
    stars: Vec<Star>,
    particles: Vec<Particle>,
    shockwaves: Vec<Shockwave>,
    attractor: Attractor,

    star_cap: usize,
    collected: usize,
    round: u32,
    explosions: u32,
    last_collect_ms: Option<f64>,
    now_ms: f64,
}

impl BlackHoleGame {
    pub fn new(params: BlackHoleParams, seed: u64) -> Self {
        let attractor = Attractor {
            x: NVec2::new(-1000.0, -1000.0),
            radius: params.initial_radius,
            pulse: 0.0,
        };
        Self {
            params,
            rng: StdRng::seed_from_u64(seed),
            flicker_rng: StdRng::seed_from_u64(seed ^ FLICKER_SEED_OFFSET),
            viewport: Viewport::default(),
            fidelity: Fidelity::Full,
            lattice: Lattice::layout(0.0, 0.0, 1.0, 0, 0.0),
            mesh: Vec::new(),
            stars: Vec::new(),
            particles: Vec::new(),
            shockwaves: Vec::new(),
            attractor,
            star_cap: 0,
            collected: 0,
            round: 0,
            explosions: 0,
            last_collect_ms: None,
            now_ms: 0.0,
        }
    }

    pub fn params(&self) -> &BlackHoleParams {
        &self.params
    }

    pub fn is_initialized(&self) -> bool {
        self.viewport.is_measured()
    }

    pub fn mesh(&self) -> &[GridPoint] {
        &self.mesh
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn shockwaves(&self) -> &[Shockwave] {
        &self.shockwaves
    }

    pub fn attractor(&self) -> &Attractor {
        &self.attractor
    }

    pub fn collected(&self) -> usize {
        self.collected
    }

    /// Stars in the current round
    pub fn total_stars(&self) -> usize {
        self.stars.len()
    }

    /// Size of the next generation before growth is applied
    pub fn star_cap(&self) -> usize {
        self.star_cap
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn explosions(&self) -> u32 {
        self.explosions
    }

    /// Fraction of this round's stars swallowed; 0 for an empty round
    pub fn progress(&self) -> f64 {
        match self.stars.len() {
            0 => 0.0,
            total => self.collected as f64 / total as f64,
        }
    }

    /// No capture for longer than the idle timeout while stars remain
    pub fn is_idle(&self) -> bool {
        let since = self.last_collect_ms.map_or(0.0, |t| self.now_ms - t);
        since > self.params.idle_timeout_ms && self.collected < self.stars.len()
    }

    /// Nearest active star to the attractor
    pub fn nearest_star(&self) -> Option<&Star> {
        let hole = self.attractor.x;
        let mut nearest = None;
        let mut min_dist_sq = f64::INFINITY;
        for star in self.stars.iter().filter(|s| s.active) {
            let d_sq = (star.x - hole).norm_squared();
            if d_sq < min_dist_sq {
                min_dist_sq = d_sq;
                nearest = Some(star);
            }
        }
        nearest
    }

    fn random_star(&mut self) -> Star {
        let (w, h) = (self.viewport.width, self.viewport.height);
        let pad = NVec2::new(w * self.params.padding_pct, h * self.params.padding_pct);
        let x = NVec2::new(
            pad.x + self.rng.gen::<f64>() * (w - pad.x * 2.0),
            pad.y + self.rng.gen::<f64>() * (h - pad.y * 2.0),
        );
        self.star_at(x, false)
    }

    fn star_at(&mut self, x: NVec2, spawning: bool) -> Star {
        let size = self.rng.gen::<f64>() * 2.0 + 0.5;
        Star {
            x,
            v: NVec2::zeros(),
            size,
            base_size: size,
            alpha: self.rng.gen::<f64>() * 0.6 + 0.2,
            active: true,
            spawning,
        }
    }

    fn random_direction(&mut self, (min, max): (f64, f64)) -> NVec2 {
        let angle = self.rng.gen::<f64>() * TAU;
        let speed = min + self.rng.gen::<f64>() * (max - min);
        NVec2::new(angle.cos(), angle.sin()) * speed
    }

    fn update_mesh(&mut self) {
        let p = &self.params;
        let hole = self.attractor.x;
        let influence = self.attractor.radius * p.influence_factor;
        let influence_sq = influence * influence;
        let wave_width = p.wave_width;

        for point in self.mesh.iter_mut() {
            let to_base = point.base - point.x;
            let to_hole = hole - point.x;
            let hole_sq = to_hole.norm_squared();
            let mut active = false;

            // spring back to the anchor
            if to_base.norm_squared() > MESH_REST_SQ || hole_sq < influence_sq + MESH_WAKE_MARGIN_SQ {
                point.v += to_base * p.grid_spring;
                active = true;
            }

            // pull toward the hole
            if hole_sq < influence_sq {
                let dist = hole_sq.sqrt();
                let t = (influence - dist) / influence;
                let angle = to_hole.y.atan2(to_hole.x);
                point.v += NVec2::new(angle.cos(), angle.sin()) * (t * t * p.mesh_pull);
                active = true;
            }

            // shockwave band pushes outward
            for wave in &self.shockwaves {
                let from_center = point.x - wave.center;
                let dist_sq = from_center.norm_squared();
                let max_range = wave.radius + wave_width;
                if dist_sq >= max_range * max_range {
                    continue;
                }
                let off_band = (dist_sq.sqrt() - wave.radius).abs();
                if off_band < wave_width {
                    let t = (wave_width - off_band) / wave_width;
                    let angle = from_center.y.atan2(from_center.x);
                    point.v += NVec2::new(angle.cos(), angle.sin()) * (t * p.wave_push * wave.opacity);
                    active = true;
                }
            }

            if active {
                point.v *= p.grid_friction;
                point.x += point.v;
            }
            point.active = active;
        }
    }

    fn age_shockwaves(&mut self) {
        let p = &self.params;
        self.shockwaves.retain_mut(|wave| {
            wave.radius += (wave.max_radius - wave.radius) * p.shockwave_easing + p.shockwave_min_growth;
            wave.opacity -= p.shockwave_decay;
            wave.opacity > 0.0
        });
    }

    /// Returns the number of stars swallowed this frame
    fn update_stars(&mut self) -> usize {
        let p = &self.params;
        let (w, h) = (self.viewport.width, self.viewport.height);
        let pad = NVec2::new(w * p.padding_pct, h * p.padding_pct);
        let gravity_radius = p.gravity_radius.pick(self.fidelity);
        let gravity_sq = gravity_radius * gravity_radius;
        let hole = self.attractor.x;
        let hole_radius = self.attractor.radius;
        let mut captured = 0;

        for star in self.stars.iter_mut().filter(|s| s.active) {
            star.x += star.v;

            if star.x.x < pad.x {
                star.x.x = pad.x;
                star.v.x *= p.bounce;
            } else if star.x.x > w - pad.x {
                star.x.x = w - pad.x;
                star.v.x *= p.bounce;
            }
            if star.x.y < pad.y {
                star.x.y = pad.y;
                star.v.y *= p.bounce;
            } else if star.x.y > h - pad.y {
                star.x.y = h - pad.y;
                star.v.y *= p.bounce;
            }

            let d = hole - star.x;
            let dist_sq = d.norm_squared();

            if dist_sq < gravity_sq && dist_sq > 1.0 {
                let dist = dist_sq.sqrt();
                let force = (1.0 - dist / gravity_radius) * p.acceleration;
                star.v += (d / dist) * force;

                if !star.spawning && dist < hole_radius {
                    star.active = false;
                    captured += 1;
                }
            }

            if star.spawning && dist_sq.sqrt() > hole_radius + p.spawn_grace {
                star.spawning = false;
            }

            star.v *= p.star_damping;
        }

        captured
    }

    fn update_particles(&mut self) {
        let p = &self.params;
        self.particles.retain_mut(|particle| {
            particle.x += particle.v;
            particle.v *= p.debris_damping;
            particle.life -= p.debris_decay;
            particle.life > 0.0
        });
    }

    fn explode(&mut self) {
        let hole = self.attractor.x;

        let debris = self.params.debris_count.pick(self.fidelity);
        for _ in 0..debris {
            let v = self.random_direction(self.params.debris_speed);
            let size = self.rng.gen::<f64>() * 3.0 + 1.0;
            let color = if self.rng.gen::<f64>() > 0.3 { Rgba::NEON_LIME } else { Rgba::WHITE };
            self.particles.push(Particle { x: hole, v, life: 1.0, size, color });
        }

        self.shockwaves.push(Shockwave {
            center: hole,
            radius: self.params.shockwave_start_radius,
            max_radius: self.viewport.width.max(self.viewport.height) * self.params.shockwave_reach,
            opacity: 1.0,
        });

        let max_stars = self.params.max_stars.pick(self.fidelity);
        let grown = (self.star_cap as f64 * self.params.growth_factor).floor() as usize;
        self.star_cap = grown.min(max_stars);

        self.attractor.radius = self.params.initial_radius;
        self.attractor.pulse = self.params.explosion_pulse;
        self.collected = 0;
        self.last_collect_ms = Some(self.now_ms);
        self.round += 1;
        self.explosions += 1;

        let mut stars = Vec::with_capacity(self.star_cap);
        for _ in 0..self.star_cap {
            let mut star = self.star_at(hole, true);
            star.v = self.random_direction(self.params.respawn_speed);
            stars.push(star);
        }
        self.stars = stars;

        log::info!(
            "black_hole: explosion {} at ({:.0}, {:.0}), round {} with {} stars",
            self.explosions,
            hole.x,
            hole.y,
            self.round,
            self.star_cap
        );
    }

    fn draw_orb(&mut self, canvas: &mut dyn Canvas) {
        let progress = self.progress();
        let center = self.attractor.x;

        let (mut pulse_glow, mut pulse_size) = (0.0, 0.0);
        if progress > 0.5 {
            let freq = 15.0 + progress * 15.0;
            let sine = (self.now_ms / 1000.0 * freq).sin();
            pulse_glow = sine * progress * 0.5;
            pulse_size = sine * progress * 4.0;
        }

        let radius = (self.attractor.radius + self.attractor.pulse + pulse_size).max(1.0);
        let glow = 0.3 + progress * 0.7 + pulse_glow;
        let hot = progress > 0.8 && self.flicker_rng.gen::<f64>() > 0.5;
        let ring = if hot { Rgba::HOT_LIME } else { Rgba::NEON_LIME };

        if glow > GLOW_VISIBLE {
            let spread = 20.0 + radius * 0.4;
            canvas.radial_glow(center, radius, radius + spread, Rgba::NEON_LIME.with_alpha(glow * 0.4));
        }
        canvas.fill_circle(center, radius, Rgba::BLACK);
        canvas.stroke_circle(center, radius, Stroke::new(ring, RING_WIDTH));

        if self.is_idle() {
            if let Some(target) = self.nearest_star().map(|s| s.x) {
                let d = target - center;
                let angle = d.y.atan2(d.x);
                let (sin, cos) = angle.sin_cos();
                let tip = center + NVec2::new(cos, sin) * (radius + ARROW_GAP);
                let arrow: Vec<NVec2> = ARROW
                    .iter()
                    .map(|&(x, y)| tip + NVec2::new(x * cos - y * sin, x * sin + y * cos))
                    .collect();
                canvas.fill_polygon(&arrow, Rgba::NEON_LIME);
            }
        }
    }
}

impl Effect for BlackHoleGame {
    fn name(&self) -> &'static str {
        "black_hole"
    }

    fn listeners(&self) -> &'static [Listener] {
        &[Listener::Resize, Listener::PointerMove, Listener::TouchMove]
    }

    fn resize_debounce_ms(&self) -> f64 {
        self.params.resize_debounce_ms
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if !viewport.is_measured() {
            self.lattice = Lattice::layout(0.0, 0.0, 1.0, 0, 0.0);
            self.mesh.clear();
            self.stars.clear();
            return;
        }

        self.fidelity = viewport.fidelity();
        let spacing = self.params.grid_spacing.pick(self.fidelity);
        self.lattice = Lattice::layout(viewport.width, viewport.height, spacing, 2, 1.0);
        self.mesh = self.lattice.anchors.iter().copied().map(GridPoint::anchored).collect();

        self.star_cap = self.params.initial_stars.pick(self.fidelity);
        let mut stars = Vec::with_capacity(self.star_cap);
        for _ in 0..self.star_cap {
            stars.push(self.random_star());
        }
        self.stars = stars;
        self.collected = 0;
        self.round = 1;
        self.last_collect_ms = None;
    }

    fn pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Move(at) | PointerEvent::Touch(at) => self.attractor.x = at,
            PointerEvent::Leave => {}
        }
    }

    fn step(&mut self, now_ms: f64) {
        if !self.is_initialized() {
            return;
        }
        self.now_ms = now_ms;
        self.last_collect_ms.get_or_insert(now_ms);

        self.update_mesh();
        self.age_shockwaves();

        let captured = self.update_stars();
        if captured > 0 {
            self.collected += captured;
            self.attractor.pulse = self.params.capture_pulse;
            self.last_collect_ms = Some(now_ms);
        }

        self.update_particles();

        // progress of the round being played, before a possible explosion
        let progress = self.progress();

        // collected resets inside explode, so one crossing fires once
        if !self.stars.is_empty() && self.collected >= self.stars.len() {
            self.explode();
        }

        let p = &self.params;
        let target = p.initial_radius + progress * (p.max_radius - p.initial_radius);
        self.attractor.radius += (target - self.attractor.radius) * p.radius_easing;
        self.attractor.pulse *= p.pulse_decay;
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        canvas.clear(Rgba::BLACK);
        if !self.is_initialized() {
            return;
        }

        let mesh_stroke = Stroke::new(MESH_COLOR, 1.0);
        for (a, b) in self.lattice.edges() {
            canvas.line(self.mesh[a].x, self.mesh[b].x, mesh_stroke);
        }

        for star in self.stars.iter().filter(|s| s.active) {
            canvas.fill_circle(star.x, star.size, Rgba::NEON_LIME.with_alpha(star.alpha));
        }

        for particle in &self.particles {
            canvas.fill_circle(particle.x, particle.size, particle.color.with_alpha(particle.life));
        }

        for wave in &self.shockwaves {
            canvas.stroke_circle(
                wave.center,
                wave.radius,
                Stroke::new(Rgba::NEON_LIME.with_alpha(wave.opacity), SHOCKWAVE_WIDTH),
            );
        }

        self.draw_orb(canvas);
    }
}
