//! Scroll-driven dot morph between library shapes
//!
//! `progress` in [0, 1] is split into `phrase_count` equal phases over
//! `[0, phrase_end]` plus a final phase over `[phrase_end, final_end]`
//! that lands on the logo. Inside a phrase phase the dots hold still for
//! the first `hold` of the phase and then snap across with a sine ease.
//!
//! Each dot `i` flies from slot `i` of the source shape to slot `i` of
//! the destination, bent by an arc, shaken by turbulence that peaks
//! mid-transition, and always gently floating.

use std::f64::consts::PI;

use crate::simulation::canvas::{Canvas, Rgba};
use crate::simulation::host::{Effect, Listener, PointerEvent, Viewport};
use crate::simulation::params::DotMorphParams;
use crate::simulation::shapes::{ShapeKind, ShapeLibrary, ShapePoints, DOT_COUNT};
use crate::simulation::states::NVec2;

const DOT_COLOR: Rgba = Rgba::BLACK;

/// Which two shapes are being blended, and how far
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphPhase {
    pub from: ShapeKind,
    pub to: ShapeKind,
    pub t: f64,     // linear blend after hold/snap, in [0, 1]
    pub eased: f64, // `t` through the sine in/out curve
}

impl MorphPhase {
    pub fn at(progress: f64, params: &DotMorphParams) -> Self {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        let last_phrase = params.phrase_count.saturating_sub(1);

        let (from, to, t) = if progress < params.phrase_end && params.phrase_count > 0 {
            let step = params.phrase_end / params.phrase_count as f64;
            let raw = progress / step;
            let current = (raw.floor() as usize).min(last_phrase);
            let next = (current + 1).min(last_phrase);
            let local = raw - current as f64;

            let t = if local < params.hold {
                0.0
            } else {
                (local - params.hold) / (1.0 - params.hold)
            };
            (current, next, t)
        } else {
            let span = params.final_end - params.phrase_end;
            let t = if span > 0.0 { (progress - params.phrase_end) / span } else { 1.0 };
            (last_phrase, last_phrase + 1, t)
        };

        let t = t.clamp(0.0, 1.0);
        Self {
            from: ShapeKind::from_index(from),
            to: ShapeKind::from_index(to),
            t,
            eased: ease_in_out_sine(t),
        }
    }

    /// `sin(eased * pi)`: zero at rest, one mid-transition
    pub fn turbulence(&self) -> f64 {
        (self.eased * PI).sin()
    }
}

pub fn ease_in_out_sine(t: f64) -> f64 {
    -((PI * t).cos() - 1.0) / 2.0
}

/// Slow breathing offset every dot carries regardless of the morph
pub fn floating_offset(i: usize, time: f64, amplitude: f64) -> NVec2 {
    let i = i as f64;
    NVec2::new(
        (time * 0.5 + i * 0.1).sin() * amplitude,
        (time * 0.3 + i * 0.15).cos() * amplitude,
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub center: NVec2,
    pub radius: f64,
}

pub struct DotMorph {
    params: DotMorphParams,
    library: &'static ShapeLibrary,
    viewport: Viewport,
    render_scale: f64,
    progress: f64,
    phase: MorphPhase,
    from: ShapePoints,
    to: ShapePoints,
    time: f64,
    dots: Vec<Dot>,
}

impl DotMorph {
    pub fn new(params: DotMorphParams) -> Self {
        let library = ShapeLibrary::shared();
        let phase = MorphPhase::at(0.0, &params);
        Self {
            render_scale: params.render_scale.full,
            params,
            library,
            viewport: Viewport::default(),
            progress: 0.0,
            phase,
            from: *library.get(phase.from),
            to: *library.get(phase.to),
            time: 0.0,
            dots: Vec::with_capacity(DOT_COUNT),
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn phase(&self) -> MorphPhase {
        self.phase
    }

    pub fn render_scale(&self) -> f64 {
        self.render_scale
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn is_initialized(&self) -> bool {
        self.viewport.is_measured()
    }

    /// Lay out all dots for the current phase at `self.time`
    fn layout(&mut self) {
        let p = &self.params;
        let center = self.viewport.center();
        let scale = self.render_scale;
        let eased = self.phase.eased;
        let turbulence = self.phase.turbulence();
        let scatter = p.scatter * turbulence;
        let radius = p.dot_radius * (1.0 + turbulence * p.dot_pulse);
        let time = self.time;

        self.dots.clear();
        for (i, (a, b)) in self.from.iter().zip(self.to.iter()).enumerate() {
            let blended = (a + (b - a) * eased) * scale;

            let travel = b - a;
            let dist = travel.norm();
            let mut arc = NVec2::zeros();
            if dist > p.arc_min_distance {
                let side = if i % 2 == 0 { PI / 2.0 } else { -PI / 2.0 };
                let perp = travel.y.atan2(travel.x) + side;
                let amount = (eased * PI).sin() * (dist * p.arc_factor);
                arc = NVec2::new(perp.cos(), perp.sin()) * (amount * scale);
            }

            let fi = i as f64;
            let noise = NVec2::new((fi * 43.13 + time).sin(), (fi * 12.32 + time).cos()) * scatter;
            let float = floating_offset(i, time, p.float_amplitude);

            self.dots.push(Dot {
                center: center + blended + arc + noise + float,
                radius,
            });
        }
    }
}

impl Effect for DotMorph {
    fn name(&self) -> &'static str {
        "dot_morph"
    }

    fn listeners(&self) -> &'static [Listener] {
        &[Listener::Resize]
    }

    fn resize_debounce_ms(&self) -> f64 {
        self.params.resize_debounce_ms
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if viewport.is_measured() {
            self.render_scale = self.params.render_scale.pick(viewport.fidelity());
        } else {
            self.dots.clear();
        }
    }

    fn pointer(&mut self, _event: PointerEvent) {}

    fn set_progress(&mut self, progress: f64) {
        let phase = MorphPhase::at(progress, &self.params);
        if phase.from != self.phase.from {
            self.from = *self.library.get(phase.from);
        }
        if phase.to != self.phase.to {
            self.to = *self.library.get(phase.to);
        }
        self.progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        self.phase = phase;
    }

    fn step(&mut self, _now_ms: f64) {
        if !self.is_initialized() {
            return;
        }
        self.time += self.params.time_step;
        self.layout();
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        canvas.clear(Rgba::TRANSPARENT);
        for dot in &self.dots {
            canvas.fill_circle(dot.center, dot.radius, DOT_COLOR);
        }
    }
}
