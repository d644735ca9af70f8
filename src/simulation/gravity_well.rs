//! Pseudo-3D gravity well
//!
//! A dense lattice whose points sink along z and pinch toward the pointer,
//! integrated per axis with a damped spring, then projected with a simple
//! perspective divide about the viewport centre. Edge colour ramps from a
//! dark base to the accent with depth.

use crate::simulation::canvas::{Canvas, Rgba, Stroke};
use crate::simulation::host::{Effect, Listener, PointerEvent, Viewport};
use crate::simulation::lattice::Lattice;
use crate::simulation::params::GravityWellParams;
use crate::simulation::states::{DepthPoint, NVec2, NVec3};

const BASE_COLOR: Rgba = Rgba::rgb(40, 40, 40);
const ACCENT_COLOR: Rgba = Rgba::NEON_LIME;

pub struct GravityWell {
    params: GravityWellParams,
    viewport: Viewport,
    lattice: Lattice,
    points: Vec<DepthPoint>,
    pointer: Option<NVec2>, // None while the pointer is outside the window
}

/// A projected lattice edge ready to stroke
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: NVec2,
    pub to: NVec2,
    pub intensity: f64,
}

impl GravityWell {
    pub fn new(params: GravityWellParams) -> Self {
        Self {
            params,
            viewport: Viewport::default(),
            lattice: Lattice::layout(0.0, 0.0, 1.0, 0, 0.0),
            points: Vec::new(),
            pointer: None,
        }
    }

    pub fn points(&self) -> &[DepthPoint] {
        &self.points
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn pointer_position(&self) -> Option<NVec2> {
        self.pointer
    }

    pub fn is_initialized(&self) -> bool {
        !self.points.is_empty()
    }

    /// Perspective divide about `center`: `scale = fov / (fov + z)`
    pub fn project(&self, p: NVec3, center: NVec2) -> NVec2 {
        let scale = self.params.fov / (self.params.fov + p.z);
        (p.xy() - center) * scale + center
    }

    /// Depth-based colour ramp in [0, 1] for an edge with deepest endpoint `max_z`
    pub fn intensity(&self, max_z: f64) -> f64 {
        let normalized = (max_z / (self.params.max_depth * 0.8)).max(0.0);
        normalized.powf(1.5).min(1.0)
    }

    pub fn edge_color(intensity: f64) -> Rgba {
        BASE_COLOR.mix(ACCENT_COLOR, intensity).with_alpha(0.15 + 0.85 * intensity)
    }

    /// Spring target for an anchor: sunk and pinched when the pointer is near
    fn target(&self, base: NVec3) -> NVec3 {
        let Some(pointer) = self.pointer else {
            return base;
        };

        let d = pointer - base.xy();
        let dist_sq = d.norm_squared();
        let radius = self.params.radius;
        if dist_sq >= radius * radius {
            return base;
        }

        let force = 1.0 - dist_sq.sqrt() / radius;
        let ease = force * force;
        let pinched = base.xy() + d * (ease * self.params.pull);
        NVec3::new(pinched.x, pinched.y, ease * self.params.max_depth)
    }

    fn update(&mut self) {
        let elasticity = self.params.elasticity;
        let damping = self.params.damping;

        for i in 0..self.points.len() {
            let target = self.target(self.points[i].base);
            let p = &mut self.points[i];
            // v = (v + (target - x) * k) * damping; x += v, on every axis
            p.v = (p.v + (target - p.x) * elasticity) * damping;
            p.x += p.v;
        }
    }

    /// Project every visible edge. Culling only looks at the first
    /// endpoint, before the colour and stroke are worked out.
    pub fn segments(&self) -> Vec<Segment> {
        let center = self.viewport.center();
        let margin = self.params.cull_margin;
        let (w, h) = (self.viewport.width, self.viewport.height);

        let mut out = Vec::with_capacity(self.lattice.cols * self.lattice.rows * 2);
        for (a, b) in self.lattice.edges() {
            let p1 = &self.points[a];
            let p2 = &self.points[b];

            let from = self.project(p1.x, center);
            if from.x < -margin || from.x > w + margin || from.y < -margin || from.y > h + margin {
                continue;
            }
            let to = self.project(p2.x, center);

            out.push(Segment {
                from,
                to,
                intensity: self.intensity(p1.x.z.max(p2.x.z)),
            });
        }
        out
    }
}

impl Effect for GravityWell {
    fn name(&self) -> &'static str {
        "gravity_well"
    }

    fn listeners(&self) -> &'static [Listener] {
        &[Listener::Resize, Listener::PointerMove, Listener::PointerLeave]
    }

    fn resize_debounce_ms(&self) -> f64 {
        self.params.resize_debounce_ms
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if !viewport.is_measured() {
            self.lattice = Lattice::layout(0.0, 0.0, 1.0, 0, 0.0);
            self.points.clear();
            return;
        }

        let margin = self.params.margin_cells;
        self.lattice = Lattice::layout(
            viewport.width,
            viewport.height,
            self.params.spacing,
            margin * 2,
            margin as f64,
        );
        self.points = self.lattice.anchors.iter().copied().map(DepthPoint::anchored).collect();
    }

    fn pointer(&mut self, event: PointerEvent) {
        self.pointer = match event {
            PointerEvent::Move(at) | PointerEvent::Touch(at) => Some(at),
            PointerEvent::Leave => None,
        };
    }

    fn step(&mut self, _now_ms: f64) {
        if self.is_initialized() {
            self.update();
        }
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        canvas.clear(Rgba::BLACK);
        if !self.is_initialized() {
            return;
        }

        for segment in self.segments() {
            canvas.line(segment.from, segment.to, Stroke::new(Self::edge_color(segment.intensity), 1.0));
        }
    }
}
