//! Pointer-repelled spring lattice
//!
//! Points inside the interaction radius ease toward a target pushed away
//! from the pointer; everything else eases back to its anchor. Points at
//! rest and out of range are skipped entirely ("asleep").

use crate::simulation::canvas::{Canvas, Rgba, Stroke};
use crate::simulation::host::{Effect, Listener, PointerEvent, Viewport};
use crate::simulation::lattice::Lattice;
use crate::simulation::params::InteractiveGridParams;
use crate::simulation::states::{GridPoint, NVec2};

const LINE_COLOR: Rgba = Rgba::new(0, 0, 0, 0.08);
const MARKER_COLOR: Rgba = Rgba::new(0, 0, 0, 0.2);

/// Where the pointer sits before the first event: far outside any lattice
pub const POINTER_PARKED: NVec2 = NVec2::new(-1000.0, -1000.0);

pub struct InteractiveGrid {
    params: InteractiveGridParams,
    viewport: Viewport,
    lattice: Lattice,
    points: Vec<GridPoint>,
    pointer: NVec2,
}

impl InteractiveGrid {
    pub fn new(params: InteractiveGridParams) -> Self {
        Self {
            params,
            viewport: Viewport::default(),
            lattice: Lattice::layout(0.0, 0.0, 1.0, 0, 0.0),
            points: Vec::new(),
            pointer: POINTER_PARKED,
        }
    }

    pub fn params(&self) -> &InteractiveGridParams {
        &self.params
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn pointer_position(&self) -> NVec2 {
        self.pointer
    }

    pub fn is_initialized(&self) -> bool {
        !self.points.is_empty()
    }

    /// Number of points that moved in the last step
    pub fn awake(&self) -> usize {
        self.points.iter().filter(|p| p.active).count()
    }

    fn update(&mut self) {
        let radius = self.params.radius;
        let radius_sq = radius * radius;
        let pointer = self.pointer;

        for p in self.points.iter_mut() {
            let d = pointer - p.x;
            let dist_sq = d.norm_squared();
            let in_range = dist_sq < radius_sq;

            if !in_range && p.displacement_sq() <= self.params.sleep_threshold_sq {
                // settle exactly on the anchor and stop paying for this point
                p.x = p.base;
                p.v = NVec2::zeros();
                p.active = false;
                continue;
            }

            let mut target = p.base;
            if in_range {
                let dist = dist_sq.sqrt();
                let angle = d.y.atan2(d.x);
                let repulsion = (radius - dist) / radius * self.params.repulsion;
                target -= NVec2::new(angle.cos(), angle.sin()) * repulsion;
            }

            p.v = (target - p.x) * self.params.ease;
            p.x += p.v;
            p.active = true;
        }
    }
}

impl Effect for InteractiveGrid {
    fn name(&self) -> &'static str {
        "interactive_grid"
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
            self.points.clear();
            return;
        }

        let gap = self.params.gap.pick(viewport.fidelity());
        self.lattice = Lattice::layout(viewport.width, viewport.height, gap, 1, 0.0);
        self.points = self.lattice.anchors.iter().copied().map(GridPoint::anchored).collect();
    }

    fn pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Move(at) | PointerEvent::Touch(at) => self.pointer = at,
            PointerEvent::Leave => {}
        }
    }

    fn step(&mut self, _now_ms: f64) {
        if self.is_initialized() {
            self.update();
        }
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        canvas.clear(Rgba::TRANSPARENT);
        if !self.is_initialized() {
            return;
        }

        let stroke = Stroke::new(LINE_COLOR, 1.0);
        for (a, b) in self.lattice.edges() {
            canvas.line(self.points[a].x, self.points[b].x, stroke);
        }

        let size = self.params.marker_size;
        let half = NVec2::new(size / 2.0, size / 2.0);
        for p in &self.points {
            canvas.fill_rect(p.x - half, NVec2::new(size, size), MARKER_COLOR);
        }
    }
}
