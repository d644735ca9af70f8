//! Point-cloud shape library for the dot-morph animator
//!
//! Every shape resolves to exactly `DOT_COUNT` points around the origin.
//! Traced shapes come from the tables in `shape_data`; the atom, the
//! crosshair and the heart are generated from closed-form curves.
//!
//! Resampling picks `raw[floor(i / DOT_COUNT * len)]` for each slot, so
//! dot density follows the raw point density rather than arc length.
//! The morph relies on slot `i` of one shape flying to slot `i` of the
//! next, so this mapping has to stay stable.

use std::f64::consts::{PI, TAU};
use std::sync::OnceLock;

use crate::simulation::shape_data::{self, Artwork};
use crate::simulation::states::NVec2;

/// Dots in every shape (the logo's traced point count)
pub const DOT_COUNT: usize = 133;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Puzzle,
    Eye,
    Atom,
    Calipers,
    Crosshair,
    Flower,
    Heart,
    Logo,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Puzzle,
        ShapeKind::Eye,
        ShapeKind::Atom,
        ShapeKind::Calipers,
        ShapeKind::Crosshair,
        ShapeKind::Flower,
        ShapeKind::Heart,
        ShapeKind::Logo,
    ];

    /// Shape for a morph index; anything past the phrase shapes is the logo
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(ShapeKind::Logo)
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Exactly `DOT_COUNT` points, slot order significant
pub type ShapePoints = [NVec2; DOT_COUNT];

/// Resolved shape for a morph index. Pure and deterministic.
pub fn shape_points(index: usize) -> ShapePoints {
    resample(&raw_points(ShapeKind::from_index(index)))
}

/// Shape points before resampling
pub fn raw_points(kind: ShapeKind) -> Vec<NVec2> {
    match kind {
        ShapeKind::Puzzle => traced(&shape_data::PUZZLE),
        ShapeKind::Eye => traced(&shape_data::EYE),
        ShapeKind::Atom => atom(),
        ShapeKind::Calipers => traced(&shape_data::CALIPERS),
        ShapeKind::Crosshair => crosshair(),
        ShapeKind::Flower => traced(&shape_data::FLOWER),
        ShapeKind::Heart => heart(),
        ShapeKind::Logo => traced(&shape_data::LOGO),
    }
}

/// Fixed fractional-index resampling to `DOT_COUNT` slots. An empty input
/// collapses every slot onto the origin.
pub fn resample(raw: &[NVec2]) -> ShapePoints {
    let mut out = [NVec2::zeros(); DOT_COUNT];
    if raw.is_empty() {
        return out;
    }
    for (i, slot) in out.iter_mut().enumerate() {
        let index = (i as f64 / DOT_COUNT as f64 * raw.len() as f64).floor() as usize;
        *slot = raw[index % raw.len()];
    }
    out
}

/// `count` points spaced evenly by arc length along a polyline, starting
/// at the first node. Fewer than two nodes yields nothing.
pub fn path_points(nodes: &[NVec2], count: usize) -> Vec<NVec2> {
    if nodes.len() < 2 {
        return Vec::new();
    }

    let lens: Vec<f64> = nodes.windows(2).map(|w| (w[1] - w[0]).norm()).collect();
    let total: f64 = lens.iter().sum();
    let step = total / count as f64;

    let mut out = Vec::with_capacity(count);
    let mut walked = 0.0;
    let mut segment = 0;
    for i in 0..count {
        let target = i as f64 * step;
        while segment < lens.len() && walked + lens[segment] < target {
            walked += lens[segment];
            segment += 1;
        }
        if segment >= lens.len() {
            out.push(nodes[nodes.len() - 1]);
            continue;
        }
        let t = if lens[segment] > 0.0 { (target - walked) / lens[segment] } else { 0.0 };
        out.push(nodes[segment] + (nodes[segment + 1] - nodes[segment]) * t);
    }
    out
}

fn traced(artwork: &Artwork) -> Vec<NVec2> {
    let center = NVec2::new(artwork.center[0], artwork.center[1]);
    artwork
        .points
        .iter()
        .map(|&[x, y]| (NVec2::new(x, y) - center) * artwork.scale)
        .collect()
}

fn atom() -> Vec<NVec2> {
    const ORBITS: usize = 3;
    const PER_ORBIT: usize = 40;
    const NUCLEUS: usize = 15;

    let mut points = Vec::with_capacity(ORBITS * PER_ORBIT + NUCLEUS + 1);
    for o in 0..ORBITS {
        let rot = o as f64 / ORBITS as f64 * PI;
        let (sin_r, cos_r) = rot.sin_cos();
        for i in 0..PER_ORBIT {
            let angle = i as f64 / PER_ORBIT as f64 * TAU;
            let rx = angle.cos() * 70.0;
            let ry = angle.sin() * 22.0;
            points.push(NVec2::new(rx * cos_r - ry * sin_r, rx * sin_r + ry * cos_r));
        }
    }
    for i in 0..NUCLEUS {
        let a = i as f64 / NUCLEUS as f64 * TAU;
        points.push(NVec2::new(a.cos(), a.sin()) * 6.0);
    }
    points.push(NVec2::zeros());
    points
}

fn crosshair() -> Vec<NVec2> {
    const RING: usize = 90;
    const ARM: usize = 15;
    const GAP: f64 = 15.0;
    const LEN: f64 = 80.0;

    let mut points: Vec<NVec2> = (0..RING)
        .map(|i| {
            let a = i as f64 / RING as f64 * TAU;
            NVec2::new(a.cos(), a.sin()) * 55.0
        })
        .collect();

    let arms = [
        [NVec2::new(0.0, -LEN), NVec2::new(0.0, -GAP)],
        [NVec2::new(0.0, GAP), NVec2::new(0.0, LEN)],
        [NVec2::new(-LEN, 0.0), NVec2::new(-GAP, 0.0)],
        [NVec2::new(GAP, 0.0), NVec2::new(LEN, 0.0)],
    ];
    for arm in &arms {
        points.extend(path_points(arm, ARM));
    }
    points.push(NVec2::zeros());
    points
}

fn heart() -> Vec<NVec2> {
    const SAMPLES: usize = 150;
    (0..SAMPLES)
        .map(|i| {
            let t = i as f64 / SAMPLES as f64 * TAU;
            let x = 16.0 * t.sin().powi(3);
            let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
            NVec2::new(x, y) * 5.0
        })
        .collect()
}

/// Every shape resolved once and shared read-only
pub struct ShapeLibrary {
    shapes: Vec<ShapePoints>,
}

impl ShapeLibrary {
    pub fn build() -> Self {
        Self {
            shapes: ShapeKind::ALL.iter().map(|kind| shape_points(kind.index())).collect(),
        }
    }

    pub fn shared() -> &'static ShapeLibrary {
        static LIBRARY: OnceLock<ShapeLibrary> = OnceLock::new();
        LIBRARY.get_or_init(|| {
            log::debug!("shape library: resolving {} shapes", ShapeKind::ALL.len());
            ShapeLibrary::build()
        })
    }

    pub fn get(&self, kind: ShapeKind) -> &ShapePoints {
        &self.shapes[kind.index()]
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
