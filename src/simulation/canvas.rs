//! Immediate-mode render target used by every effect.
//!
//! Effects draw into a `&mut dyn Canvas` once per frame and never keep a
//! reference to it. `DisplayList` records the calls so a frame can be
//! inspected in tests or replayed by the bevy viewer.

use crate::simulation::states::NVec2;

/// Straight RGBA colour, channels in 0..=255 and alpha in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);
    pub const NEON_LIME: Rgba = Rgba::rgb(204, 255, 0);
    pub const HOT_LIME: Rgba = Rgba::rgb(238, 255, 204);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    /// Channel-wise linear blend, `t` clamped to [0, 1]. Channels floor like
    /// the CSS `rgba()` strings the effects were tuned against.
    pub fn mix(self, other: Rgba, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).floor() as u8;
        Self {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Rgba, width: f64) -> Self {
        Self { color, width }
    }
}

/// Drawing surface the effects render into
pub trait Canvas {
    /// Fill the whole surface. `Rgba::TRANSPARENT` clears it.
    fn clear(&mut self, color: Rgba);
    fn line(&mut self, from: NVec2, to: NVec2, stroke: Stroke);
    fn fill_circle(&mut self, center: NVec2, radius: f64, color: Rgba);
    fn stroke_circle(&mut self, center: NVec2, radius: f64, stroke: Stroke);
    fn fill_rect(&mut self, min: NVec2, size: NVec2, color: Rgba);
    fn fill_polygon(&mut self, points: &[NVec2], color: Rgba);
    /// Radial gradient from `color` at `inner` to fully transparent at `outer`
    fn radial_glow(&mut self, center: NVec2, inner: f64, outer: f64, color: Rgba);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),
    Line { from: NVec2, to: NVec2, stroke: Stroke },
    FillCircle { center: NVec2, radius: f64, color: Rgba },
    StrokeCircle { center: NVec2, radius: f64, stroke: Stroke },
    FillRect { min: NVec2, size: NVec2, color: Rgba },
    FillPolygon { points: Vec<NVec2>, color: Rgba },
    RadialGlow { center: NVec2, inner: f64, outer: f64, color: Rgba },
}

/// Canvas that records every call in order
#[derive(Debug, Default, Clone)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop the recorded frame, keeping the allocation
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = (&NVec2, &NVec2, &Stroke)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, stroke } => Some((from, to, stroke)),
            _ => None,
        })
    }

    pub fn filled_circles(&self) -> impl Iterator<Item = (&NVec2, f64, &Rgba)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillCircle { center, radius, color } => Some((center, *radius, color)),
            _ => None,
        })
    }
}

impl Canvas for DisplayList {
    fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn line(&mut self, from: NVec2, to: NVec2, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn fill_circle(&mut self, center: NVec2, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: NVec2, radius: f64, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, stroke });
    }

    fn fill_rect(&mut self, min: NVec2, size: NVec2, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { min, size, color });
    }

    fn fill_polygon(&mut self, points: &[NVec2], color: Rgba) {
        self.commands.push(DrawCommand::FillPolygon { points: points.to_vec(), color });
    }

    fn radial_glow(&mut self, center: NVec2, inner: f64, outer: f64, color: Rgba) {
        self.commands.push(DrawCommand::RadialGlow { center, inner, outer, color });
    }
}
