//! Custom cursor overlay
//!
//! Pointer moves are written straight to two retained transforms (the
//! cursor disc and the preview panel) through a `TransformSink`; nothing
//! else is recomputed per move. Hover state changes only on "over"
//! events, resolved by walking up from the event target to the nearest
//! element flagged with `data-cursor-hover`.

use std::collections::HashMap;

use crate::simulation::states::NVec2;

pub const HOVER_ATTRIBUTE: &str = "data-cursor-hover";
pub const PREVIEW_ATTRIBUTE: &str = "data-cursor-preview";

pub const CURSOR_SIZE: f64 = 30.0;
pub const CURSOR_HOVER_SIZE: f64 = 100.0;
pub const PREVIEW_OFFSET: NVec2 = NVec2::new(40.0, 40.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorLayer {
    Cursor,
    Preview,
}

/// How a layer's transform origin relates to the written translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
    TopLeft,
}

/// Retained surface whose element transforms can be written directly
pub trait TransformSink {
    fn write_transform(&mut self, layer: CursorLayer, translate: NVec2, anchor: Anchor);
}

/// Keeps only the last transform per layer
#[derive(Debug, Default, Clone)]
pub struct TransformCache {
    transforms: HashMap<CursorLayer, (NVec2, Anchor)>,
    writes: usize,
}

impl TransformCache {
    pub fn get(&self, layer: CursorLayer) -> Option<(NVec2, Anchor)> {
        self.transforms.get(&layer).copied()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl TransformSink for TransformCache {
    fn write_transform(&mut self, layer: CursorLayer, translate: NVec2, anchor: Anchor) {
        self.transforms.insert(layer, (translate, anchor));
        self.writes += 1;
    }
}

pub type ElementId = usize;

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub parent: Option<ElementId>,
    pub bounds: Option<(NVec2, NVec2)>, // min, size in client pixels
    pub attributes: HashMap<String, String>,
}

/// Minimal element tree: parent links, optional bounds, attributes
#[derive(Debug, Clone, Default)]
pub struct ElementTree {
    elements: Vec<Element>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, parent: Option<ElementId>, bounds: Option<(NVec2, NVec2)>) -> ElementId {
        self.elements.push(Element {
            parent,
            bounds,
            attributes: HashMap::new(),
        });
        self.elements.len() - 1
    }

    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.elements.get(id)?.attributes.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Nearest element, starting at `id` itself, that carries `name`
    pub fn closest(&self, id: ElementId, name: &str) -> Option<ElementId> {
        let mut current = Some(id);
        while let Some(at) = current {
            let element = self.elements.get(at)?;
            if element.attributes.contains_key(name) {
                return Some(at);
            }
            current = element.parent;
        }
        None
    }

    fn depth(&self, id: ElementId) -> usize {
        let mut depth = 0;
        let mut current = self.elements.get(id).and_then(|e| e.parent);
        while let Some(at) = current {
            depth += 1;
            current = self.elements.get(at).and_then(|e| e.parent);
        }
        depth
    }

    /// Deepest element whose bounds contain `point`; later siblings win ties
    pub fn hit_test(&self, point: NVec2) -> Option<ElementId> {
        let mut best: Option<(ElementId, usize)> = None;
        for (id, element) in self.elements.iter().enumerate() {
            let Some((min, size)) = element.bounds else { continue };
            let inside = point.x >= min.x && point.x <= min.x + size.x && point.y >= min.y && point.y <= min.y + size.y;
            if !inside {
                continue;
            }
            let depth = self.depth(id);
            if best.map_or(true, |(_, d)| depth >= d) {
                best = Some((id, depth));
            }
        }
        best.map(|(id, _)| id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    pub hovering: bool,
    pub preview: Option<String>,
}

#[derive(Debug, Default)]
pub struct CursorOverlay {
    hover: HoverState,
    position: Option<NVec2>,
}

impl CursorOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn position(&self) -> Option<NVec2> {
        self.position
    }

    /// Disc diameter for the current hover state
    pub fn size(&self) -> f64 {
        if self.hover.hovering {
            CURSOR_HOVER_SIZE
        } else {
            CURSOR_SIZE
        }
    }

    pub fn preview_visible(&self) -> bool {
        self.hover.hovering && self.hover.preview.is_some()
    }

    /// Write both transforms for a pointer at `client`
    pub fn pointer_moved(&mut self, client: NVec2, sink: &mut dyn TransformSink) {
        self.position = Some(client);
        sink.write_transform(CursorLayer::Cursor, client, Anchor::Center);
        sink.write_transform(CursorLayer::Preview, client + PREVIEW_OFFSET, Anchor::TopLeft);
    }

    /// Resolve hover for an "over" event whose target is `target`
    pub fn pointer_over(&mut self, tree: &ElementTree, target: Option<ElementId>) -> &HoverState {
        let flagged = target.and_then(|id| tree.closest(id, HOVER_ATTRIBUTE));
        self.hover = match flagged {
            Some(id) => HoverState {
                hovering: true,
                preview: tree.attribute(id, PREVIEW_ATTRIBUTE).map(str::to_string),
            },
            None => HoverState::default(),
        };
        &self.hover
    }
}
