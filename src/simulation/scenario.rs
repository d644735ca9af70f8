//! Build fully-initialized stages from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! bundle (`Scenario`) containing:
//! - the mounted effect inside its `EffectHost`
//! - the initial viewport
//! - scroll state when the effect is the dot morph
//! - the custom cursor overlay and its element tree, when enabled
//!
//! The scenario is inserted into Bevy as a `Resource` and driven by the
//! viewer systems; headless runs and benchmarks drive it directly.

use bevy::prelude::Resource;

use crate::configuration::config::{EffectKind, ScenarioConfig};
use crate::simulation::black_hole::BlackHoleGame;
use crate::simulation::canvas::Canvas;
use crate::simulation::cursor::{CursorOverlay, ElementTree, TransformSink, HOVER_ATTRIBUTE, PREVIEW_ATTRIBUTE};
use crate::simulation::dot_morph::DotMorph;
use crate::simulation::gravity_well::GravityWell;
use crate::simulation::host::{Effect, EffectHost, HostEvent, Viewport};
use crate::simulation::interactive_grid::InteractiveGrid;
use crate::simulation::scheduler::FrameRequest;
use crate::simulation::scroll::ScrollState;
use crate::simulation::states::NVec2;

pub type DynEffect = Box<dyn Effect + Send + Sync>;

pub fn build_effect(cfg: &ScenarioConfig) -> DynEffect {
    match cfg.effect {
        EffectKind::InteractiveGrid => Box::new(InteractiveGrid::new(cfg.interactive_grid.clone())),
        EffectKind::GravityWell => Box::new(GravityWell::new(cfg.gravity_well.clone())),
        EffectKind::BlackHole => Box::new(BlackHoleGame::new(cfg.black_hole.clone(), cfg.seed)),
        EffectKind::DotMorph => Box::new(DotMorph::new(cfg.dot_morph.clone())),
    }
}

/// Custom cursor plus the hover targets it delegates over
pub struct CursorStage {
    pub overlay: CursorOverlay,
    pub tree: ElementTree,
    pub hovered: Option<usize>, // element under the pointer at the last move
}

impl CursorStage {
    pub fn build(cfg: &ScenarioConfig) -> Self {
        let mut tree = ElementTree::new();
        let root = tree.add(
            None,
            Some((NVec2::zeros(), NVec2::new(cfg.viewport.width, cfg.viewport.height))),
        );
        for target in &cfg.cursor.targets {
            let [left, top, width, height] = target.bounds;
            let id = tree.add(Some(root), Some((NVec2::new(left, top), NVec2::new(width, height))));
            if target.hover {
                tree.set_attribute(id, HOVER_ATTRIBUTE, "");
            }
            if let Some(preview) = &target.preview {
                tree.set_attribute(id, PREVIEW_ATTRIBUTE, preview);
            }
        }
        Self {
            overlay: CursorOverlay::new(),
            tree,
            hovered: None,
        }
    }

    /// Move the cursor and fire an "over" when the element under it changes
    pub fn pointer_moved(&mut self, client: NVec2, sink: &mut dyn TransformSink) {
        self.overlay.pointer_moved(client, sink);
        let target = self.tree.hit_test(client);
        if target != self.hovered {
            self.hovered = target;
            self.overlay.pointer_over(&self.tree, target);
        }
    }
}

/// Bevy resource holding one mounted effect and its surroundings
#[derive(Resource)]
pub struct Scenario {
    pub kind: EffectKind,
    pub host: EffectHost<DynEffect>,
    pub viewport: Viewport,
    pub scroll: Option<ScrollState>,
    pub cursor: Option<CursorStage>,
    pub request: Option<FrameRequest>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let viewport = Viewport::sized(cfg.viewport.width, cfg.viewport.height);
        let scroll = (cfg.effect == EffectKind::DotMorph)
            .then(|| ScrollState::new(cfg.content_height(), cfg.wheel_step()));
        let cursor = cfg.cursor.enabled.then(|| CursorStage::build(&cfg));

        let mut host = EffectHost::new(build_effect(&cfg));
        let request = Some(host.mount(viewport));

        Self {
            kind: cfg.effect,
            host,
            viewport,
            scroll,
            cursor,
            request,
        }
    }

    /// Deliver a host event, tracking resizes for scroll progress
    pub fn dispatch(&mut self, event: HostEvent, now_ms: f64) -> bool {
        if let HostEvent::Resize(viewport) = &event {
            self.viewport = *viewport;
        }
        self.host.dispatch(event, now_ms)
    }

    /// Wheel input for the dot morph's scroll section
    pub fn wheel(&mut self, lines: f64) {
        if let Some(scroll) = self.scroll.as_mut() {
            let progress = scroll.wheel(lines, self.viewport.height);
            self.host.set_progress(progress.value());
        }
    }

    /// Run the pending frame, if any, into `canvas`
    pub fn advance(&mut self, now_ms: f64, canvas: &mut dyn Canvas) -> bool {
        let Some(request) = self.request.take() else {
            return false;
        };
        self.request = self.host.frame(request, now_ms, canvas);
        true
    }

    pub fn unmount(&mut self) {
        self.request = None;
        self.host.unmount();
    }
}
