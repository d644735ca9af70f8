//! Mounting, input routing and per-frame driving for a single effect
//!
//! An `EffectHost` owns one simulation context for its whole mounted
//! lifetime:
//! - `mount` registers the effect's listeners and starts its frame loop
//! - `dispatch` routes window/container events to registered listeners only
//! - `frame` runs physics strictly before rendering, then re-requests
//! - `unmount` cancels the loop and detaches everything, idempotently

use crate::simulation::canvas::Canvas;
use crate::simulation::params::Fidelity;
use crate::simulation::scheduler::{FrameLoop, FrameRequest, ResizeDebouncer};
use crate::simulation::states::NVec2;

/// Container bounding box in client pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn sized(width: f64, height: f64) -> Self {
        Self { left: 0.0, top: 0.0, width, height }
    }

    /// False while layout has not settled (zero or negative size)
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn fidelity(&self) -> Fidelity {
        Fidelity::from_width(self.width)
    }

    pub fn origin(&self) -> NVec2 {
        NVec2::new(self.left, self.top)
    }

    /// Centre in container coordinates
    pub fn center(&self) -> NVec2 {
        NVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Pointer input in container coordinates, as seen by an effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move(NVec2),
    Touch(NVec2),
    Leave,
}

/// Raw event delivered by the host environment, positions in client pixels
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    PointerMove(NVec2),
    TouchMove(Vec<NVec2>), // active touches, only the first one is used
    PointerLeave,
    Resize(Viewport),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    PointerMove,
    TouchMove,
    PointerLeave,
    Resize,
}

impl HostEvent {
    fn listener(&self) -> Listener {
        match self {
            HostEvent::PointerMove(_) => Listener::PointerMove,
            HostEvent::TouchMove(_) => Listener::TouchMove,
            HostEvent::PointerLeave => Listener::PointerLeave,
            HostEvent::Resize(_) => Listener::Resize,
        }
    }
}

/// A self-contained canvas simulation
pub trait Effect {
    fn name(&self) -> &'static str;

    /// Events this effect subscribes to while mounted
    fn listeners(&self) -> &'static [Listener];

    fn resize_debounce_ms(&self) -> f64;

    /// Rebuild for a new container size. An unmeasured viewport leaves
    /// the effect uninitialized until the next resize.
    fn resize(&mut self, viewport: Viewport);

    fn pointer(&mut self, event: PointerEvent);

    /// External scalar input; only the morph animator uses it
    fn set_progress(&mut self, _progress: f64) {}

    /// Advance physics by one frame
    fn step(&mut self, now_ms: f64);

    /// Draw the current state
    fn render(&mut self, canvas: &mut dyn Canvas);
}

impl<E: Effect + ?Sized> Effect for Box<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn listeners(&self) -> &'static [Listener] {
        (**self).listeners()
    }

    fn resize_debounce_ms(&self) -> f64 {
        (**self).resize_debounce_ms()
    }

    fn resize(&mut self, viewport: Viewport) {
        (**self).resize(viewport)
    }

    fn pointer(&mut self, event: PointerEvent) {
        (**self).pointer(event)
    }

    fn set_progress(&mut self, progress: f64) {
        (**self).set_progress(progress)
    }

    fn step(&mut self, now_ms: f64) {
        (**self).step(now_ms)
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        (**self).render(canvas)
    }
}

pub struct EffectHost<E: Effect> {
    effect: E,
    frame_loop: FrameLoop,
    debouncer: ResizeDebouncer,
    listeners: Vec<Listener>,
    bounds: Viewport,   // latest measured container box, used for pointer mapping
    viewport: Viewport, // box the effect is currently laid out for
    mounted: bool,
}

impl<E: Effect> EffectHost<E> {
    pub fn new(effect: E) -> Self {
        let debouncer = ResizeDebouncer::new(effect.resize_debounce_ms());
        Self {
            effect,
            frame_loop: FrameLoop::new(),
            debouncer,
            listeners: Vec::new(),
            bounds: Viewport::default(),
            viewport: Viewport::default(),
            mounted: false,
        }
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    /// Attach listeners, lay out for `viewport` and request the first frame.
    /// Mounting an already mounted host returns the pending request.
    pub fn mount(&mut self, viewport: Viewport) -> FrameRequest {
        if self.mounted {
            if let Some(pending) = self.frame_loop.pending() {
                return pending;
            }
        }

        self.listeners = self.effect.listeners().to_vec();
        self.bounds = viewport;
        self.viewport = viewport;
        self.effect.resize(viewport);
        self.mounted = true;

        log::info!(
            "{}: mounted at {}x{} ({:?})",
            self.effect.name(),
            viewport.width,
            viewport.height,
            viewport.fidelity()
        );

        self.frame_loop.start()
    }

    /// Deliver an event. Returns false when nothing is listening for it.
    pub fn dispatch(&mut self, event: HostEvent, now_ms: f64) -> bool {
        if !self.mounted || !self.listeners.contains(&event.listener()) {
            return false;
        }

        let origin = self.bounds.origin();
        match event {
            HostEvent::PointerMove(client) => self.effect.pointer(PointerEvent::Move(client - origin)),
            HostEvent::TouchMove(touches) => match touches.first() {
                Some(first) => self.effect.pointer(PointerEvent::Touch(first - origin)),
                None => return false,
            },
            HostEvent::PointerLeave => self.effect.pointer(PointerEvent::Leave),
            HostEvent::Resize(viewport) => {
                self.bounds = viewport;
                self.debouncer.push(viewport, now_ms);
            }
        }
        true
    }

    pub fn set_progress(&mut self, progress: f64) {
        if self.mounted {
            self.effect.set_progress(progress);
        }
    }

    /// Run one frame for `request`. Returns the next request, or `None`
    /// when the token is stale or the host has been unmounted.
    pub fn frame(&mut self, request: FrameRequest, now_ms: f64, canvas: &mut dyn Canvas) -> Option<FrameRequest> {
        if !self.mounted || !self.frame_loop.fire(request) {
            return None;
        }

        if let Some(viewport) = self.debouncer.poll(now_ms) {
            log::debug!("{}: relayout to {}x{}", self.effect.name(), viewport.width, viewport.height);
            self.viewport = viewport;
            self.effect.resize(viewport);
        }

        self.effect.step(now_ms);
        self.effect.render(canvas);

        self.frame_loop.rearm()
    }

    /// Cancel the frame loop and detach every listener. Idempotent.
    pub fn unmount(&mut self) {
        self.frame_loop.cancel();
        self.debouncer.clear();
        self.listeners.clear();
        if self.mounted {
            log::info!("{}: unmounted after {} frames", self.effect.name(), self.frame_loop.frames());
        }
        self.mounted = false;
    }
}

impl<E: Effect> Drop for EffectHost<E> {
    fn drop(&mut self) {
        self.unmount();
    }
}
