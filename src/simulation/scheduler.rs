//! Frame scheduling primitives
//!
//! `FrameLoop` is an explicit repeating frame task: it hands out one
//! `FrameRequest` token at a time, accepts only that token, and can be
//! cancelled synchronously any number of times. `ResizeDebouncer`
//! coalesces bursts of resize events into a single relayout.

use crate::simulation::host::Viewport;

/// Token for one pending frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(u64);

impl FrameRequest {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Cancelled,
}

#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    next_id: u64,
    pending: Option<FrameRequest>,
    frames: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
            next_id: 0,
            pending: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    /// Frames that actually ran since the loop was created
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Start (or restart) the loop and request the first frame
    pub fn start(&mut self) -> FrameRequest {
        self.state = LoopState::Running;
        self.request()
    }

    /// Accept a frame callback. Returns false for stale tokens or a
    /// cancelled loop, in which case the frame must not run.
    pub fn fire(&mut self, request: FrameRequest) -> bool {
        if self.state != LoopState::Running || self.pending != Some(request) {
            return false;
        }
        self.pending = None;
        self.frames += 1;
        true
    }

    /// Re-request at the end of a frame that ran
    pub fn rearm(&mut self) -> Option<FrameRequest> {
        if self.state != LoopState::Running {
            return None;
        }
        Some(self.request())
    }

    /// Drop the pending request. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.pending = None;
        if self.state == LoopState::Running {
            log::debug!("frame loop cancelled after {} frames", self.frames);
        }
        self.state = LoopState::Cancelled;
    }

    fn request(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);
        self.pending = Some(request);
        request
    }
}

/// Keeps only the latest size and releases it once no resize arrived for `delay_ms`
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    delay_ms: f64,
    pending: Option<(Viewport, f64)>, // latest size and the time it arrived
}

impl ResizeDebouncer {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            pending: None,
        }
    }

    pub fn push(&mut self, viewport: Viewport, now_ms: f64) {
        self.pending = Some((viewport, now_ms));
    }

    pub fn poll(&mut self, now_ms: f64) -> Option<Viewport> {
        match self.pending {
            Some((viewport, at)) if now_ms - at >= self.delay_ms => {
                self.pending = None;
                Some(viewport)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
