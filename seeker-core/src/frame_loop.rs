use crate::{Scene, Surface};
use core::sync::atomic::{AtomicBool, Ordering};

/// Cancellation flag for a [`FrameLoop`].
///
/// Owned by whoever schedules frames and handed to every tick, so a stop can
/// come from an event callback, the surface, or another thread mid-run.
#[derive(Debug, Default)]
pub struct StopFlag(AtomicBool);

impl StopFlag {
    pub fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn resume(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Drives a scene one frame per tick until stopped.
///
/// The host scheduler (an animation-frame callback, or a plain loop when
/// headless) calls [`FrameLoop::tick`] and keeps going while it returns `true`.
#[derive(Debug, Default)]
pub struct FrameLoop {
    ticks: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Clears the surface and renders one frame. Does nothing once `stop` is set.
    pub fn tick<S: Surface + ?Sized>(
        &mut self,
        scene: &mut Scene,
        surface: &mut S,
        stop: &StopFlag,
    ) -> bool {
        if stop.is_stopped() {
            return false;
        }

        surface.clear();
        scene.render_frame(surface);
        self.ticks += 1;
        true
    }

    /// Ticks until `stop` is set or until `limit` frames have run. Returns the
    /// number of frames rendered by this call.
    pub fn run<S: Surface + ?Sized>(
        &mut self,
        scene: &mut Scene,
        surface: &mut S,
        stop: &StopFlag,
        limit: Option<u64>,
    ) -> u64 {
        let mut rendered = 0;
        while limit.map_or(true, |max| rendered < max) {
            if !self.tick(scene, surface, stop) {
                break;
            }
            rendered += 1;
        }
        rendered
    }
}
