use crate::{to_pointer_event, to_position};
use anyhow::{Context, Result};
use seeker_core::{FrameLoop, RecordingSurface, Scene, SeekerConfig, StopFlag};
use seeker_shared::{EventScript, FrameSnapshot};
use serde::Serialize;
use std::sync::Arc;

/// Room for one frame: clear, hit circle and guide line
const FRAME_COMMANDS: usize = 16;

/// Result of a headless run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub frames: Vec<FrameSnapshot>,
    /// Set when the run ended before the frame limit because the entity
    /// came to rest after the last scripted event
    pub settled: bool,
}

impl RunReport {
    pub fn final_frame(&self) -> Option<&FrameSnapshot> {
        self.frames.last()
    }
}

/// Replays a pointer script against a scene without a browser
pub struct HeadlessRunner {
    scene: Scene,
    frame_loop: FrameLoop,
    stop: Arc<StopFlag>,
    surface: RecordingSurface<FRAME_COMMANDS>,
    script: EventScript,
    next_event: usize,
    stop_when_settled: bool,
}

impl HeadlessRunner {
    pub fn new(config: SeekerConfig, script: EventScript) -> Result<Self> {
        let scene = Scene::new(config).context("Failed to create scene")?;

        Ok(Self {
            scene,
            frame_loop: FrameLoop::new(),
            stop: Arc::new(StopFlag::new()),
            surface: RecordingSurface::new(),
            script,
            next_event: 0,
            stop_when_settled: false,
        })
    }

    /// Stop early once the script is exhausted and the entity has arrived
    pub fn stop_when_settled(mut self, enabled: bool) -> Self {
        self.stop_when_settled = enabled;
        self
    }

    /// Handle that ends a run at the next frame boundary, from any thread
    pub fn stop_handle(&self) -> Arc<StopFlag> {
        Arc::clone(&self.stop)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn surface(&self) -> &RecordingSurface<FRAME_COMMANDS> {
        &self.surface
    }

    /// Delivers every event stamped at or before the upcoming frame
    fn deliver_events(&mut self) {
        let frame = self.frame_loop.ticks();
        while let Some(event) = self.script.events.get(self.next_event) {
            if event.frame > frame {
                break;
            }
            let accepted = self.scene.handle_pointer(to_pointer_event(event));
            log::debug!(
                "Frame {}: {:?} at ({}, {}){}",
                frame,
                event.action,
                event.position.x,
                event.position.y,
                if accepted { "" } else { " ignored" }
            );
            self.next_event += 1;
        }
    }

    fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frame_loop.ticks(),
            entity: to_position(self.scene.entity.position),
            pointer: to_position(self.scene.pointer.position),
            engaged: self.scene.pointer.engaged,
            arrived: self.scene.is_idle(),
        }
    }

    pub fn run(&mut self, max_frames: u64) -> RunReport {
        let mut frames = Vec::new();
        let mut settled = false;

        for _ in 0..max_frames {
            self.deliver_events();

            if !self.frame_loop.tick(&mut self.scene, &mut self.surface, &self.stop) {
                break;
            }
            if self.surface.overflowed() > 0 {
                log::warn!(
                    "Dropped {} draw commands in frame {}",
                    self.surface.overflowed(),
                    self.frame_loop.ticks()
                );
            }

            let snapshot = self.snapshot();
            log::trace!("{:?}", snapshot);
            frames.push(snapshot);

            let script_done = self.next_event >= self.script.events.len();
            if self.stop_when_settled && script_done && self.scene.is_idle() {
                log::info!("Entity settled after {} frames", self.frame_loop.ticks());
                self.stop.stop();
                settled = true;
            }
        }

        RunReport { frames, settled }
    }
}
