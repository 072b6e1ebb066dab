#![cfg_attr(not(feature = "std"), no_std)]

use serde::{Deserialize, Serialize};

/// Represents a 2D position in surface-local coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another position
    pub fn distance_to(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        libm::hypotf(dx, dy)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PointerAction {
    Press,
    Move,
    Release,
}

/// A pointer event delivered to the scene at a given frame
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScriptedEvent {
    /// Frame before which the event is delivered
    pub frame: u64,
    pub action: PointerAction,
    pub position: Position,
}

impl ScriptedEvent {
    pub fn new(frame: u64, action: PointerAction, position: Position) -> Self {
        Self {
            frame,
            action,
            position,
        }
    }
}

/// Pointer input recorded as a list of frame-stamped events
#[cfg(feature = "std")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventScript {
    pub events: Vec<ScriptedEvent>,
}

#[cfg(feature = "std")]
impl EventScript {
    pub fn new(mut events: Vec<ScriptedEvent>) -> Self {
        // stable, so events sharing a frame keep their recorded order
        events.sort_by_key(|event| event.frame);
        Self { events }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let script: EventScript = serde_json::from_str(json)?;
        Ok(Self::new(script.events))
    }

    pub fn last_frame(&self) -> Option<u64> {
        self.events.last().map(|event| event.frame)
    }
}

/// Seeker configuration as stored in settings files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeekerSettings {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub capture_radius: f32,
    pub fill_alpha: f32,
    pub line_width: f32,
    pub show_guide: bool,
}

impl Default for SeekerSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            speed: 50.0,
            capture_radius: 30.0,
            fill_alpha: 0.5,
            line_width: 3.0,
            show_guide: true,
        }
    }
}

/// State of the scene after a rendered frame
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub entity: Position,
    pub pointer: Position,
    pub engaged: bool,
    pub arrived: bool,
}
