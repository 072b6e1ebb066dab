use anyhow::{Context, Result};
use seeker_core::{PointerEvent, SeekerConfig, Vector2D};
use seeker_shared::{EventScript, PointerAction, Position, ScriptedEvent, SeekerSettings};
use std::path::Path;

pub mod runner;

pub use runner::{HeadlessRunner, RunReport};

pub fn to_vector(position: Position) -> Vector2D {
    Vector2D::new(position.x, position.y)
}

pub fn to_position(vector: Vector2D) -> Position {
    Position::new(vector.x, vector.y)
}

pub fn to_pointer_event(event: &ScriptedEvent) -> PointerEvent {
    let position = to_vector(event.position);
    match event.action {
        PointerAction::Press => PointerEvent::Press(position),
        PointerAction::Move => PointerEvent::Move(position),
        PointerAction::Release => PointerEvent::Release(position),
    }
}

/// Converts and validates settings loaded from a file or the command line
pub fn config_from_settings(settings: &SeekerSettings) -> Result<SeekerConfig> {
    let config = SeekerConfig {
        width: settings.width,
        height: settings.height,
        speed: settings.speed,
        capture_radius: settings.capture_radius,
        fill_alpha: settings.fill_alpha,
        line_width: settings.line_width,
        show_guide: settings.show_guide,
    };
    config.validate().context("Invalid seeker settings")?;
    Ok(config)
}

pub fn load_settings(path: &Path) -> Result<SeekerSettings> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))
}

pub fn load_script(path: &Path) -> Result<EventScript> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event script {}", path.display()))?;
    let script = EventScript::from_json(&json)
        .with_context(|| format!("Failed to parse event script {}", path.display()))?;

    if let Some(bad) = script
        .events
        .iter()
        .find(|event| !(event.position.x.is_finite() && event.position.y.is_finite()))
    {
        anyhow::bail!(
            "Event script {} has a non-finite position at frame {}",
            path.display(),
            bad.frame
        );
    }

    log::debug!(
        "Loaded {} scripted events from {}",
        script.events.len(),
        path.display()
    );
    Ok(script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_event_conversion() {
        let event = ScriptedEvent::new(0, PointerAction::Move, Position::new(3.0, 4.0));
        assert_eq!(
            to_pointer_event(&event),
            PointerEvent::Move(Vector2D::new(3.0, 4.0))
        );
    }

    #[test]
    fn test_default_settings_match_default_config() {
        let config = config_from_settings(&SeekerSettings::default()).unwrap();
        assert_eq!(config, SeekerConfig::default());
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let settings = SeekerSettings {
            capture_radius: 0.0,
            ..Default::default()
        };
        let err = config_from_settings(&settings).unwrap_err();
        assert_eq!(err.to_string(), "Invalid seeker settings");
    }
}
