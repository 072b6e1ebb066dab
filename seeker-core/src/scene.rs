use crate::{ConfigError, PointerEvent, PointerState, SeekerConfig, SeekingEntity, Surface};

/// Owns the entity and the pointer it chases.
///
/// The entity never holds a reference back to the scene; pointer state is
/// handed to it on every draw and step.
#[derive(Debug, Clone)]
pub struct Scene {
    pub config: SeekerConfig,
    pub entity: SeekingEntity,
    pub pointer: PointerState,
}

impl Scene {
    /// Both the entity and the pointer start at the centre of the surface
    pub fn new(config: SeekerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            entity: SeekingEntity::from_config(&config),
            pointer: PointerState::new(config.center()),
            config,
        })
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        self.pointer.apply(event)
    }

    /// Draws the current state, then advances the entity one frame.
    ///
    /// What gets drawn is the position before this frame's step.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.entity.draw(surface, self.pointer.position, &self.config);
        self.entity.step(self.pointer.position);
    }

    pub fn is_idle(&self) -> bool {
        self.entity.is_arrived(self.pointer.position)
    }
}
