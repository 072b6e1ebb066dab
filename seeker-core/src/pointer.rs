use crate::Vector2D;

/// A pointer event, already translated into surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(Vector2D),
    Move(Vector2D),
    Release(Vector2D),
}

impl PointerEvent {
    pub fn position(&self) -> Vector2D {
        match *self {
            PointerEvent::Press(p) | PointerEvent::Move(p) | PointerEvent::Release(p) => p,
        }
    }
}

/// Latest pointer position and whether the button is held.
///
/// The position is the target the entity seeks. Movement is only tracked
/// while engaged, so hovering never drags the entity along; a click or a
/// drag does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Vector2D,
    pub engaged: bool,
}

impl PointerState {
    pub fn new(position: Vector2D) -> Self {
        Self {
            position,
            engaged: false,
        }
    }

    pub fn press(&mut self, position: Vector2D) {
        self.position = position;
        self.engaged = true;
    }

    /// Returns `false` when the move was ignored because the pointer is released
    pub fn move_to(&mut self, position: Vector2D) -> bool {
        if self.engaged {
            self.position = position;
        }
        self.engaged
    }

    pub fn release(&mut self, position: Vector2D) {
        self.position = position;
        self.engaged = false;
    }

    /// Applies an event and reports whether it updated the position
    pub fn apply(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Press(p) => {
                self.press(p);
                true
            }
            PointerEvent::Move(p) => self.move_to(p),
            PointerEvent::Release(p) => {
                self.release(p);
                true
            }
        }
    }
}
