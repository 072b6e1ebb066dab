use crate::Vector2D;

/// A 2D drawing surface.
///
/// Fill and stroke colours and the outline width are owned by the surface and
/// set once up front. `fill` takes the opacity for that single call only; the
/// surface must not leak it into later calls.
pub trait Surface {
    /// Erases the whole surface
    fn clear(&mut self);
    fn begin_path(&mut self);
    fn arc(&mut self, center: Vector2D, radius: f32, start_angle: f32, end_angle: f32);
    fn move_to(&mut self, point: Vector2D);
    fn line_to(&mut self, point: Vector2D);
    fn fill(&mut self, alpha: f32);
    fn stroke(&mut self);
}

/// A single call made against a [`Surface`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear,
    BeginPath,
    Arc {
        center: Vector2D,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    MoveTo(Vector2D),
    LineTo(Vector2D),
    Fill { alpha: f32 },
    Stroke,
}

/// Surface that records commands into a fixed-capacity buffer.
///
/// `clear` drops everything recorded so far, the same way a real surface
/// loses its previous contents, so a buffer sized for one frame never fills
/// up across frames. Commands that don't fit are counted in `overflowed`.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface<const N: usize> {
    commands: heapless::Vec<DrawCommand, N>,
    overflowed: usize,
}

impl<const N: usize> RecordingSurface<N> {
    pub fn new() -> Self {
        Self {
            commands: heapless::Vec::new(),
            overflowed: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn overflowed(&self) -> usize {
        self.overflowed
    }

    fn record(&mut self, command: DrawCommand) {
        if self.commands.push(command).is_err() {
            self.overflowed += 1;
        }
    }
}

impl<const N: usize> Surface for RecordingSurface<N> {
    fn clear(&mut self) {
        self.commands.clear();
        self.overflowed = 0;
        self.record(DrawCommand::Clear);
    }

    fn begin_path(&mut self) {
        self.record(DrawCommand::BeginPath);
    }

    fn arc(&mut self, center: Vector2D, radius: f32, start_angle: f32, end_angle: f32) {
        self.record(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn move_to(&mut self, point: Vector2D) {
        self.record(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Vector2D) {
        self.record(DrawCommand::LineTo(point));
    }

    fn fill(&mut self, alpha: f32) {
        self.record(DrawCommand::Fill { alpha });
    }

    fn stroke(&mut self) {
        self.record(DrawCommand::Stroke);
    }
}
