use crate::{SeekerConfig, Surface, Vector2D};
use core::f32::consts::TAU;

/// The circular entity that chases the pointer.
///
/// Motion is constant-speed: every step covers exactly `speed` units along
/// the straight line to the target, until the target is within `speed`, at
/// which point the entity stops where it is. Scaling the step by the
/// remaining distance would decelerate towards the target instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SeekingEntity {
    pub position: Vector2D,
    pub capture_radius: f32,
    pub velocity: Vector2D,
    pub speed: f32,
}

impl SeekingEntity {
    pub fn new(position: Vector2D, capture_radius: f32, speed: f32) -> Self {
        Self {
            position,
            capture_radius,
            velocity: Vector2D::zero(),
            speed,
        }
    }

    pub fn from_config(config: &SeekerConfig) -> Self {
        Self::new(config.center(), config.capture_radius, config.speed)
    }

    /// Advances one frame towards `target` and returns the new position.
    ///
    /// A target at exactly `speed` away counts as arrived.
    pub fn step(&mut self, target: Vector2D) -> Vector2D {
        let offset = target - self.position;
        let distance = offset.magnitude();

        self.velocity = if distance > self.speed {
            (offset / distance).finite_or_zero()
        } else {
            Vector2D::zero()
        };

        self.position += self.velocity * self.speed;
        self.position
    }

    pub fn distance_to(&self, target: Vector2D) -> f32 {
        self.position.distance(&target)
    }

    pub fn is_arrived(&self, target: Vector2D) -> bool {
        self.distance_to(target) <= self.speed
    }

    /// Draws the hit circle and, when enabled, a guide line to `target`
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        target: Vector2D,
        config: &SeekerConfig,
    ) {
        surface.begin_path();
        surface.arc(self.position, self.capture_radius, 0.0, TAU);
        surface.fill(config.fill_alpha);
        surface.stroke();

        if config.show_guide {
            surface.begin_path();
            surface.move_to(self.position);
            surface.line_to(target);
            surface.stroke();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrawCommand, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPSILON: f32 = 0.01;

    fn entity_at(x: f32, y: f32) -> SeekingEntity {
        SeekingEntity::new(Vector2D::new(x, y), 30.0, 50.0)
    }

    #[test]
    fn test_entity_creation() {
        let entity = SeekingEntity::from_config(&SeekerConfig::default());
        assert_eq!(entity.position, Vector2D::new(640.0, 360.0));
        assert_eq!(entity.capture_radius, 30.0);
        assert_eq!(entity.speed, 50.0);
        assert_eq!(entity.velocity, Vector2D::zero());
    }

    #[test]
    fn test_step_moves_constant_distance() {
        let mut entity = entity_at(0.0, 0.0);
        let target = Vector2D::new(300.0, 400.0);

        let position = entity.step(target);

        assert!((position.x - 30.0).abs() < EPSILON);
        assert!((position.y - 40.0).abs() < EPSILON);
        assert!((entity.velocity.magnitude() - 1.0).abs() < 0.0001);
        assert!((entity.distance_to(target) - 450.0).abs() < EPSILON);
    }

    #[test]
    fn test_step_within_speed_holds_position() {
        let mut entity = entity_at(100.0, 100.0);
        let target = Vector2D::new(120.0, 130.0);

        entity.step(target);

        assert_eq!(entity.velocity, Vector2D::zero());
        assert_eq!(entity.position, Vector2D::new(100.0, 100.0));
    }

    #[test]
    fn test_step_onto_own_position() {
        let mut entity = entity_at(10.0, 10.0);
        entity.step(Vector2D::new(10.0, 10.0));

        assert_eq!(entity.velocity, Vector2D::zero());
        assert_eq!(entity.position, Vector2D::new(10.0, 10.0));
        assert!(entity.position.is_finite());
    }

    #[test]
    fn test_overflowing_offset_holds_position() {
        // the offset overflows to infinity, so the direction is NaN
        let mut entity = entity_at(-3.0e38, 0.0);
        entity.step(Vector2D::new(3.0e38, 3.0e38));

        assert_eq!(entity.velocity, Vector2D::zero());
        assert!(entity.position.is_finite());
        assert_eq!(entity.position, Vector2D::new(-3.0e38, 0.0));
    }

    #[test]
    fn test_exact_speed_distance_counts_as_arrived() {
        let mut entity = entity_at(640.0, 410.0);
        let target = Vector2D::new(640.0, 460.0);

        assert!(entity.is_arrived(target));
        entity.step(target);

        assert_eq!(entity.velocity, Vector2D::zero());
        assert_eq!(entity.position, Vector2D::new(640.0, 410.0));
    }

    #[test]
    fn test_center_to_target_below() {
        let mut entity = entity_at(640.0, 360.0);
        let target = Vector2D::new(640.0, 460.0);

        assert_eq!(entity.step(target), Vector2D::new(640.0, 410.0));
        assert_eq!(entity.step(target), Vector2D::new(640.0, 410.0));
        assert_eq!(entity.velocity, Vector2D::zero());

        for _ in 0..10 {
            assert_eq!(entity.step(target), Vector2D::new(640.0, 410.0));
        }
    }

    #[test]
    fn test_idempotent_at_rest() {
        let mut entity = entity_at(0.0, 0.0);
        let target = Vector2D::new(-333.0, 127.0);

        while !entity.is_arrived(target) {
            entity.step(target);
        }
        let resting = entity.position;

        for _ in 0..50 {
            entity.step(target);
            assert_eq!(entity.position, resting);
        }
    }

    #[test]
    fn test_random_targets_move_exactly_speed() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let mut entity = entity_at(rng.gen_range(0.0..1280.0), rng.gen_range(0.0..720.0));
            let target = Vector2D::new(rng.gen_range(0.0..1280.0), rng.gen_range(0.0..720.0));
            let before = entity.distance_to(target);
            let start = entity.position;

            entity.step(target);

            if before > entity.speed {
                let after = entity.distance_to(target);
                assert!((before - entity.speed - after).abs() < EPSILON);

                let expected_direction = (target - start).normalize();
                assert!((entity.velocity.x - expected_direction.x).abs() < 0.0001);
                assert!((entity.velocity.y - expected_direction.y).abs() < 0.0001);
            } else {
                assert_eq!(entity.velocity, Vector2D::zero());
                assert_eq!(entity.position, start);
            }
        }
    }

    #[test]
    fn test_distance_never_increases() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let mut entity =
                entity_at(rng.gen_range(-2000.0..2000.0), rng.gen_range(-2000.0..2000.0));
            let target =
                Vector2D::new(rng.gen_range(-2000.0..2000.0), rng.gen_range(-2000.0..2000.0));
            let mut previous = entity.distance_to(target);

            for _ in 0..200 {
                entity.step(target);
                let current = entity.distance_to(target);
                assert!(!current.is_nan());
                assert!(current >= 0.0);
                assert!(current <= previous + EPSILON);
                previous = current;
            }

            assert!(entity.is_arrived(target));
        }
    }

    #[test]
    fn test_draw_with_guide() {
        let entity = entity_at(10.0, 20.0);
        let target = Vector2D::new(100.0, 20.0);
        let mut surface = RecordingSurface::<16>::new();

        entity.draw(&mut surface, target, &SeekerConfig::default());

        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::BeginPath,
                DrawCommand::Arc {
                    center: Vector2D::new(10.0, 20.0),
                    radius: 30.0,
                    start_angle: 0.0,
                    end_angle: TAU,
                },
                DrawCommand::Fill { alpha: 0.5 },
                DrawCommand::Stroke,
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(Vector2D::new(10.0, 20.0)),
                DrawCommand::LineTo(Vector2D::new(100.0, 20.0)),
                DrawCommand::Stroke,
            ]
        );
    }

    #[test]
    fn test_draw_without_guide() {
        let entity = entity_at(10.0, 20.0);
        let config = SeekerConfig {
            show_guide: false,
            ..Default::default()
        };
        let mut surface = RecordingSurface::<16>::new();

        entity.draw(&mut surface, Vector2D::zero(), &config);

        assert_eq!(surface.commands().len(), 4);
        assert_eq!(surface.commands()[3], DrawCommand::Stroke);
    }
}
