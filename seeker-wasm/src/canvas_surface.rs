use seeker_core::{Surface, Vector2D};
use web_sys::CanvasRenderingContext2d;

/// [`Surface`] backed by a 2D canvas context
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Sets fill, stroke and line width once; per-frame draws only touch alpha
    pub fn new(
        context: CanvasRenderingContext2d,
        width: f64,
        height: f64,
        line_width: f64,
    ) -> Self {
        context.set_fill_style_str("white");
        context.set_stroke_style_str("white");
        context.set_line_width(line_width);

        Self {
            context,
            width,
            height,
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn arc(&mut self, center: Vector2D, radius: f32, start_angle: f32, end_angle: f32) {
        if let Err(err) = self.context.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            start_angle as f64,
            end_angle as f64,
        ) {
            console_log!("arc failed: {:?}", err);
        }
    }

    fn move_to(&mut self, point: Vector2D) {
        self.context.move_to(point.x as f64, point.y as f64);
    }

    fn line_to(&mut self, point: Vector2D) {
        self.context.line_to(point.x as f64, point.y as f64);
    }

    fn fill(&mut self, alpha: f32) {
        // save/restore keeps the alpha from leaking into the stroke
        self.context.save();
        self.context.set_global_alpha(alpha as f64);
        self.context.fill();
        self.context.restore();
    }

    fn stroke(&mut self) {
        self.context.stroke();
    }
}
