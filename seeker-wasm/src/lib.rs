use seeker_core::{FrameLoop, PointerEvent, Scene, SeekerConfig, StopFlag, Vector2D};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent, TouchEvent};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

pub mod canvas_surface;

pub use canvas_surface::CanvasSurface;

/// Everything touched by both the pointer handlers and the frame callback
struct GameState {
    scene: Scene,
    surface: CanvasSurface,
    frame_loop: FrameLoop,
    fps: FpsCounter,
}

impl GameState {
    fn tick(&mut self, stop: &StopFlag) -> bool {
        let rendered = self.frame_loop.tick(&mut self.scene, &mut self.surface, stop);
        if rendered {
            self.fps.frame(js_sys::Date::now());
        }
        rendered
    }
}

/// Frames per second, averaged over roughly one second
#[derive(Default)]
struct FpsCounter {
    frames: u32,
    window_start: f64,
    fps: f64,
}

impl FpsCounter {
    fn frame(&mut self, now_ms: f64) {
        if self.window_start == 0.0 {
            self.window_start = now_ms;
            return;
        }
        self.frames += 1;

        let elapsed = now_ms - self.window_start;
        if elapsed >= 1000.0 {
            self.fps = self.frames as f64 * 1000.0 / elapsed;
            self.frames = 0;
            self.window_start = now_ms;
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[wasm_bindgen]
pub struct SeekerGame {
    state: Rc<RefCell<GameState>>,
    canvas: HtmlCanvasElement,
    callback: FrameCallback,
    looping: Rc<Cell<bool>>,
    stop: Rc<StopFlag>,
}

#[wasm_bindgen]
impl SeekerGame {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, width: f64, height: f64) -> Result<SeekerGame, JsValue> {
        console_log!("Initializing seeker on #{} ({}x{})", canvas_id, width, height);

        let window = web_sys::window().ok_or("no global window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        // element size and drawing buffer size are kept identical
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let context = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let config = SeekerConfig {
            width: width as f32,
            height: height as f32,
            ..Default::default()
        };
        let scene = Scene::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let surface = CanvasSurface::new(context, width, height, config.line_width as f64);

        let mut state = GameState {
            scene,
            surface,
            frame_loop: FrameLoop::new(),
            fps: FpsCounter::default(),
        };
        let stop = Rc::new(StopFlag::new());
        // show the entity straight away, before the first animation frame
        state.tick(&stop);

        Ok(SeekerGame {
            state: Rc::new(RefCell::new(state)),
            canvas,
            callback: Rc::new(RefCell::new(None)),
            looping: Rc::new(Cell::new(false)),
            stop,
        })
    }

    /// Renders a single frame outside the animation loop
    pub fn frame(&mut self) -> bool {
        self.state.borrow_mut().tick(&self.stop)
    }

    /// Starts the animation loop; it re-registers itself every frame until `stop`
    pub fn start(&mut self) -> Result<(), JsValue> {
        self.stop.resume();
        if self.looping.get() {
            return Ok(());
        }

        if self.callback.borrow().is_none() {
            let state = Rc::clone(&self.state);
            let callback = Rc::clone(&self.callback);
            let looping = Rc::clone(&self.looping);
            let stop = Rc::clone(&self.stop);

            let closure = Closure::wrap(Box::new(move || {
                if !state.borrow_mut().tick(&stop) {
                    looping.set(false);
                    console_log!("Animation loop stopped");
                    return;
                }
                if let Some(next) = callback.borrow().as_ref() {
                    if let Err(err) = request_animation_frame(next) {
                        looping.set(false);
                        console_log!("Failed to schedule frame: {:?}", err);
                    }
                }
            }) as Box<dyn FnMut()>);

            *self.callback.borrow_mut() = Some(closure);
        }

        if let Some(callback) = self.callback.borrow().as_ref() {
            request_animation_frame(callback)?;
        }
        self.looping.set(true);
        console_log!("Animation loop started");
        Ok(())
    }

    /// The loop finishes at the next animation frame
    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn is_running(&self) -> bool {
        self.looping.get() && !self.stop.is_stopped()
    }

    pub fn press_at(&mut self, x: f64, y: f64) {
        self.pointer(PointerEvent::Press(Vector2D::new(x as f32, y as f32)));
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pointer(PointerEvent::Move(Vector2D::new(x as f32, y as f32)));
    }

    pub fn release_at(&mut self, x: f64, y: f64) {
        self.pointer(PointerEvent::Release(Vector2D::new(x as f32, y as f32)));
    }

    pub fn handle_mouse_down(&mut self, event: MouseEvent) {
        self.press_at(event.offset_x() as f64, event.offset_y() as f64);
    }

    pub fn handle_mouse_move(&mut self, event: MouseEvent) {
        self.move_to(event.offset_x() as f64, event.offset_y() as f64);
    }

    pub fn handle_mouse_up(&mut self, event: MouseEvent) {
        self.release_at(event.offset_x() as f64, event.offset_y() as f64);
    }

    pub fn handle_touch_start(&mut self, event: TouchEvent) {
        if let Some((x, y)) = self.first_touch(&event) {
            self.press_at(x, y);
        }
    }

    pub fn handle_touch_move(&mut self, event: TouchEvent) {
        if let Some((x, y)) = self.first_touch(&event) {
            self.move_to(x, y);
        }
    }

    pub fn handle_touch_end(&mut self, event: TouchEvent) {
        if let Some((x, y)) = self.first_touch(&event) {
            self.release_at(x, y);
        }
    }

    pub fn entity_x(&self) -> f64 {
        self.state.borrow().scene.entity.position.x as f64
    }

    pub fn entity_y(&self) -> f64 {
        self.state.borrow().scene.entity.position.y as f64
    }

    pub fn pointer_engaged(&self) -> bool {
        self.state.borrow().scene.pointer.engaged
    }

    pub fn frame_count(&self) -> f64 {
        self.state.borrow().frame_loop.ticks() as f64
    }

    pub fn fps(&self) -> f64 {
        self.state.borrow().fps.fps
    }

    /// Ignores speeds the config would reject, including ones that overflow `f32`
    pub fn set_speed(&mut self, speed: f64) -> bool {
        let mut state = self.state.borrow_mut();
        let candidate = SeekerConfig {
            speed: speed as f32,
            ..state.scene.config
        };
        match candidate.validate() {
            Ok(()) => {
                state.scene.config = candidate;
                state.scene.entity.speed = candidate.speed;
                true
            }
            Err(err) => {
                console_log!("Ignoring speed {}: {}", speed, err);
                false
            }
        }
    }

    pub fn set_show_guide(&mut self, show: bool) {
        self.state.borrow_mut().scene.config.show_guide = show;
    }
}

impl SeekerGame {
    fn pointer(&mut self, event: PointerEvent) {
        self.state.borrow_mut().scene.handle_pointer(event);
    }

    /// First changed touch, in canvas-local coordinates
    fn first_touch(&self, event: &TouchEvent) -> Option<(f64, f64)> {
        let touch = event.changed_touches().item(0)?;
        let canvas_element: &Element = self.canvas.as_ref();
        let rect = canvas_element.get_bounding_client_rect();
        let x = touch.client_x() as f64 - rect.left();
        let y = touch.client_y() as f64 - rect.top();
        Some((x, y))
    }
}

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or("no global window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}
