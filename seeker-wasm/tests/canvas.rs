use seeker_wasm::SeekerGame;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Adds a canvas with the given id to the test page
fn mount_canvas(id: &str) {
    let window = web_sys::window().expect("no global window");
    let document = window.document().expect("no document");
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
}

#[wasm_bindgen_test]
fn test_game_initializes_centred() {
    mount_canvas("seeker-init");

    let game = SeekerGame::new("seeker-init", 1280.0, 720.0).expect("game should initialize");

    assert_eq!(game.entity_x(), 640.0);
    assert_eq!(game.entity_y(), 360.0);
    assert!(!game.pointer_engaged());
    // the first frame is drawn during construction
    assert_eq!(game.frame_count(), 1.0);
}

#[wasm_bindgen_test]
fn test_missing_canvas_is_an_error() {
    assert!(SeekerGame::new("does-not-exist", 1280.0, 720.0).is_err());
}

#[wasm_bindgen_test]
fn test_drag_moves_entity() {
    mount_canvas("seeker-drag");
    let mut game = SeekerGame::new("seeker-drag", 1280.0, 720.0).unwrap();

    game.press_at(640.0, 460.0);
    assert!(game.pointer_engaged());

    game.frame();
    assert_eq!(game.entity_y(), 410.0);

    // exactly one step away counts as arrived
    game.frame();
    assert_eq!(game.entity_y(), 410.0);

    game.move_to(640.0, 560.0);
    game.frame();
    assert_eq!(game.entity_y(), 460.0);

    game.release_at(640.0, 560.0);
    assert!(!game.pointer_engaged());
}

#[wasm_bindgen_test]
fn test_hover_is_ignored() {
    mount_canvas("seeker-hover");
    let mut game = SeekerGame::new("seeker-hover", 1280.0, 720.0).unwrap();

    game.move_to(0.0, 0.0);
    game.frame();

    assert_eq!(game.entity_x(), 640.0);
    assert_eq!(game.entity_y(), 360.0);
}

#[wasm_bindgen_test]
fn test_set_speed_rejects_values_overflowing_f32() {
    mount_canvas("seeker-speed");
    let mut game = SeekerGame::new("seeker-speed", 1280.0, 720.0).unwrap();

    assert!(!game.set_speed(1.0e300));
    assert!(!game.set_speed(-5.0));

    game.press_at(640.0, 560.0);
    game.frame();
    assert_eq!(game.entity_y(), 410.0);

    assert!(game.set_speed(25.0));
    game.frame();
    assert_eq!(game.entity_y(), 435.0);
}

#[wasm_bindgen_test]
fn test_stop_halts_frames() {
    mount_canvas("seeker-stop");
    let mut game = SeekerGame::new("seeker-stop", 1280.0, 720.0).unwrap();

    game.start().unwrap();
    assert!(game.is_running());

    game.stop();
    assert!(!game.is_running());
    assert!(!game.frame());
}
