//! End-to-end camera behavior through the public input API

use field_camera::app::input::{
    CAMERA_HANDLER_NAME, CameraController, ControllerSettings, Directions, InputCollector,
    InputContext, InputSource, PointerId, PointerTable,
};
use field_camera::sim::{Bounds, MAX_ZOOM, MIN_ZOOM, World};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use winit::event::TouchPhase;

const EPS: f32 = 1e-4;

fn world() -> World {
    World::new(2000.0, 2000.0).unwrap()
}

fn controller() -> CameraController {
    CameraController::init(
        world(),
        [800.0, 600.0],
        &InputCollector::default(),
        ControllerSettings::default(),
    )
    .unwrap()
}

fn touches(points: &[[f32; 2]]) -> PointerTable {
    let mut table = PointerTable::default();
    for (i, p) in points.iter().enumerate() {
        table.press(PointerId::Touch(i as u64), *p);
    }
    table
}

#[test]
fn clamp_scenario_far_right() {
    let mut cam = controller();
    cam.viewport_mut().set_scroll(5000.0, 0.0);
    assert_eq!(cam.viewport().scroll()[0], 2000.0 - 800.0);
}

#[test]
fn opposing_keys_cancel() {
    let mut cam = controller();
    let before = cam.viewport().scroll();
    cam.on_key_down(Directions::LEFT);
    cam.on_key_down(Directions::RIGHT);
    cam.on_key_down(Directions::UP);
    cam.on_key_down(Directions::DOWN);
    cam.on_tick(0.5, &PointerTable::default());
    assert_eq!(cam.viewport().scroll(), before);
}

#[test]
fn diagonal_pan_moves_both_axes() {
    let mut cam = controller();
    let before = cam.viewport().scroll();
    cam.on_key_down(Directions::LEFT | Directions::DOWN);
    cam.on_tick(0.25, &PointerTable::default());
    let after = cam.viewport().scroll();
    assert!((after[0] - (before[0] - 200.0)).abs() < EPS);
    assert!((after[1] - (before[1] + 200.0)).abs() < EPS);
}

#[test]
fn drag_moves_camera_against_pointer() {
    let mut cam = controller();
    let before = cam.viewport().scroll();
    cam.on_pointer_down([100.0, 100.0]);
    cam.on_pointer_move([80.0, 100.0], true);
    assert_eq!(cam.viewport().scroll(), [before[0] + 20.0, before[1]]);
}

#[test]
fn drag_is_scaled_by_zoom() {
    let mut cam = controller();
    cam.viewport_mut().set_zoom(2.0);
    let before = cam.viewport().scroll();
    cam.on_pointer_down([100.0, 100.0]);
    cam.on_pointer_move([100.0, 140.0], true);
    assert_eq!(cam.viewport().scroll(), [before[0], before[1] - 20.0]);
}

#[test]
fn pinch_spread_zooms_in() {
    let mut cam = controller();
    cam.on_tick(0.0, &touches(&[[0.0, 0.0], [100.0, 0.0]]));
    assert_eq!(cam.viewport().zoom(), 1.0);
    cam.on_tick(0.0, &touches(&[[0.0, 0.0], [150.0, 0.0]]));
    assert!((cam.viewport().zoom() - 1.2).abs() < EPS);
    cam.on_tick(0.0, &touches(&[[0.0, 0.0], [100.0, 0.0]]));
    assert!((cam.viewport().zoom() - 1.0).abs() < EPS);
}

#[test]
fn pinch_clamps_at_max_zoom() {
    let mut cam = controller();
    cam.on_tick(0.0, &touches(&[[0.0, 0.0], [10.0, 0.0]]));
    cam.on_tick(0.0, &touches(&[[0.0, 0.0], [5000.0, 0.0]]));
    assert_eq!(cam.viewport().zoom(), MAX_ZOOM);
}

#[test]
fn single_touch_is_not_a_pinch() {
    let mut cam = controller();
    cam.on_tick(0.0, &touches(&[[0.0, 0.0], [100.0, 0.0]]));
    cam.on_tick(0.0, &touches(&[[0.0, 0.0]]));
    assert_eq!(cam.pinch().last_distance(), None);
    assert_eq!(cam.viewport().zoom(), 1.0);
}

#[test]
fn pointer_up_resets_pinch_baseline() {
    let mut cam = controller();
    cam.on_tick(0.0, &touches(&[[0.0, 0.0], [100.0, 0.0]]));
    cam.on_pointer_up();
    cam.on_tick(0.0, &touches(&[[0.0, 0.0], [200.0, 0.0]]));
    assert_eq!(cam.viewport().zoom(), 1.0);
    assert_eq!(cam.pinch().last_distance(), Some(200.0));
}

#[test]
fn wheel_steps_ignore_magnitude() {
    let mut cam = controller();
    cam.on_wheel(1.0);
    assert!((cam.viewport().zoom() - 0.9).abs() < EPS);
    cam.on_wheel(-5000.0);
    assert!((cam.viewport().zoom() - 1.0).abs() < EPS);

    for _ in 0..100 {
        cam.on_wheel(3.0);
    }
    assert_eq!(cam.viewport().zoom(), MIN_ZOOM);
    for _ in 0..100 {
        cam.on_wheel(-0.01);
    }
    assert_eq!(cam.viewport().zoom(), MAX_ZOOM);
}

#[test]
fn keyboard_is_required() {
    let result = CameraController::init(
        world(),
        [800.0, 600.0],
        &InputCollector::new(false, 3),
        ControllerSettings::default(),
    );
    assert!(result.is_err());
}

fn pump(collector: &mut InputCollector, context: &mut InputContext) {
    for event in collector.drain_events() {
        context.dispatch(&event, collector.state());
    }
}

#[test]
fn collector_to_camera_pipeline() {
    let mut collector = InputCollector::default();
    let camera = CameraController::init(
        world(),
        [800.0, 600.0],
        &collector,
        ControllerSettings::default(),
    )
    .unwrap();
    let mut context = InputContext::new();
    context.register_handler(Box::new(camera));

    // Two fingers land and spread apart over two frames
    collector.touch(7, TouchPhase::Started, [100.0, 100.0]);
    collector.touch(8, TouchPhase::Started, [200.0, 100.0]);
    pump(&mut collector, &mut context);
    context.tick(collector.state(), 0.016);

    collector.touch(8, TouchPhase::Moved, [250.0, 100.0]);
    pump(&mut collector, &mut context);
    context.tick(collector.state(), 0.016);

    let zoom = context
        .handler::<CameraController>(CAMERA_HANDLER_NAME)
        .unwrap()
        .viewport()
        .zoom();
    assert!((zoom - 1.2).abs() < EPS, "zoom was {zoom}");

    // Lifting a finger ends the gesture
    collector.touch(8, TouchPhase::Ended, [250.0, 100.0]);
    pump(&mut collector, &mut context);
    context.tick(collector.state(), 0.016);
    let camera = context
        .handler::<CameraController>(CAMERA_HANDLER_NAME)
        .unwrap();
    assert_eq!(camera.pinch().last_distance(), None);
}

#[test]
fn click_before_first_cursor_move_does_not_jump() {
    let mut collector = InputCollector::default();
    let camera = CameraController::init(
        world(),
        [800.0, 600.0],
        &collector,
        ControllerSettings::default(),
    )
    .unwrap();
    let mut context = InputContext::new();
    context.register_handler(Box::new(camera));
    let scroll_of = |context: &InputContext| {
        context
            .handler::<CameraController>(CAMERA_HANDLER_NAME)
            .unwrap()
            .viewport()
            .scroll()
    };
    let before = scroll_of(&context);

    collector.mouse_button(true);
    collector.cursor_moved([500.0, 400.0]);
    pump(&mut collector, &mut context);
    assert_eq!(scroll_of(&context), before);

    // Subsequent motion drags relative to the first real position
    collector.cursor_moved([480.0, 400.0]);
    pump(&mut collector, &mut context);
    assert_eq!(scroll_of(&context), [before[0] + 20.0, before[1]]);
}

#[test]
fn random_input_never_leaves_world() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut cam = controller();
    let world = world();
    let world_bounds = Bounds::new([0.0, 0.0], [world.width(), world.height()]);
    let dirs = [
        Directions::UP,
        Directions::DOWN,
        Directions::LEFT,
        Directions::RIGHT,
    ];

    for _ in 0..5000 {
        match rng.random_range(0..8) {
            0 => cam.on_key_down(dirs[rng.random_range(0..4)]),
            1 => cam.on_key_up(dirs[rng.random_range(0..4)]),
            2 => cam.on_pointer_down([rng.random_range(0.0..800.0), rng.random_range(0.0..600.0)]),
            3 => cam.on_pointer_move(
                [rng.random_range(-2000.0..2000.0), rng.random_range(-2000.0..2000.0)],
                rng.random_bool(0.8),
            ),
            4 => cam.on_pointer_up(),
            5 => cam.on_wheel(rng.random_range(-10.0..10.0)),
            6 => cam.on_tick(
                rng.random_range(0.0..0.5),
                &touches(&[
                    [rng.random_range(0.0..800.0), rng.random_range(0.0..600.0)],
                    [rng.random_range(0.0..800.0), rng.random_range(0.0..600.0)],
                ]),
            ),
            _ => cam.on_tick(rng.random_range(0.0..0.5), &PointerTable::default()),
        }

        let view = cam.viewport();
        let zoom = view.zoom();
        assert!((MIN_ZOOM..=MAX_ZOOM).contains(&zoom));
        let [vw, vh] = view.visible_extent();
        let scroll = view.scroll();
        if vw <= world.width() && vh <= world.height() {
            assert!(
                world_bounds.contains_bounds(&view.visible_bounds()),
                "visible {:?} at zoom {zoom}",
                view.visible_bounds()
            );
        }
        if vw > world.width() {
            assert_eq!(scroll[0], 0.0);
        }
        if vh > world.height() {
            assert_eq!(scroll[1], 0.0);
        }
        assert!(scroll[0] >= 0.0 && scroll[1] >= 0.0);
    }
}
