extern crate lumen;
#[macro_use]
extern crate approx;

use lumen::camera::{self, EulerCamera, Movement};
use lumen::prelude::*;
use lumen::math::Transform;

#[test]
fn looks_down_negative_z() {
    let camera = EulerCamera::new(Point3::new(0.0, 0.0, 5.0));
    assert!(relative_eq!(camera.front(), Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-6));
    assert!(relative_eq!(camera.right(), Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-6));
    assert!(relative_eq!(camera.up(), Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-6));

    let view = camera.view_matrix();
    let p = view.transform_point(Point3::new(0.0, 0.0, 1.0));
    assert!(relative_eq!(p, Point3::new(0.0, 0.0, -4.0), epsilon = 1e-5));
}

#[test]
fn keyboard() {
    let mut camera = EulerCamera::new(Point3::new(0.0, 0.0, 5.0));

    camera.process_keyboard(Movement::Forward, 1.0);
    assert!(relative_eq!(camera.position, Point3::new(0.0, 0.0, 2.5), epsilon = 1e-5));

    camera.process_keyboard(Movement::Right, 0.5);
    assert!(relative_eq!(camera.position, Point3::new(1.25, 0.0, 2.5), epsilon = 1e-5));

    camera.process_accelerate(true);
    camera.process_keyboard(Movement::Backward, 0.1);
    let z = 2.5 + camera::SPEED * camera::ACCELERATION * 0.1;
    assert!(relative_eq!(camera.position, Point3::new(1.25, 0.0, z), epsilon = 1e-5));

    camera.process_accelerate(false);
    camera.process_keyboard(Movement::Left, 0.5);
    assert!(relative_eq!(camera.position, Point3::new(0.0, 0.0, z), epsilon = 1e-5));
}

#[test]
fn vertical_movement_ignores_pitch() {
    let mut camera = EulerCamera::new(Point3::new(1.0, 0.0, 0.0));
    camera.process_mouse(0.0, 450.0, true);
    assert!(relative_eq!(camera.pitch, 45.0, epsilon = 1e-4));

    camera.process_keyboard(Movement::Up, 1.0);
    assert!(relative_eq!(camera.position, Point3::new(1.0, 2.5, 0.0), epsilon = 1e-5));

    camera.process_keyboard(Movement::Down, 2.0);
    assert!(relative_eq!(camera.position, Point3::new(1.0, -2.5, 0.0), epsilon = 1e-5));
}

#[test]
fn pitch_is_constrained() {
    let mut camera = EulerCamera::default();
    camera.process_mouse(0.0, 10_000.0, true);
    assert_eq!(camera.pitch, 89.0);
    assert!(camera.front().y < 1.0);

    camera.process_mouse(0.0, -20_000.0, true);
    assert_eq!(camera.pitch, -89.0);

    let mut free = EulerCamera::default();
    free.process_mouse(0.0, 1000.0, false);
    assert!(relative_eq!(free.pitch, 100.0, epsilon = 1e-4));
}

#[test]
fn yaw_turns_right() {
    let mut camera = EulerCamera::default();
    camera.process_mouse(900.0, 0.0, true);
    assert!(relative_eq!(camera.yaw, 0.0, epsilon = 1e-4));
    assert!(relative_eq!(camera.front(), Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-5));
}

#[test]
fn scroll_zoom_is_clamped() {
    let mut camera = EulerCamera::default();
    assert_eq!(camera.zoom, camera::ZOOM);

    camera.process_scroll(10.0);
    assert_eq!(camera.zoom, 35.0);

    camera.process_scroll(100.0);
    assert_eq!(camera.zoom, 1.0);

    camera.process_scroll(-100.0);
    assert_eq!(camera.zoom, 45.0);
}
