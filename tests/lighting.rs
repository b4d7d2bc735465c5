extern crate lumen;

use lumen::input::{InputEvent, InputSystem, Key};
use lumen::lighting::{self, LightingMode, PointLight, SpotLight};
use lumen::prelude::*;

#[test]
fn uniform_names() {
    assert_eq!(lighting::field_name("uSpotLight", "innerCutOff"), "uSpotLight.innerCutOff");
    assert_eq!(lighting::element_name("uPointLights", 3), "uPointLights[3]");
    assert_eq!(
        lighting::field_name(&lighting::element_name("uPointLights", 0), "position"),
        "uPointLights[0].position"
    );
}

#[test]
fn point_light() {
    let light = PointLight::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.5, 0.5, 0.5));
    assert_eq!(light.ambient, Vector3::zero());
    assert_eq!(light.diffuse, Vector3::new(0.5, 0.5, 0.5));
    assert_eq!(light.specular, light.diffuse);
    assert_eq!(light.constant, 1.0);
    assert_eq!(light.linear, 0.09);
    assert_eq!(light.quadratic, 0.032);
}

#[test]
fn torch_follows_camera() {
    let mut camera = EulerCamera::new(Point3::new(0.0, 1.0, 3.0));
    camera.process_mouse(900.0, 0.0, true);

    let mut torch = SpotLight::default();
    assert!(torch.inner_cut_off > torch.outer_cut_off);

    torch.follow(&camera);
    assert_eq!(torch.position, camera.position);
    assert_eq!(torch.direction, camera.front());
}

#[test]
fn gamma_and_height_are_clamped() {
    let mut mode = LightingMode::default();
    assert_eq!(mode.gamma, 2.2);
    assert_eq!(mode.height_scale, 0.1);

    for _ in 0..1000 {
        mode.increase_gamma();
        mode.decrease_height();
    }

    assert_eq!(mode.gamma, lighting::GAMMA_RANGE.1);
    assert_eq!(mode.height_scale, lighting::HEIGHT_RANGE.0);

    for _ in 0..1000 {
        mode.decrease_gamma();
    }

    assert_eq!(mode.gamma, lighting::GAMMA_RANGE.0);

    mode.increase_height();
    assert!((mode.height_scale - lighting::HEIGHT_STEP).abs() < 1e-7);
}

#[test]
fn toggles_fire_once_per_press() {
    let mut input = InputSystem::new();
    let mut mode = LightingMode::default();

    input.update_with(InputEvent::KeyboardPressed(Key::F));
    input.update_with(InputEvent::KeyboardPressed(Key::B));
    mode.handle_input(&input);
    assert!(!mode.torch);
    assert!(mode.blinn);
    assert!(mode.normal_map);

    // Still held on the next frame.
    input.advance();
    mode.handle_input(&input);
    assert!(!mode.torch);
    assert!(mode.blinn);

    input.update_with(InputEvent::KeyboardPressed(Key::N));
    input.update_with(InputEvent::KeyboardPressed(Key::Equals));
    mode.handle_input(&input);
    assert!(!mode.normal_map);
    assert!((mode.gamma - 2.21).abs() < 1e-5);

    // Gamma keeps changing while the key is held.
    input.advance();
    mode.handle_input(&input);
    assert!((mode.gamma - 2.22).abs() < 1e-5);
}

#[test]
fn status_line() {
    let mode = LightingMode::default();
    assert_eq!(mode.status_line(), "Gamma : 2.200000 Height : 0.100000\t\t\r");
}
