extern crate lumen;

use lumen::input::{InputEvent, InputSystem, Key, Keyboard, Mouse};
use lumen::math::Vector2;

#[test]
fn keyboard_edges() {
    let mut keyboard = Keyboard::new();
    keyboard.on_key_pressed(Key::F);
    assert!(keyboard.is_key_down(Key::F));
    assert!(keyboard.is_key_press(Key::F));

    keyboard.advance();
    assert!(keyboard.is_key_down(Key::F));
    assert!(!keyboard.is_key_press(Key::F));

    // Auto-repeat of a held key.
    keyboard.on_key_pressed(Key::F);
    assert!(!keyboard.is_key_press(Key::F));

    keyboard.on_key_released(Key::F);
    assert!(!keyboard.is_key_down(Key::F));
    assert!(keyboard.is_key_release(Key::F));

    keyboard.advance();
    assert!(!keyboard.is_key_release(Key::F));
}

#[test]
fn keyboard_reset() {
    let mut keyboard = Keyboard::new();
    keyboard.on_key_pressed(Key::W);
    keyboard.on_key_pressed(Key::LShift);
    keyboard.reset();

    assert!(!keyboard.is_key_down(Key::W));
    assert!(!keyboard.is_key_press(Key::LShift));
}

#[test]
fn mouse_accumulates_within_a_frame() {
    let mut mouse = Mouse::new();
    mouse.on_move((1.0, 2.0));
    mouse.on_move((3.0, -1.0));
    mouse.on_wheel_scroll((0.0, 1.0));

    assert_eq!(mouse.movement(), Vector2::new(4.0, 1.0));
    assert_eq!(mouse.scroll(), Vector2::new(0.0, 1.0));

    mouse.advance();
    assert_eq!(mouse.movement(), Vector2::new(0.0, 0.0));
    assert_eq!(mouse.scroll(), Vector2::new(0.0, 0.0));
}

#[test]
fn system() {
    let mut input = InputSystem::new();
    input.update_with(InputEvent::KeyboardPressed(Key::Space));
    input.update_with(InputEvent::MouseMoved(5.0, -5.0));
    input.update_with(InputEvent::MouseWheel(0.0, -2.0));

    assert!(input.is_key_down(Key::Space));
    assert!(input.is_key_press(Key::Space));
    assert_eq!(input.mouse_movement(), Vector2::new(5.0, -5.0));
    assert_eq!(input.mouse_scroll(), Vector2::new(0.0, -2.0));

    input.advance();
    input.update_with(InputEvent::KeyboardReleased(Key::Space));
    assert!(!input.is_key_down(Key::Space));
    assert!(input.is_key_release(Key::Space));
    assert_eq!(input.mouse_movement(), Vector2::new(0.0, 0.0));

    input.update_with(InputEvent::KeyboardPressed(Key::LControl));
    input.reset();
    assert!(!input.is_key_down(Key::LControl));
}
