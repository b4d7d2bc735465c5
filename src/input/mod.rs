//! Provides access to the keyboard and mouse.
//!
//! # Keyboard Inputs
//!
//! ```rust,ignore
//! // Checks if a key is currently held down.
//! input.is_key_down(Key::W);
//!
//! // Checks if a key has been pressed down during the last frame.
//! input.is_key_press(Key::F);
//! ```
//!
//! Toggles should be driven by `is_key_press`, which fires once per physical
//! press, while continuous actions (camera movement) poll `is_key_down`.
//!
//! # Mouse Inputs
//!
//! ```rust,ignore
//! // Gets the raw mouse movement during the last frame.
//! input.mouse_movement();
//!
//! // Gets the wheel delta during the last frame.
//! input.mouse_scroll();
//! ```

pub mod keyboard;
pub mod mouse;

pub use self::keyboard::{Key, Keyboard};
pub use self::mouse::Mouse;

use crate::math::Vector2;

/// Input events translated from the window system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyboardPressed(Key),
    KeyboardReleased(Key),
    MouseMoved(f32, f32),
    MouseWheel(f32, f32),
}

/// The input subsystem, which receives events from the window and exposes the
/// per-frame state of keyboard and mouse.
#[derive(Debug, Default)]
pub struct InputSystem {
    keyboard: Keyboard,
    mouse: Mouse,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem::default()
    }

    /// Resets all the device states.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse.reset();
    }

    /// Starts a new frame: clears the edges and the deltas of the previous one.
    pub fn advance(&mut self) {
        self.keyboard.advance();
        self.mouse.advance();
    }

    pub fn update_with(&mut self, v: InputEvent) {
        match v {
            InputEvent::KeyboardPressed(key) => self.keyboard.on_key_pressed(key),
            InputEvent::KeyboardReleased(key) => self.keyboard.on_key_released(key),
            InputEvent::MouseMoved(x, y) => self.mouse.on_move((x, y)),
            InputEvent::MouseWheel(x, y) => self.mouse.on_wheel_scroll((x, y)),
        }
    }

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keyboard.is_key_down(key)
    }

    #[inline]
    pub fn is_key_press(&self, key: Key) -> bool {
        self.keyboard.is_key_press(key)
    }

    #[inline]
    pub fn is_key_release(&self, key: Key) -> bool {
        self.keyboard.is_key_release(key)
    }

    #[inline]
    pub fn mouse_movement(&self) -> Vector2<f32> {
        self.mouse.movement()
    }

    #[inline]
    pub fn mouse_scroll(&self) -> Vector2<f32> {
        self.mouse.scroll()
    }
}
