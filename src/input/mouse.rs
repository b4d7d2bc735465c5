use crate::math::{Vector2, Zero};

/// Relative mouse movement and wheel scrolling accumulated during the last
/// frame. The cursor is captured by the window, so absolute positions are
/// meaningless and only raw deltas are tracked.
#[derive(Debug, Clone, Copy)]
pub struct Mouse {
    movement: Vector2<f32>,
    scroll: Vector2<f32>,
}

impl Default for Mouse {
    fn default() -> Self {
        Mouse {
            movement: Vector2::zero(),
            scroll: Vector2::zero(),
        }
    }
}

impl Mouse {
    pub fn new() -> Self {
        Mouse::default()
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Mouse::default();
    }

    #[inline]
    pub fn advance(&mut self) {
        self.movement = Vector2::zero();
        self.scroll = Vector2::zero();
    }

    /// Accumulates a raw device delta, in pixels. Positive `y` goes down.
    #[inline]
    pub fn on_move(&mut self, delta: (f32, f32)) {
        self.movement += Vector2::from(delta);
    }

    /// Accumulates a wheel delta, in lines.
    #[inline]
    pub fn on_wheel_scroll(&mut self, delta: (f32, f32)) {
        self.scroll += Vector2::from(delta);
    }

    /// Gets the mouse movement during last frame.
    #[inline]
    pub fn movement(&self) -> Vector2<f32> {
        self.movement
    }

    /// Gets the scroll movement of mouse during last frame.
    #[inline]
    pub fn scroll(&self) -> Vector2<f32> {
        self.scroll
    }
}
