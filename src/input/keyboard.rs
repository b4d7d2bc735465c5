use std::collections::HashSet;

/// Symbolic name for a keyboard key. Only the keys the demos react to are
/// tracked, everything else is dropped when translating window events.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Key {
    A,
    B,
    D,
    F,
    L,
    N,
    S,
    W,

    /// The Escape key, next to F1.
    Escape,
    /// The left shift, used to accelerate the camera.
    LShift,
    /// The left control.
    LControl,
    Space,

    /// The `=` key, next to Backspace.
    Equals,
    /// The `-` key.
    Minus,
    /// The `.` key.
    Period,
    /// The `,` key.
    Comma,
}

/// The state of keyboard: keys held down, and the edges observed during the
/// last frame.
#[derive(Debug, Default)]
pub struct Keyboard {
    downs: HashSet<Key>,
    presses: HashSet<Key>,
    releases: HashSet<Key>,
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard::default()
    }

    /// Forgets everything, e.g. when the window lost focus.
    #[inline]
    pub fn reset(&mut self) {
        self.downs.clear();
        self.presses.clear();
        self.releases.clear();
    }

    /// Clears the per-frame edges. Keys held down stay down.
    #[inline]
    pub fn advance(&mut self) {
        self.presses.clear();
        self.releases.clear();
    }

    #[inline]
    pub fn on_key_pressed(&mut self, key: Key) {
        // Auto-repeat events of a held key do not trigger another press.
        if self.downs.insert(key) {
            self.presses.insert(key);
        }
    }

    #[inline]
    pub fn on_key_released(&mut self, key: Key) {
        self.downs.remove(&key);
        self.releases.insert(key);
    }

    /// Checks if a key is currently held down.
    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.downs.contains(&key)
    }

    /// Checks if a key has been pressed down during the last frame.
    #[inline]
    pub fn is_key_press(&self, key: Key) -> bool {
        self.presses.contains(&key)
    }

    /// Checks if a key has been released during the last frame.
    #[inline]
    pub fn is_key_release(&self, key: Key) -> bool {
        self.releases.contains(&key)
    }
}
