use std::collections::HashSet;

use super::types::{Key, Press};

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys, pointer position).
/// `InputFrame` provides transitions for the current frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys pressed this frame.
    pub keys_pressed: HashSet<Key>,

    /// Primary-pointer presses and releases in arrival order.
    pub presses: Vec<Press>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.presses.clear();
    }
}
