use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    ButtonState,
    InputEvent,
    Key,
    MouseButton,
    PointerButtonEvent,
    PointerMoveEvent,
    Press,
    PressPhase,
    TouchEvent,
    TouchPhase,
};

/// Current input state for a single window.
///
/// Holds "is down" information and the current pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
///
/// Mouse and touch share one primary pointer: the left button and the first
/// finger both drive it, and while it is held further presses from either
/// source are ignored.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,

    /// Source currently holding the primary pointer.
    primary: Option<PrimarySource>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum PrimarySource {
    Mouse,
    Finger(u64),
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // On focus loss, clear "down" sets and release the pointer.
                    // Avoids stuck keys when focus changes mid-press.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                    self.release_primary(frame);
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, .. } => match state {
                ButtonState::Pressed => {
                    if self.keys_down.insert(*key) {
                        frame.keys_pressed.insert(*key);
                    }
                }
                ButtonState::Released => {
                    self.keys_down.remove(key);
                }
            },

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((*x, *y));

                match state {
                    ButtonState::Pressed => {
                        let inserted = self.buttons_down.insert(*button);
                        if inserted && *button == MouseButton::Left {
                            self.acquire_primary(frame, PrimarySource::Mouse, *x, *y);
                        }
                    }
                    ButtonState::Released => {
                        let removed = self.buttons_down.remove(button);
                        if removed && self.primary == Some(PrimarySource::Mouse) && *button == MouseButton::Left {
                            self.release_primary(frame);
                        }
                    }
                }
            }

            InputEvent::Touch(TouchEvent { id, phase, x, y }) => {
                let finger = PrimarySource::Finger(*id);
                match phase {
                    TouchPhase::Started => self.acquire_primary(frame, finger, *x, *y),
                    TouchPhase::Moved => {
                        if self.primary == Some(finger) {
                            self.pointer_pos = Some((*x, *y));
                        }
                    }
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        if self.primary == Some(finger) {
                            self.pointer_pos = Some((*x, *y));
                            self.release_primary(frame);
                        }
                    }
                }
            }
        }
    }

    fn acquire_primary(&mut self, frame: &mut InputFrame, source: PrimarySource, x: f32, y: f32) {
        if self.primary.is_some() {
            return;
        }
        self.primary = Some(source);
        self.pointer_pos = Some((x, y));
        frame.presses.push(Press { phase: PressPhase::Down, x, y });
    }

    fn release_primary(&mut self, frame: &mut InputFrame) {
        if self.primary.take().is_none() {
            return;
        }
        let (x, y) = self.pointer_pos.unwrap_or((0.0, 0.0));
        frame.presses.push(Press { phase: PressPhase::Up, x, y });
    }
}
