//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates platform events into [`InputEvent`]s (see
//! [`platform`]) and feeds them to [`InputState::apply_event`], which folds
//! mouse and touch input into a single stream of [`Press`] transitions.

mod frame;
pub mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
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
