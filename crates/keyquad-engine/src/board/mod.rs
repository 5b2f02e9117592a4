//! Piano board: key geometry, hit-testing and touch-driven key state.
//!
//! Responsibilities:
//! - define the seven fixed key quads (NDC) and the note each one plays
//! - resolve a touch point to the first key whose bounding box contains it
//! - own the per-key [`KeyState`] read by the renderer
//! - dispatch "play" callbacks registered per key

mod dispatch;
mod hit_test;
mod key;
mod state;

pub use dispatch::{Keyboard, SoundBank};
pub use hit_test::{first_hit, hit_test};
pub use key::{KEY_COUNT, KeyId, KeySpec, Note, PIANO_LAYOUT, Quad};
pub use state::{Board, KeyState};
