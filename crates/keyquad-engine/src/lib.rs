//! keyquad engine crate.
//!
//! A seven-key touch piano on top of a small winit + wgpu runtime:
//! - `board`: key geometry, hit-testing, key state and sound dispatch
//! - `render`: the key pipeline and GPU diagnostics
//! - `window`/`device`/`input`: platform runtime, GPU context, input folding
//! - `piano`: the application tying them together

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;

pub mod board;
pub mod piano;

pub use piano::KeyboardApp;
