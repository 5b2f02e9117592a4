//! Coordinate and geometry types shared by the board, the renderer and input.
//!
//! Two spaces are in use:
//! - window space: logical pixels, origin top-left, +X right, +Y down
//! - normalized device coordinates (NDC): origin centre, +X right, +Y up,
//!   both axes in `[-1, 1]`
//!
//! Key geometry lives in NDC. Input arrives in window space and is converted
//! with [`Viewport::to_ndc`] before hit-testing.

mod bounds;
mod vec2;
mod viewport;

pub use bounds::Bounds;
pub use vec2::Vec2;
pub use viewport::Viewport;
