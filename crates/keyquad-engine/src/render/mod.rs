//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into a
//! [`RenderTarget`] handed out by `core::FrameCtx::render`.
//!
//! Convention:
//! - key geometry is already in NDC; the vertex shader passes it through
//! - the viewport is tracked in physical pixels

mod ctx;
pub mod diag;
mod keys;

pub use ctx::{RenderCtx, RenderTarget};
pub use keys::KeyRenderer;
