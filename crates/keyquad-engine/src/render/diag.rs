//! GPU error diagnostics.
//!
//! wgpu reports validation failures asynchronously. These helpers wrap a
//! block of GPU calls in an error scope and resolve it immediately.

use std::fmt;

use anyhow::{Result, anyhow};

/// Runs `f` inside a validation error scope.
///
/// Returns the closure output together with the first validation error raised
/// while it ran, if any.
pub fn capture_validation<T>(
    device: &wgpu::Device,
    f: impl FnOnce() -> T,
) -> (T, Option<wgpu::Error>) {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let out = f();
    let err = pollster::block_on(scope.pop());
    (out, err)
}

/// Turns a captured scope error into a setup failure for `op`.
///
/// `built` is dropped on error, releasing whatever GPU objects it holds.
pub fn require_clean<T, E: fmt::Display>(op: &str, built: T, err: Option<E>) -> Result<T> {
    match err {
        Some(err) => {
            drop(built);
            Err(anyhow!("{op} failed: {err}"))
        }
        None => Ok(built),
    }
}

/// Runs `f` and logs any validation error it raised, tagged with `op`.
///
/// Errors are not surfaced; the caller carries on with the next frame.
pub fn log_gpu_errors<T>(device: &wgpu::Device, op: &str, f: impl FnOnce() -> T) -> T {
    let (out, err) = capture_validation(device, f);
    if let Some(err) = err {
        log::warn!("GPU error after {op}: {err}");
    }
    out
}
