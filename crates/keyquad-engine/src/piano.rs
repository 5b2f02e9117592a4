//! The seven-key piano application.
//!
//! [`KeyboardApp`] wires a [`Keyboard`] to the runtime: pointer presses are
//! converted to NDC and routed to touch-down / touch-up, and every frame
//! redraws all keys through a [`KeyRenderer`].
//!
//! # Example
//! ```rust,ignore
//! KeyboardApp::new()
//!     .on_key(KeyId::ALL[0], || audio.play("b"))
//!     .run(RuntimeConfig::default())?;
//! ```

use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;

use crate::board::{Board, KeyId, Keyboard, SoundBank};
use crate::coords::{Vec2, Viewport};
use crate::core::{App, AppControl, FrameCtx};
use crate::device::GpuInit;
use crate::input::{InputFrame, Key, Press, PressPhase};
use crate::paint::Color;
use crate::render::{KeyRenderer, RenderCtx, RenderTarget};
use crate::window::{Runtime, RuntimeConfig};

/// Piano demo application: board state, sound table and renderer.
pub struct KeyboardApp {
    keyboard: Keyboard,
    clear: Color,
    gpu_init: GpuInit,

    /// Built by `init`; `None` until then.
    renderer: Option<KeyRenderer>,
}

impl KeyboardApp {
    pub fn new() -> Self {
        Self::with_board(Board::piano())
    }

    /// App over a custom board layout.
    pub fn with_board(board: Board) -> Self {
        Self {
            keyboard: Keyboard::new(board, SoundBank::new()),
            clear: Color::BLACK,
            gpu_init: GpuInit::default(),
            renderer: None,
        }
    }

    /// Registers the sound callback for `key`, replacing any previous one.
    pub fn on_key(mut self, key: KeyId, f: impl FnMut() + 'static) -> Self {
        self.keyboard.sounds_mut().register(key, f);
        self
    }

    /// Sets the framebuffer clear color (black by default).
    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear = color;
        self
    }

    /// Overrides the GPU/surface setup used by [`KeyboardApp::run`].
    pub fn gpu_init(mut self, init: GpuInit) -> Self {
        self.gpu_init = init;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.keyboard.board()
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.renderer.is_some()
    }

    /// Opens the window and runs until it is closed or Escape is pressed.
    pub fn run(self, config: RuntimeConfig) -> Result<()> {
        let gpu_init = self.gpu_init.clone();
        Runtime::run(config, gpu_init, self)
    }

    /// One-time setup: stores the viewport and compiles the key pipeline.
    ///
    /// On error the app stays uninitialized and [`render_frame`] draws nothing.
    ///
    /// [`render_frame`]: KeyboardApp::render_frame
    pub fn setup(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        log::info!("init {}x{}", ctx.viewport.width, ctx.viewport.height);
        let renderer =
            KeyRenderer::new(ctx, self.keyboard.board()).context("failed to set up key renderer")?;
        self.renderer = Some(renderer);
        Ok(())
    }

    /// Draws all keys with their current colors into an already cleared target.
    pub fn render_frame(&self, target: &mut RenderTarget<'_>) {
        if let Some(renderer) = self.renderer.as_ref() {
            renderer.render(target, self.keyboard.board());
        }
    }

    /// Touch-down at NDC `(x, y)`; returns the key that was hit.
    pub fn on_touch_down(&mut self, x: f32, y: f32) -> Option<KeyId> {
        self.keyboard.on_touch_down(x, y)
    }

    /// Touch-up at NDC `(x, y)`; every key returns to idle.
    pub fn on_touch_up(&mut self, x: f32, y: f32) {
        self.keyboard.on_touch_up(x, y);
    }

    /// Routes a primary-pointer transition given in logical window pixels.
    ///
    /// A touch-down while the window has no area is dropped. A touch-up always
    /// resets the board; its coordinates are NaN when they cannot be mapped.
    pub fn handle_press(&mut self, press: Press, window: Viewport) -> Option<KeyId> {
        let ndc = window.to_ndc(Vec2::new(press.x, press.y));

        match press.phase {
            PressPhase::Down => {
                let Some(p) = ndc else {
                    log::debug!("touch-down ignored: window has no area");
                    return None;
                };
                self.on_touch_down(p.x, p.y)
            }
            PressPhase::Up => {
                let p = ndc.unwrap_or(Vec2::new(f32::NAN, f32::NAN));
                self.on_touch_up(p.x, p.y);
                None
            }
        }
    }
}

impl Default for KeyboardApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for KeyboardApp {
    fn init(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        self.setup(ctx)
    }

    fn on_resize(&mut self, size: PhysicalSize<u32>) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.set_viewport(Viewport::new(size.width as f32, size.height as f32));
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if wants_exit(ctx.input_frame) {
            log::info!("escape pressed; exiting");
            ctx.runtime.exit();
            return AppControl::Continue;
        }

        let window = ctx.window.logical_size();
        for press in &ctx.input_frame.presses {
            self.handle_press(*press, window);
        }

        let clear = self.clear;
        ctx.render(clear, |_, target| self.render_frame(target))
    }
}

/// Escape closes the demo.
fn wants_exit(frame: &InputFrame) -> bool {
    frame.keys_pressed.contains(&Key::Escape)
}
