use std::ops::Range;

use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::board::{Board, KEY_COUNT, KeyId, KeyState};
use crate::coords::Viewport;
use crate::render::{RenderCtx, RenderTarget};

use super::diag;

/// Vertices per key quad (triangle strip).
const VERTS_PER_KEY: usize = 4;

/// Renders the seven keys of a [`Board`].
///
/// The pipeline and both vertex buffers are built once in [`KeyRenderer::new`]:
/// - positions: every key's quad back to back, never rewritten
/// - colors: one idle block and one active block of four vertices each
///
/// Each frame issues one draw per key, pairing the key's position slice with
/// the color block for its current [`KeyState`].
pub struct KeyRenderer {
    pipeline: wgpu::RenderPipeline,
    position_vbo: wgpu::Buffer,
    color_vbo: wgpu::Buffer,
    viewport: Viewport, // physical px
}

impl KeyRenderer {
    /// Compiles the key shader and uploads the static vertex data.
    ///
    /// Any validation error (shader compile, pipeline link) aborts setup; the
    /// partially built objects are dropped with the error.
    pub fn new(ctx: &RenderCtx<'_>, board: &Board) -> Result<Self> {
        let device = ctx.device;
        let positions = pack_positions(board);
        let colors = color_blocks();

        let (built, err) = diag::capture_validation(device, || {
            let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("keyquad key shader"),
                source: wgpu::ShaderSource::Wgsl(include_str!("shaders/keys.wgsl").into()),
            });

            let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("keyquad key pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

            let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("keyquad key pipeline"),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[KeyVertex::layout(), KeyColor::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleStrip,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });

            let position_vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("keyquad key position vbo"),
                contents: bytemuck::cast_slice(&positions),
                usage: wgpu::BufferUsages::VERTEX,
            });

            let color_vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("keyquad key color vbo"),
                contents: bytemuck::cast_slice(&colors),
                usage: wgpu::BufferUsages::VERTEX,
            });

            (pipeline, position_vbo, color_vbo)
        });

        let (pipeline, position_vbo, color_vbo) =
            diag::require_clean("build key pipeline", built, err)?;
        log::debug!(
            "key renderer ready ({KEY_COUNT} keys, format {:?}, viewport {}x{})",
            ctx.surface_format,
            ctx.viewport.width,
            ctx.viewport.height
        );

        Ok(Self {
            pipeline,
            position_vbo,
            color_vbo,
            viewport: ctx.viewport,
        })
    }

    /// Updates the viewport (physical pixels) used by subsequent frames.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Draws every key with its current color. The target must already be cleared.
    pub fn render(&self, target: &mut RenderTarget<'_>, board: &Board) {
        if !self.viewport.is_valid() {
            return;
        }

        let mut rpass = target.load_pass("keyquad key pass");

        rpass.set_viewport(0.0, 0.0, self.viewport.width, self.viewport.height, 0.0, 1.0);
        rpass.set_pipeline(&self.pipeline);

        for (key, _, state) in board.iter() {
            rpass.set_vertex_buffer(0, self.position_vbo.slice(position_range(key)));
            rpass.set_vertex_buffer(1, self.color_vbo.slice(color_range(state)));
            rpass.draw(0..VERTS_PER_KEY as u32, 0..1);
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct KeyVertex {
    pos: [f32; 2], // NDC
}

impl KeyVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<KeyVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct KeyColor {
    color: [f32; 4], // premultiplied
}

impl KeyColor {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x4];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<KeyColor>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// All key quads in key order, four strip vertices each.
fn pack_positions(board: &Board) -> [KeyVertex; KEY_COUNT * VERTS_PER_KEY] {
    let mut out = [KeyVertex { pos: [0.0; 2] }; KEY_COUNT * VERTS_PER_KEY];
    for (key, spec, _) in board.iter() {
        let base = key.index() * VERTS_PER_KEY;
        for (slot, v) in out[base..base + VERTS_PER_KEY]
            .iter_mut()
            .zip(spec.quad.vertices)
        {
            slot.pos = v.to_array();
        }
    }
    out
}

/// Idle block followed by active block.
fn color_blocks() -> [KeyColor; 2 * VERTS_PER_KEY] {
    let mut out = [KeyColor { color: [0.0; 4] }; 2 * VERTS_PER_KEY];
    for state in [KeyState::Idle, KeyState::Active] {
        let base = color_block(state) * VERTS_PER_KEY;
        for slot in &mut out[base..base + VERTS_PER_KEY] {
            slot.color = state.color().to_array();
        }
    }
    out
}

#[inline]
fn color_block(state: KeyState) -> usize {
    match state {
        KeyState::Idle => 0,
        KeyState::Active => 1,
    }
}

/// Byte range of `key`'s quad inside the position buffer.
fn position_range(key: KeyId) -> Range<u64> {
    let len = (VERTS_PER_KEY * std::mem::size_of::<KeyVertex>()) as u64;
    let start = key.index() as u64 * len;
    start..start + len
}

/// Byte range of the color block for `state` inside the color buffer.
fn color_range(state: KeyState) -> Range<u64> {
    let len = (VERTS_PER_KEY * std::mem::size_of::<KeyColor>()) as u64;
    let start = color_block(state) as u64 * len;
    start..start + len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn vertex_strides_match_shader_inputs() {
        assert_eq!(std::mem::size_of::<KeyVertex>(), 8);
        assert_eq!(std::mem::size_of::<KeyColor>(), 16);
    }

    #[test]
    fn positions_follow_key_order() {
        let packed = pack_positions(&Board::piano());
        assert_eq!(packed[0].pos, [0.2, 0.6]);
        assert_eq!(packed[3].pos, [0.7, 0.9]);

        // key 3 starts at vertex 8
        assert_eq!(packed[8].pos, [-0.2, 0.6]);
        assert_eq!(packed[11].pos, [-0.7, 0.9]);

        // key 7 is last
        assert_eq!(packed[24].pos, [-0.25, -0.85]);
        assert_eq!(packed[27].pos, [0.25, -0.55]);
    }

    #[test]
    fn color_blocks_hold_idle_then_active() {
        let blocks = color_blocks();
        assert!(blocks[..4].iter().all(|c| c.color == Color::YELLOW.to_array()));
        assert!(blocks[4..].iter().all(|c| c.color == Color::RED.to_array()));
    }

    #[test]
    fn position_ranges_tile_the_buffer() {
        let total = (KEY_COUNT * VERTS_PER_KEY * std::mem::size_of::<KeyVertex>()) as u64;

        let mut expected_start = 0;
        for key in KeyId::ALL {
            let r = position_range(key);
            assert_eq!(r.start, expected_start);
            assert_eq!(r.end - r.start, 32);
            expected_start = r.end;
        }
        assert_eq!(expected_start, total);
    }

    #[test]
    fn color_range_selects_block_by_state() {
        assert_eq!(color_range(KeyState::Idle), 0..64);
        assert_eq!(color_range(KeyState::Active), 64..128);
    }
}
