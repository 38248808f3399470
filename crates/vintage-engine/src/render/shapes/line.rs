use bytemuck::{Pod, Zeroable};

use crate::render::RenderCtx;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::common::{
    batch_by_layer, batch_for, create_quad_pipeline, create_viewport_ubo, viewport_layout_entry,
    write_viewport_ubo, Batch, InstanceBuffer, QuadBuffers,
};

/// Renderer for `DrawCmd::Line`.
///
/// Each segment is an oriented quad spanning `from`→`to` and `thickness`
/// across, widened by half a pixel on every side for the AA falloff.
#[derive(Default)]
pub struct LineRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    quad: Option<QuadBuffers>,
    instances: InstanceBuffer,
    batches: Vec<Batch>,
}

impl LineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads every line in `draw_list` and groups them per layer.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, draw_list: &mut DrawList) {
        let mut raw: Vec<LineInstance> = Vec::new();
        let mut layers: Vec<ZIndex> = Vec::new();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Line(cmd) = &item.cmd else { continue };

            if cmd.thickness <= 0.0 || cmd.color.is_transparent() {
                continue;
            }
            if !cmd.from.is_finite() || !cmd.to.is_finite() {
                continue;
            }

            raw.push(LineInstance {
                from: [cmd.from.x, cmd.from.y],
                to: [cmd.to.x, cmd.to.y],
                color: cmd.color.to_array(),
                half_width: [cmd.thickness * 0.5, 0.0],
            });
            layers.push(item.key.z);
        }

        self.batches = batch_by_layer(&layers);
        if raw.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        if self.quad.is_none() {
            self.quad = Some(QuadBuffers::new(ctx, "vintage line"));
        }

        if let Some(ubo) = self.viewport_ubo.as_ref() {
            write_viewport_ubo(ctx, ubo);
        }
        self.instances.upload(ctx, "vintage line instance vbo", &raw);
    }

    /// Records the lines prepared on layer `z` into `rpass`.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, z: ZIndex) {
        let Some(range) = batch_for(&self.batches, z) else { return };
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad) = self.quad.as_ref() else { return };
        let Some(instance_vbo) = self.instances.buffer() else { return };

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad.vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QuadBuffers::INDEX_COUNT, 0, range);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("vintage line shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/line.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("vintage line bgl"),
            entries: &[viewport_layout_entry()],
        });

        let pipeline = create_quad_pipeline(ctx, "vintage line", &shader, &bgl, LineInstance::layout());

        let viewport_ubo = create_viewport_ubo(ctx, "vintage line viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("vintage line bind group"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group = Some(bind_group);
        self.viewport_ubo = Some(viewport_ubo);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (40 bytes):
///
///  offset  0  from        [f32; 2]   loc 1
///  offset  8  to          [f32; 2]   loc 2
///  offset 16  color       [f32; 4]   loc 3
///  offset 32  half_width  [f32; 2]   loc 4  (.y unused)
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct LineInstance {
    from: [f32; 2],
    to: [f32; 2],
    color: [f32; 4],
    half_width: [f32; 2],
}

impl LineInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // from
        2 => Float32x2, // to
        3 => Float32x4, // color
        4 => Float32x2  // half_width
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
