use crate::scene::DrawList;
use crate::text::FontSystem;

use super::shapes::circle::CircleRenderer;
use super::shapes::line::LineRenderer;
use super::shapes::text::TextRenderer;
use super::{RenderCtx, RenderTarget};

/// Draws a whole `DrawList` in one render pass.
///
/// Layers paint back to front. Within a layer the order is fixed:
/// circles, then lines, then text.
#[derive(Default)]
pub struct SceneRenderer {
    circles: CircleRenderer,
    lines: LineRenderer,
    text: TextRenderer,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        font_system: &FontSystem,
    ) {
        let layers = draw_list.layers();
        if layers.is_empty() {
            return;
        }

        self.circles.prepare(ctx, draw_list);
        self.lines.prepare(ctx, draw_list);
        self.text.prepare(ctx, draw_list, font_system);

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("vintage scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        for z in layers {
            self.circles.draw(&mut rpass, z);
            self.lines.draw(&mut rpass, z);
            self.text.draw(&mut rpass, z);
        }
    }
}
