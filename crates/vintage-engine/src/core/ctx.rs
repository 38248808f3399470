use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// The window a frame is being drawn for.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Inner size in logical pixels.
    pub fn viewport(&self) -> Viewport {
        let scale = self.window.scale_factor();
        let logical: winit::dpi::LogicalSize<f64> = self.window.inner_size().to_logical(scale);
        Viewport::new(logical.width as f32, logical.height as f32)
    }

    #[inline]
    pub fn scale_factor(&self) -> f32 {
        self.window.scale_factor() as f32
    }
}

/// Everything [`App::on_frame`](super::App::on_frame) may touch.
///
/// `'a` lasts for the callback; `'w` is the window borrow held by the surface.
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the surface with `clear`, calls `draw` with a ready [`RenderCtx`]
    /// and [`RenderTarget`], then presents the frame.
    ///
    /// A transient surface error skips the frame. A fatal one is reported
    /// through [`RuntimeCtx::fail`] and returns [`AppControl::Exit`].
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let viewport = self.window.viewport();
        let scale_factor = self.window.scale_factor();

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let message = err.to_string();
                if self.gpu.handle_surface_error(err) == SurfaceErrorAction::Fatal {
                    self.runtime
                        .fail(anyhow::anyhow!("rendering surface failed: {message}"));
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        clear_pass(&mut frame, clear);

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            viewport,
            scale_factor,
        );

        let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
        draw(&rctx, &mut target);
        drop(target);

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}

/// Records a pass that only clears the swapchain image to `color`.
fn clear_pass(frame: &mut GpuFrame, color: Color) {
    let attachment = wgpu::RenderPassColorAttachment {
        view: &frame.view,
        resolve_target: None,
        ops: wgpu::Operations {
            load: wgpu::LoadOp::Clear(color.to_wgpu()),
            store: wgpu::StoreOp::Store,
        },
        depth_slice: None,
    };
    frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("vintage clear"),
        color_attachments: &[Some(attachment)],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    });
}
