use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Whether the runtime keeps going after a callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Implemented by whatever owns the frame content.
///
/// Returning [`AppControl::Exit`] from either callback closes every window
/// and ends [`Runtime::run`](crate::window::Runtime::run).
pub trait App {
    /// Sees each window event first; the runtime still applies resize and
    /// close handling afterwards.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// One paced redraw of one window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
