/// Device and surface preferences.
///
/// Preferences the surface cannot honor are replaced by a supported value
/// when the surface is configured.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB swapchain format when one exists. Colors are linear,
    /// so an sRGB target encodes them on write.
    pub prefer_srgb: bool,
    /// Falls back to `Fifo` when unsupported.
    pub present_mode: wgpu::PresentMode,
    /// `None` takes the surface's first supported mode.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,
    pub power_preference: wgpu::PowerPreference,
    pub required_limits: wgpu::Limits,
    /// Hint only; backends may ignore it.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    /// Vsync'd, low-power, default limits.
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::LowPower,
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
