use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use vintage_clock::fonts::load_clock_fonts;
use vintage_clock::{ClockApp, ClockDriver, ClockLayout, SystemTimeSource};
use vintage_engine::device::GpuInit;
use vintage_engine::logging::{init_logging, LoggingConfig};
use vintage_engine::text::FontSystem;
use vintage_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let layout = ClockLayout::vintage();
    log::info!("dial {}x{} @ {} fps", layout.width, layout.height, layout.fps);

    let config = RuntimeConfig {
        title: "Vintage Analog Clock".to_string(),
        initial_size: LogicalSize::new(f64::from(layout.width), f64::from(layout.height)),
        resizable: false,
        target_fps: layout.fps,
    };

    let driver = ClockDriver::new(layout, SystemTimeSource);

    let mut font_system = FontSystem::new();
    let fonts = load_clock_fonts(&mut font_system).context("failed to load clock fonts")?;

    let app = ClockApp::new(driver, font_system, fonts);
    Runtime::run(config, GpuInit::default(), app)
}
