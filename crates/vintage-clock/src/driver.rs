//! Frame driver: the clock's lifecycle and per-frame composition.

use vintage_engine::core::{App, AppControl, FrameCtx};
use vintage_engine::render::SceneRenderer;
use vintage_engine::scene::DrawList;
use vintage_engine::text::FontSystem;
use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::face::draw_face;
use crate::fonts::ClockFonts;
use crate::hands::draw_hands;
use crate::label::draw_label;
use crate::layout::ClockLayout;
use crate::time_sample::{TimeSample, TimeSource};

/// Lifecycle of the clock.
///
/// `Initializing` until the window can present and fonts are available,
/// `Running` while frames are produced, `Terminating` once a close was
/// requested. Never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Running,
    Terminating,
}

/// Owns the layout and the time source, and records one frame at a time.
pub struct ClockDriver<S: TimeSource> {
    layout: ClockLayout,
    source: S,
    phase: Phase,
    fonts: Option<ClockFonts>,
    draw_list: DrawList,
    last_sample: Option<TimeSample>,
}

impl<S: TimeSource> ClockDriver<S> {
    pub fn new(layout: ClockLayout, source: S) -> Self {
        Self {
            layout,
            source,
            phase: Phase::Initializing,
            fonts: None,
            draw_list: DrawList::new(),
            last_sample: None,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn layout(&self) -> &ClockLayout {
        &self.layout
    }

    /// Sample used by the most recent composed frame.
    #[inline]
    pub fn last_sample(&self) -> Option<TimeSample> {
        self.last_sample
    }

    /// Completes initialization. Only valid while `Initializing`.
    pub fn start(&mut self, fonts: ClockFonts) {
        if self.phase != Phase::Initializing {
            log::warn!("start ignored in phase {:?}", self.phase);
            return;
        }
        self.fonts = Some(fonts);
        self.phase = Phase::Running;
        log::info!("clock running");
    }

    /// Moves to `Terminating`; no further frames are composed.
    pub fn request_close(&mut self) {
        if self.phase != Phase::Terminating {
            log::info!("close requested");
            self.phase = Phase::Terminating;
        }
    }

    /// Samples the time once and records face, hands and label.
    ///
    /// Returns `None` unless `Running`.
    pub fn compose_frame(&mut self) -> Option<&mut DrawList> {
        if self.phase != Phase::Running {
            return None;
        }
        let fonts = self.fonts.as_ref()?;

        let sample = self.source.sample();
        self.last_sample = Some(sample);

        self.draw_list.clear();
        draw_face(&mut self.draw_list, &self.layout, fonts);
        draw_hands(&mut self.draw_list, &self.layout, &sample);
        draw_label(&mut self.draw_list, &self.layout, fonts, &sample);

        Some(&mut self.draw_list)
    }
}

/// Engine adapter: window events and frames in, rendered dial out.
pub struct ClockApp<S: TimeSource> {
    driver: ClockDriver<S>,
    font_system: FontSystem,
    /// Handed to the driver on the first frame, once the window and surface
    /// exist.
    pending_fonts: Option<ClockFonts>,
    scene: SceneRenderer,
}

impl<S: TimeSource> ClockApp<S> {
    /// `fonts` must be faces registered in `font_system`.
    pub fn new(driver: ClockDriver<S>, font_system: FontSystem, fonts: ClockFonts) -> Self {
        Self {
            driver,
            font_system,
            pending_fonts: Some(fonts),
            scene: SceneRenderer::new(),
        }
    }

    pub fn driver(&self) -> &ClockDriver<S> {
        &self.driver
    }

    /// Leaves `Initializing`. The runtime only calls `on_frame` once the
    /// window has a configured surface.
    fn finish_initializing(&mut self) {
        let Some(fonts) = self.pending_fonts.take() else {
            return;
        };
        if self.driver.phase() == Phase::Initializing {
            self.driver.start(fonts);
        }
    }

    fn handle_event(&mut self, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::CloseRequested => {
                self.driver.request_close();
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }
}

impl<S: TimeSource + 'static> App for ClockApp<S> {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        self.handle_event(event)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.finish_initializing();

        let clear = self.driver.layout().palette.background;
        let phase = self.driver.phase();

        let Some(draw_list) = self.driver.compose_frame() else {
            return match phase {
                Phase::Terminating => AppControl::Exit,
                _ => AppControl::Continue,
            };
        };

        let scene = &mut self.scene;
        let font_system = &self.font_system;
        ctx.render(clear, |rctx, target| {
            scene.render(rctx, target, draw_list, font_system);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer;
    use crate::hands::{hand_segments, HandAngles, HandKind};
    use crate::label::format_time;
    use crate::time_sample::{sample_at, FixedTimeSource};
    use std::cell::Cell;
    use vintage_engine::coords::Vec2;
    use vintage_engine::scene::DrawCmd;

    fn driver_at(sample: TimeSample) -> ClockDriver<FixedTimeSource> {
        ClockDriver::new(ClockLayout::vintage(), FixedTimeSource::new(sample))
    }

    fn texts(list: &DrawList, z: vintage_engine::scene::ZIndex) -> Vec<String> {
        list.items()
            .iter()
            .filter(|i| i.key.z == z)
            .filter_map(|i| match &i.cmd {
                DrawCmd::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect()
    }

    // ── phases ────────────────────────────────────────────────────────────

    #[test]
    fn starts_initializing_and_composes_nothing() {
        let mut driver = driver_at(sample_at(10, 10, 10, 0));
        assert_eq!(driver.phase(), Phase::Initializing);
        assert!(driver.compose_frame().is_none());
        assert!(driver.last_sample().is_none());
    }

    #[test]
    fn start_enters_running() {
        let mut driver = driver_at(sample_at(10, 10, 10, 0));
        driver.start(ClockFonts::placeholder());
        assert_eq!(driver.phase(), Phase::Running);
        assert!(driver.compose_frame().is_some());
    }

    #[test]
    fn close_is_terminal() {
        let mut driver = driver_at(sample_at(10, 10, 10, 0));
        driver.start(ClockFonts::placeholder());
        driver.request_close();
        assert_eq!(driver.phase(), Phase::Terminating);
        assert!(driver.compose_frame().is_none());

        driver.start(ClockFonts::placeholder());
        assert_eq!(driver.phase(), Phase::Terminating);
    }

    #[test]
    fn close_before_start_skips_running() {
        let mut driver = driver_at(sample_at(10, 10, 10, 0));
        driver.request_close();
        driver.start(ClockFonts::placeholder());
        assert_eq!(driver.phase(), Phase::Terminating);
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn frame_holds_face_hands_cap_and_label() {
        let mut driver = driver_at(sample_at(15, 4, 5, 0));
        driver.start(ClockFonts::placeholder());

        let list = driver.compose_frame().expect("running");
        assert_eq!(list.len(), (3 + 60 + 12) + (4 + 2) + 2);
        assert_eq!(list.layers(), vec![layer::FACE, layer::HANDS, layer::CAP, layer::LABEL]);
        assert_eq!(texts(list, layer::LABEL), vec!["07 March 2025", "03:04:05 PM"]);
    }

    #[test]
    fn every_frame_is_rebuilt_from_scratch() {
        let mut driver = driver_at(sample_at(8, 0, 0, 0));
        driver.start(ClockFonts::placeholder());

        let first = driver.compose_frame().map(|l| l.items().to_vec());
        let second = driver.compose_frame().map(|l| l.items().to_vec());
        assert_eq!(first, second);
        assert_eq!(driver.last_sample(), Some(sample_at(8, 0, 0, 0)));
    }

    /// Moves one second forward on every read.
    struct SteppingSource {
        reads: Cell<u32>,
    }

    impl TimeSource for SteppingSource {
        fn sample(&self) -> TimeSample {
            let n = self.reads.get();
            self.reads.set(n + 1);
            sample_at(10, 0, n % 60, 0)
        }
    }

    fn second_hand_tip(list: &DrawList) -> Option<Vec2> {
        list.items()
            .iter()
            .filter(|i| i.key.z == layer::HANDS)
            .filter_map(|i| match &i.cmd {
                DrawCmd::Line(l) => Some(l.to),
                _ => None,
            })
            .nth(2)
    }

    #[test]
    fn hands_and_label_share_one_reading() {
        let source = SteppingSource { reads: Cell::new(0) };
        let mut driver = ClockDriver::new(ClockLayout::vintage(), source);
        driver.start(ClockFonts::placeholder());

        for frame in 0..3u32 {
            let (label, tip) = {
                let list = driver.compose_frame().expect("running");
                (texts(list, layer::LABEL), second_hand_tip(list))
            };
            assert_eq!(driver.source.reads.get(), frame + 1);

            let sample = driver.last_sample().expect("sampled");
            assert_eq!(sample, sample_at(10, 0, frame, 0));
            assert_eq!(label[1], format_time(&sample));

            let angles = HandAngles::from_sample(&sample);
            let expected = hand_segments(driver.layout(), &angles)[2];
            assert_eq!(expected.kind, HandKind::Second);
            assert_eq!(tip, Some(expected.to.to_vec2()));
        }
    }

    // ── app adapter ───────────────────────────────────────────────────────

    fn app_at(sample: TimeSample) -> ClockApp<FixedTimeSource> {
        ClockApp::new(driver_at(sample), FontSystem::new(), ClockFonts::placeholder())
    }

    #[test]
    fn app_starts_running_on_its_first_frame() {
        let mut app = app_at(sample_at(8, 0, 0, 0));
        assert_eq!(app.driver().phase(), Phase::Initializing);

        app.finish_initializing();
        assert_eq!(app.driver().phase(), Phase::Running);

        app.finish_initializing();
        assert_eq!(app.driver().phase(), Phase::Running);
    }

    #[test]
    fn close_before_first_frame_never_runs() {
        let mut app = app_at(sample_at(8, 0, 0, 0));
        assert_eq!(app.handle_event(&WindowEvent::CloseRequested), AppControl::Exit);

        app.finish_initializing();
        assert_eq!(app.driver().phase(), Phase::Terminating);
    }

    #[test]
    fn close_request_exits_the_app() {
        let mut app = app_at(sample_at(8, 0, 0, 0));
        app.finish_initializing();

        assert_eq!(app.handle_event(&WindowEvent::Focused(true)), AppControl::Continue);
        assert_eq!(app.driver().phase(), Phase::Running);

        assert_eq!(app.handle_event(&WindowEvent::CloseRequested), AppControl::Exit);
        assert_eq!(app.driver().phase(), Phase::Terminating);
    }
}
