use std::time::{Duration, Instant};

/// Fixed-rate frame schedule.
///
/// Deadlines advance in whole intervals from the previous deadline, so the
/// long-run rate holds even when individual frames land late. After a stall
/// longer than one interval the schedule re-anchors to the current instant
/// rather than replaying the missed frames.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next: Option<Instant>,
}

impl FramePacer {
    /// Creates a pacer for `fps` frames per second (`0` is treated as `1`).
    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1);
        Self {
            interval: Duration::from_secs(1) / fps,
            next: None,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Next scheduled frame, or `None` before the first frame.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Returns `true` when a frame should be produced at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        match self.next {
            None => true,
            Some(next) => now >= next,
        }
    }

    /// Records a frame produced at `now` and returns the next deadline.
    pub fn advance(&mut self, now: Instant) -> Instant {
        let next = match self.next {
            Some(prev) if now.saturating_duration_since(prev) < self.interval => {
                prev + self.interval
            }
            _ => now + self.interval,
        };
        self.next = Some(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn sixty_fps_interval() {
        let pacer = FramePacer::new(60);
        assert_eq!(pacer.interval(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn zero_fps_clamps_to_one() {
        assert_eq!(FramePacer::new(0).interval(), Duration::from_secs(1));
    }

    // ── scheduling ────────────────────────────────────────────────────────

    #[test]
    fn first_frame_is_due_immediately() {
        let pacer = FramePacer::new(60);
        assert!(pacer.deadline().is_none());
        assert!(pacer.is_due(Instant::now()));
    }

    #[test]
    fn deadlines_advance_in_whole_intervals() {
        let mut pacer = FramePacer::new(50);
        let t0 = Instant::now();
        let interval = pacer.interval();

        let d1 = pacer.advance(t0);
        assert_eq!(d1, t0 + interval);
        assert!(!pacer.is_due(t0 + interval / 2));
        assert!(pacer.is_due(d1));

        // A slightly late frame keeps the original cadence.
        let d2 = pacer.advance(d1 + Duration::from_millis(3));
        assert_eq!(d2, t0 + interval * 2);
    }

    #[test]
    fn long_stall_reanchors_instead_of_bursting() {
        let mut pacer = FramePacer::new(60);
        let t0 = Instant::now();
        pacer.advance(t0);

        let late = t0 + Duration::from_secs(2);
        let next = pacer.advance(late);
        assert_eq!(next, late + pacer.interval());
        assert!(!pacer.is_due(late));
    }
}
