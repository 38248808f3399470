//! Wall-clock sampling.
//!
//! One [`TimeSample`] is taken per frame and shared by every builder, so the
//! hands and the label never show two different instants.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Immutable local date and time snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl TimeSample {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { date: at.date(), time: at.time() }
    }

    /// 0–23.
    #[inline]
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// 0–11.
    #[inline]
    pub fn hour12(&self) -> u32 {
        self.time.hour() % 12
    }

    #[inline]
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    #[inline]
    pub fn second(&self) -> u32 {
        self.time.second()
    }

    /// Fraction of the current second in `[0, 1)`.
    ///
    /// chrono encodes a leap second as nanoseconds past 1e9; those are held
    /// at the end of the second.
    pub fn subsec(&self) -> f64 {
        let nanos = self.time.nanosecond().min(999_999_999);
        f64::from(nanos) / 1e9
    }

    /// Seconds including the sub-second fraction, in `[0, 60)`.
    #[inline]
    pub fn second_fraction(&self) -> f64 {
        f64::from(self.second()) + self.subsec()
    }

    #[inline]
    pub fn datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Source of time samples.
pub trait TimeSource {
    fn sample(&self) -> TimeSample;
}

/// The local system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn sample(&self) -> TimeSample {
        TimeSample::new(Local::now().naive_local())
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub TimeSample);

impl FixedTimeSource {
    pub fn new(sample: TimeSample) -> Self {
        Self(sample)
    }
}

impl TimeSource for FixedTimeSource {
    fn sample(&self) -> TimeSample {
        self.0
    }
}

#[cfg(test)]
pub(crate) fn sample_at(h: u32, m: u32, s: u32, millis: u32) -> TimeSample {
    let at = NaiveDate::from_ymd_opt(2025, 3, 7)
        .and_then(|d| d.and_hms_milli_opt(h, m, s, millis))
        .expect("valid test time");
    TimeSample::new(at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_are_read_from_the_instant() {
        let s = sample_at(15, 4, 5, 250);
        assert_eq!(s.hour(), 15);
        assert_eq!(s.hour12(), 3);
        assert_eq!(s.minute(), 4);
        assert_eq!(s.second(), 5);
        assert!((s.subsec() - 0.25).abs() < 1e-9);
        assert!((s.second_fraction() - 5.25).abs() < 1e-9);
    }

    #[test]
    fn noon_and_midnight_map_to_zero_on_the_dial() {
        assert_eq!(sample_at(0, 0, 0, 0).hour12(), 0);
        assert_eq!(sample_at(12, 0, 0, 0).hour12(), 0);
        assert_eq!(sample_at(23, 59, 59, 999).hour12(), 11);
    }

    #[test]
    fn leap_second_stays_below_the_next_second() {
        let at = NaiveDate::from_ymd_opt(2016, 12, 31)
            .and_then(|d| d.and_hms_milli_opt(23, 59, 59, 1_500))
            .expect("leap second");
        let s = TimeSample::new(at);
        assert_eq!(s.second(), 59);
        assert!(s.subsec() < 1.0);
        assert!(s.second_fraction() < 60.0);
    }

    #[test]
    fn fixed_source_is_stable() {
        let source = FixedTimeSource::new(sample_at(9, 30, 0, 0));
        assert_eq!(source.sample(), source.sample());
        assert_eq!(source.sample().datetime().to_string(), "2025-03-07 09:30:00");
    }

    #[test]
    fn system_source_produces_valid_components() {
        let s = SystemTimeSource.sample();
        assert!(s.hour() < 24);
        assert!(s.minute() < 60);
        assert!(s.second_fraction() < 60.0);
    }
}
