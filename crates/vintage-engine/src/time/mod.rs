//! Redraw pacing.
//!
//! Each window owns a [`FramePacer`]; the runtime asks it whether a redraw is
//! due and sleeps until its next deadline otherwise.

mod pacer;

pub use pacer::FramePacer;
