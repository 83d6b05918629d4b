//! Frame timing.
//!
//! One [`FrameClock`] per window; `tick()` once per presented frame. The
//! elapsed time feeds the `time` uniform.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
