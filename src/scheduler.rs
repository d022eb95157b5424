//! Frame and countdown scheduling seam
//!
//! The browser drives the game through callbacks the bootstrap wires
//! up once; the session only arms and cancels them through this trait.
//! Every armed callback has a handle the session owns, so leaving a
//! state can always cancel exactly what that state scheduled.

pub trait Scheduler {
    type FrameHandle;
    type RepeatHandle;

    /// Arm the per-frame callback once, before the next paint
    fn schedule_frame(&mut self) -> Self::FrameHandle;
    fn cancel_frame(&mut self, handle: Self::FrameHandle);

    /// Arm the countdown callback to fire every `interval_ms` until
    /// cancelled
    fn schedule_repeating(&mut self, interval_ms: u32) -> Self::RepeatHandle;
    fn cancel_repeating(&mut self, handle: Self::RepeatHandle);
}
