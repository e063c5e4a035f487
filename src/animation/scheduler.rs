//! Frame scheduling capability.
//!
//! The controller never talks to a host frame loop directly. It asks a
//! [`FrameScheduler`] for the next frame and cancels it when a newer intent
//! supersedes the run. [`FrameQueue`] is the implementation used both by the
//! Bevy driver and by tests that step frames by hand.

use bevy::prelude::*;

/// Opaque token identifying one requested frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Schedule-next-frame / cancel-pending capability.
pub trait FrameScheduler {
    /// Request one frame callback.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a previously requested frame. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Single-slot frame queue: at most one frame is in flight.
#[derive(Resource, Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl FrameQueue {
    /// Take the pending frame for delivery, if any.
    pub fn take_due(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    /// The frame waiting to be delivered.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Whether no frame is waiting.
    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}
