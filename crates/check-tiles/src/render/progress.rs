//! Progress reporting and cooperative cancellation.
//!
//! Both are checked once per completed frame. A frame is never abandoned
//! half-drawn.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Receives a notification after each finished frame.
pub trait Progress {
    fn frame_rendered(&mut self, done: u32, total: u32);
}

impl<F> Progress for F
where
    F: FnMut(u32, u32),
{
    fn frame_rendered(&mut self, done: u32, total: u32) {
        self(done, total)
    }
}

/// Logs each finished frame at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl Progress for LogProgress {
    fn frame_rendered(&mut self, done: u32, total: u32) {
        tracing::debug!(
            frame = done,
            total = total,
            fraction = done as f32 / total.max(1) as f32,
            "Frame rendered"
        );
    }
}

/// Shared flag to stop a render between frames.
///
/// Clones share the same flag; cancelling any clone cancels them all.
#[derive(Debug, Default, Clone)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
