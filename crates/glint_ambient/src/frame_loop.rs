//! Fixed-rate frame driver
//!
//! Hosts with a display-refresh callback drive `AmbientBackground::frame`
//! themselves; everyone else spawns a `FrameLoop`. The loop re-checks its
//! cancel flag after every sleep, so cancellation always lands before the
//! next tick runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// A cancellable repeating task on a fixed-rate timer
pub struct FrameLoop {
    cancelled: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl FrameLoop {
    /// Spawn a loop invoking `tick` roughly `target_fps` times per second
    /// with the elapsed milliseconds since the previous tick.
    ///
    /// Call `cancel` from the owning side only; cancelling from inside the
    /// tick callback would join the loop onto itself.
    pub fn spawn<F>(target_fps: u32, mut tick: F) -> Self
    where
        F: FnMut(f32) + Send + 'static,
    {
        let interval = Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)));
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();

        let thread = std::thread::spawn(move || {
            let mut last = Instant::now();
            loop {
                std::thread::sleep(interval);
                if flag.load(Ordering::SeqCst) {
                    break;
                }
                let now = Instant::now();
                let dt_ms = now.duration_since(last).as_secs_f32() * 1000.0;
                last = now;
                tick(dt_ms);
            }
            tracing::trace!("frame loop stopped");
        });

        Self {
            cancelled,
            thread: Some(thread),
        }
    }

    /// Stop the loop before its next tick. Idempotent.
    pub fn cancel(&mut self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            if let Some(thread) = self.thread.take() {
                let _ = thread.join();
            }
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
