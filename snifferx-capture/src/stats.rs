//! Capture statistics

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Snapshot of capture statistics
#[derive(Debug, Clone)]
pub struct CaptureStats {
    /// Number of frames delivered to the callback
    pub frames_received: u64,
    /// Total bytes across delivered frames
    pub bytes_received: u64,
    /// Number of frames that failed dissection (counted by the consumer)
    pub frames_malformed: u64,
    /// Time since the capture started
    pub duration: Duration,
    /// Frames per second over the whole capture
    pub frames_per_second: f64,
}

impl CaptureStats {
    /// Format statistics as a human-readable summary
    pub fn format(&self) -> String {
        format!(
            "Received: {} frames ({} bytes)\n\
             Malformed: {} frames\n\
             Duration: {:.2}s ({:.2} fps)",
            self.frames_received,
            self.bytes_received,
            self.frames_malformed,
            self.duration.as_secs_f64(),
            self.frames_per_second
        )
    }
}

/// Thread-safe statistics accumulator shared between the capture thread
/// and the consumer
#[derive(Debug, Clone)]
pub struct StatsAccumulator {
    frames_received: Arc<AtomicU64>,
    bytes_received: Arc<AtomicU64>,
    frames_malformed: Arc<AtomicU64>,
    start_time: Instant,
}

impl StatsAccumulator {
    /// Create a new accumulator, starting the clock now
    pub fn new() -> Self {
        Self {
            frames_received: Arc::new(AtomicU64::new(0)),
            bytes_received: Arc::new(AtomicU64::new(0)),
            frames_malformed: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    /// Record one delivered frame of `len` bytes
    pub fn record_frame(&self, len: usize) {
        self.frames_received.fetch_add(1, Ordering::Relaxed);
        self.bytes_received.fetch_add(len as u64, Ordering::Relaxed);
    }

    /// Record a frame the dissector rejected
    pub fn record_malformed(&self) {
        self.frames_malformed.fetch_add(1, Ordering::Relaxed);
    }

    /// Time elapsed since the accumulator was created
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Take a consistent-enough snapshot of the counters
    pub fn snapshot(&self) -> CaptureStats {
        let frames_received = self.frames_received.load(Ordering::Relaxed);
        let duration = self.elapsed();
        let secs = duration.as_secs_f64();
        let frames_per_second = if secs > 0.0 {
            frames_received as f64 / secs
        } else {
            0.0
        };

        CaptureStats {
            frames_received,
            bytes_received: self.bytes_received.load(Ordering::Relaxed),
            frames_malformed: self.frames_malformed.load(Ordering::Relaxed),
            duration,
            frames_per_second,
        }
    }
}

impl Default for StatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
