//! Raw frame capture wrapper around pcap
//!
//! Owns the capture socket lifecycle: open the device, read frames on a
//! background thread, deliver each one to a callback, release the handle
//! on stop. The decoder never sees any of this; it only receives
//! already-materialized byte buffers.

use parking_lot::{Mutex, RwLock};
use pcap::{Active, Capture, Device};
use snifferx_core::{Error, Packet, Result};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::interface::{get_interface, InterfaceInfo};
use crate::stats::{CaptureStats, StatsAccumulator};

/// Default snapshot length: the full 65535-byte receive bound
const DEFAULT_SNAPLEN: i32 = 65535;

/// Default read timeout (milliseconds)
const DEFAULT_TIMEOUT_MS: i32 = 1000;

/// Configuration for frame capture
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Maximum bytes to capture per frame
    pub snaplen: i32,
    /// Read timeout in milliseconds
    pub timeout_ms: i32,
    /// Enable promiscuous mode
    pub promiscuous: bool,
    /// Deliver frames as soon as they arrive
    pub immediate_mode: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            snaplen: DEFAULT_SNAPLEN,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            promiscuous: true,
            immediate_mode: true,
        }
    }
}

/// State of the capture loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// Not running
    Stopped,
    /// Reader thread is delivering frames
    Running,
}

/// Frame source feeding the dissector
pub struct FrameCapture {
    /// Interface name
    interface: String,
    /// Interface information
    interface_info: InterfaceInfo,
    /// Capture configuration
    config: CaptureConfig,
    /// Active pcap handle (while running)
    capture: Arc<Mutex<Option<Capture<Active>>>>,
    /// Current state
    state: Arc<RwLock<CaptureState>>,
    /// Shared statistics
    stats: StatsAccumulator,
}

impl FrameCapture {
    /// Create a new frame capture on the specified interface
    pub fn new(interface: &str) -> Result<Self> {
        let interface_info = get_interface(interface)?;

        if !interface_info.is_up {
            return Err(Error::capture(format!(
                "Interface '{}' is not up",
                interface
            )));
        }

        info!("Created frame capture on interface: {}", interface);

        Ok(Self {
            interface: interface.to_string(),
            interface_info,
            config: CaptureConfig::default(),
            capture: Arc::new(Mutex::new(None)),
            state: Arc::new(RwLock::new(CaptureState::Stopped)),
            stats: StatsAccumulator::new(),
        })
    }

    /// Create a new frame capture with custom configuration
    pub fn with_config(interface: &str, config: CaptureConfig) -> Result<Self> {
        let mut capture = Self::new(interface)?;
        capture.config = config;
        Ok(capture)
    }

    /// Get interface information
    pub fn interface_info(&self) -> &InterfaceInfo {
        &self.interface_info
    }

    /// Get current capture state
    pub fn state(&self) -> CaptureState {
        *self.state.read()
    }

    /// Check if the reader thread is running
    pub fn is_running(&self) -> bool {
        *self.state.read() == CaptureState::Running
    }

    /// Get current statistics
    pub fn stats(&self) -> CaptureStats {
        self.stats.snapshot()
    }

    /// Shared statistics handle, for consumers that count malformed frames
    pub fn stats_handle(&self) -> StatsAccumulator {
        self.stats.clone()
    }

    /// Open the pcap handle with the current configuration
    fn open_capture(&self) -> Result<Capture<Active>> {
        debug!("Opening pcap capture on {}", self.interface);

        let device = Device::from(self.interface.as_str());
        let capture = Capture::from_device(device)
            .map_err(|e| Error::capture(format!("Failed to create capture: {}", e)))?
            .promisc(self.config.promiscuous)
            .snaplen(self.config.snaplen)
            .timeout(self.config.timeout_ms)
            .immediate_mode(self.config.immediate_mode)
            .open()
            .map_err(|e| Error::capture(format!("Failed to open capture: {}", e)))?;

        info!("Capture open on {}", self.interface);
        Ok(capture)
    }

    /// Start the read loop, delivering every received frame to `callback`.
    ///
    /// The callback runs on the reader thread; it must not block for long
    /// or frames will back up in the kernel buffer.
    pub fn start<F>(&mut self, mut callback: F) -> Result<()>
    where
        F: FnMut(Packet) + Send + 'static,
    {
        if *self.state.read() != CaptureState::Stopped {
            return Err(Error::capture("Capture already running"));
        }

        let capture = self.open_capture()?;
        *self.capture.lock() = Some(capture);
        *self.state.write() = CaptureState::Running;

        info!("Starting frame capture on {}", self.interface);

        let capture_arc = Arc::clone(&self.capture);
        let state_arc = Arc::clone(&self.state);
        let stats = self.stats.clone();
        let interface = self.interface.clone();

        thread::spawn(move || {
            let mut capture_guard = capture_arc.lock();
            if let Some(capture) = capture_guard.as_mut() {
                loop {
                    if *state_arc.read() == CaptureState::Stopped {
                        debug!("Capture stopped");
                        break;
                    }

                    match capture.next_packet() {
                        Ok(frame) => {
                            let data = frame.data.to_vec();
                            stats.record_frame(data.len());
                            callback(Packet::new(interface.clone(), data));
                        }
                        Err(pcap::Error::TimeoutExpired) => {
                            // Timeout is normal, lets the stop flag get checked
                            continue;
                        }
                        Err(e) => {
                            error!("Frame capture error: {}", e);
                            break;
                        }
                    }
                }
            }

            *state_arc.write() = CaptureState::Stopped;
            info!("Capture thread finished");
        });

        Ok(())
    }

    /// Stop the read loop and release the pcap handle
    pub fn stop(&mut self) -> Result<()> {
        if *self.state.read() == CaptureState::Stopped {
            return Ok(());
        }

        info!("Stopping frame capture on {}", self.interface);
        *self.state.write() = CaptureState::Stopped;

        // Give the reader thread one timeout period to notice
        thread::sleep(Duration::from_millis(100));

        *self.capture.lock() = None;
        Ok(())
    }
}

impl Drop for FrameCapture {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}
