//! Frame source arbitration
//!
//! Decides which producer currently owns the strip. Frames from any other
//! producer are dropped. When the owner stays silent past the fallback
//! threshold, the health bar may render without taking ownership.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Color;
use crate::config::ArbitrationConfig;
use crate::effect::{BurstId, ModuleEvent};
use crate::frame_buffer::Frame;
use crate::source::SourceId;

/// Burst the caller must start after a transition into the burst state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstRequest {
    pub color: Color,
    pub duration: Duration,
}

/// Source arbitration state machine
#[derive(Debug, Clone)]
pub struct Arbitrator {
    current: SourceId,
    /// Source to return to once a burst completes
    home: SourceId,
    time_since_last_frame: Duration,
    config: ArbitrationConfig,
    active_burst: Option<BurstId>,
}

impl Arbitrator {
    /// Create an arbitrator starting on the health bar
    ///
    /// `home` is the champion module source when one is configured.
    pub fn new(config: &ArbitrationConfig, home: Option<SourceId>) -> Self {
        Self {
            current: SourceId::HealthBar,
            home: home.unwrap_or(SourceId::HealthBar),
            // Fallback is armed until the first frame is forwarded
            time_since_last_frame: config.fallback_threshold,
            config: *config,
            active_burst: None,
        }
    }

    pub const fn current(&self) -> SourceId {
        self.current
    }

    pub const fn time_since_last_frame(&self) -> Duration {
        self.time_since_last_frame
    }

    /// React to a module event
    ///
    /// Returns the burst to start when the event moves the strip into the
    /// burst state. The caller reports its id with [`Self::burst_started`].
    pub fn on_event(&mut self, event: ModuleEvent) -> Option<BurstRequest> {
        match event {
            ModuleEvent::OutOfMana(_) => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[Arbitrator] {:?} while on {}, switching to burst",
                    event,
                    self.current.as_str()
                );
                self.current = SourceId::Burst;
                self.active_burst = None;
                Some(BurstRequest {
                    color: self.config.burst_color,
                    duration: self.config.burst_duration,
                })
            }
            ModuleEvent::AbilityCast(_) => {
                #[cfg(feature = "esp32-log")]
                println!("[Arbitrator] ignoring {:?}", event);
                None
            }
        }
    }

    /// Record the id of the burst started for the last request
    pub fn burst_started(&mut self, id: BurstId) {
        self.active_burst = Some(id);
    }

    /// Handle a burst completion
    ///
    /// Only the burst started for the current burst state hands the strip
    /// back; stale completions are ignored. Returns whether the state changed.
    pub fn on_burst_complete(&mut self, id: BurstId) -> bool {
        if self.current != SourceId::Burst || self.active_burst != Some(id) {
            #[cfg(feature = "esp32-log")]
            println!("[Arbitrator] ignoring stale completion {:?}", id);
            return false;
        }
        self.active_burst = None;
        self.current = self.home;
        #[cfg(feature = "esp32-log")]
        println!("[Arbitrator] burst done, back to {}", self.current.as_str());
        true
    }

    /// Offer a frame; returns whether it should be forwarded
    pub fn offer<const MAX_LEDS: usize>(&mut self, frame: &Frame<MAX_LEDS>) -> bool {
        if frame.source() != self.current {
            return false;
        }
        self.time_since_last_frame = Duration::from_millis(0);
        true
    }

    /// Advance the silence timer by one tick
    pub fn advance(&mut self, elapsed: Duration) {
        self.time_since_last_frame += elapsed;
    }

    /// Whether the health bar should render as a fallback this tick
    ///
    /// Fallback renders never change the current source and never reset the
    /// timer, so they repeat every tick until the owner speaks again.
    pub fn fallback_due(&self) -> bool {
        self.time_since_last_frame >= self.config.fallback_threshold
    }
}
