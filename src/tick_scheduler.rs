//! Fixed-rate tick driver.
//!
//! Portable pacing without async/await or platform timers: the caller sleeps
//! for the returned duration between ticks, alongside its telemetry poll
//! loop and hook service.

use embassy_time::{Duration, Instant};

use crate::layout::FrameEncoder;
use crate::{Dashboard, OutputDriver};

/// Default tick period (30 ms).
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(30);

/// Result of a tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
    /// Whether a frame was written to the output during this tick.
    pub wrote_frame: bool,
}

/// Tick scheduler driving a [`Dashboard`] at a fixed period.
///
/// Every tick advances the dashboard clock by exactly one period, so the
/// fallback threshold counts ticks rather than wall time. If the caller
/// falls more than two periods behind, the backlog is skipped instead of
/// replayed.
///
/// # Usage
///
/// `OUT_LEDS` is the physical strip length, which must leave room for the
/// layout offset.
///
/// ```ignore
/// let mut scheduler: TickScheduler<'_, _, 60, 64, 8> = TickScheduler::new(dashboard, driver);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     sleep(result.sleep_duration);
/// }
/// ```
pub struct TickScheduler<
    'a,
    O: OutputDriver,
    const MAX_LEDS: usize,
    const OUT_LEDS: usize,
    const KEYS: usize,
> {
    output: O,
    dashboard: Dashboard<'a, MAX_LEDS, KEYS>,
    encoder: FrameEncoder<MAX_LEDS, OUT_LEDS>,
    next_tick: Option<Instant>,
    period: Duration,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const OUT_LEDS: usize, const KEYS: usize>
    TickScheduler<'a, O, MAX_LEDS, OUT_LEDS, KEYS>
{
    /// Create a scheduler ticking every [`DEFAULT_TICK_PERIOD`].
    ///
    /// The encoder takes its layout and brightness from the dashboard.
    pub fn new(dashboard: Dashboard<'a, MAX_LEDS, KEYS>, driver: O) -> Self {
        let encoder = dashboard.encoder();
        Self {
            output: driver,
            dashboard,
            encoder,
            next_tick: None,
            period: DEFAULT_TICK_PERIOD,
        }
    }

    /// Override the tick period.
    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Run one tick and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let max_drift = self.period * 2;
        let scheduled = match self.next_tick {
            Some(next) if now <= next + max_drift => next,
            _ => now,
        };

        let wrote_frame = match self.dashboard.tick(now, self.period) {
            Some(frame) => {
                self.output.write(self.encoder.encode(frame));
                true
            }
            None => false,
        };

        let next_deadline = scheduled + self.period;
        self.next_tick = Some(next_deadline);

        let sleep_duration = next_deadline
            .checked_duration_since(now)
            .unwrap_or(Duration::from_millis(0));

        TickResult {
            next_deadline,
            sleep_duration,
            wrote_frame,
        }
    }

    pub fn dashboard(&self) -> &Dashboard<'a, MAX_LEDS, KEYS> {
        &self.dashboard
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn encoder(&self) -> &FrameEncoder<MAX_LEDS, OUT_LEDS> {
        &self.encoder
    }

    /// Change the output brightness (0-255)
    pub fn set_brightness(&mut self, brightness: u8) {
        self.encoder.set_brightness(brightness);
    }
}
