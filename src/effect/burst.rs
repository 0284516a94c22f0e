//! Color burst animation
//!
//! A short flash: quick fade-in to the burst color, then a fade-out to black
//! over the rest of the duration. A new burst replaces the running one and
//! drops its completion.

use embassy_time::{Duration, Instant};

use super::{AnimationModule, ModuleSignal};
use crate::color::Color;
use crate::frame_buffer::{Frame, FrameBuffer};
use crate::math8::progress;
use crate::source::SourceId;

/// Share of the burst spent fading in
const ATTACK_SHARE: f32 = 0.2;

/// Identifies one burst request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurstId(u32);

#[derive(Debug, Clone, Copy)]
struct ActiveBurst {
    id: BurstId,
    color: Color,
    start: Instant,
    duration: Duration,
}

/// Generic burst module
#[derive(Debug, Clone)]
pub struct BurstModule<const MAX_LEDS: usize> {
    leds: FrameBuffer<MAX_LEDS>,
    active: Option<ActiveBurst>,
    completed: Option<BurstId>,
    next_id: u32,
}

impl<const MAX_LEDS: usize> BurstModule<MAX_LEDS> {
    pub fn new(led_count: usize) -> Self {
        Self {
            leds: FrameBuffer::new(led_count),
            active: None,
            completed: None,
            next_id: 0,
        }
    }

    /// Start a burst of `color` lasting `duration`
    ///
    /// Supersedes any running burst; its completion will never be reported.
    pub fn color_burst(&mut self, color: Color, duration: Duration, now: Instant) -> BurstId {
        let id = BurstId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.completed = None;
        self.active = Some(ActiveBurst {
            id,
            color,
            start: now,
            duration,
        });
        id
    }

    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the running burst
    pub fn active_id(&self) -> Option<BurstId> {
        self.active.map(|burst| burst.id)
    }

    fn envelope(t: f32) -> f32 {
        if t < ATTACK_SHARE {
            t / ATTACK_SHARE
        } else {
            (1.0 - (t - ATTACK_SHARE) / (1.0 - ATTACK_SHARE)).max(0.0)
        }
    }
}

impl<const MAX_LEDS: usize> AnimationModule<MAX_LEDS> for BurstModule<MAX_LEDS> {
    fn source(&self) -> SourceId {
        SourceId::Burst
    }

    fn advance(&mut self, now: Instant) -> Option<Frame<MAX_LEDS>> {
        let burst = self.active?;
        let elapsed = now
            .checked_duration_since(burst.start)
            .unwrap_or(Duration::from_millis(0));

        if elapsed >= burst.duration {
            self.leds.set_all(Color::BLACK);
            self.active = None;
            self.completed = Some(burst.id);
        } else {
            let level = Self::envelope(progress(elapsed, burst.duration));
            let color = Color {
                val: burst.color.val * level,
                ..burst.color
            };
            self.leds.set_all(color);
        }

        Some(self.leds.snapshot(SourceId::Burst))
    }

    fn poll_signal(&mut self) -> Option<ModuleSignal> {
        self.completed.take().map(ModuleSignal::Completed)
    }
}
