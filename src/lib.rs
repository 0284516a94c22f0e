#![no_std]

pub mod arbitrator;
pub mod channel;
pub mod color;
pub mod config;
pub mod dashboard;
pub mod effect;
pub mod frame_buffer;
pub mod health_bar;
pub mod input;
pub mod layout;
pub mod math8;
pub mod source;
pub mod telemetry;
pub mod tick_scheduler;

pub use arbitrator::{Arbitrator, BurstRequest};
pub use config::{ArbitrationConfig, DashboardConfig, HealthBarConfig};
pub use dashboard::Dashboard;
pub use effect::{AnimationModule, BurstId, BurstModule, ChampionId, ChampionModule, ModuleEvent};
pub use frame_buffer::{Frame, FrameBuffer, Led};
pub use health_bar::{HealthBarRenderer, lit_count};
pub use input::{InputHub, InputReceiver, KeySender, TelemetrySender};
pub use layout::{FrameEncoder, StripLayout};
pub use source::SourceId;
pub use telemetry::{AbilityLoadout, AbilitySlot, CastAttempt, ChampionStats, GameSnapshot};
pub use tick_scheduler::{TickResult, TickScheduler};

pub use color::{Color, Palette, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Writes must not block longer than one tick period.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
