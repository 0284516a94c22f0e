//! Effect animation modules
//!
//! Modules produce frames over time and report domain events or completion.
//! They run regardless of which source is selected; the arbitrator decides
//! whether their frames reach the strip.

mod burst;
mod champion;

use embassy_time::Instant;

pub use burst::{BurstId, BurstModule};
pub use champion::{ChampionId, ChampionModule};

use crate::frame_buffer::Frame;
use crate::source::SourceId;
use crate::telemetry::{AbilitySlot, GameSnapshot};

/// Domain events raised by modules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleEvent {
    /// The player tried to cast without enough mana
    OutOfMana(AbilitySlot),
    /// The player cast an ability with enough mana
    AbilityCast(AbilitySlot),
}

/// Signals a module reports besides frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleSignal {
    Event(ModuleEvent),
    /// A burst ran for its full duration
    Completed(BurstId),
}

pub trait AnimationModule<const MAX_LEDS: usize> {
    /// Identity used to tag this module's frames
    fn source(&self) -> SourceId;

    /// Consume a fresh snapshot
    fn update(&mut self, _snapshot: &GameSnapshot) {}

    /// Advance to `now`, returning a frame if the module has new output
    fn advance(&mut self, now: Instant) -> Option<Frame<MAX_LEDS>>;

    /// Take the next pending signal
    fn poll_signal(&mut self) -> Option<ModuleSignal> {
        None
    }
}
