//! Champion-specific modules
//!
//! Champion modules watch the player's resource and abilities. They do not
//! render on their own; they raise events that the arbitrator turns into
//! animations.

use embassy_time::Instant;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{AnimationModule, ModuleEvent, ModuleSignal};
use crate::frame_buffer::Frame;
use crate::source::SourceId;
use crate::telemetry::{AbilityLoadout, AbilitySlot, ChampionStats, GameSnapshot, ResourceKind};

const CHAMPION_NAME_VELKOZ: &str = "velkoz";

const CHAMPION_ID_VELKOZ: u8 = 0;

/// Pending events kept between ticks
const EVENT_QUEUE_SIZE: usize = 8;

// Mana cost per ability level
const VELKOZ_Q_COST: [u16; 5] = [40, 45, 50, 55, 60];
const VELKOZ_W_COST: [u16; 5] = [50, 55, 60, 65, 70];
const VELKOZ_E_COST: [u16; 5] = [50, 55, 60, 65, 70];
const VELKOZ_R_COST: [u16; 3] = [100, 100, 100];

/// Champions that have a dedicated module
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ChampionId {
    VelKoz = CHAMPION_ID_VELKOZ,
}

impl ChampionId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            CHAMPION_ID_VELKOZ => Self::VelKoz,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VelKoz => CHAMPION_NAME_VELKOZ,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            CHAMPION_NAME_VELKOZ => Some(Self::VelKoz),
            _ => None,
        }
    }

    /// Pick a module for the champion name reported by the game client.
    ///
    /// Raw names look like `game_character_displayname_Velkoz`, so this is a
    /// case-insensitive substring match.
    pub fn detect(champion_name: &str) -> Option<Self> {
        [Self::VelKoz]
            .into_iter()
            .find(|id| contains_ignore_ascii_case(champion_name, id.as_str()))
    }

    pub fn to_module(self) -> ChampionModule {
        ChampionModule::new(self)
    }

    /// Mana cost of `slot` at ability `level` (1-based)
    pub fn mana_cost(self, slot: AbilitySlot, level: u8) -> Option<u16> {
        let table: &[u16] = match (self, slot) {
            (Self::VelKoz, AbilitySlot::Q) => &VELKOZ_Q_COST,
            (Self::VelKoz, AbilitySlot::W) => &VELKOZ_W_COST,
            (Self::VelKoz, AbilitySlot::E) => &VELKOZ_E_COST,
            (Self::VelKoz, AbilitySlot::R) => &VELKOZ_R_COST,
        };
        let index = usize::from(level.checked_sub(1)?);
        table.get(index.min(table.len() - 1)).copied()
    }
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

/// Module that raises events for casts the player cannot afford
#[derive(Debug, Clone)]
pub struct ChampionModule {
    id: ChampionId,
    stats: Option<ChampionStats>,
    abilities: AbilityLoadout,
    events: Deque<ModuleEvent, EVENT_QUEUE_SIZE>,
}

impl ChampionModule {
    pub const fn new(id: ChampionId) -> Self {
        Self {
            id,
            stats: None,
            abilities: AbilityLoadout::new(0, 0, 0, 0),
            events: Deque::new(),
        }
    }

    pub const fn id(&self) -> ChampionId {
        self.id
    }

    /// Handle a key press from the global keyboard hook
    pub fn on_key_pressed(&mut self, key: char) {
        if let Some(slot) = AbilitySlot::from_key(key) {
            self.attempt_cast(slot);
        }
    }

    /// Evaluate a cast attempt against the last known resource
    pub fn attempt_cast(&mut self, slot: AbilitySlot) {
        let Some(stats) = self.stats else {
            return;
        };
        let level = self.abilities.level(slot);
        let Some(cost) = self.id.mana_cost(slot, level) else {
            // Not learned yet
            return;
        };

        let event = if stats.resource_kind == ResourceKind::Mana
            && stats.resource_value < f32::from(cost)
        {
            ModuleEvent::OutOfMana(slot)
        } else {
            ModuleEvent::AbilityCast(slot)
        };

        if self.events.push_back(event).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[ChampionModule] event queue full, dropping {:?}", event);
        }
    }
}

impl<const MAX_LEDS: usize> AnimationModule<MAX_LEDS> for ChampionModule {
    fn source(&self) -> SourceId {
        SourceId::Champion(self.id)
    }

    fn update(&mut self, snapshot: &GameSnapshot) {
        self.stats = Some(snapshot.stats);
        self.abilities = snapshot.abilities;
        for attempt in &snapshot.cast_attempts {
            self.attempt_cast(attempt.ability);
        }
    }

    fn advance(&mut self, _now: Instant) -> Option<Frame<MAX_LEDS>> {
        None
    }

    fn poll_signal(&mut self) -> Option<ModuleSignal> {
        self.events.pop_front().map(ModuleSignal::Event)
    }
}
