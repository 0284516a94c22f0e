//! Strongly typed game snapshot consumed by the dashboard
//!
//! Decoding the game client's JSON happens outside this crate; the poller
//! builds a [`GameSnapshot`] and publishes it whole.

use heapless::{String, Vec};

/// Maximum cast attempts carried by one snapshot
pub const MAX_CAST_ATTEMPTS: usize = 4;

/// Maximum stored champion name length
pub const CHAMPION_NAME_LEN: usize = 32;

/// Kind of resource the champion spends on abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceKind {
    #[default]
    Mana,
    Energy,
    /// Rage, fury, health costs or no resource at all
    Other,
}

/// Ability key slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilitySlot {
    Q,
    W,
    E,
    R,
}

impl AbilitySlot {
    pub const ALL: [Self; 4] = [Self::Q, Self::W, Self::E, Self::R];

    /// Map a pressed key to the ability bound to it
    pub const fn from_key(key: char) -> Option<Self> {
        Some(match key.to_ascii_lowercase() {
            'q' => Self::Q,
            'w' => Self::W,
            'e' => Self::E,
            'r' => Self::R,
            _ => return None,
        })
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Q => 0,
            Self::W => 1,
            Self::E => 2,
            Self::R => 3,
        }
    }
}

/// Learned level of each ability (0 = not learned)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AbilityLoadout {
    levels: [u8; 4],
}

impl AbilityLoadout {
    pub const fn new(q: u8, w: u8, e: u8, r: u8) -> Self {
        Self {
            levels: [q, w, e, r],
        }
    }

    pub const fn level(&self, slot: AbilitySlot) -> u8 {
        self.levels[slot.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChampionStats {
    pub current_health: f32,
    pub max_health: f32,
    pub resource_kind: ResourceKind,
    pub resource_value: f32,
    pub resource_max: f32,
}

/// A cast the player tried since the previous poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastAttempt {
    pub ability: AbilitySlot,
}

/// One complete poll result
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameSnapshot {
    pub champion_name: String<CHAMPION_NAME_LEN>,
    pub level: u8,
    pub is_dead: bool,
    pub stats: ChampionStats,
    pub abilities: AbilityLoadout,
    pub cast_attempts: Vec<CastAttempt, MAX_CAST_ATTEMPTS>,
}

impl GameSnapshot {
    /// Create a snapshot with the given health and everything else default
    pub fn with_health(current_health: f32, max_health: f32) -> Self {
        Self {
            stats: ChampionStats {
                current_health,
                max_health,
                ..ChampionStats::default()
            },
            ..Self::default()
        }
    }

    /// Set the champion name, truncating to [`CHAMPION_NAME_LEN`] bytes
    pub fn set_champion_name(&mut self, name: &str) {
        self.champion_name.clear();
        for ch in name.chars() {
            if self.champion_name.push(ch).is_err() {
                break;
            }
        }
    }

    /// Current health over max health, clamped to `[0, 1]`.
    ///
    /// Returns `None` when max health is unknown or invalid.
    pub fn health_fraction(&self) -> Option<f32> {
        let ChampionStats {
            current_health,
            max_health,
            ..
        } = self.stats;
        if !max_health.is_finite() || max_health <= 0.0 || !current_health.is_finite() {
            return None;
        }
        Some((current_health / max_health).clamp(0.0, 1.0))
    }
}
