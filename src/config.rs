//! Dashboard configuration
//!
//! Supplied once at startup. Defaults reproduce the tuned visual constants.

use embassy_time::Duration;

use crate::color::{Color, Palette};
use crate::effect::ChampionId;
use crate::layout::StripLayout;

/// Default number of LEDs in the strip
pub const DEFAULT_LED_COUNT: usize = 60;

/// How much value a dark LED loses per health bar render
pub const DEFAULT_HEALTH_DECAY: f32 = 0.05;

/// Tolerance for "this LED still shows the health color"
pub const DEFAULT_MATCH_EPSILON: f32 = 0.01;

/// How long a source may stay silent before the health bar renders anyway
pub const DEFAULT_FALLBACK_THRESHOLD: Duration = Duration::from_millis(1500);

/// Duration of the no-mana burst
pub const DEFAULT_BURST_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy)]
pub struct HealthBarConfig {
    /// Value removed from unlit LEDs on each render
    pub decay: f32,
    /// Epsilon used to detect LEDs that just went dark
    pub match_epsilon: f32,
}

impl Default for HealthBarConfig {
    fn default() -> Self {
        Self {
            decay: DEFAULT_HEALTH_DECAY,
            match_epsilon: DEFAULT_MATCH_EPSILON,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ArbitrationConfig {
    /// Silence after which the health bar is rendered as a fallback
    pub fallback_threshold: Duration,
    /// Color of the burst started on a no-mana cast
    pub burst_color: Color,
    /// Duration of that burst
    pub burst_duration: Duration,
}

impl Default for ArbitrationConfig {
    fn default() -> Self {
        Self {
            fallback_threshold: DEFAULT_FALLBACK_THRESHOLD,
            burst_color: Palette::new().no_mana,
            burst_duration: DEFAULT_BURST_DURATION,
        }
    }
}

/// Configuration for the dashboard
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Physical strip length (clamped to the buffer capacity)
    pub led_count: usize,
    pub palette: Palette,
    pub health_bar: HealthBarConfig,
    pub arbitration: ArbitrationConfig,
    pub layout: StripLayout,
    /// Global output brightness (0-255)
    pub brightness: u8,
    /// Champion module to load, if any
    pub champion: Option<ChampionId>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            led_count: DEFAULT_LED_COUNT,
            palette: Palette::new(),
            health_bar: HealthBarConfig::default(),
            arbitration: ArbitrationConfig::default(),
            layout: StripLayout::default(),
            brightness: 255,
            champion: None,
        }
    }
}

impl DashboardConfig {
    /// Default configuration for a strip of `led_count` LEDs
    pub fn with_led_count(led_count: usize) -> Self {
        Self {
            led_count,
            ..Self::default()
        }
    }
}
