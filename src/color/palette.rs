use super::Color;

pub const HEALTH: Color = Color::new(0.29, 0.79, 1.0);
pub const HURT: Color = Color::new(0.09, 0.8, 1.0);
pub const DEAD: Color = Color::new(0.0, 0.8, 0.77);
pub const NO_MANA: Color = Color::new(0.52, 0.66, 1.0);

/// Colors used by the dashboard renderers
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Lit part of the health bar
    pub health: Color,
    /// One-tick flash on LEDs that just lost health
    pub hurt: Color,
    /// Whole strip while the player is dead
    pub dead: Color,
    /// Burst shown on a cast attempt without enough mana
    pub no_mana: Color,
}

impl Palette {
    pub const fn new() -> Self {
        Self {
            health: HEALTH,
            hurt: HURT,
            dead: DEAD,
            no_mana: NO_MANA,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
