//! Health bar renderer
//!
//! Maps the player's health onto the strip. Lit LEDs blend toward the
//! health color, an LED that just went dark flashes the hurt color for one
//! render and then decays to black.

use crate::color::{Color, Palette};
use crate::config::HealthBarConfig;
use crate::frame_buffer::{Frame, FrameBuffer};
use crate::source::SourceId;
use crate::telemetry::GameSnapshot;

/// Number of LEDs lit for a health fraction
///
/// The fraction is clamped to `[0, 1]`; NaN lights nothing.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn lit_count(fraction: f32, led_count: usize) -> usize {
    if fraction.is_nan() {
        return 0;
    }
    let lit = libm::floorf(fraction.clamp(0.0, 1.0) * led_count as f32) as usize;
    lit.min(led_count)
}

/// Health bar renderer, owns the buffer it renders into
#[derive(Debug, Clone)]
pub struct HealthBarRenderer<const MAX_LEDS: usize> {
    leds: FrameBuffer<MAX_LEDS>,
    palette: Palette,
    config: HealthBarConfig,
}

impl<const MAX_LEDS: usize> HealthBarRenderer<MAX_LEDS> {
    pub fn new(led_count: usize, palette: Palette, config: HealthBarConfig) -> Self {
        Self {
            leds: FrameBuffer::new(led_count),
            palette,
            config,
        }
    }

    pub fn buffer(&self) -> &FrameBuffer<MAX_LEDS> {
        &self.leds
    }

    /// Render one step of the health bar
    ///
    /// A missing snapshot or unknown max health turns the strip off.
    pub fn render(&mut self, snapshot: Option<&GameSnapshot>) -> Frame<MAX_LEDS> {
        match snapshot {
            Some(snapshot) if snapshot.is_dead => self.leds.set_all(self.palette.dead),
            Some(snapshot) => match snapshot.health_fraction() {
                Some(fraction) => self.render_fraction(fraction),
                None => self.leds.set_all(Color::BLACK),
            },
            None => self.leds.set_all(Color::BLACK),
        }

        self.leds.snapshot(SourceId::HealthBar)
    }

    fn render_fraction(&mut self, fraction: f32) {
        let lit = lit_count(fraction, self.leds.len());
        let Palette { health, hurt, .. } = self.palette;
        let HealthBarConfig {
            decay,
            match_epsilon,
        } = self.config;

        for (i, led) in self.leds.leds_mut().iter_mut().enumerate() {
            if i < lit {
                led.mix_color(health, true);
            } else if led.approx_eq(health, match_epsilon) {
                led.set_color(hurt);
            } else {
                led.fade_to_black(decay);
            }
        }
    }
}
