//! LED frame buffer and frame snapshots
//!
//! A [`FrameBuffer`] is owned by one producer and mutated in place every
//! tick. A [`Frame`] is a copy of its contents tagged with the producer, so
//! consumers may keep it after the producer moves on.

use heapless::Vec;

use crate::color::Color;
use crate::source::SourceId;

/// A single LED cell
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Led {
    color: Color,
}

impl Led {
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    /// Overwrite the color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Overwrite, or blend to the midpoint when `additive` is set
    pub fn mix_color(&mut self, color: Color, additive: bool) {
        self.color = if additive {
            self.color.midpoint(color)
        } else {
            color
        };
    }

    /// Lower the value channel by `amount`, clamped at zero
    pub fn fade_to_black(&mut self, amount: f32) {
        self.color = self.color.faded(amount);
    }

    pub fn approx_eq(&self, color: Color, epsilon: f32) -> bool {
        self.color.approx_eq(color, epsilon)
    }
}

/// Fixed-length sequence of LEDs, index = physical position
#[derive(Debug, Clone)]
pub struct FrameBuffer<const MAX_LEDS: usize> {
    leds: Vec<Led, MAX_LEDS>,
}

impl<const MAX_LEDS: usize> FrameBuffer<MAX_LEDS> {
    /// Create a buffer of `len` dark LEDs
    ///
    /// `len` is clamped to `MAX_LEDS`.
    pub fn new(len: usize) -> Self {
        let mut leds = Vec::new();
        for _ in 0..len.min(MAX_LEDS) {
            let _ = leds.push(Led::default());
        }
        Self { leds }
    }

    pub fn len(&self) -> usize {
        self.leds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    pub fn leds(&self) -> &[Led] {
        &self.leds
    }

    pub fn leds_mut(&mut self) -> &mut [Led] {
        &mut self.leds
    }

    pub fn set_all(&mut self, color: Color) {
        for led in &mut self.leds {
            led.set_color(color);
        }
    }

    pub fn mix_all(&mut self, color: Color, additive: bool) {
        for led in &mut self.leds {
            led.mix_color(color, additive);
        }
    }

    pub fn fade_all(&mut self, amount: f32) {
        for led in &mut self.leds {
            led.fade_to_black(amount);
        }
    }

    /// Copy the current contents into a frame tagged with `source`
    pub fn snapshot(&self, source: SourceId) -> Frame<MAX_LEDS> {
        let mut colors = Vec::new();
        for led in &self.leds {
            let _ = colors.push(led.color());
        }
        Frame { source, colors }
    }
}

/// Snapshot of LED colors plus the identity of its producer
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<const MAX_LEDS: usize> {
    source: SourceId,
    colors: Vec<Color, MAX_LEDS>,
}

impl<const MAX_LEDS: usize> Frame<MAX_LEDS> {
    pub const fn source(&self) -> SourceId {
        self.source
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
