//! Floating point HSV colors
//!
//! Frame state is kept in HSV so blending and fading stay in the same space
//! the palette is authored in. Conversion to 8-bit RGB happens only at the
//! egress boundary.

mod palette;

use smart_leds::RGB8;
use smart_leds::hsv::{Hsv as HSV, hsv2rgb};

pub use palette::Palette;

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// HSV color with `f32` channels.
///
/// Hue and saturation live in `[0, 1]`. Value is usually in `[0, 1]` but may
/// exceed 1 for over-bright mixing; it is clamped on conversion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub hue: f32,
    pub sat: f32,
    pub val: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(hue: f32, sat: f32, val: f32) -> Self {
        Self { hue, sat, val }
    }

    /// Midpoint of two colors.
    ///
    /// Hue is averaged along the shortest arc of the color wheel, so mixing
    /// 0.95 with 0.05 lands near 0.0 instead of 0.5.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        let mut delta = other.hue - self.hue;
        if delta > 0.5 {
            delta -= 1.0;
        } else if delta < -0.5 {
            delta += 1.0;
        }

        Self {
            hue: wrap_hue(self.hue + delta / 2.0),
            sat: (self.sat + other.sat) / 2.0,
            val: (self.val + other.val) / 2.0,
        }
    }

    /// Lower the value channel by `amount`, never below zero.
    #[must_use]
    pub fn faded(self, amount: f32) -> Self {
        Self {
            val: (self.val - amount.max(0.0)).max(0.0),
            ..self
        }
    }

    /// Check whether every channel is within `epsilon` of `other`.
    ///
    /// Hue distance is measured around the wheel.
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        hue_distance(self.hue, other.hue) <= epsilon
            && libm::fabsf(self.sat - other.sat) <= epsilon
            && libm::fabsf(self.val - other.val) <= epsilon
    }

    /// Convert to the 8-bit HSV representation used by `smart_leds`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_hsv8(self) -> Hsv {
        Hsv {
            hue: (wrap_hue(self.hue) * 256.0) as u8,
            sat: unit_to_u8(self.sat),
            val: unit_to_u8(self.val),
        }
    }

    /// Convert to RGB for output
    pub fn to_rgb(self) -> Rgb {
        hsv2rgb(self.to_hsv8())
    }
}

/// Wrap a hue into `[0, 1)`
pub fn wrap_hue(hue: f32) -> f32 {
    let wrapped = hue - libm::floorf(hue);
    // floorf can leave exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Shortest distance between two hues on the color wheel, in `[0, 0.5]`
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let d = libm::fabsf(wrap_hue(a) - wrap_hue(b));
    if d > 0.5 { 1.0 - d } else { d }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    libm::roundf(value.clamp(0.0, 1.0) * 255.0) as u8
}
