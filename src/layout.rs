//! Physical strip layout and frame encoding

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::frame_buffer::Frame;
use crate::math8::scale8;

/// Placement of the rendered bar on the physical strip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripLayout {
    /// Number of leading LEDs left dark
    pub offset: u8,
    /// Render the bar from the far end
    pub reversed: bool,
}

impl StripLayout {
    /// Physical index of logical LED `index` in a bar of `len` LEDs
    pub const fn physical_index(self, index: usize, len: usize) -> usize {
        let index = if self.reversed {
            len - 1 - index
        } else {
            index
        };
        self.offset as usize + index
    }
}

/// Converts frames into the RGB buffer written to the driver
///
/// `OUT_LEDS` is the physical strip length. It is independent of the frame
/// capacity so an offset never pushes the bar off the end of the buffer.
#[derive(Debug, Clone)]
pub struct FrameEncoder<const MAX_LEDS: usize, const OUT_LEDS: usize> {
    layout: StripLayout,
    brightness: u8,
    buffer: [Rgb; OUT_LEDS],
    written: usize,
}

impl<const MAX_LEDS: usize, const OUT_LEDS: usize> FrameEncoder<MAX_LEDS, OUT_LEDS> {
    pub const fn new(layout: StripLayout, brightness: u8) -> Self {
        Self {
            layout,
            brightness,
            buffer: [Rgb { r: 0, g: 0, b: 0 }; OUT_LEDS],
            written: 0,
        }
    }

    pub const fn layout(&self) -> StripLayout {
        self.layout
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Encode a frame and return the colors to write
    ///
    /// LEDs past the end of the physical strip are dropped.
    pub fn encode(&mut self, frame: &Frame<MAX_LEDS>) -> &[Rgb] {
        let len = frame.len();
        let end = (usize::from(self.layout.offset) + len).min(OUT_LEDS);
        self.buffer[..end].fill(Rgb { r: 0, g: 0, b: 0 });

        for (i, color) in frame.colors().iter().enumerate() {
            let position = self.layout.physical_index(i, len);
            let Some(pixel) = self.buffer.get_mut(position) else {
                #[cfg(feature = "esp32-log")]
                println!("[FrameEncoder] LED {} outside strip, dropped", position);
                continue;
            };
            let rgb = color.to_rgb();
            *pixel = Rgb {
                r: scale8(rgb.r, self.brightness),
                g: scale8(rgb.g, self.brightness),
                b: scale8(rgb.b, self.brightness),
            };
        }

        self.written = end;
        &self.buffer[..end]
    }

    /// Colors produced by the last [`Self::encode`]
    pub fn last(&self) -> &[Rgb] {
        &self.buffer[..self.written]
    }
}
