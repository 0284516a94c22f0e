use embassy_time::Duration;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Calculate progress in `[0, 1]` based on elapsed time and duration
///
/// A zero duration is complete immediately.
#[allow(clippy::cast_precision_loss)]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.as_micros() == 0 || elapsed >= duration {
        return 1.0;
    }
    elapsed.as_micros() as f32 / duration.as_micros() as f32
}
