//! Byte sequences understood by the HT16K33.
//!
//! Everything here is pure: the driver decides when to send, these functions
//! only decide what goes on the wire.

use num_traits::ToPrimitive;

use crate::buffer::DisplayBuffer;
use crate::constants::register::{display_setup, system_setup, DIMMING, DISPLAY_RAM};
use crate::constants::MAX_BRIGHTNESS;

/// Address byte plus a (data, filler) pair for each buffer row.
pub const FRAME_LENGTH: usize = 11;

/// Oscillator first, then the display, so nothing flickers on wake.
pub const POWER_UP: [u8; 2] = [system_setup::OSCILLATOR_ON, display_setup::DISPLAY_ON];

/// Display first, then the oscillator.
pub const POWER_DOWN: [u8; 2] = [display_setup::DISPLAY_OFF, system_setup::OSCILLATOR_OFF];

/// Blink frequencies supported by the display setup register.
///
/// Discriminants are the hardware blink index, which is why 2 Hz comes before
/// 1 Hz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BlinkRate {
    Off = 0,
    TwoHz = 1,
    OneHz = 2,
    HalfHz = 3,
}

impl BlinkRate {
    /// Maps a frequency in Hz onto one of the four hardware rates. Anything
    /// other than exactly 0, 0.5, 1 or 2 is `None`.
    pub fn from_hz(hz: f32) -> Option<Self> {
        if hz == 0.0 {
            Some(BlinkRate::Off)
        } else if hz == 2.0 {
            Some(BlinkRate::TwoHz)
        } else if hz == 1.0 {
            Some(BlinkRate::OneHz)
        } else if hz == 0.5 {
            Some(BlinkRate::HalfHz)
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Clamps any numeric brightness into `0..=MAX_BRIGHTNESS`.
///
/// The flag is false when the input had to be clamped. Fractions truncate
/// toward zero; values that don't fit an `i64` saturate by sign.
pub fn clamp_brightness<T: ToPrimitive>(value: T) -> (u8, bool) {
    match value.to_i64() {
        Some(level) if level < 0 => (0, false),
        Some(level) if level > i64::from(MAX_BRIGHTNESS) => (MAX_BRIGHTNESS, false),
        Some(level) => (level as u8, true),
        None => match value.to_f64() {
            Some(level) if level < 0.0 => (0, false),
            _ => (MAX_BRIGHTNESS, false),
        },
    }
}

/// Dimming command followed by the don't-care byte.
pub const fn brightness(level: u8) -> [u8; 2] {
    let level = if level > MAX_BRIGHTNESS {
        MAX_BRIGHTNESS
    } else {
        level
    };
    [DIMMING | level, 0x00]
}

/// Display-on command with the blink bits set.
pub const fn blink(rate: BlinkRate) -> [u8; 2] {
    [
        display_setup::DISPLAY_ON | (rate.index() << display_setup::BLINK_SHIFT),
        0x00,
    ]
}

/// Full-frame write starting at display RAM address 0.
///
/// Each digit owns a 16-bit RAM word; only the low byte is wired on this
/// display so the high byte is always zero.
pub fn frame(buffer: &DisplayBuffer) -> [u8; FRAME_LENGTH] {
    let mut bytes = [0; FRAME_LENGTH];
    bytes[0] = DISPLAY_RAM;
    for (pair, row) in bytes[1..].chunks_exact_mut(2).zip(buffer.rows()) {
        pair[0] = *row;
        pair[1] = 0x00;
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_sequences() {
        assert_eq!(POWER_UP, [0x21, 0x81]);
        assert_eq!(POWER_DOWN, [0x80, 0x20]);
    }

    #[test]
    fn blink_encoding() {
        assert_eq!(blink(BlinkRate::Off), [0x81, 0x00]);
        assert_eq!(blink(BlinkRate::TwoHz), [0x83, 0x00]);
        assert_eq!(blink(BlinkRate::OneHz), [0x85, 0x00]);
        assert_eq!(blink(BlinkRate::HalfHz), [0x87, 0x00]);
    }

    #[test]
    fn blink_from_hz() {
        assert_eq!(BlinkRate::from_hz(0.0), Some(BlinkRate::Off));
        assert_eq!(BlinkRate::from_hz(2.0), Some(BlinkRate::TwoHz));
        assert_eq!(BlinkRate::from_hz(1.0), Some(BlinkRate::OneHz));
        assert_eq!(BlinkRate::from_hz(0.5), Some(BlinkRate::HalfHz));
        assert_eq!(BlinkRate::from_hz(3.0), None);
        assert_eq!(BlinkRate::from_hz(0.25), None);
        assert_eq!(BlinkRate::from_hz(f32::NAN), None);
    }

    #[test]
    fn brightness_clamping() {
        assert_eq!(clamp_brightness(7u8), (7, true));
        assert_eq!(clamp_brightness(15i32), (15, true));
        assert_eq!(clamp_brightness(16i32), (15, false));
        assert_eq!(clamp_brightness(-1i32), (0, false));
        assert_eq!(clamp_brightness(9.7f32), (9, true));
        assert_eq!(clamp_brightness(-1.0e30f64), (0, false));
        assert_eq!(clamp_brightness(1.0e30f64), (15, false));
        assert_eq!(brightness(15), [0xEF, 0x00]);
        assert_eq!(brightness(0), [0xE0, 0x00]);
        assert_eq!(brightness(200), [0xEF, 0x00]);
    }

    #[test]
    fn frame_interleaves_filler() {
        let mut buffer = DisplayBuffer::new();
        buffer.set_digit(0, 0x3F, true);
        buffer.set_colon(true);
        buffer.set_digit(4, 0x06, false);
        assert_eq!(
            frame(&buffer),
            [0x00, 0xBF, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x06, 0x00]
        );
    }
}
