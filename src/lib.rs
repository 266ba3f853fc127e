#![no_std]

mod buffer;
pub mod command;
mod constants;
mod logger;

pub use buffer::DisplayBuffer;
pub use command::BlinkRate;
pub use constants::*;
#[cfg(feature = "defmt")]
pub use logger::DefmtLogger;
pub use logger::{Logger, NoopLogger};

use embedded_hal::i2c::I2c;
use num_traits::ToPrimitive;

/// Settings applied by [`Ht16k33::init`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitOptions {
    /// Character code every digit is filled with.
    pub character: u8,
    pub brightness: u8,
    pub colon: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            character: BLANK,
            brightness: DEFAULT_BRIGHTNESS,
            colon: false,
        }
    }
}

/// Driver for a 4-digit 7-segment display behind an HT16K33.
///
/// Digit, colon and clear-buffer edits only touch the local [`DisplayBuffer`];
/// nothing reaches the device until [`Ht16k33::update_display`]. Power,
/// brightness and blink commands are written immediately.
///
/// Bad digit indices, patterns and character codes are reported through the
/// [`Logger`] and otherwise ignored, so a long-running program never stops on
/// a malformed call. Only bus failures come back as errors.
pub struct Ht16k33<I2C, L = NoopLogger> {
    pub i2c: I2C,
    address: u8,
    buffer: DisplayBuffer,
    logger: L,
    debug: bool,
}

impl<I2C, E> Ht16k33<I2C, NoopLogger>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C, address: u8) -> Result<Self, Ht16k33Error<E>> {
        Self::with_logger(i2c, address, NoopLogger, false)
    }
}

impl<I2C, E, L> Ht16k33<I2C, L>
where
    I2C: I2c<Error = E>,
    L: Logger,
{
    /// `address` is the 7-bit device address (0x70-0x77 on stock boards).
    /// With `debug` set every bus write is traced through `logger`.
    pub fn with_logger(
        i2c: I2C,
        address: u8,
        logger: L,
        debug: bool,
    ) -> Result<Self, Ht16k33Error<E>> {
        if address == 0 || address > MAX_ADDRESS {
            return Err(Ht16k33Error::InvalidAddress(address));
        }
        Ok(Self {
            i2c,
            address,
            buffer: DisplayBuffer::new(),
            logger,
            debug,
        })
    }

    pub fn destroy(self) -> I2C {
        self.i2c
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// The address as it appears on the wire, shifted above the R/W bit.
    pub fn bus_address(&self) -> u8 {
        self.address << 1
    }

    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Powers the device up, sets brightness, fills the buffer and sets the
    /// colon. The buffer is not sent; call [`Self::update_display`] for that.
    pub fn init(&mut self, options: InitOptions) -> Result<&mut Self, Ht16k33Error<E>> {
        self.power_up()?;
        self.set_brightness(options.brightness)?;
        self.clear_buffer(options.character);
        self.set_colon(options.colon);
        Ok(self)
    }

    pub fn power_up(&mut self) -> Result<&mut Self, Ht16k33Error<E>> {
        for byte in command::POWER_UP {
            self.write(&[byte])?;
        }
        Ok(self)
    }

    pub fn power_down(&mut self) -> Result<&mut Self, Ht16k33Error<E>> {
        for byte in command::POWER_DOWN {
            self.write(&[byte])?;
        }
        Ok(self)
    }

    /// Writes the dimming level straight to the device. Values outside 0-15
    /// are clamped and logged as errors.
    pub fn set_brightness<T>(&mut self, brightness: T) -> Result<&mut Self, Ht16k33Error<E>>
    where
        T: ToPrimitive,
    {
        let (level, in_range) = command::clamp_brightness(brightness);
        if !in_range {
            self.logger.error(format_args!(
                "brightness out of range 0-{}, clamped to {}",
                MAX_BRIGHTNESS, level
            ));
        }
        self.write(&command::brightness(level))?;
        Ok(self)
    }

    /// Blinks the whole display at `hz`, which must be 0, 0.5, 1 or 2.
    /// Any other rate is logged and nothing is written.
    pub fn set_display_flash(&mut self, hz: f32) -> Result<&mut Self, Ht16k33Error<E>> {
        match BlinkRate::from_hz(hz) {
            Some(rate) => self.set_blink_rate(rate),
            None => {
                self.logger.error(format_args!(
                    "invalid flash rate {} Hz, expected 0, 0.5, 1 or 2",
                    hz
                ));
                Ok(self)
            }
        }
    }

    pub fn set_blink_rate(&mut self, rate: BlinkRate) -> Result<&mut Self, Ht16k33Error<E>> {
        self.write(&command::blink(rate))?;
        Ok(self)
    }

    pub fn set_colon(&mut self, on: bool) -> &mut Self {
        self.buffer.set_colon(on);
        self
    }

    /// Stores a raw segment pattern (0x00-0x7F) at `digit` (0, 1, 3 or 4).
    pub fn write_glyph(&mut self, digit: u8, pattern: u8, dot: bool) -> &mut Self {
        if !DisplayBuffer::is_digit(digit) {
            self.logger
                .error(format_args!("invalid digit {}, expected 0, 1, 3 or 4", digit));
            return self;
        }
        if pattern > SEGMENT_MASK {
            self.logger.error(format_args!(
                "invalid glyph {:#04x}, expected 0x00-{:#04x}",
                pattern, SEGMENT_MASK
            ));
            return self;
        }
        self.buffer.set_digit(digit, pattern, dot);
        self
    }

    /// Stores the hex digit `number` (0x0-0xF) at `digit` (0, 1, 3 or 4).
    pub fn write_number(&mut self, digit: u8, number: u8, dot: bool) -> &mut Self {
        if !DisplayBuffer::is_digit(digit) {
            self.logger
                .error(format_args!("invalid digit {}, expected 0, 1, 3 or 4", digit));
            return self;
        }
        let pattern = match glyph(number) {
            Some(pattern) if number <= MAX_NUMBER => pattern,
            _ => {
                self.logger.error(format_args!(
                    "invalid number {:#04x}, expected 0x00-{:#04x}",
                    number, MAX_NUMBER
                ));
                return self;
            }
        };
        self.buffer.set_digit(digit, pattern, dot);
        self
    }

    pub fn set_decimal_point(&mut self, digit: u8, on: bool) -> &mut Self {
        if !self.buffer.set_dot(digit, on) {
            self.logger
                .error(format_args!("invalid digit {}, expected 0, 1, 3 or 4", digit));
        }
        self
    }

    /// Fills every digit with `character`. Codes past the glyph table are
    /// logged and replaced with a blank.
    pub fn clear_buffer(&mut self, character: u8) -> &mut Self {
        let pattern = match glyph(character) {
            Some(pattern) => pattern,
            None => {
                self.logger.error(format_args!(
                    "invalid character {}, expected 0-{}, using blank",
                    character,
                    GLYPHS.len() - 1
                ));
                GLYPHS[BLANK as usize]
            }
        };
        self.buffer.fill(pattern);
        self
    }

    /// Blanks the buffer, turns the colon off and sends the frame.
    pub fn clear_display(&mut self) -> Result<&mut Self, Ht16k33Error<E>> {
        self.clear_buffer(BLANK);
        self.set_colon(false);
        self.update_display()
    }

    pub fn update_display(&mut self) -> Result<&mut Self, Ht16k33Error<E>> {
        let frame = command::frame(&self.buffer);
        self.write(&frame)?;
        Ok(self)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Ht16k33Error<E>> {
        if self.debug {
            self.logger.log(format_args!(
                "write {:#04x} {:02x?}",
                self.address << 1,
                bytes
            ));
        }
        self.i2c.write(self.address, bytes)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ht16k33Error<E> {
    I2cError(E),
    InvalidAddress(u8),
}

impl<E> From<E> for Ht16k33Error<E> {
    fn from(error: E) -> Self {
        Ht16k33Error::I2cError(error)
    }
}
