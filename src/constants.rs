pub const DEFAULT_ADDRESS: u8 = 0x70;
pub const MAX_ADDRESS: u8 = 0x7F; // 7-bit address, shifted left for the wire
pub const MAX_BRIGHTNESS: u8 = 15; // 4 bits
pub const DEFAULT_BRIGHTNESS: u8 = MAX_BRIGHTNESS;
pub const DOT_MASK: u8 = 0x80;
pub const SEGMENT_MASK: u8 = 0x7F;

// buffer rows: digits 0, 1, colon, digits 3, 4
pub const NUM_ROWS: usize = 5;
pub const COLON_ROW: u8 = 2;
pub const COLON_ON: u8 = 0xFF;
pub const COLON_OFF: u8 = 0x00;

pub const BLANK: u8 = 16;
pub const MINUS: u8 = 17;
pub const DEGREE: u8 = 18;
pub const MAX_NUMBER: u8 = 0x0F;

// bit 0..6 = segments a..g, clockwise from top, g is the middle bar
pub const GLYPHS: [u8; 19] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F, // 0-9
    0x77, 0x7C, 0x39, 0x5E, 0x79, 0x71, // A-F
    0x00, // blank
    0x40, // minus
    0x63, // degree
];

pub mod register {
    pub const SYSTEM_SETUP: u8 = 0x20;
    pub const OSCILLATOR_ON: u8 = 0x01;
    pub const DISPLAY_SETUP: u8 = 0x80;
    pub const DISPLAY_ON: u8 = 0x01;
    pub const DIMMING: u8 = 0xE0;
    pub const DISPLAY_RAM: u8 = 0x00;

    pub mod system_setup {
        pub const OSCILLATOR_OFF: u8 = super::SYSTEM_SETUP; // 0x20
        pub const OSCILLATOR_ON: u8 = super::SYSTEM_SETUP | super::OSCILLATOR_ON; // 0x21
    }

    pub mod display_setup {
        pub const DISPLAY_OFF: u8 = super::DISPLAY_SETUP; // 0x80
        pub const DISPLAY_ON: u8 = super::DISPLAY_SETUP | super::DISPLAY_ON; // 0x81
        pub const BLINK_SHIFT: u8 = 1; // bits 1-2: blink frequency
    }
}

/// Segment pattern for a character code, or `None` past the end of [`GLYPHS`].
pub const fn glyph(code: u8) -> Option<u8> {
    let index = code as usize;
    if index < GLYPHS.len() {
        Some(GLYPHS[index])
    } else {
        None
    }
}
