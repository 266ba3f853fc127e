use crate::constants::{COLON_OFF, COLON_ON, COLON_ROW, DOT_MASK, NUM_ROWS, SEGMENT_MASK};

/// In-memory mirror of the display RAM rows that carry data.
///
/// Rows 0, 1, 3 and 4 hold a segment pattern in bits 0-6 and the decimal point
/// in bit 7. Row 2 is the colon and is either fully on or fully off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayBuffer {
    rows: [u8; NUM_ROWS],
}

impl DisplayBuffer {
    pub const fn new() -> Self {
        Self {
            rows: [0; NUM_ROWS],
        }
    }

    /// True for the four rows that drive a digit.
    pub const fn is_digit(digit: u8) -> bool {
        (digit as usize) < NUM_ROWS && digit != COLON_ROW
    }

    pub fn rows(&self) -> &[u8; NUM_ROWS] {
        &self.rows
    }

    /// Stores `pattern` at `digit`. Returns false and leaves the buffer alone
    /// when `digit` is not a digit row.
    pub fn set_digit(&mut self, digit: u8, pattern: u8, dot: bool) -> bool {
        if !Self::is_digit(digit) {
            return false;
        }
        let value = (pattern & SEGMENT_MASK) | if dot { DOT_MASK } else { 0 };
        match self.rows.get_mut(digit as usize) {
            Some(row) => {
                *row = value;
                true
            }
            None => false,
        }
    }

    pub fn set_dot(&mut self, digit: u8, dot: bool) -> bool {
        if !Self::is_digit(digit) {
            return false;
        }
        match self.rows.get_mut(digit as usize) {
            Some(row) => {
                if dot {
                    *row |= DOT_MASK;
                } else {
                    *row &= !DOT_MASK;
                }
                true
            }
            None => false,
        }
    }

    /// Sets every digit row to `pattern` with the decimal point off.
    pub fn fill(&mut self, pattern: u8) {
        for (index, row) in self.rows.iter_mut().enumerate() {
            if index != COLON_ROW as usize {
                *row = pattern & SEGMENT_MASK;
            }
        }
    }

    pub fn set_colon(&mut self, on: bool) {
        self.rows[COLON_ROW as usize] = if on { COLON_ON } else { COLON_OFF };
    }

    pub fn colon(&self) -> bool {
        self.rows[COLON_ROW as usize] == COLON_ON
    }
}
