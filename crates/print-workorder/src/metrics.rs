//! Advance widths of the standard Helvetica faces
//!
//! Values are the Adobe core font metrics in 1/1000 em, indexed by
//! WinAnsiEncoding byte from 0x20. Unassigned codes are zero; the encoder
//! never produces them.

use crate::text::Font;

/// Helvetica
const HELVETICA: [u16; 224] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0x30
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 0x50
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 0x60
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0, // 0x70
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0, // 0x80
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667, // 0x90
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // 0xF0
];

/// Helvetica-Bold
const HELVETICA_BOLD: [u16; 224] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0x30
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 0x50
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 0x60
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0, // 0x70
    556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0, // 0x80
    0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667, // 0x90
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556, // 0xF0
];

/// Advance of an encoded byte in 1/1000 em; control bytes have no width
pub(crate) fn advance(font: Font, byte: u8) -> u16 {
    let table = match font {
        Font::Regular => &HELVETICA,
        Font::Bold => &HELVETICA_BOLD,
    };
    byte.checked_sub(0x20).map_or(0, |index| table[usize::from(index)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_advances() {
        assert_eq!(advance(Font::Regular, b' '), 278);
        assert_eq!(advance(Font::Regular, b'W'), 944);
        assert_eq!(advance(Font::Regular, b'i'), 222);
        assert_eq!(advance(Font::Regular, b'0'), 556);
        assert_eq!(advance(Font::Bold, b'i'), 278);
        assert_eq!(advance(Font::Bold, b'm'), 889);
        assert_eq!(advance(Font::Bold, b'~'), 584);
    }

    #[test]
    fn test_upper_half_advances() {
        assert_eq!(advance(Font::Regular, 0x80), 556); // euro
        assert_eq!(advance(Font::Regular, 0x97), 1000); // em dash
        assert_eq!(advance(Font::Bold, 0x93), 500); // left double quote
        assert_eq!(advance(Font::Regular, 0xD7), 584); // multiply
        assert_eq!(advance(Font::Regular, 0xE9), 556); // e acute
        assert_eq!(advance(Font::Bold, 0xFF), 556); // y dieresis
    }

    #[test]
    fn test_control_bytes_have_no_width() {
        assert_eq!(advance(Font::Regular, b'\n'), 0);
        assert_eq!(advance(Font::Bold, 0x7F), 0);
    }
}
