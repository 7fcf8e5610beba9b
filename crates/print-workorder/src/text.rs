//! Text helpers for the built-in Helvetica fonts
//!
//! Text is written with WinAnsiEncoding. Widths come from the core font
//! metrics of the face actually drawn, so measured and rendered text agree.

use crate::metrics::advance;

/// Built-in face used for a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

/// WinAnsi byte for `ch`, or `?` when the encoding has no such glyph
pub fn win_ansi_byte(ch: char) -> u8 {
    match ch {
        ' '..='~' | '\u{A0}'..='\u{FF}' => ch as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => b'?',
    }
}

/// Encode text for a WinAnsiEncoding font
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

/// Advance of one character in 1/1000 em, as it will be drawn
fn char_units(ch: char, font: Font) -> u32 {
    u32::from(advance(font, win_ansi_byte(ch)))
}

fn str_units(text: &str, font: Font) -> u32 {
    text.chars().map(|ch| char_units(ch, font)).sum()
}

fn units_to_width(units: u32, font_size: f32) -> f32 {
    units as f32 * font_size / 1000.0
}

/// Rendered width of `text` in points
pub fn text_width(text: &str, font: Font, font_size: f32) -> f32 {
    units_to_width(str_units(text, font), font_size)
}

/// Greedy word wrap to `max_width` points.
///
/// Explicit newlines start a new line; words wider than a line are split
/// between characters, keeping at least one character per line.
pub fn wrap_text(text: &str, font: Font, font_size: f32, max_width: f32) -> Vec<String> {
    let fits = |units: u32| units_to_width(units, font_size) <= max_width;
    let space = char_units(' ', font);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_units = 0;

        for word in paragraph.split_whitespace() {
            let mut word = word;
            let mut word_units = str_units(word, font);

            while !word.is_empty() && !fits(word_units) {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_units = 0;
                }
                let split = split_point(word, font, &fits);
                lines.push(word[..split].to_string());
                word = &word[split..];
                word_units = str_units(word, font);
            }
            if word.is_empty() {
                continue;
            }

            if !line.is_empty() && !fits(line_units + space + word_units) {
                lines.push(std::mem::take(&mut line));
                line_units = 0;
            }
            if !line.is_empty() {
                line.push(' ');
                line_units += space;
            }
            line.push_str(word);
            line_units += word_units;
        }

        lines.push(line);
    }

    // Drop trailing blank lines
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Byte index of the longest prefix of `word` that fits, never empty
fn split_point(word: &str, font: Font, fits: impl Fn(u32) -> bool) -> usize {
    let mut units = 0;
    for (index, ch) in word.char_indices() {
        units += char_units(ch, font);
        if index > 0 && !fits(units) {
            return index;
        }
    }
    word.len()
}
