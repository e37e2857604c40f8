//! Static glyph tables.
//!
//! Text glyphs are 3 pixels wide and 5 tall, one byte per row with the
//! leftmost pixel in bit 2. Icons are 5x5 with the leftmost pixel in bit 4.

pub const GLYPH_W: i32 = 3;
pub const GLYPH_H: i32 = 5;

/// Horizontal advance of one glyph at scale 1 (glyph plus a 1 pixel gap).
pub const ADVANCE: i32 = GLYPH_W + 1;

pub const ICON_SIZE: i32 = 5;

pub type Glyph = [u8; 5];

const BLANK: Glyph = [0; 5];

const DIGITS: [Glyph; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

const LETTERS: [Glyph; 26] = [
    [0b010, 0b101, 0b111, 0b101, 0b101], // A
    [0b110, 0b101, 0b110, 0b101, 0b110],
    [0b011, 0b100, 0b100, 0b100, 0b011],
    [0b110, 0b101, 0b101, 0b101, 0b110],
    [0b111, 0b100, 0b110, 0b100, 0b111],
    [0b111, 0b100, 0b110, 0b100, 0b100],
    [0b011, 0b100, 0b101, 0b101, 0b011],
    [0b101, 0b101, 0b111, 0b101, 0b101],
    [0b111, 0b010, 0b010, 0b010, 0b111],
    [0b001, 0b001, 0b001, 0b101, 0b010],
    [0b101, 0b101, 0b110, 0b101, 0b101],
    [0b100, 0b100, 0b100, 0b100, 0b111],
    [0b101, 0b111, 0b111, 0b101, 0b101], // M
    [0b110, 0b101, 0b101, 0b101, 0b101],
    [0b010, 0b101, 0b101, 0b101, 0b010],
    [0b110, 0b101, 0b110, 0b100, 0b100],
    [0b010, 0b101, 0b101, 0b110, 0b011],
    [0b110, 0b101, 0b110, 0b101, 0b101],
    [0b011, 0b100, 0b010, 0b001, 0b110],
    [0b111, 0b010, 0b010, 0b010, 0b010],
    [0b101, 0b101, 0b101, 0b101, 0b111],
    [0b101, 0b101, 0b101, 0b101, 0b010],
    [0b101, 0b101, 0b111, 0b111, 0b101],
    [0b101, 0b101, 0b010, 0b101, 0b101],
    [0b101, 0b101, 0b010, 0b010, 0b010],
    [0b111, 0b001, 0b010, 0b100, 0b111], // Z
];

/// Glyph for `ch`; lowercase folds to uppercase, unknown characters are blank.
pub fn glyph(ch: char) -> &'static Glyph {
    match ch {
        '0'..='9' => &DIGITS[ch as usize - '0' as usize],
        'A'..='Z' => &LETTERS[ch as usize - 'A' as usize],
        'a'..='z' => &LETTERS[ch as usize - 'a' as usize],
        ':' => &[0b000, 0b010, 0b000, 0b010, 0b000],
        '+' => &[0b000, 0b010, 0b111, 0b010, 0b000],
        '-' => &[0b000, 0b000, 0b111, 0b000, 0b000],
        '!' => &[0b010, 0b010, 0b010, 0b000, 0b010],
        '.' => &[0b000, 0b000, 0b000, 0b000, 0b010],
        '/' => &[0b001, 0b001, 0b010, 0b100, 0b100],
        _ => &BLANK,
    }
}

#[inline]
pub fn glyph_bit(g: &Glyph, col: i32, row: i32) -> bool {
    if !(0..GLYPH_W).contains(&col) || !(0..GLYPH_H).contains(&row) {
        return false;
    }
    g[row as usize] & (1 << (GLYPH_W - 1 - col)) != 0
}

pub const MINE_ICON: Glyph = [0b10101, 0b01110, 0b11111, 0b01110, 0b10101];

pub const FLAG_ICON: Glyph = [0b01110, 0b01111, 0b01110, 0b01000, 0b11100];

#[inline]
pub fn icon_bit(icon: &Glyph, col: i32, row: i32) -> bool {
    if !(0..ICON_SIZE).contains(&col) || !(0..ICON_SIZE).contains(&row) {
        return false;
    }
    icon[row as usize] & (1 << (ICON_SIZE - 1 - col)) != 0
}
