//! Code page 437 high-half glyph table.
//!
//! Screen cells store their character as a single CP437 byte. Bytes below
//! 128 coincide with ASCII and pass through the renderer untouched; bytes
//! 128-255 are the DOS extended glyphs (accented Latin, box drawing,
//! shading blocks, Greek, math symbols) and expand to multi-byte UTF-8 on
//! output. The table is compiled-in, read-only data.

/// UTF-8 text for CP437 bytes 128-255, indexed by `byte - 128`.
pub const CP437_HIGH: [&str; 128] = [
    // 0x80-0x8F
    "Ç", "ü", "é", "â", "ä", "à", "å", "ç", "ê", "ë", "è", "ï", "î", "ì", "Ä", "Å",
    // 0x90-0x9F
    "É", "æ", "Æ", "ô", "ö", "ò", "û", "ù", "ÿ", "Ö", "Ü", "¢", "£", "¥", "₧", "ƒ",
    // 0xA0-0xAF
    "á", "í", "ó", "ú", "ñ", "Ñ", "ª", "º", "¿", "⌐", "¬", "½", "¼", "¡", "«", "»",
    // 0xB0-0xBF
    "░", "▒", "▓", "│", "┤", "╡", "╢", "╖", "╕", "╣", "║", "╗", "╝", "╜", "╛", "┐",
    // 0xC0-0xCF
    "└", "┴", "┬", "├", "─", "┼", "╞", "╟", "╚", "╔", "╩", "╦", "╠", "═", "╬", "╧",
    // 0xD0-0xDF
    "╨", "╤", "╥", "╙", "╘", "╒", "╓", "╫", "╪", "┘", "┌", "█", "▄", "▌", "▐", "▀",
    // 0xE0-0xEF
    "α", "ß", "Γ", "π", "Σ", "σ", "µ", "τ", "Φ", "Θ", "Ω", "δ", "∞", "φ", "ε", "∩",
    // 0xF0-0xFF
    "≡", "±", "≥", "≤", "⌠", "⌡", "÷", "≈", "°", "∙", "·", "√", "ⁿ", "²", "■", "\u{a0}",
];

/// UTF-8 expansion of a high CP437 byte.
///
/// # Panics
/// Panics if `byte` is below 128; callers emit ASCII bytes directly.
pub fn utf8(byte: u8) -> &'static str {
    debug_assert!(byte >= 128, "low bytes are plain ASCII");
    CP437_HIGH[byte as usize - 128]
}
