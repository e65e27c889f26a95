use crate::key::{CaesarKey, Mode, ALPHABET_LEN};
use crate::modular::modulo;

/// Shift an ASCII letter by `delta` positions within its own case.
/// Anything else is returned unchanged.
pub fn caesar_shift_byte(byte: u8, delta: i64) -> u8 {
    let base = if byte.is_ascii_uppercase() {
        b'A'
    } else if byte.is_ascii_lowercase() {
        b'a'
    } else {
        return byte;
    };
    let offset = i64::from(byte - base);
    base + modulo(offset + delta, ALPHABET_LEN) as u8
}

/// Transform one line in place
pub fn caesar_transform(key: &CaesarKey, mode: Mode, line: &mut [u8]) {
    let delta = match mode {
        Mode::Encrypt => i64::from(key.shift()),
        Mode::Decrypt => -i64::from(key.shift()),
    };
    for byte in line.iter_mut() {
        *byte = caesar_shift_byte(*byte, delta);
    }
}
