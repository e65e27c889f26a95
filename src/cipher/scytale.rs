use crate::key::{Mode, ScytaleKey};

/// Wind the line around a rod of `width` columns and read it off column by
/// column: positions `c, c + width, c + 2 * width, ...` for each column `c`.
pub fn scytale_encrypt(width: usize, line: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len());
    if width == 0 {
        out.extend_from_slice(line);
        return out;
    }
    for column in 0..width {
        out.extend(line.iter().skip(column).step_by(width));
    }
    out
}

/// Inverse of [`scytale_encrypt`]. With `rows = ceil(n / width)` the first
/// `n % width` columns carry `rows` bytes and the rest carry `rows - 1`, so
/// column `c` starts at `c * rows - max(0, c - long_columns)`. Bytes are
/// emitted row by row.
///
/// When every column is full (or only the last one is short) this reduces
/// to reading positions `r, r + rows, r + 2 * rows, ...` for each row `r`.
pub fn scytale_decrypt(width: usize, line: &[u8]) -> Vec<u8> {
    let n = line.len();
    if width == 0 || n == 0 {
        return line.to_vec();
    }
    let rows = n.div_ceil(width);
    let long_columns = match n % width {
        0 => width,
        partial => partial,
    };

    let mut out = Vec::with_capacity(n);
    for row in 0..rows {
        for column in 0..width {
            if row * width + column >= n {
                break;
            }
            let start = column * rows - column.saturating_sub(long_columns);
            out.push(line[start + row]);
        }
    }
    out
}

pub fn scytale_transform(key: &ScytaleKey, mode: Mode, line: &[u8]) -> Vec<u8> {
    match mode {
        Mode::Encrypt => scytale_encrypt(key.width(), line),
        Mode::Decrypt => scytale_decrypt(key.width(), line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_hello_world() {
        // H e l l
        // o _ W o
        // r l d _
        // 1 2 3
        assert_eq!(scytale_encrypt(4, b"Hello World 123"), b"Hor1e l2lWd3lo ");
    }

    #[test]
    fn test_decrypt_hello_world() {
        assert_eq!(scytale_decrypt(4, b"Hor1e l2lWd3lo "), b"Hello World 123");
    }

    #[test]
    fn test_roundtrip_widths() {
        let line = b"Hello World 123";
        for width in 1..line.len() {
            let encrypted = scytale_encrypt(width, line);
            assert_eq!(encrypted.len(), line.len());
            assert_eq!(scytale_decrypt(width, &encrypted), line.to_vec(), "width {width}");
        }
    }

    #[test]
    fn test_roundtrip_with_several_short_columns() {
        // 15 bytes over 6 columns: three full columns, three short ones
        let line = b"Hello World 123";
        let encrypted = scytale_encrypt(6, line);
        assert_eq!(encrypted, b"HW1eo2lr3llod  ");
        assert_eq!(scytale_decrypt(6, &encrypted), line.to_vec());
    }

    #[test]
    fn test_roundtrip_long_line() {
        let line: Vec<u8> = (0u8..127).collect();
        for width in 1..127 {
            let encrypted = scytale_encrypt(width, &line);
            assert_eq!(scytale_decrypt(width, &encrypted), line, "width {width}");
        }
    }

    #[test]
    fn test_width_one_is_identity() {
        assert_eq!(scytale_encrypt(1, b"abcdef"), b"abcdef");
        assert_eq!(scytale_decrypt(1, b"abcdef"), b"abcdef");
    }

    #[test]
    fn test_width_at_least_length_is_identity() {
        assert_eq!(scytale_encrypt(6, b"abcdef"), b"abcdef");
        assert_eq!(scytale_encrypt(100, b"abcdef"), b"abcdef");
        assert_eq!(scytale_decrypt(100, b"abcdef"), b"abcdef");
    }

    #[test]
    fn test_empty_line() {
        assert!(scytale_encrypt(4, b"").is_empty());
        assert!(scytale_decrypt(4, b"").is_empty());
    }

    #[test]
    fn test_transform_dispatch() {
        let key = ScytaleKey::new(3).unwrap();
        let encrypted = scytale_transform(&key, Mode::Encrypt, b"abcdefgh");
        assert_eq!(encrypted, b"adgbehcf");
        assert_eq!(scytale_transform(&key, Mode::Decrypt, &encrypted), b"abcdefgh");
    }
}
