use crate::cipher::caesar_transform;
use crate::error::Result;
use crate::key::{CaesarKey, Mode};
use crate::lines::{LineReader, MAX_LINE};
use log::{debug, info};
use std::io::{BufRead, Write};

/// Options for the caesar command
#[derive(Debug, Clone)]
pub struct CaesarOptions {
    pub mode: Mode,
    pub shift: i64,
}

/// Shift every line of the input.
/// Returns the number of lines written.
pub fn run_caesar<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    options: &CaesarOptions,
) -> Result<usize> {
    let key = CaesarKey::new(options.shift)?;
    debug!("caesar shift {}", key.shift());

    let mut lines = LineReader::new(input);
    let mut buf = Vec::with_capacity(MAX_LINE);
    let mut count = 0;
    while let Some(line) = lines.next_line()? {
        buf.clear();
        buf.extend_from_slice(line);
        caesar_transform(&key, options.mode, &mut buf);
        buf.push(b'\n');
        output.write_all(&buf)?;
        count += 1;
    }
    output.flush()?;

    info!("caesar: {:?} {} lines", options.mode, count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mode: Mode, shift: i64, input: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        run_caesar(input, &mut out, &CaesarOptions { mode, shift }).unwrap();
        out
    }

    #[test]
    fn test_encrypt_lines() {
        assert_eq!(
            run(Mode::Encrypt, 3, b"Hello World 123\nabc\n"),
            b"Khoor Zruog 123\ndef\n"
        );
    }

    #[test]
    fn test_missing_final_newline_is_added() {
        assert_eq!(run(Mode::Decrypt, 3, b"Khoor"), b"Hello\n");
    }

    #[test]
    fn test_line_count() {
        let mut out = Vec::new();
        let options = CaesarOptions {
            mode: Mode::Encrypt,
            shift: 13,
        };
        let count = run_caesar(&b"one\ntwo\n\nfour\n"[..], &mut out, &options).unwrap();
        assert_eq!(count, 4);
        assert_eq!(out, b"bar\ngjb\n\nsbhe\n");
    }

    #[test]
    fn test_invalid_shift() {
        let mut out = Vec::new();
        for shift in [0, 26, -1] {
            let options = CaesarOptions {
                mode: Mode::Encrypt,
                shift,
            };
            assert!(run_caesar(&b"abc\n"[..], &mut out, &options).is_err());
        }
        assert!(out.is_empty());
    }
}
