use crate::cipher::scytale_transform;
use crate::error::Result;
use crate::key::{Mode, ScytaleKey};
use crate::lines::LineReader;
use log::{debug, info};
use std::io::{BufRead, Write};

/// Options for the scytale command
#[derive(Debug, Clone)]
pub struct ScytaleOptions {
    pub mode: Mode,
    pub width: i64,
}

/// Transpose every line of the input.
/// Returns the number of lines written.
pub fn run_scytale<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    options: &ScytaleOptions,
) -> Result<usize> {
    let key = ScytaleKey::new(options.width)?;
    debug!("scytale width {}", key.width());

    let mut lines = LineReader::new(input);
    let mut count = 0;
    while let Some(line) = lines.next_line()? {
        if key.width() >= line.len() && !line.is_empty() {
            debug!("line {} not longer than width {}, left as is", count + 1, key.width());
        }
        let mut transformed = scytale_transform(&key, options.mode, line);
        transformed.push(b'\n');
        output.write_all(&transformed)?;
        count += 1;
    }
    output.flush()?;

    info!("scytale: {:?} {} lines", options.mode, count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::MAX_LINE_DATA;

    fn run(mode: Mode, width: i64, input: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        run_scytale(input, &mut out, &ScytaleOptions { mode, width }).unwrap();
        out
    }

    #[test]
    fn test_encrypt_hello_world() {
        assert_eq!(run(Mode::Encrypt, 4, b"Hello World 123\n"), b"Hor1e l2lWd3lo \n");
    }

    #[test]
    fn test_roundtrip_multiple_lines() {
        let plain = b"Hello World 123\nattack at dawn\nx\n\n";
        let cipher = run(Mode::Encrypt, 5, plain);
        assert_eq!(run(Mode::Decrypt, 5, &cipher), plain);
    }

    #[test]
    fn test_width_bounds() {
        let mut out = Vec::new();
        for width in [0, MAX_LINE_DATA as i64 + 1] {
            let options = ScytaleOptions {
                mode: Mode::Encrypt,
                width,
            };
            assert!(run_scytale(&b"abc\n"[..], &mut out, &options).is_err());
        }
        assert!(out.is_empty());
    }

    #[test]
    fn test_max_width_accepted() {
        let out = run(Mode::Encrypt, MAX_LINE_DATA as i64, b"short\n");
        assert_eq!(out, b"short\n");
    }
}
