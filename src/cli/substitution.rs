use crate::cipher::{substitution_transform, SubstitutionTable, STANDARD_TABLE};
use crate::error::Result;
use crate::key::Mode;
use log::{debug, info};
use std::io::{ErrorKind, Read, Write};

const CHUNK_SIZE: usize = 8192;

/// Options for the substitution command
#[derive(Debug, Clone)]
pub struct SubstitutionOptions {
    pub mode: Mode,
    /// Always the built-in table from the command line
    pub table: SubstitutionTable,
}

impl Default for SubstitutionOptions {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            table: STANDARD_TABLE,
        }
    }
}

/// Run the substitution cipher over a whole byte stream.
/// Returns the number of bytes processed.
pub fn run_substitution<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    options: &SubstitutionOptions,
) -> Result<usize> {
    debug!("substitution table {}", options.table.cipher_alphabet());

    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total = 0;
    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        // A table miss aborts before the chunk is written
        substitution_transform(&options.table, options.mode, &mut buf[..n])?;
        output.write_all(&buf[..n])?;
        total += n;
    }
    output.flush()?;

    info!("substitution: {:?} {} bytes", options.mode, total);
    Ok(total)
}
