use crate::cipher::Affine;
use crate::error::Result;
use crate::key::{AffineKey, Mode};
use log::{debug, info};
use std::io::{ErrorKind, Read, Write};

const CHUNK_SIZE: usize = 8192;

/// Options for the affine command
#[derive(Debug, Clone)]
pub struct AffineOptions {
    pub mode: Mode,
    pub multiplier: i64,
    pub addend: i64,
}

/// Run the affine cipher over a whole byte stream.
/// The key is validated before anything is read.
/// Returns the number of bytes processed.
pub fn run_affine<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    options: &AffineOptions,
) -> Result<usize> {
    let key = AffineKey::new(options.multiplier, options.addend)?;
    let cipher = Affine::new(key)?;
    debug!(
        "affine key m={} a={} (inverse {})",
        key.multiplier(),
        key.addend(),
        cipher.inverse()
    );

    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total = 0;
    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        cipher.transform(options.mode, &mut buf[..n]);
        output.write_all(&buf[..n])?;
        total += n;
    }
    output.flush()?;

    info!("affine: {:?} {} bytes", options.mode, total);
    Ok(total)
}
