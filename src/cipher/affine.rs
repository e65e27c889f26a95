use crate::error::Result;
use crate::key::{AffineKey, Mode, AFFINE_MODULUS};
use crate::modular::modulo;

/// Encrypt one byte: `(m * x + a) mod 255`
pub fn affine_encrypt_byte(key: &AffineKey, byte: u8) -> u8 {
    let m = i64::from(key.multiplier());
    let a = i64::from(key.addend());
    modulo(m * i64::from(byte) + a, AFFINE_MODULUS) as u8
}

/// Decrypt one byte with a precomputed inverse: `m⁻¹ * (y - a) mod 255`
pub fn affine_decrypt_byte(inverse: u32, key: &AffineKey, byte: u8) -> u8 {
    let a = i64::from(key.addend());
    modulo(i64::from(inverse) * (i64::from(byte) - a), AFFINE_MODULUS) as u8
}

/// Affine key with its multiplier inverse already resolved
#[derive(Debug, Clone, Copy)]
pub struct Affine {
    key: AffineKey,
    inverse: u32,
}

impl Affine {
    /// Resolve the inverse up front so a broken key fails before any output
    pub fn new(key: AffineKey) -> Result<Self> {
        let inverse = key.inverse()?;
        Ok(Self { key, inverse })
    }

    pub fn key(&self) -> &AffineKey {
        &self.key
    }

    pub fn inverse(&self) -> u32 {
        self.inverse
    }

    pub fn transform(&self, mode: Mode, data: &mut [u8]) {
        match mode {
            Mode::Encrypt => {
                for byte in data.iter_mut() {
                    *byte = affine_encrypt_byte(&self.key, *byte);
                }
            }
            Mode::Decrypt => {
                for byte in data.iter_mut() {
                    *byte = affine_decrypt_byte(self.inverse, &self.key, *byte);
                }
            }
        }
    }
}

/// Transform a buffer in place
pub fn affine_transform(key: &AffineKey, mode: Mode, data: &mut [u8]) -> Result<()> {
    Affine::new(*key)?.transform(mode, data);
    Ok(())
}
