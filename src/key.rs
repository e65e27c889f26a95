use crate::error::{CypherError, Result};
use crate::lines::MAX_LINE_DATA;
use crate::modular::{gcd, inverse};
use serde::{Deserialize, Serialize};

/// Modulus of the affine alphabet (byte values 0..=254)
pub const AFFINE_MODULUS: i64 = 255;

/// Letters in the Latin alphabet, per case
pub const ALPHABET_LEN: i64 = 26;

/// Direction of a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Encrypt,
    Decrypt,
}

impl Mode {
    /// Build a mode from the mutually exclusive `-e`/`-d` flags.
    /// Exactly one must be set.
    pub fn from_flags(encrypt: bool, decrypt: bool) -> Result<Self> {
        match (encrypt, decrypt) {
            (true, false) => Ok(Self::Encrypt),
            (false, true) => Ok(Self::Decrypt),
            _ => Err(CypherError::MissingParameter(
                "exactly one of encrypt or decrypt",
            )),
        }
    }
}

/// Cipher selector, used by `info`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    Affine,
    Caesar,
    Scytale,
    Substitution,
}

impl std::str::FromStr for CipherKind {
    type Err = CypherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "affine" | "a" => Ok(Self::Affine),
            "caesar" | "c" => Ok(Self::Caesar),
            "scytale" | "s" => Ok(Self::Scytale),
            "substitution" | "u" => Ok(Self::Substitution),
            _ => Err(CypherError::UnsupportedCipher(s.to_string())),
        }
    }
}

/// Affine key `(m, a)`: `2 <= m <= 255`, `0 <= a <= 255`, `gcd(m, 255) == 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AffineKey {
    multiplier: u32,
    addend: u32,
}

impl AffineKey {
    pub fn new(multiplier: i64, addend: i64) -> Result<Self> {
        if !(2..=255).contains(&multiplier) {
            return Err(CypherError::InvalidMultiplier(multiplier));
        }
        if gcd(multiplier, AFFINE_MODULUS) != 1 {
            return Err(CypherError::MultiplierNotCoprime(multiplier));
        }
        if !(0..=255).contains(&addend) {
            return Err(CypherError::InvalidAddend(addend));
        }
        Ok(Self {
            multiplier: multiplier as u32,
            addend: addend as u32,
        })
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn addend(&self) -> u32 {
        self.addend
    }

    /// Inverse of the multiplier modulo 255.
    ///
    /// A validated key always has one; a miss means the gcd check is broken.
    pub fn inverse(&self) -> Result<u32> {
        inverse(i64::from(self.multiplier), AFFINE_MODULUS)
            .map(|inv| inv as u32)
            .ok_or(CypherError::NoInverse(self.multiplier))
    }

    /// Number of valid keys: admissible multipliers times 256 addends
    pub fn keyspace() -> usize {
        let multipliers = (2..=255)
            .filter(|&m| gcd(m, AFFINE_MODULUS) == 1)
            .count();
        multipliers * 256
    }
}

/// Caesar shift in `1..=25`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaesarKey {
    shift: u8,
}

impl CaesarKey {
    pub fn new(shift: i64) -> Result<Self> {
        if shift <= 0 || shift >= ALPHABET_LEN {
            return Err(CypherError::InvalidShift(shift));
        }
        Ok(Self { shift: shift as u8 })
    }

    pub fn shift(&self) -> u8 {
        self.shift
    }

    pub fn keyspace() -> usize {
        (ALPHABET_LEN - 1) as usize
    }
}

/// Scytale circumference, `1..=127` (must fit in one line buffer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScytaleKey {
    width: usize,
}

impl ScytaleKey {
    pub fn new(width: i64) -> Result<Self> {
        if width <= 0 || width > MAX_LINE_DATA as i64 {
            return Err(CypherError::InvalidWidth(width));
        }
        Ok(Self {
            width: width as usize,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_flags() {
        assert_eq!(Mode::from_flags(true, false).unwrap(), Mode::Encrypt);
        assert_eq!(Mode::from_flags(false, true).unwrap(), Mode::Decrypt);
        assert!(Mode::from_flags(true, true).is_err());
        assert!(Mode::from_flags(false, false).is_err());
    }

    #[test]
    fn test_cipher_kind_parse() {
        assert_eq!("affine".parse::<CipherKind>().unwrap(), CipherKind::Affine);
        assert_eq!("Caesar".parse::<CipherKind>().unwrap(), CipherKind::Caesar);
        assert_eq!("s".parse::<CipherKind>().unwrap(), CipherKind::Scytale);
        assert_eq!(
            "substitution".parse::<CipherKind>().unwrap(),
            CipherKind::Substitution
        );
        assert!(matches!(
            "vigenere".parse::<CipherKind>(),
            Err(CypherError::UnsupportedCipher(_))
        ));
    }

    #[test]
    fn test_affine_key_accepts_coprime() {
        let key = AffineKey::new(19, 3).unwrap();
        assert_eq!(key.multiplier(), 19);
        assert_eq!(key.addend(), 3);
        assert_eq!(key.inverse().unwrap(), 94);
        assert!(AffineKey::new(2, 0).is_ok());
        assert!(AffineKey::new(254, 255).is_ok());
    }

    #[test]
    fn test_affine_key_rejects_common_factor() {
        for m in [3, 5, 15, 17, 51, 85, 255] {
            assert!(
                matches!(AffineKey::new(m, 0), Err(CypherError::MultiplierNotCoprime(_))),
                "multiplier {m} shares a factor with 255"
            );
        }
    }

    #[test]
    fn test_affine_key_bounds() {
        assert!(matches!(AffineKey::new(1, 0), Err(CypherError::InvalidMultiplier(1))));
        assert!(matches!(AffineKey::new(0, 0), Err(CypherError::InvalidMultiplier(0))));
        assert!(matches!(AffineKey::new(256, 0), Err(CypherError::InvalidMultiplier(256))));
        assert!(matches!(AffineKey::new(-19, 0), Err(CypherError::InvalidMultiplier(-19))));
        assert!(matches!(AffineKey::new(19, -1), Err(CypherError::InvalidAddend(-1))));
        assert!(matches!(AffineKey::new(19, 256), Err(CypherError::InvalidAddend(256))));
    }

    #[test]
    fn test_affine_keyspace() {
        // phi(255) = 128 units, all of them except 1 are admissible
        assert_eq!(AffineKey::keyspace(), 127 * 256);
    }

    #[test]
    fn test_caesar_key_bounds() {
        assert!(CaesarKey::new(0).is_err());
        assert!(CaesarKey::new(26).is_err());
        assert!(CaesarKey::new(-3).is_err());
        assert_eq!(CaesarKey::new(1).unwrap().shift(), 1);
        assert_eq!(CaesarKey::new(25).unwrap().shift(), 25);
    }

    #[test]
    fn test_scytale_key_bounds() {
        assert!(ScytaleKey::new(0).is_err());
        assert!(ScytaleKey::new(128).is_err());
        assert!(ScytaleKey::new(-4).is_err());
        assert_eq!(ScytaleKey::new(1).unwrap().width(), 1);
        assert_eq!(ScytaleKey::new(127).unwrap().width(), 127);
    }
}
