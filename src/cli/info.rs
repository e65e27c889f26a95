use crate::cipher::{caesar_shift_byte, STANDARD_TABLE};
use crate::error::{CypherError, Result};
use crate::key::{AffineKey, CaesarKey, CipherKind, ScytaleKey};
use crate::lines::MAX_LINE_DATA;
use serde::Serialize;

const PLAIN_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Options for the info command
#[derive(Debug, Clone)]
pub struct InfoOptions {
    pub cipher: CipherKind,
    pub multiplier: Option<i64>,
    pub addend: Option<i64>,
    pub shift: Option<i64>,
    pub width: Option<i64>,
    pub json: bool,
}

impl InfoOptions {
    pub fn new(cipher: CipherKind) -> Self {
        Self {
            cipher,
            multiplier: None,
            addend: None,
            shift: None,
            width: None,
            json: false,
        }
    }
}

/// Key material of one engine
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "cipher", rename_all = "lowercase")]
pub enum KeyReport {
    Affine {
        multiplier: u32,
        addend: u32,
        inverse: u32,
        keyspace: usize,
    },
    Caesar {
        shift: u8,
        plain_alphabet: String,
        cipher_alphabet: String,
        keyspace: usize,
    },
    Scytale {
        width: usize,
        max_line: usize,
    },
    Substitution {
        plain_alphabet: String,
        cipher_alphabet: String,
        permutation: bool,
        keyspace_bits: f64,
    },
}

/// Validate the key for `options.cipher` and describe it
pub fn key_report(options: &InfoOptions) -> Result<KeyReport> {
    match options.cipher {
        CipherKind::Affine => {
            let m = options.multiplier.ok_or(CypherError::MissingParameter("-m"))?;
            let a = options.addend.ok_or(CypherError::MissingParameter("-a"))?;
            let key = AffineKey::new(m, a)?;
            Ok(KeyReport::Affine {
                multiplier: key.multiplier(),
                addend: key.addend(),
                inverse: key.inverse()?,
                keyspace: AffineKey::keyspace(),
            })
        }
        CipherKind::Caesar => {
            let shift = options.shift.ok_or(CypherError::MissingParameter("-s"))?;
            let key = CaesarKey::new(shift)?;
            let cipher_alphabet = PLAIN_ALPHABET
                .bytes()
                .map(|b| char::from(caesar_shift_byte(b, i64::from(key.shift()))))
                .collect();
            Ok(KeyReport::Caesar {
                shift: key.shift(),
                plain_alphabet: PLAIN_ALPHABET.to_string(),
                cipher_alphabet,
                keyspace: CaesarKey::keyspace(),
            })
        }
        CipherKind::Scytale => {
            let width = options.width.ok_or(CypherError::MissingParameter("-w"))?;
            let key = ScytaleKey::new(width)?;
            Ok(KeyReport::Scytale {
                width: key.width(),
                max_line: MAX_LINE_DATA,
            })
        }
        CipherKind::Substitution => Ok(KeyReport::Substitution {
            plain_alphabet: PLAIN_ALPHABET.to_string(),
            cipher_alphabet: STANDARD_TABLE.cipher_alphabet(),
            permutation: STANDARD_TABLE.is_permutation(),
            keyspace_bits: permutation_bits(26),
        }),
    }
}

/// Display the key for one engine, as text or JSON
pub fn show_info(options: &InfoOptions) -> Result<String> {
    let report = key_report(options)?;
    if options.json {
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        return Ok(json);
    }

    let mut output = String::new();
    match &report {
        KeyReport::Affine {
            multiplier,
            addend,
            inverse,
            keyspace,
        } => {
            output.push_str("Affine Cipher Key\n");
            output.push_str("=================\n\n");
            output.push_str(&format!("Multiplier: {}\n", multiplier));
            output.push_str(&format!("Addend: {}\n", addend));
            output.push_str(&format!("Inverse: {}\n", inverse));
            output.push_str(&format!("Encrypt: y = {} * x + {} mod 255\n", multiplier, addend));
            output.push_str(&format!("Decrypt: x = {} * (y - {}) mod 255\n", inverse, addend));
            output.push_str(&format!("Keyspace: {} keys\n", keyspace));
        }
        KeyReport::Caesar {
            shift,
            plain_alphabet,
            cipher_alphabet,
            keyspace,
        } => {
            output.push_str("Caesar Cipher Key\n");
            output.push_str("=================\n\n");
            output.push_str(&format!("Shift: {}\n", shift));
            output.push_str(&format!("Plain:  {}\n", plain_alphabet));
            output.push_str(&format!("Cipher: {}\n", cipher_alphabet));
            output.push_str(&format!("Keyspace: {} keys\n", keyspace));
        }
        KeyReport::Scytale { width, max_line } => {
            output.push_str("Scytale Cipher Key\n");
            output.push_str("==================\n\n");
            output.push_str(&format!("Width: {}\n", width));
            output.push_str(&format!("Max line length: {} bytes\n", max_line));
            output.push_str("Lines not longer than the width are left as is.\n");
        }
        KeyReport::Substitution {
            plain_alphabet,
            cipher_alphabet,
            permutation,
            keyspace_bits,
        } => {
            output.push_str("Substitution Cipher Table\n");
            output.push_str("=========================\n\n");
            output.push_str(&format!("Plain:  {}\n", plain_alphabet));
            output.push_str(&format!("Cipher: {}\n", cipher_alphabet));
            output.push_str(&format!(
                "Permutation: {}\n",
                if *permutation { "ok" } else { "BROKEN" }
            ));
            output.push_str(&format!("Keyspace: 26! ~ 2^{:.2}\n", keyspace_bits));
        }
    }

    Ok(output)
}

/// log2(n!)
fn permutation_bits(n: u32) -> f64 {
    (1..=n).map(|k| f64::from(k).log2()).sum()
}
