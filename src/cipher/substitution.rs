use crate::error::{CypherError, Result};
use crate::key::Mode;
use serde::Serialize;

/// Monoalphabetic substitution table: position `i` holds the cipher letter
/// for plain letter `'A' + i`. Entries are uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubstitutionTable {
    forward: [u8; 26],
}

/// The built-in table, laid out along the QWERTY keyboard rows
pub const STANDARD_TABLE: SubstitutionTable =
    SubstitutionTable::new(*b"QWERTYUIOPASDFGHJKLZXCVBNM");

impl SubstitutionTable {
    /// Wrap a raw table. No validation happens here; see
    /// [`SubstitutionTable::is_permutation`].
    pub const fn new(forward: [u8; 26]) -> Self {
        Self { forward }
    }

    /// Forward view: cipher letter for the plain letter at `index`
    pub fn forward(&self, index: usize) -> u8 {
        self.forward[index]
    }

    /// Reverse view: position of the uppercase cipher letter, by linear search
    pub fn position(&self, letter: u8) -> Option<usize> {
        self.forward.iter().position(|&entry| entry == letter)
    }

    /// Full inverse table (cipher letter index -> plain letter), if the
    /// table is a permutation
    pub fn inverse(&self) -> Option<[u8; 26]> {
        let mut inverse = [0u8; 26];
        for (index, &entry) in self.forward.iter().enumerate() {
            if !entry.is_ascii_uppercase() || inverse[(entry - b'A') as usize] != 0 {
                return None;
            }
            inverse[(entry - b'A') as usize] = b'A' + index as u8;
        }
        Some(inverse)
    }

    /// True if every letter A-Z appears exactly once
    pub fn is_permutation(&self) -> bool {
        self.inverse().is_some()
    }

    pub fn cipher_alphabet(&self) -> String {
        self.forward.iter().map(|&b| char::from(b)).collect()
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        STANDARD_TABLE
    }
}

/// Encrypt one byte. Letters keep their case, everything else passes through.
pub fn substitute_encrypt_byte(table: &SubstitutionTable, byte: u8) -> u8 {
    if byte.is_ascii_uppercase() {
        table.forward((byte - b'A') as usize)
    } else if byte.is_ascii_lowercase() {
        table.forward((byte - b'a') as usize).to_ascii_lowercase()
    } else {
        byte
    }
}

/// Decrypt one byte by searching the table for its uppercase form.
///
/// A letter missing from the table means the table itself is malformed:
/// that is reported as [`CypherError::CorruptTable`], never as plaintext.
pub fn substitute_decrypt_byte(table: &SubstitutionTable, byte: u8) -> Result<u8> {
    if !byte.is_ascii_alphabetic() {
        return Ok(byte);
    }
    let wanted = byte.to_ascii_uppercase();
    let index = table
        .position(wanted)
        .ok_or(CypherError::CorruptTable(wanted))? as u8;
    Ok(if byte.is_ascii_uppercase() {
        b'A' + index
    } else {
        b'a' + index
    })
}

/// Transform a buffer in place
pub fn substitution_transform(
    table: &SubstitutionTable,
    mode: Mode,
    data: &mut [u8],
) -> Result<()> {
    match mode {
        Mode::Encrypt => {
            for byte in data.iter_mut() {
                *byte = substitute_encrypt_byte(table, *byte);
            }
        }
        Mode::Decrypt => {
            for byte in data.iter_mut() {
                *byte = substitute_decrypt_byte(table, *byte)?;
            }
        }
    }
    Ok(())
}
