//! Cyphers - classical cipher stream filters
//!
//! Four independent engines, each usable as a stdin-to-stdout filter through
//! the `cyphers` binary or as a library:
//!
//! - **Affine**: `y = m * x + a mod 255` over every byte of the stream
//! - **Caesar**: shift letters by a fixed amount within their case, line by line
//! - **Scytale**: columnar transposition of each line around a rod of fixed width
//! - **Substitution**: fixed monoalphabetic table over letters of the stream
//!
//! None of these offer any real security. They are historical ciphers and
//! break with pencil and paper.
//!
//! ## Example
//!
//! ```
//! use cyphers::cli::{run_caesar, CaesarOptions};
//! use cyphers::Mode;
//!
//! let mut out = Vec::new();
//! let options = CaesarOptions { mode: Mode::Encrypt, shift: 3 };
//! run_caesar(&b"Hello World 123\n"[..], &mut out, &options).unwrap();
//! assert_eq!(out, b"Khoor Zruog 123\n");
//! ```

pub mod cipher;
pub mod cli;
pub mod error;
pub mod key;
pub mod lines;
pub mod logging;
pub mod modular;

pub use error::{CypherError, Result};
pub use key::{AffineKey, CaesarKey, CipherKind, Mode, ScytaleKey};
