//! Core translation logic for the Morse gateway.
//!
//! Holds the fixed character/symbol table and the two translation
//! functions built on top of it. Everything here is pure: no I/O, no
//! locking, no failure paths. Unknown input is replaced by a sentinel
//! rather than rejected.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod table;
pub mod translate;

pub use table::{MorseTable, DECODE_SENTINEL, ENCODE_SENTINEL, WORD_SEPARATOR};

/// Encode `text` using the process-wide [`MorseTable`].
///
/// See [`translate::encode`].
#[must_use]
pub fn encode(text: &str) -> String {
    translate::encode(MorseTable::global(), text)
}

/// Decode `morse` using the process-wide [`MorseTable`].
///
/// See [`translate::decode`].
#[must_use]
pub fn decode(morse: &str) -> String {
    translate::decode(MorseTable::global(), morse)
}
