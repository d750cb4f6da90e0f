//! Fuzz target: `decode(encode(text))` on table characters.
//!
//! The round trip must preserve the length in characters.

#![no_main]

use libfuzzer_sys::fuzz_target;
use morse_core::MorseTable;

fuzz_target!(|text: &str| {
    let table = MorseTable::global();
    let known: String = text.chars().filter(|&c| table.symbol_for(c).is_some()).collect();
    let decoded = morse_core::decode(&morse_core::encode(&known));
    assert_eq!(decoded.chars().count(), known.chars().count());
});
