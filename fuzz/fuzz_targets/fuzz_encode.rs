//! Fuzz target: `encode` over arbitrary text.
//!
//! Every input character must produce exactly one output token.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let morse = morse_core::encode(text);
    let tokens = if morse.is_empty() { 0 } else { morse.split(' ').count() };
    assert_eq!(tokens, text.chars().count());
});
