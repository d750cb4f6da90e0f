//! Fuzz target: `decode` over arbitrary bytes.
//!
//! Bytes are converted the same way the gateway converts request bodies.
//! Panics are bugs; there is no error path.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let morse = String::from_utf8_lossy(data);
    let _ = morse_core::decode(&morse);
});
