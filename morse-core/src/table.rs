//! The fixed character ↔ Morse symbol table.
//!
//! Several characters share a symbol: both cases of every letter, and the
//! bracket and slash families among the punctuation. The reverse direction
//! keeps whichever character was inserted first, so insertion order below
//! decides what `decode` produces.

use std::sync::LazyLock;

use indexmap::IndexMap;

/// Symbol standing for a literal space.
pub const WORD_SEPARATOR: &str = "/";

/// Emitted by `encode` for a character that has no symbol.
pub const ENCODE_SENTINEL: &str = "?";

/// Emitted by `decode` for a token that has no character.
pub const DECODE_SENTINEL: char = '#';

#[rustfmt::skip]
const UPPERCASE: [(char, &str); 26] = [
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."), ('E', "."),
    ('F', "..-."), ('G', "--."), ('H', "...."), ('I', ".."), ('J', ".---"),
    ('K', "-.-"), ('L', ".-.."), ('M', "--"), ('N', "-."), ('O', "---"),
    ('P', ".--."), ('Q', "--.-"), ('R', ".-."), ('S', "..."), ('T', "-"),
    ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"), ('Y', "-.--"),
    ('Z', "--.."),
];

#[rustfmt::skip]
const DIGITS: [(char, &str); 10] = [
    ('0', "-----"), ('1', ".----"), ('2', "..---"), ('3', "...--"), ('4', "....-"),
    ('5', "....."), ('6', "-...."), ('7', "--..."), ('8', "---.."), ('9', "----."),
];

#[rustfmt::skip]
const PUNCTUATION: [(char, &str); 22] = [
    (' ', WORD_SEPARATOR),
    (',', "--..--"), ('.', ".-.-.-"), ('?', "..--.."), (';', "-.-.-."), (':', "---..."),
    ('(', "-.--."), (')', "-.--.-"), ('[', "-.--."), (']', "-.--.-"),
    ('{', "-.--."), ('}', "-.--.-"), ('+', ".-.-."), ('-', "-....-"), ('_', "..--.-"),
    ('"', ".-..-."), ('\'', ".----."), ('/', "-..-."), ('\\', "-..-."), ('@', ".--.-."),
    ('=', "-...-"), ('!', "-.-.--"),
];

static GLOBAL: LazyLock<MorseTable> = LazyLock::new(MorseTable::new);

/// Bidirectional character/symbol lookup.
///
/// Immutable after construction; share it by reference or `Arc`.
#[derive(Debug, Clone)]
pub struct MorseTable {
    forward: IndexMap<char, &'static str>,
    reverse: IndexMap<&'static str, char>,
}

impl MorseTable {
    /// Build the table: uppercase, lowercase, digits, then space and punctuation.
    #[must_use]
    pub fn new() -> Self {
        let lowercase = UPPERCASE.map(|(ch, symbol)| (ch.to_ascii_lowercase(), symbol));

        let forward: IndexMap<char, &'static str> = UPPERCASE
            .into_iter()
            .chain(lowercase)
            .chain(DIGITS)
            .chain(PUNCTUATION)
            .collect();

        let mut reverse = IndexMap::with_capacity(forward.len());
        for (&ch, &symbol) in &forward {
            reverse.entry(symbol).or_insert(ch);
        }

        Self { forward, reverse }
    }

    /// The process-wide table, built on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Symbol for `ch`, if the table has one. Case-sensitive lookup; both
    /// cases of a letter are present.
    #[must_use]
    pub fn symbol_for(&self, ch: char) -> Option<&'static str> {
        self.forward.get(&ch).copied()
    }

    /// Character for `symbol`, resolved first-insertion-wins.
    #[must_use]
    pub fn char_for(&self, symbol: &str) -> Option<char> {
        self.reverse.get(symbol).copied()
    }

    /// Number of characters with a symbol.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Forward entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.forward.iter().map(|(&ch, &symbol)| (ch, symbol))
    }
}

impl Default for MorseTable {
    fn default() -> Self {
        Self::new()
    }
}
