//! Text ↔ Morse translation over a [`MorseTable`].
//!
//! Both directions are single pass and total: anything the table does not
//! know becomes a sentinel and translation carries on.

use crate::table::{MorseTable, DECODE_SENTINEL, ENCODE_SENTINEL, WORD_SEPARATOR};

/// Encode `text` as space-separated Morse symbols.
///
/// Each character becomes its symbol, or [`ENCODE_SENTINEL`] when the table
/// has none. A space becomes [`WORD_SEPARATOR`]. The result has no leading or
/// trailing whitespace; empty input yields an empty string.
///
/// Input is walked per Unicode scalar value, not per UTF-16 code unit, so a
/// character outside the Basic Multilingual Plane (an emoji, say) yields a
/// single sentinel rather than one per surrogate half.
#[must_use]
pub fn encode(table: &MorseTable, text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 5);
    for ch in text.chars() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(table.symbol_for(ch).unwrap_or(ENCODE_SENTINEL));
    }
    out
}

/// Decode space-separated Morse symbols back into text.
///
/// Leading and trailing control characters and spaces are stripped, then the
/// input is split on single spaces. Empty tokens from runs of spaces are
/// dropped; [`WORD_SEPARATOR`] becomes a space; unknown tokens become
/// [`DECODE_SENTINEL`]. Letters always come back uppercase.
#[must_use]
pub fn decode(table: &MorseTable, morse: &str) -> String {
    let mut out = String::with_capacity(morse.len() / 2);
    let tokens = morse
        .trim_matches(is_trimmed)
        .split(' ')
        .filter(|token| !token.is_empty());
    for token in tokens {
        if token == WORD_SEPARATOR {
            out.push(' ');
        } else {
            out.push(table.char_for(token).unwrap_or(DECODE_SENTINEL));
        }
    }
    out
}

// Control characters and the ASCII space: every code point up to U+0020.
fn is_trimmed(ch: char) -> bool {
    ch <= ' '
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table() -> &'static MorseTable {
        MorseTable::global()
    }

    #[test]
    fn encode_empty_is_empty() {
        assert_eq!(encode(table(), ""), "");
    }

    #[test]
    fn decode_empty_is_empty() {
        assert_eq!(decode(table(), ""), "");
    }

    #[test]
    fn encode_sos() {
        assert_eq!(encode(table(), "SOS"), "... --- ...");
    }

    #[test]
    fn decode_sos() {
        assert_eq!(decode(table(), "... --- ..."), "SOS");
    }

    #[test]
    fn encode_words_uses_word_separator() {
        assert_eq!(encode(table(), "HI THERE"), ".... .. / - .... . .-. .");
    }

    #[test]
    fn decode_words_restores_spaces_in_uppercase() {
        let morse = encode(table(), "hi there");
        assert_eq!(morse, ".... .. / - .... . .-. .");
        assert_eq!(decode(table(), &morse), "HI THERE");
    }

    #[test]
    fn encode_unknown_character_yields_sentinel() {
        assert_eq!(encode(table(), "#"), "?");
        assert_eq!(encode(table(), "A\u{7}B"), ".- ? -...");
        assert_eq!(encode(table(), "\n"), "?");
    }

    #[test]
    fn encode_question_mark_is_a_real_symbol() {
        assert_eq!(encode(table(), "?"), "..--..");
    }

    #[test]
    fn encode_astral_char_is_one_sentinel_not_two() {
        assert_eq!(encode(table(), "🙂"), "?");
    }

    #[test]
    fn encode_non_ascii_is_one_sentinel_per_char() {
        assert_eq!(encode(table(), "é🙂"), "? ?");
    }

    #[test]
    fn encode_leading_and_trailing_spaces_keep_separators() {
        assert_eq!(encode(table(), " A "), "/ .- /");
    }

    #[test]
    fn decode_unknown_token_yields_sentinel() {
        assert_eq!(decode(table(), "......."), "#");
        assert_eq!(decode(table(), ".- abc -..."), "A#B");
    }

    #[test]
    fn decode_sentinel_from_encode_is_unknown() {
        assert_eq!(decode(table(), &encode(table(), "A#B")), "A#B");
    }

    #[test]
    fn decode_skips_runs_of_spaces() {
        assert_eq!(decode(table(), "...   ---  ..."), "SOS");
        assert_eq!(decode(table(), "     "), "");
    }

    #[test]
    fn decode_trims_surrounding_control_whitespace() {
        assert_eq!(decode(table(), "\t\r\n... --- ...\n"), "SOS");
    }

    #[test]
    fn decode_inner_tab_is_part_of_the_token() {
        assert_eq!(decode(table(), "...\t---"), "#");
    }

    #[test]
    fn decode_word_separator_alone_is_space() {
        assert_eq!(decode(table(), "/"), " ");
        assert_eq!(decode(table(), ".- / / -..."), "A  B");
    }

    #[test]
    fn decode_shared_symbols_resolve_to_first_inserted() {
        assert_eq!(decode(table(), &encode(table(), "[{}]\\")), "(())/");
    }

    #[test]
    fn digits_and_punctuation_round_trip() {
        let text = "0123456789 ,.?;:()+-_\"'/@=!";
        assert_eq!(decode(table(), &encode(table(), text)), text);
    }

    proptest! {
        #[test]
        fn letters_round_trip_to_uppercase(text in "[A-Za-z ]{0,64}") {
            let decoded = decode(table(), &encode(table(), &text));
            prop_assert_eq!(decoded, text.to_ascii_uppercase());
        }

        #[test]
        fn every_table_character_round_trips_to_reverse_winner(index in 0usize..84) {
            let t = table();
            let (ch, symbol) = match t.iter().nth(index) {
                Some(entry) => entry,
                None => panic!("index {index} out of range"),
            };
            let expected = t.char_for(symbol).map(String::from).unwrap_or_default();
            prop_assert!(ch == ' ' || expected != " ");
            prop_assert_eq!(decode(t, &encode(t, &ch.to_string())), expected);
        }

        #[test]
        fn encode_emits_one_token_per_char(text in any::<String>()) {
            let morse = encode(table(), &text);
            let tokens = if morse.is_empty() { 0 } else { morse.split(' ').count() };
            prop_assert_eq!(tokens, text.chars().count());
            prop_assert!(morse.chars().all(|c| matches!(c, '.' | '-' | '/' | '?' | ' ')));
            prop_assert!(!morse.starts_with(' ') && !morse.ends_with(' '));
        }

        #[test]
        fn decode_never_produces_more_chars_than_tokens(morse in any::<String>()) {
            let decoded = decode(table(), &morse);
            let tokens = morse.split(' ').filter(|t| !t.is_empty()).count();
            prop_assert!(decoded.chars().count() <= tokens);
        }

        #[test]
        fn decode_of_morse_alphabet_has_no_whitespace_sentinels(morse in "[.\\- /]{0,64}") {
            let decoded = decode(table(), &morse);
            prop_assert!(decoded.chars().all(|c| c == ' ' || c == '#' || in_table(c)));
        }
    }

    fn in_table(ch: char) -> bool {
        table().symbol_for(ch).is_some()
    }
}
