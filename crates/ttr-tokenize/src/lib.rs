//! # ttr-tokenize
//!
//! **Tier 1 (Tokenization)**
//!
//! Turns raw text into lowercase word tokens for type-token statistics.
//!
//! * Text is lowercased, then NFC-normalized so precomposed and decomposed
//!   accents give the same token.
//! * Letters and digits form words. A combining mark continues the word it
//!   follows, so `i\u{307}` (lowercase `İ`) stays one word.
//! * An apostrophe or hyphen stays inside a word only when it sits between
//!   two letters: `can't`, `it's`, `well-known`, `mother-in-law`.
//! * Everything else (whitespace, sentence punctuation, quotes, brackets,
//!   stray apostrophes and dashes) separates words and is dropped.
//! * With `strip_numbers`, tokens of ASCII digits only are discarded.
//!   Fractions, superscripts and Roman numerals are kept as words.
//!
//! Tokenization is a pure function of the text and the flag.

#![forbid(unsafe_code)]

use ttr_settings::TokenizerSettings;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalizing word tokenizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    strip_numbers: bool,
}

impl Tokenizer {
    pub fn new(strip_numbers: bool) -> Self {
        Self { strip_numbers }
    }

    pub fn strip_numbers(&self) -> bool {
        self.strip_numbers
    }

    /// Split `text` into tokens in left-to-right order.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text
            .to_lowercase()
            .nfc()
            .map(fold_apostrophe)
            .collect();
        let mut tokens = Vec::new();
        let mut current = String::new();

        for (i, &c) in chars.iter().enumerate() {
            let in_word = !current.is_empty();
            if c.is_alphanumeric()
                || (in_word && is_combining_mark(c))
                || (in_word && is_joiner(c) && between_letters(&chars, i))
            {
                current.push(c);
            } else {
                self.flush(&mut current, &mut tokens);
            }
        }
        self.flush(&mut current, &mut tokens);
        tokens
    }

    fn flush(&self, current: &mut String, tokens: &mut Vec<String>) {
        if current.is_empty() {
            return;
        }
        let token = std::mem::take(current);
        if self.strip_numbers && token.chars().all(|c| c.is_ascii_digit()) {
            return;
        }
        tokens.push(token);
    }
}

impl From<TokenizerSettings> for Tokenizer {
    fn from(settings: TokenizerSettings) -> Self {
        Self::new(settings.strip_numbers)
    }
}

impl From<&TokenizerSettings> for Tokenizer {
    fn from(settings: &TokenizerSettings) -> Self {
        Self::new(settings.strip_numbers)
    }
}

/// Typographic apostrophes are treated as the ASCII one.
fn fold_apostrophe(c: char) -> char {
    match c {
        '\u{2019}' | '\u{02BC}' => '\'',
        other => other,
    }
}

fn is_joiner(c: char) -> bool {
    c == '\'' || c == '-'
}

/// A joiner at `i` needs a letter (or a mark on one) before it and a letter after.
fn between_letters(chars: &[char], i: usize) -> bool {
    i > 0
        && (chars[i - 1].is_alphabetic() || is_combining_mark(chars[i - 1]))
        && chars.get(i + 1).is_some_and(|next| next.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str) -> Vec<String> {
        Tokenizer::default().tokenize(text)
    }

    #[test]
    fn basic_sentence() {
        assert_eq!(
            tok("Hello world! This is a test."),
            vec!["hello", "world", "this", "is", "a", "test"]
        );
    }

    #[test]
    fn contractions_are_kept_whole() {
        let tokens = tok("I can't believe it's working");
        assert_eq!(tokens, vec!["i", "can't", "believe", "it's", "working"]);
    }

    #[test]
    fn hyphen_chains_are_kept_whole() {
        let tokens = tok("The well-known mother-in-law arrived");
        assert_eq!(tokens, vec!["the", "well-known", "mother-in-law", "arrived"]);
    }

    #[test]
    fn edge_joiners_are_stripped() {
        assert_eq!(tok("'quoted' -dash- rock'n'roll"), vec!["quoted", "dash", "rock'n'roll"]);
        assert_eq!(tok("dogs' bones"), vec!["dogs", "bones"]);
    }

    #[test]
    fn doubled_or_digit_joiners_split() {
        assert_eq!(tok("well--known"), vec!["well", "known"]);
        assert_eq!(tok("1-2 covid-19"), vec!["1", "2", "covid", "19"]);
    }

    #[test]
    fn typographic_apostrophe_is_folded() {
        assert_eq!(tok("Don\u{2019}t"), vec!["don't"]);
    }

    #[test]
    fn strip_numbers_keeps_mixed_tokens() {
        let tokenizer = Tokenizer::new(true);
        assert_eq!(
            tokenizer.tokenize("Chapter 1 has 42 pages"),
            vec!["chapter", "has", "pages"]
        );
        assert_eq!(tokenizer.tokenize("route 66 r2d2"), vec!["route", "r2d2"]);
    }

    #[test]
    fn combining_mark_continues_its_word() {
        assert_eq!(tok("\u{130}stanbul"), vec!["i\u{307}stanbul"]);
        assert_eq!(tok("cafe\u{301} au lait"), vec!["caf\u{e9}", "au", "lait"]);
    }

    #[test]
    fn decomposed_and_precomposed_accents_are_one_type() {
        assert_eq!(tok("cafe\u{301}"), tok("caf\u{e9}"));
        assert_eq!(tok("Cafe\u{301}'s"), vec!["caf\u{e9}'s"]);
    }

    #[test]
    fn leading_mark_does_not_start_a_word() {
        assert_eq!(tok("\u{301}abc \u{301}'x"), vec!["abc", "x"]);
    }

    #[test]
    fn strip_numbers_only_drops_ascii_digit_tokens() {
        let tokenizer = Tokenizer::new(true);
        assert_eq!(
            tokenizer.tokenize("page \u{bd} and \u{b2} and 12"),
            vec!["page", "\u{bd}", "and", "\u{b2}", "and"]
        );
    }

    #[test]
    fn empty_and_punctuation_only_inputs_yield_nothing() {
        assert!(tok("").is_empty());
        assert!(tok("  ... !!! -- '' ").is_empty());
    }

    #[test]
    fn settings_conversion_carries_flag() {
        let tokenizer = Tokenizer::from(TokenizerSettings {
            strip_numbers: true,
        });
        assert!(tokenizer.strip_numbers());

        let settings = TokenizerSettings {
            strip_numbers: true,
        };
        assert_eq!(Tokenizer::from(&settings), Tokenizer::new(true));
    }
}
