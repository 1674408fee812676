// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tokenization of source text into an ordered, lowercase token sequence.

use serde::{Deserialize, Serialize};

/// An ordered sequence of lowercase tokens derived from a source text.
///
/// The sequence is an explicit value handed from the tokenizer to the
/// occurrence scanner; nothing in this crate keeps tokenized state in
/// globals. Token positions are stable, so downstream heights derived from
/// them are reproducible for the same source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedText {
    tokens: Vec<String>,
}

impl TokenizedText {
    /// Wraps an already-built token sequence.
    ///
    /// Mostly useful in tests; production code goes through [`tokenize`].
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Returns the tokens in document order.
    #[inline]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns the token at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Returns the total number of tokens, empty tokens included.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the sequence holds no tokens at all.
    ///
    /// Note that tokenizing an empty source yields one empty token, not an
    /// empty sequence; this is only `true` for sequences built via
    /// [`TokenizedText::from_tokens`] with an empty vector.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Returns `true` for characters that belong inside a token.
///
/// Tokens are runs of ASCII word characters (`[A-Za-z0-9_]`) and
/// apostrophes; everything else delimits.
#[inline]
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '\''
}

/// Tokenizes a source text.
///
/// The pipeline is: strip every `.` character, lowercase, then split on runs
/// of one or more delimiter characters (anything that is not an ASCII word
/// character or an apostrophe). Delimiter runs at the start or end of the
/// text contribute empty boundary tokens, and the empty source yields a
/// single empty token. Those empties count toward the sequence length, which
/// downstream height mapping depends on.
///
/// Total and deterministic: any input produces a token sequence, and the
/// same input always produces the same sequence.
///
/// # Examples
///
/// ```
/// use atelier_text::tokenize;
///
/// let text = tokenize("Hello World.");
/// assert_eq!(text.tokens(), ["hello", "world"]);
///
/// let text = tokenize("shadow, rise!");
/// assert_eq!(text.tokens(), ["shadow", "rise", ""]);
/// ```
pub fn tokenize(source: &str) -> TokenizedText {
    let stripped: String = source.chars().filter(|&c| c != '.').collect();
    let lowered = stripped.to_lowercase();

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut last_was_delimiter = false;

    for c in lowered.chars() {
        if is_token_char(c) {
            current.push(c);
            last_was_delimiter = false;
        } else {
            // Only the first delimiter of a run closes a token.
            if !last_was_delimiter {
                tokens.push(std::mem::take(&mut current));
            }
            last_was_delimiter = true;
        }
    }
    tokens.push(current);

    log::trace!("Tokenized source into {} tokens.", tokens.len());
    TokenizedText { tokens }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<String> {
        tokenize(source).tokens().to_vec()
    }

    #[test]
    fn test_basic_sentence() {
        assert_eq!(tokens("Hello World."), ["hello", "world"]);
    }

    #[test]
    fn test_empty_source_yields_one_empty_token() {
        assert_eq!(tokens(""), [""]);
        assert_eq!(tokenize("").len(), 1);
    }

    #[test]
    fn test_periods_are_stripped_before_splitting() {
        // The dots vanish entirely, so the abbreviation fuses into one token.
        assert_eq!(tokens("The U.S.A. anthem"), ["the", "usa", "anthem"]);
        assert_eq!(tokens("..."), [""]);
    }

    #[test]
    fn test_lowercasing() {
        assert_eq!(tokens("ARISE Shadow ARMY"), ["arise", "shadow", "army"]);
    }

    #[test]
    fn test_apostrophes_stay_inside_tokens() {
        assert_eq!(tokens("don't stop"), ["don't", "stop"]);
    }

    #[test]
    fn test_underscores_and_digits_are_word_characters() {
        assert_eq!(tokens("foo_bar 123 x9"), ["foo_bar", "123", "x9"]);
    }

    #[test]
    fn test_delimiter_runs_collapse() {
        assert_eq!(tokens("a!!b"), ["a", "b"]);
        assert_eq!(tokens("a -- b"), ["a", "b"]);
    }

    #[test]
    fn test_leading_delimiter_yields_empty_boundary_token() {
        assert_eq!(tokens("!a"), ["", "a"]);
    }

    #[test]
    fn test_trailing_delimiter_yields_empty_boundary_token() {
        assert_eq!(tokens("a!"), ["a", ""]);
    }

    #[test]
    fn test_only_delimiters_yield_two_empty_tokens() {
        assert_eq!(tokens("!"), ["", ""]);
        assert_eq!(tokens("?! ,"), ["", ""]);
    }

    #[test]
    fn test_non_ascii_letters_delimit() {
        // Word characters are ASCII-only, so accented letters split tokens.
        assert_eq!(tokens("café au lait"), ["caf", "au", "lait"]);
    }

    #[test]
    fn test_tokenization_is_deterministic() {
        let source = "The Shadow Monarch's army rises. Arise!";
        assert_eq!(tokenize(source), tokenize(source));
    }

    #[test]
    fn test_from_tokens_roundtrip() {
        let text = TokenizedText::from_tokens(vec!["one".into(), "two".into()]);
        assert_eq!(text.len(), 2);
        assert_eq!(text.get(0), Some("one"));
        assert_eq!(text.get(1), Some("two"));
        assert_eq!(text.get(2), None);
        assert!(!text.is_empty());
        assert!(TokenizedText::from_tokens(Vec::new()).is_empty());
    }
}
