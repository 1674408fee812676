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

//! Scanning a tokenized text for term matches and mapping them to heights.

use serde::{Deserialize, Serialize};

use crate::token::TokenizedText;

/// The height scale every stock sketch uses.
pub const DEFAULT_HEIGHT_SCALE: f32 = 0.2;

/// A single match of a search term within a tokenized text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Zero-based position of the matching token in the sequence.
    pub index: usize,
    /// Vertical placement derived from the match position.
    ///
    /// Computed as `(100.0 / token_count) * index * height_scale`, so a
    /// match near the start of the text sits low and a match near the end
    /// sits high, regardless of how long the text is. The value is left
    /// unclamped; callers own any range mapping.
    pub normalized_height: f32,
}

impl TokenizedText {
    /// Scans for `term` using the default height scale.
    ///
    /// See [`TokenizedText::occurrences_of_scaled`] for the full contract.
    ///
    /// # Examples
    ///
    /// ```
    /// use atelier_text::tokenize;
    ///
    /// let text = tokenize("army army shadow army");
    /// let matches = text.occurrences_of("army");
    /// assert_eq!(matches.len(), 3);
    /// assert_eq!(matches[2].index, 3);
    /// assert_eq!(matches[2].normalized_height, 15.0);
    /// ```
    pub fn occurrences_of(&self, term: &str) -> Vec<Occurrence> {
        self.occurrences_of_scaled(term, DEFAULT_HEIGHT_SCALE)
    }

    /// Scans for `term` left to right and returns every occurrence.
    ///
    /// Matching is exact string equality against the lowercase token
    /// sequence, so the caller is expected to pass a lowercase term. Each
    /// match carries `normalized_height = (100.0 / token_count) * index *
    /// height_scale`; the height depends only on the match position, the
    /// sequence length, and the scale, never on which term matched.
    ///
    /// The empty term matches nothing, even though empty boundary tokens
    /// exist in the sequence. An empty sequence likewise yields no matches,
    /// and no division is performed for it.
    pub fn occurrences_of_scaled(&self, term: &str, height_scale: f32) -> Vec<Occurrence> {
        if self.is_empty() || term.is_empty() {
            return Vec::new();
        }

        let token_count = self.len() as f32;
        self.tokens()
            .iter()
            .enumerate()
            .filter(|(_, token)| token.as_str() == term)
            .map(|(index, _)| Occurrence {
                index,
                normalized_height: (100.0 / token_count) * index as f32 * height_scale,
            })
            .collect()
    }
}
