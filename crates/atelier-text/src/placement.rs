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

//! Expansion of occurrences into per-instance placement instructions.

use serde::{Deserialize, Serialize};

use crate::occurrence::Occurrence;
use crate::term::TermSpec;
use crate::token::TokenizedText;

/// One object to be placed by a scene materializer.
///
/// Instructions carry everything the pure pipeline knows about an instance.
/// They deliberately exclude positions and rotations: those involve
/// randomness, which is injected downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementInstruction {
    /// The term this instance visualizes.
    pub term: String,
    /// Token index of the occurrence this instance belongs to.
    pub occurrence_index: usize,
    /// Height shared by every instance of the occurrence.
    pub normalized_height: f32,
    /// Which of the occurrence's `count` instances this is, in `0..count`.
    pub instance_index: u32,
}

/// The layout produced for a single term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermLayout {
    /// The configuration the layout was computed from.
    pub spec: TermSpec,
    /// Every match of the term, in document order.
    pub occurrences: Vec<Occurrence>,
    /// The expanded instructions, `occurrences.len() * spec.count` in total.
    pub instructions: Vec<PlacementInstruction>,
}

/// Expands occurrences into exactly `spec.count` instructions each.
///
/// Instances of one occurrence share its height and differ only by
/// `instance_index`. A count of zero is valid and produces no instructions.
///
/// # Examples
///
/// ```
/// use atelier_text::{expand, tokenize, TermSpec};
///
/// let text = tokenize("army army shadow army");
/// let spec = TermSpec::new("army", 100, 10.0);
/// let instructions = expand(&text.occurrences_of("army"), &spec);
/// assert_eq!(instructions.len(), 300);
/// ```
pub fn expand(occurrences: &[Occurrence], spec: &TermSpec) -> Vec<PlacementInstruction> {
    let mut instructions = Vec::with_capacity(occurrences.len() * spec.count as usize);
    for occurrence in occurrences {
        for instance_index in 0..spec.count {
            instructions.push(PlacementInstruction {
                term: spec.term.clone(),
                occurrence_index: occurrence.index,
                normalized_height: occurrence.normalized_height,
                instance_index,
            });
        }
    }
    instructions
}

/// Runs the whole pipeline for a list of terms, yielding one layout per term.
///
/// Each spec is scanned independently against the same tokenized text with
/// its own height scale, then expanded. Layouts come back in spec order.
pub fn layout_terms(text: &TokenizedText, specs: &[TermSpec]) -> Vec<TermLayout> {
    specs
        .iter()
        .map(|spec| {
            let occurrences = text.occurrences_of_scaled(&spec.term, spec.height_scale);
            let instructions = expand(&occurrences, spec);
            log::debug!(
                "Term '{}': {} occurrences, {} placement instructions.",
                spec.term,
                occurrences.len(),
                instructions.len()
            );
            TermLayout {
                spec: spec.clone(),
                occurrences,
                instructions,
            }
        })
        .collect()
}
