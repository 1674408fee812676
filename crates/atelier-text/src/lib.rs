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

//! # Atelier Text
//!
//! The text-to-placement pipeline behind the word-visualization sketches.
//!
//! A source text is tokenized into an ordered, lowercase token sequence.
//! Search terms are scanned against that sequence, and each match is mapped
//! to a vertical height proportional to its position in the text. Matches
//! are then expanded into per-instance placement instructions that a scene
//! materializer can turn into visible objects.
//!
//! Every operation in this crate is pure and deterministic. Randomness
//! (scatter positions, rotations) belongs to the materializer, which
//! consumes [`PlacementInstruction`]s downstream.

#![warn(missing_docs)]

pub mod occurrence;
pub mod placement;
pub mod term;
pub mod token;

pub use occurrence::{Occurrence, DEFAULT_HEIGHT_SCALE};
pub use placement::{expand, layout_terms, PlacementInstruction, TermLayout};
pub use term::TermSpec;
pub use token::{tokenize, TokenizedText};
