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

//! The per-term layout configuration.

use serde::{Deserialize, Serialize};

use crate::occurrence::DEFAULT_HEIGHT_SCALE;

/// Configuration for laying out one search term.
///
/// Only the data the pure pipeline consumes lives here. Visual styling
/// (colors, geometry, materials) belongs to the sketch layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSpec {
    /// The lowercase token to search for.
    pub term: String,
    /// How many instances to emit per occurrence.
    pub count: u32,
    /// Width of the square region instances scatter across, in world units.
    pub spatial_spread: f32,
    /// Multiplier applied when mapping a match position to a height.
    pub height_scale: f32,
}

impl TermSpec {
    /// Creates a spec with the default height scale.
    pub fn new(term: impl Into<String>, count: u32, spatial_spread: f32) -> Self {
        Self {
            term: term.into(),
            count,
            spatial_spread,
            height_scale: DEFAULT_HEIGHT_SCALE,
        }
    }

    /// Overrides the height scale.
    pub fn with_height_scale(mut self, height_scale: f32) -> Self {
        self.height_scale = height_scale;
        self
    }
}

impl Default for TermSpec {
    /// An empty term with no instances; matches nothing until configured.
    fn default() -> Self {
        Self {
            term: String::new(),
            count: 0,
            spatial_spread: 0.0,
            height_scale: DEFAULT_HEIGHT_SCALE,
        }
    }
}
