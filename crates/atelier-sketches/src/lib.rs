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

//! # Atelier Sketches
//!
//! The five scene demos, each a [`Sketch`]: a retained scene, a declarative
//! control panel, and a pure step function of elapsed time. The crate also
//! carries the panel/event layer the sketches share and the cluster
//! materializer that turns text-pipeline placement instructions into scene
//! objects.

#![warn(missing_docs)]

pub mod cave;
pub mod cluster;
pub mod garden;
pub mod knot;
pub mod orbiters;
pub mod panel;
pub mod scatter;
pub mod sketch;

pub use cave::{Cave, CaveView, MotionPhases};
pub use cluster::{plant, ClusterStyle};
pub use garden::{CameraRig, Garden, GardenStage, TermSlot};
pub use knot::Knot;
pub use orbiters::Orbiters;
pub use panel::{
    ConfigUpdate, Control, ControlId, ControlKind, ControlValue, Folder, PanelError,
    PanelSchema, Preset,
};
pub use scatter::Scatter;
pub use sketch::{run, Sketch};

use atelier_core::math::LinearRgba;

/// The violet backdrop most of the sketches clear to (`rgb(72, 60, 89)`).
pub fn violet_backdrop() -> LinearRgba {
    LinearRgba::from_rgb_u8(72, 60, 89)
}
