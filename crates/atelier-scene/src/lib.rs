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

//! # Atelier Scene
//!
//! The retained scene data model the sketches mutate and a rendering
//! collaborator consumes. Nothing in this crate draws; it describes what
//! would be drawn: procedural geometry descriptors, materials, lights, a
//! camera, grouped objects, and the renderer knobs a sketch sets up front.

#![warn(missing_docs)]

pub mod camera;
pub mod geometry;
pub mod light;
pub mod material;
pub mod scene;
pub mod settings;
pub mod transform;

pub use camera::{Camera, Projection};
pub use geometry::GeometryKind;
pub use light::{AmbientLight, DirectionalLight, Light};
pub use material::{EmissiveGlow, Material, MaterialKind};
pub use scene::{Group, GroupId, NodeId, Scene, SceneObject};
pub use settings::{RendererSettings, ShadowFilter, ShadowSettings, ViewportSize};
pub use transform::Transform;
