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

//! Defines light types for the retained scene.
//!
//! These are descriptions a rendering collaborator consumes; no lighting
//! math happens here beyond deriving a direction from a light's aim.

use atelier_core::math::{LinearRgba, Vec3};

/// A directional light source that illuminates from a uniform direction.
///
/// Directional lights simulate infinitely distant light sources like the
/// sun. The direction is derived from a position and a target, because the
/// sketches aim lights at objects rather than authoring raw directions.
///
/// # Examples
///
/// ```
/// use atelier_scene::light::DirectionalLight;
/// use atelier_core::math::{LinearRgba, Vec3};
///
/// // A low light raking across the scene from the +X side.
/// let raking = DirectionalLight {
///     position: Vec3::new(20.0, 4.1, 0.0),
///     target: Vec3::ZERO,
///     color: LinearRgba::WHITE,
///     intensity: 0.5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Where the light sits, for shadow projection and aim.
    pub position: Vec3,

    /// The point the light is aimed at.
    pub target: Vec3,

    /// The color of the light in linear RGB space.
    pub color: LinearRgba,

    /// The intensity multiplier for the light.
    ///
    /// A value of 1.0 represents standard intensity.
    pub intensity: f32,

    /// Whether this light casts shadows.
    pub cast_shadow: bool,

    /// Edge length of the square shadow map, in texels.
    pub shadow_map_size: u32,
}

impl DirectionalLight {
    /// The direction the light is pointing (normalized).
    ///
    /// This vector points from the light source towards the scene. Returns
    /// `Vec3::ZERO` when position and target coincide.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            // Default: light shining straight down onto the origin
            position: Vec3::new(0.0, 1.0, 0.0),
            target: Vec3::ZERO,
            color: LinearRgba::WHITE,
            intensity: 1.0,
            cast_shadow: false,
            shadow_map_size: 512,
        }
    }
}

/// An ambient light that illuminates everything uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    /// The color of the light in linear RGB space.
    pub color: LinearRgba,
    /// The intensity multiplier for the light.
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: LinearRgba::WHITE,
            intensity: 1.0,
        }
    }
}

/// An enumeration of all supported light types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// A directional light (sun-like, infinite distance, no falloff).
    Directional(DirectionalLight),
    /// An ambient light (uniform, shadowless fill).
    Ambient(AmbientLight),
}

impl Default for Light {
    fn default() -> Self {
        Light::Directional(DirectionalLight::default())
    }
}
