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

//! Defines the material descriptors objects carry.

use atelier_core::math::LinearRgba;

/// Self-illumination parameters for a lit material.
///
/// The intensity is deliberately unbounded above 1.0 so a bloom-capable
/// renderer can overdrive the glow. Sketches mutate it per frame to flicker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissiveGlow {
    /// The emitted color, independent of scene lighting.
    pub color: LinearRgba,
    /// Intensity multiplier for the emitted color.
    pub intensity: f32,
}

impl Default for EmissiveGlow {
    fn default() -> Self {
        Self {
            color: LinearRgba::WHITE,
            intensity: 1.0,
        }
    }
}

/// The shading model of a material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialKind {
    /// A lit surface with optional self-illumination and transparency.
    Standard {
        /// The base color of the surface.
        color: LinearRgba,
        /// Optional glow added on top of the lit result.
        emissive: Option<EmissiveGlow>,
        /// Whether the surface blends with what is behind it.
        transparent: bool,
        /// Opacity in `[0, 1]`, only meaningful when `transparent` is set.
        opacity: f32,
    },
    /// Visualizes surface normals as color; ignores lights entirely.
    Normal,
    /// A flat, unlit surface.
    Basic {
        /// The fill color.
        color: LinearRgba,
        /// Render edges only.
        wireframe: bool,
    },
}

/// A complete material: shading model plus face culling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// The shading model.
    pub kind: MaterialKind,
    /// Render both faces of each triangle.
    pub double_sided: bool,
}

impl Material {
    /// A lit, opaque, single-sided surface.
    pub const fn standard(color: LinearRgba) -> Self {
        Self {
            kind: MaterialKind::Standard {
                color,
                emissive: None,
                transparent: false,
                opacity: 1.0,
            },
            double_sided: false,
        }
    }

    /// A normals-visualization material.
    pub const fn normal() -> Self {
        Self {
            kind: MaterialKind::Normal,
            double_sided: false,
        }
    }

    /// A flat unlit material.
    pub const fn basic(color: LinearRgba) -> Self {
        Self {
            kind: MaterialKind::Basic {
                color,
                wireframe: false,
            },
            double_sided: false,
        }
    }

    /// Returns this material rendered on both faces.
    pub const fn with_double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    /// Returns this material with a glow, if the shading model supports one.
    pub fn with_emissive(mut self, glow: EmissiveGlow) -> Self {
        if let MaterialKind::Standard { emissive, .. } = &mut self.kind {
            *emissive = Some(glow);
        }
        self
    }

    /// Returns this material blending at the given opacity, if supported.
    pub fn with_opacity(mut self, value: f32) -> Self {
        if let MaterialKind::Standard {
            transparent,
            opacity,
            ..
        } = &mut self.kind
        {
            *transparent = true;
            *opacity = value;
        }
        self
    }

    /// Returns this material with wireframe rendering toggled, if supported.
    pub fn with_wireframe(mut self, enabled: bool) -> Self {
        if let MaterialKind::Basic { wireframe, .. } = &mut self.kind {
            *wireframe = enabled;
        }
        self
    }

    /// Overwrites the base color of `Standard` and `Basic` materials.
    ///
    /// Returns `false` for colorless shading models.
    pub fn set_color(&mut self, new_color: LinearRgba) -> bool {
        match &mut self.kind {
            MaterialKind::Standard { color, .. } | MaterialKind::Basic { color, .. } => {
                *color = new_color;
                true
            }
            MaterialKind::Normal => false,
        }
    }

    /// Toggles wireframe rendering on a flat material.
    ///
    /// Returns `false` for shading models without a wireframe mode.
    pub fn set_wireframe(&mut self, enabled: bool) -> bool {
        if let MaterialKind::Basic { wireframe, .. } = &mut self.kind {
            *wireframe = enabled;
            true
        } else {
            false
        }
    }

    /// Overwrites the glow intensity of a material that has one.
    ///
    /// Returns `false` when the material has no glow to adjust.
    pub fn set_emissive_intensity(&mut self, intensity: f32) -> bool {
        if let MaterialKind::Standard {
            emissive: Some(glow),
            ..
        } = &mut self.kind
        {
            glow.intensity = intensity;
            true
        } else {
            false
        }
    }
}

impl Default for Material {
    /// A lit, light-gray surface.
    fn default() -> Self {
        Self::standard(LinearRgba::new(0.8, 0.8, 0.8, 1.0))
    }
}
