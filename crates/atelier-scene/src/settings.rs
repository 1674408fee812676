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

//! Renderer and viewport configuration held as data.

/// The shadow-map filtering a renderer should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowFilter {
    /// Unfiltered shadow map lookups; hard edges.
    Basic,
    /// Percentage-closer filtering.
    #[default]
    Pcf,
    /// Percentage-closer filtering with a soft penumbra.
    PcfSoft,
}

/// Shadow rendering configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShadowSettings {
    /// How shadow map lookups are filtered.
    pub filter: ShadowFilter,
}

/// The knobs a sketch sets on its rendering collaborator up front.
///
/// These are requests, not guarantees; the renderer owns the final word on
/// what the platform supports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererSettings {
    /// Request multisample anti-aliasing.
    pub antialias: bool,
    /// Request an alpha-capable default framebuffer.
    pub alpha: bool,
    /// Shadow mapping, when enabled.
    pub shadows: Option<ShadowSettings>,
    /// Upper bound on the device pixel ratio, to cap fill cost on
    /// high-density displays.
    pub max_pixel_ratio: f32,
}

impl RendererSettings {
    /// Requests an alpha-capable framebuffer.
    pub fn with_alpha(mut self) -> Self {
        self.alpha = true;
        self
    }

    /// Enables shadow mapping with the given filter.
    pub fn with_shadows(mut self, filter: ShadowFilter) -> Self {
        self.shadows = Some(ShadowSettings { filter });
        self
    }
}

impl Default for RendererSettings {
    /// Anti-aliased, opaque, shadowless, pixel ratio capped at 2.
    fn default() -> Self {
        Self {
            antialias: true,
            alpha: false,
            shadows: None,
            max_pixel_ratio: 2.0,
        }
    }
}

/// A viewport size in physical pixels, carried by resize events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ViewportSize {
    /// Creates a viewport size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; `1.0` for a degenerate zero-height viewport.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0 {
            self.width as f32 / self.height as f32
        } else {
            1.0
        }
    }
}
