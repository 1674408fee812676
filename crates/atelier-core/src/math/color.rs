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

//! Defines the `LinearRgba` color type and associated operations.

use std::ops::{Add, Div, Mul, Sub};

/// Represents a color in a **linear RGBA** color space using `f32` components.
///
/// This struct is the standard color representation within the atelier.
/// Using a linear color space is crucial for correct lighting, shading, and
/// blending. The `f32` components allow for High Dynamic Range (HDR) colors,
/// where component values can exceed `1.0`.
///
/// `#[repr(C)]` ensures a consistent memory layout, which is important when
/// passing color data to graphics APIs.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct LinearRgba {
    /// The red component in linear space.
    pub r: f32,
    /// The green component in linear space.
    pub g: f32,
    /// The blue component in linear space.
    pub b: f32,
    /// The alpha (opacity) component (linear, but not gamma-corrected).
    pub a: f32,
}

impl LinearRgba {
    // --- Common Color Constants ---

    /// Opaque red (`[1.0, 0.0, 0.0, 1.0]`).
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque green (`[0.0, 1.0, 0.0, 1.0]`).
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Opaque blue (`[0.0, 0.0, 1.0, 1.0]`).
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Opaque yellow (`[1.0, 1.0, 0.0, 1.0]`).
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    /// Opaque white (`[1.0, 1.0, 1.0, 1.0]`).
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black (`[0.0, 0.0, 0.0, 1.0]`).
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Fully transparent black (`[0.0, 0.0, 0.0, 0.0]`).
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new `LinearRgba` with explicit RGBA values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `LinearRgba` (alpha = 1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

// --- Helper functions for sRGB conversion ---
/// Converts an sRGB component to linear space.
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts a linear component to sRGB space.
#[inline]
fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

// --- Conversions ---
impl LinearRgba {
    /// Creates a `LinearRgba` from an sRGB hex string (`#RRGGBB` or `#RRGGBBAA`).
    ///
    /// The RGB channels are converted to linear space.
    /// Alpha is normalized but not gamma corrected.
    /// Malformed channels fall back to `0` (or `255` for alpha).
    ///
    /// # Example
    /// ```
    /// use atelier_core::math::color::LinearRgba;
    /// let color = LinearRgba::from_hex("#D72638");
    /// ```
    #[inline]
    pub fn from_hex(hex: &str) -> Self {
        let hex = hex.trim_start_matches('#');
        if hex.len() < 6 {
            return Self::BLACK;
        }
        // Checked slicing: `get` returns `None` for out-of-range or
        // non-char-boundary indices, so odd lengths and multibyte input
        // degrade to the fallback instead of panicking.
        let channel = |lo: usize, hi: usize| {
            hex.get(lo..hi)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
        };
        let r = channel(0, 2).unwrap_or(0) as f32 / 255.0;
        let g = channel(2, 4).unwrap_or(0) as f32 / 255.0;
        let b = channel(4, 6).unwrap_or(0) as f32 / 255.0;
        let a = if hex.len() >= 8 {
            channel(6, 8).unwrap_or(255) as f32 / 255.0
        } else {
            1.0
        };
        Self {
            r: srgb_to_linear(r),
            g: srgb_to_linear(g),
            b: srgb_to_linear(b),
            a,
        }
    }

    /// Converts this linear color to an sRGB hex string (`#RRGGBB`).
    ///
    /// The RGB channels are gamma corrected to sRGB. Alpha is omitted, which
    /// keeps the output round-trippable through color-picker controls.
    #[inline]
    pub fn to_hex(&self) -> String {
        let r = linear_to_srgb(self.r).clamp(0.0, 1.0);
        let g = linear_to_srgb(self.g).clamp(0.0, 1.0);
        let b = linear_to_srgb(self.b).clamp(0.0, 1.0);

        format!(
            "#{:02X}{:02X}{:02X}",
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8
        )
    }

    /// Creates a `LinearRgba` from 8-bit sRGB components.
    ///
    /// # Example
    /// ```
    /// use atelier_core::math::color::LinearRgba;
    /// let backdrop = LinearRgba::from_rgb_u8(72, 60, 89);
    /// ```
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: srgb_to_linear(r as f32 / 255.0),
            g: srgb_to_linear(g as f32 / 255.0),
            b: srgb_to_linear(b as f32 / 255.0),
            a: 1.0,
        }
    }

    /// Creates a `LinearRgba` by converting from normalized sRGB components.
    #[inline]
    pub fn from_srgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: srgb_to_linear(r),
            g: srgb_to_linear(g),
            b: srgb_to_linear(b),
            a: 1.0,
        }
    }

    /// Converts this linear color to sRGB components.
    #[inline]
    pub fn to_srgb(&self) -> Self {
        Self {
            r: linear_to_srgb(self.r),
            g: linear_to_srgb(self.g),
            b: linear_to_srgb(self.b),
            a: self.a,
        }
    }
}

// --- Manipulations ---
impl LinearRgba {
    /// Returns a new color with the same RGB components but a different alpha.
    #[inline]
    pub fn with_alpha(&self, a: f32) -> Self {
        Self { a, ..*self }
    }

    /// Linearly interpolates between two colors.
    /// The factor `t` is clamped to `[0.0, 1.0]`.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: start.r + (end.r - start.r) * t,
            g: start.g + (end.g - start.g) * t,
            b: start.b + (end.b - start.b) * t,
            a: start.a + (end.a - start.a) * t,
        }
    }
}

// --- Operator Overloads ---

impl Default for LinearRgba {
    /// Returns opaque white by default.
    #[inline]
    fn default() -> Self {
        Self::WHITE
    }
}

impl Add for LinearRgba {
    type Output = Self;
    /// Adds two colors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
            a: self.a + rhs.a,
        }
    }
}

impl Sub for LinearRgba {
    type Output = Self;
    /// Subtracts two colors component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
            a: self.a - rhs.a,
        }
    }
}

impl Mul<f32> for LinearRgba {
    type Output = Self;
    /// Multiplies all components by a scalar.
    #[inline]
    fn mul(self, scalar: f32) -> Self::Output {
        Self {
            r: self.r * scalar,
            g: self.g * scalar,
            b: self.b * scalar,
            a: self.a * scalar,
        }
    }
}

impl Mul<LinearRgba> for f32 {
    type Output = LinearRgba;
    /// Multiplies a scalar by a color.
    #[inline]
    fn mul(self, color: LinearRgba) -> Self::Output {
        color * self
    }
}

impl Mul for LinearRgba {
    type Output = Self;
    /// Multiplies two colors component-wise (modulation).
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
            a: self.a * rhs.a,
        }
    }
}

impl Div<f32> for LinearRgba {
    type Output = Self;
    /// Divides all components by a scalar.
    #[inline]
    fn div(self, scalar: f32) -> Self::Output {
        let inv_scalar = 1.0 / scalar;
        self * inv_scalar
    }
}
