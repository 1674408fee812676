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

use atelier_core::math::Vec3;

/// Describes an object's position, rotation, and scale in world space.
///
/// Rotation is stored as per-axis Euler angles in radians, applied in XYZ
/// order. The sketches animate individual axes directly every frame, which
/// is why the angles stay explicit instead of folding into a quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// The translation (position) of the object.
    pub translation: Vec3,
    /// The rotation of the object as Euler angles in radians (XYZ order).
    pub rotation_euler: Vec3,
    /// The scale of the object.
    pub scale: Vec3,
}

impl Transform {
    /// Creates a new `Transform` with a given translation, rotation, and scale.
    pub fn new(translation: Vec3, rotation_euler: Vec3, scale: Vec3) -> Self {
        Self {
            translation,
            rotation_euler,
            scale,
        }
    }

    /// Creates a new `Transform` with a given translation, and identity rotation/scale.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation_euler: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Creates a new identity `Transform`, with no translation, rotation, or scaling.
    /// This represents the origin.
    pub fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation_euler: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Returns this transform with a different rotation.
    pub fn with_rotation(mut self, rotation_euler: Vec3) -> Self {
        self.rotation_euler = rotation_euler;
        self
    }

    /// Returns this transform with a uniform scale factor.
    pub fn with_uniform_scale(mut self, factor: f32) -> Self {
        self.scale = Vec3::splat(factor);
        self
    }

    /// Returns this transform with a different scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for Transform {
    /// Returns the identity `Transform`.
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use atelier_core::math::FRAC_PI_2;

    #[test]
    fn test_identity() {
        let transform = Transform::identity();
        assert_eq!(transform.translation, Vec3::ZERO);
        assert_eq!(transform.rotation_euler, Vec3::ZERO);
        assert_eq!(transform.scale, Vec3::ONE);
        assert_eq!(transform, Transform::default());
    }

    #[test]
    fn test_from_translation() {
        let transform = Transform::from_translation(Vec3::new(12.0, 2.5, 0.0));
        assert_eq!(transform.translation, Vec3::new(12.0, 2.5, 0.0));
        assert_eq!(transform.rotation_euler, Vec3::ZERO);
        assert_eq!(transform.scale, Vec3::ONE);
    }

    #[test]
    fn test_builders() {
        let transform = Transform::from_translation(Vec3::ZERO)
            .with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0))
            .with_uniform_scale(2.5);

        assert_relative_eq!(transform.rotation_euler.x, FRAC_PI_2);
        assert_eq!(transform.scale, Vec3::new(2.5, 2.5, 2.5));

        let stretched = transform.with_scale(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(stretched.scale, Vec3::new(1.0, 2.0, 3.0));
    }
}
