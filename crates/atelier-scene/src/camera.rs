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

/// Defines the type of camera projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection with field of view.
    Perspective {
        /// The vertical field of view in radians.
        fov_y_radians: f32,
    },
}

/// The viewpoint a rendering collaborator draws the scene from.
///
/// Holds projection parameters plus a position and look-at target. Per-frame
/// camera motion (turntables, view switches) lives in sketch step functions;
/// the camera itself is passive data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// The type of projection.
    pub projection: Projection,

    /// The aspect ratio of the viewport (width / height).
    /// This is typically updated when the window is resized.
    pub aspect_ratio: f32,

    /// The distance to the near clipping plane.
    /// Objects closer than this will not be rendered.
    pub z_near: f32,

    /// The distance to the far clipping plane.
    /// Objects farther than this will not be rendered.
    pub z_far: f32,

    /// Where the camera sits in world space.
    pub position: Vec3,

    /// The point the camera looks at.
    pub target: Vec3,
}

impl Camera {
    /// Creates a new perspective camera with the given parameters.
    pub fn new_perspective(fov_y_radians: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            projection: Projection::Perspective { fov_y_radians },
            aspect_ratio,
            z_near,
            z_far,
            position: Vec3::ZERO,
            target: Vec3::ZERO,
        }
    }

    /// Creates the perspective camera every sketch starts from.
    ///
    /// - FOV: 75 degrees
    /// - Aspect ratio: 16:9 (~1.777)
    /// - Near plane: 0.1
    /// - Far plane: 100.0
    pub fn default_perspective() -> Self {
        Self::new_perspective(75.0_f32.to_radians(), 16.0 / 9.0, 0.1, 100.0)
    }

    /// Returns this camera moved to `position`.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Aims the camera at a point.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// The view direction (normalized), or `Vec3::ZERO` when degenerate.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Updates the aspect ratio, typically called when the window is resized.
    pub fn set_aspect_ratio(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect_ratio = width as f32 / height as f32;
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::default_perspective()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_default() {
        let camera = Camera::default();
        match camera.projection {
            Projection::Perspective { fov_y_radians } => {
                assert_eq!(fov_y_radians, 75.0_f32.to_radians());
            }
        }
        assert_eq!(camera.aspect_ratio, 16.0 / 9.0);
        assert_eq!(camera.z_near, 0.1);
        assert_eq!(camera.z_far, 100.0);
        assert_eq!(camera.position, Vec3::ZERO);
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn test_camera_placement() {
        let mut camera = Camera::default_perspective().with_position(Vec3::new(0.0, 12.0, -20.0));
        camera.look_at(Vec3::ZERO);

        assert_eq!(camera.position, Vec3::new(0.0, 12.0, -20.0));
        assert_eq!(camera.target, Vec3::ZERO);
        assert_relative_eq!(camera.forward().length(), 1.0, epsilon = 1e-5);
        assert!(camera.forward().y < 0.0);
        assert!(camera.forward().z > 0.0);
    }

    #[test]
    fn test_camera_aspect_ratio_update() {
        let mut camera = Camera::default();
        camera.set_aspect_ratio(2560, 1080); // 21:9 ultrawide

        assert!((camera.aspect_ratio - 2560.0 / 1080.0).abs() < 0.001);
    }

    #[test]
    fn test_camera_aspect_ratio_zero_height() {
        let mut camera = Camera::default();
        let old_aspect = camera.aspect_ratio;

        // Should not crash or change aspect ratio
        camera.set_aspect_ratio(1920, 0);
        assert_eq!(camera.aspect_ratio, old_aspect);
    }

    #[test]
    fn test_degenerate_forward() {
        let camera = Camera::default();
        assert_eq!(camera.forward(), Vec3::ZERO);
    }
}
