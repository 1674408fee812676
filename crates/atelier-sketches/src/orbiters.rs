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

//! Two normal-shaded solids circling each other.
//!
//! A sphere and a tetrahedron orbit the origin in mirrored circles on the
//! XY plane. No lights (normal materials ignore them), no panel.

use atelier_core::math::Vec3;
use atelier_scene::{
    Camera, GeometryKind, Material, NodeId, Scene, SceneObject, ViewportSize,
};
use rand::RngCore;

use crate::panel::{ConfigUpdate, PanelError, PanelSchema};
use crate::sketch::Sketch;
use crate::violet_backdrop;

/// The orbiting-solids sketch.
pub struct Orbiters {
    scene: Scene,
    panel: PanelSchema,
    sphere: NodeId,
    tetrahedron: NodeId,
}

impl Orbiters {
    /// Builds the scene: violet backdrop, camera 5 units out, two solids.
    pub fn new() -> Self {
        let camera = Camera::default_perspective().with_position(Vec3::new(0.0, 0.0, 5.0));
        let mut scene = Scene::new(camera);
        scene.background = Some(violet_backdrop());

        let sphere = scene.add_object(SceneObject::new(
            GeometryKind::sphere(1.0),
            Material::normal(),
        ));
        let tetrahedron = scene.add_object(SceneObject::new(
            GeometryKind::tetrahedron(1.0),
            Material::normal(),
        ));

        Self {
            scene,
            panel: PanelSchema::default(),
            sphere,
            tetrahedron,
        }
    }
}

impl Default for Orbiters {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch for Orbiters {
    fn name(&self) -> &'static str {
        "orbiters"
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn panel_schema(&self) -> &PanelSchema {
        &self.panel
    }

    fn apply(&mut self, update: &ConfigUpdate) -> Result<(), PanelError> {
        Err(PanelError::UnknownControl(update.control.clone()))
    }

    fn step(&mut self, elapsed_secs: f32, _rng: &mut dyn RngCore) {
        let (sin, cos) = elapsed_secs.sin_cos();

        if let Some(sphere) = self.scene.object_mut(self.sphere) {
            sphere.transform.translation = Vec3::new(cos, sin, 0.0);
        }
        if let Some(tetrahedron) = self.scene.object_mut(self.tetrahedron) {
            tetrahedron.transform.translation = Vec3::new(-cos, sin, 0.0);
        }
    }

    fn resize(&mut self, size: ViewportSize) {
        self.scene.camera.set_aspect_ratio(size.width, size.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::math::{approx_eq, FRAC_PI_2, PI};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_initial_scene() {
        let sketch = Orbiters::new();
        assert_eq!(sketch.scene().object_count(), 2);
        assert_eq!(sketch.scene().camera.position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(sketch.scene().background, Some(violet_backdrop()));
        assert!(sketch.panel_schema().folders.is_empty());
    }

    #[test]
    fn test_mirrored_orbits() {
        let mut sketch = Orbiters::new();
        let mut rng = StdRng::seed_from_u64(0);

        sketch.step(FRAC_PI_2, &mut rng);
        let sphere = sketch.scene.object(sketch.sphere).unwrap().transform.translation;
        let tetrahedron = sketch
            .scene
            .object(sketch.tetrahedron)
            .unwrap()
            .transform
            .translation;

        // At t = pi/2 both sit at the top of their circles, on opposite x.
        assert!(approx_eq(sphere.y, 1.0));
        assert!(approx_eq(tetrahedron.y, 1.0));
        assert!(approx_eq(sphere.x, -tetrahedron.x));

        sketch.step(PI, &mut rng);
        let sphere = sketch.scene.object(sketch.sphere).unwrap().transform.translation;
        assert!(approx_eq(sphere.x, -1.0));
        assert!(approx_eq(sphere.y, 0.0));
    }

    #[test]
    fn test_step_is_a_function_of_elapsed_time() {
        let mut first = Orbiters::new();
        let mut second = Orbiters::new();
        let mut rng = StdRng::seed_from_u64(0);

        first.step(1.25, &mut rng);
        second.step(0.5, &mut rng);
        second.step(1.25, &mut rng);

        assert_eq!(
            first.scene.object(first.sphere).unwrap().transform,
            second.scene.object(second.sphere).unwrap().transform
        );
    }

    #[test]
    fn test_no_controls() {
        let mut sketch = Orbiters::new();
        let err = sketch
            .apply(&ConfigUpdate::scalar("speed".into(), 2.0))
            .unwrap_err();
        assert!(matches!(err, PanelError::UnknownControl(_)));
    }
}
