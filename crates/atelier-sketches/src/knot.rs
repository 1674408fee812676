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

//! A torus knot bouncing and tumbling over a wireframe grid.
//!
//! The panel exposes the knot's speed, travel distance, and rotation rate,
//! plus a wireframe toggle for the ground plane.

use atelier_core::math::{LinearRgba, Vec3, FRAC_PI_2};
use atelier_scene::{
    Camera, GeometryKind, Material, NodeId, Scene, SceneObject, Transform, ViewportSize,
};
use rand::RngCore;

use crate::panel::{
    ConfigUpdate, Control, ControlId, ControlKind, Folder, PanelError, PanelSchema,
};
use crate::sketch::Sketch;
use crate::violet_backdrop;

const WIREFRAME: ControlId = ControlId::from_static("wireframe");
const SPEED: ControlId = ControlId::from_static("speed");
const DISTANCE: ControlId = ControlId::from_static("distance");
const ROTATION: ControlId = ControlId::from_static("rotation");

/// The bouncing-knot sketch.
pub struct Knot {
    scene: Scene,
    panel: PanelSchema,
    knot: NodeId,
    plane: NodeId,
    speed: f32,
    distance: f32,
    rotation: f32,
}

impl Knot {
    /// Builds the scene: a fine trefoil knot above a 10x10 wireframe grid.
    pub fn new() -> Self {
        let camera = Camera::default_perspective().with_position(Vec3::new(-2.0, 3.0, -5.0));
        let mut scene = Scene::new(camera);
        scene.background = Some(violet_backdrop());

        let knot = scene.add_object(SceneObject::new(
            GeometryKind::torus_knot(1.0, 0.2, 300, 20),
            Material::normal(),
        ));
        // The grid is authored upright and laid flat by rotation.
        let plane = scene.add_object(
            SceneObject::new(
                GeometryKind::subdivided_plane(10.0, 10.0, 50, 50),
                Material::basic(LinearRgba::WHITE)
                    .with_wireframe(true)
                    .with_double_sided(),
            )
            .with_transform(
                Transform::identity().with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0)),
            ),
        );

        let panel = PanelSchema::new(vec![
            Folder::new(
                "Plane",
                vec![Control::checkbox(WIREFRAME, "Toggle Wireframe", true)],
            ),
            Folder::new(
                "TorusKnot",
                vec![
                    Control::slider(SPEED, "Speed", 0.1, 10.0, 0.1, 1.0),
                    Control::slider(DISTANCE, "Distance", 0.1, 10.0, 0.1, 1.0),
                    Control::slider(ROTATION, "Rotation", 0.1, 10.0, 0.1, 1.0),
                ],
            ),
        ]);

        Self {
            scene,
            panel,
            knot,
            plane,
            speed: 1.0,
            distance: 1.0,
            rotation: 1.0,
        }
    }

    fn read_slider(&self, id: &ControlId, fallback: f32) -> f32 {
        match self.panel.control(id).map(|control| &control.kind) {
            Some(ControlKind::Slider { value, .. }) => *value,
            _ => fallback,
        }
    }
}

impl Default for Knot {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch for Knot {
    fn name(&self) -> &'static str {
        "knot"
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn panel_schema(&self) -> &PanelSchema {
        &self.panel
    }

    fn apply(&mut self, update: &ConfigUpdate) -> Result<(), PanelError> {
        self.panel.set_value(&update.control, &update.value)?;

        match &update.control {
            id if *id == WIREFRAME => {
                if let Some(ControlKind::Checkbox { value }) =
                    self.panel.control(id).map(|control| &control.kind)
                {
                    let enabled = *value;
                    if let Some(plane) = self.scene.object_mut(self.plane) {
                        plane.material.set_wireframe(enabled);
                    }
                }
            }
            id if *id == SPEED => self.speed = self.read_slider(&SPEED, self.speed),
            id if *id == DISTANCE => self.distance = self.read_slider(&DISTANCE, self.distance),
            id if *id == ROTATION => self.rotation = self.read_slider(&ROTATION, self.rotation),
            _ => {}
        }
        Ok(())
    }

    fn step(&mut self, elapsed_secs: f32, _rng: &mut dyn RngCore) {
        let height = (elapsed_secs * self.speed).sin() * self.distance;
        let angle = elapsed_secs * self.rotation;

        if let Some(knot) = self.scene.object_mut(self.knot) {
            knot.transform.translation.y = height;
            knot.transform.rotation_euler = Vec3::splat(angle);
        }
    }

    fn resize(&mut self, size: ViewportSize) {
        self.scene.camera.set_aspect_ratio(size.width, size.height);
    }
}
