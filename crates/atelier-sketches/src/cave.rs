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

//! A shadow-play sketch: solids in front of a wall, lit from behind.
//!
//! A torus knot and a sphere hover off to one side of a white plane; a low
//! directional light projects their shadows onto it. The panel switches
//! between two fixed viewpoints, one tagged variant at a time, and latches
//! motion phases that accumulate as the performance unfolds.

use atelier_core::math::{LinearRgba, Vec3, FRAC_PI_2};
use atelier_scene::{
    Camera, DirectionalLight, GeometryKind, Light, Material, NodeId, RendererSettings, Scene,
    SceneObject, ShadowFilter, Transform, ViewportSize,
};
use rand::RngCore;

use crate::panel::{ConfigUpdate, Control, ControlId, Folder, PanelError, PanelSchema};
use crate::sketch::Sketch;

const PART_ONE: ControlId = ControlId::from_static("part_one");
const PART_TWO: ControlId = ControlId::from_static("part_two");
const SPIN: ControlId = ControlId::from_static("spin");
const BOB: ControlId = ControlId::from_static("bob");
const TUMBLE: ControlId = ControlId::from_static("tumble");
const SWEEP: ControlId = ControlId::from_static("sweep");

/// Which of the two fixed viewpoints is active.
///
/// A tagged variant makes "both views at once" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaveView {
    /// Close to the wall, watching the shadows.
    PartOne,
    /// Pulled back past the solids, watching the whole stage.
    PartTwo,
}

/// The motion phases of the performance. Once latched, a phase stays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionPhases {
    /// Knot spins in place; sphere slides gently in and out.
    pub spin: bool,
    /// Both solids bob up and down around their resting height.
    pub bob: bool,
    /// Both solids tumble about two axes.
    pub tumble: bool,
    /// Both solids sweep across the stage.
    pub sweep: bool,
}

/// The shadow-play sketch.
pub struct Cave {
    scene: Scene,
    panel: PanelSchema,
    knot: NodeId,
    sphere: NodeId,
    view: CaveView,
    phases: MotionPhases,
}

impl Cave {
    /// Builds the stage: wall, solids, and the raking light behind them.
    pub fn new() -> Self {
        let mut camera =
            Camera::default_perspective().with_position(Vec3::new(10.0, 2.0, 7.5));
        camera.look_at(Vec3::ZERO);
        let mut scene = Scene::new(camera);

        // The wall the shadows land on, turned to face the solids.
        let mut wall = SceneObject::new(
            GeometryKind::plane(15.5, 7.5),
            Material::standard(LinearRgba::WHITE).with_double_sided(),
        )
        .with_transform(Transform::identity().with_rotation(Vec3::new(0.0, FRAC_PI_2, 0.0)));
        wall.receive_shadow = true;
        scene.add_object(wall);

        let mut knot = SceneObject::new(
            GeometryKind::torus_knot_pq(1.0, 0.05, 41, 20, 10, 7),
            Material::normal(),
        )
        .with_transform(Transform::from_translation(Vec3::new(12.0, 2.5, 0.0)));
        knot.cast_shadow = true;
        let knot = scene.add_object(knot);

        let mut sphere = SceneObject::new(
            GeometryKind::sphere_with_segments(0.5, 32, 16),
            Material::normal(),
        )
        .with_transform(Transform::from_translation(Vec3::new(12.0, 2.5, 0.0)));
        sphere.cast_shadow = true;
        let sphere = scene.add_object(sphere);

        scene.add_light(Light::Directional(DirectionalLight {
            position: Vec3::new(20.0, 4.1, 0.0),
            target: Vec3::ZERO,
            color: LinearRgba::WHITE,
            intensity: 0.5,
            cast_shadow: true,
            shadow_map_size: 2048,
        }));

        let panel = PanelSchema::new(vec![
            Folder::new(
                "View",
                vec![
                    Control::button(PART_ONE, "Part One"),
                    Control::button(PART_TWO, "Part Two"),
                ],
            ),
            Folder::new(
                "Changes",
                vec![
                    Control::button(SPIN, "First Change"),
                    Control::button(BOB, "Second Change"),
                    Control::button(TUMBLE, "Third Change"),
                    Control::button(SWEEP, "Fourth Change"),
                ],
            ),
        ]);

        Self {
            scene,
            panel,
            knot,
            sphere,
            view: CaveView::PartOne,
            phases: MotionPhases::default(),
        }
    }

    /// The active viewpoint.
    pub fn view(&self) -> CaveView {
        self.view
    }

    /// The latched motion phases.
    pub fn phases(&self) -> MotionPhases {
        self.phases
    }
}

impl Default for Cave {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch for Cave {
    fn name(&self) -> &'static str {
        "cave"
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn panel_schema(&self) -> &PanelSchema {
        &self.panel
    }

    fn renderer_settings(&self) -> RendererSettings {
        RendererSettings::default()
            .with_alpha()
            .with_shadows(ShadowFilter::Pcf)
    }

    fn apply(&mut self, update: &ConfigUpdate) -> Result<(), PanelError> {
        self.panel.set_value(&update.control, &update.value)?;

        match &update.control {
            id if *id == PART_ONE => self.view = CaveView::PartOne,
            id if *id == PART_TWO => self.view = CaveView::PartTwo,
            id if *id == SPIN => self.phases.spin = true,
            id if *id == BOB => self.phases.bob = true,
            id if *id == TUMBLE => self.phases.tumble = true,
            id if *id == SWEEP => self.phases.sweep = true,
            _ => {}
        }
        Ok(())
    }

    fn step(&mut self, elapsed_secs: f32, _rng: &mut dyn RngCore) {
        self.scene.camera.position = match self.view {
            CaveView::PartOne => Vec3::new(6.0, 0.0, 0.0),
            CaveView::PartTwo => Vec3::new(25.0, 1.0, 0.0),
        };
        self.scene.camera.look_at(Vec3::ZERO);

        let t = elapsed_secs;
        // Later phases overwrite what earlier ones set on the same axis;
        // the application order is part of the choreography.
        if self.phases.spin {
            if let Some(knot) = self.scene.object_mut(self.knot) {
                knot.transform.rotation_euler.z = t;
            }
            if let Some(sphere) = self.scene.object_mut(self.sphere) {
                sphere.transform.translation.z = t.sin() * 0.5;
            }
        }
        if self.phases.bob {
            let height = t.sin() + 2.5;
            if let Some(knot) = self.scene.object_mut(self.knot) {
                knot.transform.translation.y = height;
            }
            if let Some(sphere) = self.scene.object_mut(self.sphere) {
                sphere.transform.translation.y = height;
            }
        }
        if self.phases.tumble {
            for id in [self.knot, self.sphere] {
                if let Some(object) = self.scene.object_mut(id) {
                    object.transform.rotation_euler.x = t;
                    object.transform.rotation_euler.y = t;
                }
            }
        }
        if self.phases.sweep {
            let depth = t.cos() * 3.0;
            for id in [self.knot, self.sphere] {
                if let Some(object) = self.scene.object_mut(id) {
                    object.transform.translation.z = depth;
                }
            }
        }
    }

    fn resize(&mut self, size: ViewportSize) {
        self.scene.camera.set_aspect_ratio(size.width, size.height);
    }
}
