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

//! A word-frequency scatter over a fixed source text.
//!
//! Four hard-wired search terms are scanned against a built-in paragraph.
//! Every match spawns a column of a hundred small tumbling cubes whose
//! height encodes where in the text the match sits. Everything is planted
//! once at construction; the per-frame step has nothing to animate.

use atelier_core::math::{LinearRgba, Vec3};
use atelier_scene::{
    Camera, DirectionalLight, GeometryKind, GroupId, Light, Material, Scene, ViewportSize,
};
use atelier_text::{layout_terms, tokenize, TermSpec};
use rand::{Rng, RngCore};

use crate::cluster::{plant, ClusterStyle};
use crate::panel::{ConfigUpdate, PanelError, PanelSchema};
use crate::sketch::Sketch;
use crate::violet_backdrop;

/// The paragraph the four terms are scanned against.
pub const SOURCE_TEXT: &str = "Jinwoo stood atop a ruined battlefield, his black cloak billowing in the wind. With a single command, his shadow army\u{2014}thousands of undead warriors\u{2014}rose behind him, their glowing eyes fixed on the enemy ahead. As his strongest shadows, Beru and Igris, knelt before him, Jinwoo smirked. \u{201c}Let\u{2019}s finish this.\u{201d} The ground trembled as his army charged, darkness swallowing everything in their path.";

/// The four fixed term/color pairs, in planting order.
const TERMS: [(&str, &str); 4] = [
    ("jinwoo", "#800080"),
    ("army", "#000000"),
    ("igris", "#FF0000"),
    ("beru", "#0000FF"),
];

/// The word-scatter sketch.
pub struct Scatter {
    scene: Scene,
    panel: PanelSchema,
    groups: Vec<(String, GroupId)>,
}

impl Scatter {
    /// Builds the scene and runs the whole text pipeline once.
    ///
    /// The rng scatters the cube positions and rotations; a seeded
    /// generator makes the planting reproducible.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut camera =
            Camera::default_perspective().with_position(Vec3::new(0.0, 12.0, -20.0));
        camera.look_at(Vec3::ZERO);
        let mut scene = Scene::new(camera);
        scene.background = Some(violet_backdrop());

        scene.add_light(Light::Directional(DirectionalLight {
            color: LinearRgba::from_hex("#404040"),
            intensity: 100.0,
            ..Default::default()
        }));

        let text = tokenize(SOURCE_TEXT);
        let specs: Vec<TermSpec> = TERMS
            .iter()
            .map(|(term, _)| TermSpec::new(*term, 100, 10.0))
            .collect();
        let style = ClusterStyle::default().with_randomized_rotation();

        let mut groups = Vec::with_capacity(TERMS.len());
        for (layout, (term, hex)) in layout_terms(&text, &specs).iter().zip(TERMS) {
            let group = scene.add_group(term);
            plant(
                &mut scene,
                Some(group),
                &layout.instructions,
                layout.spec.spatial_spread,
                &style,
                GeometryKind::cube(0.5),
                Material::standard(LinearRgba::from_hex(hex)),
                rng,
            );
            groups.push((term.to_owned(), group));
        }
        log::info!(
            "Scatter planted {} objects from {} tokens.",
            scene.object_count(),
            text.len()
        );

        Self {
            scene,
            panel: PanelSchema::default(),
            groups,
        }
    }

    /// The per-term groups, in planting order.
    pub fn groups(&self) -> &[(String, GroupId)] {
        &self.groups
    }
}

impl Sketch for Scatter {
    fn name(&self) -> &'static str {
        "scatter"
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

    fn step(&mut self, _elapsed_secs: f32, _rng: &mut dyn RngCore) {
        // The planting is static; the collaborator's orbit camera supplies
        // all the motion this sketch has.
    }

    fn resize(&mut self, size: ViewportSize) {
        self.scene.camera.set_aspect_ratio(size.width, size.height);
    }
}
