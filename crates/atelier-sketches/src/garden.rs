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

//! The interactive word garden.
//!
//! The user pastes a source text, names up to three search terms, and
//! grows a garden: each term's matches become a cluster of decorative
//! shapes whose height encodes the match position. The workflow is staged:
//! first the text folder, then term configuration, then a camera folder
//! with a turntable toggle. One term's cluster glows and flickers.

use atelier_core::math::{LinearRgba, Vec3};
use atelier_scene::{
    Camera, DirectionalLight, EmissiveGlow, GeometryKind, GroupId, Light, Material, Scene,
    ViewportSize,
};
use atelier_text::{expand, tokenize, TermSpec, TokenizedText};
use rand::{Rng, RngCore};

use crate::cluster::{plant, ClusterStyle};
use crate::panel::{
    ConfigUpdate, Control, ControlId, ControlValue, Folder, PanelError, PanelSchema,
};
use crate::sketch::Sketch;
use crate::violet_backdrop;

const SOURCE_TEXT: ControlId = ControlId::from_static("source_text");
const SAVE_TEXT: ControlId = ControlId::from_static("save_text");
const VISUALIZE: ControlId = ControlId::from_static("visualize");
const TURNTABLE: ControlId = ControlId::from_static("turntable");

const TERM_IDS: [ControlId; 3] = [
    ControlId::from_static("term1"),
    ControlId::from_static("term2"),
    ControlId::from_static("term3"),
];
const VISIBLE_IDS: [ControlId; 3] = [
    ControlId::from_static("term1_visible"),
    ControlId::from_static("term2_visible"),
    ControlId::from_static("term3_visible"),
];
const COLOR_IDS: [ControlId; 3] = [
    ControlId::from_static("term1_color"),
    ControlId::from_static("term2_color"),
    ControlId::from_static("term3_color"),
];

const TEXT_FOLDER: &str = "Source Text";
const TERMS_FOLDER: &str = "Search Terms";
const VISUALIZE_FOLDER: &str = "Visualize";
const CAMERA_FOLDER: &str = "Camera";

/// Where the staged workflow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GardenStage {
    /// Waiting for a source text.
    ComposeText,
    /// Text saved; terms and colors being configured.
    ConfigureTerms,
    /// Garden planted; camera controls revealed.
    Explore,
}

/// Who moves the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraRig {
    /// The rendering collaborator's orbit controls own the camera.
    Orbit,
    /// The sketch circles the camera around the garden.
    Turntable,
}

/// One configurable search term with its look.
#[derive(Debug, Clone, PartialEq)]
pub struct TermSlot {
    /// The layout configuration handed to the text pipeline.
    pub spec: TermSpec,
    /// Base color of the planted shapes.
    pub color: LinearRgba,
    /// The shape planted for each instance.
    pub geometry: GeometryKind,
    /// Glow the cluster and flicker it per frame.
    pub emissive: bool,
    /// How the cluster's instances are rotated and scaled; the scatter
    /// width comes from `spec.spatial_spread`.
    pub style: ClusterStyle,
}

impl TermSlot {
    fn material(&self) -> Material {
        let color = self.color;
        if self.emissive {
            Material::standard(color)
                .with_emissive(EmissiveGlow {
                    color,
                    intensity: 100.0,
                })
                .with_opacity(0.8)
        } else {
            Material::standard(color)
        }
    }
}

/// The stock slots: red rings, flickering yellow knots, blue spheres.
fn default_slots() -> [TermSlot; 3] {
    [
        TermSlot {
            spec: TermSpec::new("quest", 50, 5.0),
            color: LinearRgba::from_hex("#D72638"),
            geometry: GeometryKind::torus(0.4, 0.15, 16, 100),
            emissive: false,
            style: ClusterStyle::default()
                .with_scale(100.0)
                .with_dynamic_scale()
                .with_lay_flat(),
        },
        TermSlot {
            spec: TermSpec::new("lightning", 50, 10.0),
            color: LinearRgba::from_hex("#FFFF33"),
            geometry: GeometryKind::torus_knot_pq(0.5, 0.1, 8, 20, 1, 20),
            emissive: true,
            style: ClusterStyle::default()
                .with_scale(0.5)
                .with_randomized_rotation()
                .with_lay_flat(),
        },
        TermSlot {
            spec: TermSpec::new("hero", 50, 10.0),
            color: LinearRgba::from_hex("#2B65EC"),
            geometry: GeometryKind::sphere_with_segments(0.25, 16, 16),
            emissive: false,
            style: ClusterStyle::default()
                .with_scale(1.0)
                .with_randomized_rotation()
                .with_lay_flat(),
        },
    ]
}

/// The interactive word-garden sketch.
pub struct Garden {
    scene: Scene,
    panel: PanelSchema,
    slots: [TermSlot; 3],
    groups: [GroupId; 3],
    source_text: String,
    tokenized: Option<TokenizedText>,
    stage: GardenStage,
    rig: CameraRig,
    needs_replant: bool,
}

impl Garden {
    /// Builds the empty garden, waiting for a source text.
    pub fn new() -> Self {
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

        let slots = default_slots();
        let groups = [
            scene.add_group("term1"),
            scene.add_group("term2"),
            scene.add_group("term3"),
        ];

        let mut term_controls = Vec::new();
        for (index, slot) in slots.iter().enumerate() {
            let ordinal = index + 1;
            term_controls.push(Control::text_field(
                TERM_IDS[index].clone(),
                format!("Term {ordinal}"),
                slot.spec.term.clone(),
            ));
            term_controls.push(Control::checkbox(
                VISIBLE_IDS[index].clone(),
                format!("Term {ordinal} Visibility"),
                true,
            ));
            term_controls.push(Control::color_picker(
                COLOR_IDS[index].clone(),
                format!("Term {ordinal} Color"),
                slot.color.to_hex(),
            ));
        }

        let panel = PanelSchema::new(vec![
            Folder::new(
                TEXT_FOLDER,
                vec![
                    Control::text_field(SOURCE_TEXT, "Source Text", ""),
                    Control::button(SAVE_TEXT, "Save"),
                ],
            ),
            Folder::new(TERMS_FOLDER, term_controls).hidden(),
            Folder::new(
                VISUALIZE_FOLDER,
                vec![Control::button(VISUALIZE, "Visualize")],
            )
            .hidden(),
            Folder::new(
                CAMERA_FOLDER,
                vec![Control::checkbox(TURNTABLE, "Turntable", false)],
            )
            .hidden(),
        ]);

        Self {
            scene,
            panel,
            slots,
            groups,
            source_text: String::new(),
            tokenized: None,
            stage: GardenStage::ComposeText,
            rig: CameraRig::Orbit,
            needs_replant: false,
        }
    }

    /// The current workflow stage.
    pub fn stage(&self) -> GardenStage {
        self.stage
    }

    /// The current camera rig.
    pub fn rig(&self) -> CameraRig {
        self.rig
    }

    /// The term slots, for inspection.
    pub fn slots(&self) -> &[TermSlot; 3] {
        &self.slots
    }

    /// The per-slot scene groups.
    pub fn groups(&self) -> &[GroupId; 3] {
        &self.groups
    }

    fn save_source_text(&mut self) {
        let text = tokenize(&self.source_text);
        log::info!("Garden tokenized the source text into {} tokens.", text.len());
        self.tokenized = Some(text);
        self.stage = GardenStage::ConfigureTerms;
        self.panel.set_folder_visible(TEXT_FOLDER, false);
        self.panel.set_folder_visible(TERMS_FOLDER, true);
        self.panel.set_folder_visible(VISUALIZE_FOLDER, true);
    }

    fn request_visualize(&mut self) {
        if self.tokenized.is_none() {
            log::warn!("Garden cannot visualize before a source text is saved.");
            return;
        }
        // Planting needs randomness, which only the step has; latch the
        // request and let the next frame do the work.
        self.needs_replant = true;
        self.stage = GardenStage::Explore;
        self.panel.set_folder_visible(VISUALIZE_FOLDER, false);
        self.panel.set_folder_visible(CAMERA_FOLDER, true);
    }

    fn replant<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let Some(text) = self.tokenized.clone() else {
            return;
        };
        for (slot, group) in self.slots.clone().iter().zip(self.groups) {
            self.scene.clear_group(group);
            let occurrences =
                text.occurrences_of_scaled(&slot.spec.term, slot.spec.height_scale);
            let instructions = expand(&occurrences, &slot.spec);
            plant(
                &mut self.scene,
                Some(group),
                &instructions,
                slot.spec.spatial_spread,
                &slot.style,
                slot.geometry,
                slot.material(),
                rng,
            );
        }
        log::info!("Garden planted {} objects.", self.scene.object_count());
    }

    fn slot_index(ids: &[ControlId; 3], id: &ControlId) -> Option<usize> {
        ids.iter().position(|candidate| candidate == id)
    }
}

impl Default for Garden {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch for Garden {
    fn name(&self) -> &'static str {
        "garden"
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn panel_schema(&self) -> &PanelSchema {
        &self.panel
    }

    fn apply(&mut self, update: &ConfigUpdate) -> Result<(), PanelError> {
        self.panel.set_value(&update.control, &update.value)?;

        let id = &update.control;
        if *id == SOURCE_TEXT {
            if let ControlValue::Text(text) = &update.value {
                self.source_text = text.clone();
            }
        } else if *id == SAVE_TEXT {
            self.save_source_text();
        } else if *id == VISUALIZE {
            self.request_visualize();
        } else if *id == TURNTABLE {
            if let ControlValue::Flag(enabled) = update.value {
                self.rig = if enabled {
                    CameraRig::Turntable
                } else {
                    CameraRig::Orbit
                };
            }
        } else if let Some(index) = Self::slot_index(&TERM_IDS, id) {
            if let ControlValue::Text(term) = &update.value {
                self.slots[index].spec.term = term.clone();
            }
        } else if let Some(index) = Self::slot_index(&VISIBLE_IDS, id) {
            if let ControlValue::Flag(visible) = update.value {
                self.scene.set_group_visible(self.groups[index], visible);
            }
        } else if let Some(index) = Self::slot_index(&COLOR_IDS, id) {
            if let ControlValue::Color(hex) = &update.value {
                let color = LinearRgba::from_hex(hex);
                self.slots[index].color = color;
                for object in self.scene.objects_in_group_mut(self.groups[index]) {
                    object.material.set_color(color);
                }
            }
        }
        Ok(())
    }

    fn step(&mut self, elapsed_secs: f32, rng: &mut dyn RngCore) {
        if self.needs_replant {
            self.needs_replant = false;
            self.replant(rng);
        }

        if self.rig == CameraRig::Turntable {
            let angle = elapsed_secs * 0.1;
            self.scene.camera.position =
                Vec3::new(angle.sin() * 20.0, 10.0, angle.cos() * 20.0);
            self.scene.camera.look_at(Vec3::ZERO);
        }

        // Flicker the glowing cluster.
        for (slot, group) in self.slots.clone().iter().zip(self.groups) {
            if !slot.emissive {
                continue;
            }
            for object in self.scene.objects_in_group_mut(group) {
                object
                    .material
                    .set_emissive_intensity(0.5 + rng.random::<f32>());
            }
        }
    }

    fn resize(&mut self, size: ViewportSize) {
        self.scene.camera.set_aspect_ratio(size.width, size.height);
    }
}
