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

//! End-to-end tests driving sketches through the bus the way the runner does.

use atelier_core::event::EventBus;
use atelier_sketches::{
    run, ConfigUpdate, ControlId, Garden, GardenStage, Preset, Scatter, Sketch,
};
use atelier_text::tokenize;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SOURCE_TEXT: ControlId = ControlId::from_static("source_text");
const SAVE_TEXT: ControlId = ControlId::from_static("save_text");
const VISUALIZE: ControlId = ControlId::from_static("visualize");
const TURNTABLE: ControlId = ControlId::from_static("turntable");

const TEXT: &str = "Every hero needs a quest. The quest found its hero when \
                    lightning struck, and the hero answered.";

#[test]
fn test_garden_full_workflow_over_the_bus() {
    let mut garden = Garden::new();
    let bus = EventBus::new();
    let mut rng = StdRng::seed_from_u64(21);

    bus.publish(ConfigUpdate::text(SOURCE_TEXT, TEXT));
    bus.publish(ConfigUpdate::press(SAVE_TEXT));
    bus.publish(ConfigUpdate::press(VISUALIZE));
    bus.publish(ConfigUpdate::flag(TURNTABLE, true));

    let applied = run(&mut garden, &bus, 10, &mut rng);
    assert_eq!(applied, 4);
    assert_eq!(garden.stage(), GardenStage::Explore);

    // quest x2, lightning x1, hero x3, at 50 instances per occurrence.
    let text = tokenize(TEXT);
    let expected: usize = ["quest", "lightning", "hero"]
        .iter()
        .map(|term| text.occurrences_of(term).len() * 50)
        .sum();
    assert_eq!(garden.scene().object_count(), expected);

    // The turntable took the camera; it circles at height 10, radius 20.
    let position = garden.scene().camera.position;
    assert_eq!(position.y, 10.0);
    let radius = (position.x * position.x + position.z * position.z).sqrt();
    assert!((radius - 20.0).abs() < 1e-3);
}

#[test]
fn test_garden_heights_survive_the_whole_pipeline() {
    let mut garden = Garden::new();
    let bus = EventBus::new();
    let mut rng = StdRng::seed_from_u64(3);

    bus.publish(ConfigUpdate::text(SOURCE_TEXT, TEXT));
    bus.publish(ConfigUpdate::press(SAVE_TEXT));
    bus.publish(ConfigUpdate::press(VISUALIZE));
    run(&mut garden, &bus, 1, &mut rng);

    // Every planted height must be one of the pipeline's computed heights
    // for its group's term, shifted down by the cluster's base offset.
    let text = tokenize(TEXT);
    for (slot, group) in garden.slots().iter().zip(*garden.groups()) {
        let expected: Vec<f32> = text
            .occurrences_of(&slot.spec.term)
            .iter()
            .map(|occurrence| occurrence.normalized_height - 10.0)
            .collect();
        for (_, object) in garden.scene().objects() {
            if object.group != Some(group) {
                continue;
            }
            let y = object.transform.translation.y;
            assert!(
                expected.iter().any(|height| (height - y).abs() < 1e-5),
                "object height {y} not derived from '{}'",
                slot.spec.term
            );
        }
    }
}

#[test]
fn test_garden_preset_round_trip_replays_the_panel() {
    let mut garden = Garden::new();
    garden
        .apply(&ConfigUpdate::text(SOURCE_TEXT, TEXT))
        .unwrap();
    garden
        .apply(&ConfigUpdate::text(ControlId::from_static("term1"), "sky"))
        .unwrap();
    garden
        .apply(&ConfigUpdate::color(
            ControlId::from_static("term2_color"),
            "#00FF00",
        ))
        .unwrap();

    let preset = Preset::capture(garden.panel_schema());
    let json = preset.to_json().expect("preset serializes");
    let restored = Preset::from_json(&json).expect("preset deserializes");

    let mut fresh = Garden::new();
    for update in restored.updates() {
        fresh.apply(&update).unwrap();
    }
    assert_eq!(Preset::capture(fresh.panel_schema()), preset);
    assert_eq!(fresh.slots()[0].spec.term, "sky");
}

#[test]
fn test_scatter_runs_headless() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut scatter = Scatter::new(&mut rng);
    let bus = EventBus::new();

    let planted = scatter.scene().object_count();
    assert!(planted > 0);

    run(&mut scatter, &bus, 30, &mut rng);
    assert_eq!(scatter.scene().object_count(), planted);
}
