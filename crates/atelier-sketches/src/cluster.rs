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

//! Turns placement instructions into scene objects.
//!
//! This is the boundary where randomness enters: the text pipeline hands
//! over deterministic [`PlacementInstruction`]s, and the materializer
//! scatters one object per instruction across a square region, jittering
//! position and optionally rotation with a caller-supplied [`Rng`]. Tests
//! pass a seeded generator and get reproducible plantings.

use atelier_core::math::{Vec3, FRAC_PI_2, TAU};
use atelier_scene::{GeometryKind, GroupId, Material, NodeId, Scene, SceneObject, Transform};
use atelier_text::PlacementInstruction;
use rand::Rng;

/// How a cluster of instances is rotated and sized.
///
/// The horizontal jitter width is not part of the style: it travels with
/// the [`TermSpec`](atelier_text::TermSpec) that produced the instructions
/// and reaches [`plant`] as its `spread` argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterStyle {
    /// Added to every instance's normalized height; the sketches sink their
    /// plantings 10 units below the origin.
    pub base_height_offset: f32,
    /// Uniform scale applied to every instance.
    pub scale: f32,
    /// Scale each instance by `normalized_height * 0.05` instead of
    /// [`ClusterStyle::scale`], so higher instances grow larger.
    pub dynamic_scale: bool,
    /// Give each instance a random Euler rotation in `[0, 2π)` per axis.
    pub randomize_rotation: bool,
    /// Force the final x rotation to 90 degrees so ring shapes lie flat.
    /// Applied after randomization, overriding the random x angle.
    pub lay_flat: bool,
}

impl Default for ClusterStyle {
    /// Unit-scale upright instances, sunk 10 units down.
    fn default() -> Self {
        Self {
            base_height_offset: -10.0,
            scale: 1.0,
            dynamic_scale: false,
            randomize_rotation: false,
            lay_flat: false,
        }
    }
}

impl ClusterStyle {
    /// Returns this style with a different uniform scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Returns this style with height-proportional scaling enabled.
    pub fn with_dynamic_scale(mut self) -> Self {
        self.dynamic_scale = true;
        self
    }

    /// Returns this style with per-instance random rotation enabled.
    pub fn with_randomized_rotation(mut self) -> Self {
        self.randomize_rotation = true;
        self
    }

    /// Returns this style with the lay-flat override enabled.
    pub fn with_lay_flat(mut self) -> Self {
        self.lay_flat = true;
        self
    }
}

/// Materializes one scene object per instruction.
///
/// Every object shares the given geometry and material and lands at a
/// random horizontal offset within `±spread/2` on both horizontal axes, at
/// the height its instruction dictates. Callers pass the `spatial_spread`
/// of the `TermSpec` the instructions were expanded from. Returns the
/// handles of the planted objects in instruction order.
pub fn plant<R: Rng + ?Sized>(
    scene: &mut Scene,
    group: Option<GroupId>,
    instructions: &[PlacementInstruction],
    spread: f32,
    style: &ClusterStyle,
    geometry: GeometryKind,
    material: Material,
    rng: &mut R,
) -> Vec<NodeId> {
    let mut planted = Vec::with_capacity(instructions.len());
    for instruction in instructions {
        let x = (rng.random::<f32>() - 0.5) * spread;
        let z = (rng.random::<f32>() - 0.5) * spread;
        let y = instruction.normalized_height + style.base_height_offset;

        let mut rotation = Vec3::ZERO;
        if style.randomize_rotation {
            rotation.x = rng.random::<f32>() * TAU;
            rotation.z = rng.random::<f32>() * TAU;
            rotation.y = rng.random::<f32>() * TAU;
        }
        if style.lay_flat {
            rotation.x = FRAC_PI_2;
        }

        let scale = if style.dynamic_scale {
            instruction.normalized_height * 0.05
        } else {
            style.scale
        };

        let transform = Transform::from_translation(Vec3::new(x, y, z))
            .with_rotation(rotation)
            .with_uniform_scale(scale);

        let mut object = SceneObject::new(geometry, material).with_transform(transform);
        if let Some(group) = group {
            object = object.in_group(group);
        }
        planted.push(scene.add_object(object));
    }
    log::debug!(
        "Planted {} '{}' objects.",
        planted.len(),
        geometry.name()
    );
    planted
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::math::LinearRgba;
    use atelier_text::{expand, tokenize, TermSpec};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_spec() -> TermSpec {
        TermSpec::new("army", 10, 10.0)
    }

    fn sample_instructions() -> Vec<PlacementInstruction> {
        let text = tokenize("army army shadow army");
        expand(&text.occurrences_of("army"), &sample_spec())
    }

    #[test]
    fn test_one_object_per_instruction() {
        let mut scene = Scene::default();
        let mut rng = StdRng::seed_from_u64(7);
        let planted = plant(
            &mut scene,
            None,
            &sample_instructions(),
            sample_spec().spatial_spread,
            &ClusterStyle::default(),
            GeometryKind::cube(0.5),
            Material::standard(LinearRgba::BLACK),
            &mut rng,
        );

        assert_eq!(planted.len(), 30);
        assert_eq!(scene.object_count(), 30);
    }

    #[test]
    fn test_positions_respect_spec_spread_and_height() {
        let mut scene = Scene::default();
        let mut rng = StdRng::seed_from_u64(7);
        let text = tokenize("army army shadow army");
        // A spread narrower than the sketches' usual 10 proves the
        // `TermSpec` value is the one the jitter honors.
        let spec = TermSpec::new("army", 10, 4.0);
        let instructions = expand(&text.occurrences_of("army"), &spec);
        let planted = plant(
            &mut scene,
            None,
            &instructions,
            spec.spatial_spread,
            &ClusterStyle::default(),
            GeometryKind::cube(0.5),
            Material::standard(LinearRgba::BLACK),
            &mut rng,
        );

        for (id, instruction) in planted.iter().zip(&instructions) {
            let translation = scene.object(*id).unwrap().transform.translation;
            assert!(translation.x.abs() <= 2.0);
            assert!(translation.z.abs() <= 2.0);
            assert_eq!(translation.y, instruction.normalized_height - 10.0);
        }
    }

    #[test]
    fn test_seeded_planting_is_reproducible() {
        let instructions = sample_instructions();
        let style = ClusterStyle::default().with_randomized_rotation();

        let mut first = Scene::default();
        let mut second = Scene::default();
        plant(
            &mut first,
            None,
            &instructions,
            sample_spec().spatial_spread,
            &style,
            GeometryKind::cube(0.5),
            Material::standard(LinearRgba::BLACK),
            &mut StdRng::seed_from_u64(42),
        );
        plant(
            &mut second,
            None,
            &instructions,
            sample_spec().spatial_spread,
            &style,
            GeometryKind::cube(0.5),
            Material::standard(LinearRgba::BLACK),
            &mut StdRng::seed_from_u64(42),
        );

        let transforms_of = |scene: &Scene| {
            scene
                .objects()
                .map(|(_, object)| object.transform)
                .collect::<Vec<_>>()
        };
        assert_eq!(transforms_of(&first), transforms_of(&second));
    }

    #[test]
    fn test_random_rotation_stays_in_range() {
        let mut scene = Scene::default();
        let mut rng = StdRng::seed_from_u64(3);
        let style = ClusterStyle::default().with_randomized_rotation();
        let planted = plant(
            &mut scene,
            None,
            &sample_instructions(),
            sample_spec().spatial_spread,
            &style,
            GeometryKind::cube(0.5),
            Material::standard(LinearRgba::BLACK),
            &mut rng,
        );

        for id in planted {
            let rotation = scene.object(id).unwrap().transform.rotation_euler;
            for axis in [rotation.x, rotation.y, rotation.z] {
                assert!((0.0..TAU).contains(&axis));
            }
        }
    }

    #[test]
    fn test_lay_flat_overrides_random_x_rotation() {
        let mut scene = Scene::default();
        let mut rng = StdRng::seed_from_u64(3);
        let style = ClusterStyle::default()
            .with_randomized_rotation()
            .with_lay_flat();
        let planted = plant(
            &mut scene,
            None,
            &sample_instructions(),
            sample_spec().spatial_spread,
            &style,
            GeometryKind::torus(0.4, 0.15, 16, 100),
            Material::standard(LinearRgba::RED),
            &mut rng,
        );

        for id in planted {
            let rotation = scene.object(id).unwrap().transform.rotation_euler;
            assert_eq!(rotation.x, FRAC_PI_2);
        }
    }

    #[test]
    fn test_dynamic_scale_tracks_height() {
        let mut scene = Scene::default();
        let mut rng = StdRng::seed_from_u64(9);
        let instructions = sample_instructions();
        let style = ClusterStyle::default().with_scale(100.0).with_dynamic_scale();
        let planted = plant(
            &mut scene,
            None,
            &instructions,
            sample_spec().spatial_spread,
            &style,
            GeometryKind::torus(0.4, 0.15, 16, 100),
            Material::standard(LinearRgba::RED),
            &mut rng,
        );

        for (id, instruction) in planted.iter().zip(&instructions) {
            let scale = scene.object(*id).unwrap().transform.scale;
            let expected = instruction.normalized_height * 0.05;
            assert_eq!(scale, Vec3::splat(expected));
        }
    }

    #[test]
    fn test_planting_into_a_group() {
        let mut scene = Scene::default();
        let group = scene.add_group("army");
        let mut rng = StdRng::seed_from_u64(1);
        plant(
            &mut scene,
            Some(group),
            &sample_instructions(),
            sample_spec().spatial_spread,
            &ClusterStyle::default(),
            GeometryKind::cube(0.5),
            Material::standard(LinearRgba::BLACK),
            &mut rng,
        );

        scene.set_group_visible(group, false);
        assert_eq!(scene.visible_objects().count(), 0);
        assert_eq!(scene.object_count(), 30);
    }

    #[test]
    fn test_empty_instructions_plant_nothing() {
        let mut scene = Scene::default();
        let mut rng = StdRng::seed_from_u64(1);
        let planted = plant(
            &mut scene,
            None,
            &[],
            sample_spec().spatial_spread,
            &ClusterStyle::default(),
            GeometryKind::cube(0.5),
            Material::standard(LinearRgba::BLACK),
            &mut rng,
        );
        assert!(planted.is_empty());
        assert_eq!(scene.object_count(), 0);
    }
}
