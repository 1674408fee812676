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

//! The retained scene container.

use atelier_core::math::LinearRgba;

use crate::camera::Camera;
use crate::geometry::GeometryKind;
use crate::light::Light;
use crate::material::Material;
use crate::transform::Transform;

/// Opaque handle to an object in the scene.
///
/// Handles stay valid across removals of other objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// Opaque handle to a group in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub u64);

/// A named collection of objects whose visibility toggles together.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Display name, also used by panel toggles.
    pub name: String,
    /// Whether the group's objects should be drawn.
    pub visible: bool,
}

/// One drawable object: a primitive, its material, and where it sits.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// The primitive to draw.
    pub geometry: GeometryKind,
    /// How to shade it.
    pub material: Material,
    /// Where it sits in world space.
    pub transform: Transform,
    /// The group it belongs to, if any.
    pub group: Option<GroupId>,
    /// Whether the object casts shadows.
    pub cast_shadow: bool,
    /// Whether the object receives shadows.
    pub receive_shadow: bool,
}

impl SceneObject {
    /// Creates an ungrouped, shadowless object at the origin.
    pub fn new(geometry: GeometryKind, material: Material) -> Self {
        Self {
            geometry,
            material,
            transform: Transform::identity(),
            group: None,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    /// Returns this object with a different transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Returns this object assigned to a group.
    pub fn in_group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }
}

/// The retained scene: background, camera, lights, groups, and objects.
///
/// The container owns object identity. Handles returned from the `add_*`
/// methods stay stable while other entries come and go, so sketches can
/// keep handles to the objects they animate.
#[derive(Debug, Clone)]
pub struct Scene {
    /// The clear color behind everything, if any.
    pub background: Option<LinearRgba>,
    /// The active viewpoint.
    pub camera: Camera,
    lights: Vec<Light>,
    groups: Vec<(GroupId, Group)>,
    objects: Vec<(NodeId, SceneObject)>,
    next_id: u64,
}

impl Scene {
    /// Creates an empty scene with the given camera.
    pub fn new(camera: Camera) -> Self {
        Self {
            background: None,
            camera,
            lights: Vec::new(),
            groups: Vec::new(),
            objects: Vec::new(),
            next_id: 0,
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // --- Lights ---

    /// Adds a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// The scene's lights.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Mutable access to the scene's lights.
    pub fn lights_mut(&mut self) -> &mut [Light] {
        &mut self.lights
    }

    // --- Groups ---

    /// Creates a new, initially visible group.
    pub fn add_group(&mut self, name: impl Into<String>) -> GroupId {
        let id = GroupId(self.allocate_id());
        let name = name.into();
        log::debug!("Scene group '{name}' created.");
        self.groups.push((
            id,
            Group {
                name,
                visible: true,
            },
        ));
        id
    }

    /// Looks up a group.
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups
            .iter()
            .find(|(group_id, _)| *group_id == id)
            .map(|(_, group)| group)
    }

    /// Shows or hides a group. Returns `false` for unknown handles.
    pub fn set_group_visible(&mut self, id: GroupId, visible: bool) -> bool {
        match self
            .groups
            .iter_mut()
            .find(|(group_id, _)| *group_id == id)
        {
            Some((_, group)) => {
                group.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Removes every object belonging to a group, keeping the group itself.
    ///
    /// Returns the number of objects removed. Re-planting a term layout
    /// clears its group first so stale instances never linger.
    pub fn clear_group(&mut self, id: GroupId) -> usize {
        let before = self.objects.len();
        self.objects.retain(|(_, object)| object.group != Some(id));
        let removed = before - self.objects.len();
        if removed > 0 {
            log::debug!("Cleared {removed} objects from a scene group.");
        }
        removed
    }

    // --- Objects ---

    /// Adds an object and returns its handle.
    pub fn add_object(&mut self, object: SceneObject) -> NodeId {
        let id = NodeId(self.allocate_id());
        self.objects.push((id, object));
        id
    }

    /// Looks up an object.
    pub fn object(&self, id: NodeId) -> Option<&SceneObject> {
        self.objects
            .iter()
            .find(|(node_id, _)| *node_id == id)
            .map(|(_, object)| object)
    }

    /// Mutable lookup of an object; the step functions animate through this.
    pub fn object_mut(&mut self, id: NodeId) -> Option<&mut SceneObject> {
        self.objects
            .iter_mut()
            .find(|(node_id, _)| *node_id == id)
            .map(|(_, object)| object)
    }

    /// Iterates every object with its handle.
    pub fn objects(&self) -> impl Iterator<Item = (NodeId, &SceneObject)> {
        self.objects.iter().map(|(id, object)| (*id, object))
    }

    /// Iterates the objects of one group, mutably.
    pub fn objects_in_group_mut(
        &mut self,
        id: GroupId,
    ) -> impl Iterator<Item = &mut SceneObject> {
        self.objects
            .iter_mut()
            .filter(move |(_, object)| object.group == Some(id))
            .map(|(_, object)| object)
    }

    /// Iterates the objects a renderer should draw.
    ///
    /// Ungrouped objects are always visible; grouped objects follow their
    /// group's visibility flag.
    pub fn visible_objects(&self) -> impl Iterator<Item = (NodeId, &SceneObject)> {
        self.objects
            .iter()
            .filter(|(_, object)| match object.group {
                None => true,
                Some(group) => self.group(group).is_some_and(|g| g.visible),
            })
            .map(|(id, object)| (*id, object))
    }

    /// Total number of objects, visible or not.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

impl Default for Scene {
    /// An empty scene with the default perspective camera.
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeometryKind;
    use crate::material::Material;
    use atelier_core::math::Vec3;

    fn cube_object() -> SceneObject {
        SceneObject::new(GeometryKind::cube(0.5), Material::default())
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::default();
        assert_eq!(scene.object_count(), 0);
        assert!(scene.lights().is_empty());
        assert!(scene.background.is_none());
    }

    #[test]
    fn test_add_and_mutate_object() {
        let mut scene = Scene::default();
        let id = scene.add_object(cube_object());

        assert_eq!(scene.object_count(), 1);
        assert_eq!(scene.object(id).unwrap().transform, Transform::identity());

        scene.object_mut(id).unwrap().transform =
            Transform::from_translation(Vec3::new(0.0, 2.5, 0.0));
        assert_eq!(
            scene.object(id).unwrap().transform.translation,
            Vec3::new(0.0, 2.5, 0.0)
        );
    }

    #[test]
    fn test_handles_survive_removals() {
        let mut scene = Scene::default();
        let group = scene.add_group("doomed");
        let kept = scene.add_object(cube_object());
        let doomed = scene.add_object(cube_object().in_group(group));

        assert_eq!(scene.clear_group(group), 1);
        assert!(scene.object(kept).is_some());
        assert!(scene.object(doomed).is_none());
    }

    #[test]
    fn test_group_visibility_filters_objects() {
        let mut scene = Scene::default();
        let group = scene.add_group("quest");
        scene.add_object(cube_object());
        scene.add_object(cube_object().in_group(group));
        scene.add_object(cube_object().in_group(group));

        assert_eq!(scene.visible_objects().count(), 3);

        assert!(scene.set_group_visible(group, false));
        assert_eq!(scene.visible_objects().count(), 1);
        assert_eq!(scene.object_count(), 3);

        assert!(scene.set_group_visible(group, true));
        assert_eq!(scene.visible_objects().count(), 3);
    }

    #[test]
    fn test_unknown_group_handle() {
        let mut scene = Scene::default();
        let foreign = GroupId(999);
        assert!(scene.group(foreign).is_none());
        assert!(!scene.set_group_visible(foreign, false));
        assert_eq!(scene.clear_group(foreign), 0);
    }

    #[test]
    fn test_clear_group_leaves_group_in_place() {
        let mut scene = Scene::default();
        let group = scene.add_group("replanted");
        scene.add_object(cube_object().in_group(group));

        scene.clear_group(group);
        assert!(scene.group(group).is_some());

        // The group remains usable for the next planting.
        scene.add_object(cube_object().in_group(group));
        assert_eq!(scene.visible_objects().count(), 1);
    }

    #[test]
    fn test_objects_in_group_mut() {
        let mut scene = Scene::default();
        let group = scene.add_group("glowing");
        scene.add_object(cube_object().in_group(group));
        scene.add_object(cube_object());
        scene.add_object(cube_object().in_group(group));

        let mut touched = 0;
        for object in scene.objects_in_group_mut(group) {
            object.cast_shadow = true;
            touched += 1;
        }
        assert_eq!(touched, 2);
        assert_eq!(
            scene
                .objects()
                .filter(|(_, object)| object.cast_shadow)
                .count(),
            2
        );
    }

    #[test]
    fn test_lights() {
        let mut scene = Scene::default();
        scene.add_light(Light::default());
        assert_eq!(scene.lights().len(), 1);

        if let Light::Directional(light) = &mut scene.lights_mut()[0] {
            light.intensity = 0.5;
        }
        match scene.lights()[0] {
            Light::Directional(light) => assert_eq!(light.intensity, 0.5),
            _ => panic!("Expected a directional light"),
        }
    }
}
