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

//! Procedural geometry descriptors.
//!
//! A descriptor carries the construction parameters of a primitive, not its
//! vertices. Tessellation is the rendering collaborator's job; the sketches
//! only decide which primitive to show and how finely to subdivide it.

/// A procedural primitive with its construction parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryKind {
    /// An axis-aligned box.
    Box {
        /// Extent along the x axis.
        width: f32,
        /// Extent along the y axis.
        height: f32,
        /// Extent along the z axis.
        depth: f32,
    },
    /// A UV sphere.
    Sphere {
        /// Radius of the sphere.
        radius: f32,
        /// Number of horizontal segments.
        width_segments: u32,
        /// Number of vertical segments.
        height_segments: u32,
    },
    /// A flat rectangle in the XY plane.
    Plane {
        /// Extent along the x axis.
        width: f32,
        /// Extent along the y axis.
        height: f32,
        /// Subdivisions along the width.
        width_segments: u32,
        /// Subdivisions along the height.
        height_segments: u32,
    },
    /// A ring with a circular cross-section.
    Torus {
        /// Distance from the center of the ring to the center of the tube.
        radius: f32,
        /// Radius of the tube.
        tube: f32,
        /// Segments around the tube cross-section.
        radial_segments: u32,
        /// Segments around the ring.
        tubular_segments: u32,
    },
    /// A (p, q) torus knot.
    TorusKnot {
        /// Radius of the containing torus.
        radius: f32,
        /// Radius of the tube.
        tube: f32,
        /// Segments along the knot path.
        tubular_segments: u32,
        /// Segments around the tube cross-section.
        radial_segments: u32,
        /// Times the knot winds around the axis of rotational symmetry.
        p: u32,
        /// Times the knot winds around the interior circle.
        q: u32,
    },
    /// A regular tetrahedron.
    Tetrahedron {
        /// Radius of the circumscribed sphere.
        radius: f32,
    },
}

impl GeometryKind {
    /// A box with equal extents.
    pub const fn cube(size: f32) -> Self {
        Self::Box {
            width: size,
            height: size,
            depth: size,
        }
    }

    /// A sphere with the customary 32x16 subdivision.
    pub const fn sphere(radius: f32) -> Self {
        Self::sphere_with_segments(radius, 32, 16)
    }

    /// A sphere with explicit subdivision.
    pub const fn sphere_with_segments(
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    ) -> Self {
        Self::Sphere {
            radius,
            width_segments,
            height_segments,
        }
    }

    /// An unsubdivided plane.
    pub const fn plane(width: f32, height: f32) -> Self {
        Self::subdivided_plane(width, height, 1, 1)
    }

    /// A plane with explicit subdivision, for wireframe grids.
    pub const fn subdivided_plane(
        width: f32,
        height: f32,
        width_segments: u32,
        height_segments: u32,
    ) -> Self {
        Self::Plane {
            width,
            height,
            width_segments,
            height_segments,
        }
    }

    /// A torus ring.
    pub const fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Self {
        Self::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
        }
    }

    /// A trefoil torus knot (p = 2, q = 3).
    pub const fn torus_knot(
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
    ) -> Self {
        Self::torus_knot_pq(radius, tube, tubular_segments, radial_segments, 2, 3)
    }

    /// A torus knot with explicit winding numbers.
    pub const fn torus_knot_pq(
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
        p: u32,
        q: u32,
    ) -> Self {
        Self::TorusKnot {
            radius,
            tube,
            tubular_segments,
            radial_segments,
            p,
            q,
        }
    }

    /// A regular tetrahedron.
    pub const fn tetrahedron(radius: f32) -> Self {
        Self::Tetrahedron { radius }
    }

    /// A short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::Sphere { .. } => "sphere",
            Self::Plane { .. } => "plane",
            Self::Torus { .. } => "torus",
            Self::TorusKnot { .. } => "torus knot",
            Self::Tetrahedron { .. } => "tetrahedron",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_equal_extents() {
        let geometry = GeometryKind::cube(0.5);
        assert_eq!(
            geometry,
            GeometryKind::Box {
                width: 0.5,
                height: 0.5,
                depth: 0.5
            }
        );
    }

    #[test]
    fn test_sphere_default_segments() {
        let geometry = GeometryKind::sphere(1.0);
        match geometry {
            GeometryKind::Sphere {
                radius,
                width_segments,
                height_segments,
            } => {
                assert_eq!(radius, 1.0);
                assert_eq!(width_segments, 32);
                assert_eq!(height_segments, 16);
            }
            _ => panic!("Expected a sphere"),
        }
    }

    #[test]
    fn test_torus_knot_defaults_to_trefoil() {
        let geometry = GeometryKind::torus_knot(1.0, 0.2, 300, 20);
        match geometry {
            GeometryKind::TorusKnot { p, q, .. } => {
                assert_eq!(p, 2);
                assert_eq!(q, 3);
            }
            _ => panic!("Expected a torus knot"),
        }
    }

    #[test]
    fn test_plane_defaults_to_single_segment() {
        match GeometryKind::plane(15.5, 7.5) {
            GeometryKind::Plane {
                width_segments,
                height_segments,
                ..
            } => {
                assert_eq!(width_segments, 1);
                assert_eq!(height_segments, 1);
            }
            _ => panic!("Expected a plane"),
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(GeometryKind::cube(1.0).name(), "box");
        assert_eq!(GeometryKind::tetrahedron(1.0).name(), "tetrahedron");
        assert_eq!(GeometryKind::torus(0.4, 0.15, 16, 100).name(), "torus");
    }
}
