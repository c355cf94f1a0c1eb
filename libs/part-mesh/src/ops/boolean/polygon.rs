//! # Polygon for BSP Operations
//!
//! Convex planar polygon with plane splitting.

use super::plane::{Classification, Plane};
use glam::DVec3;

/// A convex polygon with its supporting plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Vertices in counter-clockwise order seen from the front.
    vertices: Vec<DVec3>,
    plane: Plane,
}

/// Outcome of splitting a polygon by a plane.
#[derive(Debug)]
pub enum Split {
    /// Lies in the plane, facing the same way.
    CoplanarFront(Polygon),
    /// Lies in the plane, facing the opposite way.
    CoplanarBack(Polygon),
    /// Entirely in front.
    Front(Polygon),
    /// Entirely behind.
    Back(Polygon),
    /// Straddles the plane; either piece may collapse below three vertices.
    Spanning {
        front: Option<Polygon>,
        back: Option<Polygon>,
    },
}

impl Polygon {
    /// Creates a polygon, deriving the plane from the first three vertices.
    ///
    /// Returns `None` when fewer than three vertices are given or they are
    /// collinear.
    pub fn from_vertices(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    /// Creates a polygon that inherits a known plane (used for split pieces).
    fn with_plane(vertices: Vec<DVec3>, plane: Plane) -> Option<Self> {
        (vertices.len() >= 3).then_some(Self { vertices, plane })
    }

    /// Returns the polygon vertices.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the supporting plane.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Reverses winding and plane orientation in place.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }

    /// Splits this polygon by `plane`, consuming it.
    pub fn split(self, plane: &Plane) -> Split {
        match plane.classify_points(&self.vertices) {
            Classification::Coplanar => {
                if self.plane.normal().dot(plane.normal()) > 0.0 {
                    Split::CoplanarFront(self)
                } else {
                    Split::CoplanarBack(self)
                }
            }
            Classification::Front => Split::Front(self),
            Classification::Back => Split::Back(self),
            Classification::Spanning => {
                let mut front = Vec::with_capacity(self.vertices.len() + 1);
                let mut back = Vec::with_capacity(self.vertices.len() + 1);
                let count = self.vertices.len();

                for i in 0..count {
                    let vi = self.vertices[i];
                    let vj = self.vertices[(i + 1) % count];
                    let ti = plane.classify_point(vi);
                    let tj = plane.classify_point(vj);

                    if ti != Classification::Back {
                        front.push(vi);
                    }
                    if ti != Classification::Front {
                        back.push(vi);
                    }

                    let crosses = matches!(
                        (ti, tj),
                        (Classification::Front, Classification::Back)
                            | (Classification::Back, Classification::Front)
                    );
                    if crosses {
                        let di = plane.signed_distance(vi);
                        let dj = plane.signed_distance(vj);
                        let point = vi.lerp(vj, di / (di - dj));
                        front.push(point);
                        back.push(point);
                    }
                }

                Split::Spanning {
                    front: Self::with_plane(front, self.plane),
                    back: Self::with_plane(back, self.plane),
                }
            }
        }
    }
}
