//! # Plane for BSP Operations
//!
//! Oriented plane with point classification.

use config::constants::BSP_EPSILON;
use glam::DVec3;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classification of a point or polygon relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Within `BSP_EPSILON` of the plane.
    Coplanar,
    /// On the side the normal points to.
    Front,
    /// On the opposite side.
    Back,
    /// Polygon has vertices on both sides.
    Spanning,
}

impl Classification {
    /// Combines per-vertex classifications into a polygon classification.
    fn merge(self, other: Classification) -> Classification {
        match (self, other) {
            (Classification::Coplanar, c) | (c, Classification::Coplanar) => c,
            (a, b) if a == b => a,
            _ => Classification::Spanning,
        }
    }
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane `normal · p = w` with unit-length normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: DVec3,
    w: f64,
}

impl Plane {
    /// Creates a plane from normal and distance.
    #[cfg(test)]
    pub fn new(normal: DVec3, w: f64) -> Self {
        Self { normal, w }
    }

    /// Creates a plane through three counter-clockwise points.
    ///
    /// Returns `None` for collinear or coincident points.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let normal = (b - a).cross(c - a).try_normalize()?;
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// Returns the unit normal.
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Flips the plane in place (reverses the normal).
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Signed distance from point to plane, positive in front.
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Classifies a point relative to this plane.
    pub fn classify_point(&self, point: DVec3) -> Classification {
        let dist = self.signed_distance(point);
        if dist > BSP_EPSILON {
            Classification::Front
        } else if dist < -BSP_EPSILON {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }

    /// Classifies a set of points as a whole.
    pub fn classify_points(&self, points: &[DVec3]) -> Classification {
        points
            .iter()
            .map(|p| self.classify_point(*p))
            .fold(Classification::Coplanar, Classification::merge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_from_points() {
        let plane = Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();
        assert!((plane.normal() - DVec3::Z).length() < BSP_EPSILON);
    }

    #[test]
    fn test_plane_from_collinear_points() {
        assert!(Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::X * 2.0).is_none());
    }

    #[test]
    fn test_plane_classify_point() {
        let plane = Plane::new(DVec3::Z, 0.0);
        assert_eq!(plane.classify_point(DVec3::Z), Classification::Front);
        assert_eq!(plane.classify_point(-DVec3::Z), Classification::Back);
        assert_eq!(
            plane.classify_point(DVec3::new(1.0, 1.0, 0.0)),
            Classification::Coplanar
        );
    }

    #[test]
    fn test_plane_classify_points() {
        let plane = Plane::new(DVec3::Z, 0.0);
        assert_eq!(
            plane.classify_points(&[DVec3::ZERO, DVec3::Z]),
            Classification::Front
        );
        assert_eq!(
            plane.classify_points(&[-DVec3::Z, DVec3::Z]),
            Classification::Spanning
        );
        assert_eq!(
            plane.classify_points(&[DVec3::ZERO, DVec3::X]),
            Classification::Coplanar
        );
    }

    #[test]
    fn test_plane_flip() {
        let mut plane = Plane::new(DVec3::Z, 5.0);
        plane.flip();
        assert_eq!(plane.normal(), -DVec3::Z);
        assert_eq!(plane.signed_distance(DVec3::new(0.0, 0.0, 4.0)), 1.0);
    }
}
