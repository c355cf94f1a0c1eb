//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG boolean operations.
//! Based on the csg.js algorithm by Evan Wallace.
//!
//! Each node holds a dividing plane, the polygons coplanar with it, and
//! optional front/back subtrees.
//!
//! ## Stack Safety
//!
//! All traversals use explicit stacks so deep trees do not overflow the
//! limited WASM stack (~1MB). Mutable traversals destructure each node into
//! disjoint field borrows, so no `unsafe` is needed.

use super::plane::Plane;
use super::polygon::{Polygon, Split};

/// A node in the BSP tree.
#[derive(Debug, Default)]
pub struct BspNode {
    plane: Option<Plane>,
    polygons: Vec<Polygon>,
    front: Option<Box<BspNode>>,
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a BSP tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut root = Self::default();
        root.build(polygons);
        root
    }

    /// Inserts polygons into the tree, splitting them down to the leaves.
    ///
    /// The first polygon reaching an empty node provides its plane.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let mut stack: Vec<(&mut BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polygons)) = stack.pop() {
            let Some(first) = polygons.first() else {
                continue;
            };
            let BspNode {
                plane,
                polygons: coplanar,
                front,
                back,
            } = node;
            let plane = *plane.get_or_insert(*first.plane());

            let mut front_polys = Vec::new();
            let mut back_polys = Vec::new();
            for polygon in polygons {
                match polygon.split(&plane) {
                    Split::CoplanarFront(p) | Split::CoplanarBack(p) => coplanar.push(p),
                    Split::Front(p) => front_polys.push(p),
                    Split::Back(p) => back_polys.push(p),
                    Split::Spanning { front, back } => {
                        front_polys.extend(front);
                        back_polys.extend(back);
                    }
                }
            }

            if !front_polys.is_empty() {
                let child = front.get_or_insert_with(Box::default);
                stack.push((&mut **child, front_polys));
            }
            if !back_polys.is_empty() {
                let child = back.get_or_insert_with(Box::default);
                stack.push((&mut **child, back_polys));
            }
        }
    }

    /// Converts solid space to empty space and vice versa.
    pub fn invert(&mut self) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            let BspNode {
                plane,
                polygons,
                front,
                back,
            } = node;

            polygons.iter_mut().for_each(Polygon::flip);
            if let Some(plane) = plane {
                plane.flip();
            }
            std::mem::swap(front, back);

            stack.extend(front.as_deref_mut());
            stack.extend(back.as_deref_mut());
        }
    }

    /// Removes the parts of `polygons` that lie inside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<(&BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polygons)) = stack.pop() {
            let Some(plane) = node.plane else {
                result.extend(polygons);
                continue;
            };

            let mut front_polys = Vec::new();
            let mut back_polys = Vec::new();
            for polygon in polygons {
                match polygon.split(&plane) {
                    Split::CoplanarFront(p) | Split::Front(p) => front_polys.push(p),
                    Split::CoplanarBack(p) | Split::Back(p) => back_polys.push(p),
                    Split::Spanning { front, back } => {
                        front_polys.extend(front);
                        back_polys.extend(back);
                    }
                }
            }

            match &node.front {
                Some(front) => stack.push((&**front, front_polys)),
                None => result.extend(front_polys),
            }
            // Without a back subtree the back side is solid: drop those pieces.
            if let Some(back) = &node.back {
                stack.push((&**back, back_polys));
            }
        }

        result
    }

    /// Removes all polygons in this tree that are inside `other`.
    pub fn clip_to(&mut self, other: &BspNode) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            node.polygons = other.clip_polygons(std::mem::take(&mut node.polygons));
            stack.extend(node.front.as_deref_mut());
            stack.extend(node.back.as_deref_mut());
        }
    }

    /// Collects all polygons from this tree.
    #[cfg(test)]
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());
            stack.extend(node.front.as_deref());
            stack.extend(node.back.as_deref());
        }

        result
    }

    /// Consumes the tree, returning its polygons without cloning.
    pub fn into_polygons(mut self) -> Vec<Polygon> {
        let mut result = std::mem::take(&mut self.polygons);
        let mut stack: Vec<Box<BspNode>> = Vec::new();
        stack.extend(self.front.take());
        stack.extend(self.back.take());

        while let Some(mut node) = stack.pop() {
            result.append(&mut node.polygons);
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }

        result
    }

    /// Returns the depth of this tree.
    #[cfg(test)]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&BspNode, usize)> = vec![(self, 1)];

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(front) = &node.front {
                stack.push((&**front, depth + 1));
            }
            if let Some(back) = &node.back {
                stack.push((&**back, depth + 1));
            }
        }

        max_depth
    }
}

impl Drop for BspNode {
    fn drop(&mut self) {
        // Detach children first so dropping never recurses.
        let mut stack: Vec<Box<BspNode>> = Vec::new();
        stack.extend(self.front.take());
        stack.extend(self.back.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }
    }
}
