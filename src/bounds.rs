use crate::vector::Vector3f;
use std::fmt;

/// An axis-aligned box in 3D space.
///
/// The constructor normalizes the two corners component-wise, so the
/// invariant `min.c <= max.c` holds on every axis regardless of the corner
/// order the caller passes in. All predicates treat the box as a closed
/// region: points and boxes on the boundary are inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vector3f,
    pub max: Vector3f,
}

impl BoundingBox {
    /// Creates a box spanning the two corners, in either order.
    pub fn new(a: Vector3f, b: Vector3f) -> BoundingBox {
        BoundingBox {
            min: a.min(&b),
            max: a.max(&b),
        }
    }

    /// The dimensions of the box.
    pub fn size(&self) -> Vector3f {
        self.max - self.min
    }

    /// The geometric center of the box.
    pub fn center(&self) -> Vector3f {
        self.min.lerp(&self.max, 0.5)
    }

    /// Whether the point lies within the closed bounds of this box.
    pub fn contains_point(&self, p: Vector3f) -> bool {
        self.min.x <= p.x && p.x <= self.max.x &&
        self.min.y <= p.y && p.y <= self.max.y &&
        self.min.z <= p.z && p.z <= self.max.z
    }

    /// Whether the other box lies entirely within this box.
    /// Shared boundaries count as contained.
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.min.x && other.max.x <= self.max.x &&
        self.min.y <= other.min.y && other.max.y <= self.max.y &&
        self.min.z <= other.min.z && other.max.z <= self.max.z
    }

    /// Whether this box lies entirely within the other box.
    pub fn is_contained_in(&self, other: &BoundingBox) -> bool {
        other.contains(self)
    }

    /// Whether any portion of the two closed regions overlaps.
    /// Boxes that only touch on a face, edge or corner still intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !(self.max.x < other.min.x || other.max.x < self.min.x ||
          self.max.y < other.min.y || other.max.y < self.min.y ||
          self.max.z < other.min.z || other.max.z < self.min.z)
    }

    /// The eight octants of this box, split at its center.
    ///
    /// Octant order is the low/high sign pattern per axis, x fastest:
    /// lll, hll, lhl, hhl, llh, hlh, lhh, hhh. Insertion and lookup both
    /// iterate children in this order, so a point on a shared face always
    /// resolves to the same (first containing) octant.
    pub fn octants(&self) -> [BoundingBox; 8] {
        let min = self.min;
        let max = self.max;
        let mid = self.center();

        [
            BoundingBox { min: Vector3f::new(min.x, min.y, min.z), max: Vector3f::new(mid.x, mid.y, mid.z) },
            BoundingBox { min: Vector3f::new(mid.x, min.y, min.z), max: Vector3f::new(max.x, mid.y, mid.z) },
            BoundingBox { min: Vector3f::new(min.x, mid.y, min.z), max: Vector3f::new(mid.x, max.y, mid.z) },
            BoundingBox { min: Vector3f::new(mid.x, mid.y, min.z), max: Vector3f::new(max.x, max.y, mid.z) },
            BoundingBox { min: Vector3f::new(min.x, min.y, mid.z), max: Vector3f::new(mid.x, mid.y, max.z) },
            BoundingBox { min: Vector3f::new(mid.x, min.y, mid.z), max: Vector3f::new(max.x, mid.y, max.z) },
            BoundingBox { min: Vector3f::new(min.x, mid.y, mid.z), max: Vector3f::new(mid.x, max.y, max.z) },
            BoundingBox { min: Vector3f::new(mid.x, mid.y, mid.z), max: Vector3f::new(max.x, max.y, max.z) },
        ]
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundingBox{{min: {}, max: {}}}", self.min, self.max)
    }
}
