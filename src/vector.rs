use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A point (or displacement) in 3D space.
///
/// `Vector3f` is a plain value type: equality is derived and therefore
/// component-wise exact. Two points coincide in the octree only when all
/// three coordinates are bit-identical; there is no epsilon tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector3f {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3f {
    pub fn new(x: f64, y: f64, z: f64) -> Vector3f {
        Vector3f { x, y, z }
    }

    /// Component-wise minimum of two vectors.
    pub fn min(&self, other: &Vector3f) -> Vector3f {
        Vector3f {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
        }
    }

    /// Component-wise maximum of two vectors.
    pub fn max(&self, other: &Vector3f) -> Vector3f {
        Vector3f {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            z: self.z.max(other.z),
        }
    }

    /// Linear interpolation between `self` (f = 0) and `other` (f = 1).
    pub fn lerp(&self, other: &Vector3f, f: f64) -> Vector3f {
        Vector3f {
            x: (other.x - self.x) * f + self.x,
            y: (other.y - self.y) * f + self.y,
            z: (other.z - self.z) * f + self.z,
        }
    }
}

impl Add for Vector3f {
    type Output = Vector3f;

    fn add(self, other: Vector3f) -> Vector3f {
        Vector3f::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3f {
    type Output = Vector3f;

    fn sub(self, other: Vector3f) -> Vector3f {
        Vector3f::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vector3f {
    type Output = Vector3f;

    fn mul(self, f: f64) -> Vector3f {
        Vector3f::new(self.x * f, self.y * f, self.z * f)
    }
}

impl fmt::Display for Vector3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
