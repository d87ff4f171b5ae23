//! 3D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::{MathError, Quaternion};

/// Immutable 3D vector with x, y, z components
///
/// Used as the axis representation for [`Quaternion`] rotations. Equality is
/// approximate: two vectors compare equal when the squared norm of their
/// difference is below [`Quaternion::DELTA`]. For that reason `Vector` does
/// not implement `Eq` or `Hash`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const UNIT_X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const UNIT_Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const UNIT_Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    /// Create a new Vector
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Normalized vector part of a quaternion
    ///
    /// Yields NaN components when the vector part of `q` is zero.
    #[inline]
    pub fn normed(q: Quaternion) -> Self {
        Self::from(q).normalize()
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Components as an array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Norm squared (faster than norm)
    #[inline]
    pub fn norm_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm
    #[inline]
    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Scale to unit length
    ///
    /// A zero vector has no direction; the division propagates NaN. Use
    /// [`Vector::try_normalize`] to reject that case instead.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.norm()
    }

    /// Scale to unit length, failing on a zero vector
    pub fn try_normalize(self) -> Result<Self, MathError> {
        let n = self.norm();
        if n == 0.0 {
            log::debug!("Rejected normalization of zero vector");
            return Err(MathError::DegenerateVector);
        }
        Ok(self / n)
    }
}

impl From<[f64; 3]> for Vector {
    #[inline]
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Quaternion> for Vector {
    /// Vector part of the quaternion; the scalar part is dropped
    #[inline]
    fn from(q: Quaternion) -> Self {
        Self::new(q.x(), q.y(), q.z())
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        (*self - *other).norm_squared() < Quaternion::DELTA
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(2);
        write!(f, "({:.*}/{:.*}/{:.*})", p, self.x, p, self.y, p, self.z)
    }
}

// Operator overloads

impl std::ops::Add for Vector {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::Sub for Vector {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Div<f64> for Vector {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl std::ops::Neg for Vector {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}
