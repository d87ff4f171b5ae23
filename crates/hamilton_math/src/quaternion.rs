//! Quaternions for representing and composing 3D rotations
//!
//! A quaternion `w + xi + yj + zk` is treated either as a general
//! hypercomplex number or, when normalized, as a rotation by `2·acos(w)`
//! about the axis `(x, y, z)`. Vectors are embedded as pure quaternions
//! `(0, x, y, z)` and rotated with the sandwich product `r · v · r*`.
//!
//! All values are immutable; every operation returns a new quaternion.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::{EulerAngles, MathError, Vector};

/// Quaternion with scalar part `w` and vector part `(x, y, z)`
///
/// Equality is approximate: `a == b` holds when the squared norm of `a - b`
/// is below [`Quaternion::DELTA`]. This relation is not transitive, so the
/// type implements neither `Eq` nor `Hash` and cannot be used as a key in
/// hash-based containers. Compare with an explicit tolerance through
/// [`Quaternion::approx_eq`] when `DELTA` does not fit.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quaternion {
    w: f64,
    x: f64,
    y: f64,
    z: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Tolerance on the squared norm of a difference used by `==`
    pub const DELTA: f64 = 1e-14;

    /// Additive identity
    pub const ZERO: Self = Self { w: 0.0, x: 0.0, y: 0.0, z: 0.0 };

    /// Multiplicative identity, the no-op rotation
    pub const IDENTITY: Self = Self { w: 1.0, x: 0.0, y: 0.0, z: 0.0 };

    /// Create a quaternion from its four components
    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Pure quaternion `(0, x, y, z)`, the embedding of a 3D vector
    #[inline]
    pub const fn pure(x: f64, y: f64, z: f64) -> Self {
        Self::new(0.0, x, y, z)
    }

    /// Real quaternion `(s, 0, 0, 0)`
    #[inline]
    pub const fn scalar(s: f64) -> Self {
        Self::new(s, 0.0, 0.0, 0.0)
    }

    /// Rotation by `angle` radians about `axis`
    ///
    /// The axis is normalized here, so any non-zero length is accepted.
    /// A zero axis yields NaN components.
    pub fn from_axis_angle(angle: f64, axis: Vector) -> Self {
        let axis = axis.normalize();
        let (sin_h, cos_h) = (angle * 0.5).sin_cos();
        Self::new(cos_h, axis.x() * sin_h, axis.y() * sin_h, axis.z() * sin_h)
    }

    /// Rotation by `angle` radians about the axis `(x, y, z)`
    #[inline]
    pub fn from_axis_angle_xyz(angle: f64, x: f64, y: f64, z: f64) -> Self {
        Self::from_axis_angle(angle, Vector::new(x, y, z))
    }

    /// Rotation by `angle` radians about the vector part of `axis`
    #[inline]
    pub fn from_quaternion_axis(angle: f64, axis: Quaternion) -> Self {
        Self::from_axis_angle(angle, Vector::from(axis))
    }

    /// Build from 3 components (pure quaternion) or 4 components `(w, x, y, z)`
    pub fn from_slice(components: &[f64]) -> Result<Self, MathError> {
        match components {
            &[x, y, z] => Ok(Self::pure(x, y, z)),
            &[w, x, y, z] => Ok(Self::new(w, x, y, z)),
            _ => Err(MathError::InvalidLength { len: components.len() }),
        }
    }

    /// Rotation from roll (X), pitch (Y) and yaw (Z), applied in ZYX order
    pub fn from_euler_angles(angles: EulerAngles) -> Self {
        let (sr, cr) = (angles.roll * 0.5).sin_cos();
        let (sp, cp) = (angles.pitch * 0.5).sin_cos();
        let (sy, cy) = (angles.yaw * 0.5).sin_cos();

        Self::new(
            cr * cp * cy + sr * sp * sy,
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
        )
    }

    /// The rotation that turns the direction of `from` into the direction of `to`
    ///
    /// Both arguments are read as vectors (their scalar parts are ignored by
    /// the cross product, but included in the dot product, so pass pure
    /// quaternions). Identical directions give [`Quaternion::IDENTITY`].
    /// Opposite directions have no unique axis; any axis perpendicular to
    /// `from` is used.
    pub fn rotation_between(from: Quaternion, to: Quaternion) -> Self {
        let cos_angle = (from.dot(to).w / (from.norm() * to.norm())).clamp(-1.0, 1.0);
        let angle = cos_angle.acos();
        if angle == 0.0 {
            log::trace!("rotation_between: parallel inputs, returning identity");
            return Self::IDENTITY;
        }

        let mut axis = from.cross(to).vector();
        if axis.norm_squared() == 0.0 {
            let v = Vector::from(from);
            let helper = if v.x().abs() < 0.9 * v.norm() { Vector::UNIT_X } else { Vector::UNIT_Y };
            axis = v.cross(helper);
        }
        Self::from_axis_angle(angle, axis)
    }

    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
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

    /// Components as `[w, x, y, z]`
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Conjugate: `(w, -x, -y, -z)`
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Squared norm: `w² + x² + y² + z²`
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Scale to unit norm; NaN for [`Quaternion::ZERO`]
    #[inline]
    pub fn normalize(&self) -> Self {
        *self / self.norm()
    }

    /// Scale to unit norm, failing for [`Quaternion::ZERO`]
    pub fn try_normalize(&self) -> Result<Self, MathError> {
        let n = self.norm();
        if n == 0.0 {
            log::debug!("Rejected normalization of zero quaternion");
            return Err(MathError::DegenerateQuaternion);
        }
        Ok(*self / n)
    }

    /// Multiplicative inverse: `conjugate / norm²`; infinite/NaN for zero
    #[inline]
    pub fn reciprocal(&self) -> Self {
        self.conjugate() / self.norm_squared()
    }

    /// Multiplicative inverse, failing for [`Quaternion::ZERO`]
    pub fn try_reciprocal(&self) -> Result<Self, MathError> {
        let n = self.norm_squared();
        if n == 0.0 {
            log::debug!("Rejected reciprocal of zero quaternion");
            return Err(MathError::DegenerateQuaternion);
        }
        Ok(self.conjugate() / n)
    }

    /// Apply the rotation `r` (assumed normalized) to this pure quaternion: `r · self · r*`
    #[inline]
    pub fn rotate(&self, r: Quaternion) -> Self {
        r * *self * r.conjugate()
    }

    /// Undo the rotation `r`: `r* · self · r`
    #[inline]
    pub fn rotate_back(&self, r: Quaternion) -> Self {
        r.conjugate() * *self * r
    }

    /// Rotate by `angle` radians about `axis`
    #[inline]
    pub fn rotate_by(&self, angle: f64, axis: Vector) -> Self {
        self.rotate(Self::from_axis_angle(angle, axis))
    }

    /// Rotate by `angle` radians about the axis `(x, y, z)`
    #[inline]
    pub fn rotate_by_xyz(&self, angle: f64, x: f64, y: f64, z: f64) -> Self {
        self.rotate(Self::from_axis_angle_xyz(angle, x, y, z))
    }

    /// Apply this rotation to a vector
    #[inline]
    pub fn rotate_vector(&self, v: Vector) -> Vector {
        Quaternion::from(v).rotate(*self).vector()
    }

    /// Exponential map: `e^w · (cos‖v‖ + v/‖v‖ · sin‖v‖)`
    ///
    /// For a zero vector part the direction term vanishes and the result is
    /// the real number `e^w`.
    pub fn exp(&self) -> Self {
        let ew = self.w.exp();
        let n = self.vector().norm();
        if n == 0.0 {
            log::trace!("exp: zero vector part, returning real result");
            return Self::scalar(ew);
        }

        let (sin_n, cos_n) = n.sin_cos();
        let k = ew * sin_n / n;
        Self::new(ew * cos_n, self.x * k, self.y * k, self.z * k)
    }

    /// Logarithm: `ln‖q‖ + v/‖v‖ · acos(w/‖q‖)`
    ///
    /// The direction `v/‖v‖` is undefined when the vector part is zero and
    /// the vector components come out NaN. See [`Quaternion::try_ln`].
    pub fn ln(&self) -> Self {
        let n = self.norm();
        let k = self.cos_half_angle().acos() / self.vector().norm();
        Self::new(n.ln(), self.x * k, self.y * k, self.z * k)
    }

    /// Logarithm, failing when the result would be undefined
    pub fn try_ln(&self) -> Result<Self, MathError> {
        if self.norm_squared() == 0.0 {
            log::debug!("Rejected logarithm of zero quaternion");
            return Err(MathError::DegenerateQuaternion);
        }
        if self.vector().norm_squared() == 0.0 {
            log::debug!("Rejected logarithm of real quaternion {}", self);
            return Err(MathError::DegenerateVector);
        }
        Ok(self.ln())
    }

    /// Four-component dot product, returned as the real quaternion `(a·b, 0, 0, 0)`
    #[inline]
    pub fn dot(&self, other: Quaternion) -> Self {
        Self::scalar(
            self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z,
        )
    }

    /// Cross product of the vector parts, returned as a pure quaternion
    #[inline]
    pub fn cross(&self, other: Quaternion) -> Self {
        Self::from(self.vector().cross(other.vector()))
    }

    /// Real part `(w, 0, 0, 0)`
    #[inline]
    pub fn re(&self) -> Self {
        Self::scalar(self.w)
    }

    /// Imaginary part `(0, x, y, z)`
    #[inline]
    pub fn im(&self) -> Self {
        Self::pure(self.x, self.y, self.z)
    }

    /// Imaginary part as a [`Vector`]
    #[inline]
    pub fn vector(&self) -> Vector {
        Vector::from(*self)
    }

    /// `w / ‖q‖` clamped into the domain of `acos`
    #[inline]
    fn cos_half_angle(&self) -> f64 {
        (self.w / self.norm()).clamp(-1.0, 1.0)
    }

    /// Half the rotation angle: `acos(w / ‖q‖)`
    ///
    /// Dividing by the norm lets unnormalized rotations through.
    #[inline]
    pub fn half_angle(&self) -> f64 {
        self.cos_half_angle().acos()
    }

    /// Rotation angle in radians: `2·acos(w / ‖q‖)`
    #[inline]
    pub fn rotation_angle(&self) -> f64 {
        2.0 * self.half_angle()
    }

    /// Unit rotation axis; NaN when the vector part is zero
    #[inline]
    pub fn rotation_axis(&self) -> Vector {
        self.vector().normalize()
    }

    /// Unit rotation axis, failing when the vector part is zero
    pub fn try_rotation_axis(&self) -> Result<Vector, MathError> {
        self.vector().try_normalize()
    }

    /// Rotation about the same axis with the angle multiplied by `scale`
    ///
    /// A zero vector part has no axis; such a quaternion is read as the
    /// identity rotation and the result is [`Quaternion::IDENTITY`].
    pub fn scaled_rotation(&self, scale: f64) -> Self {
        let n = self.vector().norm();
        if n == 0.0 {
            log::trace!("scaled_rotation: no rotation axis, returning identity");
            return Self::IDENTITY;
        }

        let h = self.half_angle() * scale;
        let (sin_h, cos_h) = h.sin_cos();
        let k = sin_h / n;
        Self::new(cos_h, self.x * k, self.y * k, self.z * k)
    }

    /// Roll (X), pitch (Y) and yaw (Z) of a unit rotation
    ///
    /// Near pitch = ±90° (gimbal lock) roll and yaw are not separable and
    /// the split between them is arbitrary.
    pub fn euler_angles(&self) -> EulerAngles {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);

        let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
        let pitch = (2.0 * (w * y - z * x)).clamp(-1.0, 1.0).asin();
        let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));

        EulerAngles::new(roll, pitch, yaw)
    }

    /// Convert a unit rotation to a 3x3 rotation matrix (column-major)
    pub fn to_rotation_matrix(&self) -> [[f64; 3]; 3] {
        [
            self.rotate_vector(Vector::UNIT_X).to_array(),
            self.rotate_vector(Vector::UNIT_Y).to_array(),
            self.rotate_vector(Vector::UNIT_Z).to_array(),
        ]
    }

    /// Compare with an explicit tolerance on the squared difference norm
    #[inline]
    pub fn approx_eq(&self, other: &Self, delta: f64) -> bool {
        (*self - *other).norm_squared() < delta
    }
}

impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Self::DELTA)
    }
}

impl From<[f64; 4]> for Quaternion {
    #[inline]
    fn from(q: [f64; 4]) -> Self {
        Self::new(q[0], q[1], q[2], q[3])
    }
}

impl From<[f64; 3]> for Quaternion {
    #[inline]
    fn from(v: [f64; 3]) -> Self {
        Self::pure(v[0], v[1], v[2])
    }
}

impl TryFrom<&[f64]> for Quaternion {
    type Error = MathError;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(components)
    }
}

impl From<Vector> for Quaternion {
    #[inline]
    fn from(v: Vector) -> Self {
        Self::pure(v.x(), v.y(), v.z())
    }
}

impl From<f64> for Quaternion {
    #[inline]
    fn from(s: f64) -> Self {
        Self::scalar(s)
    }
}

impl fmt::Display for Quaternion {
    /// Renders `w ± xi ± yj ± zk`, two decimals unless a precision is given
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(2);
        write!(f, "{:.*}", p, self.w)?;
        for (value, unit) in [(self.x, 'i'), (self.y, 'j'), (self.z, 'k')] {
            let sign = if value < 0.0 { '-' } else { '+' };
            write!(f, " {} {:.*}{}", sign, p, value.abs(), unit)?;
        }
        Ok(())
    }
}

// Operator overloads

impl std::ops::Add for Quaternion {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.w + other.w,
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }
}

impl std::ops::Sub for Quaternion {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.w - other.w,
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

/// Hamilton product; `a * b` applies `b` first when both are rotations
impl std::ops::Mul for Quaternion {
    type Output = Self;
    fn mul(self, b: Self) -> Self {
        let a = self;
        Self::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
    }
}

impl std::ops::Mul<f64> for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(
            self.w * scalar,
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
        )
    }
}

/// Right division: `a / b = a * b⁻¹`
impl std::ops::Div for Quaternion {
    type Output = Self;
    #[inline]
    fn div(self, other: Self) -> Self {
        self * other.reciprocal()
    }
}

impl std::ops::Div<f64> for Quaternion {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self::new(
            self.w / scalar,
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
        )
    }
}
