//! Quaternion and 3D vector algebra
//!
//! Immutable value types for representing and composing 3D rotations.
//!
//! ## Core Types
//!
//! - [`Quaternion`] - Hamilton quaternion; rotation operator, exp/ln maps,
//!   axis-angle and Euler-angle conversions
//! - [`Vector`] - 3D vector with dot, cross and norm, used for rotation axes
//! - [`EulerAngles`] - roll/pitch/yaw decomposition of a rotation
//! - [`MathError`] - failures of the checked constructors and operations
//!
//! ## Degenerate inputs
//!
//! Operations that divide by a norm (`normalize`, `reciprocal`, `ln`,
//! `rotation_axis`) follow IEEE semantics and return NaN or infinite
//! components for zero input, like the arithmetic operators they are built
//! from. Each has a `try_` counterpart that returns a [`MathError`] instead.
//! `exp`, `scaled_rotation` and `rotation_between` special-case a zero
//! vector part or a zero angle and return a real result or
//! [`Quaternion::IDENTITY`] there.

mod error;
mod euler;
mod quaternion;
mod vector;

pub use error::MathError;
pub use euler::EulerAngles;
pub use quaternion::Quaternion;
pub use vector::Vector;
