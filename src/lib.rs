//! Quaternion rotations for 3D applications
//!
//! Re-exports the value types from [`hamilton_math`] and adds a layered
//! configuration for comparison tolerance and text rendering.
//!
//! ```
//! use hamilton::{Quaternion, Vector};
//! use std::f64::consts::FRAC_PI_2;
//!
//! // Rotate (0, 1, 0) by -90° about Z
//! let r = Quaternion::from_axis_angle(-FRAC_PI_2, Vector::UNIT_Z);
//! let v = Quaternion::pure(0.0, 1.0, 0.0).rotate(r);
//! assert_eq!(v, Quaternion::pure(1.0, 0.0, 0.0));
//! assert_eq!(v.to_string(), "0.00 + 1.00i + 0.00j + 0.00k");
//! ```

pub mod config;

pub use hamilton_math::{EulerAngles, MathError, Quaternion, Vector};
pub use config::{ConfigError, DisplayConfig, EqualityConfig, MathConfig};
