//! Euler angle triple for rotation decomposition

use serde::{Serialize, Deserialize};

/// Roll, pitch and yaw in radians
///
/// Roll is about X, pitch about Y, yaw about Z; a rotation built from them
/// applies yaw first and roll last.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl EulerAngles {
    #[inline]
    pub const fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Angles converted to degrees
    pub fn to_degrees(self) -> Self {
        Self::new(self.roll.to_degrees(), self.pitch.to_degrees(), self.yaw.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_to_degrees() {
        let d = EulerAngles::new(PI, -PI / 2.0, 0.0).to_degrees();
        assert!((d.roll - 180.0).abs() < 1e-9);
        assert!((d.pitch + 90.0).abs() < 1e-9);
        assert_eq!(d.yaw, 0.0);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(EulerAngles::default(), EulerAngles::new(0.0, 0.0, 0.0));
    }
}
