//! Algebraic and rotation properties of the public quaternion API
//!
//! Each property is checked over a fixed set of representative values
//! rather than random draws so failures are reproducible.

use hamilton::{EulerAngles, MathError, Quaternion, Vector};
use std::f64::consts::PI;

fn samples() -> Vec<Quaternion> {
    vec![
        Quaternion::new(1.0, 2.0, 3.0, 4.0),
        Quaternion::new(15.0, -4.0, -26.0, 0.0),
        Quaternion::new(37.2, -12.5, 88.1, 4.9),
        Quaternion::new(-0.3, 0.01, 7.5, -2.25),
        Quaternion::new(0.0, 0.0, 0.0, 1.0),
        Quaternion::scalar(-6.0),
    ]
}

fn rotations() -> Vec<Quaternion> {
    vec![
        Quaternion::IDENTITY,
        Quaternion::from_axis_angle(PI / 2.0, Vector::UNIT_Z),
        Quaternion::from_axis_angle(1.234, Vector::new(0.3, -1.0, 2.0)),
        Quaternion::from_axis_angle(PI, Vector::new(1.0, 1.0, 1.0)),
        Quaternion::from_euler_angles(EulerAngles::new(0.4, -1.1, 2.9)),
    ]
}

#[test]
fn test_addition_commutes() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a + b, b + a);
        }
    }
}

#[test]
fn test_additive_identity() {
    for a in samples() {
        assert_eq!(a + Quaternion::ZERO, a);
        assert_eq!(a - a, Quaternion::ZERO);
    }
}

#[test]
fn test_multiplicative_inverse() {
    for a in samples() {
        assert_eq!(a * a.reciprocal(), Quaternion::IDENTITY, "failed for {}", a);
    }
}

#[test]
fn test_division_inverts_multiplication() {
    for a in samples() {
        for b in samples() {
            assert_eq!((a * b) / b, a, "failed for {} / {}", a, b);
        }
    }
}

#[test]
fn test_normalize_has_unit_norm() {
    for a in samples() {
        assert!((a.normalize().norm() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_rotation_round_trip() {
    let v = Quaternion::pure(4.0, -5.0, 6.5);
    for r in rotations() {
        assert_eq!(v.rotate(r).rotate_back(r), v);
        assert!((v.rotate(r).norm() - v.norm()).abs() < 1e-12);
    }
}

#[test]
fn test_exp_ln_round_trip() {
    for a in samples() {
        if a.im().norm() == 0.0 {
            continue;
        }
        assert_eq!(a.ln().exp(), a, "exp(ln(q)) failed for {}", a);

        let small = a.normalize() * 2.5;
        assert!(small.im().norm() < PI);
        assert_eq!(small.exp().ln(), small, "ln(exp(q)) failed for {}", small);
    }
}

#[test]
fn test_scaled_rotation() {
    let axis = Vector::new(2.0, 0.0, -1.0);
    let q = Quaternion::from_axis_angle(PI, axis);

    let half = q.scaled_rotation(0.5);
    assert_eq!(half.rotation_axis(), axis.normalize());
    assert!((half.rotation_angle() - PI / 2.0).abs() < 1e-12);

    assert_eq!(q.scaled_rotation(0.0), Quaternion::IDENTITY);
    for scale in [-3.0, 0.0, 0.5, 7.0] {
        assert_eq!(Quaternion::IDENTITY.scaled_rotation(scale), Quaternion::IDENTITY);
    }
}

#[test]
fn test_concrete_cases() {
    assert_eq!(Quaternion::new(1.0, 1.0, 1.0, 1.0).to_string(), "1.00 + 1.00i + 1.00j + 1.00k");

    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(q * q, Quaternion::new(-28.0, 4.0, 6.0, 8.0));
    assert_eq!(q * Quaternion::new(15.0, -4.0, -26.0, 0.0), Quaternion::new(101.0, 130.0, 3.0, 20.0));

    assert_eq!(
        Quaternion::pure(0.0, 1.0, 0.0).rotate_by_xyz(-PI / 2.0, 0.0, 0.0, 1.0),
        Quaternion::pure(1.0, 0.0, 0.0)
    );

    assert_eq!(
        Quaternion::rotation_between(Quaternion::pure(0.0, 1.0, 0.0), Quaternion::pure(1.0, 0.0, 0.0)),
        Quaternion::from_axis_angle(PI / 2.0, Vector::new(0.0, 0.0, -1.0))
    );
}

#[test]
fn test_composition_applies_right_operand_first() {
    let a = Quaternion::from_axis_angle(PI / 2.0, Vector::UNIT_Z);
    let b = Quaternion::from_axis_angle(PI / 2.0, Vector::UNIT_X);
    let v = Vector::UNIT_Y;

    let composed = (a * b).rotate_vector(v);
    let sequential = a.rotate_vector(b.rotate_vector(v));
    assert_eq!(composed, sequential);
}

#[test]
fn test_euler_angles_round_trip() {
    for angles in [
        EulerAngles::new(0.0, 0.0, 0.0),
        EulerAngles::new(0.4, -1.1, 2.9),
        EulerAngles::new(-2.0, 0.7, -0.3),
    ] {
        let q = Quaternion::from_euler_angles(angles);
        assert!((q.norm() - 1.0).abs() < 1e-12);
        assert_eq!(Quaternion::from_euler_angles(q.euler_angles()), q);
    }
}

#[test]
fn test_slice_factory() {
    let components: Vec<f64> = vec![0.5, 1.0, -2.0, 3.0];
    let q = Quaternion::try_from(components.as_slice()).unwrap();
    assert_eq!(q, Quaternion::new(0.5, 1.0, -2.0, 3.0));

    let q = Quaternion::try_from(&components[1..]).unwrap();
    assert_eq!(q, Quaternion::pure(1.0, -2.0, 3.0));

    for len in [0, 1, 2, 5, 8] {
        let components = vec![1.0; len];
        assert_eq!(Quaternion::from_slice(&components), Err(MathError::InvalidLength { len }));
    }
}

#[test]
fn test_values_share_across_threads() {
    let r = Quaternion::from_axis_angle(0.9, Vector::new(1.0, 2.0, 3.0));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || Quaternion::pure(i as f64, 1.0, 0.0).rotate(r).rotate_back(r))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Quaternion::pure(i as f64, 1.0, 0.0));
    }
}

#[test]
fn test_serialized_form_uses_component_names() {
    let q = Quaternion::new(0.5, -1.0, 2.0, 3.0);
    let text = toml::to_string(&q).unwrap();
    assert!(text.contains("w = 0.5"));

    let back: Quaternion = toml::from_str(&text).unwrap();
    assert_eq!(back, q);
}
