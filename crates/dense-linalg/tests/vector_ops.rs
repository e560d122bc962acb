//! Integration tests for Vector and Vector3D.

use std::f64::consts::FRAC_PI_2;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use dense_linalg::error::LinalgError;
use dense_linalg::math::{Vector, Vector3D};

// ---------------------------------------------------------------------------
// Vector arithmetic
// ---------------------------------------------------------------------------

#[test]
fn vector_basics() {
    let v = Vector::new(vec![1.0, 2.0, 3.0]);
    assert_eq!(v.dimension(), 3);
    assert!(!v.is_empty());
    assert_eq!(v[1], 2.0);
    assert_eq!(Vector::zeros(4).to_vec(), vec![0.0; 4]);
    assert_eq!(Vector::from_elem(2, 7.0).to_vec(), vec![7.0, 7.0]);
}

#[test]
fn vector_add_and_subtract() {
    let a = Vector::new(vec![1.0, 2.0]);
    let b = Vector::new(vec![10.0, 20.0]);
    assert_eq!(a.try_add(&b).unwrap().to_vec(), vec![11.0, 22.0]);
    assert_eq!(a.try_sub(&b).unwrap().to_vec(), vec![-9.0, -18.0]);
}

#[test]
fn vector_dimension_mismatch() {
    let a = Vector::new(vec![1.0, 2.0]);
    let b = Vector::new(vec![1.0, 2.0, 3.0]);
    assert_eq!(
        a.try_add(&b).unwrap_err(),
        LinalgError::DimensionMismatch {
            op: "addition",
            lhs: 2,
            rhs: 3
        }
    );
    assert!(matches!(a.try_sub(&b), Err(LinalgError::DimensionMismatch { .. })));
    assert!(matches!(a.dot(&b), Err(LinalgError::DimensionMismatch { .. })));
    assert!(a.distance(&b).is_err());
    assert!(a.angle(&b).is_err());
}

#[test]
fn vector_scaling() {
    let v = Vector::new(vec![2.0, -4.0]);
    assert_eq!((&v * 0.5).to_vec(), vec![1.0, -2.0]);
    assert_eq!((&v / 2.0).to_vec(), vec![1.0, -2.0]);
    assert_eq!((-v).to_vec(), vec![-2.0, 4.0]);
}

#[test]
fn vector_division_by_zero_propagates_infinity() {
    let v = Vector::new(vec![1.0, 0.0]);
    let d = v / 0.0;
    assert_eq!(d[0], f64::INFINITY);
    assert!(d[1].is_nan());
}

#[test]
fn dot_length_and_normalize() {
    let a = Vector::new(vec![3.0, 4.0]);
    let b = Vector::new(vec![-1.0, 2.0]);
    assert_eq!(a.dot(&b).unwrap(), 5.0);
    assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
    assert_eq!(a.length(), 5.0);
    assert_relative_eq!(a.normalized(), Vector::new(vec![0.6, 0.8]), epsilon = 1e-15);
    assert_relative_eq!(a.normalized().length(), 1.0, epsilon = 1e-15);
}

#[test]
fn normalizing_zero_vector_gives_nan() {
    let z = Vector::zeros(3);
    assert!(z.normalized().iter().all(|v| v.is_nan()));
}

#[test]
fn distance_and_angle() {
    let a = Vector::new(vec![1.0, 1.0]);
    let b = Vector::new(vec![4.0, 5.0]);
    assert_eq!(a.distance(&b).unwrap(), 5.0);
    assert_eq!(b.distance(&a).unwrap(), 5.0);

    let x = Vector::new(vec![1.0, 0.0]);
    let y = Vector::new(vec![0.0, 2.0]);
    assert_relative_eq!(x.angle(&y).unwrap(), FRAC_PI_2);
    assert_abs_diff_eq!(x.angle(&x).unwrap(), 0.0);
    assert_relative_eq!(x.angle(&(-&x)).unwrap(), std::f64::consts::PI);
}

#[test]
fn angle_with_itself_is_zero_despite_rounding() {
    for i in 1..200 {
        let t = i as f64;
        let v = Vector::new(vec![0.1 * t, 0.7, 0.3 * t + 0.01]);
        let angle = v.angle(&v.clone()).unwrap();
        assert!(!angle.is_nan(), "angle of {} with itself is NaN", v);
        assert_abs_diff_eq!(angle, 0.0, epsilon = 1e-7);

        let opposite = (-&v).angle(&v).unwrap();
        assert_abs_diff_eq!(opposite, std::f64::consts::PI, epsilon = 1e-7);

        let w = Vector3D::new(0.1 * t, 0.7, 0.3 * t + 0.01);
        assert!(!w.angle(&w).is_nan());
        assert_abs_diff_eq!(w.angle(&w), 0.0, epsilon = 1e-7);
    }
}

#[test]
fn angle_with_zero_vector_is_nan() {
    let v = Vector::new(vec![1.0, 2.0]);
    assert!(v.angle(&Vector::zeros(2)).unwrap().is_nan());
    assert!(Vector3D::new(0.0, 0.0, 0.0)
        .angle(&Vector3D::new(1.0, 0.0, 0.0))
        .is_nan());
}

#[test]
fn vector_operations_do_not_mutate_operands() {
    let a = Vector::new(vec![1.0, 2.0, 3.0]);
    let b = Vector::new(vec![4.0, 5.0, 6.0]);
    let (a0, b0) = (a.clone(), b.clone());
    let _ = a.try_add(&b).unwrap();
    let _ = a.try_sub(&b).unwrap();
    let _ = &a * 3.0;
    let _ = a.normalized();
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

// ---------------------------------------------------------------------------
// Vector3D construction
// ---------------------------------------------------------------------------

#[test]
fn vector3d_from_two_components_is_rejected() {
    let err = Vector3D::try_from(vec![1.0, 2.0]).unwrap_err();
    assert_eq!(
        err,
        LinalgError::Construction {
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn vector3d_from_four_components_is_rejected() {
    let v = Vector::new(vec![1.0, 2.0, 3.0, 4.0]);
    assert!(matches!(
        Vector3D::try_from(v),
        Err(LinalgError::Construction { found: 4, .. })
    ));
    assert!(Vector3D::try_from_slice(&[]).is_err());
}

#[test]
fn vector3d_accessors() {
    let v = Vector3D::try_from(vec![1.0, 2.0, 3.0]).unwrap();
    assert_eq!((v.x(), v.y(), v.z()), (1.0, 2.0, 3.0));
    assert_eq!(v.dimension(), 3);
    assert_eq!(v.as_vector().to_vec(), vec![1.0, 2.0, 3.0]);
    assert_eq!(v, Vector3D::from([1.0, 2.0, 3.0]));
    assert_eq!(Vector::from(v), Vector::new(vec![1.0, 2.0, 3.0]));
}

#[test]
fn vector3d_arithmetic() {
    let a = Vector3D::new(1.0, 2.0, 3.0);
    let b = Vector3D::new(4.0, 6.0, 3.0);
    assert_eq!(&a + &b, Vector3D::new(5.0, 8.0, 6.0));
    assert_eq!(&b - &a, Vector3D::new(3.0, 4.0, 0.0));
    assert_eq!(&a * 2.0, Vector3D::new(2.0, 4.0, 6.0));
    assert_eq!(-a.clone(), Vector3D::new(-1.0, -2.0, -3.0));
    assert_eq!(a.dot(&b), 25.0);
    assert_eq!(a.distance(&b), 5.0);
    assert_relative_eq!(
        Vector3D::new(0.0, 3.0, 4.0).normalized().into_vector(),
        Vector::new(vec![0.0, 0.6, 0.8]),
        epsilon = 1e-15
    );
}

// ---------------------------------------------------------------------------
// Cross & triple product
// ---------------------------------------------------------------------------

#[test]
fn cross_of_basis_vectors() {
    let x = Vector3D::new(1.0, 0.0, 0.0);
    let y = Vector3D::new(0.0, 1.0, 0.0);
    let z = Vector3D::new(0.0, 0.0, 1.0);
    assert_eq!(x.cross(&y), z);
    assert_eq!(y.cross(&z), x);
    assert_eq!(z.cross(&x), y);
    assert_eq!(y.cross(&x), Vector3D::new(0.0, 0.0, -1.0));
}

#[test]
fn cross_general_case() {
    let a = Vector3D::new(1.0, 2.0, 3.0);
    let b = Vector3D::new(4.0, 5.0, 6.0);
    let c = a.cross(&b);
    assert_eq!(c, Vector3D::new(-3.0, 6.0, -3.0));
    assert_eq!(c.dot(&a), 0.0);
    assert_eq!(c.dot(&b), 0.0);
}

#[test]
fn cross_is_anticommutative_for_fractional_components() {
    let a = Vector3D::new(0.5, -1.25, 2.0);
    let b = Vector3D::new(-3.0, 0.75, 4.5);
    let ab = a.cross(&b);
    assert_eq!(ab, Vector3D::new(-7.125, -8.25, -3.375));
    assert_eq!(b.cross(&a), -ab);
}

#[test]
fn cross_of_parallel_vectors_is_zero() {
    let a = Vector3D::new(1.0, -2.0, 0.5);
    assert_eq!((&a * 3.0).cross(&a), Vector3D::new(0.0, 0.0, 0.0));
}

#[test]
fn triple_product_is_signed_volume() {
    let x = Vector3D::new(1.0, 0.0, 0.0);
    let y = Vector3D::new(0.0, 1.0, 0.0);
    let z = Vector3D::new(0.0, 0.0, 1.0);
    assert_eq!(Vector3D::triple_product(&x, &y, &z), 1.0);
    assert_eq!(Vector3D::triple_product(&y, &x, &z), -1.0);

    let a = Vector3D::new(1.0, 2.0, 3.0);
    let b = Vector3D::new(4.0, 5.0, 6.0);
    let c = Vector3D::new(7.0, 8.0, 10.0);
    assert_eq!(Vector3D::triple_product(&a, &b, &c), -3.0);
}
