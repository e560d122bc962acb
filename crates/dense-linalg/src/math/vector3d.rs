use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};
use crate::math::matrix::Matrix;
use crate::math::vector::{angle_from_cosine, dot_slices, Vector};

/// A vector fixed to three dimensions.
///
/// Wraps a 3-component [`Vector`] and adds the cross and triple products.
/// Because the dimension is fixed, the elementwise operators are infallible.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vector", into = "Vector")]
pub struct Vector3D {
    inner: Vector,
}

impl Vector3D {
    pub const DIMENSION: usize = 3;

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            inner: Vector::new(vec![x, y, z]),
        }
    }

    /// Copy components out of a slice, which must hold exactly three values.
    pub fn try_from_slice(components: &[f64]) -> Result<Self> {
        match *components {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(LinalgError::Construction {
                expected: Self::DIMENSION,
                found: components.len(),
            }),
        }
    }

    pub fn x(&self) -> f64 {
        self.inner[0]
    }

    pub fn y(&self) -> f64 {
        self.inner[1]
    }

    pub fn z(&self) -> f64 {
        self.inner[2]
    }

    pub fn dimension(&self) -> usize {
        Self::DIMENSION
    }

    pub fn as_vector(&self) -> &Vector {
        &self.inner
    }

    pub fn into_vector(self) -> Vector {
        self.inner
    }

    pub fn dot(&self, other: &Vector3D) -> f64 {
        dot_slices(self.inner.as_slice(), other.inner.as_slice())
    }

    pub fn length(&self) -> f64 {
        self.inner.length()
    }

    /// Unit vector with the same direction. NaN components for a zero vector.
    pub fn normalized(&self) -> Vector3D {
        self / self.length()
    }

    pub fn distance(&self, other: &Vector3D) -> f64 {
        (other - self).length()
    }

    /// Angle in radians, NaN when either vector has zero length.
    pub fn angle(&self, other: &Vector3D) -> f64 {
        angle_from_cosine(self.dot(other) / (self.length() * other.length()))
    }

    /// Cross product `self x other`.
    ///
    /// Expands the formal determinant whose first row is the unit basis and
    /// whose remaining rows are the operands: each component is a first-row
    /// cofactor of that 3x3 matrix.
    pub fn cross(&self, other: &Vector3D) -> Vector3D {
        let mut data = vec![1.0; Self::DIMENSION];
        data.extend_from_slice(self.inner.as_slice());
        data.extend_from_slice(other.inner.as_slice());
        let m = Matrix::from_row_major(Self::DIMENSION, Self::DIMENSION, data);
        Vector3D::new(m.signed_minor(0, 0), m.signed_minor(0, 1), m.signed_minor(0, 2))
    }

    /// Scalar triple product `a . (b x c)`, the signed volume of the
    /// parallelepiped spanned by the three vectors.
    pub fn triple_product(a: &Vector3D, b: &Vector3D, c: &Vector3D) -> f64 {
        a.dot(&b.cross(c))
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Vector3D {
        Vector3D::new(f(self.x()), f(self.y()), f(self.z()))
    }

    fn zip(&self, other: &Vector3D, f: impl Fn(f64, f64) -> f64) -> Vector3D {
        Vector3D::new(
            f(self.x(), other.x()),
            f(self.y(), other.y()),
            f(self.z(), other.z()),
        )
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3D::new(x, y, z)
    }
}

impl TryFrom<Vec<f64>> for Vector3D {
    type Error = LinalgError;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        Vector3D::try_from_slice(&value)
    }
}

impl TryFrom<Vector> for Vector3D {
    type Error = LinalgError;

    fn try_from(value: Vector) -> Result<Self> {
        if value.dimension() != Self::DIMENSION {
            return Err(LinalgError::Construction {
                expected: Self::DIMENSION,
                found: value.dimension(),
            });
        }
        Ok(Self { inner: value })
    }
}

impl From<Vector3D> for Vector {
    fn from(value: Vector3D) -> Self {
        value.inner
    }
}

impl AsRef<Vector> for Vector3D {
    fn as_ref(&self) -> &Vector {
        &self.inner
    }
}

impl Add for &Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: Vector3D) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for &Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: Vector3D) -> Self::Output {
        &self - &rhs
    }
}

impl Mul<f64> for &Vector3D {
    type Output = Vector3D;

    fn mul(self, scalar: f64) -> Self::Output {
        self.map(|v| v * scalar)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, scalar: f64) -> Self::Output {
        &self * scalar
    }
}

impl Div<f64> for &Vector3D {
    type Output = Vector3D;

    fn div(self, scalar: f64) -> Self::Output {
        self * (1.0 / scalar)
    }
}

impl Div<f64> for Vector3D {
    type Output = Vector3D;

    fn div(self, scalar: f64) -> Self::Output {
        &self / scalar
    }
}

impl Neg for &Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Self::Output {
        self * -1.0
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
