use std::fmt;
use std::iter::FromIterator;
use std::ops::{Div, Index, Mul, Neg};
use std::slice::Iter;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use serde::{Deserialize, Serialize};

use crate::config::FormatOptions;
use crate::error::{LinalgError, Result};
use crate::utils::logging::format_vector;

/// An ordered sequence of `f64` components of any dimension.
///
/// Every operation returns a fresh `Vector`; operands are never modified.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    pub fn zeros(dimension: usize) -> Self {
        Self::from_elem(dimension, 0.0)
    }

    pub fn from_elem(dimension: usize, value: f64) -> Self {
        Self::new(vec![value; dimension])
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn mapv<F>(&self, mut f: F) -> Vector
    where
        F: FnMut(f64) -> f64,
    {
        self.data.iter().map(|&v| f(v)).collect()
    }

    /// Render with explicit formatting options.
    pub fn display_with(&self, options: &FormatOptions) -> String {
        format_vector(self, options)
    }

    /// Elementwise sum. Both operands must have the same dimension.
    pub fn try_add(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, "addition", |a, b| a + b)
    }

    /// Elementwise difference. Both operands must have the same dimension.
    pub fn try_sub(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, "subtraction", |a, b| a - b)
    }

    /// Dot product of two vectors of equal dimension.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_dimension(other, "dot product")?;
        Ok(dot_slices(self.as_slice(), other.as_slice()))
    }

    /// Euclidean length, `sqrt(v . v)`.
    pub fn length(&self) -> f64 {
        dot_slices(self.as_slice(), self.as_slice()).sqrt()
    }

    /// Unit vector with the same direction.
    ///
    /// Must not be called on a zero vector: the components come out as NaN.
    pub fn normalized(&self) -> Vector {
        self / self.length()
    }

    /// Distance between two points, `|b - a|`.
    pub fn distance(&self, other: &Vector) -> Result<f64> {
        Ok(other.try_sub(self)?.length())
    }

    /// Angle between two directions, in radians within `[0, pi]`.
    ///
    /// Undefined (NaN) when either vector has zero length.
    pub fn angle(&self, other: &Vector) -> Result<f64> {
        let dot = self.dot(other)?;
        Ok(angle_from_cosine(dot / (self.length() * other.length())))
    }

    fn check_dimension(&self, other: &Vector, op: &'static str) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(LinalgError::DimensionMismatch {
                op,
                lhs: self.dimension(),
                rhs: other.dimension(),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Vector, op: &'static str, f: F) -> Result<Vector>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.check_dimension(other, op)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| f(a, b))
            .collect())
    }
}

/// Dot product of two equal-length slices.
///
/// Shared by `Vector::dot` and the row-by-column kernel of matrix
/// multiplication. Callers guarantee equal lengths.
pub(crate) fn dot_slices(lhs: &[f64], rhs: &[f64]) -> f64 {
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

/// `acos` of a cosine that rounding may have pushed just outside `[-1, 1]`.
/// NaN (zero-length operand) passes through.
pub(crate) fn angle_from_cosine(cosine: f64) -> f64 {
    cosine.clamp(-1.0, 1.0).acos()
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Vector::new(value)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Self::Output {
        self.mapv(|v| v * scalar)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Self::Output {
        &self * scalar
    }
}

/// Division by `0.0` follows IEEE semantics and yields non-finite components.
impl Div<f64> for &Vector {
    type Output = Vector;

    fn div(self, scalar: f64) -> Self::Output {
        self * (1.0 / scalar)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, scalar: f64) -> Self::Output {
        &self / scalar
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self * -1.0
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::EPSILON
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.dimension() == other.dimension()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> Self::Epsilon {
        f64::EPSILON
    }
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.dimension() == other.dimension()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| RelativeEq::relative_eq(a, b, epsilon, max_relative))
    }
}

impl UlpsEq for Vector {
    fn default_max_ulps() -> u32 {
        4
    }
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.dimension() == other.dimension()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| UlpsEq::ulps_eq(a, b, epsilon, max_ulps))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_vector(self, &FormatOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_handles_odd_lengths() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        assert_eq!(dot_slices(&a, &b), 32.0);
    }

    #[test]
    fn cosine_rounding_is_clamped() {
        assert_eq!(angle_from_cosine(1.0 + 2.0 * f64::EPSILON), 0.0);
        assert_eq!(angle_from_cosine(-1.0 - 1e-15), std::f64::consts::PI);
        assert!(angle_from_cosine(f64::NAN).is_nan());
    }

    #[test]
    fn dot_of_empty_slices_is_zero() {
        assert_eq!(dot_slices(&[], &[]), 0.0);
    }
}
