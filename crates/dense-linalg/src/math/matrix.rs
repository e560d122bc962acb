use std::fmt;
use std::ops::{Div, Index, Mul, Neg};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use serde::{Deserialize, Serialize};

use crate::config::FormatOptions;
use crate::error::{LinalgError, Result, ShapeError};
use crate::math::vector::{dot_slices, Vector};
use crate::utils::logging::format_matrix;

/// A dense grid of `f64` values, `width` columns by `height` rows.
///
/// Entries are stored row-major and addressed as `(row, col)`, zero-indexed.
/// The minor/cofactor/submatrix family takes 1-indexed arguments instead,
/// matching the usual mathematical notation `M_ij`.
///
/// Matrices are values: every operation allocates and returns a new matrix,
/// and no method mutates `self` or its operands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr", into = "MatrixRepr")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Serialized form. Carries the shape explicitly so `0 x n` and `n x 0`
/// matrices survive a round trip.
#[derive(Serialize, Deserialize)]
struct MatrixRepr {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// `+1` for even `n`, `-1` for odd.
#[inline]
fn sign(n: usize) -> f64 {
    if n % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

impl Matrix {
    /// A `width x height` matrix filled with zeros.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            data: vec![0.0; width * height],
            rows: height,
            cols: width,
        }
    }

    /// Build from a row-major buffer, `shape = (rows, cols)`.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(ShapeError::BufferLength {
                rows,
                cols,
                len: data.len(),
            }
            .into());
        }
        Ok(Self { data, rows, cols })
    }

    /// Row-major constructor for callers that already hold `rows * cols`
    /// values.
    pub(crate) fn from_row_major(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// Build from a nested sequence of columns. Every column must have the
    /// same length.
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self> {
        let height = uniform_len(&columns)?;
        let width = columns.len();
        let mut data = Vec::with_capacity(width * height);
        for row in 0..height {
            for column in &columns {
                data.push(column[row]);
            }
        }
        Ok(Self {
            data,
            rows: height,
            cols: width,
        })
    }

    /// Build from a nested sequence of rows. Every row must have the same
    /// length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let width = uniform_len(&rows)?;
        let height = rows.len();
        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            rows: height,
            cols: width,
        })
    }

    /// The `size x size` identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut identity = Self::zeros(size, size);
        for i in 0..size {
            let offset = identity.offset(i, i);
            identity.data[offset] = 1.0;
        }
        identity
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// `(width, height)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn row(&self, row: usize) -> Vector {
        Vector::new(self.row_slice(row).to_vec())
    }

    pub fn column(&self, col: usize) -> Vector {
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows).map(|row| self[(row, col)]).collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|row| self.row_slice(row).to_vec()).collect()
    }

    pub fn mapv<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Render with explicit formatting options.
    pub fn display_with(&self, options: &FormatOptions) -> String {
        format_matrix(self, options)
    }

    /// The transpose: entry `(r, c)` of the result is entry `(c, r)` of `self`.
    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)]);
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Elementwise sum of two matrices of identical shape.
    pub fn try_add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "addition", |a, b| a + b)
    }

    /// Elementwise difference of two matrices of identical shape.
    pub fn try_sub(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "subtraction", |a, b| a - b)
    }

    /// Matrix product `self * other`.
    ///
    /// Requires `self.width() == other.height()`; the result is
    /// `other.width()` wide and `self.height()` tall. Each entry is the dot
    /// product of a row of `self` with a column of `other`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(self.mismatch(other, "multiplication"));
        }

        let rhs_transposed = other.transpose();
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for row in 0..self.rows {
            let lhs_row = self.row_slice(row);
            for col in 0..other.cols {
                data.push(dot_slices(lhs_row, rhs_transposed.row_slice(col)));
            }
        }

        Ok(Matrix {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Matrix-vector product `self * v`, treating `v` as a column.
    pub fn mul_vector(&self, v: &Vector) -> Result<Vector> {
        if self.cols != v.dimension() {
            return Err(LinalgError::DimensionMismatch {
                op: "matrix-vector product",
                lhs: self.cols,
                rhs: v.dimension(),
            });
        }
        Ok((0..self.rows)
            .map(|row| dot_slices(self.row_slice(row), v.as_slice()))
            .collect())
    }

    /// Matrix division `self * other^-1`.
    ///
    /// Both operands must be square and non-singular.
    pub fn try_div(&self, other: &Matrix) -> Result<Matrix> {
        if self.determinant()? == 0.0 || other.determinant()? == 0.0 {
            log::debug!(
                "rejecting division of {}x{} by {}x{}: singular operand",
                self.cols,
                self.rows,
                other.cols,
                other.rows
            );
            return Err(LinalgError::Singular { op: "division" });
        }
        self.matmul(&other.inverse()?)
    }

    /// Delete row `row` and column `col` (both 1-indexed).
    ///
    /// A matrix smaller than 2x2 in both dimensions is returned unchanged
    /// when either index lies past its bounds; any other out-of-range index
    /// is an error.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Matrix> {
        let past_bounds = row > self.rows || col > self.cols;
        if past_bounds && self.rows < 2 && self.cols < 2 {
            return Ok(self.clone());
        }
        if row == 0 || col == 0 || past_bounds {
            return Err(LinalgError::IndexOutOfBounds {
                row,
                col,
                width: self.cols,
                height: self.rows,
            });
        }
        Ok(self.without(row - 1, col - 1))
    }

    /// Copy of `self` minus one row and one column, zero-indexed and in bounds.
    fn without(&self, skip_row: usize, skip_col: usize) -> Matrix {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for row in (0..self.rows).filter(|&r| r != skip_row) {
            for col in (0..self.cols).filter(|&c| c != skip_col) {
                data.push(self[(row, col)]);
            }
        }
        Matrix {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }

    /// Determinant by Laplace expansion along the first row.
    ///
    /// Runs in O(n!) time, which is fine for the small matrices this type
    /// targets. The 0x0 matrix has determinant 1.
    pub fn determinant(&self) -> Result<f64> {
        self.require_square("determinant")?;
        Ok(self.cofactor_expansion())
    }

    // Square matrices only.
    fn cofactor_expansion(&self) -> f64 {
        match self.rows {
            0 => 1.0,
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            n => {
                log::trace!("expanding {}x{} determinant along the first row", n, n);
                (0..n)
                    .map(|col| sign(col) * self[(0, col)] * self.without(0, col).cofactor_expansion())
                    .sum()
            }
        }
    }

    /// Cofactor at zero-indexed `(row, col)` of a square matrix with both
    /// indices in bounds.
    pub(crate) fn signed_minor(&self, row: usize, col: usize) -> f64 {
        sign(row + col) * self.without(row, col).cofactor_expansion()
    }

    /// Determinant of the submatrix left after deleting row `row` and
    /// column `col` (1-indexed).
    pub fn minor(&self, row: usize, col: usize) -> Result<f64> {
        self.require_square("minor")?;
        Ok(self.submatrix(row, col)?.cofactor_expansion())
    }

    /// Signed minor, `(-1)^(row + col) * minor(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64> {
        Ok(sign(row + col) * self.minor(row, col)?)
    }

    /// Matrix of all cofactors: entry `(i - 1, j - 1)` is `cofactor(i, j)`.
    pub fn cofactor_matrix(&self) -> Result<Matrix> {
        self.require_square("cofactor matrix")?;
        let n = self.rows;
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(self.signed_minor(i, j));
            }
        }
        Ok(Matrix::from_row_major(n, n, data))
    }

    /// Classical adjugate: the transpose of the cofactor matrix.
    pub fn adjoint(&self) -> Result<Matrix> {
        self.require_square("adjoint")?;
        Ok(self.cofactor_matrix()?.transpose())
    }

    /// Inverse via `adjoint / determinant`.
    ///
    /// A matrix is singular only when its determinant is exactly `0.0`; no
    /// tolerance is applied, so nearly singular input yields a numerically
    /// poor inverse rather than an error.
    pub fn inverse(&self) -> Result<Matrix> {
        self.require_square("inverse")?;
        let determinant = self.cofactor_expansion();
        if determinant == 0.0 {
            log::debug!("{}x{} matrix is singular, no inverse", self.rows, self.cols);
            return Err(LinalgError::Singular { op: "inverse" });
        }
        Ok(self.adjoint()? / determinant)
    }

    /// Integer power. `p == 0` gives the identity, negative powers raise the
    /// inverse.
    pub fn pow(&self, p: i32) -> Result<Matrix> {
        self.require_square("power")?;
        if p == 0 {
            return Ok(Matrix::identity(self.rows));
        }

        let base = if p < 0 {
            log::debug!("negative power {}, inverting base first", p);
            self.inverse()?
        } else {
            self.clone()
        };

        let mut power = base.clone();
        for _ in 1..p.unsigned_abs() {
            power = power.matmul(&base)?;
        }
        Ok(power)
    }

    /// Sum of the diagonal entries.
    pub fn trace(&self) -> Result<f64> {
        self.require_square("trace")?;
        Ok((0..self.rows).map(|i| self[(i, i)]).sum())
    }

    fn require_square(&self, op: &'static str) -> Result<()> {
        if !self.is_square() {
            return Err(LinalgError::NonSquare {
                op,
                width: self.cols,
                height: self.rows,
            });
        }
        Ok(())
    }

    fn mismatch(&self, other: &Matrix, op: &'static str) -> LinalgError {
        LinalgError::ShapeMismatch {
            op,
            lhs: self.shape(),
            rhs: other.shape(),
        }
    }

    fn zip_with<F>(&self, other: &Matrix, op: &'static str, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(self.mismatch(other, op));
        }
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }
}

/// Common length of every line in `lines`, or the first offending line.
fn uniform_len(lines: &[Vec<f64>]) -> Result<usize> {
    let expected = lines.first().map_or(0, Vec::len);
    for (index, line) in lines.iter().enumerate() {
        if line.len() != expected {
            return Err(ShapeError::Ragged {
                index,
                expected,
                found: line.len(),
            }
            .into());
        }
    }
    Ok(expected)
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(value: Matrix) -> Self {
        value.to_rows()
    }
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = LinalgError;

    fn try_from(repr: MatrixRepr) -> Result<Self> {
        Matrix::from_shape_vec((repr.rows, repr.cols), repr.data)
    }
}

impl From<Matrix> for MatrixRepr {
    fn from(value: Matrix) -> Self {
        MatrixRepr {
            rows: value.rows,
            cols: value.cols,
            data: value.data,
        }
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Self::Output {
        self.mapv(|v| v * scalar)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Self::Output {
        &self * scalar
    }
}

/// Multiplies by the reciprocal. Division by `0.0` follows IEEE semantics.
impl Div<f64> for &Matrix {
    type Output = Matrix;

    fn div(self, scalar: f64) -> Self::Output {
        self * (1.0 / scalar)
    }
}

impl Div<f64> for Matrix {
    type Output = Matrix;

    fn div(self, scalar: f64) -> Self::Output {
        &self / scalar
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self * -1.0
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::EPSILON
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> Self::Epsilon {
        f64::EPSILON
    }
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| RelativeEq::relative_eq(a, b, epsilon, max_relative))
    }
}

impl UlpsEq for Matrix {
    fn default_max_ulps() -> u32 {
        4
    }
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| UlpsEq::ulps_eq(a, b, epsilon, max_ulps))
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_matrix(self, &FormatOptions::default()))
    }
}
