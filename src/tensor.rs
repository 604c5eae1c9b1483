use nalgebra::{Matrix2, Matrix3};

use crate::error::StrainError;


/// A real square matrix of the two sizes the pipeline works with. Bases,
/// deformation gradients and strain tensors are all values of this type,
/// which keeps the core free of any direct dependency on the linear
/// algebra backend outside this module.
#[derive(Debug, Clone, PartialEq)]
pub enum Tensor {
    Two(Matrix2<f64>),
    Three(Matrix3<f64>),
}

impl Tensor {
    /// Side length of the matrix (2 or 3).
    pub fn dim(&self) -> usize {
        match self {
            Tensor::Two(_) => 2,
            Tensor::Three(_) => 3,
        }
    }

    /// Identity of the given dimensionality.
    pub fn identity(dim: usize) -> Result<Self, StrainError> {
        match dim {
            2 => Ok(Tensor::Two(Matrix2::identity())),
            3 => Ok(Tensor::Three(Matrix3::identity())),
            d => Err(StrainError::invalid(format!(
                "unsupported dimensionality {d}, must be 2 or 3"
            ))),
        }
    }

    /// Matrix product `self · rhs`.
    pub fn mul(&self, rhs: &Tensor) -> Result<Tensor, StrainError> {
        match (self, rhs) {
            (Tensor::Two(a), Tensor::Two(b)) => Ok(Tensor::Two(a * b)),
            (Tensor::Three(a), Tensor::Three(b)) => Ok(Tensor::Three(a * b)),
            _ => Err(StrainError::DimensionMismatch {
                expected: self.dim(),
                found: rhs.dim(),
            }),
        }
    }

    pub fn transpose(&self) -> Tensor {
        match self {
            Tensor::Two(m) => Tensor::Two(m.transpose()),
            Tensor::Three(m) => Tensor::Three(m.transpose()),
        }
    }

    pub fn determinant(&self) -> f64 {
        match self {
            Tensor::Two(m) => m.determinant(),
            Tensor::Three(m) => m.determinant(),
        }
    }

    /// Inverse, if one exists. Callers decide what "too close to singular"
    /// means via [`Tensor::determinant`]; this only fails on exact
    /// non-invertibility as reported by the backend.
    pub fn try_inverse(&self) -> Option<Tensor> {
        match self {
            Tensor::Two(m) => m.try_inverse().map(Tensor::Two),
            Tensor::Three(m) => m.try_inverse().map(Tensor::Three),
        }
    }

    /// Entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        match self {
            Tensor::Two(m) => m[(row, col)],
            Tensor::Three(m) => m[(row, col)],
        }
    }

    /// Elementwise comparison within an absolute tolerance. Dimensions must
    /// match for the tensors to compare equal.
    pub fn abs_diff_eq(&self, other: &Tensor, tol: f64) -> bool {
        if self.dim() != other.dim() {
            return false;
        }
        let n = self.dim();
        for i in 0..n {
            for j in 0..n {
                if (self.get(i, j) - other.get(i, j)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Whether the matrix equals its own transpose within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        self.abs_diff_eq(&self.transpose(), tol)
    }
}
