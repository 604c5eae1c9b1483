//! Deformation gradient and Green-Lagrange strain computation.
//!
//! `F = B_def · B_ref⁻¹` is the unique linear map taking the reference basis
//! onto the deformed basis. `E = ½(FᵗF − I)` vanishes exactly for pure
//! rigid-body rotations, which is the defining meaning of "no strain".

use nalgebra::{Matrix2, Matrix3};

use crate::error::StrainError;
use crate::settings::SINGULAR_DETERMINANT_THRESHOLD;
use crate::tensor::Tensor;


/// Solves for the deformation gradient mapping `reference` onto `deformed`.
///
/// The result satisfies `F · B_ref = B_def` exactly, up to floating point,
/// whenever the reference basis is invertible. A reference determinant
/// within [`SINGULAR_DETERMINANT_THRESHOLD`] of zero is a hard error; no
/// best-effort matrix is ever returned.
pub fn deformation_gradient(
    reference: &Tensor,
    deformed: &Tensor,
) -> Result<Tensor, StrainError> {
    if reference.dim() != deformed.dim() {
        return Err(StrainError::DimensionMismatch {
            expected: reference.dim(),
            found: deformed.dim(),
        });
    }
    let determinant = reference.determinant();
    if determinant.abs() < SINGULAR_DETERMINANT_THRESHOLD {
        return Err(StrainError::SingularBasis { determinant });
    }
    let inverse = reference
        .try_inverse()
        .ok_or(StrainError::SingularBasis { determinant })?;
    deformed.mul(&inverse)
}

/// Green-Lagrange strain tensor `E = ½(FᵗF − I)`.
///
/// Symmetric for every real F; zero iff F is orthogonal.
pub fn green_lagrange(f: &Tensor) -> Tensor {
    match f {
        Tensor::Two(m) => Tensor::Two(0.5 * (m.transpose() * m - Matrix2::identity())),
        Tensor::Three(m) => Tensor::Three(0.5 * (m.transpose() * m - Matrix3::identity())),
    }
}
