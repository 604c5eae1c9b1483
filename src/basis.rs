//! Builds a local coordinate basis from one configuration.
//!
//! The point variant spans the deformation's degrees of freedom with vectors
//! from a designated origin marker to the remaining markers. The box variant
//! averages opposite edge lengths into a diagonal width/height basis; this
//! assumes a near-rectangular marker under mild distortion and is inherited
//! from the measurement procedure as a known limitation, not a general
//! technique.

use nalgebra::{Matrix2, Matrix3};

use crate::error::StrainError;
use crate::geom::Configuration;
use crate::settings::DEGENERATE_LENGTH_THRESHOLD;
use crate::tensor::Tensor;


/// Builds the basis matrix for a configuration.
///
/// Point variants use the second point as the origin and take the vectors to
/// the remaining points, in the order provided, as columns. A 3D triangle
/// gets its third column from the cross product of the first two, spanning
/// the marker plane plus its normal. The box variant returns
/// `diag(width, height)` of the averaged opposite edges.
pub fn build(config: &Configuration) -> Result<Tensor, StrainError> {
    match config {
        Configuration::Triangle2(points) => {
            let origin = points[1];
            let v1 = points[0] - origin;
            let v2 = points[2] - origin;
            if v1.norm() < DEGENERATE_LENGTH_THRESHOLD || v2.norm() < DEGENERATE_LENGTH_THRESHOLD {
                return Err(StrainError::invalid(
                    "coincident marker points give a zero-length basis vector",
                ));
            }
            Ok(Tensor::Two(Matrix2::from_columns(&[v1, v2])))
        }
        Configuration::Triangle3(points) => {
            let origin = points[1];
            let v1 = points[0] - origin;
            let v2 = points[2] - origin;
            if v1.norm() < DEGENERATE_LENGTH_THRESHOLD || v2.norm() < DEGENERATE_LENGTH_THRESHOLD {
                return Err(StrainError::invalid(
                    "coincident marker points give a zero-length basis vector",
                ));
            }
            let v3 = v1.cross(&v2);
            Ok(Tensor::Three(Matrix3::from_columns(&[v1, v2, v3])))
        }
        Configuration::Box(edges) => {
            if [edges.top, edges.left, edges.right, edges.bottom]
                .iter()
                .any(|&e| e < DEGENERATE_LENGTH_THRESHOLD)
            {
                return Err(StrainError::invalid(
                    "box edge lengths must be positive",
                ));
            }
            let width = (edges.top + edges.bottom) / 2.0;
            let height = (edges.left + edges.right) / 2.0;
            Ok(Tensor::Two(Matrix2::new(width, 0.0, 0.0, height)))
        }
    }
}
