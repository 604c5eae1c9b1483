//! Finite-strain kinematics from staged geometric observations.
//!
//! Given the same physical markers observed at successive configurations,
//! the pipeline builds a local basis per configuration, solves for the
//! deformation gradient `F = B_def · B_ref⁻¹` between consecutive stages,
//! derives the Green-Lagrange strain `E = ½(FᵗF − I)`, and composes the
//! stage-wise gradients into one cumulative transform across the sequence.

pub mod basis;
pub mod dataset;
pub mod error;
pub mod geom;
pub mod input;
pub mod output;
pub mod settings;
pub mod stages;
pub mod strain;
pub mod tensor;
