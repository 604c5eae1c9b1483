//! Coordinate interface for the two-configuration CLI workflow.
//!
//! Accepts exactly 12 scalar values: the reference lattice's top-left,
//! bottom-left and bottom-right corners as x y pairs, then the deformed
//! lattice's corners in the same order. When no values are supplied the
//! same six points are gathered through sequential prompts.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use nalgebra::Point2;

use crate::error::StrainError;
use crate::geom::Configuration;
use crate::stages::{Stage, StageSequence};


/// Number of scalar values the coordinate interface expects:
/// 6 points × 2 dimensions.
pub const COORD_COUNT: usize = 12;

/// Order in which corner points are supplied and prompted.
const POINT_LABELS: [&str; 3] = ["Top-left", "Bottom-left", "Bottom-right"];

/// Splits a flat coordinate list into the reference and deformed
/// configurations. Any count other than [`COORD_COUNT`] is rejected before
/// any computation happens.
pub fn configurations_from_coords(
    values: &[f64],
) -> Result<(Configuration, Configuration), StrainError> {
    if values.len() != COORD_COUNT {
        return Err(StrainError::InputCountMismatch {
            expected: COORD_COUNT,
            found: values.len(),
        });
    }
    let point = |i: usize| Point2::new(values[2 * i], values[2 * i + 1]);
    let reference = Configuration::Triangle2([point(0), point(1), point(2)]);
    let deformed = Configuration::Triangle2([point(3), point(4), point(5)]);
    Ok((reference, deformed))
}

/// Wraps a reference/deformed pair into a two-stage sequence.
pub fn pair_sequence(
    reference: Configuration,
    deformed: Configuration,
) -> Result<StageSequence, StrainError> {
    StageSequence::new(vec![
        Stage::new("reference", reference),
        Stage::new("deformed", deformed),
    ])
}

/// Gathers the six corner points interactively from stdin.
pub fn prompt_for_coords() -> Result<(Configuration, Configuration)> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Enter pixel coordinates of lattice corners in this order:");
    for (i, label) in POINT_LABELS.iter().enumerate() {
        println!("  {}. {}", i + 1, label);
    }

    let mut values = Vec::with_capacity(COORD_COUNT);
    for lattice in ["Reference", "Deformed"] {
        println!("\n{lattice} lattice:");
        for label in POINT_LABELS {
            for axis in ["X", "Y"] {
                print!("  {label} {axis}: ");
                io::stdout().flush()?;
                let line = lines
                    .next()
                    .context("unexpected end of input while prompting for coordinates")??;
                let value: f64 = line
                    .trim()
                    .parse()
                    .with_context(|| format!("could not parse {:?} as a number", line.trim()))?;
                values.push(value);
            }
        }
    }

    Ok(configurations_from_coords(&values)?)
}
