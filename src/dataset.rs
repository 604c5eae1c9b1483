//! Named example datasets and the provider seam for callers.
//!
//! The pipeline itself never reaches for a global dataset: callers build a
//! [`StageSequence`] themselves or look one up here by name. The two
//! built-in sequences are the measurement series the tool was originally
//! written for and double as end-to-end fixtures.

use nalgebra::Point3;

use crate::error::StrainError;
use crate::geom::{BoxEdges, Configuration};
use crate::stages::{Stage, StageSequence};


/// Correction factor for the first box measurement, which is known to be
/// oversized by 10.9%.
pub const BOX_A1_SCALE: f64 = 1.0 / 1.109;

/// Names of the datasets shipped with the binary.
pub const BUILTIN_NAMES: [&str; 2] = ["pathway", "boxes"];

/// Looks up a built-in stage sequence by name.
pub fn builtin(name: &str) -> Result<StageSequence, StrainError> {
    match name {
        "pathway" => pathway(),
        "boxes" => boxes(),
        other => Err(StrainError::invalid(format!(
            "unknown dataset {other:?}, available: {BUILTIN_NAMES:?}"
        ))),
    }
}

fn triangle3(points: [[f64; 3]; 3]) -> Configuration {
    Configuration::Triangle3([
        Point3::new(points[0][0], points[0][1], points[0][2]),
        Point3::new(points[1][0], points[1][1], points[1][2]),
        Point3::new(points[2][0], points[2][1], points[2][2]),
    ])
}

/// Atomic marker positions at five states along a delta → alpha reaction
/// path. Three atoms per state define the local triangle basis.
fn pathway() -> Result<StageSequence, StrainError> {
    StageSequence::new(vec![
        Stage::new(
            "delta",
            triangle3([
                [15.09821, -2.29574, 8.78582],
                [7.31011, -2.29574, 8.78582],
                [6.5590607, -3.56558899, 16.54733386],
            ]),
        ),
        Stage::new(
            "TS1",
            triangle3([
                [15.50684, -2.60366, 8.29335],
                [7.79384, -2.60366, 8.29335],
                [6.8021954, -3.68996651, 16.64557779],
            ]),
        ),
        Stage::new(
            "MS1",
            triangle3([
                [15.94859, -2.33862, 7.85623],
                [7.79929, -2.33862, 7.85623],
                [6.297646, -3.11887829, 16.57725618],
            ]),
        ),
        Stage::new(
            "TS2",
            triangle3([
                [18.44607, -0.46791, 6.9194],
                [10.23657, -0.46791, 6.9194],
                [8.4037451, -4.49515367, 14.74076286],
            ]),
        ),
        Stage::new(
            "alpha",
            triangle3([
                [18.3474, -0.18058, 6.91377],
                [10.0347, -0.18058, 6.91377],
                [7.97224, -4.07039, 13.84072],
            ]),
        ),
    ])
}

/// Pixel edge lengths of a marker box at four deformation stages. The A1
/// measurement carries a known systematic oversizing and is rescaled by
/// [`BOX_A1_SCALE`] before use.
fn boxes() -> Result<StageSequence, StrainError> {
    let a1_raw = BoxEdges::new(398.0, 409.0, 391.0, 399.0);
    StageSequence::new(vec![
        Stage::new("A1", Configuration::Box(a1_raw.rescaled(BOX_A1_SCALE))),
        Stage::new("A2", Configuration::Box(BoxEdges::new(363.0, 353.0, 364.0, 360.0))),
        Stage::new("A3", Configuration::Box(BoxEdges::new(368.0, 381.0, 380.0, 370.0))),
        Stage::new("A4", Configuration::Box(BoxEdges::new(365.0, 440.0, 440.0, 365.0))),
    ])
}
