//! Geometric observation types.
//!
//! A configuration captures the same physical markers at one instant:
//! either a minimal set of ordered points or the four edge lengths of a
//! near-rectangular box. Observations are immutable; corrections produce
//! new values.

use nalgebra::{Point2, Point3};


/// Measured edge lengths of a near-rectangular marker box, in the order
/// they are read off the image: top, left, right, bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxEdges {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoxEdges {
    pub fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// Applies a scalar correction factor to every edge. Used to undo a
    /// known systematic measurement bias before any averaging happens.
    pub fn rescaled(&self, factor: f64) -> Self {
        Self {
            top: self.top * factor,
            left: self.left * factor,
            right: self.right * factor,
            bottom: self.bottom * factor,
        }
    }
}

/// The geometric state of one set of physical markers at a single stage.
///
/// Point order matters and must be kept identical between the reference and
/// deformed observations: for the 2D triangle the convention is top-left,
/// bottom-left, bottom-right. Values are immutable once observed; any
/// correction is applied by constructing a new configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum Configuration {
    /// Three marker points in the plane.
    Triangle2([Point2<f64>; 3]),
    /// Three marker points in space, defining a plane and its normal.
    Triangle3([Point3<f64>; 3]),
    /// Four edge lengths of a near-rectangular box.
    Box(BoxEdges),
}

impl Configuration {
    /// Dimensionality of the deformation this observation can resolve.
    pub fn dim(&self) -> usize {
        match self {
            Configuration::Triangle2(_) | Configuration::Box(_) => 2,
            Configuration::Triangle3(_) => 3,
        }
    }

    /// Applies a scalar correction factor to the whole observation.
    pub fn rescaled(&self, factor: f64) -> Self {
        match self {
            Configuration::Triangle2(points) => {
                Configuration::Triangle2(points.map(|p| Point2::from(p.coords * factor)))
            }
            Configuration::Triangle3(points) => {
                Configuration::Triangle3(points.map(|p| Point3::from(p.coords * factor)))
            }
            Configuration::Box(edges) => Configuration::Box(edges.rescaled(factor)),
        }
    }
}
