#![warn(missing_docs)]
//! Möbius band of unit radius and unit width
use std::f64::consts::PI;
use std::ops::Range;

use super::ParametricSurface;
use nalgebra::{point, Point3};
use serde::{Deserialize, Serialize};

/// Möbius band of unit radius and unit width, centered at the origin
///
/// Parametrized by the width coordinate t∈\[-0.5,0.5) and the angular coordinate s∈\[0,2π).
/// The band has no shape parameters; its center circle is the unit circle in the xy plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MobiusBand;

impl ParametricSurface for MobiusBand {
    fn parameter_domain(&self) -> (Range<f64>, Range<f64>) {
        (-0.5..0.5, 0.0..2.0 * PI)
    }
    fn evaluate(&self, t: f64, s: f64) -> Point3<f64> {
        let (sin_half, cos_half) = (s / 2.0).sin_cos();
        let radial = 1.0 - t * sin_half;
        point![radial * s.cos(), radial * s.sin(), t * cos_half]
    }
}
impl From<MobiusBand> for super::ManifoldType {
    fn from(mobius: MobiusBand) -> Self {
        Self::MobiusBand(mobius)
    }
}
