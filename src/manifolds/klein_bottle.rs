#![warn(missing_docs)]
//! Klein bottle immersed in 3D space
use std::f64::consts::PI;
use std::ops::Range;

use super::ParametricSurface;
use nalgebra::{point, Point3};
use serde::{Deserialize, Serialize};

/// Klein bottle immersed in 3D space (bottle shape)
///
/// Parametrized by u∈\[0,π) and v∈\[0,2π). The Klein bottle cannot be embedded in 3D space;
/// this is the standard polynomial immersion of the bottle shape, which self-intersects where
/// the neck passes through the body. No shape parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KleinBottle;

impl ParametricSurface for KleinBottle {
    fn parameter_domain(&self) -> (Range<f64>, Range<f64>) {
        (0.0..PI, 0.0..2.0 * PI)
    }
    fn evaluate(&self, u: f64, v: f64) -> Point3<f64> {
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_v, cos_v) = v.sin_cos();
        let x = -(2.0 / 15.0)
            * cos_u
            * (3.0 * cos_v - 30.0 * sin_u + 90.0 * cos_u.powi(4) * sin_u
                - 60.0 * cos_u.powi(6) * sin_u
                + 5.0 * cos_u * cos_v * sin_u);
        let y = -(1.0 / 15.0)
            * sin_u
            * (3.0 * cos_v - 3.0 * cos_u.powi(2) * cos_v - 48.0 * cos_u.powi(4) * cos_v
                + 48.0 * cos_u.powi(6) * cos_v
                - 60.0 * sin_u
                + 5.0 * cos_u * cos_v * sin_u
                - 5.0 * cos_u.powi(3) * cos_v * sin_u
                - 80.0 * cos_u.powi(5) * cos_v * sin_u
                + 80.0 * cos_u.powi(7) * cos_v * sin_u);
        let z = (2.0 / 15.0) * (3.0 + 5.0 * cos_u * sin_u) * sin_v;
        point![x, y, z]
    }
}
impl From<KleinBottle> for super::ManifoldType {
    fn from(klein_bottle: KleinBottle) -> Self {
        Self::KleinBottle(klein_bottle)
    }
}
