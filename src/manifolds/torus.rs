#![warn(missing_docs)]
//! Ring torus with configurable major and minor radii
use std::f64::consts::PI;
use std::ops::Range;

use super::ParametricSurface;
use crate::error::{MantaError, MntResult};
use log::warn;
use nalgebra::{point, Point3};
use serde::{Deserialize, Serialize};

/// Ring torus centered at the origin, rotationally symmetric about the z axis
///
/// The major radius is the distance from the origin to the tube center, the minor radius is the
/// tube radius. Parametrized by the toroidal angle t∈\[0,2π) and the poloidal angle s∈\[0,2π).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Torus {
    major_radius: f64,
    minor_radius: f64,
}
impl Torus {
    /// Create a new [`Torus`] with the given major and minor radii.
    ///
    /// A major radius greater than the minor radius is expected but not enforced; a
    /// self-intersecting (horn or spindle) torus only emits a warning.
    ///
    /// # Errors
    ///
    /// This function will return an error if one of the given radii is zero, negative or not
    /// finite.
    pub fn new(major_radius: f64, minor_radius: f64) -> MntResult<Self> {
        if !major_radius.is_normal() || major_radius.is_sign_negative() {
            return Err(MantaError::Manifold(
                "major radius must be positive and finite".into(),
            ));
        }
        if !minor_radius.is_normal() || minor_radius.is_sign_negative() {
            return Err(MantaError::Manifold(
                "minor radius must be positive and finite".into(),
            ));
        }
        if major_radius <= minor_radius {
            warn!("major radius <= minor radius: the torus is self-intersecting");
        }
        Ok(Self {
            major_radius,
            minor_radius,
        })
    }

    /// Returns the major radius of this [`Torus`].
    #[must_use]
    pub fn major_radius(&self) -> f64 {
        self.major_radius
    }

    /// Returns the minor radius of this [`Torus`].
    #[must_use]
    pub fn minor_radius(&self) -> f64 {
        self.minor_radius
    }

    /// Sets the major radius of this [`Torus`].
    pub fn set_major_radius(&mut self, major_radius: f64) {
        self.major_radius = major_radius;
    }

    /// Sets the minor radius of this [`Torus`].
    pub fn set_minor_radius(&mut self, minor_radius: f64) {
        self.minor_radius = minor_radius;
    }
}

impl Default for Torus {
    fn default() -> Self {
        Self {
            major_radius: 2.0,
            minor_radius: 1.0,
        }
    }
}

impl ParametricSurface for Torus {
    fn parameter_domain(&self) -> (Range<f64>, Range<f64>) {
        (0.0..2.0 * PI, 0.0..2.0 * PI)
    }
    fn evaluate(&self, t: f64, s: f64) -> Point3<f64> {
        let (sin_t, cos_t) = t.sin_cos();
        let (sin_s, cos_s) = s.sin_cos();
        let tube = self.minor_radius * cos_s + self.major_radius;
        point![tube * cos_t, tube * sin_t, self.minor_radius * sin_s]
    }
}
impl From<Torus> for super::ManifoldType {
    fn from(torus: Torus) -> Self {
        Self::Torus(torus)
    }
}
