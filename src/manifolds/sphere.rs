#![warn(missing_docs)]
//! Sphere of configurable radius, centered at the origin
use std::f64::consts::PI;
use std::ops::Range;

use super::ParametricSurface;
use crate::error::{MantaError, MntResult};
use nalgebra::{point, Point3};
use serde::{Deserialize, Serialize};

/// Sphere of configurable radius, centered at the origin
///
/// Parametrized by the polar angle t∈\[0,π) and the azimuthal angle s∈\[0,2π).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    radius: f64,
}
impl Sphere {
    /// Create a new [`Sphere`] with the given radius.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given `radius` is zero, negative or not finite.
    pub fn new(radius: f64) -> MntResult<Self> {
        if !radius.is_normal() || radius.is_sign_negative() {
            return Err(MantaError::Manifold(
                "radius must be positive and finite".into(),
            ));
        }
        Ok(Self { radius })
    }

    /// Returns the radius of this [`Sphere`].
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Sets the radius of this [`Sphere`].
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl ParametricSurface for Sphere {
    fn parameter_domain(&self) -> (Range<f64>, Range<f64>) {
        (0.0..PI, 0.0..2.0 * PI)
    }
    fn evaluate(&self, t: f64, s: f64) -> Point3<f64> {
        let (sin_t, cos_t) = t.sin_cos();
        let (sin_s, cos_s) = s.sin_cos();
        point![
            self.radius * cos_s * sin_t,
            self.radius * sin_s * sin_t,
            self.radius * cos_t
        ]
    }
}
impl From<Sphere> for super::ManifoldType {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    #[test]
    fn new_wrong() {
        assert!(Sphere::new(0.0).is_err());
        assert!(Sphere::new(-1.0).is_err());
        assert!(Sphere::new(f64::NAN).is_err());
        assert!(Sphere::new(f64::INFINITY).is_err());
        assert!(Sphere::new(f64::NEG_INFINITY).is_err());
    }
    #[test]
    fn default() {
        assert_eq!(Sphere::default().radius(), 1.0);
    }
    #[test]
    fn domain() {
        let (t_dom, s_dom) = Sphere::default().parameter_domain();
        assert_eq!(t_dom, 0.0..PI);
        assert_eq!(s_dom, 0.0..2.0 * PI);
    }
    #[test]
    fn evaluate_poles() {
        let sphere = Sphere::new(2.0).unwrap();
        let north = sphere.evaluate(0.0, 0.0);
        assert_relative_eq!(north.z, 2.0);
        let equator = sphere.evaluate(PI / 2.0, 0.0);
        assert_relative_eq!(equator.x, 2.0);
        assert_relative_eq!(equator.z, 0.0, epsilon = 1e-12);
    }
    #[test]
    fn evaluate_on_surface() {
        let sphere = Sphere::new(1.5).unwrap();
        for (t, s) in [(0.3, 0.7), (1.2, 4.0), (2.9, 6.1)] {
            let p = sphere.evaluate(t, s);
            assert_relative_eq!(p.x * p.x + p.y * p.y + p.z * p.z, 2.25, epsilon = 1e-12);
        }
    }
}
