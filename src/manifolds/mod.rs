#![warn(missing_docs)]
//! Module for the supported parametric manifolds
//!
//! Each manifold is a 2-parameter surface embedded in 3D space, defined by closed-form
//! coordinate functions over a manifold-specific parameter domain. The concrete surfaces are
//! used by the [`ManifoldSampler`](crate::sampler::ManifoldSampler) which draws uniform
//! parameter values and perturbs the evaluated coordinates with Gaussian noise.
//!
//! ## Example
//!
//! ```rust
//! use manta::manifolds::{ParametricSurface, Sphere};
//!
//! let sphere = Sphere::new(2.0).unwrap();
//! let point = sphere.evaluate(0.0, 0.0);
//! assert!((point.z - 2.0).abs() < 1e-12);
//! ```
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::{MantaError, MntResult};

mod klein_bottle;
mod mobius;
mod sphere;
mod torus;

pub use klein_bottle::KleinBottle;
pub use mobius::MobiusBand;
pub use sphere::Sphere;
pub use torus::Torus;

/// Trait for parametric surfaces embedded in 3D space
pub trait ParametricSurface {
    /// Half-open domains of the two surface parameters.
    ///
    /// Uniform sampling over these ranges covers the whole surface. The domains are not
    /// area-uniform on the manifold; parameter-domain sampling is part of the contract.
    fn parameter_domain(&self) -> (Range<f64>, Range<f64>);

    /// Evaluate the closed-form coordinate functions at the parameter values `(t, s)`.
    fn evaluate(&self, t: f64, s: f64) -> Point3<f64>;
}

/// Closed set of manifold variants supported by the sampler
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ManifoldType {
    /// sphere with a configurable radius
    Sphere(Sphere),
    /// ring torus with configurable major and minor radii
    Torus(Torus),
    /// Möbius band of unit radius and unit width
    MobiusBand(MobiusBand),
    /// Klein bottle immersed in 3D space
    KleinBottle(KleinBottle),
}
impl ManifoldType {
    /// Resolve a [`ManifoldType`] with default shape parameters from its lowercase name.
    ///
    /// Supported names are `sphere`, `torus`, `mobius` and `klein_bottle`.
    ///
    /// # Errors
    ///
    /// This function will return an error if an unsupported manifold name is given.
    pub fn from_name(name: &str) -> MntResult<Self> {
        match name {
            "sphere" => Ok(Sphere::default().into()),
            "torus" => Ok(Torus::default().into()),
            "mobius" => Ok(MobiusBand::default().into()),
            "klein_bottle" => Ok(KleinBottle::default().into()),
            _ => Err(MantaError::ManifoldSelector(format!(
                "unsupported manifold '{name}'. Must be one of: sphere, torus, mobius, klein_bottle"
            ))),
        }
    }
}
impl Default for ManifoldType {
    fn default() -> Self {
        Self::Sphere(Sphere::default())
    }
}
impl ParametricSurface for ManifoldType {
    fn parameter_domain(&self) -> (Range<f64>, Range<f64>) {
        match self {
            Self::Sphere(m) => m.parameter_domain(),
            Self::Torus(m) => m.parameter_domain(),
            Self::MobiusBand(m) => m.parameter_domain(),
            Self::KleinBottle(m) => m.parameter_domain(),
        }
    }
    fn evaluate(&self, t: f64, s: f64) -> Point3<f64> {
        match self {
            Self::Sphere(m) => m.evaluate(t, s),
            Self::Torus(m) => m.evaluate(t, s),
            Self::MobiusBand(m) => m.evaluate(t, s),
            Self::KleinBottle(m) => m.evaluate(t, s),
        }
    }
}
