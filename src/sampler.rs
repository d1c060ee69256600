#![warn(missing_docs)]
//! The manifold sampling engine
//!
//! A [`ManifoldSampler`] turns a manifold's parametric equations plus an additive Gaussian noise
//! model into a batch of point-cloud samples. Each generation call draws uniform values in the
//! manifold's 2D parameter domain, evaluates the closed-form coordinates and perturbs each
//! coordinate with independent `Normal(0, σ)` noise.
//!
//! ## Example
//!
//! ```rust
//! use manta::sampler::{ManifoldSampler, PointsPerCloud, SamplerConfig};
//!
//! let config = SamplerConfig::new(2, PointsPerCloud::Fixed(100), 0.05).unwrap();
//! let sampler = ManifoldSampler::new(config);
//! let batch = sampler.sphere(1.0).unwrap();
//! assert_eq!(batch.len(), 2);
//! assert_eq!(batch[0].len(), 100);
//! ```
use std::cell::OnceCell;

use nalgebra::point;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{MantaError, MntResult};
use crate::manifolds::{KleinBottle, ManifoldType, MobiusBand, ParametricSurface, Sphere, Torus};
use crate::point_cloud::{PointCloud, PointCloudBatch};

/// Points-per-cloud policy of a [`SamplerConfig`]
///
/// [`RandomRange`](Self::RandomRange) replaces the magic `"random"` sentinel of dynamically
/// typed dataset generators: the cloud size is drawn once per sampler instance, uniformly from
/// the half-open range, and reused for every cloud generated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointsPerCloud {
    /// every cloud has exactly the given number of points
    Fixed(usize),
    /// the cloud size is drawn uniformly from `[lo, hi)` on first use and then kept
    RandomRange(usize, usize),
}
impl Default for PointsPerCloud {
    fn default() -> Self {
        Self::RandomRange(1000, 2000)
    }
}

/// Configuration of a [`ManifoldSampler`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    sample_count: usize,
    points_per_cloud: PointsPerCloud,
    noise_sigma: f64,
}
impl SamplerConfig {
    /// Create a new [`SamplerConfig`].
    ///
    /// # Attributes
    /// - `sample_count`: number of independent point clouds per generation call. Zero is legal
    ///   and yields an empty batch.
    /// - `points_per_cloud`: fixed cloud size or a range to draw it from once (see
    ///   [`PointsPerCloud`]).
    /// - `noise_sigma`: standard deviation of the additive Gaussian noise. Zero is legal and
    ///   yields noiseless clouds lying exactly on the manifold surface.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - `noise_sigma` is negative or not finite.
    ///   - a fixed `points_per_cloud` is zero.
    ///   - a random `points_per_cloud` range is empty or starts at zero.
    pub fn new(
        sample_count: usize,
        points_per_cloud: PointsPerCloud,
        noise_sigma: f64,
    ) -> MntResult<Self> {
        if !noise_sigma.is_finite() || noise_sigma.is_sign_negative() {
            return Err(MantaError::Configuration(
                "noise sigma must be >= 0.0 and finite".into(),
            ));
        }
        match points_per_cloud {
            PointsPerCloud::Fixed(n) => {
                if n == 0 {
                    return Err(MantaError::Configuration(
                        "points per cloud must be >= 1".into(),
                    ));
                }
            }
            PointsPerCloud::RandomRange(lo, hi) => {
                if lo == 0 || lo >= hi {
                    return Err(MantaError::Configuration(
                        "points per cloud range must satisfy 1 <= lo < hi".into(),
                    ));
                }
            }
        }
        Ok(Self {
            sample_count,
            points_per_cloud,
            noise_sigma,
        })
    }

    /// Returns the number of clouds produced per generation call.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Returns the points-per-cloud policy.
    #[must_use]
    pub fn points_per_cloud(&self) -> PointsPerCloud {
        self.points_per_cloud
    }

    /// Returns the standard deviation of the additive Gaussian noise.
    #[must_use]
    pub fn noise_sigma(&self) -> f64 {
        self.noise_sigma
    }
}
impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            sample_count: 1000,
            points_per_cloud: PointsPerCloud::default(),
            noise_sigma: 0.05,
        }
    }
}

/// Generator of [`PointCloudBatch`]es sampled from parametric manifolds
///
/// The sampler is immutable after construction except for the one-time resolution of a
/// [`PointsPerCloud::RandomRange`] cloud size, which happens lazily on the first generation
/// call and is then shared by all later calls, including calls for a different manifold. The
/// resolved-once cell makes the sampler single-writer; it is not thread-safe and cannot be
/// shared across threads (generation itself fans out internally).
#[derive(Debug, Default)]
pub struct ManifoldSampler {
    config: SamplerConfig,
    resolved_points: OnceCell<usize>,
}
impl ManifoldSampler {
    /// Create a new [`ManifoldSampler`] with the given configuration.
    #[must_use]
    pub fn new(config: SamplerConfig) -> Self {
        Self {
            config,
            resolved_points: OnceCell::new(),
        }
    }

    /// Returns the configuration of this [`ManifoldSampler`].
    #[must_use]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Returns the resolved number of points per cloud.
    ///
    /// For a [`PointsPerCloud::RandomRange`] policy the first call draws the cloud size
    /// uniformly from the range; every later call returns the same value.
    #[must_use]
    pub fn nr_of_points(&self) -> usize {
        *self
            .resolved_points
            .get_or_init(|| match self.config.points_per_cloud {
                PointsPerCloud::Fixed(n) => n,
                PointsPerCloud::RandomRange(lo, hi) => rand::rng().random_range(lo..hi),
            })
    }

    /// Generate a batch of point clouds sampled from the given manifold.
    ///
    /// This is the shared generation operation behind all per-manifold methods. It produces
    /// `sample_count` clouds of the resolved cloud size, in generation order. The clouds are
    /// generated in parallel; batch order is nevertheless deterministic and the noise streams
    /// of the workers are independently seeded.
    ///
    /// # Errors
    ///
    /// This function will return an error if the noise distribution cannot be constructed from
    /// the configured sigma. This cannot happen for a validated [`SamplerConfig`].
    pub fn generate(&self, manifold: &ManifoldType) -> MntResult<PointCloudBatch> {
        // resolve once, strictly before any parallel work
        let nr_of_points = self.nr_of_points();
        let noise = Normal::new(0.0, self.config.noise_sigma)
            .map_err(|e| MantaError::Configuration(format!("invalid noise sigma: {e}")))?;
        let clouds = (0..self.config.sample_count)
            .into_par_iter()
            .map(|_| Self::sample_cloud(manifold, nr_of_points, &noise))
            .collect();
        Ok(PointCloudBatch::new(clouds))
    }

    /// Generate a batch of point clouds sampled from a sphere with the given radius.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given `radius` is zero, negative or not finite.
    pub fn sphere(&self, radius: f64) -> MntResult<PointCloudBatch> {
        self.generate(&Sphere::new(radius)?.into())
    }

    /// Generate a batch of point clouds sampled from a ring torus with the given radii.
    ///
    /// # Errors
    ///
    /// This function will return an error if one of the given radii is zero, negative or not
    /// finite.
    pub fn torus(&self, major_radius: f64, minor_radius: f64) -> MntResult<PointCloudBatch> {
        self.generate(&Torus::new(major_radius, minor_radius)?.into())
    }

    /// Generate a batch of point clouds sampled from the Möbius band.
    ///
    /// # Errors
    ///
    /// This function will return an error if the noise distribution cannot be constructed (see
    /// [`generate`](Self::generate)).
    pub fn mobius(&self) -> MntResult<PointCloudBatch> {
        self.generate(&MobiusBand.into())
    }

    /// Generate a batch of point clouds sampled from the Klein bottle.
    ///
    /// # Errors
    ///
    /// This function will return an error if the noise distribution cannot be constructed (see
    /// [`generate`](Self::generate)).
    pub fn klein_bottle(&self) -> MntResult<PointCloudBatch> {
        self.generate(&KleinBottle.into())
    }

    /// Generate a batch of point clouds from a manifold selected by its lowercase name, with
    /// default shape parameters.
    ///
    /// # Errors
    ///
    /// This function will return an error if an unsupported manifold name is given.
    pub fn generate_named(&self, name: &str) -> MntResult<PointCloudBatch> {
        self.generate(&ManifoldType::from_name(name)?)
    }

    fn sample_cloud(
        manifold: &ManifoldType,
        nr_of_points: usize,
        noise: &Normal<f64>,
    ) -> PointCloud {
        let mut rng = rand::rng();
        let (t_domain, s_domain) = manifold.parameter_domain();
        let mut points = Vec::with_capacity(nr_of_points);
        for _ in 0..nr_of_points {
            let t = rng.random_range(t_domain.clone());
            let s = rng.random_range(s_domain.clone());
            let clean = manifold.evaluate(t, s);
            points.push(point![
                clean.x + noise.sample(&mut rng),
                clean.y + noise.sample(&mut rng),
                clean.z + noise.sample(&mut rng)
            ]);
        }
        PointCloud::new(points)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn noiseless(sample_count: usize, points: usize) -> ManifoldSampler {
        ManifoldSampler::new(
            SamplerConfig::new(sample_count, PointsPerCloud::Fixed(points), 0.0).unwrap(),
        )
    }
    #[test]
    fn config_new_wrong() {
        assert_matches!(
            SamplerConfig::new(1, PointsPerCloud::Fixed(10), -0.1),
            Err(MantaError::Configuration(_))
        );
        assert_matches!(
            SamplerConfig::new(1, PointsPerCloud::Fixed(10), f64::NAN),
            Err(MantaError::Configuration(_))
        );
        assert_matches!(
            SamplerConfig::new(1, PointsPerCloud::Fixed(10), f64::INFINITY),
            Err(MantaError::Configuration(_))
        );
        assert_matches!(
            SamplerConfig::new(1, PointsPerCloud::Fixed(0), 0.05),
            Err(MantaError::Configuration(_))
        );
        assert_matches!(
            SamplerConfig::new(1, PointsPerCloud::RandomRange(0, 10), 0.05),
            Err(MantaError::Configuration(_))
        );
        assert_matches!(
            SamplerConfig::new(1, PointsPerCloud::RandomRange(10, 10), 0.05),
            Err(MantaError::Configuration(_))
        );
        assert_matches!(
            SamplerConfig::new(1, PointsPerCloud::RandomRange(20, 10), 0.05),
            Err(MantaError::Configuration(_))
        );
    }
    #[test]
    fn config_default() {
        let config = SamplerConfig::default();
        assert_eq!(config.sample_count(), 1000);
        assert_eq!(config.points_per_cloud(), PointsPerCloud::RandomRange(1000, 2000));
        assert_abs_diff_eq!(config.noise_sigma(), 0.05);
    }
    #[test]
    fn batch_shape() {
        let sampler = ManifoldSampler::new(
            SamplerConfig::new(3, PointsPerCloud::Fixed(10), 0.05).unwrap(),
        );
        let batch = sampler.sphere(1.0).unwrap();
        assert_eq!(batch.len(), 3);
        for cloud in &batch {
            assert_eq!(cloud.len(), 10);
            assert_eq!(cloud.to_matrix().ncols(), 3);
        }
    }
    #[test]
    fn empty_batch() {
        let batch = noiseless(0, 10).sphere(1.0).unwrap();
        assert!(batch.is_empty());
    }
    #[test]
    fn single_point_clouds() {
        let batch = noiseless(2, 1).klein_bottle().unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].len(), 1);
        assert_eq!(batch[1].len(), 1);
    }
    #[test]
    fn sphere_on_surface() {
        // 2 clouds x 5 points, sigma = 0, r = 2 => x² + y² + z² = 4
        let batch = noiseless(2, 5).sphere(2.0).unwrap();
        assert_eq!(batch.len(), 2);
        for cloud in &batch {
            assert_eq!(cloud.len(), 5);
            for p in cloud {
                assert_abs_diff_eq!(p.x * p.x + p.y * p.y + p.z * p.z, 4.0, epsilon = 1e-10);
            }
        }
    }
    #[test]
    fn torus_on_surface() {
        // 1 cloud x 3 points, sigma = 0, R = 2, r = 1
        let batch = noiseless(1, 3).torus(2.0, 1.0).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].len(), 3);
        for p in &batch[0] {
            let residual = (p.x.hypot(p.y) - 2.0).powi(2) + p.z * p.z;
            assert_abs_diff_eq!(residual, 1.0, epsilon = 1e-10);
        }
    }
    #[test]
    fn mobius_on_surface() {
        let batch = noiseless(1, 20).mobius().unwrap();
        for p in &batch[0] {
            assert!(p.z.abs() <= 0.5 + 1e-12);
            let radial = p.x.hypot(p.y);
            assert!((0.5 - 1e-12..=1.5 + 1e-12).contains(&radial));
        }
    }
    #[test]
    fn klein_bottle_bounded() {
        let batch = noiseless(1, 20).klein_bottle().unwrap();
        for p in &batch[0] {
            assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
            assert!(p.z.abs() <= 11.0 / 15.0 + 1e-12);
        }
    }
    #[test]
    fn noisy_clouds_distinct() {
        let sampler = ManifoldSampler::new(
            SamplerConfig::new(2, PointsPerCloud::Fixed(50), 0.1).unwrap(),
        );
        let batch = sampler.sphere(1.0).unwrap();
        assert_ne!(batch[0], batch[1]);
    }
    #[test]
    fn random_resolution_in_range() {
        let sampler = ManifoldSampler::new(
            SamplerConfig::new(1, PointsPerCloud::RandomRange(1000, 2000), 0.0).unwrap(),
        );
        let nr_of_points = sampler.nr_of_points();
        assert!((1000..2000).contains(&nr_of_points));
    }
    #[test]
    fn random_resolution_stable_across_calls() {
        let sampler = ManifoldSampler::new(
            SamplerConfig::new(2, PointsPerCloud::RandomRange(10, 20), 0.05).unwrap(),
        );
        let sphere_batch = sampler.sphere(1.0).unwrap();
        let torus_batch = sampler.torus(2.0, 1.0).unwrap();
        let nr_of_points = sampler.nr_of_points();
        for cloud in sphere_batch.iter().chain(torus_batch.iter()) {
            assert_eq!(cloud.len(), nr_of_points);
        }
    }
    #[test]
    fn random_resolution_minimal_range() {
        let sampler = ManifoldSampler::new(
            SamplerConfig::new(1, PointsPerCloud::RandomRange(5, 6), 0.0).unwrap(),
        );
        assert_eq!(sampler.nr_of_points(), 5);
    }
    #[test]
    fn generate_named() {
        let sampler = noiseless(1, 5);
        for name in ["sphere", "torus", "mobius", "klein_bottle"] {
            let batch = sampler.generate_named(name).unwrap();
            assert_eq!(batch.len(), 1);
            assert_eq!(batch[0].len(), 5);
        }
        assert_matches!(
            sampler.generate_named("projective_plane"),
            Err(MantaError::ManifoldSelector(_))
        );
    }
    #[test]
    fn invalid_shape_parameters() {
        let sampler = noiseless(1, 5);
        assert_matches!(sampler.sphere(-1.0), Err(MantaError::Manifold(_)));
        assert_matches!(sampler.torus(2.0, f64::NAN), Err(MantaError::Manifold(_)));
    }
    #[test]
    fn generate_default_manifold() {
        let sampler = noiseless(4, 7);
        let batch = sampler.generate(&ManifoldType::default()).unwrap();
        assert_eq!(batch.len(), 4);
        assert!(batch.iter().all(|cloud| cloud.len() == 7));
    }
}
