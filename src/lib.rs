//! This is the documentation for the **MANTA** software package. **MANTA** stands for
//! **Man**ifold **T**o **A**rray.
//!
//! MANTA generates labeled synthetic 3D point-cloud datasets by sampling points from the
//! surfaces of standard parametric manifolds (sphere, torus, Möbius band, Klein bottle),
//! perturbed by additive Gaussian noise. The generated clouds are meant as test inputs for
//! topological data analysis and point-cloud learning pipelines; a small plotting layer renders
//! them as 3D scatter plots.
//!
//! ## Example
//!
//! ```rust
//! use manta::{ManifoldSampler, PointsPerCloud, SamplerConfig};
//!
//! let config = SamplerConfig::new(10, PointsPerCloud::Fixed(1500), 0.05).unwrap();
//! let sampler = ManifoldSampler::new(config);
//! let batch = sampler.torus(2.0, 1.0).unwrap();
//! assert_eq!(batch.len(), 10);
//! // every cloud is an ordered sequence of 3D points, also available as an [n × 3] matrix
//! assert_eq!(batch[0].to_matrix().nrows(), 1500);
//! ```
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod manifolds;
pub mod plottable;
pub mod point_cloud;
pub mod sampler;

pub use error::{MantaError, MntResult};
pub use manifolds::{KleinBottle, ManifoldType, MobiusBand, ParametricSurface, Sphere, Torus};
pub use plottable::{PlotParameters, Plottable, PltBackEnd};
pub use point_cloud::{PointCloud, PointCloudBatch};
pub use sampler::{ManifoldSampler, PointsPerCloud, SamplerConfig};
