#![warn(missing_docs)]
//! Point cloud data structures
//!
//! A [`PointCloud`] is an ordered sequence of 3D points approximating a manifold surface. A
//! [`PointCloudBatch`] is an ordered sequence of [`PointCloud`]s and is the sole output type of
//! all generation operations of a [`ManifoldSampler`](crate::sampler::ManifoldSampler).
use nalgebra::{DVector, MatrixXx3, Point3};
use serde::{Deserialize, Serialize};
use std::ops::Index;
use std::slice::Iter;

/// Ordered sequence of 3D points.
///
/// The points carry no identity beyond their index and no relation to each other. After
/// generation a [`PointCloud`] is never mutated; ownership transfers entirely to the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointCloud {
    points: Vec<Point3<f64>>,
}
impl PointCloud {
    /// Create a new [`PointCloud`] from the given points, preserving their order.
    #[must_use]
    pub fn new(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }

    /// Returns the number of points in this [`PointCloud`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if this [`PointCloud`] contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns an iterator over the points in generation order.
    pub fn iter(&self) -> Iter<'_, Point3<f64>> {
        self.points.iter()
    }

    /// Returns the points of this [`PointCloud`] as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Return this [`PointCloud`] as an `[n × 3]` matrix (one row per point, columns x, y, z).
    ///
    /// This is the shape consumed by the visualization collaborator (see
    /// [`Plottable`](crate::plottable::Plottable)) and by downstream array-based pipelines.
    #[must_use]
    pub fn to_matrix(&self) -> MatrixXx3<f64> {
        let x = DVector::from_iterator(self.len(), self.iter().map(|p| p.x));
        let y = DVector::from_iterator(self.len(), self.iter().map(|p| p.y));
        let z = DVector::from_iterator(self.len(), self.iter().map(|p| p.z));
        MatrixXx3::from_columns(&[x, y, z])
    }
}
impl From<Vec<Point3<f64>>> for PointCloud {
    fn from(points: Vec<Point3<f64>>) -> Self {
        Self::new(points)
    }
}
impl Index<usize> for PointCloud {
    type Output = Point3<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}
impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point3<f64>;
    type IntoIter = Iter<'a, Point3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
impl IntoIterator for PointCloud {
    type Item = Point3<f64>;
    type IntoIter = std::vec::IntoIter<Point3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

/// Ordered sequence of [`PointCloud`]s, in generation order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointCloudBatch {
    clouds: Vec<PointCloud>,
}
impl PointCloudBatch {
    /// Create a new [`PointCloudBatch`] from the given clouds, preserving their order.
    #[must_use]
    pub fn new(clouds: Vec<PointCloud>) -> Self {
        Self { clouds }
    }

    /// Returns the number of clouds in this [`PointCloudBatch`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    /// Returns `true` if this [`PointCloudBatch`] contains no clouds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }

    /// Returns an iterator over the clouds in generation order.
    pub fn iter(&self) -> Iter<'_, PointCloud> {
        self.clouds.iter()
    }

    /// Returns the clouds of this [`PointCloudBatch`] as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[PointCloud] {
        &self.clouds
    }
}
impl Index<usize> for PointCloudBatch {
    type Output = PointCloud;

    fn index(&self, index: usize) -> &Self::Output {
        &self.clouds[index]
    }
}
impl<'a> IntoIterator for &'a PointCloudBatch {
    type Item = &'a PointCloud;
    type IntoIter = Iter<'a, PointCloud>;

    fn into_iter(self) -> Self::IntoIter {
        self.clouds.iter()
    }
}
impl IntoIterator for PointCloudBatch {
    type Item = PointCloud;
    type IntoIter = std::vec::IntoIter<PointCloud>;

    fn into_iter(self) -> Self::IntoIter {
        self.clouds.into_iter()
    }
}
