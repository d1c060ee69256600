#![warn(missing_docs)]
//! Trait for rendering a point set as a 3D scatter plot.
//!
//! This is the visualization collaborator of the sampling core: it consumes the `[n × 3]`
//! matrix representation of a [`PointCloud`] (or one matrix per cloud of a
//! [`PointCloudBatch`]) and renders it to an image file. Purely side-effecting; nothing flows
//! back into the sampling pipeline.
use crate::error::{MantaError, MntResult};
use crate::point_cloud::{PointCloud, PointCloudBatch};
use itertools::izip;
use log::warn;
use nalgebra::MatrixXx3;
use plotters::{
    backend::DrawingBackend,
    chart::ChartBuilder,
    coord::{ranged3d::ProjectionMatrixBuilder, Shift},
    element::Circle,
    prelude::{BitMapBackend, DrawingArea, IntoDrawingArea, SVGBackend},
    style::{RGBAColor, ShapeStyle, WHITE},
};
use std::f64::consts::{FRAC_PI_4, FRAC_PI_6};
use std::ffi::OsStr;
use std::path::Path;

mod ax_lims;
pub use ax_lims::AxLims;

/// Enum to describe which type of plotting backend should be used
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PltBackEnd {
    /// `BitMapBackend`. Used to create .png, .bmp, .jpg
    #[default]
    Bitmap,
    /// `SVGBackend`. Used to create .svg
    SVG,
}
impl PltBackEnd {
    fn check_file_ext_compatibility(&self, f_path: &Path) -> MntResult<()> {
        let extension = f_path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .unwrap_or_default();
        match self {
            Self::Bitmap => {
                if matches!(extension.as_str(), "png" | "bmp" | "jpg" | "jpeg") {
                    Ok(())
                } else {
                    Err(MantaError::Plot(
                        "Incompatible file extension for DrawingBackend: BitMapBackend! Choose \".png\", \".bmp\" or \".jpg\" for this type of backend!"
                            .into(),
                    ))
                }
            }
            Self::SVG => {
                if extension == "svg" {
                    Ok(())
                } else {
                    Err(MantaError::Plot(
                        "Incompatible file extension for DrawingBackend: SVGBackend! Choose \".svg\" for this type of backend!"
                            .into(),
                    ))
                }
            }
        }
    }
}

/// Parameters of a 3D scatter plot
#[derive(Debug, Clone, PartialEq)]
pub struct PlotParameters {
    fig_size: (u32, u32),
    marker_size: i32,
    expansion_factor: f64,
    pitch: f64,
    yaw: f64,
    scale: f64,
}
impl PlotParameters {
    /// Returns the figure size in pixels: (width, height).
    #[must_use]
    pub fn fig_size(&self) -> (u32, u32) {
        self.fig_size
    }

    /// Returns the marker radius in pixels.
    #[must_use]
    pub fn marker_size(&self) -> i32 {
        self.marker_size
    }

    /// Returns the factor by which the axis ranges are expanded beyond the data bounds.
    #[must_use]
    pub fn expansion_factor(&self) -> f64 {
        self.expansion_factor
    }

    /// Returns the pitch angle of the 3D projection in radians.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Returns the yaw angle of the 3D projection in radians.
    #[must_use]
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Returns the zoom scale of the 3D projection.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the figure size in pixels: (width, height).
    pub fn set_fig_size(&mut self, fig_size: (u32, u32)) {
        self.fig_size = fig_size;
    }

    /// Sets the marker radius in pixels.
    pub fn set_marker_size(&mut self, marker_size: i32) {
        self.marker_size = marker_size;
    }

    /// Sets the factor by which the axis ranges are expanded beyond the data bounds.
    pub fn set_expansion_factor(&mut self, expansion_factor: f64) {
        self.expansion_factor = expansion_factor;
    }

    /// Sets the pitch angle of the 3D projection in radians.
    pub fn set_pitch(&mut self, pitch: f64) {
        self.pitch = pitch;
    }

    /// Sets the yaw angle of the 3D projection in radians.
    pub fn set_yaw(&mut self, yaw: f64) {
        self.yaw = yaw;
    }

    /// Sets the zoom scale of the 3D projection.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }
}
impl Default for PlotParameters {
    fn default() -> Self {
        Self {
            fig_size: (800, 800),
            marker_size: 2,
            expansion_factor: 1.1,
            pitch: FRAC_PI_6,
            yaw: FRAC_PI_4,
            scale: 0.7,
        }
    }
}

/// Trait for adding the possibility to render a point set as a 3D scatter plot
pub trait Plottable {
    /// Returns the plot series of this point set, one `[n × 3]` xyz matrix per series.
    fn plot_series(&self) -> Vec<MatrixXx3<f64>>;

    /// Render this point set as a 3D scatter plot into the given file.
    ///
    /// Each series is drawn with its own color from a fixed categorical palette.
    ///
    /// # Errors
    ///
    /// This method will return an error if
    ///   - the file extension does not match the chosen backend.
    ///   - the plot cannot be drawn or the file cannot be written.
    fn to_plot(
        &self,
        f_path: &Path,
        params: &PlotParameters,
        backend: PltBackEnd,
    ) -> MntResult<()> {
        backend.check_file_ext_compatibility(f_path)?;
        let plt_series = self.plot_series();
        match backend {
            PltBackEnd::Bitmap => {
                let root = BitMapBackend::new(f_path, params.fig_size()).into_drawing_area();
                draw_scatter_3d(&root, params, &plt_series)
            }
            PltBackEnd::SVG => {
                let root = SVGBackend::new(f_path, params.fig_size()).into_drawing_area();
                draw_scatter_3d(&root, params, &plt_series)
            }
        }
    }
}

impl Plottable for PointCloud {
    fn plot_series(&self) -> Vec<MatrixXx3<f64>> {
        vec![self.to_matrix()]
    }
}
impl Plottable for PointCloudBatch {
    fn plot_series(&self) -> Vec<MatrixXx3<f64>> {
        self.iter().map(PointCloud::to_matrix).collect()
    }
}

fn axis_lims(plt_series: &[MatrixXx3<f64>], col: usize, expansion_factor: f64) -> AxLims {
    let values = plt_series
        .iter()
        .flat_map(|xyz_dat| (0..xyz_dat.nrows()).map(move |row| xyz_dat[(row, col)]));
    AxLims::finite_from_values(values).map_or(AxLims { min: -1.0, max: 1.0 }, |mut lims| {
        lims.expand_lim_range_by_factor(expansion_factor);
        lims
    })
}

fn draw_scatter_3d<B: DrawingBackend>(
    root: &DrawingArea<B, Shift>,
    params: &PlotParameters,
    plt_series: &[MatrixXx3<f64>],
) -> MntResult<()> {
    root.fill(&WHITE)
        .map_err(|e| MantaError::Plot(format!("cannot fill drawing area: {e}")))?;
    let nr_of_points: usize = plt_series.iter().map(MatrixXx3::nrows).sum();
    if nr_of_points == 0 {
        warn!("No plot series defined! Cannot create plot!");
        root.present()
            .map_err(|e| MantaError::Plot(format!("cannot write plot file: {e}")))?;
        return Ok(());
    }
    let x_lims = axis_lims(plt_series, 0, params.expansion_factor());
    let y_lims = axis_lims(plt_series, 1, params.expansion_factor());
    let z_lims = axis_lims(plt_series, 2, params.expansion_factor());

    // plotters draws the chart y axis vertically; map data z onto it
    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .set_all_label_area_size(40)
        .build_cartesian_3d(
            x_lims.min..x_lims.max,
            z_lims.min..z_lims.max,
            y_lims.min..y_lims.max,
        )
        .map_err(|e| MantaError::Plot(format!("cannot build 3d chart: {e}")))?;

    chart.with_projection(|mut pb: ProjectionMatrixBuilder| {
        pb.pitch = params.pitch();
        pb.yaw = params.yaw();
        pb.scale = params.scale();
        pb.into_matrix()
    });
    chart
        .configure_axes()
        .draw()
        .map_err(|e| MantaError::Plot(format!("cannot draw chart axes: {e}")))?;

    for (series_idx, xyz_dat) in plt_series.iter().enumerate() {
        let c = colorous::CATEGORY10[series_idx % colorous::CATEGORY10.len()];
        let marker_color = RGBAColor(c.r, c.g, c.b, 0.8);
        let col_x = xyz_dat.column(0);
        let col_y = xyz_dat.column(1);
        let col_z = xyz_dat.column(2);
        chart
            .draw_series(
                izip!(col_x.iter(), col_y.iter(), col_z.iter())
                .map(|xyz| {
                    Circle::new(
                        (*xyz.0, *xyz.2, *xyz.1),
                        params.marker_size(),
                        Into::<ShapeStyle>::into(marker_color).filled(),
                    )
                }),
            )
            .map_err(|e| MantaError::Plot(format!("cannot draw plot series: {e}")))?;
    }
    root.present()
        .map_err(|e| MantaError::Plot(format!("cannot write plot file: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sampler::{ManifoldSampler, PointsPerCloud, SamplerConfig};
    use assert_matches::assert_matches;

    fn test_batch() -> PointCloudBatch {
        let config = SamplerConfig::new(2, PointsPerCloud::Fixed(25), 0.05).unwrap();
        ManifoldSampler::new(config).sphere(1.0).unwrap()
    }
    #[test]
    fn file_ext_compatibility() {
        assert!(PltBackEnd::Bitmap
            .check_file_ext_compatibility(Path::new("cloud.png"))
            .is_ok());
        assert!(PltBackEnd::Bitmap
            .check_file_ext_compatibility(Path::new("cloud.jpg"))
            .is_ok());
        assert!(PltBackEnd::SVG
            .check_file_ext_compatibility(Path::new("cloud.svg"))
            .is_ok());
        assert_matches!(
            PltBackEnd::Bitmap.check_file_ext_compatibility(Path::new("cloud.svg")),
            Err(MantaError::Plot(_))
        );
        assert_matches!(
            PltBackEnd::SVG.check_file_ext_compatibility(Path::new("cloud.png")),
            Err(MantaError::Plot(_))
        );
        assert_matches!(
            PltBackEnd::SVG.check_file_ext_compatibility(Path::new("cloud")),
            Err(MantaError::Plot(_))
        );
    }
    #[test]
    fn wrong_extension_is_rejected_before_writing() {
        let batch = test_batch();
        assert_matches!(
            batch.to_plot(
                Path::new("cloud.txt"),
                &PlotParameters::default(),
                PltBackEnd::Bitmap
            ),
            Err(MantaError::Plot(_))
        );
    }
    #[test]
    fn plot_series_shapes() {
        let batch = test_batch();
        let series = batch.plot_series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].nrows(), 25);
        assert_eq!(batch[0].plot_series().len(), 1);
    }
    #[test]
    fn to_plot_bitmap() {
        let dir = tempfile::tempdir().unwrap();
        let f_path = dir.path().join("cloud.png");
        test_batch()[0]
            .to_plot(&f_path, &PlotParameters::default(), PltBackEnd::Bitmap)
            .unwrap();
        assert!(f_path.metadata().unwrap().len() > 0);
    }
    #[test]
    fn to_plot_svg() {
        let dir = tempfile::tempdir().unwrap();
        let f_path = dir.path().join("batch.svg");
        test_batch()
            .to_plot(&f_path, &PlotParameters::default(), PltBackEnd::SVG)
            .unwrap();
        assert!(f_path.metadata().unwrap().len() > 0);
    }
    #[test]
    fn to_plot_empty_cloud() {
        let dir = tempfile::tempdir().unwrap();
        let f_path = dir.path().join("empty.svg");
        PointCloud::default()
            .to_plot(&f_path, &PlotParameters::default(), PltBackEnd::SVG)
            .unwrap();
    }
    #[test]
    fn axis_lims_fallback() {
        let lims = axis_lims(&[], 0, 1.1);
        assert!((lims.min, lims.max) == (-1.0, 1.0));
    }
}
