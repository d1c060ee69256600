//! This module contains the [`AxLims`] struct, which is used to define the axis limits of a
//! scatter plot.
use approx::{abs_diff_eq, abs_diff_ne};
use log::warn;

/// Struct that holds the maximum and minimum values of an axis
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct AxLims {
    /// minimum value of the axis
    pub min: f64,
    /// maximum value of the axis
    pub max: f64,
}

impl AxLims {
    /// Creates a new [`AxLims`] struct
    ///
    /// # Attributes
    /// - `min`: minimum value of the ax limit
    /// - `max`: maximum value of the ax limit
    ///
    /// # Returns
    /// This function returns Some([`AxLims`]) or None if the chosen minimum or maximum value is
    /// NaN or infinite or if min >= max
    #[must_use]
    pub fn new(min: f64, max: f64) -> Option<Self> {
        let axlim = Self { min, max };
        if axlim.check_validity() {
            Some(axlim)
        } else {
            warn!("Invalid axis limits. Must be finite and min < max. Use default");
            None
        }
    }

    /// Creates a new [`AxLims`] struct from the provided values, filtering out all non-finite
    /// entries.
    ///
    /// A degenerate range (all finite values equal, e.g. for a single-point cloud) is widened
    /// symmetrically by 0.5 in both directions so that the limits stay usable for plotting.
    ///
    /// # Returns
    /// This function returns Some([`AxLims`]) or None if none of the values is finite
    pub fn finite_from_values<I: Iterator<Item = f64>>(values: I) -> Option<Self> {
        let (min, max) = values
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if !min.is_finite() || !max.is_finite() {
            warn!("No finite values to derive axis limits from! AxLimit is set to None!");
            return None;
        }
        if abs_diff_eq!(min, max) {
            return Some(Self {
                min: min - 0.5,
                max: max + 0.5,
            });
        }
        Some(Self { min, max })
    }

    /// Checks the validity of the delivered min and max values and returns true if it is valid,
    /// false otherwise
    #[must_use]
    pub fn check_validity(self) -> bool {
        self.max.is_finite()
            && self.min.is_finite()
            && abs_diff_ne!(self.max, self.min)
            && self.max > self.min
    }

    /// Shifts the minimum and the maximum to lower and higher values, respectively.
    /// The range expands by the `expansion_factor`, therefore, each limit is shifted by
    /// `range` * (`expansion_factor` - 1.) / 2.
    ///
    /// # Attributes
    /// - `expansion_factor`: relative extension of the range. must be positive, non-zero, not
    ///   NaN and finite
    pub fn expand_lim_range_by_factor(&mut self, expansion_factor: f64) {
        if expansion_factor.is_normal() && expansion_factor.is_sign_positive() {
            let range = self.max - self.min;
            self.max += range * (expansion_factor - 1.) / 2.;
            self.min -= range * (expansion_factor - 1.) / 2.;
        } else {
            warn!("Cannot expand ax limits! Expansion factor must be normal and positive!");
        }
    }
}
