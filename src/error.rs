#![warn(missing_docs)]
//! Manta specific error structures
use std::{error::Error, fmt::Display};

/// Manta application specific Result type
pub type MntResult<T> = std::result::Result<T, MantaError>;

/// Errors that can be returned by various MANTA functions.
#[derive(Debug, PartialEq, Eq)]
pub enum MantaError {
    /// invalid sampler configuration (e.g. negative noise sigma, empty cloud size range)
    Configuration(String),
    /// invalid shape parameters of a concrete manifold (e.g. non-positive radius)
    Manifold(String),
    /// an unsupported manifold was requested by name
    ManifoldSelector(String),
    /// errors while rendering a point set to a plot file
    Plot(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for MantaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(m) => {
                write!(f, "Configuration:{m}")
            }
            Self::Manifold(m) => {
                write!(f, "Manifold:{m}")
            }
            Self::ManifoldSelector(m) => {
                write!(f, "ManifoldSelector:{m}")
            }
            Self::Plot(m) => {
                write!(f, "Plot:{m}")
            }
            Self::Other(m) => write!(f, "Manta Error:Other:{m}"),
        }
    }
}
impl Error for MantaError {}

impl std::convert::From<String> for MantaError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
