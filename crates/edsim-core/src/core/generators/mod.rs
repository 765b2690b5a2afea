//! # Generators Module
//!
//! The seam through which orientation grids enter the catalogue layer.
//!
//! The sampling algorithm itself (stereographic projection of the
//! symmetry-reduced zone, angular spacing, pole handling) is an external
//! collaborator; this crate only defines the capability trait it is consumed
//! through and the errors it may surface.

use crate::core::models::crystal::{CrystalSystem, EqualSampling};
use crate::core::models::orientation::Orientation;
use thiserror::Error;

/// Represents errors surfaced by an orientation-grid generator.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("Angular resolution must be positive, got {0} degrees")]
    InvalidResolution(f64),

    #[error("No grid sampling is implemented for the {0} crystal system")]
    UnsupportedSystem(CrystalSystem),

    #[error("Grid generation failed: {0}")]
    Generation(String),
}

/// A stereographic orientation-grid generator.
///
/// Implementations sample the symmetry-reduced stereographic region of a
/// crystal system at a given angular resolution and return the samples as
/// rzxz Euler triplets in degrees, in a stable order.
pub trait OrientationGenerator {
    /// Generates the grid for `system` at `resolution` degrees.
    ///
    /// The `equal` mode selects whether samples are spaced by equal angle or
    /// equal solid-angle area. Failures are reported as [`GridError`] and are
    /// passed through to callers of the catalogue constructors unmodified.
    fn stereographic_grid(
        &self,
        system: CrystalSystem,
        resolution: f64,
        equal: EqualSampling,
    ) -> Result<Vec<Orientation>, GridError>;
}
