//! # Core Module
//!
//! This module provides the building blocks for assembling simulation catalogues:
//! the orientation and crystal-system vocabulary, the generator seam through which
//! orientation grids are obtained, and the structure library itself.
//!
//! ## Architecture
//!
//! - **Data Vocabulary** ([`models`]) - Orientations, orientation sets, crystal
//!   systems, and sampling modes
//! - **Grid Generation Seam** ([`generators`]) - The capability trait for external
//!   stereographic-grid samplers
//! - **Catalogues** ([`libraries`]) - The structure/orientation registry consumed
//!   by simulation pipelines

pub mod generators;
pub mod libraries;
pub mod models;
