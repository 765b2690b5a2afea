//! # Core Models Module
//!
//! Fundamental data types shared across the catalogue layer.
//!
//! ## Key Components
//!
//! - [`orientation`] - Euler-angle orientations and the tagged per-entry
//!   orientation-set representation
//! - [`crystal`] - Crystal-system and equal-sampling tags that parametrize
//!   orientation-grid generation

pub mod crystal;
pub mod orientation;
