//! # Libraries Module
//!
//! Catalogue types consumed by simulation pipelines.
//!
//! ## Key Components
//!
//! - [`structure`] - The structure/orientation registry
//!   ([`structure::StructureLibrary`]) that pairs each phase identifier with an
//!   opaque structure handle and its orientation set
//!
//! ## Usage
//!
//! A catalogue is built once, either directly from explicit orientation lists
//! or from crystal-system tags expanded through an
//! [`crate::core::generators::OrientationGenerator`], and is then read-only
//! for the lifetime of the simulation run.

pub mod structure;
