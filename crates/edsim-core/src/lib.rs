//! # edsim Core Library
//!
//! In-memory catalogue structures for electron-diffraction simulation pipelines
//! that iterate "for each structure, for each orientation, compute a pattern".
//!
//! ## Architectural Philosophy
//!
//! The library deliberately owns only the catalogue layer and treats everything
//! around it as a collaborator behind a narrow seam:
//!
//! - **[`core::models`]: The Vocabulary.** Euler-angle orientations in the intrinsic
//!   Z-X-Z convention, the tagged [`core::models::orientation::OrientationSet`]
//!   representation, and the crystal-system and sampling-mode tags that
//!   parametrize grid generation.
//!
//! - **[`core::generators`]: The Seam.** The [`core::generators::OrientationGenerator`]
//!   trait through which an external stereographic-grid sampler is consumed.
//!   The sampling algorithm itself lives outside this crate.
//!
//! - **[`core::libraries`]: The Catalogue.** The
//!   [`core::libraries::structure::StructureLibrary`] registry associating phase
//!   identifiers with opaque structure handles and their orientation sets, with
//!   validated construction and size accounting.

pub mod core;
