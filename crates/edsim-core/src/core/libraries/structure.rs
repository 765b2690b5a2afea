use crate::core::generators::{GridError, OrientationGenerator};
use crate::core::models::crystal::{CrystalSystem, EqualSampling};
use crate::core::models::orientation::OrientationSet;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::io::{self, Write};
use std::sync::Arc;
use thiserror::Error;

/// Represents errors that can occur while constructing a structure library.
///
/// Construction validates only that the three input sequences are aligned;
/// the contents of structures and orientation sets are never inspected.
/// Grid-generation failures from the external generator pass through
/// untranslated.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The identifier and structure sequences have different lengths.
    #[error("Number of identifiers ({identifiers}) and structures ({structures}) must be the same")]
    StructureCountMismatch {
        identifiers: usize,
        structures: usize,
    },
    /// The identifier and orientation sequences have different lengths.
    #[error(
        "Number of identifiers ({identifiers}) and orientations ({orientations}) must be the same"
    )]
    OrientationCountMismatch {
        identifiers: usize,
        orientations: usize,
    },
    /// A grid-generation failure, propagated unmodified from the generator.
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// A catalogue associating phase identifiers with atomic structures and their
/// orientation sets.
///
/// The library owns three parallel, index-aligned sequences — identifiers,
/// structure handles, orientation sets — plus a secondary index from
/// identifier to position for direct lookup. It is the input catalogue for
/// pipelines that iterate "for each structure, for each orientation".
///
/// Structures are opaque to this crate and are held as `Arc<S>`; the library
/// never inspects, copies, or mutates them. Identifiers may be any hashable,
/// displayable value (phase names, numeric ids).
///
/// Duplicate identifiers are accepted: the positional sequences keep every
/// entry, while the lookup index keeps only the last occurrence (last write
/// wins). A warning is logged when that happens.
///
/// A library is built once, via [`StructureLibrary::new`],
/// [`StructureLibrary::from_orientation_lists`], or
/// [`StructureLibrary::from_crystal_systems`], and is read-only thereafter.
#[derive(Debug, Clone)]
pub struct StructureLibrary<I, S> {
    /// Phase identifiers, one per catalogue entry, in input order.
    pub identifiers: Vec<I>,
    /// Structure handles, position-aligned with `identifiers`.
    pub structures: Vec<Arc<S>>,
    /// Orientation sets, position-aligned with `identifiers`.
    pub orientations: Vec<OrientationSet>,
    /// Identifier -> position index, rebuilt only at construction.
    index: HashMap<I, usize>,
}

impl<I, S> StructureLibrary<I, S>
where
    I: Eq + Hash + Clone + fmt::Display,
{
    /// Builds a library from three position-aligned sequences.
    ///
    /// The identifier count is validated against the structure count and,
    /// independently, against the orientation count; the first mismatch
    /// encountered is returned with both lengths embedded in the error.
    /// Failure is atomic: an `Err` leaves no partially built library behind.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::StructureCountMismatch`] or
    /// [`LibraryError::OrientationCountMismatch`] when the sequences are not
    /// aligned.
    pub fn new(
        identifiers: Vec<I>,
        structures: Vec<Arc<S>>,
        orientations: Vec<OrientationSet>,
    ) -> Result<Self, LibraryError> {
        if identifiers.len() != structures.len() {
            return Err(LibraryError::StructureCountMismatch {
                identifiers: identifiers.len(),
                structures: structures.len(),
            });
        }
        if identifiers.len() != orientations.len() {
            return Err(LibraryError::OrientationCountMismatch {
                identifiers: identifiers.len(),
                orientations: orientations.len(),
            });
        }

        let mut index = HashMap::with_capacity(identifiers.len());
        for (position, identifier) in identifiers.iter().enumerate() {
            if index.insert(identifier.clone(), position).is_some() {
                tracing::warn!(
                    "Duplicate identifier '{}' in structure library; lookups resolve to the later entry",
                    identifier
                );
            }
        }

        Ok(Self {
            identifiers,
            structures,
            orientations,
            index,
        })
    }

    /// Builds a library from explicit, manually assembled orientation lists.
    ///
    /// A named alias for [`StructureLibrary::new`] with the same contract; it
    /// exists as the discoverable counterpart to
    /// [`StructureLibrary::from_crystal_systems`].
    pub fn from_orientation_lists(
        identifiers: Vec<I>,
        structures: Vec<Arc<S>>,
        orientations: Vec<OrientationSet>,
    ) -> Result<Self, LibraryError> {
        Self::new(identifiers, structures, orientations)
    }

    /// Builds a library by expanding crystal-system tags into orientation
    /// grids.
    ///
    /// One grid is generated per tag, in input order, forwarding `resolution`
    /// (degrees) and the `equal` sampling mode to the generator unchanged.
    /// The generated sets then go through [`StructureLibrary::new`], so a
    /// `systems` slice whose length disagrees with `identifiers` surfaces as
    /// that constructor's [`LibraryError::OrientationCountMismatch`] rather
    /// than being checked here.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Grid`] if the generator fails (the underlying
    /// [`GridError`] is passed through unmodified), or a length-mismatch
    /// error from the direct constructor.
    pub fn from_crystal_systems<G>(
        identifiers: Vec<I>,
        structures: Vec<Arc<S>>,
        systems: &[CrystalSystem],
        resolution: f64,
        equal: EqualSampling,
        generator: &G,
    ) -> Result<Self, LibraryError>
    where
        G: OrientationGenerator,
    {
        let mut orientations = Vec::with_capacity(systems.len());
        for &system in systems {
            tracing::debug!(%system, resolution, %equal, "generating stereographic orientation grid");
            let grid = generator.stereographic_grid(system, resolution, equal)?;
            orientations.push(OrientationSet::Many(grid));
        }
        Self::new(identifiers, structures, orientations)
    }

    /// Looks up an entry by identifier.
    ///
    /// For duplicated identifiers this resolves to the last occurrence.
    pub fn get(&self, identifier: &I) -> Option<(&S, &OrientationSet)> {
        let &position = self.index.get(identifier)?;
        Some((
            self.structures[position].as_ref(),
            &self.orientations[position],
        ))
    }

    /// Number of catalogue entries, counting duplicated identifiers.
    pub fn entry_count(&self) -> usize {
        self.identifiers.len()
    }

    /// Number of distinct identifiers reachable through [`StructureLibrary::get`].
    pub fn unique_entry_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Iterates entries in input order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = (&I, &S, &OrientationSet)> {
        self.identifiers
            .iter()
            .zip(&self.structures)
            .zip(&self.orientations)
            .map(|((identifier, structure), orientations)| {
                (identifier, structure.as_ref(), orientations)
            })
    }

    /// Total number of logical orientation entries across the catalogue.
    ///
    /// Each entry contributes [`OrientationSet::logical_len`], so a flat
    /// single orientation counts as one regardless of its stored shape.
    pub fn library_size(&self) -> usize {
        self.orientations
            .iter()
            .map(OrientationSet::logical_len)
            .sum()
    }

    /// Writes a per-identifier size report to `out` and returns the total.
    ///
    /// The returned total is identical to [`StructureLibrary::library_size`].
    /// The per-identifier lines, however, show each set's raw representation
    /// length ([`OrientationSet::raw_len`]) — for a flat single orientation
    /// that is its 3 angle components, not the logical count of 1. The
    /// report has always been written that way and downstream tooling parses
    /// it, so the figure is preserved as-is.
    pub fn report_library_size<W: Write>(&self, out: &mut W) -> io::Result<usize> {
        for (identifier, set) in self.identifiers.iter().zip(&self.orientations) {
            writeln!(out, "{} has {} entries.", identifier, set.raw_len())?;
        }
        let total = self.library_size();
        writeln!(out, "\nIn total: {} entries", total)?;
        Ok(total)
    }

    /// Convenience wrapper writing the size report to standard output.
    pub fn print_library_size(&self) -> io::Result<usize> {
        self.report_library_size(&mut io::stdout())
    }
}
