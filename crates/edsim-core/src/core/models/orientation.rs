use serde::{Deserialize, Serialize};

/// A single crystal orientation as an Euler-angle triplet in the intrinsic
/// Z-X-Z ("rzxz") convention, in degrees.
///
/// Orientations are carried as plain degrees at this boundary; conversion to
/// rotation matrices or quaternions is the simulation engine's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Orientation {
    pub alpha: f64, // First rotation, about Z
    pub beta: f64,  // Second rotation, about the rotated X
    pub gamma: f64, // Third rotation, about the rotated Z
}

impl Orientation {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    /// The triplet in storage order `[alpha, beta, gamma]`.
    pub fn as_degrees(&self) -> [f64; 3] {
        [self.alpha, self.beta, self.gamma]
    }
}

impl From<[f64; 3]> for Orientation {
    fn from(angles: [f64; 3]) -> Self {
        Self::new(angles[0], angles[1], angles[2])
    }
}

impl From<Orientation> for [f64; 3] {
    fn from(orientation: Orientation) -> Self {
        orientation.as_degrees()
    }
}

impl From<(f64, f64, f64)> for Orientation {
    fn from((alpha, beta, gamma): (f64, f64, f64)) -> Self {
        Self::new(alpha, beta, gamma)
    }
}

/// The orientation data attached to one catalogue entry.
///
/// Catalogue data has historically stored this field in two shapes: a bare
/// angle triplet for a single orientation, or a list of triplets for a
/// rotation list. The tagged variants make that distinction explicit at
/// construction time instead of inferring it from sequence lengths, while
/// keeping the counting behavior of both shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrientationSet {
    /// A single orientation stored flat (the bare-triplet shape).
    Single(Orientation),
    /// An ordered sequence of orientations, e.g. a generated grid.
    Many(Vec<Orientation>),
}

impl OrientationSet {
    /// Number of logical catalogue entries this set contributes.
    ///
    /// A `Single` counts as exactly one entry, as does a one-element `Many`;
    /// larger sets count their true element count.
    pub fn logical_len(&self) -> usize {
        match self {
            OrientationSet::Single(_) => 1,
            OrientationSet::Many(orientations) => orientations.len(),
        }
    }

    /// Element count of the underlying representation: angle components (3)
    /// for the flat single-orientation shape, orientations for a sequence.
    ///
    /// This is not the logical entry count. The legacy size report prints
    /// this raw figure per identifier, so a flat single orientation shows as
    /// 3 there while contributing 1 to the summed total. Kept for
    /// compatibility with existing report consumers.
    pub fn raw_len(&self) -> usize {
        match self {
            OrientationSet::Single(_) => 3,
            OrientationSet::Many(orientations) => orientations.len(),
        }
    }

    /// All orientations in the set, a one-element slice for `Single`.
    pub fn orientations(&self) -> &[Orientation] {
        match self {
            OrientationSet::Single(orientation) => std::slice::from_ref(orientation),
            OrientationSet::Many(orientations) => orientations,
        }
    }
}

impl From<Orientation> for OrientationSet {
    fn from(orientation: Orientation) -> Self {
        OrientationSet::Single(orientation)
    }
}

impl From<Vec<Orientation>> for OrientationSet {
    fn from(orientations: Vec<Orientation>) -> Self {
        OrientationSet::Many(orientations)
    }
}
