use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The seven crystal systems.
///
/// A system tag selects the symmetry-reduced stereographic region an
/// orientation grid is sampled over; the sampling itself happens behind the
/// [`crate::core::generators::OrientationGenerator`] seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrystalSystem {
    Cubic,
    Hexagonal,
    Trigonal,
    Tetragonal,
    Orthorhombic,
    Monoclinic,
    Triclinic,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown crystal system '{0}'")]
pub struct ParseCrystalSystemError(pub String);

impl FromStr for CrystalSystem {
    type Err = ParseCrystalSystemError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cubic" => Ok(CrystalSystem::Cubic),
            "hexagonal" => Ok(CrystalSystem::Hexagonal),
            "trigonal" => Ok(CrystalSystem::Trigonal),
            "tetragonal" => Ok(CrystalSystem::Tetragonal),
            "orthorhombic" => Ok(CrystalSystem::Orthorhombic),
            "monoclinic" => Ok(CrystalSystem::Monoclinic),
            "triclinic" => Ok(CrystalSystem::Triclinic),
            _ => Err(ParseCrystalSystemError(s.to_string())),
        }
    }
}

impl fmt::Display for CrystalSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CrystalSystem::Cubic => "cubic",
                CrystalSystem::Hexagonal => "hexagonal",
                CrystalSystem::Trigonal => "trigonal",
                CrystalSystem::Tetragonal => "tetragonal",
                CrystalSystem::Orthorhombic => "orthorhombic",
                CrystalSystem::Monoclinic => "monoclinic",
                CrystalSystem::Triclinic => "triclinic",
            }
        )
    }
}

/// How a generated grid spaces its samples over the stereographic region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EqualSampling {
    /// Equal angular spacing between samples (the conventional default).
    #[default]
    Angle,
    /// Equal solid-angle area per sample.
    Area,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown equal-sampling mode '{0}'")]
pub struct ParseEqualSamplingError(pub String);

impl FromStr for EqualSampling {
    type Err = ParseEqualSamplingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "angle" => Ok(EqualSampling::Angle),
            "area" => Ok(EqualSampling::Area),
            _ => Err(ParseEqualSamplingError(s.to_string())),
        }
    }
}

impl fmt::Display for EqualSampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EqualSampling::Angle => "angle",
                EqualSampling::Area => "area",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crystal_system_round_trips_through_strings() {
        let systems = [
            CrystalSystem::Cubic,
            CrystalSystem::Hexagonal,
            CrystalSystem::Trigonal,
            CrystalSystem::Tetragonal,
            CrystalSystem::Orthorhombic,
            CrystalSystem::Monoclinic,
            CrystalSystem::Triclinic,
        ];
        for system in systems {
            assert_eq!(system.to_string().parse::<CrystalSystem>(), Ok(system));
        }
    }

    #[test]
    fn crystal_system_parsing_is_case_insensitive() {
        assert_eq!("Cubic".parse(), Ok(CrystalSystem::Cubic));
        assert_eq!("HEXAGONAL".parse(), Ok(CrystalSystem::Hexagonal));
    }

    #[test]
    fn unknown_crystal_system_reports_the_offending_tag() {
        let err = "quasicrystal".parse::<CrystalSystem>().unwrap_err();
        assert_eq!(err, ParseCrystalSystemError("quasicrystal".to_string()));
        assert!(err.to_string().contains("quasicrystal"));
    }

    #[test]
    fn equal_sampling_defaults_to_angle() {
        assert_eq!(EqualSampling::default(), EqualSampling::Angle);
    }

    #[test]
    fn equal_sampling_parses_both_modes() {
        assert_eq!("angle".parse(), Ok(EqualSampling::Angle));
        assert_eq!("area".parse(), Ok(EqualSampling::Area));
        assert!("volume".parse::<EqualSampling>().is_err());
    }
}
