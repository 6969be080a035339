use crate::error::{Error, Result};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label that selects the energy-split rule for a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleType {
    Electron,
    Positron,
    Photon,
}

impl ParticleType {
    /// Label used in the column output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticleType::Electron => "Electron",
            ParticleType::Positron => "Positron",
            ParticleType::Photon => "Photon",
        }
    }
}

impl fmt::Display for ParticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParticleType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Electron" => Ok(ParticleType::Electron),
            "Positron" => Ok(ParticleType::Positron),
            "Photon" => Ok(ParticleType::Photon),
            other => Err(Error::InvalidParam(format!(
                "unknown particle type {other:?}"
            ))),
        }
    }
}

/// A directed line in the shower tree.
///
/// Fields:
/// - `start`, `end`: endpoints
/// - `energy`: strictly positive energy carried by the segment
/// - `particle_type`: label governing how the segment splits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: DVec3,
    pub end: DVec3,
    pub energy: f64,
    pub particle_type: ParticleType,
}

impl Segment {
    /// Create a new segment after validating invariants.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `energy` is non-positive or any coordinate is NaN/inf.
    pub fn new(start: DVec3, end: DVec3, energy: f64, particle_type: ParticleType) -> Result<Self> {
        if !energy.is_finite() || energy <= 0.0 {
            return Err(Error::InvalidParam("energy must be finite and > 0".into()));
        }
        if !start.is_finite() {
            return Err(Error::InvalidParam("start point must be finite".into()));
        }
        if !end.is_finite() {
            return Err(Error::InvalidParam("end point must be finite".into()));
        }
        Ok(Self {
            start,
            end,
            energy,
            particle_type,
        })
    }

    /// Unnormalized tangent `end - start`.
    #[inline]
    pub fn axis(&self) -> DVec3 {
        self.end - self.start
    }

    /// Euclidean length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.axis().length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_segment_ok() -> Result<()> {
        let s = Segment::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 2.0), 0.5, ParticleType::Photon)?;
        assert_eq!(s.axis(), DVec3::new(0.0, 0.0, 2.0));
        assert_eq!(s.length(), 2.0);
        assert_eq!(s.energy, 0.5);
        assert_eq!(s.particle_type, ParticleType::Photon);
        Ok(())
    }

    #[test]
    fn non_positive_energy_rejected() {
        let err = Segment::new(DVec3::ZERO, DVec3::Z, 0.0, ParticleType::Electron).unwrap_err();
        assert!(err.to_string().contains("energy"));
        let err = Segment::new(DVec3::ZERO, DVec3::Z, -1.0, ParticleType::Electron).unwrap_err();
        assert!(err.to_string().contains("energy"));
    }

    #[test]
    fn non_finite_endpoint_rejected() {
        let err = Segment::new(DVec3::ZERO, DVec3::new(f64::NAN, 0.0, 0.0), 1.0, ParticleType::Electron)
            .unwrap_err();
        assert!(err.to_string().contains("end point"));
    }

    #[test]
    fn particle_type_labels_round_trip() -> Result<()> {
        for t in [ParticleType::Electron, ParticleType::Positron, ParticleType::Photon] {
            assert_eq!(t.to_string().parse::<ParticleType>()?, t);
        }
        assert!("Muon".parse::<ParticleType>().is_err());
        Ok(())
    }
}
