use crate::error::{Error, Result};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Inputs consumed by [`CascadeEngine::reset`](crate::core::CascadeEngine::reset).
///
/// Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedParams {
    /// Start of the seed segment.
    pub base_point: [f64; 3],
    /// Seed direction; the seed segment spans half of it. Need not be unit length.
    pub base_direction: [f64; 3],
    /// Energy of the seed segment (> 0).
    pub initial_energy: f64,
}

impl Default for SeedParams {
    fn default() -> Self {
        Self {
            base_point: [0.0, 0.0, 0.0],
            base_direction: [0.0, 0.0, 1.0],
            initial_energy: 1.0,
        }
    }
}

impl SeedParams {
    pub fn base_point(&self) -> DVec3 {
        DVec3::from_array(self.base_point)
    }

    pub fn base_direction(&self) -> DVec3 {
        DVec3::from_array(self.base_direction)
    }

    /// Errors: `Error::InvalidParam` on non-finite vectors or non-positive energy.
    pub fn validate(&self) -> Result<()> {
        validate_seed(self.base_point(), self.base_direction(), self.initial_energy)
    }
}

pub(crate) fn validate_seed(base_point: DVec3, base_direction: DVec3, initial_energy: f64) -> Result<()> {
    if !base_point.is_finite() {
        return Err(Error::InvalidParam("base_point must be finite".into()));
    }
    if !base_direction.is_finite() {
        return Err(Error::InvalidParam("base_direction must be finite".into()));
    }
    if !initial_energy.is_finite() || initial_energy <= 0.0 {
        return Err(Error::InvalidParam(
            "initial_energy must be finite and > 0".into(),
        ));
    }
    Ok(())
}

/// Inputs consumed by [`CascadeEngine::advance`](crate::core::CascadeEngine::advance).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepParams {
    /// Geometric scale: children extend by `length_scale - child_energy`.
    pub length_scale: f64,
    /// Full range (degrees) of the azimuthal rotation of a child pair about its parent.
    pub x_degree: i32,
    /// Opening-angle range (degrees) between a child and its parent.
    pub z_degree: i32,
    /// Children below this energy are discarded (> 0).
    pub min_energy: f64,
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            length_scale: 1.0,
            x_degree: 0,
            z_degree: 0,
            min_energy: 0.01,
        }
    }
}

impl StepParams {
    /// Step parameters whose length scale reuses the seed energy, as the host node wires it.
    pub fn from_seed(seed: &SeedParams) -> Self {
        Self {
            length_scale: seed.initial_energy,
            ..Self::default()
        }
    }

    /// Errors: `Error::InvalidParam` on a non-finite scale, negative `x_degree`,
    /// or a non-positive threshold.
    pub fn validate(&self) -> Result<()> {
        if !self.length_scale.is_finite() {
            return Err(Error::InvalidParam("length_scale must be finite".into()));
        }
        if self.x_degree < 0 {
            return Err(Error::InvalidParam("x_degree must be >= 0".into()));
        }
        if !self.min_energy.is_finite() || self.min_energy <= 0.0 {
            return Err(Error::InvalidParam(
                "min_energy must be finite and > 0".into(),
            ));
        }
        Ok(())
    }
}
