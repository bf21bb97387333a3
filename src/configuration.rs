//! Trap scenarios loaded from YAML or JSON.
//!
//! ```yaml
//! trap: bathtub
//! geometry:
//!   coil_scale_length: 0.35
//!   flat_region_width: 0.10
//!   field_scale: 1.0
//!   background_field: 1.0
//!   trap_depth: 0.004
//! electron:
//!   kinetic_energy_ev: 18600.0
//!   pitch_angle_deg: 88.0
//! receiver:
//!   position: [0.05, 0.05]
//! ```
//!
//! Kinetic energy is given in eV and converted to joules with the configured elementary charge.
//! Omitting `pitch_angle_deg` places the electron at the minimum trapped pitch angle.

use crate::constant::PhysicalConstants;
use crate::doppler::ReceiverGeometry;
use crate::electron::ElectronKinematicState;
use crate::error::{Result, TrapError};
use crate::magnetic::TrapGeometry;
use crate::motion::marginal_pitch_angle;
use crate::trap::{Trap, TrapKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElectronConfig {
    /// Kinetic energy, eV
    pub kinetic_energy_ev: f64,
    /// Pitch angle at the field minimum, degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch_angle_deg: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrapConfig {
    pub trap: TrapKind,
    pub geometry: TrapGeometry,
    pub electron: ElectronConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<ReceiverGeometry>,
    #[serde(default)]
    pub constants: PhysicalConstants,
}

impl TrapConfig {
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Loads a scenario, choosing the format from the file extension. Anything other than
    /// `.json` is read as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            _ => Self::from_yaml_str(&contents),
        }
    }

    /// Builds the electron state described by the scenario.
    pub fn electron_state(&self) -> Result<ElectronKinematicState> {
        self.geometry.validate()?;
        let pitch_angle = match self.electron.pitch_angle_deg {
            Some(degrees) => degrees.to_radians(),
            None => marginal_pitch_angle(&self.geometry)?,
        };
        ElectronKinematicState::from_kinetic_energy_ev(
            self.electron.kinetic_energy_ev,
            pitch_angle,
            &self.constants,
        )
    }

    /// Validates the scenario and builds the trap.
    pub fn build(&self) -> Result<Trap> {
        self.constants.validate()?;
        let electron = self.electron_state()?;
        Trap::new(self.trap, self.geometry, electron, self.constants)
    }

    /// The validated receiver, if the scenario has one.
    pub fn receiver(&self) -> Result<Option<ReceiverGeometry>> {
        match self.receiver {
            Some(receiver) => {
                receiver.validate()?;
                Ok(Some(receiver))
            }
            None => Ok(None),
        }
    }

    /// The validated receiver, failing if the scenario has none.
    pub fn require_receiver(&self) -> Result<ReceiverGeometry> {
        self.receiver()?.ok_or_else(|| {
            TrapError::InvalidParameter("scenario does not define a receiver".to_string())
        })
    }
}
