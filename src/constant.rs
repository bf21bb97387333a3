//! Physical constants, SI units.
use crate::error::{Result, TrapError};
use serde::{Deserialize, Serialize};

/// Elementary charge in units of Coulombs
pub const COULOMBCHARGE: f64 = 1.602176634e-19;

/// Mathematica constant pi
pub const PI: f64 = std::f64::consts::PI;

/// Vacuum permittivity in SI units of F/m
pub const VACPERM: f64 = 8.8541878128e-12;

/// Speed of light in SI units of m/s
pub const C: f64 = 299792458.0;

/// Electron rest mass in SI units of kg
pub const ERESTMASS: f64 = 9.10938356e-31;

/// A read-only set of the physical constants used by the trap model.
///
/// Every model in the crate takes its constants from one of these values rather than
/// from the module level constants, so that a caller can swap in an alternate unit system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Charge of the particle, C. Taken positive; the sign of the gyration is not modelled.
    pub charge: f64,
    /// Rest mass of the particle, kg
    pub rest_mass: f64,
    /// Speed of light, m/s
    pub light_speed: f64,
    /// Vacuum permittivity, F/m
    pub vacuum_permittivity: f64,
    pub pi: f64,
}

impl PhysicalConstants {
    /// Constants for an electron in SI units.
    pub const fn si() -> Self {
        PhysicalConstants {
            charge: COULOMBCHARGE,
            rest_mass: ERESTMASS,
            light_speed: C,
            vacuum_permittivity: VACPERM,
            pi: PI,
        }
    }

    /// Checks every constant is positive and finite.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("charge", self.charge),
            ("rest mass", self.rest_mass),
            ("light speed", self.light_speed),
            ("vacuum permittivity", self.vacuum_permittivity),
            ("pi", self.pi),
        ];
        for &(name, value) in named.iter() {
            if !(value > 0.0) || !value.is_finite() {
                return Err(TrapError::InvalidParameter(format!(
                    "physical constant {} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Rest mass energy `m c^2`, in J.
    pub fn rest_energy(&self) -> f64 {
        self.rest_mass * self.light_speed * self.light_speed
    }

    /// Converts an energy in electronvolts to joules.
    pub fn ev_to_joules(&self, energy_ev: f64) -> f64 {
        energy_ev * self.charge
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants::si()
    }
}
