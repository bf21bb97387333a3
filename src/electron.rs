//! Kinematic state of the trapped electron.

use crate::constant::PhysicalConstants;
use crate::error::{Result, TrapError};
use crate::maths;
use std::f64::consts::FRAC_PI_2;

/// Energy, speed and pitch angle of an electron.
///
/// The Lorentz factor and speed are derived from the kinetic energy on construction and cannot
/// be set independently. The pitch angle is the angle between the velocity and the trap axis
/// at the field minimum (trap centre for a harmonic trap, the flat region of a bathtub trap).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectronKinematicState {
    kinetic_energy: f64,
    rest_mass: f64,
    speed: f64,
    pitch_angle: f64,
    gamma: f64,
}

impl ElectronKinematicState {
    /// Creates the state of an electron with the given kinetic energy.
    ///
    /// # Arguments
    ///
    /// `kinetic_energy`: kinetic energy, J
    ///
    /// `pitch_angle`: pitch angle at the field minimum, rad. Must lie in `(0, pi/2)`.
    pub fn new(
        kinetic_energy: f64,
        pitch_angle: f64,
        constants: &PhysicalConstants,
    ) -> Result<Self> {
        constants.validate()?;
        if !(kinetic_energy > 0.0) || !kinetic_energy.is_finite() {
            return Err(TrapError::InvalidKinematics(format!(
                "kinetic energy must be positive and finite, got {} J",
                kinetic_energy
            )));
        }
        check_pitch_angle(pitch_angle)?;
        let gamma =
            maths::lorentz_factor_from_kinetic_energy(kinetic_energy, constants.rest_energy());
        let speed = maths::speed_from_lorentz_factor(gamma, constants.light_speed);
        Ok(ElectronKinematicState {
            kinetic_energy,
            rest_mass: constants.rest_mass,
            speed,
            pitch_angle,
            gamma,
        })
    }

    /// Creates the state of an electron with kinetic energy specified in eV.
    pub fn from_kinetic_energy_ev(
        kinetic_energy_ev: f64,
        pitch_angle: f64,
        constants: &PhysicalConstants,
    ) -> Result<Self> {
        Self::new(constants.ev_to_joules(kinetic_energy_ev), pitch_angle, constants)
    }

    /// Creates the state of an electron moving at `speed` m/s.
    ///
    /// The kinetic energy is `(gamma - 1) m c^2`.
    pub fn from_speed(speed: f64, pitch_angle: f64, constants: &PhysicalConstants) -> Result<Self> {
        if !(speed > 0.0) {
            return Err(TrapError::InvalidKinematics(format!(
                "speed must be positive, got {} m/s",
                speed
            )));
        }
        let gamma = maths::lorentz_factor_from_speed(speed, constants.light_speed)?;
        Self::new((gamma - 1.0) * constants.rest_energy(), pitch_angle, constants)
    }

    /// Kinetic energy, J
    pub fn kinetic_energy(&self) -> f64 {
        self.kinetic_energy
    }

    /// Rest mass, kg
    pub fn rest_mass(&self) -> f64 {
        self.rest_mass
    }

    /// Speed `v0`, m/s
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Pitch angle at the field minimum, rad
    pub fn pitch_angle(&self) -> f64 {
        self.pitch_angle
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns a copy of this state with a different pitch angle.
    pub fn with_pitch_angle(&self, pitch_angle: f64) -> Result<Self> {
        check_pitch_angle(pitch_angle)?;
        Ok(ElectronKinematicState {
            pitch_angle,
            ..*self
        })
    }
}

fn check_pitch_angle(pitch_angle: f64) -> Result<()> {
    if pitch_angle.is_nan() {
        return Err(TrapError::InvalidParameter("pitch angle is NaN".to_string()));
    }
    if pitch_angle <= 0.0 || pitch_angle >= FRAC_PI_2 {
        return Err(TrapError::DegenerateConfiguration(format!(
            "pitch angle {} rad must lie strictly between 0 and pi/2",
            pitch_angle
        )));
    }
    Ok(())
}
