//! Frequency observed by a stationary receiver, including the relativistic Doppler shift.

use crate::constant::PhysicalConstants;
use crate::error::{Result, TrapError};
use crate::maths;
use nalgebra::{SVector, Vector2};
use serde::{Deserialize, Serialize};

/// A stationary receiver in the `(x, z)` plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReceiverGeometry {
    /// Position of the receiver, m
    pub position: Vector2<f64>,
    /// Refractive index of the medium between electron and receiver.
    #[serde(default = "default_refractive_index")]
    pub refractive_index: f64,
}

fn default_refractive_index() -> f64 {
    1.0
}

impl ReceiverGeometry {
    /// A receiver at `position` with vacuum between it and the electron.
    pub fn new(position: Vector2<f64>) -> Self {
        ReceiverGeometry {
            position,
            refractive_index: default_refractive_index(),
        }
    }

    pub fn with_refractive_index(position: Vector2<f64>, refractive_index: f64) -> Result<Self> {
        let receiver = ReceiverGeometry {
            position,
            refractive_index,
        };
        receiver.validate()?;
        Ok(receiver)
    }

    pub fn validate(&self) -> Result<()> {
        check_refractive_index(self.refractive_index)?;
        if !self.position.iter().all(|c| c.is_finite()) {
            return Err(TrapError::InvalidParameter(
                "receiver position must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_refractive_index(refractive_index: f64) -> Result<()> {
    if !(refractive_index > 0.0) || !refractive_index.is_finite() {
        return Err(TrapError::InvalidParameter(format!(
            "refractive index must be positive and finite, got {}",
            refractive_index
        )));
    }
    Ok(())
}

/// Longitudinal relativistic Doppler shift, `f0 sqrt((1 - beta) / (1 + beta))`.
///
/// `recession_velocity` is the rate at which the source moves away from the receiver, m/s, so a
/// positive value gives a redshift. In a medium of refractive index `n` the light speed
/// reference is `c / n`, so `beta = n v / c`. The frequency may be ordinary or angular.
///
/// Fails with [TrapError::InvalidKinematics] if `|v| >= c / n`.
pub fn observed_frequency(
    constants: &PhysicalConstants,
    source_frequency: f64,
    recession_velocity: f64,
    refractive_index: f64,
) -> Result<f64> {
    check_refractive_index(refractive_index)?;
    let beta = refractive_index * recession_velocity / constants.light_speed;
    if !beta.is_finite() || beta.abs() >= 1.0 {
        return Err(TrapError::InvalidKinematics(format!(
            "line of sight velocity {} m/s reaches the light speed of the medium",
            recession_velocity
        )));
    }
    Ok(source_frequency * ((1.0 - beta) / (1.0 + beta)).sqrt())
}

/// Component of `electron_velocity` along the unit vector from the electron to the receiver,
/// m/s. Positive when the electron approaches the receiver.
///
/// Fails with [TrapError::ZeroLengthProjection] if the electron sits on the receiver.
pub fn line_of_sight_velocity<const D: usize>(
    electron_position: &SVector<f64, D>,
    electron_velocity: &SVector<f64, D>,
    receiver_position: &SVector<f64, D>,
) -> Result<f64> {
    let direction = maths::unit_vector_between(electron_position, receiver_position)?;
    Ok(electron_velocity.dot(&direction))
}

/// Doppler shifted frequency for a source with arbitrary velocity,
/// `f0 / (gamma (1 - n beta cos(alpha)))`.
///
/// `alpha` is the angle between the electron velocity and the direction to the receiver, so the
/// transverse (time dilation) shift is included. For motion directly along the line of sight
/// this reduces to [observed_frequency].
///
/// `gamma` is the Lorentz factor of the electron. It is taken as given rather than derived from
/// `electron_velocity`, which may be a projection of the full velocity.
pub fn observed_frequency_from_velocity<const D: usize>(
    constants: &PhysicalConstants,
    source_frequency: f64,
    gamma: f64,
    electron_position: &SVector<f64, D>,
    electron_velocity: &SVector<f64, D>,
    receiver_position: &SVector<f64, D>,
    refractive_index: f64,
) -> Result<f64> {
    check_refractive_index(refractive_index)?;
    if !(gamma >= 1.0) || !gamma.is_finite() {
        return Err(TrapError::InvalidKinematics(format!(
            "Lorentz factor must be at least 1, got {}",
            gamma
        )));
    }
    if electron_velocity.norm() >= constants.light_speed {
        return Err(TrapError::InvalidKinematics(format!(
            "speed {} m/s is not below the speed of light",
            electron_velocity.norm()
        )));
    }
    let approach =
        line_of_sight_velocity(electron_position, electron_velocity, receiver_position)?;
    let beta = refractive_index * approach / constants.light_speed;
    if !beta.is_finite() || beta >= 1.0 {
        return Err(TrapError::InvalidKinematics(format!(
            "line of sight velocity {} m/s reaches the light speed of the medium",
            approach
        )));
    }
    Ok(source_frequency / (gamma * (1.0 - beta)))
}
