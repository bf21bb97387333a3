//! Mathematical utilities and relativistic factors.

use crate::error::{Result, TrapError};
use nalgebra::SVector;

/// Lorentz factor of a particle with the given kinetic energy.
///
/// # Arguments
///
/// `kinetic_energy`: kinetic energy of the particle, J
///
/// `rest_energy`: rest mass energy `m c^2` of the particle, J
pub fn lorentz_factor_from_kinetic_energy(kinetic_energy: f64, rest_energy: f64) -> f64 {
    (rest_energy + kinetic_energy) / rest_energy
}

/// Speed of a particle with Lorentz factor `gamma`, `v = c sqrt((gamma^2 - 1) / gamma^2)`.
pub fn speed_from_lorentz_factor(gamma: f64, light_speed: f64) -> f64 {
    light_speed * ((gamma * gamma - 1.0) / (gamma * gamma)).sqrt()
}

/// Lorentz factor for a particle moving at `speed`.
///
/// Fails with [TrapError::InvalidKinematics] if `|speed| >= light_speed`.
pub fn lorentz_factor_from_speed(speed: f64, light_speed: f64) -> Result<f64> {
    let beta = speed / light_speed;
    if !beta.is_finite() || beta.abs() >= 1.0 {
        return Err(TrapError::InvalidKinematics(format!(
            "speed {} m/s is not below the speed of light {} m/s",
            speed, light_speed
        )));
    }
    Ok(1.0 / (1.0 - beta * beta).sqrt())
}

/// Total relativistic mass `m + KE / c^2`, kg.
pub fn relativistic_mass(rest_mass: f64, kinetic_energy: f64, light_speed: f64) -> f64 {
    rest_mass + kinetic_energy / (light_speed * light_speed)
}

/// Unit vector pointing from `from` towards `to`.
///
/// Fails with [TrapError::ZeroLengthProjection] when the two points coincide.
pub fn unit_vector_between<const D: usize>(
    from: &SVector<f64, D>,
    to: &SVector<f64, D>,
) -> Result<SVector<f64, D>> {
    let delta = to - from;
    let norm = delta.norm();
    if !(norm > 0.0) || !norm.is_finite() {
        return Err(TrapError::ZeroLengthProjection);
    }
    Ok(delta / norm)
}
