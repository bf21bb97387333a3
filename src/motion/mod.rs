//! Closed-form axial motion of an electron in the trap.
//!
//! The motion is loss-free and evaluated analytically at any time; no integration is performed.

use crate::electron::ElectronKinematicState;
use crate::error::{Result, TrapError};
use crate::magnetic::TrapGeometry;
use nalgebra::Vector2;

pub mod bathtub;
pub mod harmonic;

/// Motion of the electron along the trap axis.
pub trait AxialMotion {
    /// Axial position at time `t`, m
    fn axial_position(&self, t: f64) -> f64;

    /// Axial velocity at time `t`, m/s
    fn axial_velocity(&self, t: f64) -> f64;

    /// Angular frequency `omega_a` of the motion through the curved part of the field, rad/s
    fn axial_angular_frequency(&self) -> f64;

    /// Distance `z_max` the electron penetrates into the curved part of the field, m
    fn turning_amplitude(&self) -> f64;

    /// Time taken to return to the same point in phase space, s
    fn axial_period(&self) -> f64;
}

/// Position and velocity of the electron in the `(x, z)` plane.
///
/// `x` is transverse to the trap axis, `z` is along it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSpacePoint {
    /// Position, m
    pub position: Vector2<f64>,
    /// Velocity, m/s
    pub velocity: Vector2<f64>,
}

/// Quantities of the bounce motion that both trap shapes share.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BounceParameters {
    /// Axial speed at the field minimum, `v0 cos(theta)`, m/s
    pub axial_speed: f64,
    /// `v0 sin(theta) / l0`, rad/s
    pub omega_a: f64,
    /// `l0 / tan(theta)`, m
    pub z_max: f64,
}

impl BounceParameters {
    pub fn new(geometry: &TrapGeometry, electron: &ElectronKinematicState) -> Result<Self> {
        geometry.validate()?;
        let pitch_angle = trapped_pitch_angle(geometry, electron)?;
        let v0 = electron.speed();
        let l0 = geometry.coil_scale_length;
        let params = BounceParameters {
            axial_speed: v0 * pitch_angle.cos(),
            omega_a: v0 * pitch_angle.sin() / l0,
            z_max: l0 / pitch_angle.tan(),
        };
        if !(params.omega_a > 0.0) || !params.omega_a.is_finite() {
            return Err(TrapError::DegenerateConfiguration(format!(
                "axial frequency {} rad/s is not positive",
                params.omega_a
            )));
        }
        if !(params.axial_speed > 0.0) || !(params.z_max > 0.0) || !params.z_max.is_finite() {
            return Err(TrapError::DegenerateConfiguration(format!(
                "pitch angle {} rad gives no axial motion",
                pitch_angle
            )));
        }
        Ok(params)
    }
}

/// Pitch angle of `electron`, checked against the trap's minimum.
fn trapped_pitch_angle(geometry: &TrapGeometry, electron: &ElectronKinematicState) -> Result<f64> {
    let minimum = geometry.minimum_pitch_angle()?;
    let pitch_angle = electron.pitch_angle();
    if pitch_angle < minimum {
        return Err(TrapError::Untrapped {
            pitch_angle,
            minimum,
        });
    }
    Ok(pitch_angle)
}

/// The smallest pitch angle the trap confines, for electrons placed at the trap bottom.
///
/// Fails with [TrapError::DegenerateConfiguration] when the trap depth equals the background
/// field, as the turning amplitude of such an electron is unbounded.
pub fn marginal_pitch_angle(geometry: &TrapGeometry) -> Result<f64> {
    let theta_bot = geometry.minimum_pitch_angle()?;
    if !(theta_bot > 0.0) {
        return Err(TrapError::DegenerateConfiguration(format!(
            "trap depth {} T equals the background field, the minimum pitch angle is zero",
            geometry.trap_depth
        )));
    }
    Ok(theta_bot)
}
