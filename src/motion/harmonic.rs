//! Motion in a single-coil harmonic trap.

use super::{AxialMotion, BounceParameters, PhaseSpacePoint};
use crate::constant::PhysicalConstants;
use crate::electron::ElectronKinematicState;
use crate::error::{Result, TrapError};
use crate::magnetic::cyclotron;
use crate::magnetic::TrapGeometry;
use nalgebra::Vector2;

/// Simple harmonic axial oscillation, `z = z_max sin(omega_a t)`, with transverse gyromotion.
///
/// The transverse motion is a circle of radius `gamma m v0 sin(theta) / (q B_bkg)` traversed at
/// the cyclotron frequency of the background field, so the gyration carries the perpendicular
/// speed `v0 sin(theta)` and the speed never exceeds `v0`. It is projected on to the `x` axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicMotion {
    bounce: BounceParameters,
    gyroradius: f64,
    gyration_frequency: f64,
}

impl HarmonicMotion {
    pub fn new(
        geometry: &TrapGeometry,
        electron: &ElectronKinematicState,
        constants: &PhysicalConstants,
    ) -> Result<Self> {
        if geometry.flat_region_width != 0.0 {
            return Err(TrapError::InvalidParameter(format!(
                "a harmonic trap has no flat region, got width {} m",
                geometry.flat_region_width
            )));
        }
        let bounce = BounceParameters::new(geometry, electron)?;
        let gyroradius = cyclotron::gyroradius(
            constants,
            electron.gamma(),
            electron.speed() * electron.pitch_angle().sin(),
            geometry.background_field,
        );
        let gyration_frequency = cyclotron::angular_cyclotron_frequency(
            constants,
            geometry.background_field,
            electron.kinetic_energy(),
        );
        log::debug!(
            "harmonic motion: theta = {:.4} deg, omega_a = {:.6e} rad/s, z_max = {:.6e} m, r_g = {:.6e} m",
            electron.pitch_angle().to_degrees(),
            bounce.omega_a,
            bounce.z_max,
            gyroradius
        );
        Ok(HarmonicMotion {
            bounce,
            gyroradius,
            gyration_frequency,
        })
    }

    /// Radius of the transverse gyromotion, m
    pub fn gyroradius(&self) -> f64 {
        self.gyroradius
    }

    /// Transverse position, m
    pub fn transverse_position(&self, t: f64) -> f64 {
        self.gyroradius * (self.gyration_frequency * t).sin()
    }

    /// Transverse velocity, m/s
    pub fn transverse_velocity(&self, t: f64) -> f64 {
        self.gyroradius * self.gyration_frequency * (self.gyration_frequency * t).cos()
    }

    /// Position and velocity in the `(x, z)` plane at time `t`.
    pub fn state_at(&self, t: f64) -> PhaseSpacePoint {
        PhaseSpacePoint {
            position: Vector2::new(self.transverse_position(t), self.axial_position(t)),
            velocity: Vector2::new(self.transverse_velocity(t), self.axial_velocity(t)),
        }
    }
}

impl AxialMotion for HarmonicMotion {
    fn axial_position(&self, t: f64) -> f64 {
        self.bounce.z_max * (self.bounce.omega_a * t).sin()
    }

    fn axial_velocity(&self, t: f64) -> f64 {
        self.bounce.z_max * self.bounce.omega_a * (self.bounce.omega_a * t).cos()
    }

    fn axial_angular_frequency(&self) -> f64 {
        self.bounce.omega_a
    }

    fn turning_amplitude(&self) -> f64 {
        self.bounce.z_max
    }

    fn axial_period(&self) -> f64 {
        2.0 * std::f64::consts::PI / self.bounce.omega_a
    }
}
