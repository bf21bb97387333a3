//! A trapped electron, combining the field, motion and receiver models.
//!
//! The trap shape only selects the motion model; everything evaluated at a given time goes
//! through [Trap::sample] for both shapes.

use crate::constant::PhysicalConstants;
use crate::doppler::{self, ReceiverGeometry};
use crate::electron::ElectronKinematicState;
use crate::error::Result;
use crate::magnetic::{self, cyclotron, TrapGeometry};
use crate::motion::bathtub::BathtubMotion;
use crate::motion::harmonic::HarmonicMotion;
use crate::motion::{AxialMotion, PhaseSpacePoint};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Shape of the trapping field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrapKind {
    Harmonic,
    Bathtub,
}

/// Electron motion for either trap shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrapMotion {
    Harmonic(HarmonicMotion),
    Bathtub(BathtubMotion),
}

impl TrapMotion {
    pub fn state_at(&self, t: f64) -> PhaseSpacePoint {
        match self {
            TrapMotion::Harmonic(motion) => motion.state_at(t),
            TrapMotion::Bathtub(motion) => motion.state_at(t),
        }
    }
}

impl AxialMotion for TrapMotion {
    fn axial_position(&self, t: f64) -> f64 {
        match self {
            TrapMotion::Harmonic(motion) => motion.axial_position(t),
            TrapMotion::Bathtub(motion) => motion.axial_position(t),
        }
    }

    fn axial_velocity(&self, t: f64) -> f64 {
        match self {
            TrapMotion::Harmonic(motion) => motion.axial_velocity(t),
            TrapMotion::Bathtub(motion) => motion.axial_velocity(t),
        }
    }

    fn axial_angular_frequency(&self) -> f64 {
        match self {
            TrapMotion::Harmonic(motion) => motion.axial_angular_frequency(),
            TrapMotion::Bathtub(motion) => motion.axial_angular_frequency(),
        }
    }

    fn turning_amplitude(&self) -> f64 {
        match self {
            TrapMotion::Harmonic(motion) => motion.turning_amplitude(),
            TrapMotion::Bathtub(motion) => motion.turning_amplitude(),
        }
    }

    fn axial_period(&self) -> f64 {
        match self {
            TrapMotion::Harmonic(motion) => motion.axial_period(),
            TrapMotion::Bathtub(motion) => motion.axial_period(),
        }
    }
}

/// Everything the model predicts for the electron at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapSample {
    /// Time, s
    pub time: f64,
    /// Position in the `(x, z)` plane, m
    pub position: Vector2<f64>,
    /// Velocity in the `(x, z)` plane, m/s
    pub velocity: Vector2<f64>,
    /// Magnitude of the field at the electron, T
    pub field: f64,
    /// Angular cyclotron frequency, rad/s
    pub angular_cyclotron_frequency: f64,
    /// Cyclotron frequency, Hz
    pub cyclotron_frequency: f64,
}

/// A single electron confined in a magnetic trap.
///
/// Immutable once built: every query is a pure function of time, so a `Trap` may be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trap {
    geometry: TrapGeometry,
    electron: ElectronKinematicState,
    constants: PhysicalConstants,
    motion: TrapMotion,
}

impl Trap {
    pub fn new(
        kind: TrapKind,
        geometry: TrapGeometry,
        electron: ElectronKinematicState,
        constants: PhysicalConstants,
    ) -> Result<Self> {
        constants.validate()?;
        let motion = match kind {
            TrapKind::Harmonic => {
                TrapMotion::Harmonic(HarmonicMotion::new(&geometry, &electron, &constants)?)
            }
            TrapKind::Bathtub => TrapMotion::Bathtub(BathtubMotion::new(&geometry, &electron)?),
        };
        let theta_bot = geometry.minimum_pitch_angle()?;
        log::debug!(
            "{:?} trap: gamma = {:.6}, cyclotron frequency = {:.6e} Hz, minimum pitch angle = {:.4} deg",
            kind,
            electron.gamma(),
            cyclotron::cyclotron_frequency(
                &constants,
                geometry.minimum_field(),
                electron.kinetic_energy()
            ),
            theta_bot.to_degrees()
        );
        Ok(Trap {
            geometry,
            electron,
            constants,
            motion,
        })
    }

    pub fn harmonic(
        geometry: TrapGeometry,
        electron: ElectronKinematicState,
        constants: PhysicalConstants,
    ) -> Result<Self> {
        Self::new(TrapKind::Harmonic, geometry, electron, constants)
    }

    pub fn bathtub(
        geometry: TrapGeometry,
        electron: ElectronKinematicState,
        constants: PhysicalConstants,
    ) -> Result<Self> {
        Self::new(TrapKind::Bathtub, geometry, electron, constants)
    }

    pub fn kind(&self) -> TrapKind {
        match self.motion {
            TrapMotion::Harmonic(_) => TrapKind::Harmonic,
            TrapMotion::Bathtub(_) => TrapKind::Bathtub,
        }
    }

    pub fn geometry(&self) -> &TrapGeometry {
        &self.geometry
    }

    pub fn electron(&self) -> &ElectronKinematicState {
        &self.electron
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn motion(&self) -> &TrapMotion {
        &self.motion
    }

    /// Magnitude of the field experienced by the electron at time `t`, T.
    pub fn field_at_time(&self, t: f64) -> f64 {
        match &self.motion {
            TrapMotion::Bathtub(motion) => motion.field_at_time(t),
            motion => magnetic::field_at_time(&self.geometry, motion, t),
        }
    }

    /// Angular cyclotron frequency at time `t`, rad/s.
    pub fn angular_cyclotron_frequency_at(&self, t: f64) -> f64 {
        cyclotron::angular_cyclotron_frequency(
            &self.constants,
            self.field_at_time(t),
            self.electron.kinetic_energy(),
        )
    }

    pub fn sample(&self, t: f64) -> TrapSample {
        let state = self.motion.state_at(t);
        let field = self.field_at_time(t);
        let angular_cyclotron_frequency = cyclotron::angular_cyclotron_frequency(
            &self.constants,
            field,
            self.electron.kinetic_energy(),
        );
        TrapSample {
            time: t,
            position: state.position,
            velocity: state.velocity,
            field,
            angular_cyclotron_frequency,
            cyclotron_frequency: angular_cyclotron_frequency / (2.0 * self.constants.pi),
        }
    }

    /// Cyclotron frequency seen at `receiver` at time `t`, Hz, with the longitudinal Doppler shift.
    pub fn received_frequency(&self, t: f64, receiver: &ReceiverGeometry) -> Result<f64> {
        let sample = self.sample(t);
        let approach =
            doppler::line_of_sight_velocity(&sample.position, &sample.velocity, &receiver.position)?;
        doppler::observed_frequency(
            &self.constants,
            sample.cyclotron_frequency,
            -approach,
            receiver.refractive_index,
        )
    }

    /// Cyclotron frequency seen at `receiver` at time `t`, Hz, including the transverse shift
    /// from the full electron velocity.
    pub fn received_frequency_with_time_dilation(
        &self,
        t: f64,
        receiver: &ReceiverGeometry,
    ) -> Result<f64> {
        let sample = self.sample(t);
        doppler::observed_frequency_from_velocity(
            &self.constants,
            sample.cyclotron_frequency,
            self.electron.gamma(),
            &sample.position,
            &sample.velocity,
            &receiver.position,
            receiver.refractive_index,
        )
    }
}
