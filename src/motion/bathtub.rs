//! Bounce motion in a two-coil bathtub trap.
//!
//! One bounce is split into four phases. Time is measured from the moment the electron enters
//! the flat region at `z = -l1/2` moving forward:
//!
//! | phase            | interval        | position                                |
//! |------------------|-----------------|-----------------------------------------|
//! | `FlatForward`    | `[0, t1)`       | `v_z0 tau - l1/2`                       |
//! | `CurvedForward`  | `[t1, t2)`      | `z_max sin(omega_a (tau - t1)) + l1/2`  |
//! | `FlatBackward`   | `[t2, t3)`      | `-v_z0 (tau - t2) + l1/2`               |
//! | `CurvedBackward` | `[t3, T)`       | `-z_max sin(omega_a (tau - t3)) - l1/2` |
//!
//! with `tau = t mod T`.

use super::{AxialMotion, BounceParameters, PhaseSpacePoint};
use crate::electron::ElectronKinematicState;
use crate::error::Result;
use crate::magnetic::TrapGeometry;
use nalgebra::Vector2;

/// Which part of the bounce the electron is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapPhase {
    FlatForward,
    CurvedForward,
    FlatBackward,
    CurvedBackward,
}

impl TrapPhase {
    /// True while the electron crosses the flat region.
    pub fn is_flat(&self) -> bool {
        matches!(self, TrapPhase::FlatForward | TrapPhase::FlatBackward)
    }
}

/// Times at which the electron moves from one phase to the next, s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceTimes {
    /// End of the forward flat transit, `l1 / v_z0`
    pub t1: f64,
    /// End of the forward curved half-bounce, `t1 + pi / omega_a`
    pub t2: f64,
    /// End of the backward flat transit, `t1 + t2`
    pub t3: f64,
    /// Full period, `2 t2`
    pub period: f64,
}

/// Analytic bounce motion of an electron in a bathtub trap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BathtubMotion {
    geometry: TrapGeometry,
    bounce: BounceParameters,
    times: BounceTimes,
}

impl BathtubMotion {
    pub fn new(geometry: &TrapGeometry, electron: &ElectronKinematicState) -> Result<Self> {
        let bounce = BounceParameters::new(geometry, electron)?;
        let t1 = geometry.flat_region_width / bounce.axial_speed;
        let t2 = t1 + std::f64::consts::PI / bounce.omega_a;
        let times = BounceTimes {
            t1,
            t2,
            t3: t1 + t2,
            period: 2.0 * t2,
        };
        log::debug!(
            "bathtub motion: theta = {:.4} deg, omega_a = {:.6e} rad/s, z_max = {:.6e} m, T = {:.6e} s",
            electron.pitch_angle().to_degrees(),
            bounce.omega_a,
            bounce.z_max,
            times.period
        );
        Ok(BathtubMotion {
            geometry: *geometry,
            bounce,
            times,
        })
    }

    pub fn bounce_times(&self) -> BounceTimes {
        self.times
    }

    /// Axial speed while crossing the flat region, m/s
    pub fn flat_region_speed(&self) -> f64 {
        self.bounce.axial_speed
    }

    /// Phase of the bounce at time `t`.
    pub fn phase_at(&self, t: f64) -> TrapPhase {
        self.locate(t).0
    }

    /// Magnitude of the field seen by the electron at time `t`, T.
    ///
    /// Constant over the flat phases and `(1 - cos)` modulated over the curved ones.
    pub fn field_at_time(&self, t: f64) -> f64 {
        let (phase, tau) = self.locate(t);
        let origin = match phase {
            TrapPhase::FlatForward | TrapPhase::FlatBackward => {
                return self.geometry.minimum_field()
            }
            TrapPhase::CurvedForward => self.times.t1,
            TrapPhase::CurvedBackward => self.times.t3,
        };
        let l0 = self.geometry.coil_scale_length;
        let depth = self.bounce.z_max.powi(2) / (2.0 * l0 * l0);
        self.geometry.background_field
            + self.geometry.field_scale
                * (1.0 + depth * (1.0 - (2.0 * self.bounce.omega_a * (tau - origin)).cos()))
    }

    /// Position and velocity at time `t`. The transverse components are zero.
    pub fn state_at(&self, t: f64) -> PhaseSpacePoint {
        PhaseSpacePoint {
            position: Vector2::new(0.0, self.axial_position(t)),
            velocity: Vector2::new(0.0, self.axial_velocity(t)),
        }
    }

    /// Returns the phase and the time since the start of the current bounce.
    fn locate(&self, t: f64) -> (TrapPhase, f64) {
        let tau = t.rem_euclid(self.times.period);
        let phase = if tau < self.times.t1 {
            TrapPhase::FlatForward
        } else if tau < self.times.t2 {
            TrapPhase::CurvedForward
        } else if tau < self.times.t3 {
            TrapPhase::FlatBackward
        } else {
            TrapPhase::CurvedBackward
        };
        (phase, tau)
    }
}

impl AxialMotion for BathtubMotion {
    fn axial_position(&self, t: f64) -> f64 {
        let half_width = self.geometry.flat_region_width / 2.0;
        let BounceParameters {
            axial_speed,
            omega_a,
            z_max,
        } = self.bounce;
        let (phase, tau) = self.locate(t);
        match phase {
            TrapPhase::FlatForward => axial_speed * tau - half_width,
            TrapPhase::CurvedForward => z_max * (omega_a * (tau - self.times.t1)).sin() + half_width,
            TrapPhase::FlatBackward => -axial_speed * (tau - self.times.t2) + half_width,
            TrapPhase::CurvedBackward => {
                -z_max * (omega_a * (tau - self.times.t3)).sin() - half_width
            }
        }
    }

    fn axial_velocity(&self, t: f64) -> f64 {
        let BounceParameters {
            axial_speed,
            omega_a,
            z_max,
        } = self.bounce;
        let (phase, tau) = self.locate(t);
        match phase {
            TrapPhase::FlatForward => axial_speed,
            TrapPhase::CurvedForward => z_max * omega_a * (omega_a * (tau - self.times.t1)).cos(),
            TrapPhase::FlatBackward => -axial_speed,
            TrapPhase::CurvedBackward => {
                -z_max * omega_a * (omega_a * (tau - self.times.t3)).cos()
            }
        }
    }

    fn axial_angular_frequency(&self) -> f64 {
        self.bounce.omega_a
    }

    fn turning_amplitude(&self) -> f64 {
        self.bounce.z_max
    }

    fn axial_period(&self) -> f64 {
        self.times.period
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::constant::PhysicalConstants;
    use crate::magnetic;
    use crate::motion::marginal_pitch_angle;
    use assert_approx_eq::assert_approx_eq;

    fn reference_motion() -> (TrapGeometry, BathtubMotion) {
        let constants = PhysicalConstants::si();
        let geometry = TrapGeometry::bathtub(0.35, 0.10, 1.0, 1.0, 0.004).unwrap();
        let theta_bot = marginal_pitch_angle(&geometry).unwrap();
        let electron =
            ElectronKinematicState::from_kinetic_energy_ev(18.6e3, theta_bot, &constants).unwrap();
        (geometry, BathtubMotion::new(&geometry, &electron).unwrap())
    }

    #[test]
    fn test_bounce_times() {
        let (_, motion) = reference_motion();
        let times = motion.bounce_times();
        let flat_transit = 0.10 / motion.flat_region_speed();
        let half_bounce = std::f64::consts::PI / motion.axial_angular_frequency();
        assert_approx_eq!(times.t1, flat_transit, 1e-20);
        assert_approx_eq!(times.t3 - times.t2, flat_transit, 1e-20);
        assert_approx_eq!(
            times.period,
            2.0 * flat_transit + 2.0 * half_bounce,
            1e-20
        );
        assert_approx_eq!(times.period, 6.8134e-8, 1e-11);
        assert_approx_eq!(motion.turning_amplitude(), 0.02218, 1e-5);
    }

    #[test]
    fn test_phase_sequence() {
        let (_, motion) = reference_motion();
        let BounceTimes { t1, t2, t3, period } = motion.bounce_times();
        assert_eq!(motion.phase_at(0.5 * t1), TrapPhase::FlatForward);
        assert_eq!(motion.phase_at(0.5 * (t1 + t2)), TrapPhase::CurvedForward);
        assert_eq!(motion.phase_at(0.5 * (t2 + t3)), TrapPhase::FlatBackward);
        assert_eq!(motion.phase_at(0.5 * (t3 + period)), TrapPhase::CurvedBackward);
        assert_eq!(motion.phase_at(t1), TrapPhase::CurvedForward);
        assert_eq!(motion.phase_at(period + 0.5 * t1), TrapPhase::FlatForward);
        assert_eq!(motion.phase_at(-0.5 * t1), TrapPhase::CurvedBackward);
        assert!(motion.phase_at(t2).is_flat());
        assert!(!motion.phase_at(t3).is_flat());
    }

    #[test]
    fn test_turning_points_at_flat_region_edges() {
        let (_, motion) = reference_motion();
        let times = motion.bounce_times();
        assert_eq!(motion.axial_position(times.t1), 0.05);
        assert_eq!(motion.axial_position(times.t3), -0.05);
        assert_approx_eq!(motion.axial_position(0.0), -0.05, 1e-15);
        assert_approx_eq!(motion.axial_position(times.t2), 0.05, 1e-12);
    }

    #[test]
    fn test_continuity_at_phase_boundaries() {
        let (_, motion) = reference_motion();
        let times = motion.bounce_times();
        let eps = 1e-16;
        let v_scale = motion.flat_region_speed();
        for &boundary in &[times.t1, times.t2, times.t3, times.period] {
            assert_approx_eq!(
                motion.axial_position(boundary - eps),
                motion.axial_position(boundary + eps),
                1e-6
            );
            assert_approx_eq!(
                motion.axial_velocity(boundary - eps) / v_scale,
                motion.axial_velocity(boundary + eps) / v_scale,
                1e-6
            );
        }
    }

    #[test]
    fn test_velocity_reverses_at_curved_apex() {
        let (_, motion) = reference_motion();
        let times = motion.bounce_times();
        let apex = 0.5 * (times.t1 + times.t2);
        assert_approx_eq!(motion.axial_velocity(apex) / motion.flat_region_speed(), 0.0, 1e-9);
        assert_approx_eq!(
            motion.axial_position(apex),
            0.05 + motion.turning_amplitude(),
            1e-12
        );
    }

    #[test]
    fn test_closed_form_field_matches_position_field() {
        let (geometry, motion) = reference_motion();
        let period = motion.axial_period();
        for i in 0..200 {
            let t = period * (i as f64) / 97.0;
            assert_approx_eq!(
                motion.field_at_time(t),
                magnetic::field_at_time(&geometry, &motion, t),
                1e-9
            );
        }
    }

    #[test]
    fn test_field_constant_in_flat_phases() {
        let (geometry, motion) = reference_motion();
        let times = motion.bounce_times();
        assert_eq!(motion.field_at_time(0.3 * times.t1), geometry.minimum_field());
        assert_eq!(
            motion.field_at_time(times.t2 + 0.7 * times.t1),
            geometry.minimum_field()
        );
    }

    #[test]
    fn test_periodicity() {
        let (_, motion) = reference_motion();
        let period = motion.axial_period();
        for &t in &[1.0e-9, 1.7e-8, 4.4e-8, 6.0e-8] {
            assert_approx_eq!(motion.axial_position(t + period), motion.axial_position(t), 1e-9);
            assert_approx_eq!(
                motion.field_at_time(t + 3.0 * period),
                motion.field_at_time(t),
                1e-9
            );
        }
    }

    #[test]
    fn test_zero_width_flat_region() {
        let constants = PhysicalConstants::si();
        let geometry = TrapGeometry::bathtub(0.2, 0.0, 1.0, 1.004, 0.004).unwrap();
        let electron =
            ElectronKinematicState::from_kinetic_energy_ev(30.0e3, 89.43f64.to_radians(), &constants)
                .unwrap();
        let motion = BathtubMotion::new(&geometry, &electron).unwrap();
        let times = motion.bounce_times();
        assert_eq!(times.t1, 0.0);
        assert_approx_eq!(
            times.period,
            2.0 * std::f64::consts::PI / motion.axial_angular_frequency(),
            1e-20
        );
    }
}
