//! Relativistic cyclotron frequency.

use crate::constant::PhysicalConstants;
use crate::maths;

/// Angular cyclotron frequency of an electron with kinetic energy `kinetic_energy` (J)
/// in a field of magnitude `field` (T), rad/s.
///
/// The inertia is the total relativistic mass `m + KE / c^2`, so the value reduces to the
/// classical `q B / m` as the kinetic energy goes to zero.
pub fn angular_cyclotron_frequency(
    constants: &PhysicalConstants,
    field: f64,
    kinetic_energy: f64,
) -> f64 {
    constants.charge * field
        / maths::relativistic_mass(constants.rest_mass, kinetic_energy, constants.light_speed)
}

/// Cyclotron frequency in Hz, `omega_c / 2 pi`.
pub fn cyclotron_frequency(constants: &PhysicalConstants, field: f64, kinetic_energy: f64) -> f64 {
    angular_cyclotron_frequency(constants, field, kinetic_energy) / (2.0 * constants.pi)
}

/// Gyroradius `gamma m v / (q B)`, in m, for an electron gyrating at `speed` m/s perpendicular
/// to the field.
pub fn gyroradius(constants: &PhysicalConstants, gamma: f64, speed: f64, field: f64) -> f64 {
    gamma * constants.rest_mass * speed / (constants.charge * field)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_non_relativistic_limit() {
        let constants = PhysicalConstants::si();
        let classical = constants.charge * 1.0 / constants.rest_mass;
        assert_eq!(angular_cyclotron_frequency(&constants, 1.0, 0.0), classical);
        let tiny = constants.ev_to_joules(1.0e-6);
        assert_approx_eq!(
            angular_cyclotron_frequency(&constants, 1.0, tiny) / classical,
            1.0,
            1e-10
        );
    }

    #[test]
    fn test_tritium_endpoint_frequency() {
        let constants = PhysicalConstants::si();
        let ke = constants.ev_to_joules(18.6e3);
        // 1 T, 18.6 keV: 27.0 GHz.
        let f = cyclotron_frequency(&constants, 1.0, ke);
        assert_approx_eq!(f / 1.0e9, 27.0, 0.05);
        assert_approx_eq!(
            angular_cyclotron_frequency(&constants, 1.0, ke),
            2.0 * constants.pi * f,
            1.0
        );
    }

    #[test]
    fn test_frequency_scales_with_field() {
        let constants = PhysicalConstants::si();
        let ke = constants.ev_to_joules(30.0e3);
        assert_approx_eq!(
            angular_cyclotron_frequency(&constants, 2.0, ke),
            2.0 * angular_cyclotron_frequency(&constants, 1.0, ke),
            1e-3
        );
    }

    #[test]
    fn test_gyration_speed_matches_input_speed() {
        let constants = PhysicalConstants::si();
        let ke = constants.ev_to_joules(1.0e6);
        let gamma = maths::lorentz_factor_from_kinetic_energy(ke, constants.rest_energy());
        let speed = 0.5 * constants.light_speed;
        let radius = gyroradius(&constants, gamma, speed, 1.0);
        assert_approx_eq!(
            radius * angular_cyclotron_frequency(&constants, 1.0, ke) / speed,
            1.0,
            1e-9
        );
    }
}
