//! Axial magnetic field of the trap.

use crate::error::{Result, TrapError};
use crate::motion::AxialMotion;
use serde::{Deserialize, Serialize};

pub mod cyclotron;

/// Geometry of a magnetic bottle.
///
/// The field along the axis is flat across a central region of width `flat_region_width`
/// and rises quadratically beyond it, over a length scale set by `coil_scale_length`.
/// A harmonic trap is the special case with no flat region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrapGeometry {
    /// Length scale `l0` of the quadratic rise, m
    pub coil_scale_length: f64,
    /// Width `l1` of the flat central region, m. Zero for a harmonic trap.
    #[serde(default)]
    pub flat_region_width: f64,
    /// Field scale `b0`, T
    pub field_scale: f64,
    /// Background field `B_bkg`, T
    pub background_field: f64,
    /// Trap depth, T. Must satisfy `0 <= trap_depth <= background_field`.
    pub trap_depth: f64,
}

impl TrapGeometry {
    /// A single-coil trap with no flat region.
    pub fn harmonic(
        coil_scale_length: f64,
        field_scale: f64,
        background_field: f64,
        trap_depth: f64,
    ) -> Result<Self> {
        Self::bathtub(
            coil_scale_length,
            0.0,
            field_scale,
            background_field,
            trap_depth,
        )
    }

    /// A two-coil trap with a flat central region of width `flat_region_width`.
    pub fn bathtub(
        coil_scale_length: f64,
        flat_region_width: f64,
        field_scale: f64,
        background_field: f64,
        trap_depth: f64,
    ) -> Result<Self> {
        let geometry = TrapGeometry {
            coil_scale_length,
            flat_region_width,
            field_scale,
            background_field,
            trap_depth,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Checks the geometry describes a trap the model can evaluate.
    pub fn validate(&self) -> Result<()> {
        if !(self.coil_scale_length > 0.0) || !self.coil_scale_length.is_finite() {
            return Err(TrapError::InvalidParameter(format!(
                "coil scale length must be positive, got {} m",
                self.coil_scale_length
            )));
        }
        if !(self.flat_region_width >= 0.0) || !self.flat_region_width.is_finite() {
            return Err(TrapError::InvalidParameter(format!(
                "flat region width must be non-negative, got {} m",
                self.flat_region_width
            )));
        }
        if !self.field_scale.is_finite() {
            return Err(TrapError::InvalidParameter(format!(
                "field scale must be finite, got {} T",
                self.field_scale
            )));
        }
        if !(self.background_field > 0.0) || !self.background_field.is_finite() {
            return Err(TrapError::InvalidParameter(format!(
                "background field must be positive, got {} T",
                self.background_field
            )));
        }
        if !(self.trap_depth >= 0.0 && self.trap_depth <= self.background_field) {
            return Err(TrapError::TrapDepthOutOfRange {
                trap_depth: self.trap_depth,
                background_field: self.background_field,
            });
        }
        Ok(())
    }

    /// Minimum pitch angle for an electron at the trap bottom to remain trapped,
    /// `theta_bot = asin(sqrt(1 - trap_depth / B_bkg))`, rad.
    ///
    /// Returns zero for `trap_depth == B_bkg`; callers building motion from that angle
    /// will see [TrapError::DegenerateConfiguration].
    pub fn minimum_pitch_angle(&self) -> Result<f64> {
        self.validate()?;
        Ok((1.0 - self.trap_depth / self.background_field).sqrt().asin())
    }

    /// Field in the flat region (the field minimum), T.
    pub fn minimum_field(&self) -> f64 {
        self.background_field + self.field_scale
    }
}

/// Calculates the magnitude of the field at axial position `z`, in T.
///
/// For `|z| <= l1/2` the field is `B_bkg + b0`; outside the flat region it rises as
/// `B_bkg + b0 (1 + (|z| - l1/2)^2 / l0^2)`.
///
/// The geometry is not validated here, so the bare coil profile without background
/// (`B_bkg = 0`) can be evaluated from a struct literal. Motion models require a validated
/// geometry with a positive background field.
pub fn field_at_position(geometry: &TrapGeometry, z: f64) -> f64 {
    let half_width = geometry.flat_region_width / 2.0;
    let l0 = geometry.coil_scale_length;
    let curvature = if z < -half_width {
        (z + half_width).powi(2) / (l0 * l0)
    } else if z > half_width {
        (z - half_width).powi(2) / (l0 * l0)
    } else {
        0.0
    };
    geometry.background_field + geometry.field_scale * (1.0 + curvature)
}

/// Calculates the field experienced at time `t` by an electron following `motion`, in T.
pub fn field_at_time<M: AxialMotion>(geometry: &TrapGeometry, motion: &M, t: f64) -> f64 {
    field_at_position(geometry, motion.axial_position(t))
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn bathtub() -> TrapGeometry {
        TrapGeometry::bathtub(0.35, 0.10, 1.0, 1.0, 0.004).unwrap()
    }

    #[test]
    fn test_flat_region_field() {
        let geometry = bathtub();
        for &z in &[-0.05, -0.02, 0.0, 0.031, 0.05] {
            assert_eq!(field_at_position(&geometry, z), 2.0);
        }
    }

    #[test]
    fn test_curved_region_field() {
        let geometry = bathtub();
        // 0.35 m beyond the edge of the flat region the quadratic term equals one.
        assert_approx_eq!(field_at_position(&geometry, 0.40), 3.0, 1e-12);
        assert_approx_eq!(field_at_position(&geometry, -0.40), 3.0, 1e-12);
        assert_approx_eq!(
            field_at_position(&geometry, 0.05 + 0.1),
            2.0 + (0.1f64 / 0.35).powi(2),
            1e-12
        );
    }

    #[test]
    fn test_field_continuous_at_flat_region_edges() {
        let geometry = bathtub();
        let eps = 1e-9;
        for &edge in &[-0.05, 0.05] {
            assert_approx_eq!(
                field_at_position(&geometry, edge - eps),
                field_at_position(&geometry, edge + eps),
                1e-12
            );
        }
    }

    #[test]
    fn test_harmonic_profile() {
        let geometry = TrapGeometry::harmonic(0.2, 1.0, 1.004, 0.004).unwrap();
        let z = 0.07;
        assert_approx_eq!(
            field_at_position(&geometry, z),
            1.004 + 1.0 * (1.0 + z * z / 0.04),
            1e-12
        );
        assert_eq!(field_at_position(&geometry, 0.0), geometry.minimum_field());
    }

    #[test]
    fn test_profile_without_background() {
        let coils_only = TrapGeometry {
            coil_scale_length: 0.35,
            flat_region_width: 0.10,
            field_scale: 1.0,
            background_field: 0.0,
            trap_depth: 0.0,
        };
        assert!(coils_only.validate().is_err());
        assert_eq!(field_at_position(&coils_only, 0.0), 1.0);
        assert_approx_eq!(field_at_position(&coils_only, 0.40), 2.0, 1e-12);
    }

    #[test]
    fn test_minimum_pitch_angle() {
        let theta_bot = bathtub().minimum_pitch_angle().unwrap();
        assert_approx_eq!(theta_bot, (0.996f64).sqrt().asin(), 1e-12);
        assert_approx_eq!(theta_bot.to_degrees(), 86.3739, 1e-3);
    }

    #[test]
    fn test_minimum_pitch_angle_at_full_depth_is_zero() {
        let geometry = TrapGeometry::bathtub(0.35, 0.1, 1.0, 1.0, 1.0).unwrap();
        assert_eq!(geometry.minimum_pitch_angle().unwrap(), 0.0);
    }

    #[test]
    fn test_trap_depth_exceeding_background_is_rejected() {
        let result = TrapGeometry::bathtub(0.35, 0.1, 1.0, 1.0, 1.5);
        assert!(matches!(
            result,
            Err(TrapError::TrapDepthOutOfRange { .. })
        ));
        let geometry = TrapGeometry {
            coil_scale_length: 0.35,
            flat_region_width: 0.1,
            field_scale: 1.0,
            background_field: 1.0,
            trap_depth: 1.5,
        };
        assert!(geometry.minimum_pitch_angle().is_err());
    }

    #[test]
    fn test_invalid_lengths_are_rejected() {
        assert!(matches!(
            TrapGeometry::harmonic(0.0, 1.0, 1.0, 0.004),
            Err(TrapError::InvalidParameter(_))
        ));
        assert!(TrapGeometry::bathtub(0.35, -0.1, 1.0, 1.0, 0.004).is_err());
        assert!(TrapGeometry::bathtub(0.35, 0.1, 1.0, 0.0, 0.0).is_err());
    }
}
