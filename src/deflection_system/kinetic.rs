//! Kinetic-impactor deflection and the resulting along-track shift.

use serde::Serialize;

use crate::constants::{
    IMPACTOR_MASS, IMPACTOR_VELOCITY, MAX_TIME_FACTOR, MIN_VELOCITY_FACTOR,
    REFERENCE_BODY_DIAMETER, REFERENCE_LEAD_DAYS,
};
use crate::errors::ImpactError;
use crate::utils::geodesic::{GeoPoint, PlanarOffset};
use crate::utils::units::{days_to_seconds, require_non_negative, require_positive};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KineticImpactor {
    pub mass_kg: f64,
    pub velocity_ms: f64,
}

impl Default for KineticImpactor {
    fn default() -> Self {
        KineticImpactor {
            mass_kg: IMPACTOR_MASS,
            velocity_ms: IMPACTOR_VELOCITY,
        }
    }
}

impl KineticImpactor {
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass_kg * self.velocity_ms.powi(2)
    }

    /// Induced deflection rate in mm/s. Zero lead time always yields zero.
    pub fn delta_v(
        &self,
        meteor_mass_kg: f64,
        meteor_velocity_ms: f64,
        lead_time_days: f64,
        meteor_diameter_m: f64,
    ) -> Result<f64, ImpactError> {
        require_positive("meteor_mass_kg", meteor_mass_kg)?;
        require_positive("meteor_velocity_ms", meteor_velocity_ms)?;
        require_non_negative("lead_time_days", lead_time_days)?;
        require_positive("meteor_diameter_m", meteor_diameter_m)?;

        let size_factor = (meteor_diameter_m / REFERENCE_BODY_DIAMETER).min(1.0);
        let velocity_factor = (20.0 / meteor_velocity_ms).max(MIN_VELOCITY_FACTOR);
        let mass_factor = ((self.mass_kg / meteor_mass_kg) * 10.0).min(1.0);
        let time_factor = if lead_time_days == 0.0 {
            0.0
        } else {
            (lead_time_days / REFERENCE_LEAD_DAYS).min(MAX_TIME_FACTOR)
        };

        let base_delta_v = (self.kinetic_energy() / meteor_mass_kg) * 1_000.0;
        let delta_v = base_delta_v * size_factor * velocity_factor * mass_factor * time_factor;

        Ok(delta_v.max(0.0))
    }
}

/// Δv (mm/s) from the reference 1000 kg, 10 km/s impactor.
pub fn compute_delta_v(
    meteor_mass_kg: f64,
    meteor_velocity_ms: f64,
    lead_time_days: f64,
    meteor_diameter_m: f64,
) -> Result<f64, ImpactError> {
    KineticImpactor::default().delta_v(
        meteor_mass_kg,
        meteor_velocity_ms,
        lead_time_days,
        meteor_diameter_m,
    )
}

/// Linear displacement (m) after drifting at `dv_mm_s` for `lead_days`.
pub fn along_track_shift(dv_mm_s: f64, lead_days: f64) -> f64 {
    (dv_mm_s / 1_000.0) * days_to_seconds(lead_days)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeflectionOutcome {
    pub dv_mm_s: f64,
    pub lead_days: f64,
    #[serde(rename = "along_track_m")]
    pub along_track_shift_m: f64,
    pub shifted_point: GeoPoint,
}

impl DeflectionOutcome {
    /// Applies a Δv at `lead_days` before encounter and moves `impact_point`
    /// along track by the resulting drift.
    pub fn apply(
        dv_mm_s: f64,
        lead_days: f64,
        impact_point: &GeoPoint,
    ) -> Result<DeflectionOutcome, ImpactError> {
        require_non_negative("dv_mm_s", dv_mm_s)?;
        require_non_negative("lead_days", lead_days)?;
        impact_point.validate()?;

        let shift = along_track_shift(dv_mm_s, lead_days);
        let shifted_point = impact_point.displaced(PlanarOffset::along_track(shift))?;

        Ok(DeflectionOutcome {
            dv_mm_s,
            lead_days,
            along_track_shift_m: shift,
            shifted_point,
        })
    }
}

pub const BURST_BONUS_SCORE: u32 = 50;

/// Arcade points for a deflection: one per kilometer of shift, capped at 100.
pub fn deflection_score(along_track_shift_m: f64) -> u32 {
    if !along_track_shift_m.is_finite() || along_track_shift_m <= 0.0 {
        return 0;
    }
    (along_track_shift_m / 1_000.0).floor().min(100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_reference_impactor_energy() {
        assert_eq!(KineticImpactor::default().kinetic_energy(), 5e10);
    }

    #[test]
    fn test_zero_lead_is_zero() {
        for (mass, velocity, diameter) in [(1.0, 1.0, 1.0), (5.3e9, 19_000.0, 150.0), (1e15, 7e4, 5e3)] {
            assert_eq!(compute_delta_v(mass, velocity, 0.0, diameter).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_velocity_factor_saturates() {
        let slow = compute_delta_v(5.3e9, 11_000.0, 180.0, 150.0).unwrap();
        let fast = compute_delta_v(5.3e9, 70_000.0, 180.0, 150.0).unwrap();
        assert_eq!(slow, fast);
    }

    #[test]
    fn test_factor_product() {
        let mass = 5.3e9;
        let dv = compute_delta_v(mass, 19_000.0, 90.0, 50.0).unwrap();

        let base = 5e10 / mass * 1_000.0;
        let expected = base * 0.5 * 0.1 * (1_000.0 / mass * 10.0) * 0.5;
        assert_relative_eq!(dv, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_time_factor_caps_at_two() {
        let at_cap = compute_delta_v(5.3e9, 19_000.0, 360.0, 150.0).unwrap();
        let beyond = compute_delta_v(5.3e9, 19_000.0, 1_000.0, 150.0).unwrap();
        assert_eq!(at_cap, beyond);
    }

    #[test]
    fn test_light_body_mass_factor_caps() {
        // Below 10 t the mass factor saturates at 1.
        let dv = compute_delta_v(5_000.0, 19_000.0, 180.0, 150.0).unwrap();
        assert_relative_eq!(dv, 5e10 / 5_000.0 * 1_000.0 * 0.1, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(compute_delta_v(0.0, 19_000.0, 180.0, 150.0).is_err());
        assert!(compute_delta_v(1e9, -1.0, 180.0, 150.0).is_err());
        assert!(compute_delta_v(1e9, 19_000.0, -1.0, 150.0).is_err());
        assert!(compute_delta_v(1e9, 19_000.0, f64::NAN, 150.0).is_err());
        assert!(compute_delta_v(1e9, 19_000.0, 180.0, 0.0).is_err());
    }

    #[test]
    fn test_apply_fixed_nudge() {
        let origin = GeoPoint::new(24.8607, 67.0011);
        let outcome = DeflectionOutcome::apply(1.0, 180.0, &origin).unwrap();

        assert_abs_diff_eq!(outcome.along_track_shift_m, 15_552.0, epsilon = 1e-6);
        assert_eq!(outcome.shifted_point.lat, origin.lat);
        assert!(outcome.shifted_point.lon > origin.lon);
    }

    #[test]
    fn test_apply_without_drift_keeps_point() {
        let origin = GeoPoint::new(-33.9, 151.2);
        let outcome = DeflectionOutcome::apply(0.0, 365.0, &origin).unwrap();
        assert_eq!(outcome.along_track_shift_m, 0.0);
        assert_eq!(outcome.shifted_point, origin);
    }

    #[test]
    fn test_score() {
        assert_eq!(deflection_score(0.0), 0);
        assert_eq!(deflection_score(15_552.0), 15);
        assert_eq!(deflection_score(157_680.0), 100);
        assert_eq!(deflection_score(f64::NAN), 0);
    }
}
