//! Scenario aggregation: one impact, several deflection plans, and the
//! hazard assessments, bundled into a serializable report.
//!
//! Atmospheric bursts short-circuit everything downstream of the impact
//! model. Plans come back as `NotApplicable` and the hazard sections are
//! absent.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::deflection_system::kinetic::{
    compute_delta_v, deflection_score, DeflectionOutcome, BURST_BONUS_SCORE,
};
use crate::errors::ImpactError;
use crate::hazard_system::consequences::{
    assess_consequences, population_affected, ConsequenceAssessment,
};
use crate::hazard_system::seismic::{assess_seismic, SeismicAssessment};
use crate::hazard_system::tsunami::{analyze_tsunami_risk, TsunamiAssessment};
use crate::impact_system::energy::{
    compute_impact, compute_impact_with_burst_altitude, ImpactPhysicsResult, ImpactorParameters,
};
use crate::utils::geodesic::GeoPoint;
use crate::utils::units::{require_finite, require_non_negative};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum DeflectionStrategy {
    /// Δv from the reference kinetic impactor model.
    KineticImpactor,
    /// A user-chosen nudge in mm/s.
    FixedDeltaV { dv_mm_s: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectionPlan {
    pub name: String,
    pub lead_days: f64,
    #[serde(flatten)]
    pub strategy: DeflectionStrategy,
}

impl DeflectionPlan {
    pub fn kinetic(name: &str, lead_days: f64) -> Self {
        DeflectionPlan {
            name: name.to_string(),
            lead_days,
            strategy: DeflectionStrategy::KineticImpactor,
        }
    }

    pub fn fixed(name: &str, dv_mm_s: f64, lead_days: f64) -> Self {
        DeflectionPlan {
            name: name.to_string(),
            lead_days,
            strategy: DeflectionStrategy::FixedDeltaV { dv_mm_s },
        }
    }

    fn validate(&self) -> Result<(), ImpactError> {
        require_non_negative("lead_days", self.lead_days)?;
        if let DeflectionStrategy::FixedDeltaV { dv_mm_s } = self.strategy {
            require_non_negative("dv_mm_s", dv_mm_s)?;
        }
        Ok(())
    }
}

pub fn default_plans() -> Vec<DeflectionPlan> {
    vec![
        DeflectionPlan::fixed("conservative", 1.0, 180.0),
        DeflectionPlan::fixed("aggressive", 5.0, 365.0),
        DeflectionPlan::kinetic("kinetic_impactor", 180.0),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    #[serde(flatten)]
    pub impactor: ImpactorParameters,
    pub location: GeoPoint,
    /// People exposed to the seismic event. When absent, the population
    /// inside the light-damage ring is used.
    pub population: Option<u64>,
    pub observer_distance_km: f64,
    pub plans: Vec<DeflectionPlan>,
}

impl ScenarioInputs {
    pub fn new(impactor: ImpactorParameters, location: GeoPoint) -> Self {
        ScenarioInputs {
            impactor,
            location,
            population: None,
            observer_distance_km: 0.0,
            plans: default_plans(),
        }
    }

    pub fn validate(&self) -> Result<(), ImpactError> {
        self.impactor.validate()?;
        self.location.validate()?;
        require_finite("observer_distance_km", self.observer_distance_km)?;
        for plan in &self.plans {
            plan.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeflectionResult {
    Applied(DeflectionOutcome),
    NotApplicable { reason: String },
}

impl DeflectionResult {
    pub fn outcome(&self) -> Option<&DeflectionOutcome> {
        match self {
            DeflectionResult::Applied(outcome) => Some(outcome),
            DeflectionResult::NotApplicable { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub inputs: ScenarioInputs,
    pub physics: ImpactPhysicsResult,
    /// Keyed by plan name. A repeated name keeps the last plan.
    pub deflection: BTreeMap<String, DeflectionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seismic: Option<SeismicAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsunami: Option<TsunamiAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consequences: Option<ConsequenceAssessment>,
}

impl ScenarioReport {
    pub fn build<R: Rng + ?Sized>(
        inputs: ScenarioInputs,
        rng: &mut R,
    ) -> Result<ScenarioReport, ImpactError> {
        inputs.validate()?;
        let physics = compute_impact(&inputs.impactor, rng)?;
        Self::assemble(inputs, physics)
    }

    /// Recomputes the report from its recorded inputs and burst altitude.
    pub fn replay(&self) -> Result<ScenarioReport, ImpactError> {
        self.inputs.validate()?;
        let physics =
            compute_impact_with_burst_altitude(&self.inputs.impactor, self.physics.burst_altitude_km)?;
        Self::assemble(self.inputs.clone(), physics)
    }

    fn assemble(
        inputs: ScenarioInputs,
        physics: ImpactPhysicsResult,
    ) -> Result<ScenarioReport, ImpactError> {
        if physics.atmospheric_burst {
            let deflection = inputs
                .plans
                .iter()
                .map(|plan| {
                    let skipped = DeflectionResult::NotApplicable {
                        reason: "meteor bursts in the atmosphere; no deflection needed".to_string(),
                    };
                    (plan.name.clone(), skipped)
                })
                .collect();
            return Ok(ScenarioReport {
                inputs,
                physics,
                deflection,
                seismic: None,
                tsunami: None,
                consequences: None,
            });
        }

        let mut deflection = BTreeMap::new();
        for plan in &inputs.plans {
            let dv_mm_s = match plan.strategy {
                DeflectionStrategy::KineticImpactor => compute_delta_v(
                    physics.mass_kg,
                    inputs.impactor.velocity_ms(),
                    plan.lead_days,
                    inputs.impactor.diameter_m,
                )?,
                DeflectionStrategy::FixedDeltaV { dv_mm_s } => dv_mm_s,
            };
            let outcome = DeflectionOutcome::apply(dv_mm_s, plan.lead_days, &inputs.location)?;
            deflection.insert(plan.name.clone(), DeflectionResult::Applied(outcome));
        }

        let population = inputs
            .population
            .unwrap_or_else(|| population_affected(physics.rings_km.light));
        let seismic = assess_seismic(physics.energy_j, population, inputs.observer_distance_km)?;
        let tsunami =
            analyze_tsunami_risk(physics.energy_j, inputs.location.lat, inputs.location.lon)?;
        let consequences = assess_consequences(&physics, &inputs.location);

        Ok(ScenarioReport {
            inputs,
            physics,
            deflection,
            seismic: Some(seismic),
            tsunami: Some(tsunami),
            consequences: Some(consequences),
        })
    }

    pub fn outcome(&self, plan_name: &str) -> Option<&DeflectionOutcome> {
        self.deflection
            .get(plan_name)
            .and_then(DeflectionResult::outcome)
    }

    /// Arcade score: the burst bonus, or the score of the largest shift.
    pub fn arcade_score(&self) -> u32 {
        if self.physics.atmospheric_burst {
            return BURST_BONUS_SCORE;
        }
        self.deflection
            .values()
            .filter_map(DeflectionResult::outcome)
            .map(|outcome| deflection_score(outcome.along_track_shift_m))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn karachi() -> GeoPoint {
        GeoPoint::new(24.8607, 67.0011)
    }

    fn build(impactor: ImpactorParameters) -> ScenarioReport {
        let inputs = ScenarioInputs::new(impactor, karachi());
        ScenarioReport::build(inputs, &mut ChaCha8Rng::seed_from_u64(11)).unwrap()
    }

    #[test]
    fn test_default_plans() {
        let report = build(ImpactorParameters::default());

        assert_eq!(report.deflection.len(), 3);
        let conservative = report.outcome("conservative").unwrap();
        assert_eq!(conservative.dv_mm_s, 1.0);
        assert_abs_diff_eq!(conservative.along_track_shift_m, 15_552.0, epsilon = 1e-6);

        let aggressive = report.outcome("aggressive").unwrap();
        assert_abs_diff_eq!(aggressive.along_track_shift_m, 157_680.0, epsilon = 1e-6);
        assert!(aggressive.shifted_point.lon > conservative.shifted_point.lon);
    }

    #[test]
    fn test_kinetic_plan_uses_model() {
        let report = build(ImpactorParameters::default());
        let kinetic = report.outcome("kinetic_impactor").unwrap();

        let expected = compute_delta_v(report.physics.mass_kg, 19_000.0, 180.0, 150.0).unwrap();
        assert_relative_eq!(kinetic.dv_mm_s, expected, max_relative = 1e-12);
        assert!(kinetic.along_track_shift_m > 0.0);
        assert_ne!(kinetic.shifted_point, karachi());
    }

    #[test]
    fn test_hazards_present_for_surface_impact() {
        let report = build(ImpactorParameters::default());
        let seismic = report.seismic.unwrap();
        assert_eq!(seismic.mmi, 12);
        assert!(report.tsunami.is_some());
        assert!(report.consequences.is_some());
        assert_eq!(report.arcade_score(), 100);
    }

    #[test]
    fn test_burst_short_circuits() {
        let report = build(ImpactorParameters::new(12.0, 3_000.0, 19.0, 45.0));

        assert!(report.physics.atmospheric_burst);
        assert_eq!(report.deflection.len(), 3);
        assert!(report
            .deflection
            .values()
            .all(|result| matches!(result, DeflectionResult::NotApplicable { .. })));
        assert!(report.outcome("conservative").is_none());
        assert!(report.seismic.is_none());
        assert!(report.tsunami.is_none());
        assert!(report.consequences.is_none());
        assert_eq!(report.arcade_score(), BURST_BONUS_SCORE);
    }

    #[test]
    fn test_replay_matches() {
        for diameter in [12.0, 150.0] {
            let report = build(ImpactorParameters::new(diameter, 3_000.0, 19.0, 45.0));
            assert_eq!(report.replay().unwrap(), report);
        }
    }

    #[test]
    fn test_invalid_plan_rejected() {
        let mut inputs = ScenarioInputs::new(ImpactorParameters::default(), karachi());
        inputs.plans.push(DeflectionPlan::fixed("backwards", -1.0, 30.0));
        let err = ScenarioReport::build(inputs, &mut ChaCha8Rng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, ImpactError::InvalidParameter { name: "dv_mm_s", .. }));
    }

    #[test]
    fn test_explicit_population() {
        let mut inputs = ScenarioInputs::new(ImpactorParameters::default(), karachi());
        inputs.population = Some(2_000);
        let report = ScenarioReport::build(inputs, &mut ChaCha8Rng::seed_from_u64(0)).unwrap();
        let casualties = report.seismic.unwrap().casualties;
        assert_eq!(casualties.fatalities, 200);
        assert_eq!(casualties.injuries, 600);
    }
}
