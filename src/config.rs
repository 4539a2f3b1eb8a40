//! TOML analysis configuration.
//!
//! Every section is optional. A missing `[impactor]` or `[location]` falls
//! back to the sample body over Karachi, and a missing `[[plans]]` list
//! falls back to the default deflection plans.

use std::path::Path;

use serde::Deserialize;

use crate::constants::{SAMPLE_LATITUDE, SAMPLE_LONGITUDE};
use crate::errors::ReportError;
use crate::impact_system::energy::ImpactorParameters;
use crate::scenario_system::report::{default_plans, DeflectionPlan, ScenarioInputs};
use crate::utils::geodesic::GeoPoint;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub impactor: ImpactorConfig,
    #[serde(default = "default_location")]
    pub location: GeoPoint,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub observer_distance_km: f64,
    /// Seed for the burst-altitude draw. Unseeded runs use OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_plans")]
    pub plans: Vec<DeflectionPlan>,
}

/// Impactor section. Individual keys may be omitted.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImpactorConfig {
    pub diameter_m: f64,
    pub density_kgm3: f64,
    pub velocity_kms: f64,
    pub angle_deg: f64,
}

impl Default for ImpactorConfig {
    fn default() -> Self {
        let sample = ImpactorParameters::default();
        ImpactorConfig {
            diameter_m: sample.diameter_m,
            density_kgm3: sample.density_kgm3,
            velocity_kms: sample.velocity_kms,
            angle_deg: sample.angle_deg,
        }
    }
}

impl From<ImpactorConfig> for ImpactorParameters {
    fn from(config: ImpactorConfig) -> Self {
        ImpactorParameters::new(
            config.diameter_m,
            config.density_kgm3,
            config.velocity_kms,
            config.angle_deg,
        )
    }
}

fn default_location() -> GeoPoint {
    GeoPoint::new(SAMPLE_LATITUDE, SAMPLE_LONGITUDE)
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            impactor: ImpactorConfig::default(),
            location: default_location(),
            population: None,
            observer_distance_km: 0.0,
            seed: None,
            plans: default_plans(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_toml_str(contents: &str) -> Result<AnalysisConfig, ReportError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn into_inputs(self) -> ScenarioInputs {
        ScenarioInputs {
            impactor: self.impactor.into(),
            location: self.location,
            population: self.population,
            observer_distance_km: self.observer_distance_km,
            plans: self.plans,
        }
    }
}

/// Load an analysis configuration from a TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AnalysisConfig, ReportError> {
    let contents = std::fs::read_to_string(path)?;
    AnalysisConfig::from_toml_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario_system::report::DeflectionStrategy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_document_uses_sample() {
        let config = AnalysisConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnalysisConfig::default());

        let inputs = config.into_inputs();
        assert_eq!(inputs.impactor, ImpactorParameters::default());
        assert_eq!(inputs.location, GeoPoint::new(24.8607, 67.0011));
        assert_eq!(inputs.plans.len(), 3);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_full_document() {
        let config = AnalysisConfig::from_toml_str(
            r#"
seed = 7
population = 250000
observer_distance_km = 40.0

[impactor]
diameter_m = 320.0
velocity_kms = 17.5

[location]
lat = 35.6762
lon = 139.6503
elev = 40.0

[[plans]]
name = "impactor_launch"
lead_days = 720.0
strategy = "kinetic_impactor"

[[plans]]
name = "tractor"
lead_days = 3650.0
strategy = "fixed_delta_v"
dv_mm_s = 0.2
"#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.population, Some(250_000));
        assert_eq!(config.impactor.diameter_m, 320.0);
        // Omitted impactor keys keep their sample values.
        assert_eq!(config.impactor.density_kgm3, 3_000.0);
        assert_eq!(config.location.elev, Some(40.0));
        assert_eq!(config.plans.len(), 2);
        assert_eq!(config.plans[0].strategy, DeflectionStrategy::KineticImpactor);
        assert_eq!(
            config.plans[1].strategy,
            DeflectionStrategy::FixedDeltaV { dv_mm_s: 0.2 }
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = AnalysisConfig::from_toml_str("sead = 3").unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "seed = 99\n[impactor]\ndiameter_m = 20.0").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.impactor.diameter_m, 20.0);
        assert!(ImpactorParameters::from(config.impactor).is_atmospheric_burst());
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/nonexistent/analysis.toml").unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
