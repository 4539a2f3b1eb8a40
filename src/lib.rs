pub mod config;
pub mod constants;
pub mod deflection_system;
pub mod errors;
pub mod hazard_system;
pub mod impact_system;
pub mod scenario_system;
pub mod utils;

pub use constants::*;
pub use errors::{ImpactError, ReportError};

// Re-export commonly used items from impact_system
pub use impact_system::catalog::{first_neows_record, parse_neows_feed, NeoRecord};
pub use impact_system::energy::{
    compute_impact, compute_impact_with_burst_altitude, ImpactPhysicsResult, ImpactorParameters,
};
pub use impact_system::threat::{random_threat, Threat};

// Re-export commonly used items from deflection_system
pub use deflection_system::kinetic::{compute_delta_v, DeflectionOutcome, KineticImpactor};

// Re-export commonly used items from hazard_system
pub use hazard_system::consequences::assess_consequences;
pub use hazard_system::seismic::assess_seismic;
pub use hazard_system::tsunami::{analyze_tsunami_risk, TsunamiRisk};

// Re-export commonly used items from scenario_system
pub use scenario_system::report::{
    DeflectionPlan, DeflectionResult, DeflectionStrategy, ScenarioInputs, ScenarioReport,
};
pub use scenario_system::summary::ReportSummary;

// Re-export commonly used utilities
pub use config::{load_config, AnalysisConfig};
pub use utils::geodesic::{haversine_km, offset_to_lat_lon, GeoPoint, PlanarOffset};
