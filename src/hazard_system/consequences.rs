//! Rough population, environmental and economic estimates keyed to the
//! damage rings and yield.

use serde::Serialize;

use crate::constants::URBAN_POPULATION_DENSITY;
use crate::impact_system::energy::ImpactPhysicsResult;
use crate::utils::geodesic::{haversine_km, GeoPoint};

pub struct City {
    pub name: &'static str,
    pub location: GeoPoint,
}

pub const CITIES: [City; 3] = [
    City {
        name: "Karachi",
        location: GeoPoint {
            lat: 24.8607,
            lon: 67.0011,
            elev: None,
        },
    },
    City {
        name: "Hyderabad",
        location: GeoPoint {
            lat: 25.3971,
            lon: 68.3730,
            elev: None,
        },
    },
    City {
        name: "Lahore",
        location: GeoPoint {
            lat: 31.5590,
            lon: 74.3587,
            elev: None,
        },
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WildfireRisk {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationImpact {
    pub population_affected: u64,
    pub major_cities_in_blast_radius: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentalImpact {
    pub atmospheric_dust_tons: f64,
    pub wildfires_risk: WildfireRisk,
    pub climate_impact_years: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomicImpact {
    pub infrastructure_damage_estimate_usd: u64,
    pub evacuation_costs_usd: u64,
    pub recovery_time_years: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsequenceAssessment {
    pub location: LocationImpact,
    pub environmental_impact: EnvironmentalImpact,
    pub economic_impact: EconomicImpact,
}

/// People inside a ring of `radius_km` at urban density.
pub fn population_affected(radius_km: f64) -> u64 {
    let area_km2 = std::f64::consts::PI * radius_km * radius_km;
    (area_km2 * URBAN_POPULATION_DENSITY).round() as u64
}

pub fn cities_within(center: &GeoPoint, radius_km: f64) -> Vec<String> {
    CITIES
        .iter()
        .filter(|city| haversine_km(center, &city.location) <= radius_km)
        .map(|city| city.name.to_string())
        .collect()
}

pub fn environmental_impact(physics: &ImpactPhysicsResult) -> EnvironmentalImpact {
    let megatons = physics.energy_mt_tnt;
    let wildfires_risk = if megatons > 5.0 {
        WildfireRisk::High
    } else if megatons > 1.0 {
        WildfireRisk::Medium
    } else {
        WildfireRisk::Low
    };
    let climate_impact_years = if megatons > 10.0 {
        "5-10"
    } else if megatons > 5.0 {
        "2-5"
    } else {
        "1-2"
    };

    EnvironmentalImpact {
        atmospheric_dust_tons: physics.mass_kg * 0.1,
        wildfires_risk,
        climate_impact_years,
    }
}

pub fn economic_impact(physics: &ImpactPhysicsResult) -> EconomicImpact {
    let light_km = physics.rings_km.light;
    let megatons = physics.energy_mt_tnt;

    let infrastructure = 100_000_000.0 * (light_km / 10.0).powi(2);
    let evacuation_costs_usd = if light_km > 50.0 {
        1_000_000_000
    } else if light_km > 20.0 {
        500_000_000
    } else {
        100_000_000
    };
    let recovery_time_years = if megatons > 10.0 {
        "10-50"
    } else if megatons > 5.0 {
        "5-20"
    } else {
        "1-10"
    };

    EconomicImpact {
        infrastructure_damage_estimate_usd: infrastructure.round() as u64,
        evacuation_costs_usd,
        recovery_time_years,
    }
}

pub fn assess_consequences(
    physics: &ImpactPhysicsResult,
    impact_point: &GeoPoint,
) -> ConsequenceAssessment {
    let light_km = physics.rings_km.light;
    ConsequenceAssessment {
        location: LocationImpact {
            population_affected: population_affected(light_km),
            major_cities_in_blast_radius: cities_within(impact_point, light_km),
        },
        environmental_impact: environmental_impact(physics),
        economic_impact: economic_impact(physics),
    }
}
