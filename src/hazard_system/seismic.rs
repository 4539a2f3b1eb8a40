use serde::Serialize;

use crate::constants::EPICENTER_MMI;
use crate::errors::ImpactError;
use crate::utils::units::{require_finite, require_non_negative};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EarthquakeEffects {
    pub level: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CasualtyEstimate {
    pub fatalities: u64,
    pub injuries: u64,
    /// Percent of the population.
    #[serde(rename = "fatalityRate")]
    pub fatality_rate: f64,
    /// Percent of the population.
    #[serde(rename = "injuryRate")]
    pub injury_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeismicAssessment {
    pub magnitude: f64,
    pub mmi: u8,
    pub effects: EarthquakeEffects,
    pub casualties: CasualtyEstimate,
}

const MMI_EFFECTS: [EarthquakeEffects; 12] = [
    EarthquakeEffects {
        level: "Not felt",
        description: "Not felt except by a very few under especially favorable conditions.",
    },
    EarthquakeEffects {
        level: "Weak",
        description: "Felt only by a few persons at rest, especially on upper floors of buildings.",
    },
    EarthquakeEffects {
        level: "Weak",
        description: "Felt quite noticeably by persons indoors, especially on upper floors of buildings.",
    },
    EarthquakeEffects {
        level: "Light",
        description: "Felt indoors by many, outdoors by few during the day.",
    },
    EarthquakeEffects {
        level: "Moderate",
        description: "Felt by nearly everyone; many awakened. Some dishes, windows broken.",
    },
    EarthquakeEffects {
        level: "Strong",
        description: "Felt by all, many frightened. Some heavy furniture moved.",
    },
    EarthquakeEffects {
        level: "Very Strong",
        description: "Damage negligible in buildings of good design and construction.",
    },
    EarthquakeEffects {
        level: "Severe",
        description: "Damage slight in specially designed structures; considerable damage in ordinary substantial buildings.",
    },
    EarthquakeEffects {
        level: "Violent",
        description: "Damage considerable in specially designed structures; well-designed frame structures thrown out of plumb.",
    },
    EarthquakeEffects {
        level: "Extreme",
        description: "Some well-built wooden structures destroyed; most masonry and frame structures destroyed with foundations.",
    },
    EarthquakeEffects {
        level: "Extreme",
        description: "Few, if any, masonry structures remain standing. Bridges destroyed.",
    },
    EarthquakeEffects {
        level: "Extreme",
        description: "Damage total. Lines of sight and level are distorted. Objects thrown into the air.",
    },
];

/// Equivalent moment magnitude of the impact, clamped to [0, 10].
pub fn earthquake_magnitude(energy_j: f64) -> Result<f64, ImpactError> {
    require_non_negative("energy_J", energy_j)?;
    if energy_j == 0.0 {
        return Ok(0.0);
    }
    let seismic_moment = energy_j * 1e6;
    let magnitude = (2.0 / 3.0) * seismic_moment.log10() - 10.7;
    Ok(magnitude.clamp(0.0, 10.0))
}

/// Modified Mercalli Intensity at `distance_km` from the epicenter.
pub fn calculate_mmi(magnitude: f64, distance_km: f64) -> Result<u8, ImpactError> {
    require_finite("magnitude", magnitude)?;
    require_finite("distance_km", distance_km)?;
    if distance_km <= 0.0 {
        return Ok(EPICENTER_MMI);
    }
    let mmi = magnitude - 1.5 * (distance_km + 1.0).log10() - 0.5;
    Ok(mmi.round().clamp(1.0, 12.0) as u8)
}

/// Effects for an MMI value. Out-of-table values read as the maximum.
pub fn earthquake_effects(mmi: u8) -> EarthquakeEffects {
    match mmi {
        1..=12 => MMI_EFFECTS[usize::from(mmi) - 1],
        _ => MMI_EFFECTS[11],
    }
}

fn casualty_rates(mmi: u8) -> (f64, f64) {
    match mmi {
        10..=u8::MAX => (0.1, 0.3),
        9 => (0.03, 0.15),
        8 => (0.01, 0.05),
        7 => (0.001, 0.01),
        _ => (0.0, 0.0),
    }
}

pub fn estimate_casualties(
    magnitude: f64,
    population: u64,
    distance_km: f64,
) -> Result<CasualtyEstimate, ImpactError> {
    let mmi = calculate_mmi(magnitude, distance_km)?;
    let (fatality_rate, injury_rate) = casualty_rates(mmi);
    let population = population as f64;

    Ok(CasualtyEstimate {
        fatalities: (population * fatality_rate).round() as u64,
        injuries: (population * injury_rate).round() as u64,
        fatality_rate: fatality_rate * 100.0,
        injury_rate: injury_rate * 100.0,
    })
}

/// Full seismic picture for an observer `distance_km` from the impact.
pub fn assess_seismic(
    energy_j: f64,
    population: u64,
    distance_km: f64,
) -> Result<SeismicAssessment, ImpactError> {
    let magnitude = earthquake_magnitude(energy_j)?;
    let mmi = calculate_mmi(magnitude, distance_km)?;
    Ok(SeismicAssessment {
        magnitude,
        mmi,
        effects: earthquake_effects(mmi),
        casualties: estimate_casualties(magnitude, population, distance_km)?,
    })
}
