use crate::scenario_system::report::{DeflectionResult, ScenarioReport};
use crate::utils::units::{format_number, km_to_m, m_to_km};

/// Human-readable digest of a report, collected section by section.
pub struct ReportSummary {
    pub log: Vec<String>,
}

impl ReportSummary {
    fn format_distance(km: f64) -> String {
        if km >= 1.0 {
            format!("{} km", format_number(km, 2))
        } else {
            format!("{} m", format_number(km_to_m(km), 1))
        }
    }

    fn format_point(lat: f64, lon: f64) -> String {
        format!("lat {:.4}°, lon {:.4}°", lat, lon)
    }

    pub fn from_report(report: &ScenarioReport) -> Self {
        let mut summary = ReportSummary { log: Vec::new() };
        let inputs = &report.inputs;
        let physics = &report.physics;

        summary.log.push(format!(
            "--- Impactor ---\n\
             Diameter: {} m\n\
             Density: {} kg/m³\n\
             Velocity: {} km/s\n\
             Entry angle: {}°\n\
             Impact point: {}",
            format_number(inputs.impactor.diameter_m, 2),
            format_number(inputs.impactor.density_kgm3, 0),
            format_number(inputs.impactor.velocity_kms, 2),
            format_number(inputs.impactor.angle_deg, 1),
            Self::format_point(inputs.location.lat, inputs.location.lon),
        ));

        let mut physics_section = format!(
            "--- Impact Physics ---\n\
             Mass: {} kg\n\
             Energy: {} kJ\n\
             Yield: {} Mt TNT",
            format_number(physics.mass_kg, 0),
            format_number(physics.energy_j, 0),
            format_number(physics.energy_mt_tnt, 4),
        );
        match physics.burst_altitude_km {
            Some(altitude) => physics_section.push_str(&format!(
                "\nAtmospheric burst at {}",
                Self::format_distance(altitude)
            )),
            None => physics_section.push_str(&format!(
                "\nCrater diameter: {} m\n\
                 Thermal zone: {}\n\
                 Seismic zone: {}\n\
                 Shock zone: {}",
                format_number(physics.final_crater_diameter_m, 1),
                Self::format_distance(physics.rings_km.severe),
                Self::format_distance(physics.rings_km.heavy),
                Self::format_distance(physics.rings_km.light),
            )),
        }
        summary.log.push(physics_section);

        let mut deflection_section = String::from("--- Deflection Scenarios ---");
        for (name, result) in &report.deflection {
            let line = match result {
                DeflectionResult::Applied(outcome) => format!(
                    "\n{}: Δv {} mm/s, lead {} d, shift {} -> {}",
                    name,
                    format_number(outcome.dv_mm_s, 6),
                    format_number(outcome.lead_days, 0),
                    Self::format_distance(m_to_km(outcome.along_track_shift_m)),
                    Self::format_point(outcome.shifted_point.lat, outcome.shifted_point.lon),
                ),
                DeflectionResult::NotApplicable { reason } => format!("\n{}: {}", name, reason),
            };
            deflection_section.push_str(&line);
        }
        summary.log.push(deflection_section);

        if let Some(seismic) = &report.seismic {
            summary.log.push(format!(
                "--- Seismic ---\n\
                 Magnitude: {:.2}\n\
                 Intensity: MMI {} ({})\n\
                 Fatalities: {} ({}%)\n\
                 Injuries: {} ({}%)",
                seismic.magnitude,
                seismic.mmi,
                seismic.effects.level,
                format_number(seismic.casualties.fatalities as f64, 0),
                format_number(seismic.casualties.fatality_rate, 1),
                format_number(seismic.casualties.injuries as f64, 0),
                format_number(seismic.casualties.injury_rate, 1),
            ));
        }

        if let Some(tsunami) = &report.tsunami {
            summary.log.push(format!(
                "--- Tsunami ---\nRisk: {}\n{}",
                tsunami.risk, tsunami.description
            ));
        }

        if let Some(consequences) = &report.consequences {
            let cities = &consequences.location.major_cities_in_blast_radius;
            summary.log.push(format!(
                "--- Consequences ---\n\
                 Population affected: {}\n\
                 Cities in blast radius: {}\n\
                 Wildfire risk: {:?}\n\
                 Infrastructure damage: ${}\n\
                 Recovery time: {} years",
                format_number(consequences.location.population_affected as f64, 0),
                if cities.is_empty() {
                    "none".to_string()
                } else {
                    cities.join(", ")
                },
                consequences.environmental_impact.wildfires_risk,
                format_number(
                    consequences.economic_impact.infrastructure_damage_estimate_usd as f64,
                    0
                ),
                consequences.economic_impact.recovery_time_years,
            ));
        }

        summary
            .log
            .push(format!("Arcade score: {}", report.arcade_score()));
        summary
    }

    pub fn render(&self) -> String {
        self.log.join("\n\n")
    }
}
