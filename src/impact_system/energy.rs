//! Impact energy, crater scaling and damage rings. Energy is in kJ.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ATMOSPHERIC_BURST_DIAMETER, BURST_ALTITUDE_MAX_KM, BURST_ALTITUDE_MIN_KM, GRAVITY,
    HEAVY_RING_FACTOR, JOULES_PER_MEGATON_TNT, LIGHT_RING_FACTOR, MIN_SEVERE_RING_KM,
    SAMPLE_ANGLE, SAMPLE_DENSITY, SAMPLE_DIAMETER, SAMPLE_VELOCITY, TARGET_ROCK_DENSITY,
};
use crate::errors::ImpactError;
use crate::utils::bodies::calculate_mass;
use crate::utils::units::{deg_to_rad, km_to_m, require_finite, require_positive};

const NO_SURFACE_IMPACT: &str = "No surface impact - meteor bursts in upper atmosphere";
const THERMAL_DESCRIPTION: &str = "Complete devastation - all things will evaporate";
const SEISMIC_DESCRIPTION: &str = "Severe earthquakes. In coastal areas, tsunamis";
const SHOCK_DESCRIPTION: &str =
    "Shock waves, shattering glass and weak materials, wiping trees out";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactorParameters {
    pub diameter_m: f64,
    pub density_kgm3: f64,
    pub velocity_kms: f64,
    pub angle_deg: f64,
}

impl Default for ImpactorParameters {
    fn default() -> Self {
        ImpactorParameters {
            diameter_m: SAMPLE_DIAMETER,
            density_kgm3: SAMPLE_DENSITY,
            velocity_kms: SAMPLE_VELOCITY,
            angle_deg: SAMPLE_ANGLE,
        }
    }
}

impl ImpactorParameters {
    pub fn new(diameter_m: f64, density_kgm3: f64, velocity_kms: f64, angle_deg: f64) -> Self {
        ImpactorParameters {
            diameter_m,
            density_kgm3,
            velocity_kms,
            angle_deg,
        }
    }

    pub fn validate(&self) -> Result<(), ImpactError> {
        require_positive("diameter_m", self.diameter_m)?;
        require_positive("density_kgm3", self.density_kgm3)?;
        require_positive("velocity_kms", self.velocity_kms)?;
        require_finite("angle_deg", self.angle_deg)?;
        if self.angle_deg <= 0.0 || self.angle_deg > 90.0 {
            return Err(ImpactError::invalid(
                "angle_deg",
                self.angle_deg,
                "must be within (0, 90]",
            ));
        }
        Ok(())
    }

    pub fn is_atmospheric_burst(&self) -> bool {
        self.diameter_m < ATMOSPHERIC_BURST_DIAMETER
    }

    pub fn velocity_ms(&self) -> f64 {
        km_to_m(self.velocity_kms)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RingRadii {
    pub severe: f64,
    pub heavy: f64,
    pub light: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DamageZone {
    pub radius_km: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DamageZones {
    pub thermal: DamageZone,
    pub seismic: DamageZone,
    pub shock: DamageZone,
}

impl DamageZones {
    fn from_rings(rings: &RingRadii) -> Self {
        DamageZones {
            thermal: DamageZone {
                radius_km: rings.severe,
                description: THERMAL_DESCRIPTION.to_string(),
            },
            seismic: DamageZone {
                radius_km: rings.heavy,
                description: SEISMIC_DESCRIPTION.to_string(),
            },
            shock: DamageZone {
                radius_km: rings.light,
                description: SHOCK_DESCRIPTION.to_string(),
            },
        }
    }

    fn no_surface_impact() -> Self {
        let zone = DamageZone {
            radius_km: 0.0,
            description: NO_SURFACE_IMPACT.to_string(),
        };
        DamageZones {
            thermal: zone.clone(),
            seismic: zone.clone(),
            shock: zone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactPhysicsResult {
    pub mass_kg: f64,
    /// Kinetic energy. Numerically in kilojoules despite the name.
    #[serde(rename = "energy_J")]
    pub energy_j: f64,
    #[serde(rename = "energy_MtTNT")]
    pub energy_mt_tnt: f64,
    pub atmospheric_burst: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burst_altitude_km: Option<f64>,
    pub final_crater_diameter_m: f64,
    pub rings_km: RingRadii,
    pub damage_zones: DamageZones,
}

/// Runs the impact model. `rng` only feeds the burst altitude draw.
pub fn compute_impact<R: Rng + ?Sized>(
    params: &ImpactorParameters,
    rng: &mut R,
) -> Result<ImpactPhysicsResult, ImpactError> {
    params.validate()?;
    let burst_altitude_km = if params.is_atmospheric_burst() {
        Some(rng.gen_range(BURST_ALTITUDE_MIN_KM..BURST_ALTITUDE_MAX_KM))
    } else {
        None
    };
    evaluate(params, burst_altitude_km)
}

/// Same as [`compute_impact`] with a caller-supplied burst altitude, for
/// replaying a recorded result. A burst needs an altitude; a surface impact
/// ignores it.
pub fn compute_impact_with_burst_altitude(
    params: &ImpactorParameters,
    burst_altitude_km: Option<f64>,
) -> Result<ImpactPhysicsResult, ImpactError> {
    params.validate()?;
    if !params.is_atmospheric_burst() {
        return evaluate(params, None);
    }
    let altitude = burst_altitude_km.ok_or(ImpactError::invalid(
        "burst_altitude_km",
        f64::NAN,
        "required for an atmospheric burst",
    ))?;
    require_positive("burst_altitude_km", altitude)?;
    evaluate(params, Some(altitude))
}

fn evaluate(
    params: &ImpactorParameters,
    burst_altitude_km: Option<f64>,
) -> Result<ImpactPhysicsResult, ImpactError> {
    let mass = calculate_mass(params.diameter_m, params.density_kgm3);
    let velocity = params.velocity_ms();
    let energy_kj = (0.5 * mass * velocity.powi(2)) / 1_000.0;
    let megatons = energy_kj / JOULES_PER_MEGATON_TNT;

    if let Some(altitude) = burst_altitude_km {
        return Ok(ImpactPhysicsResult {
            mass_kg: mass,
            energy_j: energy_kj,
            energy_mt_tnt: megatons,
            atmospheric_burst: true,
            burst_altitude_km: Some(altitude),
            final_crater_diameter_m: 0.0,
            rings_km: RingRadii::default(),
            damage_zones: DamageZones::no_surface_impact(),
        });
    }

    let angle_factor = deg_to_rad(params.angle_deg).sin().powf(0.44);
    let v_factor = (velocity / 1_000.0).powf(0.44);
    let density_factor = (params.density_kgm3 / TARGET_ROCK_DENSITY).powf(1.0 / 3.0);

    let crater_diameter = 1.2
        * GRAVITY.powf(-0.17)
        * v_factor
        * angle_factor
        * density_factor
        * params.diameter_m.powf(0.78);

    let severe = MIN_SEVERE_RING_KM.max(1.3 * megatons.cbrt());
    let heavy = severe * HEAVY_RING_FACTOR;
    let light = heavy * LIGHT_RING_FACTOR;
    let rings = RingRadii {
        severe,
        heavy,
        light,
    };

    Ok(ImpactPhysicsResult {
        mass_kg: mass,
        energy_j: energy_kj,
        energy_mt_tnt: megatons,
        atmospheric_burst: false,
        burst_altitude_km: None,
        final_crater_diameter_m: crater_diameter,
        damage_zones: DamageZones::from_rings(&rings),
        rings_km: rings,
    })
}
