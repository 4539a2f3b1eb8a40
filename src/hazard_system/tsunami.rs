use std::fmt;

use serde::Serialize;

use crate::constants::{TSUNAMI_ENERGY_THRESHOLD, TSUNAMI_MAX_HEIGHT};
use crate::errors::ImpactError;
use crate::utils::units::{require_finite, require_non_negative};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum TsunamiRisk {
    Low,
    Moderate,
    High,
    Extreme,
}

impl TsunamiRisk {
    fn from_height(height_m: f64) -> Self {
        if height_m > 20.0 {
            TsunamiRisk::Extreme
        } else if height_m > 10.0 {
            TsunamiRisk::High
        } else if height_m > 5.0 {
            TsunamiRisk::Moderate
        } else {
            TsunamiRisk::Low
        }
    }
}

impl fmt::Display for TsunamiRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TsunamiRisk::Low => "Low",
            TsunamiRisk::Moderate => "Moderate",
            TsunamiRisk::High => "High",
            TsunamiRisk::Extreme => "Extreme",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TsunamiAssessment {
    pub risk: TsunamiRisk,
    pub height_m: f64,
    pub description: String,
}

/// Coarse rectangular ocean bands. Not a coastline lookup.
pub fn is_near_ocean(lat: f64, lon: f64) -> bool {
    let pacific =
        lat > -60.0 && lat < 60.0 && ((lon > 120.0 && lon < 240.0) || (lon > -180.0 && lon < -120.0));
    let atlantic = lat > -60.0 && lat < 60.0 && lon > -80.0 && lon < 20.0;
    let indian = lat > -60.0 && lat < 30.0 && lon > 20.0 && lon < 120.0;
    let arctic = lat > 60.0;

    pacific || atlantic || indian || arctic
}

pub fn analyze_tsunami_risk(
    energy_j: f64,
    latitude: f64,
    longitude: f64,
) -> Result<TsunamiAssessment, ImpactError> {
    require_non_negative("energy_J", energy_j)?;
    require_finite("latitude", latitude)?;
    require_finite("longitude", longitude)?;

    let outside_polar = latitude.abs() < 60.0;
    let at_risk = energy_j > TSUNAMI_ENERGY_THRESHOLD
        && is_near_ocean(latitude, longitude)
        && outside_polar;

    if !at_risk {
        return Ok(TsunamiAssessment {
            risk: TsunamiRisk::Low,
            height_m: 0.0,
            description:
                "Insufficient energy or inland location - no significant tsunami expected"
                    .to_string(),
        });
    }

    let height_m = ((energy_j / TSUNAMI_ENERGY_THRESHOLD).powf(0.3) * 10.0).min(TSUNAMI_MAX_HEIGHT);
    let risk = TsunamiRisk::from_height(height_m);

    Ok(TsunamiAssessment {
        risk,
        height_m,
        description: format!("Tsunami height: {:.1}m - {} risk", height_m, risk),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_below_threshold_is_low() {
        for (lat, lon) in [(0.0, -30.0), (10.0, 160.0), (-20.0, 80.0), (45.0, 10.0)] {
            let assessment = analyze_tsunami_risk(1e15, lat, lon).unwrap();
            assert_eq!(assessment.risk, TsunamiRisk::Low);
            assert_eq!(assessment.height_m, 0.0);
        }
    }

    #[test]
    fn test_inland_is_low() {
        // Central Asia falls outside every band.
        let assessment = analyze_tsunami_risk(1e20, 45.0, 70.0).unwrap();
        assert_eq!(assessment.risk, TsunamiRisk::Low);
        assert_eq!(assessment.height_m, 0.0);
    }

    #[test]
    fn test_arctic_band_is_excluded_by_latitude() {
        assert!(is_near_ocean(75.0, 0.0));
        let assessment = analyze_tsunami_risk(1e20, 75.0, 0.0).unwrap();
        assert_eq!(assessment.height_m, 0.0);
    }

    #[test]
    fn test_height_formula() {
        // (1e16 / 1e15)^0.3 * 10 = 19.95 -> High
        let high = analyze_tsunami_risk(1e16, 0.0, -30.0).unwrap();
        assert_relative_eq!(high.height_m, 10.0_f64.powf(0.3) * 10.0, max_relative = 1e-12);
        assert_eq!(high.risk, TsunamiRisk::High);
        assert!(high.description.contains("High risk"));

        // Any energy above the threshold already gives more than 10 m.
        let barely = analyze_tsunami_risk(1.1e15, -10.0, 70.0).unwrap();
        assert!(barely.height_m > 10.0);
        assert_eq!(barely.risk, TsunamiRisk::High);
    }

    #[test]
    fn test_risk_buckets() {
        assert_eq!(TsunamiRisk::from_height(3.0), TsunamiRisk::Low);
        assert_eq!(TsunamiRisk::from_height(5.0), TsunamiRisk::Low);
        assert_eq!(TsunamiRisk::from_height(7.5), TsunamiRisk::Moderate);
        assert_eq!(TsunamiRisk::from_height(10.0), TsunamiRisk::Moderate);
        assert_eq!(TsunamiRisk::from_height(20.0), TsunamiRisk::High);
        assert_eq!(TsunamiRisk::from_height(20.5), TsunamiRisk::Extreme);
    }

    #[test]
    fn test_height_capped() {
        let extreme = analyze_tsunami_risk(1e25, 0.0, -30.0).unwrap();
        assert_eq!(extreme.height_m, 50.0);
        assert_eq!(extreme.risk, TsunamiRisk::Extreme);
    }

    #[test]
    fn test_ocean_bands() {
        assert!(is_near_ocean(0.0, 200.0));
        assert!(is_near_ocean(0.0, -150.0));
        assert!(is_near_ocean(0.0, -30.0));
        assert!(is_near_ocean(-40.0, 90.0));
        assert!(!is_near_ocean(40.0, 90.0));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(analyze_tsunami_risk(f64::NAN, 0.0, 0.0).is_err());
        assert!(analyze_tsunami_risk(1e16, f64::INFINITY, 0.0).is_err());
    }
}
