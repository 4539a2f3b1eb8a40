use rand::Rng;
use serde::Serialize;

use crate::impact_system::energy::ImpactorParameters;
use crate::utils::geodesic::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Threat {
    pub impactor: ImpactorParameters,
    pub location: GeoPoint,
}

/// Draws a random incoming threat for the arcade mode.
pub fn random_threat<R: Rng + ?Sized>(rng: &mut R) -> Threat {
    let location = GeoPoint::new(rng.gen_range(-70.0..70.0), rng.gen_range(-180.0..180.0));
    let impactor = ImpactorParameters {
        diameter_m: rng.gen_range(80..240) as f64,
        velocity_kms: rng.gen_range(15.0..25.0),
        density_kgm3: rng.gen_range(2_500.0..4_500.0),
        angle_deg: rng.gen_range(25.0..75.0),
    };
    Threat { impactor, location }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_threats_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let threat = random_threat(&mut rng);
            assert!(threat.impactor.validate().is_ok());
            assert!(!threat.impactor.is_atmospheric_burst());
            assert_eq!(threat.impactor.diameter_m.fract(), 0.0);
            assert!((80.0..240.0).contains(&threat.impactor.diameter_m));
            assert!((-70.0..70.0).contains(&threat.location.lat));
            assert!(threat.location.validate().is_ok());
        }
    }

    #[test]
    fn test_seeded_threats_repeat() {
        let first = random_threat(&mut ChaCha8Rng::seed_from_u64(3));
        let second = random_threat(&mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(first, second);
    }
}
