use crate::constants::{EARTH_MASS, GRAVITATIONAL_CONSTANT};

/// Mass of a homogeneous sphere (kg) from its diameter (m) and density (kg/m³).
pub fn calculate_mass(diameter_m: f64, density_kgm3: f64) -> f64 {
    let radius = diameter_m / 2.0;
    let volume = (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3);
    volume * density_kgm3
}

/// Circular orbital speed (m/s) at `r` meters from Earth's center.
pub fn orbital_velocity(r: f64) -> f64 {
    (GRAVITATIONAL_CONSTANT * EARTH_MASS / r).sqrt()
}

/// Escape speed (m/s) at `r` meters from Earth's center.
pub fn escape_velocity(r: f64) -> f64 {
    (2.0 * GRAVITATIONAL_CONSTANT * EARTH_MASS / r).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EARTH_RADIUS;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_mass_of_kilometer_body() {
        let mass = calculate_mass(1_000.0, 3_000.0);
        assert_relative_eq!(mass, 1.5708e12, max_relative = 1e-4);
    }

    #[test]
    fn test_surface_velocities() {
        assert_abs_diff_eq!(orbital_velocity(EARTH_RADIUS), 7_910.0, epsilon = 10.0);
        assert_abs_diff_eq!(escape_velocity(EARTH_RADIUS), 11_186.0, epsilon = 10.0);
        assert_relative_eq!(
            escape_velocity(EARTH_RADIUS) / orbital_velocity(EARTH_RADIUS),
            std::f64::consts::SQRT_2,
            epsilon = 1e-12
        );
    }
}
