// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const EARTH_RADIUS: f64 = 6_371_000.0; // meters
pub const EARTH_RADIUS_KM: f64 = 6_371.0; // km
pub const EARTH_MASS: f64 = 5.972e24; // kg
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11; // N⋅m²/kg²
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// Impact Model Constants
pub const ATMOSPHERIC_BURST_DIAMETER: f64 = 25.0; // m, bodies below this burn up
pub const BURST_ALTITUDE_MIN_KM: f64 = 20.0;
pub const BURST_ALTITUDE_MAX_KM: f64 = 50.0;
pub const TARGET_ROCK_DENSITY: f64 = 2_500.0; // kg/m³
pub const JOULES_PER_MEGATON_TNT: f64 = 4.184e15;
pub const MIN_SEVERE_RING_KM: f64 = 2.0;
pub const HEAVY_RING_FACTOR: f64 = 2.2;
pub const LIGHT_RING_FACTOR: f64 = 2.0;

// Kinetic Impactor Constants
pub const IMPACTOR_MASS: f64 = 1_000.0; // kg
pub const IMPACTOR_VELOCITY: f64 = 10_000.0; // m/s
pub const REFERENCE_BODY_DIAMETER: f64 = 100.0; // m
pub const REFERENCE_LEAD_DAYS: f64 = 180.0;
pub const MAX_TIME_FACTOR: f64 = 2.0;
pub const MIN_VELOCITY_FACTOR: f64 = 0.1;

// Hazard Constants
pub const EPICENTER_MMI: u8 = 12;
pub const TSUNAMI_ENERGY_THRESHOLD: f64 = 1e15;
pub const TSUNAMI_MAX_HEIGHT: f64 = 50.0; // m
pub const URBAN_POPULATION_DENSITY: f64 = 1_000.0; // people per km²

// Sample Impactor (used when no catalog record is available)
pub const SAMPLE_DIAMETER: f64 = 150.0; // m
pub const SAMPLE_DENSITY: f64 = 3_000.0; // kg/m³
pub const SAMPLE_VELOCITY: f64 = 19.0; // km/s
pub const SAMPLE_ANGLE: f64 = 45.0; // degrees
pub const SAMPLE_LATITUDE: f64 = 24.8607; // Karachi
pub const SAMPLE_LONGITUDE: f64 = 67.0011;
