//! Flat-Earth conversion between metric displacements and lat/lon deltas.
//!
//! The small-displacement approximation divides by `cos(latitude)` for the
//! longitude term, so it blows up near the poles. That is a known accuracy
//! limit of the model and is not corrected here.

use serde::{Deserialize, Serialize};

use crate::constants::{EARTH_RADIUS, EARTH_RADIUS_KM};
use crate::errors::ImpactError;
use crate::utils::units::{deg_to_rad, rad_to_deg, require_finite};

/// A surface location in degrees, with optional elevation in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elev: Option<f64>,
}

/// Local tangent-plane displacement in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarOffset {
    pub east: f64,
    pub north: f64,
}

impl PlanarOffset {
    pub fn new(east: f64, north: f64) -> Self {
        PlanarOffset { east, north }
    }

    /// The flat model treats the direction of travel as due east.
    pub fn along_track(meters: f64) -> Self {
        PlanarOffset::new(meters, 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLonDelta {
    #[serde(rename = "dLat")]
    pub d_lat: f64,
    #[serde(rename = "dLon")]
    pub d_lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint {
            lat,
            lon,
            elev: None,
        }
    }

    pub fn with_elevation(mut self, elev: Option<f64>) -> Self {
        self.elev = elev;
        self
    }

    pub fn validate(&self) -> Result<(), ImpactError> {
        validate_latitude(self.lat)?;
        require_finite("lon", self.lon)?;
        if let Some(elev) = self.elev {
            require_finite("elev", elev)?;
        }
        Ok(())
    }

    /// Moves the point by a planar displacement. Elevation is carried over.
    pub fn displaced(&self, offset: PlanarOffset) -> Result<GeoPoint, ImpactError> {
        let delta = offset_to_lat_lon(offset.east, offset.north, self.lat)?;
        Ok(GeoPoint {
            lat: self.lat + delta.d_lat,
            lon: self.lon + delta.d_lon,
            elev: self.elev,
        })
    }
}

fn validate_latitude(lat: f64) -> Result<f64, ImpactError> {
    require_finite("lat", lat)?;
    if (-90.0..=90.0).contains(&lat) {
        Ok(lat)
    } else {
        Err(ImpactError::invalid("lat", lat, "must be within [-90, 90]"))
    }
}

pub fn offset_to_lat_lon(
    meters_east: f64,
    meters_north: f64,
    at_latitude_deg: f64,
) -> Result<LatLonDelta, ImpactError> {
    require_finite("meters_east", meters_east)?;
    require_finite("meters_north", meters_north)?;
    validate_latitude(at_latitude_deg)?;

    let d_lat = rad_to_deg(meters_north / EARTH_RADIUS);
    let d_lon = rad_to_deg(meters_east / (EARTH_RADIUS * deg_to_rad(at_latitude_deg).cos()));

    Ok(LatLonDelta { d_lat, d_lon })
}

/// Great-circle distance in kilometers.
pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let d_lat = deg_to_rad(b.lat - a.lat);
    let d_lon = deg_to_rad(b.lon - a.lon);
    let h = (d_lat / 2.0).sin().powi(2)
        + deg_to_rad(a.lat).cos() * deg_to_rad(b.lat).cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
