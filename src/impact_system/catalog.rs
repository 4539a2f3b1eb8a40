//! Near-Earth-object records taken from NeoWs JSON documents.
//!
//! Only parsing lives here. Fetching the documents belongs to the caller.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::SAMPLE_VELOCITY;
use crate::errors::ReportError;
use crate::impact_system::energy::ImpactorParameters;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeoRecord {
    pub id: String,
    pub name: String,
    pub est_diameter_m: f64,
    pub velocity_kms: f64,
}

#[derive(Debug, Deserialize)]
struct NeoWsObject {
    id: String,
    name: String,
    estimated_diameter: Option<EstimatedDiameter>,
    #[serde(default)]
    close_approach_data: Vec<CloseApproach>,
}

#[derive(Debug, Deserialize)]
struct EstimatedDiameter {
    meters: Option<DiameterRange>,
}

#[derive(Debug, Deserialize)]
struct DiameterRange {
    estimated_diameter_min: Option<f64>,
    estimated_diameter_max: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CloseApproach {
    relative_velocity: Option<RelativeVelocity>,
}

#[derive(Debug, Deserialize)]
struct RelativeVelocity {
    kilometers_per_second: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NeoWsFeed {
    near_earth_objects: FirstDay,
}

/// The objects listed under the first date key, in document order.
#[derive(Debug)]
struct FirstDay(Option<Vec<NeoWsObject>>);

impl<'de> Deserialize<'de> for FirstDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FirstDayVisitor;

        impl<'de> Visitor<'de> for FirstDayVisitor {
            type Value = FirstDay;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of dates to near-earth objects")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<FirstDay, A::Error> {
                let first = map
                    .next_entry::<IgnoredAny, Vec<NeoWsObject>>()?
                    .map(|(_, objects)| objects);
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(FirstDay(first))
            }
        }

        deserializer.deserialize_map(FirstDayVisitor)
    }
}

impl NeoWsObject {
    fn mean_diameter(&self) -> f64 {
        let range = self
            .estimated_diameter
            .as_ref()
            .and_then(|d| d.meters.as_ref());
        match range {
            Some(DiameterRange {
                estimated_diameter_min: Some(min),
                estimated_diameter_max: Some(max),
            }) => (min + max) / 2.0,
            _ => f64::NAN,
        }
    }

    fn first_velocity(&self) -> Option<&str> {
        self.close_approach_data
            .first()
            .and_then(|approach| approach.relative_velocity.as_ref())
            .and_then(|velocity| velocity.kilometers_per_second.as_deref())
    }

    fn into_record(self, velocity_kms: f64) -> NeoRecord {
        NeoRecord {
            est_diameter_m: self.mean_diameter(),
            velocity_kms,
            id: self.id,
            name: self.name,
        }
    }
}

impl NeoRecord {
    /// Parses a single-object lookup document. A missing or empty approach
    /// velocity falls back to the sample speed.
    pub fn from_neows_json(document: &str) -> Result<NeoRecord, ReportError> {
        let object: NeoWsObject = serde_json::from_str(document)?;
        let velocity = match object.first_velocity() {
            Some(text) if !text.is_empty() => text.trim().parse::<f64>().unwrap_or(f64::NAN),
            _ => SAMPLE_VELOCITY,
        };
        Ok(object.into_record(velocity))
    }

    pub fn is_usable(&self) -> bool {
        self.est_diameter_m.is_finite() && self.velocity_kms.is_finite()
    }

    /// Impactor parameters for this object. Density and entry angle are not
    /// in the catalog and must be supplied.
    pub fn impactor_parameters(&self, density_kgm3: f64, angle_deg: f64) -> ImpactorParameters {
        ImpactorParameters::new(
            self.est_diameter_m,
            density_kgm3,
            self.velocity_kms,
            angle_deg,
        )
    }
}

/// Records for the first day of a NeoWs feed, dropping objects without a
/// usable diameter or velocity.
pub fn parse_neows_feed(document: &str) -> Result<Vec<NeoRecord>, ReportError> {
    let feed: NeoWsFeed = serde_json::from_str(document)?;
    let objects = feed
        .near_earth_objects
        .0
        .ok_or_else(|| ReportError::Catalog("feed contains no days".to_string()))?;

    Ok(objects
        .into_iter()
        .map(|object| {
            let velocity = object
                .first_velocity()
                .and_then(|text| text.trim().parse::<f64>().ok())
                .unwrap_or(f64::NAN);
            object.into_record(velocity)
        })
        .filter(NeoRecord::is_usable)
        .collect())
}

/// First usable record of a feed.
pub fn first_neows_record(document: &str) -> Result<NeoRecord, ReportError> {
    parse_neows_feed(document)?
        .into_iter()
        .next()
        .ok_or_else(|| ReportError::Catalog("feed contains no usable objects".to_string()))
}
