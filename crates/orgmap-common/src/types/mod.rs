//! Common types used across orgmap

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::OrgmapError;

/// Represents an organisation.
///
/// Organisations are the top-level entity; every location belongs to exactly
/// one of them. The identifier is assigned by the database on insert.
///
/// # Examples
///
/// ```
/// use orgmap_common::types::Organisation;
///
/// let org = Organisation {
///     id: 1,
///     name: "Acme".to_string(),
/// };
/// assert_eq!(org.name, "Acme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organisation {
    /// Store-assigned identifier
    pub id: i64,

    /// Display name (not unique)
    pub name: String,
}

/// A geo-tagged point belonging to an organisation.
///
/// Coordinates are stored as given; no range validation is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Store-assigned identifier
    pub id: i64,

    /// Identifier of the owning organisation
    pub organisation_id: i64,

    /// Display name of the location
    pub location_name: String,

    pub longitude: f64,

    pub latitude: f64,
}

/// Request body for creating an organisation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrganisation {
    pub name: String,
}

/// Request body for creating a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLocation {
    pub organisation_id: i64,
    pub location_name: String,
    pub longitude: f64,
    pub latitude: f64,
}

/// Axis-aligned rectangle in longitude/latitude space.
///
/// Bounds are inclusive and there is no antimeridian wraparound. The textual
/// form is `min_long,max_long,min_lat,max_lat`, which is how it travels in the
/// `bounding_box` query parameter.
///
/// # Examples
///
/// ```
/// use orgmap_common::types::BoundingBox;
///
/// let bbox: BoundingBox = "-1.5, 2, 50, 51.25".parse().unwrap();
/// assert_eq!(bbox.min_longitude, -1.5);
/// assert_eq!(bbox.to_string(), "-1.5,2,50,51.25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub min_latitude: f64,
    pub max_latitude: f64,
}

impl FromStr for BoundingBox {
    type Err = OrgmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(OrgmapError::invalid_bounding_box(
                s,
                format!(
                    "expected 4 comma-separated values (min_long,max_long,min_lat,max_lat), got {}",
                    parts.len()
                ),
            ));
        }

        let mut values = [0.0_f64; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| {
                OrgmapError::invalid_bounding_box(s, format!("'{}' is not a number", part))
            })?;
        }

        let [min_longitude, max_longitude, min_latitude, max_latitude] = values;
        Ok(Self {
            min_longitude,
            max_longitude,
            min_latitude,
            max_latitude,
        })
    }
}

impl BoundingBox {
    /// Build a box from the raw values of a `bounding_box` query parameter.
    ///
    /// Accepts either one comma-separated value (`0,5,0,5`) or the key
    /// repeated once per coordinate (`bounding_box=0&bounding_box=5&...`).
    /// No values means no box.
    pub fn from_query_values(values: &[String]) -> crate::Result<Option<Self>> {
        match values {
            [] => Ok(None),
            [single] => single.parse().map(Some),
            [_, _, _, _] => values.join(",").parse().map(Some),
            _ => Err(OrgmapError::invalid_bounding_box(
                &values.join(","),
                format!(
                    "expected 1 comma-separated value or 4 repeated values, got {}",
                    values.len()
                ),
            )),
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min_longitude, self.max_longitude, self.min_latitude, self.max_latitude
        )
    }
}
