//! Curated place table with free-text resolution, great-circle distance,
//! and zone membership.
//!
//! Route descriptions arrive as inconsistent free text; substring and alias
//! matching with a token fallback is resilient to that noise without full
//! geocoding. Matching iterates places in declaration order and the first
//! match wins, so a given gazetteer resolves ambiguous text deterministically.

mod catalog;

pub use catalog::builtin;

use serde::{Deserialize, Serialize};
use std::io::Read;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Handle to a place inside one `Gazetteer`. Only meaningful for the
/// gazetteer that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceId(usize);

/// A named location with coordinates, owning state, and text aliases.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub key: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub state: String,
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone)]
struct Zone {
    name: String,
    members: Vec<PlaceId>,
}

/// Read-only place and zone tables, constructed once and injected into the
/// scoring engine. Safe for unbounded concurrent reads.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    places: Vec<Place>,
    zones: Vec<Zone>,
}

#[derive(Debug, thiserror::Error)]
pub enum GazetteerError {
    #[error("duplicate place key '{0}'")]
    DuplicateKey(String),
    #[error("zone '{zone}' references unknown place key '{key}'")]
    UnknownZoneMember { zone: String, key: String },
    #[error("place '{key}' has a non-finite coordinate")]
    InvalidCoordinate { key: String },
    #[error("gazetteer csv is malformed: {0}")]
    Csv(#[from] csv::Error),
}

impl Gazetteer {
    pub fn builder() -> GazetteerBuilder {
        GazetteerBuilder::default()
    }

    /// Load place and zone tables from CSV exports.
    ///
    /// Places: `key,name,latitude,longitude,state,aliases` with aliases
    /// separated by `;`. Zones: `zone,members` with members separated by `;`.
    pub fn from_csv_readers<P: Read, Z: Read>(
        places: P,
        zones: Z,
    ) -> Result<Self, GazetteerError> {
        let mut builder = Self::builder();

        let mut place_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(places);
        for row in place_reader.deserialize::<PlaceRow>() {
            let row = row?;
            let aliases: Vec<&str> = row
                .aliases
                .as_deref()
                .unwrap_or("")
                .split(';')
                .map(str::trim)
                .filter(|alias| !alias.is_empty())
                .collect();
            builder = builder.place(
                &row.key,
                &row.name,
                row.latitude,
                row.longitude,
                &row.state,
                &aliases,
            );
        }

        let mut zone_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(zones);
        for row in zone_reader.deserialize::<ZoneRow>() {
            let row = row?;
            let members: Vec<&str> = row
                .members
                .split(';')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .collect();
            builder = builder.zone(&row.zone, &members);
        }

        builder.build()
    }

    /// Extract a canonical place from free-form route text.
    ///
    /// Normalizes, then tries canonical keys, then aliases, then a token
    /// fallback over whitespace tokens of three or more characters. Failure
    /// is not an error: `None` means "no geographic signal available".
    pub fn resolve(&self, text: &str) -> Option<PlaceId> {
        let normalized = normalize_route_text(text);
        if normalized.is_empty() {
            return None;
        }

        for (idx, place) in self.places.iter().enumerate() {
            if normalized.contains(place.key.as_str()) {
                return Some(PlaceId(idx));
            }
        }

        for (idx, place) in self.places.iter().enumerate() {
            if place
                .aliases
                .iter()
                .any(|alias| normalized.contains(alias.as_str()))
            {
                return Some(PlaceId(idx));
            }
        }

        let tokens: Vec<&str> = normalized
            .split(' ')
            .filter(|token| token.chars().count() >= 3)
            .collect();
        if tokens.is_empty() {
            return None;
        }

        for (idx, place) in self.places.iter().enumerate() {
            let candidates =
                std::iter::once(place.key.as_str()).chain(place.aliases.iter().map(String::as_str));
            for candidate in candidates {
                for token in &tokens {
                    if token.contains(candidate) || candidate.contains(*token) {
                        return Some(PlaceId(idx));
                    }
                }
            }
        }

        None
    }

    /// Great-circle distance between two places, rounded to whole kilometers.
    pub fn distance_km(&self, a: PlaceId, b: PlaceId) -> Option<u32> {
        let from = self.places.get(a.0)?;
        let to = self.places.get(b.0)?;
        let km = haversine_km(
            (from.latitude, from.longitude),
            (to.latitude, to.longitude),
        );
        Some(km.round() as u32)
    }

    /// True iff some declared zone contains both places.
    pub fn same_zone(&self, a: PlaceId, b: PlaceId) -> bool {
        self.zones
            .iter()
            .any(|zone| zone.members.contains(&a) && zone.members.contains(&b))
    }

    /// True iff the named zone exists and contains the place.
    pub fn zone_contains(&self, zone_name: &str, place: PlaceId) -> bool {
        let wanted = zone_name.trim();
        self.zones
            .iter()
            .filter(|zone| zone.name.eq_ignore_ascii_case(wanted))
            .any(|zone| zone.members.contains(&place))
    }

    pub fn place(&self, id: PlaceId) -> Option<&Place> {
        self.places.get(id.0)
    }

    pub fn display_name(&self, id: PlaceId) -> Option<&str> {
        self.places.get(id.0).map(|place| place.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct PlaceRow {
    key: String,
    name: String,
    latitude: f64,
    longitude: f64,
    state: String,
    #[serde(default)]
    aliases: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ZoneRow {
    zone: String,
    members: String,
}

/// Incremental construction so tests can run against synthetic tables.
#[derive(Debug, Default)]
pub struct GazetteerBuilder {
    places: Vec<Place>,
    zones: Vec<(String, Vec<String>)>,
}

impl GazetteerBuilder {
    /// Declare a place. Keys and aliases are stored lowercase; declaration
    /// order is the resolution tie-break order.
    pub fn place(
        mut self,
        key: &str,
        name: &str,
        latitude: f64,
        longitude: f64,
        state: &str,
        aliases: &[&str],
    ) -> Self {
        self.places.push(Place {
            key: key.trim().to_lowercase(),
            name: name.to_string(),
            latitude,
            longitude,
            state: state.to_string(),
            aliases: aliases
                .iter()
                .map(|alias| alias.trim().to_lowercase())
                .collect(),
        });
        self
    }

    pub fn zone(mut self, name: &str, member_keys: &[&str]) -> Self {
        self.zones.push((
            name.trim().to_lowercase(),
            member_keys
                .iter()
                .map(|key| key.trim().to_lowercase())
                .collect(),
        ));
        self
    }

    pub fn build(self) -> Result<Gazetteer, GazetteerError> {
        for (idx, place) in self.places.iter().enumerate() {
            if !place.latitude.is_finite() || !place.longitude.is_finite() {
                return Err(GazetteerError::InvalidCoordinate {
                    key: place.key.clone(),
                });
            }
            if self.places[..idx].iter().any(|other| other.key == place.key) {
                return Err(GazetteerError::DuplicateKey(place.key.clone()));
            }
        }

        let find = |key: &str| -> Option<PlaceId> {
            self.places
                .iter()
                .position(|place| place.key == key)
                .map(PlaceId)
        };

        let mut zones = Vec::with_capacity(self.zones.len());
        for (name, member_keys) in &self.zones {
            let mut members = Vec::with_capacity(member_keys.len());
            for key in member_keys {
                let id = find(key).ok_or_else(|| GazetteerError::UnknownZoneMember {
                    zone: name.clone(),
                    key: key.clone(),
                })?;
                members.push(id);
            }
            zones.push(Zone {
                name: name.clone(),
                members,
            });
        }

        Ok(Gazetteer {
            places: self.places,
            zones,
        })
    }
}

/// Lower-case, replace route arrows and separator punctuation with spaces,
/// collapse whitespace.
pub(crate) fn normalize_route_text(value: &str) -> String {
    let lowered = value.to_lowercase();
    let mut cleaned = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        match ch {
            '\u{2192}' | '\u{21d2}' | ',' | '.' | '-' | '>' | '<' => cleaned.push(' '),
            _ => cleaned.push(ch),
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}
