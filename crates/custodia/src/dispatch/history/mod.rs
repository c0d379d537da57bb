//! Mining of an agent's past service records into geographic and
//! service-type affinity signals.

mod parser;

pub use parser::{parse_history, HistoryImportError};

use serde::{Deserialize, Serialize};

use super::domain::HistoricalServiceRecord;
use super::gazetteer::{Gazetteer, PlaceId};

/// A place must appear at least this often to count as frequent.
const FREQUENT_PLACE_MIN_COUNT: usize = 2;
/// At most this many frequent places are kept per agent.
const FREQUENT_PLACE_LIMIT: usize = 5;
/// At most this many frequent service types are kept per agent.
const FREQUENT_TYPE_LIMIT: usize = 3;

/// Derived affinity data attached to a candidate and reused across scoring
/// calls. Re-derivable at any time from the record list; callers own the
/// cache invalidation policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentPatterns {
    pub frequent_places: Vec<PlaceId>,
    pub frequent_service_types: Vec<String>,
}

impl AgentPatterns {
    pub fn is_empty(&self) -> bool {
        self.frequent_places.is_empty() && self.frequent_service_types.is_empty()
    }
}

/// Tally resolved origin/destination places and service-type tags across the
/// records. Places qualify as frequent at two or more occurrences; both
/// lists are ordered by count descending with ties kept in first-seen order.
pub fn analyze_patterns(
    gazetteer: &Gazetteer,
    records: &[HistoricalServiceRecord],
) -> AgentPatterns {
    let mut place_tally: Vec<(PlaceId, usize)> = Vec::new();
    let mut type_tally: Vec<(String, usize)> = Vec::new();

    for record in records {
        for text in [&record.origin_text, &record.destination_text] {
            if let Some(place) = gazetteer.resolve(text) {
                match place_tally.iter_mut().find(|(seen, _)| *seen == place) {
                    Some((_, count)) => *count += 1,
                    None => place_tally.push((place, 1)),
                }
            }
        }

        let tag = record.service_type.trim().to_lowercase();
        if !tag.is_empty() {
            match type_tally.iter_mut().find(|(seen, _)| *seen == tag) {
                Some((_, count)) => *count += 1,
                None => type_tally.push((tag, 1)),
            }
        }
    }

    place_tally.retain(|(_, count)| *count >= FREQUENT_PLACE_MIN_COUNT);
    place_tally.sort_by_key(|(_, count)| std::cmp::Reverse(*count));
    type_tally.sort_by_key(|(_, count)| std::cmp::Reverse(*count));

    AgentPatterns {
        frequent_places: place_tally
            .into_iter()
            .take(FREQUENT_PLACE_LIMIT)
            .map(|(place, _)| place)
            .collect(),
        frequent_service_types: type_tally
            .into_iter()
            .take(FREQUENT_TYPE_LIMIT)
            .map(|(tag, _)| tag)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::domain::ServiceStatus;
    use chrono::NaiveDate;

    fn gazetteer() -> Gazetteer {
        Gazetteer::builder()
            .place("tehuacan", "Tehuacán", 18.4617, -97.3928, "Puebla", &[])
            .place("puebla", "Puebla", 19.0414, -98.2063, "Puebla", &[])
            .place("veracruz", "Veracruz", 19.1738, -96.1342, "Veracruz", &[])
            .build()
            .expect("builds")
    }

    fn record(origin: &str, destination: &str, service_type: &str) -> HistoricalServiceRecord {
        HistoricalServiceRecord {
            occurred_at: NaiveDate::from_ymd_opt(2026, 3, 9)
                .expect("valid date")
                .and_hms_opt(8, 0, 0)
                .expect("valid time"),
            origin_text: origin.to_string(),
            destination_text: destination.to_string(),
            status: ServiceStatus::Completed,
            custodian: "R. Ortega".to_string(),
            service_type: service_type.to_string(),
            distance_km: None,
        }
    }

    #[test]
    fn empty_history_yields_empty_patterns() {
        let patterns = analyze_patterns(&gazetteer(), &[]);
        assert!(patterns.is_empty());
    }

    #[test]
    fn single_occurrences_are_not_frequent_places() {
        let records = vec![record("tehuacan", "sitio desconocido", "custodia")];
        let patterns = analyze_patterns(&gazetteer(), &records);
        assert!(patterns.frequent_places.is_empty());
        assert_eq!(patterns.frequent_service_types, vec!["custodia"]);
    }

    #[test]
    fn tallies_order_by_count_with_first_seen_ties() {
        let g = gazetteer();
        let records = vec![
            record("puebla", "veracruz", "custodia"),
            record("veracruz", "puebla", "Custodia"),
            record("tehuacan", "veracruz", "traslado"),
            record("tehuacan", "puebla", "custodia"),
        ];

        let patterns = analyze_patterns(&g, &records);

        let veracruz = g.resolve("veracruz").expect("veracruz");
        let puebla = g.resolve("puebla").expect("puebla");
        let tehuacan = g.resolve("tehuacan").expect("tehuacan");
        // puebla and veracruz both count 3; puebla was seen first.
        assert_eq!(patterns.frequent_places, vec![puebla, veracruz, tehuacan]);
        assert_eq!(
            patterns.frequent_service_types,
            vec!["custodia".to_string(), "traslado".to_string()]
        );
    }

    #[test]
    fn keeps_at_most_five_places() {
        let g = Gazetteer::builder()
            .place("a1", "A1", 19.0, -98.0, "X", &[])
            .place("b22", "B22", 19.1, -98.1, "X", &[])
            .place("c33", "C33", 19.2, -98.2, "X", &[])
            .place("d44", "D44", 19.3, -98.3, "X", &[])
            .place("e55", "E55", 19.4, -98.4, "X", &[])
            .place("f66", "F66", 19.5, -98.5, "X", &[])
            .build()
            .expect("builds");

        let mut records = Vec::new();
        for key in ["a1", "b22", "c33", "d44", "e55", "f66"] {
            records.push(record(key, key, "custodia"));
        }

        let patterns = analyze_patterns(&g, &records);
        assert_eq!(patterns.frequent_places.len(), 5);
    }
}
