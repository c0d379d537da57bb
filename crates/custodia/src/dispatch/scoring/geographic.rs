use super::config::GeographicRules;
use super::{clamp_subscore, ScoreDetails};
use crate::dispatch::domain::CandidateAgent;
use crate::dispatch::gazetteer::{Gazetteer, PlaceId};

/// Route affinity: preferred zone, frequent places, shared zones, and the
/// distance from the origin to the agent's usual operating area.
///
/// Resolution failures upstream arrive as `None` and simply withhold the
/// related bonuses.
pub(super) fn score(
    rules: &GeographicRules,
    gazetteer: &Gazetteer,
    agent: &CandidateAgent,
    origin: Option<PlaceId>,
    destination: Option<PlaceId>,
    details: &mut ScoreDetails,
) -> u8 {
    let mut points = rules.base;

    if let Some(zone) = agent.preferred_zone() {
        if origin.is_some_and(|place| gazetteer.zone_contains(zone, place)) {
            points += rules.preferred_zone_origin_bonus;
            details.preferred_zone_match = true;
        } else if destination.is_some_and(|place| gazetteer.zone_contains(zone, place)) {
            points += rules.preferred_zone_destination_bonus;
            details.preferred_zone_match = true;
        }
    }

    let frequent = &agent.record.patterns.frequent_places;
    if frequent.is_empty() {
        return clamp_subscore(points);
    }

    if origin.is_some_and(|place| frequent.contains(&place)) {
        points += rules.frequent_origin_bonus;
    } else if destination.is_some_and(|place| frequent.contains(&place)) {
        points += rules.frequent_destination_bonus;
    }

    if let Some(origin) = origin {
        if frequent
            .iter()
            .any(|place| gazetteer.same_zone(*place, origin))
        {
            points += rules.frequent_zone_bonus;
            details.same_region_as_frequent = true;
        }

        // Minimum over the frequent places other than the origin itself;
        // the origin is already covered by the frequent-origin bonus.
        let min_distance = frequent
            .iter()
            .filter(|place| **place != origin)
            .filter_map(|place| gazetteer.distance_km(origin, *place))
            .min();

        if let Some(km) = min_distance {
            details.estimated_distance_km = Some(km);
            points += if km < rules.close_distance.under_km {
                rules.close_distance.bonus
            } else if km < rules.near_distance.under_km {
                rules.near_distance.bonus
            } else if km < rules.regional_distance.under_km {
                rules.regional_distance.bonus
            } else {
                rules.far_penalty
            };
        }
    }

    clamp_subscore(points)
}
