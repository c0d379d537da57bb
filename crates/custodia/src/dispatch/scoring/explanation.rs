use super::ScoreBreakdown;
use crate::dispatch::domain::CandidateAgent;

const MAX_REASONS: usize = 3;
const STRONG_TEMPORAL_THRESHOLD: u8 = 60;
const NEARBY_DISTANCE_KM: u32 = 50;
const TOP_RATING: f64 = 4.5;
const PROVEN_VOLUME: u32 = 20;
const HIGH_TOTAL: u8 = 70;
const FAIR_TOTAL: u8 = 50;

/// Up to three justification strings for ranking UI and audit trails, in a
/// fixed priority order. Never empty: when no specific reason applies a
/// generic one keyed on the total takes its place.
pub fn explain(breakdown: &ScoreBreakdown, agent: &CandidateAgent) -> Vec<String> {
    let details = &breakdown.details;
    let mut reasons = Vec::new();

    if breakdown.temporal > STRONG_TEMPORAL_THRESHOLD {
        reasons.push(match details.hours_until_next_service {
            Some(hours) => format!(
                "Wraps up a nearby service {hours:.1} h before this schedule"
            ),
            None => "Declared availability fits the requested schedule".to_string(),
        });
    }

    if details.preferred_zone_match {
        reasons.push("Preferred zone covers this route".to_string());
    }

    if details.same_region_as_frequent {
        reasons.push("Regularly operates in the origin region".to_string());
    }

    if let Some(km) = details.estimated_distance_km {
        if km < NEARBY_DISTANCE_KM {
            reasons.push(format!("Usual operating area is about {km} km from the origin"));
        }
    }

    if details.service_type_experience {
        reasons.push("Accredited for this service profile".to_string());
    }

    if details.vehicle_advantage {
        reasons.push("Own vehicle available for the assignment".to_string());
    }

    if let Some(rating) = agent.rating() {
        if rating >= TOP_RATING {
            reasons.push(format!("Outstanding service rating of {rating:.1}"));
        }
    }

    if let Some(completed) = agent.completed_services() {
        if completed >= PROVEN_VOLUME {
            reasons.push(format!("{completed} services completed on record"));
        }
    }

    reasons.truncate(MAX_REASONS);

    if reasons.is_empty() {
        let fallback = if breakdown.total >= HIGH_TOTAL {
            "Highly compatible profile for this service"
        } else if breakdown.total >= FAIR_TOTAL {
            "Compatible profile for this service"
        } else {
            "Available for the service"
        };
        reasons.push(fallback.to_string());
    }

    reasons
}
