use chrono::{Datelike, Weekday};

use super::config::TemporalRules;
use super::{clamp_subscore, ScoreDetails};
use crate::dispatch::domain::{CandidateAgent, HistoricalServiceRecord, ServiceRequest, ServiceStatus};

/// Availability fit: declared weekly pattern plus the "just finished a
/// nearby service" gap bonus over the agent's own recent records.
pub(super) fn score(
    rules: &TemporalRules,
    agent: &CandidateAgent,
    request: &ServiceRequest,
    nearby_history: &[HistoricalServiceRecord],
    details: &mut ScoreDetails,
) -> u8 {
    let mut points = rules.base;

    if let Some(availability) = agent.weekly_availability() {
        match request.scheduled_date.weekday() {
            Weekday::Sat => {
                if availability.saturday {
                    points += rules.saturday_bonus;
                }
            }
            Weekday::Sun => {
                if availability.sunday {
                    points += rules.sunday_bonus;
                }
            }
            _ => {
                if availability.weekdays {
                    points += rules.weekday_bonus;
                }
            }
        }
    }

    let scheduled = request.scheduled_at();
    let bands = [rules.preferred_gap, rules.follow_up_gap, rules.tight_gap];
    for record in nearby_history {
        if record.status != ServiceStatus::Completed {
            continue;
        }
        let gap_hours = (scheduled - record.occurred_at).num_minutes() as f64 / 60.0;
        if let Some(band) = bands.iter().find(|band| band.contains(gap_hours)) {
            points += band.bonus;
            details.hours_until_next_service = Some(gap_hours);
            break;
        }
    }

    clamp_subscore(points)
}
