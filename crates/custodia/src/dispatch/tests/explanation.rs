use super::common::*;
use crate::dispatch::domain::WeeklyAvailability;
use crate::dispatch::scoring::{explain, ScoreBreakdown, ScoreDetails};

#[test]
fn explanations_are_never_empty_and_capped_at_three() {
    let engine = engine();
    let request = tuesday_request("puebla", "veracruz");

    let bare = engine.score(&bare_agent("bare"), &request, &[]);
    assert_eq!(bare.details.reasons.len(), 1);

    let mut loaded = with_frequent(
        roster_agent(
            "loaded",
            Some(4.8),
            Some(60),
            Some(WeeklyAvailability {
                weekdays: true,
                saturday: true,
                sunday: false,
            }),
        ),
        &["puebla", "cholula"],
    );
    loaded.record.owns_vehicle = true;
    loaded.record.has_security_experience = true;

    let history = vec![completed_record("loaded", on_request_day(7, 0))];
    let breakdown = engine.score(&loaded, &request, &history);
    assert_eq!(breakdown.details.reasons.len(), 3);
}

#[test]
fn strongest_reasons_come_first() {
    let engine = engine();
    let request = tuesday_request("puebla", "veracruz");

    let agent = with_frequent(
        roster_agent(
            "priority",
            None,
            None,
            Some(WeeklyAvailability {
                weekdays: true,
                saturday: false,
                sunday: false,
            }),
        ),
        &["puebla", "cholula"],
    );
    // Weekday bonus plus a 3 h gap pushes temporal past the threshold.
    let history = vec![completed_record("priority", on_request_day(7, 0))];

    let breakdown = engine.score(&agent, &request, &history);
    let reasons = &breakdown.details.reasons;

    assert!(reasons[0].contains("3.0 h before"));
    assert!(reasons[1].contains("origin region"));
    assert!(reasons[2].contains("km from the origin"));
}

#[test]
fn fallback_reason_tracks_the_total_band() {
    let low = ScoreBreakdown {
        total: 25,
        temporal: 30,
        geographic: 20,
        operational: 25,
        details: ScoreDetails::default(),
    };
    assert_eq!(
        explain(&low, &bare_agent("low")),
        vec!["Available for the service".to_string()]
    );

    let fair = ScoreBreakdown {
        total: 55,
        ..low.clone()
    };
    assert_eq!(
        explain(&fair, &bare_agent("fair")),
        vec!["Compatible profile for this service".to_string()]
    );

    let high = ScoreBreakdown {
        total: 78,
        ..low
    };
    assert_eq!(
        explain(&high, &bare_agent("high")),
        vec!["Highly compatible profile for this service".to_string()]
    );
}

#[test]
fn rating_and_volume_reasons_apply_without_detail_flags() {
    let engine = engine();
    let request = tuesday_request(UNRESOLVED, UNRESOLVED);
    let agent = roster_agent("veteran", Some(4.8), Some(60), None);

    let breakdown = engine.score(&agent, &request, &[]);
    assert_eq!(breakdown.details.reasons.len(), 2);
    assert!(breakdown.details.reasons[0].contains("4.8"));
    assert!(breakdown.details.reasons[1].contains("60 services"));
}
