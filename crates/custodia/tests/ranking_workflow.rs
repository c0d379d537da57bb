use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use custodia::dispatch::{
    analyze_patterns, gazetteer, parse_history, rank, AgentId, AgentProvenance, AgentRecord,
    AvailabilityState, CandidateAgent, CompatibilityEngine, RosterDetails, ScoringConfig,
    ScoringInput, ServiceRequest, WeeklyAvailability,
};

const HISTORY_CSV: &str = "\
Timestamp,Origin,Destination,Status,Custodian,Service Type,Distance Km
2026-03-02T06:00:00Z,TYASA → TEHUACAN PUEBLA,CDMX,completado,R. Ortega,custodia,312
2026-03-04T07:30:00Z,TEHUACAN,PUERTO DE VERACRUZ,completado,R. Ortega,custodia,290
2026-03-06T06:45:00Z,PUEBLA,TEHUACAN,completado,R. Ortega,traslado,115
2026-03-10T06:30:00Z,ORIZABA,TEHUACAN,completado,R. Ortega,custodia,95
";

fn custodian(name: &str, provenance: AgentProvenance) -> CandidateAgent {
    CandidateAgent {
        record: AgentRecord {
            id: AgentId(format!("cust-{}", name.to_lowercase().replace(' ', "-"))),
            name: name.to_string(),
            availability: AvailabilityState::Available,
            owns_vehicle: true,
            has_security_experience: true,
            certifications: vec!["Custodia armada".to_string()],
            patterns: Default::default(),
        },
        provenance,
    }
}

#[test]
fn ranks_a_realistic_pool_end_to_end() {
    let gazetteer = Arc::new(gazetteer::builtin());
    let engine = CompatibilityEngine::new(gazetteer.clone(), ScoringConfig::default());

    let history = parse_history(HISTORY_CSV.as_bytes()).expect("history csv parses");
    assert_eq!(history.len(), 4);

    let patterns = analyze_patterns(&gazetteer, &history);
    let tehuacan = gazetteer.resolve("tehuacan").expect("tehuacan resolves");
    assert!(patterns.frequent_places.contains(&tehuacan));
    assert_eq!(patterns.frequent_service_types[0], "custodia");

    let veteran = custodian(
        "R. Ortega",
        AgentProvenance::Roster(RosterDetails {
            rating: Some(4.7),
            completed_services: Some(58),
            weekly_availability: Some(WeeklyAvailability {
                weekdays: true,
                saturday: true,
                sunday: false,
            }),
        }),
    )
    .with_patterns(patterns);

    let newcomer = CandidateAgent {
        record: AgentRecord {
            id: AgentId("cust-novato".to_string()),
            name: "S. Varela".to_string(),
            availability: AvailabilityState::Available,
            owns_vehicle: false,
            has_security_experience: false,
            certifications: Vec::new(),
            patterns: Default::default(),
        },
        provenance: AgentProvenance::HistoryDerived,
    };

    let request = ServiceRequest {
        origin_text: "TYASA → TEHUACAN, PUEBLA".to_string(),
        destination_text: "CEDIS Ciudad de México".to_string(),
        // 2026-03-10 is a Tuesday; the last Ortega service wrapped at 06:30.
        scheduled_date: NaiveDate::from_ymd_opt(2026, 3, 10).expect("valid date"),
        scheduled_start: NaiveTime::from_hms_opt(9, 30, 0).expect("valid time"),
        service_type: "custodia".to_string(),
        requires_armed_guard: true,
        requires_special_equipment: false,
    };

    let inputs = vec![
        ScoringInput {
            agent: newcomer,
            history: Vec::new(),
        },
        ScoringInput {
            agent: veteran,
            history,
        },
    ];

    let ranked = rank(&engine, &request, &inputs);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].agent_name, "R. Ortega");

    let top = &ranked[0].breakdown;
    // Weekday availability plus the 3 h gap since the Orizaba service.
    assert_eq!(top.temporal, 75);
    assert_eq!(top.details.hours_until_next_service, Some(3.0));
    // Frequent origin plus the shared corridor zone.
    assert!(top.geographic >= 70);
    assert!(top.details.same_region_as_frequent);
    // Armed experience, vehicle, rating, volume, and certifications.
    assert_eq!(top.operational, 100);
    assert!(top.details.service_type_experience);

    for candidate in &ranked {
        let b = &candidate.breakdown;
        assert!(b.total <= 100);
        let reasons = &b.details.reasons;
        assert!(!reasons.is_empty() && reasons.len() <= 3);
    }

    let tail = &ranked[1].breakdown;
    assert_eq!((tail.temporal, tail.geographic, tail.operational), (30, 20, 25));
    assert_eq!(reconstructed_total(tail), tail.total);
    assert_eq!(reconstructed_total(top), top.total);
}

fn reconstructed_total(breakdown: &custodia::dispatch::ScoreBreakdown) -> u8 {
    (f64::from(breakdown.temporal) * 0.40
        + f64::from(breakdown.geographic) * 0.35
        + f64::from(breakdown.operational) * 0.25)
        .round()
        .clamp(0.0, 100.0) as u8
}
