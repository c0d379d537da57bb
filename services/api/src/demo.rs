//! Seeded roster, history, and CLI commands for stakeholder demos.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::Args;

use custodia::dispatch::{
    gazetteer, parse_history, AgentId, AgentProvenance, AgentRecord, AvailabilityState,
    CandidateAgent, DispatchService, HistoricalServiceRecord, ProspectDetails, RankingOutcome,
    RosterDetails, ServiceRequest, ServiceStatus, WeeklyAvailability,
};
use custodia::error::AppError;

use crate::infra::{default_scoring_config, InMemoryAgentDirectory, InMemoryHistoryStore};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the full sub-score breakdown per candidate
    #[arg(long)]
    pub(crate) breakdown: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Free-text route origin, e.g. "TYASA → TEHUACAN, PUEBLA"
    #[arg(long)]
    origin: String,
    /// Free-text route destination
    #[arg(long)]
    destination: String,
    /// Scheduled date (YYYY-MM-DD)
    #[arg(long)]
    date: NaiveDate,
    /// Scheduled start time (HH:MM:SS)
    #[arg(long, default_value = "09:00:00")]
    time: NaiveTime,
    /// Service-type tag for the job
    #[arg(long, default_value = "custodia")]
    service_type: String,
    /// The job requires an armed custodian
    #[arg(long)]
    armed_guard: bool,
    /// The job requires special equipment
    #[arg(long)]
    special_equipment: bool,
    /// CSV export of past services to mine instead of the seeded history
    #[arg(long)]
    history: Option<PathBuf>,
    /// Print the full sub-score breakdown per candidate
    #[arg(long)]
    breakdown: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let outcome = rank_with_history(demo_request(), demo_history())?;
    print_outcome(&outcome, args.breakdown);
    Ok(())
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let history = match &args.history {
        Some(path) => parse_history(File::open(path)?)?,
        None => demo_history(),
    };

    let request = ServiceRequest {
        origin_text: args.origin.clone(),
        destination_text: args.destination.clone(),
        scheduled_date: args.date,
        scheduled_start: args.time,
        service_type: args.service_type.clone(),
        requires_armed_guard: args.armed_guard,
        requires_special_equipment: args.special_equipment,
    };

    let outcome = rank_with_history(request, history)?;
    print_outcome(&outcome, args.breakdown);
    Ok(())
}

fn rank_with_history(
    request: ServiceRequest,
    history: Vec<HistoricalServiceRecord>,
) -> Result<RankingOutcome, AppError> {
    let service = DispatchService::new(
        Arc::new(InMemoryAgentDirectory::seeded(demo_roster())),
        Arc::new(InMemoryHistoryStore::seeded(history)),
        Arc::new(gazetteer::builtin()),
        default_scoring_config(),
    );

    Ok(service.rank_request(&request)?)
}

fn print_outcome(outcome: &RankingOutcome, breakdown: bool) {
    println!(
        "Service '{}' scheduled {} | origin: {} | destination: {}",
        outcome.service_type,
        outcome.scheduled_at,
        outcome.origin_resolved.as_deref().unwrap_or("(unresolved)"),
        outcome.destination_resolved.as_deref().unwrap_or("(unresolved)"),
    );

    for (position, candidate) in outcome.candidates.iter().enumerate() {
        println!(
            "{:>2}. {:<14} {:>3} pts  [{}]",
            position + 1,
            candidate.agent_name,
            candidate.breakdown.total,
            candidate.provenance,
        );
        if breakdown {
            println!(
                "    temporal {:>3} | geographic {:>3} | operational {:>3}",
                candidate.breakdown.temporal,
                candidate.breakdown.geographic,
                candidate.breakdown.operational,
            );
        }
        for reason in &candidate.breakdown.details.reasons {
            println!("    - {reason}");
        }
    }
}

/// The service runs Tuesday 2026-03-10 at 09:30 out of Tehuacán; R. Ortega's
/// last seeded run wraps three hours earlier.
fn demo_request() -> ServiceRequest {
    ServiceRequest {
        origin_text: "TYASA → TEHUACAN, PUEBLA".to_string(),
        destination_text: "CEDIS Ciudad de México".to_string(),
        scheduled_date: NaiveDate::from_ymd_opt(2026, 3, 10).expect("valid date"),
        scheduled_start: NaiveTime::from_hms_opt(9, 30, 0).expect("valid time"),
        service_type: "custodia".to_string(),
        requires_armed_guard: true,
        requires_special_equipment: false,
    }
}

pub(crate) fn demo_roster() -> Vec<CandidateAgent> {
    vec![
        CandidateAgent {
            record: AgentRecord {
                id: AgentId("cust-001".to_string()),
                name: "R. Ortega".to_string(),
                availability: AvailabilityState::Available,
                owns_vehicle: true,
                has_security_experience: true,
                certifications: vec![
                    "Custodia armada".to_string(),
                    "Manejo defensivo".to_string(),
                ],
                patterns: Default::default(),
            },
            provenance: AgentProvenance::Roster(RosterDetails {
                rating: Some(4.7),
                completed_services: Some(58),
                weekly_availability: Some(WeeklyAvailability {
                    weekdays: true,
                    saturday: true,
                    sunday: false,
                }),
            }),
        },
        CandidateAgent {
            record: AgentRecord {
                id: AgentId("cust-002".to_string()),
                name: "J. Mena".to_string(),
                availability: AvailabilityState::Available,
                owns_vehicle: false,
                has_security_experience: true,
                certifications: vec!["Seguridad privada".to_string()],
                patterns: Default::default(),
            },
            provenance: AgentProvenance::Roster(RosterDetails {
                rating: Some(4.1),
                completed_services: Some(23),
                weekly_availability: Some(WeeklyAvailability {
                    weekdays: true,
                    saturday: false,
                    sunday: false,
                }),
            }),
        },
        CandidateAgent {
            record: AgentRecord {
                id: AgentId("cand-014".to_string()),
                name: "L. Cabrera".to_string(),
                availability: AvailabilityState::Available,
                owns_vehicle: true,
                has_security_experience: false,
                certifications: vec!["Manejo defensivo".to_string()],
                patterns: Default::default(),
            },
            provenance: AgentProvenance::Prospect(ProspectDetails {
                preferred_zone: Some("golfo".to_string()),
                weekly_availability: Some(WeeklyAvailability {
                    weekdays: true,
                    saturday: true,
                    sunday: true,
                }),
                rating: None,
                completed_services: None,
            }),
        },
        CandidateAgent {
            record: AgentRecord {
                id: AgentId("hist-031".to_string()),
                name: "S. Varela".to_string(),
                availability: AvailabilityState::Available,
                owns_vehicle: false,
                has_security_experience: false,
                certifications: Vec::new(),
                patterns: Default::default(),
            },
            provenance: AgentProvenance::HistoryDerived,
        },
    ]
}

pub(crate) fn demo_history() -> Vec<HistoricalServiceRecord> {
    fn record(
        occurred_at: NaiveDateTime,
        origin: &str,
        destination: &str,
        custodian: &str,
        service_type: &str,
        distance_km: f64,
    ) -> HistoricalServiceRecord {
        HistoricalServiceRecord {
            occurred_at,
            origin_text: origin.to_string(),
            destination_text: destination.to_string(),
            status: ServiceStatus::Completed,
            custodian: custodian.to_string(),
            service_type: service_type.to_string(),
            distance_km: Some(distance_km),
        }
    }

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .expect("valid date")
            .and_hms_opt(hour, minute, 0)
            .expect("valid time")
    }

    vec![
        record(
            at(2026, 3, 2, 6, 0),
            "TYASA → TEHUACAN PUEBLA",
            "CDMX",
            "R. Ortega",
            "custodia",
            312.0,
        ),
        record(
            at(2026, 3, 4, 7, 30),
            "TEHUACAN",
            "PUERTO DE VERACRUZ",
            "R. Ortega",
            "custodia",
            290.0,
        ),
        record(
            at(2026, 3, 6, 6, 45),
            "PUEBLA",
            "TEHUACAN",
            "R. Ortega",
            "traslado",
            115.0,
        ),
        record(
            at(2026, 3, 10, 6, 30),
            "ORIZABA",
            "TEHUACAN",
            "R. Ortega",
            "custodia",
            95.0,
        ),
        record(
            at(2026, 3, 3, 9, 0),
            "PUERTO DE VERACRUZ",
            "XALAPA",
            "J. Mena",
            "custodia",
            110.0,
        ),
        record(
            at(2026, 3, 7, 10, 15),
            "VERACRUZ",
            "CORDOBA",
            "J. Mena",
            "traslado",
            125.0,
        ),
    ]
}
