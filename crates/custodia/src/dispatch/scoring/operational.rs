use super::config::OperationalRules;
use super::{clamp_subscore, ScoreDetails};
use crate::dispatch::domain::{CandidateAgent, ServiceRequest};

/// Service types whose vehicle requirement goes beyond plain escort duty.
const RELOCATION_TERMS: &[&str] = &["traslado", "mudanza", "relocation", "transfer"];

/// Certification wording that counts toward armed-service accreditation.
const SECURITY_CERT_TERMS: &[&str] = &[
    "seguridad", "security", "arma", "weapon", "custodia", "custody", "escolta",
];

/// Capability fit: experience, equipment, track record, and certifications.
pub(super) fn score(
    rules: &OperationalRules,
    agent: &CandidateAgent,
    request: &ServiceRequest,
    details: &mut ScoreDetails,
) -> u8 {
    let mut points = rules.base;

    if agent.record.has_security_experience {
        points += rules.security_experience_bonus;
        if request.requires_armed_guard {
            points += rules.armed_service_bonus;
            details.service_type_experience = true;
        }
    }

    if agent.record.owns_vehicle {
        points += rules.vehicle_bonus;
        details.vehicle_advantage = true;
        if is_relocation_service(&request.service_type) || request.requires_special_equipment {
            points += rules.relocation_vehicle_bonus;
        }
    }

    if let Some(rating) = agent.rating() {
        if let Some(band) = rules
            .rating_bands
            .iter()
            .find(|band| rating >= band.at_least)
        {
            points += band.bonus;
        }
    }

    if let Some(completed) = agent.completed_services() {
        if let Some(band) = rules
            .volume_bands
            .iter()
            .find(|band| completed >= band.at_least)
        {
            points += band.bonus;
        }
    }

    let certifications = &agent.record.certifications;
    if !certifications.is_empty() {
        let earned = certifications.len() as i32 * rules.certification_bonus;
        points += earned.min(rules.certification_bonus_cap);

        if request.requires_armed_guard
            && certifications
                .iter()
                .any(|certification| mentions_security(certification))
        {
            points += rules.security_certification_bonus;
            details.service_type_experience = true;
        }
    }

    clamp_subscore(points)
}

fn is_relocation_service(service_type: &str) -> bool {
    let normalized = service_type.to_lowercase();
    RELOCATION_TERMS.iter().any(|term| normalized.contains(term))
}

fn mentions_security(certification: &str) -> bool {
    let normalized = certification.to_lowercase();
    SECURITY_CERT_TERMS
        .iter()
        .any(|term| normalized.contains(term))
}
