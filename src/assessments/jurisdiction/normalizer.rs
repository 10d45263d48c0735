use super::super::mission::ActivityType;
use super::domain::{EnterpriseSize, JurisdictionFact, OperatorProfile, OperatorSubmission};
use crate::engine::profile::{require_count_at_least, require_non_negative};
use crate::engine::{FactSet, FactValue, InvalidProfileError};

/// Validate a raw operator submission and derive the canonical profile.
pub fn normalize(submission: OperatorSubmission) -> Result<OperatorProfile, InvalidProfileError> {
    let annual_turnover_meur =
        require_non_negative("annual_turnover_meur", submission.annual_turnover_meur)?;

    let operates_spacecraft = matches!(
        submission.activity_type,
        ActivityType::SpacecraftOperation | ActivityType::InOrbitServices
    );
    let satellite_count = if operates_spacecraft {
        require_count_at_least("satellite_count", submission.satellite_count, 1)?
    } else {
        submission.satellite_count
    };

    let enterprise_size =
        EnterpriseSize::from_metrics(submission.employee_count, annual_turnover_meur);
    let eu_established = submission.established_in.is_eu_member();
    let eu_market_actor = eu_established || submission.offers_eu_services;

    let mut facts = FactSet::new();
    facts.insert(
        JurisdictionFact::EstablishedIn,
        FactValue::Tag(submission.established_in.key()),
    );
    facts.insert(
        JurisdictionFact::EuEstablished,
        FactValue::Flag(eu_established),
    );
    facts.insert(
        JurisdictionFact::EuMarketActor,
        FactValue::Flag(eu_market_actor),
    );
    facts.insert(
        JurisdictionFact::ActivityType,
        FactValue::Tag(submission.activity_type.key()),
    );
    facts.insert(
        JurisdictionFact::OrbitRegime,
        FactValue::Tag(submission.orbit_regime.key()),
    );
    facts.insert(
        JurisdictionFact::SatelliteCount,
        FactValue::Count(satellite_count),
    );
    facts.insert(
        JurisdictionFact::OffersEuServices,
        FactValue::Flag(submission.offers_eu_services),
    );
    if let Some(country) = submission.launch_country {
        facts.insert(JurisdictionFact::LaunchCountry, FactValue::Tag(country.key()));
    }
    facts.insert(
        JurisdictionFact::EnterpriseSize,
        FactValue::Tag(enterprise_size.key()),
    );
    facts.insert(
        JurisdictionFact::EntityType,
        FactValue::Tag(submission.entity_type.key()),
    );

    Ok(OperatorProfile {
        established_in: submission.established_in,
        entity_type: submission.entity_type,
        activity_type: submission.activity_type,
        orbit_regime: submission.orbit_regime,
        satellite_count,
        offers_eu_services: submission.offers_eu_services,
        launch_country: submission.launch_country,
        employee_count: submission.employee_count,
        annual_turnover_meur,
        enterprise_size,
        facts,
    })
}
