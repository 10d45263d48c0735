use serde::Serialize;

use super::catalog::{
    end_of_life_tco2e_per_kg, grade_for_total, phase_recommendation, vehicle_factors,
    HOTSPOT_SHARE_THRESHOLD, MANUFACTURING_TCO2E_PER_KG, OPERATIONS_TCO2E_PER_STATION_YEAR,
    RAW_MATERIALS_TCO2E_PER_KG, TRANSPORT_TCO2E_PER_KG,
};
use super::domain::{EnvironmentalProfile, FootprintGrade, LifecyclePhase};

/// One lifecycle phase's contribution to the total footprint.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseContribution {
    pub phase: LifecyclePhase,
    pub phase_label: &'static str,
    pub tco2e: f64,
    /// Fraction of the mission total attributed to this phase.
    pub share: f64,
    pub hotspot: bool,
}

/// Computed footprint: phase breakdown, total, grade, hotspots, and the
/// phase-keyed recommendations.
#[derive(Debug, Clone, Serialize)]
pub struct FootprintSummary {
    pub phases: Vec<PhaseContribution>,
    pub total_tco2e: f64,
    pub grade: FootprintGrade,
    pub grade_label: &'static str,
    pub hotspots: Vec<LifecyclePhase>,
    pub simplified_assessment: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<&'static str>,
}

/// Deterministic weighted sum over the reference emission tables. The
/// simplified-assessment flag never changes the computed numbers.
pub fn footprint(profile: &EnvironmentalProfile) -> FootprintSummary {
    let fleet_mass_kg = profile.spacecraft_mass_kg * profile.satellite_count as f64;

    let launch = vehicle_factors(profile.launch_vehicle).launch_tco2e * profile.launch_mass_fraction;
    let operations = OPERATIONS_TCO2E_PER_STATION_YEAR
        * profile.ground_station_count as f64
        * profile.mission_duration_years;
    let end_of_life = end_of_life_tco2e_per_kg(profile.deorbit_strategy) * fleet_mass_kg;

    let raw = [
        (LifecyclePhase::RawMaterials, RAW_MATERIALS_TCO2E_PER_KG * fleet_mass_kg),
        (LifecyclePhase::Manufacturing, MANUFACTURING_TCO2E_PER_KG * fleet_mass_kg),
        (LifecyclePhase::Transport, TRANSPORT_TCO2E_PER_KG * fleet_mass_kg),
        (LifecyclePhase::Launch, launch),
        (LifecyclePhase::Operations, operations),
        (LifecyclePhase::EndOfLife, end_of_life),
    ];

    let total_tco2e: f64 = raw.iter().map(|(_, tco2e)| tco2e).sum();

    let mut phases = Vec::with_capacity(raw.len());
    let mut hotspots = Vec::new();
    for (phase, tco2e) in raw {
        let share = if total_tco2e > 0.0 {
            tco2e / total_tco2e
        } else {
            0.0
        };
        let hotspot = share > HOTSPOT_SHARE_THRESHOLD;
        if hotspot {
            hotspots.push(phase);
        }
        phases.push(PhaseContribution {
            phase,
            phase_label: phase.label(),
            tco2e,
            share,
            hotspot,
        });
    }

    let recommendations = hotspots
        .iter()
        .map(|phase| phase_recommendation(*phase))
        .collect();

    let grade = grade_for_total(total_tco2e);

    FootprintSummary {
        phases,
        total_tco2e,
        grade,
        grade_label: grade.label(),
        hotspots,
        simplified_assessment: profile.is_small_enterprise,
        recommendations,
    }
}
