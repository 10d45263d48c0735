use std::fs;
use std::path::PathBuf;

use caelex::assessments::debris::DebrisReport;
use caelex::assessments::environment::EnvironmentalReport;
use caelex::assessments::jurisdiction::JurisdictionReport;
use caelex::assessments::{evaluate, AssessmentDomain, AssessmentReport, CategorySection};
use caelex::config::AppConfig;
use caelex::engine::{Catalog, FactKind, StatusLedger};
use caelex::error::AppError;
use caelex::telemetry;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Caelex Compliance Engine",
    about = "Evaluate mission and operator profiles against the space-regulation catalogs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a profile against a domain catalog and print the report
    Assess(AssessArgs),
    /// List a domain's requirement catalog
    Catalog(CatalogArgs),
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Assessment domain
    #[arg(value_enum)]
    domain: DomainArg,
    /// Path to the profile JSON submitted by the operator
    #[arg(long)]
    profile: PathBuf,
    /// Optional path to the persisted status ledger JSON
    #[arg(long)]
    statuses: Option<PathBuf>,
    /// Report date (YYYY-MM-DD; defaults to CAELEX_REPORT_DATE, then today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Emit the report document as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Assessment domain
    #[arg(value_enum)]
    domain: DomainArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DomainArg {
    Debris,
    Environment,
    Jurisdiction,
}

impl From<DomainArg> for AssessmentDomain {
    fn from(value: DomainArg) -> Self {
        match value {
            DomainArg::Debris => AssessmentDomain::Debris,
            DomainArg::Environment => AssessmentDomain::Environment,
            DomainArg::Jurisdiction => AssessmentDomain::Jurisdiction,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Assess(args) => run_assess(args, &config),
        Command::Catalog(args) => run_catalog(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn run_assess(args: AssessArgs, config: &AppConfig) -> Result<(), AppError> {
    let domain = AssessmentDomain::from(args.domain);

    let profile: serde_json::Value = serde_json::from_str(&fs::read_to_string(&args.profile)?)?;
    let ledger: StatusLedger = match &args.statuses {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => StatusLedger::new(),
    };
    let today = args
        .today
        .or(config.report_date)
        .unwrap_or_else(|| Local::now().date_naive());

    info!(domain = domain.label(), %today, "running assessment");
    let report = evaluate(domain, profile, &ledger, today)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }

    Ok(())
}

fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    match AssessmentDomain::from(args.domain) {
        AssessmentDomain::Debris => print_catalog(caelex::assessments::debris::catalog()),
        AssessmentDomain::Environment => print_catalog(caelex::assessments::environment::catalog()),
        AssessmentDomain::Jurisdiction => {
            print_catalog(caelex::assessments::jurisdiction::catalog())
        }
    }
    Ok(())
}

fn print_catalog<K: FactKind>(catalog: &Catalog<K>) {
    println!(
        "{} catalog, version {} (published {})",
        catalog.domain(),
        catalog.version(),
        catalog.published()
    );
    for rule in catalog.rules() {
        println!(
            "- {} [{}] {} ({})",
            rule.id,
            rule.severity.label(),
            rule.title,
            rule.citation
        );
    }
}

fn render_report(report: &AssessmentReport) {
    match report {
        AssessmentReport::Debris(report) => render_debris(report),
        AssessmentReport::Environment(report) => render_environment(report),
        AssessmentReport::Jurisdiction(report) => render_jurisdiction(report),
    }
}

fn render_debris(report: &DebrisReport) {
    println!("Debris mitigation assessment ({})", report.generated_on);
    println!(
        "Mission: {} | {} | {} spacecraft ({})",
        report.mission.activity,
        report.mission.orbit_regime,
        report.mission.satellite_count,
        report.mission.constellation_tier
    );
    render_scorecard(report.score, report.counts.total_applicable);
    render_sections(&report.sections);
    render_footer(
        report.catalog_version,
        &report.warnings,
        report.retired.len(),
        report.disclaimer,
    );
}

fn render_environment(report: &EnvironmentalReport) {
    println!("Environmental footprint declaration ({})", report.generated_on);
    println!(
        "Mission: {} x {:.0} kg on {} | disposal: {}",
        report.declaration.satellite_count,
        report.declaration.spacecraft_mass_kg,
        report.declaration.launch_vehicle,
        report.declaration.deorbit_strategy
    );

    println!("\nLifecycle footprint");
    for phase in &report.footprint.phases {
        let marker = if phase.hotspot { " <- hotspot" } else { "" };
        println!(
            "- {}: {:.1} tCO2e ({:.0}%){}",
            phase.phase_label,
            phase.tco2e,
            phase.share * 100.0,
            marker
        );
    }
    println!(
        "Total: {:.1} tCO2e, grade {}",
        report.footprint.total_tco2e, report.footprint.grade_label
    );
    if report.footprint.simplified_assessment {
        println!("Simplified assessment: eligible (small enterprise)");
    }

    render_scorecard(report.score, report.counts.total_applicable);
    render_sections(&report.sections);

    if !report.recommendations.is_empty() {
        println!("\nRecommendations");
        for recommendation in &report.recommendations {
            println!("- {recommendation}");
        }
    }

    render_footer(
        report.catalog_version,
        &report.warnings,
        report.retired.len(),
        report.disclaimer,
    );
}

fn render_jurisdiction(report: &JurisdictionReport) {
    println!("Space-law applicability assessment ({})", report.generated_on);
    println!(
        "Operator: {} established in {} | {}",
        report.operator.entity_type, report.operator.established_in, report.operator.activity
    );
    println!("Applicable regimes: {}", report.regimes.join(", "));
    render_scorecard(report.score, report.counts.total_applicable);
    render_sections(&report.sections);
    render_footer(
        report.catalog_version,
        &report.warnings,
        report.retired.len(),
        report.disclaimer,
    );
}

fn render_scorecard(score: u8, total_applicable: usize) {
    println!("\nCompliance score: {score}/100 across {total_applicable} applicable requirement(s)");
}

fn render_sections(sections: &[CategorySection]) {
    for section in sections {
        println!("\n[{}]", section.category);
        for requirement in &section.requirements {
            println!(
                "- {} [{}] {} ({}): {}",
                requirement.rule_id,
                requirement.severity_label,
                requirement.title,
                requirement.citation,
                requirement.status_label
            );
            if let Some(notes) = &requirement.notes {
                println!("  notes: {notes}");
            }
        }
    }
}

fn render_footer(
    catalog_version: &str,
    warnings: &[caelex::engine::IncompleteProfileWarning],
    retired: usize,
    disclaimer: &str,
) {
    if !warnings.is_empty() {
        println!("\nIncomplete profile");
        for warning in warnings {
            println!(
                "- {} skipped: missing '{}'",
                warning.rule_id, warning.missing_fact
            );
        }
    }
    if retired > 0 {
        println!("\n{retired} previously tracked requirement(s) no longer apply.");
    }
    println!("\nCatalog version {catalog_version}");
    println!("{disclaimer}");
}
