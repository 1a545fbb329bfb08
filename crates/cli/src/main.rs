//! Command-line collaborator for the triage engine.
//!
//! Thin presentation layer: reads vitals, drives the workflow, and renders
//! the engine's output as plain text or JSON. All decision logic lives in
//! `triage-core`.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use triage_core::handoff::handoff_payload;
use triage_core::{
    classify, Encounter, EncounterContext, Metric, SafetyLimits, SafetyScreen,
    SpecialistDirectory, StageInput, Symptom, TriState, TriageResult, VitalsHistory,
    VitalsReading,
};
use triage_types::{Age, PatientName};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Rural triage decision engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a vitals history read from a JSON file or stdin
    Classify {
        /// Path to a JSON object of {"metric": [readings]}; stdin if omitted
        #[arg(long)]
        file: Option<PathBuf>,
        /// Emit the full result as JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in deteriorating-patient scenario end to end
    Simulate,
    /// Resolve the specialist referral for a primary concern
    Specialist {
        /// Symptom name, e.g. "Chest Pain" or "Wound/Skin"
        symptom: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Classify { file, json }) => {
            let history = read_history(file)?;
            let result = classify(&history, &SafetyLimits::default());
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&result);
            }
        }
        Some(Commands::Simulate) => {
            simulate()?;
        }
        Some(Commands::Specialist { symptom }) => {
            let symptom = Symptom::from_name(&symptom)
                .with_context(|| format!("unknown symptom '{symptom}'"))?;
            let directory = SpecialistDirectory::default();
            println!("Route to: {}", directory.lookup(symptom)?);
        }
        None => {
            println!("Use 'triage --help' for commands");
        }
    }

    Ok(())
}

/// Read a vitals history from a JSON file or stdin.
fn read_history(file: Option<PathBuf>) -> anyhow::Result<VitalsHistory> {
    let contents = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let raw: BTreeMap<String, Vec<f64>> =
        serde_json::from_str(&contents).context("vitals input must be {\"metric\": [readings]}")?;

    let mut history = VitalsHistory::new();
    for (name, readings) in raw {
        match Metric::from_wire(&name) {
            Some(metric) => history.set_series(metric, readings),
            None => tracing::warn!(metric = %name, "unmonitored metric in input; ignoring"),
        }
    }
    Ok(history)
}

fn print_result(result: &TriageResult) {
    match result.overall_status {
        triage_core::TriageStatus::RedFlag => println!("STATUS: Immediate Attention Required"),
        triage_core::TriageStatus::Monitor => println!("STATUS: Under Monitoring"),
    }
    println!(
        "Worsening Metrics: {} | Red Flags: {}",
        result.worsening_count, result.red_flag_count
    );

    println!("\nMetric        Trend      Critical  Slope");
    for assessment in &result.assessments {
        println!(
            "{:<13} {:<10} {:<9} {:.2}",
            assessment.metric.display_name(),
            assessment.trend_label(),
            assessment.critical_label(),
            assessment.rounded_slope(),
        );
    }

    if result.reasons.is_empty() {
        println!("\n- No critical deterioration detected at this time.");
    } else {
        println!("\nWhy this status was assigned:");
        for reason in &result.reasons {
            println!("- {reason}");
        }
    }
}

/// Walk the full workflow with hourly checkups for a crashing patient.
fn simulate() -> anyhow::Result<()> {
    let readings = [
        (75.0, 98.0, 2.0),
        (82.0, 97.0, 3.0),
        (95.0, 95.0, 5.0),
        (110.0, 92.0, 7.0),
        (125.0, 89.0, 8.0),
        (135.0, 87.0, 9.0),
    ];

    let context = EncounterContext {
        main_symptom: Symptom::BreathingIssue,
        worsening_reported: TriState::Yes,
    };

    let mut encounter = Encounter::new()
        .advance(StageInput::Register {
            name: PatientName::new("Simulated Patient")?,
            age: Age::new(45)?,
        })?
        .advance(StageInput::SafetyAnswers(SafetyScreen {
            airway_difficulty: TriState::No,
            bleeding: TriState::No,
        }))?;

    for (visit, (heart_rate, spo2, pain_score)) in readings.into_iter().enumerate() {
        if visit > 0 {
            encounter = encounter.begin_checkup()?;
        }
        encounter = encounter
            .advance(StageInput::Vitals(VitalsReading {
                heart_rate,
                spo2,
                pain_score,
            }))?
            .advance(StageInput::Context(context))?;
    }

    let limits = SafetyLimits::default();
    let directory = SpecialistDirectory::default();
    let result = encounter.triage(&limits);

    print_result(&result);
    println!("\nRoute to: {}", directory.lookup(context.main_symptom)?);
    println!(
        "Hand-off payload: {}",
        handoff_payload(&encounter, &result, &directory)?
    );

    Ok(())
}
