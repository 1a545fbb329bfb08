//! Compact hand-off payload for the clinician bridge.
//!
//! The engine owns the payload *content*; rendering it as a scannable code
//! is left to the presentation collaborator. Field order is fixed so a
//! scanning clinician always sees the same shape.

use crate::classify::TriageResult;
use crate::encounter::Encounter;
use crate::error::{EngineResult, TriageError};
use crate::metric::Metric;
use crate::specialist::SpecialistDirectory;

/// Stand-in for a field the encounter has not captured.
const NOT_AVAILABLE: &str = "N/A";

fn latest_reading(encounter: &Encounter, metric: Metric) -> Option<f64> {
    encounter.vitals().series(metric).and_then(|s| s.latest())
}

/// Format the compact hand-off summary for an encounter.
///
/// Layout:
/// `NAME:..|AGE:..|STATUS:..|SPECIALIST:..|VITALS:{hr}bpm,{spo2}%|PHOTO_REF:..`
///
/// An unregistered patient is reported as anonymous and missing vitals as
/// `N/A`; both are valid early-encounter states.
///
/// # Errors
///
/// Returns `TriageError::IncompleteEncounter` if no primary concern has
/// been captured (there is no referral to hand off without one), and
/// `TriageError::UnmappedSymptom` if the directory cannot resolve it.
pub fn handoff_payload(
    encounter: &Encounter,
    result: &TriageResult,
    directory: &SpecialistDirectory,
) -> EngineResult<String> {
    let context = encounter
        .context()
        .ok_or(TriageError::IncompleteEncounter("primary concern"))?;
    let specialist = directory.lookup(context.main_symptom)?;

    let (name, age) = match encounter.patient() {
        Some(patient) => (patient.name.to_string(), patient.age.to_string()),
        None => ("Anonymous".to_owned(), NOT_AVAILABLE.to_owned()),
    };

    let heart_rate = latest_reading(encounter, Metric::HeartRate)
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned());
    let spo2 = latest_reading(encounter, Metric::Spo2)
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned());

    let photo = if encounter.photo().is_some() {
        "AVAILABLE"
    } else {
        "NONE"
    };

    Ok(format!(
        "NAME:{name}|AGE:{age}|STATUS:{status}|SPECIALIST:{specialist}|VITALS:{heart_rate}bpm,{spo2}%|PHOTO_REF:{photo}",
        status = result.overall_status,
    ))
}
