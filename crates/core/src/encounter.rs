//! Per-session encounter state.
//!
//! An `Encounter` is owned exclusively by one active session: created at
//! registration, carried through each workflow stage, and discarded when the
//! workflow finishes. No two encounters share state, so independent sessions
//! need no coordination.

use chrono::{DateTime, Utc};
use triage_types::{Age, PatientName};
use uuid::Uuid;

use crate::classify::{classify, TriageResult};
use crate::metric::SafetyLimits;
use crate::specialist::Symptom;
use crate::vitals::VitalsHistory;
use crate::workflow::Stage;

/// Tri-state answer used by the safety screen and the worsening self-report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriState {
    No,
    Yes,
    NotSure,
}

impl std::fmt::Display for TriState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TriState::No => "No",
            TriState::Yes => "Yes",
            TriState::NotSure => "Not Sure",
        };
        f.write_str(label)
    }
}

/// Demographics captured at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientInfo {
    pub name: PatientName,
    pub age: Age,
}

/// Immediate-safety answers. Recorded for clinician display only; they do
/// not alter the downstream classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyScreen {
    pub airway_difficulty: TriState,
    pub bleeding: TriState,
}

/// Context captured after vitals: the primary concern and whether the
/// patient reports rapid worsening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncounterContext {
    pub main_symptom: Symptom,
    pub worsening_reported: TriState,
}

/// Opaque reference to a captured wound image. The engine never touches
/// image bytes; capture and display belong to the presentation collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRef(String);

impl PhotoRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One patient's end-to-end session of data collection and triage.
#[derive(Debug, Clone, PartialEq)]
pub struct Encounter {
    id: Uuid,
    started_at: DateTime<Utc>,
    pub(crate) stage: Stage,
    pub(crate) patient: Option<PatientInfo>,
    pub(crate) safety_screen: Option<SafetyScreen>,
    pub(crate) vitals: VitalsHistory,
    pub(crate) context: Option<EncounterContext>,
    pub(crate) photo: Option<PhotoRef>,
}

impl Encounter {
    /// A fresh encounter at the registration stage.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            stage: Stage::Registration,
            patient: None,
            safety_screen: None,
            vitals: VitalsHistory::new(),
            context: None,
            photo: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn patient(&self) -> Option<&PatientInfo> {
        self.patient.as_ref()
    }

    pub fn safety_screen(&self) -> Option<&SafetyScreen> {
        self.safety_screen.as_ref()
    }

    pub fn vitals(&self) -> &VitalsHistory {
        &self.vitals
    }

    pub fn context(&self) -> Option<&EncounterContext> {
        self.context.as_ref()
    }

    pub fn photo(&self) -> Option<&PhotoRef> {
        self.photo.as_ref()
    }

    /// Classify the vitals accumulated so far.
    ///
    /// Invoked at the summary stage and again at any later review; always a
    /// fresh computation over the current history.
    pub fn triage(&self, limits: &SafetyLimits) -> TriageResult {
        classify(&self.vitals, limits)
    }
}

impl Default for Encounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_encounter_starts_at_registration_with_no_data() {
        let encounter = Encounter::new();
        assert_eq!(encounter.stage(), Stage::Registration);
        assert!(encounter.patient().is_none());
        assert!(encounter.safety_screen().is_none());
        assert!(encounter.context().is_none());
        assert!(encounter.photo().is_none());
    }

    #[test]
    fn encounters_are_isolated_from_each_other() {
        let a = Encounter::new();
        let b = Encounter::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn tri_state_labels_match_the_form_options() {
        assert_eq!(TriState::No.to_string(), "No");
        assert_eq!(TriState::Yes.to_string(), "Yes");
        assert_eq!(TriState::NotSure.to_string(), "Not Sure");
    }
}
