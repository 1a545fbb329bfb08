//! Specialist referral routing.
//!
//! Every enumerated primary concern must resolve to exactly one specialist
//! label. There is deliberately no fallback: an unmapped symptom is a
//! deployment configuration defect and silently defaulting a referral risks
//! clinical harm, so both construction and lookup fail loudly.

use std::collections::BTreeMap;

use crate::error::{EngineResult, TriageError};

/// Primary concern reported during the context stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Symptom {
    WoundSkin,
    ChestPain,
    BreathingIssue,
    FeverInfection,
    NerveNumbness,
}

impl Symptom {
    /// All enumerated primary concerns, in presentation order.
    pub const ALL: [Symptom; 5] = [
        Symptom::WoundSkin,
        Symptom::ChestPain,
        Symptom::BreathingIssue,
        Symptom::FeverInfection,
        Symptom::NerveNumbness,
    ];

    /// Human-readable name shown in forms and hand-off payloads.
    pub fn display_name(self) -> &'static str {
        match self {
            Symptom::WoundSkin => "Wound/Skin",
            Symptom::ChestPain => "Chest Pain",
            Symptom::BreathingIssue => "Breathing Issue",
            Symptom::FeverInfection => "Fever/Infection",
            Symptom::NerveNumbness => "Nerve/Numbness",
        }
    }

    /// Parse from the human-readable name.
    pub fn from_name(s: &str) -> Option<Self> {
        Symptom::ALL
            .into_iter()
            .find(|symptom| symptom.display_name().eq_ignore_ascii_case(s))
    }

    /// Whether this concern needs a wound photo captured before the summary.
    pub fn needs_visual_assessment(self) -> bool {
        matches!(self, Symptom::WoundSkin | Symptom::FeverInfection)
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Static mapping from primary concern to a specialist referral label.
///
/// Deployments may supply their own labels; the table is validated for
/// completeness at construction so a gap is caught at startup, not at the
/// bedside.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialistDirectory {
    entries: BTreeMap<Symptom, String>,
}

impl SpecialistDirectory {
    /// Create a directory, requiring an entry for every enumerated symptom.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::UnmappedSymptom` naming the first symptom
    /// without an entry.
    pub fn new(entries: BTreeMap<Symptom, String>) -> EngineResult<Self> {
        for symptom in Symptom::ALL {
            if !entries.contains_key(&symptom) {
                return Err(TriageError::UnmappedSymptom(symptom));
            }
        }
        Ok(Self { entries })
    }

    /// Resolve the referral label for a symptom.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::UnmappedSymptom` if the symptom has no entry.
    /// A validated directory never hits this, but the lookup contract stays
    /// loud rather than defaulting.
    pub fn lookup(&self, symptom: Symptom) -> EngineResult<&str> {
        self.entries
            .get(&symptom)
            .map(String::as_str)
            .ok_or(TriageError::UnmappedSymptom(symptom))
    }
}

impl Default for SpecialistDirectory {
    fn default() -> Self {
        let entries = [
            (Symptom::WoundSkin, "Dermatologist or General Surgeon"),
            (Symptom::ChestPain, "Cardiologist"),
            (Symptom::BreathingIssue, "Pulmonologist"),
            (Symptom::FeverInfection, "General Physician"),
            (Symptom::NerveNumbness, "Neurologist"),
        ]
        .into_iter()
        .map(|(symptom, label)| (symptom, label.to_owned()))
        .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directory_resolves_every_symptom() {
        let directory = SpecialistDirectory::default();
        for symptom in Symptom::ALL {
            let label = directory.lookup(symptom).expect("entry exists");
            assert!(!label.is_empty());
        }
        assert_eq!(
            directory.lookup(Symptom::ChestPain).expect("entry exists"),
            "Cardiologist"
        );
    }

    #[test]
    fn incomplete_directory_is_rejected_at_construction() {
        let mut entries: BTreeMap<Symptom, String> = BTreeMap::new();
        entries.insert(Symptom::WoundSkin, "Dermatologist".to_owned());

        let err = SpecialistDirectory::new(entries).expect_err("should reject gap");
        assert!(matches!(err, TriageError::UnmappedSymptom(_)));
    }

    #[test]
    fn complete_custom_directory_is_accepted() {
        let entries: BTreeMap<Symptom, String> = Symptom::ALL
            .into_iter()
            .map(|symptom| (symptom, format!("{} clinic", symptom)))
            .collect();
        let directory = SpecialistDirectory::new(entries).expect("complete directory");
        assert_eq!(
            directory.lookup(Symptom::NerveNumbness).expect("entry"),
            "Nerve/Numbness clinic"
        );
    }

    #[test]
    fn symptom_names_round_trip() {
        for symptom in Symptom::ALL {
            assert_eq!(Symptom::from_name(symptom.display_name()), Some(symptom));
        }
        assert_eq!(Symptom::from_name("Headache"), None);
    }

    #[test]
    fn only_wound_and_fever_need_visual_assessment() {
        assert!(Symptom::WoundSkin.needs_visual_assessment());
        assert!(Symptom::FeverInfection.needs_visual_assessment());
        assert!(!Symptom::ChestPain.needs_visual_assessment());
        assert!(!Symptom::BreathingIssue.needs_visual_assessment());
        assert!(!Symptom::NerveNumbness.needs_visual_assessment());
    }
}
