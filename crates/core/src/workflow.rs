//! The sequential triage workflow state machine.
//!
//! Stages run in a fixed collection order, each advanced by an explicit
//! user-confirmed input — there is no automatic advancement. The only
//! conditional branch is the wound-photo stage, taken solely when the
//! primary concern needs visual assessment. Transitions consume the current
//! encounter and return the next one, so there is no ambient mutable
//! session state to fall out of sync.

use triage_types::{Age, PatientName};

use crate::encounter::{Encounter, EncounterContext, PatientInfo, PhotoRef, SafetyScreen};
use crate::error::{EngineResult, TriageError};
use crate::metric::Metric;

/// Workflow stages in collection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Registration,
    SafetyScreen,
    VitalsCapture,
    ContextAndBranch,
    WoundPhoto,
    Summary,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Registration => "registration",
            Stage::SafetyScreen => "safety screen",
            Stage::VitalsCapture => "vitals capture",
            Stage::ContextAndBranch => "context",
            Stage::WoundPhoto => "wound photo",
            Stage::Summary => "summary",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reading per monitored metric, captured in a single vitals visit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalsReading {
    pub heart_rate: f64,
    pub spo2: f64,
    pub pain_score: f64,
}

/// User input driving one workflow transition.
#[derive(Debug, Clone, PartialEq)]
pub enum StageInput {
    /// Registration details.
    Register { name: PatientName, age: Age },
    /// Safety-screen answers.
    SafetyAnswers(SafetyScreen),
    /// One set of vitals readings.
    Vitals(VitalsReading),
    /// Primary concern and worsening self-report.
    Context(EncounterContext),
    /// Optional wound image reference.
    Photo(Option<PhotoRef>),
    /// Close the encounter from the summary.
    Finish,
}

impl StageInput {
    fn describe(&self) -> &'static str {
        match self {
            StageInput::Register { .. } => "registration",
            StageInput::SafetyAnswers(_) => "safety-screen",
            StageInput::Vitals(_) => "vitals",
            StageInput::Context(_) => "context",
            StageInput::Photo(_) => "photo",
            StageInput::Finish => "finish",
        }
    }
}

impl Encounter {
    /// Advance the workflow by one stage.
    ///
    /// Consumes the current encounter and returns the next one. The safety
    /// screen and vitals capture are never skipped; the wound-photo branch
    /// is taken only when the reported concern needs visual assessment.
    /// `Finish` at the summary discards all accumulated state and returns a
    /// fresh encounter at registration.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::StageMismatch` when the input does not belong
    /// to the current stage. Feeding inputs out of order is a caller defect
    /// and is never silently reordered.
    pub fn advance(mut self, input: StageInput) -> EngineResult<Encounter> {
        match (self.stage, input) {
            (Stage::Registration, StageInput::Register { name, age }) => {
                self.patient = Some(PatientInfo { name, age });
                self.stage = Stage::SafetyScreen;
                Ok(self)
            }
            (Stage::SafetyScreen, StageInput::SafetyAnswers(answers)) => {
                self.safety_screen = Some(answers);
                self.stage = Stage::VitalsCapture;
                Ok(self)
            }
            (Stage::VitalsCapture, StageInput::Vitals(reading)) => {
                // Appends, never replaces: repeated visits grow the trend
                // history.
                self.vitals.record(Metric::HeartRate, reading.heart_rate);
                self.vitals.record(Metric::Spo2, reading.spo2);
                self.vitals.record(Metric::PainScore, reading.pain_score);
                self.stage = Stage::ContextAndBranch;
                Ok(self)
            }
            (Stage::ContextAndBranch, StageInput::Context(context)) => {
                self.stage = if context.main_symptom.needs_visual_assessment() {
                    Stage::WoundPhoto
                } else {
                    Stage::Summary
                };
                self.context = Some(context);
                Ok(self)
            }
            (Stage::WoundPhoto, StageInput::Photo(photo)) => {
                if let Some(photo) = photo {
                    self.photo = Some(photo);
                }
                self.stage = Stage::Summary;
                Ok(self)
            }
            (Stage::Summary, StageInput::Finish) => {
                tracing::info!(encounter = %self.id(), "encounter finished; resetting");
                Ok(Encounter::new())
            }
            (stage, input) => Err(TriageError::StageMismatch {
                stage,
                input: input.describe(),
            }),
        }
    }

    /// Re-enter vitals capture from the summary for a later checkup.
    ///
    /// All accumulated state is retained, so the next vitals visit appends
    /// to the existing series and lengthens the trend history.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::StageMismatch` unless the encounter is at the
    /// summary stage.
    pub fn begin_checkup(mut self) -> EngineResult<Encounter> {
        if self.stage != Stage::Summary {
            return Err(TriageError::StageMismatch {
                stage: self.stage,
                input: "checkup",
            });
        }
        self.stage = Stage::VitalsCapture;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encounter::TriState;
    use crate::specialist::Symptom;

    fn registered() -> Encounter {
        Encounter::new()
            .advance(StageInput::Register {
                name: PatientName::new("Asha Patel").expect("valid name"),
                age: Age::new(45).expect("valid age"),
            })
            .expect("registration accepted")
    }

    fn screened() -> Encounter {
        registered()
            .advance(StageInput::SafetyAnswers(SafetyScreen {
                airway_difficulty: TriState::No,
                bleeding: TriState::NotSure,
            }))
            .expect("safety answers accepted")
    }

    fn with_vitals() -> Encounter {
        screened()
            .advance(StageInput::Vitals(VitalsReading {
                heart_rate: 75.0,
                spo2: 98.0,
                pain_score: 2.0,
            }))
            .expect("vitals accepted")
    }

    fn context(symptom: Symptom) -> StageInput {
        StageInput::Context(EncounterContext {
            main_symptom: symptom,
            worsening_reported: TriState::No,
        })
    }

    #[test]
    fn stages_run_in_collection_order() {
        let encounter = Encounter::new();
        assert_eq!(encounter.stage(), Stage::Registration);

        let encounter = registered();
        assert_eq!(encounter.stage(), Stage::SafetyScreen);

        let encounter = screened();
        assert_eq!(encounter.stage(), Stage::VitalsCapture);
        assert_eq!(
            encounter.safety_screen().expect("recorded").bleeding,
            TriState::NotSure
        );

        let encounter = with_vitals();
        assert_eq!(encounter.stage(), Stage::ContextAndBranch);
    }

    #[test]
    fn wound_symptom_branches_to_photo_capture() {
        let encounter = with_vitals()
            .advance(context(Symptom::WoundSkin))
            .expect("context accepted");
        assert_eq!(encounter.stage(), Stage::WoundPhoto);

        let encounter = with_vitals()
            .advance(context(Symptom::FeverInfection))
            .expect("context accepted");
        assert_eq!(encounter.stage(), Stage::WoundPhoto);
    }

    #[test]
    fn other_symptoms_skip_photo_capture() {
        for symptom in [
            Symptom::ChestPain,
            Symptom::BreathingIssue,
            Symptom::NerveNumbness,
        ] {
            let encounter = with_vitals()
                .advance(context(symptom))
                .expect("context accepted");
            assert_eq!(encounter.stage(), Stage::Summary);
        }
    }

    #[test]
    fn photo_stage_completes_with_or_without_an_image() {
        let at_photo = with_vitals()
            .advance(context(Symptom::WoundSkin))
            .expect("context accepted");

        let without = at_photo
            .clone()
            .advance(StageInput::Photo(None))
            .expect("photo stage accepted");
        assert_eq!(without.stage(), Stage::Summary);
        assert!(without.photo().is_none());

        let with = at_photo
            .advance(StageInput::Photo(Some(PhotoRef::new("wound-001.jpg"))))
            .expect("photo stage accepted");
        assert_eq!(with.stage(), Stage::Summary);
        assert_eq!(with.photo().expect("attached").as_str(), "wound-001.jpg");
    }

    #[test]
    fn checkup_appends_to_the_existing_series() {
        let encounter = with_vitals()
            .advance(context(Symptom::ChestPain))
            .expect("context accepted");
        assert_eq!(encounter.stage(), Stage::Summary);

        let encounter = encounter
            .begin_checkup()
            .expect("checkup allowed from summary")
            .advance(StageInput::Vitals(VitalsReading {
                heart_rate: 95.0,
                spo2: 94.0,
                pain_score: 5.0,
            }))
            .expect("vitals accepted");

        let series = encounter
            .vitals()
            .series(Metric::HeartRate)
            .expect("series exists");
        assert_eq!(series.readings(), &[75.0, 95.0]);
    }

    #[test]
    fn finish_discards_all_accumulated_state() {
        let encounter = with_vitals()
            .advance(context(Symptom::ChestPain))
            .expect("context accepted");
        let old_id = encounter.id();

        let fresh = encounter
            .advance(StageInput::Finish)
            .expect("finish accepted");
        assert_eq!(fresh.stage(), Stage::Registration);
        assert_ne!(fresh.id(), old_id);
        assert!(fresh.patient().is_none());
        let series = fresh
            .vitals()
            .series(Metric::HeartRate)
            .expect("series exists");
        assert!(series.is_empty());
    }

    #[test]
    fn out_of_order_input_is_rejected() {
        let err = Encounter::new()
            .advance(StageInput::Finish)
            .expect_err("finish is not valid at registration");
        assert!(matches!(
            err,
            TriageError::StageMismatch {
                stage: Stage::Registration,
                input: "finish",
            }
        ));

        let err = screened()
            .advance(context(Symptom::ChestPain))
            .expect_err("context is not valid before vitals");
        assert!(matches!(err, TriageError::StageMismatch { .. }));
    }

    #[test]
    fn checkup_is_only_allowed_from_the_summary() {
        let err = with_vitals()
            .begin_checkup()
            .expect_err("checkup requires the summary stage");
        assert!(matches!(err, TriageError::StageMismatch { .. }));
    }
}
