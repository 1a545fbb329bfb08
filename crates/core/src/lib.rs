//! # Triage Core
//!
//! Core decision logic for the rural triage engine.
//!
//! This crate contains pure, synchronous clinical computations:
//! - Deterioration-trend analysis over repeated vital-sign readings
//! - Red-flag / worsening classification with per-metric safety limits
//! - The sequential triage workflow state machine
//! - Specialist referral lookup and the compact hand-off payload
//!
//! **No presentation concerns**: page rendering, form widgets, image
//! handling, chart drawing and QR image generation belong to the calling
//! collaborator. The engine consumes and produces in-memory values only.

pub mod classify;
pub mod encounter;
pub mod error;
pub mod handoff;
pub mod metric;
pub mod specialist;
pub mod trend;
pub mod vitals;
pub mod workflow;

pub use classify::{classify, MetricAssessment, TriageResult, TriageStatus};
pub use encounter::{Encounter, EncounterContext, PatientInfo, PhotoRef, SafetyScreen, TriState};
pub use error::{EngineResult, TriageError};
pub use metric::{Metric, MetricSpec, RedFlagRule, SafetyLimits, WorseningRule};
pub use specialist::{SpecialistDirectory, Symptom};
pub use vitals::{VitalSeries, VitalsHistory};
pub use workflow::{Stage, StageInput, VitalsReading};
