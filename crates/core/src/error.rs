//! Error taxonomy for the triage engine.
//!
//! Missing metric data and short series are *not* errors: the classifier
//! skips empty series and the trend analyzer returns a neutral slope for a
//! single reading. Everything here is a configuration or caller defect that
//! must surface loudly, because a silently defaulted referral or threshold
//! is a patient-safety issue.

use crate::metric::Metric;
use crate::specialist::Symptom;
use crate::workflow::Stage;

#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    /// A safety-limit table was built with an inconsistent range.
    #[error("invalid safety limits for {metric}: {reason}")]
    InvalidLimits { metric: Metric, reason: String },
    /// A symptom has no entry in the specialist directory.
    #[error("no specialist mapped for symptom '{0}'; refusing to default a referral")]
    UnmappedSymptom(Symptom),
    /// A workflow input was supplied out of stage order.
    #[error("{input} input is not accepted while the encounter is in the {stage} stage")]
    StageMismatch { stage: Stage, input: &'static str },
    /// A hand-off summary was requested before the encounter captured the
    /// data it needs.
    #[error("encounter has no {0} yet; complete the workflow before handing off")]
    IncompleteEncounter(&'static str),
}

pub type EngineResult<T> = std::result::Result<T, TriageError>;
