//! Monitored vital-sign metrics and their safety limits.
//!
//! Responsibilities:
//! - Enumerate the metrics the engine monitors, in their fixed clinical
//!   reporting order
//! - Carry each metric's worsening predicate and hard red-flag rule as data,
//!   so adding a metric is a table change rather than scattered conditionals
//! - Validate limit tables at construction; an inconsistent range is a
//!   configuration defect, never a runtime surprise
//!
//! Boundary semantics are deliberately per-metric and must not be unified:
//! heart rate is flagged strictly outside its range, oxygen saturation at or
//! below its floor, pain at or above its ceiling.

use crate::error::{EngineResult, TriageError};

/// A monitored vital-sign metric.
///
/// Declaration order is the fixed clinical reporting order; classification
/// results and reason lists always follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    HeartRate,
    Spo2,
    PainScore,
}

impl Metric {
    /// All monitored metrics, in reporting order.
    pub const ALL: [Metric; 3] = [Metric::HeartRate, Metric::Spo2, Metric::PainScore];

    /// Machine-readable identifier used in data maps and JSON input.
    pub fn wire_name(self) -> &'static str {
        match self {
            Metric::HeartRate => "heart_rate",
            Metric::Spo2 => "spo2",
            Metric::PainScore => "pain_score",
        }
    }

    /// Human-readable name used in reasons and summary tables.
    pub fn display_name(self) -> &'static str {
        match self {
            Metric::HeartRate => "Heart Rate",
            Metric::Spo2 => "Spo2",
            Metric::PainScore => "Pain Score",
        }
    }

    /// Parse from the machine-readable identifier.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "heart_rate" => Some(Metric::HeartRate),
            "spo2" => Some(Metric::Spo2),
            "pain_score" => Some(Metric::PainScore),
            _ => None,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl serde::Serialize for Metric {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.wire_name())
    }
}

/// Directional worsening predicate over a metric's delta from baseline.
///
/// Asymmetric by clinical direction: oxygen worsens as it drops, pain and
/// heart rate worsen as they climb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorseningRule {
    /// Worsening when `delta` is strictly above the threshold.
    DeltaAbove(f64),
    /// Worsening when `delta` is strictly below the threshold.
    DeltaBelow(f64),
}

impl WorseningRule {
    pub fn is_worsening(self, delta: f64) -> bool {
        match self {
            WorseningRule::DeltaAbove(threshold) => delta > threshold,
            WorseningRule::DeltaBelow(threshold) => delta < threshold,
        }
    }
}

/// Hard, trend-independent safety-limit rule for the latest reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RedFlagRule {
    /// Flagged strictly below `low` or strictly above `high`.
    OutsideRange { low: f64, high: f64 },
    /// Flagged at or below the bound (the oxygen-saturation floor: 90 is
    /// already a red flag, 91 is not).
    AtOrBelow(f64),
    /// Flagged at or above the bound (the pain ceiling: 8 is already a red
    /// flag, 7 is not).
    AtOrAbove(f64),
}

impl RedFlagRule {
    pub fn is_breached(self, current: f64) -> bool {
        match self {
            RedFlagRule::OutsideRange { low, high } => current < low || current > high,
            RedFlagRule::AtOrBelow(bound) => current <= bound,
            RedFlagRule::AtOrAbove(bound) => current >= bound,
        }
    }

    fn validate(self) -> Result<(), String> {
        match self {
            RedFlagRule::OutsideRange { low, high } if low > high => Err(format!(
                "red-flag range low {} exceeds high {}",
                low, high
            )),
            _ => Ok(()),
        }
    }
}

/// Static per-metric configuration: expected safe range, worsening predicate
/// and red-flag rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSpec {
    /// Range a healthy reading is expected to fall in; informational, shown
    /// to operators but not used for escalation.
    pub safe_range: (f64, f64),
    pub worsening: WorseningRule,
    pub red_flag: RedFlagRule,
}

impl MetricSpec {
    fn validate(&self) -> Result<(), String> {
        let (low, high) = self.safe_range;
        if low > high {
            return Err(format!("safe range low {} exceeds high {}", low, high));
        }
        self.red_flag.validate()
    }
}

/// Immutable safety-limit table covering every monitored metric.
///
/// Resolved once at startup and passed into the classifier, so deployments
/// can carry adjusted thresholds without touching decision code.
#[derive(Debug, Clone, PartialEq)]
pub struct SafetyLimits {
    heart_rate: MetricSpec,
    spo2: MetricSpec,
    pain_score: MetricSpec,
}

impl SafetyLimits {
    /// Create a validated limit table.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidLimits` naming the offending metric if
    /// any range is inconsistent.
    pub fn new(
        heart_rate: MetricSpec,
        spo2: MetricSpec,
        pain_score: MetricSpec,
    ) -> EngineResult<Self> {
        let limits = Self {
            heart_rate,
            spo2,
            pain_score,
        };
        for metric in Metric::ALL {
            limits
                .spec(metric)
                .validate()
                .map_err(|reason| TriageError::InvalidLimits { metric, reason })?;
        }
        Ok(limits)
    }

    /// Look up the configuration for a metric. Total: every monitored
    /// metric has exactly one entry.
    pub fn spec(&self, metric: Metric) -> &MetricSpec {
        match metric {
            Metric::HeartRate => &self.heart_rate,
            Metric::Spo2 => &self.spo2,
            Metric::PainScore => &self.pain_score,
        }
    }
}

impl Default for SafetyLimits {
    /// MIMIC-IV-derived defaults for adult patients.
    fn default() -> Self {
        Self {
            heart_rate: MetricSpec {
                safe_range: (60.0, 100.0),
                worsening: WorseningRule::DeltaAbove(5.0),
                red_flag: RedFlagRule::OutsideRange {
                    low: 40.0,
                    high: 130.0,
                },
            },
            spo2: MetricSpec {
                safe_range: (95.0, 100.0),
                worsening: WorseningRule::DeltaBelow(-2.0),
                red_flag: RedFlagRule::AtOrBelow(90.0),
            },
            pain_score: MetricSpec {
                safe_range: (0.0, 3.0),
                worsening: WorseningRule::DeltaAbove(2.0),
                red_flag: RedFlagRule::AtOrAbove(8.0),
            },
        }
    }
}
