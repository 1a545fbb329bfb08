//! Red-flag / worsening classification over an encounter's vitals history.
//!
//! Responsibilities:
//! - Derive a per-metric assessment (delta from baseline, trend slope,
//!   worsening and red-flag verdicts) from each non-empty series
//! - Accumulate human-readable reasons in the fixed metric reporting order
//! - Aggregate into an overall status
//!
//! The aggregation deliberately errs toward caution: a single worsening
//! trend escalates to `RedFlag` even without a hard limit breach, so a
//! "crashing" patient is caught before thresholds are hit.

use crate::metric::Metric;
use crate::metric::SafetyLimits;
use crate::trend;
use crate::vitals::VitalsHistory;

/// Overall escalation level for an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriageStatus {
    /// Immediate attention required.
    RedFlag,
    /// Continue monitoring.
    Monitor,
}

impl TriageStatus {
    /// Machine-readable form used in hand-off payloads.
    pub fn as_wire(self) -> &'static str {
        match self {
            TriageStatus::RedFlag => "RED_FLAG",
            TriageStatus::Monitor => "MONITOR",
        }
    }
}

impl std::fmt::Display for TriageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl serde::Serialize for TriageStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_wire())
    }
}

/// Derived assessment of one metric's series.
///
/// Recomputed on demand; a pure function of the series and the static
/// safety limits, never stored.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MetricAssessment {
    pub metric: Metric,
    /// Most recent reading.
    pub latest: f64,
    /// First-ever reading of the encounter.
    pub baseline: f64,
    /// `latest - baseline`.
    pub delta: f64,
    /// Least-squares trend per observation.
    pub slope: f64,
    pub is_worsening: bool,
    pub is_red_flag: bool,
}

impl MetricAssessment {
    /// Trend label for summary tables.
    pub fn trend_label(&self) -> &'static str {
        if self.is_worsening {
            "Worsening"
        } else {
            "Stable"
        }
    }

    /// Critical-alert label for summary tables.
    pub fn critical_label(&self) -> &'static str {
        if self.is_red_flag {
            "YES"
        } else {
            "No"
        }
    }

    /// Slope rounded to two decimal places for display.
    pub fn rounded_slope(&self) -> f64 {
        (self.slope * 100.0).round() / 100.0
    }
}

/// Aggregate classification of an encounter, rebuilt fresh per request.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TriageResult {
    /// One row per metric with at least one reading, in reporting order.
    pub assessments: Vec<MetricAssessment>,
    pub overall_status: TriageStatus,
    pub worsening_count: usize,
    pub red_flag_count: usize,
    /// Human-readable justification, grouped per metric in reporting order,
    /// worsening before red-flag within a metric.
    pub reasons: Vec<String>,
}

/// Classify an encounter's accumulated vitals history.
///
/// Metrics with no readings are skipped silently and contribute nothing to
/// either count; this is the expected state early in an encounter, not an
/// error. Out-of-range readings never fail the computation, they are only
/// flagged. Pure and synchronous: identical input always yields an
/// identical result.
pub fn classify(history: &VitalsHistory, limits: &SafetyLimits) -> TriageResult {
    let mut assessments = Vec::new();
    let mut worsening_count = 0;
    let mut red_flag_count = 0;
    let mut reasons = Vec::new();

    for metric in Metric::ALL {
        let series = match history.series(metric) {
            Some(series) if !series.is_empty() => series,
            _ => {
                tracing::debug!(metric = %metric, "no readings recorded; skipping");
                continue;
            }
        };

        // Non-empty series always has a first and last reading.
        let latest = series.latest().unwrap_or_default();
        let baseline = series.baseline().unwrap_or_default();
        let delta = latest - baseline;
        let slope = trend::slope(series.readings());

        let spec = limits.spec(metric);
        let is_worsening = spec.worsening.is_worsening(delta);
        let is_red_flag = spec.red_flag.is_breached(latest);

        if is_worsening {
            worsening_count += 1;
            reasons.push(format!("{} is worsening over time.", metric.display_name()));
        }
        if is_red_flag {
            red_flag_count += 1;
            reasons.push(format!(
                "CRITICAL: {} crossed safety limits.",
                metric.display_name()
            ));
        }

        assessments.push(MetricAssessment {
            metric,
            latest,
            baseline,
            delta,
            slope,
            is_worsening,
            is_red_flag,
        });
    }

    let overall_status = if red_flag_count >= 1 || worsening_count >= 1 {
        TriageStatus::RedFlag
    } else {
        TriageStatus::Monitor
    };

    tracing::debug!(
        status = %overall_status,
        worsening_count,
        red_flag_count,
        "classified vitals history"
    );

    TriageResult {
        assessments,
        overall_status,
        worsening_count,
        red_flag_count,
        reasons,
    }
}
