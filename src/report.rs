use serde::Serialize;

use crate::metrics::SegmentMetrics;
use crate::scoring::{RuleHit, SIGNIFICANT_SCORE};
use crate::symptoms::{Condition, Severity};

/// Engine tag carried in every successful report
pub const ENGINE_TAG: &str = "LeafDoctor DeepScan v2.1 (Multi-Scan Enabled)";

/// Confidence never reported above this ceiling
const CONFIDENCE_CAP: f64 = 99.0;

/// Flat confidence bonus applied when the center-region metrics won
const CENTER_CONFIDENCE_BONUS: f64 = 5.0;

/// How many detected-signal strings a report carries
const MAX_SIGNALS: usize = 5;

/// How many clues a diagnosis entry carries
const MAX_CLUES: usize = 3;

/// One ranked detection, enriched from the symptom knowledge base.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisEntry {
    pub id: Condition,
    pub name: &'static str,
    pub emoji: &'static str,
    pub severity: Severity,
    pub confidence: String,
    pub clues: Vec<&'static str>,
    pub advice: &'static str,
    pub treatment: &'static str,
}

/// Headline metrics rendered as percentage strings.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetrics {
    pub green: String,
    pub yellow: String,
    pub brown: String,
    pub white: String,
    pub avg_brightness: String,
    pub avg_saturation: String,
}

impl ReportMetrics {
    fn from_metrics(m: &SegmentMetrics) -> Self {
        Self {
            green: format!("{:.1}%", m.green * 100.0),
            yellow: format!("{:.1}%", m.yellow * 100.0),
            brown: format!("{:.1}%", m.brown * 100.0),
            white: format!("{:.1}%", m.white * 100.0),
            avg_brightness: format!("{:.0}%", m.avg_brightness * 100.0),
            avg_saturation: format!("{:.0}%", m.avg_saturation * 100.0),
        }
    }
}

/// The final diagnosis report. The primary detection is flattened to the
/// top level; the inconclusive variant leaves the enrichment fields unset.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisReport {
    pub status: &'static str,
    pub diagnosis: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    pub confidence: String,
    pub signals: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clues: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_detections: Option<Vec<DiagnosisEntry>>,
    pub metrics: ReportMetrics,
    pub engine: &'static str,
}

/// Rank rule hits into the final report.
///
/// Hits must arrive in rule-evaluation order; the stable descending sort
/// keeps that order for equal scores. Conditions scoring at least
/// [`SIGNIFICANT_SCORE`] survive; a healthy reading is overridden by any
/// co-significant symptom; an empty significant set falls back to the
/// single top scorer.
pub fn build_report(
    hits: &[RuleHit],
    metrics: &SegmentMetrics,
    used_center: bool,
) -> DiagnosisReport {
    let report_metrics = ReportMetrics::from_metrics(metrics);

    if hits.is_empty() {
        return DiagnosisReport {
            status: "success",
            diagnosis: "Needs Closer Examination",
            emoji: None,
            severity: None,
            confidence: "Low".to_string(),
            signals: vec!["Insufficient visual data for confident diagnosis".to_string()],
            clues: None,
            advice: None,
            treatment: None,
            all_detections: None,
            metrics: report_metrics,
            engine: ENGINE_TAG,
        };
    }

    // Signals are reported in rule-evaluation order, not score order
    let signals: Vec<String> = hits
        .iter()
        .flat_map(|hit| hit.signals.iter().cloned())
        .take(MAX_SIGNALS)
        .collect();

    let mut ranked: Vec<&RuleHit> = hits.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut significant: Vec<&RuleHit> = ranked
        .iter()
        .copied()
        .filter(|hit| hit.score >= SIGNIFICANT_SCORE)
        .collect();

    // A real symptom always overrides a healthy reading
    if significant
        .iter()
        .any(|hit| hit.condition != Condition::Healthy)
    {
        significant.retain(|hit| hit.condition != Condition::Healthy);
    }

    if significant.is_empty() {
        significant.push(ranked[0]);
    }

    let entries: Vec<DiagnosisEntry> = significant
        .iter()
        .map(|hit| {
            let symptom = hit.condition.symptom();
            let mut confidence = hit.score.min(CONFIDENCE_CAP);
            if used_center {
                confidence = (confidence + CENTER_CONFIDENCE_BONUS).min(CONFIDENCE_CAP);
            }
            DiagnosisEntry {
                id: hit.condition,
                name: symptom.name,
                emoji: symptom.emoji,
                severity: symptom.severity,
                confidence: format!("{:.0}%", confidence),
                clues: symptom.clues.iter().take(MAX_CLUES).copied().collect(),
                advice: symptom.advice,
                treatment: symptom.treatment,
            }
        })
        .collect();

    let primary = &entries[0];

    DiagnosisReport {
        status: "success",
        diagnosis: primary.name,
        emoji: Some(primary.emoji),
        severity: Some(primary.severity),
        confidence: primary.confidence.clone(),
        signals,
        clues: Some(primary.clues.clone()),
        advice: Some(primary.advice),
        treatment: Some(primary.treatment),
        all_detections: Some(entries),
        metrics: report_metrics,
        engine: ENGINE_TAG,
    }
}
