use crate::metrics::SegmentMetrics;
use crate::symptoms::Condition;

/// Score at or above which a detection counts as significant
pub const SIGNIFICANT_SCORE: f64 = 40.0;

/// One fired heuristic rule: the condition it argues for, its raw score,
/// and the human-readable signals that back it up.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleHit {
    pub condition: Condition,
    pub score: f64,
    pub signals: Vec<String>,
}

/// A scoring rule: pure function from a metrics snapshot to an optional
/// (score, signals) pair. Rules never see each other's output.
struct Rule {
    condition: Condition,
    eval: fn(&SegmentMetrics) -> Option<(f64, Vec<String>)>,
}

/// The fixed rule set. Evaluation order is part of the contract: signal
/// strings are emitted in this order, and equal scores keep this order
/// after the stable ranking sort.
static RULES: &[Rule] = &[
    Rule { condition: Condition::Sunburn, eval: sunburn },
    Rule { condition: Condition::Mold, eval: mold },
    Rule { condition: Condition::Spots, eval: spots },
    Rule { condition: Condition::Dry, eval: dry },
    Rule { condition: Condition::Chlorosis, eval: chlorosis },
    Rule { condition: Condition::Wilting, eval: wilting },
    Rule { condition: Condition::RootRot, eval: root_rot },
    Rule { condition: Condition::Holes, eval: holes },
    Rule { condition: Condition::Curling, eval: curling },
    Rule { condition: Condition::Frail, eval: frail },
    Rule { condition: Condition::Damaged, eval: damaged },
    Rule { condition: Condition::Healthy, eval: healthy },
];

/// Evaluate every rule against one immutable metrics snapshot.
///
/// Rules are independent and non-exclusive; any number may fire. The
/// returned hits are in rule-evaluation order.
pub fn score_metrics(metrics: &SegmentMetrics) -> Vec<RuleHit> {
    RULES
        .iter()
        .filter_map(|rule| {
            (rule.eval)(metrics).map(|(score, signals)| RuleHit {
                condition: rule.condition,
                score,
                signals,
            })
        })
        .collect()
}

fn sunburn(m: &SegmentMetrics) -> Option<(f64, Vec<String>)> {
    if m.bleached > 0.05 && m.avg_brightness > 0.55 {
        Some((
            40.0 + m.bleached * 200.0 + m.high_bright * 50.0,
            vec![
                format!("Bleached patches: {:.1}%", m.bleached * 100.0),
                "High brightness areas detected".to_string(),
            ],
        ))
    } else {
        None
    }
}

fn mold(m: &SegmentMetrics) -> Option<(f64, Vec<String>)> {
    if m.white > 0.015 && m.low_sat > 0.10 {
        Some((
            45.0 + m.white * 300.0 + m.low_sat * 40.0,
            vec![
                format!("Trace white powdery coverage detected: {:.2}%", m.white * 100.0),
                "Subtle low-saturation surface areas".to_string(),
            ],
        ))
    } else {
        None
    }
}

fn spots(m: &SegmentMetrics) -> Option<(f64, Vec<String>)> {
    if m.brown > 0.005 && m.texture_breaks > 0.01 {
        Some((
            45.0 + m.brown * 600.0 + m.texture_breaks * 80.0,
            vec![
                format!("Minor spot coverage detected: {:.2}%", m.brown * 100.0),
                "Early texture breaks (micro-lesions)".to_string(),
            ],
        ))
    } else {
        None
    }
}

fn dry(m: &SegmentMetrics) -> Option<(f64, Vec<String>)> {
    if m.crispy > 0.03 || (m.brown > 0.01 && m.avg_brightness > 0.50) {
        Some((
            35.0 + m.crispy * 250.0,
            vec![format!("Crispy edges: {:.1}%", m.crispy * 100.0)],
        ))
    } else {
        None
    }
}

fn chlorosis(m: &SegmentMetrics) -> Option<(f64, Vec<String>)> {
    if m.yellow > 0.06 {
        let mut score = 40.0 + m.yellow * 250.0;
        let mut signals = Vec::new();
        // High green-channel variance reads as vein contrast
        if m.green_variance > 450.0 {
            score += 15.0;
            signals.push("Subtle vein contrast pattern".to_string());
        }
        signals.push(format!("Yellowing: {:.1}%", m.yellow * 100.0));
        Some((score, signals))
    } else {
        None
    }
}

fn wilting(m: &SegmentMetrics) -> Option<(f64, Vec<String>)> {
    if m.black > 0.04 && m.green > 0.25 {
        Some((
            40.0 + m.black * 200.0,
            vec!["Early structural collapse indicators".to_string()],
        ))
    } else {
        None
    }
}

fn root_rot(m: &SegmentMetrics) -> Option<(f64, Vec<String>)> {
    if m.yellow > 0.06 && m.black > 0.02 {
        Some((
            35.0 + m.yellow * 120.0 + m.black * 120.0,
            vec!["Compound yellowing and wilting markers".to_string()],
        ))
    } else {
        None
    }
}

fn holes(m: &SegmentMetrics) -> Option<(f64, Vec<String>)> {
    if m.black > 0.01 || m.texture_breaks > 0.03 {
        Some((
            35.0 + m.black * 200.0 + m.texture_breaks * 50.0,
            vec![format!(
                "Tiniest punctures or missing tissue: {:.2}%",
                m.black * 100.0
            )],
        ))
    } else {
        None
    }
}

fn curling(m: &SegmentMetrics) -> Option<(f64, Vec<String>)> {
    if m.texture_breaks > 0.04 && m.green > 0.35 {
        Some((
            30.0 + m.texture_breaks * 250.0,
            vec!["Shape deformation detected".to_string()],
        ))
    } else {
        None
    }
}

fn frail(m: &SegmentMetrics) -> Option<(f64, Vec<String>)> {
    if m.low_sat > 0.20 && m.avg_brightness > 0.60 && m.green < 0.50 {
        Some((
            40.0 + m.low_sat * 150.0 + m.high_bright * 50.0,
            vec!["Low saturation and thinning indicators".to_string()],
        ))
    } else {
        None
    }
}

fn damaged(m: &SegmentMetrics) -> Option<(f64, Vec<String>)> {
    if m.texture_breaks > 0.08 && m.brown < 0.02 && m.black < 0.02 {
        Some((
            35.0 + m.texture_breaks * 150.0,
            vec!["Mechanical stress/tear indicators".to_string()],
        ))
    } else {
        None
    }
}

fn healthy(m: &SegmentMetrics) -> Option<(f64, Vec<String>)> {
    if m.green > 0.65 && m.avg_saturation > 0.35 {
        let mut score = 50.0 + m.green * 60.0;
        let mut signals = Vec::new();
        // The purity bonus requires near-zero disease color presence
        if m.yellow < 0.02 && m.brown < 0.005 && m.white < 0.01 {
            score += 35.0;
            signals.push(format!("Vibrant green coverage: {:.1}%", m.green * 100.0));
            signals.push("No anomalies detected even at high sensitivity".to_string());
        }
        Some((score, signals))
    } else {
        None
    }
}
