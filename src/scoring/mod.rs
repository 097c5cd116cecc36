//! Quality scoring — static fitness analysis over rendered marks
//!
//! Five bounded sub-metrics folded into a weighted 0–100 composite. The two
//! jitter terms derive from the candidate's own digest bytes, so scoring the
//! identical candidate twice always agrees and ranking stays reproducible.

use crate::seed::{GradientKind, MasterSeed, SeedParameters, SymmetryClass};
use serde::{Deserialize, Serialize};

const WEIGHT_COMPLEXITY: f64 = 0.20;
const WEIGHT_BALANCE: f64 = 0.25;
const WEIGHT_UNIQUENESS: f64 = 0.25;
const WEIGHT_SCALABILITY: f64 = 0.15;
const WEIGHT_MEMORABILITY: f64 = 0.15;

/// Span of the digest-seeded jitter terms. Small enough that jitter never
/// flips a ranking between structurally different candidates.
const JITTER_SPAN: f64 = 8.0;

/// Digest byte indices feeding the jitter terms; both sit outside the
/// extractor's 0–26 field layout.
const BALANCE_JITTER_BYTE: usize = 30;
const MEMORABILITY_JITTER_BYTE: usize = 31;

/// The five sub-metrics, each bounded to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub complexity: f64,
    pub balance: f64,
    pub uniqueness: f64,
    pub scalability: f64,
    pub memorability: f64,
}

/// Composite fitness for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Weighted composite, 0 to 100
    pub score: f64,
    pub metrics: QualityMetrics,
}

/// Count the `<path>`/`<circle>`/`<rect>` primitives in rendered markup.
pub fn primitive_count(markup: &str) -> usize {
    ["<path", "<circle", "<rect"]
        .iter()
        .map(|tag| markup.matches(tag).count())
        .sum()
}

/// Marks with 3–8 primitives read as finished yet still scale down; scores
/// fall off linearly outside that band.
fn complexity_score(count: usize) -> f64 {
    let n = count as f64;
    if (3..=8).contains(&count) {
        100.0 - (n - 5.5).abs() * 4.0
    } else if count < 3 {
        (90.0 - (3.0 - n) * 25.0).max(0.0)
    } else {
        (90.0 - (n - 8.0) * 12.0).max(0.0)
    }
}

fn balance_score(params: &SeedParameters, jitter: f64) -> f64 {
    let symmetry_bonus = if params.shape.symmetry == SymmetryClass::None {
        0.0
    } else {
        20.0
    };
    (70.0 + symmetry_bonus + jitter).min(100.0)
}

/// Distance of key parameters from their neutral midpoints; a mark near all
/// midpoints is the one everyone else already has.
fn uniqueness_score(params: &SeedParameters) -> f64 {
    let rotation_deviation = (params.shape.rotation - 180.0).abs() / 180.0;
    let tension_deviation = (params.shape.curve_tension - 0.5).abs() * 2.0;
    let corner_bonus = if params.shape.corner_radius > 0.0 { 15.0 } else { 0.0 };

    (35.0 * rotation_deviation
        + 25.0 * tension_deviation
        + 25.0 * params.shape.complexity
        + corner_bonus)
        .min(100.0)
}

/// Dense marks degrade at favicon sizes.
fn scalability_score(count: usize) -> f64 {
    let excess = count.saturating_sub(6) as f64;
    (95.0 - excess * 12.0).max(0.0)
}

fn memorability_score(params: &SeedParameters, jitter: f64) -> f64 {
    let mut value = 55.0 + jitter;
    if params.shape.element_count >= 3 {
        value += 15.0;
    }
    if params.letter.interlock_depth > 0.4 {
        value += 15.0;
    }
    if params.fill.gradient_kind != GradientKind::None {
        value += 10.0;
    }
    value.min(100.0)
}

fn jitter(seed: &MasterSeed, index: usize) -> f64 {
    let bytes = seed.digest_bytes();
    if bytes.is_empty() {
        return 0.0;
    }
    bytes[index % bytes.len()] as f64 / 255.0 * JITTER_SPAN
}

/// Score a candidate's rendered markup against its seed.
///
/// Pure over its inputs; the composite and every sub-metric are bounded to
/// [0, 100] for arbitrary markup and any valid parameter record.
pub fn score(markup: &str, seed: &MasterSeed) -> QualityReport {
    let count = primitive_count(markup);
    let params = &seed.parameters;

    let metrics = QualityMetrics {
        complexity: complexity_score(count),
        balance: balance_score(params, jitter(seed, BALANCE_JITTER_BYTE)),
        uniqueness: uniqueness_score(params),
        scalability: scalability_score(count),
        memorability: memorability_score(params, jitter(seed, MEMORABILITY_JITTER_BYTE)),
    };

    let score = (metrics.complexity * WEIGHT_COMPLEXITY
        + metrics.balance * WEIGHT_BALANCE
        + metrics.uniqueness * WEIGHT_UNIQUENESS
        + metrics.scalability * WEIGHT_SCALABILITY
        + metrics.memorability * WEIGHT_MEMORABILITY)
        .clamp(0.0, 100.0);

    QualityReport { score, metrics }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;
    use crate::seed::SeedFactory;

    fn markup_with(primitives: usize) -> String {
        let mut svg = String::from("<svg viewBox=\"0 0 100 100\">");
        for i in 0..primitives {
            match i % 3 {
                0 => svg.push_str("<circle cx=\"50\" cy=\"50\" r=\"10\"/>"),
                1 => svg.push_str("<rect x=\"10\" y=\"10\" width=\"20\" height=\"20\"/>"),
                _ => svg.push_str("<path d=\"M 0 0 L 10 10\"/>"),
            }
        }
        svg.push_str("</svg>");
        svg
    }

    fn mint() -> MasterSeed {
        SeedFactory::new().generate_unique("nova", Algorithm::CloverRadial)
    }

    #[test]
    fn test_primitive_count() {
        assert_eq!(primitive_count(&markup_with(5)), 5);
        assert_eq!(primitive_count("<svg></svg>"), 0);
        assert_eq!(primitive_count("<path/><path/><circle/><rect/>"), 4);
    }

    #[test]
    fn test_scores_are_bounded() {
        let factory = SeedFactory::new();
        for brand in ["nova", "hyperscale systems", "x", ""] {
            for algorithm in Algorithm::ALL {
                let seed = factory.generate_unique(brand, algorithm);
                for primitives in [0, 1, 3, 5, 8, 12, 40] {
                    let report = score(&markup_with(primitives), &seed);
                    for metric in [
                        report.score,
                        report.metrics.complexity,
                        report.metrics.balance,
                        report.metrics.uniqueness,
                        report.metrics.scalability,
                        report.metrics.memorability,
                    ] {
                        assert!((0.0..=100.0).contains(&metric), "unbounded: {report:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let seed = mint();
        let markup = markup_with(5);
        assert_eq!(score(&markup, &seed), score(&markup, &seed));
    }

    #[test]
    fn test_complexity_band() {
        let seed = mint();
        let in_band = score(&markup_with(5), &seed).metrics.complexity;
        let sparse = score(&markup_with(1), &seed).metrics.complexity;
        let dense = score(&markup_with(14), &seed).metrics.complexity;
        assert!(in_band >= 90.0);
        assert!(sparse < in_band);
        assert!(dense < in_band);
    }

    #[test]
    fn test_symmetry_raises_balance() {
        let seed = mint();
        let mut asymmetric = seed.clone();
        asymmetric.parameters.shape.symmetry = SymmetryClass::None;
        let mut radial = seed;
        radial.parameters.shape.symmetry = SymmetryClass::Radial;

        let markup = markup_with(4);
        let low = score(&markup, &asymmetric).metrics.balance;
        let high = score(&markup, &radial).metrics.balance;
        assert!((high - low - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_dense_marks_lose_scalability() {
        let seed = mint();
        let six = score(&markup_with(6), &seed).metrics.scalability;
        let ten = score(&markup_with(10), &seed).metrics.scalability;
        assert!((six - 95.0).abs() < 1e-9);
        assert!(ten < six);
    }

    #[test]
    fn test_neutral_parameters_score_low_uniqueness() {
        let mut seed = mint();
        seed.parameters.shape.rotation = 180.0;
        seed.parameters.shape.curve_tension = 0.5;
        seed.parameters.shape.complexity = 0.0;
        seed.parameters.shape.corner_radius = 0.0;
        let report = score(&markup_with(5), &seed);
        assert!((report.metrics.uniqueness).abs() < 1e-9);
    }
}
