//! GeneratedCandidate — one scored design proposal
//!
//! Ephemeral: lives for the duration of an engine run. Callers that keep a
//! candidate persist it themselves, typically keyed by the seed digest.

use super::GenerateRequest;
use crate::scoring::QualityReport;
use crate::seed::MasterSeed;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedCandidate {
    pub id: String,
    pub seed: MasterSeed,
    /// Rendered vector markup from the injected renderer
    pub markup: String,
    pub quality: QualityReport,
    /// Human-readable design rationale
    pub concept: String,
}

impl GeneratedCandidate {
    pub fn new(
        seed: MasterSeed,
        markup: String,
        quality: QualityReport,
        request: &GenerateRequest,
    ) -> Self {
        let concept = build_concept(&seed, request);
        Self {
            id: Uuid::new_v4().to_string(),
            seed,
            markup,
            quality,
            concept,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "[{}] {} | score {:.1} | {}",
            &self.id[..8],
            self.seed.algorithm.name(),
            self.quality.score,
            self.concept,
        )
    }
}

fn build_concept(seed: &MasterSeed, request: &GenerateRequest) -> String {
    let p = &seed.parameters;
    let mut concept = format!(
        "{} for '{}': {}; {} elements, {:?} symmetry, {:.1}px {:?} strokes, {:?} emphasis at {:.0}% interlock",
        seed.algorithm.name(),
        seed.brand_name,
        seed.algorithm.blurb(),
        p.shape.element_count,
        p.shape.symmetry,
        p.stroke.width,
        p.letter.weight_class,
        p.letter.emphasized_part,
        p.letter.interlock_depth * 100.0,
    );
    if let Some(style) = &request.style {
        concept.push_str(&format!("; {style} styling"));
    }
    if let Some(colors) = &request.color_scheme {
        concept.push_str(&format!(" in a {colors} scheme"));
    }
    concept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;
    use crate::scoring;
    use crate::seed::SeedFactory;

    #[test]
    fn test_concept_mentions_algorithm_and_hints() {
        let seed = SeedFactory::new().generate_unique("Nova", Algorithm::CloverRadial);
        let quality = scoring::score("<svg/>", &seed);
        let request = GenerateRequest {
            brand_name: "Nova".into(),
            preferred_algorithm: None,
            style: Some("minimal".into()),
            color_scheme: Some("monochrome".into()),
        };
        let candidate = GeneratedCandidate::new(seed, "<svg/>".into(), quality, &request);

        assert!(candidate.concept.contains("clover-radial"));
        assert!(candidate.concept.contains("'nova'"));
        assert!(candidate.concept.contains("minimal styling"));
        assert!(candidate.concept.contains("monochrome scheme"));
        assert_eq!(candidate.id.len(), 36);
    }
}
