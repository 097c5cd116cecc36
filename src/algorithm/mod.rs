//! Generation algorithms — the eight mark-construction strategies
//!
//! A closed enum resolved through the static `ALL` table. The renderer is
//! keyed off the variant plus the derived parameters; this crate never
//! branches on algorithm strings outside the serde boundary.

use serde::{Deserialize, Serialize};

mod select;

pub use select::select;

/// One of the eight generation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    LetterFusion,
    InterlockingGeometry,
    NegativeSpaceLetter,
    MonogramMerge,
    CloverRadial,
    SingleStroke,
    LetterExtract,
    GradientGlow,
}

impl Algorithm {
    /// Static lookup table; fallback selection indexes into it.
    pub const ALL: [Algorithm; 8] = [
        Algorithm::LetterFusion,
        Algorithm::InterlockingGeometry,
        Algorithm::NegativeSpaceLetter,
        Algorithm::MonogramMerge,
        Algorithm::CloverRadial,
        Algorithm::SingleStroke,
        Algorithm::LetterExtract,
        Algorithm::GradientGlow,
    ];

    /// Wire tag, also the byte sequence hashed into the seed digest.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::LetterFusion => "letter-fusion",
            Algorithm::InterlockingGeometry => "interlocking-geometry",
            Algorithm::NegativeSpaceLetter => "negative-space-letter",
            Algorithm::MonogramMerge => "monogram-merge",
            Algorithm::CloverRadial => "clover-radial",
            Algorithm::SingleStroke => "single-stroke",
            Algorithm::LetterExtract => "letter-extract",
            Algorithm::GradientGlow => "gradient-glow",
        }
    }

    pub fn from_name(name: &str) -> Option<Algorithm> {
        Algorithm::ALL.iter().copied().find(|a| a.name() == name)
    }

    /// One-line description used in concept strings and the CLI listing.
    pub fn blurb(&self) -> &'static str {
        match self {
            Algorithm::LetterFusion => "fuses the initial letterforms into a single ligature",
            Algorithm::InterlockingGeometry => "interlocking geometric frames with shared edges",
            Algorithm::NegativeSpaceLetter => "carves the initial out of a solid field",
            Algorithm::MonogramMerge => "merges two initials into a monogram lockup",
            Algorithm::CloverRadial => "petals repeated radially around a common center",
            Algorithm::SingleStroke => "one continuous stroke drawing the full silhouette",
            Algorithm::LetterExtract => "isolates a distinctive fragment of the initial",
            Algorithm::GradientGlow => "layered gradient glow behind a minimal core shape",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(algorithm.name()), Some(algorithm));
        }
        assert_eq!(Algorithm::from_name("swoosh"), None);
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        let json = serde_json::to_string(&Algorithm::NegativeSpaceLetter).unwrap();
        assert_eq!(json, "\"negative-space-letter\"");
        let back: Algorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Algorithm::NegativeSpaceLetter);
    }

    #[test]
    fn test_all_is_exhaustive_and_distinct() {
        let mut names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 8);
    }
}
