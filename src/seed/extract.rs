//! Hash parameter extraction — digest bytes into a full design genome
//!
//! Each field reads its own byte index into the primary digest (wrapping
//! modulo digest length). Reusing an index for two fields of the same digest
//! would silently correlate them, so the layout is fixed: primary indices
//! 0–26 feed the stroke/shape/fill/layout clusters, name-digest indices 0–3
//! feed the letter-anatomy cluster. Bytes 27–31 of the primary digest are
//! reserved (the scorer reads 30–31 for its jitter terms).

use super::params::{
    FillParameters, GlyphPart, GradientKind, LayoutParameters, LetterParameters, LineCap,
    LineJoin, SeedParameters, ShapeParameters, StrokeParameters, SymmetryClass, WeightClass,
};
use sha2::{Digest, Sha256};

/// Lowercase, whitespace-trimmed form of a brand name. All hashing and
/// classification runs over this form.
pub(crate) fn normalize_brand(brand_name: &str) -> String {
    brand_name.trim().to_lowercase()
}

/// SHA-256 over the normalized brand name alone. Salt- and time-independent,
/// so the fields derived from it stay stable across regenerations.
pub(crate) fn name_digest(brand_name: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(normalize_brand(brand_name).as_bytes());
    hasher.finalize().into()
}

/// Byte-indexed view over a digest with the three field conversions.
struct ByteSlicer<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteSlicer<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    fn byte(&self, index: usize) -> u8 {
        self.bytes[index % self.bytes.len()]
    }

    /// Linear map of a byte (0–255) into `[min, max]`.
    fn normalized(&self, index: usize, min: f64, max: f64) -> f64 {
        min + self.byte(index) as f64 / 255.0 * (max - min)
    }

    /// Integer in the inclusive range `[min, max]`, pure integer arithmetic.
    fn integer(&self, index: usize, min: u32, max: u32) -> u32 {
        min + self.byte(index) as u32 * (max - min + 1) / 256
    }

    /// Angle in `[0, 360)` degrees.
    fn degrees(&self, index: usize) -> f64 {
        self.byte(index) as f64 * (360.0 / 256.0)
    }

    fn choice<T: Copy>(&self, index: usize, options: &[T]) -> T {
        options[self.byte(index) as usize % options.len()]
    }
}

/// Derive the full parameter record from a primary digest and the brand name.
///
/// Pure and platform-independent: same inputs, byte-identical output.
pub fn extract(digest: &[u8], brand_name: &str) -> SeedParameters {
    let primary = ByteSlicer::new(digest);
    let name = name_digest(brand_name);
    let named = ByteSlicer::new(&name);

    let stroke = StrokeParameters {
        width: primary.normalized(0, 1.0, 8.0),
        taper: primary.normalized(1, 0.0, 1.0),
        cap: primary.choice(2, &[LineCap::Butt, LineCap::Round, LineCap::Square]),
        join: primary.choice(3, &[LineJoin::Miter, LineJoin::Round, LineJoin::Bevel]),
        dash_ratio: primary.normalized(4, 0.0, 1.0),
    };

    let shape = ShapeParameters {
        corner_radius: primary.normalized(5, 0.0, 50.0),
        rotation: primary.degrees(6),
        curve_tension: primary.normalized(7, 0.0, 1.0),
        element_count: primary.integer(8, 2, 6),
        spacing_variance: primary.normalized(9, 0.0, 1.0),
        scale_variance: primary.normalized(10, 0.0, 1.0),
        symmetry: primary.choice(
            11,
            &[
                SymmetryClass::Bilateral,
                SymmetryClass::Radial,
                SymmetryClass::None,
                SymmetryClass::Point,
            ],
        ),
        edge_softness: primary.normalized(12, 0.0, 1.0),
        complexity: primary.normalized(13, 0.0, 1.0),
        aspect_ratio: primary.normalized(26, 0.5, 2.0),
    };

    let fill = FillParameters {
        opacity: primary.normalized(14, 0.3, 1.0),
        gradient_angle: primary.degrees(15),
        gradient_kind: primary.choice(
            16,
            &[
                GradientKind::None,
                GradientKind::Linear,
                GradientKind::Radial,
                GradientKind::Conic,
            ],
        ),
        gradient_stops: primary.integer(17, 2, 5),
        gradient_spread: primary.normalized(18, 0.0, 1.0),
    };

    let layout = LayoutParameters {
        offset_x: primary.normalized(19, -20.0, 20.0),
        offset_y: primary.normalized(20, -20.0, 20.0),
        layer_count: primary.integer(21, 1, 4),
        layer_spacing: primary.normalized(22, 0.0, 1.0),
        overlap: primary.normalized(23, 0.0, 1.0),
        alignment_bias: primary.normalized(24, -1.0, 1.0),
        margin_ratio: primary.normalized(25, 0.0, 0.25),
    };

    let letter = LetterParameters {
        emphasized_part: named.choice(
            0,
            &[
                GlyphPart::Stem,
                GlyphPart::Bowl,
                GlyphPart::Crossbar,
                GlyphPart::Terminal,
                GlyphPart::Counter,
                GlyphPart::Shoulder,
            ],
        ),
        cutout_anchor: named.integer(1, 0, 11),
        interlock_depth: named.normalized(2, 0.0, 1.0),
        weight_class: named.choice(
            3,
            &[
                WeightClass::Light,
                WeightClass::Regular,
                WeightClass::Medium,
                WeightClass::Bold,
                WeightClass::Black,
            ],
        ),
    };

    SeedParameters {
        stroke,
        shape,
        fill,
        letter,
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn test_extract_is_deterministic() {
        let digest = [0xA7u8; 32];
        let a = extract(&digest, "Nova");
        let b = extract(&digest, "Nova");
        assert_eq!(a, b);
    }

    #[test]
    fn test_extract_respects_ranges() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let mut digest = [0u8; 32];
            rng.fill_bytes(&mut digest);
            let params = extract(&digest, "rangecheck");
            assert!(params.validate(), "out-of-range field for {:?}", digest);
        }
    }

    #[test]
    fn test_extract_covers_extremes() {
        let low = extract(&[0u8; 32], "x");
        assert!((low.stroke.width - 1.0).abs() < 1e-12);
        assert_eq!(low.shape.element_count, 2);
        assert!((low.shape.rotation).abs() < 1e-12);

        let high = extract(&[0xFFu8; 32], "x");
        assert!((high.stroke.width - 8.0).abs() < 1e-12);
        assert_eq!(high.shape.element_count, 6);
        assert!(high.shape.rotation < 360.0);
        assert!(high.validate());
    }

    #[test]
    fn test_distinct_digests_diverge() {
        let a = extract(&[0x11u8; 32], "brand");
        let b = extract(&[0xEEu8; 32], "brand");
        assert_ne!(a, b);
    }

    #[test]
    fn test_letter_cluster_follows_name_not_salt() {
        let a = extract(&[0x13u8; 32], "Halcyon");
        let b = extract(&[0xC4u8; 32], "Halcyon");
        assert_eq!(a.letter, b.letter);
        assert_ne!(a.stroke, b.stroke);

        let other = extract(&[0x13u8; 32], "Meridian");
        assert_ne!(a.letter, other.letter);
    }

    #[test]
    fn test_normalize_brand() {
        assert_eq!(normalize_brand("  Blue Sky  "), "blue sky");
        assert_eq!(name_digest("Nova"), name_digest("  nova "));
    }
}
