//! SeedParameters — the derived design genome of a mark
//!
//! Thirty-one numeric/enum fields in five clusters, fully determined by the
//! seed digest. Together with the algorithm tag they fix the visual output.
//! Every range below is part of the renderer contract and must hold exactly.

use serde::{Deserialize, Serialize};

/// Stroke end-cap style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// Stroke corner-join style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Symmetry class of the overall composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymmetryClass {
    Bilateral,
    Radial,
    None,
    Point,
}

/// Kind of fill gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientKind {
    None,
    Linear,
    Radial,
    Conic,
}

/// Which part of a glyph the mark emphasizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlyphPart {
    Stem,
    Bowl,
    Crossbar,
    Terminal,
    Counter,
    Shoulder,
}

/// Visual weight class of letterform elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightClass {
    Light,
    Regular,
    Medium,
    Bold,
    Black,
}

/// Stroke cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeParameters {
    /// Stroke width in viewBox units, 1.0 to 8.0
    pub width: f64,
    /// Taper factor along the stroke, 0.0 (none) to 1.0 (full)
    pub taper: f64,
    /// End-cap style
    pub cap: LineCap,
    /// Corner-join style
    pub join: LineJoin,
    /// Dash length as a fraction of the dash period, 0.0 to 1.0
    pub dash_ratio: f64,
}

/// Shape cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeParameters {
    /// Corner radius as percent of the bounding box, 0.0 to 50.0
    pub corner_radius: f64,
    /// Rotation in degrees, 0.0 inclusive to 360.0 exclusive
    pub rotation: f64,
    /// Bezier curve tension, 0.0 to 1.0
    pub curve_tension: f64,
    /// Number of primary elements, 2 to 6
    pub element_count: u32,
    /// Spacing variance between elements, 0.0 to 1.0
    pub spacing_variance: f64,
    /// Scale variance between elements, 0.0 to 1.0
    pub scale_variance: f64,
    /// Symmetry class
    pub symmetry: SymmetryClass,
    /// Width over height of the mark, 0.5 to 2.0
    pub aspect_ratio: f64,
    /// Shape complexity magnitude, 0.0 to 1.0
    pub complexity: f64,
    /// Edge softness, 0.0 (crisp) to 1.0 (fully softened)
    pub edge_softness: f64,
}

/// Fill cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillParameters {
    /// Fill opacity, 0.3 to 1.0
    pub opacity: f64,
    /// Gradient angle in degrees, 0.0 inclusive to 360.0 exclusive
    pub gradient_angle: f64,
    /// Gradient kind
    pub gradient_kind: GradientKind,
    /// Number of gradient stops, 2 to 5
    pub gradient_stops: u32,
    /// Gradient spread, 0.0 to 1.0
    pub gradient_spread: f64,
}

/// Letter-anatomy cluster. Derived from the name digest rather than the
/// primary digest, so re-salting the same brand keeps these stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterParameters {
    /// Glyph part the mark emphasizes
    pub emphasized_part: GlyphPart,
    /// Cutout anchor as a clock position, 0 to 11
    pub cutout_anchor: u32,
    /// Interlock depth between letterforms, 0.0 to 1.0
    pub interlock_depth: f64,
    /// Weight class of letterform elements
    pub weight_class: WeightClass,
}

/// Layout cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutParameters {
    /// Horizontal offset in viewBox units, -20.0 to 20.0
    pub offset_x: f64,
    /// Vertical offset in viewBox units, -20.0 to 20.0
    pub offset_y: f64,
    /// Number of stacked layers, 1 to 4
    pub layer_count: u32,
    /// Spacing between layers, 0.0 to 1.0
    pub layer_spacing: f64,
    /// Overlap between adjacent elements, 0.0 to 1.0
    pub overlap: f64,
    /// Alignment bias, -1.0 (leading) to 1.0 (trailing)
    pub alignment_bias: f64,
    /// Margin as a fraction of the mark size, 0.0 to 0.25
    pub margin_ratio: f64,
}

/// The full derived parameter record. Read-only after extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedParameters {
    pub stroke: StrokeParameters,
    pub shape: ShapeParameters,
    pub fill: FillParameters,
    pub letter: LetterParameters,
    pub layout: LayoutParameters,
}

impl SeedParameters {
    /// Check every field against its documented closed interval.
    pub fn validate(&self) -> bool {
        let s = &self.stroke;
        let sh = &self.shape;
        let f = &self.fill;
        let l = &self.letter;
        let ly = &self.layout;

        (1.0..=8.0).contains(&s.width)
            && (0.0..=1.0).contains(&s.taper)
            && (0.0..=1.0).contains(&s.dash_ratio)
            && (0.0..=50.0).contains(&sh.corner_radius)
            && (0.0..360.0).contains(&sh.rotation)
            && (0.0..=1.0).contains(&sh.curve_tension)
            && (2..=6).contains(&sh.element_count)
            && (0.0..=1.0).contains(&sh.spacing_variance)
            && (0.0..=1.0).contains(&sh.scale_variance)
            && (0.5..=2.0).contains(&sh.aspect_ratio)
            && (0.0..=1.0).contains(&sh.complexity)
            && (0.0..=1.0).contains(&sh.edge_softness)
            && (0.3..=1.0).contains(&f.opacity)
            && (0.0..360.0).contains(&f.gradient_angle)
            && (2..=5).contains(&f.gradient_stops)
            && (0.0..=1.0).contains(&f.gradient_spread)
            && l.cutout_anchor <= 11
            && (0.0..=1.0).contains(&l.interlock_depth)
            && (-20.0..=20.0).contains(&ly.offset_x)
            && (-20.0..=20.0).contains(&ly.offset_y)
            && (1..=4).contains(&ly.layer_count)
            && (0.0..=1.0).contains(&ly.layer_spacing)
            && (0.0..=1.0).contains(&ly.overlap)
            && (-1.0..=1.0).contains(&ly.alignment_bias)
            && (0.0..=0.25).contains(&ly.margin_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SeedParameters {
        SeedParameters {
            stroke: StrokeParameters {
                width: 3.0,
                taper: 0.2,
                cap: LineCap::Round,
                join: LineJoin::Miter,
                dash_ratio: 0.0,
            },
            shape: ShapeParameters {
                corner_radius: 12.0,
                rotation: 45.0,
                curve_tension: 0.5,
                element_count: 4,
                spacing_variance: 0.1,
                scale_variance: 0.1,
                symmetry: SymmetryClass::Radial,
                aspect_ratio: 1.0,
                complexity: 0.6,
                edge_softness: 0.0,
            },
            fill: FillParameters {
                opacity: 0.9,
                gradient_angle: 120.0,
                gradient_kind: GradientKind::Linear,
                gradient_stops: 3,
                gradient_spread: 0.4,
            },
            letter: LetterParameters {
                emphasized_part: GlyphPart::Bowl,
                cutout_anchor: 7,
                interlock_depth: 0.5,
                weight_class: WeightClass::Bold,
            },
            layout: LayoutParameters {
                offset_x: 0.0,
                offset_y: -4.0,
                layer_count: 2,
                layer_spacing: 0.3,
                overlap: 0.2,
                alignment_bias: 0.0,
                margin_ratio: 0.1,
            },
        }
    }

    #[test]
    fn test_validate_accepts_in_range() {
        assert!(sample().validate());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut p = sample();
        p.stroke.width = 9.0;
        assert!(!p.validate());

        let mut p = sample();
        p.shape.rotation = 360.0;
        assert!(!p.validate());

        let mut p = sample();
        p.shape.element_count = 7;
        assert!(!p.validate());

        let mut p = sample();
        p.letter.cutout_anchor = 12;
        assert!(!p.validate());
    }

    #[test]
    fn test_serde_roundtrip() {
        let p = sample();
        let json = serde_json::to_string(&p).unwrap();
        let back: SeedParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
        assert!(json.contains("\"symmetry\":\"radial\""));
        assert!(json.contains("\"weight_class\":\"bold\""));
    }
}
