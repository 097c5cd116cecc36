//! Algorithm selection — lexical heuristics for thematic fit
//!
//! A rule-ordered classifier over the normalized brand name; the first
//! matching rule wins. Tie-breaks read the salt-independent name digest, so
//! selection is pure: the same name always maps to the same strategy.
//! Selection biases theme only; uniqueness lives in the seed factory.

use super::Algorithm;
use crate::seed::{name_digest, normalize_brand};

/// Initials that fuse or fragment well at small sizes.
const FUSION_INITIALS: &str = "abcdegmosv";

/// Initials with dominant round forms.
const ROUNDED_INITIALS: &str = "bcdegopqsu";

/// Initials whose counters carve a readable negative space.
const NEGATIVE_SPACE_INITIALS: &str = "fhijklnrtwxyz";

const TECH_KEYWORDS: &[&str] = &[
    "tech", "data", "soft", "net", "code", "sys", "byte", "cloud", "logic", "stack", "grid",
];

const PREMIUM_KEYWORDS: &[&str] = &[
    "lux", "prime", "gold", "royal", "star", "glow", "shine", "aura", "lumen", "crown",
];

/// Byte value at which a short name reads as a single-stroke candidate.
const SINGLE_STROKE_THRESHOLD: u8 = 0xC0;

fn first_letter(name: &str) -> Option<char> {
    name.chars().next()
}

/// An embedded space followed by a letter, i.e. a distinguishable second
/// initial.
fn has_second_initial(name: &str) -> bool {
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ' ' {
            if let Some(next) = chars.peek() {
                if next.is_alphabetic() {
                    return true;
                }
            }
        }
    }
    false
}

/// Map a brand name to the generation strategy that suits it best.
///
/// Deterministic: repeated calls agree, with no hidden randomness.
pub fn select(brand_name: &str) -> Algorithm {
    let name = normalize_brand(brand_name);
    let digest = name_digest(&name);
    let len = name.chars().count();
    let first = match first_letter(&name) {
        Some(c) => c,
        None => return Algorithm::ALL[(digest[2] % 8) as usize],
    };

    // 1. Short names with a fusable initial; one digest byte breaks the tie
    //    between fusing the whole initial and extracting a fragment of it.
    if len <= 5 && FUSION_INITIALS.contains(first) {
        return if digest[0] % 2 == 0 {
            Algorithm::LetterFusion
        } else {
            Algorithm::LetterExtract
        };
    }

    // 2. Multi-word names carry a second initial worth a monogram.
    if has_second_initial(&name) {
        return Algorithm::MonogramMerge;
    }

    // 3. Round initials and exactly-four-letter names sit well radially.
    if ROUNDED_INITIALS.contains(first) || len == 4 {
        return Algorithm::CloverRadial;
    }

    // 4. Remaining short names with a high digest byte.
    if len <= 5 && digest[3] >= SINGLE_STROKE_THRESHOLD {
        return Algorithm::SingleStroke;
    }

    // 5. Long or technology-flavored names.
    if len > 10 || TECH_KEYWORDS.iter().any(|k| name.contains(k)) {
        return Algorithm::InterlockingGeometry;
    }

    // 6. Premium/luminosity vocabulary.
    if PREMIUM_KEYWORDS.iter().any(|k| name.contains(k)) {
        return Algorithm::GradientGlow;
    }

    // 7. Initials that read well as negative space.
    if NEGATIVE_SPACE_INITIALS.contains(first) {
        return Algorithm::NegativeSpaceLetter;
    }

    // 8. Fallback: one digest byte indexes the full table.
    Algorithm::ALL[(digest[2] % 8) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_is_pure() {
        for name in ["Acme", "Nova", "Blue Sky", "hyperscale systems", "9lives"] {
            assert_eq!(select(name), select(name), "unstable selection for {name}");
        }
    }

    #[test]
    fn test_nova_is_clover_radial() {
        // 'n' is not a fusable initial, so the four-letter rule decides.
        assert_eq!(select("Nova"), Algorithm::CloverRadial);
        assert_eq!(select("  nova "), Algorithm::CloverRadial);
    }

    #[test]
    fn test_short_fusable_initial() {
        let picked = select("Acme");
        assert!(
            picked == Algorithm::LetterFusion || picked == Algorithm::LetterExtract,
            "unexpected {picked:?}"
        );
    }

    #[test]
    fn test_multi_word_is_monogram() {
        assert_eq!(select("Blue Sky"), Algorithm::MonogramMerge);
        assert_eq!(select("iron works"), Algorithm::MonogramMerge);
    }

    #[test]
    fn test_rounded_initial_is_clover_radial() {
        // 'q' is round, length 7 dodges the earlier rules.
        assert_eq!(select("quantix"), Algorithm::CloverRadial);
    }

    #[test]
    fn test_tech_names_interlock() {
        // 'n' is not round and the name is neither short nor four letters.
        assert_eq!(select("nettech"), Algorithm::InterlockingGeometry);
        assert_eq!(select("weatherproofing"), Algorithm::InterlockingGeometry);
    }

    #[test]
    fn test_premium_names_glow() {
        assert_eq!(select("kingsglow"), Algorithm::GradientGlow);
        assert_eq!(select("luxwear"), Algorithm::GradientGlow);
    }

    #[test]
    fn test_negative_space_initial() {
        assert_eq!(select("hollow"), Algorithm::NegativeSpaceLetter);
    }

    #[test]
    fn test_short_non_fusable_name() {
        // "ninja" either trips the high-byte single-stroke rule or falls
        // through to its negative-space initial; both are stable.
        let picked = select("ninja");
        assert!(
            picked == Algorithm::SingleStroke || picked == Algorithm::NegativeSpaceLetter,
            "unexpected {picked:?}"
        );
    }

    #[test]
    fn test_digit_leading_name_uses_fallback() {
        let picked = select("9lives");
        assert!(Algorithm::ALL.contains(&picked));
        assert_eq!(picked, select("9LIVES"));
    }

    #[test]
    fn test_empty_name_falls_back() {
        assert!(Algorithm::ALL.contains(&select("")));
    }
}
