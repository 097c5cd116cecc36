//! Master seeds — entropy composition, parameter derivation, uniqueness
//!
//! A seed = canonical digest + derived parameters + collision guarantee.
//! Everything visual downstream is a pure function of what lives here.

mod extract;
mod master;
mod params;
mod registry;

pub use extract::extract;
pub use master::{compose_digest, MasterSeed, SeedFactory, DEFAULT_MAX_RETRIES, ENTROPY_VERSION};
pub use params::{
    FillParameters, GlyphPart, GradientKind, LayoutParameters, LetterParameters, LineCap,
    LineJoin, SeedParameters, ShapeParameters, StrokeParameters, SymmetryClass, WeightClass,
};
pub use registry::{CollisionRegistry, InMemoryRegistry};

pub(crate) use extract::{name_digest, normalize_brand};
