//! Markgen — deterministic procedural logo-mark generation
//!
//! Converts a brand name into a statistically unique space of vector mark
//! designs: keyed-hash parameter derivation, heuristic algorithm selection,
//! five-metric quality scoring, and curation of the top results. Rendering
//! itself is an injected collaborator; everything visual is a pure function
//! of the [`seed::MasterSeed`] handed to it.

pub mod algorithm;
pub mod engine;
pub mod scoring;
pub mod seed;

pub use algorithm::{select, Algorithm};
pub use engine::{
    generate_unique_logos, EngineStats, GenerateRequest, GeneratedCandidate, GenerationConfig,
    LogoEngine, RenderError, SharedRenderFn,
};
pub use scoring::{score, QualityMetrics, QualityReport};
pub use seed::{CollisionRegistry, InMemoryRegistry, MasterSeed, SeedFactory, SeedParameters};
