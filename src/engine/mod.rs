//! Generation engine — sample, score, curate
//!
//! Drives "generate N candidates across algorithms → score → filter → rank →
//! return top-K". Individual sample failures are absorbed; the run itself has
//! no terminal error state and degrades to fewer results.

mod candidate;

pub use candidate::GeneratedCandidate;

use crate::algorithm::Algorithm;
use crate::scoring;
use crate::seed::{CollisionRegistry, MasterSeed, SeedFactory, DEFAULT_MAX_RETRIES};
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Error returned by an injected renderer. The engine never propagates it;
/// the failing candidate is dropped and the run continues.
#[derive(Debug, Clone, thiserror::Error)]
#[error("render failed: {0}")]
pub struct RenderError(pub String);

/// Renderer signature for the concurrent path.
pub type SharedRenderFn = dyn Fn(&MasterSeed) -> Result<String, RenderError> + Send + Sync;

/// Knobs for one engine instance. `Default` is the product contract:
/// 15 samples, an 85-point bar, top 5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Sampling iterations per run
    pub samples: usize,
    /// Minimum composite score a candidate must clear
    pub quality_bar: f64,
    /// Maximum number of returned candidates
    pub max_results: usize,
    /// Collision retries before a digest is accepted regardless
    pub max_seed_retries: u32,
    /// Bounded worker count for the concurrent path
    pub workers: usize,
    /// Per-render budget for the concurrent path, milliseconds
    pub render_budget_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            samples: 15,
            quality_bar: 85.0,
            max_results: 5,
            max_seed_retries: DEFAULT_MAX_RETRIES,
            workers: 4,
            render_budget_ms: 10_000,
        }
    }
}

impl GenerationConfig {
    /// Fast preview sweep with a forgiving bar.
    pub fn draft() -> Self {
        Self {
            samples: 8,
            quality_bar: 70.0,
            ..Self::default()
        }
    }

    /// Wider sweep for callers that want a deep pool to choose from.
    pub fn exhaustive() -> Self {
        Self {
            samples: 40,
            max_results: 10,
            workers: 8,
            ..Self::default()
        }
    }
}

/// One generation request. Style hints never enter the digest; they are
/// echoed into candidate concept strings only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub brand_name: String,
    pub preferred_algorithm: Option<Algorithm>,
    pub style: Option<String>,
    pub color_scheme: Option<String>,
}

impl GenerateRequest {
    pub fn new(brand_name: impl Into<String>) -> Self {
        Self {
            brand_name: brand_name.into(),
            ..Self::default()
        }
    }
}

/// Lifetime counters for one engine.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EngineStats {
    pub seeds_issued: u64,
    pub collision_retries: u64,
    pub renders_failed: u64,
    pub below_bar: u64,
}

/// The generation orchestrator.
pub struct LogoEngine {
    factory: SeedFactory,
    config: GenerationConfig,
    renders_failed: AtomicU64,
    below_bar: AtomicU64,
}

impl Default for LogoEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LogoEngine {
    pub fn new() -> Self {
        Self::with_config(GenerationConfig::default())
    }

    pub fn with_config(config: GenerationConfig) -> Self {
        Self {
            factory: SeedFactory::new(),
            config,
            renders_failed: AtomicU64::new(0),
            below_bar: AtomicU64::new(0),
        }
    }

    /// Engine over an injected collision registry, e.g. one shared across
    /// processes to preserve cross-user uniqueness.
    pub fn with_registry(registry: Box<dyn CollisionRegistry>, config: GenerationConfig) -> Self {
        Self {
            factory: SeedFactory::with_registry(registry, config.max_seed_retries),
            config,
            renders_failed: AtomicU64::new(0),
            below_bar: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            seeds_issued: self.factory.issued() as u64,
            collision_retries: self.factory.collision_retries(),
            renders_failed: self.renders_failed.load(Ordering::Relaxed),
            below_bar: self.below_bar.load(Ordering::Relaxed),
        }
    }

    /// Execution order: preferred algorithm first, the rest Fisher–Yates
    /// shuffled; without a preference the whole table is shuffled.
    fn algorithm_order(&self, preferred: Option<Algorithm>) -> Vec<Algorithm> {
        let mut order: Vec<Algorithm> = Algorithm::ALL.to_vec();
        let mut rng = rand::thread_rng();
        match preferred {
            Some(first) => {
                order.retain(|a| *a != first);
                order.shuffle(&mut rng);
                order.insert(0, first);
            }
            None => order.shuffle(&mut rng),
        }
        order
    }

    /// Run one synchronous generation sweep.
    ///
    /// Renderer errors are logged and dropped, never propagated. The result
    /// is sorted non-increasing by score, holds at most `max_results`
    /// entries, and every entry clears `quality_bar` — possibly empty, which
    /// is a valid outcome, not an error.
    pub fn generate<F>(&self, request: &GenerateRequest, render: F) -> Vec<GeneratedCandidate>
    where
        F: Fn(&MasterSeed) -> Result<String, RenderError>,
    {
        let order = self.algorithm_order(request.preferred_algorithm);
        let mut candidates = Vec::with_capacity(self.config.samples);

        for i in 0..self.config.samples {
            let algorithm = order[i % order.len()];
            let seed = self.factory.generate_unique(&request.brand_name, algorithm);
            let markup = match render(&seed) {
                Ok(markup) => markup,
                Err(e) => {
                    self.renders_failed.fetch_add(1, Ordering::Relaxed);
                    warn!("dropping candidate {}: {}", &seed.digest[..12], e);
                    continue;
                }
            };
            let quality = scoring::score(&markup, &seed);
            debug!("sampled {} -> {:.1}", seed.summary(), quality.score);
            candidates.push(GeneratedCandidate::new(seed, markup, quality, request));
        }

        self.curate(candidates)
    }

    /// Concurrent sweep: the samples fan out over a bounded worker pool and
    /// each render gets `render_budget_ms` before it counts as failed. The
    /// registry's check-then-insert stays atomic under the factory lock, so
    /// the uniqueness guarantee is unchanged.
    pub async fn generate_concurrent(
        self: Arc<Self>,
        request: GenerateRequest,
        render: Arc<SharedRenderFn>,
    ) -> Vec<GeneratedCandidate> {
        let order = self.algorithm_order(request.preferred_algorithm);
        let semaphore = Arc::new(tokio::sync::Semaphore::new(self.config.workers.max(1)));
        let budget = Duration::from_millis(self.config.render_budget_ms);
        let mut tasks = tokio::task::JoinSet::new();

        for i in 0..self.config.samples {
            let algorithm = order[i % order.len()];
            let engine = Arc::clone(&self);
            let render = Arc::clone(&render);
            let semaphore = Arc::clone(&semaphore);
            let brand = request.brand_name.clone();

            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok()?;
                let seed = engine.factory.generate_unique(&brand, algorithm);
                let rendered = {
                    let seed = seed.clone();
                    tokio::time::timeout(budget, tokio::task::spawn_blocking(move || render(&seed)))
                        .await
                };
                match rendered {
                    Ok(Ok(Ok(markup))) => {
                        let quality = scoring::score(&markup, &seed);
                        Some((seed, markup, quality))
                    }
                    Ok(Ok(Err(e))) => {
                        engine.renders_failed.fetch_add(1, Ordering::Relaxed);
                        warn!("dropping candidate {}: {}", &seed.digest[..12], e);
                        None
                    }
                    Ok(Err(join_error)) => {
                        engine.renders_failed.fetch_add(1, Ordering::Relaxed);
                        warn!("render task died for {}: {}", &seed.digest[..12], join_error);
                        None
                    }
                    Err(_) => {
                        engine.renders_failed.fetch_add(1, Ordering::Relaxed);
                        warn!(
                            "render budget ({} ms) exceeded for {}",
                            budget.as_millis(),
                            &seed.digest[..12]
                        );
                        None
                    }
                }
            });
        }

        let mut candidates = Vec::with_capacity(self.config.samples);
        while let Some(joined) = tasks.join_next().await {
            if let Ok(Some((seed, markup, quality))) = joined {
                candidates.push(GeneratedCandidate::new(seed, markup, quality, &request));
            }
        }

        self.curate(candidates)
    }

    fn curate(&self, mut candidates: Vec<GeneratedCandidate>) -> Vec<GeneratedCandidate> {
        let sampled = candidates.len();
        candidates.retain(|c| c.quality.score >= self.config.quality_bar);
        self.below_bar
            .fetch_add((sampled - candidates.len()) as u64, Ordering::Relaxed);

        candidates.sort_by(|a, b| b.quality.score.partial_cmp(&a.quality.score).unwrap());
        candidates.truncate(self.config.max_results);

        info!(
            "curated {} of {} scored candidates (bar {:.0})",
            candidates.len(),
            sampled,
            self.config.quality_bar
        );
        candidates
    }
}

/// One-shot entry point over a default-configured engine.
///
/// Each call owns a fresh process-lifetime registry; callers that need
/// uniqueness across calls keep a [`LogoEngine`] (or inject a shared
/// registry) instead.
pub fn generate_unique_logos<F>(request: &GenerateRequest, render: F) -> Vec<GeneratedCandidate>
where
    F: Fn(&MasterSeed) -> Result<String, RenderError>,
{
    LogoEngine::new().generate(request, render)
}
