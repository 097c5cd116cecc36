use criterion::{criterion_group, criterion_main, Criterion};
use markgen_core::seed::extract;
use markgen_core::{select, Algorithm, GenerateRequest, GenerationConfig, LogoEngine, SeedFactory};

fn bench_generation(c: &mut Criterion) {
    let digest = [0xA7u8; 32];
    c.bench_function("extract_params", |b| b.iter(|| extract(&digest, "nova")));

    c.bench_function("select_algorithm", |b| b.iter(|| select("hyperscale systems")));

    let factory = SeedFactory::new();
    c.bench_function("mint_unique_seed", |b| {
        b.iter(|| factory.generate_unique("nova", Algorithm::CloverRadial))
    });

    let engine = LogoEngine::with_config(GenerationConfig::default());
    let request = GenerateRequest::new("nova");
    c.bench_function("engine_sweep_15", |b| {
        b.iter(|| {
            engine.generate(&request, |seed| {
                Ok(format!(
                    "<svg><rect/><circle/><circle/><path d=\"M 0 0 L {} 0\"/></svg>",
                    seed.parameters.shape.element_count
                ))
            })
        })
    });
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
