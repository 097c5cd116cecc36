//! Markgen CLI — exercise the generation engine end to end
//!
//! Commands:
//!   markgen generate   — generate ranked logo candidates for a brand
//!   markgen inspect    — show the selected algorithm and derived parameters
//!   markgen algorithms — list the eight generation strategies
//!   markgen export     — write a generation run to a JSON file
//!   markgen demo       — run a full walkthrough
//!
//! The real SVG composition layer is an external collaborator; this binary
//! injects a placeholder renderer so the whole pipeline can be driven.

use markgen_core::seed::{GradientKind, SymmetryClass};
use markgen_core::{
    select, Algorithm, GenerateRequest, GenerationConfig, LogoEngine, MasterSeed, RenderError,
    SeedFactory, SharedRenderFn,
};
use std::env;
use std::sync::Arc;

fn print_usage() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║        Markgen v0.1 — Procedural Logo-Mark Engine            ║
║        Keyed-hash derivation + curated quality ranking       ║
╚══════════════════════════════════════════════════════════════╝

Usage: markgen <command> [options]

Commands:
  generate   <brand> [algorithm]        Generate ranked candidates
  inspect    <brand>                    Selected algorithm + derived parameters
  algorithms                            List the 8 generation strategies
  export     <brand> [file]             Write a generation run to JSON
  demo                                  Run a full walkthrough

Examples:
  markgen generate "Blue Sky"
  markgen generate nova clover-radial
  markgen inspect Acme
  markgen export nova nova-marks.json
"#
    );
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "generate" => cmd_generate(&args[2..]),
        "inspect" => cmd_inspect(&args[2..]),
        "algorithms" => cmd_algorithms(),
        "export" => cmd_export(&args[2..]),
        "demo" => cmd_demo().await,
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
        }
    }
}

/// Stand-in for the external SVG composition layer: a pure function of the
/// seed that emits one backdrop rect plus the seed's primary elements.
fn placeholder_markup(seed: &MasterSeed) -> Result<String, RenderError> {
    let p = &seed.parameters;
    let mut svg = String::from(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\">",
    );

    if p.fill.gradient_kind != GradientKind::None {
        svg.push_str(&format!(
            "<defs><linearGradient id=\"fill\" gradientTransform=\"rotate({:.1})\">\
             <stop offset=\"0\"/><stop offset=\"1\"/></linearGradient></defs>",
            p.fill.gradient_angle
        ));
    }

    svg.push_str(&format!(
        "<rect width=\"100\" height=\"100\" rx=\"{:.1}\" fill=\"none\"/>",
        p.shape.corner_radius
    ));

    let spread = 60.0 / p.shape.element_count as f64;
    for i in 0..p.shape.element_count {
        let offset = 20.0 + spread * i as f64;
        match seed.algorithm {
            Algorithm::CloverRadial | Algorithm::GradientGlow => svg.push_str(&format!(
                "<circle cx=\"{offset:.1}\" cy=\"50\" r=\"{:.1}\" opacity=\"{:.2}\"/>",
                6.0 + p.stroke.width,
                p.fill.opacity
            )),
            Algorithm::InterlockingGeometry | Algorithm::MonogramMerge => svg.push_str(&format!(
                "<rect x=\"{offset:.1}\" y=\"40\" width=\"14\" height=\"14\" \
                 transform=\"rotate({:.1} 50 50)\"/>",
                p.shape.rotation
            )),
            _ => svg.push_str(&format!(
                "<path d=\"M {offset:.1} 30 Q 50 {:.1} {offset:.1} 70\" \
                 stroke-width=\"{:.1}\" fill=\"none\"/>",
                30.0 + p.shape.curve_tension * 40.0,
                p.stroke.width
            )),
        }
    }

    svg.push_str("</svg>");
    Ok(svg)
}

fn parse_algorithm(raw: &str) -> Option<Algorithm> {
    let parsed = Algorithm::from_name(raw);
    if parsed.is_none() {
        eprintln!("  Unknown algorithm '{}'. Run 'markgen algorithms'.", raw);
    }
    parsed
}

fn print_candidates(engine: &LogoEngine, results: &[markgen_core::GeneratedCandidate]) {
    if results.is_empty() {
        println!(
            "\n  No candidates cleared the {:.0}-point bar this run.",
            engine.config().quality_bar
        );
        println!("  Fresh salts each run: trying again explores a new region of the space.");
        return;
    }

    println!("\n  Candidates ({}):", results.len());
    println!("  {}", "-".repeat(78));
    for candidate in results {
        println!("  {}", candidate.summary());
        let m = &candidate.quality.metrics;
        println!(
            "      complexity {:.0} | balance {:.0} | uniqueness {:.0} | scalability {:.0} | memorability {:.0}",
            m.complexity, m.balance, m.uniqueness, m.scalability, m.memorability
        );
    }
}

fn cmd_generate(args: &[String]) {
    if args.is_empty() {
        eprintln!("Usage: markgen generate <brand> [algorithm]");
        return;
    }

    let brand = &args[0];
    let preferred = match args.get(1) {
        Some(raw) => match parse_algorithm(raw) {
            Some(a) => Some(a),
            None => return,
        },
        None => None,
    };

    let engine = LogoEngine::new();
    let request = GenerateRequest {
        brand_name: brand.clone(),
        preferred_algorithm: preferred,
        ..GenerateRequest::default()
    };

    println!("\n  Generating marks for '{}'...", brand);
    let results = engine.generate(&request, placeholder_markup);
    print_candidates(&engine, &results);

    let stats = engine.stats();
    println!(
        "\n  {} seeds issued | {} renders failed | {} below bar",
        stats.seeds_issued, stats.renders_failed, stats.below_bar
    );
}

fn cmd_inspect(args: &[String]) {
    if args.is_empty() {
        eprintln!("Usage: markgen inspect <brand>");
        return;
    }

    let brand = &args[0];
    let algorithm = select(brand);
    println!("\n  Brand:     '{}'", brand);
    println!("  Algorithm: {} — {}", algorithm.name(), algorithm.blurb());

    let factory = SeedFactory::new();
    let seed = factory.generate_unique(brand, algorithm);
    println!("  {}", seed.summary());
    match serde_json::to_string_pretty(&seed.parameters) {
        Ok(json) => println!("\n{}", json),
        Err(e) => eprintln!("  Failed to serialize parameters: {}", e),
    }
}

fn cmd_algorithms() {
    println!("\n  Generation strategies:");
    println!("  {}", "-".repeat(70));
    for algorithm in Algorithm::ALL {
        println!("  {:<22} {}", algorithm.name(), algorithm.blurb());
    }
}

fn cmd_export(args: &[String]) {
    if args.is_empty() {
        eprintln!("Usage: markgen export <brand> [file]");
        return;
    }

    let brand = &args[0];
    let filename = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| format!("markgen-export-{}.json", brand.to_lowercase()));

    let engine = LogoEngine::new();
    let results = engine.generate(&GenerateRequest::new(brand.clone()), placeholder_markup);
    if results.is_empty() {
        println!("\n  Nothing cleared the bar; no file written.");
        return;
    }

    match serde_json::to_string_pretty(&results) {
        Ok(json) => match std::fs::write(&filename, json) {
            Ok(()) => println!("\n  Exported {} candidates -> {}", results.len(), filename),
            Err(e) => eprintln!("  Failed to write {}: {}", filename, e),
        },
        Err(e) => eprintln!("  Failed to serialize candidates: {}", e),
    }
}

async fn cmd_demo() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║              Markgen v0.1 — Full Demo                        ║
║     Selection + Derivation + Scoring + Curation              ║
╚══════════════════════════════════════════════════════════════╝
"#
    );

    println!("Step 1: Algorithm selection heuristics...");
    println!("{}", "-".repeat(60));
    for brand in ["Nova", "Acme", "Blue Sky", "hyperscale systems", "luxwear", "hollow"] {
        let algorithm = select(brand);
        println!("  {:<22} -> {}", format!("'{}'", brand), algorithm.name());
    }

    println!("\nStep 2: Seed derivation is salt-keyed but name-correlated...");
    println!("{}", "-".repeat(60));
    let factory = SeedFactory::new();
    let a = factory.generate_unique("Nova", Algorithm::CloverRadial);
    let b = factory.generate_unique("Nova", Algorithm::CloverRadial);
    println!("  {}", a.summary());
    println!("  {}", b.summary());
    println!(
        "  digests differ: {} | letter anatomy stable: {}",
        a.digest != b.digest,
        a.parameters.letter == b.parameters.letter
    );

    println!("\nStep 3: Synchronous generation sweep...");
    println!("{}", "-".repeat(60));
    let engine = LogoEngine::with_config(GenerationConfig::draft());
    let results = engine.generate(&GenerateRequest::new("Nova"), placeholder_markup);
    print_candidates(&engine, &results);

    println!("\nStep 4: Concurrent sweep over a bounded worker pool...");
    println!("{}", "-".repeat(60));
    let engine = Arc::new(LogoEngine::with_config(GenerationConfig::draft()));
    let render: Arc<SharedRenderFn> = Arc::new(placeholder_markup);
    let request = GenerateRequest {
        brand_name: "Blue Sky".into(),
        style: Some("minimal".into()),
        ..GenerateRequest::default()
    };
    let results = Arc::clone(&engine).generate_concurrent(request, render).await;
    print_candidates(&engine, &results);

    if let Some(best) = results.first() {
        let symmetry_note = match best.seed.parameters.shape.symmetry {
            SymmetryClass::None => "asymmetric",
            _ => "symmetric",
        };
        println!(
            "\n  Best concurrent candidate is {} ({} primitives in markup).",
            symmetry_note,
            markgen_core::scoring::primitive_count(&best.markup)
        );
    }

    let stats = engine.stats();
    println!(
        "\nStep 5: Engine statistics\n{}\n  Seeds issued:      {}\n  Collision retries: {}\n  Renders failed:    {}\n  Below bar:         {}",
        "-".repeat(60),
        stats.seeds_issued,
        stats.collision_retries,
        stats.renders_failed,
        stats.below_bar
    );

    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║              Markgen Demo Complete                           ║
║                                                              ║
║  - 8 strategies selected by lexical heuristics               ║
║  - 31-field genomes derived from keyed SHA-256 digests       ║
║  - Collision registry kept every digest unique               ║
║  - Five-metric scoring curated the ranked shortlist          ║
║                                                              ║
║  Run 'markgen generate <brand>' to explore your own marks.   ║
╚══════════════════════════════════════════════════════════════╝
"#
    );
}
