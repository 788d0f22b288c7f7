//! # Steel Frame Optimizer CLI
//!
//! Prompts for a rectangular bay, runs the beam-count search and prints the
//! lightest framing found. An optional first argument names a section
//! catalog CSV; without it the built-in W-shapes are used.
//!
//! Set `RUST_LOG=debug` to see every trial, `RUST_LOG=trace` for every
//! rejected candidate.

use std::io::{self, BufRead, Write};

use log::{info, warn};
use serde::Serialize;

use frame_core::catalog::{builtin_catalog, SectionCatalog};
use frame_core::design::SelectedSection;
use frame_core::frame::{frame_optimizer, BayLayout, FrameInput, FrameOutcome, TrialRecord};
use frame_core::settings::{DesignSettings, DEFAULT_YIELD_KSI};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

/// Everything printed as JSON at the end of a run
#[derive(Serialize)]
struct Report<'a> {
    input: &'a FrameInput,
    outcome: &'a FrameOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout: Option<BayLayout>,
}

fn main() {
    env_logger::init();

    println!("Steel Frame Optimizer");
    println!("=====================");
    println!();

    let loaded;
    let catalog: &SectionCatalog = match std::env::args().nth(1) {
        Some(path) => match SectionCatalog::load_from_csv(&path) {
            Ok(catalog) => {
                if catalog.skipped_rows > 0 {
                    warn!("{} catalog rows were skipped", catalog.skipped_rows);
                }
                loaded = catalog;
                &loaded
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
                std::process::exit(1);
            }
        },
        None => builtin_catalog(),
    };
    info!(
        "using {} sections from {}",
        catalog.len(),
        catalog.source.as_deref().unwrap_or("memory")
    );

    let height_ft = prompt_f64("Enter bay height (ft) [20.0]: ", 20.0);
    let width_ft = prompt_f64("Enter bay width (ft) [30.0]: ", 30.0);
    let dead_psf = prompt_f64("Enter dead load (psf) [50.0]: ", 50.0);
    let live_psf = prompt_f64("Enter live load (psf) [40.0]: ", 40.0);
    let beam_depth = prompt_f64("Enter max beam depth (in, 0 = none) [0]: ", 0.0);
    let girder_depth = prompt_f64("Enter max girder depth (in, 0 = none) [0]: ", 0.0);
    let yield_ksi = prompt_f64(
        &format!("Enter steel yield strength (ksi) [{:.1}]: ", DEFAULT_YIELD_KSI),
        DEFAULT_YIELD_KSI,
    );

    let input = FrameInput::new(height_ft, width_ft, dead_psf, live_psf)
        .with_depth_limits(beam_depth, girder_depth)
        .with_yield(yield_ksi);

    println!();
    println!("Searching {} sections...", catalog.len());
    println!();

    match frame_optimizer(catalog, &input, &DesignSettings::default()) {
        Ok(outcome) => {
            let layout = match &outcome {
                FrameOutcome::Optimized(design) => {
                    let config = &design.configuration;
                    println!("═══════════════════════════════════════");
                    println!("  OPTIMUM FRAMING");
                    println!("═══════════════════════════════════════");
                    println!();
                    println!("Bay:");
                    println!(
                        "  {:.1} ft x {:.1} ft  (girders span {:.1} ft)",
                        input.height_ft, input.width_ft, design.long_span_ft
                    );
                    println!("  D = {:.0} psf, L = {:.0} psf", input.dead_psf, input.live_psf);
                    println!();
                    println!("Members:");
                    println!(
                        "  Interior beams: {} x {}",
                        design.beam_count(),
                        member_line(&config.interior_beam)
                    );
                    println!("  Side beams:     2 x {}", member_line(&config.side_beam));
                    println!("  Girders:        2 x {}", member_line(&config.girder));
                    println!();

                    let layout = BayLayout::from_design(&input, design);
                    println!("Interior beams at (ft): {}", format_ticks(&layout.interior_ticks_ft));
                    println!();
                    print_trials(&design.trials);
                    println!();
                    println!("═══════════════════════════════════════");
                    println!("  TOTAL STEEL WEIGHT: {:.0} lb", design.total_weight_lb());
                    println!("═══════════════════════════════════════");
                    Some(layout)
                }
                FrameOutcome::Infeasible { reason, trials } => {
                    println!("{}", reason);
                    println!();
                    print_trials(trials);
                    None
                }
            };

            println!();
            println!("JSON Output (for LLM/API use):");
            let report = Report {
                input: &input,
                outcome: &outcome,
                layout,
            };
            if let Ok(json) = serde_json::to_string_pretty(&report) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn member_line(selected: &SelectedSection) -> String {
    format!(
        "{:<8} {} (flexure {:.2}, shear {:.2})",
        selected.id(),
        selected.mode,
        selected.flexure_unity(),
        selected.shear_unity()
    )
}

fn format_ticks(ticks: &[f64]) -> String {
    ticks
        .iter()
        .map(|t| format!("{:.2}", t))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_trials(trials: &[TrialRecord]) {
    println!("Trials:");
    for trial in trials {
        match &trial.result {
            Ok(weight) => println!("  n = {:>2}: {:.0} lb", trial.beam_count, weight),
            Err(failure) => println!(
                "  n = {:>2}: {} - {}",
                trial.beam_count, failure.member, failure.failure
            ),
        }
    }
}
