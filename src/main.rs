//! Config-driven edge detection tool: load a photograph, run the requested
//! operators, print per-operator statistics, export results as PNG files
//! plus a JSON metrics summary.

use std::env;
use std::fs;
use std::path::Path;

use serde::Serialize;

use edge_detector::config::{load_config, EdgeToolConfig};
use edge_detector::image::export_to_dir;
use edge_detector::{EdgeMetrics, ProcessingSession};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let bytes = fs::read(&config.input)
        .map_err(|e| format!("Failed to read {}: {e}", config.input.display()))?;
    let mut session = ProcessingSession::new();
    session
        .load_image(&bytes)
        .map_err(|e| format!("Failed to load {}: {e}", config.input.display()))?;

    let summary = run_operators(&mut session, &config);
    for entry in &summary.operators {
        match &entry.metrics {
            Some(m) => println!(
                "{:<10} edge pixels: {:>8}  density: {:.2}%",
                entry.name, m.edge_pixel_count, m.density
            ),
            None => println!(
                "{:<10} failed: {}",
                entry.name,
                entry.error.as_deref().unwrap_or("unknown")
            ),
        }
    }

    let base_name = config
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let results = session
        .export_results()
        .map_err(|e| format!("Nothing to export: {e}"))?;
    let written = export_to_dir(&results, &config.output_dir, base_name);
    let mut saved = 0usize;
    for (path, outcome) in &written {
        match outcome {
            Ok(()) => saved += 1,
            Err(e) => eprintln!("Warning: {}: {e}", path.display()),
        }
    }

    write_metrics_json(&config, &summary)?;
    println!(
        "Saved {saved} of {} images to {}",
        written.len(),
        config.output_dir.display()
    );
    Ok(())
}

fn run_operators(session: &mut ProcessingSession, config: &EdgeToolConfig) -> RunSummary {
    let operators = config
        .operators
        .iter()
        .map(|name| {
            let params = (name.as_str() == "Canny").then_some(config.canny);
            match session.run_operator(name, params) {
                Ok(outcome) => OperatorReport {
                    name: name.clone(),
                    metrics: Some(outcome.metrics),
                    error: None,
                },
                Err(e) => OperatorReport {
                    name: name.clone(),
                    metrics: None,
                    error: Some(e.to_string()),
                },
            }
        })
        .collect();
    RunSummary { operators }
}

fn write_metrics_json(config: &EdgeToolConfig, summary: &RunSummary) -> Result<(), String> {
    let path = config.output_dir.join("metrics.json");
    let json = serde_json::to_string_pretty(summary)
        .map_err(|e| format!("Failed to serialize metrics: {e}"))?;
    fs::create_dir_all(&config.output_dir)
        .map_err(|e| format!("Failed to create {}: {e}", config.output_dir.display()))?;
    fs::write(&path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

fn usage() -> String {
    "Usage: edge-detector <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunSummary {
    operators: Vec<OperatorReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OperatorReport {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<EdgeMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}
