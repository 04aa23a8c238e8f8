use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

use tsp_with_aco::experiment::Experiment;
use tsp_with_aco::experiment_config::ExperimentConfig;
use tsp_with_aco::graph::export::{Dot, Export};

const DEFAULT_PATTERN: &str = "experiments/*.yaml";

fn main() -> Result<(), Box<dyn Error>> {
    let pattern = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PATTERN.to_string());

    for entry in glob(&pattern)? {
        let path = entry?;
        if let Err(err) = run_file(&path) {
            eprintln!("{}: {}", path.display(), err);
        }
    }

    Ok(())
}

fn run_file(path: &Path) -> Result<(), Box<dyn Error>> {
    let config = ExperimentConfig::from_file(path)?;
    if config.finished() {
        println!("{}: already finished, skipping", path.display());
        return Ok(());
    }

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar().template("{msg} [{elapsed_precise}] {bar:40} {pos}/{len}"),
    );
    progress.set_message(&path.display().to_string());

    let result = match Experiment::run_config(&config, path.with_extension("csv"), &progress)? {
        Some(result) => result,
        None => return Ok(()),
    };
    progress.finish_with_message(&format!("{}: done", path.display()));

    // dot identifiers may only contain alphanumerics and underscores
    let name: String = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("tour")
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    fs::write(
        path.with_extension("dot"),
        Dot::from_weighted_graph_with_tour(&result.graph, &result.best.tour, &name),
    )?;

    println!(
        "best tour: {} with cost {} (greedy: {})",
        result.best.tour,
        result.best.cost.into_inner(),
        result.greedy_cost.into_inner()
    );

    Ok(())
}
