use crate::{
    config::RunConfig,
    plotting,
    report,
    session::{ResultSlot, Snapshot},
    submission::{self, SubmissionOutcome},
    Cli,
};
use anyhow::{Context, Result};
use carbonprint_core::{locale, CalculatorBuilder};
use carbonprint_schemas::language::Language;
use chrono::{Datelike, Local};
use std::{fs, path::PathBuf};
use tracing::warn;

/// Computes the footprint once, stores it, then renders every output from the stored snapshot.
pub fn run(cli: &Cli, config: RunConfig) -> Result<()> {
    let mut builder = CalculatorBuilder::new()
        .with_region(config.region)
        .with_language(cli.language);
    if let Some(factors) = config.factors {
        builder = builder.with_factors(factors);
    }
    let calculator = builder.build().context("Failed to configure the calculator")?;

    let slot = ResultSlot::new();
    let result = calculator
        .calculate(&config.lifestyle)
        .context("Calculation failed")?;
    let snapshot = slot.store(result, config.user, Local::now());
    let country = snapshot
        .user
        .as_ref()
        .map(|u| u.country.clone())
        .unwrap_or_else(|| calculator.region().display_name().to_string());

    print_summary_report(&snapshot, cli.language);

    if !cli.no_report {
        let output_dir = cli.output_dir.clone().unwrap_or_else(default_output_dir);
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

        let charts = plotting::generate_all_plots(&output_dir, &snapshot.result.breakdown);
        match report::write_bundle(&output_dir, &snapshot, &country, &charts) {
            Ok(files) => println!("\nReport saved to '{}'", files.document.display()),
            Err(e) => {
                warn!(error = %format!("{e:#}"), "report export failed");
                println!("\nWarning: the report could not be written: {e:#}");
            }
        }
    }

    if let Some(url) = cli.submit_url.as_deref() {
        match submission::submit(url, &snapshot) {
            SubmissionOutcome::Submitted => println!("Data successfully submitted."),
            SubmissionOutcome::Skipped => {
                println!("Warning: fill in your name and age so the data can be submitted.")
            }
            SubmissionOutcome::Failed(reason) => {
                println!("Warning: failed to submit data ({reason}).")
            }
        }
    }

    Ok(())
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(format!(
        "./data/runs/carbon_{}",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

fn print_summary_report(snapshot: &Snapshot, language: Language) {
    let result = &snapshot.result;
    let h = locale::headings(language);

    println!("\n{}", locale::about(language));
    println!("\n--- [{}] ---", h.title);
    println!("========================================");
    if let Some(user) = &snapshot.user {
        println!("{}: {} ({})", h.user_info, user.name, user.age);
    }
    println!(
        "{}: {:.2} {}",
        h.total, result.total_tonnes, h.tonnes_per_year
    );
    println!(
        "{}: {}",
        h.rating,
        locale::rating_label(result.rating, language)
    );

    println!("\n{}:", h.breakdown);
    for (category, tonnes) in result.breakdown.iter() {
        println!("  - {:<15} {:>8.2}", category.label(), tonnes);
    }

    println!("\n{}: {}", h.offset, result.trees_needed);
    println!("  ({})", h.tree_absorption_note);

    println!("\n{}: {}", h.focus, result.dominant_category);
    for tip in &result.recommendations {
        println!("  - {}", tip);
    }

    println!(
        "\n{}: {}",
        h.tip_of_the_day,
        locale::eco_tip(language, snapshot.computed_at.ordinal())
    );
    println!("========================================");
    println!("{}", h.disclaimer);
}
