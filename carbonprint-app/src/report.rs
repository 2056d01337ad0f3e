//! Assembles the downloadable report and its companion export files.

use crate::{
    plotting::{self, ChartFiles},
    session::Snapshot,
};
use anyhow::{Context, Result};
use carbonprint_core::locale;
use carbonprint_schemas::user::UserProfile;
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

#[derive(Debug, Serialize)]
struct BreakdownRow {
    category: &'static str,
    tonnes: f64,
    share_percent: f64,
}

/// Files written for one report.
#[derive(Debug, Clone)]
pub struct ReportFiles {
    pub document: PathBuf,
    pub csv: PathBuf,
    pub json: PathBuf,
}

/// Report file name derived from the user's name, reduced to filesystem-safe characters.
pub fn report_file_name(user: Option<&UserProfile>) -> String {
    let slug: String = user
        .map(|u| u.name.trim())
        .unwrap_or_default()
        .chars()
        .filter_map(|c| match c {
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' => Some(c),
            ' ' => Some('_'),
            _ => None,
        })
        .collect();
    if slug.is_empty() {
        "carbon_report.md".to_string()
    } else {
        format!("carbon_report_{}.md", slug)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Renders the report document into a byte buffer.
///
/// `photo` and chart paths are referenced by file name, so the document must sit
/// next to them.
pub fn render_document(
    snapshot: &Snapshot,
    country: &str,
    photo: Option<&Path>,
    charts: &ChartFiles,
) -> Vec<u8> {
    let result = &snapshot.result;
    let language = result.language;
    let h = locale::headings(language);
    let mut doc = String::new();

    doc.push_str(&format!("# {}\n\n", h.title));
    doc.push_str(&format!("_{}_\n\n", snapshot.computed_at.format("%Y-%m-%d %H:%M")));

    doc.push_str(&format!("## {}\n\n", h.user_info));
    match &snapshot.user {
        Some(user) => {
            doc.push_str(&format!("- {}: {}\n", h.name, user.name));
            doc.push_str(&format!("- {}: {}\n", h.age, user.age));
        }
        None => doc.push_str(&format!("- {}: -\n", h.name)),
    }
    doc.push_str(&format!("- {}: {}\n\n", h.country, country));
    if let Some(photo) = photo {
        doc.push_str(&format!("![photo]({})\n\n", file_name(photo)));
    }

    doc.push_str(&format!("## {}\n\n", h.total));
    doc.push_str(&format!("{:.2} {}\n\n", result.total_tonnes, h.tonnes_per_year));

    doc.push_str(&format!("## {}\n\n", h.rating));
    doc.push_str(&format!("{}\n\n", locale::rating_label(result.rating, language)));

    doc.push_str(&format!("## {}\n\n", h.breakdown));
    doc.push_str(&format!(
        "| {} | {} | {} |\n",
        h.category_column, h.tonnes_column, h.share_column
    ));
    doc.push_str("|----------|-----------:|------:|\n");
    let shares = plotting::shares_percent(&result.breakdown);
    for (category, tonnes) in result.breakdown.iter() {
        doc.push_str(&format!(
            "| {} | {:.2} | {:.1}% |\n",
            category,
            tonnes,
            shares[category.index()]
        ));
    }
    doc.push('\n');

    doc.push_str(&format!("## {}\n\n", h.offset));
    doc.push_str(&format!("{}\n\n", result.trees_needed));
    doc.push_str(&format!("_{}_\n\n", h.tree_absorption_note));

    doc.push_str(&format!("## {}: {}\n\n", h.focus, result.dominant_category));
    for tip in &result.recommendations {
        doc.push_str(&format!("- {}\n", tip));
    }
    doc.push('\n');

    if charts.pie.is_some() || charts.bar.is_some() {
        doc.push_str(&format!("## {}\n\n", h.charts));
        for chart in [&charts.pie, &charts.bar].into_iter().flatten() {
            doc.push_str(&format!("![{}]({})\n\n", file_name(chart), file_name(chart)));
        }
    }

    doc.push_str("---\n\n");
    doc.push_str(&format!("_{}_\n", h.disclaimer));

    doc.into_bytes()
}

fn copy_photo(output_dir: &Path, user: Option<&UserProfile>) -> Option<PathBuf> {
    let source = user?.photo.as_ref()?;
    let extension = source
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "jpg".to_string());
    let target = output_dir.join(format!("photo.{}", extension));
    match fs::copy(source, &target) {
        Ok(_) => Some(target),
        Err(e) => {
            warn!(photo = %source.display(), error = %e, "could not copy photo, leaving it out of the report");
            None
        }
    }
}

pub fn write_breakdown_csv(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {:?}", path))?;
    let shares = plotting::shares_percent(&snapshot.result.breakdown);
    for (category, tonnes) in snapshot.result.breakdown.iter() {
        writer.serialize(BreakdownRow {
            category: category.label(),
            tonnes,
            share_percent: shares[category.index()],
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the report document, the breakdown CSV and the raw result JSON into `output_dir`.
pub fn write_bundle(
    output_dir: &Path,
    snapshot: &Snapshot,
    country: &str,
    charts: &ChartFiles,
) -> Result<ReportFiles> {
    let photo = copy_photo(output_dir, snapshot.user.as_ref());
    let document = output_dir.join(report_file_name(snapshot.user.as_ref()));
    let bytes = render_document(snapshot, country, photo.as_deref(), charts);
    fs::write(&document, bytes).with_context(|| format!("Failed to write {:?}", document))?;

    let csv = output_dir.join("breakdown.csv");
    write_breakdown_csv(&csv, snapshot)?;

    let json = output_dir.join("result.json");
    fs::write(&json, snapshot.result.to_json()?)
        .with_context(|| format!("Failed to write {:?}", json))?;

    info!(document = %document.display(), "report written");
    Ok(ReportFiles { document, csv, json })
}
