//! Pie and bar charts of an emission breakdown.

use anyhow::Result;
use carbonprint_schemas::{category::Category, result::EmissionBreakdown};
use plotters::element::Pie;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::warn;

const CATEGORY_COLORS: [RGBColor; Category::COUNT] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
];

/// Paths of the charts written for one result.
#[derive(Debug, Clone, Default)]
pub struct ChartFiles {
    pub pie: Option<PathBuf>,
    pub bar: Option<PathBuf>,
}

/// Each category's share of the total, in percent. All zeros when the total is zero.
pub fn shares_percent(breakdown: &EmissionBreakdown) -> [f64; Category::COUNT] {
    let total = breakdown.total();
    if total <= 0.0 {
        return [0.0; Category::COUNT];
    }
    breakdown.values().map(|v| v / total * 100.0)
}

fn bar_axis_max(breakdown: &EmissionBreakdown) -> f64 {
    let max = breakdown.values().iter().cloned().fold(0.0, f64::max);
    if max > 0.0 {
        max * 1.2
    } else {
        1.0
    }
}

/// Writes both charts into `output_dir`. A chart that cannot be drawn is skipped with a warning.
pub fn generate_all_plots(output_dir: &Path, breakdown: &EmissionBreakdown) -> ChartFiles {
    println!("[Plotting] Generating charts from the emission breakdown...");

    let pie_path = output_dir.join("pie_chart.png");
    let pie = match plot_breakdown_pie(&pie_path, breakdown) {
        Ok(true) => Some(pie_path),
        Ok(false) => None,
        Err(e) => {
            warn!(error = %e, "failed to draw pie chart");
            None
        }
    };

    let bar_path = output_dir.join("bar_chart.png");
    let bar = match plot_breakdown_bars(&bar_path, breakdown) {
        Ok(()) => Some(bar_path),
        Err(e) => {
            warn!(error = %e, "failed to draw bar chart");
            None
        }
    };

    ChartFiles { pie, bar }
}

/// Draws the share of each category. Returns `false` when there is nothing to draw.
fn plot_breakdown_pie(path: &Path, breakdown: &EmissionBreakdown) -> Result<bool> {
    if breakdown.total() <= 0.0 {
        println!("[Plotting] Warning: total emissions are zero, skipping pie chart.");
        return Ok(false);
    }

    let root = BitMapBackend::new(path, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled("Emissions by Category", ("sans-serif", 40))?;

    let dims = root.dim_in_pixel();
    let center = (dims.0 as i32 / 2, dims.1 as i32 / 2);
    let radius = f64::from(dims.0.min(dims.1)) * 0.35;

    // Zero slices would only stack their labels on top of each other.
    let mut sizes = Vec::new();
    let mut colors = Vec::new();
    let mut labels = Vec::new();
    for (category, tonnes) in breakdown.iter() {
        if tonnes > 0.0 {
            sizes.push(tonnes);
            colors.push(CATEGORY_COLORS[category.index()]);
            labels.push(category.label());
        }
    }

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(90.0);
    pie.label_style(("sans-serif", 20).into_font().color(&BLACK));
    pie.percentages(("sans-serif", radius * 0.08).into_font().color(&WHITE));
    root.draw(&pie)?;

    root.present()?;
    Ok(true)
}

fn plot_breakdown_bars(path: &Path, breakdown: &EmissionBreakdown) -> Result<()> {
    let root = BitMapBackend::new(path, (1024, 640)).into_drawing_area();
    root.fill(&WHITE)?;

    let last_index = (Category::COUNT - 1) as u32;
    let mut chart = ChartBuilder::on(&root)
        .caption("Annual Emissions by Category", ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..last_index).into_segmented(), 0f64..bar_axis_max(breakdown))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(Category::COUNT)
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) => Category::ALL
                .get(*i as usize)
                .map(|c| c.label().to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .x_desc("Category")
        .y_desc("Tonnes CO2")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(RGBColor(0, 0, 139).filled())
            .margin(12)
            .data(breakdown.iter().map(|(c, tonnes)| (c.index() as u32, tonnes))),
    )?;

    root.present()?;
    Ok(())
}
