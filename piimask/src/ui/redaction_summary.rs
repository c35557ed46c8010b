// piimask/src/ui/redaction_summary.rs
//! Renders a [`RedactionReport`] as a table.

use std::io::Write;

use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use owo_colors::OwoColorize;

use piimask_core::RedactionReport;

/// Masked samples shown per category before the list is elided.
pub const MAX_SAMPLES: usize = 3;

/// Builds the summary table. Colors are applied only when `supports_color` is set.
pub fn build_summary_table(report: &RedactionReport, supports_color: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic);
    if !supports_color {
        table.force_no_tty();
    }
    table.set_header(vec!["Category", "Description", "Masked", "Rejected", "Samples"]);

    for item in &report.items {
        let mut samples = item.masked_samples.iter().take(MAX_SAMPLES).cloned().collect::<Vec<_>>().join(", ");
        if item.masked_samples.len() > MAX_SAMPLES {
            samples.push_str(&format!(", ... (+{})", item.masked_samples.len() - MAX_SAMPLES));
        }
        let mut name = Cell::new(item.category.name());
        let mut count = Cell::new(item.occurrences);
        if supports_color {
            name = name.fg(Color::Cyan);
            count = count.fg(Color::Yellow);
        }
        table.add_row(vec![
            name,
            Cell::new(item.category.label()),
            count,
            Cell::new(item.rejected),
            Cell::new(samples),
        ]);
    }
    table
}

/// Prints the redaction summary, or a one-line notice when nothing matched.
pub fn print_summary<W: Write>(report: &RedactionReport, writer: &mut W, supports_color: bool) -> Result<()> {
    if report.items.is_empty() {
        writeln!(writer, "No sensitive data found.")?;
        return Ok(());
    }

    let header = format!(
        "Redaction Summary: {} masked, {} rejected by category validator",
        report.total_masked(),
        report.total_rejected()
    );
    if supports_color {
        writeln!(writer, "{}", header.bold())?;
    } else {
        writeln!(writer, "{}", header)?;
    }
    writeln!(writer, "{}", build_summary_table(report, supports_color))?;
    Ok(())
}
