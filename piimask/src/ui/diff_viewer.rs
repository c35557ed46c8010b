// piimask/src/ui/diff_viewer.rs
//! Unified diff between the original and the masked text.

use std::io::Write;

use anyhow::Result;
use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;

/// Writes a line-oriented diff highlighting what was removed (red) and what
/// replaced it (green).
pub fn print_diff<W: Write>(original: &str, sanitized: &str, writer: &mut W, supports_color: bool) -> Result<()> {
    let patch = create_patch(original, sanitized);

    let header = "--- Diff Analysis ---";
    if supports_color {
        writeln!(writer, "{}", header.yellow().bold())?;
    } else {
        writeln!(writer, "{}", header)?;
    }

    let mut changed = false;
    for hunk in patch.hunks() {
        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => {
                    changed = true;
                    let s = s.trim_end_matches('\n');
                    if supports_color {
                        writeln!(writer, "{}", format!("- {}", s).red())?;
                    } else {
                        writeln!(writer, "- {}", s)?;
                    }
                }
                DiffLine::Insert(s) => {
                    changed = true;
                    let s = s.trim_end_matches('\n');
                    if supports_color {
                        writeln!(writer, "{}", format!("+ {}", s).green())?;
                    } else {
                        writeln!(writer, "+ {}", s)?;
                    }
                }
                DiffLine::Context(s) => {
                    writeln!(writer, "  {}", s.trim_end_matches('\n'))?;
                }
            }
        }
    }

    if !changed {
        writeln!(writer, "No changes detected.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_shows_removed_and_added_lines() {
        let mut out = Vec::new();
        print_diff("id 12345678\nok\n", "id ****5678\nok\n", &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("- id 12345678"));
        assert!(text.contains("+ id ****5678"));
        assert!(text.contains("  ok"));
    }

    #[test]
    fn identical_input_reports_no_changes() {
        let mut out = Vec::new();
        print_diff("same\n", "same\n", &mut out, false).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("No changes detected.\n"));
    }
}
