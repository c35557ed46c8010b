// piimask/src/ui/output_format.rs
//! Formatting for the short status messages printed to stderr.

use std::io::Write;

use anyhow::Result;
use owo_colors::OwoColorize;

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.cyan())?;
    } else {
        writeln!(writer, "{}", msg)?;
    }
    Ok(())
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Warning:".yellow().bold(), msg.yellow())?;
    } else {
        writeln!(writer, "Warning: {}", msg)?;
    }
    Ok(())
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), msg.red())?;
    } else {
        writeln!(writer, "Error: {}", msg)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_messages_have_no_escape_codes() {
        let mut out = Vec::new();
        print_warn_message(&mut out, "threshold exceeded", false).unwrap();
        print_info_message(&mut out, "done", false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Warning: threshold exceeded\ndone\n");
    }

    #[test]
    fn colored_messages_keep_text() {
        let mut out = Vec::new();
        print_error_message(&mut out, "boom", true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("boom"));
    }
}
