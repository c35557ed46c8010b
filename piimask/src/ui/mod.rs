//! Terminal rendering: status messages, summary tables and diffs.

pub mod diff_viewer;
pub mod output_format;
pub mod redaction_summary;
