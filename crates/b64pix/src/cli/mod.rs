//! Command implementations for the b64pix CLI.

pub mod check;
pub mod config;
pub mod decode;
pub mod encode;
pub mod interactive;

use b64pix_core::{PipelineError, Severity};
use console::Style;

/// Print a pipeline failure to stderr styled by severity: yellow `⚠` for
/// warnings (the oversized-file case), red `✗` for blocking errors.
pub fn report_pipeline_error(err: &PipelineError) {
    match err.severity() {
        Severity::Warning => {
            let warn = Style::new().for_stderr().yellow();
            eprintln!("  {} {}", warn.apply_to("⚠"), err);
        }
        Severity::Error => {
            let fail = Style::new().for_stderr().red();
            eprintln!("  {} {}", fail.apply_to("✗"), err);
        }
    }
}
