pub mod cli;
pub mod logging;

use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

use cli::Args;

// Re-export core types for convenience
pub use pkgsort_core::{
    ListError, ListParser, ListRenderer, OutputFormat, PackageEntry, PackageList, ParseError,
    ParseMode, ParseReport,
};

/// How a run ended once output has been written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every line after the header was read
    Complete,
    /// Strict parsing stopped at an unparseable line
    Halted,
}

impl RunOutcome {
    /// Process exit code for this outcome
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Complete => 0,
            Self::Halted => 1,
        }
    }
}

/// Parse the file named in `args` and write the sorted listing to `out`
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<RunOutcome> {
    let parser = ListParser::new(args.parse_mode());
    let report = parser
        .parse_file(&args.file)
        .with_context(|| format!("Failed to load package list: {}", args.file.display()))?;

    let outcome = if report.halted {
        RunOutcome::Halted
    } else {
        RunOutcome::Complete
    };
    if !report.is_clean() {
        for error in &report.errors {
            debug!(line_number = error.line_number(), line = %error.line(), "rejected line");
        }
    }
    debug!(?outcome, mode = ?parser.mode(), "rendering");

    let renderer = ListRenderer::new(args.format.into(), args.show_colors());
    renderer
        .render(report, out)
        .context("Failed to write output")?;

    Ok(outcome)
}
