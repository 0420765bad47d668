use crate::parser::{ParseError, ParseReport};
use crate::types::PackageEntry;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

/// How sorted entries are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `name<TAB>version`
    #[default]
    Tsv,
    /// Name column padded to the longest name
    Aligned,
    /// One JSON object holding entries and rejected lines
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    entries: &'a [PackageEntry],
    errors: &'a [ParseError],
}

/// Renders a parse report: rejected lines first, then the sorted entries
pub struct ListRenderer {
    format: OutputFormat,
    show_colors: bool,
}

impl ListRenderer {
    pub fn new(format: OutputFormat, show_colors: bool) -> Self {
        Self {
            format,
            show_colors,
        }
    }

    pub fn render<W: Write>(&self, report: ParseReport, out: &mut W) -> io::Result<()> {
        let ParseReport {
            entries, errors, ..
        } = report;
        let entries = entries.sorted();

        if self.format == OutputFormat::Json {
            let json = JsonReport {
                entries: &entries,
                errors: &errors,
            };
            serde_json::to_writer_pretty(&mut *out, &json)?;
            writeln!(out)?;
            return Ok(());
        }

        for error in &errors {
            writeln!(out, "{} {}", self.error_label(), error.line())?;
        }

        match self.format {
            OutputFormat::Aligned => Self::write_aligned(&entries, out),
            _ => Self::write_tsv(&entries, out),
        }
    }

    fn write_tsv<W: Write>(entries: &[PackageEntry], out: &mut W) -> io::Result<()> {
        for entry in entries {
            writeln!(out, "{}\t{}", entry.name, entry.version)?;
        }
        Ok(())
    }

    fn write_aligned<W: Write>(entries: &[PackageEntry], out: &mut W) -> io::Result<()> {
        // Calculate column width
        let name_width = entries
            .iter()
            .map(|e| e.name.chars().count())
            .max()
            .unwrap_or(0);

        for entry in entries {
            writeln!(
                out,
                "{:<name_w$}  {}",
                entry.name,
                entry.version,
                name_w = name_width,
            )?;
        }
        Ok(())
    }

    /// The `ERROR:` label, red when colors are enabled
    pub fn error_label(&self) -> String {
        if self.show_colors {
            "ERROR:".red().bold().to_string()
        } else {
            "ERROR:".to_string()
        }
    }
}
