use crate::types::{PackageEntry, PackageList};
use regex::Regex;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, info};

/// `<ws><name><ws><version>`: name is word/dot characters, version is
/// digits, dots and dashes. Anything after the version is ignored.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([\w.]+)\s+([\d.-]+)").expect("static regex must compile")
});

/// A line that could not be turned into a package entry
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParseError {
    #[error("line {line_number}: cannot parse '{line}'")]
    UnparseableLine {
        /// Line number in the input file (1-indexed, header is line 1)
        line_number: usize,
        /// Raw line text without its terminator
        line: String,
    },
}

impl ParseError {
    /// The raw text of the offending line
    pub fn line(&self) -> &str {
        match self {
            Self::UnparseableLine { line, .. } => line,
        }
    }

    pub fn line_number(&self) -> usize {
        match self {
            Self::UnparseableLine { line_number, .. } => *line_number,
        }
    }
}

/// Errors that stop a package list from being read at all
#[derive(Error, Debug)]
pub enum ListError {
    #[error("Failed to open package list {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read line {line_number}: {source}")]
    Read {
        line_number: usize,
        #[source]
        source: io::Error,
    },
}

/// Parse a single package line
pub fn parse_line(line: &str, line_number: usize) -> Result<PackageEntry, ParseError> {
    LINE_PATTERN
        .captures(line)
        .map(|caps| PackageEntry::new(&caps[1], &caps[2]))
        .ok_or_else(|| ParseError::UnparseableLine {
            line_number,
            line: line.to_string(),
        })
}

/// Strip the line terminator (`\n` or `\r\n`) and decode as UTF-8.
/// Undecodable bytes make the line unparseable, not the whole list.
fn decode_line(raw: &[u8], line_number: usize) -> Result<&str, ParseError> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    std::str::from_utf8(raw).map_err(|_| ParseError::UnparseableLine {
        line_number,
        line: String::from_utf8_lossy(raw).into_owned(),
    })
}

/// What to do when a line does not match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Stop at the first unparseable line
    #[default]
    Strict,
    /// Record unparseable lines and keep going
    Lenient,
}

/// Outcome of scanning one package list
#[derive(Debug, Default)]
pub struct ParseReport {
    pub entries: PackageList,
    /// Rejected lines in input order (at most one in strict mode)
    pub errors: Vec<ParseError>,
    /// True when scanning stopped before the end of the input
    pub halted: bool,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Reads a header line followed by `name version` lines
pub struct ListParser {
    mode: ParseMode,
}

impl ListParser {
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Open `path` and parse it. The file is closed before this returns.
    pub fn parse_file(&self, path: &Path) -> Result<ParseReport, ListError> {
        let file = File::open(path).map_err(|source| ListError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "reading package list");
        self.parse_reader(BufReader::new(file))
    }

    /// Parse a package list from any buffered reader
    pub fn parse_reader<R: BufRead>(&self, mut reader: R) -> Result<ParseReport, ListError> {
        let mut report = ParseReport::default();

        // The header is dropped as raw bytes so its content never matters
        let mut header = Vec::new();
        reader
            .read_until(b'\n', &mut header)
            .map_err(|source| ListError::Read {
                line_number: 1,
                source,
            })?;

        let mut buf = Vec::new();
        let mut line_number = 1;
        loop {
            buf.clear();
            line_number += 1;
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| ListError::Read {
                    line_number,
                    source,
                })?;
            if read == 0 {
                break;
            }

            match decode_line(&buf, line_number).and_then(|line| parse_line(line, line_number)) {
                Ok(entry) => {
                    debug!(line_number, name = %entry.name, version = %entry.version, "parsed entry");
                    if let Some(previous) = report.entries.insert(entry) {
                        debug!(line_number, %previous, "replaced earlier version");
                    }
                }
                Err(err) => {
                    debug!(line_number, line = %err.line(), "unparseable line");
                    report.errors.push(err);
                    if self.mode == ParseMode::Strict {
                        report.halted = true;
                        break;
                    }
                }
            }
        }

        info!(
            entries = report.entries.len(),
            errors = report.errors.len(),
            halted = report.halted,
            "package list scanned"
        );

        Ok(report)
    }
}

impl Default for ListParser {
    fn default() -> Self {
        Self::new(ParseMode::default())
    }
}
