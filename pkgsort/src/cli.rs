use clap::{Parser, ValueEnum};
use pkgsort_core::{OutputFormat, ParseMode};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Print a package/version list sorted case-insensitively by name
#[derive(Parser, Debug, Clone)]
#[command(name = "pkgsort")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Package list: a header line, then one `name version` per line
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Report unparseable lines and keep going instead of stopping
    #[arg(long)]
    pub lenient: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "tsv")]
    pub format: FormatArg,

    /// Never use colors
    #[arg(long)]
    pub no_color: bool,

    /// Log parsing details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum FormatArg {
    /// name<TAB>version, one per line
    #[default]
    Tsv,
    /// Padded name column
    Aligned,
    /// Entries and rejected lines as one JSON object
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Tsv => OutputFormat::Tsv,
            FormatArg::Aligned => OutputFormat::Aligned,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Args {
    pub fn parse_mode(&self) -> ParseMode {
        if self.lenient {
            ParseMode::Lenient
        } else {
            ParseMode::Strict
        }
    }

    /// Colors only when stdout is a terminal and nothing opted out
    pub fn show_colors(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["pkgsort", "list.txt"]).unwrap();
        assert_eq!(args.file, PathBuf::from("list.txt"));
        assert_eq!(args.parse_mode(), ParseMode::Strict);
        assert_eq!(OutputFormat::from(args.format), OutputFormat::Tsv);
        assert!(!args.verbose);
    }

    #[test]
    fn test_flags() {
        let args =
            Args::try_parse_from(["pkgsort", "--lenient", "--format", "aligned", "-v", "list.txt"])
                .unwrap();
        assert_eq!(args.parse_mode(), ParseMode::Lenient);
        assert_eq!(OutputFormat::from(args.format), OutputFormat::Aligned);
        assert!(args.verbose);
    }

    #[test]
    fn test_file_is_required() {
        let err = Args::try_parse_from(["pkgsort"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_no_color_disables_colors() {
        let args = Args::try_parse_from(["pkgsort", "--no-color", "list.txt"]).unwrap();
        assert!(!args.show_colors());
    }
}
