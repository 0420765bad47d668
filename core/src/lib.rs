pub mod output;
pub mod parser;
pub mod types;

// Re-export commonly used types at crate root
pub use output::{ListRenderer, OutputFormat};
pub use parser::{ListError, ListParser, ParseError, ParseMode, ParseReport, parse_line};
pub use types::{PackageEntry, PackageList};
