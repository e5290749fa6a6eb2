//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;
mod types;


pub use cli::ExporterArgs;
pub use parsers::parse_tag;
pub use types::OutputFormat;
