pub mod cli;
pub mod display;
pub mod filter;
pub mod mocks;
pub mod record;

pub use cli::{Cli, Commands, OutputFormat, cli_parse};
pub use filter::{
    Filter, FilterDecodeError, FilterExpression, FilterKind, FilterParseError, HttpMethod,
    RangeModifier, ValueRange, decode_filters, encode_filters, filter_records, matches_all,
};
pub use mocks::demo_records;
pub use record::{RequestRecord, TaskRecord};

use anyhow::Context;
use std::fs;
use std::path::Path;

/// Load a capture file: a JSON array of records
pub fn load_records(path: &Path) -> anyhow::Result<Vec<TaskRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read records file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid records file {}", path.display()))
}

/// Build the filter set from an expression and/or a saved filter file
///
/// An expression filter takes precedence over a saved filter of the same
/// kind; the saved one is dropped rather than ANDed against it.
pub fn build_filters(
    expression: Option<&str>,
    saved: Option<&Path>,
) -> anyhow::Result<Vec<Filter>> {
    let mut filters = match expression {
        Some(expr) => FilterExpression::parse(expr)
            .context("invalid filter expression")?
            .to_filters(),
        None => Vec::new(),
    };

    if let Some(path) = saved {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read saved filters {}", path.display()))?;
        let stored = decode_filters(&content)
            .with_context(|| format!("corrupt saved filters {}", path.display()))?;
        for filter in stored {
            if !filters.iter().any(|existing| existing.is_same_kind(&filter)) {
                filters.push(filter);
            }
        }
    }

    Ok(filters)
}

/// Apply the filter set to the records and print the result
pub fn run_filters(
    records: &[TaskRecord],
    filters: &[Filter],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let matched = filter_records(records, filters);
    match format {
        OutputFormat::Text => {
            display::display_active_filters(filters);
            display::display_matches(&matched, records.len());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&matched)
                .context("failed to serialize matching records")?;
            println!("{json}");
        }
    }
    Ok(())
}
