//! Console rendering of filter results

use crate::filter::Filter;
use crate::record::{RequestRecord, TaskRecord};
use chrono::SecondsFormat;
use colored::{ColoredString, Colorize};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, ContentArrangement, Table};
use std::collections::BTreeMap;

fn create_styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| Cell::new(h)).collect::<Vec<_>>());
    table
}

/// Print the active filter set, one `Name: token` line per variant
pub fn display_active_filters(filters: &[Filter]) {
    if filters.is_empty() {
        return;
    }
    println!("{}", "ACTIVE FILTERS".bold());
    for filter in filters {
        println!("  {}: {}", filter.name().bright_blue(), filter.token());
    }
    println!();
}

/// Print matching records as a table plus a colored summary line
pub fn display_matches(matched: &[&TaskRecord], total: usize) {
    if !matched.is_empty() {
        let mut table = create_styled_table(&["Time", "Method", "Status", "URL"]);
        for record in matched {
            let time = record
                .created_at
                .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true))
                .unwrap_or_else(|| "-".to_string());
            table.add_row(vec![
                Cell::new(time),
                Cell::new(record.method.as_deref().unwrap_or("-")),
                Cell::new(colorize_status(record.status_code())),
                Cell::new(record.url.as_deref().unwrap_or("-")),
            ]);
        }
        println!("{table}");
    }

    let summary = format!("{} of {} records matched", matched.len(), total);
    if matched.is_empty() {
        println!("{}", summary.yellow());
    } else {
        println!("{}", summary.green());
    }
}

/// Print distinct hosts, methods, and status classes with counts
pub fn display_record_info(records: &[TaskRecord]) {
    let mut hosts: BTreeMap<String, usize> = BTreeMap::new();
    let mut methods: BTreeMap<String, usize> = BTreeMap::new();
    let mut status_classes: BTreeMap<String, usize> = BTreeMap::new();

    for record in records {
        if let Some(host) = record
            .url()
            .and_then(|u| url::Url::parse(u).ok())
            .and_then(|u| u.host_str().map(str::to_string))
        {
            *hosts.entry(host).or_insert(0) += 1;
        }
        if let Some(method) = record.http_method() {
            *methods.entry(method.to_ascii_uppercase()).or_insert(0) += 1;
        }
        *status_classes
            .entry(status_class_label(record.status_code()))
            .or_insert(0) += 1;
    }

    let print_counts = |title: &str, counts: &BTreeMap<String, usize>| {
        println!("\n{}", title.bold());
        let mut table = create_styled_table(&["Value", "Count"]);
        for (value, count) in counts {
            table.add_row(vec![Cell::new(value), Cell::new(count)]);
        }
        println!("{table}");
    };

    println!("{} records", records.len());
    print_counts("HOSTS", &hosts);
    print_counts("METHODS", &methods);
    print_counts("STATUS CLASSES", &status_classes);
}

fn colorize_status(status: i32) -> ColoredString {
    let text = status.to_string();
    match status {
        200..=299 => text.green(),
        300..=399 => text.cyan(),
        400..=499 => text.yellow(),
        500..=599 => text.red(),
        _ => text.bright_black(),
    }
}

fn status_class_label(status: i32) -> String {
    match status {
        100..=199 => "1XX".to_string(),
        200..=299 => "2XX".to_string(),
        300..=399 => "3XX".to_string(),
        400..=499 => "4XX".to_string(),
        500..=599 => "5XX".to_string(),
        _ => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class_labels() {
        assert_eq!(status_class_label(204), "2XX");
        assert_eq!(status_class_label(503), "5XX");
        assert_eq!(status_class_label(0), "none");
    }
}
