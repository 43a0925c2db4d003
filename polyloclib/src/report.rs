//! Report rows built from a registry snapshot.

use serde::{Deserialize, Serialize};

use crate::registry::{LanguageRegistry, LineCounters};

/// One row of the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Language name (or "Total" for the aggregate row)
    pub language: String,
    /// Files counted
    pub files: u64,
    /// Lines containing code
    pub code: u64,
    /// Lines containing comments
    pub comment: u64,
    /// Whitespace-only lines
    pub blank: u64,
    /// Total lines
    pub total: u64,
}

impl ReportRow {
    fn from_counters(language: &str, counters: LineCounters) -> Self {
        Self {
            language: language.to_string(),
            files: counters.files,
            code: counters.code,
            comment: counters.comment,
            blank: counters.blank,
            total: counters.total,
        }
    }
}

/// The full report: per-language rows plus the aggregate total.
///
/// Only languages that counted at least one file appear. Rows are sorted by
/// descending code count; ties keep snapshot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Per-language rows
    pub rows: Vec<ReportRow>,
    /// Aggregate across all rows
    pub total: ReportRow,
}

impl Report {
    /// Build a report from the registry's current counters.
    pub fn from_registry(registry: &LanguageRegistry) -> Self {
        let mut rows: Vec<ReportRow> = registry
            .snapshot()
            .into_iter()
            .map(|(name, counters)| ReportRow::from_counters(name, counters))
            .collect();

        rows.sort_by(|a, b| b.code.cmp(&a.code));

        let mut total = LineCounters::new();
        for (_, counters) in registry.snapshot() {
            total += counters;
        }

        Self {
            rows,
            total: ReportRow::from_counters("Total", total),
        }
    }
}
