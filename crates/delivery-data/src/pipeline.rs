//! Top-level ingestion pipeline.
//!
//! Orchestrates the read → normalize sequence and returns the clean
//! record set together with run metadata, ready for filtering and
//! aggregation. Single-threaded and synchronous; the whole dataset is
//! held in memory for the duration of a run.

use std::path::Path;

use delivery_core::error::Result;
use delivery_core::models::OrderRecord;
use tracing::info;

use crate::normalizer;
use crate::reader;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the clean record set.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PipelineMetadata {
    /// Raw rows read from the dataset file.
    pub rows_read: usize,
    /// Rows dropped for a missing required categorical column.
    pub rows_dropped: usize,
    /// Retained rows in which a numeric field coerced to null.
    pub rows_with_coerced_fields: usize,
    /// Records in the clean set.
    pub records_cleaned: usize,
    /// Wall-clock seconds spent reading the CSV.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent normalizing.
    pub normalize_time_seconds: f64,
}

/// The complete output of [`run_pipeline`].
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// The immutable clean record set for this run.
    pub records: Vec<OrderRecord>,
    /// Metadata about this run.
    pub metadata: PipelineMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full ingestion pipeline against the dataset at `path`.
///
/// 1. Read the raw CSV export.
/// 2. Normalize it into the clean record set.
///
/// Fatal representation defects (unreadable file, malformed CSV, bad
/// order date, bad time-taken token) abort the run; no partial record set
/// is ever returned.
pub fn run_pipeline(path: &Path) -> Result<PipelineResult> {
    let load_start = std::time::Instant::now();
    let raw_rows = reader::read_raw_rows(path)?;
    let load_time = load_start.elapsed().as_secs_f64();

    let normalize_start = std::time::Instant::now();
    let clean = normalizer::normalize(&raw_rows)?;
    let normalize_time = normalize_start.elapsed().as_secs_f64();

    let metadata = PipelineMetadata {
        rows_read: clean.stats.rows_read,
        rows_dropped: clean.stats.rows_dropped,
        rows_with_coerced_fields: clean.stats.rows_with_coerced_fields,
        records_cleaned: clean.records.len(),
        load_time_seconds: load_time,
        normalize_time_seconds: normalize_time,
    };

    info!(
        "Pipeline complete: {} clean records from {} raw rows",
        metadata.records_cleaned, metadata.rows_read
    );

    Ok(PipelineResult {
        records: clean.records,
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
