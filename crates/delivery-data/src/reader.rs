//! CSV ingestion for the delivery order export.
//!
//! Reads the delimited export with its fixed, known column set into
//! [`RawOrderRow`] values for the normalizer. The file is read exactly once
//! per pipeline run and is never written to.

use std::fs::File;
use std::path::Path;

use delivery_core::error::{PipelineError, Result};
use delivery_core::models::RawOrderRow;
use tracing::debug;

/// Read every row of the export at `path`.
///
/// Field values are taken verbatim, with no trimming and no type repair,
/// so the normalizer sees every representation defect intact (the
/// `"NaN "` sentinel's trailing space included). Any row that cannot be
/// deserialized against the known column set is a fatal ingestion error:
/// the upstream contract guarantees the column layout, so a mismatch
/// means the file itself is unusable.
pub fn read_raw_rows(path: &Path) -> Result<Vec<RawOrderRow>> {
    let file = File::open(path).map_err(|source| PipelineError::DatasetRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let rows: Vec<RawOrderRow> = reader.deserialize().collect::<csv::Result<_>>()?;

    debug!("Read {} raw rows from {}", rows.len(), path.display());
    Ok(rows)
}
