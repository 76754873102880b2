//! Export of merged BOM datasets.
//!
//! Writes the merged dataset and its condensed projection as CSV or JSON,
//! plus a `summary.json` describing the run.

pub mod error;
pub mod export;
pub mod summary;
pub mod table;

pub use error::{OutputError, Result};
pub use export::{ExportPaths, export_outcome};
pub use summary::{RunSummary, SourceSummary, write_run_summary};
pub use table::{dataset_columns, write_records_csv, write_records_json};
