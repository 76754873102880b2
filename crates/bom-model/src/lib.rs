//! BOM data model definitions.
//!
//! Shared types for the ingestion, mapping, merge, and output crates:
//! scalar cell values, ordered records, the canonical schema with its alias
//! table, identity keys, and merge statistics.

pub mod error;
pub mod identity;
pub mod options;
pub mod record;
pub mod schema;
pub mod source;
pub mod stats;
pub mod value;

pub use error::{ModelError, Result};
pub use identity::IdentityKey;
pub use options::{MergeOptions, OutputFormat};
pub use record::{CanonicalRecord, CondensedRecord, RawRecord, Record};
pub use schema::{CanonicalField, CanonicalSchema, DEFAULT_ALIASES, IDENTITY_FIELD};
pub use source::SourceFile;
pub use stats::MergeStats;
pub use value::CellValue;
