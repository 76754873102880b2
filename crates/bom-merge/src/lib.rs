#![deny(unsafe_code)]

//! Merge engine for canonical BOM records.
//!
//! Records sharing an MPN identity are folded into the first record seen for
//! that identity using merge-fill: blank fields are filled from later
//! duplicates, populated fields are never overwritten. Records without an
//! identity are kept as-is after all identified records.
//!
//! # Example
//!
//! ```ignore
//! use bom_merge::{Batch, condense};
//!
//! let mut batch = Batch::new();
//! batch.push_file(read_source_file(path)?);
//! let outcome = batch.normalize(&CanonicalSchema::default())?;
//! let condensed = condense(&outcome.normalized);
//! ```

pub mod batch;
pub mod condense;
pub mod engine;
pub mod error;

pub use batch::Batch;
pub use condense::{DISPLAY_COLUMNS, condense, condense_record};
pub use engine::{MergeEngine, NormalizeOutcome, merge_fill, normalize, normalize_raw};
pub use error::{MergeError, Result};
