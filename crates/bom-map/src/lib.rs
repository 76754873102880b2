#![deny(unsafe_code)]

//! Header canonicalization for heterogeneous BOM exports.
//!
//! - [`HeaderCanonicalizer`] resolves one raw header to a canonical field
//!   using the alias table, first match wins.
//! - [`RowMapper`] rewrites every header of a raw record.
//! - [`HeaderInventory`] summarizes how a file's header row resolves.

pub mod canonical;
pub mod inventory;
pub mod row;

pub use canonical::{HeaderCanonicalizer, HeaderResolution, canonicalize, normalize_header};
pub use inventory::{HeaderEntry, HeaderInventory};
pub use row::RowMapper;
