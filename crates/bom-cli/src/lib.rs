//! CLI library components for BOM Unify.

pub mod logging;
pub mod pipeline;
