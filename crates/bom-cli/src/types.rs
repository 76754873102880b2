use std::path::PathBuf;

use bom_merge::NormalizeOutcome;
use bom_output::{ExportPaths, SourceSummary};

#[derive(Debug)]
pub struct MergeReport {
    pub outcome: NormalizeOutcome,
    pub sources: Vec<SourceSummary>,
    pub output_dir: PathBuf,
    /// `None` on dry runs.
    pub export: Option<ExportPaths>,
}
