//! Error types for merge runs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    /// Processing produced no records.
    #[error("no data to process ({files} file(s) submitted)")]
    NoData { files: usize },
}

pub type Result<T> = std::result::Result<T, MergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MergeError::NoData { files: 2 };
        assert_eq!(err.to_string(), "no data to process (2 file(s) submitted)");
    }
}
