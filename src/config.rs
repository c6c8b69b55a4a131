//! Pipeline configuration

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::extractor::ScanOptions;
use crate::filters::FilterKind;

/// Language tag of generated code blocks unless configured otherwise.
pub const DEFAULT_LANGUAGE: &str = "cs";

/// Settings for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory directive paths are resolved against
    pub root: PathBuf,
    /// Class put on generated code blocks for syntax highlighting
    pub language: String,
    /// Filters to run, in order
    pub filters: Vec<FilterKind>,
    /// Date stamped by `compile-date`; today when `None`
    pub date: Option<NaiveDate>,
    pub scan: ScanOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            language: DEFAULT_LANGUAGE.to_string(),
            filters: FilterKind::DEFAULT_CHAIN.to_vec(),
            date: None,
            scan: ScanOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{BlockBoundary, DEFAULT_HIDE_MARKER};

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.language, "cs");
        assert_eq!(config.filters, FilterKind::DEFAULT_CHAIN.to_vec());
        assert_eq!(config.date, None);
        assert_eq!(config.scan.hide_markers, vec![DEFAULT_HIDE_MARKER.to_string()]);
        assert_eq!(config.scan.boundary, BlockBoundary::Indentation);
    }
}
