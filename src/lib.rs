//! Stripdoc - pandoc filters that splice stripped-down C# API listings into documentation

pub mod config;
pub mod document;
pub mod error;
pub mod extractor;
pub mod file_utils;
pub mod filters;
pub mod pipeline;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use config::PipelineConfig;
pub use document::{Action, Block, Document, Filter, KnownBlock};
pub use error::{Error, Result};
pub use extractor::{
    BlockBoundary, ExtractionMode, MatchRecord, ScanOptions, extract_from_source,
    extract_listing, scan,
};
pub use filters::FilterKind;
pub use pipeline::{run, run_stream};
