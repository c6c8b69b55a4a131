//! The filters of the documentation pipeline
//!
//! - `compile-date`: stamp the build date into `meta.date`
//! - `shift-headings`: level-1 heading becomes the title, the rest move up
//! - `remove-toc`: drop a hand-written table of contents
//! - `insert-code`: replace extraction directives with API listings

pub mod compile_date;
pub mod insert_code;
pub mod remove_toc;
pub mod shift_headings;

use std::fmt;

pub use compile_date::{CompileDate, parse_date};
pub use insert_code::{Directive, InsertCode};
pub use remove_toc::RemoveToc;
pub use shift_headings::ShiftHeadings;

use crate::config::PipelineConfig;
use crate::document::Filter;

/// Identifies one filter of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    CompileDate,
    ShiftHeadings,
    RemoveToc,
    InsertCode,
}

impl FilterKind {
    /// The default chain, in the order it runs.
    pub const DEFAULT_CHAIN: [FilterKind; 4] = [
        FilterKind::CompileDate,
        FilterKind::ShiftHeadings,
        FilterKind::RemoveToc,
        FilterKind::InsertCode,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "compile-date" => Some(Self::CompileDate),
            "shift-headings" => Some(Self::ShiftHeadings),
            "remove-toc" => Some(Self::RemoveToc),
            "insert-code" => Some(Self::InsertCode),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CompileDate => "compile-date",
            Self::ShiftHeadings => "shift-headings",
            Self::RemoveToc => "remove-toc",
            Self::InsertCode => "insert-code",
        }
    }

    /// Build a fresh filter instance configured from `config`.
    pub fn build(self, config: &PipelineConfig) -> Box<dyn Filter> {
        match self {
            Self::CompileDate => Box::new(match config.date {
                Some(date) => CompileDate::new(date),
                None => CompileDate::today(),
            }),
            Self::ShiftHeadings => Box::new(ShiftHeadings),
            Self::RemoveToc => Box::new(RemoveToc::default()),
            Self::InsertCode => Box::new(InsertCode::new(
                config.root.clone(),
                config.language.clone(),
                config.scan.clone(),
            )),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_names_roundtrip() {
        for kind in FilterKind::DEFAULT_CHAIN {
            assert_eq!(FilterKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(FilterKind::parse("unknown"), None);
    }

    #[test]
    fn test_built_filter_names() {
        let config = PipelineConfig::default();
        for kind in FilterKind::DEFAULT_CHAIN {
            assert_eq!(kind.build(&config).name(), kind.as_str());
        }
    }
}
