//! Runs the configured filters over a document, one after the other.

use std::io::{Read, Write};

use crate::config::PipelineConfig;
use crate::document::{Document, apply};
use crate::error::Result;

/// Apply every configured filter to `doc`, in order.
///
/// Stops at the first failing filter; the document is then left partly
/// rewritten and must not be written out.
pub fn run(doc: &mut Document, config: &PipelineConfig) -> Result<()> {
    for kind in &config.filters {
        let mut filter = kind.build(config);
        log::info!("running filter {}", filter.name());
        apply(doc, filter.as_mut())?;
    }
    Ok(())
}

/// Read a document from `reader`, run the pipeline, write it to `writer`.
pub fn run_stream(reader: impl Read, writer: impl Write, config: &PipelineConfig) -> Result<()> {
    let mut doc = Document::from_reader(reader)?;
    run(&mut doc, config)?;
    doc.to_writer(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Block, KnownBlock, text_inlines};
    use crate::filters::FilterKind;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn config(root: &std::path::Path) -> PipelineConfig {
        PipelineConfig {
            root: root.to_path_buf(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_chain() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("Color.cs"),
            "    public enum Color\n    {\n        Red,\n        Green\n    }\n",
        )
        .unwrap();

        let mut doc = Document {
            api_version: vec![1, 23],
            meta: Default::default(),
            blocks: vec![
                Block::header(1, text_inlines("Guide")),
                Block::header(2, text_inlines("Table of Contents")),
                Block::Known(KnownBlock::BulletList(vec![vec![]])),
                Block::header(2, text_inlines("Colors")),
                Block::raw("html", "<!-- insertEnum, Color.cs -->"),
            ],
        };
        run(&mut doc, &config(dir.path())).unwrap();

        assert_eq!(doc.meta_string("title"), Some("Guide"));
        assert_eq!(doc.meta_string("date"), Some("2024-05-01"));
        assert_eq!(
            doc.blocks,
            vec![
                Block::header(1, text_inlines("Colors")),
                Block::code(&["cs"], "// Color.cs\n\nRed,\nGreen"),
            ]
        );
    }

    #[test]
    fn test_missing_file_fails_run() {
        let dir = TempDir::new().unwrap();
        let mut doc = Document {
            api_version: vec![1, 23],
            meta: Default::default(),
            blocks: vec![Block::raw("html", "<!-- insertClassMethods, Gone.cs -->")],
        };
        let config = PipelineConfig {
            filters: vec![FilterKind::InsertCode],
            ..config(dir.path())
        };
        assert!(matches!(
            run(&mut doc, &config),
            Err(crate::Error::Resource { .. })
        ));
    }

    #[test]
    fn test_run_stream_roundtrips_untouched_document() {
        let input = r#"{"pandoc-api-version":[1,23],"meta":{},"blocks":[{"t":"Para","c":[{"t":"Str","c":"hi"}]}]}"#;
        let config = PipelineConfig {
            filters: vec![FilterKind::InsertCode, FilterKind::RemoveToc],
            ..Default::default()
        };
        let mut out = Vec::new();
        run_stream(input.as_bytes(), &mut out, &config).unwrap();

        let expected: serde_json::Value = serde_json::from_str(input).unwrap();
        let actual: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(expected, actual);
    }
}
