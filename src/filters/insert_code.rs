//! `insert-code`: replace extraction directives with API listings
//!
//! A directive is a raw block such as
//! `<!-- insertClassMethods, src/Interop/Script.cs -->`. The referenced file
//! is resolved against the project root, stripped down to the requested API
//! surface and spliced in as a code block.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::document::{Action, Block, Document, Filter, KnownBlock};
use crate::error::Result;
use crate::extractor::{ExtractionMode, ScanOptions, extract_listing};
use crate::file_utils::resolve_source_path;

/// Directive at the start of a raw block's text.
static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<!-- ?insert(?P<mode>\w+), ?(?P<path>\S+) ?-->")
        .expect("DIRECTIVE regex is invalid")
});

/// A recognized directive, before its mode is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    /// Mode as written, e.g. `ClassMethods`
    pub mode: &'a str,
    /// Project-relative path as written
    pub path: &'a str,
}

impl<'a> Directive<'a> {
    pub fn parse(text: &'a str) -> Option<Self> {
        let caps = DIRECTIVE.captures(text)?;
        Some(Self {
            mode: caps.name("mode")?.as_str(),
            path: caps.name("path")?.as_str(),
        })
    }
}

/// The directive resolver.
pub struct InsertCode {
    root: PathBuf,
    language: String,
    scan: ScanOptions,
}

impl InsertCode {
    pub fn new(root: impl Into<PathBuf>, language: impl Into<String>, scan: ScanOptions) -> Self {
        Self {
            root: root.into(),
            language: language.into(),
            scan,
        }
    }

    /// Resolve the text of a raw block.
    ///
    /// `Ok(None)` means "not for us": no directive, or a mode this version
    /// does not know. A known directive whose file cannot be read is an error.
    pub fn resolve(&self, raw: &str) -> Result<Option<Block>> {
        let Some(directive) = Directive::parse(raw) else {
            return Ok(None);
        };
        let Some(mode) = ExtractionMode::from_directive(directive.mode) else {
            log::debug!(
                "leaving directive with unknown mode '{}' for {}",
                directive.mode,
                directive.path
            );
            return Ok(None);
        };

        let path = resolve_source_path(&self.root, directive.path);
        log::debug!("insert{} {}", mode, path.display());
        let listing = extract_listing(&path, directive.path, mode, &self.scan)?;
        Ok(Some(Block::code(&[self.language.as_str()], listing)))
    }
}

impl Filter for InsertCode {
    fn name(&self) -> &'static str {
        "insert-code"
    }

    fn action(&mut self, block: &mut Block, _doc: &mut Document) -> Result<Action> {
        let Block::Known(KnownBlock::RawBlock(_, text)) = block else {
            return Ok(Action::Keep);
        };
        Ok(match self.resolve(text)? {
            Some(code) => Action::Replace(vec![code]),
            None => Action::Keep,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::apply;
    use std::fs;
    use tempfile::TempDir;

    const SCRIPT: &str = "\
namespace Demo
{
    public class Script
    {
        /// <summary>
        /// Runs the script.
        /// </summary>
        public void Run() { }

        public int Lines { get; set; }
    }
}
";

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/Script.cs"), SCRIPT).unwrap();
        dir
    }

    #[test]
    fn test_parse_directive() {
        let d = Directive::parse("<!-- insertEnum, src/Color.cs -->").unwrap();
        assert_eq!(d.mode, "Enum");
        assert_eq!(d.path, "src/Color.cs");

        let d = Directive::parse("<!--insertClassMethods,src/A.cs-->").unwrap();
        assert_eq!(d.mode, "ClassMethods");
        assert_eq!(d.path, "src/A.cs");
    }

    #[test]
    fn test_parse_directive_must_lead() {
        assert!(Directive::parse("text <!-- insertEnum, a.cs -->").is_none());
        assert!(Directive::parse("<!-- a plain comment -->").is_none());
    }

    #[test]
    fn test_resolve_builds_code_block() {
        let dir = project();
        let resolver = InsertCode::new(dir.path(), "cs", ScanOptions::default());
        let block = resolver
            .resolve("<!-- insertClassMethods, src/Script.cs -->")
            .unwrap()
            .unwrap();
        assert_eq!(
            block,
            Block::code(&["cs"], "// src/Script.cs\n\n// Runs the script.\npublic void Run();")
        );
    }

    #[test]
    fn test_resolve_strips_leading_dot_slash_in_header() {
        let dir = project();
        let resolver = InsertCode::new(dir.path(), "csharp", ScanOptions::default());
        let block = resolver
            .resolve("<!-- insertClassAttributes, ./src/Script.cs -->")
            .unwrap()
            .unwrap();
        assert_eq!(
            block,
            Block::code(&["csharp"], "// src/Script.cs\n\npublic int Lines { get; set; }")
        );
    }

    #[test]
    fn test_unknown_mode_passes_through() {
        let dir = project();
        let resolver = InsertCode::new(dir.path(), "cs", ScanOptions::default());
        assert_eq!(
            resolver.resolve("<!-- insertEvents, src/Script.cs -->").unwrap(),
            None
        );
    }

    #[test]
    fn test_unknown_mode_with_missing_file_still_passes_through() {
        let dir = project();
        let resolver = InsertCode::new(dir.path(), "cs", ScanOptions::default());
        assert_eq!(
            resolver.resolve("<!-- insertEvents, src/Nope.cs -->").unwrap(),
            None
        );
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = project();
        let resolver = InsertCode::new(dir.path(), "cs", ScanOptions::default());
        let err = resolver
            .resolve("<!-- insertEnum, src/Missing.cs -->")
            .unwrap_err();
        assert!(matches!(err, crate::Error::Resource { .. }));
    }

    #[test]
    fn test_filter_replaces_only_directives() {
        let dir = project();
        let mut doc = Document {
            api_version: vec![1, 23],
            meta: Default::default(),
            blocks: vec![
                Block::raw("html", "<!-- insertClassMethods, src/Script.cs -->"),
                Block::raw("html", "<!-- insertEvents, src/Script.cs -->"),
                Block::raw("html", "<div>not a directive</div>"),
            ],
        };
        let mut filter = InsertCode::new(dir.path(), "cs", ScanOptions::default());
        apply(&mut doc, &mut filter).unwrap();

        assert!(matches!(doc.blocks[0], Block::Known(KnownBlock::CodeBlock(..))));
        assert_eq!(
            doc.blocks[1],
            Block::raw("html", "<!-- insertEvents, src/Script.cs -->")
        );
        assert_eq!(doc.blocks[2], Block::raw("html", "<div>not a directive</div>"));
    }
}
