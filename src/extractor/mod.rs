//! Source API extraction
//!
//! Turns a C# source file into a stripped-down listing of its API surface:
//! method signatures, properties and fields, or enum constants, each with the
//! first line of its `/// <summary>` doc comment.
//!
//! # Architecture
//!
//! - [`patterns`]: the declaration matcher, compiled once per process
//! - [`scanner`]: walks a file's text and yields [`MatchRecord`]s in source order
//! - [`summary`]: condenses the doc block above a declaration into one line
//! - [`render`]: turns records into listing entries for one [`ExtractionMode`]
//!
//! This is a textual scanner tuned to conventionally formatted code, not a
//! parser. Odd formatting yields fewer or mis-bounded records, never errors.

pub mod patterns;
pub mod render;
pub mod scanner;
pub mod summary;

use std::fmt;
use std::ops::Range;
use std::path::Path;

use crate::error::Result;
use crate::file_utils::read_source_file;

pub use render::{RenderedEntry, render_listing, render_record};
pub use scanner::{Scanner, scan};

/// Marker that hides the next declaration from generated docs.
pub const DEFAULT_HIDE_MARKER: &str = "[MoonSharpVisible(false)]";

/// Which category of API element a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionMode {
    /// Method signatures and expression-bodied members
    Methods,
    /// Properties and fields
    Attributes,
    /// Constants of enum declarations
    Enum,
}

impl ExtractionMode {
    /// Parse the mode name used in `<!-- insert<Mode>, path -->` directives.
    ///
    /// Returns `None` for names this version does not know about, which
    /// callers treat as "leave the directive alone".
    pub fn from_directive(name: &str) -> Option<Self> {
        match name {
            "ClassMethods" => Some(Self::Methods),
            "ClassAttributes" => Some(Self::Attributes),
            "Enum" => Some(Self::Enum),
            _ => None,
        }
    }

    /// The directive spelling of this mode.
    pub fn directive_name(self) -> &'static str {
        match self {
            Self::Methods => "ClassMethods",
            Self::Attributes => "ClassAttributes",
            Self::Enum => "Enum",
        }
    }

    /// The element kind this mode keeps.
    pub fn kind(self) -> ElementKind {
        match self {
            Self::Methods => ElementKind::MethodSignature,
            Self::Attributes => ElementKind::GenericAttribute,
            Self::Enum => ElementKind::EnumDeclaration,
        }
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.directive_name())
    }
}

/// Access modifier of a declaration. Declarations without one never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
    Protected,
}

impl Visibility {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            "protected" => Some(Self::Protected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which declaration alternative produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `int Foo(string bar)` or `int Count => expr`
    MethodSignature,
    /// `enum Color`
    EnumDeclaration,
    /// `string Name`
    GenericAttribute,
}

/// One structural match of the scanner, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// First content line of the doc block directly above the declaration
    pub summary: Option<String>,
    pub visibility: Visibility,
    pub is_static: bool,
    /// Remaining member modifiers (`readonly`, `override`, `event`, ...) in source order
    pub modifiers: Vec<String>,
    pub kind: ElementKind,
    /// The declaration without its modifiers, e.g. `int Foo(string bar)`
    pub head_text: String,
    /// Text between the braces following the declaration, if any
    pub block: Option<String>,
    /// Byte range from the start of the declaration line to the end of the match
    pub span: Range<usize>,
    /// Line of the declaration (1-indexed)
    pub line: usize,
}

impl MatchRecord {
    /// The declaration with its modifiers, as it reads in a listing.
    pub fn declaration(&self) -> String {
        let mut out = String::from(self.visibility.as_str());
        out.push(' ');
        if self.is_static {
            out.push_str("static ");
        }
        for modifier in &self.modifiers {
            out.push_str(modifier);
            out.push(' ');
        }
        out.push_str(&self.head_text);
        out
    }
}

/// How the end of a multi-line block is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockBoundary {
    /// First later line that starts with the opening line's indentation
    /// followed by `}`. Mis-bounds a block whose nested block closes at the
    /// same column.
    #[default]
    Indentation,
    /// Count brace depth from the opening brace, skipping comments and
    /// string/char literals.
    BraceDepth,
}

/// Per-run scanner settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Lines that, directly above a declaration, hide it from the listing
    pub hide_markers: Vec<String>,
    pub boundary: BlockBoundary,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            hide_markers: vec![DEFAULT_HIDE_MARKER.to_string()],
            boundary: BlockBoundary::default(),
        }
    }
}

/// Build the listing for source text already in memory.
pub fn extract_from_source(
    source: &str,
    label: &str,
    mode: ExtractionMode,
    options: &ScanOptions,
) -> String {
    render_listing(label, Scanner::new(source, options), mode)
}

/// Read `path` and build its listing, headed by `label`.
///
/// Fails with [`crate::Error::Resource`] when the file cannot be read.
pub fn extract_listing(
    path: &Path,
    label: &str,
    mode: ExtractionMode,
    options: &ScanOptions,
) -> Result<String> {
    let source = read_source_file(path)?;
    log::debug!("extracting {} from {}", mode, path.display());
    Ok(extract_from_source(&source, label, mode, options))
}
