//! Doc comment condensing
//!
//! C# documents members with `///` XML comments. A listing only shows one
//! line per member: the first line of prose inside `<summary>`.

/// Whether a source line belongs to a `///` doc block.
pub fn is_doc_line(line: &str) -> bool {
    line.trim_start().starts_with("///")
}

/// Strip indentation and the `///` marker from a doc line.
fn doc_text(line: &str) -> &str {
    let trimmed = line.trim();
    trimmed.strip_prefix("///").unwrap_or(trimmed).trim()
}

/// Condense a doc block into its summary line.
///
/// Takes the raw lines of the block, top to bottom. Prefers the first
/// non-empty line inside `<summary>...</summary>` (including the single-line
/// `<summary>text</summary>` form). A block without a `<summary>` element
/// falls back to its first line that is not an XML tag. Returns `None` when
/// nothing qualifies.
pub fn condense_summary<'a>(lines: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let texts: Vec<&str> = lines.into_iter().map(doc_text).collect();

    if let Some(start) = texts.iter().position(|t| t.starts_with("<summary>")) {
        let opening = texts[start].trim_start_matches("<summary>");
        let candidates = std::iter::once(opening).chain(texts[start + 1..].iter().copied());
        for text in candidates {
            let (content, closed) = match text.find("</summary>") {
                Some(end) => (&text[..end], true),
                None => (text, false),
            };
            let content = content.trim();
            if !content.is_empty() {
                return Some(content.to_string());
            }
            if closed {
                return None;
            }
        }
        return None;
    }

    texts
        .into_iter()
        .find(|t| !t.is_empty() && !t.starts_with('<'))
        .map(str::to_string)
}
