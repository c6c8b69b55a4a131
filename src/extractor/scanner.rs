//! Element scanner
//!
//! Applies the declaration matcher across a file's text, left to right. Each
//! search starts where the previous accepted record ended, so a listed
//! member's body is never rescanned and records come out in source order.
//!
//! Around each raw match the scanner does what the matcher cannot express:
//! - drops declarations directly below a hide marker line
//! - drops type definitions (`class`, `struct`, ...) without consuming their body
//! - condenses the `///` block directly above into a summary
//! - locates the block that follows the declaration, if any

use regex::Captures;

use super::patterns::{DECLARATION, SAME_LINE_BLOCK, is_type_definition};
use super::summary::{condense_summary, is_doc_line};
use super::{BlockBoundary, ElementKind, MatchRecord, ScanOptions, Visibility};

/// A located block: its inner text and the offset just past its closing brace.
struct Block<'a> {
    content: &'a str,
    end: usize,
}

/// Iterator over the [`MatchRecord`]s of one source text.
pub struct Scanner<'a> {
    text: &'a str,
    options: &'a ScanOptions,
    /// Where the next search starts
    pos: usize,
    /// End of the previous accepted record; doc blocks never reach above it
    floor: usize,
    /// Line counting cursor: (offset, 1-indexed line at that offset)
    line_cursor: (usize, usize),
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str, options: &'a ScanOptions) -> Self {
        Self {
            text,
            options,
            pos: 0,
            floor: 0,
            line_cursor: (0, 1),
        }
    }

    fn line_at(&mut self, offset: usize) -> usize {
        let (from, line) = self.line_cursor;
        let line = line + self.text[from..offset].matches('\n').count();
        self.line_cursor = (offset, line);
        line
    }

    fn line_end(&self, from: usize) -> usize {
        self.text[from..]
            .find('\n')
            .map(|i| from + i)
            .unwrap_or(self.text.len())
    }

    fn is_hidden(&self, line_start: usize) -> bool {
        let Some(previous) = self.text[..line_start].lines().next_back() else {
            return false;
        };
        let previous = previous.trim();
        self.options
            .hide_markers
            .iter()
            .any(|marker| marker.trim() == previous)
    }

    fn summary_above(&self, line_start: usize) -> Option<String> {
        let mut doc: Vec<&str> = self.text[self.floor..line_start]
            .lines()
            .rev()
            .take_while(|line| is_doc_line(line))
            .collect();
        if doc.is_empty() {
            return None;
        }
        doc.reverse();
        condense_summary(doc)
    }

    /// Turn one raw match into a record, or `None` if it must be dropped.
    fn accept(&mut self, caps: &Captures<'a>) -> Option<MatchRecord> {
        let whole = caps.get(0)?;
        let line_start = whole.start();

        if self.is_hidden(line_start) {
            log::trace!("hidden declaration at byte {}", line_start);
            return None;
        }

        let (kind, head, type_token) = if let Some(m) = caps.name("method") {
            (ElementKind::MethodSignature, m, caps.name("method_type")?.as_str())
        } else if let Some(m) = caps.name("enum") {
            (ElementKind::EnumDeclaration, m, "enum")
        } else {
            let m = caps.name("attribute")?;
            (
                ElementKind::GenericAttribute,
                m,
                caps.name("attribute_type")?.as_str(),
            )
        };

        if is_type_definition(type_token) {
            log::trace!("type definition '{}' is not a member", head.as_str());
            return None;
        }

        let mut head_text = head.as_str().trim_end();
        if caps.name("method_expr").is_some() {
            head_text = head_text.strip_suffix(';').unwrap_or(head_text).trim_end();
        }

        let indent = caps.name("indent").map_or("", |m| m.as_str());
        let block = self.block_after(head.end(), indent);
        let end = block.as_ref().map_or(head.end(), |b| b.end);

        let visibility = Visibility::parse(caps.name("visibility")?.as_str())?;
        let modifiers = caps
            .name("modifiers")
            .map(|m| m.as_str().split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        Some(MatchRecord {
            summary: self.summary_above(line_start),
            visibility,
            is_static: caps.name("static").is_some(),
            modifiers,
            kind,
            head_text: head_text.to_string(),
            block: block.map(|b| b.content.to_string()),
            span: line_start..end,
            line: self.line_at(line_start),
        })
    }

    /// Find the block following a declaration head ending at `head_end`.
    ///
    /// Recognized shapes: `{ ... }` on the same line, `{` ending the
    /// declaration line, or `{` alone on the next line. A base clause
    /// (`: byte`) or constraint clause (`where T : new()`) may sit between
    /// the head and the block.
    fn block_after(&self, head_end: usize, indent: &str) -> Option<Block<'a>> {
        let text = self.text;
        let line_end = self.line_end(head_end);
        let head_end = head_end + clause_len(&text[head_end..line_end]);
        let rest = &text[head_end..line_end];

        if let Some(caps) = SAME_LINE_BLOCK.captures(rest) {
            return Some(Block {
                content: caps.name("content")?.as_str(),
                end: head_end + caps.get(0)?.end(),
            });
        }

        let rest_trimmed = rest.trim_end();
        if rest_trimmed.ends_with('{') {
            let open = head_end + rest_trimmed.len() - 1;
            return self.multi_line_block(open, indent);
        }

        if !rest_trimmed.trim_start().is_empty() {
            return None;
        }
        if line_end >= text.len() {
            return None;
        }

        let next_start = line_end + 1;
        let next_line = &text[next_start..self.line_end(next_start)];
        let next_trimmed = next_line.trim();
        if next_trimmed == "{" {
            let brace_indent_len = next_line.len() - next_line.trim_start().len();
            let open = next_start + brace_indent_len;
            return self.multi_line_block(open, &next_line[..brace_indent_len]);
        }
        if next_trimmed.starts_with('{') && next_trimmed.ends_with('}') {
            let caps = SAME_LINE_BLOCK.captures(next_line)?;
            return Some(Block {
                content: caps.name("content")?.as_str(),
                end: next_start + caps.get(0)?.end(),
            });
        }
        None
    }

    /// Bound a block opened by the `{` at `open`, on a line indented by `indent`.
    fn multi_line_block(&self, open: usize, indent: &str) -> Option<Block<'a>> {
        let close = match self.options.boundary {
            BlockBoundary::Indentation => close_by_indentation(self.text, open, indent),
            BlockBoundary::BraceDepth => close_by_depth(self.text, open),
        }?;
        Some(Block {
            content: &self.text[open + 1..close],
            end: close + 1,
        })
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = MatchRecord;

    fn next(&mut self) -> Option<MatchRecord> {
        while self.pos < self.text.len() {
            let caps = DECLARATION.captures_at(self.text, self.pos)?;
            let whole = caps.get(0)?;
            match self.accept(&caps) {
                Some(record) => {
                    self.pos = record.span.end;
                    self.floor = record.span.end;
                    log::trace!("{:?} at line {}: {}", record.kind, record.line, record.head_text);
                    return Some(record);
                }
                None => self.pos = self.line_end(whole.end()),
            }
        }
        None
    }
}

/// Length of a base or constraint clause at the start of `rest`, up to its
/// opening brace or the end of the line. Zero when `rest` holds no clause.
fn clause_len(rest: &str) -> usize {
    let trimmed = rest.trim_start();
    if !(trimmed.starts_with(':') || trimmed.starts_with("where ")) {
        return 0;
    }
    rest.find('{').unwrap_or(rest.len())
}

/// Scan `text` and collect every record.
pub fn scan(text: &str, options: &ScanOptions) -> Vec<MatchRecord> {
    Scanner::new(text, options).collect()
}

/// Offset of the `}` that starts the first line after `open` reading
/// `indent` followed by `}`.
///
/// This is the indentation heuristic: a nested block closing at the same
/// column ends the outer block early.
fn close_by_indentation(text: &str, open: usize, indent: &str) -> Option<usize> {
    let mut line_start = text[open..].find('\n').map(|i| open + i + 1)?;
    while line_start < text.len() {
        let line = &text[line_start..];
        if let Some(after_indent) = line.strip_prefix(indent) {
            if after_indent.starts_with('}') {
                return Some(line_start + indent.len());
            }
        }
        line_start = match line.find('\n') {
            Some(i) => line_start + i + 1,
            None => break,
        };
    }
    None
}

/// Offset of the `}` matching the `{` at `open`, counting depth.
///
/// Braces inside `//` and `/* */` comments, string literals (regular and
/// verbatim) and char literals do not count.
fn close_by_depth(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = open;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = text[i..].find('\n').map_or(bytes.len(), |n| i + n);
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = text[i + 2..].find("*/").map_or(bytes.len(), |n| i + 2 + n + 2);
                continue;
            }
            b'"' => {
                let verbatim = i > 0 && bytes[i - 1] == b'@';
                i = skip_string(bytes, i + 1, verbatim);
                continue;
            }
            b'\'' => {
                i = skip_char(bytes, i + 1);
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Offset just past the closing quote of a string literal whose body starts at `i`.
fn skip_string(bytes: &[u8], mut i: usize, verbatim: bool) -> usize {
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if !verbatim => i += 2,
            b'"' if verbatim && bytes.get(i + 1) == Some(&b'"') => i += 2,
            b'"' => return i + 1,
            b'\n' if !verbatim => return i,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Offset just past a char literal whose body starts at `i`.
fn skip_char(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\'' => return i + 1,
            b'\n' => return i,
            _ => i += 1,
        }
    }
    bytes.len()
}
