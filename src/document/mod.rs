//! Pandoc JSON AST
//!
//! Only the block types the filters look at are modelled; every other node
//! (blocks, inlines, meta values) is kept as raw JSON and written back as is.

mod walk;

pub use walk::{Action, Filter, apply};

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::error::Result;

/// `(identifier, classes, key-value pairs)`
pub type Attr = (String, Vec<String>, Vec<(String, String)>);

/// Attribute set with no identifier and the given classes.
pub fn attr_with_classes(classes: &[&str]) -> Attr {
    (
        String::new(),
        classes.iter().map(|c| c.to_string()).collect(),
        Vec::new(),
    )
}

/// `(short caption, caption blocks)`
pub type Caption = (Value, Vec<Block>);

/// `(attr, alignment, row span, column span, blocks)`
pub type Cell = (Attr, Value, u32, u32, Vec<Block>);

/// `(attr, cells)`
pub type Row = (Attr, Vec<Cell>);

/// `(attr, row head columns, head rows, body rows)`
pub type TableBody = (Attr, Value, Vec<Row>, Vec<Row>);

/// A whole pandoc document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "pandoc-api-version")]
    pub api_version: Vec<u32>,
    pub meta: Map<String, Value>,
    pub blocks: Vec<Block>,
}

impl Document {
    /// Decode a document from pandoc's JSON output.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_writer(&self, mut writer: impl Write) -> Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Set a metadata field to a plain string (`MetaString`).
    pub fn set_meta_string(&mut self, key: &str, value: &str) {
        self.meta
            .insert(key.to_string(), json!({ "t": "MetaString", "c": value }));
    }

    /// Read a `MetaString` metadata field.
    pub fn meta_string(&self, key: &str) -> Option<&str> {
        let value = self.meta.get(key)?;
        if value.get("t")?.as_str()? == "MetaString" {
            value.get("c")?.as_str()
        } else {
            None
        }
    }
}

/// A block node.
///
/// Known block shapes decode into [`KnownBlock`]; anything else stays raw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Block {
    Known(KnownBlock),
    Other(Value),
}

/// The block types the filters inspect or descend into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum KnownBlock {
    Header(u32, Attr, Vec<Value>),
    RawBlock(String, String),
    CodeBlock(Attr, String),
    BlockQuote(Vec<Block>),
    Div(Attr, Vec<Block>),
    BulletList(Vec<Vec<Block>>),
    OrderedList(Value, Vec<Vec<Block>>),
    /// Items of `(term inlines, definitions)`
    DefinitionList(Vec<(Vec<Value>, Vec<Vec<Block>>)>),
    Figure(Attr, Caption, Vec<Block>),
    /// Attr, caption, column specs, head, bodies, foot
    Table(Attr, Caption, Vec<Value>, (Attr, Vec<Row>), Vec<TableBody>, (Attr, Vec<Row>)),
}

impl Block {
    pub fn header(level: u32, inlines: Vec<Value>) -> Self {
        Block::Known(KnownBlock::Header(level, attr_with_classes(&[]), inlines))
    }

    pub fn raw(format: &str, text: &str) -> Self {
        Block::Known(KnownBlock::RawBlock(format.to_string(), text.to_string()))
    }

    pub fn code(classes: &[&str], text: impl Into<String>) -> Self {
        Block::Known(KnownBlock::CodeBlock(attr_with_classes(classes), text.into()))
    }

    pub fn is_list(&self) -> bool {
        matches!(
            self,
            Block::Known(KnownBlock::BulletList(_) | KnownBlock::OrderedList(..))
        )
    }
}

/// Plain text of a sequence of inlines, the way `stringify` reads them:
/// `Str` text concatenated, spaces and breaks as a single space, containers
/// flattened.
pub fn stringify(inlines: &[Value]) -> String {
    let mut out = String::new();
    for inline in inlines {
        stringify_inline(inline, &mut out);
    }
    out
}

fn stringify_inline(inline: &Value, out: &mut String) {
    let tag = inline.get("t").and_then(Value::as_str).unwrap_or("");
    let content = inline.get("c");
    match tag {
        "Str" => {
            if let Some(text) = content.and_then(Value::as_str) {
                out.push_str(text);
            }
        }
        "Space" | "SoftBreak" | "LineBreak" => out.push(' '),
        // [attr, text] and [math type, text]
        "Code" | "Math" => {
            if let Some(text) = content.and_then(|c| c.get(1)).and_then(Value::as_str) {
                out.push_str(text);
            }
        }
        "Emph" | "Underline" | "Strong" | "Strikeout" | "Superscript" | "Subscript"
        | "SmallCaps" => stringify_list(content, out),
        // [attr or type, inlines, ...]
        "Quoted" | "Cite" | "Link" | "Image" | "Span" => {
            stringify_list(content.and_then(|c| c.get(1)), out)
        }
        _ => {}
    }
}

fn stringify_list(inlines: Option<&Value>, out: &mut String) {
    if let Some(items) = inlines.and_then(Value::as_array) {
        for item in items {
            stringify_inline(item, out);
        }
    }
}

/// Inlines for a plain sentence: words as `Str`, separated by `Space`.
pub fn text_inlines(text: &str) -> Vec<Value> {
    let mut inlines = Vec::new();
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            inlines.push(json!({ "t": "Space" }));
        }
        inlines.push(json!({ "t": "Str", "c": word }));
    }
    inlines
}
