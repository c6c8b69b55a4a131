//! Block walker
//!
//! Offers every block of a document to a [`Filter`], children before their
//! parent, in document order. The filter answers with an [`Action`].

use super::{Block, Document, KnownBlock, Row};
use crate::error::Result;

/// What to do with a block after the filter has seen it.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Keep the block, including any in-place edits
    Keep,
    /// Put these blocks in its place
    Replace(Vec<Block>),
    /// Drop the block
    Delete,
}

/// A tree rewrite over a pandoc document.
pub trait Filter {
    /// Name used on the command line and in logs.
    fn name(&self) -> &'static str;

    /// Runs once before the walk.
    fn prepare(&mut self, _doc: &mut Document) -> Result<()> {
        Ok(())
    }

    /// Runs for every block. During the walk `doc.blocks` is empty; only the
    /// metadata is meaningful.
    fn action(&mut self, block: &mut Block, doc: &mut Document) -> Result<Action>;

    /// Runs once after the walk.
    fn finalize(&mut self, _doc: &mut Document) -> Result<()> {
        Ok(())
    }
}

/// Run one filter over the whole document.
pub fn apply(doc: &mut Document, filter: &mut dyn Filter) -> Result<()> {
    filter.prepare(doc)?;
    let blocks = std::mem::take(&mut doc.blocks);
    let walked = walk_blocks(blocks, filter, doc);
    doc.blocks = walked?;
    filter.finalize(doc)
}

fn walk_blocks(
    blocks: Vec<Block>,
    filter: &mut dyn Filter,
    doc: &mut Document,
) -> Result<Vec<Block>> {
    let mut out = Vec::with_capacity(blocks.len());
    for mut block in blocks {
        walk_children(&mut block, filter, doc)?;
        match filter.action(&mut block, doc)? {
            Action::Keep => out.push(block),
            Action::Replace(replacement) => out.extend(replacement),
            Action::Delete => {}
        }
    }
    Ok(out)
}

fn walk_children(block: &mut Block, filter: &mut dyn Filter, doc: &mut Document) -> Result<()> {
    match block {
        Block::Known(KnownBlock::BlockQuote(children) | KnownBlock::Div(_, children)) => {
            *children = walk_blocks(std::mem::take(children), filter, doc)?;
        }
        Block::Known(KnownBlock::BulletList(items) | KnownBlock::OrderedList(_, items)) => {
            for item in items.iter_mut() {
                *item = walk_blocks(std::mem::take(item), filter, doc)?;
            }
        }
        Block::Known(KnownBlock::DefinitionList(items)) => {
            for (_, definitions) in items.iter_mut() {
                for definition in definitions.iter_mut() {
                    *definition = walk_blocks(std::mem::take(definition), filter, doc)?;
                }
            }
        }
        Block::Known(KnownBlock::Figure(_, (_, caption), children)) => {
            *caption = walk_blocks(std::mem::take(caption), filter, doc)?;
            *children = walk_blocks(std::mem::take(children), filter, doc)?;
        }
        Block::Known(KnownBlock::Table(_, (_, caption), _, (_, head), bodies, (_, foot))) => {
            *caption = walk_blocks(std::mem::take(caption), filter, doc)?;
            walk_rows(head, filter, doc)?;
            for (_, _, body_head, rows) in bodies.iter_mut() {
                walk_rows(body_head, filter, doc)?;
                walk_rows(rows, filter, doc)?;
            }
            walk_rows(foot, filter, doc)?;
        }
        _ => {}
    }
    Ok(())
}

fn walk_rows(rows: &mut [Row], filter: &mut dyn Filter, doc: &mut Document) -> Result<()> {
    for (_, cells) in rows.iter_mut() {
        for (_, _, _, _, blocks) in cells.iter_mut() {
            *blocks = walk_blocks(std::mem::take(blocks), filter, doc)?;
        }
    }
    Ok(())
}
