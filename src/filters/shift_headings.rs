//! `shift-headings`: promote the level-1 heading to the document title

use crate::document::{Action, Block, Document, Filter, KnownBlock, stringify};
use crate::error::Result;

/// Level-1 headings become `meta.title` and leave the body; every other
/// heading moves up one level. With several level-1 headings the last wins.
pub struct ShiftHeadings;

impl Filter for ShiftHeadings {
    fn name(&self) -> &'static str {
        "shift-headings"
    }

    fn action(&mut self, block: &mut Block, doc: &mut Document) -> Result<Action> {
        let Block::Known(KnownBlock::Header(level, _, inlines)) = block else {
            return Ok(Action::Keep);
        };
        if *level <= 1 {
            let title = stringify(inlines);
            log::debug!("title: {}", title);
            doc.set_meta_string("title", &title);
            return Ok(Action::Delete);
        }
        *level -= 1;
        Ok(Action::Keep)
    }
}
