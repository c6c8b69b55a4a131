//! `remove-toc`: drop a hand-written table of contents
//!
//! A heading reading exactly "Table of Contents" is removed together with the
//! lists that follow it, up to the next heading.

use crate::document::{Action, Block, Document, Filter, KnownBlock, stringify};
use crate::error::Result;

pub const TOC_TITLE: &str = "Table of Contents";

#[derive(Default)]
pub struct RemoveToc {
    in_toc: bool,
}

impl Filter for RemoveToc {
    fn name(&self) -> &'static str {
        "remove-toc"
    }

    fn prepare(&mut self, _doc: &mut Document) -> Result<()> {
        self.in_toc = false;
        Ok(())
    }

    fn action(&mut self, block: &mut Block, _doc: &mut Document) -> Result<Action> {
        if let Block::Known(KnownBlock::Header(_, _, inlines)) = block {
            if !self.in_toc && stringify(inlines) == TOC_TITLE {
                self.in_toc = true;
                return Ok(Action::Delete);
            }
            self.in_toc = false;
            return Ok(Action::Keep);
        }
        if self.in_toc && block.is_list() {
            return Ok(Action::Delete);
        }
        Ok(Action::Keep)
    }
}
