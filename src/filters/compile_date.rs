//! `compile-date`: stamp the build date into the document metadata

use chrono::{Local, NaiveDate};

use crate::document::{Action, Block, Document, Filter};
use crate::error::{Error, Result};

/// Sets `meta.date` to an ISO `YYYY-MM-DD` date.
pub struct CompileDate {
    date: NaiveDate,
}

impl CompileDate {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Stamp today's local date.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }
}

/// Parse a `--date` argument.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate(s.to_string()))
}

impl Filter for CompileDate {
    fn name(&self) -> &'static str {
        "compile-date"
    }

    fn prepare(&mut self, doc: &mut Document) -> Result<()> {
        let date = self.date.format("%Y-%m-%d").to_string();
        log::debug!("setting date to {}", date);
        doc.set_meta_string("date", &date);
        Ok(())
    }

    fn action(&mut self, _block: &mut Block, _doc: &mut Document) -> Result<Action> {
        Ok(Action::Keep)
    }
}
