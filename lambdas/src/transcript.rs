//! Ordered record of every line the demo prints.

use std::cell::RefCell;
use std::io::Write;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Demonstration step that produced a line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Banner,
    NoArg,
    Sum,
    Count,
    Capture,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub section: Section,
    pub text: String,
}

/// Append-only line log.
///
/// Recording takes `&self`, so any number of closures can hold a shared
/// reference to the same transcript at once.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: RefCell<Vec<Entry>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line.
    pub fn say(&self, section: Section, text: impl Into<String>) {
        self.entries.borrow_mut().push(Entry {
            section,
            text: text.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Line texts in recording order.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|entry| entry.text.clone())
            .collect()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries.into_inner()
    }

    /// Write one line per entry.
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        for entry in &*self.entries.borrow() {
            writeln!(out, "{}", entry.text).context("write transcript line")?;
        }
        Ok(())
    }

    /// Write entries as a pretty JSON array with trailing newline.
    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut payload =
            serde_json::to_string_pretty(&*self.entries.borrow()).context("serialize json")?;
        payload.push('\n');
        out.write_all(payload.as_bytes()).context("write json")?;
        Ok(())
    }
}
