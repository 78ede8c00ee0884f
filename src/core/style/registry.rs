use std::sync::Arc;

use dashmap::DashMap;
use tracing::trace;

use super::{Result, StyleError, StyleNode};

/// Hand-off point for rewritten sheets.
///
/// Stands in for the host's stylesheet-compilation facility: callers
/// register a finished tree under a name and look it up later. Sheets are
/// stored behind `Arc` so lookups are cheap and registration never blocks
/// readers of previously registered sheets.
#[derive(Debug, Default)]
pub struct SheetRegistry {
    sheets: DashMap<String, Arc<StyleNode>>,
}

impl SheetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rewritten sheet, replacing any previous sheet of the
    /// same name.
    pub fn insert(&self, name: &str, sheet: StyleNode) -> Arc<StyleNode> {
        let sheet = Arc::new(sheet);
        trace!(name, properties = sheet.len(), "registered style sheet");
        self.sheets.insert(name.to_string(), Arc::clone(&sheet));
        sheet
    }

    pub fn get(&self, name: &str) -> Option<Arc<StyleNode>> {
        self.sheets.get(name).map(|entry| Arc::clone(entry.value()))
    }

    pub fn require(&self, name: &str) -> Result<Arc<StyleNode>> {
        self.get(name)
            .ok_or_else(|| StyleError::UnknownSheet(name.to_string()))
    }

    pub fn remove(&self, name: &str) -> Option<Arc<StyleNode>> {
        self.sheets.remove(name).map(|(_, sheet)| sheet)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn clear(&self) {
        self.sheets.clear();
    }
}
