//! Model selector state: the highlighted entry in the picker and the model
//! currently chosen for analysis.

use crate::catalog::{ModelCatalog, ModelDescriptor};
use tracing::debug;

/// State for the model picker overlay
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ModelSelectorState {
    /// Current filter text for model search
    pub filter: String,

    /// Highlighted index in the filtered list
    pub highlighted: usize,

    /// Id of the chosen model, if it exists in the catalog
    selected: Option<String>,
}

impl ModelSelectorState {
    /// Create an empty selector with nothing chosen
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filter: String::new(),
            highlighted: 0,
            selected: None,
        }
    }

    /// Choose a model by exact id.
    ///
    /// An unknown id clears the current choice and returns `None`.
    pub fn select<'c>(
        &mut self,
        catalog: &'c ModelCatalog,
        id: &str,
    ) -> Option<&'c ModelDescriptor> {
        let found = catalog.get(id);
        self.selected = found.map(|m| m.id.clone());
        if found.is_none() {
            debug!("Model {id:?} not in catalog, selection cleared");
        }
        found
    }

    /// Id of the chosen model
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Descriptor of the chosen model
    #[must_use]
    pub fn selected<'c>(&self, catalog: &'c ModelCatalog) -> Option<&'c ModelDescriptor> {
        self.selected.as_deref().and_then(|id| catalog.get(id))
    }

    /// Reset the filter and highlight the chosen model, if it is listed
    pub fn open(&mut self, catalog: &ModelCatalog) {
        self.filter.clear();
        self.highlighted = self
            .selected
            .as_deref()
            .and_then(|id| catalog.search("").iter().position(|m| m.id == id))
            .unwrap_or(0);
    }

    /// Models matching the filter, in grouped order
    #[must_use]
    pub fn filtered<'c>(&self, catalog: &'c ModelCatalog) -> Vec<&'c ModelDescriptor> {
        catalog.search(&self.filter)
    }

    /// Highlight the next entry, wrapping around
    pub fn highlight_next(&mut self, catalog: &ModelCatalog) {
        let count = self.filtered(catalog).len();
        if count > 0 {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    /// Highlight the previous entry, wrapping around
    pub fn highlight_prev(&mut self, catalog: &ModelCatalog) {
        let count = self.filtered(catalog).len();
        if count > 0 {
            self.highlighted = self.highlighted.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// Descriptor under the highlight
    #[must_use]
    pub fn highlighted<'c>(&self, catalog: &'c ModelCatalog) -> Option<&'c ModelDescriptor> {
        self.filtered(catalog).get(self.highlighted).copied()
    }

    /// Handle character input in filter
    pub fn handle_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.highlighted = 0;
    }

    /// Handle backspace in filter
    pub fn handle_filter_backspace(&mut self) {
        self.filter.pop();
        self.highlighted = 0;
    }
}
