//! The widget catalog state container.
//!
//! [`DashboardStore`] owns the categories, the transient search term, and the
//! injected [`IdGenerator`]. Every operation is synchronous and total: unknown
//! category or widget ids turn mutations into no-ops rather than errors.
//!
//! # Copy-on-write
//!
//! Categories live behind an [`Arc`]. Mutations go through [`Arc::make_mut`],
//! so a [`snapshot`](DashboardStore::snapshot) taken earlier keeps showing the
//! collection as it was when it was taken.
//!
//! # Example
//!
//! ```
//! use widgetboard_core::ids::SequentialIds;
//! use widgetboard_core::store::DashboardStore;
//! use widgetboard_core::types::{WidgetDraft, WidgetKind};
//!
//! let mut store = DashboardStore::seeded(SequentialIds::default());
//! let id = store
//!     .add_widget("cwpp", WidgetDraft::of_kind("Threat Detection", "Live status", WidgetKind::Metric))
//!     .map(|w| w.id.clone())
//!     .unwrap();
//! assert_eq!(id, "widget-1");
//!
//! store.set_search_term("threat");
//! assert_eq!(store.filtered_widgets().len(), 1);
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::ids::IdGenerator;
use crate::seed;
use crate::types::{Category, SearchHit, Widget, WidgetDraft};

/// In-memory catalog of categories and widgets.
#[derive(Debug)]
pub struct DashboardStore {
    categories: Arc<Vec<Category>>,
    search_term: String,
    ids: Box<dyn IdGenerator>,
}

impl DashboardStore {
    /// Creates an empty store that draws widget ids from `ids`.
    ///
    /// Call [`initialize`](Self::initialize) to install the seed catalog.
    #[must_use]
    pub fn new(ids: impl IdGenerator + 'static) -> Self {
        Self {
            categories: Arc::new(Vec::new()),
            search_term: String::new(),
            ids: Box::new(ids),
        }
    }

    /// Creates a store and installs the seed catalog.
    #[must_use]
    pub fn seeded(ids: impl IdGenerator + 'static) -> Self {
        let mut store = Self::new(ids);
        store.initialize();
        store
    }

    /// Replaces all categories with the seed catalog.
    ///
    /// Any widgets added or removed since the last call are discarded. The
    /// search term is left as it is.
    pub fn initialize(&mut self) {
        self.categories = Arc::new(seed::categories());
        debug!(
            categories = self.categories.len(),
            widgets = self.widget_count(),
            "Catalog initialized from seed"
        );
    }

    /// Appends a widget built from `draft` to the category `category_id`.
    ///
    /// The widget receives a fresh identifier that is unique across the whole
    /// catalog. Returns the inserted widget, or `None` if no category has the
    /// given id, in which case nothing changes.
    pub fn add_widget(&mut self, category_id: &str, draft: WidgetDraft) -> Option<&Widget> {
        let Some(index) = self.category_index(category_id) else {
            debug!(category_id, "add_widget ignored: unknown category");
            return None;
        };

        let id = self.unique_id();
        let widget = Widget::from_draft(id, draft);
        debug!(
            category_id,
            widget_id = %widget.id,
            kind = %widget.kind(),
            "Widget added"
        );

        let widgets = &mut Arc::make_mut(&mut self.categories)[index].widgets;
        widgets.push(widget);
        widgets.last()
    }

    /// Removes the widget `widget_id` from the category `category_id`.
    ///
    /// Returns the removed widget, or `None` if either id is unknown, in which
    /// case nothing changes.
    pub fn remove_widget(&mut self, category_id: &str, widget_id: &str) -> Option<Widget> {
        let Some(index) = self.category_index(category_id) else {
            debug!(category_id, widget_id, "remove_widget ignored: unknown category");
            return None;
        };
        let Some(position) = self.categories[index]
            .widgets
            .iter()
            .position(|w| w.id == widget_id)
        else {
            debug!(category_id, widget_id, "remove_widget ignored: unknown widget");
            return None;
        };

        let removed = Arc::make_mut(&mut self.categories)[index]
            .widgets
            .remove(position);
        debug!(category_id, widget_id, "Widget removed");
        Some(removed)
    }

    /// Replaces the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Returns the current search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the widgets matching the current search term.
    ///
    /// An empty term yields no results. Otherwise a widget matches when its
    /// name or text contains the term, ignoring case. Results follow category
    /// order, then widget order within each category.
    #[must_use]
    pub fn filtered_widgets(&self) -> Vec<SearchHit<'_>> {
        if self.search_term.is_empty() {
            return Vec::new();
        }

        let needle = self.search_term.to_lowercase();
        self.categories
            .iter()
            .flat_map(|category| {
                category.widgets.iter().map(move |widget| SearchHit {
                    category_id: &category.id,
                    widget,
                })
            })
            .filter(|hit| hit.widget.matches_lowercase(&needle))
            .collect()
    }

    /// Returns the categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by id.
    #[must_use]
    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Returns a shared handle to the current categories.
    ///
    /// The handle is cheap to clone and is not affected by later mutations.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Category>> {
        Arc::clone(&self.categories)
    }

    /// Total number of widgets across all categories.
    #[must_use]
    pub fn widget_count(&self) -> usize {
        self.categories.iter().map(|c| c.widgets.len()).sum()
    }

    fn category_index(&self, category_id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == category_id)
    }

    fn contains_widget_id(&self, widget_id: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.widgets.iter().any(|w| w.id == widget_id))
    }

    /// Draws a candidate from the generator and suffixes `-2`, `-3`, ... until
    /// it does not clash with an existing widget id.
    fn unique_id(&mut self) -> String {
        let base = self.ids.next_id();
        if !self.contains_widget_id(&base) {
            return base;
        }

        let mut attempt = 2u64;
        loop {
            let candidate = format!("{base}-{attempt}");
            if !self.contains_widget_id(&candidate) {
                debug!(base = %base, id = %candidate, "Generated id clashed, suffixed");
                return candidate;
            }
            attempt += 1;
        }
    }
}
