//! Widgetboard Core - in-memory widget catalog.
//!
//! This crate holds the state behind the dashboard: categories of widgets
//! (charts, metrics, progress bars, alerts) plus a transient search term.
//! There is no I/O here; the presentation layer owns one [`DashboardStore`]
//! and drives it through the operations below.
//!
//! # Operations
//!
//! - [`DashboardStore::initialize`]: install the seed catalog
//! - [`DashboardStore::add_widget`]: append a widget with a fresh id
//! - [`DashboardStore::remove_widget`]: remove a widget by id
//! - [`DashboardStore::set_search_term`]: replace the search term
//! - [`DashboardStore::filtered_widgets`]: case-insensitive search
//!
//! Unknown ids make mutations no-ops; no operation can fail.
//!
//! # Modules
//!
//! - [`types`]: Widgets, categories, and typed widget payloads
//! - [`store`]: The catalog state container
//! - [`ids`]: Injected widget id generators
//! - [`seed`]: Demo catalog installed at startup
//! - [`presets`]: Predefined widget templates for the add flow

pub mod ids;
pub mod presets;
pub mod seed;
pub mod store;
pub mod types;

pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use presets::PresetGroup;
pub use store::DashboardStore;
pub use types::{
    Category, ChartBucket, ChartData, ParseKindError, ProgressData, SearchHit, Widget,
    WidgetContent, WidgetDraft, WidgetKind,
};
