//! Data model for the widget catalog.
//!
//! A catalog is an ordered list of [`Category`] values, each owning an ordered
//! list of [`Widget`] values. What a widget displays is described by
//! [`WidgetContent`], a tagged union keyed by [`WidgetKind`] so that the kind
//! and the payload can never disagree.
//!
//! All types serialize to JSON. Content is adjacently tagged as
//! `{"type": "<kind>", "data": ...}` and payload fields use camelCase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Chart,
    Metric,
    Progress,
    Alert,
}

impl WidgetKind {
    /// Every kind, in declaration order.
    pub const ALL: [WidgetKind; 4] = [
        WidgetKind::Chart,
        WidgetKind::Metric,
        WidgetKind::Progress,
        WidgetKind::Alert,
    ];

    /// Returns the lowercase tag used in JSON and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetKind::Chart => "chart",
            WidgetKind::Metric => "metric",
            WidgetKind::Progress => "progress",
            WidgetKind::Alert => "alert",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`WidgetKind`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown widget kind '{0}' (expected chart, metric, progress, or alert)")]
pub struct ParseKindError(pub String);

impl FromStr for WidgetKind {
    type Err = ParseKindError;

    /// Parses a kind tag, ignoring ASCII case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use widgetboard_core::types::WidgetKind;
    ///
    /// assert_eq!("Chart".parse::<WidgetKind>(), Ok(WidgetKind::Chart));
    /// assert!("pie".parse::<WidgetKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        WidgetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseKindError(trimmed.to_string()))
    }
}

/// A named numeric slice of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBucket {
    pub label: String,
    pub value: u64,
}

impl ChartBucket {
    #[must_use]
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Payload of a chart widget.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// Headline figure shown above the chart, when the chart has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    /// Slices in display order.
    pub buckets: Vec<ChartBucket>,
}

impl ChartData {
    /// Sum of all bucket values.
    #[must_use]
    pub fn bucket_sum(&self) -> u64 {
        self.buckets.iter().map(|b| b.value).sum()
    }
}

/// Payload of a progress widget: a total split into critical and high counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressData {
    pub total: u64,
    pub critical: u64,
    pub high: u64,
}

impl ProgressData {
    /// Fraction of the total that is critical, clamped to `[0, 1]`.
    ///
    /// Returns `0.0` when the total is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use widgetboard_core::types::ProgressData;
    ///
    /// let data = ProgressData { total: 200, critical: 50, high: 20 };
    /// assert_eq!(data.critical_share(), 0.25);
    /// assert_eq!(ProgressData::default().critical_share(), 0.0);
    /// ```
    #[must_use]
    pub fn critical_share(&self) -> f64 {
        share(self.critical, self.total)
    }

    /// Fraction of the total that is high, clamped to `[0, 1]`.
    #[must_use]
    pub fn high_share(&self) -> f64 {
        share(self.high, self.total)
    }
}

fn share(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64).clamp(0.0, 1.0)
}

/// What a widget displays, keyed by its kind.
///
/// Chart and progress widgets may carry data; widgets created from a form or
/// a template have none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum WidgetContent {
    Chart(Option<ChartData>),
    Metric,
    Progress(Option<ProgressData>),
    Alert,
}

impl WidgetContent {
    /// Content of the given kind with no payload.
    #[must_use]
    pub fn empty(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::Chart => WidgetContent::Chart(None),
            WidgetKind::Metric => WidgetContent::Metric,
            WidgetKind::Progress => WidgetContent::Progress(None),
            WidgetKind::Alert => WidgetContent::Alert,
        }
    }

    #[must_use]
    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetContent::Chart(_) => WidgetKind::Chart,
            WidgetContent::Metric => WidgetKind::Metric,
            WidgetContent::Progress(_) => WidgetKind::Progress,
            WidgetContent::Alert => WidgetKind::Alert,
        }
    }

    /// Returns `true` if this content carries chart or progress data.
    #[must_use]
    pub fn has_data(&self) -> bool {
        matches!(
            self,
            WidgetContent::Chart(Some(_)) | WidgetContent::Progress(Some(_))
        )
    }
}

/// A widget that has not been inserted yet and therefore has no identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDraft {
    pub name: String,
    pub text: String,
    pub content: WidgetContent,
}

impl WidgetDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>, content: WidgetContent) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            content,
        }
    }

    /// Creates a draft of the given kind without payload data.
    ///
    /// # Examples
    ///
    /// ```
    /// use widgetboard_core::types::{WidgetDraft, WidgetKind};
    ///
    /// let draft = WidgetDraft::of_kind("Open Tickets", "Current open tickets", WidgetKind::Metric);
    /// assert_eq!(draft.kind(), WidgetKind::Metric);
    /// ```
    #[must_use]
    pub fn of_kind(name: impl Into<String>, text: impl Into<String>, kind: WidgetKind) -> Self {
        Self::new(name, text, WidgetContent::empty(kind))
    }

    #[must_use]
    pub fn kind(&self) -> WidgetKind {
        self.content.kind()
    }
}

/// A single displayable data card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    /// Identifier, unique within the catalog at insertion time.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description text.
    pub text: String,
    /// Kind and payload.
    pub content: WidgetContent,
}

impl Widget {
    /// Gives a draft its identifier.
    #[must_use]
    pub fn from_draft(id: impl Into<String>, draft: WidgetDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            text: draft.text,
            content: draft.content,
        }
    }

    #[must_use]
    pub fn kind(&self) -> WidgetKind {
        self.content.kind()
    }

    /// Returns `true` if the name or text contains `needle`.
    ///
    /// `needle` must already be lowercased; the widget's own fields are
    /// lowercased here.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.text.to_lowercase().contains(needle)
    }
}

/// A named group of widgets, shown as one dashboard section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub widgets: Vec<Widget>,
}

impl Category {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, widgets: Vec<Widget>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            widgets,
        }
    }

    /// Looks up a widget by identifier.
    #[must_use]
    pub fn widget(&self, widget_id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == widget_id)
    }
}

/// A search result: a widget tagged with the category that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit<'a> {
    pub category_id: &'a str,
    pub widget: &'a Widget,
}
