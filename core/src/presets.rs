//! Predefined widget templates offered when adding widgets.
//!
//! Templates are grouped the same way the add-widget flow shows them: one
//! group per tab (`cspm`, `cwpp`, `image`, `ticket`). A group key doubles as
//! the default target category id, and only `cspm` and `cwpp` exist in the
//! seed catalog.

use std::sync::OnceLock;

use crate::types::{WidgetDraft, WidgetKind};

/// A tab of templates in the add-widget flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetGroup {
    /// Group key, also the default target category id.
    pub key: &'static str,
    /// Short tab label.
    pub label: &'static str,
    /// Templates in display order.
    pub templates: Vec<WidgetDraft>,
}

impl PresetGroup {
    /// Finds a template by its exact name.
    #[must_use]
    pub fn template(&self, name: &str) -> Option<&WidgetDraft> {
        self.templates.iter().find(|t| t.name == name)
    }
}

/// Returns every preset group, in tab order.
#[must_use]
pub fn groups() -> &'static [PresetGroup] {
    static GROUPS: OnceLock<Vec<PresetGroup>> = OnceLock::new();
    GROUPS.get_or_init(build_groups)
}

/// Looks up a preset group by key (ASCII case-insensitive).
///
/// # Examples
///
/// ```
/// use widgetboard_core::presets;
///
/// let cwpp = presets::group("CWPP").unwrap();
/// assert_eq!(cwpp.templates.len(), 3);
/// assert!(presets::group("billing").is_none());
/// ```
#[must_use]
pub fn group(key: &str) -> Option<&'static PresetGroup> {
    groups().iter().find(|g| g.key.eq_ignore_ascii_case(key))
}

fn build_groups() -> Vec<PresetGroup> {
    use WidgetKind::{Alert, Chart, Metric, Progress};

    vec![
        preset_group(
            "cspm",
            "CSPM",
            &[
                (
                    "Cloud Accounts",
                    "Connected and disconnected cloud accounts overview",
                    Chart,
                ),
                (
                    "Cloud Account Risk Assessment",
                    "Security risks across cloud accounts",
                    Chart,
                ),
                (
                    "Security Compliance",
                    "Compliance status across services",
                    Metric,
                ),
            ],
        ),
        preset_group(
            "cwpp",
            "CWPP",
            &[
                (
                    "Top 5 Namespace Specific Alerts",
                    "Critical namespace alerts",
                    Alert,
                ),
                ("Workload Alerts", "Workload security alerts", Alert),
                (
                    "Threat Detection",
                    "Real-time threat detection status",
                    Metric,
                ),
            ],
        ),
        preset_group(
            "image",
            "Image",
            &[
                (
                    "Image Vulnerability Scan",
                    "Container image security scan results",
                    Progress,
                ),
                ("Registry Security", "Registry security compliance", Metric),
                (
                    "Base Image Analysis",
                    "Base image security assessment",
                    Chart,
                ),
            ],
        ),
        preset_group(
            "ticket",
            "Ticket",
            &[
                (
                    "Open Security Tickets",
                    "Current open security tickets",
                    Metric,
                ),
                (
                    "Ticket Resolution Time",
                    "Average ticket resolution metrics",
                    Chart,
                ),
                (
                    "Critical Incidents",
                    "High priority security incidents",
                    Alert,
                ),
            ],
        ),
    ]
}

fn preset_group(
    key: &'static str,
    label: &'static str,
    templates: &[(&str, &str, WidgetKind)],
) -> PresetGroup {
    PresetGroup {
        key,
        label,
        templates: templates
            .iter()
            .map(|&(name, text, kind)| WidgetDraft::of_kind(name, text, kind))
            .collect(),
    }
}
