//! Demo categories installed by [`DashboardStore::initialize`].
//!
//! [`DashboardStore::initialize`]: crate::store::DashboardStore::initialize

use crate::types::{
    Category, ChartBucket, ChartData, ProgressData, Widget, WidgetContent, WidgetDraft,
};

/// Placeholder text shown by alert widgets that have nothing to plot.
pub const NO_GRAPH_DATA: &str = "No Graph data available!";

/// Builds the seed catalog: CSPM, CWPP, and registry scan sections.
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![
        Category::new(
            "cspm",
            "CSPM Executive Dashboard",
            vec![
                seeded(
                    "cloud-accounts",
                    "Cloud Accounts",
                    "Connected (2), Not Connected (2)",
                    WidgetContent::Chart(Some(ChartData {
                        total: None,
                        buckets: vec![
                            ChartBucket::new("Connected", 2),
                            ChartBucket::new("Not Connected", 2),
                        ],
                    })),
                ),
                seeded(
                    "cloud-risk-assessment",
                    "Cloud Account Risk Assessment",
                    "9659 Total Issues",
                    WidgetContent::Chart(Some(ChartData {
                        total: Some(9659),
                        buckets: vec![
                            ChartBucket::new("Failed", 1689),
                            ChartBucket::new("Warning", 681),
                            ChartBucket::new("Not Available", 36),
                            ChartBucket::new("Passed", 7253),
                        ],
                    })),
                ),
            ],
        ),
        Category::new(
            "cwpp",
            "CWPP Dashboard",
            vec![
                seeded(
                    "namespace-alerts",
                    "Top 5 Namespace Specific Alerts",
                    NO_GRAPH_DATA,
                    WidgetContent::Alert,
                ),
                seeded(
                    "workload-alerts",
                    "Workload Alerts",
                    NO_GRAPH_DATA,
                    WidgetContent::Alert,
                ),
            ],
        ),
        Category::new(
            "registry",
            "Registry Scan",
            vec![
                seeded(
                    "image-risk",
                    "Image Risk Assessment",
                    "1470 Total Vulnerabilities",
                    WidgetContent::Progress(Some(ProgressData {
                        total: 1470,
                        critical: 9,
                        high: 150,
                    })),
                ),
                seeded(
                    "image-security",
                    "Image Security Issues",
                    "2 Total Images",
                    WidgetContent::Progress(Some(ProgressData {
                        total: 2,
                        critical: 2,
                        high: 2,
                    })),
                ),
            ],
        ),
    ]
}

fn seeded(id: &str, name: &str, text: &str, content: WidgetContent) -> Widget {
    Widget::from_draft(id, WidgetDraft::new(name, text, content))
}
