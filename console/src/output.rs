//! Writes command results as text or JSON.
//!
//! Text output is one line per category or widget with an indented detail
//! line for widgets that carry data. JSON output is one document per line so
//! scripts can consume it with a line reader.

use std::io::Write;

use serde::Serialize;
use serde_json::json;
use widgetboard_core::presets::PresetGroup;
use widgetboard_core::{Category, ChartData, ProgressData, SearchHit, Widget, WidgetContent};

use crate::config::OutputFormat;
use crate::error::Result;

/// Output sink bound to a format.
#[derive(Debug)]
pub struct Output<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Output<W> {
    #[must_use]
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn categories(&mut self, categories: &[Category]) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&json!({ "categories": categories })),
            OutputFormat::Text => {
                for category in categories {
                    self.category_text(category)?;
                }
                Ok(())
            }
        }
    }

    pub fn category(&mut self, category: &Category) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&json!({ "category": category })),
            OutputFormat::Text => self.category_text(category),
        }
    }

    pub fn hits(&mut self, term: &str, hits: &[SearchHit<'_>]) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&json!({ "term": term, "hits": hits })),
            OutputFormat::Text => {
                if term.is_empty() {
                    writeln!(self.out, "search cleared")?;
                    return Ok(());
                }
                writeln!(self.out, "{} match(es) for '{term}'", hits.len())?;
                for hit in hits {
                    write!(self.out, "  [{}] ", hit.category_id)?;
                    self.widget_text(hit.widget)?;
                }
                Ok(())
            }
        }
    }

    pub fn preset_groups(&mut self, groups: &[PresetGroup]) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let groups: Vec<_> = groups.iter().map(preset_json).collect();
                self.json(&json!({ "groups": groups }))
            }
            OutputFormat::Text => {
                for group in groups {
                    writeln!(
                        self.out,
                        "{:<8} {} ({} widgets)",
                        group.key,
                        group.label,
                        group.templates.len()
                    )?;
                }
                Ok(())
            }
        }
    }

    pub fn preset_group(&mut self, group: &PresetGroup) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&json!({ "group": preset_json(group) })),
            OutputFormat::Text => {
                writeln!(self.out, "{} [{}]", group.label, group.key)?;
                for template in &group.templates {
                    writeln!(
                        self.out,
                        "  - {} ({}): {}",
                        template.name,
                        template.kind(),
                        template.text
                    )?;
                }
                Ok(())
            }
        }
    }

    /// Reports widgets added to `category_id`.
    ///
    /// An empty `widgets` means the category does not exist and nothing was
    /// added.
    pub fn added(&mut self, category_id: &str, widgets: &[&Widget]) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&json!({
                "event": "added",
                "categoryId": category_id,
                "widgets": widgets,
            })),
            OutputFormat::Text => {
                if widgets.is_empty() {
                    writeln!(self.out, "no category '{category_id}', nothing added")?;
                }
                for widget in widgets {
                    writeln!(
                        self.out,
                        "added {} to {category_id}: {}",
                        widget.id, widget.name
                    )?;
                }
                Ok(())
            }
        }
    }

    /// Reports the outcome of a remove; `None` means nothing matched.
    pub fn removed(
        &mut self,
        category_id: &str,
        widget_id: &str,
        removed: Option<&Widget>,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&json!({
                "event": "removed",
                "categoryId": category_id,
                "widgetId": widget_id,
                "widget": removed,
            })),
            OutputFormat::Text => {
                match removed {
                    Some(widget) => {
                        writeln!(self.out, "removed {widget_id} from {category_id}: {}", widget.name)?
                    }
                    None => writeln!(
                        self.out,
                        "no widget '{widget_id}' in '{category_id}', nothing removed"
                    )?,
                }
                Ok(())
            }
        }
    }

    /// Writes a short status line, e.g. after `reset`.
    pub fn message(&mut self, message: &str) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&json!({ "message": message })),
            OutputFormat::Text => {
                writeln!(self.out, "{message}")?;
                Ok(())
            }
        }
    }

    /// Reports an error the shell recovers from.
    pub fn error(&mut self, error: &dyn std::error::Error) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&json!({ "error": error.to_string() })),
            OutputFormat::Text => {
                writeln!(self.out, "error: {error}")?;
                Ok(())
            }
        }
    }

    /// Writes usage lines.
    pub fn usage(&mut self, usage: &[(&str, &str)]) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let commands: Vec<_> = usage
                    .iter()
                    .map(|(usage, about)| json!({ "usage": usage, "about": about }))
                    .collect();
                self.json(&json!({ "commands": commands }))
            }
            OutputFormat::Text => {
                for (usage, about) in usage {
                    writeln!(self.out, "  {usage:<44} {about}")?;
                }
                Ok(())
            }
        }
    }

    /// Writes `prompt` without a newline and flushes.
    pub fn prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn category_text(&mut self, category: &Category) -> Result<()> {
        writeln!(
            self.out,
            "{} [{}] ({} widgets)",
            category.name,
            category.id,
            category.widgets.len()
        )?;
        for widget in &category.widgets {
            write!(self.out, "  - ")?;
            self.widget_text(widget)?;
        }
        Ok(())
    }

    fn widget_text(&mut self, widget: &Widget) -> Result<()> {
        writeln!(
            self.out,
            "{} {} ({}): {}",
            widget.id,
            widget.name,
            widget.kind(),
            widget.text
        )?;
        match &widget.content {
            WidgetContent::Chart(Some(data)) => writeln!(self.out, "      {}", chart_line(data))?,
            WidgetContent::Progress(Some(data)) => {
                writeln!(self.out, "      {}", progress_line(data))?
            }
            _ => {}
        }
        Ok(())
    }
}

fn preset_json(group: &PresetGroup) -> serde_json::Value {
    json!({
        "key": group.key,
        "label": group.label,
        "templates": group.templates,
    })
}

fn chart_line(data: &ChartData) -> String {
    let buckets = data
        .buckets
        .iter()
        .map(|b| format!("{} {}", b.label, b.value))
        .collect::<Vec<_>>()
        .join(" | ");
    match data.total {
        Some(total) => format!("total {total}: {buckets}"),
        None => buckets,
    }
}

fn progress_line(data: &ProgressData) -> String {
    format!(
        "total {}: critical {} ({:.1}%), high {} ({:.1}%)",
        data.total,
        data.critical,
        data.critical_share() * 100.0,
        data.high,
        data.high_share() * 100.0
    )
}
