//! Line-oriented command shell over a [`DashboardStore`].
//!
//! The shell borrows the application's single store for its whole run and
//! executes one [`Command`] per input line. Parse errors and rejected forms
//! are written to the output and the shell keeps going; only I/O and JSON
//! failures end the run.
//!
//! # Example
//!
//! ```
//! use widgetboard_console::config::OutputFormat;
//! use widgetboard_console::shell::Shell;
//! use widgetboard_core::{DashboardStore, SequentialIds};
//!
//! let mut store = DashboardStore::seeded(SequentialIds::default());
//! let script = "remove cwpp workload-alerts\nsearch alert\n";
//!
//! let mut shell = Shell::new(&mut store, Vec::new(), OutputFormat::Text);
//! shell.run(script.as_bytes(), None).unwrap();
//! let output = String::from_utf8(shell.into_output()).unwrap();
//!
//! assert!(output.contains("1 match(es) for 'alert'"));
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};
use widgetboard_core::presets;
use widgetboard_core::{DashboardStore, WidgetDraft};

use crate::command::{Command, USAGE};
use crate::config::OutputFormat;
use crate::error::{ConsoleError, FormError, Result};
use crate::form::{CustomWidgetForm, PresetSelection};
use crate::output::Output;

/// Whether the shell should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Command interpreter bound to one store and one output.
#[derive(Debug)]
pub struct Shell<'a, W> {
    store: &'a mut DashboardStore,
    output: Output<W>,
}

impl<'a, W: Write> Shell<'a, W> {
    #[must_use]
    pub fn new(store: &'a mut DashboardStore, out: W, format: OutputFormat) -> Self {
        Self {
            store,
            output: Output::new(out, format),
        }
    }

    /// Returns the store this shell drives.
    #[must_use]
    pub fn store(&self) -> &DashboardStore {
        self.store
    }

    /// Consumes the shell and returns the output writer.
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    /// Reads and executes lines until end of input or `quit`.
    ///
    /// When `prompt` is given it is written before every line.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: Option<&str>) -> Result<()> {
        info!("Shell started");
        let mut lines = input.lines();
        let mut executed = 0usize;

        loop {
            if let Some(prompt) = prompt {
                self.output.prompt(prompt)?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            executed += 1;
            if self.execute_line(&line)? == Flow::Quit {
                break;
            }
        }

        self.output.flush()?;
        info!(lines = executed, "Shell finished");
        Ok(())
    }

    /// Parses and executes one line.
    ///
    /// # Errors
    ///
    /// Command and form errors are reported to the output and yield
    /// [`Flow::Continue`]; only unrecoverable errors are returned.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let result = Command::parse(line)
            .map_err(ConsoleError::from)
            .and_then(|command| match command {
                Some(command) => self.execute(command),
                None => Ok(Flow::Continue),
            });

        match result {
            Err(err) if err.is_recoverable() => {
                warn!(line, error = %err, "Command failed");
                match err {
                    ConsoleError::Command(inner) => self.output.error(&inner)?,
                    ConsoleError::Form(inner) => self.output.error(&inner)?,
                    other => self.output.error(&other)?,
                }
                Ok(Flow::Continue)
            }
            other => other,
        }
    }

    /// Executes one parsed command against the store.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Form`] for rejected forms and I/O or JSON
    /// errors from writing output.
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "Executing command");

        match command {
            Command::List => self.output.categories(self.store.categories())?,
            Command::Show { category } => match self.store.category(&category) {
                Some(found) => self.output.category(found)?,
                None => self
                    .output
                    .message(&format!("no category '{category}'"))?,
            },
            Command::Add {
                category,
                kind,
                name,
                text,
            } => {
                let draft = WidgetDraft::of_kind(name, text, kind);
                let added = self.store.add_widget(&category, draft).cloned();
                self.output.added(&category, &added.iter().collect::<Vec<_>>())?;
            }
            Command::Form {
                category,
                name,
                text,
            } => {
                let mut form = CustomWidgetForm {
                    category_id: category,
                    name,
                    text,
                };
                let added = form.submit(self.store)?;
                self.report_added(&form.category_id, added.as_slice())?;
            }
            Command::Presets { group: None } => self.output.preset_groups(presets::groups())?,
            Command::Presets { group: Some(key) } => {
                let group = presets::group(&key).ok_or(FormError::UnknownGroup(key))?;
                self.output.preset_group(group)?;
            }
            Command::Pick { group, names, into } => {
                let mut selection = PresetSelection::new(&group)?;
                for name in &names {
                    if !selection.is_selected(name) {
                        selection.toggle(name)?;
                    }
                }
                let target = into.as_deref().unwrap_or(selection.group().key);
                let added = selection.confirm(self.store, Some(target))?;
                self.report_added(target, &added)?;
            }
            Command::Remove {
                category,
                widget_id,
            } => {
                let removed = self.store.remove_widget(&category, &widget_id);
                self.output
                    .removed(&category, &widget_id, removed.as_ref())?;
            }
            Command::Search { term } => {
                self.store.set_search_term(term);
                self.output
                    .hits(self.store.search_term(), &self.store.filtered_widgets())?;
            }
            Command::Clear => {
                self.store.set_search_term("");
                self.output.message("search cleared")?;
            }
            Command::Reset => {
                self.store.initialize();
                self.output.message(&format!(
                    "catalog reset: {} categories, {} widgets",
                    self.store.categories().len(),
                    self.store.widget_count()
                ))?;
            }
            Command::Help => self.output.usage(USAGE)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn report_added(&mut self, category_id: &str, ids: &[String]) -> Result<()> {
        let widgets: Vec<_> = ids
            .iter()
            .filter_map(|id| self.store.category(category_id)?.widget(id))
            .collect();
        self.output.added(category_id, &widgets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use widgetboard_core::SequentialIds;

    fn run_script(format: OutputFormat, script: &str) -> (DashboardStore, String) {
        let mut store = DashboardStore::seeded(SequentialIds::default());
        let mut shell = Shell::new(&mut store, Vec::new(), format);
        shell.run(script.as_bytes(), None).unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (store, output)
    }

    #[test]
    fn add_then_remove_round_trips_catalog() {
        let (store, output) = run_script(
            OutputFormat::Text,
            "add cspm metric Compliance 'Across services'\nremove cspm widget-1\n",
        );
        assert!(output.contains("added widget-1 to cspm: Compliance"));
        assert!(output.contains("removed widget-1 from cspm: Compliance"));
        assert_eq!(store.widget_count(), 6);
    }

    #[test]
    fn errors_are_reported_and_shell_continues() {
        let (store, output) = run_script(
            OutputFormat::Text,
            "frob\nform cspm '' text\nadd cspm metric A B\n",
        );
        assert!(output.contains("error: unknown command 'frob' (try 'help')"));
        assert!(output.contains("error: widget name cannot be empty"));
        assert_eq!(store.widget_count(), 7);
    }

    #[test]
    fn quit_stops_reading() {
        let (store, _) = run_script(OutputFormat::Text, "quit\nadd cspm metric A B\n");
        assert_eq!(store.widget_count(), 6);
    }

    #[test]
    fn comments_and_blank_lines_produce_no_output() {
        let (_, output) = run_script(OutputFormat::Text, "# header\n\n   \n");
        assert!(output.is_empty());
    }

    #[test]
    fn pick_defaults_to_group_category() {
        let (store, output) = run_script(
            OutputFormat::Text,
            "pick cwpp 'Threat Detection' 'Threat Detection'\npick ticket 'Critical Incidents'\n",
        );
        assert_eq!(store.category("cwpp").unwrap().widgets.len(), 3);
        assert!(output.contains("added widget-1 to cwpp: Threat Detection"));
        assert!(output.contains("no category 'ticket', nothing added"));
    }

    #[test]
    fn search_keeps_term_on_store() {
        let (store, output) = run_script(OutputFormat::Text, "search Cloud Account\n");
        assert_eq!(store.search_term(), "Cloud Account");
        assert!(output.contains("2 match(es) for 'Cloud Account'"));
    }

    #[test]
    fn clear_resets_search_term() {
        let (store, _) = run_script(OutputFormat::Text, "search alert\nclear\n");
        assert_eq!(store.search_term(), "");
        assert!(store.filtered_widgets().is_empty());
    }

    #[test]
    fn reset_restores_seed() {
        let (store, output) = run_script(
            OutputFormat::Text,
            "remove cspm cloud-accounts\nreset\n",
        );
        assert_eq!(store.widget_count(), 6);
        assert!(output.contains("catalog reset: 3 categories, 6 widgets"));
    }

    #[test]
    fn unknown_preset_group_is_reported() {
        let (_, output) = run_script(OutputFormat::Json, "presets billing\n");
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(value["error"], "unknown widget group 'billing'");
    }

    #[test]
    fn show_unknown_category_is_a_message() {
        let (_, output) = run_script(OutputFormat::Text, "show image\n");
        assert_eq!(output, "no category 'image'\n");
    }

    #[test]
    fn form_into_unknown_category_reports_nothing_added() {
        let mut store = DashboardStore::seeded(SequentialIds::default());
        let mut shell = Shell::new(&mut store, Vec::new(), OutputFormat::Text);
        assert_eq!(
            shell.execute_line("form ticket 'Open Tickets' Current").unwrap(),
            Flow::Continue
        );
        assert_eq!(
            shell.execute_line("form cspm Compliance 'Across services'").unwrap(),
            Flow::Continue
        );
        assert_eq!(shell.store().widget_count(), 7);
        assert_eq!(
            shell.store().category("cspm").unwrap().widgets[2].kind(),
            widgetboard_core::WidgetKind::Metric
        );

        let output = String::from_utf8(shell.into_output()).unwrap();
        assert_eq!(
            output,
            "no category 'ticket', nothing added\nadded widget-1 to cspm: Compliance\n"
        );
    }

    #[test]
    fn prompt_is_written_before_each_line() {
        let mut store = DashboardStore::seeded(SequentialIds::default());
        let mut shell = Shell::new(&mut store, Vec::new(), OutputFormat::Text);
        shell.run("clear\n".as_bytes(), Some("> ")).unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();
        assert_eq!(output, "> search cleared\n> ");
    }
}
