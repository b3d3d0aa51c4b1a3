//! Add-widget forms.
//!
//! Two ways to add widgets, mirroring the add-widget dialog:
//!
//! - [`CustomWidgetForm`]: free-form name and text, always a metric widget
//! - [`PresetSelection`]: tick predefined templates from one group, then confirm
//!
//! Validation lives here, not in the store: the store accepts any draft, and
//! these forms refuse to submit blank fields or an empty selection.

use tracing::debug;
use widgetboard_core::presets::{self, PresetGroup};
use widgetboard_core::{DashboardStore, WidgetDraft, WidgetKind};

use crate::error::FormError;

/// Category preselected by the custom form when none is given.
pub const DEFAULT_FORM_CATEGORY: &str = "cspm";

/// Checks one text field of the custom widget form.
///
/// A field is valid when it contains at least one non-whitespace character.
///
/// # Examples
///
/// ```
/// use widgetboard_console::form::validate_widget_field;
/// use widgetboard_console::error::FormError;
///
/// assert!(validate_widget_field("Workload Alerts", FormError::EmptyName).is_ok());
/// assert_eq!(
///     validate_widget_field("   ", FormError::EmptyName),
///     Err(FormError::EmptyName)
/// );
/// ```
pub fn validate_widget_field(value: &str, error: FormError) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(())
}

/// State of the "create custom widget" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomWidgetForm {
    /// Target category id.
    pub category_id: String,
    /// Widget name input.
    pub name: String,
    /// Widget text input.
    pub text: String,
}

impl Default for CustomWidgetForm {
    fn default() -> Self {
        Self::new(DEFAULT_FORM_CATEGORY)
    }
}

impl CustomWidgetForm {
    /// Creates an empty form targeting `category_id`.
    #[must_use]
    pub fn new(category_id: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
            name: String::new(),
            text: String::new(),
        }
    }

    /// Returns `Ok(())` when both name and text are non-blank.
    ///
    /// # Errors
    ///
    /// [`FormError::EmptyName`] is reported before [`FormError::EmptyText`].
    pub fn validate(&self) -> Result<(), FormError> {
        validate_widget_field(&self.name, FormError::EmptyName)?;
        validate_widget_field(&self.text, FormError::EmptyText)
    }

    /// Validates the form and adds a metric widget to the target category.
    ///
    /// Name and text are stored as typed, without trimming. On success the
    /// name and text inputs are cleared and the new widget id is returned, or
    /// `None` if the target category does not exist.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] and leaves the form untouched when validation
    /// fails.
    pub fn submit(&mut self, store: &mut DashboardStore) -> Result<Option<String>, FormError> {
        self.validate()?;

        let draft = WidgetDraft::of_kind(
            std::mem::take(&mut self.name),
            std::mem::take(&mut self.text),
            WidgetKind::Metric,
        );
        let added = store
            .add_widget(&self.category_id, draft)
            .map(|widget| widget.id.clone());
        debug!(
            category_id = %self.category_id,
            added = added.is_some(),
            "Custom widget form submitted"
        );
        Ok(added)
    }
}

/// State of the "select from categories" form: ticked templates of one group.
#[derive(Debug, Clone)]
pub struct PresetSelection {
    group: &'static PresetGroup,
    selected: Vec<String>,
}

impl PresetSelection {
    /// Opens a selection over the preset group `group_key`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownGroup`] if no group has that key.
    pub fn new(group_key: &str) -> Result<Self, FormError> {
        let group =
            presets::group(group_key).ok_or_else(|| FormError::UnknownGroup(group_key.to_string()))?;
        Ok(Self {
            group,
            selected: Vec::new(),
        })
    }

    /// The group this selection draws from.
    #[must_use]
    pub fn group(&self) -> &'static PresetGroup {
        self.group
    }

    /// Ticks or unticks the template called `name`.
    ///
    /// Returns `true` if the template is ticked afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownTemplate`] if the group has no such template.
    pub fn toggle(&mut self, name: &str) -> Result<bool, FormError> {
        if self.group.template(name).is_none() {
            return Err(FormError::UnknownTemplate {
                group: self.group.key.to_string(),
                name: name.to_string(),
            });
        }

        if let Some(pos) = self.selected.iter().position(|s| s == name) {
            self.selected.remove(pos);
            Ok(false)
        } else {
            self.selected.push(name.to_string());
            Ok(true)
        }
    }

    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|s| s == name)
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Adds every ticked template to `target`, or to the category named like
    /// the group when `target` is `None`.
    ///
    /// Templates are added in the group's order, not the order they were
    /// ticked. The selection is cleared afterwards. Returns the ids of the
    /// widgets actually added, which is empty when the target category does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NothingSelected`] if no template is ticked.
    pub fn confirm(
        &mut self,
        store: &mut DashboardStore,
        target: Option<&str>,
    ) -> Result<Vec<String>, FormError> {
        if self.selected.is_empty() {
            return Err(FormError::NothingSelected);
        }

        let target = target.unwrap_or(self.group.key);
        let added: Vec<String> = self
            .group
            .templates
            .iter()
            .filter(|template| self.is_selected(&template.name))
            .filter_map(|template| {
                store
                    .add_widget(target, template.clone())
                    .map(|widget| widget.id.clone())
            })
            .collect();

        debug!(
            group = self.group.key,
            target,
            selected = self.selected.len(),
            added = added.len(),
            "Preset selection confirmed"
        );
        self.selected.clear();
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use widgetboard_core::{SequentialIds, WidgetContent};

    fn store() -> DashboardStore {
        DashboardStore::seeded(SequentialIds::default())
    }

    #[test]
    fn default_form_targets_cspm() {
        let form = CustomWidgetForm::default();
        assert_eq!(form.category_id, "cspm");
        assert!(form.name.is_empty());
    }

    #[test]
    fn blank_name_is_rejected_first() {
        let form = CustomWidgetForm {
            category_id: "cspm".to_string(),
            name: "  ".to_string(),
            text: String::new(),
        };
        assert_eq!(form.validate(), Err(FormError::EmptyName));
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut form = CustomWidgetForm::new("cspm");
        form.name = "Compliance".to_string();
        form.text = "\t".to_string();
        let mut store = store();
        assert_eq!(form.submit(&mut store), Err(FormError::EmptyText));
        assert_eq!(form.name, "Compliance");
        assert_eq!(store.widget_count(), 6);
    }

    #[test]
    fn submit_adds_untrimmed_metric_and_clears_inputs() {
        let mut form = CustomWidgetForm::new("cwpp");
        form.name = " Threat Detection ".to_string();
        form.text = "Real-time status".to_string();
        let mut store = store();

        let id = form.submit(&mut store).unwrap().unwrap();

        let widget = store.category("cwpp").unwrap().widget(&id).unwrap();
        assert_eq!(widget.name, " Threat Detection ");
        assert_eq!(widget.content, WidgetContent::Metric);
        assert!(form.name.is_empty());
        assert!(form.text.is_empty());
        assert_eq!(form.category_id, "cwpp");
    }

    #[test]
    fn submit_to_unknown_category_adds_nothing() {
        let mut form = CustomWidgetForm::new("ticket");
        form.name = "Open Tickets".to_string();
        form.text = "Current".to_string();
        let mut store = store();
        assert_eq!(form.submit(&mut store), Ok(None));
        assert_eq!(store.widget_count(), 6);
    }

    #[test]
    fn unknown_group_is_rejected() {
        assert_eq!(
            PresetSelection::new("billing").unwrap_err(),
            FormError::UnknownGroup("billing".to_string())
        );
    }

    #[test]
    fn toggle_flips_selection() {
        let mut selection = PresetSelection::new("cwpp").unwrap();
        assert_eq!(selection.toggle("Workload Alerts"), Ok(true));
        assert!(selection.is_selected("Workload Alerts"));
        assert_eq!(selection.toggle("Workload Alerts"), Ok(false));
        assert_eq!(selection.selected_count(), 0);
    }

    #[test]
    fn toggle_unknown_template_is_rejected() {
        let mut selection = PresetSelection::new("cwpp").unwrap();
        assert!(matches!(
            selection.toggle("Cloud Accounts"),
            Err(FormError::UnknownTemplate { .. })
        ));
    }

    #[test]
    fn confirm_requires_selection() {
        let mut selection = PresetSelection::new("cspm").unwrap();
        let mut store = store();
        assert_eq!(
            selection.confirm(&mut store, None),
            Err(FormError::NothingSelected)
        );
    }

    #[test]
    fn confirm_adds_in_template_order_and_clears() {
        let mut selection = PresetSelection::new("cwpp").unwrap();
        selection.toggle("Threat Detection").unwrap();
        selection.toggle("Top 5 Namespace Specific Alerts").unwrap();
        let mut store = store();

        let added = selection.confirm(&mut store, None).unwrap();

        assert_eq!(added, ["widget-1", "widget-2"]);
        let names: Vec<_> = store.category("cwpp").unwrap().widgets[2..]
            .iter()
            .map(|w| w.name.as_str())
            .collect();
        assert_eq!(names, ["Top 5 Namespace Specific Alerts", "Threat Detection"]);
        assert_eq!(selection.selected_count(), 0);
    }

    #[test]
    fn confirm_into_missing_default_category_adds_nothing() {
        let mut selection = PresetSelection::new("image").unwrap();
        selection.toggle("Registry Security").unwrap();
        let mut store = store();

        assert_eq!(selection.confirm(&mut store, None), Ok(Vec::new()));
        assert_eq!(store.widget_count(), 6);
        assert_eq!(selection.selected_count(), 0);
    }

    #[test]
    fn confirm_into_explicit_target() {
        let mut selection = PresetSelection::new("image").unwrap();
        selection.toggle("Image Vulnerability Scan").unwrap();
        let mut store = store();

        let added = selection.confirm(&mut store, Some("registry")).unwrap();

        assert_eq!(added.len(), 1);
        let widget = store.category("registry").unwrap().widget(&added[0]).unwrap();
        assert_eq!(widget.kind(), WidgetKind::Progress);
    }
}
