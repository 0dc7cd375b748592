//! Create/edit form state for a single template.

use tracing::debug;

use crate::models::{
    template::{Template, TemplateKind},
    validation::{FormError, join_variables, parse_variables, validate_template},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateForm {
    data: Template,
    source_id: Option<String>,
    editing: bool,
    error: Option<FormError>,
}

impl TemplateForm {
    /// Pre-filled from `template` when editing, otherwise blank with type email.
    pub fn new(template: Option<&Template>) -> Self {
        Self {
            data: template.cloned().unwrap_or_default(),
            source_id: template.and_then(|t| t.id.clone()),
            editing: template.is_some(),
            error: None,
        }
    }

    /// Resets the fields when the edited template changes identity. The same
    /// template again keeps whatever has been typed so far.
    pub fn sync_with(&mut self, template: Option<&Template>) {
        let incoming_id = template.and_then(|t| t.id.clone());

        if incoming_id == self.source_id && template.is_some() == self.editing {
            return;
        }

        debug!(
            from = ?self.source_id,
            to = ?incoming_id,
            "Edited template changed, resetting form"
        );
        *self = Self::new(template);
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn title(&self) -> &'static str {
        if self.editing {
            "Edit template"
        } else {
            "New template"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing { "Update" } else { "Create" }
    }

    pub fn data(&self) -> &Template {
        &self.data
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn content(&self) -> &str {
        &self.data.content
    }

    pub fn kind(&self) -> &TemplateKind {
        &self.data.kind
    }

    pub fn variables(&self) -> &[String] {
        &self.data.variables
    }

    /// Display value of the variables field: the parsed sequence joined with ", ".
    pub fn variables_input(&self) -> String {
        join_variables(&self.data.variables)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.data.name = name.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.data.content = content.into();
    }

    pub fn set_kind(&mut self, kind: TemplateKind) {
        self.data.kind = kind;
    }

    pub fn set_variables_input(&mut self, input: &str) {
        self.data.variables = parse_variables(input);
    }

    /// Validates and hands back the candidate. Stored values are not trimmed;
    /// trimming only applies to the emptiness checks.
    pub fn submit(&mut self) -> Result<Template, FormError> {
        self.error = None;

        if let Err(e) = validate_template(&self.data) {
            debug!(error = %e, "Form submission rejected");
            self.error = Some(e.clone());
            return Err(e);
        }

        Ok(self.data.clone())
    }
}
