//! Page controller owning the template list and mediating every API call.
//!
//! All network failures end up as a [`PageError`] on the page; nothing is
//! propagated to the caller. Operations take `&mut self`, so a page runs one
//! request at a time and applies each response when it arrives.

use tracing::{debug, error, info};

use crate::{
    clients::{confirm::Confirm, template::TemplateApi},
    form::TemplateForm,
    models::{
        status::{PageError, PageStatus},
        template::Template,
    },
};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this template?";

/// What the page shows below its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView<'a> {
    Loading,
    Failed(PageError),
    Empty,
    Cards(&'a [Template]),
}

pub struct TemplatesPage<A, C> {
    api: A,
    confirm: C,
    templates: Vec<Template>,
    selected: Option<Template>,
    form: Option<TemplateForm>,
    loading: bool,
    load_failed: bool,
    error: Option<PageError>,
}

impl<A, C> TemplatesPage<A, C>
where
    A: TemplateApi,
    C: Confirm,
{
    /// A page that has not fetched anything yet. It starts out loading.
    pub fn new(api: A, confirm: C) -> Self {
        Self {
            api,
            confirm,
            templates: Vec::new(),
            selected: None,
            form: None,
            loading: true,
            load_failed: false,
            error: None,
        }
    }

    pub async fn mount(api: A, confirm: C) -> Self {
        let mut page = Self::new(api, confirm);
        page.load().await;
        page
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn selected(&self) -> Option<&Template> {
        self.selected.as_ref()
    }

    pub fn form(&self) -> Option<&TemplateForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut TemplateForm> {
        self.form.as_mut()
    }

    pub fn is_modal_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<PageError> {
        self.error
    }

    /// The header's "new template" action is disabled while an error shows.
    pub fn can_create(&self) -> bool {
        self.error.is_none()
    }

    pub fn status(&self) -> PageStatus {
        if self.loading {
            PageStatus::Loading
        } else if self.load_failed {
            PageStatus::LoadFailed
        } else if self.form.is_some() && self.selected.is_some() {
            PageStatus::Editing
        } else if self.form.is_some() {
            PageStatus::Creating
        } else {
            PageStatus::Loaded
        }
    }

    pub fn view(&self) -> PageView<'_> {
        if let Some(error) = self.error {
            PageView::Failed(error)
        } else if self.loading {
            PageView::Loading
        } else if self.templates.is_empty() {
            PageView::Empty
        } else {
            PageView::Cards(&self.templates)
        }
    }

    pub fn find(&self, id: &str) -> Option<&Template> {
        self.templates
            .iter()
            .find(|t| t.id.as_deref() == Some(id))
    }

    /// Replaces the whole list with the service's. On failure the list is kept.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match self.api.list().await {
            Ok(templates) => {
                info!(count = templates.len(), "Templates loaded");
                self.templates = templates;
                self.load_failed = false;
            }
            Err(e) => {
                error!(error = %e, "Failed to load templates");
                self.error = Some(PageError::Load);
                self.load_failed = true;
            }
        }

        self.loading = false;
    }

    pub async fn retry(&mut self) {
        debug!("Retrying template load");
        self.load().await;
    }

    pub fn open_create(&mut self) -> bool {
        if !self.can_create() {
            debug!("New template action disabled while an error is shown");
            return false;
        }

        self.selected = None;
        self.form = Some(TemplateForm::new(None));
        true
    }

    /// Opens the modal pre-filled with the template whose id is `id`.
    pub fn open_edit(&mut self, id: &str) -> bool {
        if self.error.is_some() {
            debug!(id, "Card actions hidden while an error is shown");
            return false;
        }

        let Some(template) = self.find(id).cloned() else {
            debug!(id, "No template with that id to edit");
            return false;
        };

        match self.form.as_mut() {
            Some(form) => form.sync_with(Some(&template)),
            None => self.form = Some(TemplateForm::new(Some(&template))),
        }
        self.selected = Some(template);
        true
    }

    /// Cancel, or the modal's own close control.
    pub fn close_modal(&mut self) {
        self.form = None;
        self.selected = None;
    }

    /// Submits the open form. A valid candidate goes to update when a template
    /// is selected and to create otherwise.
    pub async fn submit_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        let Ok(candidate) = form.submit() else {
            return;
        };

        if self.selected.is_some() {
            self.update(candidate).await;
        } else {
            self.create(candidate).await;
        }
    }

    pub async fn create(&mut self, candidate: Template) {
        self.error = None;

        match self.api.create(&candidate).await {
            Ok(created) => {
                info!(id = ?created.id, name = %created.name, "Template created");
                self.templates.push(created);
                self.form = None;
            }
            Err(e) => {
                error!(error = %e, "Failed to create template");
                self.error = Some(PageError::Create);
            }
        }
    }

    pub async fn update(&mut self, candidate: Template) {
        self.error = None;

        let Some(id) = candidate.id.clone() else {
            error!(name = %candidate.name, "Cannot update a template without an id");
            self.error = Some(PageError::Update);
            return;
        };

        match self.api.update(&id, &candidate).await {
            Ok(updated) => {
                info!(id = %id, "Template updated");
                for entry in self
                    .templates
                    .iter_mut()
                    .filter(|t| t.id.is_some() && t.id == updated.id)
                {
                    *entry = updated.clone();
                }
                self.selected = None;
                self.form = None;
            }
            Err(e) => {
                error!(error = %e, id = %id, "Failed to update template");
                self.error = Some(PageError::Update);
            }
        }
    }

    /// Removes the template after confirmation. A failed call leaves the list
    /// as it was, even if the service did apply the delete.
    pub async fn delete(&mut self, id: &str) {
        if self.error.is_some() {
            debug!(id, "Card actions hidden while an error is shown");
            return;
        }

        if !self.confirm.confirm(DELETE_PROMPT).await {
            debug!(id, "Delete declined");
            return;
        }

        self.error = None;

        match self.api.delete(id).await {
            Ok(()) => {
                info!(id, "Template deleted");
                self.templates.retain(|t| t.id.as_deref() != Some(id));
            }
            Err(e) => {
                error!(error = %e, id, "Failed to delete template");
                self.error = Some(PageError::Delete);
            }
        }
    }
}
