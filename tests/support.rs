use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use plantillas::{
    clients::{confirm::Confirm, template::TemplateApi},
    models::template::{Template, TemplateKind},
};

#[derive(Debug, Default)]
pub struct FakeState {
    pub templates: Vec<Template>,
    pub next_id: u32,
    pub fail_list: bool,
    pub fail_create: bool,
    pub fail_update: bool,
    pub fail_delete: bool,
    pub rewrite_content: Option<String>,
    pub calls: Vec<String>,
    pub received: Vec<Template>,
}

/// In-memory stand-in for the plantillas service. Clones share state.
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    pub fn with_templates(templates: Vec<Template>) -> Self {
        let api = Self::default();
        api.set(|state| {
            state.next_id = templates.len() as u32;
            state.templates = templates;
        });
        api
    }

    pub fn set(&self, f: impl FnOnce(&mut FakeState)) {
        f(&mut self.state.lock().unwrap());
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn received(&self) -> Vec<Template> {
        self.state.lock().unwrap().received.clone()
    }

    pub fn stored(&self) -> Vec<Template> {
        self.state.lock().unwrap().templates.clone()
    }
}

#[async_trait]
impl TemplateApi for FakeApi {
    async fn list(&self) -> Result<Vec<Template>, Error> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("list".to_string());

        if state.fail_list {
            return Err(anyhow!("connection refused"));
        }
        Ok(state.templates.clone())
    }

    async fn create(&self, template: &Template) -> Result<Template, Error> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("create".to_string());
        state.received.push(template.clone());

        if state.fail_create {
            return Err(anyhow!("status 400"));
        }

        state.next_id += 1;
        let created = template.clone().with_id(format!("id-{}", state.next_id));
        state.templates.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, template: &Template) -> Result<Template, Error> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("update {}", id));
        state.received.push(template.clone());

        if state.fail_update {
            return Err(anyhow!("status 500"));
        }

        let mut updated = template.clone().with_id(id);
        if let Some(content) = state.rewrite_content.clone() {
            updated.content = content;
        }
        for entry in state.templates.iter_mut() {
            if entry.id.as_deref() == Some(id) {
                *entry = updated.clone();
            }
        }
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("delete {}", id));

        if state.fail_delete {
            return Err(anyhow!("connection reset"));
        }

        state.templates.retain(|t| t.id.as_deref() != Some(id));
        Ok(())
    }
}

/// Confirmation that always answers `answer` and counts how often it was asked.
pub fn counting_confirm(answer: bool) -> (impl Confirm, Arc<AtomicUsize>) {
    let asked = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&asked);

    let confirm = move |_: &str| {
        counter.fetch_add(1, Ordering::SeqCst);
        answer
    };

    (confirm, asked)
}

pub fn sample_templates() -> Vec<Template> {
    vec![
        Template::new("Welcome", "Hello {{name}}", TemplateKind::Email)
            .with_id("id-1")
            .with_variables(["name"]),
        Template::new("Invoice", "Invoice for {{company}}", TemplateKind::Document)
            .with_id("id-2")
            .with_variables(["company", "date"]),
        Template::new("Reminder", "See you tomorrow", TemplateKind::Message).with_id("id-3"),
    ]
}
