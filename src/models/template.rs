use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// A template as stored by the plantillas service.
///
/// Field names follow the service's wire format (`_id`, `nombre`, `contenido`,
/// `tipo`). `id` stays `None` until the service has persisted the template.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Template {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "contenido")]
    pub content: String,

    #[serde(rename = "tipo", default)]
    pub kind: TemplateKind,

    #[serde(default)]
    pub variables: Vec<String>,
}

impl Template {
    pub fn new(name: impl Into<String>, content: impl Into<String>, kind: TemplateKind) -> Self {
        Self {
            id: None,
            name: name.into(),
            content: content.into(),
            kind,
            variables: Vec::new(),
        }
    }

    pub fn with_variables<I, S>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables = variables.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Copy of this template without its identifier, as sent on create.
    pub fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }
}

/// Template type. Values the client does not know are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemplateKind {
    #[default]
    Email,
    Document,
    Message,
    Other(String),
}

impl TemplateKind {
    pub const KNOWN: [TemplateKind; 3] = [
        TemplateKind::Email,
        TemplateKind::Document,
        TemplateKind::Message,
    ];

    pub fn from_string(s: &str) -> Self {
        match s {
            "email" => TemplateKind::Email,
            "documento" => TemplateKind::Document,
            "mensaje" => TemplateKind::Message,
            other => TemplateKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TemplateKind::Email => "email",
            TemplateKind::Document => "documento",
            TemplateKind::Message => "mensaje",
            TemplateKind::Other(other) => other,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TemplateKind::Email => "Email",
            TemplateKind::Document => "Document",
            TemplateKind::Message => "Message",
            TemplateKind::Other(other) => other,
        }
    }
}

impl From<String> for TemplateKind {
    fn from(value: String) -> Self {
        TemplateKind::from_string(&value)
    }
}

impl From<TemplateKind> for String {
    fn from(kind: TemplateKind) -> Self {
        kind.as_str().to_string()
    }
}

impl Display for TemplateKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}
