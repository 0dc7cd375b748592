use thiserror::Error;

use crate::models::template::Template;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name is required")]
    MissingName,

    #[error("Content is required")]
    MissingContent,
}

/// Splits a comma-separated variables entry, trimming pieces and dropping empty ones.
pub fn parse_variables(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_variables(variables: &[String]) -> String {
    variables.join(", ")
}

/// Name is checked before content; the first failure wins.
pub fn validate_template(template: &Template) -> Result<(), FormError> {
    if template.name.trim().is_empty() {
        return Err(FormError::MissingName);
    }

    if template.content.trim().is_empty() {
        return Err(FormError::MissingContent);
    }

    Ok(())
}
