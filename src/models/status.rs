use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Loading,
    Loaded,
    LoadFailed,
    Creating,
    Editing,
}

/// Failures surfaced to the user. Every cause of a failed operation collapses
/// into the single message of that operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    Load,
    Create,
    Update,
    Delete,
}

impl PageError {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageError::Load => {
                "Could not connect to the server. Check that the backend is running."
            }
            PageError::Create => {
                "Could not create the template. Check the connection to the server."
            }
            PageError::Update => {
                "Could not update the template. Check the connection to the server."
            }
            PageError::Delete => {
                "Could not delete the template. Check the connection to the server."
            }
        }
    }
}

impl Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

impl Display for PageStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            PageStatus::Loading => write!(f, "loading"),
            PageStatus::Loaded => write!(f, "loaded"),
            PageStatus::LoadFailed => write!(f, "load_failed"),
            PageStatus::Creating => write!(f, "creating"),
            PageStatus::Editing => write!(f, "editing"),
        }
    }
}
