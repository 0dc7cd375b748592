use async_trait::async_trait;
use tracing::warn;

use crate::prompt::LineEditor;

/// Yes/no prompt shown before destructive actions.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
}

#[async_trait]
impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    async fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Asks through the shared line editor. Anything but `y`/`yes` declines,
/// including Ctrl+C and end of input.
pub struct EditorConfirm {
    editor: LineEditor,
}

impl EditorConfirm {
    pub fn new(editor: LineEditor) -> Self {
        Self { editor }
    }
}

#[async_trait]
impl Confirm for EditorConfirm {
    async fn confirm(&self, message: &str) -> bool {
        match self.editor.read_line(&format!("{} [y/N] ", message)).await {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Confirmation prompt failed, treating as declined");
                false
            }
        }
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_answers() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative(" YES "));
        assert!(!is_affirmative("si"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("maybe"));
    }

    #[tokio::test]
    async fn test_closures_act_as_confirmation() {
        let accept = |_: &str| true;
        let decline = |_: &str| false;

        assert!(accept.confirm("Delete?").await);
        assert!(!decline.confirm("Delete?").await);
    }
}
