//! Line editing for the terminal front end.

use std::sync::{Arc, Mutex};

use anyhow::{Error, Result, anyhow};
use rustyline::{DefaultEditor, error::ReadlineError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    Interrupted,
    Eof,
}

/// One readline editor shared by every prompt. Reads run on the blocking pool.
#[derive(Clone)]
pub struct LineEditor {
    editor: Arc<Mutex<DefaultEditor>>,
}

impl LineEditor {
    pub fn new() -> Result<Self, Error> {
        let editor =
            DefaultEditor::new().map_err(|e| anyhow!("Failed to initialize readline: {}", e))?;

        Ok(Self {
            editor: Arc::new(Mutex::new(editor)),
        })
    }

    /// Reads a command line and keeps it in history.
    pub async fn read_command(&self, prompt: &str) -> Result<Input, Error> {
        self.read(prompt, true).await
    }

    /// Reads a field or answer. Ctrl+C and Ctrl+D both give `None`.
    pub async fn read_line(&self, prompt: &str) -> Result<Option<String>, Error> {
        match self.read(prompt, false).await? {
            Input::Line(line) => Ok(Some(line)),
            Input::Interrupted | Input::Eof => Ok(None),
        }
    }

    async fn read(&self, prompt: &str, remember: bool) -> Result<Input, Error> {
        let editor = Arc::clone(&self.editor);
        let prompt = prompt.to_string();

        tokio::task::spawn_blocking(move || {
            let mut editor = editor
                .lock()
                .map_err(|_| anyhow!("Line editor lock poisoned"))?;

            match editor.readline(&prompt) {
                Ok(line) => {
                    if remember && !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    Ok(Input::Line(line))
                }
                Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
                Err(ReadlineError::Eof) => Ok(Input::Eof),
                Err(e) => Err(anyhow!("Readline error: {}", e)),
            }
        })
        .await
        .map_err(|e| anyhow!("Prompt task failed: {}", e))?
    }
}
