use anyhow::{Error, Result, anyhow};
use tracing::{debug, info};

use crate::{
    clients::{
        confirm::{Confirm, EditorConfirm, is_affirmative},
        template::{TemplateApi, TemplateServiceClient},
    },
    config::Config,
    form::TemplateForm,
    models::template::TemplateKind,
    page::{PageView, TemplatesPage},
    prompt::{Input, LineEditor},
    render::{render_form, render_page},
};

const HELP: &str = "Commands: list, new, edit <n>, delete <n>, retry, help, quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    New,
    Edit(usize),
    Delete(usize),
    Retry,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, Error> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or("list");
        let argument = parts.next();

        let number = |arg: Option<&str>| -> Result<usize, Error> {
            let arg = arg.ok_or_else(|| anyhow!("'{}' needs a card number", name))?;
            match arg.parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(anyhow!("'{}' is not a card number", arg)),
            }
        };

        match name {
            "list" | "ls" => Ok(Command::List),
            "new" => Ok(Command::New),
            "edit" => Ok(Command::Edit(number(argument)?)),
            "delete" | "rm" => Ok(Command::Delete(number(argument)?)),
            "retry" => Ok(Command::Retry),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(anyhow!("Unknown command '{}'. {}", other, HELP)),
        }
    }
}

/// Accepts the wire value, the English name, or the option number.
pub fn parse_kind(input: &str) -> Option<TemplateKind> {
    match input.trim().to_lowercase().as_str() {
        "1" | "email" => Some(TemplateKind::Email),
        "2" | "document" | "documento" => Some(TemplateKind::Document),
        "3" | "message" | "mensaje" => Some(TemplateKind::Message),
        _ => None,
    }
}

fn kind_options() -> String {
    TemplateKind::KNOWN
        .iter()
        .enumerate()
        .map(|(i, kind)| format!("{}) {}", i + 1, kind.label().to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

pub async fn run(config: Config) -> Result<(), Error> {
    let client = TemplateServiceClient::new(&config)?;
    let editor = LineEditor::new()?;
    let mut page = TemplatesPage::mount(client, EditorConfirm::new(editor.clone())).await;

    println!("{}\n", render_page(&page));
    println!("{}", HELP);

    loop {
        let line = match editor.read_command("> ").await? {
            Input::Line(line) => line,
            Input::Interrupted => {
                println!("^C");
                continue;
            }
            Input::Eof => break,
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        debug!(?command, "Command received");

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::List => {}
            Command::Retry => page.retry().await,
            Command::New => {
                if page.open_create() {
                    fill_and_submit(&mut page, &editor).await?;
                } else {
                    println!("New template is unavailable while an error is shown. Try 'retry'.");
                }
            }
            Command::Edit(number) => match card_id(&page, number) {
                Some(id) if page.open_edit(&id) => fill_and_submit(&mut page, &editor).await?,
                _ => println!("No card {} to edit.", number),
            },
            Command::Delete(number) => match card_id(&page, number) {
                Some(id) => page.delete(&id).await,
                None => println!("No card {} to delete.", number),
            },
        }

        debug!(status = %page.status(), "Page updated");
        println!("{}", render_page(&page));
    }

    info!("Leaving templates page");
    Ok(())
}

fn card_id<A, C>(page: &TemplatesPage<A, C>, number: usize) -> Option<String>
where
    A: TemplateApi,
    C: Confirm,
{
    match page.view() {
        PageView::Cards(templates) => templates.get(number.checked_sub(1)?)?.id.clone(),
        _ => None,
    }
}

/// Walks the open form until it is submitted successfully or cancelled.
async fn fill_and_submit<A, C>(
    page: &mut TemplatesPage<A, C>,
    editor: &LineEditor,
) -> Result<(), Error>
where
    A: TemplateApi,
    C: Confirm,
{
    while let Some(form) = page.form_mut() {
        if !fill_form(form, editor).await? {
            page.close_modal();
            return Ok(());
        }

        println!("{}", render_form(form));

        let Some(answer) = editor
            .read_line(&format!("{}? [y/N] ", form.submit_label()))
            .await?
        else {
            page.close_modal();
            return Ok(());
        };

        if !is_affirmative(&answer) {
            page.close_modal();
            return Ok(());
        }

        page.submit_form().await;

        if let Some(error) = page.error() {
            println!("{}", error);
        }
    }

    Ok(())
}

/// Returns `false` on end of input or Ctrl+C.
async fn fill_form(form: &mut TemplateForm, editor: &LineEditor) -> Result<bool, Error> {
    println!("== {} == (empty keeps the current value)", form.title());
    if let Some(error) = form.error() {
        println!("! {}", error);
    }

    let Some(name) = editor.read_line(&format!("Name [{}]: ", form.name())).await? else {
        return Ok(false);
    };
    if !name.is_empty() {
        form.set_name(name);
    }

    loop {
        let Some(kind) = editor
            .read_line(&format!("Type {} [{}]: ", kind_options(), form.kind().label()))
            .await?
        else {
            return Ok(false);
        };

        if kind.trim().is_empty() {
            break;
        }
        match parse_kind(&kind) {
            Some(kind) => {
                form.set_kind(kind);
                break;
            }
            None => println!("Unknown type '{}'", kind.trim()),
        }
    }

    let Some(content) = editor
        .read_line(&format!("Content [{}]: ", form.content()))
        .await?
    else {
        return Ok(false);
    };
    if !content.is_empty() {
        form.set_content(content);
    }

    let Some(variables) = editor
        .read_line(&format!(
            "Variables, comma-separated, ',' clears them [{}]: ",
            form.variables_input()
        ))
        .await?
    else {
        return Ok(false);
    };
    if !variables.is_empty() {
        form.set_variables_input(&variables);
    }

    Ok(true)
}
