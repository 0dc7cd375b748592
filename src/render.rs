//! Plain-text rendering of the page for the terminal front end.

use std::fmt::Write;

use crate::{
    clients::{confirm::Confirm, template::TemplateApi},
    form::TemplateForm,
    models::template::Template,
    page::{PageView, TemplatesPage},
};

const CONTENT_LINES: usize = 2;

pub fn render_header(can_create: bool) -> String {
    if can_create {
        "Templates                                  [new] New template".to_string()
    } else {
        "Templates                                  (new template unavailable)".to_string()
    }
}

/// One card: name and type, the first lines of content, `#variables`, actions.
pub fn render_card(number: usize, template: &Template) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{:>2}. {}  [{}]", number, template.name, template.kind);

    let mut lines = template.content.lines();
    for line in lines.by_ref().take(CONTENT_LINES) {
        let _ = writeln!(out, "    {}", line);
    }
    if lines.next().is_some() {
        let _ = writeln!(out, "    ...");
    }

    if !template.variables.is_empty() {
        let tags: Vec<String> = template
            .variables
            .iter()
            .map(|v| format!("#{}", v))
            .collect();
        let _ = writeln!(out, "    {}", tags.join(" "));
    }

    let _ = write!(out, "    [edit {n}] [delete {n}]", n = number);
    out
}

pub fn render_view(view: PageView<'_>) -> String {
    match view {
        PageView::Loading => "Loading...".to_string(),
        PageView::Failed(error) => format!("{}\n[retry] Retry", error),
        PageView::Empty => "No templates\n[new] Create new template".to_string(),
        PageView::Cards(templates) => templates
            .iter()
            .enumerate()
            .map(|(i, t)| render_card(i + 1, t))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

pub fn render_form(form: &TemplateForm) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "== {} ==", form.title());
    if let Some(error) = form.error() {
        let _ = writeln!(out, "! {}", error);
    }
    let _ = writeln!(out, "Name:      {}", form.name());
    let _ = writeln!(out, "Type:      {}", form.kind().label());
    let _ = writeln!(out, "Content:   {}", form.content());
    let _ = writeln!(out, "Variables: {}", form.variables_input());
    let _ = write!(out, "[cancel] Cancel  [{}]", form.submit_label().to_lowercase());
    out
}

pub fn render_page<A, C>(page: &TemplatesPage<A, C>) -> String
where
    A: TemplateApi,
    C: Confirm,
{
    let mut out = render_header(page.can_create());
    out.push_str("\n\n");
    out.push_str(&render_view(page.view()));

    if let Some(form) = page.form() {
        out.push_str("\n\n");
        out.push_str(&render_form(form));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{status::PageError, template::TemplateKind};

    #[test]
    fn test_card_shows_tagged_variables() {
        let template = Template::new("Welcome", "Hello {{name}}", TemplateKind::Email)
            .with_id("1")
            .with_variables(["name", "company"]);

        let card = render_card(1, &template);

        assert!(card.contains(" 1. Welcome  [email]"));
        assert!(card.contains("#name #company"));
        assert!(card.contains("[edit 1] [delete 1]"));
    }

    #[test]
    fn test_card_clamps_content() {
        let template = Template::new("Long", "one\ntwo\nthree", TemplateKind::Document);

        let card = render_card(2, &template);

        assert!(card.contains("two"));
        assert!(!card.contains("three"));
        assert!(card.contains("..."));
    }

    #[test]
    fn test_failed_view_offers_retry_only() {
        let text = render_view(PageView::Failed(PageError::Load));

        assert!(text.starts_with(PageError::Load.as_str()));
        assert!(text.contains("[retry]"));
        assert!(!text.contains("[new]"));
    }

    #[test]
    fn test_form_shows_mode_and_error() {
        let mut form = TemplateForm::new(None);
        let _ = form.submit();

        let text = render_form(&form);

        assert!(text.contains("New template"));
        assert!(text.contains("! Name is required"));
        assert!(text.contains("[create]"));
    }
}
