//! HTML rendering of the composite settings form

use crate::forms::types::{FieldDescriptor, FieldKind, SettingsForm};

/// Render the form as a self-contained HTML fragment
pub fn render_form(form: &SettingsForm) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<form method=\"post\" action=\"{}\">\n",
        escape(form.action.path())
    ));

    for field in &form.fields {
        render_field(&mut out, field);
    }

    out.push_str("<button type=\"submit\">Save</button>\n</form>\n");
    out
}

fn render_field(out: &mut String, field: &FieldDescriptor) {
    let name = escape(&field.name);
    let value = field.value.as_deref().unwrap_or("");
    let required = if field.required { " required" } else { "" };

    out.push_str("<div class=\"field\">\n");
    out.push_str(&format!(
        "<label for=\"{}\">{}</label>\n",
        name,
        escape(&field.label)
    ));

    match &field.field {
        FieldKind::Text => {
            out.push_str(&format!(
                "<input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{}\"{required}>\n",
                escape(value)
            ));
        }
        FieldKind::TextArea => {
            out.push_str(&format!(
                "<textarea id=\"{name}\" name=\"{name}\"{required}>{}</textarea>\n",
                escape(value)
            ));
        }
        FieldKind::Integer => {
            out.push_str(&format!(
                "<input type=\"number\" id=\"{name}\" name=\"{name}\" value=\"{}\"{required}>\n",
                escape(value)
            ));
        }
        FieldKind::Checkbox => {
            let checked = if value == "true" { " checked" } else { "" };
            out.push_str(&format!(
                "<input type=\"checkbox\" id=\"{name}\" name=\"{name}\"{checked}>\n"
            ));
        }
        FieldKind::Select { options } => {
            out.push_str(&format!("<select id=\"{name}\" name=\"{name}\"{required}>\n"));
            for option in options {
                let selected = if option.value == value { " selected" } else { "" };
                out.push_str(&format!(
                    "<option value=\"{}\"{selected}>{}</option>\n",
                    escape(&option.value),
                    escape(&option.label)
                ));
            }
            out.push_str("</select>\n");
        }
    }

    if let Some(help) = &field.help {
        out.push_str(&format!("<p class=\"help\">{}</p>\n", escape(help)));
    }
    out.push_str("</div>\n");
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Command;
    use crate::forms::types::{FieldKind, SelectOption};

    fn form(fields: Vec<FieldDescriptor>) -> SettingsForm {
        SettingsForm::new(Command::StoreSettings, fields)
    }

    #[test]
    fn test_render_text_field() {
        let html = render_form(&form(vec![FieldDescriptor::new(
            "access.code",
            "Access code",
            FieldKind::Text,
        )
        .with_value("open-sesame")]));

        assert!(html.contains("method=\"post\""));
        assert!(html.contains("action=\"/settings\""));
        assert!(html.contains("name=\"access.code\""));
        assert!(html.contains("value=\"open-sesame\""));
    }

    #[test]
    fn test_render_checkbox_checked() {
        let html = render_form(&form(vec![FieldDescriptor::new(
            "access.anonymous",
            "Allow anonymous",
            FieldKind::Checkbox,
        )
        .with_value("true")]));

        assert!(html.contains("type=\"checkbox\""));
        assert!(html.contains(" checked"));
    }

    #[test]
    fn test_render_select_marks_current() {
        let html = render_form(&form(vec![FieldDescriptor::new(
            "scoring.mode",
            "Mode",
            FieldKind::Select {
                options: vec![
                    SelectOption::new("best", "Best"),
                    SelectOption::new("latest", "Latest"),
                ],
            },
        )
        .with_value("latest")]));

        assert!(html.contains("<option value=\"best\">Best</option>"));
        assert!(html.contains("<option value=\"latest\" selected>Latest</option>"));
    }

    #[test]
    fn test_render_escapes_values() {
        let html = render_form(&form(vec![FieldDescriptor::new(
            "feedback.summary",
            "Summary",
            FieldKind::TextArea,
        )
        .with_value("<script>alert(\"x\")</script>")]));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&quot;x&quot;"));
    }

    #[test]
    fn test_render_preserves_field_order() {
        let html = render_form(&form(vec![
            FieldDescriptor::new("first", "First", FieldKind::Text),
            FieldDescriptor::new("second", "Second", FieldKind::Text),
        ]));

        let first = html.find("name=\"first\"").unwrap();
        let second = html.find("name=\"second\"").unwrap();
        assert!(first < second);
    }
}
