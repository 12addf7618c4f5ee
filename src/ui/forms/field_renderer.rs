//! Field rendering utilities for forms

use crate::state::{display_date, FocusTarget, Organization};
use crate::ui::widgets::FormRow;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Width of the label column, in characters
const LABEL_WIDTH: usize = 27;

/// Display options for an editable field
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldOptions {
    pub placeholder: Option<&'static str>,
    pub max_len: Option<usize>,
    pub is_date: bool,
    /// Extra left padding, for fields nested under a document header
    pub indent: usize,
}

fn label_span(label: &str, indent: usize, is_active: bool) -> Span<'static> {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let width = LABEL_WIDTH.saturating_sub(indent);
    Span::styled(
        format!("{}{:<width$} ", " ".repeat(indent), label, width = width),
        style,
    )
}

/// An editable text field row
pub fn field_row(
    target: FocusTarget,
    label: &str,
    value: &str,
    options: FieldOptions,
    is_active: bool,
) -> FormRow {
    let mut spans = vec![label_span(label, options.indent, is_active)];

    if value.is_empty() {
        if is_active {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
        if let Some(placeholder) = options.placeholder {
            spans.push(Span::styled(
                placeholder,
                Style::default().fg(Color::DarkGray),
            ));
        }
    } else {
        let style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default()
        };
        spans.push(Span::styled(value.to_string(), style));
        if is_active {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
    }

    if options.is_date {
        let hint = if value.is_empty() {
            if is_active {
                Some("ГГГГ-ММ-ДД".to_string())
            } else {
                None
            }
        } else {
            display_date(value).map(|d| format!("→ {d}"))
        };
        if let Some(hint) = hint {
            spans.push(Span::styled(
                format!("  {hint}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    if let (Some(max), true) = (options.max_len, is_active) {
        spans.push(Span::styled(
            format!("  {}/{}", value.chars().count(), max),
            Style::default().fg(Color::DarkGray),
        ));
    }

    FormRow::new(Line::from(spans), Some(target))
}

/// A read-only row filled from reference data
pub fn readonly_row(label: &str, value: &str) -> FormRow {
    FormRow::new(
        Line::from(vec![
            label_span(label, 0, false),
            Span::styled(value.to_string(), Style::default().fg(Color::Gray)),
        ]),
        None,
    )
}

/// A button row ("+ add", "✕ remove")
pub fn button_row(target: FocusTarget, label: &str, is_active: bool, destructive: bool) -> FormRow {
    let color = if destructive { Color::Red } else { Color::Blue };
    let mut style = Style::default().fg(color);
    if is_active {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    FormRow::new(
        Line::from(Span::styled(format!("[ {label} ]"), style)),
        Some(target),
    )
}

/// A section heading
pub fn section_row(title: &str) -> FormRow {
    FormRow::new(
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        None,
    )
}

/// A blank spacer row
pub fn spacer_row() -> FormRow {
    FormRow::new(Line::default(), None)
}

/// One entry of the search suggestion panel
pub fn suggestion_row(index: usize, org: &Organization, is_highlighted: bool) -> FormRow {
    let name_style = if is_highlighted {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let prefix = if is_highlighted { "  ▸ " } else { "    " };

    FormRow::suggestion(
        Line::from(vec![
            Span::styled(prefix, name_style),
            Span::styled(org.short_name.clone(), name_style),
            Span::styled(
                format!("  ИНН: {}", org.inn),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        index,
    )
}
