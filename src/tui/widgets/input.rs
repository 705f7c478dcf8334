//! Form field rendering
//!
//! Draws a labelled [`TextField`] or selector on one line, with a block
//! cursor when focused and an optional inline error underneath.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::forms::TextField;

/// Width reserved for field labels
pub const LABEL_WIDTH: usize = 13;

fn label_span(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    Span::styled(format!("{:<width$}", format!("{}:", label), width = LABEL_WIDTH), style)
}

/// The spans for a text field's value, cursor included when focused
pub fn text_spans(field: &TextField, focused: bool, placeholder: &str) -> Vec<Span<'static>> {
    let value = field.value();
    if value.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(Span::styled(" ", Style::default().bg(Color::White)));
        }
        spans.push(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
        return spans;
    }

    if !focused {
        return vec![Span::raw(value.to_string())];
    }

    let before: String = value.chars().take(field.cursor()).collect();
    let mut rest = value.chars().skip(field.cursor());
    let at = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let after: String = rest.collect();

    vec![
        Span::raw(before),
        Span::styled(at, Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw(after),
    ]
}

/// Render a labelled text field
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    field: &TextField,
    focused: bool,
    placeholder: &str,
) {
    let mut spans = vec![label_span(label, focused)];
    spans.extend(text_spans(field, focused, placeholder));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render a labelled selector, e.g. `< Food >`
pub fn render_selector(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    let line = Line::from(vec![
        label_span(label, focused),
        Span::styled(format!("< {} >", value), value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render an inline validation message aligned under the field value
pub fn render_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let line = Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH)),
            Span::styled(message.to_string(), Style::default().fg(Color::Red)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
