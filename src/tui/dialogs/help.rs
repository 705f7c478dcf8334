//! Help dialog
//!
//! Lists the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 80, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        heading("Dashboard"),
        Line::from(""),
        key_line("m / M", "Next / previous month"),
        key_line("y / Y", "Next / previous year"),
        key_line("c / C", "Next / previous category"),
        key_line("r", "Reset filters"),
        key_line("j / k", "Move selection down / up"),
        key_line("e, Enter", "Edit selected transaction"),
        key_line("d, Del", "Delete selected transaction"),
        key_line("b", "Set a budget for the shown period"),
        key_line("a, 2", "Add a transaction"),
        key_line("1", "Back to the dashboard"),
        key_line("q", "Quit"),
        Line::from(""),
        heading("Forms"),
        Line::from(""),
        key_line("Tab / S-Tab", "Next / previous field"),
        key_line("← / →", "Change type or category"),
        key_line("Enter", "Save"),
        key_line("Esc", "Cancel"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn key_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>14}", key), Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::raw(desc),
    ])
}
