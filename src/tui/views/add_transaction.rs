//! Add Transaction view
//!
//! A full-screen create form. Successful submissions clear the form and
//! stay here so several entries can be typed in a row.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::tui::app::App;
use crate::tui::dialogs::transaction::{render_form, FORM_HEIGHT};
use crate::tui::layout::centered_rect_fixed;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    // Form rows, their margin and the border
    let form_area = centered_rect_fixed(72, FORM_HEIGHT + 4, area);

    let block = Block::default()
        .title(" Add Transaction ")
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    render_form(frame, inner, &app.add_form, "Enter Add  Esc Dashboard");
}
