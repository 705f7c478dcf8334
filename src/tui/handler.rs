//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the open
//! dialog and the active view.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::forms::{FormField, TextField, TransactionForm};

use super::app::{ActiveDialog, ActiveView, App};
use super::event::Event;

/// What a key press asked a transaction form to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
    Cancel,
}

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Some terminals also report releases
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.active_view {
        ActiveView::Dashboard => handle_dashboard_key(app, key),
        ActiveView::AddTransaction => handle_add_view_key(app, key),
    }
}

/// Handle keys on the dashboard
fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Views
        KeyCode::Char('a') | KeyCode::Char('2') => app.switch_view(ActiveView::AddTransaction),
        KeyCode::Char('1') => app.switch_view(ActiveView::Dashboard),

        // Filters
        KeyCode::Char('m') => app.cycle_month(true),
        KeyCode::Char('M') => app.cycle_month(false),
        KeyCode::Char('y') => app.cycle_year(true),
        KeyCode::Char('Y') => app.cycle_year(false),
        KeyCode::Char('c') => app.cycle_category(true),
        KeyCode::Char('C') => app.cycle_category(false),
        KeyCode::Char('r') => app.reset_filter(),

        // Transaction list
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('e') | KeyCode::Enter => app.start_edit(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),

        KeyCode::Char('b') => app.open_budget_dialog(),

        _ => {}
    }

    Ok(())
}

/// Handle keys on the Add Transaction view
fn handle_add_view_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match handle_form_key(&mut app.add_form, key) {
        FormAction::Submit => app.submit_add_form(),
        FormAction::Cancel => app.switch_view(ActiveView::Dashboard),
        FormAction::None => {}
    }
    Ok(())
}

/// Handle keys when a dialog is active
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::Help => {
            // Any key closes help
            app.close_dialog();
        }
        ActiveDialog::ConfirmDelete(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::EditTransaction => {
            let action = match app.edit_form.as_mut() {
                Some(form) => handle_form_key(form, key),
                None => FormAction::Cancel,
            };
            match action {
                FormAction::Submit => app.submit_edit_form(),
                FormAction::Cancel => app.cancel_edit(),
                FormAction::None => {}
            }
        }
        ActiveDialog::Budget => match key.code {
            KeyCode::Esc => app.close_dialog(),
            KeyCode::Enter => app.submit_budget_form(),
            KeyCode::Up | KeyCode::BackTab => app.budget_form.cycle_category(false),
            KeyCode::Down | KeyCode::Tab => app.budget_form.cycle_category(true),
            _ => {
                handle_text_key(&mut app.budget_form.amount, key);
            }
        },
    }

    Ok(())
}

/// Keys shared by the add view and the edit dialog
pub fn handle_form_key(form: &mut TransactionForm, key: KeyEvent) -> FormAction {
    match key.code {
        KeyCode::Esc => return FormAction::Cancel,
        KeyCode::Enter => return FormAction::Submit,
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        _ => match form.focus {
            FormField::Kind => {
                if matches!(key.code, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) {
                    form.toggle_kind();
                }
            }
            FormField::Category => match key.code {
                KeyCode::Left => form.cycle_category(false),
                KeyCode::Right | KeyCode::Char(' ') => form.cycle_category(true),
                _ => {}
            },
            FormField::Amount | FormField::Date | FormField::Description => {
                if let Some(field) = form.focused_text_mut() {
                    handle_text_key(field, key);
                }
            }
        },
    }
    FormAction::None
}

/// Line editing; returns whether the key was consumed
fn handle_text_key(field: &mut TextField, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => field.insert(c),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_start(),
        KeyCode::End => field.move_end(),
        _ => return false,
    }
    true
}
