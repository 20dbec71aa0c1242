use crate::app::{App, CommandResult, Mode};
use crate::command::CommandId;
use crate::ui::editor::StatusMessage;
use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
}

pub fn handle_event(app: &mut App) -> Result<Option<Action>> {
    if !event::poll(Duration::from_millis(100))? {
        return Ok(Some(Action::None));
    }

    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Mouse(mouse) => Ok(Some(handle_mouse(app, mouse))),
        _ => Ok(Some(Action::None)),
    }
}

/// Command bound to a key in normal mode.
pub fn key_command(key: &KeyEvent) -> Option<CommandId> {
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Up if alt => Some(CommandId::SelectPrevious),
        KeyCode::Down if alt => Some(CommandId::SelectNext),
        KeyCode::Char('p') if ctrl => Some(CommandId::SelectPrevious),
        KeyCode::Char('n') if ctrl => Some(CommandId::SelectNext),
        KeyCode::F(2) => Some(CommandId::ShowIndicators),
        KeyCode::F(3) => Some(CommandId::HideIndicators),
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<Option<Action>> {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(Some(Action::Quit));
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) -> Result<Option<Action>> {
    if let Some(command) = key_command(&key) {
        app.run_command(command);
        return Ok(Some(Action::None));
    }

    match key.code {
        KeyCode::Up => app.editor.move_up(),
        KeyCode::Down => app.editor.move_down(),
        KeyCode::Left => app.editor.move_left(),
        KeyCode::Right => app.editor.move_right(),
        KeyCode::Home => app.editor.move_to_line_start(),
        KeyCode::End => app.editor.move_to_line_end(),
        KeyCode::PageUp => app.editor.page_up(),
        KeyCode::PageDown => app.editor.page_down(),
        KeyCode::Esc => app.editor.clear_message(),
        KeyCode::Char(':') => {
            app.mode = Mode::Command;
            app.command_input.clear();
        }
        _ => {}
    }

    Ok(Some(Action::None))
}

fn handle_command_mode(app: &mut App, key: KeyEvent) -> Result<Option<Action>> {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Normal;
            app.command_input.clear();
        }
        KeyCode::Enter => match app.execute_command() {
            Ok(CommandResult::Quit) => {
                return Ok(Some(Action::Quit));
            }
            Ok(CommandResult::Continue) => {}
            Err(e) => {
                app.editor.message = Some(StatusMessage::error(e.to_string()));
            }
        },
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.mode = Mode::Normal;
            }
        }
        _ => {}
    }

    Ok(Some(Action::None))
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Action {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.click(mouse.column, mouse.row);
    }
    Action::None
}
