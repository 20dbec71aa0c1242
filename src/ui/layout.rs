use crate::app::{App, Mode};
use ratatui::prelude::*;

/// Editor block, status bar and (in command mode) the command bar.
pub fn split(size: Rect, mode: Mode) -> (Rect, Rect, Rect) {
    let bottom_bar_height = match mode {
        Mode::Command => 1,
        Mode::Normal => 0,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(bottom_bar_height),
        ])
        .split(size);

    (chunks[0], chunks[1], chunks[2])
}

pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = app.config.theme.clone();
    let (editor_area, status_area, command_area) = split(frame.area(), app.mode);

    app.editor_area = super::editor::render::inner_area(editor_area);
    app.status_area = status_area;

    super::editor::render::render(frame, editor_area, &app.editor, &theme);
    super::status_bar::render(frame, status_area, app);

    if app.mode == Mode::Command {
        super::command_bar::render(frame, command_area, &app.command_input, &theme);
    }
}
