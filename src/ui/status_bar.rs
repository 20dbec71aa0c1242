use crate::app::{App, Mode};
use crate::command::CommandId;
use crate::indicators::StatusIndicators;
use ratatui::{prelude::*, text::Span, widgets::Paragraph};

fn indicator_label(text: &str) -> String {
    format!(" {} ", text)
}

/// Screen cells covered by each visible indicator, left to right.
pub fn indicator_areas(area: Rect, indicators: &StatusIndicators) -> Vec<(Rect, CommandId)> {
    let mut x = area.x;
    let mut areas = Vec::new();
    for item in indicators.visible() {
        let width = Span::raw(indicator_label(&item.text)).width() as u16;
        let width = width.min(area.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        areas.push((Rect::new(x, area.y, width, 1), item.command));
        x += width + 1;
    }
    areas
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let mut spans = Vec::new();

    if let Some(indicators) = app.indicators() {
        for item in indicators.visible() {
            spans.push(Span::styled(
                indicator_label(&item.text),
                Style::default()
                    .bg(theme.ui.indicator_bg.to_color())
                    .fg(theme.ui.indicator_fg.to_color())
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
    }

    let file_info = match app.editor.buf() {
        Some(buf) => format!(" {} ", buf.filename()),
        None => String::from(" [No File] "),
    };
    spans.push(Span::styled(
        file_info,
        Style::default()
            .bg(theme.ui.file_bg.to_color())
            .fg(theme.ui.file_fg.to_color()),
    ));

    if let Some(message) = &app.editor.message {
        let color = if message.is_error {
            theme.ui.error.to_color()
        } else {
            theme.ui.status_bar_fg.to_color()
        };
        spans.push(Span::styled(
            format!(" {} ", message.text),
            Style::default().fg(color),
        ));
    }

    let cursor = app.editor.cursor();
    let cursor_pos = match app.mode {
        Mode::Normal => format!(" Ln {}, Col {} ", cursor.line + 1, cursor.character + 1),
        Mode::Command => String::from(" COMMAND "),
    };

    // Right-align the cursor position
    let left_len: usize = spans.iter().map(|s| s.width()).sum();
    let right_len = Span::raw(cursor_pos.as_str()).width();
    let padding = (area.width as usize)
        .checked_sub(left_len + right_len)
        .filter(|p| *p > 0)
        .unwrap_or(1);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(
        cursor_pos,
        Style::default()
            .bg(theme.ui.file_bg.to_color())
            .fg(theme.ui.file_fg.to_color()),
    ));

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(theme.ui.status_bar_bg.to_color()));
    frame.render_widget(paragraph, area);
}
