use ratatui::{
    prelude::*,
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::selection::SelectionOps;
use super::EditorState;
use crate::theme::Theme;

/// Width of the line number gutter, including its trailing space.
pub fn gutter_width(state: &EditorState) -> usize {
    match state.buf() {
        Some(buf) if state.show_line_numbers => buf.len_lines().to_string().len().max(3) + 1,
        _ => 0,
    }
}

/// Inner text area of the editor block for `area`.
pub fn inner_area(area: Rect) -> Rect {
    editor_block(String::new(), Style::default()).inner(area)
}

fn editor_block<'a>(title: String, title_style: Style) -> Block<'a> {
    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

pub fn render(frame: &mut Frame, area: Rect, state: &EditorState, theme: &Theme) {
    let title = match state.buf() {
        Some(buf) => format!(" {} ", buf.filename()),
        None => String::from(" [No File] "),
    };
    let block = editor_block(
        title,
        Style::default()
            .fg(theme.ui.title.to_color())
            .add_modifier(Modifier::BOLD),
    )
    .border_style(Style::default().fg(theme.ui.border.to_color()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(buf) = state.buf() else {
        let hint = Paragraph::new("No document open. Run `wordjump <FILE>` to open one.")
            .style(
                Style::default()
                    .fg(theme.ui.line_numbers.to_color())
                    .bg(theme.ui.background.to_color()),
            );
        frame.render_widget(hint, inner);
        return;
    };

    let visible_height = inner.height as usize;
    let gutter = gutter_width(state);
    let selection_style = Style::default()
        .bg(theme.ui.selection.to_color())
        .fg(theme.ui.selection_fg.to_color());
    let text_style = Style::default().fg(theme.ui.foreground.to_color());

    let visible_lines: Vec<Line> = (buf.scroll_offset..buf.len_lines())
        .take(visible_height)
        .filter_map(|idx| buf.line(idx).map(|line| (idx, line)))
        .map(|(idx, line)| {
            let mut spans = Vec::new();

            if gutter > 0 {
                spans.push(Span::styled(
                    format!("{:>width$} ", idx + 1, width = gutter - 1),
                    Style::default().fg(theme.ui.line_numbers.to_color()),
                ));
            }

            let chars: Vec<char> = line.trim_end_matches('\r').chars().collect();
            match SelectionOps::columns_on_line(buf, idx) {
                Some((from, to)) => {
                    let from = from.min(chars.len());
                    let to = to.min(chars.len()).max(from);
                    spans.push(Span::styled(chars[..from].iter().collect::<String>(), text_style));
                    spans.push(Span::styled(
                        chars[from..to].iter().collect::<String>(),
                        selection_style,
                    ));
                    spans.push(Span::styled(chars[to..].iter().collect::<String>(), text_style));
                }
                None => spans.push(Span::styled(chars.iter().collect::<String>(), text_style)),
            }

            let mut rendered = Line::from(spans);
            if idx == buf.cursor.line {
                rendered = rendered.style(Style::default().bg(theme.ui.cursor_line.to_color()));
            }
            rendered
        })
        .collect();

    let paragraph =
        Paragraph::new(visible_lines).style(Style::default().bg(theme.ui.background.to_color()));
    frame.render_widget(paragraph, inner);

    let cursor_screen_y = buf.cursor.line.saturating_sub(buf.scroll_offset);
    let cursor_screen_x = gutter + buf.display_column(buf.cursor.line, buf.cursor.character);
    if buf.cursor.line >= buf.scroll_offset
        && cursor_screen_y < visible_height
        && cursor_screen_x < inner.width as usize
    {
        frame.set_cursor_position(Position::new(
            inner.x + cursor_screen_x as u16,
            inner.y + cursor_screen_y as u16,
        ));
    }
}
