pub mod command_bar;
pub mod editor;
pub mod layout;
pub mod status_bar;

use crate::app::App;
use ratatui::Frame;

pub fn render(frame: &mut Frame, app: &mut App) {
    layout::render(frame, app);
}
