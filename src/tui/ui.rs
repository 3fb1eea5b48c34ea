use crate::core::state::App;
use crate::tui::render;

use ratatui::Frame;
use ratatui::widgets::Paragraph;

pub fn draw_ui(frame: &mut Frame, app: &App) {
    frame.render_widget(Paragraph::new(render::frame(app)), frame.area());
}
