//! Frame layout and widgets: avatar pane over the input line on the left,
//! speech bubble on the right — the classic pet arrangement.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Stylize;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use super::App;

const INPUT_PLACEHOLDER: &str = "Ask me something...";

pub(super) fn draw(frame: &mut Frame, app: &App) {
    let [left, right] = Layout::horizontal([
        Constraint::Length(app.sprites.width().saturating_add(4)),
        Constraint::Min(24),
    ])
    .areas(frame.area());

    let [avatar_area, input_area] = Layout::vertical([
        Constraint::Length(app.sprites.height().saturating_add(2)),
        Constraint::Length(3),
    ])
    .areas(left);

    draw_avatar(frame, app, avatar_area);
    draw_input(frame, app, input_area);
    draw_bubble(frame, app, right);
}

fn draw_avatar(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title(format!(" deskpet v{} ", crate::VERSION));
    let avatar = Paragraph::new(app.sprites.frame(app.avatar.current())).block(block);
    frame.render_widget(avatar, area);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::bordered().border_type(BorderType::Rounded);
    let input = if app.input.is_empty() {
        Paragraph::new(INPUT_PLACEHOLDER.dim().italic()).block(block)
    } else {
        Paragraph::new(app.input.as_str()).block(block)
    };
    frame.render_widget(input, area);

    // Cursor sits after the typed text, clamped to the pane.
    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(app.input.chars().count() as u16)
        .min(area.right().saturating_sub(2));
    frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
}

fn draw_bubble(frame: &mut Frame, app: &App, area: Rect) {
    if !app.bubble.is_visible() {
        return;
    }
    let block = Block::bordered().border_type(BorderType::Rounded);
    let bubble = Paragraph::new(app.bubble.visible_text())
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(bubble, area);
}
