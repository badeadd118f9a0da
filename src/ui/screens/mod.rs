pub(crate) mod category;
pub(crate) mod expense;
pub(crate) mod home;
pub(crate) mod income;
pub(crate) mod settings;
pub(crate) mod widgets;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::app::App;

/// Views that exist in the menu but have no content yet.
pub(crate) fn render_placeholder(f: &mut Frame, area: Rect, app: &App, title: &str) {
    let p = app.palette();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("{title} is not available yet"), p.dim_style())),
        Line::from(""),
        Line::from(Span::styled("Press 1 to go back Home", p.dim_style())),
    ];
    let msg = Paragraph::new(lines)
        .centered()
        .block(widgets::panel(&p, title));
    f.render_widget(msg, area);
}
