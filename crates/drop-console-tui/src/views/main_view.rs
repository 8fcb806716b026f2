use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(app: &App, area: Rect, f: &mut Frame) {
    let lines = vec![
        Line::from(" drop-console demo ".bold()),
        Line::default(),
        Line::from(format!(" Trigger: {}", app.trigger_hint)),
        Line::from(format!(" Pitch:   {:.0}° (↑/↓ to tilt)", app.pitch_degrees)),
        Line::default(),
        Line::from(" i/w/e/a/x  log info, warning, error, assertion, exception"),
        Line::from(" q/Esc      quit"),
        Line::default(),
        Line::from(format!(" Log file: {}", app.log_file)).dark_gray(),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(paragraph, area);
}
