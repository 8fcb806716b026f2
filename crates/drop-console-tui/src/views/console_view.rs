use drop_console::markup::{self, Segment};
use drop_console::TextSurface;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Share of the screen height taken by the console
const HEIGHT_PERCENT: u32 = 70;

/// Render the console surface (Quake-style drop-down)
pub fn render(surface: &TextSurface, area: Rect, f: &mut Frame) {
    if !surface.active {
        return;
    }

    let console_height = (u32::from(area.height) * HEIGHT_PERCENT / 100) as u16;
    let console_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: console_height.min(area.height),
    };

    f.render_widget(Clear, console_area);

    let block = Block::default()
        .title(" Console ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    // Keep the newest lines when the transcript is taller than the panel
    let lines = markup_to_lines(&surface.text);
    let available_height = console_height.saturating_sub(2) as usize;
    let start_index = lines.len().saturating_sub(available_height);

    let paragraph = Paragraph::new(lines[start_index..].to_vec())
        .block(block)
        .style(Style::default().bg(Color::Black).fg(Color::Gray));

    f.render_widget(paragraph, console_area);
}

/// Turn colour-annotated console text into styled lines
pub fn markup_to_lines(rendered: &str) -> Vec<Line<'static>> {
    if rendered.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![Line::default()];
    for Segment { text, colour } in markup::segments(rendered) {
        let style = colour
            .map(|c| Style::default().fg(Color::Rgb(c.r, c.g, c.b)))
            .unwrap_or_default();

        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            if !part.is_empty() {
                if let Some(line) = lines.last_mut() {
                    line.spans.push(Span::styled(part.to_string(), style));
                }
            }
        }
    }
    lines
}
