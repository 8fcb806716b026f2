//! Views
//!
//! The main view is drawn first; the console drops down over it when active.

mod console_view;
mod main_view;

use crate::app::App;
use ratatui::Frame;

pub fn render(app: &App, f: &mut Frame) {
    let area = f.area();
    main_view::render(app, area, f);

    let console = app.console.lock();
    console_view::render(console.surface(), area, f);
}
