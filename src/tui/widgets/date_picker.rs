use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::Config;
use crate::tui::app::DateForm;
use crate::tui::widgets::color::parse_color;
use crate::tui::widgets::form::render_field;
use crate::tui::widgets::popup::popup_area_fixed;

/// The go-to-date dialog: one ISO date field, prefilled with the currently
/// selected date.
pub fn render_date_picker(f: &mut Frame, area: Rect, form: &DateForm, config: &Config) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let highlight_bg = parse_color(&active_theme.highlight_bg);

    let popup = popup_area_fixed(area, 34, 6);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Go To Date")
        .title_alignment(ratatui::layout::Alignment::Center)
        .style(Style::default().fg(fg_color).bg(bg_color));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Date field
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    render_field(
        f,
        rows[0],
        "Date (YYYY-MM-DD)",
        &form.input,
        true,
        fg_color,
        highlight_bg,
    );

    let hints = Paragraph::new(Line::from(Span::styled(
        "Enter: Go  Esc: Cancel",
        Style::default().fg(fg_color),
    )));
    f.render_widget(hints, rows[1]);
}
