use chrono::NaiveDate;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::Config;
use crate::tui::widgets::color::parse_color;
use crate::utils::format_date;

/// The date card at the top of the screen: a bold day label ("Today" when
/// the selected date is the current date, the weekday name otherwise) next
/// to the ISO date.
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    selected_date: NaiveDate,
    today: NaiveDate,
    config: &Config,
) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);

    let label = if selected_date == today {
        "Today".to_string()
    } else {
        selected_date.format("%A").to_string()
    };

    let line = Line::from(vec![
        Span::styled(
            label,
            Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", Style::default()),
        Span::styled(format_date(selected_date), Style::default().fg(fg_color)),
    ]);

    let paragraph = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(fg_color).bg(bg_color)),
        )
        .style(Style::default().fg(fg_color).bg(bg_color));

    f.render_widget(paragraph, area);
}
