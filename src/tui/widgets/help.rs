use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::Config;
use crate::tui::widgets::color::parse_color;
use crate::tui::widgets::popup::popup_area;
use crate::utils::format_key_binding_for_display;

/// Help popup listing the configured key bindings.
pub fn render_help(f: &mut Frame, area: Rect, config: &Config) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);

    let popup = popup_area(area, 60, 70);
    f.render_widget(Clear, popup);

    let bindings = &config.key_bindings;
    let entries = [
        (bindings.new.as_str(), "Add a task to the shown date"),
        (bindings.complete.as_str(), "Mark the selected task completed"),
        (bindings.delete.as_str(), "Delete the selected task"),
        (bindings.list_up.as_str(), "Move selection up"),
        (bindings.list_down.as_str(), "Move selection down"),
        (bindings.prev_day.as_str(), "Previous day"),
        (bindings.next_day.as_str(), "Next day"),
        (bindings.today.as_str(), "Jump to today"),
        (bindings.goto_date.as_str(), "Go to a date"),
        (bindings.help.as_str(), "Toggle this help"),
        (bindings.quit.as_str(), "Quit"),
    ];

    let key_width = entries
        .iter()
        .map(|(key, _)| format_key_binding_for_display(key).chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = vec![Line::from("")];
    for (key, action) in entries {
        let key = format_key_binding_for_display(key);
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:>width$}  ", key, width = key_width),
                Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(action, Style::default().fg(fg_color)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tasks move to Overdue once the clock passes their time.",
        Style::default().fg(fg_color),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .title_alignment(Alignment::Center)
                .style(Style::default().fg(fg_color).bg(bg_color)),
        )
        .style(Style::default().fg(fg_color).bg(bg_color));

    f.render_widget(paragraph, popup);
}
