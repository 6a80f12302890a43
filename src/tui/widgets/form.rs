use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::Config;
use crate::tui::app::{AddTaskField, AddTaskForm};
use crate::tui::widgets::color::parse_color;
use crate::tui::widgets::input::Input;
use crate::tui::widgets::popup::popup_area_fixed;

/// The add-task dialog: three single-line fields (Task, Hour, Minute).
///
/// Hour and minute take any text; whatever does not parse as a number is
/// added as 0, so the dialog never blocks on bad input.
pub fn render_add_task_form(f: &mut Frame, area: Rect, form: &AddTaskForm, config: &Config) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let highlight_bg = parse_color(&active_theme.highlight_bg);

    // 3 bordered fields + dialog borders + hint line
    let popup = popup_area_fixed(area, 40, 13);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Add New Task")
        .title_alignment(ratatui::layout::Alignment::Center)
        .style(Style::default().fg(fg_color).bg(bg_color));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Task
            Constraint::Length(3), // Hour
            Constraint::Length(3), // Minute
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    render_field(
        f,
        rows[0],
        "Task",
        &form.title,
        form.current_field == AddTaskField::Title,
        fg_color,
        highlight_bg,
    );
    render_field(
        f,
        rows[1],
        "Hour",
        &form.hour,
        form.current_field == AddTaskField::Hour,
        fg_color,
        highlight_bg,
    );
    render_field(
        f,
        rows[2],
        "Minute",
        &form.minute,
        form.current_field == AddTaskField::Minute,
        fg_color,
        highlight_bg,
    );

    let hints = Paragraph::new(Line::from(Span::styled(
        "Tab: Next field  Enter: Add  Esc: Cancel",
        Style::default().fg(fg_color),
    )));
    f.render_widget(hints, rows[3]);
}

/// One bordered single-line field. The active field gets a highlighted
/// border and the terminal cursor.
pub fn render_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    input: &Input,
    is_active: bool,
    fg: ratatui::style::Color,
    highlight: ratatui::style::Color,
) {
    let border_style = if is_active {
        Style::default().fg(highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(fg)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        input.value().to_string(),
        Style::default().fg(fg),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(label)
            .border_style(border_style),
    );
    f.render_widget(paragraph, area);

    if is_active {
        // Place the terminal cursor inside the field, clamped to its width
        let max_x = area.width.saturating_sub(2) as usize;
        let cursor_x = area.x + 1 + input.cursor.min(max_x) as u16;
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}
