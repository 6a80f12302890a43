use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::Config;
use crate::models::Task;
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};

/// Render one of the three task lists (Ongoing / Completed / Overdue).
///
/// The section count lives in the block title. Rows show a status
/// indicator, the scheduled time in the section's accent color, and the
/// title. `selected` is the row index within this section, if the global
/// selection falls here.
pub fn render_section_list(
    f: &mut Frame,
    area: Rect,
    title: &str,
    tasks: &[&Task],
    accent: Color,
    selected: Option<usize>,
    config: &Config,
) {
    // Account for borders and the indicator/time prefix when truncating
    let max_width = area.width.saturating_sub(4) as usize;

    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let highlight_bg = parse_color(&active_theme.highlight_bg);
    let highlight_fg = if active_theme.highlight_fg.is_empty() {
        get_contrast_text_color(highlight_bg)
    } else {
        parse_color(&active_theme.highlight_fg)
    };

    // Keep the selected row visible without a stateful widget: drop rows
    // from the top until it fits.
    let visible = area.height.saturating_sub(2) as usize;
    let skip = match selected {
        Some(sel) if visible > 0 && sel >= visible => sel + 1 - visible,
        _ => 0,
    };

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(index, task)| {
            let is_selected = selected == Some(index);
            let indicator = if task.is_completed { "✓" } else { "○" };

            let mut title_text = task.title.clone();
            let prefix_width = 9; // "✓ 09:00  "
            let title_width = max_width.saturating_sub(prefix_width);
            if title_text.chars().count() > title_width {
                title_text = title_text
                    .chars()
                    .take(title_width.saturating_sub(3))
                    .collect::<String>()
                    + "...";
            }

            let (row_fg, time_fg, row_bg) = if is_selected {
                (highlight_fg, highlight_fg, highlight_bg)
            } else {
                (fg_color, accent, bg_color)
            };

            let line = Line::from(vec![
                Span::styled(format!("{} ", indicator), Style::default().fg(row_fg).bg(row_bg)),
                Span::styled(task.time_label(), Style::default().fg(time_fg).bg(row_bg)),
                Span::styled("  ", Style::default().bg(row_bg)),
                Span::styled(title_text, Style::default().fg(row_fg).bg(row_bg)),
            ]);

            ListItem::new(line)
        })
        .collect();

    let block_title = format!("{} ({})", title, tasks.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(block_title))
        .style(Style::default().fg(fg_color).bg(bg_color));

    f.render_widget(list, area);
}
