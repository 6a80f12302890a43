use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::Config;
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};

/// One-line status bar: a highlighted status message when one is active,
/// otherwise the key hints for the current mode.
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    message: Option<&String>,
    key_hints: &[String],
    config: &Config,
) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let highlight_bg = parse_color(&active_theme.highlight_bg);

    let max_width = area.width as usize;

    let (content, style) = if let Some(msg) = message {
        // Status messages get a highlighted background for visibility
        let msg_fg = get_contrast_text_color(highlight_bg);
        (
            truncate_with_ellipsis(msg, max_width),
            Style::default()
                .fg(msg_fg)
                .bg(highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        // Fit as many hints as possible, then an ellipsis for the rest
        let separator = " • ";
        let mut hints_text = String::new();
        for (i, hint) in key_hints.iter().enumerate() {
            let would_be_len = if i == 0 {
                hint.chars().count()
            } else {
                hints_text.chars().count() + separator.chars().count() + hint.chars().count()
            };
            if would_be_len > max_width {
                if hints_text.is_empty() {
                    hints_text = truncate_with_ellipsis(hint, max_width);
                } else if hints_text.chars().count() + 4 <= max_width {
                    hints_text.push_str(" ...");
                }
                break;
            }
            if i > 0 {
                hints_text.push_str(separator);
            }
            hints_text.push_str(hint);
        }
        (hints_text, Style::default().fg(fg_color).bg(bg_color))
    };

    let paragraph = Paragraph::new(content).style(style);
    f.render_widget(paragraph, area);
}

fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_width.saturating_sub(3)).collect();
    truncated + "..."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_with_ellipsis("hi", 10), "hi");
    }

    #[test]
    fn long_text_is_cut_to_width_with_an_ellipsis() {
        let out = truncate_with_ellipsis("a very long status message", 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with("..."));
    }
}
