use ratatui::layout::{Constraint, Direction, Layout as RatLayout, Rect};

pub struct Layout {
    pub inner_area: Rect, // Area inside the outer border
    pub header_area: Rect,
    pub ongoing_area: Rect,
    pub completed_area: Rect,
    pub overdue_area: Rect,
    pub status_area: Rect,
}

impl Layout {
    /// Minimum terminal dimensions required for the application
    /// Width: 30 columns fits the header card and a usable task row
    /// Height: 13 lines (3 header + 3 per section + 1 status), inside the
    /// outer border
    pub const MIN_WIDTH: u16 = 30;
    pub const MIN_HEIGHT: u16 = 13;

    pub fn calculate(size: Rect) -> Self {
        // Ensure minimum terminal size (accounting for outer border)
        let min_width_with_border = Self::MIN_WIDTH + 2;
        let min_height_with_border = Self::MIN_HEIGHT + 2;
        let width = size.width.max(min_width_with_border);
        let height = size.height.max(min_height_with_border);
        let size = Rect::new(size.x, size.y, width, height);

        // Inner area accounts for the outer border (1 char on each side)
        let inner_area = Rect::new(
            size.x + 1,
            size.y + 1,
            size.width.saturating_sub(2),
            size.height.saturating_sub(2),
        );

        // Header card, three stacked section lists, one status line
        let vertical = RatLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Sections
                Constraint::Length(1), // Status
            ])
            .split(inner_area);

        let sections = RatLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(vertical[1]);

        Self {
            inner_area,
            header_area: vertical[0],
            ongoing_area: sections[0],
            completed_area: sections[1],
            overdue_area: sections[2],
            status_area: vertical[2],
        }
    }
}
