use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Centered rect taking up the given percentage of the available area.
/// Based on the ratatui popup example: https://ratatui.rs/examples/apps/popup/
pub fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// Centered rect with fixed dimensions, clamped to the available area.
pub fn popup_area_fixed(area: Rect, width: u16, height: u16) -> Rect {
    let vertical =
        Layout::vertical([Constraint::Length(height.min(area.height))]).flex(Flex::Center);
    let horizontal =
        Layout::horizontal([Constraint::Length(width.min(area.width))]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
