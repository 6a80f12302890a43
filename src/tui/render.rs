use chrono::NaiveDateTime;
use ratatui::Frame;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

use crate::tui::app::{App, Mode};
use crate::tui::layout::Layout;
use crate::tui::widgets::{
    color::parse_color,
    date_picker::render_date_picker,
    form::render_add_task_form,
    header::render_header,
    help::render_help,
    section_list::render_section_list,
    status_bar::render_status_bar,
};
use crate::utils;

pub fn render(f: &mut Frame, app: &mut App, layout: &Layout, now: NaiveDateTime) {
    let active_theme = app.config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let ongoing_accent = parse_color(&active_theme.ongoing);
    let completed_accent = parse_color(&active_theme.completed);
    let overdue_accent = parse_color(&active_theme.overdue);

    // Outer border with the app name centered in the top edge
    let outer_block = Block::default()
        .borders(Borders::ALL)
        .title("Dayplan")
        .title_alignment(ratatui::layout::Alignment::Center)
        .style(Style::default().fg(fg_color).bg(bg_color));
    f.render_widget(outer_block, f.area());

    render_header(
        f,
        layout.header_area,
        app.store.selected_date(),
        utils::today(),
        &app.config,
    );

    // One classification pass per frame; the three lists and the selection
    // mapping both come from it
    let view = app.day_view(now);
    let n_ongoing = view.ongoing.len();
    let n_completed = view.completed.len();
    let n_overdue = view.overdue.len();
    let s = app.selected_index;

    let ongoing_selected = (s < n_ongoing).then_some(s);
    let completed_selected = (s >= n_ongoing && s < n_ongoing + n_completed).then(|| s - n_ongoing);
    let overdue_selected = (s >= n_ongoing + n_completed
        && s < n_ongoing + n_completed + n_overdue)
        .then(|| s - n_ongoing - n_completed);

    render_section_list(
        f,
        layout.ongoing_area,
        "Ongoing",
        &view.ongoing,
        ongoing_accent,
        ongoing_selected,
        &app.config,
    );
    render_section_list(
        f,
        layout.completed_area,
        "Completed",
        &view.completed,
        completed_accent,
        completed_selected,
        &app.config,
    );
    render_section_list(
        f,
        layout.overdue_area,
        "Overdue",
        &view.overdue,
        overdue_accent,
        overdue_selected,
        &app.config,
    );

    // Modal overlays render after the normal content
    match app.mode {
        Mode::AddTask => {
            if let Some(ref form) = app.add_form {
                render_add_task_form(f, f.area(), form, &app.config);
            }
        }
        Mode::PickDate => {
            if let Some(ref form) = app.date_form {
                render_date_picker(f, f.area(), form, &app.config);
            }
        }
        Mode::Help => {
            render_help(f, f.area(), &app.config);
        }
        Mode::View => {}
    }

    let key_hints = get_key_hints(app);
    render_status_bar(
        f,
        layout.status_area,
        app.status_message.as_ref(),
        &key_hints,
        &app.config,
    );
}

fn get_key_hints(app: &App) -> Vec<String> {
    let bindings = &app.config.key_bindings;
    let fmt = utils::format_key_binding_for_display;
    match app.mode {
        Mode::AddTask => {
            vec![
                "Tab/Shift+Tab: Next/Prev field".to_string(),
                "Enter: Add".to_string(),
                "Esc: Cancel".to_string(),
            ]
        }
        Mode::PickDate => {
            vec!["Enter: Go".to_string(), "Esc: Cancel".to_string()]
        }
        Mode::Help => {
            vec![format!("Esc or {}: Close help", fmt(&bindings.help))]
        }
        Mode::View => {
            vec![
                format!("{}: Quit", fmt(&bindings.quit)),
                format!("{}: New", fmt(&bindings.new)),
                format!("{}: Complete", fmt(&bindings.complete)),
                format!("{}: Delete", fmt(&bindings.delete)),
                format!(
                    "{}/{}: Day",
                    fmt(&bindings.prev_day),
                    fmt(&bindings.next_day)
                ),
                format!("{}: Today", fmt(&bindings.today)),
                format!("{}: Go to date", fmt(&bindings.goto_date)),
                format!("{}: Help", fmt(&bindings.help)),
            ]
        }
    }
}
