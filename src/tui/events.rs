use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    size as terminal_size,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

use crate::tui::app::{App, Mode};
use crate::tui::error::TuiError;
use crate::tui::layout::Layout;
use crate::utils::{self, has_primary_modifier, parse_key_binding};

/// Guard that ensures terminal state is restored even on panic.
/// If the terminal is left in raw mode or the alternate screen, the user's
/// shell is unusable afterwards.
struct TerminalGuard {
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl TerminalGuard {
    fn new() -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        Ok(Self {
            raw_mode_enabled: true,
            alternate_screen_enabled: true,
        })
    }

    /// Manually restore terminal state (called on normal exit).
    /// After calling this, the guard will do nothing on drop.
    fn restore(&mut self) -> Result<(), TuiError> {
        if self.raw_mode_enabled {
            disable_raw_mode()?;
            self.raw_mode_enabled = false;
        }
        if self.alternate_screen_enabled {
            execute!(io::stdout(), LeaveAlternateScreen)?;
            self.alternate_screen_enabled = false;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Ignore errors in drop - we're already in a cleanup path
        if self.raw_mode_enabled {
            let _ = disable_raw_mode();
        }
        if self.alternate_screen_enabled {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
    }
}

/// True when `key` matches the configured binding string.
/// Unparsable bindings never match; the defaults always parse.
fn binding_matches(binding: &str, key: KeyEvent) -> bool {
    match parse_key_binding(binding) {
        Ok(parsed) => {
            parsed.key_code == key.code
                && parsed.requires_ctrl == has_primary_modifier(key.modifiers)
        }
        Err(_) => false,
    }
}

pub fn run_event_loop(mut app: App) -> Result<(), TuiError> {
    // Check terminal size before entering the alternate screen so the
    // message lands in the normal terminal
    let (width, height) = terminal_size()?;
    let min_width_with_border = Layout::MIN_WIDTH + 2;
    let min_height_with_border = Layout::MIN_HEIGHT + 2;

    if width < min_width_with_border || height < min_height_with_border {
        return Err(TuiError::RenderError(format!(
            "Terminal size too small. Current: {}x{}, Minimum required: {}x{}. Please resize your terminal window.",
            width, height, min_width_with_border, min_height_with_border
        )));
    }

    let mut guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    loop {
        app.check_status_message_timeout();

        // Classification is clock-dependent: rows migrate from ongoing to
        // overdue while the app sits idle, so the selection is re-clamped
        // and the frame redrawn every tick with a fresh `now`.
        let now = utils::now();
        app.clamp_selection(now);

        terminal.draw(|f| {
            let layout = Layout::calculate(f.area());
            crate::tui::render::render(f, &mut app, &layout, now);
        })?;

        // Only process Press events to avoid duplicate handling on Windows
        if event::poll(std::time::Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key_event) => {
                    if key_event.kind == KeyEventKind::Press
                        && handle_key_event(&mut app, key_event)?
                    {
                        break; // Quit requested
                    }
                }
                Event::Resize(_width, _height) => {
                    // Layout recalculates from the frame area on next draw
                }
                _ => {
                    // Ignore other event types (mouse, etc.)
                }
            }
        }
    }

    guard.restore()?;

    Ok(())
}

/// Dispatch a key press for the current mode. Returns true to quit.
pub fn handle_key_event(app: &mut App, key_event: KeyEvent) -> Result<bool, TuiError> {
    match app.mode {
        Mode::View => handle_view_mode(app, key_event),
        Mode::AddTask => handle_add_task_mode(app, key_event),
        Mode::PickDate => handle_pick_date_mode(app, key_event),
        Mode::Help => handle_help_mode(app, key_event),
    }
}

fn handle_view_mode(app: &mut App, key_event: KeyEvent) -> Result<bool, TuiError> {
    let bindings = app.config.key_bindings.clone();
    let now = utils::now();

    if binding_matches(&bindings.quit, key_event) {
        return Ok(true);
    }

    if binding_matches(&bindings.new, key_event) {
        app.enter_add_mode();
    } else if binding_matches(&bindings.complete, key_event) {
        app.complete_selected(now);
    } else if binding_matches(&bindings.delete, key_event) {
        app.delete_selected(now);
    } else if binding_matches(&bindings.list_up, key_event) || key_event.code == KeyCode::Up {
        app.move_selection_up();
    } else if binding_matches(&bindings.list_down, key_event) || key_event.code == KeyCode::Down {
        app.move_selection_down(now);
    } else if binding_matches(&bindings.prev_day, key_event) {
        app.prev_day();
    } else if binding_matches(&bindings.next_day, key_event) {
        app.next_day();
    } else if binding_matches(&bindings.today, key_event) {
        app.goto_today(utils::today());
    } else if binding_matches(&bindings.goto_date, key_event) {
        app.enter_pick_date_mode();
    } else if binding_matches(&bindings.help, key_event) {
        app.enter_help_mode();
    }

    Ok(false)
}

fn handle_add_task_mode(app: &mut App, key_event: KeyEvent) -> Result<bool, TuiError> {
    match key_event.code {
        KeyCode::Esc => {
            app.cancel_add_mode();
        }
        KeyCode::Enter => {
            app.submit_add_form();
        }
        KeyCode::Tab | KeyCode::Down => {
            app.navigate_add_field(true);
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.navigate_add_field(false);
        }
        _ => {
            if let Some(input) = app.current_add_input() {
                apply_edit_key(input, key_event);
            }
        }
    }
    Ok(false)
}

fn handle_pick_date_mode(app: &mut App, key_event: KeyEvent) -> Result<bool, TuiError> {
    match key_event.code {
        KeyCode::Esc => {
            app.cancel_pick_date_mode();
        }
        KeyCode::Enter => {
            app.submit_date_form();
        }
        _ => {
            if let Some(ref mut form) = app.date_form {
                apply_edit_key(&mut form.input, key_event);
            }
        }
    }
    Ok(false)
}

fn handle_help_mode(app: &mut App, key_event: KeyEvent) -> Result<bool, TuiError> {
    let help_binding = app.config.key_bindings.help.clone();
    if key_event.code == KeyCode::Esc || binding_matches(&help_binding, key_event) {
        app.exit_help_mode();
    }
    Ok(false)
}

/// Editing keys shared by every single-line input field.
fn apply_edit_key(input: &mut crate::tui::widgets::input::Input, key_event: KeyEvent) {
    match key_event.code {
        KeyCode::Char(ch) if !has_primary_modifier(key_event.modifiers) => {
            input.insert_char(ch);
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, TaskStore};
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        App::new(Config::default(), TaskStore::new(date))
    }

    #[test]
    fn q_quits_from_view_mode() {
        let mut app = app();
        assert!(handle_key_event(&mut app, key(KeyCode::Char('q'))).unwrap());
    }

    #[test]
    fn n_opens_the_add_form_and_esc_closes_it() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.mode, Mode::AddTask);
        // q now types into the title instead of quitting
        assert!(!handle_key_event(&mut app, key(KeyCode::Char('q'))).unwrap());
        assert_eq!(app.add_form.as_ref().unwrap().title.value(), "q");
        handle_key_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.mode, Mode::View);
        assert!(app.store.is_empty());
    }

    #[test]
    fn typed_form_fields_become_a_task_on_enter() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('n'))).unwrap();
        for ch in "gym".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(ch))).unwrap();
        }
        handle_key_event(&mut app, key(KeyCode::Tab)).unwrap();
        handle_key_event(&mut app, key(KeyCode::Char('1'))).unwrap();
        handle_key_event(&mut app, key(KeyCode::Char('8'))).unwrap();
        handle_key_event(&mut app, key(KeyCode::Tab)).unwrap();
        handle_key_event(&mut app, key(KeyCode::Char('3'))).unwrap();
        handle_key_event(&mut app, key(KeyCode::Char('0'))).unwrap();
        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();

        let task = app.store.get(1).unwrap();
        assert_eq!(task.title, "gym");
        assert_eq!(task.hour, 18);
        assert_eq!(task.minute, 30);
        assert!(!task.is_completed);
    }

    #[test]
    fn arrow_keys_change_the_day_in_view_mode() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Left)).unwrap();
        assert_eq!(
            app.store.selected_date(),
            NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()
        );
        handle_key_event(&mut app, key(KeyCode::Right)).unwrap();
        handle_key_event(&mut app, key(KeyCode::Right)).unwrap();
        assert_eq!(
            app.store.selected_date(),
            NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()
        );
    }

    #[test]
    fn goto_date_form_edits_and_submits() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('g'))).unwrap();
        assert_eq!(app.mode, Mode::PickDate);
        // Backspace the prefilled "...-01" day and type "24"
        handle_key_event(&mut app, key(KeyCode::Backspace)).unwrap();
        handle_key_event(&mut app, key(KeyCode::Backspace)).unwrap();
        handle_key_event(&mut app, key(KeyCode::Char('2'))).unwrap();
        handle_key_event(&mut app, key(KeyCode::Char('4'))).unwrap();
        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.mode, Mode::View);
        assert_eq!(
            app.store.selected_date(),
            NaiveDate::from_ymd_opt(2024, 6, 24).unwrap()
        );
    }

    #[test]
    fn help_opens_and_closes() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::F(1))).unwrap();
        assert_eq!(app.mode, Mode::Help);
        // Other keys are ignored while help is up
        handle_key_event(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.mode, Mode::Help);
        handle_key_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.mode, Mode::View);
    }

    #[test]
    fn space_completes_the_selected_task() {
        let mut app = app();
        app.store.add_task("a".to_string(), 23, 59);
        handle_key_event(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(app.store.get(1).unwrap().is_completed);
    }

    #[test]
    fn binding_matching_respects_ctrl() {
        let plain = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE);
        let ctrl = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL);
        assert!(binding_matches("g", plain));
        assert!(!binding_matches("g", ctrl));
        assert!(binding_matches("Ctrl+g", ctrl));
        assert!(!binding_matches("Ctrl+g", plain));
        assert!(!binding_matches("NotAKey", plain));
    }
}
