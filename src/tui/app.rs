use std::time::Instant;

use chrono::{Days, NaiveDate, NaiveDateTime};

use crate::store::DayView;
use crate::tui::widgets::input::Input;
use crate::utils::{format_date, parse_clock_component, parse_date};
use crate::{Config, TaskStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    View,
    AddTask,
    PickDate,
    Help,
}

/// Which of the three lists a displayed row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Ongoing,
    Completed,
    Overdue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddTaskField {
    Title,
    Hour,
    Minute,
}

#[derive(Debug, Clone)]
pub struct AddTaskForm {
    pub current_field: AddTaskField,
    pub title: Input,
    pub hour: Input,
    pub minute: Input,
}

impl AddTaskForm {
    fn new() -> Self {
        Self {
            current_field: AddTaskField::Title,
            title: Input::new(),
            hour: Input::new(),
            minute: Input::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DateForm {
    pub input: Input,
}

pub struct App {
    pub config: Config,
    pub store: TaskStore,

    pub mode: Mode,
    /// Flat selection index across the rows of the three lists, in display
    /// order (ongoing, then completed, then overdue).
    pub selected_index: usize,
    pub add_form: Option<AddTaskForm>,
    pub date_form: Option<DateForm>,

    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,
}

impl App {
    pub fn new(config: Config, store: TaskStore) -> Self {
        Self {
            config,
            store,
            mode: Mode::View,
            selected_index: 0,
            add_form: None,
            date_form: None,
            status_message: None,
            status_message_time: None,
        }
    }

    /// The three lists for the selected date as of `now`.
    ///
    /// Recomputed on every call so that any mutation, and the clock itself,
    /// is immediately visible on the next read.
    pub fn day_view(&self, now: NaiveDateTime) -> DayView<'_> {
        self.store.classify(self.store.selected_date(), now)
    }

    /// Row ids in display order, tagged with the list each belongs to.
    pub fn day_rows(&self, now: NaiveDateTime) -> Vec<(Bucket, u64)> {
        let view = self.day_view(now);
        let mut rows = Vec::with_capacity(view.len());
        rows.extend(view.ongoing.iter().map(|t| (Bucket::Ongoing, t.id)));
        rows.extend(view.completed.iter().map(|t| (Bucket::Completed, t.id)));
        rows.extend(view.overdue.iter().map(|t| (Bucket::Overdue, t.id)));
        rows
    }

    pub fn selected_task_id(&self, now: NaiveDateTime) -> Option<u64> {
        self.day_rows(now).get(self.selected_index).map(|(_, id)| *id)
    }

    /// Keep the selection within bounds. Rows migrate between lists as the
    /// clock advances, so this runs every tick, not just after mutations.
    pub fn clamp_selection(&mut self, now: NaiveDateTime) {
        let len = self.day_rows(now).len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self, now: NaiveDateTime) {
        let len = self.day_rows(now).len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    // --- add-task form ---

    pub fn enter_add_mode(&mut self) {
        self.add_form = Some(AddTaskForm::new());
        self.mode = Mode::AddTask;
    }

    pub fn cancel_add_mode(&mut self) {
        self.add_form = None;
        self.mode = Mode::View;
    }

    /// Cycle the active form field. Wraps around in both directions.
    pub fn navigate_add_field(&mut self, forward: bool) {
        if let Some(ref mut form) = self.add_form {
            form.current_field = match (form.current_field, forward) {
                (AddTaskField::Title, true) => AddTaskField::Hour,
                (AddTaskField::Hour, true) => AddTaskField::Minute,
                (AddTaskField::Minute, true) => AddTaskField::Title,
                (AddTaskField::Title, false) => AddTaskField::Minute,
                (AddTaskField::Hour, false) => AddTaskField::Title,
                (AddTaskField::Minute, false) => AddTaskField::Hour,
            };
        }
    }

    pub fn current_add_input(&mut self) -> Option<&mut Input> {
        self.add_form.as_mut().map(|form| match form.current_field {
            AddTaskField::Title => &mut form.title,
            AddTaskField::Hour => &mut form.hour,
            AddTaskField::Minute => &mut form.minute,
        })
    }

    /// Create the task from the form. Hour/minute text that does not parse
    /// becomes 0, so the add never fails.
    pub fn submit_add_form(&mut self) {
        if let Some(form) = self.add_form.take() {
            let hour = parse_clock_component(form.hour.value());
            let minute = parse_clock_component(form.minute.value());
            self.store
                .add_task(form.title.value().to_string(), hour, minute);
            self.set_status_message("Task added".to_string());
        }
        self.mode = Mode::View;
    }

    // --- complete / delete ---

    pub fn complete_selected(&mut self, now: NaiveDateTime) {
        match self.selected_task_id(now) {
            Some(id) => {
                self.store.complete_task(id);
                self.clamp_selection(now);
                self.set_status_message("Task completed".to_string());
            }
            None => self.set_status_message("No task selected".to_string()),
        }
    }

    pub fn delete_selected(&mut self, now: NaiveDateTime) {
        match self.selected_task_id(now) {
            Some(id) => {
                self.store.delete_task(id);
                self.clamp_selection(now);
                self.set_status_message("Task deleted".to_string());
            }
            None => self.set_status_message("No task selected".to_string()),
        }
    }

    // --- date selection ---

    fn show_date(&mut self, date: NaiveDate) {
        self.store.select_date(date);
        self.selected_index = 0;
    }

    pub fn prev_day(&mut self) {
        let date = self.store.selected_date() - Days::new(1);
        self.show_date(date);
    }

    pub fn next_day(&mut self) {
        let date = self.store.selected_date() + Days::new(1);
        self.show_date(date);
    }

    pub fn goto_today(&mut self, today: NaiveDate) {
        self.show_date(today);
    }

    pub fn enter_pick_date_mode(&mut self) {
        self.date_form = Some(DateForm {
            input: Input::from_string(format_date(self.store.selected_date())),
        });
        self.mode = Mode::PickDate;
    }

    pub fn cancel_pick_date_mode(&mut self) {
        self.date_form = None;
        self.mode = Mode::View;
    }

    /// Apply the go-to-date field. Text that does not parse leaves the
    /// selected date unchanged and keeps the form open for correction.
    pub fn submit_date_form(&mut self) {
        let Some(text) = self.date_form.as_ref().map(|f| f.input.value().to_string()) else {
            return;
        };
        match parse_date(&text) {
            Ok(date) => {
                self.show_date(date);
                self.date_form = None;
                self.mode = Mode::View;
            }
            Err(_) => {
                self.set_status_message(format!("Invalid date '{}' (expected YYYY-MM-DD)", text));
            }
        }
    }

    // --- help ---

    pub fn enter_help_mode(&mut self) {
        self.mode = Mode::Help;
    }

    pub fn exit_help_mode(&mut self) {
        self.mode = Mode::View;
    }

    // --- status messages ---

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_message_time = Some(Instant::now());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
        self.status_message_time = None;
    }

    /// Check if the status message should be auto-cleared (after 3 seconds)
    pub fn check_status_message_timeout(&mut self) {
        const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 3;
        if let Some(time) = self.status_message_time {
            if time.elapsed().as_secs() >= STATUS_MESSAGE_TIMEOUT_SECS {
                self.clear_status_message();
            }
        }
    }
}
