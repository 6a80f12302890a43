use chrono::{NaiveDate, NaiveDateTime};

use crate::models::Task;

/// Tasks for one date, split into the three displayed lists.
///
/// Borrowed views into the store, recomputed on every call; "overdue" is
/// never stored on the task itself. Each list preserves the order tasks
/// were added in.
#[derive(Debug)]
pub struct DayView<'a> {
    pub ongoing: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
    pub overdue: Vec<&'a Task>,
}

impl<'a> DayView<'a> {
    pub fn is_empty(&self) -> bool {
        self.ongoing.is_empty() && self.completed.is_empty() && self.overdue.is_empty()
    }

    /// Total rows across the three lists.
    pub fn len(&self) -> usize {
        self.ongoing.len() + self.completed.len() + self.overdue.len()
    }
}

/// The in-memory task collection plus the currently selected date.
///
/// Everything lives and dies with the process. All operations are total:
/// adding always succeeds, and completing or deleting an id that is not
/// present is a silent no-op.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    selected_date: NaiveDate,
    next_id: u64,
}

impl TaskStore {
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            tasks: Vec::new(),
            selected_date,
            next_id: 1,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// Replace the selected date. Does not touch the collection.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    /// Append a new task bound to the currently selected date.
    ///
    /// Hour/minute arrive already parsed (the form layer substitutes 0 for
    /// text that does not parse) and are stored without range checks.
    /// Returns the id of the new task.
    pub fn add_task(&mut self, title: String, hour: u32, minute: u32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks
            .push(Task::new(id, title, hour, minute, self.selected_date));
        id
    }

    /// Mark a task completed. Idempotent; unknown ids are ignored.
    pub fn complete_task(&mut self, id: u64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.is_completed = true;
        }
    }

    /// Remove a task permanently. Unknown ids are ignored.
    pub fn delete_task(&mut self, id: u64) {
        self.tasks.retain(|t| t.id != id);
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Partition the tasks of `date` into ongoing/completed/overdue as of
    /// `now`.
    ///
    /// Completion wins over lateness: a completed task is listed as
    /// completed no matter how far past its scheduled instant `now` is.
    /// A task scheduled exactly at `now` is still ongoing; overdue
    /// requires `now` to be strictly later. Tasks on other dates are
    /// excluded entirely.
    pub fn classify(&self, date: NaiveDate, now: NaiveDateTime) -> DayView<'_> {
        let mut view = DayView {
            ongoing: Vec::new(),
            completed: Vec::new(),
            overdue: Vec::new(),
        };
        for task in self.tasks.iter().filter(|t| t.date == date) {
            if task.is_completed {
                view.completed.push(task);
            } else if task.is_overdue(now) {
                view.overdue.push(task);
            } else {
                view.ongoing.push(task);
            }
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(d: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
        d.and_hms_opt(hour, minute, 0).unwrap()
    }

    fn store() -> TaskStore {
        TaskStore::new(date(2024, 6, 1))
    }

    #[test]
    fn every_task_lands_in_exactly_one_list() {
        let mut store = store();
        store.add_task("early".to_string(), 6, 0);
        store.add_task("late".to_string(), 22, 0);
        let done = store.add_task("done".to_string(), 6, 30);
        store.complete_task(done);

        let view = store.classify(date(2024, 6, 1), at(date(2024, 6, 1), 12, 0));
        assert_eq!(view.len(), store.len());
        assert_eq!(view.overdue.len(), 1);
        assert_eq!(view.ongoing.len(), 1);
        assert_eq!(view.completed.len(), 1);
    }

    #[test]
    fn report_scenario_moves_between_lists_with_the_clock() {
        let mut store = store();
        store.add_task("Write report".to_string(), 9, 0);

        let view = store.classify(date(2024, 6, 1), at(date(2024, 6, 1), 8, 0));
        assert_eq!(view.ongoing.len(), 1);
        assert_eq!(view.ongoing[0].title, "Write report");
        assert!(view.overdue.is_empty());

        let view = store.classify(date(2024, 6, 1), at(date(2024, 6, 1), 10, 0));
        assert!(view.ongoing.is_empty());
        assert_eq!(view.overdue.len(), 1);
        assert_eq!(view.overdue[0].title, "Write report");
    }

    #[test]
    fn completion_wins_over_lateness() {
        let mut store = store();
        let id = store.add_task("Write report".to_string(), 9, 0);
        store.complete_task(id);

        let view = store.classify(date(2024, 6, 1), at(date(2024, 6, 1), 10, 0));
        assert_eq!(view.completed.len(), 1);
        assert!(view.overdue.is_empty());

        // Even years past the scheduled instant.
        let view = store.classify(date(2024, 6, 1), at(date(2030, 1, 1), 0, 0));
        assert_eq!(view.completed.len(), 1);
        assert!(view.overdue.is_empty());
    }

    #[test]
    fn scheduled_exactly_at_now_is_ongoing() {
        let mut store = store();
        store.add_task("boundary".to_string(), 9, 0);
        let view = store.classify(date(2024, 6, 1), at(date(2024, 6, 1), 9, 0));
        assert_eq!(view.ongoing.len(), 1);
        assert!(view.overdue.is_empty());
    }

    #[test]
    fn lists_preserve_insertion_order() {
        let mut store = store();
        // Deliberately out of clock order.
        store.add_task("b".to_string(), 23, 0);
        store.add_task("a".to_string(), 22, 0);
        store.add_task("c".to_string(), 23, 30);

        let view = store.classify(date(2024, 6, 1), at(date(2024, 6, 1), 0, 0));
        let titles: Vec<&str> = view.ongoing.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a", "c"]);
    }

    #[test]
    fn classification_only_sees_the_requested_date() {
        let mut store = store();
        store.add_task("june first".to_string(), 9, 0);
        store.select_date(date(2024, 6, 2));
        store.add_task("june second".to_string(), 9, 0);

        let view = store.classify(date(2024, 6, 1), at(date(2024, 6, 1), 8, 0));
        assert_eq!(view.len(), 1);
        assert_eq!(view.ongoing[0].title, "june first");

        let view = store.classify(date(2024, 6, 2), at(date(2024, 6, 1), 8, 0));
        assert_eq!(view.len(), 1);
        assert_eq!(view.ongoing[0].title, "june second");
    }

    #[test]
    fn delete_empties_all_lists() {
        let mut store = store();
        let id = store.add_task("gone".to_string(), 9, 0);
        store.delete_task(id);

        let view = store.classify(date(2024, 6, 1), at(date(2024, 6, 1), 8, 0));
        assert!(view.is_empty());
        let view = store.classify(date(2024, 6, 1), at(date(2024, 6, 1), 23, 59));
        assert!(view.is_empty());
    }

    #[test]
    fn complete_is_idempotent_and_tolerates_unknown_ids() {
        let mut store = store();
        let id = store.add_task("t".to_string(), 9, 0);
        store.complete_task(id);
        store.complete_task(id);
        store.complete_task(9999);
        assert!(store.get(id).unwrap().is_completed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_tolerates_unknown_ids() {
        let mut store = store();
        store.add_task("t".to_string(), 9, 0);
        store.delete_task(9999);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ids_are_unique_and_not_reused_after_delete() {
        let mut store = store();
        let a = store.add_task("a".to_string(), 9, 0);
        let b = store.add_task("b".to_string(), 9, 0);
        assert_ne!(a, b);
        store.delete_task(b);
        let c = store.add_task("c".to_string(), 9, 0);
        assert_ne!(c, a);
        assert_ne!(c, b);
    }

    #[test]
    fn invalid_clock_time_stays_ongoing_until_completed() {
        let mut store = store();
        let id = store.add_task("no instant".to_string(), 24, 0);

        let view = store.classify(date(2024, 6, 1), at(date(2024, 6, 1), 23, 59));
        assert_eq!(view.ongoing.len(), 1);

        store.complete_task(id);
        let view = store.classify(date(2024, 6, 1), at(date(2024, 6, 1), 23, 59));
        assert_eq!(view.completed.len(), 1);
        assert!(view.ongoing.is_empty());
    }

    #[test]
    fn empty_title_is_accepted() {
        let mut store = store();
        let id = store.add_task(String::new(), 0, 0);
        assert_eq!(store.get(id).unwrap().title, "");
    }
}
