use chrono::{NaiveDate, NaiveDateTime};

/// A unit of work scheduled on a specific date at a specific clock time.
///
/// Identity is assigned by the store and never changes. Hour/minute are
/// stored exactly as the caller supplied them (the form layer substitutes
/// 0 for unparsable text); no range validation happens anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub hour: u32,
    pub minute: u32,
    pub date: NaiveDate,
    pub is_completed: bool,
}

impl Task {
    pub fn new(id: u64, title: String, hour: u32, minute: u32, date: NaiveDate) -> Self {
        Self {
            id,
            title,
            hour,
            minute,
            date,
            is_completed: false,
        }
    }

    /// The instant this task is scheduled for.
    ///
    /// Returns `None` when hour/minute do not form a valid clock time
    /// (the store accepts them unvalidated); such a task has no
    /// determinable lateness.
    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        self.date.and_hms_opt(self.hour, self.minute, 0)
    }

    /// Whether `now` is strictly past the scheduled instant.
    ///
    /// `now` is injected rather than read from a live clock so that
    /// classification stays deterministic. Exact equality is not overdue,
    /// and a task without a determinable instant is never overdue.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        match self.scheduled_at() {
            Some(at) => now > at,
            None => false,
        }
    }

    /// Clock time formatted for list rows (e.g. "09:05").
    pub fn time_label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn overdue_requires_now_strictly_after() {
        let task = Task::new(1, "report".to_string(), 9, 0, date(2024, 6, 1));
        let at_nine = date(2024, 6, 1).and_hms_opt(9, 0, 0).unwrap();
        assert!(!task.is_overdue(at_nine));
        assert!(task.is_overdue(at_nine + chrono::Duration::seconds(1)));
        assert!(!task.is_overdue(at_nine - chrono::Duration::seconds(1)));
    }

    #[test]
    fn out_of_range_time_has_no_scheduled_instant() {
        let task = Task::new(1, "odd".to_string(), 24, 0, date(2024, 6, 1));
        assert_eq!(task.scheduled_at(), None);
        let far_future = date(2030, 1, 1).and_hms_opt(0, 0, 0).unwrap();
        assert!(!task.is_overdue(far_future));
    }

    #[test]
    fn time_label_zero_pads() {
        let task = Task::new(1, String::new(), 7, 5, date(2024, 6, 1));
        assert_eq!(task.time_label(), "07:05");
    }
}
