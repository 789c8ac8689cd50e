use super::session::StudySession;
use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// First column of the calendar grid
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeekStart {
    #[default]
    sunday,
    monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::sunday => Weekday::Sun,
            WeekStart::monday => Weekday::Mon,
        }
    }
}

/// One cell of the month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Belongs to the month being displayed (not a leading/trailing filler day)
    pub in_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub has_sessions: bool,
    /// False for days strictly before today
    pub is_selectable: bool,
}

/// Complete weeks covering one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    /// First day of the displayed month
    pub month: NaiveDate,
    pub days: Vec<CalendarDay>,
}

impl CalendarGrid {
    /// Rows of seven days
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days.iter().find(|d| d.date == date)
    }
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Last day of the month containing `date`
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next - Duration::days(1),
        None => NaiveDate::MAX,
    }
}

fn days_after_week_start(date: NaiveDate, week_start: Weekday) -> i64 {
    let offset = 7 + date.weekday().num_days_from_sunday() - week_start.num_days_from_sunday();
    i64::from(offset % 7)
}

/// Build the grid for the month containing `month`
///
/// Spans from the start of the week holding the 1st through the end of the
/// week holding the last day, so its length is a multiple of seven except in
/// the first and last representable months.
pub fn month_grid(
    month: NaiveDate,
    week_start: Weekday,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    sessions: &[StudySession],
) -> CalendarGrid {
    let first = first_of_month(month);
    let last = last_of_month(month);

    // Saturates at the ends of the representable date range
    let start = first
        .checked_sub_signed(Duration::days(days_after_week_start(first, week_start)))
        .unwrap_or(NaiveDate::MIN);
    let end = last
        .checked_add_signed(Duration::days(6 - days_after_week_start(last, week_start)))
        .unwrap_or(NaiveDate::MAX);

    let days = start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| CalendarDay {
            date,
            in_month: date.month() == first.month() && date.year() == first.year(),
            is_today: date == today,
            is_selected: selected == Some(date),
            has_sessions: sessions.iter().any(|s| s.falls_on(date)),
            is_selectable: date >= today,
        })
        .collect();

    CalendarGrid { month: first, days }
}

/// State of the study-schedule view: displayed month and selected day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleView {
    month: NaiveDate,
    selected: Option<NaiveDate>,
    today: NaiveDate,
    week_start: Weekday,
}

impl ScheduleView {
    /// Open on today's month with today selected
    pub fn new(today: NaiveDate, week_start: WeekStart) -> Self {
        Self {
            month: first_of_month(today),
            selected: Some(today),
            today,
            week_start: week_start.weekday(),
        }
    }

    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Show the month containing `date` without touching the selection
    pub fn show_month(&mut self, date: NaiveDate) {
        self.month = first_of_month(date);
    }

    pub fn next_month(&mut self) {
        if let Some(next) = self.month.checked_add_months(Months::new(1)) {
            self.month = next;
        }
    }

    pub fn prev_month(&mut self) {
        if let Some(prev) = self.month.checked_sub_months(Months::new(1)) {
            self.month = prev;
        }
    }

    /// Select a day; days before today are refused and leave the selection as is
    pub fn select(&mut self, date: NaiveDate) -> bool {
        if date < self.today {
            return false;
        }
        self.selected = Some(date);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn grid(&self, sessions: &[StudySession]) -> CalendarGrid {
        month_grid(
            self.month,
            self.week_start,
            self.today,
            self.selected,
            sessions,
        )
    }

    /// Sessions on the selected day; empty when nothing is selected
    pub fn sessions_for_selected<'a>(&self, sessions: &'a [StudySession]) -> Vec<&'a StudySession> {
        match self.selected {
            Some(date) => sessions.iter().filter(|s| s.falls_on(date)).collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_at_ends_of_date_range() {
        for week_start in [Weekday::Sun, Weekday::Mon] {
            let grid = month_grid(NaiveDate::MAX, week_start, NaiveDate::MIN, None, &[]);
            assert_eq!(grid.days.last().unwrap().date, NaiveDate::MAX);
            assert!(grid.day(first_of_month(NaiveDate::MAX)).unwrap().in_month);

            let grid = month_grid(NaiveDate::MIN, week_start, NaiveDate::MIN, None, &[]);
            assert_eq!(grid.days[0].date, NaiveDate::MIN);
            assert!(grid.day(last_of_month(NaiveDate::MIN)).unwrap().in_month);
        }
    }

    #[test]
    fn test_first_and_last_of_month() {
        assert_eq!(first_of_month(date(2024, 2, 17)), date(2024, 2, 1));
        assert_eq!(last_of_month(date(2024, 2, 17)), date(2024, 2, 29));
        assert_eq!(last_of_month(date(2023, 12, 5)), date(2023, 12, 31));
    }

    #[test]
    fn test_february_2015_fits_four_rows() {
        // Feb 1 2015 is a Sunday and the month has 28 days
        let grid = month_grid(date(2015, 2, 10), Weekday::Sun, date(2015, 2, 1), None, &[]);
        assert_eq!(grid.days.len(), 28);
        assert!(grid.days.iter().all(|d| d.in_month));
    }

    #[test]
    fn test_monday_start_shifts_leading_days() {
        // June 1 2024 is a Saturday
        let grid = month_grid(date(2024, 6, 1), Weekday::Mon, date(2024, 1, 1), None, &[]);
        assert_eq!(grid.days[0].date, date(2024, 5, 27));
        assert_eq!(grid.days[0].date.weekday(), Weekday::Mon);
        // June 30 is a Sunday, so no trailing days are needed
        assert_eq!(grid.days.last().unwrap().date, date(2024, 6, 30));
        assert_eq!(grid.days.len(), 35);
    }

    #[test]
    fn test_past_days_not_selectable() {
        let today = date(2024, 3, 15);
        let mut view = ScheduleView::new(today, WeekStart::sunday);

        assert!(!view.select(date(2024, 3, 14)));
        assert_eq!(view.selected(), Some(today));
        assert!(view.select(date(2024, 3, 20)));

        let grid = view.grid(&[]);
        assert!(!grid.day(date(2024, 3, 14)).unwrap().is_selectable);
        assert!(grid.day(date(2024, 3, 15)).unwrap().is_selectable);
        assert!(grid.day(date(2024, 3, 20)).unwrap().is_selected);
    }

    #[test]
    fn test_month_navigation_crosses_year() {
        let mut view = ScheduleView::new(date(2024, 12, 31), WeekStart::monday);
        view.next_month();
        assert_eq!(view.month(), date(2025, 1, 1));
        view.prev_month();
        view.prev_month();
        assert_eq!(view.month(), date(2024, 11, 1));
    }
}
