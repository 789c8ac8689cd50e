//! Study sessions and the calendar grid
mod common;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use common::{new_course, test_store, today};
use course_tracker::course::SESSIONS_KEY;
use course_tracker::schedule::{ScheduleView, WeekStart, last_of_month, month_grid};
use course_tracker::{MemoryStorage, NewStudySession};

fn session_on(course_id: &str, date: NaiveDate) -> NewStudySession {
    NewStudySession {
        course_id: course_id.to_string(),
        date,
        duration: 60,
        notes: String::new(),
    }
}

#[test]
fn test_grid_is_complete_weeks_for_every_month() {
    for year in [2023, 2024, 2025] {
        for month in 1..=12 {
            let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
            let last = last_of_month(first);
            for week_start in [Weekday::Sun, Weekday::Mon] {
                let grid = month_grid(first, week_start, today(), None, &[]);

                assert_eq!(grid.days.len() % 7, 0);
                assert!(grid.days.len() <= 42);
                assert!(grid.day(first).unwrap().in_month);
                assert!(grid.day(last).unwrap().in_month);
                assert_eq!(grid.days[0].date.weekday(), week_start);
                assert_eq!(
                    grid.days.iter().filter(|d| d.in_month).count() as u32,
                    last.day()
                );
            }
        }
    }
}

#[test]
fn test_grid_rows_are_consecutive_days() {
    let grid = month_grid(today(), Weekday::Sun, today(), None, &[]);
    for pair in grid.days.windows(2) {
        assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
    }
    assert!(grid.weeks().all(|w| w.len() == 7));
}

#[test]
fn test_grid_flags_today_selected_and_sessions() {
    let mut store = test_store(MemoryStorage::new());
    let course = store.add_course(new_course("Rust"));
    let session_day = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
    store.add_study_session(session_on(&course, session_day));

    let mut view = ScheduleView::new(today(), WeekStart::sunday);
    assert!(view.select(session_day));
    let grid = view.grid(store.study_sessions());

    let today_cell = grid.day(today()).unwrap();
    assert!(today_cell.is_today);
    assert!(!today_cell.is_selected);
    assert!(!today_cell.has_sessions);

    let session_cell = grid.day(session_day).unwrap();
    assert!(session_cell.is_selected);
    assert!(session_cell.has_sessions);
    assert_eq!(grid.days.iter().filter(|d| d.is_today).count(), 1);
}

#[test]
fn test_selected_day_filters_sessions_by_calendar_day() {
    let mut store = test_store(MemoryStorage::new());
    let course = store.add_course(new_course("Rust"));
    let day = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
    store.add_study_session(session_on(&course, day));
    store.add_study_session(session_on(&course, day));
    store.add_study_session(session_on(&course, day + Duration::days(1)));

    let mut view = ScheduleView::new(today(), WeekStart::monday);
    view.select(day);
    assert_eq!(view.sessions_for_selected(store.study_sessions()).len(), 2);
    assert_eq!(store.sessions_on(day).len(), 2);

    view.clear_selection();
    assert!(view.sessions_for_selected(store.study_sessions()).is_empty());
}

#[test]
fn test_dangling_session_reference_has_no_title() {
    let mut store = test_store(MemoryStorage::new());
    let course = store.add_course(new_course("Rust"));
    store.add_study_session(session_on(&course, today()));
    store.delete_course(&course);

    let session = &store.study_sessions()[0];
    assert!(store.course_title_for(session).is_none());
}

#[test]
fn test_sessions_persist_across_reload() {
    let storage = MemoryStorage::new();
    let mut store = test_store(storage.clone());
    let course = store.add_course(new_course("Rust"));
    let id = store.add_study_session(NewStudySession {
        notes: "Chapter 4".to_string(),
        ..session_on(&course, today())
    });
    assert!(storage.raw(SESSIONS_KEY).unwrap().contains("\"courseId\""));

    let mut reloaded = test_store(storage.clone());
    assert_eq!(reloaded.study_sessions(), store.study_sessions());
    assert_eq!(reloaded.study_sessions()[0].date, today());

    assert!(reloaded.remove_study_session(&id).is_some());
    assert!(reloaded.study_sessions().is_empty());
    assert_eq!(storage.raw(SESSIONS_KEY).unwrap(), "[]");
}
