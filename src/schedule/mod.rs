//! Study sessions and the calendar grid of the study-schedule view
//!
//! - `session`: the `StudySession` record and its creation input
//! - `calendar`: month grid computation and date selection

mod calendar;
mod session;

pub use calendar::{
    CalendarDay, CalendarGrid, ScheduleView, WeekStart, first_of_month, last_of_month, month_grid,
};
pub use session::{NewStudySession, StudySession};
