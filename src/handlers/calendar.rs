//! Calendar handler for the study-schedule view

use crate::Dashboard;
use crate::formatting::{format_calendar, format_sessions};
use crate::schedule::ScheduleView;
use crate::validation::{parse_date, parse_month};
use anyhow::{Result, bail};

impl Dashboard {
    /// Render a month (YYYY-MM, default: current) and the sessions of the
    /// selected day (YYYY-MM-DD, default: today)
    pub fn calendar(&self, month: Option<&str>, select: Option<&str>) -> Result<String> {
        let mut view = ScheduleView::new(self.store.today(), self.week_start);

        if let Some(date_str) = select {
            let date = parse_date(date_str)?;
            if !view.select(date) {
                bail!("Cannot select {}: the date is in the past", date);
            }
            view.show_month(date);
        }
        if let Some(month_str) = month {
            view.show_month(parse_month(month_str)?);
        }

        let sessions = self.store.study_sessions();
        let grid = view.grid(sessions);
        let selected = view.sessions_for_selected(sessions);

        let mut result = format_calendar(&grid);
        if let Some(date) = view.selected() {
            result.push('\n');
            result.push_str(&format!("{}\n", date.format("%B %-d, %Y")));
            result.push_str(&format_sessions(&selected, |s| {
                self.store.course_title_for(s)
            }));
        }
        Ok(result)
    }
}
