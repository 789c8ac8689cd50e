//! Study session handlers

use crate::formatting::format_sessions;
use crate::validation::{normalize_id, parse_date, parse_duration, require};
use crate::{Dashboard, NewStudySession};
use anyhow::{Result, bail};

impl Dashboard {
    /// Plan a study session for a course on a date (YYYY-MM-DD)
    ///
    /// Past dates are refused, matching the calendar's selectable days.
    pub fn add_session(
        &mut self,
        course_id: &str,
        date: &str,
        duration: &str,
        notes: Option<String>,
    ) -> Result<String> {
        let course_id = require("Course", course_id)?;
        self.require_course(&course_id)?;

        let date = parse_date(date)?;
        if date < self.store.today() {
            bail!("Cannot plan a session on {}: the date is in the past", date);
        }

        let session = NewStudySession {
            course_id,
            date,
            duration: parse_duration(duration)?,
            notes: notes.map(|n| n.trim().to_string()).unwrap_or_default(),
        };
        let id = self.store.add_study_session(session);

        Ok(format!("Study session created with ID: {} ({})", id, date))
    }

    pub fn remove_session(&mut self, id: &str) -> Result<String> {
        let id = normalize_id(id);
        match self.store.remove_study_session(&id) {
            Some(session) => Ok(format!("Study session {} on {} removed", id, session.date)),
            None => bail!("Study session '{}' not found", id),
        }
    }

    /// Sessions on a date, or on today when no date is given
    pub fn sessions_on(&self, date: Option<&str>) -> Result<String> {
        let date = match date {
            Some(d) => parse_date(d)?,
            None => self.store.today(),
        };

        let sessions = self.store.sessions_on(date);
        Ok(format!(
            "{}\n{}",
            date.format("%B %-d, %Y"),
            format_sessions(&sessions, |s| self.store.course_title_for(s))
        ))
    }
}
