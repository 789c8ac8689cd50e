use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A planned study block on a calendar day
///
/// `course_id` is a weak reference: the course may have been deleted since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: String,
    pub course_id: String,
    pub date: NaiveDate,
    /// Minutes
    pub duration: u32,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_at: i64,
}

impl StudySession {
    /// Calendar-day equality, independent of when the session was created
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

/// Input for planning a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudySession {
    pub course_id: String,
    pub date: NaiveDate,
    pub duration: u32,
    pub notes: String,
}
