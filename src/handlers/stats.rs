//! Progress overview handler

use crate::Dashboard;
use crate::formatting::format_summary;
use crate::stats::ProgressSummary;

impl Dashboard {
    pub fn progress_summary(&self) -> String {
        format_summary(&ProgressSummary::from_courses(self.store.courses()))
    }
}
