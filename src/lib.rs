//! Course Tracker Library
//!
//! A single-user learning tracker: courses with progress, resources attached
//! to them, and a calendar of study sessions, persisted to a local key-value
//! store.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Handler Layer**: `Dashboard` - validates raw input and formats replies
//! - **Domain Layer**: `course` and `schedule` modules - the course store,
//!   study sessions and the calendar grid
//! - **Persistence Layer**: `storage` module - key-value slots holding JSON
//!
//! # Example
//!
//! ```no_run
//! use course_tracker::Dashboard;
//! use course_tracker::schedule::WeekStart;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let dashboard = Dashboard::open("./data", WeekStart::sunday);
//!     let reply = dashboard.list_courses();
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod course;
pub mod error;
pub mod formatting;
pub mod handlers;
pub mod schedule;
pub mod stats;
pub mod storage;
pub mod validation;

use std::path::Path;

// Re-export commonly used types
pub use course::{Course, CourseStore, CourseUpdate, NewCourse, NewResource, Resource, ResourceType};
pub use schedule::{NewStudySession, StudySession};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage};

use schedule::WeekStart;

/// User-facing front of the course store
///
/// Each handler (see the `handlers` module) takes raw strings, validates
/// them, applies the change through `CourseStore` and returns a reply
/// message. Unknown ids are reported here as errors; the store itself
/// ignores them.
pub struct Dashboard {
    pub(crate) store: CourseStore,
    pub(crate) week_start: WeekStart,
    /// Most recently removed resource and its course, for one-step undo
    pub(crate) last_removed_resource: Option<(String, Resource)>,
}

impl Dashboard {
    /// Create a dashboard over an existing store
    pub fn new(store: CourseStore, week_start: WeekStart) -> Self {
        Self {
            store,
            week_start,
            last_removed_resource: None,
        }
    }

    /// Create a dashboard persisting to JSON files under `data_dir`
    pub fn open(data_dir: impl AsRef<Path>, week_start: WeekStart) -> Self {
        Self::new(CourseStore::open(FileStorage::new(data_dir)), week_start)
    }

    pub fn store(&self) -> &CourseStore {
        &self.store
    }

    pub(crate) fn require_course(&self, id: &str) -> anyhow::Result<&Course> {
        match self.store.course(id) {
            Some(course) => Ok(course),
            None => anyhow::bail!("Course '{}' not found", id),
        }
    }
}
