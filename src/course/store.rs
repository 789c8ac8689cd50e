use crate::clock::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::course::model::{Course, CourseUpdate, NewCourse, NewResource, Resource};
use crate::schedule::{NewStudySession, StudySession};
use crate::storage::KeyValueStore;
use crate::validation::clamp_progress;
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Slot holding the JSON array of active courses
pub const COURSES_KEY: &str = "courses";

/// Slot holding the JSON array of study sessions
pub const SESSIONS_KEY: &str = "studySessions";

/// Single source of truth for courses, their resources and study sessions
///
/// Every mutation is written through to the backing `KeyValueStore`.
/// Deleted courses move to a holding area so they can be restored; the
/// holding area lives only as long as the store and is never persisted.
pub struct CourseStore {
    /// Active courses, kept in `created_at` order
    courses: Vec<Course>,

    /// Soft-deleted courses awaiting undo
    trash: Vec<Course>,

    sessions: Vec<StudySession>,

    storage: Box<dyn KeyValueStore>,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl CourseStore {
    /// Open a store backed by `storage`, using the system clock and UUID ids
    pub fn open(storage: impl KeyValueStore + 'static) -> Self {
        Self::with_collaborators(
            Box::new(storage),
            Box::new(UuidGenerator),
            Box::new(SystemClock),
        )
    }

    /// Open a store with explicit persistence, id and time collaborators
    ///
    /// A missing, unreadable or malformed slot loads as an empty collection.
    pub fn with_collaborators(
        storage: Box<dyn KeyValueStore>,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let mut courses: Vec<Course> = load_slot(&*storage, COURSES_KEY);
        for course in &mut courses {
            course.sort_resources();
        }
        courses.sort_by_key(|c| c.created_at);
        let sessions: Vec<StudySession> = load_slot(&*storage, SESSIONS_KEY);

        debug!(
            courses = courses.len(),
            sessions = sessions.len(),
            "course store opened"
        );

        Self {
            courses,
            trash: Vec::new(),
            sessions,
            storage,
            ids,
            clock,
        }
    }

    /// Today's date according to the store's clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    fn course_mut(&mut self, id: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.id == id)
    }

    /// Courses in the holding area, most recently deleted last
    pub fn deleted_courses(&self) -> &[Course] {
        &self.trash
    }

    pub fn is_deleted(&self, id: &str) -> bool {
        self.trash.iter().any(|c| c.id == id)
    }

    /// Add a course with progress 0 and no resources; returns its id
    pub fn add_course(&mut self, data: NewCourse) -> String {
        let id = self.ids.next_id();
        let course = Course {
            id: id.clone(),
            title: data.title,
            description: data.description,
            category: data.category,
            platform: data.platform,
            instructor: data.instructor,
            due_date: data.due_date,
            url: data.url,
            progress: 0,
            resources: Vec::new(),
            created_at: self.clock.now_millis(),
        };

        debug!(id = %id, title = %course.title, "add course");
        self.courses.push(course);
        self.persist_courses();
        id
    }

    /// Merge the `Some` fields of `update` into the course; no-op if not found
    pub fn update_course(&mut self, id: &str, update: CourseUpdate) {
        let Some(course) = self.course_mut(id) else {
            debug!(id, "update course: not found");
            return;
        };

        if let Some(title) = update.title {
            course.title = title;
        }
        if let Some(description) = update.description {
            course.description = description;
        }
        if let Some(category) = update.category {
            course.category = category;
        }
        if let Some(platform) = update.platform {
            course.platform = platform;
        }
        if let Some(instructor) = update.instructor {
            course.instructor = instructor;
        }
        if let Some(due_date) = update.due_date {
            course.due_date = due_date;
        }
        if let Some(url) = update.url {
            course.url = url;
        }
        if let Some(progress) = update.progress {
            course.progress = clamp_progress(progress);
        }

        debug!(id, "update course");
        self.persist_courses();
    }

    /// Set progress only; values outside [0, 100] are clamped
    pub fn update_course_progress(&mut self, id: &str, progress: i64) {
        let Some(course) = self.course_mut(id) else {
            debug!(id, "update progress: not found");
            return;
        };
        course.progress = clamp_progress(progress);

        debug!(id, progress = course.progress, "update progress");
        self.persist_courses();
    }

    /// Move the course, resources included, to the holding area
    pub fn delete_course(&mut self, id: &str) {
        let Some(pos) = self.courses.iter().position(|c| c.id == id) else {
            debug!(id, "delete course: not found");
            return;
        };
        let course = self.courses.remove(pos);
        self.trash.push(course);

        debug!(id, "delete course");
        self.persist_courses();
    }

    /// Move a held course back into the active list at its `created_at` position
    pub fn undo_delete_course(&mut self, id: &str) {
        let Some(pos) = self.trash.iter().position(|c| c.id == id) else {
            debug!(id, "undo delete: not in holding area");
            return;
        };
        let course = self.trash.remove(pos);
        let insert_at = self
            .courses
            .partition_point(|c| c.created_at <= course.created_at);
        self.courses.insert(insert_at, course);

        debug!(id, "undo delete course");
        self.persist_courses();
    }

    /// Permanently drop every held course; returns how many were dropped
    pub fn empty_trash(&mut self) -> usize {
        let count = self.trash.len();
        self.trash.clear();
        debug!(count, "empty trash");
        count
    }

    /// Attach a resource; returns its id, or `None` if the course is unknown
    pub fn add_resource(&mut self, course_id: &str, data: NewResource) -> Option<String> {
        if self.course(course_id).is_none() {
            debug!(course_id, "add resource: course not found");
            return None;
        }

        let id = self.ids.next_id();
        let created_at = data.created_at.unwrap_or_else(|| self.clock.now_millis());
        let resource = Resource {
            id: id.clone(),
            title: data.title,
            url: data.url,
            kind: data.kind,
            created_at,
        };

        let course = self.course_mut(course_id)?;
        course.resources.push(resource);
        course.sort_resources();

        debug!(course_id, id = %id, "add resource");
        self.persist_courses();
        Some(id)
    }

    /// Detach a resource and hand it back; no-op if either id is unknown
    pub fn remove_resource(&mut self, course_id: &str, resource_id: &str) -> Option<Resource> {
        let course = self.course_mut(course_id)?;
        let pos = course.resources.iter().position(|r| r.id == resource_id)?;
        let resource = course.resources.remove(pos);

        debug!(course_id, resource_id, "remove resource");
        self.persist_courses();
        Some(resource)
    }

    pub fn study_sessions(&self) -> &[StudySession] {
        &self.sessions
    }

    /// Sessions falling on `date` (calendar-day equality)
    pub fn sessions_on(&self, date: NaiveDate) -> Vec<&StudySession> {
        self.sessions.iter().filter(|s| s.falls_on(date)).collect()
    }

    /// Plan a session; returns its id
    ///
    /// The course reference is not checked: sessions may outlive their course.
    pub fn add_study_session(&mut self, data: NewStudySession) -> String {
        let id = self.ids.next_id();
        let session = StudySession {
            id: id.clone(),
            course_id: data.course_id,
            date: data.date,
            duration: data.duration,
            notes: data.notes,
            created_at: self.clock.now_millis(),
        };

        debug!(id = %id, date = %session.date, "add study session");
        self.sessions.push(session);
        self.persist_sessions();
        id
    }

    pub fn remove_study_session(&mut self, id: &str) -> Option<StudySession> {
        let pos = self.sessions.iter().position(|s| s.id == id)?;
        let session = self.sessions.remove(pos);

        debug!(id, "remove study session");
        self.persist_sessions();
        Some(session)
    }

    /// Title of the session's course, `None` for a dangling reference
    pub fn course_title_for(&self, session: &StudySession) -> Option<&str> {
        self.course(&session.course_id).map(|c| c.title.as_str())
    }

    fn persist_courses(&mut self) {
        write_slot(&mut *self.storage, COURSES_KEY, &self.courses);
    }

    fn persist_sessions(&mut self) {
        write_slot(&mut *self.storage, SESSIONS_KEY, &self.sessions);
    }
}

fn load_slot<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Vec<T> {
    let content = match storage.get(key) {
        Ok(Some(content)) => content,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "failed to read slot, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(items) => items,
        Err(e) => {
            warn!(key, error = %e, "malformed slot, starting empty");
            Vec::new()
        }
    }
}

fn write_slot<T: Serialize>(storage: &mut dyn KeyValueStore, key: &str, items: &[T]) {
    let content = match serde_json::to_string(items) {
        Ok(content) => content,
        Err(e) => {
            warn!(key, error = %e, "failed to serialize slot");
            return;
        }
    };

    if let Err(e) = storage.set(key, &content) {
        warn!(key, error = %e, "failed to write slot");
    }
}
