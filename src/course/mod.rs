//! Course domain models and the course store
//!
//! - `model`: `Course`, `Resource` and their input/update types
//! - `store`: `CourseStore`, the write-through collection with soft delete

mod model;
mod store;

pub use model::{Course, CourseUpdate, NewCourse, NewResource, Resource, ResourceType};
pub use store::{COURSES_KEY, CourseStore, SESSIONS_KEY};
