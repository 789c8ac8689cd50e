//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use course_tracker::clock::{SequentialIds, TickingClock};
use course_tracker::schedule::WeekStart;
use course_tracker::{CourseStore, Dashboard, MemoryStorage, NewCourse};

/// Fixed "today" used by every test store
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

/// Store over `storage` with sequential ids and a ticking clock
pub fn test_store(storage: MemoryStorage) -> CourseStore {
    CourseStore::with_collaborators(
        Box::new(storage),
        Box::new(SequentialIds::new()),
        Box::new(TickingClock::new(1_700_000_000_000, today())),
    )
}

/// Dashboard over a fresh in-memory store
pub fn test_dashboard() -> (Dashboard, MemoryStorage) {
    let storage = MemoryStorage::new();
    let dashboard = Dashboard::new(test_store(storage.clone()), WeekStart::sunday);
    (dashboard, storage)
}

/// Create a course input with minimal fields
pub fn new_course(title: &str) -> NewCourse {
    NewCourse {
        title: title.to_string(),
        description: format!("About {}", title),
        category: "Programming".to_string(),
        platform: "Udemy".to_string(),
        instructor: "Jane Doe".to_string(),
        due_date: String::new(),
        url: String::new(),
    }
}

/// Extract the id from a "... created with ID: <id> (...)" reply
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    // Fallback: last whitespace-separated token
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .to_string()
}
