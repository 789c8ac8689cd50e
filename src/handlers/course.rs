//! Course handlers: create, edit, progress, soft delete and undo

use crate::formatting::{format_course_detail, format_courses};
use crate::validation::{self, normalize_id, require};
use crate::{CourseUpdate, Dashboard, NewCourse};
use anyhow::{Result, bail};

/// Raw course fields as typed by the user
#[derive(Debug, Clone, Default)]
pub struct CourseForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub platform: String,
    pub instructor: String,
    /// YYYY-MM-DD or empty
    pub due_date: String,
    /// http(s) URL or empty
    pub url: String,
}

/// Raw edit; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct CourseEditForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub platform: Option<String>,
    pub instructor: Option<String>,
    /// Empty string clears the due date
    pub due_date: Option<String>,
    /// Empty string clears the URL
    pub url: Option<String>,
}

fn parse_due_date(due_date: &str) -> Result<String> {
    if due_date.trim().is_empty() {
        return Ok(String::new());
    }
    Ok(validation::parse_date(due_date)?.format("%Y-%m-%d").to_string())
}

impl Dashboard {
    /// Add a course; every text field except due date and URL is required
    pub fn add_course(&mut self, form: CourseForm) -> Result<String> {
        let course = NewCourse {
            title: require("Title", &form.title)?,
            description: require("Description", &form.description)?,
            category: require("Category", &form.category)?,
            platform: require("Platform", &form.platform)?,
            instructor: require("Instructor", &form.instructor)?,
            due_date: parse_due_date(&form.due_date)?,
            url: validation::validate_optional_url(&form.url)?,
        };
        let title = course.title.clone();
        let id = self.store.add_course(course);

        Ok(format!("Course created with ID: {} ({})", id, title))
    }

    pub fn list_courses(&self) -> String {
        format_courses(self.store.courses())
    }

    pub fn show_course(&self, id: &str) -> Result<String> {
        let course = self.require_course(&normalize_id(id))?;
        Ok(format_course_detail(course))
    }

    /// Edit course details; blank required fields are rejected
    pub fn update_course(&mut self, id: &str, form: CourseEditForm) -> Result<String> {
        let id = normalize_id(id);
        self.require_course(&id)?;

        let required = |field: &str, value: Option<String>| -> Result<Option<String>> {
            value.map(|v| require(field, &v)).transpose()
        };
        let update = CourseUpdate {
            title: required("Title", form.title)?,
            description: required("Description", form.description)?,
            category: required("Category", form.category)?,
            platform: required("Platform", form.platform)?,
            instructor: required("Instructor", form.instructor)?,
            due_date: form.due_date.as_deref().map(parse_due_date).transpose()?,
            url: form
                .url
                .as_deref()
                .map(validation::validate_optional_url)
                .transpose()?,
            progress: None,
        };

        if update.is_empty() {
            bail!("Nothing to update for course '{}'", id);
        }

        self.store.update_course(&id, update);
        Ok(format!("Course {} updated successfully", id))
    }

    /// Set progress; values outside 0-100 are clamped
    pub fn set_progress(&mut self, id: &str, progress: i64) -> Result<String> {
        let id = normalize_id(id);
        self.require_course(&id)?;

        self.store.update_course_progress(&id, progress);
        let stored = self.require_course(&id)?.progress;
        Ok(format!("Course {} progress set to {}%", id, stored))
    }

    /// Soft-delete a course; it can be restored with `undo_delete_course`
    pub fn delete_course(&mut self, id: &str) -> Result<String> {
        let id = normalize_id(id);
        let title = self.require_course(&id)?.title.clone();

        self.store.delete_course(&id);
        Ok(format!("Course \"{}\" has been deleted", title))
    }

    pub fn undo_delete_course(&mut self, id: &str) -> Result<String> {
        let id = normalize_id(id);
        if !self.store.is_deleted(&id) {
            bail!("Course '{}' is not in the trash", id);
        }

        self.store.undo_delete_course(&id);
        Ok(format!("Course {} restored", id))
    }

    pub fn list_trash(&self) -> String {
        let trash = self.store.deleted_courses();
        if trash.is_empty() {
            return "Trash is empty".to_string();
        }
        format_courses(trash)
    }

    pub fn empty_trash(&mut self) -> String {
        let count = self.store.empty_trash();
        format!("Deleted {} course(s) from trash", count)
    }
}
