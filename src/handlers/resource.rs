//! Resource handlers

use crate::validation::{normalize_id, parse_resource_type, require, validate_url};
use crate::{Dashboard, NewResource};
use anyhow::{Result, bail};

impl Dashboard {
    /// Attach a resource (article, video, book, other) to a course
    pub fn add_resource(
        &mut self,
        course_id: &str,
        title: &str,
        url: &str,
        resource_type: &str,
    ) -> Result<String> {
        let course_id = normalize_id(course_id);
        self.require_course(&course_id)?;

        let resource = NewResource {
            title: require("Title", title)?,
            url: validate_url(url)?,
            kind: parse_resource_type(resource_type)?,
            created_at: None,
        };

        match self.store.add_resource(&course_id, resource) {
            Some(id) => Ok(format!("Resource added with ID: {} (course: {})", id, course_id)),
            None => bail!("Course '{}' not found", course_id),
        }
    }

    /// Remove a resource; the last removal can be undone
    pub fn remove_resource(&mut self, course_id: &str, resource_id: &str) -> Result<String> {
        let course_id = normalize_id(course_id);
        let resource_id = normalize_id(resource_id);
        self.require_course(&course_id)?;

        let Some(removed) = self.store.remove_resource(&course_id, &resource_id) else {
            bail!(
                "Resource '{}' not found in course '{}'",
                resource_id,
                course_id
            );
        };

        let reply = format!("Resource \"{}\" deleted", removed.title);
        self.last_removed_resource = Some((course_id, removed));
        Ok(reply)
    }

    /// Re-add the most recently removed resource with its original timestamp
    pub fn undo_remove_resource(&mut self) -> Result<String> {
        let Some((course_id, removed)) = self.last_removed_resource.take() else {
            bail!("No removed resource to restore");
        };
        if self.store.is_deleted(&course_id) {
            let message = format!(
                "Course '{}' is in the trash; restore it before the resource",
                course_id
            );
            // Keep the pending undo until the course is back
            self.last_removed_resource = Some((course_id, removed));
            bail!(message);
        }

        match self
            .store
            .add_resource(&course_id, NewResource::from(&removed))
        {
            Some(_) => Ok(format!("Resource \"{}\" restored", removed.title)),
            None => bail!("Course '{}' no longer exists", course_id),
        }
    }
}
