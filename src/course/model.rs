use crate::validation::clamp_progress;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a resource attached to a course
///
/// Uses lowercase naming to match the persisted JSON format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    article,
    video,
    book,
    other,
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" => Ok(ResourceType::article),
            "video" => Ok(ResourceType::video),
            "book" => Ok(ResourceType::book),
            "other" => Ok(ResourceType::other),
            _ => Err(format!(
                "Invalid resource type '{}'. Valid options are: article, video, book, other",
                s
            )),
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceType::article => "article",
            ResourceType::video => "video",
            ResourceType::book => "book",
            ResourceType::other => "other",
        };
        f.write_str(name)
    }
}

/// A link-like item attached to a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    /// Milliseconds since the Unix epoch; 0 for records saved without a stamp
    #[serde(default)]
    pub created_at: i64,
}

/// A tracked learning item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub platform: String,
    pub instructor: String,
    /// Display string, empty when no due date is set
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub url: String,
    /// Completion percentage in [0, 100]
    #[serde(default, deserialize_with = "deserialize_progress")]
    pub progress: u8,
    /// Ordered by `created_at` ascending
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub created_at: i64,
}

/// Read any persisted number and clamp it into [0, 100]
fn deserialize_progress<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(clamp_progress(value.round() as i64))
}

impl Course {
    pub fn is_completed(&self) -> bool {
        self.progress >= 100
    }

    pub fn is_started(&self) -> bool {
        self.progress > 0
    }

    pub fn find_resource(&self, resource_id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == resource_id)
    }

    /// Re-establish `created_at` order of the resource list (stable)
    pub(crate) fn sort_resources(&mut self) {
        self.resources.sort_by_key(|r| r.created_at);
    }
}

/// Input for creating a course; the store assigns id, progress, resources and timestamp
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub category: String,
    pub platform: String,
    pub instructor: String,
    pub due_date: String,
    pub url: String,
}

/// Partial update of a course; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub platform: Option<String>,
    pub instructor: Option<String>,
    pub due_date: Option<String>,
    pub url: Option<String>,
    /// Clamped into [0, 100] when applied
    pub progress: Option<i64>,
}

impl CourseUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Input for attaching a resource to a course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResource {
    pub title: String,
    pub url: String,
    pub kind: ResourceType,
    /// Original stamp when restoring a removed resource; `None` means now
    pub created_at: Option<i64>,
}

impl From<&Resource> for NewResource {
    fn from(resource: &Resource) -> Self {
        Self {
            title: resource.title.clone(),
            url: resource.url.clone(),
            kind: resource.kind,
            created_at: Some(resource.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_progress_is_clamped_on_read() {
        let read = |progress: &str| -> u8 {
            let json = format!(
                r#"{{"id":"c1","title":"T","description":"","category":"","platform":"","instructor":"","progress":{}}}"#,
                progress
            );
            serde_json::from_str::<Course>(&json).unwrap().progress
        };

        assert_eq!(read("300"), 100);
        assert_eq!(read("-5"), 0);
        assert_eq!(read("42.6"), 43);
        assert_eq!(read("70"), 70);
    }

    #[test]
    fn test_resource_type_from_str() {
        assert_eq!("video".parse::<ResourceType>(), Ok(ResourceType::video));
        assert!("podcast".parse::<ResourceType>().is_err());
    }

    #[test]
    fn test_course_json_uses_camel_case() {
        let course = Course {
            id: "c1".to_string(),
            title: "Intro to React".to_string(),
            description: "Basics".to_string(),
            category: "Web".to_string(),
            platform: "Udemy".to_string(),
            instructor: "Jane".to_string(),
            due_date: "June 1st, 2024".to_string(),
            url: String::new(),
            progress: 40,
            resources: vec![Resource {
                id: "r1".to_string(),
                title: "Docs".to_string(),
                url: "https://react.dev".to_string(),
                kind: ResourceType::article,
                created_at: 5,
            }],
            created_at: 1,
        };

        let json = serde_json::to_string(&course).unwrap();
        assert!(json.contains("\"dueDate\""));
        assert!(json.contains("\"createdAt\":1"));
        assert!(json.contains("\"type\":\"article\""));

        let back: Course = serde_json::from_str(&json).unwrap();
        assert_eq!(back, course);
    }

    #[test]
    fn test_resource_without_created_at_defaults_to_zero() {
        let json = r#"{"id":"r1","title":"Docs","url":"https://x.dev","type":"book"}"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.created_at, 0);
        assert_eq!(resource.kind, ResourceType::book);
    }
}
