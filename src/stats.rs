//! Progress summary across all active courses

use crate::course::Course;

/// Aggregate figures shown on the progress overview
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub total: usize,
    /// Courses at 100%
    pub completed: usize,
    /// Courses between 1% and 99%
    pub in_progress: usize,
    /// Courses at 0%
    pub not_started: usize,
    /// Mean progress rounded to the nearest integer, 0 with no courses
    pub average_progress: u8,
    /// Course count per category, in order of first appearance
    pub categories: Vec<(String, usize)>,
}

impl ProgressSummary {
    pub fn from_courses(courses: &[Course]) -> Self {
        if courses.is_empty() {
            return Self::default();
        }

        let total_progress: u64 = courses.iter().map(|c| u64::from(c.progress)).sum();
        let average = (total_progress as f64 / courses.len() as f64).round() as u8;

        let mut categories: Vec<(String, usize)> = Vec::new();
        for course in courses {
            match categories.iter_mut().find(|(name, _)| *name == course.category) {
                Some((_, count)) => *count += 1,
                None => categories.push((course.category.clone(), 1)),
            }
        }

        Self {
            total: courses.len(),
            completed: courses.iter().filter(|c| c.is_completed()).count(),
            in_progress: courses
                .iter()
                .filter(|c| c.is_started() && !c.is_completed())
                .count(),
            not_started: courses.iter().filter(|c| !c.is_started()).count(),
            average_progress: average,
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(category: &str, progress: u8) -> Course {
        Course {
            id: format!("{}-{}", category, progress),
            title: "T".to_string(),
            description: String::new(),
            category: category.to_string(),
            platform: String::new(),
            instructor: String::new(),
            due_date: String::new(),
            url: String::new(),
            progress,
            resources: Vec::new(),
            created_at: 0,
        }
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(ProgressSummary::from_courses(&[]), ProgressSummary::default());
    }

    #[test]
    fn test_summary_buckets_and_categories() {
        let courses = vec![
            course("Web", 100),
            course("Data", 50),
            course("Web", 0),
            course("Web", 25),
        ];
        let summary = ProgressSummary::from_courses(&courses);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.in_progress, 2);
        assert_eq!(summary.not_started, 1);
        // (100 + 50 + 0 + 25) / 4 = 43.75
        assert_eq!(summary.average_progress, 44);
        assert_eq!(
            summary.categories,
            vec![("Web".to_string(), 3), ("Data".to_string(), 1)]
        );
    }
}
