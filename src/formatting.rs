//! Plain-text rendering of courses, sessions, the calendar and the summary

use crate::course::Course;
use crate::schedule::{CalendarGrid, StudySession};
use crate::stats::ProgressSummary;

/// Format a course list into a display string
pub fn format_courses(courses: &[Course]) -> String {
    if courses.is_empty() {
        return "No courses yet".to_string();
    }

    let mut result = format!("Found {} course(s):\n\n", courses.len());
    for course in courses {
        result.push_str(&format!(
            "- [{}] {} ({}%)\n",
            course.id, course.title, course.progress
        ));
        result.push_str(&format!(
            "  {} | {} | {}\n",
            course.category, course.platform, course.instructor
        ));
        if !course.due_date.is_empty() {
            result.push_str(&format!("  Due: {}\n", course.due_date));
        }
        if !course.resources.is_empty() {
            result.push_str(&format!("  Resources: {}\n", course.resources.len()));
        }
    }

    result
}

/// Format one course with its description and resources
pub fn format_course_detail(course: &Course) -> String {
    let mut result = format!("[{}] {}\n", course.id, course.title);
    result.push_str(&format!("  Progress: {}%\n", course.progress));
    result.push_str(&format!("  Category: {}\n", course.category));
    result.push_str(&format!("  Platform: {}\n", course.platform));
    result.push_str(&format!("  Instructor: {}\n", course.instructor));
    if !course.due_date.is_empty() {
        result.push_str(&format!("  Due: {}\n", course.due_date));
    }
    if !course.url.is_empty() {
        result.push_str(&format!("  URL: {}\n", course.url));
    }
    if !course.description.is_empty() {
        result.push_str(&format!("  Description: {}\n", course.description));
    }

    if course.resources.is_empty() {
        result.push_str("  No resources added yet\n");
    } else {
        result.push_str("  Resources:\n");
        for resource in &course.resources {
            result.push_str(&format!(
                "  - [{}] {} ({}) {}\n",
                resource.id,
                resource.title,
                resource.kind,
                shorten_url(&resource.url)
            ));
        }
    }

    result
}

/// Shorten long URLs to 30 characters plus an ellipsis
fn shorten_url(url: &str) -> String {
    if url.chars().count() > 30 {
        let head: String = url.chars().take(30).collect();
        format!("{}...", head)
    } else {
        url.to_string()
    }
}

/// Format sessions, resolving each course title through `title_of`
pub fn format_sessions<'a>(
    sessions: &[&StudySession],
    title_of: impl Fn(&StudySession) -> Option<&'a str>,
) -> String {
    if sessions.is_empty() {
        return "No study sessions planned for this day".to_string();
    }

    let mut result = String::new();
    for session in sessions {
        let title = title_of(session).unwrap_or("(unknown course)");
        result.push_str(&format!(
            "- [{}] {} on {}: {} minutes\n",
            session.id, title, session.date, session.duration
        ));
        if !session.notes.is_empty() {
            result.push_str(&format!("  Notes: {}\n", session.notes));
        }
    }

    result
}

/// Render the month grid as a text table
///
/// Filler days from adjacent months are blank, today is wrapped in `[ ]`,
/// the selected day in `< >`, days with sessions get a `*`, and past days
/// are shown as `..`.
pub fn format_calendar(grid: &CalendarGrid) -> String {
    let mut result = format!("{}\n", grid.month.format("%B %Y"));

    if let Some(first_week) = grid.weeks().next() {
        let header: Vec<String> = first_week
            .iter()
            .map(|d| format!(" {:<4}", &d.date.format("%a").to_string()[..2]))
            .collect();
        result.push_str(header.concat().trim_end());
        result.push('\n');
    }

    for week in grid.weeks() {
        let mut line = String::new();
        for day in week {
            let label = if !day.in_month {
                String::new()
            } else if !day.is_selectable {
                "..".to_string()
            } else {
                day.date.format("%d").to_string()
            };
            let (open, close) = if day.is_selected {
                ('<', '>')
            } else if day.is_today {
                ('[', ']')
            } else {
                (' ', ' ')
            };
            let marker = if day.has_sessions && day.in_month { '*' } else { ' ' };
            if label.is_empty() {
                line.push_str("     ");
            } else {
                line.push_str(&format!("{}{:>2}{}{}", open, label, close, marker));
            }
        }
        result.push_str(line.trim_end());
        result.push('\n');
    }

    result
}

pub fn format_summary(summary: &ProgressSummary) -> String {
    if summary.total == 0 {
        return "Add courses to see your progress".to_string();
    }

    let mut result = format!(
        "Total courses: {}\nAverage progress: {}%\nCompleted: {}\nIn progress: {}\nNot started: {}\n",
        summary.total,
        summary.average_progress,
        summary.completed,
        summary.in_progress,
        summary.not_started
    );
    result.push_str("Categories:\n");
    for (name, count) in &summary.categories {
        result.push_str(&format!("  {}: {}\n", name, count));
    }

    result
}
