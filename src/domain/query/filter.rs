use serde::Serialize;

use crate::domain::model::{Classroom, Teacher};
use crate::domain::registry::TeacherLookup;

/// Shown in place of a teacher name that no longer resolves.
pub const UNKNOWN_TEACHER: &str = "Неизвестно";

/// Teacher table filter. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct TeacherFilter {
    /// Case-insensitive substring of full name or subject.
    pub search: Option<String>,
    /// Exact subject.
    pub subject: Option<String>,
}

impl TeacherFilter {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn matches(&self, teacher: &Teacher) -> bool {
        if let Some(term) = search_term(&self.search) {
            if !contains_ci(&teacher.full_name, &term) && !contains_ci(&teacher.subject, &term) {
                return false;
            }
        }
        match &self.subject {
            Some(subject) => teacher.subject == *subject,
            None => true,
        }
    }

    pub fn apply(&self, teachers: &[Teacher]) -> Vec<Teacher> {
        teachers.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

/// Classroom table filter. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct ClassroomFilter {
    /// Case-insensitive substring of class name or class teacher name.
    pub search: Option<String>,
    pub grade_level: Option<i32>,
    pub teacher_id: Option<u32>,
}

impl ClassroomFilter {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn grade_level(mut self, grade_level: i32) -> Self {
        self.grade_level = Some(grade_level);
        self
    }

    pub fn teacher(mut self, teacher_id: u32) -> Self {
        self.teacher_id = Some(teacher_id);
        self
    }

    fn matches(&self, row: &ClassroomRow) -> bool {
        if let Some(term) = search_term(&self.search) {
            if !contains_ci(&row.classroom.class_name, &term)
                && !contains_ci(&row.teacher_name, &term)
            {
                return false;
            }
        }
        if self.grade_level.is_some_and(|g| g != row.classroom.grade_level) {
            return false;
        }
        if self.teacher_id.is_some_and(|id| id != row.classroom.teacher_id) {
            return false;
        }
        true
    }
}

/// A classroom joined with its class teacher's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassroomRow {
    #[serde(flatten)]
    pub classroom: Classroom,
    pub teacher_name: String,
}

/// Resolves teacher names and applies `filter`, keeping registry order.
pub fn classroom_rows(
    classrooms: &[Classroom],
    teachers: &dyn TeacherLookup,
    filter: &ClassroomFilter,
) -> Vec<ClassroomRow> {
    classrooms
        .iter()
        .map(|c| ClassroomRow {
            teacher_name: teachers
                .teacher_name(c.teacher_id)
                .unwrap_or_else(|| UNKNOWN_TEACHER.to_string()),
            classroom: c.clone(),
        })
        .filter(|row| filter.matches(row))
        .collect()
}

/// Distinct subjects in first-seen order, for filter choices.
pub fn subjects(teachers: &[Teacher]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for teacher in teachers {
        if !seen.contains(&teacher.subject) {
            seen.push(teacher.subject.clone());
        }
    }
    seen
}

fn search_term(search: &Option<String>) -> Option<String> {
    search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
