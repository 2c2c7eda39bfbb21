use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::model::teacher::HIGH_CATEGORY;
use crate::domain::model::{Classroom, Teacher};

/// Dashboard counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SchoolSummary {
    pub teachers: usize,
    pub classrooms: usize,
    pub students: i64,
    /// Teachers in the top qualification category.
    pub high_category: usize,
}

impl SchoolSummary {
    pub fn compute(teachers: &[Teacher], classrooms: &[Classroom]) -> Self {
        Self {
            teachers: teachers.len(),
            classrooms: classrooms.len(),
            students: total_students(classrooms),
            high_category: count_high_category(teachers),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherStats {
    pub total: usize,
    /// Mean years of experience; 0 when there are no teachers.
    pub average_experience: f64,
    /// Teacher count per subject, first-seen order.
    pub by_subject: Vec<(String, usize)>,
    /// Teacher count per category, first-seen order.
    pub by_category: Vec<(String, usize)>,
    pub high_category: usize,
}

impl TeacherStats {
    pub fn compute(teachers: &[Teacher]) -> Self {
        let total = teachers.len();
        let experience: i64 = teachers.iter().map(|t| i64::from(t.experience)).sum();
        Self {
            total,
            average_experience: mean(experience, total),
            by_subject: tally(teachers.iter().map(|t| t.subject.as_str())),
            by_category: tally(teachers.iter().map(|t| t.category.as_str())),
            high_category: count_high_category(teachers),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GradeStats {
    pub classrooms: usize,
    pub students: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassroomStats {
    pub total: usize,
    pub total_students: i64,
    /// Mean class size; 0 when there are no classrooms.
    pub average_students: f64,
    /// Keyed and ordered by grade level.
    pub by_grade: BTreeMap<i32, GradeStats>,
}

impl ClassroomStats {
    pub fn compute(classrooms: &[Classroom]) -> Self {
        let total_students = total_students(classrooms);
        let mut by_grade: BTreeMap<i32, GradeStats> = BTreeMap::new();
        for classroom in classrooms {
            let entry = by_grade.entry(classroom.grade_level).or_default();
            entry.classrooms += 1;
            entry.students += i64::from(classroom.student_count);
        }
        Self {
            total: classrooms.len(),
            total_students,
            average_students: mean(total_students, classrooms.len()),
            by_grade,
        }
    }
}

fn total_students(classrooms: &[Classroom]) -> i64 {
    classrooms.iter().map(|c| i64::from(c.student_count)).sum()
}

fn count_high_category(teachers: &[Teacher]) -> usize {
    teachers.iter().filter(|t| t.category == HIGH_CATEGORY).count()
}

fn mean(sum: i64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

fn tally<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(k, _)| k == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts
}
