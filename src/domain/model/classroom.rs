use serde::{Deserialize, Serialize};

use super::{require_range, require_text, Record};
use crate::domain::error::ValidationError;

pub const MIN_STUDENTS: i32 = 1;
pub const MAX_STUDENTS: i32 = 40;
pub const MIN_GRADE: i32 = 1;
pub const MAX_GRADE: i32 = 11;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    pub id: u32,
    pub class_name: String,
    /// Class teacher, an id from the teacher registry.
    pub teacher_id: u32,
    pub student_count: i32,
    pub grade_level: i32,
}

impl Record for Classroom {
    const COLLECTION: &'static str = "classrooms";
    const ENTITY: &'static str = "classroom";

    fn id(&self) -> u32 {
        self.id
    }

    fn unique_name(&self) -> &str {
        &self.class_name
    }
}

impl Classroom {
    pub(crate) fn from_draft(id: u32, draft: ClassroomDraft) -> Self {
        Self {
            id,
            class_name: draft.class_name,
            teacher_id: draft.teacher_id,
            student_count: draft.student_count,
            grade_level: draft.grade_level,
        }
    }

    pub(crate) fn apply(&mut self, draft: ClassroomDraft) {
        self.class_name = draft.class_name;
        self.teacher_id = draft.teacher_id;
        self.student_count = draft.student_count;
        self.grade_level = draft.grade_level;
    }
}

/// Candidate values for adding or updating a classroom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassroomDraft {
    pub class_name: String,
    pub teacher_id: u32,
    pub student_count: i32,
    pub grade_level: i32,
}

impl ClassroomDraft {
    pub fn new(
        class_name: impl Into<String>,
        teacher_id: u32,
        student_count: i32,
        grade_level: i32,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            teacher_id,
            student_count,
            grade_level,
        }
    }

    /// Checks the self-contained fields. Teacher existence and name uniqueness
    /// need registry state and are checked by the registry.
    pub fn validated(&self) -> Result<Self, ValidationError> {
        Ok(Self {
            class_name: require_text("class name", &self.class_name)?,
            teacher_id: self.teacher_id,
            student_count: require_range(
                "student count",
                self.student_count,
                MIN_STUDENTS,
                MAX_STUDENTS,
            )?,
            grade_level: require_range("grade level", self.grade_level, MIN_GRADE, MAX_GRADE)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_bounds_are_inclusive() {
        assert!(ClassroomDraft::new("1A", 1, 20, 1).validated().is_ok());
        assert!(ClassroomDraft::new("11A", 1, 20, 11).validated().is_ok());
        assert!(ClassroomDraft::new("0A", 1, 20, 0).validated().is_err());
        assert!(ClassroomDraft::new("12A", 1, 20, 12).validated().is_err());
    }

    #[test]
    fn student_count_out_of_range_names_the_field() {
        let err = ClassroomDraft::new("5A", 1, 41, 5).validated().unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "student count",
                min: 1,
                max: 40,
                value: 41
            }
        );
    }

    #[test]
    fn serializes_with_stable_field_names() {
        let classroom = Classroom::from_draft(4, ClassroomDraft::new("5Б", 2, 25, 5));
        let value = serde_json::to_value(&classroom).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["class_name", "grade_level", "id", "student_count", "teacher_id"]
        );
    }
}
