// Offline checks over loaded collections.
//
// The registries never produce these violations themselves; they show up when
// store files were edited by hand or a teacher was removed outside the
// registry. Loading stays tolerant, the audit just reports.

use std::collections::HashMap;
use std::fmt;

use crate::domain::model::classroom::{MAX_GRADE, MAX_STUDENTS, MIN_GRADE, MIN_STUDENTS};
use crate::domain::model::teacher::{MAX_EXPERIENCE, MIN_EXPERIENCE};
use crate::domain::model::{normalize_name, Classroom, Record, Teacher};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    DuplicateId {
        collection: &'static str,
        id: u32,
    },
    DuplicateName {
        collection: &'static str,
        name: String,
        ids: Vec<u32>,
    },
    EmptyField {
        collection: &'static str,
        id: u32,
        field: &'static str,
    },
    OutOfRange {
        collection: &'static str,
        id: u32,
        field: &'static str,
        value: i32,
    },
    DanglingTeacher {
        classroom_id: u32,
        class_name: String,
        teacher_id: u32,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateId { collection, id } => {
                write!(f, "{collection}: id {id} is used more than once")
            }
            Violation::DuplicateName {
                collection,
                name,
                ids,
            } => write!(f, "{collection}: name '{name}' is shared by ids {ids:?}"),
            Violation::EmptyField {
                collection,
                id,
                field,
            } => write!(f, "{collection}: record {id} has an empty {field}"),
            Violation::OutOfRange {
                collection,
                id,
                field,
                value,
            } => write!(f, "{collection}: record {id} has {field} = {value}"),
            Violation::DanglingTeacher {
                classroom_id,
                class_name,
                teacher_id,
            } => write!(
                f,
                "classrooms: {class_name} (id {classroom_id}) references missing teacher {teacher_id}"
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub violations: Vec<Violation>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks both collections against the registry invariants.
pub fn audit(teachers: &[Teacher], classrooms: &[Classroom]) -> IntegrityReport {
    let mut violations = Vec::new();

    check_identity(teachers, &mut violations);
    for t in teachers {
        let collection = Teacher::COLLECTION;
        for (field, value) in [
            ("full name", &t.full_name),
            ("subject", &t.subject),
            ("category", &t.category),
        ] {
            if value.trim().is_empty() {
                violations.push(Violation::EmptyField {
                    collection,
                    id: t.id,
                    field,
                });
            }
        }
        if !(MIN_EXPERIENCE..=MAX_EXPERIENCE).contains(&t.experience) {
            violations.push(Violation::OutOfRange {
                collection,
                id: t.id,
                field: "experience",
                value: t.experience,
            });
        }
    }

    check_identity(classrooms, &mut violations);
    for c in classrooms {
        let collection = Classroom::COLLECTION;
        if c.class_name.trim().is_empty() {
            violations.push(Violation::EmptyField {
                collection,
                id: c.id,
                field: "class name",
            });
        }
        if !(MIN_STUDENTS..=MAX_STUDENTS).contains(&c.student_count) {
            violations.push(Violation::OutOfRange {
                collection,
                id: c.id,
                field: "student count",
                value: c.student_count,
            });
        }
        if !(MIN_GRADE..=MAX_GRADE).contains(&c.grade_level) {
            violations.push(Violation::OutOfRange {
                collection,
                id: c.id,
                field: "grade level",
                value: c.grade_level,
            });
        }
        if !teachers.iter().any(|t| t.id == c.teacher_id) {
            violations.push(Violation::DanglingTeacher {
                classroom_id: c.id,
                class_name: c.class_name.clone(),
                teacher_id: c.teacher_id,
            });
        }
    }

    IntegrityReport { violations }
}

/// Duplicate ids, zero ids and duplicate normalized names.
fn check_identity<R: Record>(records: &[R], violations: &mut Vec<Violation>) {
    let mut ids: HashMap<u32, usize> = HashMap::new();
    let mut names: Vec<(String, Vec<u32>)> = Vec::new();

    for record in records {
        let seen = ids.entry(record.id()).or_insert(0);
        *seen += 1;
        if *seen == 2 {
            violations.push(Violation::DuplicateId {
                collection: R::COLLECTION,
                id: record.id(),
            });
        }
        if record.id() == 0 {
            violations.push(Violation::OutOfRange {
                collection: R::COLLECTION,
                id: 0,
                field: "id",
                value: 0,
            });
        }

        let key = normalize_name(record.unique_name());
        match names.iter_mut().find(|(k, _)| *k == key) {
            Some((_, owners)) => owners.push(record.id()),
            None => names.push((key, vec![record.id()])),
        }
    }

    for (name, owners) in names {
        if owners.len() > 1 && !name.is_empty() {
            violations.push(Violation::DuplicateName {
                collection: R::COLLECTION,
                name,
                ids: owners,
            });
        }
    }
}
