use std::cell::RefCell;
use std::rc::Rc;

use super::{ClassroomLookup, TeacherLookup};
use crate::domain::model::{Classroom, Record, Teacher};

/// Read-only handle onto a registry's live collection.
///
/// Always reflects the latest committed state. Cheap to clone.
pub struct Directory<R> {
    records: Rc<RefCell<Vec<R>>>,
}

pub type TeacherDirectory = Directory<Teacher>;
pub type ClassroomDirectory = Directory<Classroom>;

impl<R> Clone for Directory<R> {
    fn clone(&self) -> Self {
        Self {
            records: Rc::clone(&self.records),
        }
    }
}

impl<R: Record> Directory<R> {
    pub(crate) fn new(records: Rc<RefCell<Vec<R>>>) -> Self {
        Self { records }
    }

    pub fn list(&self) -> Vec<R> {
        self.records.borrow().clone()
    }

    pub fn get(&self, id: u32) -> Option<R> {
        self.records.borrow().iter().find(|r| r.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Runs `f` over the records without cloning them.
    pub fn with<T>(&self, f: impl FnOnce(&[R]) -> T) -> T {
        f(&self.records.borrow())
    }
}

impl TeacherLookup for TeacherDirectory {
    fn teacher_exists(&self, id: u32) -> bool {
        self.with(|teachers| teachers.iter().any(|t| t.id == id))
    }

    fn teacher_name(&self, id: u32) -> Option<String> {
        self.with(|teachers| {
            teachers
                .iter()
                .find(|t| t.id == id)
                .map(|t| t.full_name.clone())
        })
    }
}

impl ClassroomLookup for ClassroomDirectory {
    fn classroom_names_for_teacher(&self, teacher_id: u32) -> Vec<String> {
        self.with(|classrooms| {
            classrooms
                .iter()
                .filter(|c| c.teacher_id == teacher_id)
                .map(|c| c.class_name.clone())
                .collect()
        })
    }
}
