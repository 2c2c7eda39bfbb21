use tracing::info;

use super::collection::Collection;
use super::{ChangeCallback, ClassroomLookup, TeacherDirectory};
use crate::domain::error::{RegistryError, Result, ValidationError};
use crate::domain::model::{name_taken, next_id, Teacher, TeacherDraft};
use crate::storage::Gateway;

/// Authoritative set of teachers.
pub struct TeacherRegistry {
    teachers: Collection<Teacher>,
    classrooms: Option<Box<dyn ClassroomLookup>>,
}

impl TeacherRegistry {
    /// Loads the `teachers` collection. The classroom lookup must be bound
    /// with [`bind_classrooms`](Self::bind_classrooms) before deleting.
    pub fn new(gateway: Gateway) -> Self {
        Self {
            teachers: Collection::load(gateway),
            classrooms: None,
        }
    }

    pub fn bind_classrooms(&mut self, lookup: impl ClassroomLookup + 'static) {
        self.classrooms = Some(Box::new(lookup));
    }

    pub fn set_on_changed(&mut self, callback: impl FnMut() + 'static) {
        let callback: ChangeCallback = Box::new(callback);
        self.teachers.set_on_changed(callback);
    }

    pub fn directory(&self) -> TeacherDirectory {
        self.teachers.directory()
    }

    pub fn list(&self) -> Vec<Teacher> {
        self.teachers.snapshot()
    }

    pub fn len(&self) -> usize {
        self.teachers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get_by_id(&self, id: u32) -> Result<Teacher> {
        self.teachers.get(id)
    }

    /// Validates `draft`, assigns the next id and appends the teacher.
    pub fn add(&mut self, draft: TeacherDraft) -> Result<Teacher> {
        let draft = draft.validated()?;
        let mut next = self.teachers.snapshot();
        if name_taken(&next, &draft.full_name, None) {
            return Err(duplicate(draft.full_name));
        }

        let teacher = Teacher::from_draft(next_id(&next)?, draft);
        next.push(teacher.clone());
        self.teachers.commit(next)?;

        info!(id = teacher.id, name = %teacher.full_name, "teacher added");
        Ok(teacher)
    }

    /// Replaces every field of teacher `id` with the validated `draft`.
    pub fn update(&mut self, id: u32, draft: TeacherDraft) -> Result<Teacher> {
        let draft = draft.validated()?;
        let mut next = self.teachers.snapshot();
        if name_taken(&next, &draft.full_name, Some(id)) {
            return Err(duplicate(draft.full_name));
        }

        let teacher = next
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(RegistryError::NotFound {
                entity: "teacher",
                id,
            })?;
        teacher.apply(draft);
        let updated = teacher.clone();
        self.teachers.commit(next)?;

        info!(id, "teacher updated");
        Ok(updated)
    }

    /// Removes teacher `id` unless a classroom still names it as class teacher.
    ///
    /// Deleting an absent id succeeds and still persists and notifies.
    pub fn delete(&mut self, id: u32) -> Result<()> {
        let lookup = self
            .classrooms
            .as_ref()
            .ok_or(RegistryError::Unwired {
                capability: "classroom",
            })?;
        let dependents = lookup.classroom_names_for_teacher(id);
        if !dependents.is_empty() {
            return Err(RegistryError::Dependency {
                teacher_id: id,
                classrooms: dependents,
            });
        }

        let mut next = self.teachers.snapshot();
        next.retain(|t| t.id != id);
        self.teachers.commit(next)?;

        info!(id, "teacher deleted");
        Ok(())
    }
}

fn duplicate(name: String) -> RegistryError {
    ValidationError::DuplicateName {
        entity: "teacher",
        name,
    }
    .into()
}
