use tracing::info;

use super::collection::Collection;
use super::{ChangeCallback, ClassroomDirectory, TeacherLookup};
use crate::domain::error::{RegistryError, Result, ValidationError};
use crate::domain::model::{name_taken, next_id, Classroom, ClassroomDraft};
use crate::storage::Gateway;

/// Authoritative set of classrooms.
pub struct ClassroomRegistry {
    classrooms: Collection<Classroom>,
    teachers: Option<Box<dyn TeacherLookup>>,
}

impl ClassroomRegistry {
    /// Loads the `classrooms` collection. The teacher lookup must be bound
    /// with [`bind_teachers`](Self::bind_teachers) before adding or updating.
    pub fn new(gateway: Gateway) -> Self {
        Self {
            classrooms: Collection::load(gateway),
            teachers: None,
        }
    }

    pub fn bind_teachers(&mut self, lookup: impl TeacherLookup + 'static) {
        self.teachers = Some(Box::new(lookup));
    }

    pub fn set_on_changed(&mut self, callback: impl FnMut() + 'static) {
        let callback: ChangeCallback = Box::new(callback);
        self.classrooms.set_on_changed(callback);
    }

    pub fn directory(&self) -> ClassroomDirectory {
        self.classrooms.directory()
    }

    pub fn list(&self) -> Vec<Classroom> {
        self.classrooms.snapshot()
    }

    pub fn len(&self) -> usize {
        self.classrooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get_by_id(&self, id: u32) -> Result<Classroom> {
        self.classrooms.get(id)
    }

    pub fn add(&mut self, draft: ClassroomDraft) -> Result<Classroom> {
        let draft = self.validate(draft, None)?;
        let mut next = self.classrooms.snapshot();

        let classroom = Classroom::from_draft(next_id(&next)?, draft);
        next.push(classroom.clone());
        self.classrooms.commit(next)?;

        info!(id = classroom.id, name = %classroom.class_name, "classroom added");
        Ok(classroom)
    }

    pub fn update(&mut self, id: u32, draft: ClassroomDraft) -> Result<Classroom> {
        let draft = self.validate(draft, Some(id))?;
        let mut next = self.classrooms.snapshot();

        let classroom = next
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RegistryError::NotFound {
                entity: "classroom",
                id,
            })?;
        classroom.apply(draft);
        let updated = classroom.clone();
        self.classrooms.commit(next)?;

        info!(id, "classroom updated");
        Ok(updated)
    }

    /// Removes classroom `id`. Nothing depends on classrooms, so this only
    /// fails when the store cannot be written. Absent ids are a no-op.
    pub fn delete(&mut self, id: u32) -> Result<()> {
        let mut next = self.classrooms.snapshot();
        next.retain(|c| c.id != id);
        self.classrooms.commit(next)?;

        info!(id, "classroom deleted");
        Ok(())
    }

    /// Field checks, then teacher existence, then name uniqueness.
    fn validate(&self, draft: ClassroomDraft, except: Option<u32>) -> Result<ClassroomDraft> {
        let draft = draft.validated()?;

        let teachers = self.teachers.as_ref().ok_or(RegistryError::Unwired {
            capability: "teacher",
        })?;
        if !teachers.teacher_exists(draft.teacher_id) {
            return Err(ValidationError::UnknownTeacher {
                teacher_id: draft.teacher_id,
            }
            .into());
        }

        let taken = self
            .classrooms
            .with(|records| name_taken(records, &draft.class_name, except));
        if taken {
            return Err(ValidationError::DuplicateName {
                entity: "classroom",
                name: draft.class_name,
            }
            .into());
        }
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Teachers 1..=n exist.
    struct Teachers(u32);

    impl TeacherLookup for Teachers {
        fn teacher_exists(&self, id: u32) -> bool {
            (1..=self.0).contains(&id)
        }

        fn teacher_name(&self, id: u32) -> Option<String> {
            self.teacher_exists(id).then(|| format!("Teacher {id}"))
        }
    }

    fn registry() -> (Rc<MemoryBackend>, ClassroomRegistry) {
        let backend = Rc::new(MemoryBackend::new());
        let mut registry = ClassroomRegistry::new(Gateway::new(backend.clone()));
        registry.bind_teachers(Teachers(3));
        (backend, registry)
    }

    #[test]
    fn student_count_bounds_are_inclusive() {
        let (_, mut registry) = registry();
        let at = |n: i32| ClassroomDraft::new(format!("S{n}"), 1, n, 5);

        assert!(registry.add(at(0)).unwrap_err().is_validation());
        assert!(registry.add(at(41)).unwrap_err().is_validation());
        assert!(registry.add(at(1)).is_ok());
        assert!(registry.add(at(40)).is_ok());
    }

    #[test]
    fn grade_level_bounds_are_inclusive() {
        let (_, mut registry) = registry();
        let at = |g: i32| ClassroomDraft::new(format!("G{g}"), 1, 20, g);

        assert!(registry.add(at(0)).unwrap_err().is_validation());
        assert!(registry.add(at(12)).unwrap_err().is_validation());
        assert!(registry.add(at(1)).is_ok());
        assert!(registry.add(at(11)).is_ok());
    }

    #[test]
    fn unknown_teacher_is_a_validation_error() {
        let (_, mut registry) = registry();
        let err = registry.add(ClassroomDraft::new("5А", 4, 20, 5)).unwrap_err();

        assert!(matches!(
            err,
            RegistryError::Validation(ValidationError::UnknownTeacher { teacher_id: 4 })
        ));
        assert!(registry.is_empty());
        assert!(registry.add(ClassroomDraft::new("5А", 3, 20, 5)).is_ok());
    }

    #[test]
    fn class_names_are_unique_ignoring_case() {
        let (_, mut registry) = registry();
        registry.add(ClassroomDraft::new("5а", 1, 20, 5)).unwrap();

        assert!(registry
            .add(ClassroomDraft::new(" 5А ", 2, 25, 5))
            .unwrap_err()
            .is_validation());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn update_changes_fields_in_place() {
        let (_, mut registry) = registry();
        registry.add(ClassroomDraft::new("5А", 1, 20, 5)).unwrap();
        let b = registry.add(ClassroomDraft::new("6Б", 1, 22, 6)).unwrap();

        let updated = registry
            .update(b.id, ClassroomDraft::new("6б", 2, 24, 6))
            .unwrap();

        assert_eq!(updated.teacher_id, 2);
        assert_eq!(updated.class_name, "6б");
        let ids: Vec<u32> = registry.list().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn update_of_missing_classroom_is_not_found() {
        let (_, mut registry) = registry();
        let err = registry
            .update(7, ClassroomDraft::new("5А", 1, 20, 5))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn update_cannot_take_another_classrooms_name() {
        let (_, mut registry) = registry();
        registry.add(ClassroomDraft::new("5А", 1, 20, 5)).unwrap();
        let b = registry.add(ClassroomDraft::new("6Б", 1, 22, 6)).unwrap();

        assert!(registry
            .update(b.id, ClassroomDraft::new("5а", 1, 22, 6))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn unbound_teacher_lookup_is_refused() {
        let backend = Rc::new(MemoryBackend::new());
        let mut registry = ClassroomRegistry::new(Gateway::new(backend));

        assert!(matches!(
            registry.add(ClassroomDraft::new("5А", 1, 20, 5)),
            Err(RegistryError::Unwired { capability: "teacher" })
        ));
    }

    #[test]
    fn notifies_once_per_success_and_never_on_failure() {
        let (_, mut registry) = registry();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        registry.set_on_changed(move || counter.set(counter.get() + 1));

        registry.add(ClassroomDraft::new("5А", 9, 20, 5)).unwrap_err();
        registry.add(ClassroomDraft::new("5А", 1, 41, 5)).unwrap_err();
        assert_eq!(fired.get(), 0);

        registry.add(ClassroomDraft::new("5А", 1, 20, 5)).unwrap();
        registry.add(ClassroomDraft::new("5а", 2, 20, 5)).unwrap_err();
        registry.update(9, ClassroomDraft::new("6Б", 1, 20, 6)).unwrap_err();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn add_after_maximum_stored_id_is_refused() {
        let backend = Rc::new(MemoryBackend::new());
        backend.insert_raw(
            "classrooms",
            r#"[{"id":4294967295,"class_name":"5А","teacher_id":1,"student_count":20,"grade_level":5}]"#,
        );
        let mut registry = ClassroomRegistry::new(Gateway::new(backend));
        registry.bind_teachers(Teachers(3));

        assert!(matches!(
            registry.add(ClassroomDraft::new("6Б", 1, 20, 6)),
            Err(RegistryError::IdsExhausted { entity: "classroom" })
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn delete_is_idempotent_and_notifies() {
        let (_, mut registry) = registry();
        registry.add(ClassroomDraft::new("5А", 1, 20, 5)).unwrap();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        registry.set_on_changed(move || counter.set(counter.get() + 1));

        registry.delete(1).unwrap();
        registry.delete(1).unwrap();

        assert!(registry.is_empty());
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn store_failure_keeps_the_previous_collection() {
        let (backend, mut registry) = registry();
        registry.add(ClassroomDraft::new("5А", 1, 20, 5)).unwrap();
        backend.fail_writes(true);

        assert!(matches!(
            registry.delete(1),
            Err(RegistryError::Store(_))
        ));
        assert_eq!(registry.len(), 1);
    }
}
