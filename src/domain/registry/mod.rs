//! Teacher and classroom registries.
//!
//! Each registry owns one collection and persists it through the shared
//! [`Gateway`](crate::storage::Gateway). The two registries need to read each
//! other (classroom add checks the teacher exists, teacher delete checks no
//! classroom points at it); that is done through the narrow lookup traits
//! below, bound after both registries exist. Neither registry owns the other.
//!
//! Registries are single-threaded. A change callback runs after the commit
//! finished and may read through a [`Directory`], but must not call back into
//! a mutating operation of the registry that fired it.

mod collection;
pub mod classroom;
pub mod directory;
pub mod teacher;

pub use classroom::ClassroomRegistry;
pub use directory::{ClassroomDirectory, Directory, TeacherDirectory};
pub use teacher::TeacherRegistry;

/// Read-only view of the teacher registry needed by classroom validation.
pub trait TeacherLookup {
    fn teacher_exists(&self, id: u32) -> bool;

    fn teacher_name(&self, id: u32) -> Option<String>;
}

/// Read-only view of the classroom registry needed by the teacher-deletion guard.
pub trait ClassroomLookup {
    /// Names of the classrooms whose class teacher is `teacher_id`, in registry order.
    fn classroom_names_for_teacher(&self, teacher_id: u32) -> Vec<String>;
}

/// Called once per successful mutating operation, with no payload.
pub type ChangeCallback = Box<dyn FnMut()>;
