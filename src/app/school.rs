//! Application wiring.
//!
//! Builds both registries over one store and binds their lookups to each
//! other. This is the only place the two registries meet.

use std::path::PathBuf;
use std::rc::Rc;

use tracing::{info, warn};

use crate::domain::error::StoreError;
use crate::domain::query::{
    classroom_rows, ClassroomFilter, ClassroomRow, ClassroomStats, SchoolSummary, TeacherStats,
};
use crate::domain::registry::{ClassroomRegistry, TeacherRegistry};
use crate::domain::verify::{audit, IntegrityReport};
use crate::storage::{Gateway, JsonFileBackend};

/// Both registries, wired and ready for the presentation layer.
pub struct School {
    teachers: TeacherRegistry,
    classrooms: ClassroomRegistry,
}

impl School {
    /// Loads both collections through `gateway` and binds the cross-registry lookups.
    pub fn open(gateway: Gateway) -> Self {
        let mut teachers = TeacherRegistry::new(gateway.clone());
        let mut classrooms = ClassroomRegistry::new(gateway);

        classrooms.bind_teachers(teachers.directory());
        teachers.bind_classrooms(classrooms.directory());

        let school = Self {
            teachers,
            classrooms,
        };
        info!(
            teachers = school.teachers.len(),
            classrooms = school.classrooms.len(),
            "school registries loaded"
        );
        for violation in school.audit().violations {
            warn!(%violation, "stored data violates an invariant");
        }
        school
    }

    /// Opens the JSON store in `dir`, creating the directory on first run.
    pub fn open_dir(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let backend = JsonFileBackend::new(dir)?;
        Ok(Self::open(Gateway::new(Rc::new(backend))))
    }

    pub fn teachers(&self) -> &TeacherRegistry {
        &self.teachers
    }

    pub fn teachers_mut(&mut self) -> &mut TeacherRegistry {
        &mut self.teachers
    }

    pub fn classrooms(&self) -> &ClassroomRegistry {
        &self.classrooms
    }

    pub fn classrooms_mut(&mut self) -> &mut ClassroomRegistry {
        &mut self.classrooms
    }

    pub fn summary(&self) -> SchoolSummary {
        SchoolSummary::compute(&self.teachers.list(), &self.classrooms.list())
    }

    pub fn teacher_stats(&self) -> TeacherStats {
        TeacherStats::compute(&self.teachers.list())
    }

    pub fn classroom_stats(&self) -> ClassroomStats {
        ClassroomStats::compute(&self.classrooms.list())
    }

    /// Classroom table rows with resolved teacher names.
    pub fn classroom_rows(&self, filter: &ClassroomFilter) -> Vec<ClassroomRow> {
        classroom_rows(&self.classrooms.list(), &self.teachers.directory(), filter)
    }

    pub fn audit(&self) -> IntegrityReport {
        audit(&self.teachers.list(), &self.classrooms.list())
    }
}
