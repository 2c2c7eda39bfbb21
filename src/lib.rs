pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;

// Convenience re-exports (keeps call-sites clean)
pub use app::School;
pub use domain::error::{RegistryError, StoreError, ValidationError};
pub use domain::model::{Classroom, ClassroomDraft, Record, Teacher, TeacherDraft};
pub use domain::registry::{ClassroomRegistry, TeacherRegistry};
pub use storage::{Gateway, JsonFileBackend, MemoryBackend, StoreBackend};
