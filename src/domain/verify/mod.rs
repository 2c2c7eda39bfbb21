pub mod integrity;

pub use integrity::{audit, IntegrityReport, Violation};
