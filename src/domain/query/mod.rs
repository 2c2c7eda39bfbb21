//! Read-side helpers for the presentation layer: search, filters and reports.
//!
//! Everything here is a pure function over registry snapshots.

pub mod filter;
pub mod report;

pub use filter::{
    classroom_rows, subjects, ClassroomFilter, ClassroomRow, TeacherFilter, UNKNOWN_TEACHER,
};
pub use report::{ClassroomStats, GradeStats, SchoolSummary, TeacherStats};
