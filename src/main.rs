//! Application launcher.
//!
//! Opens the school store, wires the registries and reports what was loaded.
//! A presentation layer embeds [`School`] the same way and subscribes to
//! `set_on_changed` on each registry to redraw.

use anyhow::Context;
use school_registry::infra::{config, logging};
use school_registry::School;
use tracing::info;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let data_dir = config::data_dir();
    let school = School::open_dir(&data_dir)
        .with_context(|| format!("cannot open data directory '{}'", data_dir.display()))?;

    let summary = school.summary();
    info!(
        teachers = summary.teachers,
        classrooms = summary.classrooms,
        students = summary.students,
        high_category = summary.high_category,
        data_dir = %data_dir.display(),
        "school registry ready"
    );

    let stats = school.classroom_stats();
    for (grade, grade_stats) in &stats.by_grade {
        info!(
            grade,
            classrooms = grade_stats.classrooms,
            students = grade_stats.students,
            "grade"
        );
    }
    Ok(())
}
