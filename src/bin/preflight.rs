use anyhow::Context;
use school_registry::domain::verify::audit;
use school_registry::infra::config;
use school_registry::{Classroom, Gateway, JsonFileBackend, Record, Teacher};
use std::rc::Rc;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--strict]\n\
         \n\
         Reads env vars:\n\
           SCHOOL_DATA_DIR (default: data)\n\
         \n\
         --strict  exit with an error when the stored data violates an invariant\n"
    );
    std::process::exit(2);
}

fn check_decodes<R: Record>(backend: &JsonFileBackend) -> anyhow::Result<()> {
    let path = backend.path_for(R::COLLECTION);
    if !path.exists() {
        println!("  {}: missing (created empty on first launch)", R::COLLECTION);
        return Ok(());
    }
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("cannot read '{}'", path.display()))?;
    serde_json::from_str::<Vec<R>>(&raw).with_context(|| {
        format!(
            "'{}' does not hold a list of {} records",
            path.display(),
            R::ENTITY
        )
    })?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let strict = args.iter().any(|a| a == "--strict");

    let data_dir = config::data_dir();
    println!("> Preflight:");
    println!("  SCHOOL_DATA_DIR={}", data_dir.display());

    let backend = JsonFileBackend::new(&data_dir)
        .with_context(|| format!("cannot create data directory '{}'", data_dir.display()))?;

    // A collection that exists but does not decode would silently load empty.
    check_decodes::<Teacher>(&backend)?;
    check_decodes::<Classroom>(&backend)?;

    let gateway = Gateway::new(Rc::new(backend));
    let teachers: Vec<Teacher> = gateway.load();
    let classrooms: Vec<Classroom> = gateway.load();
    println!("  teachers: {}", teachers.len());
    println!("  classrooms: {}", classrooms.len());

    let report = audit(&teachers, &classrooms);
    if report.is_clean() {
        println!("> Preflight OK.");
        return Ok(());
    }

    for violation in &report.violations {
        eprintln!("  Warning: {violation}");
    }
    if strict {
        return Err(anyhow::anyhow!(
            "{} invariant violation(s) in stored data",
            report.violations.len()
        ));
    }
    println!("> Preflight finished with {} warning(s).", report.violations.len());
    Ok(())
}
