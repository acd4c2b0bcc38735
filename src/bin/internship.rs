use classroom_oop::Program;
use classroom_oop::internship::ProgramError;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse().unwrap()))
        .with_writer(std::io::stderr)
        .init();

    let mut program = Program::new();
    if let Err(e) = scenario(&mut program) {
        warn!("{e}");
    }

    // anything emitted before a failure is still worth showing
    flush(&mut program);
}

/// One organization, one mentor, one student working through three tasks.
fn scenario(program: &mut Program) -> Result<(), ProgramError> {
    let org = program.register_organization(1, "Dapplesoft", "hr@dapplesoft.com");
    let mentor = program.register_mentor(2, "Hanif", "hanif@hanif.com");
    let student = program.register_student(3, "Arman", "arman@techcorp.com");

    program.add_mentor(org, mentor)?;
    program.add_student(org, student)?;

    let internship = program.create_internship(org, "Python Developer", 8, mentor)?;
    program.apply(student, internship)?;
    flush(program);
    print!("\n{}", program.show_applicants(internship)?);

    let tasks = [
        program.assign_task(mentor, student, 1, "Build API")?,
        program.assign_task(mentor, student, 2, "Design Database")?,
        program.assign_task(mentor, student, 3, "Write Unit Tests")?,
    ];

    for task in tasks {
        program.submit(student, task)?;
    }

    let feedback = ["Excellent work!", "Great job!", "Perfect!"];
    for (task, feedback) in tasks.into_iter().zip(feedback) {
        program.review(mentor, task, feedback)?;
    }
    flush(program);

    print!("\n{}", program.show_details(org)?);
    println!("\n Internship Completed!\n");
    Ok(())
}

fn flush(program: &mut Program) {
    for event in program.drain_events() {
        println!("{event}");
    }
}
