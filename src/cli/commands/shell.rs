//! shell command - Line-oriented registration session
//!
//! Reads one command per line. Prompts are shown only in interactive mode,
//! so the same loop serves a terminal and piped scripts. End of input
//! leaves the shell like `quit`.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;

use super::load_config;
use crate::cli::Context;
use crate::core::catalog::CourseCatalog;
use crate::core::registrar::Registrar;
use crate::core::student::StudentRecord;
use crate::core::types::{CourseId, GradeLevel, StudentId};
use crate::ui::output;
use crate::ui::prompts::{PromptError, Prompter};

const HELP: &str = "\
Commands:
  enroll                      register a student and enroll in a course
  drop <student-id> <course>  drop a student, promoting from the waitlist
  list <course>               show a course's roster and waitlist
  status                      seats filled per course
  student <student-id>        show a student's courses
  catalog                     list courses with their indices
  help                        show this message
  quit                        leave the shell

A course is given by index or by name (e.g. 4 or \"cs 101\").";

enum Step {
    Continue,
    Quit,
}

/// Start a shell over stdin/stdout with a fresh registrar.
pub fn shell(ctx: &Context) -> Result<()> {
    let config = load_config(ctx)?;
    let registrar = Registrar::new(CourseCatalog::standard(), &config);

    let stdin = io::stdin();
    let interactive = ctx
        .interactive
        .unwrap_or_else(|| config.interactive() && stdin.is_terminal());

    let mut prompter = Prompter::new(stdin.lock(), io::stdout().lock(), interactive);
    if interactive {
        writeln!(prompter.output(), "Type 'help' for commands.")?;
    }
    run_shell(&registrar, &mut prompter)
}

/// Run the command loop until `quit` or end of input.
pub fn run_shell<R: BufRead, W: Write>(
    registrar: &Registrar,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    loop {
        match step(registrar, prompter) {
            Ok(Step::Continue) => {}
            Ok(Step::Quit) | Err(PromptError::Eof) => return Ok(()),
            Err(e) => return Err(e.into()),
        }
    }
}

fn step<R: BufRead, W: Write>(
    registrar: &Registrar,
    prompter: &mut Prompter<R, W>,
) -> Result<Step, PromptError> {
    let line = prompter.input("reg> ")?;
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line.as_str(), ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "" => {}
        "enroll" => enroll(registrar, prompter)?,
        "drop" => drop_student(registrar, prompter.output(), rest)?,
        "list" => list(registrar, prompter.output(), rest)?,
        "status" => writeln!(
            prompter.output(),
            "{}",
            output::render_seat_report(&registrar.seat_report())
        )?,
        "student" => student(registrar, prompter.output(), rest)?,
        "catalog" => writeln!(
            prompter.output(),
            "{}",
            output::render_catalog(registrar.catalog())
        )?,
        "help" | "?" => writeln!(prompter.output(), "{}", HELP)?,
        "quit" | "exit" => return Ok(Step::Quit),
        other => writeln!(
            prompter.output(),
            "Unknown command '{}'. Type 'help' for commands.",
            other
        )?,
    }
    Ok(Step::Continue)
}

fn non_blank(s: &str) -> Result<String, &'static str> {
    if s.is_empty() {
        Err("value cannot be empty")
    } else {
        Ok(s.to_string())
    }
}

fn resolve_course(registrar: &Registrar, input: &str) -> Result<(usize, CourseId), String> {
    let catalog = registrar.catalog();
    catalog
        .resolve(input)
        .and_then(|index| catalog.name(index).map(|id| (index, id.clone())))
        .map_err(|e| e.to_string())
}

/// Ask for a student's details and a course, then enroll. Repeats while
/// the user asks to register another student.
fn enroll<R: BufRead, W: Write>(
    registrar: &Registrar,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    loop {
        let first = prompter.parsed("Enter first name: ", non_blank)?;
        let last = prompter.parsed("Enter last name: ", non_blank)?;
        let id: StudentId = prompter.parsed("Enter student ID: ", str::parse)?;
        let grade: GradeLevel = prompter.parsed(
            "Enter grade level (1: Freshman, 2: Sophomore, 3: Junior, 4: Senior): ",
            str::parse,
        )?;
        let (index, course) =
            prompter.parsed("Enter course (index or name): ", |s| resolve_course(registrar, s))?;

        let student = registrar.register_student(StudentRecord::new(id, &first, &last, grade));
        if student.first_name() != first || student.last_name() != last {
            writeln!(
                prompter.output(),
                "Student {} is already on file as {}.",
                student.id(),
                output::full_name(&student)
            )?;
        }

        let waiting = registrar
            .with_course(index, |c| c.waitlist().contains(student.id()))
            .unwrap_or(false);
        if student.is_registered(&course) {
            writeln!(
                prompter.output(),
                "{} is already enrolled in {}.",
                output::full_name(&student),
                course
            )?;
        } else if waiting {
            writeln!(
                prompter.output(),
                "{} is already on the waitlist for {}.",
                output::full_name(&student),
                course
            )?;
        } else {
            match registrar.enroll(index, &student) {
                Ok(outcome) => writeln!(
                    prompter.output(),
                    "{}",
                    output::describe_enroll(outcome, &student, &course)
                )?,
                Err(e) => writeln!(prompter.output(), "error: {}", e)?,
            }
        }

        if !prompter.confirm("Register another student?", false)? {
            return Ok(());
        }
    }
}

fn drop_student<W: Write>(registrar: &Registrar, out: &mut W, args: &str) -> io::Result<()> {
    let Some((id, course)) = args.split_once(char::is_whitespace) else {
        return writeln!(out, "usage: drop <student-id> <course>");
    };
    let id = StudentId::new(id);
    let (index, course) = match resolve_course(registrar, course) {
        Ok(found) => found,
        Err(e) => return writeln!(out, "error: {}", e),
    };

    match registrar.drop_student(index, &id) {
        Ok(outcome) => writeln!(out, "{}", output::describe_drop(&outcome, &id, &course)),
        Err(e) => writeln!(out, "error: {}", e),
    }
}

fn list<W: Write>(registrar: &Registrar, out: &mut W, args: &str) -> io::Result<()> {
    if args.is_empty() {
        return writeln!(out, "usage: list <course>");
    }
    let snapshot = resolve_course(registrar, args)
        .and_then(|(index, _)| registrar.snapshot(index).map_err(|e| e.to_string()));
    match snapshot {
        Ok(snapshot) => write!(out, "{}", output::render_course(&snapshot)),
        Err(e) => writeln!(out, "error: {}", e),
    }
}

fn student<W: Write>(registrar: &Registrar, out: &mut W, args: &str) -> io::Result<()> {
    if args.is_empty() {
        return writeln!(out, "usage: student <student-id>");
    }
    let Some(student) = registrar.student(&StudentId::new(args)) else {
        return writeln!(out, "No student with ID {}.", args);
    };

    let grade = student.grade_level();
    match grade.label() {
        Some(label) => writeln!(
            out,
            "{} (ID: {}, Grade: {} {})",
            output::full_name(&student),
            student.id(),
            grade,
            label
        )?,
        None => writeln!(
            out,
            "{} (ID: {}, Grade: {})",
            output::full_name(&student),
            student.id(),
            grade
        )?,
    }

    let courses = student.registered_courses();
    if courses.is_empty() {
        writeln!(out, "  Courses: (none)")
    } else {
        let names: Vec<_> = courses.iter().map(CourseId::as_str).collect();
        writeln!(out, "  Courses: {}", names.join(", "))
    }
}
