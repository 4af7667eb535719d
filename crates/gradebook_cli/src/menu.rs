//! Interactive numbered menu over one registry.
//!
//! # Invariants
//! - Boundary input is validated here (marks must parse as an integer,
//!   update field names must be known) before any registry call.
//! - End of input behaves like choosing exit.

use gradebook_core::{
    render_course_report, render_professor_report, render_student_report, render_student_table,
    CsvStore, Registry, SearchStrategy, Student, StudentUpdate,
};
use log::warn;
use std::io::{self, BufRead, Write};
use std::time::Duration;

const MENU: &str = "
===== CheckMyGrade =====
1) List students
2) Add student
3) Update student
4) Delete student
5) Search student (linear vs indexed)
6) Sort students (email/marks/name/grade)
7) Course stats (avg, median)
8) Reports (course/professor/student)
9) Save to CSV
10) Load from CSV
11) Login test
0) Exit
";

/// One interactive session bound to a registry, its store and two streams.
pub struct Session<'a, R, W> {
    registry: &'a mut Registry,
    store: &'a CsvStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(registry: &'a mut Registry, store: &'a CsvStore, input: R, output: W) -> Self {
        Self {
            registry,
            store,
            input,
            output,
        }
    }

    /// Runs until the operator exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Choose: ")? else {
                return Ok(());
            };
            let keep_going = match choice.as_str() {
                "1" => self.list_students(),
                "2" => self.add_student(),
                "3" => self.update_student(),
                "4" => self.delete_student(),
                "5" => self.search_student(),
                "6" => self.sort_students(),
                "7" => self.course_stats(),
                "8" => self.reports(),
                "9" => self.save(),
                "10" => self.load(),
                "11" => self.login(),
                "0" => {
                    writeln!(self.output, "Bye")?;
                    return Ok(());
                }
                _ => self.say("Invalid choice."),
            }?;
            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Reads one trimmed line. `None` means input is exhausted.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: &str) -> io::Result<bool> {
        writeln!(self.output, "{message}")?;
        Ok(true)
    }

    fn list_students(&mut self) -> io::Result<bool> {
        let table = render_student_table(self.registry.students());
        self.say(&table)
    }

    fn add_student(&mut self) -> io::Result<bool> {
        let Some(email) = self.prompt("Email: ")? else {
            return Ok(false);
        };
        let Some(first_name) = self.prompt("First name: ")? else {
            return Ok(false);
        };
        let Some(last_name) = self.prompt("Last name: ")? else {
            return Ok(false);
        };
        let Some(course_id) = self.prompt("Course id: ")? else {
            return Ok(false);
        };
        let Some(marks) = self.prompt("Marks (0-100): ")? else {
            return Ok(false);
        };
        let Ok(marks) = marks.parse::<i32>() else {
            return self.say("Marks must be a whole number.");
        };

        let student = Student::new(email, first_name, last_name, course_id, Some(marks));
        match self.registry.add_student(student) {
            Ok(()) => self.say("Added."),
            Err(err) => self.say(&format!("Not added: {err}")),
        }
    }

    fn update_student(&mut self) -> io::Result<bool> {
        let Some(email) = self.prompt("Student email to update: ")? else {
            return Ok(false);
        };
        let Some(field) = self.prompt("Field (first_name,last_name,course_id,grade,marks): ")?
        else {
            return Ok(false);
        };
        let Some(value) = self.prompt("New value: ")? else {
            return Ok(false);
        };

        let update = match field.as_str() {
            "first_name" => StudentUpdate {
                first_name: Some(value),
                ..StudentUpdate::default()
            },
            "last_name" => StudentUpdate {
                last_name: Some(value),
                ..StudentUpdate::default()
            },
            "course_id" => StudentUpdate {
                course_id: Some(value),
                ..StudentUpdate::default()
            },
            "grade" => StudentUpdate {
                grade: Some(value),
                ..StudentUpdate::default()
            },
            "marks" => match value.parse::<i32>() {
                Ok(marks) => StudentUpdate::marks(marks),
                Err(_) => return self.say("Marks must be a whole number."),
            },
            _ => return self.say("Unknown field."),
        };

        if self.registry.update_student(&email, &update) {
            self.say("Updated.")
        } else {
            self.say("Student not found.")
        }
    }

    fn delete_student(&mut self) -> io::Result<bool> {
        let Some(email) = self.prompt("Student email to delete: ")? else {
            return Ok(false);
        };
        if self.registry.delete_student(&email) {
            self.say("Deleted.")
        } else {
            self.say("Student not found.")
        }
    }

    fn search_student(&mut self) -> io::Result<bool> {
        let Some(email) = self.prompt("Student email to search: ")? else {
            return Ok(false);
        };
        for strategy in [SearchStrategy::Linear, SearchStrategy::Indexed] {
            let outcome = self.registry.search_student(&email, strategy);
            writeln!(
                self.output,
                "{} search: {} in {} ms",
                strategy.as_str(),
                found_label(outcome.is_found()),
                millis(outcome.elapsed)
            )?;
        }
        Ok(true)
    }

    fn sort_students(&mut self) -> io::Result<bool> {
        let Some(by) = self.prompt("Sort by (email/marks/name/grade): ")? else {
            return Ok(false);
        };
        let Some(ascending) = self.prompt("Ascending? (y/n): ")? else {
            return Ok(false);
        };
        let ascending = !ascending.eq_ignore_ascii_case("n");
        match self.registry.sort_students_by(&by, ascending) {
            Ok(elapsed) => self.say(&format!("Sorted in {} ms", millis(elapsed))),
            Err(err) => self.say(&err.to_string()),
        }
    }

    fn course_stats(&mut self) -> io::Result<bool> {
        let Some(course_id) = self.prompt("Course id: ")? else {
            return Ok(false);
        };
        let stats = self.registry.course_stats(&course_id);
        let format_value =
            |value: Option<f64>| value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"));
        self.say(&format!(
            "count={} average={} median={}",
            stats.count,
            format_value(stats.average),
            format_value(stats.median)
        ))
    }

    fn reports(&mut self) -> io::Result<bool> {
        let Some(which) = self.prompt("Report (course/professor/student): ")? else {
            return Ok(false);
        };
        let report = match which.to_ascii_lowercase().as_str() {
            "course" => {
                let Some(course_id) = self.prompt("Course id: ")? else {
                    return Ok(false);
                };
                render_course_report(self.registry, &course_id)
            }
            "professor" => {
                let Some(professor_id) = self.prompt("Professor id (email): ")? else {
                    return Ok(false);
                };
                render_professor_report(self.registry, &professor_id)
            }
            _ => {
                let Some(email) = self.prompt("Student email: ")? else {
                    return Ok(false);
                };
                render_student_report(self.registry, &email)
            }
        };
        self.say(&report)
    }

    fn save(&mut self) -> io::Result<bool> {
        match self.store.save_all(self.registry) {
            Ok(()) => self.say("Saved."),
            Err(err) => {
                warn!("event=menu_save module=cli status=error error={err}");
                self.say(&format!("Save failed: {err}"))
            }
        }
    }

    fn load(&mut self) -> io::Result<bool> {
        match self.store.load_all(self.registry) {
            Ok(()) => self.say("Loaded."),
            Err(err) => {
                warn!("event=menu_load module=cli status=error error={err}");
                self.say(&format!("Load failed: {err}"))
            }
        }
    }

    fn login(&mut self) -> io::Result<bool> {
        let Some(email) = self.prompt("Email: ")? else {
            return Ok(false);
        };
        let Some(password) = self.prompt("Password: ")? else {
            return Ok(false);
        };
        if self.registry.login(&email, &password) {
            self.say("Login OK")
        } else {
            self.say("Login failed")
        }
    }
}

fn found_label(found: bool) -> &'static str {
    if found {
        "FOUND"
    } else {
        "not found"
    }
}

fn millis(elapsed: Duration) -> String {
    format!("{:.3}", elapsed.as_secs_f64() * 1000.0)
}
