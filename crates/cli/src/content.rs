//! Lesson and exercise runners.
//!
//! Content is plain data (see `curriculum`); the runners here walk the
//! sections, pose the quiz, and decide whether the run counts as a
//! completion. All interaction goes through the console port.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::console::Console;

/// An exercise passes at or above this score.
const PASS_SCORE: u32 = 60;

/// One tutorial topic: prose sections followed by a short quiz.
pub struct Lesson {
    pub title: &'static str,
    pub sections: &'static [Section],
    /// Hands-on demo run after the sections, if the topic has one.
    pub demo: Option<fn(&mut dyn Console)>,
    pub quiz: &'static [Question],
}

/// One practice exercise: instructions, starter template, reference
/// solution, and a scored quiz.
pub struct Practice {
    pub title: &'static str,
    pub sections: &'static [Section],
    /// Directory (under the scratch root) the starter code is written to
    pub workdir: &'static str,
    pub template: &'static str,
    pub solution: &'static str,
    pub quiz: &'static [Question],
}

/// A block of prose with an optional code listing.
pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
    pub code: Option<&'static str>,
}

/// A multiple-choice question.
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    /// Index of the correct option
    pub answer: usize,
    /// Shown after answering, right or wrong
    pub explain: &'static str,
}

/// Walk a lesson front to back. Returns true when the run counts as a
/// completion: at most one quiz answer wrong.
pub fn run_lesson(console: &mut dyn Console, lesson: &Lesson) -> bool {
    console.clear();
    console.title(lesson.title);

    for section in lesson.sections {
        show_section(console, section);
        console.pause();
        console.clear();
        console.title(lesson.title);
    }

    if let Some(demo) = lesson.demo {
        demo(console);
        console.clear();
        console.title(lesson.title);
    }

    let correct = run_quiz(console, lesson.quiz);
    console.write(&format!(
        "\nYou got {correct} out of {} questions correct!\n",
        lesson.quiz.len()
    ));

    correct + 1 >= lesson.quiz.len()
}

/// Walk an exercise front to back. Returns whether the run counts as
/// a completion, plus the score out of 100.
///
/// Starter code (and the solution, if the user asks for it) is written
/// under `scratch_root` so the learner can edit and run it. A failed
/// write is reported on the console and the run continues.
pub fn run_practice(
    console: &mut dyn Console,
    practice: &Practice,
    scratch_root: &Path,
) -> (bool, u32) {
    console.clear();
    console.title(practice.title);

    for section in practice.sections {
        show_section(console, section);
        console.pause();
        console.clear();
        console.title(practice.title);
    }

    let exercise_dir = scratch_root.join(practice.workdir);

    console.write("Here's a template to get you started:\n\n");
    console.code(practice.template);
    match write_scaffold(&exercise_dir, "main.rs", practice.template) {
        Ok(path) => console.write(&format!(
            "\nI've saved the starter code to {} - edit it and try it out.\n",
            path.display()
        )),
        Err(e) => console.write(&format!("\nError creating starter file: {e}\n")),
    }
    console.pause();

    if console.confirm("\nWould you like to see a reference solution?") {
        console.clear();
        console.title(practice.title);
        console.write("Here's one way to solve it:\n\n");
        console.code(practice.solution);
        match write_scaffold(&exercise_dir, "solution.rs", practice.solution) {
            Ok(path) => {
                console.write(&format!("\nI've saved the solution to {}\n", path.display()))
            }
            Err(e) => console.write(&format!("\nError creating solution file: {e}\n")),
        }
        console.pause();
    }

    console.clear();
    console.title(practice.title);

    let correct = run_quiz(console, practice.quiz);
    let score = if practice.quiz.is_empty() {
        100
    } else {
        (100 * correct / practice.quiz.len()) as u32
    };
    console.write(&format!("\nYour score: {score}/100\n"));

    (score >= PASS_SCORE, score)
}

fn show_section(console: &mut dyn Console, section: &Section) {
    console.write(&format!("{}\n\n", section.heading));
    console.write(section.body);
    console.write("\n");
    if let Some(code) = section.code {
        console.write("\n");
        console.code(code);
    }
}

fn write_scaffold(dir: &Path, file_name: &str, contents: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, contents)?;
    Ok(path)
}

fn run_quiz(console: &mut dyn Console, quiz: &[Question]) -> usize {
    if quiz.is_empty() {
        return 0;
    }

    console.write("Let's check your understanding with a few questions:\n");
    let mut correct = 0;
    for (i, question) in quiz.iter().enumerate() {
        let picked = console.choose(&format!("\n{}. {}", i + 1, question.prompt), question.options);
        if picked == question.answer {
            console.write(&format!("Correct! {}\n", question.explain));
            correct += 1;
        } else {
            console.write(&format!("Not quite. {}\n", question.explain));
        }
        console.pause();
    }
    correct
}
