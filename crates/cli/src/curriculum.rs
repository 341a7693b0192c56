//! Built-in teaching content.
//!
//! Five tutorial topics and four exercises, all as static data keyed
//! by catalog id. The runners in `content` do the rest; nothing here
//! is logic.

use crate::console::Console;
use crate::content::{Lesson, Practice, Question, Section};

/// Look up the lesson for a catalog topic id.
pub fn lesson(id: &str) -> Option<&'static Lesson> {
    match id {
        "basics" => Some(&BASICS),
        "flags" => Some(&FLAGS),
        "commands" => Some(&COMMANDS),
        "interactive" => Some(&INTERACTIVE),
        "best_practices" => Some(&BEST_PRACTICES),
        _ => None,
    }
}

/// Look up the exercise for a catalog exercise id.
pub fn practice(id: &str) -> Option<&'static Practice> {
    match id {
        "simple_cli" => Some(&SIMPLE_CLI),
        "flag_exercise" => Some(&FLAG_EXERCISE),
        "command_exercise" => Some(&COMMAND_EXERCISE),
        "interactive_exercise" => Some(&INTERACTIVE_EXERCISE),
        _ => None,
    }
}

// === Tutorials ===

static BASICS: Lesson = Lesson {
    title: "CLI Basics in Rust",
    sections: &[
        Section {
            heading: "Welcome to the basics of CLI development!",
            body: "In this tutorial you'll learn:\n\
                   1. The basic structure of a CLI application\n\
                   2. How to access command-line arguments\n\
                   3. How to handle simple commands\n\
                   4. Exit codes and error output",
            code: None,
        },
        Section {
            heading: "A minimal CLI application",
            body: "Everything starts with std::env::args. The first element is\n\
                   the program name; the rest are the user's arguments:",
            code: Some(
                r#"use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: myapp [command]");
        eprintln!("Available commands: hello, version");
        process::exit(1);
    }

    match args[1].as_str() {
        "hello" => println!("Hello, CLI world!"),
        "version" => println!("v1.0.0"),
        other => {
            eprintln!("Unknown command: {other}");
            process::exit(1);
        }
    }
}
"#,
            ),
        },
        Section {
            heading: "Key takeaways",
            body: "1. env::args() yields the program name first, arguments after\n\
                   2. Always check that required arguments were provided\n\
                   3. Print usage to stderr and exit non-zero on bad input\n\
                   4. Exit code 0 means success, anything else means failure\n\n\
                   Hand-rolled parsing works for tiny tools; larger CLIs are\n\
                   better served by a library like clap, which handles flags,\n\
                   subcommands, and help text for you.",
            code: None,
        },
    ],
    demo: None,
    quiz: &[
        Question {
            prompt: "How do you reach the first user-supplied argument?",
            options: &[
                "env::args().next()",
                "env::args().nth(1)",
                "std::env::var(\"1\")",
                "env::args().last()",
            ],
            answer: 1,
            explain: "env::args().nth(1) skips the program name in position 0.",
        },
        Question {
            prompt: "What exit code should a successful run use?",
            options: &["0", "1", "-1", "Any non-zero value"],
            answer: 0,
            explain: "By convention 0 is success; non-zero values signal errors.",
        },
        Question {
            prompt: "What's the main limitation of parsing env::args() by hand?",
            options: &[
                "It's too slow for many arguments",
                "It only works on Unix systems",
                "Flags and nested commands get unwieldy fast",
                "It has a limit of 10 arguments",
            ],
            answer: 2,
            explain: "Once flags and subcommands appear, a parser library pays off.",
        },
    ],
};

static FLAGS: Lesson = Lesson {
    title: "Command-Line Flags",
    sections: &[
        Section {
            heading: "Why flags?",
            body: "Flags let users modify behavior without changing argument\n\
                   order: --verbose, --output result.txt, -n 3. In Rust the\n\
                   standard tool is clap's derive API, which turns a struct\n\
                   into a parser.",
            code: None,
        },
        Section {
            heading: "Declaring flags with clap",
            body: "Each field becomes a flag; the doc comment becomes its help:",
            code: Some(
                r#"use clap::Parser;

/// Greet someone from the command line.
#[derive(Parser)]
struct Args {
    /// Name to greet
    #[arg(long, default_value = "world")]
    name: String,

    /// Shout the greeting
    #[arg(long)]
    uppercase: bool,

    /// Repeat the greeting this many times
    #[arg(long, default_value_t = 1)]
    repeat: u32,
}

fn main() {
    let args = Args::parse();
    let mut greeting = format!("Hello, {}!", args.name);
    if args.uppercase {
        greeting = greeting.to_uppercase();
    }
    for _ in 0..args.repeat {
        println!("{greeting}");
    }
}
"#,
            ),
        },
        Section {
            heading: "Key takeaways",
            body: "1. bool fields become presence flags (--uppercase)\n\
                   2. default_value keeps flags optional\n\
                   3. clap generates --help and flag validation for free\n\
                   4. Prefer long names; add short ones only for common flags",
            code: None,
        },
    ],
    demo: None,
    quiz: &[
        Question {
            prompt: "What does a bool field in a clap Parser struct become?",
            options: &[
                "A flag taking true/false as a value",
                "A presence flag that is false unless given",
                "A required positional argument",
                "A compile error",
            ],
            answer: 1,
            explain: "bool fields are presence flags: --uppercase sets them true.",
        },
        Question {
            prompt: "Where does clap take a flag's help text from?",
            options: &[
                "The field's doc comment",
                "A separate help.txt file",
                "The Display impl of the field type",
                "It must be passed at runtime",
            ],
            answer: 0,
            explain: "Doc comments on fields become the --help descriptions.",
        },
        Question {
            prompt: "How do you keep a flag optional with a fallback value?",
            options: &[
                "Wrap the field in Box",
                "Mark it #[arg(optional)]",
                "Give it a default_value",
                "Parse it manually in main",
            ],
            answer: 2,
            explain: "default_value / default_value_t supply the fallback.",
        },
    ],
};

static COMMANDS: Lesson = Lesson {
    title: "Subcommands and Command Hierarchy",
    sections: &[
        Section {
            heading: "One tool, many verbs",
            body: "Tools like git and cargo group functionality into\n\
                   subcommands: git commit, cargo build. clap models this\n\
                   with an enum deriving Subcommand.",
            code: None,
        },
        Section {
            heading: "A subcommand enum",
            body: "Each variant is a verb; variant fields are its arguments:",
            code: Some(
                r#"use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new item
    Add { text: String },
    /// List all items
    List,
    /// Mark an item as done
    Done { index: usize },
}

fn main() {
    match Cli::parse().command {
        Commands::Add { text } => println!("added: {text}"),
        Commands::List => println!("(no items yet)"),
        Commands::Done { index } => println!("done: #{index}"),
    }
}
"#,
            ),
        },
        Section {
            heading: "Key takeaways",
            body: "1. Subcommands keep related verbs under one binary\n\
                   2. The match on the enum is the whole dispatcher\n\
                   3. Each subcommand gets its own flags, args, and help\n\
                   4. Keep shared flags on the top-level struct",
            code: None,
        },
    ],
    demo: None,
    quiz: &[
        Question {
            prompt: "How does clap's derive API model subcommands?",
            options: &[
                "A Vec of closures",
                "An enum deriving Subcommand",
                "Nested Parser structs only",
                "A match on raw env::args()",
            ],
            answer: 1,
            explain: "Each enum variant becomes one subcommand.",
        },
        Question {
            prompt: "Where should a flag shared by every subcommand live?",
            options: &[
                "Repeated on each variant",
                "In an environment variable",
                "On the top-level Parser struct",
                "Shared flags are not possible",
            ],
            answer: 2,
            explain: "Top-level (global) flags apply across subcommands.",
        },
        Question {
            prompt: "What does `todo done 3` bind to in the example?",
            options: &[
                "Commands::Done { index: 3 }",
                "Commands::Add { text: \"3\" }",
                "An unknown-command error",
                "Commands::List",
            ],
            answer: 0,
            explain: "Positional fields on a variant are that subcommand's args.",
        },
    ],
};

static INTERACTIVE: Lesson = Lesson {
    title: "Interactive CLI Features",
    sections: &[
        Section {
            heading: "Talking back to the user",
            body: "Some tools hold a conversation: confirmations, menus, text\n\
                   prompts. The building block is a blocking read of one line\n\
                   from stdin.",
            code: None,
        },
        Section {
            heading: "Reading a line",
            body: "Flush the prompt first, then read; trim the newline:",
            code: Some(
                r#"use std::io::{self, BufRead, Write};

fn ask(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}

fn main() -> io::Result<()> {
    let name = ask("What's your name")?;
    println!("Hello, {name}!");
    Ok(())
}
"#,
            ),
        },
        Section {
            heading: "Key takeaways",
            body: "1. Always flush stdout before blocking on stdin\n\
                   2. Validate answers in a loop; re-ask on bad input\n\
                   3. Keep prompt helpers behind a small trait so tests can\n\
                   substitute scripted input for a real terminal",
            code: None,
        },
    ],
    demo: Some(greeting_demo),
    quiz: &[
        Question {
            prompt: "Why flush stdout before reading from stdin?",
            options: &[
                "Otherwise reading panics",
                "The prompt may still sit in the buffer, unseen",
                "stdin cannot be read while stdout is open",
                "Flushing clears the screen",
            ],
            answer: 1,
            explain: "print! doesn't flush; without it the user stares at nothing.",
        },
        Question {
            prompt: "What should a prompt do with an invalid answer?",
            options: &[
                "Exit the program",
                "Silently assume a default",
                "Explain and ask again",
                "Panic with a backtrace",
            ],
            answer: 2,
            explain: "Loop until a valid answer arrives; tell the user why.",
        },
        Question {
            prompt: "Why put prompts behind a trait instead of calling stdin directly?",
            options: &[
                "Traits make stdin faster",
                "Tests can swap in scripted input",
                "stdin requires unsafe otherwise",
                "clap demands it",
            ],
            answer: 1,
            explain: "A swappable I/O port makes interactive code testable.",
        },
    ],
};

/// Small live demo of the prompt helpers taught in the lesson.
fn greeting_demo(console: &mut dyn Console) {
    console.write("Let's try it. These prompts run on the same read-line port:\n\n");
    let name = console.input("What's your name", "world");
    if console.confirm(&format!("Shout the greeting, {name}?")) {
        console.write(&format!("\nHELLO, {}!\n", name.to_uppercase()));
    } else {
        console.write(&format!("\nHello, {name}!\n"));
    }
    console.pause();
}

static BEST_PRACTICES: Lesson = Lesson {
    title: "CLI Best Practices",
    sections: &[
        Section {
            heading: "Habits of good command-line tools",
            body: "1. stdout is for results, stderr is for diagnostics\n\
                   2. Exit 0 on success, non-zero on failure\n\
                   3. --help should be enough to use the tool\n\
                   4. Be quiet by default; add --verbose for detail\n\
                   5. Machine-readable output (e.g. JSON) belongs behind a flag",
            code: None,
        },
        Section {
            heading: "Errors people can act on",
            body: "Propagate errors with ? and attach context where it helps.\n\
                   The anyhow crate keeps this cheap at the binary boundary:",
            code: Some(
                r#"use anyhow::{Context, Result};
use std::fs;

fn main() -> Result<()> {
    let config = fs::read_to_string("config.toml")
        .context("failed to read config.toml")?;
    println!("{} bytes of config", config.len());
    Ok(())
}
"#,
            ),
        },
        Section {
            heading: "Key takeaways",
            body: "1. Never unwrap() in the main path; propagate and explain\n\
                   2. Write warnings to stderr so pipelines stay clean\n\
                   3. Respect the user's terminal: no surprise clears or colors\n\
                   without a way to turn them off",
            code: None,
        },
    ],
    demo: None,
    quiz: &[
        Question {
            prompt: "Where do diagnostic warnings belong?",
            options: &["stdout", "stderr", "A log file, always", "Nowhere"],
            answer: 1,
            explain: "stderr keeps stdout clean for pipeable results.",
        },
        Question {
            prompt: "A command failed. Which exit behavior is right?",
            options: &[
                "Exit 0 and print the error",
                "Exit non-zero with the error on stderr",
                "Exit non-zero silently",
                "Loop until it succeeds",
            ],
            answer: 1,
            explain: "Scripts rely on the exit code; humans rely on stderr.",
        },
        Question {
            prompt: "What is anyhow's Context trait for?",
            options: &[
                "Attaching human-readable context to propagated errors",
                "Caching results between runs",
                "Parsing flags",
                "Coloring terminal output",
            ],
            answer: 0,
            explain: "context() wraps an error with what the program was doing.",
        },
    ],
};

// === Exercises ===

static SIMPLE_CLI: Practice = Practice {
    title: "Exercise: Building a Simple CLI",
    sections: &[
        Section {
            heading: "Your first CLI exercise!",
            body: "Build a tool with three commands:\n\n\
                   1. hello - prints 'Hello, CLI world!'\n\
                   2. echo  - echoes back the remaining arguments\n\
                   3. add   - adds two numbers\n\n\
                   Missing or malformed arguments should print usage to\n\
                   stderr and exit non-zero.",
            code: None,
        },
    ],
    workdir: "simple_cli_exercise",
    template: r#"use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    // TODO: if no command was given, print usage and exit(1)

    // TODO: match on args[1]:
    //   "hello" - print "Hello, CLI world!"
    //   "echo"  - print the remaining arguments joined by spaces
    //   "add"   - parse the next two arguments as i64 and print the sum
}
"#,
    solution: r#"use std::env;
use std::process;

fn usage() -> ! {
    eprintln!("Usage: simplecli [command] [args...]");
    eprintln!("Available commands: hello, echo, add");
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let Some(command) = args.get(1) else { usage() };

    match command.as_str() {
        "hello" => println!("Hello, CLI world!"),
        "echo" => println!("{}", args[2..].join(" ")),
        "add" => {
            let (Some(a), Some(b)) = (args.get(2), args.get(3)) else { usage() };
            match (a.parse::<i64>(), b.parse::<i64>()) {
                (Ok(a), Ok(b)) => println!("{a} + {b} = {}", a + b),
                _ => {
                    eprintln!("Error: add expects two numbers");
                    process::exit(1);
                }
            }
        }
        other => {
            eprintln!("Unknown command: {other}");
            usage();
        }
    }
}
"#,
    quiz: &[
        Question {
            prompt: "What does args.get(1) return when no command was given?",
            options: &["An empty string", "None", "The program name", "A panic"],
            answer: 1,
            explain: "get() is the non-panicking index; None means no argument.",
        },
        Question {
            prompt: "How should 'add two three' behave?",
            options: &[
                "Print 0",
                "Panic on the parse error",
                "Print an error to stderr and exit non-zero",
                "Silently ignore the bad arguments",
            ],
            answer: 2,
            explain: "Bad input is a user error: explain it and fail cleanly.",
        },
        Question {
            prompt: "Why join args[2..] instead of printing args[2] for echo?",
            options: &[
                "args[2] does not exist",
                "echo should repeat every remaining argument",
                "join is faster",
                "Slices cannot be indexed",
            ],
            answer: 1,
            explain: "echo takes everything after the command, not one word.",
        },
    ],
};

static FLAG_EXERCISE: Practice = Practice {
    title: "Exercise: Command-Line Flags",
    sections: &[
        Section {
            heading: "A configurable greeter",
            body: "Build a greeter controlled by flags:\n\n\
                   --name NAME    who to greet (default: world)\n\
                   --uppercase    shout the greeting\n\
                   --repeat N     print it N times (default: 1)\n\n\
                   Try the behaviors:\n\
                   greeter --name Alice           -> Hello, Alice!\n\
                   greeter --name Bob --uppercase -> HELLO, BOB!\n\
                   greeter --repeat 3             -> three greetings",
            code: None,
        },
    ],
    workdir: "flag_exercise",
    template: r#"use clap::Parser;

#[derive(Parser)]
struct Args {
    // TODO: a --name flag with default "world"

    // TODO: an --uppercase presence flag

    // TODO: a --repeat flag with default 1
}

fn main() {
    let args = Args::parse();
    // TODO: build the greeting, apply uppercase, print it repeat times
}
"#,
    solution: r#"use clap::Parser;

#[derive(Parser)]
struct Args {
    /// Name to greet
    #[arg(long, default_value = "world")]
    name: String,

    /// Shout the greeting
    #[arg(long)]
    uppercase: bool,

    /// Repeat the greeting this many times
    #[arg(long, default_value_t = 1)]
    repeat: u32,
}

fn main() {
    let args = Args::parse();
    let mut greeting = format!("Hello, {}!", args.name);
    if args.uppercase {
        greeting = greeting.to_uppercase();
    }
    for _ in 0..args.repeat {
        println!("{greeting}");
    }
}
"#,
    quiz: &[
        Question {
            prompt: "Which attribute gives --name its fallback value?",
            options: &[
                "#[arg(long, default_value = \"world\")]",
                "#[default(\"world\")]",
                "#[arg(fallback = \"world\")]",
                "None; defaults need Option<String>",
            ],
            answer: 0,
            explain: "default_value makes the flag optional with a fallback.",
        },
        Question {
            prompt: "What does `greeter --repeat abc` do?",
            options: &[
                "Greets once",
                "clap rejects it with a parse error before main runs",
                "Panics inside main",
                "Repeats forever",
            ],
            answer: 1,
            explain: "clap validates the u32 and prints a usage error itself.",
        },
        Question {
            prompt: "Why is default_value_t used for repeat but default_value for name?",
            options: &[
                "They are interchangeable everywhere",
                "default_value_t takes a typed literal, default_value a string",
                "Numbers cannot have defaults",
                "default_value_t is deprecated",
            ],
            answer: 1,
            explain: "default_value parses a string; default_value_t takes the value.",
        },
    ],
};

static COMMAND_EXERCISE: Practice = Practice {
    title: "Exercise: Subcommands",
    sections: &[
        Section {
            heading: "A tiny todo tool",
            body: "Build a todo CLI with three subcommands:\n\n\
                   todo add <text>   - store a new item\n\
                   todo list         - show all items with indexes\n\
                   todo done <index> - mark an item finished\n\n\
                   Keep the items in a Vec for this exercise; persistence\n\
                   comes later.",
            code: None,
        },
    ],
    workdir: "command_exercise",
    template: r#"use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    // TODO: Add { text: String }
    // TODO: List
    // TODO: Done { index: usize }
}

fn main() {
    // TODO: match on the parsed command and act on each verb
}
"#,
    solution: r#"use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new item
    Add { text: String },
    /// List all items
    List,
    /// Mark an item as done
    Done { index: usize },
}

fn main() {
    match Cli::parse().command {
        Commands::Add { text } => println!("added: {text}"),
        Commands::List => println!("(no items yet)"),
        Commands::Done { index } => println!("done: #{index}"),
    }
}
"#,
    quiz: &[
        Question {
            prompt: "What happens on `todo remove 2` with this enum?",
            options: &[
                "Commands::Done runs",
                "clap reports an unrecognized subcommand",
                "main panics",
                "Nothing is printed",
            ],
            answer: 1,
            explain: "Unknown verbs are rejected by the parser with a hint.",
        },
        Question {
            prompt: "How does `todo add buy milk` parse?",
            options: &[
                "text = \"buy\", and \"milk\" errors as extra",
                "text = \"buy milk\" automatically",
                "Two items are added",
                "clap asks interactively",
            ],
            answer: 0,
            explain: "A single String field takes one argument; quote the text.",
        },
        Question {
            prompt: "Where do the /// comments on variants show up?",
            options: &[
                "Nowhere; they are stripped",
                "In `todo --help` as subcommand descriptions",
                "Only in rustdoc",
                "On stderr for every run",
            ],
            answer: 1,
            explain: "clap reuses doc comments for the generated help.",
        },
    ],
};

static INTERACTIVE_EXERCISE: Practice = Practice {
    title: "Exercise: An Interactive CLI",
    sections: &[
        Section {
            heading: "A conversation loop",
            body: "Build a number-guessing game:\n\n\
                   1. Pick a fixed secret number between 1 and 100\n\
                   2. Prompt until the user guesses it\n\
                   3. Answer 'higher' or 'lower' after each wrong guess\n\
                   4. Re-prompt politely on non-numeric input\n\n\
                   The skeleton wires up the read loop; fill in the\n\
                   comparison and the input validation.",
            code: None,
        },
    ],
    workdir: "interactive_exercise",
    template: r#"use std::io::{self, BufRead, Write};

const SECRET: u32 = 42;

fn main() -> io::Result<()> {
    println!("Guess the number between 1 and 100!");
    loop {
        print!("Your guess: ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;

        // TODO: parse the guess; on bad input, explain and continue
        // TODO: compare to SECRET and print "higher", "lower",
        //       or a win message followed by break
    }
    Ok(())
}
"#,
    solution: r#"use std::cmp::Ordering;
use std::io::{self, BufRead, Write};

const SECRET: u32 = 42;

fn main() -> io::Result<()> {
    println!("Guess the number between 1 and 100!");
    loop {
        print!("Your guess: ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;

        let guess: u32 = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Please enter a whole number.");
                continue;
            }
        };

        match guess.cmp(&SECRET) {
            Ordering::Less => println!("higher"),
            Ordering::Greater => println!("lower"),
            Ordering::Equal => {
                println!("You got it!");
                break;
            }
        }
    }
    Ok(())
}
"#,
    quiz: &[
        Question {
            prompt: "Why `continue` instead of `break` on a parse error?",
            options: &[
                "break would deadlock",
                "The game should re-prompt, not end",
                "continue is required after match",
                "They behave the same in a loop",
            ],
            answer: 1,
            explain: "Bad input is recoverable; keep the conversation going.",
        },
        Question {
            prompt: "What does guess.cmp(&SECRET) return?",
            options: &[
                "A bool",
                "An i32 difference",
                "A std::cmp::Ordering",
                "A Result",
            ],
            answer: 2,
            explain: "Ordering::{Less, Equal, Greater} matches cleanly.",
        },
        Question {
            prompt: "Why trim the line before parsing?",
            options: &[
                "parse() fails on the trailing newline",
                "It removes the program name",
                "Numbers cannot contain spaces anyway",
                "trim() converts to lowercase",
            ],
            answer: 0,
            explain: "read_line keeps the newline; \"42\\n\" is not a valid u32.",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn every_catalog_tutorial_has_a_lesson() {
        for info in catalog::tutorials() {
            let lesson = lesson(info.id).unwrap_or_else(|| panic!("no lesson for {}", info.id));
            assert!(!lesson.sections.is_empty());
            assert!(!lesson.quiz.is_empty());
        }
    }

    #[test]
    fn every_catalog_exercise_has_a_practice() {
        for info in catalog::exercises() {
            let practice =
                practice(info.id).unwrap_or_else(|| panic!("no practice for {}", info.id));
            assert!(!practice.workdir.is_empty());
            assert!(!practice.template.is_empty());
            assert!(!practice.solution.is_empty());
            assert!(!practice.quiz.is_empty());
        }
    }

    #[test]
    fn quiz_answers_point_at_real_options() {
        let tutorials = catalog::tutorials();
        let exercises = catalog::exercises();
        let all_quizzes = tutorials
            .iter()
            .filter_map(|t| lesson(t.id))
            .map(|l| l.quiz)
            .chain(exercises.iter().filter_map(|e| practice(e.id)).map(|p| p.quiz));

        for quiz in all_quizzes {
            for question in quiz {
                assert!(
                    question.answer < question.options.len(),
                    "answer index out of range for {:?}",
                    question.prompt
                );
            }
        }
    }
}
