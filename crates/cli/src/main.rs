//! cliteach - an interactive tool for learning CLI development in Rust.

mod catalog;
mod console;
mod content;
mod curriculum;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use cliteach_progress::{format_all_progress, format_recent_progress, Tracker};
use cliteach_storage::JsonStore;

use console::{AutoConsole, Console, StdConsole};

#[derive(Parser)]
#[command(name = "cliteach")]
#[command(about = "Learn to build command-line tools in Rust", long_about = None)]
struct Cli {
    /// Answer every prompt automatically (non-interactive run)
    #[arg(long, global = true)]
    no_input: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive tutorial on a topic
    Tutorial {
        /// Tutorial topic, e.g. basics, flags, commands
        topic: Option<String>,
    },
    /// Work through a practice exercise
    Exercise {
        /// Exercise name, e.g. simple-cli, flag-exercise
        name: Option<String>,
    },
    /// View your learning progress
    Progress {
        /// Reset all progress tracking data
        #[arg(long, short)]
        reset: bool,
        /// Show only recent activity
        #[arg(long)]
        recent: bool,
    },
}

/// Options for the progress command, passed explicitly into the
/// handler rather than read from shared flag state.
struct ProgressOptions {
    reset: bool,
    recent: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut console: Box<dyn Console> = if cli.no_input {
        Box::new(AutoConsole)
    } else {
        Box::new(StdConsole)
    };

    match cli.command {
        None => {
            println!("Welcome to cliteach!");
            println!("To get started, try running 'cliteach tutorial basics'");
            println!("For help, run 'cliteach --help'");
            Ok(())
        }
        Some(Commands::Tutorial { topic }) => run_tutorial(console.as_mut(), topic.as_deref()),
        Some(Commands::Exercise { name }) => run_exercise(console.as_mut(), name.as_deref()),
        Some(Commands::Progress { reset, recent }) => {
            show_progress(ProgressOptions { reset, recent })
        }
    }
}

fn run_tutorial(console: &mut dyn Console, topic: Option<&str>) -> Result<()> {
    let Some(topic) = topic else {
        println!("Please specify a tutorial topic. For example:");
        println!("  cliteach tutorial basics");
        println!("\nAvailable topics:");
        println!("  basics, flags, commands, interactive, best-practices");
        return Ok(());
    };

    let Some(id) = catalog::normalize_topic(topic) else {
        println!("Unknown tutorial topic: {topic}");
        println!("Available topics: basics, flags, commands, interactive, best-practices");
        return Ok(());
    };

    let lesson = curriculum::lesson(id)
        .with_context(|| format!("no lesson content for topic '{id}'"))?;

    let mut tracker = open_tracker();
    if tracker.as_ref().is_some_and(|t| t.is_tutorial_completed(id)) {
        console.write("\nNote: you've already completed this tutorial. Running it again for review.\n\n");
    }

    let completed = content::run_lesson(console, lesson);

    if completed {
        if let Some(tracker) = tracker.as_mut() {
            match tracker.mark_tutorial_complete(id) {
                Ok(()) => {
                    console.write("\nCongratulations! Tutorial completed and progress saved.\n");
                    console.write(&format_recent_progress(
                        tracker,
                        &catalog::tutorials(),
                        &catalog::exercises(),
                    ));
                }
                // The lesson itself succeeded; a lost record is a warning.
                Err(e) => warn!("could not save progress: {e}"),
            }
        }
    }

    Ok(())
}

fn run_exercise(console: &mut dyn Console, name: Option<&str>) -> Result<()> {
    let Some(name) = name else {
        println!("Please specify an exercise. For example:");
        println!("  cliteach exercise simple-cli");
        println!("\nAvailable exercises:");
        println!("  simple-cli, flag-exercise, command-exercise, interactive");
        return Ok(());
    };

    let Some(id) = catalog::normalize_exercise(name) else {
        println!("Unknown exercise: {name}");
        println!("Available exercises: simple-cli, flag-exercise, command-exercise, interactive");
        return Ok(());
    };

    let practice = curriculum::practice(id)
        .with_context(|| format!("no exercise content for '{id}'"))?;

    let mut tracker = open_tracker();
    if tracker.as_ref().is_some_and(|t| t.is_exercise_completed(id)) {
        console.write("\nNote: you've already completed this exercise. Running it again for practice.\n\n");
    }

    // Starter code goes in a subdirectory of wherever the user ran us.
    let (completed, score) = content::run_practice(console, practice, Path::new("."));

    if completed {
        if let Some(tracker) = tracker.as_mut() {
            match tracker.mark_exercise_complete(id, score) {
                Ok(()) => {
                    console.write(&format!(
                        "\nCongratulations! Exercise completed with score: {score}/100\n"
                    ));
                    console.write(&format_recent_progress(
                        tracker,
                        &catalog::tutorials(),
                        &catalog::exercises(),
                    ));
                }
                Err(e) => warn!("could not save progress: {e}"),
            }
        }
    }

    Ok(())
}

fn show_progress(options: ProgressOptions) -> Result<()> {
    let mut tracker = Tracker::open().context("failed to load progress data")?;

    if options.reset {
        tracker.reset().context("failed to reset progress")?;
        println!("Progress data has been reset.");
        return Ok(());
    }

    let tutorials = catalog::tutorials();
    let exercises = catalog::exercises();

    let view = if options.recent {
        format_recent_progress(&tracker, &tutorials, &exercises)
    } else {
        format_all_progress(&tracker, &tutorials, &exercises)
    };
    print!("{view}");

    Ok(())
}

/// Load the tracker, or continue without tracking if the state can't
/// be read. A broken progress file should never block a lesson.
fn open_tracker() -> Option<Tracker<JsonStore>> {
    match Tracker::open() {
        Ok(tracker) => Some(tracker),
        Err(e) => {
            warn!("could not load progress data, continuing without tracking: {e}");
            None
        }
    }
}
