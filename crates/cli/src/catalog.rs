//! Built-in catalog of tutorials and exercises.
//!
//! The catalog lives here in the command layer and is passed into the
//! reporter; the core crates never hardcode it.

use cliteach_core::{Difficulty, ExerciseInfo, TutorialInfo};

/// All known tutorials, in teaching order.
pub fn tutorials() -> Vec<TutorialInfo> {
    vec![
        TutorialInfo {
            id: "basics",
            description: "Basic CLI structure and command line arguments",
        },
        TutorialInfo {
            id: "flags",
            description: "Working with command line flags",
        },
        TutorialInfo {
            id: "commands",
            description: "Creating and organizing subcommands",
        },
        TutorialInfo {
            id: "interactive",
            description: "Building interactive CLI applications",
        },
        TutorialInfo {
            id: "best_practices",
            description: "Best practices for CLI development",
        },
    ]
}

/// All known exercises, in rough difficulty order.
pub fn exercises() -> Vec<ExerciseInfo> {
    vec![
        ExerciseInfo {
            id: "simple_cli",
            description: "Build a simple CLI tool",
            difficulty: Difficulty::Easy,
        },
        ExerciseInfo {
            id: "flag_exercise",
            description: "Create a CLI with multiple flags",
            difficulty: Difficulty::Medium,
        },
        ExerciseInfo {
            id: "command_exercise",
            description: "Implement a CLI with subcommands",
            difficulty: Difficulty::Medium,
        },
        ExerciseInfo {
            id: "interactive_exercise",
            description: "Build an interactive CLI",
            difficulty: Difficulty::Hard,
        },
    ]
}

/// Map a user-supplied topic name onto its catalog id.
pub fn normalize_topic(name: &str) -> Option<&'static str> {
    match name {
        "basics" => Some("basics"),
        "flags" => Some("flags"),
        "commands" => Some("commands"),
        "interactive" => Some("interactive"),
        "best-practices" | "best_practices" => Some("best_practices"),
        _ => None,
    }
}

/// Map a user-supplied exercise name onto its catalog id.
pub fn normalize_exercise(name: &str) -> Option<&'static str> {
    match name {
        "simple-cli" | "simple_cli" => Some("simple_cli"),
        "flag-exercise" | "flag_exercise" => Some("flag_exercise"),
        "command-exercise" | "command_exercise" => Some("command_exercise"),
        "interactive" | "interactive-exercise" | "interactive_exercise" => {
            Some("interactive_exercise")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_topics_exist_in_the_catalog() {
        let known: Vec<&str> = tutorials().iter().map(|t| t.id).collect();
        for name in ["basics", "flags", "commands", "interactive", "best-practices"] {
            let id = normalize_topic(name).unwrap();
            assert!(known.contains(&id), "{id} missing from catalog");
        }
        assert!(normalize_topic("pointers").is_none());
    }

    #[test]
    fn normalized_exercises_exist_in_the_catalog() {
        let known: Vec<&str> = exercises().iter().map(|e| e.id).collect();
        for name in ["simple-cli", "flag-exercise", "command-exercise", "interactive"] {
            let id = normalize_exercise(name).unwrap();
            assert!(known.contains(&id), "{id} missing from catalog");
        }
        assert!(normalize_exercise("unknown").is_none());
    }

    #[test]
    fn hyphen_and_underscore_spellings_agree() {
        assert_eq!(normalize_topic("best-practices"), normalize_topic("best_practices"));
        assert_eq!(normalize_exercise("simple-cli"), normalize_exercise("simple_cli"));
    }
}
