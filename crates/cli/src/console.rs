//! Terminal I/O port.
//!
//! All interaction goes through the [`Console`] trait so the lesson
//! runner never touches stdin/stdout directly. The prompt helpers are
//! default methods built on the two line primitives; the
//! auto-answering console overrides them wholesale, so non-interactive
//! runs are a swapped implementation rather than branches inside each
//! prompt.

use std::io::{self, BufRead, Write};

/// Blocking read-line / write-line capability plus prompt helpers.
pub trait Console {
    /// Write text without a trailing newline.
    fn write(&mut self, text: &str);

    /// Read one line of input, without the trailing newline.
    fn read_line(&mut self) -> io::Result<String>;

    /// Clear the screen and move the cursor home.
    fn clear(&mut self) {
        self.write("\x1b[2J\x1b[1;1H");
    }

    /// Print a boxed section title.
    fn title(&mut self, title: &str) {
        let rule = "=".repeat(title.len() + 4);
        self.write(&format!("{rule}\n  {title}\n{rule}\n\n"));
    }

    /// Pause until the user presses Enter.
    fn pause(&mut self) {
        self.write("\nPress Enter to continue...");
        let _ = self.read_line();
        self.write("\n");
    }

    /// Ask a yes/no question until a valid answer arrives.
    fn confirm(&mut self, question: &str) -> bool {
        loop {
            self.write(&format!("{question} (y/n): "));
            let Ok(line) = self.read_line() else {
                return false;
            };
            match line.trim().to_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => self.write("Please answer with 'y' or 'n'\n"),
            }
        }
    }

    /// Ask a multiple-choice question; returns the chosen index.
    fn choose(&mut self, prompt: &str, options: &[&str]) -> usize {
        self.write(&format!("{prompt}\n"));
        for (i, option) in options.iter().enumerate() {
            self.write(&format!("{}. {}\n", i + 1, option));
        }
        loop {
            self.write(&format!("\nEnter your choice (1-{}): ", options.len()));
            let Ok(line) = self.read_line() else {
                return 0;
            };
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return n - 1,
                _ => self.write(&format!(
                    "Invalid choice. Please enter a number between 1 and {}\n",
                    options.len()
                )),
            }
        }
    }

    /// Prompt for free text, returning the default on empty input.
    fn input(&mut self, prompt: &str, default: &str) -> String {
        if default.is_empty() {
            self.write(&format!("{prompt}: "));
        } else {
            self.write(&format!("{prompt} [{default}]: "));
        }
        match self.read_line() {
            Ok(line) if !line.trim().is_empty() => line.trim().to_string(),
            _ => default.to_string(),
        }
    }

    /// Print a code listing with line numbers.
    fn code(&mut self, code: &str) {
        for (i, line) in code.trim_end().lines().enumerate() {
            self.write(&format!("{:3} | {}\n", i + 1, line));
        }
    }
}

/// Real terminal: blocking stdin reads, stdout writes.
pub struct StdConsole;

impl Console for StdConsole {
    fn write(&mut self, text: &str) {
        print!("{text}");
        let _ = io::stdout().flush();
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let n = io::stdin().lock().read_line(&mut line)?;
        if n == 0 {
            // Exhausted piped stdin; an Ok("") here would make the
            // retrying prompts loop forever.
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Auto-answering console for non-interactive runs: still prints all
/// content, but answers every prompt without blocking (yes, first
/// option, default text).
pub struct AutoConsole;

impl Console for AutoConsole {
    fn write(&mut self, text: &str) {
        print!("{text}");
        let _ = io::stdout().flush();
    }

    fn read_line(&mut self) -> io::Result<String> {
        Ok(String::new())
    }

    fn clear(&mut self) {
        // Keep scrollback readable in non-interactive runs.
        self.write("\n");
    }

    fn pause(&mut self) {
        self.write("\nPress Enter to continue... (auto-continuing)\n");
    }

    fn confirm(&mut self, question: &str) -> bool {
        self.write(&format!("{question} (y/n): auto-answering 'y'\n"));
        true
    }

    fn choose(&mut self, prompt: &str, options: &[&str]) -> usize {
        self.write(&format!("{prompt}\n"));
        for (i, option) in options.iter().enumerate() {
            self.write(&format!("{}. {}\n", i + 1, option));
        }
        self.write("\nAuto-selecting option 1\n");
        0
    }

    fn input(&mut self, prompt: &str, default: &str) -> String {
        let value = if default.is_empty() { "sample" } else { default };
        self.write(&format!("{prompt}: auto-answering '{value}'\n"));
        value.to_string()
    }
}

#[cfg(test)]
pub(crate) struct ScriptedConsole {
    inputs: std::collections::VecDeque<String>,
    pub output: String,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: String::new(),
        }
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}
