use std::io::{self, Write};

use crate::output::{BOLD, CYAN, GRAY, GREEN, RESET, YELLOW};

/// Terminal prompt primitives consumed by the wizard.
///
/// Every method returns `None` when the user cancels the prompt (EOF or a
/// closed stdin). Implementations must never panic on input errors.
pub trait Prompter {
    /// Ask a free-text question and return the trimmed answer.
    fn input(&mut self, question: &str) -> Option<String>;

    /// Ask a yes/no question and return the user's choice.
    fn confirm(&mut self, question: &str, default: bool) -> Option<bool>;

    /// Ask the user to select from a list of options.
    /// Returns the index of the selected option (0-based).
    fn select(&mut self, question: &str, options: &[&str], default: usize) -> Option<usize>;
}

/// Stdin-backed [`Prompter`] used by the CLI.
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }

    /// Read one line from stdin. `None` on EOF or read failure.
    fn read_line(&self) -> Option<String> {
        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim().to_string()),
            Err(_) => None,
        }
    }
}

impl Prompter for ConsolePrompter {
    fn input(&mut self, question: &str) -> Option<String> {
        print!("{CYAN}?{RESET} {} ", question);
        io::stdout().flush().ok();
        self.read_line()
    }

    fn confirm(&mut self, question: &str, default: bool) -> Option<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        print!("{CYAN}?{RESET} {} {GRAY}{}{RESET} ", question, hint);
        io::stdout().flush().ok();

        let answer = self.read_line()?;
        Some(match answer.to_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default,
        })
    }

    fn select(&mut self, question: &str, options: &[&str], default: usize) -> Option<usize> {
        println!("{CYAN}?{RESET} {}", question);
        println!();

        for (i, option) in options.iter().enumerate() {
            let marker = if i == default {
                format!("{GREEN}>{RESET}")
            } else {
                " ".to_string()
            };
            println!("  {} {BOLD}{}{RESET}. {}", marker, i + 1, option);
        }

        loop {
            println!();
            print!("{GRAY}Enter choice [{}]:{RESET} ", default + 1);
            io::stdout().flush().ok();

            let trimmed = self.read_line()?;

            // Empty input = use default
            if trimmed.is_empty() {
                return Some(default);
            }

            match trimmed.parse::<usize>() {
                Ok(n) if n >= 1 && n <= options.len() => return Some(n - 1),
                _ => {
                    println!(
                        "{YELLOW}Please enter a number between 1 and {}{RESET}",
                        options.len()
                    );
                }
            }
        }
    }
}
