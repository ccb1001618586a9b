use std::io;

use colored::*;
use console::Term;
use tracing::warn;

use crate::terminal::colors;

/// Prints `label` and reads one trimmed line.
pub fn prompt(label: &str) -> io::Result<String> {
    let term = Term::stdout();
    term.write_str(&format!("{} ", label.color(colors::ACCENT)))?;
    let line = term.read_line()?;
    Ok(line.trim().to_string())
}

/// Parses a 1-based menu choice, `None` unless it is an integer in `1..=max`.
pub fn parse_choice(input: &str, max: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|choice| (1..=max).contains(choice))
}

/// Keeps asking until the operator enters a number in `1..=max`.
pub fn read_choice(max: usize) -> io::Result<usize> {
    loop {
        let line = prompt("Please enter the number of your choice:")?;
        if let Some(choice) = parse_choice(&line, max) {
            return Ok(choice);
        }
        warn!("Invalid input. Please enter a valid number.");
    }
}
