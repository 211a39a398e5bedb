use gallery_core::Intent;

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "Commands: reload | show <category> | help | quit";

pub fn parse(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match (word, rest) {
        ("reload", "") => Command::Intent(Intent::LoadRequested),
        ("show", category) if !category.is_empty() => {
            Command::Intent(Intent::CategorySelected(category.to_string()))
        }
        ("help", "") => Command::Help,
        ("quit" | "exit", "") => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}
