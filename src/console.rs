use colored::Colorize;

/// Section heading in the `=== Title ===` style shared by every demo.
pub fn banner(title: &str) -> String {
    format!("=== {title} ===").bold().to_string()
}

pub fn question_prompt() -> String {
    [
        "What do you think is bad here?",
        "Based on SOLID principle, what principle was broken?",
        "What can be a better solution?",
    ]
    .iter()
    .map(|line| format!("{} {line}", "?".yellow()))
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn failure(message: &str) -> String {
    format!("{} {message}", "[err]".red())
}
