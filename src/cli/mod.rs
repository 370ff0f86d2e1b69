//! Terminal front-end: argument parsing and styled drawing of the widget.

pub mod args;

use colored::Colorize;

/// Style a rendered widget for the terminal: bold header, cyan button.
pub fn style_view(rendered: &str) -> String {
    let mut out = String::new();
    for (i, line) in rendered.lines().enumerate() {
        let styled = match i {
            0 => line.bold().to_string(),
            1 => line.cyan().to_string(),
            _ => line.to_string(),
        };
        out.push_str(&styled);
        out.push('\n');
    }
    out
}

/// One-line usage hint shown under the widget.
pub fn hint() -> String {
    "Enter: get random user · q: quit".dimmed().to_string()
}

/// Note printed when a press was swallowed by the throttle.
pub fn throttled_note() -> String {
    "  too fast, try again in a moment".yellow().to_string()
}
