//! Terminal styling utilities for diagnostic output

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static BROOM: Emoji<'_, '_> = Emoji("🧹 ", "");

/// Print a progress line in the `---> message` diagnostic style
pub fn print_progress(message: &str) {
    println!("{} {}", style("--->").cyan().bold(), message);
}

/// Print a section header for a displayed table, e.g. `---Observed (O)---`
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("---{}---", title)).white().bold());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!(
        "{} {} {}",
        style("--->").cyan().bold(),
        style("✓").green().bold(),
        style(message).green()
    );
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", INFO, message);
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize) {
    println!(
        "{} Found {} {}",
        style("--->").cyan().bold(),
        style(count).yellow().bold(),
        description
    );
}
