//! Terminal output helpers for CLI commands.

use tabled::{Table, Tabled};

/// Print rows as a table.
pub fn print_table<T: Tabled>(rows: &[T]) {
    if rows.is_empty() {
        println!("No results found.");
    } else {
        println!("{}", Table::new(rows));
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}
