pub mod edit;
pub mod home;
pub mod os;

use colored::Colorize;

/// Print warning message
pub fn warn(msg: &str) {
    eprintln!("{} {}", "Warning:".yellow(), msg);
}

/// Print error message to stdout
pub fn error(msg: &str) {
    println!("{} {}", "Error:".red(), msg);
}
