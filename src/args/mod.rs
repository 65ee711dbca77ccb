//! Command-line argument parsing and handling.

pub mod definition;
pub mod list;
pub mod review;
pub mod table;
pub mod users;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, process_command};
pub use utils::{apply_cli_overrides, determine_log_level};
