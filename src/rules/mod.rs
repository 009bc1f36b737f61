//! Game rules for standard Gomoku
//!
//! - [`line`]: axis geometry, run walking and run-end classification
//! - [`win`]: five-or-more in a row detection

pub mod line;
pub mod win;

// Re-exports for convenient access
pub use line::{probe_end, run_length, scan_run, Axis, LineEnd, Run, AXES};
pub use win::{check_winner, find_five_line_at_pos, WIN_LENGTH};
