//! Cell evaluation for the move evaluator

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_cell, line_shapes, position_score, CellEval, LineShape};
pub use patterns::{Pattern, PatternScore};
