//! Line geometry shared by win detection and evaluation
//!
//! Everything here walks outward from a single cell along one of the four
//! axes. The walk is the same whether the cell is occupied (win detection)
//! or a hypothetical placement (evaluation).

use crate::board::{Board, Pos, Stone};

/// One of the four line directions through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left-right
    Horizontal,
    /// Up-down
    Vertical,
    /// Top-left to bottom-right (↘)
    DiagonalSE,
    /// Top-right to bottom-left (↙)
    DiagonalSW,
}

/// All axes, in the order they are checked
pub const AXES: [Axis; 4] = [
    Axis::Horizontal,
    Axis::Vertical,
    Axis::DiagonalSE,
    Axis::DiagonalSW,
];

impl Axis {
    /// Unit step (dr, dc) in the forward direction
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalSE => (1, 1),
            Axis::DiagonalSW => (1, -1),
        }
    }
}

/// What lies just past the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    /// Empty cell: the run can still grow this way
    Open,
    /// Board edge
    BlockedByEdge,
    /// A stone that is not part of the run
    BlockedByStone,
}

impl LineEnd {
    #[inline]
    pub fn is_blocked(self) -> bool {
        !matches!(self, LineEnd::Open)
    }
}

/// Count contiguous `color` stones strictly beyond `pos` along (dr, dc).
///
/// The cell at `pos` itself is not inspected.
pub fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> u32 {
    let mut count = 0;
    while let Some(next) = pos.offset(dr, dc, count as i32 + 1) {
        if board.get(next) != color {
            break;
        }
        count += 1;
    }
    count
}

/// Classify the cell `run + 1` steps from `pos` along (dr, dc).
pub fn probe_end(board: &Board, pos: Pos, dr: i32, dc: i32, run: u32) -> LineEnd {
    match pos.offset(dr, dc, run as i32 + 1) {
        None => LineEnd::BlockedByEdge,
        Some(cell) if board.is_empty(cell) => LineEnd::Open,
        Some(_) => LineEnd::BlockedByStone,
    }
}

/// A contiguous run through one cell along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub axis: Axis,
    /// Stones past the cell in the forward direction
    pub forward: u32,
    /// Stones past the cell in the backward direction
    pub backward: u32,
    pub forward_end: LineEnd,
    pub backward_end: LineEnd,
}

impl Run {
    /// Run length including the cell itself
    #[inline]
    pub fn length(&self) -> u32 {
        self.forward + self.backward + 1
    }

    /// Both ends closed off (edge or stone)
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.forward_end.is_blocked() && self.backward_end.is_blocked()
    }
}

/// Measure the `color` run through `pos` along `axis`, treating `pos` as
/// holding a `color` stone whatever it actually contains.
pub fn scan_run(board: &Board, pos: Pos, axis: Axis, color: Stone) -> Run {
    let (dr, dc) = axis.delta();
    let forward = run_length(board, pos, dr, dc, color);
    let backward = run_length(board, pos, -dr, -dc, color);
    Run {
        axis,
        forward,
        backward,
        forward_end: probe_end(board, pos, dr, dc, forward),
        backward_end: probe_end(board, pos, -dr, -dc, backward),
    }
}

/// Cells of the run through `pos`, ordered from the backward end.
pub fn run_cells(pos: Pos, run: &Run) -> Vec<Pos> {
    let (dr, dc) = run.axis.delta();
    let start = -(run.backward as i32);
    let end = run.forward as i32;
    (start..=end).filter_map(|d| pos.offset(dr, dc, d)).collect()
}
