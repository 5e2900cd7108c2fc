//! Minimum-cost rectangular assignment (Kuhn-Munkres with potentials).
//!
//! Rows are added one at a time; each addition runs a Dijkstra-like search
//! over reduced costs `cost - u[row] - v[col]` and augments along the
//! cheapest path. The potentials stay feasible throughout, so the final
//! matching is optimal. Runs in O(rows² · cols).

use log::{debug, info};
use std::time::Instant;

use crate::error::AssignError;
use super::cost_matrix::CostMatrix;

/// Optimal row → column assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    /// Column chosen for every row, indexed by row
    pub columns: Vec<usize>,
    pub total_cost: u64,
}

impl Matching {
    /// (row, column) pairs, one per row
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.columns.iter().copied().enumerate()
    }
}

/// Solves the assignment problem for `matrix`, picking one distinct column per
/// row so that the summed cost is minimal. Needs `rows <= cols`.
pub fn solve(matrix: &CostMatrix) -> Result<Matching, AssignError> {
    let start_time = Instant::now();
    let n = matrix.rows();
    let m = matrix.cols();
    if n > m {
        return Err(AssignError::SolverIncomplete { row: m });
    }
    info!("Solving {}x{} assignment problem...", n, m);

    // 1-based internally; index 0 is the virtual column used as search root
    let mut u = vec![0i64; n + 1];
    let mut v = vec![0i64; m + 1];
    let mut row_of = vec![0usize; m + 1]; // row matched to column, 0 = free
    let mut way = vec![0usize; m + 1];

    for row in 1..=n {
        row_of[0] = row;
        let mut j0 = 0usize;
        let mut min_v = vec![i64::MAX; m + 1];
        let mut used = vec![false; m + 1];

        loop {
            used[j0] = true;
            let i0 = row_of[j0];
            let mut delta = i64::MAX;
            let mut j1 = 0usize;

            for j in 1..=m {
                if used[j] {
                    continue;
                }
                let reduced = matrix.get(i0 - 1, j - 1) as i64 - u[i0] - v[j];
                if reduced < min_v[j] {
                    min_v[j] = reduced;
                    way[j] = j0;
                }
                if min_v[j] < delta {
                    delta = min_v[j];
                    j1 = j;
                }
            }

            if j1 == 0 {
                return Err(AssignError::SolverIncomplete { row: row - 1 });
            }

            for j in 0..=m {
                if used[j] {
                    u[row_of[j]] += delta;
                    v[j] -= delta;
                } else {
                    min_v[j] -= delta;
                }
            }

            j0 = j1;
            if row_of[j0] == 0 {
                break;
            }
        }

        // flip the augmenting path back to the root
        loop {
            let j1 = way[j0];
            row_of[j0] = row_of[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut columns = vec![usize::MAX; n];
    for j in 1..=m {
        if row_of[j] != 0 {
            columns[row_of[j] - 1] = j - 1;
        }
    }
    if let Some(row) = columns.iter().position(|&c| c == usize::MAX) {
        return Err(AssignError::SolverIncomplete { row });
    }

    let total_cost = columns
        .iter()
        .enumerate()
        .map(|(row, &col)| matrix.get(row, col) as u64)
        .sum();

    debug!("Assignment solved in {:.2?}, total cost {}", start_time.elapsed(), total_cost);
    Ok(Matching { columns, total_cost })
}
