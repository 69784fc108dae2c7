//! Iterative-deepening negamax search with alpha-beta pruning.
//!
//! The searcher owns the transposition table and the wall-clock budget.
//! Each deepening iteration re-sorts the root children by their cached
//! evaluations, which the previous iteration overwrote with deeper
//! scores, so ordering improves as the search matures. The time budget
//! is checked between iterations only; a started iteration always runs
//! to completion.

use std::time::{Duration, Instant};

use log::debug;

use crate::tt::{Bound, TranspositionTable};
use crate::variant::Variant;

use super::eval::{SCORE_MAX, SCORE_MIN};
use super::types::{Color, Move};
use super::Position;

/// Soft wall-clock budget for one `find_best_move` call.
pub const DEFAULT_BUDGET: Duration = Duration::from_secs(5);

/// Scores beyond this are forced mates; deepening past them is pointless.
const MATE_THRESHOLD: i32 = 9000;

/// In standard chess the engine resigns at or below this score.
const RESIGN_THRESHOLD: i32 = -1000;

/// Summary of the last completed search.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// Deepest completed iteration.
    pub depth: u32,
    /// Positions visited.
    pub nodes: u64,
    /// Best score found, from the root side-to-move's perspective.
    pub score: i32,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// The search driver: transposition table, clock, and statistics.
pub struct Searcher {
    tt: TranspositionTable,
    budget: Duration,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::with_budget(DEFAULT_BUDGET)
    }

    /// A searcher with a custom time budget. Useful for tests and fast
    /// hint moves.
    #[must_use]
    pub fn with_budget(budget: Duration) -> Self {
        Searcher {
            tt: TranspositionTable::new(),
            budget,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Statistics from the most recent `find_best_move` call.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search the root position and return the best move, or `None` to
    /// resign. Resignation happens only in standard chess, when even the
    /// best line is at least a rook down.
    ///
    /// At least one iteration (depth 0) always completes, so the returned
    /// move is drawn from the root's legal moves whenever any exist.
    pub fn find_best_move(&mut self, root: &Position) -> Option<Move> {
        let root_moves = root.legal_moves();
        if root_moves.is_empty() {
            return None;
        }

        let start = Instant::now();
        self.nodes = 0;

        let mut children: Vec<Position> = root_moves
            .iter()
            .map(|&mv| root.make_child(mv, true))
            .collect();

        // The root calls negamax on positions where the opponent is to
        // move, so the color sign at the root is inverted.
        let child_colour = match root.side_to_move() {
            Color::White => -1,
            Color::Black => 1,
        };

        let mut best_move = root_moves[0];
        let mut best_score = i32::MIN;
        let mut depth = 0u32;

        loop {
            order_by_eval(&mut children);

            let mut alpha = SCORE_MIN;
            let beta = SCORE_MAX;
            let mut iter_best_move = best_move;
            let mut iter_best_score = i32::MIN;

            for child in &mut children {
                let score = -self.negamax(child, depth, -beta, -alpha, child_colour);
                alpha = alpha.max(score);
                // Feed the deeper score back so the next iteration sorts
                // on better information. Cached evals are stored from
                // White's perspective.
                child.set_eval(match root.side_to_move() {
                    Color::White => score,
                    Color::Black => -score,
                });
                if score > iter_best_score {
                    iter_best_score = score;
                    if let Some(mv) = child.last_move() {
                        iter_best_move = mv;
                    }
                }
            }

            best_move = iter_best_move;
            best_score = iter_best_score;
            debug!(
                "depth {depth}: best {best_move} score {best_score} ({} nodes)",
                self.nodes
            );

            if best_score > MATE_THRESHOLD || best_score < -MATE_THRESHOLD {
                break;
            }
            if start.elapsed() >= self.budget {
                break;
            }
            depth += 1;
        }

        self.stats = SearchStats {
            depth,
            nodes: self.nodes,
            score: best_score,
            elapsed: start.elapsed(),
        };
        self.tt.clear();

        if root.variant() == Variant::Standard && best_score <= RESIGN_THRESHOLD {
            return None;
        }
        Some(best_move)
    }

    /// Negamax with alpha-beta pruning and transposition-table cutoffs.
    /// `colour` is +1 when the side to move in `state` is White.
    pub(crate) fn negamax(
        &mut self,
        state: &mut Position,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        colour: i32,
    ) -> i32 {
        self.nodes += 1;
        let original_alpha = alpha;

        if let Some(entry) = self.tt.probe(state.hash(), depth) {
            match entry.bound {
                Bound::Exact => return entry.score,
                Bound::LowerBound => alpha = alpha.max(entry.score),
                Bound::UpperBound => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                return entry.score;
            }
        }

        if depth == 0 || state.legal_moves().is_empty() {
            return state.evaluate() * colour;
        }

        // Leaf children never read their own move lists; skip enumerating
        // them below depth 2.
        let mut children: Vec<Position> = state
            .legal_moves()
            .iter()
            .map(|&mv| state.make_child(mv, depth > 1))
            .collect();

        // Sorting near the leaves reorders little and stops paying for
        // itself.
        if depth > 2 {
            order_by_eval(&mut children);
        }

        let mut value = i32::MIN;
        for child in &mut children {
            value = value.max(-self.negamax(child, depth - 1, -beta, -alpha, -colour));
            alpha = value.max(alpha);
            if alpha >= beta {
                break;
            }
        }

        let bound = if value <= original_alpha {
            Bound::UpperBound
        } else if value >= beta {
            Bound::LowerBound
        } else {
            Bound::Exact
        };
        self.tt.store(state.hash(), depth, value, bound);
        value
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort children so the best refutation comes first for the side about to
/// move in each child: ascending by static eval where the child has White
/// to move, descending where it has Black.
fn order_by_eval(children: &mut [Position]) {
    for child in children.iter_mut() {
        child.evaluate();
    }
    children.sort_by_key(|child| match child.side_to_move() {
        Color::White => child.cached_eval(),
        Color::Black => -child.cached_eval(),
    });
}
