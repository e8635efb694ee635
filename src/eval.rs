//! Static position evaluation
//!
//! A weighted linear combination of five positional features shared by both
//! sides: the fox prefers high scores, the sheep prefer low ones. Weights
//! travel in an explicit [`EvalWeights`] value so concurrent searches can use
//! different tunings without shared mutable state.

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Weights of the five evaluation features.
///
/// The capture weight is negative: more capture opportunities for the fox
/// are bad for the sheep side, and the same scalar serves both perspectives.
///
/// # Examples
///
/// ```
/// use foxsheep::eval::EvalWeights;
///
/// let weights = EvalWeights::default().with_distance(30).with_capture(-20);
/// assert_eq!(weights.distance, 30);
/// assert_eq!(weights.separation, 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Average empty cells around each sheep
    pub separation: i32,
    /// Normalized inverse sheep count
    pub sheep_count: i32,
    /// Mean fox-to-sheep Manhattan distance
    pub distance: i32,
    /// Empty cells adjacent to the fox
    pub mobility: i32,
    /// Captures currently available to the fox (negative)
    pub capture: i32,
}

impl EvalWeights {
    pub fn with_separation(mut self, weight: i32) -> Self {
        self.separation = weight;
        self
    }

    pub fn with_sheep_count(mut self, weight: i32) -> Self {
        self.sheep_count = weight;
        self
    }

    pub fn with_distance(mut self, weight: i32) -> Self {
        self.distance = weight;
        self
    }

    pub fn with_mobility(mut self, weight: i32) -> Self {
        self.mobility = weight;
        self
    }

    pub fn with_capture(mut self, weight: i32) -> Self {
        self.capture = weight;
        self
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            separation: 14,
            sheep_count: 10,
            distance: 20,
            mobility: 10,
            capture: -10,
        }
    }
}

/// Score a position from the shared perspective (higher favors the fox).
///
/// With no sheep left the fox has won and the score is a defined 0 rather
/// than a division by zero.
pub fn evaluate(board: &Board, weights: &EvalWeights) -> i32 {
    let sheep_count = board.sheep_count();
    if sheep_count == 0 {
        return 0;
    }

    let sheep_ratio = (board.sheep_max() as f64 / sheep_count as f64).round() as i32;

    sheep_ratio * weights.sheep_count
        + board.fox_move_count() as i32 * weights.mobility
        + board.fox_capture_count() as i32 * weights.capture
        + board.sheep_separation() as i32 * weights.separation
        + board.avg_fox_sheep_distance() as i32 * weights.distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Action, Pos};

    #[test]
    fn canonical_start_is_the_regression_baseline() {
        // round(13/13)*10 + 4*10 + 0*(-10) + 1*14 + 3*20
        let board = Board::new();
        assert_eq!(evaluate(&board, &EvalWeights::default()), 124);
    }

    #[test]
    fn no_sheep_evaluates_to_zero() {
        let mut board = Board::from_rows(
            "#########\n\
             ###...###\n\
             ###...###\n\
             #...FS..#\n\
             #.......#\n\
             #.......#\n\
             ###...###\n\
             ###...###\n\
             #########",
        )
        .unwrap();
        board.apply(Action::new(Pos::new(3, 4), Pos::new(3, 6)));
        assert_eq!(board.sheep_count(), 0);
        assert_eq!(evaluate(&board, &EvalWeights::default()), 0);
    }

    #[test]
    fn more_fox_captures_strictly_decrease_the_score() {
        // Identical layouts except one capturable sheep becomes blocked.
        let one_capture = Board::from_rows(
            "#########\n\
             ###...###\n\
             ###...###\n\
             #.......#\n\
             #...FS..#\n\
             #.S.....#\n\
             ###...###\n\
             ###...###\n\
             #########",
        )
        .unwrap();
        let no_capture = Board::from_rows(
            "#########\n\
             ###...###\n\
             ###...###\n\
             #.......#\n\
             #...FSS.#\n\
             #.S.....#\n\
             ###...###\n\
             ###...###\n\
             #########",
        )
        .unwrap();
        assert_eq!(one_capture.fox_capture_count(), 1);
        assert_eq!(no_capture.fox_capture_count(), 0);

        // Isolate the capture feature: the diagrams also differ in sheep
        // count, separation and distance, so only the capture weight is on.
        let isolated = EvalWeights {
            separation: 0,
            sheep_count: 0,
            distance: 0,
            mobility: 0,
            capture: -10,
        };
        assert_eq!(evaluate(&one_capture, &isolated), -10);
        assert_eq!(evaluate(&no_capture, &isolated), 0);
    }

    #[test]
    fn greater_fox_sheep_distance_strictly_increases_the_score() {
        let near = Board::from_rows(
            "#########\n\
             ###...###\n\
             ###...###\n\
             #..F....#\n\
             #.......#\n\
             #..S....#\n\
             ###...###\n\
             ###...###\n\
             #########",
        )
        .unwrap();
        let far = Board::from_rows(
            "#########\n\
             ###.F.###\n\
             ###...###\n\
             #.......#\n\
             #.......#\n\
             #.....S.#\n\
             ###...###\n\
             ###...###\n\
             #########",
        )
        .unwrap();
        let isolated = EvalWeights {
            separation: 0,
            sheep_count: 0,
            distance: 20,
            mobility: 0,
            capture: 0,
        };
        assert!(far.avg_fox_sheep_distance() > near.avg_fox_sheep_distance());
        assert!(evaluate(&far, &isolated) > evaluate(&near, &isolated));
    }

    #[test]
    fn weight_builders_override_single_fields() {
        let weights = EvalWeights::default()
            .with_separation(1)
            .with_sheep_count(2)
            .with_mobility(3);
        assert_eq!(weights.separation, 1);
        assert_eq!(weights.sheep_count, 2);
        assert_eq!(weights.mobility, 3);
        assert_eq!(weights.distance, 20);
        assert_eq!(weights.capture, -10);
    }
}
