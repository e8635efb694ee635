//! Shared helpers for integration tests

use foxsheep::Board;

/// A mid-game position: the fox has advanced and two sheep are gone.
pub fn midgame_board() -> Board {
    Board::from_rows(
        "#########\n\
         ###...###\n\
         ###...###\n\
         #.......#\n\
         #...F...#\n\
         #.SS.SS.#\n\
         ###SSS###\n\
         ###SSS###\n\
         #########",
    )
    .expect("valid diagram")
}
