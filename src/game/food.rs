use std::collections::HashSet;

use rand::Rng;

use super::state::{GameState, Position};

/// What happened when the spawner was asked to place food
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SowOutcome {
    /// Food was already on the board; nothing changed
    AlreadySown,
    /// Food placed at this cell
    Sown(Position),
    /// Snake and walls cover every cell
    BoardFull,
}

/// Place food on a random free cell.
///
/// Cells are drawn uniformly over the whole grid and redrawn until one is
/// clear of both snake and walls. A full board is reported before any
/// sampling starts, so the loop always terminates.
pub fn sow<R: Rng + ?Sized>(rng: &mut R, state: &mut GameState) -> SowOutcome {
    if state.food.is_some() {
        return SowOutcome::AlreadySown;
    }

    if free_cell_count(state) == 0 {
        return SowOutcome::BoardFull;
    }

    loop {
        let x = rng.gen_range(0..state.grid_width) as i32;
        let y = rng.gen_range(0..state.grid_height) as i32;
        let pos = Position::new(x, y);

        if state.is_free(pos) {
            state.food = Some(pos);
            return SowOutcome::Sown(pos);
        }
    }
}

/// Cells left over once snake and walls are taken out of the grid
pub fn free_cell_count(state: &GameState) -> usize {
    let occupied: HashSet<Position> = state
        .walls()
        .iter()
        .chain(state.snake_body())
        .copied()
        .collect();

    (state.grid_width * state.grid_height).saturating_sub(occupied.len())
}
