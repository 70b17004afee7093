use crate::board::CellState;

/// Neighbor count that brings a dead cell to life.
pub const BIRTH: u8 = 3;

/// Neighbor counts that keep a live cell alive.
pub const SURVIVE: [u8; 2] = [2, 3];

/// Conway's B3/S23 transition for a single cell.
pub fn next_state(cell: CellState, alive_neighbors: u8) -> CellState {
    let alive = match cell {
        CellState::Alive => SURVIVE.contains(&alive_neighbors),
        CellState::Dead => alive_neighbors == BIRTH,
    };

    CellState::from(alive)
}
