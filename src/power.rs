use itertools::Itertools;
use ndarray::Array2;

use crate::graph::connected_neighbors;
use crate::location::Location;
use crate::tile::Tile;

/// Recompute which tiles are powered: every tile is switched off, then power floods depth-first from `station` along connected wires.
///
/// The powered flag doubles as the visited mark, so cycles closed by rotations cannot loop forever.
pub(crate) fn update_power(grid: &mut Array2<Tile>, station: Location) {
    grid.map_inplace(|tile| tile.powered = false);

    let Some(tile) = grid.get_mut(station.as_index()) else {
        return;
    };
    tile.powered = true;

    let mut stack = vec![station];
    while let Some(location) = stack.pop() {
        let unpowered = connected_neighbors(grid, location)
            .map(|(_, neighbor)| neighbor)
            .filter(|neighbor| !grid[neighbor.as_index()].powered)
            .collect_vec();

        for neighbor in unpowered {
            grid[neighbor.as_index()].powered = true;
            stack.push(neighbor);
        }
    }
}

pub(crate) fn all_powered(grid: &Array2<Tile>) -> bool {
    grid.iter().all(Tile::is_powered)
}
