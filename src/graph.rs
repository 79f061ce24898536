//! Traversals over the live wiring of a grid.
//!
//! Two tiles are connected when they are adjacent and both carry a wire on the shared side.
//! A wire that faces a bare side, or the edge of the board, connects nothing.
//! Every traversal clears the `visited` flag of every tile on entry, so calls never leak state into one another.

use std::collections::VecDeque;

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;

use crate::direction::Direction;
use crate::location::Location;
use crate::maze::Edge;
use crate::tile::Tile;

/// The neighbors of `location` joined to it by matching wires, together with the direction each lies in.
pub(crate) fn connected_neighbors(grid: &Array2<Tile>, location: Location) -> impl Iterator<Item = (Direction, Location)> + '_ {
    let tile = grid.get(location.as_index());

    Direction::VARIANTS.iter()
        .filter(move |direction| tile.is_some_and(|tile| tile.has_wire(**direction)))
        .filter_map(move |direction| {
            let neighbor = direction.attempt_from(location);
            grid.get(neighbor.as_index())
                .filter(|other| other.has_wire(direction.invert()))
                .map(|_| (*direction, neighbor))
        })
}

pub(crate) fn reset_visited(grid: &mut Array2<Tile>) {
    grid.map_inplace(|tile| tile.visited = false);
}

/// Depth-first sweep from `start`, returning the tile reached at the greatest depth, that depth in edges,
/// and every tile entered along the way.
///
/// Only tiles not yet marked in `seen` are entered, and each is marked as it is entered, so cycles terminate.
fn deepest_from(grid: &Array2<Tile>, seen: &mut Array2<bool>, start: Location) -> (Location, usize, Vec<Location>) {
    let mut deepest = (start, 0);
    let mut entered = vec![start];
    let mut stack = vec![(start, 0)];
    seen[start.as_index()] = true;

    while let Some((location, depth)) = stack.pop() {
        if depth > deepest.1 {
            deepest = (location, depth);
        }

        for (_, neighbor) in connected_neighbors(grid, location) {
            if !seen[neighbor.as_index()] {
                seen[neighbor.as_index()] = true;
                entered.push(neighbor);
                stack.push((neighbor, depth + 1));
            }
        }
    }

    (deepest.0, deepest.1, entered)
}

/// The longest simple path, in edges, through the connected wiring of `grid`, maximized over every component.
///
/// Each component is swept twice: once from its first tile in row-major order to find the tile farthest from it,
/// and again from that tile. On acyclic wiring, such as a freshly generated board, this is exactly the tree's diameter.
/// Cycles introduced by rotations make it a lower bound.
///
/// Every tile is left `visited`. The scratch marks of each sweep are cleared tile by tile, so the whole pass stays linear in the tile count.
pub(crate) fn longest_path(grid: &mut Array2<Tile>) -> usize {
    reset_visited(grid);
    let mut seen = grid.map(|_| false);
    let mut longest = 0;

    for index in 0..grid.len() {
        let start = Location::new(index / grid.ncols(), index % grid.ncols());
        if grid[start.as_index()].visited {
            continue;
        }

        let (far_end, _, component) = deepest_from(grid, &mut seen, start);
        for location in &component {
            seen[location.as_index()] = false;
            grid[location.as_index()].visited = true;
        }

        let (_, length, component) = deepest_from(grid, &mut seen, far_end);
        for location in &component {
            seen[location.as_index()] = false;
        }
        longest = longest.max(length);
    }

    longest
}

/// Length in edges of the shortest connected path from `start` to `target`, or [`None`] when no such path exists.
///
/// Breadth-first; each newly reached tile records the edge it was reached through, and the path is walked back from `target` once it is dequeued.
pub(crate) fn shortest_path_length(grid: &mut Array2<Tile>, start: Location, target: Location) -> Option<usize> {
    reset_visited(grid);
    grid.get_mut(start.as_index())?.visited = true;

    let mut came_from: Array2<Option<Edge>> = Array2::from_elem(grid.raw_dim(), None);
    let mut worklist = VecDeque::from([start]);

    while let Some(next) = worklist.pop_front() {
        if next == target {
            return Some(reconstruct(&came_from, target));
        }

        let neighbors = connected_neighbors(grid, next).map(|(_, neighbor)| neighbor).collect_vec();
        for neighbor in neighbors {
            let tile = &mut grid[neighbor.as_index()];
            if !tile.visited {
                tile.visited = true;
                came_from[neighbor.as_index()] = Some(Edge { from: next, to: neighbor, weight: 0 });
                worklist.push_back(neighbor);
            }
        }
    }

    None
}

fn reconstruct(came_from: &Array2<Option<Edge>>, target: Location) -> usize {
    let mut length = 0;
    let mut current = target;

    while let Some(edge) = came_from[current.as_index()] {
        length += 1;
        current = edge.from;
    }

    length
}
