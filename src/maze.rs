//! Maze generation: random candidate edges, Kruskal's minimum spanning tree, and baking the tree into tile wires.

use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use rand::Rng;

use crate::direction::Direction;
use crate::location::Location;
use crate::tile::Tile;
use crate::union_find::DisjointSet;

/// Weight of a candidate edge. Lower weights are taken into the spanning tree first.
pub type Weight = u32;

/// Exclusive upper bound of candidate edge weights unless configured otherwise.
pub const DEFAULT_MAX_WEIGHT: Weight = 50;

/// A weighted link between two orthogonally adjacent tiles.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Edge {
    #[allow(missing_docs)]
    pub from: Location,
    #[allow(missing_docs)]
    pub to: Location,
    #[allow(missing_docs)]
    pub weight: Weight,
}

/// Create one candidate edge per adjacent pair of tiles on a grid of `shape` `(rows, cols)`,
/// each with an independent weight drawn from `0..max_weight`.
///
/// Tiles are visited column by column, and each tile links to its right neighbor before its bottom neighbor.
/// That order fixes how `rng` is consumed, so equal seeds give equal mazes.
pub(crate) fn build_all_edges<R: Rng + ?Sized>(shape: (usize, usize), max_weight: Weight, rng: &mut R) -> Vec<Edge> {
    let (rows, cols) = shape;
    let mut edges = Vec::with_capacity((cols - 1) * rows + (rows - 1) * cols);

    for (col, row) in (0..cols).cartesian_product(0..rows) {
        let from = Location::new(row, col);
        for direction in Direction::FORWARD_VARIANTS {
            let to = direction.attempt_from(from);
            if to.row < rows && to.col < cols {
                edges.push(Edge { from, to, weight: rng.gen_range(0..max_weight) });
            }
        }
    }

    edges
}

/// Kruskal's algorithm: take edges in ascending weight order, keeping each one that joins two components,
/// until the tree spans every location of `shape`.
///
/// Ties keep the order of `edges`.
pub(crate) fn spanning_tree(edges: &[Edge], shape: (usize, usize)) -> UnGraphMap<Location, Weight> {
    let tile_count = shape.0 * shape.1;
    let mut tree = UnGraphMap::with_capacity(tile_count, tile_count.saturating_sub(1));
    let mut sets = DisjointSet::new(shape);

    for (row, col) in (0..shape.0).cartesian_product(0..shape.1) {
        tree.add_node(Location::new(row, col));
    }

    for edge in edges.iter().sorted_by_key(|edge| edge.weight) {
        if tree.edge_count() + 1 >= tile_count {
            break;
        }

        let from = sets.find(edge.from);
        let to = sets.find(edge.to);
        if from != to {
            tree.add_edge(edge.from, edge.to, edge.weight);
            sets.union(from, to);
        }
    }

    debug_assert_eq!(sets.component_count(), 1);
    tree
}

/// Set the wires of both endpoints of every edge in `tree`, so that the tiles alone encode the tree.
pub(crate) fn bake_connections<E>(grid: &mut Array2<Tile>, tree: &UnGraphMap<Location, E>) {
    for (a, b, _) in tree.all_edges() {
        // only adjacent tiles can share a wire
        let Some(direction) = Direction::direction_to(a, b) else {
            continue;
        };

        if let Some(tile) = grid.get_mut(a.as_index()) {
            tile.set_wire(direction);
        }
        if let Some(tile) = grid.get_mut(b.as_index()) {
            tile.set_wire(direction.invert());
        }
    }
}
