use std::fmt::{Display, Formatter};

use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use rand::Rng;

use crate::direction::Direction;
use crate::graph;
use crate::location::{Dimension, Location};
use crate::maze::{self, Edge, Weight};
use crate::power;
use crate::tile::Tile;

/// Errors raised by board queries and commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BoardError {
    /// A query or command named a tile outside the board. The board is left untouched.
    #[error("location {location} is outside the {width}x{height} board")]
    OutOfBounds {
        #[allow(missing_docs)]
        location: Location,
        #[allow(missing_docs)]
        width: usize,
        #[allow(missing_docs)]
        height: usize,
    },
}

/// Whether the board still needs work.
///
/// The state is re-evaluated after every mutation, so a won board returns to [`Playing`](GameState::Playing) if a later move breaks the circuit.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GameState {
    /// At least one tile is unpowered.
    Playing,
    /// Every tile is powered.
    Won,
}

/// A generated puzzle: a grid of [`Tile`]s, the spanning tree it was generated from, and the power station.
///
/// [`Board`]s should be built using a [`BoardBuilder`](crate::builder::BoardBuilder).
#[derive(Clone, Debug)]
pub struct Board {
    // indexed (row, col)
    pub(crate) grid: Array2<Tile>,
    // width, height
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) edges: Vec<Edge>,
    pub(crate) tree: UnGraphMap<Location, Weight>,
    pub(crate) power_station: Location,
    pub(crate) radius: usize,
    pub(crate) state: GameState,
}

impl Board {
    /// Generate, calibrate and scramble a board. `power_station` must already be in bounds when given.
    pub(crate) fn generate<R: Rng + ?Sized>(
        dims: (Dimension, Dimension),
        max_weight: Weight,
        power_station: Option<Location>,
        scramble: bool,
        rng: &mut R,
    ) -> Self {
        let (width, height) = (dims.0.get(), dims.1.get());
        let power_station = power_station.unwrap_or_else(|| {
            let row = rng.gen_range(0..height);
            let col = rng.gen_range(0..width);
            Location::new(row, col)
        });

        let mut grid = Array2::from_elem((height, width), Tile::default());
        let edges = maze::build_all_edges(grid.dim(), max_weight, rng);
        let tree = maze::spanning_tree(&edges, grid.dim());
        maze::bake_connections(&mut grid, &tree);
        debug_assert!(grid.len() == 1 || grid.iter().all(|tile| tile.wire_count() > 0));

        grid[power_station.as_index()].power_station = true;
        power::update_power(&mut grid, power_station);
        debug_assert!(power::all_powered(&grid));

        let radius = graph::longest_path(&mut grid) / 2;

        if scramble {
            grid.iter_mut().for_each(|tile| tile.rotate_random(rng));
        }

        log::debug!(
            "generated {}x{} board: {} candidate edges, {} tree edges, radius {}, power station at {}",
            width, height, edges.len(), tree.edge_count(), radius, power_station,
        );

        let mut board = Self {
            grid,
            dims,
            edges,
            tree,
            power_station,
            radius,
            state: GameState::Playing,
        };
        board.refresh();
        board
    }

    /// Wrap an already wired grid, placing the power station at `power_station`. The spanning tree is left empty.
    #[cfg(test)]
    pub(crate) fn from_grid(mut grid: Array2<Tile>, power_station: Location) -> Self {
        let dims = (
            Dimension::new(grid.ncols()).expect("grid has columns"),
            Dimension::new(grid.nrows()).expect("grid has rows"),
        );
        grid.map_inplace(|tile| tile.power_station = false);
        grid[power_station.as_index()].power_station = true;
        let radius = graph::longest_path(&mut grid) / 2;

        let mut board = Self {
            grid,
            dims,
            edges: Vec::new(),
            tree: UnGraphMap::new(),
            power_station,
            radius,
            state: GameState::Playing,
        };
        board.refresh();
        board
    }

    fn check_bounds(&self, location: Location) -> Result<(), BoardError> {
        match self.grid.get(location.as_index()) {
            Some(_) => Ok(()),
            None => Err(BoardError::OutOfBounds {
                location,
                width: self.dims.0.get(),
                height: self.dims.1.get(),
            }),
        }
    }

    /// Re-run power propagation and re-evaluate the win condition.
    fn refresh(&mut self) -> GameState {
        self.update_power();

        let state = if self.all_powered() { GameState::Won } else { GameState::Playing };
        if state != self.state {
            log::info!("board is now {:?}", state);
        }
        self.state = state;
        state
    }

    /// Board dimensions as `(width, height)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.dims.0.get(), self.dims.1.get())
    }

    /// A snapshot of the tile at `location`.
    pub fn tile_at(&self, location: Location) -> Result<Tile, BoardError> {
        self.check_bounds(location)?;
        Ok(self.grid[location.as_index()])
    }

    /// Snapshots of every tile, in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Location, Tile)> + '_ {
        self.grid.indexed_iter().map(|(index, tile)| (Location::from(index), *tile))
    }

    #[allow(missing_docs)]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[allow(missing_docs)]
    pub fn is_won(&self) -> bool {
        self.state == GameState::Won
    }

    #[allow(missing_docs)]
    pub fn power_station(&self) -> Location {
        self.power_station
    }

    /// Half the longest path through the spanning tree, rounded down. Fixed at generation, before scrambling.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Every candidate edge considered during generation, in creation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The spanning tree the board was generated from. Its nodes are every location of the board.
    pub fn spanning_tree(&self) -> &UnGraphMap<Location, Weight> {
        &self.tree
    }

    /// Switch every tile off, then flood power outward from the power station along connected wires.
    ///
    /// Calling this twice without touching any tile leaves the same tiles powered.
    pub fn update_power(&mut self) {
        power::update_power(&mut self.grid, self.power_station);
    }

    /// Whether every tile was powered by the last propagation.
    pub fn all_powered(&self) -> bool {
        power::all_powered(&self.grid)
    }

    /// The longest simple path through the current wiring. See [`Board::radius`] for the value fixed at generation.
    pub fn longest_path(&mut self) -> usize {
        graph::longest_path(&mut self.grid)
    }

    /// Number of connected steps on the shortest route from `start` to `target`, or `Ok(None)` if the wiring does not join them.
    pub fn shortest_path_length(&mut self, start: Location, target: Location) -> Result<Option<usize>, BoardError> {
        self.check_bounds(start)?;
        self.check_bounds(target)?;
        Ok(graph::shortest_path_length(&mut self.grid, start, target))
    }

    /// Number of connected steps from `location` to the power station, or `Ok(None)` if it is cut off.
    pub fn shortest_distance_to_power_station(&mut self, location: Location) -> Result<Option<usize>, BoardError> {
        self.shortest_path_length(location, self.power_station)
    }

    /// Rotate the tile at `location` a quarter turn clockwise, then recompute power and the game state.
    pub fn rotate_tile_at(&mut self, location: Location) -> Result<GameState, BoardError> {
        self.check_bounds(location)?;
        self.grid[location.as_index()].rotate_clockwise();
        log::trace!("rotated tile at {}", location);

        Ok(self.refresh())
    }

    /// Move the power station one tile in `direction`, if the wiring joins it to that tile.
    ///
    /// Both the station's tile and its neighbor must carry a wire on the shared side; otherwise this does nothing and returns `false`.
    pub fn move_power_station(&mut self, direction: Direction) -> bool {
        let target = graph::connected_neighbors(&self.grid, self.power_station)
            .find(|(towards, _)| *towards == direction)
            .map(|(_, neighbor)| neighbor);

        let Some(target) = target else {
            log::trace!("power station at {} cannot move {}", self.power_station, direction);
            return false;
        };

        self.grid[self.power_station.as_index()].power_station = false;
        self.grid[target.as_index()].power_station = true;
        log::trace!("power station moved {} from {} to {}", direction, self.power_station, target);
        self.power_station = target;

        self.refresh();
        true
    }

    /// Which tiles are powered, one line per row: `#` powered, `.` dark.
    pub fn power_map(&self) -> String {
        let mut out = String::with_capacity(self.grid.nrows() * (self.grid.ncols() + 1));

        for row in self.grid.rows() {
            out.extend(row.iter().map(|tile| if tile.powered { '#' } else { '.' }));
            out.push('\n');
        }

        out
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.grid.nrows() * (self.grid.ncols() + 1));

        for row in self.grid.rows() {
            out.extend(row.iter().map(Tile::glyph));
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
