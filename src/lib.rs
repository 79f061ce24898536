#![warn(missing_docs)]

//! # `lightemall`
//!
//! The board engine of a wire rotation puzzle in the style of Light 'Em All.
//! A rectangular grid of tiles each carries wires on some of its four sides; the player rotates tiles
//! until every tile is connected to a movable power station and the whole board lights up.
//!
//! Begin by configuring a [`BoardBuilder`] and calling [`build()`](BoardBuilder::build) to obtain a scrambled [`Board`].
//! Drive it with [`rotate_tile_at`](Board::rotate_tile_at) and [`move_power_station`](Board::move_power_station),
//! and read [`tile_at`](Board::tile_at) snapshots back for display.
//! Rendering, input and the event loop are left to the caller; with the `wasm` feature, [`WasmBoard`](wasm::WasmBoard) exposes the same contract to JavaScript.
//!
//! # Internals
//! A board is generated as follows:
//!
//! 1. Every pair of adjacent tiles becomes a candidate edge with a random weight.
//! 2. Kruskal's algorithm, backed by a path-compressing disjoint set, picks a minimum spanning tree from the candidates.
//! Every tile is therefore reachable from every other through exactly one path.
//! 3. The tree is baked into the tiles as wires: each tree edge sets the facing wires of both its tiles.
//! 4. The longest path through the tree fixes the power radius, used by front ends to shade tiles by distance.
//! 5. Every tile is rotated a random number of quarter turns. The tree is still there, only hidden.
//!
//! Two tiles are connected only when both carry a wire on their shared side.
//! Power is flooded from the station along such connections after every move, and the board is won once every tile is powered.

pub use board::{Board, BoardError, GameState};
pub use builder::{BoardBuilder, BuilderInvalidReason};
pub use direction::Direction;
pub use location::{Dimension, Location};
pub use maze::{Edge, Weight, DEFAULT_MAX_WEIGHT};
pub use tile::Tile;

pub(crate) mod board;
pub(crate) mod direction;
pub(crate) mod graph;
pub(crate) mod location;
pub(crate) mod maze;
pub(crate) mod power;
pub(crate) mod tile;
pub(crate) mod union_find;
pub mod builder;
#[cfg(feature = "wasm")]
pub mod wasm;
