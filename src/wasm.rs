//! Bindings for a browser front end, which owns rendering and input and asks the board for everything else.

use std::num::NonZero;

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::builder::BoardBuilder;
use crate::direction::Direction;
use crate::location::Location;

/// A [`Board`] as seen from JavaScript. Tiles are reported as the byte packed by [`Tile::mask`](crate::Tile::mask).
#[wasm_bindgen]
pub struct WasmBoard {
    inner: Board,
}

#[wasm_bindgen]
impl WasmBoard {
    /// Generate a scrambled board; a `seed` makes it reproducible.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize, seed: Option<u32>) -> Result<WasmBoard, JsError> {
        let (Some(width), Some(height)) = (NonZero::new(width), NonZero::new(height)) else {
            return Err(JsError::new("board dimensions must be nonzero"));
        };

        let mut builder = BoardBuilder::with_dims((width, height));
        if let Some(seed) = seed {
            builder.seed(seed.into());
        }
        let inner = builder.build()
            .map_err(|reasons| JsError::new(&format!("invalid board: {:?}", reasons)))?;

        Ok(Self { inner })
    }

    #[allow(missing_docs)]
    pub fn width(&self) -> usize {
        self.inner.dims().0
    }

    #[allow(missing_docs)]
    pub fn height(&self) -> usize {
        self.inner.dims().1
    }

    #[allow(missing_docs)]
    pub fn radius(&self) -> usize {
        self.inner.radius()
    }

    #[wasm_bindgen(js_name = isWon)]
    #[allow(missing_docs)]
    pub fn is_won(&self) -> bool {
        self.inner.is_won()
    }

    /// The packed tile at `(row, col)`.
    pub fn tile(&self, row: usize, col: usize) -> Result<u8, JsError> {
        Ok(self.inner.tile_at(Location::new(row, col))?.mask())
    }

    /// Every packed tile, in row-major order.
    pub fn tiles(&self) -> Uint8Array {
        let masks: Vec<u8> = self.inner.tiles().map(|(_, tile)| tile.mask()).collect();
        Uint8Array::from(masks.as_slice())
    }

    /// Rotate the tile at `(row, col)` clockwise; returns whether the board is now won.
    pub fn rotate(&mut self, row: usize, col: usize) -> Result<bool, JsError> {
        self.inner.rotate_tile_at(Location::new(row, col))?;
        Ok(self.inner.is_won())
    }

    /// Move the power station towards `direction`, one of `up`, `down`, `left` or `right`; returns whether it moved.
    #[wasm_bindgen(js_name = movePowerStation)]
    pub fn move_power_station(&mut self, direction: &str) -> Result<bool, JsError> {
        let direction: Direction = direction.parse()?;
        Ok(self.inner.move_power_station(direction))
    }

    /// Steps from `(row, col)` to the power station along connected wires, or `-1` if it is cut off.
    pub fn distance(&mut self, row: usize, col: usize) -> Result<i32, JsError> {
        let distance = self.inner.shortest_distance_to_power_station(Location::new(row, col))?;
        Ok(distance.map_or(-1, |steps| steps as i32))
    }
}
