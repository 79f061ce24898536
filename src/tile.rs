use rand::Rng;

use crate::direction::Direction;

/// Glyphs for every combination of wires, indexed by the low four bits of [`Tile::mask`].
const GLYPHS: [char; 16] = [
    ' ', '╴', '╶', '─', '╵', '┘', '└', '┴', '╷', '┐', '┌', '┬', '│', '┤', '├', '┼',
];

/// A single square of the board, carrying a wire on any of its four sides.
///
/// Tiles are owned by their [`Board`](crate::Board); the values handed out by queries are snapshots.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tile {
    pub(crate) left: bool,
    pub(crate) right: bool,
    pub(crate) top: bool,
    pub(crate) bottom: bool,
    pub(crate) power_station: bool,
    pub(crate) powered: bool,
    // scratch flag for traversals; every traversal clears it before use
    pub(crate) visited: bool,
}

// the traversal scratch flag is not part of a tile's identity
impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.mask() == other.mask()
    }
}

impl Eq for Tile {}

impl Tile {
    /// A tile with the given wires, unpowered and without the power station.
    pub fn with_connections(left: bool, right: bool, top: bool, bottom: bool) -> Self {
        let mut tile = Self::default();
        tile.set_connections(left, right, top, bottom);
        tile
    }

    /// Overwrite all four wires at once.
    pub fn set_connections(&mut self, left: bool, right: bool, top: bool, bottom: bool) {
        self.left = left;
        self.right = right;
        self.top = top;
        self.bottom = bottom;
    }

    /// Turn the tile a quarter turn clockwise: the wire on the left moves to the top, the top to the right, and so on.
    pub fn rotate_clockwise(&mut self) {
        self.set_connections(self.bottom, self.top, self.left, self.right);
    }

    /// Turn the tile clockwise zero to three times, chosen uniformly from `rng`.
    pub fn rotate_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        // four turns is the identity, so there is no point drawing it
        for _ in 0..rng.gen_range(0..4) {
            self.rotate_clockwise();
        }
    }

    /// Whether a wire leaves this tile through `direction`.
    pub fn has_wire(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub(crate) fn set_wire(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.top = true,
            Direction::Down => self.bottom = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }

    #[allow(missing_docs)]
    pub fn left(&self) -> bool {
        self.left
    }

    #[allow(missing_docs)]
    pub fn right(&self) -> bool {
        self.right
    }

    #[allow(missing_docs)]
    pub fn top(&self) -> bool {
        self.top
    }

    #[allow(missing_docs)]
    pub fn bottom(&self) -> bool {
        self.bottom
    }

    /// Whether power reached this tile during the last propagation.
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    #[allow(missing_docs)]
    pub fn is_power_station(&self) -> bool {
        self.power_station
    }

    /// Number of sides carrying a wire. Rotation never changes it.
    pub fn wire_count(&self) -> usize {
        [self.left, self.right, self.top, self.bottom].into_iter().filter(|w| *w).count()
    }

    /// Pack the tile into one byte for renderers: bits 0 to 3 are the left, right, top and bottom wires,
    /// bit 4 is set when powered and bit 5 when the power station sits here.
    pub fn mask(&self) -> u8 {
        (self.left as u8)
            | (self.right as u8) << 1
            | (self.top as u8) << 2
            | (self.bottom as u8) << 3
            | (self.powered as u8) << 4
            | (self.power_station as u8) << 5
    }

    pub(crate) fn glyph(&self) -> char {
        GLYPHS[(self.mask() & 0b1111) as usize]
    }
}
