//! Component tracking for spanning tree construction.

use itertools::Itertools;
use ndarray::Array2;

use crate::location::Location;

/// A disjoint set over every location of a grid, stored as a representative per cell.
///
/// Lookups compress paths. Unions do not balance by rank or size; boards stay small enough that compression alone keeps chains short.
#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    representatives: Array2<Location>,
}

impl DisjointSet {
    /// Every location starts as its own component.
    pub(crate) fn new(shape: (usize, usize)) -> Self {
        Self {
            representatives: Array2::from_shape_fn(shape, Location::from),
        }
    }

    /// The representative of the component holding `location`.
    ///
    /// Every location visited on the way to the root is repointed directly at the root before returning.
    pub(crate) fn find(&mut self, location: Location) -> Location {
        let mut root = location;
        while self.representatives[root.as_index()] != root {
            root = self.representatives[root.as_index()];
        }

        let mut current = location;
        while current != root {
            let next = self.representatives[current.as_index()];
            self.representatives[current.as_index()] = root;
            current = next;
        }

        root
    }

    /// Merge two components given their representatives; `from`'s component is hung under `to`.
    pub(crate) fn union(&mut self, from: Location, to: Location) {
        debug_assert_eq!(self.representatives[from.as_index()], from);
        self.representatives[from.as_index()] = to;
    }

    /// Number of distinct components.
    pub(crate) fn component_count(&mut self) -> usize {
        let locations = self.representatives.indexed_iter().map(|(index, _)| Location::from(index)).collect_vec();
        locations.into_iter().filter(|location| self.find(*location) == *location).count()
    }
}
