//! Configuration of new boards.

use std::num::NonZero;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::location::{Dimension, Location};
use crate::maze::{Weight, DEFAULT_MAX_WEIGHT};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// The power station was pinned outside the bounds specified by `dims` on the builder.
    FeatureOutOfBounds,
    /// Edge weights were bounded by zero, leaving no weight to draw.
    EmptyWeightRange,
}

/// Configuration for a new [`Board`].
///
/// Setters mutate the builder and can be chained; the builder can be [`Clone`]d to save its state at some point.
/// Once a setter records a [`BuilderInvalidReason`], further setters do nothing and [`build`](Self::build) fails.
///
/// ```
/// use std::num::NonZero;
/// use lightemall::BoardBuilder;
///
/// let board = BoardBuilder::with_dims((NonZero::new(4).unwrap(), NonZero::new(3).unwrap()))
///     .seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(board.dims(), (4, 3));
/// assert_eq!(board.spanning_tree().edge_count(), 11);
/// ```
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    // width, height
    dims: (Dimension, Dimension),
    seed: Option<u64>,
    max_weight: Weight,
    power_station: Option<Location>,
    scramble: bool,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::new(5).unwrap(), NonZero::new(5).unwrap()))
    }
}

impl BoardBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(width, height)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            seed: None,
            max_weight: DEFAULT_MAX_WEIGHT,
            power_station: None,
            scramble: true,
            invalid_reasons: Default::default(),
        }
    }

    /// Seed the random generator, making the board reproducible. Without a seed, the generator draws from system entropy.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.seed = Some(seed);
        self
    }

    /// Draw candidate edge weights from `0..max_weight`.
    ///
    /// May cause the builder to enter an [`EmptyWeightRange`](BuilderInvalidReason::EmptyWeightRange) invalid state if `max_weight` is zero.
    pub fn max_weight(&mut self, max_weight: Weight) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if max_weight == 0 {
            self.invalid_reasons.push(BuilderInvalidReason::EmptyWeightRange);
            return self;
        }

        self.max_weight = max_weight;
        self
    }

    /// Place the power station at `location` instead of a random tile.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds.
    pub fn power_station(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if location.col >= self.dims.0.get() || location.row >= self.dims.1.get() {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.power_station = Some(location);
        self
    }

    /// Whether to randomly rotate every tile after generation. Defaults to `true`; without it the board starts solved.
    pub fn scramble(&mut self, scramble: bool) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.scramble = scramble;
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Generate a [`Board`] from this configuration, using a generator seeded as configured.
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        self.build_with_rng(&mut rng)
    }

    /// Generate a [`Board`] drawing every random choice from `rng`, ignoring any configured seed.
    ///
    /// The power station position is drawn first (row, then column) unless pinned, then every edge weight, then every scramble rotation.
    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Board::generate(self.dims, self.max_weight, self.power_station, self.scramble, rng))
    }
}
