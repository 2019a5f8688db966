//! Replayable fixtures.
//!
//! A `Recipe` pairs a generator configuration with a seed. Replaying it
//! always yields the same fixture, and it encodes to a short `postcard`
//! byte string that a failing test can print and a later run can decode.

use log::debug;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::FixtureError;
use crate::randomizer::{Randomizer, Validate};

/// A generator configuration and the seed that reproduces its output.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recipe<G> {
	seed: u64,
	generator: G,
}

impl<G> Recipe<G> {
	/// Pairs `generator` with an explicit seed.
	pub fn new(generator: G, seed: u64) -> Self {
		Self { seed, generator }
	}

	/// Pairs `generator` with a seed drawn from the thread-local source.
	pub fn random(generator: G) -> Self {
		Self::new(generator, rand::rng().random())
	}

	pub fn seed(&self) -> u64 {
		self.seed
	}

	pub fn generator(&self) -> &G {
		&self.generator
	}

	/// Generates the fixture described by this recipe.
	pub fn create(&self) -> G::Output
	where
		G: Randomizer,
	{
		self.generator.create_seeded(self.seed)
	}
}

impl<G: Serialize> Recipe<G> {
	/// Encodes the recipe with `postcard`.
	///
	/// # Errors
	/// Returns `Encoding` if serialization fails.
	pub fn to_bytes(&self) -> Result<Vec<u8>, FixtureError> {
		let bytes = postcard::to_stdvec(self)?;
		debug!("encoded recipe (seed {}) into {} bytes", self.seed, bytes.len());
		Ok(bytes)
	}
}

impl<G: DeserializeOwned + Validate> Recipe<G> {
	/// Decodes a recipe produced by `to_bytes`.
	///
	/// The decoded configuration is validated again, since decoding does
	/// not go through the generator constructors.
	///
	/// # Errors
	/// - `Encoding` if the bytes are not a valid recipe for `G`
	/// - Any constructor error if the configuration breaks an invariant
	pub fn from_bytes(bytes: &[u8]) -> Result<Self, FixtureError> {
		let recipe: Self = postcard::from_bytes(bytes)?;
		recipe.generator.validate()?;
		debug!("decoded recipe with seed {}", recipe.seed);
		Ok(recipe)
	}
}
