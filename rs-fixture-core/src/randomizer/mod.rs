//! Generator configurations for randomized fixtures.
//!
//! This module provides:
//! - The shared `Randomizer` contract (`create`, `create_with`, `create_seeded`)
//! - Scalar generators (`Integer`, `Double`, `Text`)
//! - Array generators (`Array1D`, `Array2D`)
//! - The adjacency-matrix generator (`Graph`)

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::FixtureError;

/// Scalar generators: integers, doubles and strings.
pub mod scalar;

/// One- and two-dimensional array generators.
///
/// Both compose an element generator and can sort their output.
pub mod array;

/// Random graph generator producing adjacency matrices.
pub mod graph;

/// A configured generator producing a fresh random value on every call.
///
/// Only `create_with` is required: it receives the uniform random source
/// to draw from. `create` and `create_seeded` are conveniences built on it.
///
/// # Invariants
/// - Creating a value never changes the configuration (`&self`)
/// - Two calls never share output allocations
pub trait Randomizer {
	/// Type of the generated values.
	type Output;

	/// Generates a value using the given random source.
	fn create_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output;

	/// Generates a value using the thread-local random source.
	fn create(&self) -> Self::Output {
		self.create_with(&mut rand::rng())
	}

	/// Generates a value from a `StdRng` seeded with `seed`.
	///
	/// The same configuration and seed always produce the same value.
	fn create_seeded(&self, seed: u64) -> Self::Output {
		self.create_with(&mut StdRng::seed_from_u64(seed))
	}
}

/// Configuration check shared by all generators.
///
/// Constructors call it before returning, and decoded recipes call it
/// again since deserialization bypasses the constructors.
pub trait Validate {
	/// Returns an error if the configuration breaks a generator invariant.
	fn validate(&self) -> Result<(), FixtureError>;
}
