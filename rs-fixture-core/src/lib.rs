//! Randomized test fixture generation library.
//!
//! This crate provides small, reusable generators for test inputs:
//! - Scalars (integers, doubles, strings) within configured bounds
//! - One- and two-dimensional arrays, optionally sorted
//! - Random graphs as adjacency matrices (directed or not, weighted or not)
//! - Seeded, replayable recipes for reproducing a fixture exactly
//!
//! Every generator implements [`Randomizer`]; configure it once, then call
//! `create()` as many times as needed.

/// Generator configurations and the shared `Randomizer` contract.
pub mod randomizer;

/// Compact, replayable generator + seed pairs.
pub mod recipe;

/// Error type returned by generator constructors and recipe decoding.
pub mod error;

pub use error::FixtureError;
pub use randomizer::array::{Array1D, Array2D};
pub use randomizer::graph::Graph;
pub use randomizer::scalar::{Double, Integer, Text};
pub use randomizer::{Randomizer, Validate};
pub use recipe::Recipe;
