use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Randomizer, Validate};
use crate::error::FixtureError;

/// Uniform integer generator over an inclusive range.
///
/// # Invariants
/// - `min <= max`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Integer {
	/// Lowest value that can be drawn.
	min: i64,
	/// Highest value that can be drawn.
	max: i64,
}

impl Integer {
	/// Creates a generator drawing from `[min, max]`.
	///
	/// # Errors
	/// Returns `InvalidRange` if `min > max`.
	pub fn new(min: i64, max: i64) -> Result<Self, FixtureError> {
		let integer = Self { min, max };
		integer.validate()?;
		debug!("integer generator over [{}, {}]", min, max);
		Ok(integer)
	}

	pub fn min(&self) -> i64 {
		self.min
	}

	pub fn max(&self) -> i64 {
		self.max
	}
}

impl Default for Integer {
	/// Digits `1..=9`.
	fn default() -> Self {
		Self { min: 1, max: 9 }
	}
}

impl Validate for Integer {
	fn validate(&self) -> Result<(), FixtureError> {
		if self.min > self.max {
			return Err(FixtureError::invalid_range(self.min, self.max));
		}
		Ok(())
	}
}

impl Randomizer for Integer {
	type Output = i64;

	fn create_with<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
		rng.random_range(self.min..=self.max)
	}
}

/// Uniform floating-point generator over `[min, max]`.
///
/// # Invariants
/// - Both bounds are finite, and so is `max - min`
/// - `min <= max`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Double {
	/// Lower bound of the range.
	min: f64,
	/// Upper bound of the range.
	max: f64,
}

impl Double {
	/// Creates a generator drawing from `[min, max]`.
	///
	/// # Errors
	/// Returns `InvalidRange` if `min > max`, a bound is NaN or infinite,
	/// or the range is too wide for `max - min` to be finite.
	pub fn new(min: f64, max: f64) -> Result<Self, FixtureError> {
		let double = Self { min, max };
		double.validate()?;
		debug!("double generator over [{}, {}]", min, max);
		Ok(double)
	}

	pub fn min(&self) -> f64 {
		self.min
	}

	pub fn max(&self) -> f64 {
		self.max
	}
}

impl Default for Double {
	/// Unit interval `[0.0, 1.0]`.
	fn default() -> Self {
		Self { min: 0.0, max: 1.0 }
	}
}

impl Validate for Double {
	fn validate(&self) -> Result<(), FixtureError> {
		let span_is_finite = (self.max - self.min).is_finite();
		if !self.min.is_finite() || !self.max.is_finite() || !span_is_finite || self.min > self.max {
			return Err(FixtureError::invalid_range(self.min, self.max));
		}
		Ok(())
	}
}

impl Randomizer for Double {
	type Output = f64;

	fn create_with<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
		rng.random_range(self.min..=self.max)
	}
}

/// Random string generator.
///
/// Each character is drawn independently and uniformly from `alphabet`
/// (with replacement). Repeating a character in the alphabet makes it
/// proportionally more likely.
///
/// # Invariants
/// - `alphabet` is not empty
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Text {
	/// Number of characters in every generated string.
	length: usize,
	/// Characters to draw from, duplicates included.
	alphabet: Vec<char>,
}

impl Text {
	/// Creates a generator of `length`-character strings over `alphabet`.
	///
	/// # Errors
	/// Returns `EmptyAlphabet` if `alphabet` has no characters.
	pub fn new(length: usize, alphabet: &str) -> Result<Self, FixtureError> {
		let text = Self { length, alphabet: alphabet.chars().collect() };
		text.validate()?;
		debug!("text generator: length {} over {} symbols", length, text.alphabet.len());
		Ok(text)
	}

	pub fn length(&self) -> usize {
		self.length
	}

	pub fn alphabet(&self) -> &[char] {
		&self.alphabet
	}
}

impl Default for Text {
	/// 16 lowercase ASCII letters.
	fn default() -> Self {
		Self { length: 16, alphabet: ('a'..='z').collect() }
	}
}

impl Validate for Text {
	fn validate(&self) -> Result<(), FixtureError> {
		if self.alphabet.is_empty() {
			return Err(FixtureError::EmptyAlphabet);
		}
		Ok(())
	}
}

impl Randomizer for Text {
	type Output = String;

	/// Panics on an empty alphabet, which `validate` rejects.
	fn create_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
		(0..self.length)
			.map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
			.collect()
	}
}
