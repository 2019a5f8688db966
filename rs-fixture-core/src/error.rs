use thiserror::Error;

/// Errors raised while configuring generators or decoding recipes.
///
/// Generation itself never fails: every check happens when a generator
/// is built (or decoded), so `create()` stays infallible.
#[derive(Debug, Error)]
pub enum FixtureError {
	/// Lower bound above upper bound, or a bound that is not finite.
	#[error("invalid range: min ({min}) must be <= max ({max})")]
	InvalidRange { min: String, max: String },

	/// A string generator needs at least one character to draw from.
	#[error("alphabet must not be empty")]
	EmptyAlphabet,

	/// Edge density is a probability.
	#[error("edge density must be between 0.0 and 1.0, got {0}")]
	InvalidDensity(f64),

	/// Recipe bytes could not be encoded or decoded.
	#[error("recipe encoding error: {0}")]
	Encoding(#[from] postcard::Error),
}

impl FixtureError {
	/// Builds an `InvalidRange` error from any displayable bounds.
	pub(crate) fn invalid_range(min: impl std::fmt::Display, max: impl std::fmt::Display) -> Self {
		Self::InvalidRange { min: min.to_string(), max: max.to_string() }
	}
}
