use std::cmp::Ordering;

use log::{debug, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::scalar::Integer;
use super::{Randomizer, Validate};
use crate::error::FixtureError;

/// Generator of fixed-length sequences.
///
/// Element `i` is the `i`-th value drawn from `generator`, in index order.
/// When `sorted` is set, the sequence is sorted ascending before it is returned.
///
/// The element generator can be any `Randomizer`, including another array:
/// `Array1D<Array1D<Integer>>` yields a `Vec<Vec<i64>>`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Array1D<G = Integer> {
	/// Number of elements in every generated sequence.
	count: usize,
	/// Element generator, consulted once per element.
	generator: G,
	/// Whether sequences are sorted ascending before being returned.
	sorted: bool,
}

impl<G> Array1D<G> {
	/// Creates an unsorted generator of `count` elements.
	pub fn new(count: usize, generator: G) -> Self {
		debug!("array generator of {} elements", count);
		Self { count, generator, sorted: false }
	}

	/// Enables or disables ascending sort of each generated sequence.
	pub fn sorted(mut self, sorted: bool) -> Self {
		self.sorted = sorted;
		self
	}

	pub fn count(&self) -> usize {
		self.count
	}

	pub fn generator(&self) -> &G {
		&self.generator
	}

	pub fn is_sorted(&self) -> bool {
		self.sorted
	}
}

impl Default for Array1D<Integer> {
	/// Ten digits, unsorted.
	fn default() -> Self {
		Self::new(10, Integer::default())
	}
}

impl<G: Validate> Validate for Array1D<G> {
	fn validate(&self) -> Result<(), FixtureError> {
		self.generator.validate()
	}
}

impl<G> Randomizer for Array1D<G>
where
	G: Randomizer,
	G::Output: PartialOrd,
{
	type Output = Vec<G::Output>;

	/// Elements without a defined order (never produced by the scalar
	/// generators of this crate) compare as equal when sorting.
	fn create_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output {
		let mut array: Vec<G::Output> = (0..self.count)
			.map(|_| self.generator.create_with(rng))
			.collect();

		if self.sorted {
			array.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
		}

		trace!("generated array of {} elements (sorted: {})", array.len(), self.sorted);
		array
	}
}

/// Generator of `rows x columns` grids.
///
/// Each row is an independent `Array1D` result of `columns` elements, so
/// sorting applies within a row, never across rows.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Array2D<G = Integer> {
	/// Number of rows in every generated grid.
	rows: usize,
	/// Row generator; its count is the number of columns.
	row: Array1D<G>,
}

impl<G> Array2D<G> {
	/// Creates an unsorted generator of `rows` rows with `columns` elements each.
	pub fn new(rows: usize, columns: usize, generator: G) -> Self {
		debug!("grid generator of {}x{}", rows, columns);
		Self { rows, row: Array1D::new(columns, generator) }
	}

	/// Enables or disables per-row ascending sort.
	pub fn sorted(mut self, sorted: bool) -> Self {
		self.row = self.row.sorted(sorted);
		self
	}

	pub fn rows(&self) -> usize {
		self.rows
	}

	pub fn columns(&self) -> usize {
		self.row.count()
	}

	pub fn generator(&self) -> &G {
		self.row.generator()
	}

	pub fn is_sorted(&self) -> bool {
		self.row.is_sorted()
	}
}

impl Default for Array2D<Integer> {
	/// 10x10 digits, unsorted.
	fn default() -> Self {
		Self::new(10, 10, Integer::default())
	}
}

impl<G: Validate> Validate for Array2D<G> {
	fn validate(&self) -> Result<(), FixtureError> {
		self.row.validate()
	}
}

impl<G> Randomizer for Array2D<G>
where
	G: Randomizer,
	G::Output: PartialOrd,
{
	type Output = Vec<Vec<G::Output>>;

	fn create_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output {
		(0..self.rows).map(|_| self.row.create_with(rng)).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::randomizer::scalar::{Double, Text};
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn test_array1d_length() {
		let array = Array1D::new(25, Integer::default());
		assert_eq!(array.create().len(), 25);
		assert!(Array1D::new(0, Integer::default()).create().is_empty());
	}

	#[test]
	fn test_array1d_sorted_is_non_decreasing() {
		let array = Array1D::new(200, Integer::new(-50, 50).unwrap()).sorted(true);
		let mut rng = StdRng::seed_from_u64(42);

		for _ in 0..20 {
			let values = array.create_with(&mut rng);
			assert_eq!(values.len(), 200);
			assert!(values.windows(2).all(|w| w[0] <= w[1]));
		}
	}

	#[test]
	fn test_array1d_sorted_doubles_and_strings() {
		let doubles = Array1D::new(50, Double::default()).sorted(true).create_seeded(9);
		assert!(doubles.windows(2).all(|w| w[0] <= w[1]));

		let words = Array1D::new(20, Text::new(3, "abc").unwrap()).sorted(true).create_seeded(9);
		assert!(words.windows(2).all(|w| w[0] <= w[1]));
	}

	#[test]
	fn test_array1d_keeps_generation_order_when_unsorted() {
		let array = Array1D::new(30, Integer::new(0, 1_000).unwrap());
		let integer = Integer::new(0, 1_000).unwrap();

		let mut rng = StdRng::seed_from_u64(5);
		let expected: Vec<i64> = (0..30).map(|_| integer.create_with(&mut rng)).collect();

		assert_eq!(array.create_seeded(5), expected);
	}

	#[test]
	fn test_sorted_setter_is_idempotent() {
		let array = Array1D::<Integer>::default().sorted(true).sorted(true);
		assert!(array.is_sorted());
		assert!(!array.sorted(false).is_sorted());
	}

	#[test]
	fn test_array1d_default() {
		let array = Array1D::<Integer>::default();
		assert_eq!(array.count(), 10);
		assert_eq!(array.generator(), &Integer::default());
		assert!(!array.is_sorted());
	}

	#[test]
	fn test_nested_array1d() {
		let nested = Array1D::new(4, Array1D::new(3, Integer::default())).sorted(true);
		let values = nested.create_seeded(11);

		assert_eq!(values.len(), 4);
		assert!(values.iter().all(|row| row.len() == 3));
		assert!(values.windows(2).all(|w| w[0] <= w[1]));
	}

	#[test]
	fn test_array2d_shape() {
		let grid = Array2D::new(3, 7, Integer::default());
		let values = grid.create();

		assert_eq!(values.len(), 3);
		assert!(values.iter().all(|row| row.len() == 7));
	}

	#[test]
	fn test_array2d_sorts_each_row_independently() {
		let grid = Array2D::new(8, 12, Integer::new(0, 100).unwrap()).sorted(true);
		let values = grid.create_seeded(17);

		for row in &values {
			assert!(row.windows(2).all(|w| w[0] <= w[1]));
		}
	}

	#[test]
	fn test_array2d_default() {
		let grid = Array2D::<Integer>::default();
		assert_eq!((grid.rows(), grid.columns()), (10, 10));
		assert!(!grid.is_sorted());
		assert!(grid.sorted(true).is_sorted());
	}

	#[test]
	fn test_array2d_zero_rows() {
		assert!(Array2D::new(0, 5, Integer::default()).create().is_empty());
	}
}
