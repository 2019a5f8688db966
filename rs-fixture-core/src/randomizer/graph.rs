use log::{debug, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::scalar::Integer;
use super::{Randomizer, Validate};
use crate::error::FixtureError;

/// Random graph generator producing `nodes x nodes` adjacency matrices.
///
/// Cell `(i, j)` holds `0` when there is no edge from `i` to `j`, and
/// otherwise `1` (unweighted) or a value drawn from `generator` (weighted).
///
/// # Behavior
/// - The diagonal is always `0` (no self-loops)
/// - Directed: every off-diagonal cell is decided independently
/// - Undirected: only cells with `i < j` are decided, `(j, i)` mirrors them
/// - A decided cell holds an edge with probability `edge_density`
///
/// # Invariants
/// - `edge_density` is within `[0.0, 1.0]`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Graph<W = Integer> {
	/// Number of nodes (rows and columns of the matrix).
	nodes: usize,
	/// Probability that a decided cell holds an edge.
	edge_density: f64,
	/// Weight generator, only consulted for present edges when weighted.
	generator: W,
	/// Independent `(i, j)` and `(j, i)` cells when set, symmetric otherwise.
	directed: bool,
	/// Drawn weights for present edges when set, `1` otherwise.
	weighted: bool,
}

impl<W> Graph<W> {
	/// Creates a directed, unweighted graph generator.
	///
	/// `generator` provides edge weights once `weighted(true)` is set.
	///
	/// # Errors
	/// Returns `InvalidDensity` if `edge_density` is outside `[0.0, 1.0]`.
	pub fn new(nodes: usize, edge_density: f64, generator: W) -> Result<Self, FixtureError> {
		check_density(edge_density)?;
		debug!("graph generator: {} nodes, edge density {}", nodes, edge_density);
		Ok(Self { nodes, edge_density, generator, directed: true, weighted: false })
	}

	/// Chooses between independent `(i, j)` / `(j, i)` edges and a symmetric matrix.
	pub fn directed(mut self, directed: bool) -> Self {
		self.directed = directed;
		self
	}

	/// Chooses between `1` and a drawn weight for present edges.
	pub fn weighted(mut self, weighted: bool) -> Self {
		self.weighted = weighted;
		self
	}

	pub fn nodes(&self) -> usize {
		self.nodes
	}

	pub fn edge_density(&self) -> f64 {
		self.edge_density
	}

	pub fn generator(&self) -> &W {
		&self.generator
	}

	pub fn is_directed(&self) -> bool {
		self.directed
	}

	pub fn is_weighted(&self) -> bool {
		self.weighted
	}
}

impl<W> Graph<W>
where
	W: Randomizer,
	W::Output: From<u8>,
{
	/// Decides a single authoritative cell.
	fn draw_edge<R: Rng + ?Sized>(&self, rng: &mut R) -> W::Output {
		if rng.random::<f64>() >= self.edge_density {
			W::Output::from(0u8)
		} else if self.weighted {
			self.generator.create_with(rng)
		} else {
			W::Output::from(1u8)
		}
	}
}

fn check_density(edge_density: f64) -> Result<(), FixtureError> {
	if !(0.0..=1.0).contains(&edge_density) {
		return Err(FixtureError::InvalidDensity(edge_density));
	}
	Ok(())
}

impl Default for Graph<Integer> {
	/// 5 nodes, density 0.3, directed and unweighted, digit weights.
	fn default() -> Self {
		Self { nodes: 5, edge_density: 0.3, generator: Integer::default(), directed: true, weighted: false }
	}
}

impl<W: Validate> Validate for Graph<W> {
	fn validate(&self) -> Result<(), FixtureError> {
		check_density(self.edge_density)?;
		self.generator.validate()
	}
}

impl<W> Randomizer for Graph<W>
where
	W: Randomizer,
	W::Output: From<u8> + Clone,
{
	type Output = Vec<Vec<W::Output>>;

	fn create_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output {
		let mut graph: Vec<Vec<W::Output>> = Vec::with_capacity(self.nodes);

		// Row-major: when mirroring (i, j) with i > j, row j is already complete
		for i in 0..self.nodes {
			let mut row = Vec::with_capacity(self.nodes);
			for j in 0..self.nodes {
				let cell = if i == j {
					W::Output::from(0u8)
				} else if self.directed || i < j {
					self.draw_edge(rng)
				} else {
					graph[j][i].clone()
				};
				row.push(cell);
			}
			graph.push(row);
		}

		trace!("generated {}x{} adjacency matrix", self.nodes, self.nodes);
		graph
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::randomizer::scalar::Double;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn test_full_undirected_graph() {
		let graph = Graph::new(3, 1.0, Integer::default()).unwrap().directed(false);
		assert_eq!(graph.create(), vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);
	}

	#[test]
	fn test_full_directed_graph() {
		let graph = Graph::new(4, 1.0, Integer::default()).unwrap();
		let matrix = graph.create();

		for (i, row) in matrix.iter().enumerate() {
			for (j, cell) in row.iter().enumerate() {
				assert_eq!(*cell, if i == j { 0 } else { 1 });
			}
		}
	}

	#[test]
	fn test_empty_graph_regardless_of_flags() {
		for directed in [true, false] {
			for weighted in [true, false] {
				let graph = Graph::new(3, 0.0, Integer::default())
					.unwrap()
					.directed(directed)
					.weighted(weighted);
				assert_eq!(graph.create(), vec![vec![0; 3]; 3]);
			}
		}
	}

	#[test]
	fn test_undirected_graph_is_symmetric() {
		let graph = Graph::new(20, 0.5, Integer::new(1, 100).unwrap())
			.unwrap()
			.directed(false)
			.weighted(true);
		let mut rng = StdRng::seed_from_u64(42);

		for _ in 0..10 {
			let matrix = graph.create_with(&mut rng);
			for i in 0..20 {
				assert_eq!(matrix[i][i], 0);
				for j in 0..20 {
					assert_eq!(matrix[i][j], matrix[j][i]);
				}
			}
		}
	}

	#[test]
	fn test_directed_graph_can_be_asymmetric() {
		let graph = Graph::new(20, 0.5, Integer::default()).unwrap();
		let matrix = graph.create_seeded(3);

		let asymmetric = (0..20)
			.flat_map(|i| (0..20).map(move |j| (i, j)))
			.any(|(i, j)| matrix[i][j] != matrix[j][i]);
		assert!(asymmetric);
	}

	#[test]
	fn test_unweighted_edges_are_one() {
		let graph = Graph::new(15, 0.6, Integer::new(50, 60).unwrap()).unwrap();
		let matrix = graph.create_seeded(8);

		assert!(matrix.iter().flatten().all(|cell| *cell == 0 || *cell == 1));
	}

	#[test]
	fn test_weighted_edges_come_from_generator() {
		let graph = Graph::new(10, 1.0, Integer::new(50, 60).unwrap()).unwrap().weighted(true);
		let matrix = graph.create_seeded(8);

		for (i, row) in matrix.iter().enumerate() {
			for (j, cell) in row.iter().enumerate() {
				if i == j {
					assert_eq!(*cell, 0);
				} else {
					assert!((50..=60).contains(cell));
				}
			}
		}
	}

	#[test]
	fn test_weighted_double_graph() {
		let graph = Graph::new(6, 1.0, Double::new(2.0, 3.0).unwrap()).unwrap().weighted(true);
		let matrix = graph.create();

		assert_eq!(matrix.len(), 6);
		assert!(matrix.iter().all(|row| row.len() == 6));
		assert!(matrix.iter().enumerate().all(|(i, row)| row[i] == 0.0));
	}

	#[test]
	fn test_edge_density_matches_presence_rate() {
		let graph = Graph::new(60, 0.3, Integer::default()).unwrap();
		let matrix = graph.create_seeded(99);

		let edges: i64 = matrix.iter().flatten().sum();
		let rate = edges as f64 / (60.0 * 59.0);
		assert!((rate - 0.3).abs() < 0.05, "rate was {}", rate);
	}

	#[test]
	fn test_rejects_invalid_density() {
		assert!(matches!(Graph::new(3, 1.5, Integer::default()), Err(FixtureError::InvalidDensity(_))));
		assert!(matches!(Graph::new(3, -0.1, Integer::default()), Err(FixtureError::InvalidDensity(_))));
		assert!(Graph::new(3, f64::NAN, Integer::default()).is_err());
	}

	#[test]
	fn test_default_graph() {
		let graph = Graph::<Integer>::default();
		assert_eq!(graph.nodes(), 5);
		assert_eq!(graph.edge_density(), 0.3);
		assert!(graph.is_directed());
		assert!(!graph.is_weighted());
		assert_eq!(graph.create().len(), 5);
	}

	#[test]
	fn test_zero_and_single_node_graphs() {
		assert!(Graph::new(0, 0.5, Integer::default()).unwrap().create().is_empty());
		assert_eq!(Graph::new(1, 1.0, Integer::default()).unwrap().create(), vec![vec![0]]);
	}
}
