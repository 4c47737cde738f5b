//! Ant Colony Optimization on small weighted graphs.
//!
//! - **Shortest paths**: ants build simple paths from a start node to an
//!   end node; dead ends are an expected outcome, not an error.
//! - **Tours**: ants build closed tours that visit every node once.
//!
//! The trail, RNG, and best-route record are owned by one run, so
//! independent runs never share state. Runs are reproducible under a
//! fixed seed, including with the `parallel` feature.
//!
//! # Example
//!
//! ```
//! use u_aco::aco::{AcoConfig, AcoRunner, Goal, Graph};
//!
//! let graph = Graph::from_edges(4, &[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 1.0), (2, 3, 3.0)]).unwrap();
//! let config = AcoConfig::default().with_max_rounds(20).with_seed(7);
//! let result = AcoRunner::run(&graph, Goal::path(0, 3), &config).unwrap();
//! assert_eq!(result.best_path(), Some(&[0, 1, 3][..]));
//! ```

pub mod aco;
pub mod error;
pub mod random;

pub use error::{AcoError, Result};
