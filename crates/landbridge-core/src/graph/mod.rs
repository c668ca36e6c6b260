//! Border graph and land-route resolution.
//!
//! [`build_graph`] turns country records into a [`BorderGraph`] (id → ordered
//! neighbor ids). [`shortest_path`] runs a breadth-first search over any
//! [`Adjacency`] source and returns the fewest-crossings [`Route`].
//!
//! # Example
//!
//! ```rust
//! use landbridge_core::graph::{shortest_path, BorderGraph, Route};
//!
//! let graph = BorderGraph::from_adjacency([
//!     ("A", vec!["B", "C"]),
//!     ("B", vec!["A", "D"]),
//!     ("C", vec!["A"]),
//!     ("D", vec!["B"]),
//! ]);
//!
//! let route = shortest_path(&graph, "A", "D");
//! assert_eq!(route.path().unwrap(), ["A", "B", "D"]);
//! assert_eq!(shortest_path(&graph, "A", "Z"), Route::NotFound);
//! ```

mod builder;
pub mod route;


pub use builder::{build_graph, BorderGraph};
pub use route::{shortest_path, Adjacency, Route};
