//! Shortest land route by breadth-first search.
//!
//! Provides the generic resolver via the [`Adjacency`] trait, so any
//! id → neighbors mapping can be searched without conversion.
//!
//! Among several equally short routes, the one returned is the first reached
//! when nodes are expanded in queue order and neighbors in adjacency-list
//! order. That choice is deterministic for a given graph but depends on the
//! order of each neighbor list.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use super::builder::BorderGraph;

/// Trait for route resolution: any id → neighbors mapping can implement this.
pub trait Adjacency {
    /// Returns `true` if `id` is a known country.
    fn contains(&self, id: &str) -> bool;

    /// Returns the ids bordering `id`, in order. Unknown ids have no neighbors.
    fn neighbors(&self, id: &str) -> &[String];
}

impl Adjacency for BorderGraph {
    fn contains(&self, id: &str) -> bool {
        BorderGraph::contains(self, id)
    }

    fn neighbors(&self, id: &str) -> &[String] {
        self.get(id).unwrap_or_default()
    }
}

impl Adjacency for HashMap<String, Vec<String>> {
    fn contains(&self, id: &str) -> bool {
        self.contains_key(id)
    }

    fn neighbors(&self, id: &str) -> &[String] {
        self.get(id).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Outcome of a route query.
///
/// `NotFound` is an ordinary result: the destination is unreachable, or one
/// of the ids is not in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Ids from source to destination, both included.
    Found(Vec<String>),
    /// No land route exists.
    NotFound,
}

impl Route {
    /// Returns `true` if a route was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns the ids along the route, if any.
    #[must_use]
    pub fn path(&self) -> Option<&[String]> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }

    /// Returns the number of border crossings (path length minus one).
    #[must_use]
    pub fn hop_count(&self) -> Option<usize> {
        self.path().map(|path| path.len().saturating_sub(1))
    }

    /// Consumes the route and returns the ids, if any.
    #[must_use]
    pub fn into_path(self) -> Option<Vec<String>> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }
}

/// Finds the shortest route from `source` to `destination`.
///
/// Returns `Route::Found([source])` when both ids are equal and known, and
/// `Route::NotFound` when either id is unknown or the search exhausts the
/// reachable component. Runs in O(V + E) over that component.
///
/// Each id is settled the first time it is discovered and its predecessor
/// recorded; the path is rebuilt by walking predecessors back from the
/// destination. This yields the same route as expanding a queue of full
/// paths while marking ids visited only on dequeue.
#[must_use]
pub fn shortest_path<G>(graph: &G, source: &str, destination: &str) -> Route
where
    G: Adjacency + ?Sized,
{
    if !graph.contains(source) || !graph.contains(destination) {
        tracing::debug!(source, destination, "Unknown country id, no route");
        return Route::NotFound;
    }

    // id -> predecessor on the first route that reached it (None for source).
    let mut predecessors: HashMap<&str, Option<&str>> = HashMap::new();
    let mut queue = VecDeque::new();

    predecessors.insert(source, None);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if current == destination {
            let path = reconstruct_path(&predecessors, current);
            tracing::debug!(
                source,
                destination,
                hops = path.len() - 1,
                discovered = predecessors.len(),
                "Land route found"
            );
            return Route::Found(path);
        }

        for neighbor in graph.neighbors(current) {
            if let Entry::Vacant(slot) = predecessors.entry(neighbor.as_str()) {
                slot.insert(Some(current));
                queue.push_back(neighbor.as_str());
            }
        }
    }

    tracing::debug!(
        source,
        destination,
        discovered = predecessors.len(),
        "Reachable component exhausted, no route"
    );
    Route::NotFound
}

fn reconstruct_path(predecessors: &HashMap<&str, Option<&str>>, destination: &str) -> Vec<String> {
    let mut path = vec![destination.to_string()];
    let mut current = destination;
    while let Some(Some(previous)) = predecessors.get(current) {
        path.push((*previous).to_string());
        current = *previous;
    }
    path.reverse();
    path
}
