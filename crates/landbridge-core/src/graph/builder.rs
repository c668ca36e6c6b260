//! Border graph construction from country records.

use std::collections::HashMap;

use crate::country::CountryRecord;

/// Adjacency mapping from country id to its bordering country ids.
///
/// Every id of the input record set is a key, even with no neighbors.
/// Neighbor ids are not required to be keys themselves: a border may point at
/// a country that was filtered out upstream, and traversal simply stops there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorderGraph {
    /// id -> neighbor ids, in provider order.
    adjacency: HashMap<String, Vec<String>>,
}

impl BorderGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from explicit `(id, neighbors)` pairs.
    ///
    /// Later pairs replace earlier ones with the same id.
    #[must_use]
    pub fn from_adjacency<I, K, N, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, N)>,
        K: Into<String>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let adjacency = entries
            .into_iter()
            .map(|(id, neighbors)| {
                (
                    id.into(),
                    neighbors.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self { adjacency }
    }

    /// Inserts or replaces the neighbor list of `id`.
    ///
    /// Returns the previous neighbor list, if `id` was already present.
    pub fn insert(&mut self, id: impl Into<String>, neighbors: Vec<String>) -> Option<Vec<String>> {
        self.adjacency.insert(id.into(), neighbors)
    }

    /// Returns the neighbor ids of `id`, or `None` if `id` is not a key.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.adjacency.get(id).map(Vec::as_slice)
    }

    /// Returns `true` if `id` is a key of the graph.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Returns the number of countries (keys).
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if the graph has no countries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the total number of directed border edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Iterates over all country ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Consumes the graph and returns the underlying mapping.
    #[must_use]
    pub fn into_inner(self) -> HashMap<String, Vec<String>> {
        self.adjacency
    }
}

impl From<HashMap<String, Vec<String>>> for BorderGraph {
    fn from(adjacency: HashMap<String, Vec<String>>) -> Self {
        Self { adjacency }
    }
}

/// Builds a [`BorderGraph`] from country records.
///
/// Records without an id are skipped. Duplicate ids collapse to one entry and
/// the last record's borders win. A record with no borders becomes a key with
/// an empty neighbor list.
#[must_use]
pub fn build_graph<'a, I>(records: I) -> BorderGraph
where
    I: IntoIterator<Item = &'a CountryRecord>,
{
    let mut graph = BorderGraph::new();
    let mut skipped = 0usize;

    for record in records {
        let Some(id) = record.id() else {
            skipped += 1;
            continue;
        };
        if graph.insert(id, record.borders().to_vec()).is_some() {
            tracing::debug!(id, "Duplicate country id, keeping the last borders seen");
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "Skipped country records without an id");
    }
    tracing::debug!(
        countries = graph.len(),
        edges = graph.edge_count(),
        "Border graph built"
    );

    graph
}
