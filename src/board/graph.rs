//! Board graph storage.
//!
//! ## Layout
//!
//! - Node set: every location id that exists, even isolated ones.
//! - Adjacency: outgoing edges per location, in insertion order.
//!
//! Edges are directed. `add_route` inserts both directions, which is what
//! most maps want; one-way edges use `add_edge`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Transport;

/// Location identifier. Real maps number locations from 1.
///
/// Id 0 stands for "not yet revealed" and is refused at setup.
pub type LocationId = u32;

/// A directed, transport-typed edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: LocationId,
    pub destination: LocationId,
    pub transport: Transport,
}

impl Edge {
    #[must_use]
    pub const fn new(source: LocationId, destination: LocationId, transport: Transport) -> Self {
        Self {
            source,
            destination,
            transport,
        }
    }
}

/// Immutable-once-shared graph of locations.
///
/// SmallVec keeps the common case (a handful of exits per location)
/// inline without a heap allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    adjacency: FxHashMap<LocationId, SmallVec<[Edge; 6]>>,
    edge_count: usize,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location with no edges. Adding an existing location is a no-op.
    pub fn add_location(&mut self, location: LocationId) {
        self.adjacency.entry(location).or_default();
    }

    /// Add a one-way edge, creating both endpoints if needed.
    pub fn add_edge(&mut self, source: LocationId, destination: LocationId, transport: Transport) {
        self.add_location(destination);
        self.adjacency
            .entry(source)
            .or_default()
            .push(Edge::new(source, destination, transport));
        self.edge_count += 1;
    }

    /// Add edges in both directions.
    pub fn add_route(&mut self, a: LocationId, b: LocationId, transport: Transport) {
        self.add_edge(a, b, transport);
        self.add_edge(b, a, transport);
    }

    /// Add a route (builder pattern).
    #[must_use]
    pub fn with_route(mut self, a: LocationId, b: LocationId, transport: Transport) -> Self {
        self.add_route(a, b, transport);
        self
    }

    /// Add a one-way edge (builder pattern).
    #[must_use]
    pub fn with_edge(mut self, source: LocationId, destination: LocationId, transport: Transport) -> Self {
        self.add_edge(source, destination, transport);
        self
    }

    #[must_use]
    pub fn contains(&self, location: LocationId) -> bool {
        self.adjacency.contains_key(&location)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    #[must_use]
    pub fn location_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All locations, sorted.
    #[must_use]
    pub fn locations(&self) -> Vec<LocationId> {
        let mut locations: Vec<_> = self.adjacency.keys().copied().collect();
        locations.sort_unstable();
        locations
    }

    /// Outgoing edges of a location. Unknown locations have none.
    #[must_use]
    pub fn edges_from(&self, location: LocationId) -> &[Edge] {
        self.adjacency
            .get(&location)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }
}
