use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::GraphStats;

/// Directed, weighted bipartite graph: member ids on one side, book ids on
/// the other, an edge per recorded borrow.
///
/// Adjacency lives in ordered maps so that ranking tie-breaks ("first
/// encountered while summing") come out the same on every run. The `members`
/// and `books` sets duplicate the adjacency keys; they answer "is this id
/// known" without walking the map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionGraph {
    edges: BTreeMap<u64, BTreeMap<u64, u32>>,
    members: BTreeSet<u64>,
    books: BTreeSet<u64>,
}

impl InteractionGraph {
    pub fn new() -> Self {
        InteractionGraph::default()
    }

    /// Record a unit-weight borrow edge.
    pub fn record(&mut self, member_id: u64, book_id: u64) {
        self.record_weighted(member_id, book_id, 1);
    }

    /// Set the edge weight. Overwrites, never accumulates: a repeat borrow
    /// of the same book by the same member resets the weight to the given
    /// value.
    pub fn record_weighted(&mut self, member_id: u64, book_id: u64, weight: u32) {
        self.members.insert(member_id);
        self.books.insert(book_id);
        self.edges.entry(member_id).or_default().insert(book_id, weight);
    }

    pub fn contains_member(&self, member_id: u64) -> bool {
        self.members.contains(&member_id)
    }

    pub fn contains_book(&self, book_id: u64) -> bool {
        self.books.contains(&book_id)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Total number of edges, summed over per-member adjacency sizes.
    pub fn interaction_count(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum()
    }

    pub fn edge_weight(&self, member_id: u64, book_id: u64) -> Option<u32> {
        self.edges.get(&member_id)?.get(&book_id).copied()
    }

    /// Book ids the member has borrowed, ascending.
    pub fn borrowed_by(&self, member_id: u64) -> Vec<u64> {
        self.edges
            .get(&member_id)
            .map(|edges| edges.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Total borrow weight per book, heaviest first, at most `n` entries.
    /// The sort is stable, so tied books keep the order they were first
    /// encountered while summing.
    pub fn popular_books(&self, n: usize) -> Vec<(u64, u32)> {
        let mut order: Vec<u64> = Vec::new();
        let mut totals: BTreeMap<u64, u32> = BTreeMap::new();
        for edges in self.edges.values() {
            for (&book_id, &weight) in edges {
                match totals.get_mut(&book_id) {
                    Some(total) => *total += weight,
                    None => {
                        totals.insert(book_id, weight);
                        order.push(book_id);
                    }
                }
            }
        }

        let mut ranked: Vec<(u64, u32)> =
            order.into_iter().map(|id| (id, totals[&id])).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Collaborative-filtering scores for books the member has not borrowed,
    /// highest first, at most `n` entries.
    ///
    /// Similarity to another member is the count of distinct shared books.
    /// A candidate book's score is the sum of the similarities of the
    /// members that reach it; the weight on their own edge to the candidate
    /// is deliberately ignored.
    pub fn recommendations_for(&self, member_id: u64, n: usize) -> Vec<(u64, u32)> {
        let Some(own) = self.edges.get(&member_id) else {
            return Vec::new();
        };

        let mut similar: Vec<(u64, u32)> = Vec::new();
        for (&other_id, other_edges) in &self.edges {
            if other_id == member_id {
                continue;
            }
            let shared = own
                .keys()
                .filter(|book_id| other_edges.contains_key(book_id))
                .count() as u32;
            if shared > 0 {
                similar.push((other_id, shared));
            }
        }

        let mut order: Vec<u64> = Vec::new();
        let mut scores: BTreeMap<u64, u32> = BTreeMap::new();
        for (other_id, similarity) in similar {
            for &book_id in self.edges[&other_id].keys() {
                if own.contains_key(&book_id) {
                    continue;
                }
                match scores.get_mut(&book_id) {
                    Some(score) => *score += similarity,
                    None => {
                        scores.insert(book_id, similarity);
                        order.push(book_id);
                    }
                }
            }
        }

        let mut ranked: Vec<(u64, u32)> =
            order.into_iter().map(|id| (id, scores[&id])).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            members: self.members.len(),
            books: self.books.len(),
            interactions: self.interaction_count(),
            top_books: self.popular_books(5),
        }
    }
}
