/// Read-only diagnostic view of the interaction graph: node and edge
/// counters plus the five most-borrowed books.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphStats {
    pub members: usize,
    pub books: usize,
    pub interactions: usize,
    pub top_books: Vec<(u64, u32)>,
}
