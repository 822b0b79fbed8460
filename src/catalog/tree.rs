use std::cmp::Ordering;

use super::Book;

struct Node {
    book: Book,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

/// Unbalanced binary search tree keyed by book id.
///
/// Strictly-smaller ids go left, everything else (equal ids included) goes
/// right, so duplicate ids are tolerated rather than rejected. There is no
/// rebalancing: insertion order determines the shape, and monotonic id
/// sequences degrade lookups to O(n). Accepted limitation for the data
/// volumes this serves.
#[derive(Default)]
pub struct BookTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl BookTree {
    pub fn new() -> Self {
        BookTree::default()
    }

    /// Rebuild from a snapshot. Snapshots are sorted ascending by id, which
    /// produces a right-spine tree; shape is not part of the contract.
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut tree = BookTree::new();
        for book in books {
            tree.insert(book);
        }
        tree
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, book: Book) {
        Self::insert_at(&mut self.root, book);
        self.len += 1;
    }

    fn insert_at(slot: &mut Option<Box<Node>>, book: Book) {
        match slot {
            None => {
                *slot = Some(Box::new(Node {
                    book,
                    left: None,
                    right: None,
                }));
            }
            Some(node) => {
                if book.id < node.book.id {
                    Self::insert_at(&mut node.left, book);
                } else {
                    Self::insert_at(&mut node.right, book);
                }
            }
        }
    }

    /// Lookup by id in O(height). With duplicate ids the first node on the
    /// descent path wins.
    pub fn find(&self, id: u64) -> Option<&Book> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match id.cmp(&node.book.id) {
                Ordering::Equal => return Some(&node.book),
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }

    pub fn find_mut(&mut self, id: u64) -> Option<&mut Book> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match id.cmp(&node.book.id) {
                Ordering::Equal => return Some(&mut node.book),
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
            }
        }
        None
    }

    /// Case-insensitive exact title match. Title is not the tree key, so
    /// this is a full in-order walk: O(n), first hit in ascending-id order.
    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        let needle = title.to_lowercase();
        Self::title_search(self.root.as_deref(), &needle)
    }

    fn title_search<'a>(node: Option<&'a Node>, needle: &str) -> Option<&'a Book> {
        let node = node?;
        if let Some(found) = Self::title_search(node.left.as_deref(), needle) {
            return Some(found);
        }
        if node.book.title.to_lowercase() == needle {
            return Some(&node.book);
        }
        Self::title_search(node.right.as_deref(), needle)
    }

    /// Case-sensitive variant used by return processing; first in-order hit.
    pub fn find_exact_title_mut(&mut self, title: &str) -> Option<&mut Book> {
        Self::title_search_mut(self.root.as_deref_mut(), title)
    }

    fn title_search_mut<'a>(node: Option<&'a mut Node>, title: &str) -> Option<&'a mut Book> {
        let node = node?;
        if let Some(found) = Self::title_search_mut(node.left.as_deref_mut(), title) {
            return Some(found);
        }
        if node.book.title == title {
            return Some(&mut node.book);
        }
        Self::title_search_mut(node.right.as_deref_mut(), title)
    }

    /// Ascending-by-id enumeration, computed fresh on every call.
    pub fn in_order(&self) -> Vec<&Book> {
        let mut out = Vec::with_capacity(self.len);
        Self::collect(self.root.as_deref(), &mut out);
        out
    }

    fn collect<'a>(node: Option<&'a Node>, out: &mut Vec<&'a Book>) {
        if let Some(node) = node {
            Self::collect(node.left.as_deref(), out);
            out.push(&node.book);
            Self::collect(node.right.as_deref(), out);
        }
    }

    /// Owned in-order snapshot; the ground truth handed to persistence.
    pub fn snapshot(&self) -> Vec<Book> {
        self.in_order().into_iter().cloned().collect()
    }
}
