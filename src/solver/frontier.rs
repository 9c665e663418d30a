use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::rc::Rc;

use super::SearchNode;

/// Min-priority queue of search nodes.
///
/// Nodes of equal priority come out in insertion order, so a solve is
/// reproducible.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
    inserted: usize,
}

#[derive(Debug)]
struct Entry {
    priority: usize,
    seq: usize,
    node: Rc<SearchNode>,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.priority, self.seq).cmp(&(other.priority, other.seq))
    }
}

impl Frontier {
    pub fn push(&mut self, node: Rc<SearchNode>) {
        self.heap.push(Reverse(Entry {
            priority: node.priority,
            seq: self.inserted,
            node,
        }));
        self.inserted += 1;
    }

    pub fn pop(&mut self) -> Option<Rc<SearchNode>> {
        self.heap.pop().map(|Reverse(entry)| entry.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of pushes over the frontier's lifetime.
    pub fn inserted(&self) -> usize {
        self.inserted
    }
}
