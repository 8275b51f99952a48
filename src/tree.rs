use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::freq::FrequencyTable;

/// One node of the prefix-code tree. Children are owned exclusively by
/// their parent, so dropping the root frees the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }
}

/// Heap entry wrapping a node with its tie-break rank. Extraction order
/// must be identical between the encode-time and decode-time builds, since
/// the decoder regenerates the tree from the header frequencies alone.
/// Ranks are unique: leaves take their symbol value (0..=127), internal
/// nodes take the next value from a counter starting at 128. Together with
/// the weight this gives a total order, so the heap has no free choice.
struct HeapEntry {
    weight: u64,
    rank: u32,
    node: Node,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.rank == other.rank
    }
}
impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the minimum first.
        (other.weight, other.rank).cmp(&(self.weight, self.rank))
    }
}
impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the prefix-code tree by repeatedly merging the two lowest-weight
/// nodes. The second node extracted becomes the left child, so the heavier
/// (or later-ranked) of the pair sits on the 0 side. Returns `None` for an
/// empty table; a table with one distinct symbol yields a lone leaf.
pub fn build(table: &FrequencyTable) -> Option<Node> {
    let mut heap = BinaryHeap::new();
    for (symbol, weight) in table.present() {
        heap.push(HeapEntry {
            weight,
            rank: symbol as u32,
            node: Node::Leaf { symbol, weight },
        });
    }

    let mut next_rank = 128u32;
    while heap.len() > 1 {
        let first = heap.pop().unwrap();
        let second = heap.pop().unwrap();
        let weight = first.weight + second.weight;
        heap.push(HeapEntry {
            weight,
            rank: next_rank,
            node: Node::Internal {
                weight,
                left: Box::new(second.node),
                right: Box::new(first.node),
            },
        });
        next_rank += 1;
    }
    heap.pop().map(|entry| entry.node)
}

/// Walk the tree and record each leaf's root-to-leaf path: false (0) for
/// left, true (1) for right. A lone-leaf root gets the single-bit code 0 —
/// an empty code could never be recognized in the bitstream.
pub fn assign_codes(root: &Node) -> HashMap<u8, Vec<bool>> {
    let mut codes = HashMap::new();
    walk(root, Vec::new(), &mut codes);
    codes
}

fn walk(node: &Node, prefix: Vec<bool>, codes: &mut HashMap<u8, Vec<bool>>) {
    match node {
        Node::Leaf { symbol, .. } => {
            if prefix.is_empty() {
                codes.insert(*symbol, vec![false]);
            } else {
                codes.insert(*symbol, prefix);
            }
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(false);
            walk(left, left_prefix, codes);
            let mut right_prefix = prefix;
            right_prefix.push(true);
            walk(right, right_prefix, codes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;

    #[test]
    fn two_symbol_tree_puts_heavier_on_zero_side() {
        let table = FrequencyTable::tally(b"aaab").unwrap();
        let root = build(&table).unwrap();
        assert_eq!(root.weight(), 4);
        let codes = assign_codes(&root);
        assert_eq!(codes[&b'a'], vec![false]);
        assert_eq!(codes[&b'b'], vec![true]);
    }

    #[test]
    fn internal_weights_are_child_sums() {
        fn check(node: &Node) {
            if let Node::Internal { weight, left, right } = node {
                assert_eq!(*weight, left.weight() + right.weight());
                check(left);
                check(right);
            }
        }
        let table = FrequencyTable::tally(b"abracadabra").unwrap();
        check(&build(&table).unwrap());
    }

    #[test]
    fn single_symbol_gets_one_bit_code() {
        let table = FrequencyTable::tally(b"zzzz").unwrap();
        let root = build(&table).unwrap();
        assert!(matches!(root, Node::Leaf { symbol: b'z', weight: 4 }));
        let codes = assign_codes(&root);
        assert_eq!(codes[&b'z'], vec![false]);
    }

    #[test]
    fn empty_table_has_no_tree() {
        let table = FrequencyTable::new();
        assert!(build(&table).is_none());
    }

    #[test]
    fn equal_weights_build_deterministically() {
        // All weights tie, so only the rank order keeps this stable.
        let mut table = FrequencyTable::new();
        for symbol in [b'a', b'b', b'c', b'd', b'e'] {
            table.set(symbol, 7);
        }
        let first = build(&table).unwrap();
        let second = build(&table).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn codes_satisfy_kraft_equality() {
        let table = FrequencyTable::tally(b"the quick brown fox jumps over the lazy dog").unwrap();
        let codes = assign_codes(&build(&table).unwrap());
        let max_len = codes.values().map(|c| c.len()).max().unwrap();
        let total: u64 = codes
            .values()
            .map(|code| 1u64 << (max_len - code.len()))
            .sum();
        assert_eq!(total, 1u64 << max_len);
    }

    #[test]
    fn codes_are_prefix_free() {
        let table = FrequencyTable::tally(b"mississippi river").unwrap();
        let codes = assign_codes(&build(&table).unwrap());
        let all: Vec<&Vec<bool>> = codes.values().collect();
        for a in &all {
            for b in &all {
                if a != b {
                    assert!(!b.starts_with(a));
                }
            }
        }
    }
}
