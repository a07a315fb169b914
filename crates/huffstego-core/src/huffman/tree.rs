use std::collections::VecDeque;

use log::{debug, trace};

use super::code_table::CodeTable;
use super::frequency::FrequencyTable;
use crate::{Bitstream, Result};

/// A node of the Huffman tree, every node owns its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: char,
        frequency: u64,
    },
    Internal {
        frequency: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf(symbol: char, frequency: u64) -> Self {
        Node::Leaf { symbol, frequency }
    }

    /// combines two nodes, the frequency is the sum of both
    pub fn join(left: Node, right: Node) -> Self {
        Node::Internal {
            frequency: left.frequency().saturating_add(right.frequency()),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn frequency(&self) -> u64 {
        match self {
            Node::Leaf { frequency, .. } | Node::Internal { frequency, .. } => *frequency,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<char> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// the left child for `false`, the right child for `true`, `None` on leaves
    pub fn child(&self, bit: bool) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some(if bit { &**right } else { &**left }),
        }
    }
}

/// Construction worklist, ascending by frequency.
///
/// A node is placed in front of every node with the same frequency that is
/// already in the list. The shape of the tree, and therefore every code,
/// depends on this.
#[derive(Debug, Default)]
struct PriorityList {
    nodes: VecDeque<Node>,
}

impl PriorityList {
    fn insert(&mut self, node: Node) {
        let at = self
            .nodes
            .partition_point(|n| n.frequency() < node.frequency());
        self.nodes.insert(at, node);
    }

    fn pop_front(&mut self) -> Option<Node> {
        self.nodes.pop_front()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// The Huffman tree of one message.
///
/// ```rust
/// use huffstego_core::huffman::HuffmanTree;
///
/// let tree = HuffmanTree::from_text("aaab");
/// let codes = tree.code_table();
/// assert_eq!(codes.get('b').unwrap().to_string(), "0");
/// assert_eq!(codes.get('a').unwrap().to_string(), "1");
///
/// let bits = codes.encode("aaab").unwrap();
/// assert_eq!(bits.to_string(), "1110");
/// assert_eq!(tree.decode(&bits).unwrap(), "aaab");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Option<Node>,
}

impl HuffmanTree {
    /// builds the tree, leaves are inserted in the order of the frequency table
    pub fn build(frequencies: &FrequencyTable) -> Self {
        let mut list = PriorityList::default();
        for (symbol, frequency) in frequencies.iter() {
            list.insert(Node::leaf(symbol, frequency));
        }

        while list.len() > 1 {
            let (Some(left), Some(right)) = (list.pop_front(), list.pop_front()) else {
                break;
            };
            trace!(
                "joining nodes with frequency {} and {}",
                left.frequency(),
                right.frequency()
            );
            list.insert(Node::join(left, right));
        }

        let tree = Self {
            root: list.pop_front(),
        };
        debug!(
            "built Huffman tree over {} distinct symbols, depth {}",
            frequencies.len(),
            tree.depth()
        );

        tree
    }

    pub fn from_text(text: &str) -> Self {
        Self::build(&FrequencyTable::of(text))
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// length of the longest path from the root to a leaf
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut stack: Vec<(&Node, usize)> = self.root.iter().map(|n| (n, 0)).collect();
        while let Some((node, d)) = stack.pop() {
            depth = depth.max(d);
            if let Node::Internal { left, right, .. } = node {
                stack.push((&**left, d + 1));
                stack.push((&**right, d + 1));
            }
        }
        depth
    }

    pub fn code_table(&self) -> CodeTable {
        CodeTable::from_tree(self)
    }

    pub fn decode(&self, bits: &Bitstream) -> Result<String> {
        super::decoder::decode(self, bits)
    }
}
