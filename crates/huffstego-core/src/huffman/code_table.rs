use std::collections::HashMap;

use log::debug;

use super::tree::{HuffmanTree, Node};
use crate::{Bitstream, HuffstegoError, Result};

/// Maps every symbol of a tree to its prefix-free code.
///
/// A left turn contributes a `0`, a right turn a `1`. A tree that consists of
/// a single leaf assigns the code `0` to it, so every symbol costs at least
/// one bit and the bit count always equals what the decoder consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<char, Bitstream>,
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = HashMap::new();

        match tree.root() {
            None => {}
            Some(Node::Leaf { symbol, .. }) => {
                codes.insert(*symbol, Bitstream::from(vec![false]));
            }
            Some(root) => {
                let mut stack = vec![(root, Bitstream::new())];
                while let Some((node, path)) = stack.pop() {
                    match node {
                        Node::Leaf { symbol, .. } => {
                            codes.insert(*symbol, path);
                        }
                        Node::Internal { left, right, .. } => {
                            let mut right_path = path.clone();
                            right_path.push(true);
                            let mut left_path = path;
                            left_path.push(false);
                            stack.push((&**right, right_path));
                            stack.push((&**left, left_path));
                        }
                    }
                }
            }
        }

        Self { codes }
    }

    pub fn get(&self, symbol: char) -> Option<&Bitstream> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &Bitstream)> + '_ {
        self.codes.iter().map(|(symbol, code)| (*symbol, code))
    }

    /// concatenates the codes of all symbols of `text`
    pub fn encode(&self, text: &str) -> Result<Bitstream> {
        let mut bits = Bitstream::new();
        for symbol in text.chars() {
            let code = self
                .codes
                .get(&symbol)
                .ok_or(HuffstegoError::UnknownSymbol(symbol))?;
            bits.extend_from(code);
        }
        debug!(
            "encoded {} symbols into {} bits",
            text.chars().count(),
            bits.len()
        );

        Ok(bits)
    }
}
