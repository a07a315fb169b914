use log::debug;

use super::tree::{HuffmanTree, Node};
use crate::{Bitstream, HuffstegoError, Result};

/// Walks `tree` guided by `bits`, one symbol per leaf reached.
///
/// A lone leaf root decodes every `0` bit into one symbol, see [`CodeTable`].
/// An empty tree only accepts an empty bitstream.
///
/// [`CodeTable`]: super::CodeTable
pub fn decode(tree: &HuffmanTree, bits: &Bitstream) -> Result<String> {
    let Some(root) = tree.root() else {
        if bits.is_empty() {
            return Ok(String::new());
        }
        return Err(HuffstegoError::MalformedStream { position: 0 });
    };

    let mut text = String::new();
    if let Node::Leaf { symbol, .. } = root {
        for (position, bit) in bits.iter().enumerate() {
            if bit {
                return Err(HuffstegoError::MalformedStream { position });
            }
            text.push(*symbol);
        }
        return Ok(text);
    }

    let mut node = root;
    for (position, bit) in bits.iter().enumerate() {
        node = node
            .child(bit)
            .ok_or(HuffstegoError::MalformedStream { position })?;
        if let Some(symbol) = node.symbol() {
            text.push(symbol);
            node = root;
        }
    }

    if !std::ptr::eq(node, root) {
        return Err(HuffstegoError::MalformedStream {
            position: bits.len(),
        });
    }
    debug!("decoded {} bits into {} symbols", bits.len(), text.chars().count());

    Ok(text)
}
