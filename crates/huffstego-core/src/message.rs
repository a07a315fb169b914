use crate::huffman::{FrequencyTable, HuffmanTree};
use crate::key::MessageKey;
use crate::result::Result;
use crate::Bitstream;

/// A text message compressed into a Huffman bitstream, ready to be hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMessage {
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    bits: Bitstream,
}

impl EncodedMessage {
    /// counts, builds the tree and encodes `text` with it
    pub fn from_text(text: &str) -> Result<Self> {
        let frequencies = FrequencyTable::of(text);
        let tree = HuffmanTree::build(&frequencies);
        let bits = tree.code_table().encode(text)?;

        Ok(Self {
            frequencies,
            tree,
            bits,
        })
    }

    pub fn bits(&self) -> &Bitstream {
        &self.bits
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn symbol_count(&self) -> u64 {
        self.frequencies.total()
    }

    /// the key needed to unveil this message later on
    pub fn key(&self) -> MessageKey {
        MessageKey::new(self.frequencies.clone(), self.bits.len())
    }

    pub fn decode(&self) -> Result<String> {
        self.tree.decode(&self.bits)
    }
}
