//! Deterministic Huffman coding over the symbols (`char`s) of a text.
//!
//! [`FrequencyTable`] counts, [`HuffmanTree`] builds the tree, [`CodeTable`]
//! encodes and [`decode`] walks the tree back to text.

mod code_table;
mod decoder;
mod frequency;
mod tree;

pub use code_table::CodeTable;
pub use decoder::decode;
pub use frequency::FrequencyTable;
pub use tree::{HuffmanTree, Node};
