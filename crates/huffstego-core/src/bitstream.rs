use std::fmt;
use std::str::FromStr;

use bitvec::prelude::{BitSlice, BitVec, Msb0};

use crate::HuffstegoError;

/// An ordered sequence of bits, the unit that travels between the Huffman
/// coder and the LSB codec.
///
/// The textual form is a string of `'0'` and `'1'` characters:
/// ```rust
/// use huffstego_core::Bitstream;
///
/// let bits: Bitstream = "1110".parse().unwrap();
/// assert_eq!(bits.len(), 4);
/// assert_eq!(bits.to_string(), "1110");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bitstream {
    bits: BitVec<u8, Msb0>,
}

impl Bitstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    /// appends all bits of `other`
    pub fn extend_from(&mut self, other: &Bitstream) {
        self.bits.extend_from_bitslice(other.bits.as_bitslice());
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// true if `self` is a prefix of `other`, an empty stream is a prefix of everything
    pub fn is_prefix_of(&self, other: &Bitstream) -> bool {
        other.bits.starts_with(self.bits.as_bitslice())
    }

    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    /// the bits packed into bytes, most significant bit first, the last byte zero padded
    pub fn as_raw_slice(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }
}

impl From<Vec<bool>> for Bitstream {
    fn from(bits: Vec<bool>) -> Self {
        bits.into_iter().collect()
    }
}

impl FromIterator<bool> for Bitstream {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Extend<bool> for Bitstream {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.bits.extend(iter);
    }
}

impl FromStr for Bitstream {
    type Err = HuffstegoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(HuffstegoError::InvalidBit(other)),
            })
            .collect()
    }
}

impl fmt::Display for Bitstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_and_print_the_textual_form() {
        let bits: Bitstream = "0110".parse().unwrap();
        assert_eq!(bits.iter().collect::<Vec<_>>(), [false, true, true, false]);
        assert_eq!(bits.to_string(), "0110");
    }

    #[test]
    fn should_pack_bits_most_significant_first() {
        let bits: Bitstream = "1110000011".parse().unwrap();
        assert_eq!(bits.len(), 10);
        assert_eq!(bits.as_raw_slice(), &[0b1110_0000, 0b1100_0000]);
        assert_eq!(bits.get(8), Some(true));
        assert_eq!(bits.get(10), None);
    }

    #[test]
    fn extending_keeps_the_order_of_both_streams() {
        let mut bits: Bitstream = "101".parse().unwrap();
        bits.extend_from(&"0011".parse().unwrap());
        assert_eq!(bits.to_string(), "1010011");
        assert_eq!(bits.pop(), Some(true));
        assert_eq!(bits.to_string(), "101001");
    }

    #[test]
    fn should_reject_characters_other_than_zero_and_one() {
        match "01x1".parse::<Bitstream>() {
            Err(HuffstegoError::InvalidBit('x')) => (),
            other => panic!("expected InvalidBit, got {other:?}"),
        }
    }

    #[test]
    fn empty_stream_is_prefix_of_everything() {
        let empty = Bitstream::new();
        let bits: Bitstream = "10".parse().unwrap();
        assert!(empty.is_prefix_of(&bits));
        assert!(!bits.is_prefix_of(&empty));
    }
}
