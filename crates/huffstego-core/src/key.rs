use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use log::{debug, error};

use crate::huffman::{FrequencyTable, HuffmanTree};
use crate::{Bitstream, HuffstegoError, Result};

const MAGIC: &[u8; 3] = b"HSK";
const VERSION: u8 = 1;

/// Everything besides the image that is needed to unveil a message.
///
/// The bitstream in the image carries no header and no terminator, so the
/// exact bit count and the frequencies to rebuild the tree travel here.
///
/// ## Binary format (big endian)
/// ```text
/// "HSK" | version: u8 | bit_count: u64 | symbol_count: u64 | entry_count: u32
/// entry_count × ( symbol: u32 | frequency: u64 )
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageKey {
    frequencies: FrequencyTable,
    bit_count: usize,
}

impl MessageKey {
    pub fn new(frequencies: FrequencyTable, bit_count: usize) -> Self {
        Self {
            frequencies,
            bit_count,
        }
    }

    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    pub fn symbol_count(&self) -> u64 {
        self.frequencies.total()
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// rebuilds the very same tree the message was encoded with
    pub fn tree(&self) -> HuffmanTree {
        HuffmanTree::build(&self.frequencies)
    }

    /// decodes `bits`, which must be exactly [`Self::bit_count`] bits long
    pub fn decode(&self, bits: &Bitstream) -> Result<String> {
        if bits.len() != self.bit_count {
            error!(
                "expected {} bits, but {} bits were unveiled",
                self.bit_count,
                bits.len()
            );
            return Err(HuffstegoError::MalformedStream {
                position: bits.len().min(self.bit_count),
            });
        }
        let text = self.tree().decode(bits)?;
        if text.chars().count() as u64 != self.symbol_count() {
            return Err(HuffstegoError::MalformedStream {
                position: bits.len(),
            });
        }

        Ok(text)
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<()> {
        w.write_all(MAGIC)?;
        w.write_u8(VERSION)?;
        w.write_u64::<BigEndian>(self.bit_count as u64)?;
        w.write_u64::<BigEndian>(self.symbol_count())?;
        let entries = u32::try_from(self.frequencies.len())
            .map_err(|_| HuffstegoError::InvalidKey("too many symbols".into()))?;
        w.write_u32::<BigEndian>(entries)?;
        for (symbol, frequency) in self.frequencies.iter() {
            w.write_u32::<BigEndian>(symbol.into())?;
            w.write_u64::<BigEndian>(frequency)?;
        }

        Ok(())
    }

    pub fn read_from<R: Read>(r: &mut R) -> Result<Self> {
        let mut magic = [0; 3];
        r.read_exact(&mut magic).map_err(truncated)?;
        if &magic != MAGIC {
            return Err(HuffstegoError::InvalidKey("not a message key".into()));
        }
        let version = r.read_u8().map_err(truncated)?;
        if version != VERSION {
            return Err(HuffstegoError::UnsupportedKeyVersion(version));
        }

        let bit_count = usize::try_from(r.read_u64::<BigEndian>().map_err(truncated)?)
            .map_err(|_| HuffstegoError::InvalidKey("bit count too large".into()))?;
        let symbol_count = r.read_u64::<BigEndian>().map_err(truncated)?;
        let entries = r.read_u32::<BigEndian>().map_err(truncated)?;

        let mut seen = HashSet::new();
        let mut frequencies = FrequencyTable::new();
        let mut total: u64 = 0;
        for _ in 0..entries {
            let raw = r.read_u32::<BigEndian>().map_err(truncated)?;
            let frequency = r.read_u64::<BigEndian>().map_err(truncated)?;
            let symbol = char::from_u32(raw)
                .ok_or_else(|| HuffstegoError::InvalidKey(format!("invalid symbol {raw:#x}")))?;
            if frequency == 0 || !seen.insert(symbol) {
                return Err(HuffstegoError::InvalidKey(format!(
                    "invalid entry for symbol {symbol:?}"
                )));
            }
            total = total
                .checked_add(frequency)
                .ok_or_else(|| HuffstegoError::InvalidKey("frequencies overflow".into()))?;
            frequencies.add(symbol, frequency);
        }

        if total != symbol_count {
            return Err(HuffstegoError::InvalidKey(
                "symbol count does not match the frequencies".into(),
            ));
        }
        debug!("read message key over {entries} symbols and {bit_count} bits");

        Ok(Self {
            frequencies,
            bit_count,
        })
    }

    pub fn save_as(&self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|source| {
            error!("Error creating key file {file:?}: {source}");
            HuffstegoError::WriteError { source }
        })?;
        let mut w = BufWriter::new(f);
        self.write_to(&mut w)?;
        w.flush()
            .map_err(|source| HuffstegoError::WriteError { source })
    }

    pub fn from_file(file: &Path) -> Result<Self> {
        let f = File::open(file).map_err(|source| HuffstegoError::ReadError { source })?;
        Self::read_from(&mut BufReader::new(f))
    }
}

fn truncated(e: std::io::Error) -> HuffstegoError {
    match e.kind() {
        ErrorKind::UnexpectedEof => HuffstegoError::InvalidKey("key is truncated".into()),
        _ => HuffstegoError::ReadError { source: e },
    }
}
