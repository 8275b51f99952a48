use crate::error::HuffError;

/// Number of symbol values the codec models. Bytes >= 128 are rejected up
/// front rather than silently miscounted.
pub const SYMBOL_RANGE: usize = 128;

/// Occurrence counts per symbol. Indexed by byte value, so iterating the
/// array gives symbols in ascending order, which is also the order the
/// header serializes them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; SYMBOL_RANGE],
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable {
            counts: [0; SYMBOL_RANGE],
        }
    }

    /// Count every byte of `data`. Fails on the first byte outside 0..=127.
    pub fn tally(data: &[u8]) -> Result<Self, HuffError> {
        let mut table = FrequencyTable::new();
        for &byte in data {
            if byte as usize >= SYMBOL_RANGE {
                return Err(HuffError::SymbolOutOfRange(byte));
            }
            table.counts[byte as usize] += 1;
        }
        Ok(table)
    }

    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    pub fn set(&mut self, symbol: u8, count: u64) {
        self.counts[symbol as usize] = count;
    }

    /// Symbols with a nonzero count, ascending by symbol value.
    pub fn present(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }

    /// Total number of bytes the table was built from.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of distinct symbols with a nonzero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
