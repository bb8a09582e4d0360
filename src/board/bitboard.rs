//! Bitboard storage for one stone color

use super::{Pos, TOTAL_CELLS};

const WORDS: usize = TOTAL_CELLS.div_ceil(64);

/// One bit per cell of the 15x15 grid, row-major, packed into four words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

/// Word index and bit mask of a cell
#[inline]
fn locate(pos: Pos) -> (usize, u64) {
    let idx = pos.to_index();
    (idx / 64, 1 << (idx % 64))
}

impl Bitboard {
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let (word, mask) = locate(pos);
        self.bits[word] |= mask;
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let (word, mask) = locate(pos);
        self.bits[word] &= !mask;
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let (word, mask) = locate(pos);
        self.bits[word] & mask != 0
    }

    /// Number of occupied cells
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|w| w.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == [0; WORDS]
    }

    /// Occupied cells in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            remaining: self.bits,
            word: 0,
        }
    }
}

/// Iterator over the occupied cells of a [`Bitboard`]
pub struct BitboardIter {
    remaining: [u64; WORDS],
    word: usize,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        while self.word < WORDS {
            let bits = &mut self.remaining[self.word];
            if *bits == 0 {
                self.word += 1;
                continue;
            }
            let idx = self.word * 64 + bits.trailing_zeros() as usize;
            // drop lowest set bit
            *bits &= *bits - 1;
            if idx < TOTAL_CELLS {
                return Some(Pos::from_index(idx));
            }
        }
        None
    }
}
