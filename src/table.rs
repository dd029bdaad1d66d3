//! Construction of the precomputed tables that drive the engines.
//!
//! Table construction is pure: the same pattern always yields the same
//! table, and nothing here depends on the text or on any session state.

use std::fmt;
use std::ops::Index;

use crate::{Algorithm, Error, Result};

/// The KMP failure function, also known as the LPS table.
///
/// For each pattern position `i` the table holds the length of the longest
/// proper prefix of `pattern[..=i]` that is also a suffix of it. The first
/// entry is always `0` and every entry satisfies `lps[i] <= i`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LpsTable(Vec<usize>);

impl LpsTable {
    /// Build the failure function for the given pattern in O(m).
    ///
    /// # Errors
    ///
    /// Fails if the pattern is empty.
    pub fn build<P>(pattern: P) -> Result<Self>
    where
        P: AsRef<[u8]>,
    {
        let pattern = pattern.as_ref();
        if pattern.is_empty() {
            return Err(Error::InvalidPattern);
        }

        let m = pattern.len();
        let mut lps = vec![0; m];

        // `len` is the length of the current longest prefix-suffix. On a
        // mismatch it rewinds through already computed entries rather than
        // rescanning the pattern; that rewind is what keeps construction
        // linear.
        let mut len = 0;
        let mut i = 1;
        while i < m {
            if pattern[i] == pattern[len] {
                len += 1;
                lps[i] = len;
                i += 1;
            } else if len != 0 {
                len = lps[len - 1];
            } else {
                lps[i] = 0;
                i += 1;
            }
        }

        Ok(Self(lps))
    }

    /// The table as a slice, index-aligned with the pattern.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl Index<usize> for LpsTable {
    type Output = usize;

    #[inline]
    fn index(&self, i: usize) -> &usize {
        &self.0[i]
    }
}

/// The Boyer-Moore bad-character table.
///
/// For every byte present in the pattern the table holds the offset of its
/// rightmost occurrence from the pattern end, i.e. `m - 1 - k` for a byte
/// last seen at index `k`. All other bytes fall back to the pattern length
/// `m`. The alphabet is bounded, so the table is a plain 256-entry array
/// rather than a map.
#[derive(Clone, PartialEq, Eq)]
pub struct BadCharTable {
    offsets: [usize; 256],
    m: usize,
}

impl BadCharTable {
    /// Build the bad-character table for the given pattern in O(m).
    ///
    /// # Errors
    ///
    /// Fails if the pattern is empty.
    pub fn build<P>(pattern: P) -> Result<Self>
    where
        P: AsRef<[u8]>,
    {
        let pattern = pattern.as_ref();
        if pattern.is_empty() {
            return Err(Error::InvalidPattern);
        }

        let m = pattern.len();
        let mut offsets = [m; 256];
        // Left to right, so a repeated byte's later occurrence overwrites
        // the earlier one and the table ends up holding the rightmost.
        for (i, &b) in pattern.iter().enumerate() {
            offsets[b as usize] = m - 1 - i;
        }

        Ok(Self { offsets, m })
    }

    /// The rightmost-occurrence offset for `byte`, measured from the
    /// pattern end, or the pattern length if the byte does not occur.
    #[inline]
    pub fn offset(&self, byte: u8) -> usize {
        self.offsets[byte as usize]
    }

    /// The index of the rightmost occurrence of `byte` in the pattern, if
    /// the byte occurs at all.
    #[inline]
    pub fn last_index(&self, byte: u8) -> Option<usize> {
        match self.offsets[byte as usize] {
            o if o < self.m => Some(self.m - 1 - o),
            _ => None,
        }
    }

    /// Iterate over `(byte, offset)` pairs for the bytes present in the
    /// pattern, in ascending byte order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.offsets
            .iter()
            .enumerate()
            .filter(|&(_, &o)| o < self.m)
            .map(|(b, &o)| (b as u8, o))
    }
}

impl fmt::Debug for BadCharTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries().map(|(b, o)| (b as char, o)))
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BadCharTable {
    /// Serializes only the bytes present in the pattern, as a map from
    /// character to offset.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        for (byte, offset) in self.entries() {
            map.serialize_entry(&(byte as char), &offset)?;
        }
        map.end()
    }
}

/// The precomputed table for either algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Table {
    /// The KMP failure function.
    Lps(LpsTable),
    /// The Boyer-Moore bad-character table.
    BadChar(BadCharTable),
}

impl Table {
    /// Build the table the given algorithm needs for `pattern`.
    ///
    /// # Errors
    ///
    /// Fails if the pattern is empty.
    pub fn build<P>(pattern: P, algorithm: Algorithm) -> Result<Self>
    where
        P: AsRef<[u8]>,
    {
        match algorithm {
            Algorithm::Kmp => LpsTable::build(pattern).map(Table::Lps),
            Algorithm::BoyerMoore => BadCharTable::build(pattern).map(Table::BadChar),
        }
    }
}
