use log::{debug, trace};

use crate::byte::TernaryByte;
use crate::cursor::{Cursor, IntoCursor};
use crate::error::Error;
use crate::role::ByteRole;


/// An ordered, growable sequence of [`TernaryByte`]s.
///
/// Any bit pattern may be stored, in any order. The sequence is the unit
/// the two UTF-8 checks, [`ByteSequence::looks_like_utf8`] and
/// [`ByteSequence::is_well_formed_utf8`], operate on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByteSequence {
    bytes: Vec<TernaryByte>,
}

impl ByteSequence {
    pub fn new() -> ByteSequence {
        ByteSequence { bytes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> ByteSequence {
        ByteSequence { bytes: Vec::with_capacity(capacity) }
    }

    /// Builds an all-concrete sequence from a (possibly chunked) haystack.
    ///
    /// # Example
    ///
    /// ```
    /// use ternary_utf8::ByteSequence;
    ///
    /// let seq = ByteSequence::from_cursor("ünï");
    /// assert_eq!(seq.len(), 5);
    /// assert!(seq.is_well_formed_utf8()?);
    /// # Ok::<(), ternary_utf8::Error>(())
    /// ```
    pub fn from_cursor<T: IntoCursor>(haystack: T) -> ByteSequence {
        let mut cursor = haystack.into_cursor();
        let mut seq = ByteSequence::new();
        loop {
            seq.bytes.extend(cursor.chunk().iter().map(|&b| TernaryByte::from(b)));
            if !cursor.advance() {
                break;
            }
        }
        seq
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TernaryByte> {
        self.bytes.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, TernaryByte> {
        self.bytes.iter()
    }

    pub fn as_slice(&self) -> &[TernaryByte] {
        &self.bytes
    }

    pub fn push(&mut self, byte: TernaryByte) {
        self.bytes.push(byte);
    }

    /// Appends a byte that may be absent, failing with a format error if it
    /// is.
    pub fn try_push(&mut self, byte: Option<TernaryByte>) -> Result<(), Error> {
        let byte = byte.ok_or_else(Error::missing_byte)?;
        self.push(byte);
        Ok(())
    }

    /// Replaces the byte at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn set(&mut self, index: usize, byte: TernaryByte) {
        self.bytes[index] = byte;
    }

    /// Replaces the byte at `index` with a byte that may be absent, failing
    /// with a format error if it is. The sequence is left untouched on
    /// failure.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn try_set(&mut self, index: usize, byte: Option<TernaryByte>) -> Result<(), Error> {
        let byte = byte.ok_or_else(|| Error::missing_byte().at(index))?;
        self.set(index, byte);
        Ok(())
    }

    /// A cheap approximation of "could this be UTF-8".
    ///
    /// Only the most significant bit of each byte is consulted. A run is a
    /// maximal stretch of bytes with that bit set; since every multi-byte
    /// encoding is at least two bytes long, a run of exactly one byte can
    /// never be valid and is rejected. Runs of any other length are accepted
    /// without looking at their internal structure, so this accepts inputs
    /// [`ByteSequence::is_well_formed_utf8`] rejects (e.g. `10xxxxxx
    /// 10xxxxxx`).
    ///
    /// Fails with an ambiguity error if a byte's most significant bit is a
    /// wildcard. Bytes after the first isolated run are not inspected.
    pub fn looks_like_utf8(&self) -> Result<bool, Error> {
        let mut run = 0usize;
        for (i, byte) in self.bytes.iter().enumerate() {
            if byte.is_control_byte().map_err(|err| err.at(i))? {
                run += 1;
                continue;
            }
            if run == 1 {
                debug!("isolated high bit byte at index {}", i - 1);
                return Ok(false);
            }
            run = 0;
        }
        if run == 1 {
            debug!("trailing isolated high bit byte at index {}", self.bytes.len() - 1);
            return Ok(false);
        }
        Ok(true)
    }

    /// Checks the sequence against the UTF-8 lead/continuation grammar.
    ///
    /// Every byte is classified and fed to a state machine that tracks how
    /// many continuation bytes are still expected. An ascii or lead byte
    /// while continuations are outstanding, a continuation when none is
    /// expected, or a truncated encoding at the end all make the sequence
    /// invalid (`Ok(false)`).
    ///
    /// The caller must make sure every byte is unambiguous. A byte that
    /// classifies as [`ByteRole::Unknown`] fails the whole check with a
    /// classification error rather than producing a verdict.
    ///
    /// # Example
    ///
    /// ```
    /// use ternary_utf8::{ByteSequence, TernaryByte};
    ///
    /// let seq: ByteSequence = ["0xxxxxxx", "110xxxxx", "10xxxxxx"]
    ///     .into_iter()
    ///     .map(TernaryByte::from_pattern)
    ///     .collect::<Result<_, _>>()?;
    /// assert!(seq.is_well_formed_utf8()?);
    /// # Ok::<(), ternary_utf8::Error>(())
    /// ```
    pub fn is_well_formed_utf8(&self) -> Result<bool, Error> {
        let mut expected = 0usize;
        for (i, byte) in self.bytes.iter().enumerate() {
            let role = byte.classify();
            trace!("{} at index {}: {} ({} continuations expected)", byte, i, role, expected);
            match role {
                ByteRole::Unknown => return Err(Error::unclassifiable(*byte).at(i)),
                ByteRole::Continuation => {
                    if expected == 0 {
                        debug!("unexpected continuation byte at index {}", i);
                        return Ok(false);
                    }
                    expected -= 1;
                }
                ByteRole::Ascii
                | ByteRole::LeadOfTwo
                | ByteRole::LeadOfThree
                | ByteRole::LeadOfFour => {
                    if expected != 0 {
                        debug!(
                            "{} byte at index {} while {} continuations are outstanding",
                            role, i, expected
                        );
                        return Ok(false);
                    }
                    expected = role.continuations().unwrap_or(0);
                }
            }
        }
        if expected != 0 {
            debug!("input ends {} continuation bytes short", expected);
            return Ok(false);
        }
        Ok(true)
    }
}

impl From<Vec<TernaryByte>> for ByteSequence {
    fn from(bytes: Vec<TernaryByte>) -> ByteSequence {
        ByteSequence { bytes }
    }
}

impl FromIterator<TernaryByte> for ByteSequence {
    fn from_iter<I: IntoIterator<Item = TernaryByte>>(iter: I) -> ByteSequence {
        ByteSequence { bytes: iter.into_iter().collect() }
    }
}

impl Extend<TernaryByte> for ByteSequence {
    fn extend<I: IntoIterator<Item = TernaryByte>>(&mut self, iter: I) {
        self.bytes.extend(iter)
    }
}

impl core::ops::Index<usize> for ByteSequence {
    type Output = TernaryByte;

    fn index(&self, index: usize) -> &TernaryByte {
        &self.bytes[index]
    }
}

impl<'a> IntoIterator for &'a ByteSequence {
    type Item = &'a TernaryByte;
    type IntoIter = core::slice::Iter<'a, TernaryByte>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.iter()
    }
}

impl IntoIterator for ByteSequence {
    type Item = TernaryByte;
    type IntoIter = std::vec::IntoIter<TernaryByte>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.into_iter()
    }
}

/// Space separated renderings of each byte, for diagnostics.
impl core::fmt::Display for ByteSequence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", byte)?;
        }
        Ok(())
    }
}
