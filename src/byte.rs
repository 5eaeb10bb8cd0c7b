use core::ops::BitXor;
use core::str::FromStr;

use crate::error::Error;
use crate::role::ByteRole;

#[cfg(test)]
mod tests;

/// Number of bits in a [`TernaryByte`].
pub const BITS_PER_BYTE: usize = 8;

/// Longest prefix `classify` ever needs to look at: four ones and a zero.
const MAX_ROLE_PREFIX: usize = 5;

/// A single bit that is either concrete or unknown.
///
/// `Wildcard` is a tag of its own, not a set of possible values: it only
/// ever compares equal to another `Wildcard`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
    Wildcard,
}

impl Bit {
    /// Parses the pattern character for a bit (`0`, `1` or `x`).
    pub fn from_char(c: char) -> Option<Bit> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            'x' => Some(Bit::Wildcard),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
            Bit::Wildcard => 'x',
        }
    }

    pub fn is_concrete(self) -> bool {
        self != Bit::Wildcard
    }
}

/// Wildcards are contagious: if either side is unknown, so is the result.
impl BitXor for Bit {
    type Output = Bit;

    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn bitxor(self, rhs: Bit) -> Bit {
        match (self, rhs) {
            (Bit::Wildcard, _) | (_, Bit::Wildcard) => Bit::Wildcard,
            (a, b) if a == b => Bit::Zero,
            _ => Bit::One,
        }
    }
}

impl core::fmt::Display for Bit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A byte whose bits may each be `0`, `1` or a wildcard.
///
/// Index 0 is the most significant (first transmitted) bit. A `TernaryByte`
/// is a plain value: it is `Copy`, and the only way to change a bit is
/// [`TernaryByte::with_bit`], which hands back a modified copy.
///
/// # Example
///
/// ```
/// use ternary_utf8::{Bit, TernaryByte};
///
/// let byte = TernaryByte::from_integer(111)?.with_bit(4, Bit::Wildcard);
/// assert_eq!(byte, "0110x111".parse::<TernaryByte>()?);
/// assert_eq!(byte.to_string(), "0110x111");
/// # Ok::<(), ternary_utf8::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TernaryByte {
    bits: [Bit; BITS_PER_BYTE],
}

impl TernaryByte {
    /// A byte with every bit unknown.
    pub const WILDCARD: TernaryByte = TernaryByte { bits: [Bit::Wildcard; BITS_PER_BYTE] };

    pub const fn new(bits: [Bit; BITS_PER_BYTE]) -> TernaryByte {
        TernaryByte { bits }
    }

    /// Builds an all-concrete byte from the binary expansion of `value`.
    ///
    /// Fails with a range error unless `0 <= value <= 255`. Use the
    /// `From<u8>` impl when the value is already known to fit.
    pub fn from_integer(value: i64) -> Result<TernaryByte, Error> {
        u8::try_from(value).map(TernaryByte::from).map_err(|_| Error::range(value))
    }

    /// Parses an 8 character pattern of `0`, `1` and `x` (wildcard).
    ///
    /// # Example
    ///
    /// ```
    /// use ternary_utf8::{Bit, TernaryByte};
    ///
    /// let byte = TernaryByte::from_pattern("0x010111")?;
    /// assert_eq!(byte.bit(1), Bit::Wildcard);
    /// assert!(TernaryByte::from_pattern("0x01").is_err());
    /// # Ok::<(), ternary_utf8::Error>(())
    /// ```
    pub fn from_pattern(pattern: &str) -> Result<TernaryByte, Error> {
        let len = pattern.chars().count();
        if len != BITS_PER_BYTE {
            return Err(Error::pattern_length(len));
        }
        let mut bits = [Bit::Zero; BITS_PER_BYTE];
        for (position, (slot, c)) in bits.iter_mut().zip(pattern.chars()).enumerate() {
            *slot = Bit::from_char(c).ok_or_else(|| Error::pattern_char(position, c))?;
        }
        Ok(TernaryByte { bits })
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 8`.
    #[cfg_attr(feature = "perf-inline", inline(always))]
    pub fn bit(&self, index: usize) -> Bit {
        self.bits[index]
    }

    /// Returns a copy of this byte with the bit at `index` replaced.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 8`.
    #[must_use]
    pub fn with_bit(mut self, index: usize, bit: Bit) -> TernaryByte {
        self.bits[index] = bit;
        self
    }

    pub fn bits(&self) -> [Bit; BITS_PER_BYTE] {
        self.bits
    }

    /// Whether no bit of this byte is a wildcard.
    pub fn is_concrete(&self) -> bool {
        self.bits.iter().all(|bit| bit.is_concrete())
    }

    /// The numeric value of this byte, if every bit is concrete.
    pub fn to_u8(&self) -> Option<u8> {
        self.bits.iter().try_fold(0u8, |acc, bit| match bit {
            Bit::Zero => Some(acc << 1),
            Bit::One => Some((acc << 1) | 1),
            Bit::Wildcard => None,
        })
    }

    /// Whether the most significant bit is set, i.e. whether this byte can
    /// only occur inside a multi-byte encoding.
    ///
    /// Fails with an ambiguity error if that bit is a wildcard.
    #[cfg_attr(feature = "perf-inline", inline(always))]
    pub fn is_control_byte(&self) -> Result<bool, Error> {
        match self.bits[0] {
            Bit::One => Ok(true),
            Bit::Zero => Ok(false),
            Bit::Wildcard => Err(Error::ambiguous_bit(0)),
        }
    }

    /// Determines the UTF-8 role of this byte from its leading bits.
    ///
    /// Bits are examined left to right. The first concrete zero decides the
    /// role from the number of ones before it. Reaching a wildcard before
    /// that zero, or a fifth leading one, gives [`ByteRole::Unknown`]. This
    /// never fails: unlike [`TernaryByte::is_control_byte`], ambiguity is an
    /// ordinary outcome here.
    #[cfg_attr(feature = "perf-inline", inline(always))]
    pub fn classify(&self) -> ByteRole {
        for (ones, bit) in self.bits[..MAX_ROLE_PREFIX].iter().enumerate() {
            match bit {
                Bit::One => continue,
                Bit::Zero => return ByteRole::from_leading_ones(ones),
                Bit::Wildcard => return ByteRole::Unknown,
            }
        }
        ByteRole::Unknown
    }
}

impl From<u8> for TernaryByte {
    fn from(value: u8) -> TernaryByte {
        let mut bits = [Bit::Zero; BITS_PER_BYTE];
        for (i, bit) in bits.iter_mut().enumerate() {
            if value & (0b1000_0000 >> i) != 0 {
                *bit = Bit::One;
            }
        }
        TernaryByte { bits }
    }
}

impl From<[Bit; BITS_PER_BYTE]> for TernaryByte {
    fn from(bits: [Bit; BITS_PER_BYTE]) -> TernaryByte {
        TernaryByte { bits }
    }
}

impl TryFrom<i64> for TernaryByte {
    type Error = Error;

    fn try_from(value: i64) -> Result<TernaryByte, Error> {
        TernaryByte::from_integer(value)
    }
}

impl FromStr for TernaryByte {
    type Err = Error;

    fn from_str(pattern: &str) -> Result<TernaryByte, Error> {
        TernaryByte::from_pattern(pattern)
    }
}

/// Position-wise XOR. Wherever either operand has a wildcard the result has
/// one too.
impl BitXor for TernaryByte {
    type Output = TernaryByte;

    fn bitxor(self, rhs: TernaryByte) -> TernaryByte {
        let mut bits = self.bits;
        for (bit, other) in bits.iter_mut().zip(rhs.bits) {
            *bit = *bit ^ other;
        }
        TernaryByte { bits }
    }
}

impl core::fmt::Display for TernaryByte {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for bit in self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for TernaryByte {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "TernaryByte({})", self)
    }
}
