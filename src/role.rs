/*!
The role a byte plays in the UTF-8 encoding of a codepoint.

```text
    role           pattern    continuations
    Ascii          0xxxxxxx   0
    Continuation   10xxxxxx   -
    LeadOfTwo      110xxxxx   1
    LeadOfThree    1110xxxx   2
    LeadOfFour     11110xxx   3
    Unknown        11111xxx   -  (or a wildcard where the role is decided)
```
*/

/// Classification of a byte according to its leading bits.
///
/// This only looks at the prefix that selects the role. It does not reject
/// overlong encodings, surrogates or codepoints above `U+10FFFF`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteRole {
    Ascii,
    Continuation,
    LeadOfTwo,
    LeadOfThree,
    LeadOfFour,
    /// Five or more leading ones, or a wildcard bit at a deciding position.
    Unknown,
}

impl ByteRole {
    /// Classifies a concrete byte.
    ///
    /// This agrees with [`TernaryByte::classify`](crate::TernaryByte::classify)
    /// for every byte built from an integer.
    #[cfg_attr(feature = "perf-inline", inline(always))]
    pub fn of(byte: u8) -> ByteRole {
        if byte <= 0x7F {
            ByteRole::Ascii
        } else if byte & 0b1100_0000 == 0b1000_0000 {
            ByteRole::Continuation
        } else if byte <= 0b1101_1111 {
            ByteRole::LeadOfTwo
        } else if byte <= 0b1110_1111 {
            ByteRole::LeadOfThree
        } else if byte <= 0b1111_0111 {
            ByteRole::LeadOfFour
        } else {
            ByteRole::Unknown
        }
    }

    /// Maps the number of ones preceding the first concrete zero to a role.
    #[cfg_attr(feature = "perf-inline", inline(always))]
    pub(crate) fn from_leading_ones(ones: usize) -> ByteRole {
        match ones {
            0 => ByteRole::Ascii,
            1 => ByteRole::Continuation,
            2 => ByteRole::LeadOfTwo,
            3 => ByteRole::LeadOfThree,
            4 => ByteRole::LeadOfFour,
            _ => ByteRole::Unknown,
        }
    }

    /// Number of continuation bytes that must follow a byte of this role.
    ///
    /// Returns `None` for roles that cannot start an encoded codepoint.
    pub fn continuations(self) -> Option<usize> {
        match self {
            ByteRole::Ascii => Some(0),
            ByteRole::LeadOfTwo => Some(1),
            ByteRole::LeadOfThree => Some(2),
            ByteRole::LeadOfFour => Some(3),
            ByteRole::Continuation | ByteRole::Unknown => None,
        }
    }

    pub fn is_lead(self) -> bool {
        matches!(self, ByteRole::LeadOfTwo | ByteRole::LeadOfThree | ByteRole::LeadOfFour)
    }
}

impl core::fmt::Display for ByteRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ByteRole::Ascii => "ascii",
            ByteRole::Continuation => "continuation",
            ByteRole::LeadOfTwo => "lead of two",
            ByteRole::LeadOfThree => "lead of three",
            ByteRole::LeadOfFour => "lead of four",
            ByteRole::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
