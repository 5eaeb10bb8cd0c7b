use crate::byte::TernaryByte;

/// An error that occurs when constructing a [`TernaryByte`], editing a
/// [`ByteSequence`](crate::ByteSequence) or running one of its checks.
///
/// There are four broad families of failure, each of which has a
/// predicate on this type:
///
/// * A range error ([`Error::is_range`]): an integer outside of `0..=255`
/// was used to build a byte.
/// * A format error ([`Error::is_format`]): a bit pattern had the wrong
/// length or an unexpected character, or an absent byte was handed to a
/// sequence.
/// * An ambiguity error ([`Error::is_ambiguous`]): a question that needs a
/// concrete bit was asked of a byte whose bit is a wildcard.
/// * A classification failure ([`Error::is_unclassifiable`]): the grammar
/// check met a byte it cannot assign a role to. This is a broken caller
/// precondition and is deliberately distinct from "not UTF-8".
///
/// Errors raised while walking a sequence also remember the index of the
/// element that caused them, see [`Error::index`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    index: Option<usize>,
}

/// The specific reason an [`Error`] occurred.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An integer outside of `0..=255` was used to build a byte.
    Range { value: i64 },
    /// A bit pattern did not have exactly 8 characters.
    PatternLength { len: usize },
    /// A bit pattern contained something other than `0`, `1` or `x`.
    PatternChar { position: usize, found: char },
    /// An absent byte was appended to or stored in a sequence.
    MissingByte,
    /// The bit at `position` is a wildcard but a concrete bit was needed.
    AmbiguousBit { position: usize },
    /// The byte does not classify as any UTF-8 role.
    Unclassifiable { byte: TernaryByte },
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error { kind, index: None }
    }

    pub(crate) fn range(value: i64) -> Error {
        Error::new(ErrorKind::Range { value })
    }

    pub(crate) fn pattern_length(len: usize) -> Error {
        Error::new(ErrorKind::PatternLength { len })
    }

    pub(crate) fn pattern_char(position: usize, found: char) -> Error {
        Error::new(ErrorKind::PatternChar { position, found })
    }

    pub(crate) fn missing_byte() -> Error {
        Error::new(ErrorKind::MissingByte)
    }

    pub(crate) fn ambiguous_bit(position: usize) -> Error {
        Error::new(ErrorKind::AmbiguousBit { position })
    }

    pub(crate) fn unclassifiable(byte: TernaryByte) -> Error {
        Error::new(ErrorKind::Unclassifiable { byte })
    }

    /// Attaches the index of the sequence element this error was raised for.
    pub(crate) fn at(mut self, index: usize) -> Error {
        self.index = Some(index);
        self
    }

    /// Returns the specific kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// If this error was raised while walking a sequence, the index of the
    /// element that caused it.
    ///
    /// Errors from building or editing a single byte never carry an index.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_range(&self) -> bool {
        matches!(self.kind, ErrorKind::Range { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::PatternLength { .. } | ErrorKind::PatternChar { .. } | ErrorKind::MissingByte
        )
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self.kind, ErrorKind::AmbiguousBit { .. })
    }

    pub fn is_unclassifiable(&self) -> bool {
        matches!(self.kind, ErrorKind::Unclassifiable { .. })
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::Range { value } => {
                write!(f, "cannot build a byte from integer value {}", value)?
            }
            ErrorKind::PatternLength { len } => {
                write!(f, "bit pattern has {} characters, expected 8", len)?
            }
            ErrorKind::PatternChar { position, found } => {
                write!(f, "invalid character {:?} at position {} of bit pattern", found, position)?
            }
            ErrorKind::MissingByte => write!(f, "cannot store a missing byte in a sequence")?,
            ErrorKind::AmbiguousBit { position } => {
                write!(f, "bit {} is a wildcard, cannot decide without a concrete bit", position)?
            }
            ErrorKind::Unclassifiable { byte } => {
                write!(f, "unable to classify byte {} as a UTF-8 role", byte)?
            }
        }
        if let Some(index) = self.index {
            write!(f, " (at index {})", index)?;
        }
        Ok(())
    }
}
