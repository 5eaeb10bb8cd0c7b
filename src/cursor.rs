//! Chunked access to concrete byte haystacks.
//!
//! A [`ByteSequence`](crate::ByteSequence) is usually built from bytes that
//! already exist somewhere else, often not in one contiguous buffer. A
//! [`Cursor`] walks such a haystack one chunk at a time so the sequence can
//! be filled without first copying everything into a single slice.

pub trait IntoCursor {
    type Cursor: Cursor;
    fn into_cursor(self) -> Self::Cursor;
}

impl<C: Cursor> IntoCursor for C {
    type Cursor = Self;

    fn into_cursor(self) -> Self {
        self
    }
}

pub trait Cursor {
    /// The chunk the cursor currently points at.
    fn chunk(&self) -> &[u8];
    /// Moves to the next chunk. Returns false once the haystack is
    /// exhausted, in which case the current chunk is left unchanged.
    fn advance(&mut self) -> bool;
}

impl Cursor for &[u8] {
    fn chunk(&self) -> &[u8] {
        self
    }

    // a single chunk, nothing to advance to
    fn advance(&mut self) -> bool {
        false
    }
}

impl Cursor for &str {
    fn chunk(&self) -> &[u8] {
        self.as_bytes()
    }

    fn advance(&mut self) -> bool {
        false
    }
}

/// A cursor over an iterator of byte chunks.
pub struct Bytes<'a, I> {
    iter: I,
    current: &'a [u8],
}

impl<'a, I: Iterator<Item = &'a [u8]>> Bytes<'a, I> {
    pub fn new(iter: I) -> Self {
        Self { iter, current: &[] }
    }
}

impl<'a, I: Iterator<Item = &'a [u8]>> Cursor for Bytes<'a, I> {
    fn chunk(&self) -> &[u8] {
        self.current
    }

    fn advance(&mut self) -> bool {
        for next in self.iter.by_ref() {
            if next.is_empty() {
                continue;
            }
            self.current = next;
            return true;
        }
        false
    }
}

#[cfg(feature = "ropey")]
pub use self::rope::RopeyCursor;

#[cfg(feature = "ropey")]
mod rope {
    use super::{Cursor, IntoCursor};

    impl<'h> IntoCursor for ropey::iter::Chunks<'h> {
        type Cursor = RopeyCursor<'h>;

        fn into_cursor(self) -> Self::Cursor {
            RopeyCursor::new(self)
        }
    }

    impl<'h> IntoCursor for ropey::RopeSlice<'h> {
        type Cursor = RopeyCursor<'h>;

        fn into_cursor(self) -> Self::Cursor {
            RopeyCursor::new(self.chunks())
        }
    }

    impl<'h> IntoCursor for &'h ropey::Rope {
        type Cursor = RopeyCursor<'h>;

        fn into_cursor(self) -> Self::Cursor {
            RopeyCursor::new(self.chunks())
        }
    }

    pub struct RopeyCursor<'a> {
        iter: ropey::iter::Chunks<'a>,
        current: &'a [u8],
    }

    impl<'a> RopeyCursor<'a> {
        pub fn new(mut iter: ropey::iter::Chunks<'a>) -> Self {
            Self { current: iter.next().unwrap_or_default().as_bytes(), iter }
        }
    }

    impl Cursor for RopeyCursor<'_> {
        fn chunk(&self) -> &[u8] {
            self.current
        }

        fn advance(&mut self) -> bool {
            for next in self.iter.by_ref() {
                if next.is_empty() {
                    continue;
                }
                self.current = next.as_bytes();
                return true;
            }
            false
        }
    }
}
