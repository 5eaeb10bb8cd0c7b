//! Bytes whose bits may be `0`, `1` or unknown, and checks that decide
//! whether a sequence of such bytes could be well-formed UTF-8.

pub use byte::{Bit, TernaryByte, BITS_PER_BYTE};
pub use cursor::{Bytes, Cursor, IntoCursor};
#[cfg(feature = "ropey")]
pub use cursor::RopeyCursor;
pub use error::{Error, ErrorKind};
pub use role::ByteRole;
pub use sequence::ByteSequence;
pub use validator::{Builder, Check, Config, Validator};

mod byte;
mod cursor;
mod error;
mod role;
mod sequence;
mod validator;

#[cfg(test)]
mod test_chunks;
