use log::debug;

use crate::error::Error;
use crate::sequence::ByteSequence;

/// Which of the two UTF-8 checks a [`Validator`] runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Check {
    /// [`ByteSequence::looks_like_utf8`]: rejects isolated high bit bytes
    /// only. Approximate, but never classifies a byte.
    Heuristic,
    /// [`ByteSequence::is_well_formed_utf8`]: the full lead/continuation
    /// grammar.
    #[default]
    Grammar,
}

/// The configuration used for building a [`Validator`].
///
/// The default runs the grammar check.
#[derive(Clone, Debug, Default)]
pub struct Config {
    check: Option<Check>,
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    /// Selects the check to run.
    pub fn check(self, check: Check) -> Config {
        Config { check: Some(check) }
    }

    pub fn get_check(&self) -> Check {
        self.check.unwrap_or_default()
    }

    /// Overwrites every option set in `o` on a copy of `self`.
    pub(crate) fn overwrite(&self, o: Config) -> Config {
        Config { check: o.check.or(self.check) }
    }
}

/// A builder for a [`Validator`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    pub fn new() -> Builder {
        Builder::default()
    }

    pub fn configure(&mut self, config: Config) -> &mut Builder {
        self.config = self.config.overwrite(config);
        self
    }

    pub fn build(&self) -> Validator {
        debug!("validator built with {:?} check", self.config.get_check());
        Validator { check: self.config.get_check() }
    }
}

/// Runs one configured UTF-8 check over byte sequences.
///
/// # Example
///
/// ```
/// use ternary_utf8::{ByteSequence, Check, Config, Validator};
///
/// let seq = ByteSequence::from_cursor(&b"\xC3"[..]);
/// let grammar = Validator::new();
/// let heuristic = Validator::builder().configure(Config::new().check(Check::Heuristic)).build();
/// assert!(!grammar.validate(&seq)?);
/// assert!(!heuristic.validate(&seq)?);
/// # Ok::<(), ternary_utf8::Error>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Validator {
    check: Check,
}

impl Validator {
    /// A validator running the grammar check.
    pub fn new() -> Validator {
        Validator::builder().build()
    }

    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn check(&self) -> Check {
        self.check
    }

    pub fn validate(&self, seq: &ByteSequence) -> Result<bool, Error> {
        match self.check {
            Check::Heuristic => seq.looks_like_utf8(),
            Check::Grammar => seq.is_well_formed_utf8(),
        }
    }
}

impl Default for Validator {
    fn default() -> Validator {
        Validator::new()
    }
}
