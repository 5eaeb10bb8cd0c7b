use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::Cursor;

const MAX_CHUNK_LEN: usize = 16;

#[derive(Debug)]
struct XorShift64Star {
    state: Cell<u64>,
}

impl XorShift64Star {
    fn new() -> Self {
        // any non-zero seed works, hash a global counter to get one
        let mut seed = 0;
        while seed == 0 {
            let mut hasher = DefaultHasher::new();
            static COUNTER: AtomicUsize = AtomicUsize::new(0);
            hasher.write_usize(COUNTER.fetch_add(1, Ordering::Relaxed));
            seed = hasher.finish();
        }
        XorShift64Star { state: Cell::new(seed) }
    }

    fn next(&self) -> u64 {
        let mut x = self.state.get();
        debug_assert_ne!(x, 0);
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state.set(x);
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Return a value from `0..n`.
    fn next_usize(&self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

/// Splits a haystack into chunks of random length. Unlike a rope, chunk
/// boundaries may fall inside an encoded codepoint.
#[derive(Debug)]
pub(crate) struct RandomSlices<'a> {
    haystack: &'a [u8],
    pos: usize,
    size: usize,
    ran: XorShift64Star,
}

impl<'a> RandomSlices<'a> {
    pub fn new(haystack: &'a [u8]) -> Self {
        let mut res = RandomSlices { haystack, pos: 0, size: 0, ran: XorShift64Star::new() };
        res.advance();
        res
    }
}

impl Cursor for RandomSlices<'_> {
    fn chunk(&self) -> &[u8] {
        &self.haystack[self.pos..self.pos + self.size]
    }

    fn advance(&mut self) -> bool {
        let new_start = self.pos + self.size;
        if new_start == self.haystack.len() {
            return false;
        }
        let next_size = self.ran.next_usize(MAX_CHUNK_LEN) + 1;
        self.pos = new_start;
        self.size = next_size.min(self.haystack.len() - new_start);
        true
    }
}

#[derive(Debug)]
pub(crate) struct DeterministicSlices<'a> {
    haystacks: &'a [&'a [u8]],
    pos: usize,
}

impl<'a> DeterministicSlices<'a> {
    pub fn new(haystacks: &'a [&'a [u8]]) -> Self {
        DeterministicSlices { haystacks, pos: 0 }
    }
}

impl Cursor for DeterministicSlices<'_> {
    fn chunk(&self) -> &[u8] {
        self.haystacks.get(self.pos).copied().unwrap_or_default()
    }

    fn advance(&mut self) -> bool {
        if self.pos + 1 >= self.haystacks.len() {
            return false;
        }
        self.pos += 1;
        true
    }
}
