//! Content fingerprints for tag trees
//!
//! The fingerprint is a 64-bit FNV-1a hash over a canonical byte encoding of
//! the tree. Every value is prefixed with its variant id and every string
//! and sequence with its length, so structurally different trees cannot
//! produce the same byte stream.

use super::value::{Compound, Tag};
use std::fmt;

/// FNV-1a offset basis (64-bit)
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a prime (64-bit)
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Content-derived cache key for a description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(u64);

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Streaming FNV-1a state
struct Fnv1a(u64);

impl Fnv1a {
    fn new() -> Self {
        Self(FNV_OFFSET_BASIS)
    }

    #[inline]
    fn write(&mut self, data: &[u8]) {
        for &byte in data {
            self.0 ^= byte as u64;
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
    }

    fn write_len(&mut self, len: usize) {
        self.write(&(len as u64).to_le_bytes());
    }

    fn write_str(&mut self, s: &str) {
        self.write_len(s.len());
        self.write(s.as_bytes());
    }
}

/// Compute the fingerprint of a description
pub fn fingerprint(description: &Compound) -> Fingerprint {
    let mut state = Fnv1a::new();
    hash_compound(&mut state, description);
    Fingerprint(state.0)
}

fn hash_compound(state: &mut Fnv1a, compound: &Compound) {
    state.write_len(compound.len());
    for (name, value) in compound.iter() {
        state.write_str(name);
        hash_tag(state, value);
    }
}

fn hash_tag(state: &mut Fnv1a, tag: &Tag) {
    match tag {
        Tag::Byte(v) => {
            state.write(&[1]);
            state.write(&v.to_le_bytes());
        }
        Tag::Short(v) => {
            state.write(&[2]);
            state.write(&v.to_le_bytes());
        }
        Tag::Int(v) => {
            state.write(&[3]);
            state.write(&v.to_le_bytes());
        }
        Tag::Long(v) => {
            state.write(&[4]);
            state.write(&v.to_le_bytes());
        }
        Tag::Float(v) => {
            state.write(&[5]);
            state.write(&v.to_bits().to_le_bytes());
        }
        Tag::Double(v) => {
            state.write(&[6]);
            state.write(&v.to_bits().to_le_bytes());
        }
        Tag::String(s) => {
            state.write(&[8]);
            state.write_str(s);
        }
        Tag::List(items) => {
            state.write(&[9]);
            state.write_len(items.len());
            for item in items {
                hash_tag(state, item);
            }
        }
        Tag::Compound(c) => {
            state.write(&[10]);
            hash_compound(state, c);
        }
    }
}
