//! Portable implementations of the chain stages the ecosystem does not
//! package as crates.
//!
//! Each module exposes a single `digest(input) -> [u8; 64]` function: a pure,
//! deterministic map with no state shared across invocations. Everything here
//! is plain safe Rust over fixed-size arrays; the chain spends almost all of
//! its time on 64-byte inputs, so there is nothing to gain from buffering or
//! streaming interfaces.

pub(crate) mod aes;
pub(crate) mod bmw;
pub(crate) mod cubehash;
pub(crate) mod echo;
pub(crate) mod fugue;
pub(crate) mod hamsi;
pub(crate) mod luffa;
pub(crate) mod shavite;
pub(crate) mod simd;
