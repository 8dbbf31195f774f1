//! The thirteen chain stages
//!
//! Each stage is a pure function from a byte sequence to a 512-bit digest.
//! Five stages bind RustCrypto implementations of the underlying primitive;
//! the rest are portable implementations under [`crate::stages`]. Dispatch is
//! a match over [`StageKind`], so the set of stages and their identities are
//! fixed at compile time.

use crate::digest::Digest512;
use crate::error::Result;
use crate::stages;

/// Identifier of one 512-bit primitive in the X13 chain.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StageKind {
    Blake512,
    Bmw512,
    Groestl512,
    Skein512,
    Jh512,
    Keccak512,
    Luffa512,
    CubeHash512,
    Shavite512,
    Simd512,
    Echo512,
    Hamsi512,
    Fugue512,
}

/// Number of stages in the chain.
pub const STAGE_COUNT: usize = 13;

impl StageKind {
    /// The X13 chain order. Part of the public contract: reordering any two
    /// entries changes every digest this crate produces.
    pub const CHAIN: [StageKind; STAGE_COUNT] = [
        StageKind::Blake512,
        StageKind::Bmw512,
        StageKind::Groestl512,
        StageKind::Skein512,
        StageKind::Jh512,
        StageKind::Keccak512,
        StageKind::Luffa512,
        StageKind::CubeHash512,
        StageKind::Shavite512,
        StageKind::Simd512,
        StageKind::Echo512,
        StageKind::Hamsi512,
        StageKind::Fugue512,
    ];

    /// Human-readable primitive name, used in error reports and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            StageKind::Blake512 => "BLAKE-512",
            StageKind::Bmw512 => "BMW-512",
            StageKind::Groestl512 => "Groestl-512",
            StageKind::Skein512 => "Skein-512",
            StageKind::Jh512 => "JH-512",
            StageKind::Keccak512 => "Keccak-512",
            StageKind::Luffa512 => "Luffa-512",
            StageKind::CubeHash512 => "CubeHash-512",
            StageKind::Shavite512 => "SHAvite-512",
            StageKind::Simd512 => "SIMD-512",
            StageKind::Echo512 => "ECHO-512",
            StageKind::Hamsi512 => "Hamsi-512",
            StageKind::Fugue512 => "Fugue-512",
        }
    }

    /// Compute this stage's 512-bit digest of `input`.
    ///
    /// `input` may be of arbitrary length; within the chain every stage after
    /// the first always receives exactly 64 bytes. Stages are deterministic
    /// and share no state across invocations.
    pub fn compute(self, input: &[u8]) -> Result<Digest512> {
        match self {
            StageKind::Blake512 => blake512(input),
            StageKind::Bmw512 => Ok(stages::bmw::digest(input).into()),
            StageKind::Groestl512 => groestl512(input),
            StageKind::Skein512 => skein512(input),
            StageKind::Jh512 => jh512(input),
            StageKind::Keccak512 => keccak512(input),
            StageKind::Luffa512 => Ok(stages::luffa::digest(input).into()),
            StageKind::CubeHash512 => Ok(stages::cubehash::digest(input).into()),
            StageKind::Shavite512 => Ok(stages::shavite::digest(input).into()),
            StageKind::Simd512 => Ok(stages::simd::digest(input).into()),
            StageKind::Echo512 => Ok(stages::echo::digest(input).into()),
            StageKind::Hamsi512 => Ok(stages::hamsi::digest(input).into()),
            StageKind::Fugue512 => Ok(stages::fugue::digest(input).into()),
        }
    }
}

// Registry-crate bindings. Each goes through `Digest512::from_slice` so the
// 64-byte output contract on the external implementation is checked rather
// than assumed. The trait imports stay function-local because the crates pin
// differing `digest` versions.

fn blake512(input: &[u8]) -> Result<Digest512> {
    use blake_hash::digest::Digest as _;
    Digest512::from_slice(blake_hash::Blake512::digest(input).as_slice())
}

fn groestl512(input: &[u8]) -> Result<Digest512> {
    use groestl::digest::Digest as _;
    Digest512::from_slice(groestl::Groestl512::digest(input).as_slice())
}

fn skein512(input: &[u8]) -> Result<Digest512> {
    use skein::digest::Digest as _;
    Digest512::from_slice(
        skein::Skein512::<skein::digest::consts::U64>::digest(input).as_slice(),
    )
}

fn jh512(input: &[u8]) -> Result<Digest512> {
    use jh::digest::Digest as _;
    Digest512::from_slice(jh::Jh512::digest(input).as_slice())
}

fn keccak512(input: &[u8]) -> Result<Digest512> {
    use sha3::digest::Digest as _;
    Digest512::from_slice(sha3::Keccak512::digest(input).as_slice())
}
