//! # X13 Core Algorithm
//!
//! A chained proof-of-work hash used as a block identity function: thirteen
//! distinct 512-bit primitives applied in a fixed sequence, with the final
//! 512-bit output truncated to 256 bits.
//!
//! ## Chain
//!
//! ```text
//! input -> BLAKE -> BMW -> Groestl -> Skein -> JH -> Keccak -> Luffa
//!       -> CubeHash -> SHAvite -> SIMD -> ECHO -> Hamsi -> Fugue
//!       -> first 32 bytes
//! ```
//!
//! Every stage after the first consumes exactly the 64-byte output of its
//! predecessor. The order is part of the public contract: the same input
//! bytes must produce the identical 32-byte digest in every implementation,
//! however internally accelerated.
//!
//! ## Backends
//!
//! Calls go through a process-wide backend selection made once at startup.
//! An optional [`Accelerator`] may be installed before the first call; if it
//! binds, it services all digests, and it is contractually required to be
//! bit-identical to the portable [`ChainPipeline`]. If it is absent or fails
//! to bind, the portable pipeline serves every call.
//!
//! ## Example
//!
//! ```rust
//! let digest = x13_core::digest(b"block header bytes")?;
//! assert_eq!(digest.as_bytes().len(), 32);
//!
//! // Hash a sub-range without copying
//! let buf = [0u8; 80];
//! let digest = x13_core::digest_range(&buf, 4, 72)?;
//! # Ok::<(), x13_core::Error>(())
//! ```

mod backend;
mod digest;
mod error;
mod ffi;
mod pipeline;
mod stage;
mod stages;

pub use backend::{
    digest, digest_range, initialize, install_accelerator, Accelerator, Backend, BackendSelector,
};
pub use digest::{Digest256, Digest512};
pub use error::{Error, Result};
pub use pipeline::ChainPipeline;
pub use stage::{StageKind, STAGE_COUNT};

#[cfg(test)]
mod tests;
