//! Fixed-size digest containers
//!
//! `Digest512` carries the 64-byte output of a chain stage between steps;
//! `Digest256` is the externally visible 32-byte result, produced only by
//! truncating the terminal stage's output.

use core::fmt;

use crate::error::{Error, Result};

/// Immutable 512-bit digest, the output of a single chain stage.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Digest512([u8; 64]);

impl Digest512 {
    /// Size of the container in bytes.
    pub const LEN: usize = 64;

    /// Build a digest from a byte slice.
    ///
    /// Fails with [`Error::InvalidLength`] unless the slice is exactly
    /// 64 bytes; the container is never partially filled.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::LEN {
            return Err(Error::InvalidLength {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }
        let mut buf = [0u8; Self::LEN];
        buf.copy_from_slice(bytes);
        Ok(Self(buf))
    }

    /// The raw 64 bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Truncate to the first 32 bytes.
    ///
    /// A pure slice: no hashing, no padding. This is the only way a
    /// [`Digest256`] is produced.
    #[inline]
    pub fn truncate256(&self) -> Digest256 {
        let mut buf = [0u8; Digest256::LEN];
        buf.copy_from_slice(&self.0[..Digest256::LEN]);
        Digest256(buf)
    }
}

impl From<[u8; 64]> for Digest512 {
    fn from(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Digest512 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Digest512 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest512({self})")
    }
}

impl fmt::Display for Digest512 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// The final 256-bit X13 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest256([u8; 32]);

impl Digest256 {
    /// Size of the digest in bytes.
    pub const LEN: usize = 32;

    /// The raw 32 bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Consume the digest, returning the raw array.
    #[inline]
    pub fn into_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl From<[u8; 32]> for Digest256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Digest256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Digest256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest256({self})")
    }
}

impl fmt::Display for Digest256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
