//! Error types for the X13 digest core

use std::borrow::Cow;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// A fixed-size digest container received the wrong number of bytes.
    #[error("invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A chain stage failed to produce a well-formed 512-bit digest.
    #[error("stage {index} ({name}) failed to produce a 512-bit digest")]
    StageComputation { index: usize, name: &'static str },

    /// The accelerated backend failed at call time.
    #[error("accelerated backend failed: {0}")]
    BackendComputation(Cow<'static, str>),

    /// An offset/length pair does not describe a valid sub-range of the input.
    #[error("range out of bounds: offset {offset} + length {length} exceeds buffer of {buffer} bytes")]
    Range {
        offset: usize,
        length: usize,
        buffer: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
