//! The sequential X13 chain
//!
//! A strict left fold: the raw message enters the first stage, every later
//! stage consumes the full 64-byte output of its predecessor, and the output
//! of the terminal stage (Fugue-512) is truncated to 32 bytes. No branching,
//! no early exit, no per-stage configuration.

use crate::digest::{Digest256, Digest512};
use crate::error::{Error, Result};
use crate::stage::{StageKind, STAGE_COUNT};

/// The portable X13 pipeline.
///
/// Holds the fixed, ordered stage list. Construction is free; the pipeline
/// carries no mutable state, so one instance may serve concurrent callers.
#[derive(Clone, Copy, Debug)]
pub struct ChainPipeline {
    stages: [StageKind; STAGE_COUNT],
}

impl ChainPipeline {
    /// Pipeline over the canonical X13 stage order.
    pub const fn new() -> Self {
        Self {
            stages: StageKind::CHAIN,
        }
    }

    /// Pipeline over an explicit stage order. Test-only: the public chain
    /// order is a contract and is never configurable through the API.
    #[cfg(test)]
    pub(crate) const fn with_stages(stages: [StageKind; STAGE_COUNT]) -> Self {
        Self { stages }
    }

    /// Run the full chain over `message` and truncate the terminal output.
    ///
    /// The empty message is valid input to the first stage. A stage that
    /// fails to produce a well-formed 512-bit digest aborts the whole run
    /// with [`Error::StageComputation`]; there is no partial chain state.
    pub fn run(&self, message: &[u8]) -> Result<Digest256> {
        let mut rolling: Digest512 = self.step(0, message)?;
        for index in 1..STAGE_COUNT {
            rolling = self.step(index, rolling.as_bytes())?;
        }
        Ok(rolling.truncate256())
    }

    fn step(&self, index: usize, input: &[u8]) -> Result<Digest512> {
        let stage = self.stages[index];
        stage.compute(input).map_err(|_| Error::StageComputation {
            index,
            name: stage.name(),
        })
    }
}

impl Default for ChainPipeline {
    fn default() -> Self {
        Self::new()
    }
}
