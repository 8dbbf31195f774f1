//! Backend selection
//!
//! The original system bound an optional native library at startup and fell
//! back to the portable chain when loading failed. Here the accelerated path
//! is an injectable [`Accelerator`] installed before initialization; the
//! selection is made once, published process-wide, and never re-probed.
//!
//! Probe failures downgrade to the portable pipeline and are reported on the
//! diagnostic channel. Call-time failures of a bound accelerator surface as
//! [`Error::BackendComputation`]; an incorrect result is never silently
//! substituted.

use std::sync::{Mutex, OnceLock};

use tracing::{info, warn};

use crate::digest::Digest256;
use crate::error::{Error, Result};
use crate::pipeline::ChainPipeline;

/// Which implementation services `digest` calls.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Backend {
    /// An installed accelerator passed its bind-time probe.
    Accelerated,
    /// The reference chain pipeline.
    Portable,
}

/// An alternative implementation of the full X13 chain.
///
/// Contract: bit-identical to [`ChainPipeline::run`] for every input. The
/// selector cannot verify that equivalence; it only checks that the
/// accelerator answers at bind time and propagates call-time failures.
pub trait Accelerator: Send + Sync {
    /// Compute the full chain digest of `message`.
    fn digest(&self, message: &[u8]) -> Result<Digest256>;

    /// Short name for diagnostics.
    fn describe(&self) -> &str {
        "accelerated"
    }
}

/// Bind-time probe input. Any fixed input works; empty keeps the probe cheap.
const PROBE_INPUT: &[u8] = b"";

struct Selection {
    backend: Backend,
    accelerator: Option<Box<dyn Accelerator>>,
}

/// One-shot chooser between an installed accelerator and the portable chain.
///
/// The process-wide instance sits behind the free functions below; separate
/// instances exist so the selection logic is testable without global state.
pub struct BackendSelector {
    slot: Mutex<Option<Box<dyn Accelerator>>>,
    selection: OnceLock<Selection>,
    pipeline: ChainPipeline,
}

impl BackendSelector {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            selection: OnceLock::new(),
            pipeline: ChainPipeline::new(),
        }
    }

    /// Offer an accelerator for the next initialization.
    ///
    /// Fails once the backend has been selected: the selection is
    /// single-assignment and is never re-probed.
    pub fn install_accelerator(&self, accelerator: Box<dyn Accelerator>) -> Result<()> {
        if self.selection.get().is_some() {
            return Err(Error::BackendComputation(
                "backend already initialized; accelerator not installed".into(),
            ));
        }
        *self.slot.lock().expect("accelerator slot poisoned") = Some(accelerator);
        Ok(())
    }

    /// Select the backend, probing any installed accelerator.
    ///
    /// Idempotent; concurrent first calls settle on a single selection.
    /// Probe failure is not an error for the caller: it downgrades to
    /// [`Backend::Portable`] and logs the reason.
    pub fn initialize(&self) -> Backend {
        self.selection.get_or_init(|| self.probe()).backend
    }

    fn probe(&self) -> Selection {
        let candidate = self.slot.lock().expect("accelerator slot poisoned").take();
        match candidate {
            Some(accelerator) => match accelerator.digest(PROBE_INPUT) {
                Ok(_) => {
                    info!(name = accelerator.describe(), "accelerated x13 backend bound");
                    Selection {
                        backend: Backend::Accelerated,
                        accelerator: Some(accelerator),
                    }
                }
                Err(err) => {
                    warn!(
                        name = accelerator.describe(),
                        %err,
                        "accelerated x13 backend failed its probe, using portable pipeline"
                    );
                    Selection {
                        backend: Backend::Portable,
                        accelerator: None,
                    }
                }
            },
            None => {
                info!("no accelerated x13 backend available, using portable pipeline");
                Selection {
                    backend: Backend::Portable,
                    accelerator: None,
                }
            }
        }
    }

    /// The selected backend, initializing on first use.
    pub fn backend(&self) -> Backend {
        self.initialize()
    }

    /// Compute the X13 digest of `message`.
    pub fn digest(&self, message: &[u8]) -> Result<Digest256> {
        self.initialize();
        let selection = self
            .selection
            .get()
            .expect("backend selection initialized above");
        match selection.accelerator {
            Some(ref accelerator) => accelerator.digest(message).map_err(|err| match err {
                Error::BackendComputation(_) => err,
                other => Error::BackendComputation(other.to_string().into()),
            }),
            None => self.pipeline.run(message),
        }
    }

    /// Compute the X13 digest of `message[offset..offset + length]`.
    ///
    /// Fails with [`Error::Range`] when the sub-range overflows or exceeds
    /// the buffer; otherwise identical to slicing and calling [`Self::digest`].
    pub fn digest_range(&self, message: &[u8], offset: usize, length: usize) -> Result<Digest256> {
        let end = offset.checked_add(length).ok_or(Error::Range {
            offset,
            length,
            buffer: message.len(),
        })?;
        if end > message.len() {
            return Err(Error::Range {
                offset,
                length,
                buffer: message.len(),
            });
        }
        self.digest(&message[offset..end])
    }
}

impl Default for BackendSelector {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: BackendSelector = BackendSelector::new();

/// Offer an accelerator to the process-wide selector. See
/// [`BackendSelector::install_accelerator`].
pub fn install_accelerator(accelerator: Box<dyn Accelerator>) -> Result<()> {
    GLOBAL.install_accelerator(accelerator)
}

/// Initialize the process-wide backend selection. Optional: the first
/// [`digest`] call initializes implicitly.
pub fn initialize() -> Backend {
    GLOBAL.initialize()
}

/// Compute the X13 digest of `message` with the process-wide selector.
pub fn digest(message: &[u8]) -> Result<Digest256> {
    GLOBAL.digest(message)
}

/// Compute the X13 digest of `message[offset..offset + length]` with the
/// process-wide selector.
pub fn digest_range(message: &[u8], offset: usize, length: usize) -> Result<Digest256> {
    GLOBAL.digest_range(message, offset, length)
}
