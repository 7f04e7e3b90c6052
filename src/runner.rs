//! Example execution and result capture
//!
//! Running an entry yields a [`RenderState`]: either the computed output or
//! the text of a failure, never both and never neither. [`ExampleBlock`]
//! wraps an entry with its state and re-runs the computation only when the
//! entry's identity changes, so one entry is computed exactly once no matter
//! how often the page is redrawn.

use crate::capability::TimeCapability;
use crate::catalog::{ComputeError, Entry};
use crate::error::Error;
use tracing::debug;

/// Prefix applied to every failure shown in a result cell
pub const ERROR_LABEL: &str = "Error: ";

/// Outcome of running one example.
///
/// The two variants make "exactly one of output and error is populated" a
/// structural fact rather than a convention to uphold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    /// The computation produced output
    Output(String),
    /// The computation failed; the text already carries [`ERROR_LABEL`]
    Failed(String),
}

impl RenderState {
    /// The computed output, if the run succeeded
    pub fn output(&self) -> Option<&str> {
        match self {
            RenderState::Output(text) => Some(text),
            RenderState::Failed(_) => None,
        }
    }

    /// The failure text, if the run failed
    pub fn error(&self) -> Option<&str> {
        match self {
            RenderState::Output(_) => None,
            RenderState::Failed(text) => Some(text),
        }
    }

    /// Whether this state is a failure
    pub fn is_error(&self) -> bool {
        matches!(self, RenderState::Failed(_))
    }

    /// The text shown in the result cell regardless of outcome
    pub fn display_text(&self) -> &str {
        match self {
            RenderState::Output(text) | RenderState::Failed(text) => text,
        }
    }
}

/// Human-readable description of a computation failure.
///
/// Uses the error's `Display` form, falling back to `Debug` when `Display`
/// renders empty so a failure never shows as a bare label.
fn describe(err: &ComputeError) -> String {
    let text = format!("{}", err);
    if text.is_empty() {
        format!("{:?}", err)
    } else {
        text
    }
}

/// Run one entry under the given capability and capture the outcome.
///
/// The capability gate comes first: without a capability the computation is
/// not invoked at all and every entry reports the same fixed message.
pub fn evaluate(capability: Option<TimeCapability>, entry: &Entry) -> RenderState {
    if capability.is_none() {
        return failure(&Error::CapabilityUnavailable);
    }

    match entry.run() {
        Ok(output) => RenderState::Output(output),
        Err(err) => {
            debug!(source = entry.source(), error = %err, "example computation failed");
            failure(&Error::Computation(describe(&err)))
        }
    }
}

/// Label a library error the way result cells show it
fn failure(err: &Error) -> RenderState {
    RenderState::Failed(format!("{}{}", ERROR_LABEL, err))
}

/// An entry paired with its captured render state.
///
/// The state is computed when the block is created and reused until
/// [`ExampleBlock::update`] sees an entry with a different identity. This
/// mirrors how the page is drawn: redrawing reuses captured results, only a
/// genuinely different example triggers a fresh run.
#[derive(Debug, Clone)]
pub struct ExampleBlock {
    entry: Entry,
    state: RenderState,
}

impl ExampleBlock {
    /// Create a block and run its entry once
    pub fn new(capability: Option<TimeCapability>, entry: Entry) -> Self {
        let state = evaluate(capability, &entry);
        Self { entry, state }
    }

    /// Replace the entry, re-running only when its identity changed.
    ///
    /// A capability change alone does not trigger a re-run; the capability
    /// is read at evaluation time, matching how the block was created.
    pub fn update(&mut self, capability: Option<TimeCapability>, entry: Entry) {
        if self.entry.same_identity(&entry) {
            return;
        }
        self.state = evaluate(capability, &entry);
        self.entry = entry;
    }

    /// The entry this block displays
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// The captured outcome of the entry's single run
    pub fn state(&self) -> &RenderState {
        &self.state
    }
}
