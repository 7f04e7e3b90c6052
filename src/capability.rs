//! Date/time capability detection
//!
//! The example computations lean on chrono's clock and offset support. That
//! support is a precondition, not a given: callers acquire a capability token
//! here and pass it to the runner, which turns absence into the standard
//! error display instead of a crash.

use chrono::{Offset, Utc};
use tracing::{debug, warn};

/// Evidence that a usable wall clock is present in the runtime.
///
/// The token is deliberately empty: holding one means [`TimeCapability::acquire`]
/// succeeded. The runner accepts `Option<TimeCapability>` so tests and
/// embedders can simulate a missing backend by passing `None`.
#[derive(Debug, Clone, Copy)]
pub struct TimeCapability {
    _private: (),
}

impl TimeCapability {
    /// Probe the runtime for a usable clock and offset lookup.
    ///
    /// Returns `None` when the platform clock is unusable. A reading before
    /// the Unix epoch means the clock was never set and every "current
    /// moment" example would report nonsense.
    pub fn acquire() -> Option<Self> {
        let now = Utc::now();
        if now.timestamp() < 0 {
            warn!("platform clock reads before the Unix epoch; date/time examples disabled");
            return None;
        }

        let local_offset = chrono::Local::now().offset().fix();
        debug!(%now, %local_offset, "date/time capability probe succeeded");

        Some(Self { _private: () })
    }
}
