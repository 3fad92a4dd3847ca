//! Active effect entries
//!
//! One entry per running effect instance, owned exclusively by the
//! dispatcher. The `timer` field doubles as lifecycle state: positive
//! values count down once per second, [`NO_EXPIRY`] parks an effect
//! until an explicit clear, and other negative values are
//! fired-and-expired artifacts draining toward the grace floor.

use crate::catalog::EffectId;

/// Timer value parking effects that have no countdown
pub const NO_EXPIRY: i32 = -1;

/// Entries at or below this timer value are purged outright; the stop
/// call was already issued when the timer hit zero
pub const GRACE_FLOOR: i32 = -180;

/// A currently running effect instance
#[derive(Debug, Clone)]
pub struct ActiveEffect {
    pub id: EffectId,

    /// Display label, copied from the descriptor at activation time
    pub name: String,

    /// Remaining whole seconds, or [`NO_EXPIRY`]
    pub timer: i32,
}

impl ActiveEffect {
    pub fn new(id: EffectId, name: impl Into<String>, timer: i32) -> Self {
        Self {
            id,
            name: name.into(),
            timer,
        }
    }
}
