//! Effect scheduling and lifecycle
//!
//! This module owns:
//! - the dispatch progress meter that fills over the spawn window and
//!   rolls a random effect on completion
//! - the collection of active effects and their per-second countdowns
//! - refresh-on-collision, expiry, grace purge, and bulk teardown

mod active;
mod dispatcher;


pub use active::{ActiveEffect, GRACE_FLOOR, NO_EXPIRY};
pub use dispatcher::EffectDispatcher;
