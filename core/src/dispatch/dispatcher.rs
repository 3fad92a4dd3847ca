//! Effect dispatcher
//!
//! The scheduling heart of the mod. A progress meter fills over the
//! spawn window; when it completes, one effect is rolled uniformly from
//! the catalog and started (or refreshed if a timed instance is already
//! running). Active effects age on independent one-second countdowns and
//! are stopped the moment they reach zero. Teardown stops everything
//! still running.
//!
//! The host polls `advance_timer` and `advance_effects` once per frame
//! and `draw` when it wants the overlay; nothing here blocks or spawns.

use tracing::{debug, info};

use crate::catalog::{EffectCatalog, EffectId};
use crate::game::{EffectExecutor, GameClock, RandomSource};
use crate::hud::{self, HudRenderer};

use super::active::{ActiveEffect, GRACE_FLOOR, NO_EXPIRY};

/// Minimum milliseconds between countdown sweeps
const SWEEP_INTERVAL_MS: u64 = 1000;

pub struct EffectDispatcher {
    catalog: EffectCatalog,
    executor: Box<dyn EffectExecutor>,
    clock: Box<dyn GameClock>,
    rng: Box<dyn RandomSource>,

    /// Active effects in activation order (top-to-bottom HUD order)
    active: Vec<ActiveEffect>,

    /// Fraction of the spawn window elapsed since the last dispatch
    progress: f32,

    spawn_window_ms: u64,
    last_dispatch_ms: u64,
    last_sweep_ms: u64,
}

impl EffectDispatcher {
    pub fn new(
        catalog: EffectCatalog,
        executor: Box<dyn EffectExecutor>,
        clock: Box<dyn GameClock>,
        rng: Box<dyn RandomSource>,
        spawn_window_ms: u64,
    ) -> Self {
        let now = clock.now_millis();
        Self {
            catalog,
            executor,
            clock,
            rng,
            active: Vec::new(),
            progress: 0.0,
            spawn_window_ms,
            last_dispatch_ms: now,
            last_sweep_ms: now,
        }
    }

    /// Advance the dispatch progress meter, rolling a random effect once
    /// the spawn window has fully elapsed.
    ///
    /// A clock that jumps backward produces a negative meter reading and
    /// simply delays the next dispatch.
    pub fn advance_timer(&mut self) {
        let now = self.clock.now_millis();
        let elapsed = now as i64 - self.last_dispatch_ms as i64;
        self.progress = elapsed as f32 / self.spawn_window_ms as f32;

        if self.progress > 1.0 {
            self.last_dispatch_ms = now;
            self.dispatch_random_effect();
        }
    }

    /// Roll one effect uniformly from the catalog and apply it. If a
    /// timed instance of the rolled effect is already running, its
    /// countdown is reset to the full duration instead of starting a
    /// duplicate. The meter resets either way.
    pub fn dispatch_random_effect(&mut self) {
        let id = EffectId(self.rng.uniform_int(0, self.catalog.len() - 1));
        let descriptor = self.catalog.descriptor(id);

        // Countdown dedup applies to timed effects only: a non-timed
        // effect rolled again is started again, as a second entry.
        let mut refreshed = false;
        if descriptor.timed {
            if let Some(existing) = self.active.iter_mut().find(|e| e.id == id) {
                existing.timer = descriptor.duration_secs;
                refreshed = true;
                debug!(
                    effect = %descriptor.name,
                    timer = descriptor.duration_secs,
                    "refreshed running effect"
                );
            }
        }

        if !refreshed {
            let timer = if descriptor.timed {
                descriptor.duration_secs
            } else {
                NO_EXPIRY
            };
            self.executor.start(id);
            self.active
                .push(ActiveEffect::new(id, descriptor.name.clone(), timer));
            debug!(effect = %descriptor.name, timer, "dispatched effect");
        }

        self.progress = 0.0;
    }

    /// Per-frame effect upkeep: continuous executor work on every call,
    /// plus a countdown sweep once per elapsed second.
    pub fn advance_effects(&mut self) {
        self.executor.advance_all();

        let now = self.clock.now_millis();
        if now.saturating_sub(self.last_sweep_ms) <= SWEEP_INTERVAL_MS {
            return;
        }
        self.last_sweep_ms = now;

        // Erase-and-advance so a removal never skips the entry after it
        let mut i = 0;
        while i < self.active.len() {
            if self.active[i].timer != NO_EXPIRY {
                self.active[i].timer -= 1;
            }

            let timer = self.active[i].timer;
            if timer == 0 {
                let expired = self.active.remove(i);
                self.executor.stop(expired.id);
                debug!(effect = %expired.name, "effect expired");
            } else if timer <= GRACE_FLOOR {
                // Already stopped when it hit zero; drop the leftover
                let lingering = self.active.remove(i);
                debug!(effect = %lingering.name, "purged lingering entry");
            } else {
                i += 1;
            }
        }
    }

    /// Stop every active effect and empty the collection
    pub fn clear_all_effects(&mut self) {
        let stopped = self.active.len();
        for effect in self.active.drain(..) {
            self.executor.stop(effect.id);
        }
        if stopped > 0 {
            info!(stopped, "cleared all active effects");
        }
    }

    /// Current fill of the dispatch progress meter
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Active effects in activation order
    pub fn active_effects(&self) -> &[ActiveEffect] {
        &self.active
    }

    #[cfg(test)]
    pub(crate) fn active_effects_mut(&mut self) -> &mut [ActiveEffect] {
        &mut self.active
    }

    /// Render the progress bar and the active-effect list
    pub fn draw(&self, hud: &mut dyn HudRenderer) {
        hud::draw_status(hud, self.progress, &self.active);
    }
}

impl Drop for EffectDispatcher {
    fn drop(&mut self) {
        self.clear_all_effects();
    }
}
