pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod game;
pub mod hud;

// Re-exports for convenience
pub use catalog::{EffectCatalog, EffectDescriptor, EffectId};
pub use config::ModConfig;
pub use dispatch::{ActiveEffect, EffectDispatcher};
pub use game::{EffectExecutor, GameClock, GameRng, RandomSource, SystemClock};
pub use hud::HudRenderer;
