//! Runtime effect catalog
//!
//! The catalog is an immutable table built once at startup from effect
//! definitions (builtin or loaded from TOML). Runtime identifiers are
//! contiguous indices into this table, so a uniform roll over
//! `[0, len)` always resolves to a descriptor. Disabled definitions are
//! filtered out while the table is built and can never be rolled.

use std::fs;
use std::path::{Path, PathBuf};

use mayhem_types::{CatalogConfig, EffectCategory, EffectDefinition};
use thiserror::Error;

/// Identifier for one effect kind: an index into the loaded catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectId(pub u32);

/// Immutable metadata for one effect kind
#[derive(Debug, Clone)]
pub struct EffectDescriptor {
    /// Display name shown on the HUD
    pub name: String,

    /// Grouping, kept for display color defaults
    pub category: EffectCategory,

    /// Whether the effect expires on its own countdown
    pub timed: bool,

    /// Countdown in whole seconds; meaningful only when `timed`
    pub duration_secs: i32,
}

/// The fixed, read-only effect table the dispatcher rolls against
#[derive(Debug, Clone)]
pub struct EffectCatalog {
    effects: Vec<EffectDescriptor>,
}

impl EffectCatalog {
    /// Build a catalog from a parsed config, keeping only enabled
    /// definitions. Timed definitions without a duration fall back to
    /// `default_timed_duration_secs`.
    pub fn from_config(
        config: CatalogConfig,
        default_timed_duration_secs: i32,
    ) -> Result<Self, CatalogError> {
        let catalog = Self::from_definitions(config.effects, default_timed_duration_secs);
        if catalog.effects.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    /// Load a catalog from a TOML file
    pub fn load(path: &Path, default_timed_duration_secs: i32) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: CatalogConfig = toml::from_str(&contents).map_err(|e| CatalogError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_config(config, default_timed_duration_secs)
    }

    /// The catalog shipped with the mod
    pub fn builtin(default_timed_duration_secs: i32) -> Self {
        Self::from_definitions(builtin_definitions(), default_timed_duration_secs)
    }

    fn from_definitions(definitions: Vec<EffectDefinition>, default_duration: i32) -> Self {
        let effects = definitions
            .into_iter()
            .filter(|def| def.enabled)
            .map(|def| EffectDescriptor {
                name: def.name,
                category: def.category,
                timed: def.timed,
                duration_secs: def.duration_secs.unwrap_or(default_duration),
            })
            .collect();
        Self { effects }
    }

    /// Number of effects, i.e. the exclusive upper bound for rolls
    pub fn len(&self) -> u32 {
        self.effects.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Descriptor for an identifier produced by a roll in `[0, len)`.
    ///
    /// Out-of-range identifiers are a programming error, not a runtime
    /// condition: the selection bound keeps rolls inside the catalog by
    /// construction, so this indexes directly.
    pub fn descriptor(&self, id: EffectId) -> &EffectDescriptor {
        &self.effects[id.0 as usize]
    }

    /// All effects in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (EffectId, &EffectDescriptor)> {
        self.effects
            .iter()
            .enumerate()
            .map(|(i, desc)| (EffectId(i as u32), desc))
    }
}

/// Errors that can occur while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("catalog contains no enabled effects")]
    Empty,
}

/// Effect set compiled into the mod, used when no catalog file is given
fn builtin_definitions() -> Vec<EffectDefinition> {
    use EffectCategory::*;

    fn def(
        id: &str,
        name: &str,
        category: EffectCategory,
        timed: bool,
        duration_secs: Option<i32>,
    ) -> EffectDefinition {
        EffectDefinition {
            id: id.to_string(),
            name: name.to_string(),
            enabled: true,
            category,
            timed,
            duration_secs,
        }
    }

    vec![
        def("invincible", "Invincibility", Player, true, Some(90)),
        def("one_hit_ko", "One Hit KO", Player, true, Some(60)),
        def("butter_fingers", "Butter Fingers", Player, false, None),
        def("give_rocket_launcher", "Give Rocket Launcher", Player, false, None),
        def("engine_overboost", "Engine Overboost", Vehicle, true, Some(60)),
        def("ignite_nearby_vehicles", "Ignite Nearby Vehicles", Vehicle, false, None),
        def("popped_tires", "Popped Tires", Vehicle, false, None),
        def("angry_mob", "Angry Mob", Pedestrians, false, None),
        def("fearless_peds", "Fearless Pedestrians", Pedestrians, true, None),
        def("slow_motion", "Slow Motion", Time, true, Some(30)),
        def("set_midnight", "Set Midnight", Time, false, None),
        def("thunderstorm", "Thunderstorm", Weather, false, None),
        def("heat_wave", "Heat Wave", Weather, true, None),
        def("low_gravity", "Low Gravity", Misc, true, Some(120)),
        def("drunk_camera", "Drunk Camera", Misc, true, Some(120)),
        def("hide_hud", "Hide HUD", Misc, true, Some(90)),
    ]
}
