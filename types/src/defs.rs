//! Effect definition types
//!
//! Definitions are templates loaded from TOML catalog files that describe
//! which effects the dispatcher may roll and how they behave: display
//! name, category, whether the effect is time-limited and for how long.
//! The runtime catalog is built from these once at startup.

use serde::{Deserialize, Serialize};

/// Broad grouping for an effect, used for config-app grouping and
/// default display colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectCategory {
    /// Alters the player character directly
    Player,
    /// Alters vehicles (the player's or nearby ones)
    Vehicle,
    /// Alters pedestrians / NPCs
    Pedestrians,
    /// Alters the game clock or timescale
    Time,
    /// Alters the weather
    Weather,
    /// Everything else
    #[default]
    Misc,
}

impl EffectCategory {
    /// Default RGBA color for this category
    pub fn default_color(&self) -> [u8; 4] {
        match self {
            Self::Player => [80, 140, 220, 255],      // Blue
            Self::Vehicle => [220, 180, 50, 255],     // Gold
            Self::Pedestrians => [200, 60, 60, 255],  // Red
            Self::Time => [180, 80, 200, 255],        // Purple
            Self::Weather => [80, 200, 220, 255],     // Cyan
            Self::Misc => [200, 200, 200, 255],       // Grey
        }
    }
}

/// Definition of one dispatchable effect (loaded from config)
///
/// This is the template the catalog is built from. Disabled definitions
/// never enter the runtime catalog, so they can never be rolled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectDefinition {
    /// Stable identifier for this definition (e.g., "low_gravity")
    pub id: String,

    /// Display name shown on the HUD
    pub name: String,

    /// Whether this effect can be rolled at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Grouping for menus and default colors
    #[serde(default)]
    pub category: EffectCategory,

    /// Whether the effect expires on its own countdown
    #[serde(default)]
    pub timed: bool,

    /// Countdown in whole seconds (None = use the configured default).
    /// Only meaningful when `timed` is set.
    pub duration_secs: Option<i32>,
}

fn default_true() -> bool {
    true
}

/// Root structure for catalog config files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Effect definitions in this file
    #[serde(default, rename = "effect")]
    pub effects: Vec<EffectDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_effect_toml() {
        let toml = r#"
[[effect]]
id = "low_gravity"
name = "Low Gravity"
category = "misc"
timed = true
duration_secs = 120

[[effect]]
id = "thunderstorm"
name = "Thunderstorm"
category = "weather"
"#;

        let config: CatalogConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.effects.len(), 2);
        assert_eq!(config.effects[0].id, "low_gravity");
        assert!(config.effects[0].timed);
        assert_eq!(config.effects[0].duration_secs, Some(120));
        assert!(config.effects[0].enabled, "enabled defaults to true");
        assert!(!config.effects[1].timed, "timed defaults to false");
        assert_eq!(config.effects[1].category, EffectCategory::Weather);
    }

    #[test]
    fn test_category_colors_are_distinct() {
        let categories = [
            EffectCategory::Player,
            EffectCategory::Vehicle,
            EffectCategory::Pedestrians,
            EffectCategory::Time,
            EffectCategory::Weather,
            EffectCategory::Misc,
        ];

        for (i, a) in categories.iter().enumerate() {
            for b in &categories[i + 1..] {
                assert_ne!(a.default_color(), b.default_color());
            }
        }
    }

    #[test]
    fn test_roundtrip_preserves_definitions() {
        let config = CatalogConfig {
            effects: vec![EffectDefinition {
                id: "one_hit_ko".to_string(),
                name: "One Hit KO".to_string(),
                enabled: false,
                category: EffectCategory::Player,
                timed: true,
                duration_secs: None,
            }],
        };

        let serialized = toml::to_string(&config).unwrap();
        let parsed: CatalogConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.effects.len(), 1);
        assert!(!parsed.effects[0].enabled);
        assert_eq!(parsed.effects[0].duration_secs, None);
    }
}
