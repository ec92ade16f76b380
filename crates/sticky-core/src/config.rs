//! Application configuration model.
//!
//! StickyChat reads a small TOML file (`config.toml`) at startup to seed the
//! default participant identities and the initial always-on-top flag. The
//! file is never written back at runtime: renames and window toggles are
//! session-local, and the transcript itself is never persisted.

use crate::transcript::Participant;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// The two participant seeds, in slot order. Missing entries fall back
    /// to the built-in defaults for their slot.
    #[serde(rename = "participant", default)]
    pub participants: Vec<ParticipantConfig>,
    /// Whether the window starts pinned above other windows.
    #[serde(default = "default_always_on_top")]
    pub always_on_top: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ParticipantConfig {
    pub name: String,
    /// Optional color override; the slot's built-in color applies when absent.
    #[serde(default)]
    pub color: Option<String>,
}

fn default_always_on_top() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            participants: Vec::new(),
            always_on_top: true,
        }
    }
}

impl AppConfig {
    /// Resolves the configured participant pair, falling back to the
    /// built-in defaults slot by slot.
    ///
    /// A configured entry overrides the name for its slot; the color is
    /// only overridden when explicitly set, since colors are fixed per slot
    /// by design.
    pub fn participant_pair(&self) -> [Participant; 2] {
        let mut pair = Participant::default_pair();
        for (slot, configured) in pair.iter_mut().zip(self.participants.iter()) {
            let name = configured.name.trim();
            if !name.is_empty() {
                slot.name = name.to_string();
            }
            if let Some(color) = &configured.color {
                slot.color = color.clone();
            }
        }
        pair
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::{DEFAULT_FIRST_COLOR, DEFAULT_SECOND_COLOR};

    #[test]
    fn test_default_config_matches_builtin_pair() {
        let config = AppConfig::default();
        let pair = config.participant_pair();

        assert!(config.always_on_top);
        assert_eq!(pair[0].name, "User 1");
        assert_eq!(pair[1].name, "User 2");
        assert_eq!(pair[0].color, DEFAULT_FIRST_COLOR);
        assert_eq!(pair[1].color, DEFAULT_SECOND_COLOR);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r##"
always_on_top = false

[[participant]]
name = "Alice"
color = "#FF0000"

[[participant]]
name = "Bob"
"##;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.always_on_top);

        let pair = config.participant_pair();
        assert_eq!(pair[0].name, "Alice");
        assert_eq!(pair[0].color, "#FF0000");
        assert_eq!(pair[1].name, "Bob");
        // No color override for the second slot
        assert_eq!(pair[1].color, DEFAULT_SECOND_COLOR);
    }

    #[test]
    fn test_parse_empty_file_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_blank_configured_name_falls_back_to_default() {
        let toml_str = r#"
[[participant]]
name = "   "
"#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        let pair = config.participant_pair();
        assert_eq!(pair[0].name, "User 1");
    }

    #[test]
    fn test_single_entry_only_overrides_first_slot() {
        let toml_str = r#"
[[participant]]
name = "Solo"
"#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        let pair = config.participant_pair();
        assert_eq!(pair[0].name, "Solo");
        assert_eq!(pair[1].name, "User 2");
    }
}
