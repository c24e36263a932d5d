//! Keybinding configuration types and parsing.
//!
//! Bindings name keys and mouse buttons with the canonical [`Key`] and
//! [`Button`] names, optionally combined with modifiers.

use crate::input::button::strip_mouse_prefix;
use crate::input::{Button, ControlError, Key, Modifiers};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing or combining keybindings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("Empty keybinding string")]
    Empty,

    #[error("No key or button specified in: {0}")]
    MissingTrigger(String),

    #[error("More than one key or button specified in: {0}")]
    MultipleTriggers(String),

    #[error(transparent)]
    Control(#[from] ControlError),

    #[error("Duplicate keybinding '{binding}' assigned to both {first} and {second}")]
    Duplicate {
        binding: String,
        first: String,
        second: String,
    },
}

/// The non-modifier part of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Key(Key),
    Button(Button),
}

impl FromStr for Trigger {
    type Err = ControlError;

    /// Buttons are spelled with a `Mouse` prefix (`MouseLeft`, `Mouse4`);
    /// anything else is a key name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match strip_mouse_prefix(name) {
            Some(_) => name.parse().map(Trigger::Button),
            None => name.parse().map(Trigger::Key),
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Key(key) => write!(f, "{key}"),
            Trigger::Button(button) => write!(f, "Mouse{button}"),
        }
    }
}

impl From<Key> for Trigger {
    fn from(key: Key) -> Self {
        Trigger::Key(key)
    }
}

impl From<Button> for Trigger {
    fn from(button: Button) -> Self {
        Trigger::Button(button)
    }
}

/// A single keybinding: a key or button with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub trigger: Trigger,
    pub modifiers: Modifiers,
}

impl KeyBinding {
    pub fn new(trigger: impl Into<Trigger>, modifiers: Modifiers) -> Self {
        Self {
            trigger: trigger.into(),
            modifiers,
        }
    }

    /// Parse a keybinding string like "Ctrl+Shift+W", "Alt+MouseLeft" or "Escape".
    /// Modifiers can appear in any order: "Shift+Ctrl+W", "Alt+Shift+Ctrl+W", etc.
    /// Supports spaces around '+' (e.g., "Ctrl + Shift + W")
    pub fn parse(s: &str) -> Result<Self, BindingError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BindingError::Empty);
        }

        let mut modifiers = Modifiers::new();
        let mut triggers = Vec::new();

        for part in s.split('+').map(str::trim) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "shift" => modifiers.shift = true,
                "alt" => modifiers.alt = true,
                "" => {}
                _ => triggers.push(part),
            }
        }

        match triggers.as_slice() {
            [] => Err(BindingError::MissingTrigger(s.to_string())),
            [trigger] => Ok(Self {
                trigger: trigger.parse()?,
                modifiers,
            }),
            _ => Err(BindingError::MultipleTriggers(s.to_string())),
        }
    }

    /// Check if this keybinding matches the current input state.
    pub fn matches(&self, trigger: impl Into<Trigger>, modifiers: Modifiers) -> bool {
        self.trigger == trigger.into() && self.modifiers == modifiers
    }
}

impl FromStr for KeyBinding {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.trigger)
        } else {
            write!(f, "{}+{}", self.modifiers, self.trigger)
        }
    }
}

/// Configuration for all keybindings.
///
/// Maps application-defined action names to one or more bindings. Users
/// specify them in config.toml as:
/// ```toml
/// [bindings]
/// quit = ["Escape", "Ctrl+Q"]
/// move_forward = ["W", "Up"]
/// select = ["MouseLeft"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct KeybindingsConfig {
    pub actions: BTreeMap<String, Vec<String>>,
}

/// A binding string that failed to parse, with the action it was listed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBinding {
    pub action: String,
    pub binding: String,
    pub error: BindingError,
}

impl KeybindingsConfig {
    /// Parsed bindings for one action, or an empty list if it is not configured.
    pub fn bindings_for(&self, action: &str) -> Result<Vec<KeyBinding>, BindingError> {
        self.actions
            .get(action)
            .map(|bindings| bindings.iter().map(|s| KeyBinding::parse(s)).collect())
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    /// Every binding string that does not parse.
    pub fn invalid_bindings(&self) -> Vec<InvalidBinding> {
        self.actions
            .iter()
            .flat_map(|(action, bindings)| {
                bindings.iter().filter_map(move |binding| {
                    KeyBinding::parse(binding)
                        .err()
                        .map(|error| InvalidBinding {
                            action: action.clone(),
                            binding: binding.clone(),
                            error,
                        })
                })
            })
            .collect()
    }

    /// Drops binding strings that do not parse, logging each one.
    ///
    /// Returns the number of entries removed.
    pub fn sanitize(&mut self) -> usize {
        let mut removed = 0;
        for (action, bindings) in self.actions.iter_mut() {
            bindings.retain(|binding| match KeyBinding::parse(binding) {
                Ok(_) => true,
                Err(err) => {
                    warn!("Ignoring keybinding '{}' for {}: {}", binding, action, err);
                    removed += 1;
                    false
                }
            });
        }
        removed
    }

    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, String>, BindingError> {
        let mut map: HashMap<KeyBinding, String> = HashMap::new();

        for (action, bindings) in &self.actions {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action.clone()) {
                    return Err(BindingError::Duplicate {
                        binding: binding_str.clone(),
                        first: existing_action,
                        second: action.clone(),
                    });
                }
            }
        }

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(entries: &[(&str, &[&str])]) -> KeybindingsConfig {
        KeybindingsConfig {
            actions: entries
                .iter()
                .map(|(action, bindings)| {
                    (
                        action.to_string(),
                        bindings.iter().map(|b| b.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_parse_simple_key() {
        let binding = KeyBinding::parse("Escape").unwrap();
        assert_eq!(binding.trigger, Trigger::Key(Key::Escape));
        assert!(binding.modifiers.is_empty());
    }

    #[test]
    fn test_parse_ctrl_key() {
        let binding = KeyBinding::parse("Ctrl+Z").unwrap();
        assert_eq!(binding.trigger, Trigger::Key(Key::Z));
        assert!(binding.modifiers.ctrl);
        assert!(!binding.modifiers.shift);
        assert!(!binding.modifiers.alt);
    }

    #[test]
    fn test_parse_all_modifiers() {
        let binding = KeyBinding::parse("Ctrl+Shift+Alt+A").unwrap();
        assert_eq!(binding.trigger, Trigger::Key(Key::A));
        assert!(binding.modifiers.ctrl);
        assert!(binding.modifiers.shift);
        assert!(binding.modifiers.alt);
    }

    #[test]
    fn test_parse_case_insensitive() {
        let binding = KeyBinding::parse("control+shift+w").unwrap();
        assert_eq!(binding.trigger, Trigger::Key(Key::W));
        assert!(binding.modifiers.ctrl);
        assert!(binding.modifiers.shift);
    }

    #[test]
    fn test_parse_with_spaces() {
        let binding = KeyBinding::parse("Ctrl + Shift + W").unwrap();
        assert_eq!(binding, KeyBinding::parse("Ctrl+Shift+W").unwrap());
    }

    #[test]
    fn test_parse_modifier_order_independence() {
        let a = KeyBinding::parse("Ctrl+Alt+Shift+W").unwrap();
        let b = KeyBinding::parse("Shift+Alt+Ctrl+W").unwrap();
        let c = KeyBinding::parse("Alt+Shift+Ctrl+W").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_parse_mouse_buttons() {
        let binding = KeyBinding::parse("Alt+MouseLeft").unwrap();
        assert_eq!(binding.trigger, Trigger::Button(Button::Left));
        assert!(binding.modifiers.alt);

        let binding = KeyBinding::parse("Mouse5").unwrap();
        assert_eq!(binding.trigger, Trigger::Button(Button::Button5));

        // Without the prefix, "Left" is the arrow key.
        let binding = KeyBinding::parse("Left").unwrap();
        assert_eq!(binding.trigger, Trigger::Key(Key::Left));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(KeyBinding::parse("   "), Err(BindingError::Empty));
        assert_eq!(
            KeyBinding::parse("Ctrl+Shift"),
            Err(BindingError::MissingTrigger("Ctrl+Shift".to_string()))
        );
        assert_eq!(
            KeyBinding::parse("Ctrl+A+B"),
            Err(BindingError::MultipleTriggers("Ctrl+A+B".to_string()))
        );
        assert_eq!(
            KeyBinding::parse("Ctrl+Hyper"),
            Err(BindingError::Control(ControlError::UnknownKey(
                "Hyper".to_string()
            )))
        );
        assert!(matches!(
            KeyBinding::parse("Mouse12"),
            Err(BindingError::Control(ControlError::UnknownButton(_)))
        ));
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["Ctrl+Shift+W", "Escape", "Alt+MouseLeft", "MouseButton4", "Ctrl+1"] {
            let binding = KeyBinding::parse(text).unwrap();
            assert_eq!(binding.to_string(), text);
            assert_eq!(binding.to_string().parse::<KeyBinding>(), Ok(binding));
        }
        assert_eq!(
            KeyBinding::parse("shift+ctrl+enter").unwrap().to_string(),
            "Ctrl+Shift+Return"
        );
    }

    #[test]
    fn test_matches() {
        let binding = KeyBinding::parse("Ctrl+Shift+W").unwrap();
        let ctrl_shift = Modifiers {
            ctrl: true,
            shift: true,
            alt: false,
        };
        assert!(binding.matches(Key::W, ctrl_shift));
        assert!(!binding.matches(Key::W, Modifiers::of(Key::LShift)));
        assert!(!binding.matches(Key::A, ctrl_shift));
        assert!(!binding.matches(Button::Left, ctrl_shift));
    }

    #[test]
    fn test_build_action_map() {
        let config = config(&[("quit", &["Escape", "Ctrl+Q"]), ("select", &["MouseLeft"])]);
        let map = config.build_action_map().unwrap();

        let escape = KeyBinding::parse("Escape").unwrap();
        assert_eq!(map.get(&escape).map(String::as_str), Some("quit"));

        let click = KeyBinding::new(Button::Left, Modifiers::new());
        assert_eq!(map.get(&click).map(String::as_str), Some("select"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_duplicate_keybinding_detection() {
        let config = config(&[("quit", &["Ctrl+Z"]), ("undo", &["Ctrl+Z"])]);

        let err = config.build_action_map().unwrap_err();
        assert_eq!(
            err,
            BindingError::Duplicate {
                binding: "Ctrl+Z".to_string(),
                first: "quit".to_string(),
                second: "undo".to_string(),
            }
        );
        assert!(err.to_string().contains("Duplicate keybinding"));
    }

    #[test]
    fn test_duplicate_with_aliases_and_modifier_order() {
        // Different spellings of the same key and modifier set collide.
        let config = config(&[("accept", &["Shift+Ctrl+Enter"]), ("submit", &["Ctrl+Shift+Return"])]);
        assert!(matches!(
            config.build_action_map(),
            Err(BindingError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_bindings_for() {
        let config = config(&[("jump", &["Space", "MouseMiddle"])]);
        let bindings = config.bindings_for("jump").unwrap();
        assert_eq!(
            bindings,
            vec![
                KeyBinding::new(Key::Space, Modifiers::new()),
                KeyBinding::new(Button::Middle, Modifiers::new()),
            ]
        );
        assert!(config.bindings_for("crouch").unwrap().is_empty());
    }

    #[test]
    fn test_sanitize_drops_invalid_entries() {
        let mut config = config(&[("quit", &["Escape", "Ctrl+Hyper", ""]), ("fire", &["MouseLeft"])]);

        let invalid = config.invalid_bindings();
        assert_eq!(invalid.len(), 2);
        assert_eq!(invalid[0].action, "quit");
        assert_eq!(invalid[0].binding, "Ctrl+Hyper");

        assert_eq!(config.sanitize(), 2);
        assert_eq!(config.actions["quit"], vec!["Escape".to_string()]);
        assert!(config.invalid_bindings().is_empty());
        assert!(config.build_action_map().is_ok());
    }
}
