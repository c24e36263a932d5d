//! Keyboard modifier state.

use super::{Key, KeyTable};
use std::fmt;

/// Ctrl/Shift/Alt combination.
///
/// Left and right variants of a modifier are not distinguished. Caps Lock is
/// not a binding modifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Either Ctrl key
    pub ctrl: bool,
    /// Either Shift key
    pub shift: bool,
    /// Either Alt key
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub const fn new() -> Self {
        Self {
            ctrl: false,
            shift: false,
            alt: false,
        }
    }

    /// The modifier a single key contributes, empty for non-modifier keys.
    pub const fn of(key: Key) -> Self {
        match key {
            Key::LControl | Key::RControl => Self {
                ctrl: true,
                ..Self::new()
            },
            Key::LShift | Key::RShift => Self {
                shift: true,
                ..Self::new()
            },
            Key::LAlt | Key::RAlt => Self {
                alt: true,
                ..Self::new()
            },
            _ => Self::new(),
        }
    }

    /// Folds the modifier keys marked `true` in a pressed-key table.
    pub fn from_pressed(pressed: &KeyTable<bool>) -> Self {
        pressed
            .active()
            .fold(Self::new(), |mods, key| mods.union(Self::of(key)))
    }

    pub const fn union(self, other: Self) -> Self {
        Self {
            ctrl: self.ctrl || other.ctrl,
            shift: self.shift || other.shift,
            alt: self.alt || other.alt,
        }
    }

    pub const fn is_empty(&self) -> bool {
        !(self.ctrl || self.shift || self.alt)
    }
}

impl fmt::Display for Modifiers {
    /// Writes `Ctrl+Shift+Alt` order, omitting released modifiers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [(self.ctrl, "Ctrl"), (self.shift, "Shift"), (self.alt, "Alt")];
        let mut first = true;
        for (_, name) in names.iter().filter(|(held, _)| *held) {
            if !first {
                f.write_str("+")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}
