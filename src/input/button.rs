//! Mouse button identifiers.

use super::codes;
use super::control::Control;
use super::error::ControlError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Mouse button identification.
///
/// The discriminant of each variant is the input code the compositor reports
/// in `wl_pointer.button`, so a raw event button can be compared against
/// `Button::Left as u32` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
#[repr(u32)]
pub enum Button {
    /// Primary button
    Left = codes::BTN_LEFT,
    /// Secondary button
    Right = codes::BTN_RIGHT,
    /// Wheel click
    Middle = codes::BTN_MIDDLE,
    /// Side thumb button (usually "back" in browsers)
    Button4 = codes::BTN_SIDE,
    /// Extra thumb button (usually "forward" in browsers)
    Button5 = codes::BTN_EXTRA,
    Button6 = codes::BTN_FORWARD,
    Button7 = codes::BTN_BACK,
    Button8 = codes::BTN_TASK,
}

impl Button {
    /// Highest code of any button: the library's last mouse-button constant.
    pub const NUM: u32 = codes::BTN_TASK;

    /// Slots needed for one entry per button, indexed by [`Button::index`].
    pub const COUNT: usize = (Self::NUM - codes::BTN_MOUSE) as usize + 1;

    pub const ALL: [Button; 8] = [
        Button::Left,
        Button::Right,
        Button::Middle,
        Button::Button4,
        Button::Button5,
        Button::Button6,
        Button::Button7,
        Button::Button8,
    ];

    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Offset from the start of the mouse button range.
    pub const fn index(self) -> usize {
        (self as u32 - codes::BTN_MOUSE) as usize
    }

    /// Maps a raw pointer button code back to a [`Button`].
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            codes::BTN_LEFT => Some(Button::Left),
            codes::BTN_RIGHT => Some(Button::Right),
            codes::BTN_MIDDLE => Some(Button::Middle),
            codes::BTN_SIDE => Some(Button::Button4),
            codes::BTN_EXTRA => Some(Button::Button5),
            codes::BTN_FORWARD => Some(Button::Button6),
            codes::BTN_BACK => Some(Button::Button7),
            codes::BTN_TASK => Some(Button::Button8),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Button::Left => "Left",
            Button::Right => "Right",
            Button::Middle => "Middle",
            Button::Button4 => "Button4",
            Button::Button5 => "Button5",
            Button::Button6 => "Button6",
            Button::Button7 => "Button7",
            Button::Button8 => "Button8",
        }
    }
}

// Every button must fit below the sentinel and no two may share a code.
const _: () = {
    let all = Button::ALL;
    let mut i = 0;
    while i < all.len() {
        assert!(all[i] as u32 >= codes::BTN_MOUSE && all[i] as u32 <= Button::NUM);
        let mut j = i + 1;
        while j < all.len() {
            assert!(all[i] as u32 != all[j] as u32);
            j += 1;
        }
        i += 1;
    }
};

/// Strips a leading `Mouse` (any case), as used for buttons in binding strings.
pub(crate) fn strip_mouse_prefix(s: &str) -> Option<&str> {
    let head = s.get(..5)?;
    if head.eq_ignore_ascii_case("mouse") {
        Some(&s[5..])
    } else {
        None
    }
}

impl FromStr for Button {
    type Err = ControlError;

    /// Accepts `Left`, `Right`, `Middle`, `Button4`..`Button8`, optionally
    /// prefixed with `Mouse`, and `Mouse1`..`Mouse8` by position.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = strip_mouse_prefix(trimmed).unwrap_or(trimmed);

        if let Ok(n) = name.parse::<usize>() {
            return match n {
                1..=8 => Ok(Button::ALL[n - 1]),
                _ => Err(ControlError::UnknownButton(s.to_string())),
            };
        }

        Button::ALL
            .into_iter()
            .find(|button| button.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ControlError::UnknownButton(s.to_string()))
    }
}

impl TryFrom<String> for Button {
    type Error = ControlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<u32> for Button {
    type Error = ControlError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Button::from_code(code).ok_or(ControlError::UnmappedButtonCode(code))
    }
}

impl From<Button> for u32 {
    fn from(button: Button) -> Self {
        button.code()
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Button {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl Control for Button {
    const COUNT: usize = Button::COUNT;

    fn all() -> &'static [Self] {
        &Button::ALL
    }

    fn code(self) -> u32 {
        Button::code(self)
    }

    fn index(self) -> usize {
        Button::index(self)
    }

    fn from_code(code: u32) -> Option<Self> {
        Button::from_code(code)
    }

    fn name(self) -> &'static str {
        Button::name(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smithay_client_toolkit::seat::pointer;

    #[test]
    fn test_values_match_input_codes() {
        assert_eq!(Button::Left as u32, pointer::BTN_LEFT);
        assert_eq!(Button::Right as u32, pointer::BTN_RIGHT);
        assert_eq!(Button::Middle as u32, pointer::BTN_MIDDLE);
        assert_eq!(Button::Button4.code(), 0x113);
        assert_eq!(Button::Button5.code(), 0x114);
        assert_eq!(Button::Button6.code(), 0x115);
        assert_eq!(Button::Button7.code(), 0x116);
        assert_eq!(Button::Button8.code(), 0x117);
    }

    #[test]
    fn test_sentinel_is_last_button() {
        assert_eq!(Button::NUM, codes::BTN_TASK);
        assert_eq!(Button::COUNT, 8);
        assert_eq!(Button::Button8.index(), Button::COUNT - 1);
        assert!(Button::ALL.iter().all(|b| b.code() <= Button::NUM));
    }

    #[test]
    fn test_indices_are_dense() {
        let indices: Vec<usize> = Button::ALL.iter().map(|b| b.index()).collect();
        assert_eq!(indices, (0..Button::COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_code_round_trip() {
        for button in Button::ALL {
            assert_eq!(Button::from_code(button.code()), Some(button));
        }
        assert_eq!(Button::from_code(codes::BTN_MOUSE - 1), None);
        assert_eq!(Button::from_code(Button::NUM + 1), None);
        assert_eq!(Button::from_code(codes::KEY_A), None);
    }

    #[test]
    fn test_try_from_unmapped_code() {
        assert_eq!(
            Button::try_from(0x120u32),
            Err(ControlError::UnmappedButtonCode(0x120))
        );
        assert_eq!(Button::try_from(0x110u32), Ok(Button::Left));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Left".parse::<Button>(), Ok(Button::Left));
        assert_eq!("middle".parse::<Button>(), Ok(Button::Middle));
        assert_eq!("MouseRight".parse::<Button>(), Ok(Button::Right));
        assert_eq!("mouse4".parse::<Button>(), Ok(Button::Button4));
        assert_eq!("Mouse1".parse::<Button>(), Ok(Button::Left));
        assert_eq!("Button8".parse::<Button>(), Ok(Button::Button8));
        assert_eq!(" MouseButton7 ".parse::<Button>(), Ok(Button::Button7));
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "Mouse9".parse::<Button>(),
            Err(ControlError::UnknownButton(_))
        ));
        assert!("Mouse".parse::<Button>().is_err());
        assert!("Wheel".parse::<Button>().is_err());
        assert!("0".parse::<Button>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for button in Button::ALL {
            assert_eq!(button.to_string().parse::<Button>(), Ok(button));
        }
    }

    #[test]
    fn test_serde_uses_names() {
        assert_eq!(serde_json::to_string(&Button::Button5).unwrap(), "\"Button5\"");
        let parsed: Button = serde_json::from_str("\"mouseleft\"").unwrap();
        assert_eq!(parsed, Button::Left);
        assert!(serde_json::from_str::<Button>("\"Wheel\"").is_err());
    }
}
