//! Keyboard key identifiers.
//!
//! [`Key`] names physical keys (US layout positions) and pins each one to the
//! Linux input code the compositor reports in `wl_keyboard.key`. Applications
//! use the enum as a compact array index ("is key X down") or as a comparison
//! value in their own event handling.

use super::codes;
use super::control::Control;
use super::error::ControlError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Physical keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
#[repr(u32)]
pub enum Key {
    // Number row
    /// Grave accent / tilde key left of `1`
    Tilda = codes::KEY_GRAVE,
    Digit1 = codes::KEY_1,
    Digit2 = codes::KEY_2,
    Digit3 = codes::KEY_3,
    Digit4 = codes::KEY_4,
    Digit5 = codes::KEY_5,
    Digit6 = codes::KEY_6,
    Digit7 = codes::KEY_7,
    Digit8 = codes::KEY_8,
    Digit9 = codes::KEY_9,
    Digit0 = codes::KEY_0,
    Minus = codes::KEY_MINUS,
    Equals = codes::KEY_EQUAL,
    /// Backspace
    Back = codes::KEY_BACKSPACE,

    // Letters, in keyboard order
    Q = codes::KEY_Q,
    W = codes::KEY_W,
    E = codes::KEY_E,
    R = codes::KEY_R,
    T = codes::KEY_T,
    Y = codes::KEY_Y,
    U = codes::KEY_U,
    I = codes::KEY_I,
    O = codes::KEY_O,
    P = codes::KEY_P,
    A = codes::KEY_A,
    S = codes::KEY_S,
    D = codes::KEY_D,
    F = codes::KEY_F,
    G = codes::KEY_G,
    H = codes::KEY_H,
    J = codes::KEY_J,
    K = codes::KEY_K,
    L = codes::KEY_L,
    Z = codes::KEY_Z,
    X = codes::KEY_X,
    C = codes::KEY_C,
    V = codes::KEY_V,
    B = codes::KEY_B,
    N = codes::KEY_N,
    M = codes::KEY_M,

    // Function row
    Escape = codes::KEY_ESC,
    F1 = codes::KEY_F1,
    F2 = codes::KEY_F2,
    F3 = codes::KEY_F3,
    F4 = codes::KEY_F4,
    F5 = codes::KEY_F5,
    F6 = codes::KEY_F6,
    F7 = codes::KEY_F7,
    F8 = codes::KEY_F8,
    F9 = codes::KEY_F9,
    F10 = codes::KEY_F10,
    F11 = codes::KEY_F11,
    F12 = codes::KEY_F12,
    Pause = codes::KEY_PAUSE,

    // Numeric keypad
    Num0 = codes::KEY_KP0,
    Num1 = codes::KEY_KP1,
    Num2 = codes::KEY_KP2,
    Num3 = codes::KEY_KP3,
    Num4 = codes::KEY_KP4,
    Num5 = codes::KEY_KP5,
    Num6 = codes::KEY_KP6,
    Num7 = codes::KEY_KP7,
    Num8 = codes::KEY_KP8,
    Num9 = codes::KEY_KP9,
    NumLock = codes::KEY_NUMLOCK,
    NumSub = codes::KEY_KPMINUS,
    NumAdd = codes::KEY_KPPLUS,
    /// Keypad decimal point
    NumDel = codes::KEY_KPDOT,
    NumMul = codes::KEY_KPASTERISK,
    NumDiv = codes::KEY_KPSLASH,
    NumEnter = codes::KEY_KPENTER,

    // Modifiers and brackets
    LControl = codes::KEY_LEFTCTRL,
    RControl = codes::KEY_RIGHTCTRL,
    LAlt = codes::KEY_LEFTALT,
    RAlt = codes::KEY_RIGHTALT,
    LShift = codes::KEY_LEFTSHIFT,
    RShift = codes::KEY_RIGHTSHIFT,
    LBracket = codes::KEY_LEFTBRACE,
    RBracket = codes::KEY_RIGHTBRACE,

    // Punctuation and editing
    /// Scroll lock
    Scroll = codes::KEY_SCROLLLOCK,
    Tab = codes::KEY_TAB,
    /// Main enter key
    Return = codes::KEY_ENTER,
    Semicolon = codes::KEY_SEMICOLON,
    Apostrophe = codes::KEY_APOSTROPHE,
    BackSlash = codes::KEY_BACKSLASH,
    Comma = codes::KEY_COMMA,
    Period = codes::KEY_DOT,
    Slash = codes::KEY_SLASH,
    Space = codes::KEY_SPACE,
    /// Caps lock
    Capital = codes::KEY_CAPSLOCK,

    // Navigation block
    Insert = codes::KEY_INSERT,
    Del = codes::KEY_DELETE,
    Home = codes::KEY_HOME,
    End = codes::KEY_END,
    PageUp = codes::KEY_PAGEUP,
    PageDown = codes::KEY_PAGEDOWN,

    // Arrows
    Left = codes::KEY_LEFT,
    Right = codes::KEY_RIGHT,
    Up = codes::KEY_UP,
    Down = codes::KEY_DOWN,
}

/// Coarse category of a [`Key`], used for listings and grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyGroup {
    /// Letters and the digit row
    Alphanumeric,
    /// Escape, F1-F12, Pause and Scroll Lock
    Function,
    /// Arrows and the Home/End/Page block
    Navigation,
    /// Ctrl, Alt, Shift and Caps Lock
    Modifier,
    /// Numeric keypad
    Keypad,
    /// Punctuation, whitespace and editing keys
    Editing,
}

impl fmt::Display for KeyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyGroup::Alphanumeric => "alphanumeric",
            KeyGroup::Function => "function",
            KeyGroup::Navigation => "navigation",
            KeyGroup::Modifier => "modifier",
            KeyGroup::Keypad => "keypad",
            KeyGroup::Editing => "editing",
        };
        f.write_str(name)
    }
}

impl Key {
    /// Highest valid key code: the library's last-key constant.
    ///
    /// Arrays of per-key state sized `Key::NUM + 1` stay correct even if new
    /// keys are mapped later.
    pub const NUM: u32 = codes::KEY_MAX;

    /// Slots needed for one entry per key, indexed by [`Key::index`].
    pub const COUNT: usize = Self::NUM as usize + 1;

    pub const ALL: [Key; 100] = [
        Key::Tilda,
        Key::Digit1,
        Key::Digit2,
        Key::Digit3,
        Key::Digit4,
        Key::Digit5,
        Key::Digit6,
        Key::Digit7,
        Key::Digit8,
        Key::Digit9,
        Key::Digit0,
        Key::Minus,
        Key::Equals,
        Key::Back,
        Key::Q,
        Key::W,
        Key::E,
        Key::R,
        Key::T,
        Key::Y,
        Key::U,
        Key::I,
        Key::O,
        Key::P,
        Key::A,
        Key::S,
        Key::D,
        Key::F,
        Key::G,
        Key::H,
        Key::J,
        Key::K,
        Key::L,
        Key::Z,
        Key::X,
        Key::C,
        Key::V,
        Key::B,
        Key::N,
        Key::M,
        Key::Escape,
        Key::F1,
        Key::F2,
        Key::F3,
        Key::F4,
        Key::F5,
        Key::F6,
        Key::F7,
        Key::F8,
        Key::F9,
        Key::F10,
        Key::F11,
        Key::F12,
        Key::Pause,
        Key::Num0,
        Key::Num1,
        Key::Num2,
        Key::Num3,
        Key::Num4,
        Key::Num5,
        Key::Num6,
        Key::Num7,
        Key::Num8,
        Key::Num9,
        Key::NumLock,
        Key::NumSub,
        Key::NumAdd,
        Key::NumDel,
        Key::NumMul,
        Key::NumDiv,
        Key::NumEnter,
        Key::LControl,
        Key::RControl,
        Key::LAlt,
        Key::RAlt,
        Key::LShift,
        Key::RShift,
        Key::LBracket,
        Key::RBracket,
        Key::Scroll,
        Key::Tab,
        Key::Return,
        Key::Semicolon,
        Key::Apostrophe,
        Key::BackSlash,
        Key::Comma,
        Key::Period,
        Key::Slash,
        Key::Space,
        Key::Capital,
        Key::Insert,
        Key::Del,
        Key::Home,
        Key::End,
        Key::PageUp,
        Key::PageDown,
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
    ];

    const BY_CODE: [Option<Key>; Key::COUNT] = {
        let mut table = [None; Key::COUNT];
        let mut i = 0;
        while i < Key::ALL.len() {
            table[Key::ALL[i] as usize] = Some(Key::ALL[i]);
            i += 1;
        }
        table
    };

    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Array index of this key; equal to its code.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Maps a raw keyboard code back to a [`Key`].
    ///
    /// Codes above [`Key::NUM`] and codes with no named key return `None`.
    pub const fn from_code(code: u32) -> Option<Self> {
        if code > Self::NUM {
            return None;
        }
        Self::BY_CODE[code as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Key::Tilda => "Tilda",
            Key::Digit1 => "1",
            Key::Digit2 => "2",
            Key::Digit3 => "3",
            Key::Digit4 => "4",
            Key::Digit5 => "5",
            Key::Digit6 => "6",
            Key::Digit7 => "7",
            Key::Digit8 => "8",
            Key::Digit9 => "9",
            Key::Digit0 => "0",
            Key::Minus => "Minus",
            Key::Equals => "Equals",
            Key::Back => "Back",
            Key::Q => "Q",
            Key::W => "W",
            Key::E => "E",
            Key::R => "R",
            Key::T => "T",
            Key::Y => "Y",
            Key::U => "U",
            Key::I => "I",
            Key::O => "O",
            Key::P => "P",
            Key::A => "A",
            Key::S => "S",
            Key::D => "D",
            Key::F => "F",
            Key::G => "G",
            Key::H => "H",
            Key::J => "J",
            Key::K => "K",
            Key::L => "L",
            Key::Z => "Z",
            Key::X => "X",
            Key::C => "C",
            Key::V => "V",
            Key::B => "B",
            Key::N => "N",
            Key::M => "M",
            Key::Escape => "Escape",
            Key::F1 => "F1",
            Key::F2 => "F2",
            Key::F3 => "F3",
            Key::F4 => "F4",
            Key::F5 => "F5",
            Key::F6 => "F6",
            Key::F7 => "F7",
            Key::F8 => "F8",
            Key::F9 => "F9",
            Key::F10 => "F10",
            Key::F11 => "F11",
            Key::F12 => "F12",
            Key::Pause => "Pause",
            Key::Num0 => "Num0",
            Key::Num1 => "Num1",
            Key::Num2 => "Num2",
            Key::Num3 => "Num3",
            Key::Num4 => "Num4",
            Key::Num5 => "Num5",
            Key::Num6 => "Num6",
            Key::Num7 => "Num7",
            Key::Num8 => "Num8",
            Key::Num9 => "Num9",
            Key::NumLock => "NumLock",
            Key::NumSub => "NumSub",
            Key::NumAdd => "NumAdd",
            Key::NumDel => "NumDel",
            Key::NumMul => "NumMul",
            Key::NumDiv => "NumDiv",
            Key::NumEnter => "NumEnter",
            Key::LControl => "LControl",
            Key::RControl => "RControl",
            Key::LAlt => "LAlt",
            Key::RAlt => "RAlt",
            Key::LShift => "LShift",
            Key::RShift => "RShift",
            Key::LBracket => "LBracket",
            Key::RBracket => "RBracket",
            Key::Scroll => "Scroll",
            Key::Tab => "Tab",
            Key::Return => "Return",
            Key::Semicolon => "Semicolon",
            Key::Apostrophe => "Apostrophe",
            Key::BackSlash => "BackSlash",
            Key::Comma => "Comma",
            Key::Period => "Period",
            Key::Slash => "Slash",
            Key::Space => "Space",
            Key::Capital => "Capital",
            Key::Insert => "Insert",
            Key::Del => "Del",
            Key::Home => "Home",
            Key::End => "End",
            Key::PageUp => "PageUp",
            Key::PageDown => "PageDown",
            Key::Left => "Left",
            Key::Right => "Right",
            Key::Up => "Up",
            Key::Down => "Down",
        }
    }

    pub const fn group(self) -> KeyGroup {
        match self {
            Key::Digit0
            | Key::Digit1
            | Key::Digit2
            | Key::Digit3
            | Key::Digit4
            | Key::Digit5
            | Key::Digit6
            | Key::Digit7
            | Key::Digit8
            | Key::Digit9
            | Key::Q
            | Key::W
            | Key::E
            | Key::R
            | Key::T
            | Key::Y
            | Key::U
            | Key::I
            | Key::O
            | Key::P
            | Key::A
            | Key::S
            | Key::D
            | Key::F
            | Key::G
            | Key::H
            | Key::J
            | Key::K
            | Key::L
            | Key::Z
            | Key::X
            | Key::C
            | Key::V
            | Key::B
            | Key::N
            | Key::M => KeyGroup::Alphanumeric,

            Key::Escape
            | Key::F1
            | Key::F2
            | Key::F3
            | Key::F4
            | Key::F5
            | Key::F6
            | Key::F7
            | Key::F8
            | Key::F9
            | Key::F10
            | Key::F11
            | Key::F12
            | Key::Pause
            | Key::Scroll => KeyGroup::Function,

            Key::Num0
            | Key::Num1
            | Key::Num2
            | Key::Num3
            | Key::Num4
            | Key::Num5
            | Key::Num6
            | Key::Num7
            | Key::Num8
            | Key::Num9
            | Key::NumLock
            | Key::NumSub
            | Key::NumAdd
            | Key::NumDel
            | Key::NumMul
            | Key::NumDiv
            | Key::NumEnter => KeyGroup::Keypad,

            Key::LControl
            | Key::RControl
            | Key::LAlt
            | Key::RAlt
            | Key::LShift
            | Key::RShift
            | Key::Capital => KeyGroup::Modifier,

            Key::Home
            | Key::End
            | Key::PageUp
            | Key::PageDown
            | Key::Left
            | Key::Right
            | Key::Up
            | Key::Down => KeyGroup::Navigation,

            Key::Tilda
            | Key::Minus
            | Key::Equals
            | Key::Back
            | Key::LBracket
            | Key::RBracket
            | Key::Tab
            | Key::Return
            | Key::Semicolon
            | Key::Apostrophe
            | Key::BackSlash
            | Key::Comma
            | Key::Period
            | Key::Slash
            | Key::Space
            | Key::Insert
            | Key::Del => KeyGroup::Editing,
        }
    }
}

// Codes must stay within the sentinel, and no two keys may share one.
const _: () = {
    let all = Key::ALL;
    let mut i = 0;
    while i < all.len() {
        assert!(all[i] as u32 <= Key::NUM);
        let mut j = i + 1;
        while j < all.len() {
            assert!(all[i] as u32 != all[j] as u32);
            j += 1;
        }
        i += 1;
    }
};

/// Alternative spellings accepted on top of the canonical names.
const ALIASES: &[(&str, Key)] = &[
    ("`", Key::Tilda),
    ("~", Key::Tilda),
    ("Grave", Key::Tilda),
    ("Tilde", Key::Tilda),
    ("Digit1", Key::Digit1),
    ("Digit2", Key::Digit2),
    ("Digit3", Key::Digit3),
    ("Digit4", Key::Digit4),
    ("Digit5", Key::Digit5),
    ("Digit6", Key::Digit6),
    ("Digit7", Key::Digit7),
    ("Digit8", Key::Digit8),
    ("Digit9", Key::Digit9),
    ("Digit0", Key::Digit0),
    ("-", Key::Minus),
    ("=", Key::Equals),
    ("Equal", Key::Equals),
    ("Backspace", Key::Back),
    ("Esc", Key::Escape),
    ("Kp0", Key::Num0),
    ("Kp1", Key::Num1),
    ("Kp2", Key::Num2),
    ("Kp3", Key::Num3),
    ("Kp4", Key::Num4),
    ("Kp5", Key::Num5),
    ("Kp6", Key::Num6),
    ("Kp7", Key::Num7),
    ("Kp8", Key::Num8),
    ("Kp9", Key::Num9),
    ("KpSubtract", Key::NumSub),
    ("KpAdd", Key::NumAdd),
    ("KpDecimal", Key::NumDel),
    ("KpMultiply", Key::NumMul),
    ("KpDivide", Key::NumDiv),
    ("KpEnter", Key::NumEnter),
    ("LeftCtrl", Key::LControl),
    ("RightCtrl", Key::RControl),
    ("LCtrl", Key::LControl),
    ("RCtrl", Key::RControl),
    ("LeftAlt", Key::LAlt),
    ("RightAlt", Key::RAlt),
    ("AltGr", Key::RAlt),
    ("LeftShift", Key::LShift),
    ("RightShift", Key::RShift),
    ("[", Key::LBracket),
    ("]", Key::RBracket),
    ("ScrollLock", Key::Scroll),
    ("Enter", Key::Return),
    (";", Key::Semicolon),
    ("'", Key::Apostrophe),
    ("\\", Key::BackSlash),
    (",", Key::Comma),
    (".", Key::Period),
    ("Dot", Key::Period),
    ("/", Key::Slash),
    ("CapsLock", Key::Capital),
    ("Ins", Key::Insert),
    ("Delete", Key::Del),
    ("PgUp", Key::PageUp),
    ("PgDn", Key::PageDown),
    ("ArrowLeft", Key::Left),
    ("ArrowRight", Key::Right),
    ("ArrowUp", Key::Up),
    ("ArrowDown", Key::Down),
];

impl FromStr for Key {
    type Err = ControlError;

    /// Case-insensitive lookup by canonical name or alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        Key::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(name))
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                    .map(|(_, key)| *key)
            })
            .ok_or_else(|| ControlError::UnknownKey(s.to_string()))
    }
}

impl TryFrom<String> for Key {
    type Error = ControlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<u32> for Key {
    type Error = ControlError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Key::from_code(code).ok_or(ControlError::UnmappedKeyCode(code))
    }
}

impl From<Key> for u32 {
    fn from(key: Key) -> Self {
        key.code()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl Control for Key {
    const COUNT: usize = Key::COUNT;

    fn all() -> &'static [Self] {
        &Key::ALL
    }

    fn code(self) -> u32 {
        Key::code(self)
    }

    fn index(self) -> usize {
        Key::index(self)
    }

    fn from_code(code: u32) -> Option<Self> {
        Key::from_code(code)
    }

    fn name(self) -> &'static str {
        Key::name(self)
    }
}
