//! Shared surface of [`Key`](super::Key) and [`Button`](super::Button).

use std::fmt;

/// A physical input with a fixed library code and a dense array index.
///
/// Implemented by both enumerations so storage such as
/// [`ControlTable`](super::ControlTable) can be written once.
pub trait Control: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Number of slots needed to index every member.
    const COUNT: usize;

    /// Every member, in declaration order.
    fn all() -> &'static [Self];

    /// Library constant backing this member.
    fn code(self) -> u32;

    /// Position in a `COUNT`-sized array.
    fn index(self) -> usize;

    /// Reverse lookup of [`Control::code`].
    fn from_code(code: u32) -> Option<Self>;

    /// Canonical name, as accepted by `FromStr` and written in config files.
    fn name(self) -> &'static str;
}
