//! Per-control storage sized by the enumeration sentinels.

use super::control::Control;
use super::{Button, Key};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Fixed-length storage with one `T` per control.
///
/// The length is `C::COUNT`, derived from the enumeration's `NUM` sentinel, so
/// every member indexes in bounds. The table is plain data owned by the
/// caller; nothing in this crate writes to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlTable<C, T> {
    slots: Box<[T]>,
    _control: PhantomData<C>,
}

/// Per-key storage, e.g. `KeyTable<bool>` for "is key X pressed".
pub type KeyTable<T> = ControlTable<Key, T>;

/// Per-button storage.
pub type ButtonTable<T> = ControlTable<Button, T>;

impl<C: Control, T: Clone> ControlTable<C, T> {
    /// Creates a table with every slot set to `value`.
    pub fn filled(value: T) -> Self {
        Self {
            slots: vec![value; C::COUNT].into_boxed_slice(),
            _control: PhantomData,
        }
    }
}

impl<C: Control, T: Default> Default for ControlTable<C, T> {
    fn default() -> Self {
        Self {
            slots: (0..C::COUNT).map(|_| T::default()).collect(),
            _control: PhantomData,
        }
    }
}

impl<C: Control, T> ControlTable<C, T> {
    pub fn get(&self, control: C) -> &T {
        &self.slots[control.index()]
    }

    pub fn get_mut(&mut self, control: C) -> &mut T {
        &mut self.slots[control.index()]
    }

    /// Stores `value` for `control`, returning the previous value.
    pub fn set(&mut self, control: C, value: T) -> T {
        std::mem::replace(&mut self.slots[control.index()], value)
    }

    /// Iterates named controls with their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (C, &T)> + '_ {
        C::all()
            .iter()
            .map(move |&control| (control, &self.slots[control.index()]))
    }

    /// Number of slots, always `C::COUNT`.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<C: Control, T: Default> ControlTable<C, T> {
    /// Resets every slot to `T::default()`.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = T::default());
    }
}

impl<C: Control> ControlTable<C, bool> {
    /// Controls whose slot is `true`.
    pub fn active(&self) -> impl Iterator<Item = C> + '_ {
        self.iter()
            .filter_map(|(control, &set)| if set { Some(control) } else { None })
    }

    pub fn any(&self) -> bool {
        self.slots.iter().any(|&set| set)
    }
}

impl<C: Control, T> Index<C> for ControlTable<C, T> {
    type Output = T;

    fn index(&self, control: C) -> &T {
        self.get(control)
    }
}

impl<C: Control, T> IndexMut<C> for ControlTable<C, T> {
    fn index_mut(&mut self, control: C) -> &mut T {
        self.get_mut(control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_sized_by_sentinel() {
        let keys: KeyTable<bool> = KeyTable::default();
        assert_eq!(keys.len(), Key::NUM as usize + 1);

        let buttons: ButtonTable<u8> = ButtonTable::default();
        assert_eq!(buttons.len(), Button::COUNT);
    }

    #[test]
    fn test_every_member_indexes_in_bounds() {
        let mut keys = KeyTable::filled(0u32);
        for key in Key::ALL {
            keys[key] = key.code();
        }
        for key in Key::ALL {
            assert_eq!(keys[key], key.code());
        }

        let mut buttons = ButtonTable::filled(0u32);
        for button in Button::ALL {
            buttons[button] += 1;
        }
        assert!(buttons.iter().all(|(_, &count)| count == 1));
    }

    #[test]
    fn test_pressed_state() {
        let mut pressed: KeyTable<bool> = KeyTable::default();
        assert!(!pressed.any());

        assert!(!pressed.set(Key::W, true));
        pressed[Key::LShift] = true;

        let active: Vec<Key> = pressed.active().collect();
        assert_eq!(active, vec![Key::W, Key::LShift]);

        assert!(pressed.set(Key::W, false));
        pressed.clear();
        assert!(!pressed.any());
    }

    #[test]
    fn test_keys_and_arrows_do_not_alias() {
        // Key::Left and Button::Left live in different tables.
        let mut keys: KeyTable<bool> = KeyTable::default();
        let buttons: ButtonTable<bool> = ButtonTable::default();
        keys[Key::Left] = true;
        assert!(!buttons[Button::Left]);
        assert_eq!(keys.active().collect::<Vec<_>>(), vec![Key::Left]);
    }
}
