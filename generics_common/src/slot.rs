use std::mem;

use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum SlotError {
    #[error("slot is empty")]
    Empty,
}

/// A cell holding at most one value.
///
/// A `Slot` starts empty unless created with [`Slot::with_value`]. Reading an
/// empty slot returns [`SlotError::Empty`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slot<T> {
    value: Option<T>,
}

impl<T> Slot<T> {
    /// Creates a new, empty `Slot`.
    #[inline]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Creates a new `Slot` holding `value`.
    #[inline]
    pub const fn with_value(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Returns `true` if the `Slot` holds no value.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Stores `value`, dropping the previously held value.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Stores `value` and returns the previously held value.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    pub fn get(&self) -> Result<&T, SlotError> {
        self.value.as_ref().ok_or(SlotError::Empty)
    }

    pub fn get_mut(&mut self) -> Result<&mut T, SlotError> {
        self.value.as_mut().ok_or(SlotError::Empty)
    }

    /// Removes and returns the held value, leaving the `Slot` empty.
    pub fn take(&mut self) -> Result<T, SlotError> {
        mem::take(&mut self.value).ok_or(SlotError::Empty)
    }
}

impl<T> Default for Slot<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for Slot<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::with_value(value)
    }
}

/// The add/get interface of a single-value container.
pub trait Backpack<T> {
    fn add(&mut self, obj: T);

    fn get(&self) -> Result<&T, SlotError>;
}

impl<T> Backpack<T> for Slot<T>
where
    T: std::fmt::Debug,
{
    fn add(&mut self, obj: T) {
        tracing::debug!("backpack add {:?}", obj);
        self.set(obj);
    }

    #[inline]
    fn get(&self) -> Result<&T, SlotError> {
        Slot::get(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{Backpack, Slot, SlotError};

    #[test]
    fn set_get() {
        let mut slot = Slot::new();
        slot.set("x");
        assert_eq!(slot.get(), Ok(&"x"));
        // Reading does not empty the slot.
        assert_eq!(slot.get(), Ok(&"x"));
    }

    #[test]
    fn last_write_wins() {
        let mut slot = Slot::new();
        slot.set(1);
        slot.set(2);
        assert_eq!(slot.get(), Ok(&2));

        assert_eq!(slot.replace(3), Some(2));
        assert_eq!(slot.get(), Ok(&3));
    }

    #[test]
    fn empty_get_fails() {
        let slot = Slot::<String>::new();
        assert!(slot.is_empty());
        assert_eq!(slot.get(), Err(SlotError::Empty));
    }

    #[test]
    fn take_empties() {
        let mut slot = Slot::with_value(String::from("hi"));
        assert_eq!(slot.take().unwrap(), "hi");
        assert!(slot.is_empty());
        assert_eq!(slot.take(), Err(SlotError::Empty));
    }

    #[test]
    fn get_mut_modifies() {
        let mut slot = Slot::from(vec![1]);
        slot.get_mut().unwrap().push(2);
        assert_eq!(slot.get().unwrap(), &[1, 2]);

        let mut empty = Slot::<Vec<u8>>::default();
        assert_eq!(empty.get_mut(), Err(SlotError::Empty));
    }

    #[test]
    fn backpack_add_get() {
        fn fill<B>(backpack: &mut B)
        where
            B: Backpack<String>,
        {
            backpack.add("hi".to_owned());
        }

        let mut slot = Slot::new();
        assert_eq!(Backpack::get(&slot), Err(SlotError::Empty));

        fill(&mut slot);
        assert_eq!(Backpack::get(&slot).unwrap(), "hi");
    }
}
